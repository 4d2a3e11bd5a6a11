// crates/starfish-deck/src/types.rs

//! Public, ergonomic data structures for representing a Starfish project.
//!
//! Entities never own each other: a boundary names its material, a source
//! names its material and boundary, and so on. Those names are resolved
//! lazily against the owning list (see [`Project::material`] and friends),
//! so a dangling reference is just data, never a construction error.

use std::collections::BTreeMap;
use std::fmt;

// --- Logical file set ---

/// The primary document. The only file required on input.
pub const PRIMARY_FILE: &str = "starfish.xml";
/// Secondary document holding `<boundary>` definitions.
pub const BOUNDARIES_FILE: &str = "boundaries.xml";
/// Secondary document holding `<material>` definitions.
pub const MATERIALS_FILE: &str = "materials.xml";
/// Secondary document holding `<source>` / `<boundary_source>` definitions.
pub const SOURCES_FILE: &str = "sources.xml";
/// Secondary document holding `<interaction>` definitions.
pub const INTERACTIONS_FILE: &str = "interactions.xml";

/// Secondary files in the order the dialect loads them.
pub const SECONDARY_FILES: [&str; 4] = [
    BOUNDARIES_FILE,
    MATERIALS_FILE,
    SOURCES_FILE,
    INTERACTIONS_FILE,
];

/// A set of named documents: logical file name -> raw bytes.
pub type DeckFiles = BTreeMap<String, Vec<u8>>;

// --- Closed tag sets ---

/// Declares a closed fixed-set tag.
///
/// Every tag also carries an `Other` variant so that foreign spellings found
/// in hand-edited decks survive a parse/generate cycle untouched.
macro_rules! closed_tag {
    (
        $(#[$meta:meta])*
        $name:ident,
        { $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Default)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[doc = concat!("`", $text, "`")]
                $variant,
            )+
            /// A tag outside the closed set, kept verbatim.
            Other(String),
        }

        impl $name {
            /// Every accepted spelling of the closed set.
            pub const KNOWN: &'static [&'static str] = &[$($text),+];

            /// The external spelling of this tag.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $text,)+
                    Self::Other(tag) => tag.as_str(),
                }
            }

            /// Maps an external spelling onto the closed set.
            ///
            /// Matching ignores surrounding whitespace and ASCII case; anything
            /// else lands in `Other` unchanged.
            pub fn from_tag(tag: &str) -> Self {
                let trimmed = tag.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($text) {
                        return Self::$variant;
                    }
                )+
                Self::Other(tag.to_string())
            }

            /// Returns `false` for tags outside the closed set.
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(tag: &str) -> Self {
                Self::from_tag(tag)
            }
        }
    };
}

closed_tag! {
    /// The field solver selected by `<solver type="...">`.
    SolverType,
    {
        #[default]
        Poisson => "poisson",
        ConstantEf => "constant-ef",
        Qn => "qn",
        None => "none",
    }
}

closed_tag! {
    /// The `type` attribute of a `<boundary>`.
    BoundaryType,
    {
        #[default]
        Solid => "solid",
        Virtual => "virtual",
        Dirichlet => "dirichlet",
        Neumann => "neumann",
    }
}

closed_tag! {
    /// The `type` attribute of a `<material>`.
    MaterialType,
    {
        #[default]
        Kinetic => "kinetic",
        BoltzmannElectrons => "boltzmann_electrons",
        Solid => "solid",
    }
}

closed_tag! {
    /// The `type` attribute of a `<source>` or `<boundary_source>`.
    SourceType,
    {
        #[default]
        Volume => "volume",
        Preload => "preload",
        Maxwellian => "maxwellian",
        Uniform => "uniform",
        Cosine => "cosine",
        Ambient => "ambient",
        Thermionic => "thermionic",
    }
}

closed_tag! {
    /// The `type` attribute of an `<interaction>`.
    InteractionType,
    {
        #[default]
        SurfaceHit => "surface_hit",
        Dsmc => "dsmc",
        Mcc => "mcc",
        Chemistry => "chemistry",
        Sputtering => "sputtering",
    }
}

// --- Root Project ---

/// A complete simulation project: global settings plus the entity lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Project {
    pub settings: GlobalSettings,
    pub domain: DomainSettings,
    pub boundaries: Vec<Boundary>,
    pub materials: Vec<Material>,
    pub sources: Vec<Source>,
    pub interactions: Vec<Interaction>,
}

impl Project {
    /// Looks up a boundary by name. Duplicates resolve to the first match.
    pub fn boundary(&self, name: &str) -> Option<&Boundary> {
        self.boundaries.iter().find(|b| b.name == name)
    }

    /// Looks up a material by name. Duplicates resolve to the first match.
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.name == name)
    }

    /// Looks up a source by name. Duplicates resolve to the first match.
    pub fn source(&self, name: &str) -> Option<&Source> {
        self.sources.iter().find(|s| s.name == name)
    }

    /// Looks up an interaction by name. Duplicates resolve to the first match.
    pub fn interaction(&self, name: &str) -> Option<&Interaction> {
        self.interactions.iter().find(|i| i.name == name)
    }
}

// --- Global Settings ---

/// Run-wide settings read from `<time>`, `<solver>`, `<starfish>` and the
/// output-related elements of the primary document.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalSettings {
    /// `<time><num_it>`
    pub iterations: i64,
    /// `<time><dt>`
    pub time_step: f64,
    /// `<time><steady_state>`
    pub steady_state: Option<i64>,
    pub solver: SolverSettings,
    /// `<starfish max_cores="...">`
    pub max_cores: Option<i64>,
    /// `<starfish randomize="...">`
    pub randomize: Option<bool>,
    pub restart: Option<RestartSettings>,
    /// Top-level `<output>` elements, in document order.
    pub outputs: Vec<OutputFile>,
    pub averaging: Option<AveragingSettings>,
    pub animation: Option<AnimationSettings>,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            iterations: 1000,
            time_step: 1e-6,
            steady_state: None,
            solver: SolverSettings::default(),
            max_cores: None,
            randomize: None,
            restart: None,
            outputs: Vec::new(),
            averaging: None,
            animation: None,
        }
    }
}

/// The `<solver>` block. Every parameter is optional whatever the type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolverSettings {
    pub solver_type: SolverType,
    pub method: Option<String>,
    /// Reference density (`n0`).
    pub n0: Option<f64>,
    /// Reference electron temperature (`Te0`).
    pub te0: Option<f64>,
    /// Reference potential (`phi0`).
    pub phi0: Option<f64>,
    pub max_it: Option<i64>,
    pub nl_max_it: Option<i64>,
    pub tol: Option<f64>,
    pub nl_tol: Option<f64>,
    pub linear: Option<bool>,
    pub initial_only: Option<bool>,
    /// Field components for the `constant-ef` solver.
    pub comps: Option<String>,
}

/// The `<restart>` block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RestartSettings {
    pub it_save: Option<i64>,
    pub save: Option<bool>,
    pub load: Option<bool>,
    pub nt_add: Option<i64>,
}

/// An `<output>` element describing one results file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputFile {
    /// `type` attribute (e.g. `2D`, `boundaries`, `particles`).
    pub output_type: String,
    pub file_name: String,
    pub format: Option<String>,
    /// Comma-separated `<scalars>` list.
    pub scalars: Vec<String>,
    /// Raw `<vectors>` text, e.g. `[efi, efj]`.
    pub vectors: Option<String>,
}

/// The `<averaging>` block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AveragingSettings {
    pub frequency: Option<i64>,
    pub start_it: Option<i64>,
    pub variables: Vec<String>,
}

/// The `<animation>` block with its nested outputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimationSettings {
    pub start_it: Option<i64>,
    pub frequency: Option<i64>,
    pub outputs: Vec<OutputFile>,
}

// --- Domain ---

/// The `<domain>` block and the boundary transform.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainSettings {
    /// Coordinate system tag (`xy`, `rz`, ...).
    pub coordinates: String,
    /// Optional `<world_box>` as a flat list of coordinates.
    pub world_box: Option<Vec<f64>>,
    pub mesh: MeshSettings,
    /// `<mesh-bc>` entries, one per wall.
    pub mesh_bcs: Vec<MeshBoundaryCondition>,
    /// `<transform>` found in a boundaries container.
    pub transform: Option<BoundaryTransform>,
}

impl Default for DomainSettings {
    fn default() -> Self {
        Self {
            coordinates: "xy".to_string(),
            world_box: None,
            mesh: MeshSettings::default(),
            mesh_bcs: Vec::new(),
            transform: None,
        }
    }
}

/// The `<mesh>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshSettings {
    pub mesh_type: String,
    pub name: String,
    /// An empty list is not written, so it reads back as the default origin.
    pub origin: Vec<f64>,
    /// Same as `origin`: empty reads back as the default.
    pub spacing: Vec<f64>,
    /// Same as `origin`: empty reads back as the default.
    pub nodes: Vec<i64>,
}

impl Default for MeshSettings {
    fn default() -> Self {
        Self {
            mesh_type: "uniform".to_string(),
            name: "mesh".to_string(),
            origin: vec![0.0, 0.0],
            spacing: vec![0.02, 0.02],
            nodes: vec![21, 11],
        }
    }
}

/// A `<mesh-bc wall="..." type="..." value="..."/>` element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshBoundaryCondition {
    pub wall: String,
    pub bc_type: String,
    pub value: Option<String>,
}

/// Geometric transform applied to every boundary when loading.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundaryTransform {
    pub scaling: Option<Vec<f64>>,
    pub translation: Option<Vec<f64>>,
    pub reverse: Option<bool>,
}

// --- Boundaries ---

/// A 2-D point of a boundary polyline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The canonical geometry given to boundaries that define none.
pub fn unit_square() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ]
}

/// How a boundary's shape is expressed.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryGeometry {
    /// An SVG-style path string, kept opaque. Surrounding whitespace is
    /// trimmed on input, and a blank path reads back as the unit square.
    Path(String),
    /// Literal `<point>` entries.
    Points(Vec<Point>),
}

impl Default for BoundaryGeometry {
    fn default() -> Self {
        BoundaryGeometry::Points(Vec::new())
    }
}

/// A boundary value before normalization to its stored string form.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryValue {
    Number(f64),
    Text(String),
}

impl BoundaryValue {
    /// Normalizes to the stored representation. Numbers use their default
    /// textual form, so `-100.0` becomes `"-100"`.
    pub fn into_canonical(self) -> String {
        match self {
            BoundaryValue::Number(n) => n.to_string(),
            BoundaryValue::Text(t) => t,
        }
    }
}

impl From<f64> for BoundaryValue {
    fn from(n: f64) -> Self {
        BoundaryValue::Number(n)
    }
}

impl From<i64> for BoundaryValue {
    fn from(n: i64) -> Self {
        BoundaryValue::Text(n.to_string())
    }
}

impl From<&str> for BoundaryValue {
    fn from(t: &str) -> Self {
        BoundaryValue::Text(t.to_string())
    }
}

impl From<String> for BoundaryValue {
    fn from(t: String) -> Self {
        BoundaryValue::Text(t)
    }
}

/// A `<boundary>` definition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Boundary {
    /// Identifier; unique within a project by convention only. A blank name
    /// reads back as `boundary_<index>`.
    pub name: String,
    pub boundary_type: BoundaryType,
    /// Always a string, whatever the origin (see [`BoundaryValue`]).
    pub value: Option<String>,
    pub reverse: Option<bool>,
    /// Name of the associated material.
    pub material: Option<String>,
    /// `<temp>` spelling.
    pub temp: Option<f64>,
    /// `<temperature>` spelling. Kept apart from `temp`.
    pub temperature: Option<f64>,
    pub geometry: BoundaryGeometry,
}

impl Boundary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Stores a numeric or textual value in canonical string form.
    pub fn set_value(&mut self, value: impl Into<BoundaryValue>) {
        self.value = Some(value.into().into_canonical());
    }

    /// The SVG path, if the geometry is expressed as one.
    pub fn path(&self) -> Option<&str> {
        match &self.geometry {
            BoundaryGeometry::Path(p) => Some(p),
            BoundaryGeometry::Points(_) => None,
        }
    }

    /// The literal points; empty for path geometry.
    pub fn points(&self) -> &[Point] {
        match &self.geometry {
            BoundaryGeometry::Path(_) => &[],
            BoundaryGeometry::Points(points) => points,
        }
    }
}

// --- Materials ---

/// Fields meaningful for `kinetic` materials.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KineticProperties {
    /// Molecular weight in AMU (`molwt`).
    pub molwt: Option<f64>,
    /// Mass in kg (`mass`), the alternative to `molwt`.
    pub mass: Option<f64>,
    /// Specific (statistical) weight (`spwt`).
    pub spwt: Option<f64>,
    /// Initial condition string (`init`).
    pub init: Option<String>,
    pub ref_temp: Option<f64>,
    pub visc_temp_index: Option<f64>,
    pub vss_alpha: Option<f64>,
    /// Molecular diameter (`diam`).
    pub diam: Option<f64>,
    pub ionization_energy: Option<f64>,
}

/// Fields meaningful for `boltzmann_electrons` materials.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoltzmannProperties {
    pub model: Option<String>,
    /// Electron temperature in eV (`kTe0`).
    pub kte0: Option<f64>,
}

/// Fields meaningful for `solid` materials.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolidProperties {
    pub density: Option<f64>,
    pub thermal_conductivity: Option<f64>,
    pub specific_heat: Option<f64>,
}

/// The type tag of a material together with its type-specific field group.
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialProperties {
    Kinetic(KineticProperties),
    BoltzmannElectrons(BoltzmannProperties),
    Solid(SolidProperties),
    /// Unknown type tag; every type-specific field goes to the side-table.
    Other(String),
}

impl Default for MaterialProperties {
    fn default() -> Self {
        MaterialProperties::Kinetic(KineticProperties::default())
    }
}

impl MaterialProperties {
    /// An empty field group for the given type.
    pub fn for_type(material_type: MaterialType) -> Self {
        match material_type {
            MaterialType::Kinetic => Self::Kinetic(KineticProperties::default()),
            MaterialType::BoltzmannElectrons => {
                Self::BoltzmannElectrons(BoltzmannProperties::default())
            }
            MaterialType::Solid => Self::Solid(SolidProperties::default()),
            MaterialType::Other(tag) => Self::Other(tag),
        }
    }

    pub fn material_type(&self) -> MaterialType {
        match self {
            Self::Kinetic(_) => MaterialType::Kinetic,
            Self::BoltzmannElectrons(_) => MaterialType::BoltzmannElectrons,
            Self::Solid(_) => MaterialType::Solid,
            Self::Other(tag) => MaterialType::Other(tag.clone()),
        }
    }
}

/// A `<material>` definition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Material {
    pub name: String,
    /// Charge number; always emitted.
    pub charge: f64,
    pub work_function: Option<f64>,
    pub secondary_emission_yield: Option<f64>,
    pub properties: MaterialProperties,
    /// Fields belonging to another type's group, kept verbatim by element
    /// name so that mixed hand-edited definitions survive a round trip.
    ///
    /// A key from the material's own group is written only when the typed
    /// field is unset, and reads back into that typed field.
    pub foreign: BTreeMap<String, String>,
}

impl Material {
    pub fn new(name: impl Into<String>, material_type: MaterialType) -> Self {
        Self {
            name: name.into(),
            properties: MaterialProperties::for_type(material_type),
            ..Default::default()
        }
    }

    pub fn material_type(&self) -> MaterialType {
        self.properties.material_type()
    }
}

// --- Sources ---

/// Which element spelling a source uses in the dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// `<source>`: volume sources and preloads.
    #[default]
    Volume,
    /// `<boundary_source>`: injection from a boundary.
    Boundary,
}

impl SourceKind {
    /// The element name used for this kind.
    pub fn element_name(self) -> &'static str {
        match self {
            SourceKind::Volume => "source",
            SourceKind::Boundary => "boundary_source",
        }
    }

    /// The type a source of this kind gets when the attribute is missing.
    pub fn default_type(self) -> SourceType {
        match self {
            SourceKind::Volume => SourceType::Volume,
            SourceKind::Boundary => SourceType::Uniform,
        }
    }
}

/// Drift velocity: a scalar speed or a raw vector expression.
///
/// A `Vector` whose text is a single number reads back as `Scalar`.
#[derive(Debug, Clone, PartialEq)]
pub enum DriftVelocity {
    Scalar(f64),
    Vector(String),
}

/// A `<source>` or `<boundary_source>` definition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Source {
    pub name: String,
    pub kind: SourceKind,
    pub source_type: SourceType,
    pub material: Option<String>,
    pub boundary: Option<String>,
    pub region: Option<String>,
    pub rate: Option<f64>,
    pub temperature: Option<f64>,
    /// Mass flow rate (`mdot`).
    pub mdot: Option<f64>,
    pub v_drift: Option<DriftVelocity>,
    /// Enforced quantity for ambient sources (e.g. `density`, `pressure`).
    pub enforce: Option<String>,
    pub density: Option<f64>,
    pub total_pressure: Option<f64>,
}

impl Source {
    pub fn new(name: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            name: name.into(),
            kind,
            source_type: kind.default_type(),
            ..Default::default()
        }
    }
}

// --- Interactions ---

/// An `<interaction>` definition.
///
/// Name lists are written comma-separated; see `materials`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Interaction {
    pub name: String,
    pub interaction_type: InteractionType,
    /// Participating material names. Written comma-separated, so a name
    /// containing a comma reads back as two names.
    pub materials: Vec<String>,
    /// Probabilities (`prob`).
    pub prob: Vec<f64>,
    /// Accommodation coefficient (`c_accom`).
    pub c_accom: Option<f64>,
    /// Restitution coefficient (`c_rest`).
    pub c_rest: Option<f64>,
    /// Collision pair, e.g. `O,O+`.
    pub pair: Option<String>,
    /// Cross-section model tag.
    pub sigma: Option<String>,
    pub sigma_coeffs: Vec<f64>,
    /// Reaction sources.
    pub sources: Vec<String>,
    /// Reaction products.
    pub products: Vec<String>,
    /// Rate-law tag.
    pub rate: Option<String>,
}

impl Interaction {
    pub fn new(name: impl Into<String>, interaction_type: InteractionType) -> Self {
        Self {
            name: name.into(),
            interaction_type,
            ..Default::default()
        }
    }
}
