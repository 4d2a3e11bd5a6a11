// crates/starfish-deck/tests/parsing.rs

use starfish_deck::{
    BOUNDARIES_FILE, BoundaryGeometry, BoundaryType, DeckFiles, DriftVelocity, INTERACTIONS_FILE,
    MATERIALS_FILE, Material, MaterialProperties, MaterialType, PRIMARY_FILE, Point, Project,
    SECONDARY_FILES, SOURCES_FILE, SolverType, SourceKind, SourceType, generate, parse, template,
};
use std::fs;
use std::path::PathBuf;

/// Helper function to load every document of a deck from `tests/data/<deck>/`.
fn load_test_deck(deck: &str) -> DeckFiles {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.push("tests");
    dir.push("data");
    dir.push(deck);

    let mut files = DeckFiles::new();
    for name in std::iter::once(PRIMARY_FILE).chain(SECONDARY_FILES) {
        let path = dir.join(name);
        if path.exists() {
            let bytes = fs::read(&path)
                .unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e));
            files.insert(name.to_string(), bytes);
        }
    }
    files
}

fn deck(entries: &[(&str, &str)]) -> DeckFiles {
    entries
        .iter()
        .map(|(name, xml)| (name.to_string(), xml.as_bytes().to_vec()))
        .collect()
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Loads the full fixture deck and checks each entity kind.
#[test]
fn test_parse_fixture_deck() {
    init_logger();
    let project = parse(&load_test_deck("channel")).expect("Failed to parse fixture deck");

    // 1. Global settings
    let settings = &project.settings;
    assert_eq!(settings.iterations, 400);
    assert_eq!(settings.time_step, 5e-7);
    assert_eq!(settings.steady_state, Some(300));
    assert_eq!(settings.solver.solver_type, SolverType::Qn);
    assert_eq!(settings.solver.max_it, Some(10000));
    assert_eq!(settings.solver.tol, Some(1e-4));
    assert_eq!(settings.randomize, Some(true));
    assert_eq!(settings.outputs.len(), 1);
    assert_eq!(settings.outputs[0].file_name, "results/field.vts");
    assert_eq!(
        settings.averaging.as_ref().map(|a| a.variables.clone()),
        Some(vec!["phi".to_string(), "nd.O+".to_string()])
    );

    // 2. Domain
    let domain = &project.domain;
    assert_eq!(domain.coordinates, "xy");
    assert_eq!(domain.mesh.name, "mesh1");
    assert_eq!(domain.mesh.origin, vec![-0.1, 0.0]);
    assert_eq!(domain.mesh.spacing, vec![5e-3, 5e-3]);
    assert_eq!(domain.mesh.nodes, vec![81, 41]);
    assert_eq!(domain.mesh_bcs.len(), 2);

    // 3. Boundaries
    let plate = project.boundary("plate").expect("plate boundary");
    assert_eq!(plate.boundary_type, BoundaryType::Dirichlet);
    assert_eq!(plate.value.as_deref(), Some("-100"));
    assert_eq!(plate.material.as_deref(), Some("SS"));
    assert_eq!(plate.temperature, Some(300.0));
    assert_eq!(plate.points().len(), 4);
    assert_eq!(plate.points()[2], Point::new(0.05, 0.02));

    let inlet = project.boundary("inlet").expect("inlet boundary");
    assert_eq!(inlet.boundary_type, BoundaryType::Virtual);
    assert_eq!(inlet.reverse, Some(true));
    assert_eq!(inlet.path(), Some("M -0.1 0.2 L -0.1 0"));

    // 4. Materials: external file first, then the inline block.
    let names: Vec<&str> = project.materials.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["O+", "SS", "e-"]);
    let oxygen = project.material("O+").unwrap();
    assert_eq!(oxygen.charge, 1.0);
    match &oxygen.properties {
        MaterialProperties::Kinetic(k) => {
            assert_eq!(k.molwt, Some(16.0));
            assert_eq!(k.spwt, Some(200.0));
        }
        other => panic!("expected kinetic properties, got {:?}", other),
    }
    let steel = project.material("SS").unwrap();
    assert_eq!(steel.material_type(), MaterialType::Solid);
    assert_eq!(steel.foreign.get("molwt").map(String::as_str), Some("52.3"));
    assert_eq!(
        project.material("e-").unwrap().material_type(),
        MaterialType::BoltzmannElectrons
    );

    // 5. Sources, in document order
    assert_eq!(project.sources.len(), 2);
    let inlet = &project.sources[0];
    assert_eq!(inlet.kind, SourceKind::Boundary);
    assert_eq!(inlet.boundary.as_deref(), Some("inlet"));
    assert_eq!(inlet.v_drift, Some(DriftVelocity::Scalar(7000.0)));
    assert_eq!(project.sources[1].source_type, SourceType::Preload);

    // 6. Interactions
    let hit = project.interaction("plate_hit").unwrap();
    assert_eq!(hit.materials, vec!["O+", "SS"]);
    assert_eq!(hit.prob, vec![1.0]);

    // The fixture is consistent.
    assert!(project.validate().is_empty(), "{:?}", project.validate());
}

/// This test validates the full "round-trip" capability.
/// 1. Parse the fixture deck
/// 2. Generate a new deck from the project
/// 3. Parse the generated deck
/// 4. Assert the two projects are identical.
#[test]
fn test_round_trip_fixture_deck() {
    init_logger();
    let original = parse(&load_test_deck("channel")).expect("Failed to parse fixture deck");

    let generated = generate(&original).expect("Failed to generate deck");
    for name in std::iter::once(PRIMARY_FILE).chain(SECONDARY_FILES) {
        assert!(generated.contains_key(name), "missing {}", name);
    }

    let reparsed = parse(&generated).expect("Failed to parse generated deck");
    assert_eq!(original, reparsed);
}

#[test]
fn test_round_trip_template() {
    let files = generate(&template()).unwrap();
    assert_eq!(parse(&files).unwrap(), template());
}

#[test]
fn test_round_trip_built_project() {
    let mut project = Project::default();
    project.settings.solver.solver_type = SolverType::from_tag("SOR");
    project.settings.max_cores = Some(8);
    project.domain.world_box = Some(vec![0.0, 0.0, 1.5e-3, 2.5e20]);

    let mut plate = starfish_deck::Boundary::new("plate");
    plate.set_value(-100.0);
    plate.temp = Some(273.15);
    plate.geometry = BoundaryGeometry::Points(vec![Point::new(1e-7, 0.3), Point::new(2.0, 1e16)]);
    project.boundaries.push(plate);

    let mut gas = Material::new("Xe", MaterialType::Kinetic);
    gas.foreign.insert("density".to_string(), "12".to_string());
    project.materials.push(gas);
    project.materials.push(Material::new("wall", MaterialType::from_tag("ceramic")));

    let mut source = starfish_deck::Source::new("beam", SourceKind::Boundary);
    source.v_drift = Some(DriftVelocity::Vector("[1, 0]".to_string()));
    project.sources.push(source);

    let files = generate(&project).unwrap();
    assert_eq!(parse(&files).unwrap(), project);
}

/// A primary document holding only an empty root gives the template project.
#[test]
fn test_empty_root_equals_template() {
    let files = deck(&[(PRIMARY_FILE, "<simulation/>")]);
    assert_eq!(parse(&files).unwrap(), template());

    // The root name is not checked.
    let files = deck(&[(PRIMARY_FILE, "<starfish_input></starfish_input>")]);
    assert_eq!(parse(&files).unwrap(), template());
}

#[test]
fn test_inline_and_external_materials_are_concatenated() {
    let files = deck(&[
        (
            PRIMARY_FILE,
            r#"<simulation><materials><material name="O" type="kinetic"/></materials></simulation>"#,
        ),
        (
            MATERIALS_FILE,
            r#"<materials><material name="O" type="kinetic"><charge>1</charge></material></materials>"#,
        ),
    ]);

    let project = parse(&files).unwrap();
    assert_eq!(project.materials.len(), 2);
    // File entries come first; lookups return the first match.
    assert_eq!(project.materials[0].charge, 1.0);
    assert_eq!(project.materials[1].charge, 0.0);
    assert_eq!(project.material("O").unwrap().charge, 1.0);
    assert_eq!(project.validate().len(), 1);
}

#[test]
fn test_inline_containers_of_every_kind() {
    let files = deck(&[
        (
            PRIMARY_FILE,
            r#"<simulation>
                 <boundaries><boundary name="b"><point>0,0</point><point>1,0</point></boundary></boundaries>
                 <sources><source name="s"/></sources>
                 <interactions><interaction name="i" type="dsmc"/></interactions>
               </simulation>"#,
        ),
        (BOUNDARIES_FILE, "<boundaries/>"),
        (SOURCES_FILE, "<sources/>"),
        (INTERACTIONS_FILE, "<interactions/>"),
    ]);

    let project = parse(&files).unwrap();
    assert_eq!(project.boundaries[0].name, "b");
    assert_eq!(project.sources[0].name, "s");
    assert_eq!(project.interactions[0].name, "i");
}

/// Values that the deck text cannot tell apart come back in their
/// normalized form.
#[test]
fn test_round_trip_normalizations() {
    let mut project = Project::default();
    project.domain.mesh.origin.clear();

    let mut unnamed = starfish_deck::Boundary::new("");
    unnamed.geometry = BoundaryGeometry::Path("  M 0 0 L 1 0  ".to_string());
    project.boundaries.push(unnamed);

    let mut gas = Material::new("Xe", MaterialType::Kinetic);
    gas.foreign.insert("molwt".to_string(), "131".to_string());
    project.materials.push(gas);

    let mut beam = starfish_deck::Source::new("beam", SourceKind::Boundary);
    beam.v_drift = Some(DriftVelocity::Vector("5000".to_string()));
    project.sources.push(beam);

    let mut ionize = starfish_deck::Interaction::new(
        "ionize",
        starfish_deck::InteractionType::Chemistry,
    );
    ionize.materials = vec!["a,b".to_string()];
    project.interactions.push(ionize);

    let reparsed = parse(&generate(&project).unwrap()).unwrap();

    assert_eq!(reparsed.domain.mesh.origin, template().domain.mesh.origin);
    assert_eq!(reparsed.boundaries[0].name, "boundary_0");
    assert_eq!(reparsed.boundaries[0].path(), Some("M 0 0 L 1 0"));
    let gas = reparsed.material("Xe").unwrap();
    assert!(gas.foreign.is_empty());
    match &gas.properties {
        MaterialProperties::Kinetic(k) => assert_eq!(k.molwt, Some(131.0)),
        other => panic!("expected kinetic properties, got {:?}", other),
    }
    assert_eq!(reparsed.sources[0].v_drift, Some(DriftVelocity::Scalar(5000.0)));
    assert_eq!(reparsed.interactions[0].materials, vec!["a", "b"]);
}
