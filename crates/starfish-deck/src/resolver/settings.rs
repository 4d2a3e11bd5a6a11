// crates/starfish-deck/src/resolver/settings.rs

use super::utils::{Scope, boolean, name_list, owned_text, text};
use crate::error::DeckError;
use crate::model;
use crate::types;

/// Resolves the run-wide settings from the primary document.
pub(super) fn resolve_settings(
    doc: &model::SimulationDocument,
    scope: &Scope<'_>,
) -> Result<types::GlobalSettings, DeckError> {
    let mut settings = types::GlobalSettings::default();

    if let Some(time) = &doc.time {
        let scope = scope.nested("time");
        if let Some(num_it) = scope.integer("num_it", time.num_it.as_ref())? {
            settings.iterations = num_it;
        }
        if let Some(dt) = scope.float("dt", time.dt.as_ref())? {
            settings.time_step = dt;
        }
        settings.steady_state = scope.integer("steady_state", time.steady_state.as_ref())?;
    }

    if let Some(solver) = &doc.solver {
        settings.solver = resolve_solver(solver, &scope.nested("solver"))?;
    }

    if let Some(starfish) = &doc.starfish {
        let scope = scope.nested("starfish");
        settings.max_cores = scope.integer("@max_cores", starfish.max_cores.as_ref())?;
        settings.randomize = boolean(starfish.randomize.as_ref());
    }

    settings.restart = doc
        .restart
        .as_ref()
        .map(|r| resolve_restart(r, &scope.nested("restart")))
        .transpose()?;

    settings.outputs = doc
        .output
        .iter()
        .map(resolve_output)
        .collect();

    settings.averaging = doc
        .averaging
        .as_ref()
        .map(|a| resolve_averaging(a, &scope.nested("averaging")))
        .transpose()?;

    settings.animation = doc
        .animation
        .as_ref()
        .map(|a| resolve_animation(a, &scope.nested("animation")))
        .transpose()?;

    Ok(settings)
}

/// Parses a `model::SolverElement` into `types::SolverSettings`.
///
/// All parameters are attempted whatever the solver type; a parameter that
/// does not apply to the selected solver is simply carried along.
fn resolve_solver(
    model: &model::SolverElement,
    scope: &Scope<'_>,
) -> Result<types::SolverSettings, DeckError> {
    Ok(types::SolverSettings {
        solver_type: text(model.solver_type.as_ref())
            .map(types::SolverType::from_tag)
            .unwrap_or_default(),
        method: owned_text(model.method.as_ref()),
        n0: scope.float("n0", model.n0.as_ref())?,
        te0: scope.float("Te0", model.te0.as_ref())?,
        phi0: scope.float("phi0", model.phi0.as_ref())?,
        max_it: scope.integer("max_it", model.max_it.as_ref())?,
        nl_max_it: scope.integer("nl_max_it", model.nl_max_it.as_ref())?,
        tol: scope.float("tol", model.tol.as_ref())?,
        nl_tol: scope.float("nl_tol", model.nl_tol.as_ref())?,
        linear: boolean(model.linear.as_ref()),
        initial_only: boolean(model.initial_only.as_ref()),
        comps: owned_text(model.comps.as_ref()),
    })
}

fn resolve_restart(
    model: &model::RestartElement,
    scope: &Scope<'_>,
) -> Result<types::RestartSettings, DeckError> {
    Ok(types::RestartSettings {
        it_save: scope.integer("it_save", model.it_save.as_ref())?,
        save: boolean(model.save.as_ref()),
        load: boolean(model.load.as_ref()),
        nt_add: scope.integer("nt_add", model.nt_add.as_ref())?,
    })
}

fn resolve_output(model: &model::OutputElement) -> types::OutputFile {
    types::OutputFile {
        output_type: owned_text(model.output_type.as_ref()).unwrap_or_default(),
        file_name: owned_text(model.file_name.as_ref()).unwrap_or_default(),
        format: owned_text(model.format.as_ref()),
        scalars: name_list(model.scalars.as_ref()),
        vectors: owned_text(model.vectors.as_ref()),
    }
}

fn resolve_averaging(
    model: &model::AveragingElement,
    scope: &Scope<'_>,
) -> Result<types::AveragingSettings, DeckError> {
    Ok(types::AveragingSettings {
        frequency: scope.integer("frequency", model.frequency.as_ref())?,
        start_it: scope.integer("start_it", model.start_it.as_ref())?,
        variables: name_list(model.variables.as_ref()),
    })
}

fn resolve_animation(
    model: &model::AnimationElement,
    scope: &Scope<'_>,
) -> Result<types::AnimationSettings, DeckError> {
    Ok(types::AnimationSettings {
        start_it: scope.integer("@start_it", model.start_it.as_ref())?,
        frequency: scope.integer("@frequency", model.frequency.as_ref())?,
        outputs: model.output.iter().map(resolve_output).collect(),
    })
}
