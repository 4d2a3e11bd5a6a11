// crates/starfish-deck/src/builder/settings.rs

use super::{format_bool, format_names, format_number, non_empty};
use crate::model;
use crate::types;

/// Builds `<time>`. Iterations and time step are always written.
pub(super) fn build_model_time(settings: &types::GlobalSettings) -> model::TimeElement {
    model::TimeElement {
        num_it: Some(settings.iterations.to_string()),
        dt: Some(format_number(settings.time_step)),
        steady_state: settings.steady_state.map(|v| v.to_string()),
    }
}

/// Builds `<solver>`. Every parameter that is set is written, whatever the
/// solver type.
pub(super) fn build_model_solver(solver: &types::SolverSettings) -> model::SolverElement {
    model::SolverElement {
        solver_type: Some(solver.solver_type.to_string()),
        method: solver.method.clone(),
        n0: solver.n0.map(format_number),
        te0: solver.te0.map(format_number),
        phi0: solver.phi0.map(format_number),
        max_it: solver.max_it.map(|v| v.to_string()),
        nl_max_it: solver.nl_max_it.map(|v| v.to_string()),
        tol: solver.tol.map(format_number),
        nl_tol: solver.nl_tol.map(format_number),
        linear: solver.linear.map(format_bool),
        initial_only: solver.initial_only.map(format_bool),
        comps: solver.comps.clone(),
    }
}

/// Builds `<starfish>`, or nothing when neither attribute is set.
pub(super) fn build_model_starfish(
    settings: &types::GlobalSettings,
) -> Option<model::StarfishElement> {
    if settings.max_cores.is_none() && settings.randomize.is_none() {
        return None;
    }
    Some(model::StarfishElement {
        max_cores: settings.max_cores.map(|v| v.to_string()),
        randomize: settings.randomize.map(format_bool),
    })
}

pub(super) fn build_model_restart(restart: &types::RestartSettings) -> model::RestartElement {
    model::RestartElement {
        it_save: restart.it_save.map(|v| v.to_string()),
        save: restart.save.map(format_bool),
        load: restart.load.map(format_bool),
        nt_add: restart.nt_add.map(|v| v.to_string()),
    }
}

pub(super) fn build_model_output(output: &types::OutputFile) -> model::OutputElement {
    model::OutputElement {
        output_type: non_blank(&output.output_type),
        file_name: non_blank(&output.file_name),
        format: output.format.clone(),
        scalars: non_empty(&output.scalars, format_names),
        vectors: output.vectors.clone(),
    }
}

pub(super) fn build_model_averaging(
    averaging: &types::AveragingSettings,
) -> model::AveragingElement {
    model::AveragingElement {
        frequency: averaging.frequency.map(|v| v.to_string()),
        start_it: averaging.start_it.map(|v| v.to_string()),
        variables: non_empty(&averaging.variables, format_names),
    }
}

pub(super) fn build_model_animation(
    animation: &types::AnimationSettings,
) -> model::AnimationElement {
    model::AnimationElement {
        start_it: animation.start_it.map(|v| v.to_string()),
        frequency: animation.frequency.map(|v| v.to_string()),
        output: animation.outputs.iter().map(build_model_output).collect(),
    }
}

fn non_blank(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
