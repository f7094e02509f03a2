use crate::{
    BootstrapError, BootstrapPlan, Environment, InstallLayout, Runtime, MODULE_PATH_VAR,
    SEARCH_PATH_VAR,
};
use std::io::Write;

/// Prepares the environment for the runtime and initializes it. Runs once, before anything
/// else in the process, and returns the plan it applied.
pub fn bootstrap<E, R, W>(
    env: &mut E,
    runtime: &R,
    layout: &InstallLayout,
    out: &mut W,
) -> Result<BootstrapPlan, BootstrapError>
where
    E: Environment,
    R: Runtime + ?Sized,
    W: Write,
{
    // Work out the new values from what is currently set.
    let existing = env.var_os(SEARCH_PATH_VAR);
    let plan = BootstrapPlan::new(layout, existing.as_deref());
    tracing::debug!(?layout, "derived install layout");

    apply(env, runtime, &plan, out)?;
    Ok(plan)
}

/// Writes a computed plan into the environment and the runtime, then reports it.
pub fn apply<E, R, W>(
    env: &mut E,
    runtime: &R,
    plan: &BootstrapPlan,
    out: &mut W,
) -> Result<(), BootstrapError>
where
    E: Environment,
    R: Runtime + ?Sized,
    W: Write,
{
    // Set the search paths.
    env.set_var(SEARCH_PATH_VAR, &plan.search_path);
    env.set_var(MODULE_PATH_VAR, &plan.module_path);

    // Tell the runtime where its assemblies and configuration live.
    runtime.set_dirs(&plan.lib_root, &plan.config_root)?;

    report(plan, out)
}

/// Prints the two variables the bootstrap sets.
pub fn report<W: Write>(plan: &BootstrapPlan, out: &mut W) -> Result<(), BootstrapError> {
    writeln!(out, "Using {} {}", SEARCH_PATH_VAR, plan.search_path.to_string_lossy())
        .and_then(|_| {
            writeln!(out, "Using {} {}", MODULE_PATH_VAR, plan.module_path.to_string_lossy())
        })
        .map_err(BootstrapError::Report)
}
