mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use lgm_core::{
    bootstrap, default_entry_assembly, default_runtime_library, report, BootstrapPlan,
    Environment, InstallLayout, InstallRoot, MonoRuntime, ProcessEnvironment, SEARCH_PATH_VAR,
};
use std::{
    io::{self, Write},
    process::ExitCode,
};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    // Diagnostics go to stderr so stdout only carries what the bootstrap reports.
    let env_filter =
        EnvFilter::try_from_env("LONGOMATCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn install_root(cli: &Cli) -> Result<InstallRoot, lgm_core::BootstrapError> {
    match &cli.install_root {
        Some(path) => InstallRoot::new(path),
        None => InstallRoot::detect(),
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    // Work out where we are installed. Nothing else can happen without this.
    let root = install_root(&cli).context("cannot determine the installation directory")?;
    let layout = InstallLayout::new(&root);
    let mut env = ProcessEnvironment;

    // On a dry run just show what would be set.
    if cli.dry_run {
        let plan = BootstrapPlan::new(&layout, env.var_os(SEARCH_PATH_VAR).as_deref());
        let mut stdout = io::stdout().lock();
        report(&plan, &mut stdout)?;
        writeln!(
            stdout,
            "Using runtime dirs {} {}",
            plan.lib_root.display(),
            plan.config_root.display()
        )?;
        return Ok(ExitCode::SUCCESS);
    }

    // Load the runtime shipped with the package.
    let runtime_library = cli
        .runtime_library
        .unwrap_or_else(|| default_runtime_library(&root));
    let runtime = MonoRuntime::load(&runtime_library)
        .with_context(|| format!("cannot start the runtime from {}", runtime_library.display()))?;

    // Set up the environment and initialize the runtime.
    bootstrap(&mut env, &runtime, &layout, &mut io::stdout().lock())?;
    if cli.no_launch {
        return Ok(ExitCode::SUCCESS);
    }

    // Hand over to the application.
    let assembly = cli.assembly.unwrap_or_else(|| default_entry_assembly(&root));
    let status = runtime
        .run_main(&assembly, &cli.args)
        .with_context(|| format!("cannot run {}", assembly.display()))?;
    tracing::info!(status, "application exited");

    Ok(u8::try_from(status)
        .map(ExitCode::from)
        .unwrap_or(ExitCode::FAILURE))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("[bootloader] {err:#}");
            ExitCode::FAILURE
        }
    }
}
