use clap::Parser;
use std::{ffi::OsString, path::PathBuf};

/// Prepares the environment for LongoMatch and starts it on the bundled runtime.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Installation directory. Detected from the executable when not given.
    #[clap(long, env = "LONGOMATCH_INSTALL_ROOT", value_parser = clap::value_parser!(OsString))]
    pub install_root: Option<OsString>,

    /// Runtime shared library to load. Defaults to the one shipped in the package's bin directory.
    #[clap(long, env = "LONGOMATCH_RUNTIME_LIBRARY")]
    pub runtime_library: Option<PathBuf>,

    /// Entry assembly to run. Defaults to bin/LongoMatch.exe in the package.
    #[clap(long, env = "LONGOMATCH_ASSEMBLY")]
    pub assembly: Option<PathBuf>,

    /// Print what would be set without changing anything or loading the runtime.
    #[clap(long)]
    pub dry_run: bool,

    /// Initialize the runtime but do not start the application.
    #[clap(long, conflicts_with = "dry_run")]
    pub no_launch: bool,

    /// Arguments passed through to the application.
    #[clap(last = true)]
    pub args: Vec<OsString>,
}
