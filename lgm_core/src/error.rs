use std::{ffi::OsString, io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to query the installation directory")]
    InstallRoot(#[source] io::Error),

    #[error("the installation directory is empty")]
    EmptyInstallRoot,

    #[error("failed to load the runtime library {}", path.display())]
    RuntimeLoad {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("the runtime library {} does not export {symbol}", path.display())]
    MissingSymbol {
        path: PathBuf,
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },

    #[error("{0:?} cannot be passed to the runtime")]
    InvalidArgument(OsString),

    #[error("failed to write the bootstrap report")]
    Report(#[source] io::Error),
}
