mod bootstrap;
mod environment;
mod error;
mod install_root;
mod layout;
mod plan;
mod runtime;

pub use bootstrap::{apply, bootstrap, report};
pub use environment::{
    Environment, MemoryEnvironment, ProcessEnvironment, MODULE_PATH_VAR, SEARCH_PATH_VAR,
};
pub use error::BootstrapError;
pub use install_root::InstallRoot;
pub use layout::{InstallLayout, PATH_LIST_SEPARATOR};
pub use plan::BootstrapPlan;
pub use runtime::{default_entry_assembly, default_runtime_library, MonoRuntime, Runtime};
