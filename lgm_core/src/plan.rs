use crate::InstallLayout;
use std::{
    ffi::{OsStr, OsString},
    path::PathBuf,
};

/// Everything the bootstrap writes, computed up front without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapPlan {
    /// New value of the native library search path.
    pub search_path: OsString,
    /// New value of the managed module path.
    pub module_path: OsString,
    /// Assembly directory handed to the runtime.
    pub lib_root: PathBuf,
    /// Configuration directory handed to the runtime.
    pub config_root: PathBuf,
}

impl BootstrapPlan {
    pub fn new(layout: &InstallLayout, existing_search_path: Option<&OsStr>) -> Self {
        Self {
            search_path: layout.search_path(existing_search_path),
            module_path: layout.module_path(),
            lib_root: layout.lib_root.clone(),
            config_root: layout.config_root.clone(),
        }
    }
}
