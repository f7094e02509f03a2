use crate::BootstrapError;
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// The directory the application package was deployed into. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRoot(PathBuf);

// Directory names that mark the executable as living one level below the package root.
fn is_package_subdir(name: &OsStr) -> bool {
    match name.to_str() {
        Some(name) => name.eq_ignore_ascii_case("bin") || name.eq_ignore_ascii_case("lib"),
        None => false,
    }
}

impl InstallRoot {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, BootstrapError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(BootstrapError::EmptyInstallRoot);
        }
        Ok(Self(path))
    }

    /// Finds the install root of the running executable.
    pub fn detect() -> Result<Self, BootstrapError> {
        // Ask the OS where we are running from.
        let exe = std::env::current_exe().map_err(BootstrapError::InstallRoot)?;
        tracing::debug!(exe = %exe.display(), "resolved current executable");

        Self::from_module_path(&exe)
    }

    /// Derives the package directory from the path of a module inside it. The module's own
    /// directory is the root, unless that directory is `bin` or `lib`, in which case its
    /// parent is.
    pub fn from_module_path(module: &Path) -> Result<Self, BootstrapError> {
        // Get the directory containing the module.
        let dir = module.parent().unwrap_or_else(|| Path::new(""));

        // Step out of bin/lib if that is where the module sits.
        let root = match (dir.file_name(), dir.parent()) {
            (Some(name), Some(parent)) if is_package_subdir(name) => parent,
            _ => dir,
        };

        Self::new(root)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for InstallRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
