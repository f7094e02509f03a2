use crate::InstallRoot;
use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

/// Separator between entries of `PATH`-style lists on this platform.
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: &str = ";";

/// Separator between entries of `PATH`-style lists on this platform.
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: &str = ":";

/// Every directory the launcher hands to the runtime, relative to the install root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    pub root: PathBuf,
    pub lib_root: PathBuf,
    pub config_root: PathBuf,
    pub runtime_lib_root: PathBuf,
    pub runtime_facades_root: PathBuf,
    pub ui_bindings_root: PathBuf,
    pub app_lib_root: PathBuf,
    pub media_plugin_root: PathBuf,
}

fn join_all(base: &Path, segments: &[&str]) -> PathBuf {
    segments.iter().fold(base.to_path_buf(), |acc, s| acc.join(s))
}

fn join_path_list<'a>(entries: impl IntoIterator<Item = &'a OsStr>) -> OsString {
    let mut list = OsString::new();
    for (i, entry) in entries.into_iter().enumerate() {
        if i > 0 {
            list.push(PATH_LIST_SEPARATOR);
        }
        list.push(entry);
    }
    list
}

impl InstallLayout {
    pub fn new(root: &InstallRoot) -> Self {
        let root = root.path();
        let lib_root = root.join("lib");
        let runtime_lib_root = join_all(&lib_root, &["mono", "4.5"]);
        let app_lib_root = lib_root.join("longomatch");

        Self {
            root: root.to_path_buf(),
            config_root: root.join("etc"),
            runtime_facades_root: runtime_lib_root.join("Facades"),
            ui_bindings_root: lib_root.join("gtk-sharp-2.0"),
            media_plugin_root: join_all(&app_lib_root, &["plugins", "gstreamer-0.10"]),
            runtime_lib_root,
            app_lib_root,
            lib_root,
        }
    }

    /// The native library search path: the existing one with the media plugins appended. An
    /// unset search path counts as empty, so the result then starts with a separator.
    /// Nothing is deduplicated.
    pub fn search_path(&self, existing: Option<&OsStr>) -> OsString {
        join_path_list([
            existing.unwrap_or_default(),
            self.media_plugin_root.as_os_str(),
        ])
    }

    /// The managed assembly search path.
    pub fn module_path(&self) -> OsString {
        join_path_list([
            self.runtime_lib_root.as_os_str(),
            self.runtime_facades_root.as_os_str(),
            self.ui_bindings_root.as_os_str(),
            self.app_lib_root.as_os_str(),
        ])
    }
}
