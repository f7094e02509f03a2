use crate::{BootstrapError, InstallRoot};
use libloading::Library;
use std::{
    ffi::{CString, OsStr, OsString},
    os::raw::{c_char, c_int},
    path::{Path, PathBuf},
    ptr,
};

/// The runtime initializer the bootstrap hands its directories to.
pub trait Runtime {
    fn set_dirs(&self, assembly_dir: &Path, config_dir: &Path) -> Result<(), BootstrapError>;
}

type MonoSetDirs = unsafe extern "C" fn(*const c_char, *const c_char);
type MonoMain = unsafe extern "C" fn(c_int, *mut *mut c_char) -> c_int;

#[cfg(target_os = "windows")]
fn runtime_library_name() -> &'static str {
    "mono-2.0.dll"
}

#[cfg(target_os = "macos")]
fn runtime_library_name() -> &'static str {
    "libmonosgen-2.0.dylib"
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn runtime_library_name() -> &'static str {
    "libmonosgen-2.0.so"
}

/// Where the runtime library ships inside the package.
pub fn default_runtime_library(root: &InstallRoot) -> PathBuf {
    root.path().join("bin").join(runtime_library_name())
}

/// Where the application's entry assembly ships inside the package.
pub fn default_entry_assembly(root: &InstallRoot) -> PathBuf {
    root.path().join("bin").join("LongoMatch.exe")
}

#[cfg(unix)]
fn to_c_string(value: &OsStr) -> Result<CString, BootstrapError> {
    use std::os::unix::ffi::OsStrExt;

    CString::new(value.as_bytes())
        .map_err(|_| BootstrapError::InvalidArgument(value.to_os_string()))
}

#[cfg(not(unix))]
fn to_c_string(value: &OsStr) -> Result<CString, BootstrapError> {
    value
        .to_str()
        .and_then(|value| CString::new(value).ok())
        .ok_or_else(|| BootstrapError::InvalidArgument(value.to_os_string()))
}

/// A Mono runtime loaded from its shared library.
pub struct MonoRuntime {
    path: PathBuf,
    set_dirs: MonoSetDirs,
    main: MonoMain,
    // Keeps the function pointers above valid.
    _library: Library,
}

impl MonoRuntime {
    /// Loads the runtime library and resolves the entry points the launcher needs.
    pub fn load(path: &Path) -> Result<Self, BootstrapError> {
        // Load the runtime library.
        let library = unsafe { Library::new(path) }.map_err(|source| {
            BootstrapError::RuntimeLoad {
                path: path.to_path_buf(),
                source,
            }
        })?;

        // Resolve both entry points now so a broken install fails before we touch anything.
        let set_dirs = unsafe { resolve::<MonoSetDirs>(&library, path, "mono_set_dirs")? };
        let main = unsafe { resolve::<MonoMain>(&library, path, "mono_main")? };
        tracing::info!(path = %path.display(), "loaded runtime library");

        Ok(Self {
            path: path.to_path_buf(),
            set_dirs,
            main,
            _library: library,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hands control to the runtime's own main with the given assembly and arguments, and
    /// returns its exit status.
    pub fn run_main(&self, assembly: &Path, args: &[OsString]) -> Result<i32, BootstrapError> {
        // Build argv as the runtime expects it: program name, assembly, then the arguments.
        let program = std::env::args_os()
            .next()
            .unwrap_or_else(|| OsString::from("longomatch"));
        let mut owned = vec![to_c_string(&program)?, to_c_string(assembly.as_os_str())?];
        for arg in args {
            owned.push(to_c_string(arg)?);
        }
        let mut argv: Vec<*mut c_char> = owned.iter().map(|a| a.as_ptr() as *mut c_char).collect();
        argv.push(ptr::null_mut());

        // Call into the runtime. This returns when the application exits.
        tracing::info!(assembly = %assembly.display(), "starting managed entry point");
        let status = unsafe { (self.main)(owned.len() as c_int, argv.as_mut_ptr()) };
        Ok(status)
    }
}

impl Runtime for MonoRuntime {
    fn set_dirs(&self, assembly_dir: &Path, config_dir: &Path) -> Result<(), BootstrapError> {
        let assembly_dir = to_c_string(assembly_dir.as_os_str())?;
        let config_dir = to_c_string(config_dir.as_os_str())?;

        // The runtime copies both strings.
        unsafe { (self.set_dirs)(assembly_dir.as_ptr(), config_dir.as_ptr()) };
        Ok(())
    }
}

unsafe fn resolve<T: Copy>(
    library: &Library,
    path: &Path,
    symbol: &'static str,
) -> Result<T, BootstrapError> {
    library
        .get::<T>(symbol.as_bytes())
        .map(|sym| *sym)
        .map_err(|source| BootstrapError::MissingSymbol {
            path: path.to_path_buf(),
            symbol,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::Path};

    #[test]
    fn defaults_live_in_bin() {
        let root = InstallRoot::new("/opt/longomatch").unwrap();
        let bin = Path::new("/opt/longomatch").join("bin");

        assert_eq!(default_runtime_library(&root), bin.join(runtime_library_name()));
        assert_eq!(default_entry_assembly(&root), bin.join("LongoMatch.exe"));
    }

    #[test]
    fn missing_library_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(runtime_library_name());

        match MonoRuntime::load(&path) {
            Err(BootstrapError::RuntimeLoad { path: failed, .. }) => assert_eq!(failed, path),
            Err(err) => panic!("unexpected error: {err}"),
            Ok(_) => panic!("loaded a library that does not exist"),
        }
    }

    #[test]
    fn corrupt_library_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(runtime_library_name());
        fs::write(&path, b"definitely not a shared object").unwrap();

        assert!(matches!(
            MonoRuntime::load(&path),
            Err(BootstrapError::RuntimeLoad { .. })
        ));
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn library_without_runtime_symbols_is_rejected() {
        match MonoRuntime::load(Path::new("libc.so.6")) {
            Err(BootstrapError::MissingSymbol { symbol, .. }) => assert_eq!(symbol, "mono_set_dirs"),
            Err(err) => panic!("unexpected error: {err}"),
            Ok(_) => panic!("libc should not export the runtime"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn interior_nul_is_rejected() {
        let value = OsStr::new("lib\0etc");
        assert!(matches!(
            to_c_string(value),
            Err(BootstrapError::InvalidArgument(arg)) if arg == value
        ));
    }
}
