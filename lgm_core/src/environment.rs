use std::{
    collections::HashMap,
    ffi::{OsStr, OsString},
};

/// Native library search path variable.
pub const SEARCH_PATH_VAR: &str = "PATH";

/// Managed assembly search path variable.
pub const MODULE_PATH_VAR: &str = "MONO_PATH";

/// The variables the bootstrap reads and writes.
pub trait Environment {
    fn var_os(&self, key: &str) -> Option<OsString>;
    fn set_var(&mut self, key: &str, value: &OsStr);
}

/// The real process environment. Writes are inherited by child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }

    fn set_var(&mut self, key: &str, value: &OsStr) {
        std::env::set_var(key, value);
    }
}

/// An environment kept in memory, for planning against a snapshot.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnvironment {
    vars: HashMap<String, OsString>,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: &str, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.to_string(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Environment for MemoryEnvironment {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }

    fn set_var(&mut self, key: &str, value: &OsStr) {
        self.vars.insert(key.to_string(), value.to_os_string());
    }
}
