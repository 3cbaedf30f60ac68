//! Shared test utilities for unit tests
//!
//! Integration tests (in tests/) cannot reach this module because it is
//! compiled only under `#[cfg(test)]`; they carry their own helpers in
//! tests/common/mod.rs.

use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

// Serializes environment variable modifications across test threads
pub static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// RAII guard for environment variable manipulation in tests
///
/// Restores every touched variable on drop, even if the test panics.
pub struct EnvVarGuard {
    vars: Vec<(String, Option<String>)>,
}

impl EnvVarGuard {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Set an environment variable and remember its original value
    pub fn set(&mut self, key: &str, value: &str) {
        let original = env::var(key).ok();
        self.vars.push((key.to_string(), original));
        // env::set_var is unsafe since Rust 1.82; callers hold ENV_MUTEX
        unsafe {
            env::set_var(key, value);
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.vars.iter().rev() {
            unsafe {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }
        }
    }
}

impl Default for EnvVarGuard {
    fn default() -> Self {
        Self::new()
    }
}
