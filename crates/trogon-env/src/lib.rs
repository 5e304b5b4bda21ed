//! Typed environment variables for TrogonStack projects.
//!
//! # Quick Start
//!
//! | Need | Call | Absent or invalid |
//! |------|------|-------------------|
//! | Value with a fallback | [`get_or`] | the default |
//! | Value and whether it was usable | [`lookup`] | `(T::default(), false)` |
//! | Optional value | [`get`] | `None` |
//! | Reason it failed | [`try_get`] | [`EnvError`] |
//! | Text the process cannot run without | [`require`] | panic |
//!
//! The free functions read the process environment through [`SystemEnv`].
//! Code that should be testable takes any [`ReadEnv`] and calls the same
//! methods through [`TypedEnv`]; tests pass an [`InMemoryEnv`]*.
//!
//! *Available with `#[cfg(test)]` or the `"test-support"` feature.
//!
//! Supported types are `String`, `bool`, every primitive integer, `f32`,
//! `f64` and [`Duration`](std::time::Duration); see [`value`] for the exact
//! spellings each accepts. Implement [`FromEnvValue`] to add more.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! let port: u16 = trogon_env::get_or("HEALTH_PORT", 8081);
//! let (debug, _) = trogon_env::lookup::<bool>("DEBUG");
//! let timeout = trogon_env::get_or("REQUEST_TIMEOUT", Duration::from_secs(30));
//! let api_key = trogon_env::require("ANTHROPIC_API_KEY");
//! ```
//!
//! # Thread Safety
//!
//! [`SystemEnv`] is zero-sized and trivially `Send + Sync`; the crate only
//! ever reads the environment. [`InMemoryEnv`] is `RefCell`-backed and
//! neither `Send` nor `Sync`.

pub mod env;
pub mod error;
pub mod typed;
pub mod value;

#[cfg(any(test, feature = "test-support"))]
pub use env::InMemoryEnv;
pub use env::{ReadEnv, SystemEnv};
pub use error::EnvError;
pub use typed::TypedEnv;
pub use value::FromEnvValue;

/// [`TypedEnv::get_or`] against the process environment.
pub fn get_or<T: FromEnvValue>(key: &str, default: T) -> T {
    SystemEnv.get_or(key, default)
}

/// [`TypedEnv::get_or_else`] against the process environment.
pub fn get_or_else<T: FromEnvValue>(key: &str, default: impl FnOnce() -> T) -> T {
    SystemEnv.get_or_else(key, default)
}

/// [`TypedEnv::lookup`] against the process environment.
pub fn lookup<T: FromEnvValue + Default>(key: &str) -> (T, bool) {
    SystemEnv.lookup(key)
}

/// [`TypedEnv::get`] against the process environment.
pub fn get<T: FromEnvValue>(key: &str) -> Option<T> {
    SystemEnv.get(key)
}

/// [`TypedEnv::try_get`] against the process environment.
pub fn try_get<T: FromEnvValue>(key: &str) -> Result<T, EnvError> {
    SystemEnv.try_get(key)
}

/// [`TypedEnv::require`] against the process environment.
///
/// # Panics
///
/// When `key` is not set.
pub fn require(key: &str) -> String {
    SystemEnv.require(key)
}
