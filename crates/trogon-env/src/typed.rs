//! Typed lookups over any [`ReadEnv`] source.
//!
//! Every [`ReadEnv`] gets these methods through a blanket impl, so config
//! loaders keep taking `env: &E` and read typed values directly:
//!
//! ```
//! use std::time::Duration;
//! use trogon_env::{ReadEnv, TypedEnv};
//!
//! struct WorkerConfig {
//!     concurrency: usize,
//!     poll_interval: Duration,
//!     verbose: bool,
//! }
//!
//! impl WorkerConfig {
//!     fn from_env<E: ReadEnv>(env: &E) -> Self {
//!         Self {
//!             concurrency: env.get_or("WORKER_CONCURRENCY", 4),
//!             poll_interval: env.get_or("WORKER_POLL_INTERVAL", Duration::from_secs(5)),
//!             verbose: env.get_or("WORKER_VERBOSE", false),
//!         }
//!     }
//! }
//!
//! let config = WorkerConfig::from_env(&trogon_env::SystemEnv);
//! ```
//!
//! | Method | Absent | Invalid | Valid |
//! |--------|--------|---------|-------|
//! | [`get_or`](TypedEnv::get_or) | default | default | value |
//! | [`lookup`](TypedEnv::lookup) | `(zero, false)` | `(zero, false)` | `(value, true)` |
//! | [`get`](TypedEnv::get) | `None` | `None` | `Some(value)` |
//! | [`try_get`](TypedEnv::try_get) | `Err(NotPresent)` | `Err(Invalid)` | `Ok(value)` |
//! | [`require`](TypedEnv::require) | panics | n/a (text only) | raw text |

use std::env::VarError;

use tracing::{debug, error};

use crate::env::ReadEnv;
use crate::error::EnvError;
use crate::value::FromEnvValue;

pub trait TypedEnv: ReadEnv {
    /// Reads `key` and parses it as `T`, keeping absence and malformed
    /// values apart.
    fn try_get<T: FromEnvValue>(&self, key: &str) -> Result<T, EnvError> {
        let raw = self.var(key).map_err(|e| match e {
            VarError::NotPresent => EnvError::NotPresent {
                key: key.to_string(),
            },
            VarError::NotUnicode(_) => EnvError::NotUnicode {
                key: key.to_string(),
            },
        })?;
        T::from_env_value(&raw).map_err(|e| EnvError::Invalid {
            key: key.to_string(),
            source: Box::new(e),
        })
    }

    /// `Some` only when `key` is set and parses as `T`.
    fn get<T: FromEnvValue>(&self, key: &str) -> Option<T> {
        match self.try_get(key) {
            Ok(value) => Some(value),
            Err(e) => {
                if !e.is_missing() {
                    debug!(key, error = %e, "Ignoring unusable environment variable");
                }
                None
            }
        }
    }

    /// Parsed value of `key`, or `default` when it is absent or invalid.
    fn get_or<T: FromEnvValue>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Like [`get_or`](Self::get_or), but only builds the default when it is needed.
    fn get_or_else<T: FromEnvValue>(&self, key: &str, default: impl FnOnce() -> T) -> T {
        self.get(key).unwrap_or_else(default)
    }

    /// `(value, true)` when `key` is set and parses as `T`, otherwise
    /// `(T::default(), false)`. Absent and invalid are indistinguishable here.
    fn lookup<T: FromEnvValue + Default>(&self, key: &str) -> (T, bool) {
        match self.get(key) {
            Some(value) => (value, true),
            None => (T::default(), false),
        }
    }

    /// Raw text of `key`, or the reason it is unusable.
    fn try_require(&self, key: &str) -> Result<String, EnvError> {
        self.try_get(key)
    }

    /// Raw text of `key`, for configuration the process cannot run without.
    ///
    /// # Panics
    ///
    /// When `key` is not set (or its value is not valid Unicode).
    fn require(&self, key: &str) -> String {
        match self.try_require(key) {
            Ok(value) => value,
            Err(e) => {
                error!(key, error = %e, "Missing required environment variable");
                panic!("Missing required environment variable value for {key}");
            }
        }
    }
}

impl<E: ReadEnv + ?Sized> TypedEnv for E {}
