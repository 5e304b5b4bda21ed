use std::env;

use super::ReadEnv;

/// Zero-sized type that delegates to `std::env`.
///
/// Only ever reads the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}
