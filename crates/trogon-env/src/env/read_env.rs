use std::env;

/// Read-only key/value lookup over an environment table.
///
/// Mirrors [`std::env::var`]: a missing key is [`env::VarError::NotPresent`],
/// a value that is not valid Unicode is [`env::VarError::NotUnicode`].
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site:
///
/// ```ignore
/// fn spawn_reader<E: ReadEnv + Send + Sync + 'static>(env: Arc<E>) { … }
/// ```
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError>;
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        (**self).var(key)
    }
}
