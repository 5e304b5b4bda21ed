#[cfg(any(test, feature = "test-support"))]
use std::cell::RefCell;
#[cfg(any(test, feature = "test-support"))]
use std::collections::HashMap;
#[cfg(any(test, feature = "test-support"))]
use std::env;
#[cfg(any(test, feature = "test-support"))]
use std::ffi::OsString;

#[cfg(any(test, feature = "test-support"))]
use super::ReadEnv;

/// Won't touch the global process environment.
///
/// Uses `RefCell` for interior mutability, so all methods take `&self`.
/// Values are held as [`OsString`] so tests can exercise the
/// [`env::VarError::NotUnicode`] path with [`set_os`](Self::set_os).
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug)]
pub struct InMemoryEnv {
    vars: RefCell<HashMap<String, OsString>>,
}

#[cfg(any(test, feature = "test-support"))]
impl InMemoryEnv {
    pub fn new() -> Self {
        Self {
            vars: RefCell::new(HashMap::new()),
        }
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars
            .borrow_mut()
            .insert(key.into(), OsString::from(value.into()));
    }

    pub fn set_os(&self, key: impl Into<String>, value: impl Into<OsString>) {
        self.vars.borrow_mut().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars.borrow_mut().remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.borrow().contains_key(key)
    }

    pub fn clear(&self) {
        self.vars.borrow_mut().clear();
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Default for InMemoryEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InMemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let env = Self::new();
        for (key, value) in iter {
            env.set(key, value);
        }
        env
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        self.vars
            .borrow()
            .get(key)
            .cloned()
            .ok_or(env::VarError::NotPresent)?
            .into_string()
            .map_err(env::VarError::NotUnicode)
    }
}
