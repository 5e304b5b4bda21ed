//! Sources the typed accessors read raw values from.
//!
//! # Examples
//!
//! ```
//! use trogon_env::env::{ReadEnv, SystemEnv};
//!
//! fn nats_url<E: ReadEnv>(env: &E) -> String {
//!     env.var("NATS_URL")
//!         .unwrap_or_else(|_| "localhost:4222".to_string())
//! }
//!
//! let url = nats_url(&SystemEnv);
//! ```
//!
//! ```ignore
//! use trogon_env::env::{ReadEnv, InMemoryEnv};
//!
//! let env = InMemoryEnv::new();
//! env.set("NATS_URL", "nats://test:4222"); // &self, no `mut` needed
//!
//! assert_eq!(nats_url(&env), "nats://test:4222");
//! ```

mod in_memory;
mod read_env;
mod system;

#[cfg(any(test, feature = "test-support"))]
pub use in_memory::InMemoryEnv;
pub use read_env::ReadEnv;
pub use system::SystemEnv;
