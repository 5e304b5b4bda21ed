//! Parse rules turning a raw environment string into a typed value.
//!
//! | Type | Accepted |
//! |------|----------|
//! | `String` | anything, verbatim |
//! | `bool` | `1 t T TRUE true True` / `0 f F FALSE false False` |
//! | integers | base-10 with optional sign |
//! | `f64` | decimal or exponent literal, `inf`, `infinity`, `nan` |
//! | `f32` | the `f64` rule, narrowed |
//! | [`Duration`] | `1h30m`, `1.5s`, `300ms`, … (see [`parse_duration`]) |

mod boolean;
mod duration;
mod float;

use std::convert::Infallible;
use std::num::ParseIntError;
use std::time::Duration;

pub use boolean::{BoolParseError, parse_bool};
pub use duration::{DurationParseError, parse_duration};
pub use float::{FloatParseError, parse_f32, parse_f64};

/// A type that can be read from a single environment variable.
///
/// Implement this for your own value objects to use them with
/// [`TypedEnv`](crate::TypedEnv).
pub trait FromEnvValue: Sized {
    type Err: std::error::Error + Send + Sync + 'static;

    fn from_env_value(raw: &str) -> Result<Self, Self::Err>;
}

impl FromEnvValue for String {
    type Err = Infallible;

    fn from_env_value(raw: &str) -> Result<Self, Self::Err> {
        Ok(raw.to_owned())
    }
}

impl FromEnvValue for bool {
    type Err = BoolParseError;

    fn from_env_value(raw: &str) -> Result<Self, Self::Err> {
        parse_bool(raw)
    }
}

impl FromEnvValue for f64 {
    type Err = FloatParseError;

    fn from_env_value(raw: &str) -> Result<Self, Self::Err> {
        parse_f64(raw)
    }
}

impl FromEnvValue for f32 {
    type Err = FloatParseError;

    fn from_env_value(raw: &str) -> Result<Self, Self::Err> {
        parse_f32(raw)
    }
}

impl FromEnvValue for Duration {
    type Err = DurationParseError;

    fn from_env_value(raw: &str) -> Result<Self, Self::Err> {
        parse_duration(raw)
    }
}

macro_rules! impl_from_env_value_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromEnvValue for $ty {
                type Err = ParseIntError;

                fn from_env_value(raw: &str) -> Result<Self, Self::Err> {
                    raw.parse()
                }
            }
        )*
    };
}

impl_from_env_value_for_int!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);
