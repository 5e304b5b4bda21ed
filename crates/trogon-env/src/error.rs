//! Error types for trogon-env

use thiserror::Error;

/// Why a typed lookup produced no value.
///
/// Messages name the key but never carry the full raw value.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("environment variable {key} is not set")]
    NotPresent { key: String },

    #[error("environment variable {key} is not valid unicode")]
    NotUnicode { key: String },

    #[error("environment variable {key} has an invalid value: {source}")]
    Invalid {
        key: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl EnvError {
    pub fn key(&self) -> &str {
        match self {
            Self::NotPresent { key } | Self::NotUnicode { key } | Self::Invalid { key, .. } => key,
        }
    }

    /// `true` only for an unset variable; a set but unusable value is not missing.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::NotPresent { .. })
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;
    use crate::value::BoolParseError;

    #[test]
    fn test_not_present_display() {
        let err = EnvError::NotPresent {
            key: "NATS_URL".to_string(),
        };
        assert_eq!(err.to_string(), "environment variable NATS_URL is not set");
        assert_eq!(err.key(), "NATS_URL");
        assert!(err.is_missing());
    }

    #[test]
    fn test_not_unicode_display() {
        let err = EnvError::NotUnicode {
            key: "RAW".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "environment variable RAW is not valid unicode"
        );
        assert!(!err.is_missing());
    }

    #[test]
    fn test_invalid_exposes_source() {
        let err = EnvError::Invalid {
            key: "DEBUG".to_string(),
            source: Box::new(BoolParseError),
        };
        assert!(
            err.to_string()
                .starts_with("environment variable DEBUG has an invalid value: ")
        );
        assert_eq!(err.key(), "DEBUG");
        assert!(!err.is_missing());
        assert!(err.source().unwrap().is::<BoolParseError>());
    }
}
