use std::path::PathBuf;
use thiserror::Error;

/// A rejection produced while coercing a single raw value.
///
/// Carries the offending raw value but not the field name; the loader
/// attaches field context when it wraps this into a [`ConfigError`].
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoerceError {
    #[error("invalid boolean value: {0:?}")]
    InvalidBooleanValue(String),

    #[error("invalid numeric value: {0:?}")]
    InvalidNumericValue(String),

    #[error("value matches no union member: {0:?}")]
    NoMatchingUnionMember(String),
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("field '{field}': invalid boolean value: {value:?}")]
    InvalidBooleanValue { field: String, value: String },

    #[error("field '{field}': invalid numeric value: {value:?}")]
    InvalidNumericValue { field: String, value: String },

    #[error("field '{field}': value matches no union member: {value:?}")]
    NoMatchingUnionMember { field: String, value: String },

    #[error("required field '{field}' is missing from the environment")]
    MissingRequiredField { field: String },

    #[error("required dotenv file not found: {0}")]
    DotenvNotFound(PathBuf),

    #[error("failed to load dotenv file '{path}': {source}")]
    Dotenv {
        path: PathBuf,
        source: dotenvy::Error,
    },
}

impl ConfigError {
    /// Attaches field context to a value-level coercion failure.
    pub(crate) fn from_coerce(field: &str, err: CoerceError) -> Self {
        let field = field.to_string();
        match err {
            CoerceError::InvalidBooleanValue(value) => {
                ConfigError::InvalidBooleanValue { field, value }
            }
            CoerceError::InvalidNumericValue(value) => {
                ConfigError::InvalidNumericValue { field, value }
            }
            CoerceError::NoMatchingUnionMember(value) => {
                ConfigError::NoMatchingUnionMember { field, value }
            }
        }
    }

    /// The name of the field this error is attached to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidBooleanValue { field, .. }
            | ConfigError::InvalidNumericValue { field, .. }
            | ConfigError::NoMatchingUnionMember { field, .. }
            | ConfigError::MissingRequiredField { field } => Some(field),
            _ => None,
        }
    }
}
