//! Environment sources the loader can draw key/value pairs from.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::ConfigError;

/// A flat key -> string-value source.
///
/// The only contract is that [`vars`](Self::vars) yields every
/// currently set pair; no ordering is guaranteed and none is relied
/// upon. Keys are case-sensitive and matched against field names
/// exactly.
pub trait EnvSource: Send + Sync + std::fmt::Debug {
    fn vars(&self) -> Result<Vec<(String, String)>, ConfigError>;
}

/// The OS process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn vars(&self) -> Result<Vec<(String, String)>, ConfigError> {
        Ok(std::env::vars().collect())
    }
}

/// An in-memory map, mainly for tests and embedding scenarios where
/// the caller already holds the pairs.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    entries: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl<const N: usize> From<[(&str, &str); N]> for MapSource {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl EnvSource for MapSource {
    fn vars(&self) -> Result<Vec<(String, String)>, ConfigError> {
        Ok(self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

/// A `.env`-style file (KEY=VALUE lines), parsed without mutating
/// the process environment.
///
/// Files can be marked as required or optional. A required file that
/// doesn't exist causes an error; an optional one is silently
/// skipped. Register a `DotenvFile` before [`ProcessEnv`] so real
/// environment variables override file values.
#[derive(Debug, Clone)]
pub struct DotenvFile {
    path: PathBuf,
    required: bool,
}

impl DotenvFile {
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required,
        }
    }
}

impl EnvSource for DotenvFile {
    fn vars(&self) -> Result<Vec<(String, String)>, ConfigError> {
        let iter = match dotenvy::from_path_iter(&self.path) {
            Ok(iter) => iter,
            Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                if self.required {
                    return Err(ConfigError::DotenvNotFound(self.path.clone()));
                }
                tracing::debug!(path = %self.path.display(), "optional dotenv file not found, skipping");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(ConfigError::Dotenv {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let mut pairs = Vec::new();
        for item in iter {
            let (key, value) = item.map_err(|e| ConfigError::Dotenv {
                path: self.path.clone(),
                source: e,
            })?;
            pairs.push((key, value));
        }
        Ok(pairs)
    }
}
