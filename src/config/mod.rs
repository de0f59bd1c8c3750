//! Typed configuration loading from the environment.
//!
//! The pipeline has three parts: a [`ConfigSchema`] declaring the
//! expected fields and their [`TypeTag`]s, a coercion table turning
//! raw strings into typed [`ConfigValue`]s, and a [`Loader`] that
//! reads layered [`EnvSource`]s and assembles one immutable
//! [`ConfigRecord`], failing fast on the first bad field.
//!
//! ## Example
//!
//! ```no_run
//! use envrec::config::{ConfigSchema, DotenvFile, Loader, ProcessEnv, TypeTag};
//!
//! let schema = ConfigSchema::builder()
//!     .required("PROD", TypeTag::Bool)
//!     .required("PORT", TypeTag::Int)
//!     .optional("SMTP_HOST", TypeTag::String)
//!     .build();
//!
//! let record = Loader::new(schema)
//!     .with_source(DotenvFile::new(".env", false))
//!     .with_source(ProcessEnv)
//!     .load()?;
//!
//! assert!(record.get_bool("PROD").is_some());
//! # Ok::<(), envrec::config::ConfigError>(())
//! ```

mod builder;
mod coerce;
mod error;
mod record;
mod schema;
mod source;
mod value;

pub use builder::Loader;
pub use error::{CoerceError, ConfigError};
pub use record::ConfigRecord;
pub use schema::{ConfigSchema, FieldDescriptor, SchemaBuilder, TypeTag};
pub use source::{DotenvFile, EnvSource, MapSource, ProcessEnv};
pub use value::ConfigValue;
