//! The loader that turns schema + environment into a record.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::coerce::coerce;
use super::record::ConfigRecord;
use super::schema::ConfigSchema;
use super::source::EnvSource;
use super::value::ConfigValue;
use super::ConfigError;

/// Builds one [`ConfigRecord`] from layered environment sources.
///
/// Sources are read in registration order, with later sources
/// overriding earlier ones. The canonical layering mirrors dotenv
/// semantics (a real environment variable wins over the `.env`
/// file):
///
/// ```no_run
/// use envrec::config::{ConfigSchema, DotenvFile, Loader, ProcessEnv, TypeTag};
///
/// let schema = ConfigSchema::builder()
///     .required("PROD", TypeTag::Bool)
///     .required("PORT", TypeTag::Int)
///     .build();
///
/// let record = Loader::new(schema)
///     .with_source(DotenvFile::new(".env", false))
///     .with_source(ProcessEnv)
///     .load()?;
/// # Ok::<(), envrec::config::ConfigError>(())
/// ```
///
/// Loading is fail-fast: the first field (in schema declaration
/// order) that cannot be coerced aborts the build, and the error
/// names that field and the offending raw value. Keys present in the
/// environment but absent from the schema are ignored, so one
/// environment can back several schemas.
#[derive(Debug)]
#[must_use = "loaders do nothing until .load() is called"]
pub struct Loader {
    schema: ConfigSchema,
    sources: Vec<Box<dyn EnvSource>>,
}

impl Loader {
    pub fn new(schema: ConfigSchema) -> Self {
        Self {
            schema,
            sources: Vec::new(),
        }
    }

    /// Adds an environment source. Later sources override earlier
    /// ones key by key.
    pub fn with_source(mut self, source: impl EnvSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Reads all sources, then coerces each schema field in
    /// declaration order.
    pub fn load(self) -> Result<ConfigRecord, ConfigError> {
        let mut merged: HashMap<String, String> = HashMap::new();
        for source in &self.sources {
            for (key, value) in source.vars()? {
                merged.insert(key, value);
            }
        }

        let mut fields = Vec::with_capacity(self.schema.len());
        for descriptor in self.schema.fields() {
            let raw = merged.get(&descriptor.name).map(String::as_str);

            let value = if descriptor.optional && raw.map_or(true, str::is_empty) {
                ConfigValue::Absent
            } else if raw.is_none() && !descriptor.tag.is_union() {
                return Err(ConfigError::MissingRequiredField {
                    field: descriptor.name.clone(),
                });
            } else {
                coerce(&descriptor.tag, raw)
                    .map_err(|e| ConfigError::from_coerce(&descriptor.name, e))?
            };

            trace!(field = %descriptor.name, %value, "coerced field");
            fields.push((descriptor.name.clone(), value));
        }

        debug!(fields = fields.len(), "configuration record built");
        Ok(ConfigRecord::new(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigValue, MapSource, TypeTag};

    fn schema() -> ConfigSchema {
        ConfigSchema::builder()
            .required("PROD", TypeTag::Bool)
            .required("PORT", TypeTag::Int)
            .required("ALLOWED_HOSTS", TypeTag::StringList)
            .optional("SMTP_HOST", TypeTag::String)
            .build()
    }

    fn full_env() -> MapSource {
        MapSource::from([
            ("PROD", "yes"),
            ("PORT", "8080"),
            ("ALLOWED_HOSTS", "a.example, b.example"),
            ("SMTP_HOST", "mail.example.com"),
        ])
    }

    #[test]
    fn test_load_full_record() {
        let record = Loader::new(schema()).with_source(full_env()).load().unwrap();

        assert_eq!(record.get_bool("PROD"), Some(true));
        assert_eq!(record.get_int("PORT"), Some(8080));
        assert_eq!(
            record.get_list("ALLOWED_HOSTS"),
            Some(&["a.example".to_string(), "b.example".to_string()][..])
        );
        assert_eq!(record.get_str("SMTP_HOST"), Some("mail.example.com"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let record = Loader::new(schema())
            .with_source(full_env().set("UNRELATED_SERVICE_KEY", "whatever"))
            .load()
            .unwrap();

        assert_eq!(record.len(), 4);
        assert_eq!(record.get("UNRELATED_SERVICE_KEY"), None);
    }

    #[test]
    fn test_missing_required_field() {
        let err = Loader::new(schema())
            .with_source(MapSource::from([("PROD", "yes")]))
            .load()
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::MissingRequiredField { ref field } if field == "PORT"
        ));
    }

    #[test]
    fn test_missing_optional_field_is_absent() {
        let record = Loader::new(schema())
            .with_source(MapSource::from([
                ("PROD", "no"),
                ("PORT", "80"),
                ("ALLOWED_HOSTS", ""),
            ]))
            .load()
            .unwrap();

        assert_eq!(record.get("SMTP_HOST"), Some(&ConfigValue::Absent));
        assert_eq!(record.get_list("ALLOWED_HOSTS"), Some(&[][..]));
    }

    #[test]
    fn test_blank_optional_field_is_absent() {
        let record = Loader::new(schema())
            .with_source(full_env().set("SMTP_HOST", ""))
            .load()
            .unwrap();

        assert_eq!(record.get("SMTP_HOST"), Some(&ConfigValue::Absent));
    }

    #[test]
    fn test_fail_fast_reports_first_field_in_schema_order() {
        // Both PROD and PORT are invalid; PROD is declared first.
        let err = Loader::new(schema())
            .with_source(
                full_env().set("PROD", "maybe").set("PORT", "not-a-number"),
            )
            .load()
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidBooleanValue { ref field, ref value }
                if field == "PROD" && value == "maybe"
        ));
    }

    #[test]
    fn test_error_carries_field_and_raw_value() {
        let err = Loader::new(schema())
            .with_source(full_env().set("PORT", "80 80"))
            .load()
            .unwrap_err();

        assert_eq!(err.field(), Some("PORT"));
        assert!(err.to_string().contains("80 80"));
    }

    #[test]
    fn test_later_sources_override_earlier() {
        let record = Loader::new(schema())
            .with_source(full_env().set("PORT", "1111"))
            .with_source(MapSource::from([("PORT", "2222")]))
            .load()
            .unwrap();

        assert_eq!(record.get_int("PORT"), Some(2222));
    }

    #[test]
    fn test_idempotent_rebuild() {
        let first = Loader::new(schema()).with_source(full_env()).load().unwrap();
        let second = Loader::new(schema()).with_source(full_env()).load().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_union_field_resolution() {
        let schema = ConfigSchema::builder()
            .required("WORKERS", TypeTag::Union(vec![TypeTag::Int, TypeTag::String]))
            .build();

        let record = Loader::new(schema.clone())
            .with_source(MapSource::from([("WORKERS", "4")]))
            .load()
            .unwrap();
        assert_eq!(record.get("WORKERS"), Some(&ConfigValue::Int(4)));

        let record = Loader::new(schema.clone())
            .with_source(MapSource::from([("WORKERS", "auto")]))
            .load()
            .unwrap();
        assert_eq!(
            record.get("WORKERS"),
            Some(&ConfigValue::Str("auto".into()))
        );

        // Absence short-circuits a union field to absent, even though
        // the field was not declared optional.
        let record = Loader::new(schema).with_source(MapSource::new()).load().unwrap();
        assert_eq!(record.get("WORKERS"), Some(&ConfigValue::Absent));
    }

    #[test]
    fn test_union_no_match_names_field() {
        let schema = ConfigSchema::builder()
            .required("RATE", TypeTag::Union(vec![TypeTag::Int, TypeTag::Float]))
            .build();

        let err = Loader::new(schema)
            .with_source(MapSource::from([("RATE", "fast")]))
            .load()
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::NoMatchingUnionMember { ref field, ref value }
                if field == "RATE" && value == "fast"
        ));
    }
}
