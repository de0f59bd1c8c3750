//! The fully-typed output record.

use super::value::ConfigValue;

/// One coerced value per schema field, in schema order.
///
/// A record is built once by the loader and read-only afterwards.
/// Absent optional fields are carried explicitly as
/// [`ConfigValue::Absent`] rather than omitted, so a record always
/// holds exactly as many entries as its schema declares. Shared
/// access is by reference (or through
/// [`AppContext`](crate::AppContext) for atomic reloads); nothing
/// hands out a mutable view.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigRecord {
    fields: Vec<(String, ConfigValue)>,
}

impl ConfigRecord {
    pub(crate) fn new(fields: Vec<(String, ConfigValue)>) -> Self {
        Self { fields }
    }

    /// Looks up a field by exact name.
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(ConfigValue::as_bool)
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(ConfigValue::as_int)
    }

    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(ConfigValue::as_float)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ConfigValue::as_str)
    }

    pub fn get_list(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(ConfigValue::as_list)
    }

    /// Fields in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
