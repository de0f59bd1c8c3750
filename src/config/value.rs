//! The typed values a coerced field can hold.

use std::fmt;

use super::schema::TypeTag;

/// A fully coerced configuration value.
///
/// `Absent` is the explicit marker for an optional (or union) field
/// whose key was missing or blank; records carry it rather than
/// dropping the field, so a record always conforms 1:1 to its schema.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<String>),
    Absent,
}

impl ConfigValue {
    /// Checks whether this value's runtime category is the one the
    /// given tag declares.
    ///
    /// Union resolution depends on this: a successful parse alone is
    /// not enough to claim a union member, the produced value must
    /// also be an instance of that member's category.
    pub fn matches(&self, tag: &TypeTag) -> bool {
        match (self, tag) {
            (ConfigValue::Bool(_), TypeTag::Bool) => true,
            (ConfigValue::Int(_), TypeTag::Int) => true,
            (ConfigValue::Float(_), TypeTag::Float) => true,
            (ConfigValue::Str(_), TypeTag::String) => true,
            (ConfigValue::List(_), TypeTag::StringList) => true,
            (_, TypeTag::Union(members)) => members.iter().any(|m| self.matches(m)),
            _ => false,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ConfigValue::Absent)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ConfigValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{b}"),
            ConfigValue::Int(i) => write!(f, "{i}"),
            ConfigValue::Float(x) => write!(f, "{x}"),
            ConfigValue::Str(s) => write!(f, "{s}"),
            ConfigValue::List(items) => write!(f, "{}", items.join(",")),
            ConfigValue::Absent => write!(f, "<absent>"),
        }
    }
}
