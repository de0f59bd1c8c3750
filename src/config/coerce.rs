//! String-to-typed-value coercion.
//!
//! One pure function per record field: `(TypeTag, raw) -> value or
//! error`. The schema is never consulted or mutated here; union
//! resolution works on the tag alone.

use super::error::CoerceError;
use super::schema::TypeTag;
use super::value::ConfigValue;

const TRUTHY: [&str; 6] = ["y", "yes", "t", "true", "on", "1"];
const FALSY: [&str; 6] = ["n", "no", "f", "false", "off", "0"];

/// Coerces one raw value into the declared type.
///
/// `raw` is `None` when the key was missing from the environment.
/// Absence short-circuits union tags to [`ConfigValue::Absent`]; for
/// concrete tags it is the caller's job to decide between
/// missing-required-field and the optional absent marker, so this
/// function is only handed `None` for unions.
pub fn coerce(tag: &TypeTag, raw: Option<&str>) -> Result<ConfigValue, CoerceError> {
    let Some(raw) = raw else {
        return Ok(ConfigValue::Absent);
    };

    match tag {
        TypeTag::Bool => coerce_bool(raw),
        TypeTag::Int => coerce_int(raw),
        TypeTag::Float => coerce_float(raw),
        TypeTag::String => Ok(ConfigValue::Str(raw.to_string())),
        TypeTag::StringList => Ok(coerce_list(raw)),
        TypeTag::Union(members) => coerce_union(members, raw),
    }
}

/// Converts a string representation of truth.
///
/// Truthy values are `y`, `yes`, `t`, `true`, `on` and `1`; falsy
/// values are `n`, `no`, `f`, `false`, `off` and `0`. Matching is
/// case-insensitive and ignores surrounding whitespace.
fn coerce_bool(raw: &str) -> Result<ConfigValue, CoerceError> {
    let normalized = raw.trim().to_ascii_lowercase();
    if TRUTHY.contains(&normalized.as_str()) {
        return Ok(ConfigValue::Bool(true));
    }
    if FALSY.contains(&normalized.as_str()) {
        return Ok(ConfigValue::Bool(false));
    }
    Err(CoerceError::InvalidBooleanValue(raw.to_string()))
}

fn coerce_int(raw: &str) -> Result<ConfigValue, CoerceError> {
    raw.trim()
        .parse::<i64>()
        .map(ConfigValue::Int)
        .map_err(|_| CoerceError::InvalidNumericValue(raw.to_string()))
}

fn coerce_float(raw: &str) -> Result<ConfigValue, CoerceError> {
    raw.trim()
        .parse::<f64>()
        .map(ConfigValue::Float)
        .map_err(|_| CoerceError::InvalidNumericValue(raw.to_string()))
}

/// Splits on commas, trims each element, and drops empty trailing
/// segments. The empty string yields an empty list.
fn coerce_list(raw: &str) -> ConfigValue {
    let mut items: Vec<String> = raw.split(',').map(|s| s.trim().to_string()).collect();
    while items.last().is_some_and(|s| s.is_empty()) {
        items.pop();
    }
    ConfigValue::List(items)
}

/// Resolves a union by trying each member in declaration order.
///
/// Resolution is two-step: a member is accepted only if coercion
/// succeeds *and* the produced value's runtime category is that
/// member's. The second check is what keeps a numeric string from
/// being claimed by every numeric member, or by a trailing String
/// member that would swallow anything.
fn coerce_union(members: &[TypeTag], raw: &str) -> Result<ConfigValue, CoerceError> {
    for member in members {
        if let Ok(value) = coerce(member, Some(raw)) {
            if value.matches(member) {
                return Ok(value);
            }
        }
    }
    Err(CoerceError::NoMatchingUnionMember(raw.to_string()))
}
