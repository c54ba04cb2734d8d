//! Loosely typed entity identifiers.
//!
//! Ids reach the engine as JSON numbers from some producers and as strings
//! from others (`7` vs `"7"`). Comparisons go through [`ids_equal`], which
//! normalizes both sides to numbers first.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Float(f64),
    Text(String),
}

impl EntityId {
    /// Numeric value of the id, if it has one.
    ///
    /// Strings are trimmed; empty or non-numeric strings have no value.
    pub fn numeric(&self) -> Option<f64> {
        match self {
            EntityId::Int(value) => Some(*value as f64),
            EntityId::Float(value) => value.is_finite().then_some(*value),
            EntityId::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
            }
        }
    }

    /// Whether the upstream producer would treat this value as set.
    ///
    /// Zero and empty strings count as unset.
    pub fn is_set(&self) -> bool {
        match self {
            EntityId::Int(value) => *value != 0,
            EntityId::Float(value) => *value != 0.0 && !value.is_nan(),
            EntityId::Text(text) => !text.is_empty(),
        }
    }
}

/// Compare two ids by numeric value.
///
/// Ids without a numeric value never match anything, including themselves.
pub fn ids_equal(left: &EntityId, right: &EntityId) -> bool {
    if let (EntityId::Int(a), EntityId::Int(b)) = (left, right) {
        return a == b;
    }
    match (left.numeric(), right.numeric()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Int(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        EntityId::Text(value)
    }
}

impl std::str::FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<i64>() {
            Ok(value) => EntityId::Int(value),
            Err(_) => EntityId::Text(s.to_string()),
        })
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(value) => write!(f, "{value}"),
            EntityId::Float(value) => write!(f, "{value}"),
            EntityId::Text(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
#[path = "ids_tests.rs"]
mod tests;
