use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend entity identifier.
///
/// Most endpoints send numeric ids, a few send strings. Both forms are kept
/// as received and compared exactly: `4` and `"4"` are different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Num(i64),
    Text(String),
}

impl EntityId {
    /// Parse user input: anything that reads as an integer becomes `Num`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => EntityId::Num(n),
            Err(_) => EntityId::Text(trimmed.to_string()),
        }
    }

    pub fn as_num(&self) -> Option<i64> {
        match self {
            EntityId::Num(n) => Some(*n),
            EntityId::Text(_) => None,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EntityId::Num(n) => write!(f, "{}", n),
            EntityId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Num(value)
    }
}

impl From<i32> for EntityId {
    fn from(value: i32) -> Self {
        EntityId::Num(value as i64)
    }
}

impl From<u32> for EntityId {
    fn from(value: u32) -> Self {
        EntityId::Num(value as i64)
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

impl From<&EntityId> for EntityId {
    fn from(value: &EntityId) -> Self {
        value.clone()
    }
}
