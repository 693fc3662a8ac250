use super::ids::EntityId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-player scoring record (batting card, bowling card, goal tally...).
///
/// Numeric columns differ per sport, so they live in `stats` and are read by
/// name through [`PlayerScore::stat`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerScore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<EntityId>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<EntityId>,
    #[serde(flatten)]
    pub stats: Map<String, Value>,
}

impl PlayerScore {
    pub fn new(name: &str) -> Self {
        Self { player_id: None, name: name.to_string(), team_id: None, stats: Map::new() }
    }

    pub fn with_stat(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.stats.insert(field.to_string(), value.into());
        self
    }

    /// Numeric value of `field`; missing or non-numeric reads as 0.
    ///
    /// Numeric strings are accepted since some scorecards send `"12"`.
    pub fn stat(&self, field: &str) -> f64 {
        let value = match self.stats.get(field) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        value.filter(|v| v.is_finite()).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_defaults_to_zero() {
        let score: PlayerScore =
            serde_json::from_str(r#"{"name": "A", "runs": 10, "balls": "12", "sr": "n/a"}"#)
                .unwrap();

        assert_eq!(score.stat("runs"), 10.0);
        assert_eq!(score.stat("balls"), 12.0);
        assert_eq!(score.stat("sr"), 0.0);
        assert_eq!(score.stat("wickets"), 0.0);
    }
}
