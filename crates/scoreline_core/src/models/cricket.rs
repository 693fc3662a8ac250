use super::ids::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toss {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_team_id: Option<EntityId>,
    /// "bat" or "bowl"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Innings {
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batting_team_id: Option<EntityId>,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub wickets: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overs: Option<f64>,
}

impl Innings {
    pub fn new(number: u32, runs: u32, wickets: u32) -> Self {
        Self { number, batting_team_id: None, runs, wickets, overs: None }
    }
}
