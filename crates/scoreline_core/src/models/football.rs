use super::ids::EntityId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    TeamA,
    TeamB,
}

impl TeamSide {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "team_a" | "a" | "home" => Some(TeamSide::TeamA),
            "team_b" | "b" | "away" => Some(TeamSide::TeamB),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupEntry {
    pub player_id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<u32>,
    #[serde(default)]
    pub is_substitute: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lineups {
    #[serde(default)]
    pub team_a: Arc<Vec<LineupEntry>>,
    #[serde(default)]
    pub team_b: Arc<Vec<LineupEntry>>,
}

impl Lineups {
    pub fn side(&self, side: TeamSide) -> &Arc<Vec<LineupEntry>> {
        match side {
            TeamSide::TeamA => &self.team_a,
            TeamSide::TeamB => &self.team_b,
        }
    }
}

/// Match incident: goal, card, substitution, ...
///
/// The kind is read from `type`, else `incident_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IncidentRow")]
pub struct Incident {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<TeamSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<EntityId>,
}

impl Incident {
    pub const GOAL: &'static str = "goal";

    pub fn new(kind: &str, side: Option<TeamSide>) -> Self {
        Self { id: None, kind: kind.to_string(), minute: None, side, player_id: None }
    }
}

#[derive(Deserialize)]
struct IncidentRow {
    #[serde(default)]
    id: Option<EntityId>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    incident_type: Option<String>,
    #[serde(default)]
    minute: Option<u32>,
    #[serde(default)]
    side: Option<TeamSide>,
    #[serde(default)]
    player_id: Option<EntityId>,
}

impl TryFrom<IncidentRow> for Incident {
    type Error = &'static str;

    fn try_from(row: IncidentRow) -> Result<Self, Self::Error> {
        let kind = row.kind.or(row.incident_type).ok_or("incident needs `type` or `incident_type`")?;
        Ok(Self { id: row.id, kind, minute: row.minute, side: row.side, player_id: row.player_id })
    }
}
