use super::ids::EntityId;
use super::match_data::TeamRef;
use super::stage::Stage;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Coarse lifecycle bucket for a tournament status string.
///
/// The backend uses two spellings per bucket depending on the sport service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentCategory {
    Active,
    Upcoming,
    Completed,
    Other,
}

impl TournamentCategory {
    pub fn from_status(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "active" | "in_progress" => TournamentCategory::Active,
            "upcoming" | "scheduled" => TournamentCategory::Upcoming,
            "completed" | "finished" => TournamentCategory::Completed,
            _ => TournamentCategory::Other,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "active" => Some(TournamentCategory::Active),
            "upcoming" => Some(TournamentCategory::Upcoming),
            "completed" => Some(TournamentCategory::Completed),
            "other" => Some(TournamentCategory::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: EntityId,
    pub sport_id: EntityId,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<TeamRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<Stage>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tournament {
    pub fn new(id: impl Into<EntityId>, sport_id: impl Into<EntityId>, status: &str) -> Self {
        Self {
            id: id.into(),
            sport_id: sport_id.into(),
            status: status.to_string(),
            name: None,
            teams: None,
            matches: None,
            extra: Map::new(),
        }
    }

    pub fn category(&self) -> TournamentCategory {
        TournamentCategory::from_status(&self.status)
    }

    pub fn stages(&self) -> &[Stage] {
        self.matches.as_deref().unwrap_or(&[])
    }
}

/// One row of a points table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub team_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub played: u32,
    #[serde(default)]
    pub won: u32,
    #[serde(default)]
    pub drawn: u32,
    #[serde(default)]
    pub lost: u32,
    #[serde(default)]
    pub points: f64,
    /// Goal difference for football, net run rate for cricket
    #[serde(default, alias = "goal_difference", alias = "net_run_rate")]
    pub score_difference: f64,
}

impl StandingRow {
    pub fn new(team_id: impl Into<EntityId>, points: f64) -> Self {
        Self {
            team_id: team_id.into(),
            team_name: None,
            group: None,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            points,
            score_difference: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    #[serde(default)]
    pub teams: Vec<TeamRef>,
}
