use super::ids::EntityId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Match status code as sent by the backend.
///
/// The set of codes is open: new codes show up without a client release, so
/// this is a string wrapper compared by equality, not a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchStatus(String);

impl MatchStatus {
    pub const SCHEDULED: &'static str = "scheduled";
    pub const IN_PROGRESS: &'static str = "in_progress";
    pub const COMPLETED: &'static str = "completed";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is(&self, code: &str) -> bool {
        self.0 == code
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MatchStatus {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Team reference embedded in matches, tournaments and groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
}

/// A single fixture.
///
/// Only the fields the views read are typed; everything else the backend
/// sends (scores, venue details, officials...) is kept untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: EntityId,
    pub status_code: MatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_a: Option<TeamRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_b: Option<TeamRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Match {
    pub fn new(id: impl Into<EntityId>, status: impl Into<MatchStatus>) -> Self {
        Self {
            id: id.into(),
            status_code: status.into(),
            tournament_id: None,
            sport_id: None,
            team_a: None,
            team_b: None,
            start_time: None,
            extra: Map::new(),
        }
    }

    pub fn with_tournament(mut self, tournament_id: impl Into<EntityId>) -> Self {
        self.tournament_id = Some(tournament_id.into());
        self
    }

    pub fn is_live(&self) -> bool {
        self.status_code.is(MatchStatus::IN_PROGRESS)
    }
}
