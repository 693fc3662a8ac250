//! Normalized client store
//!
//! The store is a plain value: one reference-counted slice per top-level
//! domain. A new store is produced by swapping individual slices (see
//! [`action`]); untouched slices keep their allocation, which is what the
//! memoized views key on.
//!
//! Domains that were never populated are `None`; [`access`] substitutes the
//! documented default once, at the accessor boundary.

pub mod access;
pub mod action;
pub mod ordered;

pub use action::Action;
pub use ordered::OperationFlags;

use crate::error::{Result, StoreError};
use crate::models::{
    FollowEntry, Group, Incident, Innings, Lineups, Match, PlayerScore, Stage, StandingRow, Toss,
    Tournament, UserProfile,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Top-level domain keys as they appear in the serialized store
pub mod domain {
    pub const AUTH: &str = "auth";
    pub const USER: &str = "user";
    pub const MATCHES: &str = "matches";
    pub const TOURNAMENTS: &str = "tournamentsReducers";
    pub const CRICKET: &str = "cricket";
    pub const FOOTBALL: &str = "football";
    pub const LOADING: &str = "loading";
    pub const VALIDATION: &str = "validation";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<Arc<UserProfile>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserState {
    #[serde(default)]
    pub profile: Option<Arc<UserProfile>>,
    #[serde(default)]
    pub following: Arc<Vec<FollowEntry>>,
    #[serde(default)]
    pub followers: Arc<Vec<FollowEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchesState {
    #[serde(default)]
    pub matches: Arc<Vec<Stage>>,
    /// Match currently open on screen
    #[serde(default, rename = "match")]
    pub current: Option<Arc<Match>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentsState {
    #[serde(default)]
    pub tournaments: Arc<Vec<Arc<Tournament>>>,
    #[serde(default)]
    pub tournament: Option<Arc<Tournament>>,
    #[serde(default)]
    pub standing: Arc<Vec<StandingRow>>,
    #[serde(default)]
    pub groups: Arc<Vec<Group>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CricketState {
    #[serde(default)]
    pub toss: Option<Arc<Toss>>,
    #[serde(default)]
    pub batting: Arc<Vec<Arc<PlayerScore>>>,
    #[serde(default)]
    pub bowling: Arc<Vec<Arc<PlayerScore>>>,
    #[serde(default)]
    pub innings: Arc<Vec<Innings>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FootballState {
    #[serde(default)]
    pub lineups: Option<Arc<Lineups>>,
    #[serde(default)]
    pub incidents: Arc<Vec<Incident>>,
    #[serde(default)]
    pub scorers: Arc<Vec<Arc<PlayerScore>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadingState {
    #[serde(default)]
    pub operations: Arc<OperationFlags>,
}

/// Field name → error message for one form
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationState {
    #[serde(default)]
    pub forms: Arc<BTreeMap<String, Arc<FieldErrors>>>,
}

/// Snapshot of the whole client state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Arc<AuthState>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Arc<UserState>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<Arc<MatchesState>>,
    #[serde(default, rename = "tournamentsReducers", skip_serializing_if = "Option::is_none")]
    pub tournaments: Option<Arc<TournamentsState>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cricket: Option<Arc<CricketState>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub football: Option<Arc<FootballState>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading: Option<Arc<LoadingState>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<Arc<ValidationState>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a store from backend-shaped JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Decode a store from a JSON value, naming the domain that failed.
    ///
    /// Unknown top-level keys (e.g. domains this layer does not read) are
    /// ignored. A missing or `null` domain stays unset.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut domains) = value else {
            return Err(StoreError::MalformedShape {
                domain: "<root>",
                reason: "store must be a JSON object".to_string(),
            });
        };

        Ok(Self {
            auth: take_domain(&mut domains, domain::AUTH)?,
            user: take_domain(&mut domains, domain::USER)?,
            matches: take_domain(&mut domains, domain::MATCHES)?,
            tournaments: take_domain(&mut domains, domain::TOURNAMENTS)?,
            cricket: take_domain(&mut domains, domain::CRICKET)?,
            football: take_domain(&mut domains, domain::FOOTBALL)?,
            loading: take_domain(&mut domains, domain::LOADING)?,
            validation: take_domain(&mut domains, domain::VALIDATION)?,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_matches(mut self, matches: MatchesState) -> Self {
        self.matches = Some(Arc::new(matches));
        self
    }

    pub fn with_tournaments(mut self, tournaments: TournamentsState) -> Self {
        self.tournaments = Some(Arc::new(tournaments));
        self
    }

    pub fn with_loading(mut self, loading: LoadingState) -> Self {
        self.loading = Some(Arc::new(loading));
        self
    }

    pub fn with_validation(mut self, validation: ValidationState) -> Self {
        self.validation = Some(Arc::new(validation));
        self
    }
}

fn take_domain<T: DeserializeOwned>(
    domains: &mut Map<String, Value>,
    name: &'static str,
) -> Result<Option<Arc<T>>> {
    match domains.remove(name) {
        None | Some(Value::Null) => Ok(None),
        Some(slice) => serde_json::from_value(slice)
            .map(|state| Some(Arc::new(state)))
            .map_err(|e| StoreError::MalformedShape { domain: name, reason: e.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_domains_stay_unset() {
        let store = Store::from_value(json!({ "loading": { "operations": {} } })).unwrap();
        assert!(store.matches.is_none());
        assert!(store.loading.is_some());
    }

    #[test]
    fn test_matches_not_an_array_is_malformed() {
        let err = Store::from_value(json!({ "matches": { "matches": {"id": 1} } })).unwrap_err();
        match err {
            StoreError::MalformedShape { domain: name, .. } => assert_eq!(name, domain::MATCHES),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_root_must_be_object() {
        assert!(matches!(
            Store::from_value(json!([1, 2])),
            Err(StoreError::MalformedShape { domain: "<root>", .. })
        ));
    }

    #[test]
    fn test_tournaments_domain_key() {
        let store = Store::from_value(json!({
            "tournamentsReducers": {
                "tournaments": [{"id": 1, "sport_id": 2, "status": "active"}],
                "tournament": null
            }
        }))
        .unwrap();

        let tournaments = store.tournaments.unwrap();
        assert_eq!(tournaments.tournaments.len(), 1);
        assert!(tournaments.tournament.is_none());
    }

    #[test]
    fn test_json_round_trip_keeps_current_match_key() {
        let store = Store::new().with_matches(MatchesState {
            matches: Arc::new(vec![]),
            current: Some(Arc::new(Match::new(3, "scheduled"))),
        });

        let json = store.to_json().unwrap();
        assert!(json.contains(r#""match":{"#));
        assert_eq!(Store::from_json(&json).unwrap(), store);
    }
}
