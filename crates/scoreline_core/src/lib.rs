//! # scoreline_core - Derived views over a normalized sports store
//!
//! Read-side layer for a sports/community client: the store holds one slice
//! per domain (auth, user, matches, tournaments, cricket, football, loading,
//! validation), and views turn slices into what screens display.
//!
//! ## Features
//! - Total accessors: an unset domain reads as its documented default
//! - One-slot memoized views with reference-identity keys
//! - Reducer with structural sharing, so unrelated updates keep views cached
//! - Versioned, checksummed store snapshots

// Doc formatting lints - purely cosmetic
#![allow(clippy::doc_lazy_continuation)]
// Memo keys are tuples of Arcs
#![allow(clippy::type_complexity)]
// Store actions carry whole slices
#![allow(clippy::large_enum_variant)]

pub mod config;
pub mod consumer;
pub mod error;
pub mod memo;
pub mod models;
pub mod persist;
pub mod store;
pub mod views;

pub use config::CoreConfig;
pub use consumer::Watch;
pub use error::{ConfigError, Result, StoreError};
pub use memo::{Memo, MemoKey, MemoStats};
pub use models::{EntityId, Match, MatchStatus, Stage, TeamSide, Tournament, TournamentCategory};
pub use persist::{SnapshotError, StoreSnapshot};
pub use store::{Action, Store};
pub use views::Selectors;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> serde_json::Value {
        json!({
            "matches": {
                "matches": [
                    {
                        "league_stage": [{"id": 1, "status_code": "in_progress"}],
                        "knockout_stage": {"final": [{"id": 2, "status_code": "in_progress"}]}
                    }
                ]
            },
            "loading": {"operations": {"fetchMatches": true}}
        })
    }

    #[test]
    fn test_views_are_deterministic() {
        let store = Store::from_value(fixture()).unwrap();
        let a = Selectors::default();
        let b = Selectors::default();

        assert_eq!(a.matches.live(&store), b.matches.live(&store));
        assert_eq!(a.matches.count(&store), b.matches.count(&store));
        assert_eq!(a.loading.loading_operations(&store), b.loading.loading_operations(&store));
    }

    #[test]
    fn test_cache_report_snapshot() {
        let selectors = Selectors::default();
        let store = Store::from_value(fixture()).unwrap();
        selectors.matches.live_count(&store);
        selectors.matches.live_count(&store.apply(Action::Logout));

        let stats = selectors
            .cache_report()
            .into_iter()
            .find(|(name, _)| *name == "matches.live")
            .map(|(_, stats)| stats)
            .unwrap();
        insta::assert_json_snapshot!(stats, @r###"
        {
          "hits": 1,
          "misses": 1
        }
        "###);
    }

    #[test]
    fn test_status_counts_snapshot() {
        let selectors = Selectors::default();
        let store = Store::from_value(fixture()).unwrap();
        insta::assert_json_snapshot!(selectors.matches.status_counts(&store), @r###"
        [
          [
            "in_progress",
            2
          ]
        ]
        "###);
    }
}
