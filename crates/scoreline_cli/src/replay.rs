//! Action replay: apply actions one by one and report which views a
//! consumer would re-render after each step

use anyhow::{Context, Result};
use scoreline_core::views::{MatchList, ScoreList, Standings};
use scoreline_core::{Action, Selectors, Store, Watch};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayStep {
    pub step: usize,
    pub action: String,
    pub changed: Vec<&'static str>,
}

#[derive(Default)]
struct Watches {
    live: Watch<MatchList>,
    upcoming: Watch<MatchList>,
    count: Watch<usize>,
    standings: Watch<Standings>,
    top_batsmen: Watch<ScoreList>,
    top_bowlers: Watch<ScoreList>,
    top_scorers: Watch<ScoreList>,
    authenticated: Watch<bool>,
    loading_operations: Watch<Arc<Vec<String>>>,
}

impl Watches {
    fn observe(&mut self, selectors: &Selectors, store: &Store) -> Vec<&'static str> {
        let mut changed = Vec::new();
        let mut check = |name: &'static str, did_change: bool| {
            if did_change {
                changed.push(name);
            }
        };

        check("matches.live", self.live.observe(selectors.matches.live(store)));
        check("matches.upcoming", self.upcoming.observe(selectors.matches.upcoming(store)));
        check("matches.count", self.count.observe(selectors.matches.count(store)));
        check("tournaments.standings_ranked", self.standings.observe(selectors.tournaments.standings_ranked(store)));
        check("cricket.top_batsmen", self.top_batsmen.observe(selectors.cricket.top_batsmen(store)));
        check("cricket.top_bowlers", self.top_bowlers.observe(selectors.cricket.top_bowlers(store)));
        check("football.top_scorers", self.top_scorers.observe(selectors.football.top_scorers(store)));
        check("auth.is_authenticated", self.authenticated.observe(selectors.auth.is_authenticated(store)));
        check(
            "loading.loading_operations",
            self.loading_operations.observe(selectors.loading.loading_operations(store)),
        );
        changed
    }
}

pub fn load_actions(path: &Path) -> Result<Vec<Action>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read actions file: {}", path.display()))?;
    serde_json::from_str(&content).context("Failed to parse actions")
}

fn action_name(action: &Action) -> String {
    serde_json::to_value(action)
        .ok()
        .and_then(|value| value.get("type").and_then(|t| t.as_str()).map(str::to_string))
        .unwrap_or_else(|| "UNKNOWN".to_string())
}

/// Step 0 is the initial store; step `n` is after the n-th action
pub fn replay(selectors: &Selectors, store: Store, actions: Vec<Action>) -> (Store, Vec<ReplayStep>) {
    let mut watches = Watches::default();
    let mut steps = vec![ReplayStep {
        step: 0,
        action: "INITIAL".to_string(),
        changed: watches.observe(selectors, &store),
    }];

    let mut store = store;
    for (index, action) in actions.into_iter().enumerate() {
        let name = action_name(&action);
        store = store.apply(action);
        let changed = watches.observe(selectors, &store);
        debug!(step = index + 1, action = %name, changed = changed.len(), "replayed action");
        steps.push(ReplayStep { step: index + 1, action: name, changed });
    }

    (store, steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_touched_views_change() {
        let selectors = Selectors::default();
        let actions: Vec<Action> = serde_json::from_value(json!([
            {"type": "SET_LOADING", "payload": {"operation": "fetchMatches", "loading": true}},
            {"type": "SET_MATCHES", "payload": [{"league_stage": [{"id": 1, "status_code": "in_progress"}]}]},
            {"type": "LOGIN", "payload": {"token": "abc"}},
            {"type": "LOGOUT"}
        ]))
        .unwrap();

        let (store, steps) = replay(&selectors, Store::new(), actions);
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0].changed.len(), 9);
        assert_eq!(steps[1].changed, vec!["loading.loading_operations"]);
        assert_eq!(steps[2].action, "SET_MATCHES");
        assert_eq!(steps[2].changed, vec!["matches.live", "matches.upcoming", "matches.count"]);
        assert_eq!(steps[3].changed, vec!["auth.is_authenticated"]);
        assert_eq!(steps[4].changed, vec!["auth.is_authenticated"]);
        assert_eq!(selectors.matches.live_count(&store), 1);
    }

    #[test]
    fn test_load_actions_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actions.json");
        fs::write(&path, r#"[{"type": "RESET"}, {"type": "UNFOLLOW", "payload": 3}]"#).unwrap();

        let actions = load_actions(&path).unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(action_name(&actions[1]), "UNFOLLOW");
    }
}
