//! Named view lookup for the `query` command

use anyhow::{anyhow, bail, Context, Result};
use scoreline_core::models::{Branch, EntityId, TeamSide, TournamentCategory};
use scoreline_core::{Selectors, Store};
use serde::Serialize;
use serde_json::Value;

/// Parameters a view may need; each view reads only its own
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub id: Option<String>,
    pub status: Option<String>,
    pub form: Option<String>,
    pub field: Option<String>,
    pub sport: Option<String>,
    pub side: Option<String>,
    pub kind: Option<String>,
    pub category: Option<String>,
    pub group: Option<String>,
    pub operation: Option<String>,
    pub branch: Option<String>,
}

impl QueryParams {
    fn require<'a>(value: &'a Option<String>, flag: &str, view: &str) -> Result<&'a str> {
        value.as_deref().ok_or_else(|| anyhow!("view '{view}' needs --{flag}"))
    }

    fn id(&self, view: &str) -> Result<EntityId> {
        Self::require(&self.id, "id", view).map(EntityId::parse)
    }

    fn side(&self, view: &str) -> Result<TeamSide> {
        let raw = Self::require(&self.side, "side", view)?;
        TeamSide::parse(raw).with_context(|| format!("unknown side '{raw}' (team_a, team_b)"))
    }

    fn branch(&self, view: &str) -> Result<Branch> {
        let raw = Self::require(&self.branch, "branch", view)?;
        Branch::parse(raw).with_context(|| format!("unknown branch '{raw}' (league, group, final, semifinal, ...)"))
    }

    fn category(&self, view: &str) -> Result<TournamentCategory> {
        let raw = Self::require(&self.category, "category", view)?;
        TournamentCategory::parse(raw)
            .with_context(|| format!("unknown category '{raw}' (active, upcoming, completed, other)"))
    }
}

/// Every view name `run_query` accepts
pub const VIEWS: &[&str] = &[
    "matches",
    "current-match",
    "match",
    "matches-by-status",
    "live",
    "live-count",
    "upcoming",
    "completed",
    "count",
    "matches-for-tournament",
    "status-counts",
    "branch-matches",
    "tournaments",
    "current-tournament",
    "tournament",
    "tournaments-by-sport",
    "tournaments-by-category",
    "standing",
    "standings-ranked",
    "group-standings",
    "groups",
    "current-tournament-matches-count",
    "current-tournament-live",
    "auth-user",
    "auth-token",
    "authenticated",
    "profile",
    "following",
    "following-count",
    "followers-count",
    "is-following",
    "toss",
    "toss-winner",
    "innings",
    "current-innings",
    "innings-total-runs",
    "top-batsmen",
    "top-bowlers",
    "lineups",
    "lineup",
    "incidents",
    "incidents-by-type",
    "goal-count",
    "top-scorers",
    "any-loading",
    "loading-operations",
    "is-loading",
    "form-errors",
    "field-error",
    "has-errors",
    "cache-report",
];

fn json<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).context("Failed to serialize view output")
}

/// Evaluate the view called `view` and return its output as JSON
pub fn run_query(selectors: &Selectors, store: &Store, view: &str, params: &QueryParams) -> Result<Value> {
    let s = selectors;
    match view {
        "matches" => json(s.matches.all(store)),
        "current-match" => json(s.matches.current(store)),
        "match" => json(s.matches.by_id(store, params.id(view)?)),
        "matches-by-status" => {
            let status = QueryParams::require(&params.status, "status", view)?;
            json(s.matches.by_status(store, status))
        }
        "live" => json(s.matches.live(store)),
        "live-count" => json(s.matches.live_count(store)),
        "upcoming" => json(s.matches.upcoming(store)),
        "completed" => json(s.matches.completed(store)),
        "count" => json(s.matches.count(store)),
        "matches-for-tournament" => json(s.matches.for_tournament(store, params.id(view)?)),
        "status-counts" => json(s.matches.status_counts(store)),
        "branch-matches" => json(s.matches.in_branch(store, params.branch(view)?)),

        "tournaments" => json(s.tournaments.all(store)),
        "current-tournament" => json(s.tournaments.current(store)),
        "tournament" => json(s.tournaments.by_id(store, params.id(view)?)),
        "tournaments-by-sport" => {
            let sport = QueryParams::require(&params.sport, "sport", view)?;
            json(s.tournaments.by_sport(store, EntityId::parse(sport)))
        }
        "tournaments-by-category" => json(s.tournaments.by_category(store, params.category(view)?)),
        "standing" => json(s.tournaments.standing(store)),
        "standings-ranked" => json(s.tournaments.standings_ranked(store)),
        "group-standings" => {
            let group = QueryParams::require(&params.group, "group", view)?;
            json(s.tournaments.standings_for_group(store, group))
        }
        "groups" => json(s.tournaments.groups(store)),
        "current-tournament-matches-count" => json(s.tournaments.current_matches_count(store)),
        "current-tournament-live" => json(s.tournaments.current_live_matches(store)),

        "auth-user" => json(s.auth.user(store)),
        "auth-token" => json(s.auth.token(store)),
        "authenticated" => json(s.auth.is_authenticated(store)),

        "profile" => json(s.user.profile(store)),
        "following" => json(s.user.following(store)),
        "following-count" => json(s.user.following_count(store)),
        "followers-count" => json(s.user.followers_count(store)),
        "is-following" => json(s.user.is_following(store, params.id(view)?)),

        "toss" => json(s.cricket.toss(store)),
        "toss-winner" => json(s.cricket.toss_winner(store)),
        "innings" => json(s.cricket.innings(store)),
        "current-innings" => json(s.cricket.current_innings(store)),
        "innings-total-runs" => json(s.cricket.innings_total_runs(store)),
        "top-batsmen" => json(s.cricket.top_batsmen(store)),
        "top-bowlers" => json(s.cricket.top_bowlers(store)),

        "lineups" => json(s.football.lineups(store)),
        "lineup" => json(s.football.lineup(store, params.side(view)?)),
        "incidents" => json(s.football.incidents(store)),
        "incidents-by-type" => {
            let kind = QueryParams::require(&params.kind, "kind", view)?;
            json(s.football.incidents_by_type(store, kind))
        }
        "goal-count" => json(s.football.goal_count(store, params.side(view)?)),
        "top-scorers" => json(s.football.top_scorers(store)),

        "any-loading" => json(s.loading.any_loading(store)),
        "loading-operations" => json(s.loading.loading_operations(store)),
        "is-loading" => {
            let operation = QueryParams::require(&params.operation, "operation", view)?;
            json(s.loading.is_loading(store, operation))
        }

        "form-errors" => {
            let form = QueryParams::require(&params.form, "form", view)?;
            json(s.validation.form_errors(store, form))
        }
        "field-error" => {
            let form = QueryParams::require(&params.form, "form", view)?;
            let field = QueryParams::require(&params.field, "field", view)?;
            json(s.validation.field_error(store, form, field))
        }
        "has-errors" => {
            let form = QueryParams::require(&params.form, "form", view)?;
            json(s.validation.has_errors(store, form))
        }

        "cache-report" => json(s.cache_report()),

        other => bail!("unknown view '{other}', expected one of: {}", VIEWS.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> Store {
        Store::from_value(json!({
            "matches": {
                "matches": [{
                    "league_stage": [{"id": 1, "status_code": "in_progress"}],
                    "group_stage": [{"id": 2, "status_code": "scheduled"}]
                }]
            },
            "validation": {"forms": {"login": {"email": "required"}}},
            "football": {"incidents": [{"type": "goal", "side": "team_b"}]}
        }))
        .unwrap()
    }

    #[test]
    fn test_every_listed_view_is_known() {
        let selectors = Selectors::default();
        let params = QueryParams {
            id: Some("1".into()),
            status: Some("scheduled".into()),
            form: Some("login".into()),
            field: Some("email".into()),
            sport: Some("1".into()),
            side: Some("team_a".into()),
            kind: Some("goal".into()),
            category: Some("active".into()),
            group: Some("A".into()),
            operation: Some("fetchUser".into()),
            branch: Some("final".into()),
        };
        for view in VIEWS {
            assert!(run_query(&selectors, &store(), view, &params).is_ok(), "view {view} failed");
        }
    }

    #[test]
    fn test_query_outputs() {
        let selectors = Selectors::default();
        let store = store();
        let none = QueryParams::default();

        assert_eq!(run_query(&selectors, &store, "count", &none).unwrap(), json!(2));
        assert_eq!(
            run_query(&selectors, &store, "match", &QueryParams { id: Some("2".into()), ..Default::default() })
                .unwrap()["status_code"],
            json!("scheduled")
        );
        assert_eq!(
            run_query(&selectors, &store, "goal-count", &QueryParams { side: Some("away".into()), ..Default::default() })
                .unwrap(),
            json!(1)
        );
        assert_eq!(
            run_query(
                &selectors,
                &store,
                "field-error",
                &QueryParams { form: Some("login".into()), field: Some("password".into()), ..Default::default() }
            )
            .unwrap(),
            Value::Null
        );
    }

    #[test]
    fn test_missing_param_and_unknown_view() {
        let selectors = Selectors::default();
        let err = run_query(&selectors, &store(), "match", &QueryParams::default()).unwrap_err();
        assert!(err.to_string().contains("--id"));

        let bad_branch = QueryParams { branch: Some("playoffs".into()), ..Default::default() };
        let err = run_query(&selectors, &store(), "branch-matches", &bad_branch).unwrap_err();
        assert!(err.to_string().contains("unknown branch"));

        let err = run_query(&selectors, &store(), "nope", &QueryParams::default()).unwrap_err();
        assert!(err.to_string().contains("unknown view"));
    }
}
