//! Views over the `tournamentsReducers` domain

use super::matches::MatchList;
use super::ranking::rank_standings;
use crate::config::MatchStatusConfig;
use crate::memo::{Memo, MemoSlot};
use crate::models::{
    collect_by_status, count_matches, EntityId, Group, StandingRow, Tournament, TournamentCategory,
};
use crate::store::{access, Store};
use std::sync::Arc;

pub type TournamentList = Arc<Vec<Arc<Tournament>>>;
pub type Standings = Arc<Vec<StandingRow>>;

pub struct TournamentSelectors {
    live_status: String,
    by_id: Memo<(TournamentList, EntityId), Option<Arc<Tournament>>>,
    by_sport: Memo<(TournamentList, EntityId), TournamentList>,
    by_category: Memo<(TournamentList, TournamentCategory), TournamentList>,
    standings_ranked: Memo<Standings, Standings>,
    standings_for_group: Memo<(Standings, String), Standings>,
    current_matches_count: Memo<Option<Arc<Tournament>>, usize>,
    current_live_matches: Memo<Option<Arc<Tournament>>, MatchList>,
}

impl TournamentSelectors {
    pub fn new(statuses: &MatchStatusConfig) -> Self {
        Self {
            live_status: statuses.live_status.clone(),
            by_id: Memo::new("tournaments.by_id"),
            by_sport: Memo::new("tournaments.by_sport"),
            by_category: Memo::new("tournaments.by_category"),
            standings_ranked: Memo::new("tournaments.standings_ranked"),
            standings_for_group: Memo::new("tournaments.standings_for_group"),
            current_matches_count: Memo::new("tournaments.current_matches_count"),
            current_live_matches: Memo::new("tournaments.current_live_matches"),
        }
    }

    pub fn all(&self, store: &Store) -> TournamentList {
        Arc::clone(&access::tournaments_slice(store).tournaments)
    }

    pub fn current(&self, store: &Store) -> Option<Arc<Tournament>> {
        access::tournaments_slice(store).tournament.clone()
    }

    pub fn standing(&self, store: &Store) -> Standings {
        Arc::clone(&access::tournaments_slice(store).standing)
    }

    pub fn groups(&self, store: &Store) -> Arc<Vec<Group>> {
        Arc::clone(&access::tournaments_slice(store).groups)
    }

    pub fn by_id(&self, store: &Store, id: impl Into<EntityId>) -> Option<Arc<Tournament>> {
        self.by_id.get_or_compute((self.all(store), id.into()), |(tournaments, id)| {
            tournaments.iter().find(|t| t.id == *id).cloned()
        })
    }

    pub fn by_sport(&self, store: &Store, sport_id: impl Into<EntityId>) -> TournamentList {
        self.by_sport.get_or_compute((self.all(store), sport_id.into()), |(tournaments, sport)| {
            Arc::new(tournaments.iter().filter(|t| t.sport_id == *sport).cloned().collect())
        })
    }

    /// Tournaments whose status falls in `category` (`active`/`in_progress`
    /// are both Active, and so on)
    pub fn by_category(&self, store: &Store, category: TournamentCategory) -> TournamentList {
        self.by_category.get_or_compute((self.all(store), category), |(tournaments, category)| {
            Arc::new(tournaments.iter().filter(|t| t.category() == *category).cloned().collect())
        })
    }

    pub fn standings_ranked(&self, store: &Store) -> Standings {
        self.standings_ranked
            .get_or_compute(self.standing(store), |rows| Arc::new(rank_standings(rows)))
    }

    /// Ranked rows of one group, built on [`TournamentSelectors::standings_ranked`]
    pub fn standings_for_group(&self, store: &Store, group: &str) -> Standings {
        let ranked = self.standings_ranked(store);
        self.standings_for_group.get_or_compute((ranked, group.to_string()), |(rows, group)| {
            Arc::new(rows.iter().filter(|r| r.group.as_deref() == Some(group.as_str())).cloned().collect())
        })
    }

    /// Same branch walk as the `matches` domain, over the current tournament
    pub fn current_matches_count(&self, store: &Store) -> usize {
        self.current_matches_count.get_or_compute(self.current(store), |current| {
            current.as_ref().map_or(0, |t| count_matches(t.stages()))
        })
    }

    pub fn current_live_matches(&self, store: &Store) -> MatchList {
        let status = &self.live_status;
        self.current_live_matches.get_or_compute(self.current(store), |current| {
            let live = current.as_ref().map(|t| collect_by_status(t.stages(), status));
            Arc::new(live.unwrap_or_default())
        })
    }

    pub(crate) fn memos(&self) -> Vec<&dyn MemoSlot> {
        vec![
            &self.by_id,
            &self.by_sport,
            &self.by_category,
            &self.standings_ranked,
            &self.standings_for_group,
            &self.current_matches_count,
            &self.current_live_matches,
        ]
    }
}

impl Default for TournamentSelectors {
    fn default() -> Self {
        Self::new(&MatchStatusConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memo::MemoStats;
    use crate::store::Action;
    use serde_json::json;

    fn sample_store() -> Store {
        Store::from_value(json!({
            "tournamentsReducers": {
                "tournaments": [
                    {"id": 1, "sport_id": 1, "status": "active"},
                    {"id": 2, "sport_id": 2, "status": "in_progress"},
                    {"id": 3, "sport_id": 1, "status": "upcoming"},
                    {"id": 4, "sport_id": 2, "status": "finished"}
                ],
                "tournament": {
                    "id": 1,
                    "sport_id": 1,
                    "status": "active",
                    "matches": [
                        {
                            "league_stage": [
                                {"id": 11, "status_code": "in_progress"},
                                {"id": 12, "status_code": "completed"}
                            ],
                            "knockout_stage": {"final": [{"id": 13, "status_code": "scheduled"}]}
                        }
                    ]
                },
                "standing": [
                    {"team_id": 1, "group": "A", "points": 3, "goal_difference": 1},
                    {"team_id": 2, "group": "B", "points": 6},
                    {"team_id": 3, "group": "A", "points": 6, "goal_difference": 2}
                ],
                "groups": [{"name": "A"}, {"name": "B"}]
            }
        }))
        .unwrap()
    }

    fn ids(list: &[Arc<Tournament>]) -> Vec<EntityId> {
        list.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_category_groups_status_spellings() {
        let views = TournamentSelectors::default();
        let store = sample_store();

        assert_eq!(ids(&views.by_category(&store, TournamentCategory::Active)), vec![EntityId::Num(1), EntityId::Num(2)]);
        assert_eq!(ids(&views.by_category(&store, TournamentCategory::Upcoming)), vec![EntityId::Num(3)]);
        assert_eq!(ids(&views.by_category(&store, TournamentCategory::Completed)), vec![EntityId::Num(4)]);
    }

    #[test]
    fn test_by_sport_and_id() {
        let views = TournamentSelectors::default();
        let store = sample_store();

        assert_eq!(ids(&views.by_sport(&store, 2)), vec![EntityId::Num(2), EntityId::Num(4)]);
        assert_eq!(views.by_id(&store, 3).unwrap().status, "upcoming");
        assert!(views.by_id(&store, 30).is_none());
    }

    #[test]
    fn test_current_tournament_walks_its_stages() {
        let views = TournamentSelectors::default();
        let store = sample_store();

        assert_eq!(views.current_matches_count(&store), 3);
        let live = views.current_live_matches(&store);
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].id, EntityId::Num(11));

        let cleared = store.apply(Action::SetCurrentTournament(None));
        assert_eq!(views.current_matches_count(&cleared), 0);
        assert!(views.current_live_matches(&cleared).is_empty());
    }

    #[test]
    fn test_group_standings_reuse_ranked_table() {
        let views = TournamentSelectors::default();
        let store = sample_store();

        let group_a = views.standings_for_group(&store, "A");
        let teams: Vec<String> = group_a.iter().map(|r| r.team_id.to_string()).collect();
        assert_eq!(teams, vec!["3", "1"]);

        // a groups-only change keeps the standing allocation
        let next = store.apply(Action::SetGroups(vec![]));
        let again = views.standings_for_group(&next, "A");
        assert!(Arc::ptr_eq(&group_a, &again));
        assert_eq!(views.standings_ranked.stats(), MemoStats { hits: 1, misses: 1 });
        assert_eq!(views.standings_for_group.stats(), MemoStats { hits: 1, misses: 1 });
    }

    #[test]
    fn test_projections_on_empty_store() {
        let views = TournamentSelectors::default();
        let store = Store::new();
        assert!(views.all(&store).is_empty());
        assert!(views.current(&store).is_none());
        assert!(views.standing(&store).is_empty());
        assert!(views.groups(&store).is_empty());
        assert!(views.standings_ranked(&store).is_empty());
    }
}
