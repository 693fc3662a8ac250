use super::cricket::ScoreList;
use super::ranking::top_players;
use crate::memo::{Memo, MemoSlot};
use crate::models::{Incident, LineupEntry, Lineups, TeamSide};
use crate::store::{access, Store};
use once_cell::sync::Lazy;
use std::sync::Arc;

pub type IncidentList = Arc<Vec<Incident>>;

static NO_LINEUP: Lazy<Arc<Vec<LineupEntry>>> = Lazy::new(|| Arc::new(Vec::new()));

pub struct FootballSelectors {
    top_n: usize,
    incidents_by_type: Memo<(IncidentList, String), IncidentList>,
    goals: Memo<IncidentList, IncidentList>,
    goal_count: Memo<(IncidentList, TeamSide), usize>,
    top_scorers: Memo<ScoreList, ScoreList>,
}

impl FootballSelectors {
    pub fn new(top_n: usize) -> Self {
        Self {
            top_n,
            incidents_by_type: Memo::new("football.incidents_by_type"),
            goals: Memo::new("football.goals"),
            goal_count: Memo::new("football.goal_count"),
            top_scorers: Memo::new("football.top_scorers"),
        }
    }

    pub fn lineups(&self, store: &Store) -> Option<Arc<Lineups>> {
        access::football_slice(store).lineups.clone()
    }

    /// One side's lineup; empty when no lineups are loaded
    pub fn lineup(&self, store: &Store, side: TeamSide) -> Arc<Vec<LineupEntry>> {
        match &access::football_slice(store).lineups {
            Some(lineups) => Arc::clone(lineups.side(side)),
            None => Arc::clone(&NO_LINEUP),
        }
    }

    pub fn incidents(&self, store: &Store) -> IncidentList {
        Arc::clone(&access::football_slice(store).incidents)
    }

    pub fn scorers(&self, store: &Store) -> ScoreList {
        Arc::clone(&access::football_slice(store).scorers)
    }

    pub fn incidents_by_type(&self, store: &Store, kind: &str) -> IncidentList {
        self.incidents_by_type.get_or_compute((self.incidents(store), kind.to_string()), |(incidents, kind)| {
            Arc::new(incidents.iter().filter(|i| i.kind == *kind).cloned().collect())
        })
    }

    fn goals(&self, store: &Store) -> IncidentList {
        self.goals.get_or_compute(self.incidents(store), |incidents| {
            Arc::new(incidents.iter().filter(|i| i.kind == Incident::GOAL).cloned().collect())
        })
    }

    /// Goal incidents credited to `side`, built on the goal list
    pub fn goal_count(&self, store: &Store, side: TeamSide) -> usize {
        self.goal_count.get_or_compute((self.goals(store), side), |(goals, side)| {
            goals.iter().filter(|g| g.side == Some(*side)).count()
        })
    }

    /// Top N scorers by `goals`
    pub fn top_scorers(&self, store: &Store) -> ScoreList {
        let n = self.top_n;
        self.top_scorers
            .get_or_compute(self.scorers(store), |scorers| Arc::new(top_players(scorers, "goals", n)))
    }

    pub(crate) fn memos(&self) -> Vec<&dyn MemoSlot> {
        vec![&self.incidents_by_type, &self.goals, &self.goal_count, &self.top_scorers]
    }
}

impl Default for FootballSelectors {
    fn default() -> Self {
        Self::new(crate::config::RankingConfig::default().top_n)
    }
}
