//! Views over the `matches` domain

use crate::config::MatchStatusConfig;
use crate::memo::{Memo, MemoSlot};
use crate::models::{
    collect_by_status, count_matches, find_match, in_branch, iter_matches, Branch, EntityId, Match, Stage,
};
use crate::store::{access, Store};
use std::sync::Arc;

pub type MatchList = Arc<Vec<Arc<Match>>>;
pub type StageList = Arc<Vec<Stage>>;

pub struct MatchSelectors {
    statuses: MatchStatusConfig,
    by_id: Memo<(StageList, EntityId), Option<Arc<Match>>>,
    by_status: Memo<(StageList, String), MatchList>,
    live: Memo<StageList, MatchList>,
    live_count: Memo<MatchList, usize>,
    upcoming: Memo<StageList, MatchList>,
    completed: Memo<StageList, MatchList>,
    count: Memo<StageList, usize>,
    for_tournament: Memo<(StageList, EntityId), MatchList>,
    status_counts: Memo<StageList, Arc<Vec<(String, usize)>>>,
    in_branch: Memo<(StageList, Branch), MatchList>,
}

impl MatchSelectors {
    pub fn new(statuses: MatchStatusConfig) -> Self {
        Self {
            statuses,
            by_id: Memo::new("matches.by_id"),
            by_status: Memo::new("matches.by_status"),
            live: Memo::new("matches.live"),
            live_count: Memo::new("matches.live_count"),
            upcoming: Memo::new("matches.upcoming"),
            completed: Memo::new("matches.completed"),
            count: Memo::new("matches.count"),
            for_tournament: Memo::new("matches.for_tournament"),
            status_counts: Memo::new("matches.status_counts"),
            in_branch: Memo::new("matches.in_branch"),
        }
    }

    /// Every stage, as stored
    pub fn all(&self, store: &Store) -> StageList {
        Arc::clone(&access::matches_slice(store).matches)
    }

    /// Match currently open on screen
    pub fn current(&self, store: &Store) -> Option<Arc<Match>> {
        access::matches_slice(store).current.clone()
    }

    /// First match with `id` across all stages and branches
    pub fn by_id(&self, store: &Store, id: impl Into<EntityId>) -> Option<Arc<Match>> {
        self.by_id
            .get_or_compute((self.all(store), id.into()), |(stages, id)| find_match(stages, id).cloned())
    }

    /// Matches with `status_code == status`, traversal order, duplicates kept
    pub fn by_status(&self, store: &Store, status: &str) -> MatchList {
        self.by_status.get_or_compute((self.all(store), status.to_string()), |(stages, status)| {
            Arc::new(collect_by_status(stages, status))
        })
    }

    pub fn live(&self, store: &Store) -> MatchList {
        let status = &self.statuses.live_status;
        self.live.get_or_compute(self.all(store), |stages| Arc::new(collect_by_status(stages, status)))
    }

    /// Number of live matches, derived from [`MatchSelectors::live`]
    pub fn live_count(&self, store: &Store) -> usize {
        self.live_count.get_or_compute(self.live(store), |live| live.len())
    }

    pub fn upcoming(&self, store: &Store) -> MatchList {
        let status = &self.statuses.upcoming_status;
        self.upcoming
            .get_or_compute(self.all(store), |stages| Arc::new(collect_by_status(stages, status)))
    }

    pub fn completed(&self, store: &Store) -> MatchList {
        let status = &self.statuses.completed_status;
        self.completed
            .get_or_compute(self.all(store), |stages| Arc::new(collect_by_status(stages, status)))
    }

    /// Sum of every branch length across every stage
    pub fn count(&self, store: &Store) -> usize {
        self.count.get_or_compute(self.all(store), |stages| count_matches(stages))
    }

    pub fn for_tournament(&self, store: &Store, tournament_id: impl Into<EntityId>) -> MatchList {
        self.for_tournament.get_or_compute((self.all(store), tournament_id.into()), |(stages, id)| {
            let matches = iter_matches(stages)
                .filter(|m| m.tournament_id.as_ref() == Some(id))
                .cloned()
                .collect();
            Arc::new(matches)
        })
    }

    /// Status code → number of matches, in order of first appearance
    pub fn status_counts(&self, store: &Store) -> Arc<Vec<(String, usize)>> {
        self.status_counts.get_or_compute(self.all(store), |stages| {
            let mut counts: Vec<(String, usize)> = Vec::new();
            for m in iter_matches(stages) {
                match counts.iter_mut().find(|(code, _)| m.status_code.is(code)) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((m.status_code.as_str().to_string(), 1)),
                }
            }
            Arc::new(counts)
        })
    }

    /// One branch (e.g. every `semifinal`) across all stages
    pub fn in_branch(&self, store: &Store, branch: Branch) -> MatchList {
        self.in_branch
            .get_or_compute((self.all(store), branch), |(stages, branch)| Arc::new(in_branch(stages, *branch)))
    }

    pub(crate) fn memos(&self) -> Vec<&dyn MemoSlot> {
        vec![
            &self.by_id,
            &self.by_status,
            &self.live,
            &self.live_count,
            &self.upcoming,
            &self.completed,
            &self.count,
            &self.for_tournament,
            &self.status_counts,
            &self.in_branch,
        ]
    }
}

impl Default for MatchSelectors {
    fn default() -> Self {
        Self::new(MatchStatusConfig::default())
    }
}
