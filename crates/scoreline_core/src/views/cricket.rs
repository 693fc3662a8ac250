use super::ranking::top_players;
use crate::memo::{Memo, MemoSlot};
use crate::models::{EntityId, Innings, PlayerScore, Toss};
use crate::store::{access, Store};
use std::sync::Arc;

pub type ScoreList = Arc<Vec<Arc<PlayerScore>>>;

pub struct CricketSelectors {
    top_n: usize,
    top_batsmen: Memo<ScoreList, ScoreList>,
    top_bowlers: Memo<ScoreList, ScoreList>,
    innings_total_runs: Memo<Arc<Vec<Innings>>, u64>,
}

impl CricketSelectors {
    pub fn new(top_n: usize) -> Self {
        Self {
            top_n,
            top_batsmen: Memo::new("cricket.top_batsmen"),
            top_bowlers: Memo::new("cricket.top_bowlers"),
            innings_total_runs: Memo::new("cricket.innings_total_runs"),
        }
    }

    pub fn toss(&self, store: &Store) -> Option<Arc<Toss>> {
        access::cricket_slice(store).toss.clone()
    }

    pub fn toss_winner(&self, store: &Store) -> Option<EntityId> {
        self.toss(store).and_then(|toss| toss.winner_team_id.clone())
    }

    pub fn batting(&self, store: &Store) -> ScoreList {
        Arc::clone(&access::cricket_slice(store).batting)
    }

    pub fn bowling(&self, store: &Store) -> ScoreList {
        Arc::clone(&access::cricket_slice(store).bowling)
    }

    pub fn innings(&self, store: &Store) -> Arc<Vec<Innings>> {
        Arc::clone(&access::cricket_slice(store).innings)
    }

    /// Last innings in the list
    pub fn current_innings(&self, store: &Store) -> Option<Innings> {
        access::cricket_slice(store).innings.last().cloned()
    }

    /// Summed as `u64`: per-innings runs are `u32`
    pub fn innings_total_runs(&self, store: &Store) -> u64 {
        self.innings_total_runs
            .get_or_compute(self.innings(store), |innings| innings.iter().map(|i| u64::from(i.runs)).sum())
    }

    /// Top N batting cards by `runs`
    pub fn top_batsmen(&self, store: &Store) -> ScoreList {
        let n = self.top_n;
        self.top_batsmen
            .get_or_compute(self.batting(store), |batting| Arc::new(top_players(batting, "runs", n)))
    }

    /// Top N bowling cards by `wickets`
    pub fn top_bowlers(&self, store: &Store) -> ScoreList {
        let n = self.top_n;
        self.top_bowlers
            .get_or_compute(self.bowling(store), |bowling| Arc::new(top_players(bowling, "wickets", n)))
    }

    pub(crate) fn memos(&self) -> Vec<&dyn MemoSlot> {
        vec![&self.top_batsmen, &self.top_bowlers, &self.innings_total_runs]
    }
}

impl Default for CricketSelectors {
    fn default() -> Self {
        Self::new(crate::config::RankingConfig::default().top_n)
    }
}
