//! Derived views over the store
//!
//! Every view is a function of `(store, params)`. Direct projections read a
//! slice through [`crate::store::access`] and return it as is. Derived views
//! sit behind a one-slot [`Memo`](crate::memo::Memo) keyed on the slices they
//! read, and composite views key on the outputs of the views they build on.
//!
//! Views are grouped per domain. [`Selectors`] bundles one instance of each
//! group; independent instances never share cache slots.

pub mod auth;
pub mod cricket;
pub mod football;
pub mod loading;
pub mod matches;
pub(crate) mod ranking;
pub mod tournaments;
pub mod user;
pub mod validation;

pub use auth::AuthSelectors;
pub use cricket::{CricketSelectors, ScoreList};
pub use football::{FootballSelectors, IncidentList};
pub use loading::LoadingSelectors;
pub use matches::{MatchList, MatchSelectors, StageList};
pub use tournaments::{Standings, TournamentList, TournamentSelectors};
pub use user::UserSelectors;
pub use validation::ValidationSelectors;

use crate::config::CoreConfig;
use crate::memo::{MemoSlot, MemoStats};

/// The full set of views, configured once
pub struct Selectors {
    pub auth: AuthSelectors,
    pub user: UserSelectors,
    pub matches: MatchSelectors,
    pub tournaments: TournamentSelectors,
    pub cricket: CricketSelectors,
    pub football: FootballSelectors,
    pub loading: LoadingSelectors,
    pub validation: ValidationSelectors,
}

impl Selectors {
    pub fn new(config: &CoreConfig) -> Self {
        Self {
            auth: AuthSelectors::new(),
            user: UserSelectors::new(),
            matches: MatchSelectors::new(config.matches.clone()),
            tournaments: TournamentSelectors::new(&config.matches),
            cricket: CricketSelectors::new(config.ranking.top_n),
            football: FootballSelectors::new(config.ranking.top_n),
            loading: LoadingSelectors::new(),
            validation: ValidationSelectors::new(),
        }
    }

    fn memos(&self) -> Vec<&dyn MemoSlot> {
        let mut all = Vec::new();
        all.extend(self.auth.memos());
        all.extend(self.user.memos());
        all.extend(self.matches.memos());
        all.extend(self.tournaments.memos());
        all.extend(self.cricket.memos());
        all.extend(self.football.memos());
        all.extend(self.loading.memos());
        all.extend(self.validation.memos());
        all
    }

    /// Hit/miss counters per memoized view, in declaration order
    pub fn cache_report(&self) -> Vec<(&'static str, MemoStats)> {
        self.memos().into_iter().map(|memo| (memo.name(), memo.stats())).collect()
    }

    /// Drop every cached output and reset the counters
    pub fn clear(&self) {
        for memo in self.memos() {
            memo.clear();
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::new(&CoreConfig::default())
    }
}
