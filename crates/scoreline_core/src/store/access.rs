//! Base accessors: `(store) -> slice`
//!
//! Each accessor is total. An unset domain yields a process-wide default
//! slice, always the same allocation, so views over an empty domain still hit
//! their memo on repeated calls. Defaulting happens here and nowhere deeper.

use super::{
    AuthState, CricketState, FootballState, LoadingState, MatchesState, Store, TournamentsState,
    UserState, ValidationState,
};
use once_cell::sync::Lazy;
use std::sync::Arc;

macro_rules! accessor {
    ($(#[$doc:meta])* $name:ident, $default:ident, $field:ident, $state:ty) => {
        static $default: Lazy<Arc<$state>> = Lazy::new(|| Arc::new(<$state>::default()));

        $(#[$doc])*
        pub fn $name(store: &Store) -> Arc<$state> {
            match &store.$field {
                Some(slice) => Arc::clone(slice),
                None => Arc::clone(&$default),
            }
        }
    };
}

accessor!(
    /// `store.auth`, default: no token, no user
    auth_slice, DEFAULT_AUTH, auth, AuthState
);
accessor!(
    /// `store.user`, default: no profile, empty lists
    user_slice, DEFAULT_USER, user, UserState
);
accessor!(
    /// `store.matches`, default: no stages, no current match
    matches_slice, DEFAULT_MATCHES, matches, MatchesState
);
accessor!(
    /// `store.tournamentsReducers`, default: all sequences empty
    tournaments_slice, DEFAULT_TOURNAMENTS, tournaments, TournamentsState
);
accessor!(cricket_slice, DEFAULT_CRICKET, cricket, CricketState);
accessor!(football_slice, DEFAULT_FOOTBALL, football, FootballState);
accessor!(
    /// `store.loading`, default: no operations
    loading_slice, DEFAULT_LOADING, loading, LoadingState
);
accessor!(
    /// `store.validation`, default: no forms
    validation_slice, DEFAULT_VALIDATION, validation, ValidationState
);
