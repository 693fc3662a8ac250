//! Store transitions
//!
//! [`Store::apply`] returns a new store in which only the slice an action
//! touches is reallocated. Every other slice is the same `Arc` as before, so
//! views reading those slices keep returning their cached output.

use super::{access, FieldErrors, Store};
use crate::models::{
    EntityId, FollowEntry, Group, Incident, Innings, Lineups, Match, PlayerScore, Stage,
    StandingRow, Toss, Tournament, UserProfile,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    SetMatches(Vec<Stage>),
    SetCurrentMatch(Option<Match>),
    /// Replace the first match with the same id, in lookup order
    UpdateMatch(Match),
    SetTournaments(Vec<Tournament>),
    SetCurrentTournament(Option<Tournament>),
    SetStanding(Vec<StandingRow>),
    SetGroups(Vec<Group>),
    SetLoading {
        operation: String,
        loading: bool,
    },
    SetFormErrors {
        form: String,
        errors: FieldErrors,
    },
    /// `message: None` removes the field's error
    SetFieldError {
        form: String,
        field: String,
        message: Option<String>,
    },
    ClearFormErrors {
        form: String,
    },
    Login {
        token: String,
        #[serde(default)]
        user: Option<UserProfile>,
    },
    Logout,
    SetProfile(UserProfile),
    Follow(FollowEntry),
    Unfollow(EntityId),
    SetToss(Option<Toss>),
    SetBatting(Vec<PlayerScore>),
    SetBowling(Vec<PlayerScore>),
    SetInnings(Vec<Innings>),
    SetLineups(Option<Lineups>),
    SetIncidents(Vec<Incident>),
    SetScorers(Vec<PlayerScore>),
    Reset,
}

/// Clone the slice behind `slot` (or its default), edit it, store it back
fn update<T: Clone>(slot: &mut Option<Arc<T>>, current: Arc<T>, edit: impl FnOnce(&mut T)) {
    let mut state = (*current).clone();
    edit(&mut state);
    *slot = Some(Arc::new(state));
}

fn shared<T>(items: Vec<T>) -> Arc<Vec<Arc<T>>> {
    Arc::new(items.into_iter().map(Arc::new).collect())
}

impl Store {
    pub fn apply(&self, action: Action) -> Store {
        let mut next = self.clone();

        match action {
            Action::SetMatches(stages) => {
                update(&mut next.matches, access::matches_slice(self), |s| {
                    s.matches = Arc::new(stages);
                });
            }
            Action::SetCurrentMatch(current) => {
                update(&mut next.matches, access::matches_slice(self), |s| {
                    s.current = current.map(Arc::new);
                });
            }
            Action::UpdateMatch(updated) => {
                update(&mut next.matches, access::matches_slice(self), |s| {
                    update_match(s, updated);
                });
            }
            Action::SetTournaments(tournaments) => {
                update(&mut next.tournaments, access::tournaments_slice(self), |s| {
                    s.tournaments = shared(tournaments);
                });
            }
            Action::SetCurrentTournament(current) => {
                update(&mut next.tournaments, access::tournaments_slice(self), |s| {
                    s.tournament = current.map(Arc::new);
                });
            }
            Action::SetStanding(rows) => {
                update(&mut next.tournaments, access::tournaments_slice(self), |s| {
                    s.standing = Arc::new(rows);
                });
            }
            Action::SetGroups(groups) => {
                update(&mut next.tournaments, access::tournaments_slice(self), |s| {
                    s.groups = Arc::new(groups);
                });
            }
            Action::SetLoading { operation, loading } => {
                update(&mut next.loading, access::loading_slice(self), |s| {
                    let mut operations = (*s.operations).clone();
                    operations.set(&operation, loading);
                    s.operations = Arc::new(operations);
                });
            }
            Action::SetFormErrors { form, errors } => {
                update(&mut next.validation, access::validation_slice(self), |s| {
                    let mut forms = (*s.forms).clone();
                    forms.insert(form, Arc::new(errors));
                    s.forms = Arc::new(forms);
                });
            }
            Action::SetFieldError { form, field, message } => {
                update(&mut next.validation, access::validation_slice(self), |s| {
                    let mut forms = (*s.forms).clone();
                    let mut errors = forms.get(&form).map(|e| (**e).clone()).unwrap_or_default();
                    match message {
                        Some(message) => {
                            errors.insert(field, message);
                        }
                        None => {
                            errors.remove(&field);
                        }
                    }
                    forms.insert(form, Arc::new(errors));
                    s.forms = Arc::new(forms);
                });
            }
            Action::ClearFormErrors { form } => {
                update(&mut next.validation, access::validation_slice(self), |s| {
                    let mut forms = (*s.forms).clone();
                    forms.remove(&form);
                    s.forms = Arc::new(forms);
                });
            }
            Action::Login { token, user } => {
                update(&mut next.auth, access::auth_slice(self), |s| {
                    s.token = Some(token);
                    s.user = user.map(Arc::new);
                });
            }
            Action::Logout => {
                next.auth = None;
                next.user = None;
            }
            Action::SetProfile(profile) => {
                update(&mut next.user, access::user_slice(self), |s| {
                    s.profile = Some(Arc::new(profile));
                });
            }
            Action::Follow(entry) => {
                update(&mut next.user, access::user_slice(self), |s| {
                    if !s.following.iter().any(|f| f.id == entry.id) {
                        let mut following = (*s.following).clone();
                        following.push(entry);
                        s.following = Arc::new(following);
                    }
                });
            }
            Action::Unfollow(id) => {
                update(&mut next.user, access::user_slice(self), |s| {
                    let following: Vec<FollowEntry> =
                        s.following.iter().filter(|f| f.id != id).cloned().collect();
                    s.following = Arc::new(following);
                });
            }
            Action::SetToss(toss) => {
                update(&mut next.cricket, access::cricket_slice(self), |s| {
                    s.toss = toss.map(Arc::new);
                });
            }
            Action::SetBatting(scores) => {
                update(&mut next.cricket, access::cricket_slice(self), |s| {
                    s.batting = shared(scores);
                });
            }
            Action::SetBowling(scores) => {
                update(&mut next.cricket, access::cricket_slice(self), |s| {
                    s.bowling = shared(scores);
                });
            }
            Action::SetInnings(innings) => {
                update(&mut next.cricket, access::cricket_slice(self), |s| {
                    s.innings = Arc::new(innings);
                });
            }
            Action::SetLineups(lineups) => {
                update(&mut next.football, access::football_slice(self), |s| {
                    s.lineups = lineups.map(Arc::new);
                });
            }
            Action::SetIncidents(incidents) => {
                update(&mut next.football, access::football_slice(self), |s| {
                    s.incidents = Arc::new(incidents);
                });
            }
            Action::SetScorers(scores) => {
                update(&mut next.football, access::football_slice(self), |s| {
                    s.scorers = shared(scores);
                });
            }
            Action::Reset => {
                next = Store::default();
            }
        }

        next
    }
}

fn update_match(state: &mut super::MatchesState, updated: Match) {
    let updated = Arc::new(updated);

    if state.current.as_ref().is_some_and(|current| current.id == updated.id) {
        state.current = Some(Arc::clone(&updated));
    }

    let mut stages = (*state.matches).clone();
    match stages.iter_mut().find_map(|stage| stage.match_slot_mut(&updated.id)) {
        Some(slot) => {
            *slot = updated;
            state.matches = Arc::new(stages);
        }
        None => debug!(id = %updated.id, "update for a match not present in any stage"),
    }
}
