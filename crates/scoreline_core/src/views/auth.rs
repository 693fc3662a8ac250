use crate::memo::{Memo, MemoSlot};
use crate::models::UserProfile;
use crate::store::{access, AuthState, Store};
use std::sync::Arc;

pub struct AuthSelectors {
    is_authenticated: Memo<Arc<AuthState>, bool>,
}

impl AuthSelectors {
    pub fn new() -> Self {
        Self { is_authenticated: Memo::new("auth.is_authenticated") }
    }

    pub fn token(&self, store: &Store) -> Option<String> {
        access::auth_slice(store).token.clone()
    }

    pub fn user(&self, store: &Store) -> Option<Arc<UserProfile>> {
        access::auth_slice(store).user.clone()
    }

    /// A blank token counts as signed out
    pub fn is_authenticated(&self, store: &Store) -> bool {
        self.is_authenticated.get_or_compute(access::auth_slice(store), |auth| {
            auth.token.as_deref().is_some_and(|token| !token.trim().is_empty())
        })
    }

    pub(crate) fn memos(&self) -> Vec<&dyn MemoSlot> {
        vec![&self.is_authenticated]
    }
}

impl Default for AuthSelectors {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityId;
    use crate::store::Action;

    #[test]
    fn test_login_logout() {
        let views = AuthSelectors::new();
        let store = Store::new();
        assert!(!views.is_authenticated(&store));

        let signed_in = store.apply(Action::Login {
            token: "abc".into(),
            user: Some(UserProfile::new(7)),
        });
        assert!(views.is_authenticated(&signed_in));
        assert_eq!(views.token(&signed_in).as_deref(), Some("abc"));
        assert_eq!(views.user(&signed_in).unwrap().id, EntityId::Num(7));

        assert!(!views.is_authenticated(&signed_in.apply(Action::Logout)));
    }

    #[test]
    fn test_blank_token_is_signed_out() {
        let views = AuthSelectors::new();
        let store = Store::new().apply(Action::Login { token: "  ".into(), user: None });
        assert!(!views.is_authenticated(&store));
    }
}
