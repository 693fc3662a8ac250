use crate::memo::{Memo, MemoSlot};
use crate::models::{EntityId, FollowEntry, UserProfile};
use crate::store::{access, Store};
use std::sync::Arc;

pub struct UserSelectors {
    is_following: Memo<(Arc<Vec<FollowEntry>>, EntityId), bool>,
}

impl UserSelectors {
    pub fn new() -> Self {
        Self { is_following: Memo::new("user.is_following") }
    }

    pub fn profile(&self, store: &Store) -> Option<Arc<UserProfile>> {
        access::user_slice(store).profile.clone()
    }

    pub fn following(&self, store: &Store) -> Arc<Vec<FollowEntry>> {
        Arc::clone(&access::user_slice(store).following)
    }

    pub fn following_count(&self, store: &Store) -> usize {
        access::user_slice(store).following.len()
    }

    pub fn followers_count(&self, store: &Store) -> usize {
        access::user_slice(store).followers.len()
    }

    /// Whether `id` appears in the following list
    pub fn is_following(&self, store: &Store, id: impl Into<EntityId>) -> bool {
        self.is_following.get_or_compute((self.following(store), id.into()), |(following, id)| {
            following.iter().any(|entry| entry.id == *id)
        })
    }

    pub(crate) fn memos(&self) -> Vec<&dyn MemoSlot> {
        vec![&self.is_following]
    }
}

impl Default for UserSelectors {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_following() {
        let views = UserSelectors::new();
        let store = Store::from_value(json!({
            "user": {
                "profile": {"id": 1, "username": "keeper"},
                "following": [{"following_id": 5}, {"id": "club-9"}],
                "followers": [{"id": 2}]
            }
        }))
        .unwrap();

        assert!(views.is_following(&store, 5));
        assert!(views.is_following(&store, "club-9"));
        assert!(!views.is_following(&store, 6));
        assert_eq!(views.following_count(&store), 2);
        assert_eq!(views.followers_count(&store), 1);
        assert_eq!(views.profile(&store).unwrap().username.as_deref(), Some("keeper"));
    }

    #[test]
    fn test_repeated_query_hits() {
        let views = UserSelectors::new();
        let store = Store::new();
        assert!(!views.is_following(&store, 1));
        assert!(!views.is_following(&store, 1));
        assert_eq!(views.is_following.stats().hits, 1);
    }
}
