//! Change detection on the consumer side
//!
//! A consumer re-renders when a view hands back a different output. Since
//! unchanged views return the very same `Arc`, comparing by [`MemoKey`] is
//! enough: no deep comparison of the output.

use crate::memo::MemoKey;

/// Last observed output of one view
#[derive(Debug, Clone)]
pub struct Watch<V> {
    current: Option<V>,
    changes: u64,
}

impl<V: MemoKey + Clone> Watch<V> {
    pub fn new() -> Self {
        Self { current: None, changes: 0 }
    }

    /// Record `next`; returns `true` if it differs from the previous output.
    /// The first observation always counts as a change.
    pub fn observe(&mut self, next: V) -> bool {
        let changed = match &self.current {
            Some(previous) => !previous.same_as(&next),
            None => true,
        };
        if changed {
            self.changes += 1;
            self.current = Some(next);
        }
        changed
    }

    pub fn current(&self) -> Option<&V> {
        self.current.as_ref()
    }

    /// Number of observations that reported a change
    pub fn changes(&self) -> u64 {
        self.changes
    }
}

impl<V: MemoKey + Clone> Default for Watch<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Action, Store};
    use crate::views::{MatchList, MatchSelectors};

    #[test]
    fn test_unrelated_updates_do_not_trigger() {
        let views = MatchSelectors::default();
        let mut watch: Watch<MatchList> = Watch::new();

        let store = Store::new().apply(Action::SetMatches(vec![]));
        assert!(watch.observe(views.live(&store)));

        let store = store.apply(Action::SetLoading { operation: "poll".into(), loading: true });
        assert!(!watch.observe(views.live(&store)));

        let store = store.apply(Action::SetMatches(vec![]));
        assert!(watch.observe(views.live(&store)));
        assert_eq!(watch.changes(), 2);
        assert!(watch.current().is_some_and(|live| live.is_empty()));
    }

    #[test]
    fn test_scalar_outputs_compare_by_value() {
        let mut watch: Watch<usize> = Watch::default();
        assert!(watch.observe(3));
        assert!(!watch.observe(3));
        assert!(watch.observe(4));
        assert_eq!(watch.current(), Some(&4));
    }
}
