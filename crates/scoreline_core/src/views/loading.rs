use crate::memo::{Memo, MemoSlot};
use crate::store::{access, OperationFlags, Store};
use std::sync::Arc;

pub struct LoadingSelectors {
    any_loading: Memo<Arc<OperationFlags>, bool>,
    loading_operations: Memo<Arc<OperationFlags>, Arc<Vec<String>>>,
}

impl LoadingSelectors {
    pub fn new() -> Self {
        Self {
            any_loading: Memo::new("loading.any_loading"),
            loading_operations: Memo::new("loading.loading_operations"),
        }
    }

    pub fn operations(&self, store: &Store) -> Arc<OperationFlags> {
        Arc::clone(&access::loading_slice(store).operations)
    }

    /// True iff at least one operation flag is set
    pub fn any_loading(&self, store: &Store) -> bool {
        self.any_loading
            .get_or_compute(self.operations(store), |ops| ops.iter().any(|(_, loading)| loading))
    }

    /// Operations whose flag is set, in insertion order
    pub fn loading_operations(&self, store: &Store) -> Arc<Vec<String>> {
        self.loading_operations.get_or_compute(self.operations(store), |ops| {
            let names = ops.iter().filter(|(_, loading)| *loading).map(|(name, _)| name.to_string());
            Arc::new(names.collect())
        })
    }

    /// Unknown operations are not loading
    pub fn is_loading(&self, store: &Store, operation: &str) -> bool {
        access::loading_slice(store).operations.get(operation).unwrap_or(false)
    }

    pub(crate) fn memos(&self) -> Vec<&dyn MemoSlot> {
        vec![&self.any_loading, &self.loading_operations]
    }
}

impl Default for LoadingSelectors {
    fn default() -> Self {
        Self::new()
    }
}
