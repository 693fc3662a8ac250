//! One-slot memoization for derived views
//!
//! A [`Memo`] remembers the last argument tuple and the output computed from
//! it. When the next call brings the same arguments, the stored output is
//! handed back as is, so `Arc` outputs keep their identity and consumers
//! can detect change with a pointer comparison.
//!
//! "Same" is decided by [`MemoKey`]:
//! - `Arc<T>`: pointer identity. Two deep-equal slices behind different
//!   allocations count as changed. Comparing contents would cost O(n) per
//!   call.
//! - primitive parameters (ids, status codes, names): value equality
//! - tuples / `Option`: element-wise
//!
//! Only one entry is kept per memo. Alternating arguments recompute on
//! every call.

use crate::models::{Branch, EntityId, TeamSide, TournamentCategory};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::trace;

/// Equality used to decide whether a memo slot can be reused
pub trait MemoKey {
    fn same_as(&self, other: &Self) -> bool;
}

impl<T: ?Sized> MemoKey for Arc<T> {
    fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<K: MemoKey> MemoKey for Option<K> {
    fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same_as(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl MemoKey for () {
    fn same_as(&self, _other: &Self) -> bool {
        true
    }
}

macro_rules! value_keys {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MemoKey for $ty {
                fn same_as(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

value_keys!(
    bool,
    u32,
    u64,
    usize,
    i32,
    i64,
    String,
    &'static str,
    EntityId,
    Branch,
    TeamSide,
    TournamentCategory,
);

macro_rules! tuple_keys {
    ($(($($name:ident . $idx:tt),+)),* $(,)?) => {
        $(
            impl<$($name: MemoKey),+> MemoKey for ($($name,)+) {
                fn same_as(&self, other: &Self) -> bool {
                    $(self.$idx.same_as(&other.$idx))&&+
                }
            }
        )*
    };
}

tuple_keys!((A.0), (A.0, B.1), (A.0, B.1, C.2), (A.0, B.1, C.2, D.3));

/// Hit/miss counters of one memo slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MemoStats {
    pub hits: u64,
    pub misses: u64,
}

/// Last-call cache for a single derived view.
///
/// The slot sits behind a mutex so a selector set can be shared between
/// threads. The compute closure runs outside the lock.
pub struct Memo<K, V> {
    name: &'static str,
    slot: Mutex<Option<(K, V)>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K: MemoKey, V: Clone> Memo<K, V> {
    pub fn new(name: &'static str) -> Self {
        Self { name, slot: Mutex::new(None), hits: AtomicU64::new(0), misses: AtomicU64::new(0) }
    }

    /// Return the cached output for `key`, or compute, store and return it
    pub fn get_or_compute(&self, key: K, compute: impl FnOnce(&K) -> V) -> V {
        if let Some((last_key, value)) = self.lock().as_ref() {
            if last_key.same_as(&key) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return value.clone();
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        trace!(view = self.name, "recomputing derived view");

        let value = compute(&key);
        *self.lock() = Some((key, value.clone()));
        value
    }

    fn lock(&self) -> MutexGuard<'_, Option<(K, V)>> {
        // A panic inside a view leaves the slot usable; at worst it is stale
        // and the next differing key replaces it.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Type-erased view of a memo for reporting and reset
pub trait MemoSlot {
    fn name(&self) -> &'static str;
    fn stats(&self) -> MemoStats;
    /// Drop the cached entry and zero the counters
    fn clear(&self);
}

impl<K: MemoKey, V: Clone> MemoSlot for Memo<K, V> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn stats(&self) -> MemoStats {
        MemoStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    fn clear(&self) {
        *self.lock() = None;
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}
