//! Session-scoped memoization
//!
//! The engine records the outcome of every `(atom, position)` evaluation for
//! the lifetime of one parse session. The same pair reached through different
//! call paths (common in ambiguous grammars) is then computed once, which
//! turns worst-case exponential re-derivation into low-polynomial work: the
//! packrat guarantee.
//!
//! The table is an explicit value owned by the session, not hidden closure
//! state, so its lifetime is visible: it is created when a top-level parse
//! begins and dropped when it returns. Reusing a table across inputs or
//! grammars would return stale results, so the engine never exposes one.

use std::collections::HashMap;
use std::hash::Hash;

/// A cache key that may opt out of caching.
///
/// When `memo_key` returns `None` the table bypasses storage and the caller
/// computes directly; opting out is never an error.
pub trait MemoKey {
    /// The owned representation stored in the table.
    type Owned: Eq + Hash;

    /// The table key for this value, or `None` to bypass the cache.
    fn memo_key(&self) -> Option<Self::Owned>;
}

/// Explicit cache for pure computations, with hit/miss/bypass counters.
#[derive(Debug)]
pub struct MemoTable<K: MemoKey, V> {
    entries: HashMap<K::Owned, V>,
    hits: u64,
    misses: u64,
    bypasses: u64,
}

impl<K: MemoKey, V> MemoTable<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
            bypasses: 0,
        }
    }

    /// Look up a previously stored result.
    ///
    /// Every lookup is counted: as a hit, a miss, or a bypass when the key
    /// opts out of caching.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match key.memo_key() {
            Some(owned) => {
                if self.entries.contains_key(&owned) {
                    self.hits += 1;
                    self.entries.get(&owned)
                } else {
                    self.misses += 1;
                    None
                }
            }
            None => {
                self.bypasses += 1;
                None
            }
        }
    }

    /// Store a computed result. Keys that opt out of caching are not stored.
    pub fn insert(&mut self, key: &K, value: V) {
        if let Some(owned) = key.memo_key() {
            self.entries.insert(owned, value);
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn bypasses(&self) -> u64 {
        self.bypasses
    }
}

impl<K: MemoKey, V> Default for MemoTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test key: `None` models an argument that cannot be a table key.
    struct Input(Option<u32>);

    impl MemoKey for Input {
        type Owned = u32;

        fn memo_key(&self) -> Option<u32> {
            self.0
        }
    }

    #[test]
    fn test_miss_then_hit() {
        let mut table: MemoTable<Input, u32> = MemoTable::new();
        let key = Input(Some(7));

        assert!(table.get(&key).is_none());
        table.insert(&key, 49);
        assert_eq!(table.get(&key), Some(&49));
        assert_eq!(table.hits(), 1);
        assert_eq!(table.misses(), 1);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_uncacheable_key_bypasses_storage() {
        let mut table: MemoTable<Input, u32> = MemoTable::new();
        let key = Input(None);

        assert!(table.get(&key).is_none());
        table.insert(&key, 1);
        assert!(table.get(&key).is_none());
        assert!(table.is_empty());
        assert_eq!(table.bypasses(), 2);
        assert_eq!(table.hits(), 0);
        assert_eq!(table.misses(), 0);
    }

    #[test]
    fn test_stored_failures_are_hits_too() {
        // The table must cache negative outcomes as well: a recorded "no
        // match" is as valuable as a recorded success.
        let mut table: MemoTable<Input, Option<u32>> = MemoTable::new();
        let key = Input(Some(3));

        table.insert(&key, None);
        assert_eq!(table.get(&key), Some(&None));
        assert_eq!(table.hits(), 1);
    }
}
