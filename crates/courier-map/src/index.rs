//! Growable separate-chaining hash table.
//!
//! # Growth policy
//!
//! The table starts at 8 buckets and doubles whenever `len / buckets`
//! exceeds the maximum load factor (default 0.5) after an insert, rehashing
//! every entry into the new bucket array.  Lookups and inserts are amortized
//! O(1) average; no ordering is guaranteed across keys.
//!
//! `BucketIndex` backs the street network's adjacency index and the route
//! search's per-call scoring maps.  It is a single-owner structure: all
//! mutation goes through `&mut self`.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

const INITIAL_BUCKETS: usize = 8;
const DEFAULT_MAX_LOAD: f64 = 0.5;

/// Bucketed key→value table with doubling growth.
#[derive(Debug)]
pub struct BucketIndex<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
    max_load: f64,
}

impl<K: Hash + Eq, V> BucketIndex<K, V> {
    /// An empty table with the default maximum load factor of 0.5.
    pub fn new() -> Self {
        Self::with_max_load(DEFAULT_MAX_LOAD)
    }

    /// An empty table with a custom maximum load factor.  Non-positive
    /// values fall back to the default.
    pub fn with_max_load(max_load: f64) -> Self {
        let max_load = if max_load > 0.0 {
            max_load
        } else {
            DEFAULT_MAX_LOAD
        };
        Self {
            buckets: empty_buckets(INITIAL_BUCKETS),
            len: 0,
            max_load,
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current bucket count (grows by doubling; never shrinks except via
    /// [`clear`](Self::clear)).
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Remove every entry and reset to the initial 8 buckets.
    pub fn clear(&mut self) {
        self.buckets = empty_buckets(INITIAL_BUCKETS);
        self.len = 0;
    }

    /// Insert `value` under `key`, overwriting any existing value.
    pub fn put(&mut self, key: K, value: V) {
        let slot = slot_for(&key, self.buckets.len());
        if let Some(entry) = self.buckets[slot].iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
            return;
        }
        self.buckets[slot].push((key, value));
        self.len += 1;

        if self.len as f64 > self.max_load * self.buckets.len() as f64 {
            self.grow();
        }
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.buckets[slot_for(key, self.buckets.len())]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Mutable lookup.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let slot = slot_for(key, self.buckets.len());
        self.buckets[slot]
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Double the bucket count and rehash every entry.
    fn grow(&mut self) {
        let doubled = self.buckets.len() * 2;
        let old = std::mem::replace(&mut self.buckets, empty_buckets(doubled));
        for (key, value) in old.into_iter().flatten() {
            let slot = slot_for(&key, doubled);
            self.buckets[slot].push((key, value));
        }
    }
}

impl<K: Hash + Eq, V> Default for BucketIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

fn empty_buckets<K, V>(count: usize) -> Vec<Vec<(K, V)>> {
    (0..count).map(|_| Vec::new()).collect()
}

#[inline]
fn slot_for<K: Hash>(key: &K, buckets: usize) -> usize {
    let mut hasher = FxHasher::default();
    key.hash(&mut hasher);
    (hasher.finish() as usize) % buckets
}
