use crate::core::GraphData;
use std::collections::{HashMap, VecDeque};
use tracing::trace;

/// Number of layouts kept by default
pub const DEFAULT_CACHE_CAPACITY: usize = 10;

/// Bounded cache of computed graph layouts keyed by a caller-chosen string.
///
/// Eviction is first-in first-out: once full, inserting a new key drops the
/// oldest inserted one. Replacing the value of an existing key keeps its
/// original position in the eviction order.
#[derive(Debug)]
pub struct GraphCache {
    capacity: usize,
    entries: HashMap<String, GraphData>,
    order: VecDeque<String>,
}

impl GraphCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    pub fn get(&self, key: &str) -> Option<&GraphData> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: String, data: GraphData) {
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = data;
            return;
        }

        while self.order.len() >= self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    trace!(key = %oldest, "evicting cached layout");
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }

        self.order.push_back(key.clone());
        self.entries.insert(key, data);
    }

    /// Return the cached layout for `key`, computing and storing it first
    /// if absent
    pub fn get_or_insert_with<F>(&mut self, key: &str, compute: F) -> &GraphData
    where
        F: FnOnce() -> GraphData,
    {
        if !self.entries.contains_key(key) {
            self.insert(key.to_string(), compute());
        }
        &self.entries[key]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn invalidate(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

impl Default for GraphCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{commit, laid_out};

    fn sample(lanes: usize) -> GraphData {
        let mut data = laid_out(&[commit("a", &[])]);
        data.lanes = lanes;
        data
    }

    #[test]
    fn test_evicts_oldest() {
        let mut cache = GraphCache::default();
        for i in 0..12 {
            cache.insert(format!("key{}", i), sample(i));
        }

        assert_eq!(cache.len(), 10);
        assert!(!cache.contains("key0"));
        assert!(!cache.contains("key1"));
        assert!(cache.contains("key2"));
        assert_eq!(cache.get("key11").map(|d| d.lanes), Some(11));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut cache = GraphCache::new(2);
        cache.insert("a".to_string(), sample(1));
        cache.insert("b".to_string(), sample(2));
        cache.insert("a".to_string(), sample(3));
        cache.insert("c".to_string(), sample(4));

        // "a" was inserted first, so it goes first
        assert!(!cache.contains("a"));
        assert_eq!(cache.get("b").map(|d| d.lanes), Some(2));
        assert_eq!(cache.get("c").map(|d| d.lanes), Some(4));
    }

    #[test]
    fn test_get_or_insert_with_computes_once() {
        let mut cache = GraphCache::new(4);
        let mut calls = 0;

        for _ in 0..3 {
            let data = cache.get_or_insert_with("view", || {
                calls += 1;
                sample(7)
            });
            assert_eq!(data.lanes, 7);
        }

        assert_eq!(calls, 1);
    }

    #[test]
    fn test_zero_capacity_holds_one() {
        let mut cache = GraphCache::new(0);
        cache.insert("a".to_string(), sample(1));
        cache.insert("b".to_string(), sample(2));
        assert_eq!(cache.capacity(), 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("b"));

        cache.invalidate();
        assert!(cache.is_empty());
    }
}
