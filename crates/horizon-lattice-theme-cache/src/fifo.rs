//! Bounded insertion-ordered map.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::Arc;

/// A map holding at most `capacity` entries, evicting in insertion order.
///
/// Reads never change the order. Overwriting an existing key replaces the
/// value in place and keeps the key's original position, so a key that is
/// refreshed repeatedly still ages out after `capacity` newer keys.
///
/// Keys are shared between the lookup table and the order queue through an
/// [`Arc`], so each key is stored once.
#[derive(Debug)]
pub(crate) struct BoundedFifo<K, V> {
    entries: HashMap<Arc<K>, V>,
    /// Oldest key at the front.
    order: VecDeque<Arc<K>>,
    capacity: usize,
}

impl<K: Eq + Hash, V> BoundedFifo<K, V> {
    /// Create an empty map. A capacity of zero retains nothing.
    ///
    /// Storage grows with the entries actually inserted; the capacity is
    /// only a bound.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity,
        }
    }

    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Insert or overwrite an entry.
    ///
    /// Returns the evicted entry, if inserting a new key pushed the oldest
    /// one out.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<(Arc<K>, V)> {
        if self.capacity == 0 {
            return None;
        }

        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = value;
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity {
            self.evict_oldest()
        } else {
            None
        };

        let key = Arc::new(key);
        self.order.push_back(Arc::clone(&key));
        self.entries.insert(key, value);

        debug_assert_eq!(self.entries.len(), self.order.len());
        evicted
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    fn evict_oldest(&mut self) -> Option<(Arc<K>, V)> {
        let key = self.order.pop_front()?;
        let value = self.entries.remove(&key)?;
        Some((key, value))
    }
}
