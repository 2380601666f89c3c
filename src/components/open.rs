use crate::components::entry::Entry;
use crate::hashing::hash::Hash;
use crate::hashing::probe::ProbeStrategy;
use crate::{Error, Result};

/// A fixed capacity hash table resolving collisions by probing alternate
/// slots. The probe strategy is fixed at construction. There is no delete,
/// tombstone bookkeeping is out of scope.
#[derive(Clone, Debug)]
pub struct OpenAddressTable<K, V> {
    slots: Vec<Option<Entry<K, V>>>,
    strategy: ProbeStrategy,
    len: usize,
}

impl<K, V> OpenAddressTable<K, V>
where
    K: Hash + Eq,
{
    pub fn with_capacity(capacity: usize, strategy: ProbeStrategy) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity, || None);
        Self {
            slots,
            strategy,
            len: 0,
        }
    }

    /// Places the entry in the first empty probed slot and returns `true`.
    /// Returns `false` once the table is observed full; a full table is a
    /// normal outcome, not an error. There is no cycle protection beyond the
    /// occupancy counter, so a degenerate probe sequence on an ill chosen
    /// capacity can loop on a non full table.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let hash = key.hash();
        let mut attempt = 0;
        while self.len < self.slots.len() {
            let slot = self.strategy.probe(hash, attempt, self.slots.len());
            if self.slots[slot].is_none() {
                self.slots[slot] = Some(Entry::new(key, value));
                self.len += 1;
                return true;
            }
            attempt += 1;
        }
        false
    }

    /// Probes exactly `capacity` attempts. An empty slot does not stop the
    /// scan, the key may still sit further down the probe chain.
    pub fn search(&self, key: &K) -> Result<&V> {
        let hash = key.hash();
        for attempt in 0..self.slots.len() {
            let slot = self.strategy.probe(hash, attempt, self.slots.len());
            if let Some(entry) = &self.slots[slot] {
                if entry.key() == key {
                    return Ok(entry.value());
                }
            }
        }
        Err(Error::KeyNotFound)
    }
}

impl<K, V> OpenAddressTable<K, V> {
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    #[inline]
    pub fn strategy(&self) -> ProbeStrategy {
        self.strategy
    }

    /// Occupied slots over capacity. Only observes fullness, nothing resizes.
    pub fn load_factor(&self) -> f32 {
        if self.capacity() == 0 {
            return 0.0;
        }
        self.len as f32 / self.capacity() as f32
    }

    /// Iterates occupied slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.slots
            .iter()
            .flatten()
            .map(|entry| (entry.key(), entry.value()))
    }
}
