use crate::components::entry::Entry;
use crate::hashing::hash::Hash;
use crate::{Error, Result};
use std::marker::PhantomData;

/// Number of buckets used when none is given.
const DEFAULT_BUCKET_COUNT: usize = 10;

/// A hash table resolving collisions by chaining entries within a bucket.
/// The bucket count is fixed at construction, chains grow without bound.
///
/// Entries are keyed by the full 64 bit hash of the original key, the key
/// itself is not retained. Two distinct keys colliding on the full hash value
/// (not just the bucket) are therefore indistinguishable.
///
/// Inserting the same key repeatedly accumulates entries; lookups return the
/// oldest one first, so older entries shadow newer ones until deleted.
#[derive(Clone, Debug)]
pub struct ChainedHashTable<K, V> {
    buckets: Vec<Vec<Entry<u64, V>>>,
    len: usize,
    p: PhantomData<K>,
}

impl<K, V> ChainedHashTable<K, V>
where
    K: Hash,
{
    pub fn new() -> Self {
        Self::with_bucket_count(DEFAULT_BUCKET_COUNT)
    }

    /// Creates a table with a fixed number of buckets (at least one).
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(1);
        let mut buckets = Vec::new();
        buckets.resize_with(bucket_count, Vec::new);
        Self {
            buckets,
            len: 0,
            p: PhantomData,
        }
    }

    /// Appends the pair to its bucket. Never fails and never deduplicates.
    pub fn insert(&mut self, key: &K, value: V) {
        let hash = key.hash();
        let bucket = self.bucket_index(hash);
        self.buckets[bucket].push(Entry::new(hash, value));
        self.len += 1;
    }

    /// Scans the bucket in insertion order for the first entry whose stored
    /// hash matches the key's hash.
    pub fn search(&self, key: &K) -> Result<&V> {
        let hash = key.hash();
        self.buckets[self.bucket_index(hash)]
            .iter()
            .find(|entry| *entry.key() == hash)
            .map(|entry| entry.value())
            .ok_or(Error::KeyNotFound)
    }

    /// Removes the first entry matching the key's hash. No-op when absent.
    pub fn delete(&mut self, key: &K) {
        let hash = key.hash();
        let bucket_index = self.bucket_index(hash);
        let bucket = &mut self.buckets[bucket_index];
        if let Some(pos) = bucket.iter().position(|entry| *entry.key() == hash) {
            bucket.remove(pos);
            self.len -= 1;
        }
    }

    #[inline]
    fn bucket_index(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }
}

impl<K, V> ChainedHashTable<K, V> {
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates all entries as `(stored_hash, value)` in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &V)> {
        self.buckets
            .iter()
            .flatten()
            .map(|entry| (*entry.key(), entry.value()))
    }
}

impl<K: Hash, V> Default for ChainedHashTable<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
