use crate::components::entry::Entry;
use crate::{Error, Result};

/// A table indexed directly by an integer key. Slot `i` is reserved for key
/// `i`, so the key domain is exactly `[0, capacity)`. A key outside the
/// domain is a usage error (`Error::OutOfRange`), not a missing key.
#[derive(Clone, Debug)]
pub struct DirectAddressTable<V> {
    slots: Vec<Option<Entry<usize, V>>>,
}

impl<V> DirectAddressTable<V> {
    /// Creates a table with `capacity` empty slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity, || None);
        Self { slots }
    }

    /// Stores or overwrites the entry in slot `key`.
    pub fn insert(&mut self, key: usize, value: V) -> Result<()> {
        let slot = self.slots.get_mut(key).ok_or(Error::OutOfRange)?;
        *slot = Some(Entry::new(key, value));
        Ok(())
    }

    pub fn search(&self, key: usize) -> Result<&V> {
        self.slots
            .get(key)
            .ok_or(Error::OutOfRange)?
            .as_ref()
            .map(|entry| entry.value())
            .ok_or(Error::KeyNotFound)
    }

    /// Removes the slot at `key` entirely: every later slot shifts down by
    /// one and the table shrinks by one. Every key greater than `key`
    /// effectively remaps to `key - 1` afterwards. Erase semantics, not
    /// clear-in-place.
    pub fn delete(&mut self, key: usize) -> Result<()> {
        if key >= self.slots.len() {
            return Err(Error::OutOfRange);
        }
        self.slots.remove(key);
        Ok(())
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip_whole_domain() {
        let mut table = DirectAddressTable::with_capacity(32);
        for key in 0..32 {
            table.insert(key, key * 10).unwrap();
        }
        assert_eq!(table.len(), 32);
        for key in 0..32 {
            assert_eq!(*table.search(key).unwrap(), key * 10);
        }
    }

    #[test]
    fn overwrite() {
        let mut table = DirectAddressTable::with_capacity(4);
        table.insert(2, "a").unwrap();
        table.insert(2, "b").unwrap();
        assert_eq!(*table.search(2).unwrap(), "b");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn out_of_range() {
        let mut table = DirectAddressTable::with_capacity(5);
        assert_eq!(table.insert(5, 1), Err(Error::OutOfRange));
        assert_eq!(table.insert(20, 1), Err(Error::OutOfRange));
        assert_eq!(table.search(5).unwrap_err(), Error::OutOfRange);
        assert_eq!(table.delete(5).unwrap_err(), Error::OutOfRange);
    }

    #[test]
    fn empty_slot_is_not_found() {
        let mut table = DirectAddressTable::with_capacity(5);
        table.insert(0, 1).unwrap();
        assert_eq!(table.search(1).unwrap_err(), Error::KeyNotFound);
    }

    #[test]
    fn delete_shifts_later_slots_down() {
        let mut table = DirectAddressTable::with_capacity(5);
        for key in 0..5 {
            table.insert(key, key * 10).unwrap();
        }

        table.delete(1).unwrap();

        // The old slot 2 now answers for key 1 and the table got shorter.
        assert_eq!(table.capacity(), 4);
        assert_eq!(*table.search(1).unwrap(), 20);
        assert_eq!(*table.search(3).unwrap(), 40);
        assert_eq!(table.search(4).unwrap_err(), Error::OutOfRange);
    }
}
