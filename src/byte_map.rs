//! Byte-keyed hash map with a fixed number of slots.

use crate::probe::{RawProbeTable, TableFull};
use core::hash::BuildHasher;
use rustc_hash::FxBuildHasher;

/// Hash map from byte strings to byte strings over a fixed slot count.
///
/// Keys and values are copied in on insert, so callers keep ownership of
/// their buffers. The table never grows: once every slot holds a distinct
/// live key, inserting another key fails with [`TableFull`]. Replacing the
/// value of an existing key always succeeds.
#[derive(Debug)]
pub struct ByteMap<S = FxBuildHasher> {
    table: RawProbeTable<Box<[u8]>, S>,
}

impl ByteMap {
    /// Creates a map with `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            table: RawProbeTable::with_capacity(capacity),
        }
    }
}

impl<S> ByteMap<S>
where
    S: BuildHasher,
{
    /// Creates a map with `capacity` slots using `hasher` for probe starts.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            table: RawProbeTable::with_capacity_and_hasher(capacity, hasher),
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Maps `key` to a copy of `value`. An existing key keeps its slot and
    /// has its value replaced; a new key consumes a slot.
    pub fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), TableFull> {
        self.table.insert(key, value.into()).map(|_| ())
    }

    /// Borrows the value stored under `key`, if any.
    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.table.get(key).map(|value| &**value)
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.table.contains(key)
    }

    /// Removes `key`, reporting whether it was present. Its slot becomes
    /// reusable by later inserts.
    pub fn remove(&mut self, key: &[u8]) -> bool {
        self.table.remove(key).is_some()
    }

    /// Visits live `(key, value)` entries in slot order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.table.iter(),
        }
    }
}

/// Iterator over the entries of a [`ByteMap`].
pub struct Iter<'a> {
    inner: crate::probe::Iter<'a, Box<[u8]>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a [u8], &'a [u8]);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, &**value))
    }
}
