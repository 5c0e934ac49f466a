//! Byte-string membership set with a fixed number of slots.

use crate::probe::{InsertOutcome, RawProbeTable, TableFull};
use core::hash::BuildHasher;
use rustc_hash::FxBuildHasher;

/// Deduplicating set of byte strings over a fixed slot count.
///
/// Same probing and copy-in rules as [`ByteMap`](crate::ByteMap); members
/// carry no payload. Re-adding a present member is a no-op that succeeds
/// even when the set is full.
#[derive(Debug)]
pub struct ByteSet<S = FxBuildHasher> {
    table: RawProbeTable<(), S>,
}

impl ByteSet {
    /// Creates a set with `capacity` slots.
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

impl<S> ByteSet<S>
where
    S: BuildHasher,
{
    /// Creates a set with `capacity` slots using `hasher` for probe starts.
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

    /// Adds a copy of `member`. Returns `Ok(true)` if it was newly added and
    /// `Ok(false)` if it was already present.
    pub fn insert(&mut self, member: &[u8]) -> Result<bool, TableFull> {
        self.table
            .insert(member, ())
            .map(|outcome| outcome == InsertOutcome::Inserted)
    }

    pub fn contains(&self, member: &[u8]) -> bool {
        self.table.contains(member)
    }

    /// Removes `member`, reporting whether it was present.
    pub fn remove(&mut self, member: &[u8]) -> bool {
        self.table.remove(member).is_some()
    }

    /// Concatenates all members in slot order into one buffer.
    ///
    /// There are no separators, so the result is only decodable when members
    /// share a fixed width, as a graph node's edge-identity records do.
    pub fn get_all(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for member in self.iter() {
            out.extend_from_slice(member);
        }
        out
    }

    /// Visits members in slot order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.table.iter(),
        }
    }
}

/// Iterator over the members of a [`ByteSet`].
pub struct Iter<'a> {
    inner: crate::probe::Iter<'a, ()>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a [u8];
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(member, ())| member)
    }
}
