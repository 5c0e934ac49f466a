//! Fixed-capacity open-addressing table over deep-copied byte keys.
//!
//! Shared core of [`ByteMap`](crate::ByteMap) and [`ByteSet`](crate::ByteSet).
//! Probing is linear from `hash % capacity`, bounded at `capacity` steps.
//! Removal writes a tombstone instead of an empty slot, so probe chains stay
//! intact and lookups may stop at the first empty slot they meet.

use core::hash::BuildHasher;
use rustc_hash::FxBuildHasher;
use thiserror::Error;

/// No slot is available for a new key: every slot in the probe cycle is
/// occupied by some other live key.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("hash table is full")]
pub struct TableFull;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum InsertOutcome {
    /// The key was absent; a slot was consumed.
    Inserted,
    /// The key was present; its payload was replaced in place.
    Updated,
}

/// Where a probe for `key` ended up.
enum Probe {
    /// Live slot holding `key`.
    Found(usize),
    /// Best slot for inserting `key`: the first tombstone passed, or the
    /// empty slot that ended the probe.
    Vacant(usize),
    /// Probed the whole cycle: no match, no tombstone, no empty slot.
    Full,
}

#[derive(Debug)]
struct Bucket<P> {
    key: Box<[u8]>,
    payload: P,
}

#[derive(Debug)]
enum Slot<P> {
    Empty,
    Tombstone,
    Occupied(Bucket<P>),
}

#[derive(Debug)]
pub(crate) struct RawProbeTable<P, S = FxBuildHasher> {
    hasher: S,
    slots: Box<[Slot<P>]>,
    len: usize,
}

impl<P> RawProbeTable<P> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher)
    }
}

impl<P, S> RawProbeTable<P, S>
where
    S: BuildHasher,
{
    /// Panics if `capacity` is zero; the probe start is `hash % capacity`.
    pub(crate) fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        assert!(capacity > 0, "capacity must be non-zero");
        Self {
            hasher,
            slots: (0..capacity).map(|_| Slot::Empty).collect(),
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn probe_home(&self, key: &[u8]) -> usize {
        (self.hasher.hash_one(key) % self.slots.len() as u64) as usize
    }

    /// Lookup walk: skips tombstones, stops at the first empty slot. Deletion
    /// never turns a slot empty, so no live key can sit past that point.
    fn find(&self, key: &[u8]) -> Option<usize> {
        let mut index = self.probe_home(key);
        for _ in 0..self.slots.len() {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Tombstone => {}
                Slot::Occupied(bucket) => {
                    if &*bucket.key == key {
                        return Some(index);
                    }
                }
            }
            index = (index + 1) % self.slots.len();
        }
        None
    }

    /// Insertion walk: like `find`, but remembers the first tombstone so the
    /// slot can be reclaimed once the key is known to be absent.
    fn locate(&self, key: &[u8]) -> Probe {
        let mut index = self.probe_home(key);
        let mut reusable = None;
        for _ in 0..self.slots.len() {
            match &self.slots[index] {
                Slot::Empty => return Probe::Vacant(reusable.unwrap_or(index)),
                Slot::Tombstone => {
                    if reusable.is_none() {
                        reusable = Some(index);
                    }
                }
                Slot::Occupied(bucket) => {
                    if &*bucket.key == key {
                        return Probe::Found(index);
                    }
                }
            }
            index = (index + 1) % self.slots.len();
        }
        match reusable {
            Some(index) => Probe::Vacant(index),
            None => Probe::Full,
        }
    }

    pub(crate) fn get(&self, key: &[u8]) -> Option<&P> {
        self.find(key).map(|index| match &self.slots[index] {
            Slot::Occupied(bucket) => &bucket.payload,
            _ => unreachable!("find returns occupied slots only"),
        })
    }

    pub(crate) fn contains(&self, key: &[u8]) -> bool {
        self.find(key).is_some()
    }

    /// Stores `payload` under a deep copy of `key`. An existing key keeps its
    /// slot and stored bytes; only the payload is replaced. Updates succeed
    /// even when the table is full, since no new slot is consumed.
    pub(crate) fn insert(&mut self, key: &[u8], payload: P) -> Result<InsertOutcome, TableFull> {
        match self.locate(key) {
            Probe::Found(index) => {
                match &mut self.slots[index] {
                    Slot::Occupied(bucket) => bucket.payload = payload,
                    _ => unreachable!("locate found an occupied slot"),
                }
                Ok(InsertOutcome::Updated)
            }
            Probe::Vacant(index) => {
                self.slots[index] = Slot::Occupied(Bucket {
                    key: key.into(),
                    payload,
                });
                self.len += 1;
                Ok(InsertOutcome::Inserted)
            }
            Probe::Full => Err(TableFull),
        }
    }

    pub(crate) fn remove(&mut self, key: &[u8]) -> Option<P> {
        let index = self.find(key)?;
        match core::mem::replace(&mut self.slots[index], Slot::Tombstone) {
            Slot::Occupied(bucket) => {
                self.len -= 1;
                Some(bucket.payload)
            }
            _ => unreachable!("find returns occupied slots only"),
        }
    }

    /// Live entries in slot order.
    pub(crate) fn iter(&self) -> Iter<'_, P> {
        Iter {
            slots: self.slots.iter(),
        }
    }
}

/// Iterator over live `(key, payload)` entries of a `RawProbeTable`.
pub(crate) struct Iter<'a, P> {
    slots: core::slice::Iter<'a, Slot<P>>,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = (&'a [u8], &'a P);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied(bucket) = slot {
                return Some((&bucket.key, &bucket.payload));
            }
        }
        None
    }
}
