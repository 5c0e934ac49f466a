//! Bounded FIFO queue used as traversal scratch space.
//!
//! Capacity is chosen at construction and never grows; pushing into a full
//! buffer hands the value back instead of dropping it. The element at
//! logical index `i` lives at `(head + i) % capacity`.

/// Fixed-capacity ring buffer.
#[derive(Debug)]
pub struct RingBuffer<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Creates a buffer holding at most `capacity` elements. A zero-capacity
    /// buffer is permanently full.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Appends `value`, or returns it as `Err(value)` when the buffer is
    /// full so ownership stays with the caller.
    pub fn push_back(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        let tail = (self.head + self.len) % self.slots.len();
        self.slots[tail] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the oldest element, or `None` when empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        value
    }

    /// Drops all elements in FIFO order; the buffer stays usable.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
        self.head = 0;
    }
}
