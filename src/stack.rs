//! Bounded LIFO stack used as traversal scratch space.

/// Fixed-capacity stack; pushing past capacity hands the value back.
#[derive(Debug)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Creates a stack holding at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pushes `value`, or returns it as `Err(value)` when the stack is full.
    pub fn push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        self.items.push(value);
        Ok(())
    }

    /// Removes and returns the most recently pushed element.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Borrows the element `pop` would return next.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Drops all elements; the stack stays usable.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: elements come out newest-first.
    #[test]
    fn lifo_order() {
        let mut s = BoundedStack::new(3);
        s.push(1).unwrap();
        s.push(2).unwrap();
        s.push(3).unwrap();
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.pop(), Some(2));
        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), None);
    }

    /// Invariant: pushing onto a full stack returns the value unconsumed.
    #[test]
    fn push_onto_full_returns_value() {
        let mut s = BoundedStack::new(1);
        s.push("a").unwrap();
        assert!(s.is_full());
        assert_eq!(s.push("b"), Err("b"));
        assert_eq!(s.pop(), Some("a"));
    }

    /// Invariant: `peek` observes the top without removing it.
    #[test]
    fn peek_is_nondestructive() {
        let mut s = BoundedStack::new(2);
        assert_eq!(s.peek(), None);
        s.push(7).unwrap();
        assert_eq!(s.peek(), Some(&7));
        assert_eq!(s.len(), 1);
        assert_eq!(s.pop(), Some(7));
        assert_eq!(s.peek(), None);
    }

    /// Invariant: `clear` empties the stack and it accepts pushes again.
    #[test]
    fn clear_then_reuse() {
        let mut s = BoundedStack::new(2);
        s.push(1).unwrap();
        s.push(2).unwrap();
        s.clear();
        assert!(s.is_empty());
        s.push(5).unwrap();
        assert_eq!(s.pop(), Some(5));
    }
}
