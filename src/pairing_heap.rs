//! Min-ordered pairing heap.
//!
//! Nodes use the child/sibling representation: a node's children form a
//! sibling chain hanging off its `child` link. Melding two roots is O(1);
//! `pop` re-melds the old root's children pairwise in two passes. Chains
//! grow as long as the heap, so the merge pass and `Drop` are iterative.

#[derive(Debug)]
struct Node<T> {
    item: T,
    child: Option<Box<Node<T>>>,
    sibling: Option<Box<Node<T>>>,
}

/// Priority queue yielding the smallest item first.
///
/// `merge` consumes another heap in O(1), which is the reason to prefer a
/// pairing heap over a binary one when queues are combined often.
#[derive(Debug)]
pub struct PairingHeap<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> PairingHeap<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Borrows the smallest item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.root.as_ref().map(|node| &node.item)
    }
}

impl<T: Ord> PairingHeap<T> {
    pub fn push(&mut self, item: T) {
        let node = Box::new(Node {
            item,
            child: None,
            sibling: None,
        });
        self.root = Self::meld(self.root.take(), Some(node));
        self.len += 1;
    }

    /// Removes and returns the smallest item, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        let root = self.root.take()?;
        let Node { item, child, .. } = *root;
        self.root = Self::merge_pairs(child);
        self.len -= 1;
        Some(item)
    }

    /// Moves every item of `other` into `self` in O(1). Ties order behind
    /// items already in `self`.
    pub fn merge(&mut self, mut other: PairingHeap<T>) {
        self.root = Self::meld(self.root.take(), other.root.take());
        self.len += other.len;
    }

    /// Makes the larger root the first child of the smaller; the smaller
    /// root (first argument on ties) wins.
    fn meld(a: Option<Box<Node<T>>>, b: Option<Box<Node<T>>>) -> Option<Box<Node<T>>> {
        match (a, b) {
            (None, b) => b,
            (a, None) => a,
            (Some(mut a), Some(mut b)) => {
                if a.item <= b.item {
                    b.sibling = a.child.take();
                    a.child = Some(b);
                    Some(a)
                } else {
                    a.sibling = b.child.take();
                    b.child = Some(a);
                    Some(b)
                }
            }
        }
    }

    /// Melds a sibling chain into one root: adjacent pairs left to right,
    /// then the pair results right to left.
    fn merge_pairs(mut rest: Option<Box<Node<T>>>) -> Option<Box<Node<T>>> {
        let mut pairs = Vec::new();
        while let Some(mut first) = rest.take() {
            rest = first.sibling.take();
            let second = match rest.take() {
                Some(mut second) => {
                    rest = second.sibling.take();
                    Some(second)
                }
                None => None,
            };
            pairs.push(Self::meld(Some(first), second));
        }
        pairs.into_iter().rev().fold(None, Self::meld)
    }
}

impl<T> Default for PairingHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for PairingHeap<T> {
    fn drop(&mut self) {
        // Child and sibling chains can be as long as the heap; dropping the
        // boxes link by link keeps the call stack flat.
        let mut work = Vec::new();
        work.extend(self.root.take());
        while let Some(mut node) = work.pop() {
            work.extend(node.child.take());
            work.extend(node.sibling.take());
        }
    }
}
