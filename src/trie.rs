//! Byte-string trie for exact-membership queries.

use hashbrown::HashMap;

#[derive(Debug, Default)]
struct TrieNode {
    terminal: bool,
    children: HashMap<u8, TrieNode>,
}

/// Prefix tree over byte strings.
///
/// Keys carry explicit lengths, so the empty key, interior zero bytes, and
/// every byte value are ordinary. A key is a member only if it was inserted
/// itself; being the prefix of a member is not membership.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct keys inserted.
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `key`, reporting whether it was newly added.
    pub fn insert(&mut self, key: &[u8]) -> bool {
        let mut node = &mut self.root;
        for &byte in key {
            node = node.children.entry(byte).or_default();
        }
        if node.terminal {
            false
        } else {
            node.terminal = true;
            self.len += 1;
            true
        }
    }

    pub fn contains(&self, key: &[u8]) -> bool {
        let mut node = &self.root;
        for &byte in key {
            match node.children.get(&byte) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal
    }
}

impl Drop for Trie {
    fn drop(&mut self) {
        // A single long key makes a node chain as deep as the key; draining
        // each node's children first keeps the drop glue off that chain.
        let mut work: Vec<TrieNode> = self.root.children.drain().map(|(_, node)| node).collect();
        while let Some(mut node) = work.pop() {
            work.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: membership holds exactly for inserted keys, not for their
    /// prefixes or extensions.
    #[test]
    fn membership_is_exact() {
        let mut t = Trie::new();
        t.insert(b"hello");
        assert!(t.contains(b"hello"));
        assert!(!t.contains(b"hell"));
        assert!(!t.contains(b"hello!"));

        t.insert(b"hell");
        assert!(t.contains(b"hell"));
        assert_eq!(t.len(), 2);
    }

    /// Invariant: re-inserting a key reports `false` and leaves the count
    /// unchanged.
    #[test]
    fn duplicate_insert_is_noop() {
        let mut t = Trie::new();
        assert!(t.insert(b"key"));
        assert!(!t.insert(b"key"));
        assert_eq!(t.len(), 1);
    }

    /// Invariant: the empty key and keys with interior zero bytes are
    /// ordinary members.
    #[test]
    fn length_carrying_keys() {
        let mut t = Trie::new();
        assert!(!t.contains(b""));
        t.insert(b"");
        assert!(t.contains(b""));

        t.insert(b"a\0b");
        assert!(t.contains(b"a\0b"));
        assert!(!t.contains(b"a"));
        assert!(!t.contains(b"a\0"));
        assert_eq!(t.len(), 2);
    }

    /// Invariant: every byte value is usable in a key, including 0xFF.
    #[test]
    fn high_byte_keys_roundtrip() {
        let mut t = Trie::new();
        let key = [0x00u8, 0x7F, 0x80, 0xFE, 0xFF];
        t.insert(&key);
        assert!(t.contains(&key));
        assert!(!t.contains(&key[..4]));
    }

    /// Invariant: a trie holding one very long key drops cleanly.
    #[test]
    fn deep_chain_drops_cleanly() {
        let mut t = Trie::new();
        let key = vec![b'x'; 100_000];
        t.insert(&key);
        assert!(t.contains(&key));
        drop(t);
    }

    /// Invariant: `is_empty` tracks whether any key was ever inserted.
    #[test]
    fn emptiness_tracks_inserts() {
        let mut t = Trie::new();
        assert!(t.is_empty());
        t.insert(b"x");
        assert!(!t.is_empty());
    }
}
