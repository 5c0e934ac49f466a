//! bytekit: byte-keyed hash containers with fixed capacities, a
//! content-addressed directed graph built on top of them, and the bounded
//! scratch structures its traversals run on.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep every structure within a capacity chosen at construction
//!   and make running out of room a recoverable error, so each layer has a
//!   small contract that the layer above can rely on.
//! - Layers:
//!   - RawProbeTable<P, S> (private): linear-probing slot engine over
//!     deep-copied byte keys with tombstone deletion. The only place the
//!     collision-resolution algorithm exists.
//!   - ByteMap / ByteSet: key-to-value and membership facades over the
//!     probing core.
//!   - Graph: directed graph whose nodes are named by their content bytes.
//!     Nodes and edges live in generational arenas; the containers store
//!     their 8-byte key records, never pointers.
//!   - RingBuffer / BoundedStack: bounded FIFO and LIFO scratch used as
//!     traversal frontiers.
//!   - PairingHeap / Trie: companions sharing the crate's byte-oriented,
//!     iterative-by-construction conventions.
//!
//! Constraints
//! - No table ever grows. Exhaustion surfaces as `TableFull` or a
//!   `GraphError` variant, never as a panic or abort; the only panics are
//!   zero-capacity construction.
//! - Keys and values are copied in. The containers own their bytes and
//!   callers keep ownership of the buffers they pass.
//! - Hashing is deterministic (`FxBuildHasher` by default) and injectable
//!   through `with_hasher`, which is how the tests force collisions.
//!
//! Probing and deletion invariants
//! - The probe sequence starts at `hash % capacity` and advances one slot
//!   at a time, wrapping, for at most `capacity` steps.
//! - Removal writes a tombstone. Lookups skip tombstones and inserts
//!   reclaim the first one on their path; a slot never returns to empty,
//!   so a lookup may stop at the first empty slot it meets.
//! - Updating an existing key replaces only its payload and succeeds even
//!   when the table is full.
//!
//! Graph identity
//! - A node is its content: `add_edge` interns both endpoints, so equal
//!   bytes always name the same node and re-adding content is free.
//! - Arena keys are generational. A record deserialized from a container
//!   is checked against its arena, so a stale record is detectable rather
//!   than dangling.
//! - Every `add_edge` call mints one edge; parallel edges accumulate and
//!   are observable through `out_degree` and `neighbors`.
//!
//! Traversal semantics
//! - BFS and DFS mark a node visited when it leaves the frontier and skip
//!   nodes marked earlier, so each reachable node is reported exactly once
//!   and cyclic graphs terminate.
//! - The frontier and the visited set each get `scratch_capacity` slots
//!   (32 unless configured); outgrowing either one is
//!   `ScratchCapacityExceeded`, and the graph is left untouched.
//!
//! Notes and non-goals
//! - No growth, rehashing, or load-factor management; capacity pressure is
//!   the caller's signal to size differently.
//! - No persistence and no concurrency plumbing; the types are plain owned
//!   data.
//! - `Trie` has no removal; `PairingHeap` has no decrease-key.
//! - Public surface: the facades, `Graph`, the scratch structures, and the
//!   companions. The probing core is an implementation detail shared by
//!   `ByteMap` and `ByteSet`.

pub mod byte_map;
pub mod byte_set;
mod containers_proptest;
pub mod graph;
pub mod pairing_heap;
mod probe;
pub mod ring_buffer;
pub mod stack;
pub mod trie;

// Public surface
pub use byte_map::ByteMap;
pub use byte_set::ByteSet;
pub use graph::{
    Graph, GraphError, Neighbors, DEFAULT_MAX_EDGES_PER_NODE, DEFAULT_SCRATCH_CAPACITY,
};
pub use pairing_heap::PairingHeap;
pub use probe::TableFull;
pub use ring_buffer::RingBuffer;
pub use stack::BoundedStack;
pub use trie::Trie;
