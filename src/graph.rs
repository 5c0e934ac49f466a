//! Content-addressed directed graph over the byte-keyed containers.
//!
//! A node is named by its content bytes: `add_edge` interns both endpoints,
//! so the same byte string always resolves to the same node. Nodes and edges
//! live in generational arenas; the hash containers store only their 8-byte
//! key records, never pointers, so a record can always be checked against
//! the arena it came from.

use crate::byte_map::ByteMap;
use crate::byte_set::ByteSet;
use crate::probe::TableFull;
use crate::ring_buffer::RingBuffer;
use crate::stack::BoundedStack;
use slotmap::{new_key_type, Key, KeyData, SlotMap};
use thiserror::Error;

/// Adjacency slots per node unless overridden by [`Graph::with_limits`].
pub const DEFAULT_MAX_EDGES_PER_NODE: usize = 16;
/// Traversal scratch slots unless overridden by [`Graph::with_limits`].
pub const DEFAULT_SCRATCH_CAPACITY: usize = 32;

/// Why a graph operation could not complete.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum GraphError {
    /// The traversal start key names no interned node.
    #[error("start node is not in the graph")]
    UnknownStartNode,
    /// Every slot of the node index holds a live key.
    #[error("node capacity exhausted")]
    NodeCapacityExceeded,
    /// The source node's adjacency set has no free slot.
    #[error("edge capacity of the source node exhausted")]
    EdgeCapacityExceeded,
    /// A traversal outgrew its frontier or visited scratch space.
    #[error("traversal scratch capacity exhausted")]
    ScratchCapacityExceeded,
}

new_key_type! {
    struct NodeId;
    struct EdgeId;
}

/// Width of a serialized arena key, as stored in the hash containers.
const ID_RECORD_LEN: usize = 8;

fn id_record(data: KeyData) -> [u8; ID_RECORD_LEN] {
    data.as_ffi().to_le_bytes()
}

fn id_from_record(record: &[u8]) -> KeyData {
    // Records are written by this module and are always ID_RECORD_LEN bytes.
    KeyData::from_ffi(u64::from_le_bytes(record.try_into().unwrap()))
}

struct Node {
    data: Box<[u8]>,
    edges: ByteSet,
}

#[derive(Debug)]
struct Edge {
    dest: NodeId,
}

/// Directed graph whose nodes are byte strings.
///
/// Capacities are fixed at construction: the node index has `max_nodes`
/// slots, each node's adjacency set has `max_edges_per_node` slots, and
/// traversals work within `scratch_capacity` slots of frontier and visited
/// space. Exceeding any of them is a recoverable [`GraphError`], and a
/// failed operation leaves node and edge bookkeeping consistent.
pub struct Graph {
    nodes: SlotMap<NodeId, Node>,
    edges: SlotMap<EdgeId, Edge>,
    index: ByteMap,
    max_edges_per_node: usize,
    scratch_capacity: usize,
}

impl Graph {
    /// Creates a graph holding at most `max_nodes` nodes, with
    /// [`DEFAULT_MAX_EDGES_PER_NODE`] adjacency slots per node and
    /// [`DEFAULT_SCRATCH_CAPACITY`] traversal scratch slots.
    ///
    /// # Panics
    ///
    /// Panics if `max_nodes` is zero.
    pub fn new(max_nodes: usize) -> Self {
        Self::with_limits(
            max_nodes,
            DEFAULT_MAX_EDGES_PER_NODE,
            DEFAULT_SCRATCH_CAPACITY,
        )
    }

    /// Creates a graph with every capacity chosen by the caller.
    ///
    /// # Panics
    ///
    /// Panics if any limit is zero.
    pub fn with_limits(max_nodes: usize, max_edges_per_node: usize, scratch_capacity: usize) -> Self {
        assert!(max_nodes > 0, "max_nodes must be non-zero");
        assert!(max_edges_per_node > 0, "max_edges_per_node must be non-zero");
        assert!(scratch_capacity > 0, "scratch_capacity must be non-zero");
        Self {
            nodes: SlotMap::with_capacity_and_key(max_nodes),
            edges: SlotMap::with_key(),
            index: ByteMap::new(max_nodes),
            max_edges_per_node,
            scratch_capacity,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
    pub fn max_nodes(&self) -> usize {
        self.index.capacity()
    }
    pub fn max_edges_per_node(&self) -> usize {
        self.max_edges_per_node
    }
    pub fn scratch_capacity(&self) -> usize {
        self.scratch_capacity
    }

    pub fn contains_node(&self, data: &[u8]) -> bool {
        self.index.contains_key(data)
    }

    /// Number of edges leaving the node named by `data`, counting parallel
    /// edges separately, or `None` for an unknown node.
    pub fn out_degree(&self, data: &[u8]) -> Option<usize> {
        let id = self.lookup(data)?;
        Some(self.nodes[id].edges.len())
    }

    /// Visits the contents of the nodes that edges from `data` point to, one
    /// item per edge, so a destination repeats when parallel edges exist.
    /// Returns `None` for an unknown node.
    pub fn neighbors(&self, data: &[u8]) -> Option<Neighbors<'_>> {
        let id = self.lookup(data)?;
        Some(Neighbors {
            graph: self,
            records: self.nodes[id].edges.iter(),
        })
    }

    fn lookup(&self, data: &[u8]) -> Option<NodeId> {
        self.index
            .get(data)
            .map(|record| NodeId::from(id_from_record(record)))
    }

    /// Resolves `data` to its node, interning a new one on first sight.
    fn intern(&mut self, data: &[u8]) -> Result<NodeId, GraphError> {
        if let Some(id) = self.lookup(data) {
            return Ok(id);
        }
        let id = self.nodes.insert(Node {
            data: data.into(),
            edges: ByteSet::new(self.max_edges_per_node),
        });
        if self.index.insert(data, &id_record(id.data())).is_err() {
            // The index and the arena must agree on membership.
            self.nodes.remove(id);
            return Err(GraphError::NodeCapacityExceeded);
        }
        Ok(id)
    }

    /// Adds a directed edge from the node named `from` to the node named
    /// `to`, interning either endpoint that is not yet present.
    ///
    /// Every successful call adds one edge, so repeating a call accumulates
    /// parallel edges. On failure nothing is partially linked: an endpoint
    /// interned earlier in the call stays, but no edge is recorded anywhere.
    pub fn add_edge(&mut self, from: &[u8], to: &[u8]) -> Result<(), GraphError> {
        let src = self.intern(from)?;
        let dest = self.intern(to)?;
        let edge = self.edges.insert(Edge { dest });
        match self.nodes[src].edges.insert(&id_record(edge.data())) {
            Ok(_) => Ok(()),
            Err(TableFull) => {
                // A failed call must not leave an orphan edge in the arena.
                self.edges.remove(edge);
                Err(GraphError::EdgeCapacityExceeded)
            }
        }
    }

    /// Visits every node reachable from `start` breadth-first and returns
    /// node contents in visit order.
    ///
    /// Each reachable node appears exactly once; cycles and parallel edges
    /// do not revisit. `start` is always first. The graph itself is never
    /// modified, so a scratch overflow costs nothing but the call.
    pub fn bfs(&self, start: &[u8]) -> Result<Vec<&[u8]>, GraphError> {
        let start_id = self.lookup(start).ok_or(GraphError::UnknownStartNode)?;
        let mut visited = ByteSet::new(self.scratch_capacity);
        let mut frontier = RingBuffer::new(self.scratch_capacity);
        let mut order = Vec::new();

        frontier
            .push_back(start_id)
            .map_err(|_| GraphError::ScratchCapacityExceeded)?;
        while let Some(id) = frontier.pop_front() {
            if !self.mark_visited(&mut visited, id)? {
                continue;
            }
            let node = &self.nodes[id];
            order.push(&*node.data);
            for record in node.edges.iter() {
                let dest = self.edges[EdgeId::from(id_from_record(record))].dest;
                if visited.contains(&id_record(dest.data())) {
                    continue;
                }
                frontier
                    .push_back(dest)
                    .map_err(|_| GraphError::ScratchCapacityExceeded)?;
            }
        }
        Ok(order)
    }

    /// Depth-first variant of [`Graph::bfs`]: same contract, stack-driven
    /// visit order.
    pub fn dfs(&self, start: &[u8]) -> Result<Vec<&[u8]>, GraphError> {
        let start_id = self.lookup(start).ok_or(GraphError::UnknownStartNode)?;
        let mut visited = ByteSet::new(self.scratch_capacity);
        let mut frontier = BoundedStack::new(self.scratch_capacity);
        let mut order = Vec::new();

        frontier
            .push(start_id)
            .map_err(|_| GraphError::ScratchCapacityExceeded)?;
        while let Some(id) = frontier.pop() {
            if !self.mark_visited(&mut visited, id)? {
                continue;
            }
            let node = &self.nodes[id];
            order.push(&*node.data);
            for record in node.edges.iter() {
                let dest = self.edges[EdgeId::from(id_from_record(record))].dest;
                if visited.contains(&id_record(dest.data())) {
                    continue;
                }
                frontier
                    .push(dest)
                    .map_err(|_| GraphError::ScratchCapacityExceeded)?;
            }
        }
        Ok(order)
    }

    /// Marks a node visited at the moment it is taken off the frontier.
    /// `Ok(true)` is a first visit; duplicates queued before the first visit
    /// report `Ok(false)` and are skipped by the caller.
    fn mark_visited(&self, visited: &mut ByteSet, id: NodeId) -> Result<bool, GraphError> {
        visited
            .insert(&id_record(id.data()))
            .map_err(|TableFull| GraphError::ScratchCapacityExceeded)
    }
}

/// Iterator over the destination contents of one node's out-edges.
pub struct Neighbors<'a> {
    graph: &'a Graph,
    records: crate::byte_set::Iter<'a>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a [u8];
    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        let graph = self.graph;
        let dest = graph.edges[EdgeId::from(id_from_record(record))].dest;
        Some(&*graph.nodes[dest].data)
    }
}
