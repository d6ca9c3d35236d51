//! Edge records and per-node adjacency views

use super::node::NodeId;
use serde::{Deserialize, Serialize};

/// Identifier of an edge type in the edge-type catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeTypeId(u32);

impl EdgeTypeId {
    /// Create an EdgeTypeId from a catalog key
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner catalog key
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EdgeTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EdgeTypeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A single edge as seen from one of its endpoints
///
/// `neighbor` is the node at the other end: the target for a forward edge,
/// the source for a backward edge. The traversal only ever reads `neighbor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Node at the other end of the edge
    pub neighbor: NodeId,
    /// Type of the edge, resolvable through the edge-type catalog
    pub edge_type: EdgeTypeId,
}

impl EdgeRecord {
    /// Create a new edge record
    pub fn new(neighbor: NodeId, edge_type: EdgeTypeId) -> Self {
        Self { neighbor, edge_type }
    }
}

/// One neighbor key of an adjacency view together with every edge to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjacent {
    /// Neighbor node
    pub neighbor: NodeId,
    /// Edge types connecting to the neighbor, in insertion order (never empty)
    pub edge_types: Vec<EdgeTypeId>,
}

impl Adjacent {
    /// Create an entry holding a single edge
    pub fn new(neighbor: NodeId, edge_type: EdgeTypeId) -> Self {
        Self {
            neighbor,
            edge_types: vec![edge_type],
        }
    }

    /// Expand this entry into one record per edge
    pub fn records(&self) -> impl Iterator<Item = EdgeRecord> + '_ {
        self.edge_types
            .iter()
            .map(move |&edge_type| EdgeRecord::new(self.neighbor, edge_type))
    }
}

/// Adjacency of one node: outgoing and incoming edges, each an ordered
/// mapping from neighbor to edge records
///
/// Order is whatever the catalog produced; the engine preserves it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyView {
    /// Outgoing edges, keyed by destination node
    #[serde(default)]
    pub forward: Vec<Adjacent>,
    /// Incoming edges, keyed by source node
    #[serde(default)]
    pub backward: Vec<Adjacent>,
}

impl AdjacencyView {
    /// Create an empty view
    pub fn new() -> Self {
        Self::default()
    }

    /// Neighbors reachable via outgoing edges, in view order
    pub fn forward_neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.forward.iter().map(|adj| adj.neighbor)
    }

    /// Neighbors reachable via incoming edges, in view order
    pub fn backward_neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.backward.iter().map(|adj| adj.neighbor)
    }

    /// Whether the node has no edges in either direction
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty() && self.backward.is_empty()
    }

    /// Record an outgoing edge, merging into an existing neighbor entry
    pub fn push_forward(&mut self, neighbor: NodeId, edge_type: EdgeTypeId) {
        merge_into(&mut self.forward, neighbor, edge_type);
    }

    /// Record an incoming edge, merging into an existing neighbor entry
    pub fn push_backward(&mut self, neighbor: NodeId, edge_type: EdgeTypeId) {
        merge_into(&mut self.backward, neighbor, edge_type);
    }
}

fn merge_into(entries: &mut Vec<Adjacent>, neighbor: NodeId, edge_type: EdgeTypeId) {
    match entries.iter_mut().find(|adj| adj.neighbor == neighbor) {
        Some(existing) => existing.edge_types.push(edge_type),
        None => entries.push(Adjacent::new(neighbor, edge_type)),
    }
}
