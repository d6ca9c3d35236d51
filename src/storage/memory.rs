//! Resident in-memory catalog

use super::traits::{CatalogError, CatalogResult, EdgeCatalog, EdgeTypeCatalog, NodeCatalog};
use crate::graph::{AdjacencyView, EdgeTypeId, NodeId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

/// An edge in snapshot form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub edge_type: EdgeTypeId,
}

/// An edge type in snapshot form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEdgeType<T> {
    pub id: EdgeTypeId,
    pub data: T,
}

/// Serializable image of a whole catalog
///
/// Edges are applied in list order, which fixes adjacency iteration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct CatalogSnapshot<T> {
    #[serde(default)]
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub edges: Vec<SnapshotEdge>,
    #[serde(default)]
    pub edge_types: Vec<SnapshotEdgeType<T>>,
}

/// In-memory implementation of all three catalogs
///
/// Adjacency keeps neighbors in first-insertion order. Repeated edges to the
/// same neighbor collapse into a single entry that holds every edge type.
#[derive(Debug, Clone)]
pub struct MemoryCatalog<T> {
    nodes: HashSet<NodeId>,
    adjacency: HashMap<NodeId, AdjacencyView>,
    edge_types: HashMap<EdgeTypeId, T>,
    edge_count: usize,
}

impl<T> Default for MemoryCatalog<T> {
    fn default() -> Self {
        Self {
            nodes: HashSet::new(),
            adjacency: HashMap::new(),
            edge_types: HashMap::new(),
            edge_count: 0,
        }
    }
}

impl<T> MemoryCatalog<T> {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a snapshot
    ///
    /// Every edge endpoint must be listed in `nodes`.
    pub fn from_snapshot(snapshot: CatalogSnapshot<T>) -> CatalogResult<Self> {
        let mut catalog = Self::new();
        for id in snapshot.nodes {
            catalog.add_node(id);
        }
        for edge in snapshot.edges {
            for endpoint in [edge.from, edge.to] {
                if !catalog.nodes.contains(&endpoint) {
                    return Err(CatalogError::Inconsistent(format!(
                        "edge {} -> {} references unknown node {}",
                        edge.from, edge.to, endpoint
                    )));
                }
            }
            catalog.add_edge(edge.from, edge.to, edge.edge_type);
        }
        for edge_type in snapshot.edge_types {
            catalog.add_edge_type(edge_type.id, edge_type.data);
        }
        Ok(catalog)
    }

    /// Register a node
    pub fn add_node(&mut self, id: NodeId) -> &mut Self {
        self.nodes.insert(id);
        self
    }

    /// Add a directed edge, registering both endpoints as nodes
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, edge_type: EdgeTypeId) -> &mut Self {
        self.add_node(from);
        self.add_node(to);
        self.adjacency.entry(from).or_default().push_forward(to, edge_type);
        self.adjacency.entry(to).or_default().push_backward(from, edge_type);
        self.edge_count += 1;
        self
    }

    /// Register metadata for an edge type, replacing any previous entry
    pub fn add_edge_type(&mut self, id: EdgeTypeId, data: T) -> &mut Self {
        self.edge_types.insert(id, data);
        self
    }

    /// Number of registered nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges added, counting repeats
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<T: DeserializeOwned> MemoryCatalog<T> {
    /// Build a catalog from a JSON snapshot
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let snapshot: CatalogSnapshot<T> = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }
}

impl<T: Send + Sync> NodeCatalog for MemoryCatalog<T> {
    fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }
}

impl<T: Send + Sync> EdgeCatalog for MemoryCatalog<T> {
    fn adjacency(&self, id: NodeId) -> CatalogResult<Cow<'_, AdjacencyView>> {
        Ok(match self.adjacency.get(&id) {
            Some(view) => Cow::Borrowed(view),
            None => Cow::Owned(AdjacencyView::default()),
        })
    }
}

impl<T: Send + Sync> EdgeTypeCatalog<T> for MemoryCatalog<T> {
    fn edge_type(&self, id: EdgeTypeId) -> Option<&T> {
        self.edge_types.get(&id)
    }
}
