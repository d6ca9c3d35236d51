//! Query types and result structures

use crate::graph::NodeId;
use crate::storage::CatalogError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An ordered sequence of nodes from source to destination
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<NodeId>);

impl Path {
    /// Create a path from nodes in traversal order
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self(nodes)
    }

    /// Nodes in traversal order
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// First node of the path
    pub fn source(&self) -> Option<NodeId> {
        self.0.first().copied()
    }

    /// Last node of the path
    pub fn target(&self) -> Option<NodeId> {
        self.0.last().copied()
    }

    /// Whether the node appears anywhere on the path
    pub fn contains(&self, id: NodeId) -> bool {
        self.0.contains(&id)
    }

    /// Consume the path, returning its nodes
    pub fn into_nodes(self) -> Vec<NodeId> {
        self.0
    }
}

impl From<Vec<NodeId>> for Path {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self(nodes)
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}

/// Failure inside a running search
///
/// Never surfaced as an error from path enumeration: the search logs it and
/// reports an empty result. `PathSearch::fault` exposes it for diagnostics.
#[derive(Debug, Error)]
pub enum TraversalFault {
    #[error("Adjacency lookup failed for node {node}: {source}")]
    Catalog { node: NodeId, source: CatalogError },

    #[error("Node {from} lists neighbor {to}, which is not in the node catalog")]
    DanglingNeighbor { from: NodeId, to: NodeId },
}

/// Outcome of a path search, with diagnostics
#[derive(Debug)]
pub struct PathSearch {
    /// Paths in discovery order (empty if the search faulted)
    pub paths: Vec<Path>,
    /// The fault that aborted the search, if any
    pub fault: Option<TraversalFault>,
    /// Number of nodes whose adjacency was expanded
    pub expansions: usize,
}

impl PathSearch {
    pub fn completed(paths: Vec<Path>, expansions: usize) -> Self {
        Self {
            paths,
            fault: None,
            expansions,
        }
    }

    pub fn faulted(fault: TraversalFault, expansions: usize) -> Self {
        Self {
            paths: Vec::new(),
            fault: Some(fault),
            expansions,
        }
    }

    /// Whether the search ran to completion
    pub fn is_complete(&self) -> bool {
        self.fault.is_none()
    }
}
