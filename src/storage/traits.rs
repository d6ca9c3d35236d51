//! Catalog trait definitions
//!
//! The engine never owns graph data. It reads node existence, adjacency, and
//! edge-type metadata through these three narrow interfaces.

use crate::graph::{AdjacencyView, EdgeTypeId, NodeId};
use std::borrow::Cow;
use thiserror::Error;

/// Errors that can occur while reading from a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Inconsistent catalog data: {0}")]
    Inconsistent(String),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Resolves whether a node identifier exists
///
/// Implementations must be thread-safe (Send + Sync) so that one engine can
/// serve concurrent read-only queries.
pub trait NodeCatalog: Send + Sync {
    /// Check whether the node exists
    fn contains(&self, id: NodeId) -> bool;
}

/// Provides per-node adjacency
pub trait EdgeCatalog: Send + Sync {
    /// Get the forward and backward adjacency of a node
    ///
    /// A node without edges yields an empty view, not an error. Errors are
    /// reserved for a backend that cannot answer.
    fn adjacency(&self, id: NodeId) -> CatalogResult<Cow<'_, AdjacencyView>>;
}

/// Resolves edge-type metadata of type `T`
///
/// Traversal never consults this catalog; it is carried for callers that want
/// typed edges alongside adjacency.
pub trait EdgeTypeCatalog<T>: Send + Sync {
    /// Look up the metadata for an edge type
    fn edge_type(&self, id: EdgeTypeId) -> Option<&T>;
}
