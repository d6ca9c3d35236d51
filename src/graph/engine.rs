//! StrandEngine: The main entry point for path queries

use super::edge::{AdjacencyView, EdgeRecord, EdgeTypeId};
use super::node::NodeId;
use crate::query::{Path, PathQuery, PathSearch};
use crate::storage::{CatalogError, CatalogResult, EdgeCatalog, EdgeTypeCatalog, NodeCatalog};
use std::borrow::Cow;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur in Strand operations
#[derive(Debug, Error)]
pub enum StrandError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Result type for Strand operations
pub type StrandResult<T> = Result<T, StrandError>;

struct Catalogs<T> {
    nodes: Arc<dyn NodeCatalog>,
    edges: Arc<dyn EdgeCatalog>,
    edge_types: Arc<dyn EdgeTypeCatalog<T>>,
}

impl<T> Clone for Catalogs<T> {
    fn clone(&self) -> Self {
        Self {
            nodes: Arc::clone(&self.nodes),
            edges: Arc::clone(&self.edges),
            edge_types: Arc::clone(&self.edge_types),
        }
    }
}

/// The main Strand engine
///
/// Binds a node catalog, an edge catalog, and an edge-type catalog, and
/// answers adjacency and path queries against them. The engine keeps no
/// state between calls; every search owns its own path buffer and visited set.
///
/// `T` is the edge-type metadata carried by the edge-type catalog. It has no
/// effect on traversal.
pub struct StrandEngine<T> {
    catalogs: Option<Catalogs<T>>,
}

impl<T> Default for StrandEngine<T> {
    /// An unbound engine: every node id is reported as not found
    fn default() -> Self {
        Self { catalogs: None }
    }
}

impl<T> Clone for StrandEngine<T> {
    fn clone(&self) -> Self {
        Self {
            catalogs: self.catalogs.clone(),
        }
    }
}

impl<T> std::fmt::Debug for StrandEngine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrandEngine")
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl<T: 'static> StrandEngine<T> {
    /// Create an engine bound to the three catalogs
    pub fn new(
        nodes: Arc<dyn NodeCatalog>,
        edges: Arc<dyn EdgeCatalog>,
        edge_types: Arc<dyn EdgeTypeCatalog<T>>,
    ) -> Self {
        Self {
            catalogs: Some(Catalogs {
                nodes,
                edges,
                edge_types,
            }),
        }
    }

    /// Create an engine from a single value implementing all three catalogs
    pub fn from_catalog<C>(catalog: Arc<C>) -> Self
    where
        C: NodeCatalog + EdgeCatalog + EdgeTypeCatalog<T> + 'static,
    {
        let nodes: Arc<dyn NodeCatalog> = catalog.clone();
        let edges: Arc<dyn EdgeCatalog> = catalog.clone();
        let edge_types: Arc<dyn EdgeTypeCatalog<T>> = catalog;
        Self::new(nodes, edges, edge_types)
    }
}

impl<T> StrandEngine<T> {
    /// Whether the engine has catalogs to query
    pub fn is_bound(&self) -> bool {
        self.catalogs.is_some()
    }

    /// Check whether a node exists in the node catalog
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.catalogs
            .as_ref()
            .is_some_and(|catalogs| catalogs.nodes.contains(id))
    }

    /// Fail with `NodeNotFound` unless the node exists
    pub(crate) fn validate(&self, id: NodeId) -> StrandResult<()> {
        if self.contains_node(id) {
            Ok(())
        } else {
            Err(StrandError::NodeNotFound(id))
        }
    }

    /// Fetch adjacency without validating the node
    pub(crate) fn adjacency(&self, id: NodeId) -> CatalogResult<Cow<'_, AdjacencyView>> {
        match &self.catalogs {
            Some(catalogs) => catalogs.edges.adjacency(id),
            None => Err(CatalogError::Unavailable("engine has no edge catalog".to_string())),
        }
    }

    /// Neighbors reachable via outgoing edges, in catalog order
    pub fn forward_neighbors(&self, id: NodeId) -> StrandResult<Vec<NodeId>> {
        self.validate(id)?;
        let adjacency = self.adjacency(id)?;
        Ok(adjacency.forward_neighbors().collect())
    }

    /// Neighbors reachable via incoming edges, in catalog order
    pub fn backward_neighbors(&self, id: NodeId) -> StrandResult<Vec<NodeId>> {
        self.validate(id)?;
        let adjacency = self.adjacency(id)?;
        Ok(adjacency.backward_neighbors().collect())
    }

    /// Edge records for every outgoing edge from `from` to `to`
    pub fn edges_between(&self, from: NodeId, to: NodeId) -> StrandResult<Vec<EdgeRecord>> {
        self.validate(from)?;
        self.validate(to)?;
        let adjacency = self.adjacency(from)?;
        Ok(adjacency
            .forward
            .iter()
            .filter(|adj| adj.neighbor == to)
            .flat_map(|adj| adj.records())
            .collect())
    }

    /// Resolve edge-type metadata through the edge-type catalog
    pub fn edge_type(&self, id: EdgeTypeId) -> Option<&T> {
        self.catalogs
            .as_ref()
            .and_then(|catalogs| catalogs.edge_types.edge_type(id))
    }

    /// Enumerate paths from `src` to `dst`
    ///
    /// `max_depth` bounds the number of nodes on a path, source included.
    /// Unknown `src` or `dst` fails with `NodeNotFound`; a fault inside the
    /// search is logged and yields an empty result.
    pub fn enumerate_paths(
        &self,
        src: NodeId,
        dst: NodeId,
        max_depth: usize,
        directed: bool,
    ) -> StrandResult<Vec<Path>> {
        PathQuery::between(src, dst)
            .max_depth(max_depth)
            .directed(directed)
            .execute(self)
    }

    /// Run a configured path query, returning only the paths
    pub fn execute(&self, query: &PathQuery) -> StrandResult<Vec<Path>> {
        query.execute(self)
    }

    /// Run a configured path query, returning paths and search diagnostics
    pub fn search(&self, query: &PathQuery) -> StrandResult<PathSearch> {
        query.search(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryCatalog;

    fn n(id: u32) -> NodeId {
        NodeId::new(id)
    }

    fn create_test_engine() -> StrandEngine<String> {
        let mut catalog = MemoryCatalog::new();
        let links = EdgeTypeId::new(0);
        let cites = EdgeTypeId::new(1);
        catalog
            .add_edge_type(links, "links_to".to_string())
            .add_edge_type(cites, "cites".to_string())
            .add_edge(n(1), n(2), links)
            .add_edge(n(1), n(3), links)
            .add_edge(n(4), n(1), cites)
            .add_edge(n(1), n(2), cites)
            .add_node(n(5));
        StrandEngine::from_catalog(Arc::new(catalog))
    }

    #[test]
    fn test_default_engine_is_unbound() {
        let engine: StrandEngine<String> = StrandEngine::default();
        assert!(!engine.is_bound());
        assert!(matches!(
            engine.forward_neighbors(n(1)),
            Err(StrandError::NodeNotFound(id)) if id == n(1)
        ));
        assert!(engine.edge_type(EdgeTypeId::new(0)).is_none());
    }

    #[test]
    fn test_forward_neighbors() {
        let engine = create_test_engine();
        assert_eq!(engine.forward_neighbors(n(1)).unwrap(), vec![n(2), n(3)]);
    }

    #[test]
    fn test_backward_neighbors() {
        let engine = create_test_engine();
        assert_eq!(engine.backward_neighbors(n(1)).unwrap(), vec![n(4)]);
        assert_eq!(engine.backward_neighbors(n(2)).unwrap(), vec![n(1)]);
    }

    #[test]
    fn test_isolated_node_has_no_neighbors() {
        let engine = create_test_engine();
        assert!(engine.forward_neighbors(n(5)).unwrap().is_empty());
        assert!(engine.backward_neighbors(n(5)).unwrap().is_empty());
    }

    #[test]
    fn test_neighbors_of_unknown_node() {
        let engine = create_test_engine();
        let err = engine.backward_neighbors(n(42)).unwrap_err();
        assert!(matches!(err, StrandError::NodeNotFound(id) if id == n(42)));
        assert_eq!(err.to_string(), "Node not found: 42");
    }

    #[test]
    fn test_edges_between_returns_every_record() {
        let engine = create_test_engine();
        let records = engine.edges_between(n(1), n(2)).unwrap();

        let types: Vec<_> = records
            .iter()
            .filter_map(|r| engine.edge_type(r.edge_type))
            .map(String::as_str)
            .collect();
        assert_eq!(types, vec!["links_to", "cites"]);
        assert!(engine.edges_between(n(2), n(1)).unwrap().is_empty());
    }

    #[test]
    fn test_edges_between_validates_both_ends() {
        let engine = create_test_engine();
        assert!(matches!(
            engine.edges_between(n(1), n(99)),
            Err(StrandError::NodeNotFound(id)) if id == n(99)
        ));
    }

    #[test]
    fn test_clone_shares_catalogs() {
        let engine = create_test_engine();
        let cloned = engine.clone();
        assert!(cloned.is_bound());
        assert_eq!(
            cloned.forward_neighbors(n(1)).unwrap(),
            engine.forward_neighbors(n(1)).unwrap()
        );
    }
}
