//! Graph building utilities for integration tests

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::borrow::Cow;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use strand::{AdjacencyView, CatalogResult, EdgeCatalog, EdgeTypeId, MemoryCatalog, NodeId, StrandEngine};

/// Build a catalog from `(from, to)` pairs, all with edge type 0
pub fn catalog_from_edges(edges: &[(u32, u32)]) -> MemoryCatalog<String> {
    let mut catalog = MemoryCatalog::new();
    catalog.add_edge_type(EdgeTypeId::new(0), "links_to".to_string());
    for &(from, to) in edges {
        catalog.add_edge(NodeId::new(from), NodeId::new(to), EdgeTypeId::new(0));
    }
    catalog
}

pub fn engine_from_edges(edges: &[(u32, u32)]) -> StrandEngine<String> {
    StrandEngine::from_catalog(Arc::new(catalog_from_edges(edges)))
}

/// Straight line `1 -> 2 -> ... -> len`
pub fn chain(len: u32) -> Vec<(u32, u32)> {
    (1..len).map(|i| (i, i + 1)).collect()
}

/// Random directed graph over nodes `1..=node_count`, self-loops and cycles allowed
pub fn random_graph(seed: u64, node_count: u32, edge_count: usize) -> Vec<(u32, u32)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..edge_count)
        .map(|_| (rng.gen_range(1..=node_count), rng.gen_range(1..=node_count)))
        .collect()
}

/// Random tree rooted at node 1, edges pointing away from the root
///
/// Every node has exactly one parent, so there is exactly one simple path
/// between any two nodes of the underlying undirected graph.
pub fn random_out_tree(seed: u64, node_count: u32) -> Vec<(u32, u32)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (2..=node_count)
        .map(|child| (rng.gen_range(1..child), child))
        .collect()
}

/// Edge catalog wrapper that counts adjacency lookups
pub struct CountingEdges {
    inner: MemoryCatalog<String>,
    lookups: AtomicUsize,
}

impl CountingEdges {
    pub fn new(inner: MemoryCatalog<String>) -> Self {
        Self {
            inner,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl EdgeCatalog for CountingEdges {
    fn adjacency(&self, id: NodeId) -> CatalogResult<Cow<'_, AdjacencyView>> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.inner.adjacency(id)
    }
}
