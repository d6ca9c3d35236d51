//! Common test utilities for Strand integration tests
//!
//! Graph builders, a counting edge catalog, and tracing setup.

#![allow(dead_code)]

pub mod graph_builder;

pub use graph_builder::{
    catalog_from_edges, chain, engine_from_edges, random_graph, random_out_tree, CountingEdges,
};

use strand::NodeId;

/// Install a test-writer tracing subscriber once per test binary
pub fn init_test_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("strand=debug")),
        )
        .with_test_writer()
        .try_init();
}

pub fn n(id: u32) -> NodeId {
    NodeId::new(id)
}

pub fn nodes(ids: &[u32]) -> Vec<NodeId> {
    ids.iter().copied().map(NodeId::new).collect()
}
