//! Strand: Bounded-Depth Path Enumeration Engine
//!
//! Enumerates the paths connecting two nodes of a directed, typed property
//! graph, up to a maximum depth, optionally treating edges as undirected.
//!
//! # Core Concepts
//!
//! - **Catalogs**: Read-only collaborators that answer node existence,
//!   adjacency, and edge-type lookups
//! - **Engine**: Binds the three catalogs and exposes adjacency and path queries
//! - **Visited policy**: A single visited set spans the whole search, and a node
//!   is marked only after its branch returns, so earlier branches foreclose
//!   later ones. The destination stays eligible throughout.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use strand::{EdgeTypeId, MemoryCatalog, NodeId, StrandEngine};
//!
//! let links_to = EdgeTypeId::new(0);
//! let mut catalog: MemoryCatalog<String> = MemoryCatalog::new();
//! catalog.add_edge_type(links_to, "links_to".to_string());
//! for (from, to) in [(1, 2), (2, 3), (1, 4), (4, 3)] {
//!     catalog.add_edge(NodeId::new(from), NodeId::new(to), links_to);
//! }
//!
//! let engine: StrandEngine<String> = StrandEngine::from_catalog(Arc::new(catalog));
//! let paths = engine
//!     .enumerate_paths(NodeId::new(1), NodeId::new(3), 4, true)
//!     .unwrap();
//! assert_eq!(paths.len(), 2);
//! assert_eq!(paths[0].nodes(), &[NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
//! ```

mod graph;
pub mod query;
pub mod storage;

pub use graph::{Adjacent, AdjacencyView, EdgeRecord, EdgeTypeId, NodeId, StrandEngine, StrandError, StrandResult};
pub use query::{Path, PathQuery, PathSearch, TraversalFault, DEFAULT_MAX_DEPTH};
pub use storage::{CatalogError, CatalogResult, CatalogSnapshot, EdgeCatalog, EdgeTypeCatalog, MemoryCatalog, NodeCatalog};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
