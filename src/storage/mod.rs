//! Catalogs backing the engine
//!
//! The engine reads graph data through the `NodeCatalog`, `EdgeCatalog`, and
//! `EdgeTypeCatalog` traits. `MemoryCatalog` is the resident implementation
//! of all three.

mod memory;
mod traits;

pub use memory::{CatalogSnapshot, MemoryCatalog, SnapshotEdge, SnapshotEdgeType};
pub use traits::{CatalogError, CatalogResult, EdgeCatalog, EdgeTypeCatalog, NodeCatalog};
