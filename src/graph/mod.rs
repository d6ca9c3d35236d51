//! Core graph data structures

mod edge;
mod engine;
mod node;


pub use edge::{Adjacent, AdjacencyView, EdgeRecord, EdgeTypeId};
pub use engine::{StrandEngine, StrandError, StrandResult};
pub use node::NodeId;
