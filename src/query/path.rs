//! Bounded-depth path enumeration

use super::types::{Path, PathSearch, TraversalFault};
use crate::graph::{NodeId, StrandEngine, StrandResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Depth bound used when a query does not set one
pub const DEFAULT_MAX_DEPTH: usize = 4;

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_directed() -> bool {
    true
}

/// Query for enumerating paths between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathQuery {
    /// Source node ID
    pub source: NodeId,
    /// Target node ID
    pub target: NodeId,
    /// Maximum number of nodes on a path, source included
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Follow outgoing edges only; when false, incoming edges are followed too
    #[serde(default = "default_directed")]
    pub directed: bool,
}

impl PathQuery {
    /// Create a new path query between two nodes
    pub fn between(source: NodeId, target: NodeId) -> Self {
        Self {
            source,
            target,
            max_depth: DEFAULT_MAX_DEPTH,
            directed: true,
        }
    }

    /// Set maximum path depth
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set whether only outgoing edges are followed
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Follow edges in both directions
    pub fn undirected(self) -> Self {
        self.directed(false)
    }

    /// Execute the query, returning paths in discovery order
    pub fn execute<T>(&self, engine: &StrandEngine<T>) -> StrandResult<Vec<Path>> {
        Ok(self.search(engine)?.paths)
    }

    /// Execute the query, keeping search diagnostics
    ///
    /// Only `NodeNotFound` for the endpoints is returned as an error. A fault
    /// raised while walking the graph is logged and recorded in the outcome,
    /// whose path list is then empty.
    #[tracing::instrument(
        skip(self, engine),
        fields(src = %self.source, dst = %self.target, max_depth = self.max_depth, directed = self.directed)
    )]
    pub fn search<T>(&self, engine: &StrandEngine<T>) -> StrandResult<PathSearch> {
        engine.validate(self.source)?;
        engine.validate(self.target)?;

        let mut walk = DepthFirstWalk::new(engine, self);
        let outcome = match walk.expand(self.source, 1) {
            Ok(()) => {
                debug_assert_eq!(walk.path.len(), 1);
                PathSearch::completed(walk.paths, walk.expansions)
            }
            Err(fault) => {
                tracing::warn!(error = %fault, "Path search aborted, returning no paths");
                PathSearch::faulted(fault, walk.expansions)
            }
        };

        tracing::debug!(
            paths = outcome.paths.len(),
            expansions = outcome.expansions,
            "Path search finished"
        );
        Ok(outcome)
    }
}

/// State of one in-flight search
///
/// `visited` spans the whole search. A node is marked only after the branch
/// through it returns, so it stays open to its own subtree and closed to every
/// branch explored afterwards. The target is never closed.
struct DepthFirstWalk<'e, T> {
    engine: &'e StrandEngine<T>,
    target: NodeId,
    max_depth: usize,
    directed: bool,
    path: Vec<NodeId>,
    visited: HashSet<NodeId>,
    paths: Vec<Path>,
    expansions: usize,
}

impl<'e, T> DepthFirstWalk<'e, T> {
    fn new(engine: &'e StrandEngine<T>, query: &PathQuery) -> Self {
        let mut visited = HashSet::new();
        visited.insert(query.source);
        Self {
            engine,
            target: query.target,
            max_depth: query.max_depth,
            directed: query.directed,
            path: vec![query.source],
            visited,
            paths: Vec::new(),
            expansions: 0,
        }
    }

    /// Visit the tail of the current path at the given depth
    fn expand(&mut self, node: NodeId, depth: usize) -> Result<(), TraversalFault> {
        // The source alone is never a path, even when it is the target.
        if self.path.len() > 1 && self.path.len() <= self.max_depth && node == self.target {
            if !self.body_repeats() {
                self.paths.push(Path::new(self.path.clone()));
            }
            return Ok(());
        }

        if depth >= self.max_depth {
            return Ok(());
        }

        let engine = self.engine;
        if !engine.contains_node(node) {
            let from = self.path.len().checked_sub(2).map_or(node, |i| self.path[i]);
            return Err(TraversalFault::DanglingNeighbor { from, to: node });
        }
        let adjacency = engine
            .adjacency(node)
            .map_err(|source| TraversalFault::Catalog { node, source })?;
        self.expansions += 1;

        self.descend(adjacency.forward_neighbors(), depth)?;
        if !self.directed {
            self.descend(adjacency.backward_neighbors(), depth)?;
        }
        Ok(())
    }

    fn descend(&mut self, neighbors: impl Iterator<Item = NodeId>, depth: usize) -> Result<(), TraversalFault> {
        for neighbor in neighbors {
            if !self.is_eligible(neighbor) {
                continue;
            }

            self.path.push(neighbor);
            let result = self.expand(neighbor, depth + 1);
            self.path.pop();
            result?;

            self.visited.insert(neighbor);
        }
        Ok(())
    }

    fn is_eligible(&self, node: NodeId) -> bool {
        node == self.target || !self.visited.contains(&node)
    }

    /// Whether a node repeats anywhere before the tail of the current path
    ///
    /// Late marking lets a branch cycle back into its own unmarked nodes. Such
    /// walks still run and still mark what they reach, but are never reported.
    fn body_repeats(&self) -> bool {
        let body = &self.path[..self.path.len() - 1];
        let mut seen = HashSet::with_capacity(body.len());
        body.iter().any(|node| !seen.insert(*node))
    }
}
