use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::VertexRef;

/// How a traversal discovered a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    /// The traversal started here
    Root,
    /// Discovered via this vertex
    Via(VertexRef),
}

/// Spanning tree produced by a traversal.
///
/// For every vertex the traversal reached, records how it was reached:
/// `Parent::Root` for the starting vertex, `Parent::Via` for everything
/// discovered along the way. Vertices the traversal never saw have no entry.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    root: VertexRef,
    parents: HashMap<VertexRef, Parent>,
}

impl SpanningTree {
    pub(crate) fn new(root: VertexRef) -> Self {
        let mut parents = HashMap::new();
        parents.insert(root, Parent::Root);
        SpanningTree { root, parents }
    }

    /// Record a discovery; the first discoverer wins.
    pub(crate) fn record(&mut self, vertex: VertexRef, via: VertexRef) {
        self.parents.entry(vertex).or_insert(Parent::Via(via));
    }

    /// The vertex this traversal started from
    pub fn root(&self) -> VertexRef {
        self.root
    }

    /// How `vertex` was discovered, or `None` if the traversal never reached it
    pub fn parent(&self, vertex: VertexRef) -> Option<Parent> {
        self.parents.get(&vertex).copied()
    }

    /// Number of vertices the traversal discovered, the root included
    pub fn discovered_count(&self) -> usize {
        self.parents.len()
    }

    /// Walk the parent records from `end` back to the root and return the
    /// root-to-end path, or `None` when `end` was never discovered.
    pub fn path_to(&self, end: VertexRef) -> Option<Vec<VertexRef>> {
        let mut path = vec![end];
        let mut current = end;
        loop {
            match self.parents.get(&current)? {
                Parent::Root => break,
                Parent::Via(prev) => {
                    path.push(*prev);
                    current = *prev;
                }
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Frontier expansion policy for the level query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expansion {
    /// Each vertex enters the frontier at most once; a spanning tree is recorded
    #[default]
    FirstVisit,
    /// A vertex re-enters the frontier once per path that reaches it; no tree
    AllPaths,
}

/// Neighbor visit order for order-sensitive algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborOrder {
    /// Ascending id order
    #[default]
    Ascending,
    /// Whatever order the adjacency map yields
    Arbitrary,
}

/// Result of a level-bounded breadth-first query
#[derive(Debug, Clone)]
pub struct LevelSet {
    depth: usize,
    frontier: HashSet<VertexRef>,
    tree: Option<SpanningTree>,
}

impl LevelSet {
    pub(crate) fn new(depth: usize, frontier: HashSet<VertexRef>, tree: Option<SpanningTree>) -> Self {
        LevelSet {
            depth,
            frontier,
            tree,
        }
    }

    /// The level this query targeted
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Vertices found at exactly the target level
    pub fn frontier(&self) -> &HashSet<VertexRef> {
        &self.frontier
    }

    pub fn contains(&self, vertex: VertexRef) -> bool {
        self.frontier.contains(&vertex)
    }

    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    /// The spanning tree recorded under `Expansion::FirstVisit`
    pub fn tree(&self) -> Option<&SpanningTree> {
        self.tree.as_ref()
    }
}

/// A deduplicated edge as enumerated by `Graph::edges`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRecord<I> {
    pub from: I,
    pub to: I,
    pub weight: f64,
}

/// One vertex's score in the influence ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankEntry<I> {
    pub rank: f64,
    pub id: I,
}
