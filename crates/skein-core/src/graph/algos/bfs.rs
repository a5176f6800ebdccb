//! Breadth-first level queries and shortest-path reconstruction

use std::collections::HashSet;

use crate::error::Result;
use crate::graph::types::{Expansion, LevelSet, NeighborOrder, SpanningTree};
use crate::graph::{Graph, VertexId, VertexRef};

impl<I: VertexId> Graph<I> {
    /// Find the vertices exactly `depth` edges away from `root`.
    ///
    /// Under `Expansion::FirstVisit` every vertex enters the frontier at most
    /// once, so the result is the set of vertices first reached at `depth`,
    /// together with the breadth-first spanning tree that reached them (first
    /// discoverer wins). Under `Expansion::AllPaths` a vertex re-enters the
    /// frontier once per path, so cycles can surface a vertex at several
    /// levels; no tree is recorded.
    ///
    /// A frontier that empties before `depth` yields an empty result; at
    /// `depth` 0 the frontier is exactly `{root}`.
    #[tracing::instrument(skip(self))]
    pub fn bfs(&self, root: VertexRef, depth: usize, expansion: Expansion) -> Result<LevelSet> {
        let root_slot = self.resolve(root)?;
        match expansion {
            Expansion::FirstVisit => {
                let (frontier, tree) = self.level_first_visit(root_slot, depth);
                Ok(LevelSet::new(depth, self.to_refs(&frontier), Some(tree)))
            }
            Expansion::AllPaths => {
                let frontier = self.level_all_paths(root_slot, depth);
                Ok(LevelSet::new(depth, self.to_refs(&frontier), None))
            }
        }
    }

    /// Find the shortest path between two vertex ids.
    ///
    /// Re-runs the first-visit level query at depth 1, 2, 3, ... until the
    /// end vertex enters the frontier, then walks the recorded tree back to
    /// the root. Returns `None` once the frontier empties; a vertex has no
    /// zero-length path to itself, so `start == end` is always `None`.
    #[tracing::instrument(skip(self))]
    pub fn shortest_path(&self, start: &I, end: &I) -> Result<Option<Vec<I>>> {
        let start_slot = self.slot_of(start)?;
        let end_slot = self.slot_of(end)?;

        let mut depth = 1;
        loop {
            let (frontier, tree) = self.level_first_visit(start_slot, depth);
            if frontier.contains(&end_slot) {
                let path = tree.path_to(self.vertex_ref(end_slot));
                return Ok(path.map(|p| self.ids_along(&p)));
            }
            if frontier.is_empty() {
                tracing::trace!(depth, "frontier exhausted without reaching end");
                return Ok(None);
            }
            depth += 1;
        }
    }

    /// One-pass level query where each vertex is discovered at most once
    fn level_first_visit(&self, root_slot: usize, depth: usize) -> (Vec<usize>, SpanningTree) {
        let mut tree = SpanningTree::new(self.vertex_ref(root_slot));
        let mut seen = HashSet::from([root_slot]);
        let mut frontier = vec![root_slot];

        for _ in 0..depth {
            let mut next = Vec::new();
            for &slot in &frontier {
                for nb in self.ordered_neighbors(slot, NeighborOrder::Arbitrary) {
                    if seen.insert(nb) {
                        tree.record(self.vertex_ref(nb), self.vertex_ref(slot));
                        next.push(nb);
                    }
                }
            }
            frontier = next;
            if frontier.is_empty() {
                break;
            }
        }
        (frontier, tree)
    }

    /// Level query where a vertex re-enters the frontier once per path
    fn level_all_paths(&self, root_slot: usize, depth: usize) -> Vec<usize> {
        let mut frontier = vec![root_slot];
        for _ in 0..depth {
            let mut next = Vec::new();
            for &slot in &frontier {
                next.extend(self.ordered_neighbors(slot, NeighborOrder::Arbitrary));
            }
            frontier = next;
            if frontier.is_empty() {
                break;
            }
        }
        frontier
    }

    fn to_refs(&self, slots: &[usize]) -> HashSet<VertexRef> {
        slots.iter().map(|&slot| self.vertex_ref(slot)).collect()
    }
}
