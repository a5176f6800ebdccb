//! Depth-first spanning trees and arbitrary-path reconstruction

use crate::error::Result;
use crate::graph::types::{NeighborOrder, SpanningTree};
use crate::graph::{Graph, VertexId, VertexRef};

impl<I: VertexId> Graph<I> {
    /// Build a depth-first spanning tree of the component reachable from `root`.
    ///
    /// Neighbors are visited in ascending id order under
    /// `NeighborOrder::Ascending`, otherwise in whatever order the adjacency
    /// map yields. A vertex that already holds a parent in the tree is
    /// skipped, so every discovered vertex records its first discoverer.
    /// Each call starts from a fresh tree.
    #[tracing::instrument(skip(self))]
    pub fn dfs(&self, root: VertexRef, order: NeighborOrder) -> Result<SpanningTree> {
        let root_slot = self.resolve(root)?;
        let mut tree = SpanningTree::new(self.vertex_ref(root_slot));
        self.dfs_visit(root_slot, order, &mut tree);
        Ok(tree)
    }

    fn dfs_visit(&self, slot: usize, order: NeighborOrder, tree: &mut SpanningTree) {
        for nb in self.ordered_neighbors(slot, order) {
            let nb_ref = self.vertex_ref(nb);
            if tree.parent(nb_ref).is_none() {
                tree.record(nb_ref, self.vertex_ref(slot));
                self.dfs_visit(nb, order, tree);
            }
        }
    }

    /// Find any path between two vertex ids.
    ///
    /// Builds a depth-first spanning tree from `start` with ascending
    /// neighbor order and walks its parent records back from `end`. Returns
    /// `None` when `end` lies outside the tree.
    #[tracing::instrument(skip(self))]
    pub fn find_path(&self, start: &I, end: &I) -> Result<Option<Vec<I>>> {
        let start_slot = self.slot_of(start)?;
        let end_slot = self.slot_of(end)?;

        let tree = self.dfs(self.vertex_ref(start_slot), NeighborOrder::Ascending)?;
        let path = tree.path_to(self.vertex_ref(end_slot));
        Ok(path.map(|p| self.ids_along(&p)))
    }
}
