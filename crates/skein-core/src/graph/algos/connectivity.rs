//! Connectivity and Eulerian-circuit tests

use std::collections::VecDeque;

use crate::error::{Result, SkeinError};
use crate::graph::{Graph, VertexId};

impl<I: VertexId> Graph<I> {
    /// Test whether every vertex is reachable from every other vertex when
    /// edge direction is ignored.
    ///
    /// For directed graphs this is weak connectivity. An empty graph is not
    /// connected; a single vertex is; two or more vertices without edges are
    /// not.
    #[tracing::instrument(skip(self))]
    pub fn is_connected(&self) -> bool {
        if self.vertex_count() == 0 {
            return false;
        }
        if self.vertex_count() == 1 {
            return true;
        }

        let undirected = self.undirected_view();
        if undirected.iter().all(|adjacent| adjacent.is_empty()) {
            return false;
        }

        let mut seen = vec![false; self.vertex_count()];
        let mut queue = VecDeque::from([0]);
        seen[0] = true;
        let mut reached = 1;
        while let Some(slot) = queue.pop_front() {
            for &nb in &undirected[slot] {
                if !seen[nb] {
                    seen[nb] = true;
                    reached += 1;
                    queue.push_back(nb);
                }
            }
        }

        tracing::trace!(reached, total = self.vertex_count(), "connectivity sweep");
        reached == self.vertex_count()
    }

    /// Test whether the undirected graph admits an Eulerian circuit.
    ///
    /// Rejects directed graphs. With `require_connected`, the graph must be
    /// connected; in every case each vertex must have even degree.
    #[tracing::instrument(skip(self))]
    pub fn is_eulerian(&self, require_connected: bool) -> Result<bool> {
        if self.is_directed() {
            return Err(SkeinError::directed_unsupported("eulerian test"));
        }
        if require_connected && !self.is_connected() {
            return Ok(false);
        }
        let all_even = self
            .vertices()
            .filter_map(|v| self.degree(v).ok())
            .all(|degree| degree % 2 == 0);
        Ok(all_even)
    }

    /// Adjacency with edge direction erased
    fn undirected_view(&self) -> Vec<Vec<usize>> {
        let mut view = vec![Vec::new(); self.vertex_count()];
        for (slot, record) in self.slot_adjacency() {
            view[slot].push(record);
            view[record].push(slot);
        }
        view
    }
}
