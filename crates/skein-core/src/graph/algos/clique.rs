//! Greedy maximal-clique extraction

use std::collections::HashSet;

use rand::Rng;

use crate::error::{Result, SkeinError};
use crate::graph::types::NeighborOrder;
use crate::graph::{Graph, VertexId, VertexRef};

impl<I: VertexId> Graph<I> {
    /// Greedily grow a maximal clique around `seed`.
    ///
    /// Rejects directed graphs. When `seed` is `None`, a vertex is chosen
    /// uniformly at random. Candidates are the seed's neighbors, visited in
    /// the given order; a candidate joins only when adjacent to every current
    /// member. The outcome depends on visit order: the clique is maximal,
    /// not maximum.
    #[tracing::instrument(skip(self))]
    pub fn maximal_clique(
        &self,
        seed: Option<VertexRef>,
        order: NeighborOrder,
    ) -> Result<HashSet<VertexRef>> {
        if self.is_directed() {
            return Err(SkeinError::directed_unsupported("maximal clique"));
        }

        let seed_slot = match seed {
            Some(vertex) => self.resolve(vertex)?,
            None => {
                if self.vertex_count() == 0 {
                    return Err(SkeinError::empty_graph("pick a clique seed"));
                }
                rand::rng().random_range(0..self.vertex_count())
            }
        };

        let mut clique = HashSet::from([seed_slot]);
        for candidate in self.ordered_neighbors(seed_slot, order) {
            let joins = clique
                .iter()
                .all(|&member| self.adjacent_slots(member, candidate));
            if joins {
                clique.insert(candidate);
            }
        }

        tracing::debug!(size = clique.len(), "maximal clique grown");
        Ok(clique
            .into_iter()
            .map(|slot| self.vertex_ref(slot))
            .collect())
    }
}
