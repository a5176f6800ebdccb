//! In-memory graph data model
//!
//! Provides the vertex/edge structure the analysis algorithms operate on:
//! - an arena of vertices addressed by slot index, with an id lookup table
//! - weighted adjacency stored as slot indices (no owning cross-references)
//! - `VertexRef` handles tagged with their graph's identity
//!
//! The graph is append-only: vertices and edges can be added, never removed.

pub mod algos;
pub mod types;

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Result, SkeinError};

pub use types::{EdgeRecord, Expansion, LevelSet, NeighborOrder, Parent, RankEntry, SpanningTree};

/// Weight assigned to edges added without an explicit weight
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Identifier requirements for graph vertices.
///
/// A graph holds a single concrete id type; ids are compared, ordered, and
/// hashed by value. Implemented automatically for any qualifying type.
pub trait VertexId: Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display {}

impl<T> VertexId for T where T: Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display {}

/// Source of process-unique graph tags for handle validation
static NEXT_GRAPH_TAG: AtomicU64 = AtomicU64::new(1);

/// A cheap, copyable handle to a vertex owned by a specific graph.
///
/// Handles carry the owning graph's tag; passing a handle to a different
/// graph fails with `SkeinError::ForeignVertex` instead of silently
/// addressing the wrong vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexRef {
    graph: u64,
    slot: usize,
}

/// Arena entry: a vertex id plus its weighted adjacency by slot
#[derive(Debug, Clone)]
struct Vertex<I> {
    id: I,
    neighbors: HashMap<usize, f64>,
}

/// A directed or undirected, weighted or unweighted graph.
///
/// Undirected edges are stored as symmetric adjacency entries on both
/// endpoints with identical weight. An unweighted graph promotes itself to
/// weighted the first time a non-unit weight is inserted; the promotion
/// never reverts.
#[derive(Debug, Clone)]
pub struct Graph<I: VertexId> {
    slots: Vec<Vertex<I>>,
    index: HashMap<I, usize>,
    weighted: bool,
    directed: bool,
    tag: u64,
}

impl<I: VertexId> Graph<I> {
    pub fn new(directed: bool, weighted: bool) -> Self {
        Graph {
            slots: Vec::new(),
            index: HashMap::new(),
            weighted,
            directed,
            tag: NEXT_GRAPH_TAG.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// An empty directed, unweighted graph
    pub fn directed() -> Self {
        Self::new(true, false)
    }

    /// An empty undirected, unweighted graph
    pub fn undirected() -> Self {
        Self::new(false, false)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.slots.len()
    }

    pub fn contains(&self, id: &I) -> bool {
        self.index.contains_key(id)
    }

    /// Register a new vertex under `id` and return its handle.
    pub fn add_vertex(&mut self, id: I) -> Result<VertexRef> {
        if self.index.contains_key(&id) {
            return Err(SkeinError::duplicate_vertex(&id));
        }
        let slot = self.slots.len();
        self.index.insert(id.clone(), slot);
        self.slots.push(Vertex {
            id,
            neighbors: HashMap::new(),
        });
        Ok(self.vertex_ref(slot))
    }

    /// Record an edge with the default weight, creating missing endpoints.
    pub fn add_edge(&mut self, from: I, to: I) -> Result<()> {
        self.add_weighted_edge(from, to, DEFAULT_WEIGHT)
    }

    /// Record a weighted edge from `from` to `to`, creating missing endpoints.
    ///
    /// Undirected graphs also record the symmetric adjacency. Re-adding an
    /// existing directed adjacency fails with `DuplicateEdge`, even with a
    /// different weight; a failed call changes nothing. A non-unit weight on
    /// an unweighted graph promotes the whole graph to weighted.
    pub fn add_weighted_edge(&mut self, from: I, to: I, weight: f64) -> Result<()> {
        // The duplicate check runs before any mutation; an edge between
        // endpoints that do not both exist yet cannot be a duplicate.
        if let (Some(&from_slot), Some(&to_slot)) = (self.index.get(&from), self.index.get(&to)) {
            if self.slots[from_slot].neighbors.contains_key(&to_slot) {
                return Err(SkeinError::duplicate_edge(&from, &to));
            }
        }

        if weight != DEFAULT_WEIGHT && !self.weighted {
            tracing::debug!(weight, "promoting unweighted graph to weighted");
            self.weighted = true;
        }

        let from_slot = self.intern(from);
        let to_slot = self.intern(to);
        self.slots[from_slot].neighbors.insert(to_slot, weight);
        // A self-loop in an undirected graph is a single adjacency entry.
        if !self.directed && from_slot != to_slot {
            self.slots[to_slot].neighbors.insert(from_slot, weight);
        }
        Ok(())
    }

    /// Look up the handle for `id`.
    pub fn vertex(&self, id: &I) -> Result<VertexRef> {
        Ok(self.vertex_ref(self.slot_of(id)?))
    }

    /// The id behind a handle
    pub fn id_of(&self, vertex: VertexRef) -> Result<&I> {
        let slot = self.resolve(vertex)?;
        Ok(&self.slots[slot].id)
    }

    /// Handles of the vertices directly reachable from `vertex`
    pub fn neighbors(&self, vertex: VertexRef) -> Result<Vec<VertexRef>> {
        let slot = self.resolve(vertex)?;
        Ok(self.slots[slot]
            .neighbors
            .keys()
            .map(|&nb| self.vertex_ref(nb))
            .collect())
    }

    /// Number of adjacency entries on `vertex`
    pub fn degree(&self, vertex: VertexRef) -> Result<usize> {
        let slot = self.resolve(vertex)?;
        Ok(self.slots[slot].neighbors.len())
    }

    /// Weight of the directed adjacency from `from` to `to`, if present
    pub fn edge_weight(&self, from: VertexRef, to: VertexRef) -> Result<Option<f64>> {
        let from_slot = self.resolve(from)?;
        let to_slot = self.resolve(to)?;
        Ok(self.slots[from_slot].neighbors.get(&to_slot).copied())
    }

    /// Handles of every vertex in the graph
    pub fn vertices(&self) -> impl Iterator<Item = VertexRef> + '_ {
        (0..self.slots.len()).map(|slot| self.vertex_ref(slot))
    }

    /// Ids of every vertex in the graph
    pub fn ids(&self) -> impl Iterator<Item = &I> {
        self.slots.iter().map(|vertex| &vertex.id)
    }

    /// Enumerate the graph's edges, sorted by endpoint ids.
    ///
    /// Directed graphs yield every adjacency entry; undirected graphs yield
    /// each symmetric pair once.
    pub fn edges(&self) -> Vec<EdgeRecord<I>> {
        let mut records = Vec::new();
        for (slot, vertex) in self.slots.iter().enumerate() {
            for (&to_slot, &weight) in &vertex.neighbors {
                if !self.directed && to_slot < slot {
                    continue;
                }
                records.push(EdgeRecord {
                    from: vertex.id.clone(),
                    to: self.slots[to_slot].id.clone(),
                    weight,
                });
            }
        }
        records.sort_by(|a, b| a.from.cmp(&b.from).then_with(|| a.to.cmp(&b.to)));
        records
    }

    /// Slot for `id`, or `VertexNotFound`
    fn slot_of(&self, id: &I) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| SkeinError::vertex_not_found(id))
    }

    /// Validate a handle against this graph and unwrap its slot
    fn resolve(&self, vertex: VertexRef) -> Result<usize> {
        if vertex.graph != self.tag || vertex.slot >= self.slots.len() {
            return Err(SkeinError::ForeignVertex);
        }
        Ok(vertex.slot)
    }

    fn vertex_ref(&self, slot: usize) -> VertexRef {
        VertexRef {
            graph: self.tag,
            slot,
        }
    }

    fn id_at(&self, slot: usize) -> &I {
        &self.slots[slot].id
    }

    /// Whether the directed adjacency from `from` to `to` exists
    fn adjacent_slots(&self, from: usize, to: usize) -> bool {
        self.slots[from].neighbors.contains_key(&to)
    }

    /// Every directed adjacency entry as a (from, to) slot pair
    fn slot_adjacency(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .flat_map(|(slot, vertex)| vertex.neighbors.keys().map(move |&nb| (slot, nb)))
    }

    /// Slot's neighbors, sorted by id when the order is `Ascending`
    fn ordered_neighbors(&self, slot: usize, order: NeighborOrder) -> Vec<usize> {
        let mut neighbors: Vec<usize> = self.slots[slot].neighbors.keys().copied().collect();
        if order == NeighborOrder::Ascending {
            neighbors.sort_by(|a, b| self.slots[*a].id.cmp(&self.slots[*b].id));
        }
        neighbors
    }

    /// Map a slot path to owned ids
    fn ids_along(&self, path: &[VertexRef]) -> Vec<I> {
        path.iter().map(|v| self.id_at(v.slot).clone()).collect()
    }

    /// Slot for `id`, registering a fresh vertex when absent
    fn intern(&mut self, id: I) -> usize {
        match self.index.get(&id) {
            Some(&slot) => slot,
            None => {
                let slot = self.slots.len();
                self.index.insert(id.clone(), slot);
                self.slots.push(Vertex {
                    id,
                    neighbors: HashMap::new(),
                });
                slot
            }
        }
    }
}
