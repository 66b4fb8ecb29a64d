use std::collections::BTreeSet;

use crate::*;

/// Provides getters pertaining to the vertex-size of a graph
pub trait GraphVertexOrder {
    /// Label type of the vertices
    type Vertex: Vertex;

    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Return the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_vertices() as usize
    }

    /// Returns an iterator over V in arbitrary order.
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex> + '_;

    /// Returns an owned, sorted snapshot of V
    fn all_vertices(&self) -> BTreeSet<Self::Vertex> {
        self.vertices().cloned().collect()
    }

    /// Returns *true* if `u` is a vertex of the graph
    fn contains_vertex(&self, u: &Self::Vertex) -> bool;

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder: GraphVertexOrder {
    /// Returns the number of half-edges of the graph.
    ///
    /// Every undirected connection `{u, v}` with `u != v` counts twice.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns `number_of_edges / number_of_vertices` computed with integer
    /// division, or `0` for an empty graph.
    fn mean_edge(&self) -> f32 {
        match self.number_of_vertices() {
            0 => 0.0,
            n => (self.number_of_edges() / n) as f32,
        }
    }

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphEdgeOrder {
    /// Half-edge type stored by the graph
    type Edge: HalfEdge<Vertex = Self::Vertex>;

    /// Returns an iterator over all half-edges originating at `u` in arbitrary order.
    /// Unknown vertices have no edges.
    fn edges_of(&self, u: &Self::Vertex) -> impl Iterator<Item = &Self::Edge> + '_;

    /// Returns the weight of the half-edge `(u, v)` if present
    fn weight_of(&self, u: &Self::Vertex, v: &Self::Vertex) -> Option<Weight>;

    /// Returns an iterator over the (open) neighborhood of a given vertex
    fn neighbors_of(&self, u: &Self::Vertex) -> impl Iterator<Item = &Self::Vertex> + '_ {
        self.edges_of(u).map(|e| e.target())
    }

    /// Returns the number of half-edges originating at `u`
    fn degree_of(&self, u: &Self::Vertex) -> NumVertices {
        self.edges_of(u).count() as NumVertices
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumVertices {
        self.vertices().map(|u| self.degree_of(u)).max().unwrap_or(0)
    }

    /// Returns an owned, sorted snapshot of the half-edges originating at `u`
    fn ordered_edges_of(&self, u: &Self::Vertex) -> BTreeSet<Self::Edge> {
        self.edges_of(u).cloned().collect()
    }

    /// Returns an owned, sorted snapshot of the neighbors of `u`
    fn adjacent_vertices(&self, u: &Self::Vertex) -> BTreeSet<Self::Vertex> {
        self.neighbors_of(u).cloned().collect()
    }

    /// Returns an iterator over all half-edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = &Self::Edge> + '_ {
        self.vertices()
            .flat_map(|u| self.edges_of(u))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an owned, sorted snapshot of all half-edges (both directions)
    fn all_edges(&self) -> BTreeSet<Self::Edge> {
        self.edges(false).cloned().collect()
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: AdjacencyList {
    /// Returns *true* if a half-edge `(u, v)` of any weight exists in the graph.
    fn has_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool {
        self.weight_of(u, v).is_some()
    }

    /// Returns *true* if exactly this half-edge (including its weight) is stored
    /// under its origin.
    fn contains_edge(&self, edge: &Self::Edge) -> bool {
        self.weight_of(edge.origin(), edge.target())
            .is_some_and(|w| w.to_bits() == edge.weight().to_bits())
    }

    /// Returns *true* if a self-loop (u,u) exists.
    fn has_self_loop(&self, u: &Self::Vertex) -> bool {
        self.has_edge(u, u)
    }
}

impl<G: AdjacencyList> AdjacencyTest for G {}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph
    fn new() -> Self;
}

/// Provides functions to insert vertices and edges
pub trait GraphEdgeEditing: AdjacencyList + GraphNew {
    /// Adds an isolated vertex.
    ///
    /// Fails with [`GraphError::InvalidArgument`] for labels rejected by
    /// [`Vertex::is_valid_vertex`] and with [`GraphError::DuplicateVertex`]
    /// if `u` is already present.
    fn add_vertex(&mut self, u: Self::Vertex) -> Result<()>;

    /// Inserts the half-edge `edge` and its reverse, implicitly adding both
    /// endpoints. Returns the forward half-edge.
    ///
    /// Fails with [`GraphError::DuplicateEdge`] if a half-edge with the same
    /// endpoints exists, regardless of its weight.
    fn insert_edge(&mut self, edge: Self::Edge) -> Result<Self::Edge>;

    /// Adds the edge `{u, v}` with [`DEFAULT_WEIGHT`].
    fn add_edge(&mut self, u: Self::Vertex, v: Self::Vertex) -> Result<Self::Edge> {
        self.insert_edge(<Self::Edge as HalfEdge>::from_parts(u, v, DEFAULT_WEIGHT))
    }

    /// Adds all edges in the collection, stopping at the first rejected edge
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Self::Edge>>) -> Result<()> {
        for edge in edges {
            self.insert_edge(edge.into())?;
        }
        Ok(())
    }
}

/// Provides edge insertion with an explicit weight
pub trait WeightedEdgeEditing: GraphEdgeEditing {
    /// Adds the edge `{u, v}` with weight `weight`.
    fn add_weighted_edge(
        &mut self,
        u: Self::Vertex,
        v: Self::Vertex,
        weight: Weight,
    ) -> Result<Self::Edge> {
        self.insert_edge(<Self::Edge as HalfEdge>::from_parts(u, v, weight))
    }
}

/// A super trait for creating a graph from scratch from a set of edges
pub trait GraphFromScratch: GraphEdgeEditing + Sized {
    /// Create a graph from an iterator over Edges, failing on the first rejected edge
    fn from_edges(edges: impl IntoIterator<Item = impl Into<Self::Edge>>) -> Result<Self> {
        let mut graph = Self::new();
        graph.add_edges(edges)?;
        Ok(graph)
    }
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {}
