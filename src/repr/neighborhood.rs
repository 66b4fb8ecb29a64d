use fxhash::FxHashMap;

use super::*;

/// Label type of the edges stored in a neighborhood
pub type VertexOf<N> = <<N as Neighborhood>::Edge as HalfEdge>::Vertex;

/// Trait for methods on the Neighborhood of a specified vertex.
///
/// A neighborhood stores the half-edges originating at one vertex, keyed by
/// their target. There is at most one half-edge per target.
pub trait Neighborhood: Clone {
    /// Half-edge type stored in the neighborhood
    type Edge: HalfEdge;

    /// Creates an empty neighborhood
    fn new() -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumVertices;

    /// Returns an iterator over all half-edges in the Neighborhood in arbitrary order
    fn edges(&self) -> impl Iterator<Item = &Self::Edge> + '_;

    /// Returns the half-edge pointing to `v` if present
    fn edge_to(&self, v: &VertexOf<Self>) -> Option<&Self::Edge>;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: &VertexOf<Self>) -> bool {
        self.edge_to(v).is_some()
    }

    /// Tries to add a half-edge to the Neighborhood.
    /// Returns *true* if a half-edge to the same target was in the Neighborhood before,
    /// in which case the Neighborhood is left unchanged.
    fn try_add_edge(&mut self, edge: Self::Edge) -> bool {
        if self.has_neighbor(edge.target()) {
            true
        } else {
            self.add_edge(edge);
            false
        }
    }

    /// Adds a half-edge to the Neighborhood without checking if its target exists beforehand.
    /// For some implementations, this might lead to Multi-Edges
    fn add_edge(&mut self, edge: Self::Edge);
}

/// Neighborhood-Impl. using a `FxHashMap` keyed by target
#[derive(Clone)]
pub struct HashNeighborhood<E: HalfEdge>(pub FxHashMap<E::Vertex, E>);

impl<E: HalfEdge> Neighborhood for HashNeighborhood<E> {
    type Edge = E;

    fn new() -> Self {
        Self(FxHashMap::default())
    }

    fn num_of_neighbors(&self) -> NumVertices {
        self.0.len() as NumVertices
    }

    fn edges(&self) -> impl Iterator<Item = &E> + '_ {
        self.0.values()
    }

    fn edge_to(&self, v: &E::Vertex) -> Option<&E> {
        self.0.get(v)
    }

    fn add_edge(&mut self, edge: E) {
        self.0.insert(edge.target().clone(), edge);
    }
}

/// Basic Neighborhood-Impl. using `Vec<E>` with linear lookups.
/// Prefer this if the graph is known to be sparse.
#[derive(Clone)]
pub struct ArrNeighborhood<E: HalfEdge>(pub Vec<E>);

impl<E: HalfEdge> Neighborhood for ArrNeighborhood<E> {
    type Edge = E;

    fn new() -> Self {
        Self(Vec::new())
    }

    fn num_of_neighbors(&self) -> NumVertices {
        self.0.len() as NumVertices
    }

    fn edges(&self) -> impl Iterator<Item = &E> + '_ {
        self.0.iter()
    }

    fn edge_to(&self, v: &E::Vertex) -> Option<&E> {
        self.0.iter().find(|e| e.target() == v)
    }

    fn add_edge(&mut self, edge: E) {
        self.0.push(edge);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighborhood_ops<N: Neighborhood<Edge = WeightedEdge<u32>>>() {
        let mut nbs = N::new();
        assert_eq!(nbs.num_of_neighbors(), 0);

        assert!(!nbs.try_add_edge(WeightedEdge(1, 2, 0.5)));
        assert!(!nbs.try_add_edge(WeightedEdge(1, 3, 1.5)));
        assert!(nbs.try_add_edge(WeightedEdge(1, 2, 7.0)));

        assert_eq!(nbs.num_of_neighbors(), 2);
        assert!(nbs.has_neighbor(&3));
        assert!(!nbs.has_neighbor(&1));
        assert_eq!(nbs.edge_to(&2), Some(&WeightedEdge(1, 2, 0.5)));

        let mut edges: Vec<_> = nbs.edges().cloned().collect();
        edges.sort();
        assert_eq!(edges, vec![WeightedEdge(1, 2, 0.5), WeightedEdge(1, 3, 1.5)]);
    }

    #[test]
    fn hash_neighborhood() {
        neighborhood_ops::<HashNeighborhood<WeightedEdge<u32>>>();
    }

    #[test]
    fn arr_neighborhood() {
        neighborhood_ops::<ArrNeighborhood<WeightedEdge<u32>>>();
    }
}
