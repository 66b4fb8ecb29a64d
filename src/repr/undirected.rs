use std::fmt::Debug;

use fxhash::FxHashMap;
use itertools::Itertools;

use super::*;

/// An undirected graph over labelled vertices.
///
/// Every connection `{u, v}` is stored as the two half-edges `(u, v)` under
/// `u` and `(v, u)` under `v` carrying the same weight. A self-loop `{u, u}`
/// is stored as the single half-edge `(u, u)`. Consequently
/// [`GraphEdgeOrder::number_of_edges`] counts half-edges.
#[derive(Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: FxHashMap<VertexOf<Nbs>, Nbs>,
    num_edges: NumEdges,
}

/// Unweighted graph using hashed neighborhoods
pub type Graph<V> = UndirectedGraph<HashNeighborhood<Edge<V>>>;

/// Weighted graph using hashed neighborhoods
pub type WeightedGraph<V> = UndirectedGraph<HashNeighborhood<WeightedEdge<V>>>;

/// Unweighted graph using array neighborhoods
pub type ArrGraph<V> = UndirectedGraph<ArrNeighborhood<Edge<V>>>;

/// Weighted graph using array neighborhoods
pub type ArrWeightedGraph<V> = UndirectedGraph<ArrNeighborhood<WeightedEdge<V>>>;

impl<Nbs: Neighborhood> UndirectedGraph<Nbs> {
    fn check_vertex(u: &VertexOf<Nbs>) -> Result<()> {
        if u.is_valid_vertex() {
            Ok(())
        } else {
            Err(GraphError::InvalidArgument(u.to_string()))
        }
    }

    fn neighborhood_mut(&mut self, u: &VertexOf<Nbs>) -> &mut Nbs {
        self.nbs.entry(u.clone()).or_insert_with(Nbs::new)
    }
}

impl<Nbs: Neighborhood> Default for UndirectedGraph<Nbs> {
    fn default() -> Self {
        Self {
            nbs: FxHashMap::default(),
            num_edges: 0,
        }
    }
}

impl<Nbs: Neighborhood> GraphVertexOrder for UndirectedGraph<Nbs> {
    type Vertex = VertexOf<Nbs>;

    fn number_of_vertices(&self) -> NumVertices {
        self.nbs.len() as NumVertices
    }

    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex> + '_ {
        self.nbs.keys()
    }

    fn contains_vertex(&self, u: &Self::Vertex) -> bool {
        self.nbs.contains_key(u)
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    type Edge = Nbs::Edge;

    fn edges_of(&self, u: &Self::Vertex) -> impl Iterator<Item = &Self::Edge> + '_ {
        self.nbs.get(u).into_iter().flat_map(|nbs| nbs.edges())
    }

    fn weight_of(&self, u: &Self::Vertex, v: &Self::Vertex) -> Option<Weight> {
        self.nbs.get(u)?.edge_to(v).map(|e| e.weight())
    }

    fn degree_of(&self, u: &Self::Vertex) -> NumVertices {
        self.nbs.get(u).map_or(0, |nbs| nbs.num_of_neighbors())
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new() -> Self {
        Self::default()
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn add_vertex(&mut self, u: Self::Vertex) -> Result<()> {
        Self::check_vertex(&u)?;
        if self.nbs.contains_key(&u) {
            return Err(GraphError::DuplicateVertex(u.to_string()));
        }
        self.nbs.insert(u, Nbs::new());
        Ok(())
    }

    fn insert_edge(&mut self, edge: Self::Edge) -> Result<Self::Edge> {
        Self::check_vertex(edge.origin())?;
        Self::check_vertex(edge.target())?;
        if self.has_edge(edge.origin(), edge.target()) {
            return Err(GraphError::DuplicateEdge(edge.to_string()));
        }

        if edge.is_loop() {
            self.neighborhood_mut(edge.origin()).add_edge(edge.clone());
            self.num_edges += 1;
        } else {
            let reverse = edge.reverse();
            self.neighborhood_mut(edge.origin()).add_edge(edge.clone());
            self.neighborhood_mut(reverse.origin()).add_edge(reverse);
            self.num_edges += 2;
        }
        Ok(edge)
    }
}

impl<V: Vertex, Nbs: Neighborhood<Edge = WeightedEdge<V>>> WeightedEdgeEditing
    for UndirectedGraph<Nbs>
{
}

impl<N1, N2> PartialEq<UndirectedGraph<N2>> for UndirectedGraph<N1>
where
    N1: Neighborhood,
    N2: Neighborhood<Edge = N1::Edge>,
{
    fn eq(&self, other: &UndirectedGraph<N2>) -> bool {
        self.number_of_vertices() == other.number_of_vertices()
            && self.num_edges == other.num_edges
            && self.nbs.iter().all(|(u, nbs)| {
                other.nbs.get(u).is_some_and(|other_nbs| {
                    nbs.num_of_neighbors() == other_nbs.num_of_neighbors()
                        && nbs
                            .edges()
                            .all(|e| other_nbs.edge_to(e.target()) == Some(e))
                })
            })
    }
}

impl<Nbs: Neighborhood> Eq for UndirectedGraph<Nbs> {}

impl<Nbs: Neighborhood> Debug for UndirectedGraph<Nbs> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.vertices()
                    .sorted()
                    .map(|u| (u, self.ordered_edges_of(u))),
            )
            .finish()
    }
}
