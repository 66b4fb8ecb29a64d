use std::ops::Range;

use fxhash::FxHashMap;
use itertools::Itertools;

use super::*;

/// Read-only snapshot of a graph with vertices mapped to dense indices.
///
/// Vertices are sorted ascending and vertex `i` of the sorted order receives
/// the index `i`, so comparing indices is equivalent to comparing labels.
/// Every neighborhood is sorted by target index.
///
/// # Example
/// ```
/// use lgraphs::prelude::*;
///
/// let graph = Graph::<i32>::from_edges([(30, 10), (20, 30)]).unwrap();
/// let indexed = IndexedGraph::new(&graph);
///
/// assert_eq!(indexed.index_of(&20), Some(1));
/// assert_eq!(*indexed.label(2), 30);
/// assert_eq!(indexed.neighbors_of(2), &[(0, 1.0), (1, 1.0)]);
/// ```
#[derive(Debug, Clone)]
pub struct IndexedGraph<'a, V> {
    labels: Vec<&'a V>,
    index: FxHashMap<&'a V, Node>,
    adjacency: Vec<Vec<(Node, Weight)>>,
    weighted: bool,
}

impl<'a, V: Vertex> IndexedGraph<'a, V> {
    /// Creates a snapshot of `graph`
    pub fn new<G>(graph: &'a G) -> Self
    where
        G: AdjacencyList<Vertex = V>,
    {
        let labels = graph.vertices().sorted().collect_vec();
        let index: FxHashMap<&'a V, Node> = labels
            .iter()
            .enumerate()
            .map(|(i, &u)| (u, i as Node))
            .collect();

        let adjacency = labels
            .iter()
            .map(|&u| {
                graph
                    .edges_of(u)
                    .filter_map(|e| index.get(e.target()).map(|&v| (v, e.weight())))
                    .sorted_by_key(|&(v, _)| v)
                    .collect_vec()
            })
            .collect_vec();

        Self {
            labels,
            index,
            adjacency,
            weighted: <G::Edge as HalfEdge>::WEIGHTED,
        }
    }

    /// Returns the number of vertices
    pub fn number_of_vertices(&self) -> NumVertices {
        self.labels.len() as NumVertices
    }

    /// Returns the number of vertices as usize
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns *true* if the snapshot has no vertices
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns *true* if the edges of the underlying graph carry weights
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Returns the range of all indices in label order
    pub fn vertices(&self) -> Range<Node> {
        0..self.number_of_vertices()
    }

    /// Returns the label of index `u`.
    /// ** Panics if `u >= n` **
    pub fn label(&self, u: Node) -> &'a V {
        self.labels[u as usize]
    }

    /// Returns the index of label `u` if it is a vertex of the graph
    pub fn index_of(&self, u: &V) -> Option<Node> {
        self.index.get(u).copied()
    }

    /// Returns the index of label `u` or fails with [`GraphError::UnknownVertex`]
    pub fn require(&self, u: &V) -> Result<Node> {
        self.index_of(u).ok_or_else(|| GraphError::unknown_vertex(u))
    }

    /// Returns the neighbors of `u` with the weights of the connecting edges, sorted by index.
    /// ** Panics if `u >= n` **
    pub fn neighbors_of(&self, u: Node) -> &[(Node, Weight)] {
        &self.adjacency[u as usize]
    }

    /// Returns all half-edges `(u, v, weight)` sorted by `(u, v)`
    pub fn half_edges(&self) -> impl Iterator<Item = (Node, Node, Weight)> + '_ {
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u)
                .iter()
                .map(move |&(v, weight)| (u, v, weight))
        })
    }

    /// Returns every connection once as `(u, v, weight)` with `u <= v`, sorted by `(u, v)`
    pub fn normalized_edges(&self) -> impl Iterator<Item = (Node, Node, Weight)> + '_ {
        self.half_edges().filter(|&(u, v, _)| u <= v)
    }
}
