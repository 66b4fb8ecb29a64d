use super::*;

/// Connectivity queries on undirected graphs.
pub trait Connectivity: AdjacencyList + Sized {
    /// Returns *true* if every vertex can be reached from every other vertex.
    /// The empty graph is connected.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = Graph::<u32>::from_edges([(0, 1), (1, 2)]).unwrap();
    /// assert!(g.is_connected());
    ///
    /// g.add_vertex(3).unwrap();
    /// assert!(!g.is_connected());
    /// ```
    fn is_connected(&self) -> bool {
        let graph = IndexedGraph::new(self);
        graph.is_empty() || Dfs::new(&graph, 0).count() == graph.len()
    }

    /// Returns the connected components, each sorted ascending, ordered by their
    /// smallest vertex.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = Graph::<u32>::from_edges([(4, 1), (2, 3)]).unwrap();
    /// g.add_vertex(0).unwrap();
    ///
    /// assert_eq!(g.connected_components(), vec![vec![0], vec![1, 4], vec![2, 3]]);
    /// ```
    fn connected_components(&self) -> Vec<Vec<Self::Vertex>> {
        let graph = IndexedGraph::new(self);
        joined_components(&graph)
            .components()
            .into_iter()
            .map(|comp| comp.into_iter().map(|u| graph.label(u).clone()).collect())
            .collect()
    }

    /// Returns the number of connected components
    fn number_of_components(&self) -> NumVertices {
        joined_components(&IndexedGraph::new(self)).num_components()
    }
}

impl<G: AdjacencyList> Connectivity for G {}

fn joined_components<V: Vertex>(graph: &IndexedGraph<'_, V>) -> UnionFind {
    let mut uf = UnionFind::new(graph.number_of_vertices());
    for (u, v, _) in graph.normalized_edges() {
        uf.union(u, v);
    }
    uf
}
