/*!
# Graph Library

[`GraphLibrary`] is a thin facade over the graph types and algorithms of this crate.
Every operation that references a vertex or an edge first checks its presence and fails
with a descriptive [`LibraryError`] before delegating to the graph. Errors raised by the
graph itself are passed through unchanged as [`LibraryError::Graph`].

```
use lgraphs::{library::*, prelude::*};

let library = GraphLibrary::new();
let mut graph = Graph::<u32>::new();

library.add_edge(&mut graph, 1, 2).unwrap();
library.add_edge(&mut graph, 2, 3).unwrap();

assert_eq!(library.edge_number(&graph), 4);
assert_eq!(library.shortest_path(&graph, &1, &3).unwrap(), "1 2 3");
assert_eq!(
    library.bfs(&graph, &7).unwrap_err().to_string(),
    "The graph doesn't contain the specified vertex."
);
```
*/

use std::{collections::BTreeSet, path::Path};

use tracing::debug;

use crate::{
    algo::*,
    io::{EdgeListReader, GraphReader, GraphRepresentation, RenderOptions, RepresentationType},
    prelude::*,
};

/// Errors raised by [`GraphLibrary`]
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// A referenced vertex is not part of the graph
    #[error("The graph doesn't contain the specified vertex.")]
    VertexNotFound,

    /// The vertex to add is already part of the graph
    #[error("The graph already contains the specified vertex")]
    VertexExists,

    /// The edge to add is already part of the graph
    #[error("The graph already contains the specified edge")]
    EdgeExists,

    /// Error raised by the graph itself
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Error while reading a graph
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type of [`GraphLibrary`]
pub type LibraryResult<T> = std::result::Result<T, LibraryError>;

/// Validating facade over graphs; renderers use the configured [`RenderOptions`]
#[derive(Debug, Clone, Default)]
pub struct GraphLibrary {
    options: RenderOptions,
}

impl GraphLibrary {
    /// Creates a library with the default [`RenderOptions`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a library rendering with the given options
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Returns the render options
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn require_vertex<G: AdjacencyList>(graph: &G, u: &G::Vertex) -> LibraryResult<()> {
        if graph.contains_vertex(u) {
            Ok(())
        } else {
            Err(LibraryError::VertexNotFound)
        }
    }

    /// Reads an unweighted graph from an edge-list file
    pub fn read_graph<P: AsRef<Path>>(&self, path: P) -> LibraryResult<Graph<i32>> {
        debug!(path = %path.as_ref().display(), "Reading graph");
        Ok(EdgeListReader::new().unweighted().try_read_graph_file(path)?)
    }

    /// Reads a weighted graph from an edge-list file with lines `u v weight`
    pub fn read_weighted_graph<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> LibraryResult<WeightedGraph<i32>> {
        debug!(path = %path.as_ref().display(), "Reading weighted graph");
        Ok(EdgeListReader::new().weighted().try_read_graph_file(path)?)
    }

    /// Adds the vertex `u`; fails if it is already present
    pub fn add_vertex<G: GraphEdgeEditing>(&self, graph: &mut G, u: G::Vertex) -> LibraryResult<()> {
        if graph.contains_vertex(&u) {
            return Err(LibraryError::VertexExists);
        }
        Ok(graph.add_vertex(u)?)
    }

    /// Adds the edge `{u, v}` with the default weight; fails if it is already present
    pub fn add_edge<G: GraphEdgeEditing>(
        &self,
        graph: &mut G,
        u: G::Vertex,
        v: G::Vertex,
    ) -> LibraryResult<G::Edge> {
        if graph.has_edge(&u, &v) {
            return Err(LibraryError::EdgeExists);
        }
        Ok(graph.add_edge(u, v)?)
    }

    /// Adds the edge `{u, v}` with the given weight; fails if it is already present
    pub fn add_weighted_edge<G: WeightedEdgeEditing>(
        &self,
        graph: &mut G,
        u: G::Vertex,
        v: G::Vertex,
        weight: Weight,
    ) -> LibraryResult<G::Edge> {
        if graph.has_edge(&u, &v) {
            return Err(LibraryError::EdgeExists);
        }
        Ok(graph.add_weighted_edge(u, v, weight)?)
    }

    /// Returns a sorted snapshot of all vertices
    pub fn all_vertices<G: AdjacencyList>(&self, graph: &G) -> BTreeSet<G::Vertex> {
        graph.all_vertices()
    }

    /// Returns a sorted snapshot of all half-edges
    pub fn all_edges<G: AdjacencyList>(&self, graph: &G) -> BTreeSet<G::Edge> {
        graph.all_edges()
    }

    /// Returns the half-edges starting at `u`
    pub fn edges_of_vertex<G: AdjacencyList>(
        &self,
        graph: &G,
        u: &G::Vertex,
    ) -> LibraryResult<BTreeSet<G::Edge>> {
        Self::require_vertex(graph, u)?;
        Ok(graph.ordered_edges_of(u))
    }

    /// Returns the neighbors of `u`
    pub fn adjacent_vertices<G: AdjacencyList>(
        &self,
        graph: &G,
        u: &G::Vertex,
    ) -> LibraryResult<BTreeSet<G::Vertex>> {
        Self::require_vertex(graph, u)?;
        Ok(graph.adjacent_vertices(u))
    }

    /// Returns *true* if `u` is part of the graph
    pub fn contains_vertex<G: AdjacencyList>(&self, graph: &G, u: &G::Vertex) -> bool {
        graph.contains_vertex(u)
    }

    /// Returns *true* if the half-edge `edge` (including its weight) is part of the graph
    pub fn contains_edge<G: AdjacencyList>(&self, graph: &G, edge: &G::Edge) -> bool {
        graph.contains_edge(edge)
    }

    /// Returns the number of vertices
    pub fn vertex_number<G: AdjacencyList>(&self, graph: &G) -> NumVertices {
        graph.number_of_vertices()
    }

    /// Returns the number of half-edges
    pub fn edge_number<G: AdjacencyList>(&self, graph: &G) -> NumEdges {
        graph.number_of_edges()
    }

    /// Returns the number of half-edges per vertex, truncated to an integer
    pub fn mean_edge<G: AdjacencyList>(&self, graph: &G) -> f32 {
        graph.mean_edge()
    }

    /// Renders the graph; `kind` is parsed as [`RepresentationType`]
    pub fn graph_representation<G: AdjacencyList>(
        &self,
        graph: &G,
        kind: &str,
    ) -> LibraryResult<String> {
        let kind: RepresentationType = kind.parse()?;
        Ok(graph.graph_representation_with(kind, &self.options))
    }

    /// Returns the BFS report of `root`
    pub fn bfs<G: AdjacencyList>(&self, graph: &G, root: &G::Vertex) -> LibraryResult<String> {
        Self::require_vertex(graph, root)?;
        debug!(%root, "Running BFS");
        Ok(graph.bfs_with(root, &self.options)?)
    }

    /// Returns the DFS report of `root`
    pub fn dfs<G: AdjacencyList>(&self, graph: &G, root: &G::Vertex) -> LibraryResult<String> {
        Self::require_vertex(graph, root)?;
        debug!(%root, "Running DFS");
        Ok(graph.dfs_with(root, &self.options)?)
    }

    /// Returns *true* if the graph is connected
    pub fn connected<G: AdjacencyList>(&self, graph: &G) -> bool {
        graph.is_connected()
    }

    /// Returns a shortest path from `from` to `to` as space separated vertices
    pub fn shortest_path<G: AdjacencyList>(
        &self,
        graph: &G,
        from: &G::Vertex,
        to: &G::Vertex,
    ) -> LibraryResult<String> {
        Self::require_vertex(graph, from)?;
        Self::require_vertex(graph, to)?;
        debug!(%from, %to, "Computing shortest path");
        Ok(graph.shortest_path(from, to)?)
    }

    /// Returns the edges of a minimum spanning tree, one per line
    pub fn mst<G: AdjacencyList>(&self, graph: &G) -> String {
        debug!(vertices = graph.number_of_vertices(), "Computing MST");
        graph.mst_with(&self.options)
    }
}
