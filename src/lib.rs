/*!
`lgraphs` is a graph data structure & algorithms library for **l**abelled, undirected graphs
that are either unweighted or carry an `f32` weight on every edge.

# Representation

**Vertices** are arbitrary labels implementing [`Vertex`]: all primitive integers, `char`, `bool`,
`String` and `&str`. Labels are ordered, and every query and algorithm reports vertices in
ascending label order, so results never depend on insertion order.

**Edges** are stored as *half-edges*. Adding the undirected edge `{u, v}` stores the half-edge
`(u, v)` under `u` and `(v, u)` under `v`, both with the same weight. Consequently
[`number_of_edges`](ops::GraphEdgeOrder::number_of_edges) counts half-edges, i.e. twice the number
of undirected connections. A self-loop `{u, u}` is a single half-edge.

- [`Edge<V>`](Edge) is the half-edge of an unweighted graph and always has weight `1`,
- [`WeightedEdge<V>`](WeightedEdge) carries an explicit weight.

See the [`repr`] module for the graph types [`Graph`](repr::Graph),
[`WeightedGraph`](repr::WeightedGraph) and their `Vec`-backed variants.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, edges, errors, basic graph operations and all graph representations,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS (`graph.bfs(&root)`),
  connectivity, shortest paths and minimum spanning trees,
- [`io`] includes the adjacency matrix/list renderers and a reader/writer for edge-list files,
- [`library`] includes the validating [`GraphLibrary`](library::GraphLibrary) facade.

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use lgraphs::{prelude::*, algo::*, io::*};

let g = Graph::<u32>::from_edges([(1, 2), (2, 5), (5, 3), (4, 5), (1, 5)]).unwrap();

assert_eq!(g.number_of_vertices(), 5);
assert_eq!(g.number_of_edges(), 10);
assert_eq!(g.mean_edge(), 2.0);
assert_eq!(g.shortest_path(&1, &3).unwrap(), "1 5 3");
assert!(g.graph_representation(RepresentationType::AdjacencyList).contains("5 - 1 2 3 4\n"));
assert!(g.bfs(&1).unwrap().contains("2 - 1 1\n"));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod library;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod vertex;

pub use edge::*;
pub use error::*;
pub use vertex::*;

/// `lgraphs::prelude` includes definitions for vertices, edges and errors, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, ops::*, repr::*, vertex::*};
}
