/*!
# Graph Representations

Graphs map every vertex label to its [`Neighborhood`], the half-edges
originating at that vertex. Two neighborhood backends exist:

- [`HashNeighborhood`] keys half-edges by target in a `FxHashMap` and is the default
  behind [`Graph`] and [`WeightedGraph`],
- [`ArrNeighborhood`] keeps half-edges in a `Vec` and is used by [`ArrGraph`] and
  [`ArrWeightedGraph`].

Algorithms operate on an [`IndexedGraph`] snapshot which maps the sorted labels
to dense indices.
*/

use crate::{ops::*, *};

mod indexed;
mod neighborhood;
mod undirected;

pub mod digest;

pub use indexed::*;
pub use neighborhood::*;
pub use undirected::*;

crate::testing::test_graph_ops!(
    test_graph,
    Graph<u32>,
    (GraphNew, AdjacencyList, GraphEdgeEditing, GraphDigest)
);

crate::testing::test_graph_ops!(
    test_weighted_graph,
    WeightedGraph<u32>,
    (GraphNew, AdjacencyList, GraphEdgeEditing, GraphDigest)
);

crate::testing::test_graph_ops!(
    test_arr_graph,
    ArrGraph<u32>,
    (GraphNew, AdjacencyList, GraphEdgeEditing, GraphDigest)
);

crate::testing::test_graph_ops!(
    test_arr_weighted_graph,
    ArrWeightedGraph<u32>,
    (GraphNew, AdjacencyList, GraphEdgeEditing, GraphDigest)
);
