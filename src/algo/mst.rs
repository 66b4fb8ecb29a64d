/*!
Minimum spanning forests via Kruskal's algorithm.

Every connection is considered once in its normalized orientation
`(u, v)` with `u <= v`. Candidates are sorted by weight and ties are broken
by `(u, v)` in label order; self-loops are always rejected by the union-find.
For unweighted graphs all weights are equal, so the order is purely
lexicographic.
*/

use itertools::Itertools;

use super::*;

/// Runs Kruskal's algorithm on `graph` and returns the accepted edges
/// `(u, v, weight)` with `u <= v` in acceptance order.
pub fn kruskal<V: Vertex>(graph: &IndexedGraph<'_, V>) -> Vec<(Node, Node, Weight)> {
    let candidates = graph
        .normalized_edges()
        .sorted_by(|a, b| a.2.total_cmp(&b.2).then(a.0.cmp(&b.0)).then(a.1.cmp(&b.1)));

    let mut uf = UnionFind::new(graph.number_of_vertices());
    let mut forest = Vec::with_capacity(graph.len().saturating_sub(1));
    for (u, v, weight) in candidates {
        if uf.union(u, v) {
            forest.push((u, v, weight));
            if uf.num_components() == 1 {
                break;
            }
        }
    }

    forest
}

/// Minimum spanning tree queries as methods on graphs.
pub trait MinimumSpanningTree: AdjacencyList + Sized {
    /// Returns the edges of a minimum spanning forest in acceptance order.
    ///
    /// For a connected graph with `n` vertices these are exactly `n - 1` edges.
    fn mst_edges(&self) -> Vec<Self::Edge> {
        let graph = IndexedGraph::new(self);
        kruskal(&graph)
            .into_iter()
            .map(|(u, v, weight)| {
                <Self::Edge as HalfEdge>::from_parts(
                    graph.label(u).clone(),
                    graph.label(v).clone(),
                    weight,
                )
            })
            .collect()
    }

    /// Returns the total weight of a minimum spanning forest
    fn mst_weight(&self) -> Weight {
        kruskal(&IndexedGraph::new(self))
            .into_iter()
            .map(|(_, _, weight)| weight)
            .sum()
    }

    /// Renders one line per edge of [`MinimumSpanningTree::mst_edges`] with the
    /// default [`RenderOptions`]
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = WeightedGraph::<u32>::from_edges([(1, 2, 4.0), (2, 3, 1.5), (1, 3, 2.0)]).unwrap();
    /// assert_eq!(g.mst(), "[2, 3] : 1.5\n[1, 3] : 2\n");
    /// ```
    fn mst(&self) -> String {
        self.mst_with(&RenderOptions::default())
    }

    /// Renders one line `"[u, v]"` (or `"[u, v] : weight"` for weighted graphs)
    /// per edge of [`MinimumSpanningTree::mst_edges`]
    fn mst_with(&self, options: &RenderOptions) -> String {
        self.mst_edges()
            .into_iter()
            .map(|e| {
                if <Self::Edge as HalfEdge>::WEIGHTED {
                    format!(
                        "[{}, {}] : {}{}",
                        e.origin(),
                        e.target(),
                        options.weight_format.format(e.weight()),
                        options.line_terminator
                    )
                } else {
                    format!("[{}, {}]{}", e.origin(), e.target(), options.line_terminator)
                }
            })
            .collect()
    }
}

impl<G: AdjacencyList> MinimumSpanningTree for G {}
