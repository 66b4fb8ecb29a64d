/*!
Single-pair shortest paths.

Weighted graphs are first checked for negative cycles with a Bellman-Ford
pass over all half-edges. As every undirected edge is stored in both
directions, a single edge of negative weight already forms a negative
cycle. Afterwards Dijkstra's algorithm runs from the source and stops as
soon as the target is settled. Unweighted graphs skip the check and use
unit weights.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use itertools::Itertools;

use super::*;

/// Tentative distance with a total order
#[derive(Debug, Copy, Clone, PartialEq)]
struct Distance(Weight);

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Returns *true* if relaxing all half-edges `n` times still improves some distance.
///
/// All distances start at `0`, which is equivalent to a virtual source connected
/// to every vertex. Hence cycles in every component are found.
pub fn has_negative_cycle<V: Vertex>(graph: &IndexedGraph<'_, V>) -> bool {
    let mut dist = vec![0.0 as Weight; graph.len()];

    let relax_all = |dist: &mut [Weight]| {
        let mut improved = false;
        for (u, v, weight) in graph.half_edges() {
            let candidate = dist[u as usize] + weight;
            if candidate < dist[v as usize] {
                dist[v as usize] = candidate;
                improved = true;
            }
        }
        improved
    };

    for _ in 1..graph.len() {
        if !relax_all(&mut dist) {
            return false;
        }
    }

    relax_all(&mut dist)
}

/// Dijkstra search from `source` that settles vertices until `target` is popped.
///
/// Returns the predecessor of every vertex reached so far together with its distance.
/// Weights must be non-negative.
pub fn dijkstra<V: Vertex>(
    graph: &IndexedGraph<'_, V>,
    source: Node,
    target: Node,
) -> (Vec<Option<Node>>, Vec<Weight>) {
    let n = graph.len();
    let mut dist = vec![Weight::INFINITY; n];
    let mut pred = vec![None; n];
    let mut settled = vec![false; n];

    let mut heap = BinaryHeap::new();
    dist[source as usize] = 0.0;
    heap.push(Reverse((Distance(0.0), source)));

    while let Some(Reverse((Distance(d), u))) = heap.pop() {
        if settled[u as usize] {
            continue;
        }
        settled[u as usize] = true;
        if u == target {
            break;
        }

        for &(v, weight) in graph.neighbors_of(u) {
            let candidate = d + weight;
            if candidate < dist[v as usize] {
                dist[v as usize] = candidate;
                pred[v as usize] = Some(u);
                heap.push(Reverse((Distance(candidate), v)));
            }
        }
    }

    (pred, dist)
}

/// Walks the predecessors back from `target` and returns the path from `source`
/// if the walk ends there.
fn reconstruct_path(pred: &[Option<Node>], source: Node, target: Node) -> Option<Vec<Node>> {
    let mut path = vec![target];
    let mut u = target;
    while let Some(p) = pred[u as usize] {
        path.push(p);
        u = p;
    }

    (u == source).then(|| {
        path.reverse();
        path
    })
}

/// Shortest path queries as methods on graphs.
pub trait ShortestPath: AdjacencyList + Sized {
    /// Returns *true* if the graph is weighted and contains a cycle of negative weight
    fn has_negative_cycle(&self) -> bool {
        let graph = IndexedGraph::new(self);
        graph.is_weighted() && has_negative_cycle(&graph)
    }

    /// Returns the vertices of a shortest path from `from` to `to`, both inclusive.
    ///
    /// Fails with
    /// - [`GraphError::UnknownVertex`] if either endpoint is not in the graph,
    /// - [`GraphError::NegativeCycle`] if the graph is weighted and contains a negative cycle,
    /// - [`GraphError::NoPath`] if `to` cannot be reached from `from`.
    fn shortest_path_vertices(
        &self,
        from: &Self::Vertex,
        to: &Self::Vertex,
    ) -> Result<Vec<Self::Vertex>> {
        let graph = IndexedGraph::new(self);
        let source = graph.require(from)?;
        let target = graph.require(to)?;

        if source == target {
            return Ok(vec![from.clone()]);
        }

        if graph.is_weighted() && has_negative_cycle(&graph) {
            return Err(GraphError::NegativeCycle);
        }

        let (pred, _) = dijkstra(&graph, source, target);
        let path = reconstruct_path(&pred, source, target)
            .ok_or_else(|| GraphError::no_path(from, to))?;

        Ok(path.into_iter().map(|u| graph.label(u).clone()).collect())
    }

    /// Returns the total weight of a shortest path from `from` to `to`.
    /// Fails for the same reasons as [`ShortestPath::shortest_path_vertices`].
    fn shortest_distance(&self, from: &Self::Vertex, to: &Self::Vertex) -> Result<Weight> {
        let graph = IndexedGraph::new(self);
        let source = graph.require(from)?;
        let target = graph.require(to)?;

        if source == target {
            return Ok(0.0);
        }

        if graph.is_weighted() && has_negative_cycle(&graph) {
            return Err(GraphError::NegativeCycle);
        }

        let (_, dist) = dijkstra(&graph, source, target);
        let d = dist[target as usize];
        if d.is_finite() {
            Ok(d)
        } else {
            Err(GraphError::no_path(from, to))
        }
    }

    /// Returns the vertices of a shortest path separated by single spaces
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::<u32>::from_edges([(1, 2), (2, 5), (5, 3), (4, 5), (1, 5)]).unwrap();
    /// assert_eq!(g.shortest_path(&1, &3).unwrap(), "1 5 3");
    /// assert_eq!(g.shortest_path(&4, &4).unwrap(), "4");
    /// ```
    fn shortest_path(&self, from: &Self::Vertex, to: &Self::Vertex) -> Result<String> {
        Ok(self.shortest_path_vertices(from, to)?.iter().join(" "))
    }
}

impl<G: AdjacencyList> ShortestPath for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn unweighted_paths() {
        let graph = integer_graph();
        assert_eq!(graph.shortest_path(&1, &3).unwrap(), "1 5 3");
        assert_eq!(graph.shortest_path(&1, &4).unwrap(), "1 5 4");
        assert_eq!(graph.shortest_path(&3, &2).unwrap(), "3 5 2");
        assert_eq!(graph.shortest_path(&5, &2).unwrap(), "5 2");
        assert_eq!(graph.shortest_distance(&3, &2).unwrap(), 2.0);

        let graph = string_graph();
        assert_eq!(graph.shortest_path(&"A", &"C").unwrap(), "A E C");
    }

    #[test]
    fn identity() {
        for graph in [integer_graph(), dense_graph(), disconnected_graph()] {
            for u in graph.all_vertices() {
                assert_eq!(graph.shortest_path(&u, &u).unwrap(), u.to_string());
                assert_eq!(graph.shortest_distance(&u, &u).unwrap(), 0.0);
            }
        }
        assert_eq!(weighted_graph().shortest_path(&4, &4).unwrap(), "4");
    }

    #[test]
    fn weighted_paths() {
        let graph = positive_weighted_graph();
        assert!(!graph.has_negative_cycle());
        assert_eq!(graph.shortest_path(&1, &3).unwrap(), "1 2 5 3");
        assert_eq!(graph.shortest_path(&1, &4).unwrap(), "1 2 5 4");
        assert_eq!(graph.shortest_path(&3, &2).unwrap(), "3 5 2");
        assert_eq!(graph.shortest_path(&5, &2).unwrap(), "5 2");
        assert!((graph.shortest_distance(&1, &4).unwrap() - 2.6).abs() < 1e-5);
    }

    #[test]
    fn negative_cycle() {
        let graph = weighted_graph();
        assert!(graph.has_negative_cycle());
        assert_eq!(graph.shortest_path(&1, &3), Err(GraphError::NegativeCycle));
        assert_eq!(
            graph.shortest_path(&1, &3).unwrap_err().to_string(),
            "The shortest path cannot be found in a graph with negative circle."
        );

        let mut graph = WeightedGraph::new();
        graph.add_weighted_edge(1, 2, 1.0).unwrap();
        graph.add_weighted_edge(5, 6, -0.5).unwrap();
        assert_eq!(graph.shortest_path(&1, &2), Err(GraphError::NegativeCycle));
    }

    #[test]
    fn unweighted_graphs_never_have_negative_cycles() {
        assert!(!integer_graph().has_negative_cycle());
        assert!(!Graph::<u8>::new().has_negative_cycle());
    }

    #[test]
    fn no_path() {
        let graph = disconnected_graph();
        assert_eq!(graph.shortest_path(&2, &3).unwrap(), "2 3");

        let err = graph.shortest_path(&1, &2).unwrap_err();
        assert_eq!(err, GraphError::no_path(&1, &2));
        assert_eq!(err.to_string(), "There isn't a path between 1 and 2");
        assert_eq!(graph.shortest_distance(&3, &1), Err(GraphError::no_path(&3, &1)));
    }

    #[test]
    fn unknown_vertices() {
        let graph = integer_graph();
        assert_eq!(
            graph.shortest_path(&9, &1),
            Err(GraphError::UnknownVertex("9".into()))
        );
        assert_eq!(
            graph.shortest_path(&1, &9),
            Err(GraphError::UnknownVertex("9".into()))
        );
    }
}
