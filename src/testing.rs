/// Every graph representation should behave identically on the basic graph operations.
///
/// Vertices of the generated graphs are `u32` labels, weights are multiples of `0.5`
/// so that every comparison stays exact.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ty, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use std::collections::{BTreeMap, BTreeSet};

            use crate::{ops::*, repr::*, testing::test_graph_ops, *};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            type TestEdge = <$graph as AdjacencyList>::Edge;

            /// Creates a list of `m` random edges (possibly with repetitions) for vertices `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: u32, m: u32) -> Vec<TestEdge> {
                (0..m).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let w = rng.random_range(-8i32..8) as Weight / 2.0;
                    TestEdge::from_parts(u, v, w)
                }).collect_vec()
            }

            /// Returns the unordered endpoint pair of an edge
            fn pair_of(e: &TestEdge) -> (u32, u32) {
                let e = e.normalized();
                (*e.origin(), *e.target())
            }

            /// Keeps the first edge per unordered pair and returns the reference adjacency
            fn reference_adjacency(edges: &[TestEdge]) -> BTreeMap<u32, BTreeMap<u32, Weight>> {
                let mut adj: BTreeMap<u32, BTreeMap<u32, Weight>> = BTreeMap::new();
                for e in edges {
                    let (u, v) = (*e.origin(), *e.target());
                    if adj.get(&u).is_some_and(|nbs| nbs.contains_key(&v)) {
                        continue;
                    }
                    adj.entry(u).or_default().insert(v, e.weight());
                    adj.entry(v).or_default().insert(u, e.weight());
                }
                adj
            }

            $(
                test_graph_ops!(@case $graph, $trait);
            )*
        }
    };
    (@case $graph:ty, GraphNew) => {
        #[test]
        fn graph_new() {
            let graph = <$graph>::new();

            assert!(graph.is_empty());
            assert!(graph.is_singleton());
            assert_eq!(graph.number_of_vertices(), 0);
            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.mean_edge(), 0.0);
            assert!(graph.all_vertices().is_empty());
            assert!(graph.all_edges().is_empty());
        }
    };
    (@case $graph:ty, AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10u32, 20, 50] {
                for m in [n, n * 2, n * 5] {
                    for _ in 0..10 {
                        let mut edges = random_edges(rng, n, m);
                        edges.sort_by_key(pair_of);
                        edges.dedup_by_key(|e| pair_of(e));
                        let adj = reference_adjacency(&edges);

                        let graph = <$graph>::from_edges(edges.clone()).unwrap();

                        assert_eq!(graph.number_of_vertices() as usize, adj.len());
                        assert_eq!(
                            graph.number_of_edges() as usize,
                            adj.values().map(|nbs| nbs.len()).sum::<usize>()
                        );
                        assert_eq!(graph.all_vertices(), adj.keys().copied().collect::<BTreeSet<_>>());

                        for (u, nbs) in &adj {
                            assert_eq!(graph.degree_of(u) as usize, nbs.len());
                            assert_eq!(
                                graph.adjacent_vertices(u),
                                nbs.keys().copied().collect::<BTreeSet<_>>()
                            );
                            for (v, w) in nbs {
                                assert_eq!(graph.weight_of(u, v), Some(*w));
                                assert!(graph.contains_edge(&TestEdge::from_parts(*u, *v, *w)));
                            }
                        }

                        let normalized = graph.edges(true).cloned().sorted().collect_vec();
                        assert!(normalized.iter().all(|e| e.is_normalized()));
                        assert_eq!(
                            normalized.len(),
                            adj.iter().map(|(u, nbs)| nbs.range(u..).count()).sum::<usize>()
                        );
                        assert!(graph.all_edges().iter().all(|e| graph.contains_edge(&e.reverse())));
                    }
                }
            }
        }
    };
    (@case $graph:ty, GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in [10u32, 20, 50] {
                for m in [n, n * 2, n * 5] {
                    let mut graph = <$graph>::new();
                    let mut pairs = BTreeSet::new();

                    for e in random_edges(rng, n, m) {
                        let pair = pair_of(&e);
                        let before = graph.number_of_edges();
                        let result = graph.insert_edge(e.clone());

                        if pairs.insert(pair) {
                            assert_eq!(result, Ok(e.clone()));
                            let added = if e.is_loop() { 1 } else { 2 };
                            assert_eq!(graph.number_of_edges(), before + added);
                        } else {
                            assert_eq!(result, Err(GraphError::DuplicateEdge(e.to_string())));
                            assert_eq!(graph.number_of_edges(), before);
                        }
                        assert!(graph.contains_vertex(e.origin()));
                        assert!(graph.contains_vertex(e.target()));
                    }

                    for u in 0..n {
                        let present = graph.contains_vertex(&u);
                        let result = graph.add_vertex(u);
                        assert_eq!(result.is_err(), present);
                        assert!(graph.contains_vertex(&u));
                    }
                    assert_eq!(graph.number_of_vertices(), n);
                }
            }
        }
    };
    (@case $graph:ty, GraphDigest) => {
        #[test]
        fn test_graph_digest() {
            use crate::repr::digest::GraphDigest;

            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [10u32, 20, 50] {
                let mut edges = random_edges(rng, n, n * 3);
                edges.sort_by_key(pair_of);
                edges.dedup_by_key(|e| pair_of(e));

                let graph = <$graph>::from_edges(edges.clone()).unwrap();
                let shuffled = <$graph>::from_edges(edges.iter().rev().map(|e| e.reverse())).unwrap();

                assert!(graph == shuffled);
                assert_eq!(graph.digest_sha256(), shuffled.digest_sha256());

                let mut grown = graph.clone();
                grown.add_vertex(n).unwrap();
                assert_ne!(graph.digest_sha256(), grown.digest_sha256());
            }
        }
    };
}

pub(crate) use test_graph_ops;

#[cfg(test)]
pub(crate) use fixtures::*;

/// Graphs shared by the unit tests of several modules
#[cfg(test)]
mod fixtures {
    use crate::{ops::*, repr::*};

    /// Vertices `1..=5` with edges `{1,2}, {2,5}, {5,3}, {4,5}, {1,5}`
    pub(crate) fn integer_graph() -> Graph<i32> {
        Graph::from_edges([(1, 2), (2, 5), (5, 3), (4, 5), (1, 5)]).unwrap()
    }

    /// [`integer_graph`] with the labels `A..=E`
    pub(crate) fn string_graph() -> Graph<&'static str> {
        Graph::from_edges([("A", "B"), ("B", "E"), ("E", "C"), ("D", "E"), ("A", "E")]).unwrap()
    }

    /// Six vertices where every vertex has degree three or four
    pub(crate) fn dense_graph() -> Graph<i32> {
        Graph::from_edges([
            (1, 2),
            (1, 4),
            (1, 5),
            (2, 3),
            (2, 6),
            (2, 5),
            (3, 4),
            (3, 6),
            (4, 5),
            (5, 6),
        ])
        .unwrap()
    }

    /// [`integer_graph`] with weights and the extra edge `{3,4}` of weight `-9.5`
    pub(crate) fn weighted_graph() -> WeightedGraph<i32> {
        WeightedGraph::from_edges([
            (1, 2, 0.1),
            (2, 5, 0.2),
            (5, 3, 5.0),
            (3, 4, -9.5),
            (4, 5, 2.3),
            (1, 5, 1.0),
        ])
        .unwrap()
    }

    /// [`weighted_graph`] without the negative edge
    pub(crate) fn positive_weighted_graph() -> WeightedGraph<i32> {
        WeightedGraph::from_edges([
            (1, 2, 0.1),
            (2, 5, 0.2),
            (5, 3, 5.0),
            (4, 5, 2.3),
            (1, 5, 1.0),
        ])
        .unwrap()
    }

    /// Isolated vertex `1` and the edge `{2,3}`
    pub(crate) fn disconnected_graph() -> Graph<i32> {
        let mut graph = Graph::new();
        graph.add_vertex(1).unwrap();
        graph.add_edge(2, 3).unwrap();
        graph
    }

    /// `n` isolated vertices `1..=n`
    pub(crate) fn isolated_graph(n: i32) -> Graph<i32> {
        let mut graph = Graph::new();
        for u in 1..=n {
            graph.add_vertex(u).unwrap();
        }
        graph
    }
}
