/*!
Breadth-first and depth-first traversals.

This module provides:
- Traversal iterators ([`Bfs`], [`Dfs`]) over an [`IndexedGraph`] that yield
  every reachable vertex exactly once together with its depth and predecessor.
- [`TraversalTree`], the collected result of a traversal keyed by label.
- A high-level [`Traversal`] trait that exposes both traversals and their
  textual reports directly as methods on graph data structures.

Neighbors are always expanded in ascending label order, so all results are
deterministic.
*/

use std::{
    collections::{BTreeMap, VecDeque},
    fmt::Display,
};

use super::*;

/// A vertex reached by a traversal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Visit {
    /// Index of the visited vertex
    pub node: Node,
    /// Number of tree edges between the root and `node`
    pub depth: NumVertices,
    /// Vertex from which `node` was discovered; `None` for the root
    pub predecessor: Option<Node>,
}

impl Visit {
    fn root(node: Node) -> Self {
        Self {
            node,
            depth: 0,
            predecessor: None,
        }
    }

    fn child(&self, node: Node) -> Self {
        Self {
            node,
            depth: self.depth + 1,
            predecessor: Some(self.node),
        }
    }
}

/// Breadth-first search iterator.
///
/// Vertices are marked as visited when they enter the queue, so the
/// predecessor of a vertex is the first vertex that discovered it.
pub struct Bfs<'g, 'a, V> {
    graph: &'g IndexedGraph<'a, V>,
    visited: Vec<bool>,
    queue: VecDeque<Visit>,
}

impl<'g, 'a, V: Vertex> Bfs<'g, 'a, V> {
    /// Starts a search at `root`.
    /// ** Panics if `root >= n` **
    pub fn new(graph: &'g IndexedGraph<'a, V>, root: Node) -> Self {
        let mut visited = vec![false; graph.len()];
        visited[root as usize] = true;
        Self {
            graph,
            visited,
            queue: VecDeque::from([Visit::root(root)]),
        }
    }
}

impl<V: Vertex> Iterator for Bfs<'_, '_, V> {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        let visit = self.queue.pop_front()?;
        for &(v, _) in self.graph.neighbors_of(visit.node) {
            if !self.visited[v as usize] {
                self.visited[v as usize] = true;
                self.queue.push_back(visit.child(v));
            }
        }
        Some(visit)
    }
}

/// Depth-first search iterator yielding vertices in preorder.
///
/// Uses an explicit stack of `(visit, next neighbor position)` pairs and
/// therefore visits vertices in the same order as the recursive formulation
/// without being limited by the call stack.
pub struct Dfs<'g, 'a, V> {
    graph: &'g IndexedGraph<'a, V>,
    visited: Vec<bool>,
    stack: Vec<(Visit, usize)>,
    root: Option<Visit>,
}

impl<'g, 'a, V: Vertex> Dfs<'g, 'a, V> {
    /// Starts a search at `root`.
    /// ** Panics if `root >= n` **
    pub fn new(graph: &'g IndexedGraph<'a, V>, root: Node) -> Self {
        let mut visited = vec![false; graph.len()];
        visited[root as usize] = true;
        let root = Visit::root(root);
        Self {
            graph,
            visited,
            stack: vec![(root, 0)],
            root: Some(root),
        }
    }
}

impl<V: Vertex> Iterator for Dfs<'_, '_, V> {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        if let Some(root) = self.root.take() {
            return Some(root);
        }

        loop {
            let (parent, cursor) = self.stack.last_mut()?;
            let parent = *parent;

            let Some(&(v, _)) = self.graph.neighbors_of(parent.node).get(*cursor) else {
                self.stack.pop();
                continue;
            };
            *cursor += 1;

            if !self.visited[v as usize] {
                self.visited[v as usize] = true;
                let visit = parent.child(v);
                self.stack.push((visit, 0));
                return Some(visit);
            }
        }
    }
}

/// Depth and predecessor of a vertex in a [`TraversalTree`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry<V> {
    pub depth: NumVertices,
    pub predecessor: Option<V>,
}

/// Result of a traversal: every reached vertex with its depth and predecessor,
/// sorted by vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalTree<V> {
    entries: BTreeMap<V, TreeEntry<V>>,
}

impl<V: Vertex> TraversalTree<V> {
    /// Collects the visits of a traversal over `graph`
    pub fn from_visits<I>(graph: &IndexedGraph<'_, V>, visits: I) -> Self
    where
        I: IntoIterator<Item = Visit>,
    {
        let entries = visits
            .into_iter()
            .map(|visit| {
                (
                    graph.label(visit.node).clone(),
                    TreeEntry {
                        depth: visit.depth,
                        predecessor: visit.predecessor.map(|p| graph.label(p).clone()),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Returns the number of reached vertices
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns *true* if no vertex was reached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry of `u` if it was reached
    pub fn get(&self, u: &V) -> Option<&TreeEntry<V>> {
        self.entries.get(u)
    }

    /// Returns the entries sorted by vertex
    pub fn iter(&self) -> impl Iterator<Item = (&V, &TreeEntry<V>)> + '_ {
        self.entries.iter()
    }

    /// Renders one line `"<vertex> - <depth> <predecessor>"` per reached vertex,
    /// with `-` standing in for the missing predecessor of the root.
    pub fn render(&self, options: &RenderOptions) -> String {
        self.entries
            .iter()
            .map(|(u, entry)| match &entry.predecessor {
                Some(p) => format!("{u} - {} {p}{}", entry.depth, options.line_terminator),
                None => format!("{u} - {} -{}", entry.depth, options.line_terminator),
            })
            .collect()
    }
}

impl<V: Vertex> Display for TraversalTree<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}

/// Traversal algorithms as methods on graphs.
pub trait Traversal: AdjacencyList + Sized {
    /// Runs a breadth-first search from `root`.
    ///
    /// Fails with [`GraphError::UnknownVertex`] if `root` is not in the graph.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::<u32>::from_edges([(1, 2), (2, 3)]).unwrap();
    /// let tree = g.bfs_tree(&1).unwrap();
    ///
    /// assert_eq!(tree.get(&3).unwrap().depth, 2);
    /// assert_eq!(tree.get(&3).unwrap().predecessor, Some(2));
    /// ```
    fn bfs_tree(&self, root: &Self::Vertex) -> Result<TraversalTree<Self::Vertex>> {
        let graph = IndexedGraph::new(self);
        let root = graph.require(root)?;
        Ok(TraversalTree::from_visits(&graph, Bfs::new(&graph, root)))
    }

    /// Runs a depth-first search from `root`, visiting children in ascending order.
    ///
    /// Fails with [`GraphError::UnknownVertex`] if `root` is not in the graph.
    fn dfs_tree(&self, root: &Self::Vertex) -> Result<TraversalTree<Self::Vertex>> {
        let graph = IndexedGraph::new(self);
        let root = graph.require(root)?;
        Ok(TraversalTree::from_visits(&graph, Dfs::new(&graph, root)))
    }

    /// Returns the BFS report of `root` with the default [`RenderOptions`]
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::<u32>::from_edges([(1, 2), (2, 3)]).unwrap();
    /// assert_eq!(g.bfs(&2).unwrap(), "1 - 1 2\n2 - 0 -\n3 - 1 2\n");
    /// ```
    fn bfs(&self, root: &Self::Vertex) -> Result<String> {
        self.bfs_with(root, &RenderOptions::default())
    }

    /// Returns the BFS report of `root`
    fn bfs_with(&self, root: &Self::Vertex, options: &RenderOptions) -> Result<String> {
        Ok(self.bfs_tree(root)?.render(options))
    }

    /// Returns the DFS report of `root` with the default [`RenderOptions`]
    fn dfs(&self, root: &Self::Vertex) -> Result<String> {
        self.dfs_with(root, &RenderOptions::default())
    }

    /// Returns the DFS report of `root`
    fn dfs_with(&self, root: &Self::Vertex, options: &RenderOptions) -> Result<String> {
        Ok(self.dfs_tree(root)?.render(options))
    }
}

impl<G: AdjacencyList> Traversal for G {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::testing::*;

    #[test]
    fn bfs_reports() {
        let graph = integer_graph();
        assert_eq!(
            graph.bfs(&1).unwrap(),
            "1 - 0 -\n2 - 1 1\n3 - 2 5\n4 - 2 5\n5 - 1 1\n"
        );
        assert_eq!(
            graph.bfs(&2).unwrap(),
            "1 - 1 2\n2 - 0 -\n3 - 2 5\n4 - 2 5\n5 - 1 2\n"
        );
        assert_eq!(
            graph.bfs(&5).unwrap(),
            "1 - 1 5\n2 - 1 5\n3 - 1 5\n4 - 1 5\n5 - 0 -\n"
        );
    }

    #[test]
    fn dfs_reports() {
        let graph = integer_graph();
        assert_eq!(
            graph.dfs(&1).unwrap(),
            "1 - 0 -\n2 - 1 1\n3 - 3 5\n4 - 3 5\n5 - 2 2\n"
        );
        assert_eq!(
            graph.dfs(&2).unwrap(),
            "1 - 1 2\n2 - 0 -\n3 - 3 5\n4 - 3 5\n5 - 2 1\n"
        );
        assert_eq!(
            graph.dfs(&5).unwrap(),
            "1 - 1 5\n2 - 2 1\n3 - 1 5\n4 - 1 5\n5 - 0 -\n"
        );
    }

    #[test]
    fn string_labels() {
        let graph = string_graph();
        assert_eq!(
            graph.bfs(&"A").unwrap(),
            "A - 0 -\nB - 1 A\nC - 2 E\nD - 2 E\nE - 1 A\n"
        );
        assert_eq!(
            graph.dfs(&"A").unwrap(),
            "A - 0 -\nB - 1 A\nC - 3 E\nD - 3 E\nE - 2 B\n"
        );
    }

    #[test]
    fn unreached_vertices_are_omitted() {
        let graph = disconnected_graph();
        assert_eq!(graph.bfs(&2).unwrap(), "2 - 0 -\n3 - 1 2\n");
        assert_eq!(graph.dfs(&1).unwrap(), "1 - 0 -\n");
    }

    #[test]
    fn unknown_root() {
        let graph = integer_graph();
        assert_eq!(graph.bfs(&6), Err(GraphError::UnknownVertex("6".into())));
        assert_eq!(graph.dfs(&0), Err(GraphError::UnknownVertex("0".into())));
    }

    #[test]
    fn custom_line_terminator() {
        let graph = disconnected_graph();
        let options = RenderOptions::default().line_terminator("\r\n");
        assert_eq!(graph.bfs_with(&3, &options).unwrap(), "2 - 1 3\r\n3 - 0 -\r\n");
    }

    #[test]
    fn deep_paths_do_not_recurse() {
        let n = 100_000u32;
        let graph = Graph::<u32>::from_edges((1..n).map(|u| (u - 1, u))).unwrap();
        let tree = graph.dfs_tree(&0).unwrap();
        assert_eq!(tree.len(), n as usize);
        assert_eq!(tree.get(&(n - 1)).unwrap().depth, n - 1);
    }

    #[test]
    fn orders() {
        let graph = dense_graph();
        let indexed = IndexedGraph::new(&graph);

        let bfs = Bfs::new(&indexed, 0).map(|v| *indexed.label(v.node)).collect_vec();
        assert_eq!(bfs, vec![1, 2, 4, 5, 3, 6]);

        let dfs = Dfs::new(&indexed, 0).map(|v| *indexed.label(v.node)).collect_vec();
        assert_eq!(dfs, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let graph = dense_graph();
        assert_eq!(graph.bfs(&3), graph.bfs(&3));
        assert_eq!(graph.dfs_tree(&3), graph.dfs_tree(&3));
    }
}
