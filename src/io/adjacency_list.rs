//! # Adjacency List
//!
//! One line `"<vertex> - <neighbors>"` per vertex in ascending order. Neighbors are
//! sorted and separated by single spaces; weighted graphs render every neighbor as
//! `"<target>(<weight>)"`. Vertices without neighbors still produce the line `"<vertex> - "`.

use std::fmt::Write;

use itertools::Itertools;

use super::*;

/// Renders `graph` as adjacency list
pub fn render<V: Vertex>(graph: &IndexedGraph<'_, V>, options: &RenderOptions) -> String {
    let mut out = String::new();

    for u in graph.vertices() {
        let neighbors = graph
            .neighbors_of(u)
            .iter()
            .map(|&(v, weight)| {
                if graph.is_weighted() {
                    format!("{}({})", graph.label(v), options.weight_format.format(weight))
                } else {
                    graph.label(v).to_string()
                }
            })
            .join(" ");
        let _ = write!(out, "{} - {neighbors}{}", graph.label(u), options.line_terminator);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    fn list_of<G: AdjacencyList>(graph: &G) -> String {
        render(&IndexedGraph::new(graph), &RenderOptions::default())
    }

    #[test]
    fn unweighted() {
        let list = list_of(&integer_graph());
        assert_eq!(list, "1 - 2 5\n2 - 1 5\n3 - 5\n4 - 5\n5 - 1 2 3 4\n");
        assert!(list.lines().any(|line| line == "5 - 1 2 3 4"));
    }

    #[test]
    fn weighted() {
        assert_eq!(
            list_of(&weighted_graph()),
            "1 - 2(0.1) 5(1)\n\
             2 - 1(0.1) 5(0.2)\n\
             3 - 4(-9.5) 5(5)\n\
             4 - 3(-9.5) 5(2.3)\n\
             5 - 1(1) 2(0.2) 3(5) 4(2.3)\n"
        );

        let options = RenderOptions::default().weight_format(WeightFormat::Fixed(2));
        let graph = WeightedGraph::<i32>::from_edges([(2, 1, 1.5)]).unwrap();
        assert_eq!(
            render(&IndexedGraph::new(&graph), &options),
            "1 - 2(1.50)\n2 - 1(1.50)\n"
        );
    }

    #[test]
    fn isolated_and_empty() {
        assert_eq!(list_of(&disconnected_graph()), "1 - \n2 - 3\n3 - 2\n");
        assert_eq!(list_of(&isolated_graph(2)), "1 - \n2 - \n");
        assert_eq!(list_of(&Graph::<i32>::new()), "");
    }
}
