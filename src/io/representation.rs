use std::str::FromStr;

use tracing::debug;

use super::*;

/// The textual layouts a graph can be rendered in
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RepresentationType {
    /// Header row of sorted labels followed by one row of weights per vertex
    AdjacencyMatrix,
    /// One line `"<vertex> - <neighbors>"` per vertex
    AdjacencyList,
}

impl FromStr for RepresentationType {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "matrix" | "adjacency_matrix" => Ok(RepresentationType::AdjacencyMatrix),
            "list" | "adjacency_list" => Ok(RepresentationType::AdjacencyList),
            _ => Err(GraphError::UnsupportedRepresentation(s.to_string())),
        }
    }
}

/// Settings shared by all text renderers of this crate.
///
/// ```
/// use lgraphs::io::{RenderOptions, WeightFormat};
///
/// let options = RenderOptions::default()
///     .line_terminator("\r\n")
///     .weight_format(WeightFormat::Fixed(2));
///
/// assert_eq!(options.line_terminator, "\r\n");
/// assert_eq!(options.weight_format.format(0.5), "0.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Appended to every rendered line
    pub line_terminator: String,
    /// Formatting rule for weights
    pub weight_format: WeightFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_terminator: "\n".to_string(),
            weight_format: WeightFormat::Compact,
        }
    }
}

impl RenderOptions {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the line terminator
    pub fn line_terminator<S: Into<String>>(mut self, terminator: S) -> Self {
        self.line_terminator = terminator.into();
        self
    }

    /// Updates the weight format
    pub fn weight_format(mut self, format: WeightFormat) -> Self {
        self.weight_format = format;
        self
    }
}

/// Renders graphs as adjacency matrix or adjacency list.
///
/// Vertices appear in ascending label order in both layouts, so rendering an
/// unmodified graph twice yields identical strings.
pub trait GraphRepresentation: AdjacencyList + Sized {
    /// Renders the graph with the default [`RenderOptions`]
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, io::*};
    ///
    /// let g = Graph::<u32>::from_edges([(1, 2), (2, 3)]).unwrap();
    /// assert_eq!(
    ///     g.graph_representation(RepresentationType::AdjacencyList),
    ///     "1 - 2\n2 - 1 3\n3 - 2\n"
    /// );
    /// assert_eq!(
    ///     g.graph_representation(RepresentationType::AdjacencyMatrix),
    ///     "  1 2 3\n1 0 1 0\n2 1 0 1\n3 0 1 0\n"
    /// );
    /// ```
    fn graph_representation(&self, kind: RepresentationType) -> String {
        self.graph_representation_with(kind, &RenderOptions::default())
    }

    /// Renders the graph in the given layout
    fn graph_representation_with(&self, kind: RepresentationType, options: &RenderOptions) -> String {
        debug!(
            ?kind,
            vertices = self.number_of_vertices(),
            edges = self.number_of_edges(),
            "Rendering graph"
        );

        let graph = IndexedGraph::new(self);
        match kind {
            RepresentationType::AdjacencyMatrix => matrix::render(&graph, options),
            RepresentationType::AdjacencyList => adjacency_list::render(&graph, options),
        }
    }
}

impl<G: AdjacencyList> GraphRepresentation for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn parse_representation_type() {
        for s in ["matrix", "adjacency_matrix", "MATRIX", "Adjacency_Matrix"] {
            assert_eq!(
                s.parse::<RepresentationType>(),
                Ok(RepresentationType::AdjacencyMatrix)
            );
        }
        for s in ["list", "adjacency_list", "List"] {
            assert_eq!(
                s.parse::<RepresentationType>(),
                Ok(RepresentationType::AdjacencyList)
            );
        }

        let err = "incidence".parse::<RepresentationType>().unwrap_err();
        assert_eq!(err, GraphError::UnsupportedRepresentation("incidence".into()));
        assert_eq!(err.to_string(), "Unsupported representation type: incidence");
    }

    #[test]
    fn rendering_is_deterministic() {
        let graph = dense_graph();
        for kind in [
            RepresentationType::AdjacencyMatrix,
            RepresentationType::AdjacencyList,
        ] {
            assert_eq!(graph.graph_representation(kind), graph.graph_representation(kind));
        }

        let mut other = Graph::new();
        for (u, v) in [(5, 6), (4, 5), (3, 6), (3, 4), (2, 5), (2, 6), (2, 3), (1, 5), (1, 4), (1, 2)] {
            other.add_edge(u, v).unwrap();
        }
        assert_eq!(
            graph.graph_representation(RepresentationType::AdjacencyList),
            other.graph_representation(RepresentationType::AdjacencyList)
        );
    }

    #[test]
    fn line_terminator() {
        let options = RenderOptions::new().line_terminator("\r\n");
        assert_eq!(
            string_graph().graph_representation_with(RepresentationType::AdjacencyList, &options),
            "A - B E\r\nB - A E\r\nC - E\r\nD - E\r\nE - A B C D\r\n"
        );
    }
}
