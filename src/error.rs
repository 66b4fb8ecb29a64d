//! Error types of the graph core.
//!
//! Every failing operation returns one of these kinds. Vertices and edges are
//! carried as their rendered labels so that the error type stays independent
//! of the vertex type of the graph.

/// Graph core error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Vertex label that may not be stored in a graph.
    #[error("Invalid vertex label: {0:?}")]
    InvalidArgument(String),

    /// The vertex was added before.
    #[error("The graph already contains the vertex {0}")]
    DuplicateVertex(String),

    /// A half-edge with the same endpoints was added before.
    #[error("The graph already contains the edge {0}")]
    DuplicateEdge(String),

    /// The vertex is not part of the graph.
    #[error("The graph doesn't contain the vertex {0}")]
    UnknownVertex(String),

    /// The target cannot be reached from the source.
    #[error("There isn't a path between {from} and {to}")]
    NoPath { from: String, to: String },

    /// Shortest paths are undefined.
    #[error("The shortest path cannot be found in a graph with negative circle.")]
    NegativeCycle,

    /// Unknown representation type name.
    #[error("Unsupported representation type: {0}")]
    UnsupportedRepresentation(String),
}

impl GraphError {
    pub(crate) fn unknown_vertex<V: std::fmt::Display>(v: &V) -> Self {
        GraphError::UnknownVertex(v.to_string())
    }

    pub(crate) fn no_path<V: std::fmt::Display>(from: &V, to: &V) -> Self {
        GraphError::NoPath {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GraphError::no_path(&1, &2).to_string(),
            "There isn't a path between 1 and 2"
        );
        assert_eq!(
            GraphError::NegativeCycle.to_string(),
            "The shortest path cannot be found in a graph with negative circle."
        );
        assert_eq!(
            GraphError::unknown_vertex(&"X").to_string(),
            "The graph doesn't contain the vertex X"
        );
    }
}
