/*!
# Vertex Representation

Vertices are caller-chosen labels: integers, characters, strings or any other
type that is totally ordered, hashable and printable. The order of the labels
is load-bearing as every textual output of this crate is sorted by vertex.

Internally, algorithms do not operate on labels directly. They first take an
[`IndexedGraph`](crate::repr::IndexedGraph) snapshot which maps the sorted
labels to dense indices of type [`Node`] from `0` to `n - 1`.
*/

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Dense index of a vertex inside an [`IndexedGraph`](crate::repr::IndexedGraph).
/// Index order equals label order.
pub type Node = u32;

/// There can be at most `2^32 - 1` vertices in a graph!
pub type NumVertices = u32;

/// A vertex label.
///
/// Labels must be totally ordered (output is sorted), hashable (storage is
/// hash based) and printable (output is textual).
pub trait Vertex: Clone + Ord + Hash + Display + Debug {
    /// Returns *false* if the label may not be stored in a graph.
    ///
    /// Both text representations separate labels by single spaces, so
    /// textual labels must be non-empty and free of whitespace.
    fn is_valid_vertex(&self) -> bool {
        true
    }
}

macro_rules! impl_vertex {
    ($($t:ty),*) => {
        $(
            impl Vertex for $t {}
        )*
    };
}

impl_vertex!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool
);

impl Vertex for char {
    fn is_valid_vertex(&self) -> bool {
        !self.is_whitespace()
    }
}

impl Vertex for String {
    fn is_valid_vertex(&self) -> bool {
        self.as_str().is_valid_vertex()
    }
}

impl Vertex for &str {
    fn is_valid_vertex(&self) -> bool {
        !self.is_empty() && !self.chars().any(char::is_whitespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textual_labels() {
        assert!("A".is_valid_vertex());
        assert!(String::from("node_1").is_valid_vertex());

        assert!(!"".is_valid_vertex());
        assert!(!"a b".is_valid_vertex());
        assert!(!String::from("\t").is_valid_vertex());
        assert!(!' '.is_valid_vertex());
    }

    #[test]
    fn numeric_labels() {
        assert!(0u32.is_valid_vertex());
        assert!((-7i64).is_valid_vertex());
    }
}
