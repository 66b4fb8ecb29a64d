use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
};

use crate::Vertex;

/// Weights are single precision floats. Unweighted edges report [`DEFAULT_WEIGHT`].
pub type Weight = f32;

/// Weight of every unweighted edge and of weighted edges added without explicit weight
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// We limit the number of half-edges to `2^32 - 1`.
pub type NumEdges = u32;

/// A directed half-edge `(origin, target)` optionally carrying a weight.
///
/// An undirected connection between `a` and `b` is always stored as the two
/// half-edges `(a, b)` and `(b, a)` with identical weight.
pub trait HalfEdge: Clone + Eq + Ord + Hash + Display + Debug {
    /// Label type of both endpoints
    type Vertex: Vertex;

    /// *true* if [`HalfEdge::weight`] carries information
    const WEIGHTED: bool;

    /// Creates a half-edge from its parts. Unweighted edges drop `weight`.
    fn from_parts(origin: Self::Vertex, target: Self::Vertex, weight: Weight) -> Self;

    /// Returns the endpoint the edge is stored under
    fn origin(&self) -> &Self::Vertex;

    /// Returns the endpoint the edge points to
    fn target(&self) -> &Self::Vertex;

    /// Returns the weight of the edge
    fn weight(&self) -> Weight;

    /// Returns the opposite half-edge with the same weight
    fn reverse(&self) -> Self {
        Self::from_parts(self.target().clone(), self.origin().clone(), self.weight())
    }

    /// Returns *true* if the endpoint with smaller label comes first
    fn is_normalized(&self) -> bool {
        self.origin() <= self.target()
    }

    /// Normalizes the edge such that the endpoint with smaller label comes first
    fn normalized(&self) -> Self {
        if self.is_normalized() {
            self.clone()
        } else {
            self.reverse()
        }
    }

    /// Returns *true* if both endpoints are equal
    fn is_loop(&self) -> bool {
        self.origin() == self.target()
    }
}

/// An unweighted half-edge.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<V>(pub V, pub V);

impl<V: Vertex> HalfEdge for Edge<V> {
    type Vertex = V;

    const WEIGHTED: bool = false;

    fn from_parts(origin: V, target: V, _weight: Weight) -> Self {
        Edge(origin, target)
    }

    fn origin(&self) -> &V {
        &self.0
    }

    fn target(&self) -> &V {
        &self.1
    }

    fn weight(&self) -> Weight {
        DEFAULT_WEIGHT
    }
}

impl<V: Display> Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.0, self.1)
    }
}

impl<V: Display> Debug for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from(value: (V, V)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<V: Clone> From<&(V, V)> for Edge<V> {
    fn from(value: &(V, V)) -> Self {
        Edge(value.0.clone(), value.1.clone())
    }
}

/// A weighted half-edge.
///
/// Two weighted edges are equal iff their endpoints and the bit patterns of
/// their weights match. In particular `0.0` and `-0.0` are different weights.
#[derive(Clone)]
pub struct WeightedEdge<V>(pub V, pub V, pub Weight);

impl<V: Vertex> HalfEdge for WeightedEdge<V> {
    type Vertex = V;

    const WEIGHTED: bool = true;

    fn from_parts(origin: V, target: V, weight: Weight) -> Self {
        WeightedEdge(origin, target, weight)
    }

    fn origin(&self) -> &V {
        &self.0
    }

    fn target(&self) -> &V {
        &self.1
    }

    fn weight(&self) -> Weight {
        self.2
    }
}

impl<V: PartialEq> PartialEq for WeightedEdge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 == other.1 && self.2.to_bits() == other.2.to_bits()
    }
}

impl<V: Eq> Eq for WeightedEdge<V> {}

impl<V: Ord> PartialOrd for WeightedEdge<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord> Ord for WeightedEdge<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .cmp(&other.0)
            .then_with(|| self.1.cmp(&other.1))
            .then_with(|| self.2.total_cmp(&other.2))
    }
}

impl<V: Hash> Hash for WeightedEdge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
        self.1.hash(state);
        self.2.to_bits().hash(state);
    }
}

impl<V: Display> Display for WeightedEdge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}] : {}",
            self.0,
            self.1,
            WeightFormat::Compact.format(self.2)
        )
    }
}

impl<V: Display> Debug for WeightedEdge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl<V> From<(V, V, Weight)> for WeightedEdge<V> {
    fn from(value: (V, V, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl<V> From<(V, V)> for WeightedEdge<V> {
    fn from(value: (V, V)) -> Self {
        WeightedEdge(value.0, value.1, DEFAULT_WEIGHT)
    }
}

impl<V: Clone> From<&(V, V, Weight)> for WeightedEdge<V> {
    fn from(value: &(V, V, Weight)) -> Self {
        WeightedEdge(value.0.clone(), value.1.clone(), value.2)
    }
}

/// Rule for turning a weight into text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum WeightFormat {
    /// Integral values lose their fractional part (`3.0 -> "3"`), all other
    /// values use the shortest decimal that reads back exactly (`3.14 -> "3.14"`)
    #[default]
    Compact,
    /// Always print the given number of decimals (`Fixed(2)`: `3.0 -> "3.00"`)
    Fixed(usize),
}

impl WeightFormat {
    /// Formats `weight` according to `self`
    pub fn format(&self, weight: Weight) -> String {
        match *self {
            WeightFormat::Compact => {
                if weight.fract() == 0.0 && weight.abs() < i64::MAX as Weight {
                    format!("{}", weight as i64)
                } else {
                    format!("{weight}")
                }
            }
            WeightFormat::Fixed(precision) => format!("{weight:.precision$}"),
        }
    }
}
