/*!
# Graph Hash Digests

This module provides the [`GraphDigest`] trait, which allows computing
**hash-based digests** of graphs that are independent of the underlying
data structure and of the order in which vertices and edges were added.

The digest encodes:
- the number of vertices,
- the sorted vertex labels, and
- the sorted half-edge list including weights,

before feeding them into a cryptographic hash function.

## Example
```
use lgraphs::{prelude::*, repr::digest::GraphDigest};

let first = Graph::<u32>::from_edges([(4, 3), (1, 2)]).unwrap();
let second = ArrGraph::<u32>::from_edges([(2, 1), (3, 4)]).unwrap();

// Computes a SHA-256 digest (hex string of length 64).
assert_eq!(first.digest_sha256().len(), 64);
assert_eq!(first.digest_sha256(), second.digest_sha256());
```
*/

use std::fmt::LowerHex;

use super::*;
use ::digest::{Digest, Output};
use itertools::Itertools;

/// Trait for computing a **canonical hash digest** of a graph.
///
/// Digests are designed to be:
/// - **Graph-structure dependent**: Two equal graphs yield the same digest,
///   no matter how they are stored.
/// - **Representation independent**: Works with any [`AdjacencyList`] implementation.
/// - **Deterministic**: Vertices and edges are encoded in sorted order.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    ///
    /// # Type Parameters
    /// - `D`: A hash function implementing [`Digest`].
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> GraphDigest for G
where
    G: AdjacencyList,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();

        // labels are variable-length, so every one of them is terminated
        let update_label = |hasher: &mut D, u: &G::Vertex| {
            hasher.update(u.to_string().as_bytes());
            hasher.update([0u8]);
        };

        // first encode the number of vertices in the graph
        hasher.update(self.number_of_vertices().to_le_bytes());

        let labels = self.vertices().sorted().collect_vec();
        for &u in &labels {
            update_label(&mut hasher, u);
        }

        // then append a sorted half-edge list
        for u in labels {
            for e in self.edges_of(u).sorted() {
                update_label(&mut hasher, e.target());
                hasher.update(e.weight().to_bits().to_le_bytes());
            }
            hasher.update([0xffu8]);
        }

        format!("{:x}", hasher.finalize())
    }
}
