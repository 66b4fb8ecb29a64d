/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use lgraphs::algo::*;
```
and gain access to traversals, connectivity, shortest paths and minimum spanning trees.

Every algorithm first takes an [`IndexedGraph`] snapshot of the graph, works on dense
indices and translates its result back to labels. No algorithm modifies the graph.
*/

mod connectivity;
mod mst;
mod shortest_path;
mod traversal;
mod union_find;

use crate::{io::RenderOptions, prelude::*};

pub use connectivity::*;
pub use mst::*;
pub use shortest_path::*;
pub use traversal::*;
pub use union_find::*;
