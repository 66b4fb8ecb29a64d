//! # Adjacency Matrix
//!
//! The first line consists of two spaces followed by the sorted vertex labels.
//! Every following line starts with a label and a space and lists, for every vertex in
//! header order, the weight of the half-edge towards it or `0` if there is none.
//! Unweighted half-edges have weight `1`.

use std::fmt::Write;

use itertools::Itertools;

use super::*;

/// Renders `graph` as adjacency matrix
pub fn render<V: Vertex>(graph: &IndexedGraph<'_, V>, options: &RenderOptions) -> String {
    let mut out = String::new();
    let terminator = &options.line_terminator;

    let header = graph.vertices().map(|u| graph.label(u)).join(" ");
    let _ = write!(out, "  {header}{terminator}");

    for u in graph.vertices() {
        let mut row = vec![None; graph.len()];
        for &(v, weight) in graph.neighbors_of(u) {
            row[v as usize] = Some(weight);
        }

        let cells = row
            .into_iter()
            .map(|cell| cell.map_or_else(|| "0".to_string(), |w| options.weight_format.format(w)))
            .join(" ");
        let _ = write!(out, "{} {cells}{terminator}", graph.label(u));
    }

    out
}
