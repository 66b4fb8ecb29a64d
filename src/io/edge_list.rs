//! # EdgeList
//!
//! The EdgeList-Format consists of a line holding the number `N` of edges, followed by `N`
//! lines `u v` (or `u v weight` for weighted graphs), each adding the undirected edge `{u, v}`.
//! Blank lines are skipped, content after the `N`-th edge line is ignored.

use std::{
    collections::BTreeSet,
    fmt::Display,
    io::{BufRead, Lines},
    str::FromStr,
};

use tracing::{debug, trace, warn};

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeListReader {
    /// Whether edge lines carry a weight column; `None` follows the edge type of the graph
    weight_column: Option<bool>,
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects lines `u v`; weighted graphs receive the default weight
    pub fn unweighted(mut self) -> Self {
        self.weight_column = Some(false);
        self
    }

    /// Expects lines `u v weight`; unweighted graphs drop the weight
    pub fn weighted(mut self) -> Self {
        self.weight_column = Some(true);
        self
    }
}

impl<G> GraphReader<G> for EdgeListReader
where
    G: GraphFromScratch,
    G::Vertex: FromStr,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> std::io::Result<G> {
        let weighted = self
            .weight_column
            .unwrap_or(<G::Edge as HalfEdge>::WEIGHTED);
        let mut lines = NonBlankLines::new(reader);

        let (header_line, header) = lines
            .next_line()?
            .ok_or_else(|| io_error!(ErrorKind::InvalidData, "Header not found"))?;
        let mut parts = header.split_whitespace();
        let number_of_edges: usize = parse_next_value!(parts, "number of edges", header_line);
        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            format!("Unexpected token after the number of edges in line {header_line}.")
        );

        debug!(number_of_edges, weighted, "Reading edge list");

        let mut graph = G::new();
        for i in 0..number_of_edges {
            let Some((line, content)) = lines.next_line()? else {
                warn!(expected = number_of_edges, found = i, "Edge list ended early");
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Expected {number_of_edges} edges but found only {i}.")
                ));
            };

            let mut parts = content.split_whitespace();
            let u: G::Vertex = parse_next_value!(parts, "source vertex", line);
            let v: G::Vertex = parse_next_value!(parts, "target vertex", line);
            let weight: Weight = if weighted {
                parse_next_value!(parts, "weight", line)
            } else {
                DEFAULT_WEIGHT
            };
            raise_error_unless!(
                parts.next().is_none(),
                ErrorKind::InvalidData,
                format!("Unexpected token after the edge in line {line}.")
            );

            trace!(line, %u, %v, weight, "Parsed edge");
            graph
                .insert_edge(<G::Edge as HalfEdge>::from_parts(u, v, weight))
                .map_err(|err| {
                    warn!(line, %err, "Rejected edge");
                    io_error!(ErrorKind::InvalidData, err)
                })?;
        }

        if let Some((line, _)) = lines.next_line()? {
            warn!(line, "Ignoring content after the last edge");
        }

        debug!(
            vertices = graph.number_of_vertices(),
            edges = graph.number_of_edges(),
            "Read edge list"
        );
        Ok(graph)
    }
}

/// Trait for creating graphs form an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> std::io::Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
    G::Vertex: FromStr,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> std::io::Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Yields the non-blank lines of a reader together with their 1-based line number
struct NonBlankLines<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> NonBlankLines<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    /// Returns the next non-blank line if it exists or propagate an error
    fn next_line(&mut self) -> std::io::Result<Option<(usize, String)>> {
        loop {
            self.line += 1;
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.trim().is_empty() => continue,
                Some(Ok(line)) => return Ok(Some((self.line, line))),
            }
        }
    }
}

/// A writer for the EdgeList-Format.
///
/// Every undirected edge is written once in normalized orientation; lines are sorted.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeListWriter {
    /// Formatting rule for the weight column
    weight_format: WeightFormat,
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the weight format
    pub fn weight_format(mut self, format: WeightFormat) -> EdgeListWriter {
        self.weight_format = format;
        self
    }

    fn write_line<W: Write, V: Display>(
        &self,
        writer: &mut W,
        u: V,
        v: V,
        weight: Option<Weight>,
    ) -> std::io::Result<()> {
        match weight {
            Some(w) => writeln!(writer, "{u} {v} {}", self.weight_format.format(w)),
            None => writeln!(writer, "{u} {v}"),
        }
    }
}

impl<G: AdjacencyList> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> std::io::Result<()> {
        let edges = graph.edges(true).collect::<BTreeSet<_>>();
        debug!(edges = edges.len(), "Writing edge list");

        writeln!(writer, "{}", edges.len())?;
        for e in edges {
            let weight = <G::Edge as HalfEdge>::WEIGHTED.then(|| e.weight());
            self.write_line(&mut writer, e.origin(), e.target(), weight)?;
        }

        writer.flush()
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> std::io::Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: AdjacencyList> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> std::io::Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::testing::*;

    fn inner_error(err: &std::io::Error) -> Option<&GraphError> {
        err.get_ref().and_then(|inner| inner.downcast_ref::<GraphError>())
    }

    #[test]
    fn read_unweighted() {
        let input = "6\n1 2\n1 3\n2 3\n5 6\n6 3\n6 1";
        let graph = Graph::<i32>::try_read_edge_list(input.as_bytes()).unwrap();

        assert_eq!(graph.number_of_vertices(), 5);
        assert_eq!(graph.number_of_edges(), 12);
        assert_eq!(graph.all_vertices().into_iter().collect_vec(), vec![1, 2, 3, 5, 6]);
        assert!(graph.has_edge(&3, &6));
        assert!(!graph.contains_vertex(&4));
    }

    #[test]
    fn read_weighted() {
        let input = "3\n\n1 2 0.5\n   \n2 3 -1\n3 1 2\n\n";
        let graph: WeightedGraph<i32> = EdgeListReader::new()
            .weighted()
            .try_read_graph(input.as_bytes())
            .unwrap();

        assert_eq!(graph.number_of_edges(), 6);
        assert_eq!(graph.weight_of(&2, &1), Some(0.5));
        assert_eq!(graph.weight_of(&3, &2), Some(-1.0));
        assert!(graph.contains_edge(&WeightedEdge(1, 3, 2.0)));
    }

    #[test]
    fn weight_column_follows_reader() {
        let graph: WeightedGraph<i32> = EdgeListReader::new()
            .unweighted()
            .try_read_graph("1\n4 7".as_bytes())
            .unwrap();
        assert_eq!(graph.weight_of(&4, &7), Some(DEFAULT_WEIGHT));

        let graph: Graph<i32> = EdgeListReader::new()
            .weighted()
            .try_read_graph("1\n4 7 2.5".as_bytes())
            .unwrap();
        assert!(graph.has_edge(&7, &4));
    }

    #[test]
    fn malformed_input() {
        let cases = [
            "",
            "\n\n",
            "x\n1 2",
            "1 2\n1 2",
            "2\n1 2",
            "1\n1",
            "1\n1 a",
            "1\n1 2 3",
        ];
        for input in cases {
            let err = Graph::<i32>::try_read_edge_list(input.as_bytes()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{input:?}");
        }

        let err = WeightedGraph::<i32>::try_read_edge_list("1\n1 2".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert_eq!(
            err.to_string(),
            "Premature end of line 2 when parsing weight."
        );
    }

    #[test]
    fn rejected_edges() {
        let err = Graph::<i32>::try_read_edge_list("2\n1 2\n2 1".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert_eq!(
            inner_error(&err),
            Some(&GraphError::DuplicateEdge("[2, 1]".into()))
        );
    }

    #[test]
    fn trailing_content_is_ignored() {
        let graph = Graph::<i32>::try_read_edge_list("1\n1 2\n3 4\n".as_bytes()).unwrap();
        assert_eq!(graph.number_of_vertices(), 2);
    }

    #[test]
    fn write_and_read_back() {
        let mut buffer = Vec::new();
        integer_graph().try_write_edge_list(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer.clone()).unwrap(),
            "5\n1 2\n1 5\n2 5\n3 5\n4 5\n"
        );
        assert_eq!(
            Graph::<i32>::try_read_edge_list(buffer.as_slice()).unwrap(),
            integer_graph()
        );

        let mut buffer = Vec::new();
        weighted_graph().try_write_edge_list(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer.clone()).unwrap(),
            "6\n1 2 0.1\n1 5 1\n2 5 0.2\n3 4 -9.5\n3 5 5\n4 5 2.3\n"
        );
        assert_eq!(
            WeightedGraph::<i32>::try_read_edge_list(buffer.as_slice()).unwrap(),
            weighted_graph()
        );
    }

    #[test]
    fn write_self_loops_and_fixed_weights() {
        let graph = WeightedGraph::<i32>::from_edges([(2, 2, 0.5), (2, 1, 1.0)]).unwrap();
        let mut buffer = Vec::new();
        EdgeListWriter::new()
            .weight_format(WeightFormat::Fixed(2))
            .try_write_graph(&graph, &mut buffer)
            .unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "2\n1 2 1.00\n2 2 0.50\n"
        );
    }
}
