//! Integration tests for the `GraphLibrary` facade reading edge-list files.

use std::{fs, path::PathBuf};

use lgraphs::{
    library::{GraphLibrary, LibraryError},
    prelude::*,
};

/// Writes `content` to a file in the system temp directory, removed on drop
struct TempGraphFile(PathBuf);

impl TempGraphFile {
    fn new(name: &str, content: &str) -> Self {
        let path = std::env::temp_dir().join(format!("lgraphs-{}-{name}.txt", std::process::id()));
        fs::write(&path, content).expect("Failed to write graph file");
        Self(path)
    }
}

impl Drop for TempGraphFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn test_read_graph() {
    let file = TempGraphFile::new("read-graph", "6\n1 2\n1 3\n2 3\n5 6\n6 3\n6 1");
    let library = GraphLibrary::new();
    let graph = library.read_graph(&file.0).expect("Failed to read graph");

    assert_eq!(library.vertex_number(&graph), 5);
    assert_eq!(library.edge_number(&graph), 12);
    assert_eq!(
        library.all_vertices(&graph).into_iter().collect::<Vec<_>>(),
        vec![1, 2, 3, 5, 6]
    );
    for (u, v) in [(1, 2), (1, 3), (2, 3), (5, 6), (6, 3), (6, 1)] {
        assert!(library.contains_edge(&graph, &Edge(u, v)));
        assert!(library.contains_edge(&graph, &Edge(v, u)));
    }
    assert!(library.connected(&graph));
}

#[test]
fn test_read_weighted_graph() {
    let file = TempGraphFile::new(
        "read-weighted-graph",
        "6\n1 2 1.2\n1 3 0.5\n2 3 0.7\n5 6 1.3\n6 3 2.1\n6 1 5.2\n",
    );
    let library = GraphLibrary::new();
    let graph = library
        .read_weighted_graph(&file.0)
        .expect("Failed to read weighted graph");

    assert_eq!(library.vertex_number(&graph), 5);
    assert_eq!(library.edge_number(&graph), 12);
    assert_eq!(library.mean_edge(&graph), 2.0);
    for (u, v, w) in [
        (1, 2, 1.2),
        (1, 3, 0.5),
        (2, 3, 0.7),
        (5, 6, 1.3),
        (6, 3, 2.1),
        (6, 1, 5.2),
    ] {
        assert!(library.contains_edge(&graph, &WeightedEdge(u, v, w)));
    }

    assert_eq!(library.shortest_path(&graph, &2, &5).unwrap(), "2 3 6 5");
    assert_eq!(
        library.mst(&graph),
        "[1, 3] : 0.5\n[2, 3] : 0.7\n[5, 6] : 1.3\n[3, 6] : 2.1\n"
    );
}

#[test]
fn test_missing_file() {
    let path = std::env::temp_dir().join("lgraphs-does-not-exist.txt");
    let err = GraphLibrary::new().read_graph(&path).unwrap_err();
    assert!(matches!(err, LibraryError::Io(_)));
}

#[test]
fn test_malformed_file() {
    let file = TempGraphFile::new("malformed", "3\n1 2\n2 x\n");
    let err = GraphLibrary::new().read_graph(&file.0).unwrap_err();
    match err {
        LibraryError::Io(err) => assert_eq!(err.kind(), std::io::ErrorKind::InvalidData),
        other => panic!("Unexpected error {other:?}"),
    }
}

#[test]
fn test_end_to_end() {
    let library = GraphLibrary::new();
    let mut graph = Graph::<i32>::new();
    for (u, v) in [(1, 2), (2, 5), (5, 3), (4, 5), (1, 5)] {
        library.add_edge(&mut graph, u, v).unwrap();
    }

    assert_eq!(library.vertex_number(&graph), 5);
    assert_eq!(library.edge_number(&graph), 10);
    assert_eq!(library.mean_edge(&graph), 2.0);
    assert_eq!(library.shortest_path(&graph, &1, &3).unwrap(), "1 5 3");
    assert!(
        library
            .graph_representation(&graph, "adjacency_list")
            .unwrap()
            .lines()
            .any(|line| line == "5 - 1 2 3 4")
    );
    assert!(
        library
            .bfs(&graph, &1)
            .unwrap()
            .lines()
            .any(|line| line == "2 - 1 1")
    );
    assert_eq!(library.bfs(&graph, &1).unwrap(), library.bfs(&graph, &1).unwrap());
    assert_eq!(library.dfs(&graph, &1).unwrap(), library.dfs(&graph, &1).unwrap());
}

#[test]
fn test_error_messages() {
    let library = GraphLibrary::new();
    let mut graph = Graph::<i32>::new();
    library.add_edge(&mut graph, 1, 2).unwrap();

    assert_eq!(
        library.add_vertex(&mut graph, 1).unwrap_err().to_string(),
        "The graph already contains the specified vertex"
    );
    assert_eq!(
        library.add_edge(&mut graph, 2, 1).unwrap_err().to_string(),
        "The graph already contains the specified edge"
    );
    assert_eq!(
        library.dfs(&graph, &3).unwrap_err().to_string(),
        "The graph doesn't contain the specified vertex."
    );
    assert_eq!(
        library.graph_representation(&graph, "tree").unwrap_err().to_string(),
        "Unsupported representation type: tree"
    );

    library.add_vertex(&mut graph, 3).unwrap();
    assert_eq!(
        library.shortest_path(&graph, &1, &3).unwrap_err().to_string(),
        "There isn't a path between 1 and 3"
    );
}

#[test]
fn test_negative_cycle() {
    let library = GraphLibrary::new();
    let mut graph = WeightedGraph::<i32>::new();
    library.add_weighted_edge(&mut graph, 1, 2, 2.0).unwrap();
    library.add_weighted_edge(&mut graph, 2, 3, -3.0).unwrap();
    library.add_weighted_edge(&mut graph, 3, 1, 0.5).unwrap();

    assert_eq!(
        library.shortest_path(&graph, &1, &3).unwrap_err().to_string(),
        "The shortest path cannot be found in a graph with negative circle."
    );
    assert_eq!(library.shortest_path(&graph, &2, &2).unwrap(), "2");
}
