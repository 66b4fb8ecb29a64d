//! lgraphs - Inspect graphs stored in the edge-list format.
//!
//! # Commands
//!
//! - `lgraphs <file> stats` - Number of vertices and edges, mean edge and digest
//! - `lgraphs <file> repr [matrix|list]` - Adjacency matrix or adjacency list
//! - `lgraphs <file> bfs <root>` / `dfs <root>` - Traversal reports
//! - `lgraphs <file> connected` / `components` - Connectivity
//! - `lgraphs <file> path <from> <to>` - Shortest path
//! - `lgraphs <file> mst` - Minimum spanning tree
//!
//! # Examples
//!
//! ```bash
//! # Shortest path in a weighted graph
//! lgraphs graph.txt --weighted path 1 3
//!
//! # Adjacency matrix with two decimals and CRLF line endings
//! lgraphs graph.txt --weighted --precision 2 --line-ending crlf repr matrix
//! ```

use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use lgraphs::{
    algo::*,
    io::{RenderOptions, WeightFormat},
    library::GraphLibrary,
    prelude::*,
    repr::digest::GraphDigest,
};
use tracing_subscriber::EnvFilter;

/// lgraphs - labelled graph algorithms on edge-list files
#[derive(Parser)]
#[command(name = "lgraphs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Edge-list file: number of edges followed by one edge per line
    path: PathBuf,

    /// Edge lines carry a weight column (`u v weight`)
    #[arg(short, long)]
    weighted: bool,

    /// Line ending of rendered output
    #[arg(long, value_enum, default_value_t = LineEnding::Lf)]
    line_ending: LineEnding,

    /// Print weights with a fixed number of decimals
    #[arg(short, long)]
    precision: Option<usize>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, ValueEnum)]
enum LineEnding {
    Lf,
    Crlf,
}

impl LineEnding {
    fn terminator(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the number of vertices and edges, the mean edge and the SHA-256 digest
    Stats,

    /// Print the adjacency matrix or adjacency list
    Repr {
        /// Representation type (matrix, adjacency_matrix, list, adjacency_list)
        #[arg(default_value = "list")]
        kind: String,
    },

    /// Print the breadth-first search report
    Bfs {
        /// Root vertex
        root: i32,
    },

    /// Print the depth-first search report
    Dfs {
        /// Root vertex
        root: i32,
    },

    /// Check whether the graph is connected
    Connected,

    /// Print a shortest path
    Path {
        /// Source vertex
        from: i32,
        /// Target vertex
        to: i32,
    },

    /// Print the edges of a minimum spanning tree
    Mst,

    /// Print the connected components, one per line
    Components,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn execute<G: AdjacencyList<Vertex = i32>>(
    library: &GraphLibrary,
    graph: &G,
    command: &Commands,
) -> anyhow::Result<String> {
    let terminator = &library.options().line_terminator;

    Ok(match command {
        Commands::Stats => [
            format!("vertices: {}", library.vertex_number(graph)),
            format!("edges: {}", library.edge_number(graph)),
            format!("mean edge: {}", library.mean_edge(graph)),
            format!("max degree: {}", graph.max_degree()),
            format!("sha256: {}", graph.digest_sha256()),
        ]
        .into_iter()
        .map(|line| line + terminator)
        .collect(),
        Commands::Repr { kind } => library.graph_representation(graph, kind)?,
        Commands::Bfs { root } => library.bfs(graph, root)?,
        Commands::Dfs { root } => library.dfs(graph, root)?,
        Commands::Connected => format!("{}{terminator}", library.connected(graph)),
        Commands::Path { from, to } => {
            format!("{}{terminator}", library.shortest_path(graph, from, to)?)
        }
        Commands::Mst => library.mst(graph),
        Commands::Components => graph
            .connected_components()
            .into_iter()
            .map(|comp| comp.iter().join(" ") + terminator)
            .collect(),
    })
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let mut options = RenderOptions::default().line_terminator(cli.line_ending.terminator());
    if let Some(precision) = cli.precision {
        options = options.weight_format(WeightFormat::Fixed(precision));
    }
    let library = GraphLibrary::with_options(options);

    if cli.weighted {
        let graph = library
            .read_weighted_graph(&cli.path)
            .with_context(|| format!("Failed to read weighted graph from {}", cli.path.display()))?;
        execute(&library, &graph, &cli.command)
    } else {
        let graph = library
            .read_graph(&cli.path)
            .with_context(|| format!("Failed to read graph from {}", cli.path.display()))?;
        execute(&library, &graph, &cli.command)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
