use clap::Parser;
use nagare::prelude::*;
use serde::Deserialize;
use std::fs;

// --- JSON Deserialization Structs (Editor Export Format) ---
// These structs match the editor's exported graph format and are only used
// here for conversion into the core model.

#[derive(Deserialize)]
struct RawGraph {
    nodes: Vec<RawNode>,
    edges: Vec<RawEdge>,
}

#[derive(Deserialize)]
struct RawNode {
    id: String,
    #[serde(rename = "type")]
    kind: NodeKind,
    data: RawNodeData,
    position: RawPosition,
    style: Option<RawStyle>,
}

#[derive(Deserialize)]
struct RawNodeData {
    label: String,
    #[serde(default)]
    input: String,
}

#[derive(Deserialize)]
struct RawPosition {
    x: f64,
    y: f64,
}

#[derive(Deserialize)]
struct RawStyle {
    #[serde(alias = "backgroundColor")]
    background_color: Option<String>,
    color: Option<String>,
}

#[derive(Deserialize)]
struct RawEdge {
    source: String,
    target: String,
}

impl RawNode {
    fn into_node(self) -> Node {
        let style = self.style.and_then(|s| {
            s.background_color.map(|background_color| NodeStyle {
                background_color,
                color: s.color.unwrap_or_else(|| "#fff".to_string()),
            })
        });
        Node {
            id: self.id,
            kind: self.kind,
            label: self.data.label,
            input: self.data.input,
            position: Position::new(self.position.x, self.position.y),
            style,
            selected: false,
        }
    }
}

/// Loads an editor-exported workflow graph, replays it through the
/// validation path, and reports what survived.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the exported graph JSON file
    graph_path: String,

    /// Print the normalized graph snapshot as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let graph_json = fs::read_to_string(&cli.graph_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read graph file '{}': {}",
            &cli.graph_path, e
        ))
    });
    let raw: RawGraph = serde_json::from_str(&graph_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse graph JSON: {}", e)));

    let mut store = GraphStore::new();
    let mut rejected_nodes = 0usize;
    let mut rejected_edges = 0usize;

    for raw_node in raw.nodes {
        let node = raw_node.into_node();
        if let Err(e) = store.add_node(node) {
            eprintln!("Skipping node: {}", e);
            rejected_nodes += 1;
        }
    }

    for raw_edge in raw.edges {
        if let Err(e) = EdgeConnector::connect(&mut store, &raw_edge.source, &raw_edge.target) {
            eprintln!("Skipping edge: {}", e);
            rejected_edges += 1;
        }
    }

    if cli.json {
        let snapshot = store.snapshot();
        let rendered = serde_json::to_string_pretty(&snapshot)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize snapshot: {}", e)));
        println!("{}", rendered);
        return;
    }

    println!("\n--- Graph Summary ---");
    println!("Nodes: {}", store.nodes().len());
    for kind in NodeKind::ALL {
        let count = store.nodes().iter().filter(|n| n.kind == kind).count();
        if count > 0 {
            println!("  {:<10} {}", kind, count);
        }
    }
    println!("Edges: {}", store.edges().len());
    if rejected_nodes + rejected_edges > 0 {
        println!(
            "Rejected: {} node(s), {} edge(s)",
            rejected_nodes, rejected_edges
        );
    }
    println!("Revision: {}", store.revision());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
