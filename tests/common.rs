//! Common test utilities for building graph fixtures.
use nagare::prelude::*;

/// Creates a bare node of the given kind with a default label and origin
/// position.
#[allow(dead_code)]
pub fn node(id: &str, kind: NodeKind) -> Node {
    Node {
        id: id.to_string(),
        kind,
        label: kind.spec().header.to_string(),
        input: String::new(),
        position: Position::new(0.0, 0.0),
        style: None,
        selected: false,
    }
}

/// Creates a node at an explicit position.
#[allow(dead_code)]
pub fn node_at(id: &str, kind: NodeKind, x: f64, y: f64) -> Node {
    let mut n = node(id, kind);
    n.position = Position::new(x, y);
    n
}

/// A store holding a start node "1" wired to an end node "2".
///
/// This is the two-node, one-edge baseline most store tests start from.
#[allow(dead_code)]
pub fn wired_store() -> GraphStore {
    let mut store = GraphStore::new();
    store.add_node(node("1", NodeKind::Start)).unwrap();
    store.add_node(node("2", NodeKind::End)).unwrap();
    EdgeConnector::connect(&mut store, "1", "2").unwrap();
    store
}

/// A store holding a start, a text, and an end node with no edges.
#[allow(dead_code)]
pub fn three_node_store() -> GraphStore {
    let mut store = GraphStore::new();
    store.add_node(node("a", NodeKind::Start)).unwrap();
    store.add_node(node("b", NodeKind::Text)).unwrap();
    store.add_node(node("c", NodeKind::End)).unwrap();
    store
}
