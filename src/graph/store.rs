use crate::error::GraphError;
use crate::graph::model::{Edge, Node, Position};
use ahash::AHashSet;
use serde::Serialize;

/// An owned copy of the graph at a committed revision, handed to rendering
/// consumers after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub revision: u64,
}

/// The authoritative in-memory workflow graph.
///
/// Nodes and edges are kept in insertion order (the order is
/// presentation-relevant, never required for correctness). All mutation goes
/// through the narrow API below; every operation is synchronous, runs to
/// completion, and is observed as a single atomic transition. Lookups are
/// linear scans over the node sequence, which is fine at the target scale of
/// tens to low hundreds of nodes; a side set of live ids keeps the
/// uniqueness check and edge pruning cheap.
///
/// Position and input updates on an id that is no longer present are silent
/// no-ops: in a serialized single-owner model such a call is just a stale
/// reference arriving after a delete, which is expected and non-exceptional.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    ids: AHashSet<String>,
    revision: u64,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to the node sequence.
    ///
    /// Ids must be unique for the lifetime of the store; a duplicate id is
    /// rejected with [`GraphError::DuplicateNodeId`] and leaves the graph
    /// unchanged.
    pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.ids.contains(&node.id) {
            return Err(GraphError::DuplicateNodeId(node.id));
        }
        self.ids.insert(node.id.clone());
        self.nodes.push(node);
        self.revision += 1;
        Ok(())
    }

    /// Appends an edge to the edge sequence.
    ///
    /// The store performs no endpoint validation here; connection attempts
    /// are validated by [`EdgeConnector`](crate::connect::EdgeConnector)
    /// before they reach the store. Callers that bypass the connector are
    /// responsible for the referential-integrity invariant themselves.
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
        self.revision += 1;
    }

    /// Replaces the position of the matching node.
    ///
    /// A missing id or a non-finite position is a silent no-op.
    pub fn update_node_position(&mut self, node_id: &str, position: Position) {
        if !position.is_finite() {
            return;
        }
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == node_id) {
            node.position = position;
            self.revision += 1;
        }
    }

    /// Replaces the free-text `input` payload of the matching node.
    ///
    /// A missing id is a silent no-op.
    pub fn update_node_input(&mut self, node_id: &str, value: impl Into<String>) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == node_id) {
            node.input = value.into();
            self.revision += 1;
        }
    }

    /// Removes a node together with every edge incident to it, as one
    /// atomic transition — no intermediate state ever exposes a dangling
    /// edge. Deleting an id that is not present is a no-op, so a repeated
    /// delete is harmless.
    pub fn delete_node(&mut self, node_id: &str) {
        if !self.ids.remove(node_id) {
            return;
        }
        self.nodes.retain(|n| n.id != node_id);
        self.edges.retain(|e| !e.touches(node_id));
        self.revision += 1;
    }

    /// Bulk-replaces the node sequence wholesale.
    ///
    /// Used when a direct-manipulation layer computes a full next-state
    /// snapshot. This does not reconcile edges by itself: a caller that
    /// removed nodes through this path must follow up with
    /// [`prune_edges`](Self::prune_edges) to restore referential integrity.
    pub fn set_nodes(&mut self, nodes: Vec<Node>) {
        self.ids = nodes.iter().map(|n| n.id.clone()).collect();
        self.nodes = nodes;
        self.revision += 1;
    }

    /// Drops every edge with an endpoint that no longer names a live node.
    /// No-op (and no revision bump) when the edge sequence is already clean.
    pub fn prune_edges(&mut self) {
        let before = self.edges.len();
        let ids = &self.ids;
        self.edges
            .retain(|e| ids.contains(&e.source) && ids.contains(&e.target));
        if self.edges.len() != before {
            self.revision += 1;
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Finds a node by id.
    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    /// True if a node with this id is currently live.
    pub fn contains(&self, node_id: &str) -> bool {
        self.ids.contains(node_id)
    }

    /// A monotone counter bumped once per applied mutation. No-op calls
    /// (missing id, idempotent re-delete) do not advance it, so consumers
    /// can use equality as an "anything changed?" check.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Clones the current graph state for a rendering consumer.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            revision: self.revision,
        }
    }
}
