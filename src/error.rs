use crate::graph::NodeKind;
use thiserror::Error;

/// Errors that can occur while validating a node creation request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NodeRequestError {
    #[error("Node request rejected: label must not be empty")]
    EmptyLabel,

    #[error("Node request rejected: position ({x}, {y}) is not finite")]
    NonFinitePosition { x: f64, y: f64 },
}

/// Errors that can occur while validating a connection attempt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConnectError {
    #[error("Connection rejected: node '{0}' cannot be connected to itself")]
    SelfLoop(String),

    #[error("Connection rejected: source node '{0}' does not exist")]
    UnknownSource(String),

    #[error("Connection rejected: target node '{0}' does not exist")]
    UnknownTarget(String),

    #[error("Connection rejected: '{node_id}' is a {kind} node and emits no outgoing connections")]
    SourceNotAllowed { node_id: String, kind: NodeKind },

    #[error("Connection rejected: '{node_id}' is a {kind} node and accepts no incoming connections")]
    TargetNotAllowed { node_id: String, kind: NodeKind },
}

/// Errors raised by the store itself for mutations it cannot accept.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("A node with id '{0}' already exists in the graph")]
    DuplicateNodeId(String),
}
