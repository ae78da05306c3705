use crate::error::ConnectError;
use crate::graph::{Edge, GraphStore};

/// Validates connection gestures and records accepted edges in the store.
///
/// This is the only component that checks edge endpoints; the store itself
/// trusts validated input (see [`GraphStore::add_edge`]). The contract:
///
/// - self-loops are rejected;
/// - both endpoints must be live nodes at the time of the attempt;
/// - the source node's kind must emit outgoing connections and the target
///   node's kind must accept incoming ones (an `end` node has no outgoing
///   handle, a `start` node no incoming one);
/// - parallel edges between the same pair are *not* deduplicated — edge
///   cardinality is deliberately unconstrained.
pub struct EdgeConnector;

impl EdgeConnector {
    /// Validates a `(source, target)` connection attempt and, on success,
    /// forwards it to the store. Returns the recorded edge.
    pub fn connect(
        store: &mut GraphStore,
        source: &str,
        target: &str,
    ) -> Result<Edge, ConnectError> {
        if source == target {
            return Err(ConnectError::SelfLoop(source.to_string()));
        }

        let source_kind = store
            .node(source)
            .ok_or_else(|| ConnectError::UnknownSource(source.to_string()))?
            .kind;
        let target_kind = store
            .node(target)
            .ok_or_else(|| ConnectError::UnknownTarget(target.to_string()))?
            .kind;

        if !source_kind.spec().has_source {
            return Err(ConnectError::SourceNotAllowed {
                node_id: source.to_string(),
                kind: source_kind,
            });
        }
        if !target_kind.spec().has_target {
            return Err(ConnectError::TargetNotAllowed {
                node_id: target.to_string(),
                kind: target_kind,
            });
        }

        let edge = Edge::new(source, target);
        store.add_edge(edge.clone());
        Ok(edge)
    }
}
