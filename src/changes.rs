use crate::graph::{GraphStore, Position};

/// One incremental change record from the direct-manipulation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeChange {
    Move { id: String, position: Position },
    Remove { id: String },
    Select { id: String },
}

/// Folds a batch of visual-layer changes into store-shaped mutations.
///
/// The batch is applied in arrival order against a working copy of the node
/// sequence, then committed wholesale through [`GraphStore::set_nodes`]. A
/// `Remove` followed by a `Move` of the same id in one batch drops the move:
/// the node no longer exists in the working copy. When any node was removed
/// the orphaned edges are pruned in the same call, so the committed state
/// never exposes a dangling edge.
pub struct ChangeApplier;

impl ChangeApplier {
    pub fn apply(store: &mut GraphStore, changes: &[NodeChange]) {
        let mut next = store.nodes().to_vec();
        let mut removed_any = false;

        for change in changes {
            match change {
                NodeChange::Move { id, position } => {
                    if !position.is_finite() {
                        continue;
                    }
                    if let Some(node) = next.iter_mut().find(|n| n.id == *id) {
                        node.position = *position;
                    }
                }
                NodeChange::Remove { id } => {
                    next.retain(|n| n.id != *id);
                    removed_any = true;
                }
                // Single-selection canvas: selecting a node deselects the rest.
                NodeChange::Select { id } => {
                    for node in &mut next {
                        node.selected = node.id == *id;
                    }
                }
            }
        }

        store.set_nodes(next);
        if removed_any {
            store.prune_edges();
        }
    }
}
