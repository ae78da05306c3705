use crate::error::NodeRequestError;
use crate::graph::{Node, NodeKind, NodeStyle, Position};
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Horizontal/vertical distance between the pointer and the top-left corner
/// of a dropped node, so the node lands centered under the cursor.
const POINTER_OFFSET: f64 = 100.0;

/// Default bounds of the region palette-created nodes are scattered into.
const SCATTER_BOUNDS: (f64, f64) = (400.0, 400.0);

/// A node creation request submitted through the palette form.
#[derive(Debug, Clone)]
pub struct PaletteRequest {
    pub kind: NodeKind,
    pub label: String,
    pub color: Option<String>,
}

/// A node creation request produced by dropping a palette entry onto the
/// canvas at a viewport coordinate.
#[derive(Debug, Clone, Copy)]
pub struct DropRequest {
    pub kind: NodeKind,
    pub viewport_x: f64,
    pub viewport_y: f64,
}

/// Builds fully formed [`Node`] records from creation requests.
///
/// Every node gets a freshly minted id: a millisecond wall-clock value with
/// a strictly-monotonic guard, so ids issued within one session are unique
/// and ordered even when two requests land in the same millisecond. The
/// factory never mutates a store; the caller decides what to do with the
/// returned node.
#[derive(Debug, Default)]
pub struct NodeFactory {
    last_id: u64,
}

impl NodeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node from a palette submission.
    ///
    /// An empty label is rejected. Placement is pseudo-random jitter within
    /// a bounded canvas region, which avoids stacking successive palette
    /// nodes on the same spot. A submitted color becomes a per-node style
    /// override with white text.
    pub fn from_palette(&mut self, request: PaletteRequest) -> Result<Node, NodeRequestError> {
        if request.label.is_empty() {
            return Err(NodeRequestError::EmptyLabel);
        }

        let style = request.color.map(|background_color| NodeStyle {
            background_color,
            color: "#fff".to_string(),
        });

        Ok(Node {
            id: self.mint_id(),
            kind: request.kind,
            label: request.label,
            input: String::new(),
            position: Self::scatter(),
            style,
            selected: false,
        })
    }

    /// Creates a node from a pointer-drop event.
    ///
    /// The label defaults to the kind's header text and the node is placed
    /// at the viewport coordinate minus a fixed pointer offset. Non-finite
    /// coordinates are rejected so the finite-position invariant holds at
    /// this entry boundary.
    pub fn from_drop(&mut self, request: DropRequest) -> Result<Node, NodeRequestError> {
        let position = Position::new(
            request.viewport_x - POINTER_OFFSET,
            request.viewport_y - POINTER_OFFSET,
        );
        if !position.is_finite() {
            return Err(NodeRequestError::NonFinitePosition {
                x: request.viewport_x,
                y: request.viewport_y,
            });
        }

        Ok(Node {
            id: self.mint_id(),
            kind: request.kind,
            label: request.kind.spec().header.to_string(),
            input: String::new(),
            position,
            style: None,
            selected: false,
        })
    }

    fn mint_id(&mut self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.last_id = now.max(self.last_id + 1);
        self.last_id.to_string()
    }

    fn scatter() -> Position {
        let mut rng = rand::rng();
        Position::new(
            rng.random_range(0.0..SCATTER_BOUNDS.0),
            rng.random_range(0.0..SCATTER_BOUNDS.1),
        )
    }
}
