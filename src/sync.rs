use crate::graph::{Edge, GraphStore, Node, Position};
use std::time::{Duration, Instant};

/// Quiet period after the last keystroke before a focused edit is committed
/// without waiting for blur.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Two-speed bridge between the authoritative [`GraphStore`] and the local
/// view buffer the canvas renders from.
///
/// Committing every keystroke and every dragged pixel to the shared store
/// would re-render the whole graph each time; instead, in-progress edits
/// live only in the buffer and are committed when the interaction settles
/// (blur or pointer release, or a debounce window elapsing mid-edit). The
/// price is a bounded staleness window of at most one interaction.
///
/// The buffer is written from two directions: store change notifications
/// ([`refresh`](Self::refresh)) and direct-manipulation input. The sole
/// arbitration rule is the focus/drag check inside `refresh`, re-evaluated
/// against the current interaction state on every call — an authoritative
/// update never clobbers the node the user is currently typing into or
/// dragging. If that node was deleted upstream, deletion wins: the local
/// edit is dropped and the interaction state cleared.
///
/// Time is injected as [`Instant`] arguments; the bridge never reads the
/// clock itself.
#[derive(Debug)]
pub struct CanvasSyncBridge {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    seen_revision: Option<u64>,
    focused: Option<String>,
    dragging: Option<String>,
    last_keystroke: Option<Instant>,
    debounce: Duration,
}

impl CanvasSyncBridge {
    pub fn new() -> Self {
        Self::with_debounce(DEFAULT_DEBOUNCE)
    }

    /// Creates a bridge with a custom debounce window.
    pub fn with_debounce(debounce: Duration) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            seen_revision: None,
            focused: None,
            dragging: None,
            last_keystroke: None,
            debounce,
        }
    }

    /// The node sequence the canvas should render.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The edge sequence the canvas should render.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Pulls the latest committed state from the store into the buffer.
    ///
    /// The buffer is replaced wholesale unless a node is mid-interaction:
    /// the focused node keeps its in-progress `input`, the dragged node its
    /// in-progress `position`.
    pub fn refresh(&mut self, store: &GraphStore) {
        if self.seen_revision == Some(store.revision()) {
            return;
        }

        let kept_input = self
            .focused
            .as_deref()
            .and_then(|id| self.buffer_node(id))
            .map(|n| n.input.clone());
        let kept_position = self
            .dragging
            .as_deref()
            .and_then(|id| self.buffer_node(id))
            .map(|n| n.position);

        self.nodes = store.nodes().to_vec();
        self.edges = store.edges().to_vec();
        self.seen_revision = Some(store.revision());

        if let Some(id) = self.focused.clone() {
            match self.buffer_node_mut(&id) {
                Some(node) => {
                    if let Some(input) = kept_input {
                        node.input = input;
                    }
                }
                None => {
                    self.focused = None;
                    self.last_keystroke = None;
                }
            }
        }
        if let Some(id) = self.dragging.clone() {
            match self.buffer_node_mut(&id) {
                Some(node) => {
                    if let Some(position) = kept_position {
                        node.position = position;
                    }
                }
                None => self.dragging = None,
            }
        }
    }

    /// Marks a node's text field as focused. Unknown ids are ignored.
    pub fn focus(&mut self, node_id: &str) {
        if self.buffer_node(node_id).is_some() {
            self.focused = Some(node_id.to_string());
        }
    }

    /// Id of the node currently being edited, if any.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Records a keystroke into the focused node's text field. Buffer-only;
    /// nothing reaches the store until blur or the debounce window elapses.
    pub fn type_input(&mut self, value: &str, now: Instant) {
        let Some(id) = self.focused.clone() else {
            return;
        };
        if let Some(node) = self.buffer_node_mut(&id) {
            node.input = value.to_string();
            self.last_keystroke = Some(now);
        }
    }

    /// Ends the text interaction (focus loss) and commits the buffered
    /// value to the store.
    pub fn blur(&mut self, store: &mut GraphStore) {
        let Some(id) = self.focused.take() else {
            return;
        };
        self.last_keystroke = None;
        if let Some(value) = self.buffer_node(&id).map(|n| n.input.clone()) {
            store.update_node_input(&id, value);
        }
        self.refresh(store);
    }

    /// Commits a focused edit once the debounce quiet period has elapsed
    /// since the last keystroke. Focus is kept; only the pending value is
    /// flushed. Call this from the host's timer tick.
    pub fn poll(&mut self, store: &mut GraphStore, now: Instant) {
        let Some(last) = self.last_keystroke else {
            return;
        };
        if now.duration_since(last) < self.debounce {
            return;
        }
        self.last_keystroke = None;
        if let Some(id) = self.focused.clone() {
            if let Some(value) = self.buffer_node(&id).map(|n| n.input.clone()) {
                store.update_node_input(&id, value);
            }
            self.refresh(store);
        }
    }

    /// Marks a node as mid-drag. Unknown ids are ignored.
    pub fn drag_start(&mut self, node_id: &str) {
        if self.buffer_node(node_id).is_some() {
            self.dragging = Some(node_id.to_string());
        }
    }

    /// Id of the node currently being dragged, if any.
    pub fn dragging(&self) -> Option<&str> {
        self.dragging.as_deref()
    }

    /// Moves the dragged node in the buffer. Buffer-only until
    /// [`drag_stop`](Self::drag_stop).
    pub fn drag_move(&mut self, position: Position) {
        let Some(id) = self.dragging.clone() else {
            return;
        };
        if let Some(node) = self.buffer_node_mut(&id) {
            node.position = position;
        }
    }

    /// Ends the drag (pointer release) and commits the final position.
    pub fn drag_stop(&mut self, store: &mut GraphStore) {
        let Some(id) = self.dragging.take() else {
            return;
        };
        if let Some(position) = self.buffer_node(&id).map(|n| n.position) {
            store.update_node_position(&id, position);
        }
        self.refresh(store);
    }

    fn buffer_node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    fn buffer_node_mut(&mut self, node_id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == node_id)
    }
}

impl Default for CanvasSyncBridge {
    fn default() -> Self {
        Self::new()
    }
}
