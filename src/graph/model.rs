use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of node roles a workflow graph can contain.
///
/// The kind is fixed at creation time and controls the node's connection
/// shape: a `Start` node only emits connections, an `End` node only accepts
/// them, and the remaining kinds do both. Rendering metadata for each kind
/// lives in its [`KindSpec`] table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Start,
    End,
    Text,
    Question,
    Error,
}

/// Static per-kind metadata: header text, input placeholder, default
/// background color, and which connection handles the kind exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSpec {
    pub header: &'static str,
    pub placeholder: &'static str,
    pub background: &'static str,
    pub has_source: bool,
    pub has_target: bool,
}

impl NodeKind {
    /// Every kind, in palette order.
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Start,
        NodeKind::End,
        NodeKind::Text,
        NodeKind::Question,
        NodeKind::Error,
    ];

    /// Looks up the rendering and connection metadata for this kind.
    ///
    /// Adding a new kind means adding a table entry here, not new dispatch
    /// logic elsewhere.
    pub fn spec(self) -> &'static KindSpec {
        match self {
            NodeKind::Start => &KindSpec {
                header: "Start Node",
                placeholder: "Enter text",
                background: "#2E7D32",
                has_source: true,
                has_target: false,
            },
            NodeKind::End => &KindSpec {
                header: "End Node",
                placeholder: "Enter text",
                background: "#424242",
                has_source: false,
                has_target: true,
            },
            NodeKind::Text => &KindSpec {
                header: "Text Node",
                placeholder: "Enter text",
                background: "#1565C0",
                has_source: true,
                has_target: true,
            },
            NodeKind::Question => &KindSpec {
                header: "Question Node",
                placeholder: "Enter question",
                background: "#F57C00",
                has_source: true,
                has_target: true,
            },
            NodeKind::Error => &KindSpec {
                header: "Error Node",
                placeholder: "Enter error message",
                background: "#C62828",
                has_source: true,
                has_target: true,
            },
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Start => "start",
            NodeKind::End => "end",
            NodeKind::Text => "text",
            NodeKind::Question => "question",
            NodeKind::Error => "error",
        };
        f.pad(name)
    }
}

/// A 2D canvas coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite numbers. Non-finite positions are
    /// rejected at every mutation boundary.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A per-node color override, set when a node is created from the palette
/// with an explicit color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    #[serde(rename = "backgroundColor", alias = "background_color")]
    pub background_color: String,
    pub color: String,
}

/// A typed vertex in the workflow graph.
///
/// The serialized shape matches the editor wire format: `kind` travels as
/// the `"type"` field with lowercase kind names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub label: String,
    #[serde(default)]
    pub input: String,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<NodeStyle>,
    #[serde(default)]
    pub selected: bool,
}

/// A directed connection between two node ids.
///
/// Identity is the `(source, target)` pair; parallel duplicates of the same
/// pair are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// True if either endpoint names the given node id.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}
