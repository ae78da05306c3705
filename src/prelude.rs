//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the nagare crate so a
//! single import brings the whole editing surface into scope.
//!
//! # Example
//!
//! ```rust
//! use nagare::prelude::*;
//!
//! let mut store = GraphStore::new();
//! let mut bridge = CanvasSyncBridge::new();
//! bridge.refresh(&store);
//! assert!(bridge.nodes().is_empty());
//! ```

// Authoritative graph state
pub use crate::graph::{Edge, GraphSnapshot, GraphStore, KindSpec, Node, NodeKind, NodeStyle, Position};

// Node creation and connection
pub use crate::connect::EdgeConnector;
pub use crate::factory::{DropRequest, NodeFactory, PaletteRequest};

// View synchronization
pub use crate::changes::{ChangeApplier, NodeChange};
pub use crate::sync::{CanvasSyncBridge, DEFAULT_DEBOUNCE};

// Error types
pub use crate::error::{ConnectError, GraphError, NodeRequestError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
