//! # Nagare - Workflow Graph State Engine
//!
//! **Nagare** is the state model behind a visual workflow builder: typed
//! nodes (Start, End, Text, Question, Error) dropped onto a canvas, wired
//! together with directed connections, repositioned, edited, and deleted
//! with automatic cleanup of dangling connections. It holds and edits a
//! graph in memory; it does not execute one.
//!
//! ## Core Workflow
//!
//! The engine separates an authoritative store from the rapidly-mutating
//! view the canvas renders:
//!
//! 1. **Create**: a palette submission or pointer-drop payload goes through
//!    the [`NodeFactory`](factory::NodeFactory), which mints an id and
//!    builds a fully formed node record.
//! 2. **Connect**: a connect gesture goes through the
//!    [`EdgeConnector`](connect::EdgeConnector), which validates endpoints
//!    before the edge reaches the store.
//! 3. **Mutate**: the [`GraphStore`](graph::GraphStore) applies every
//!    mutation as a single atomic transition and re-derives affected edges
//!    (deleting a node cascades to its connections).
//! 4. **Synchronize**: the [`CanvasSyncBridge`](sync::CanvasSyncBridge)
//!    keeps typing and dragging responsive by buffering in-progress edits
//!    locally and committing them when the interaction settles; the
//!    [`ChangeApplier`](changes::ChangeApplier) folds batched visual
//!    changes back into the same cycle.
//!
//! ## Quick Start
//!
//! ```rust
//! use nagare::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut store = GraphStore::new();
//!     let mut factory = NodeFactory::new();
//!
//!     // Drop a start node and an end node onto the canvas.
//!     let start = factory.from_drop(DropRequest {
//!         kind: NodeKind::Start,
//!         viewport_x: 200.0,
//!         viewport_y: 150.0,
//!     })?;
//!     let end = factory.from_drop(DropRequest {
//!         kind: NodeKind::End,
//!         viewport_x: 500.0,
//!         viewport_y: 150.0,
//!     })?;
//!     let (start_id, end_id) = (start.id.clone(), end.id.clone());
//!     store.add_node(start)?;
//!     store.add_node(end)?;
//!
//!     // Wire them together; the connector validates the endpoints.
//!     EdgeConnector::connect(&mut store, &start_id, &end_id)?;
//!     assert_eq!(store.edges().len(), 1);
//!
//!     // Deleting a node cascades to its connections.
//!     store.delete_node(&start_id);
//!     assert_eq!(store.nodes().len(), 1);
//!     assert!(store.edges().is_empty());
//!
//!     Ok(())
//! }
//! ```

pub mod changes;
pub mod connect;
pub mod error;
pub mod factory;
pub mod graph;
pub mod prelude;
pub mod sync;
