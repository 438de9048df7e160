//! Orgnet — organizational relationship graph engine
//!
//! Turns per-employee relation records (who reports to whom, who are
//! peers, who collaborates on which project) into renderable
//! structures:
//!
//! - a **network graph**: uniquely identified nodes with computed 2D
//!   coordinates plus a typed, deduplicated edge set, built by
//!   [`network::NetworkGraphBuilder`];
//! - a **management chain**: the flat ordered "self -> superiors"
//!   sequence for breadcrumb-style display, built by
//!   [`chain::build_chain`].
//!
//! The engine is a pure library: it performs no I/O, keeps no state
//! between builds, and treats both the upstream relation source and
//! the downstream rendering surface as external collaborators. Every
//! anomaly in the input (missing record, unresolved reference,
//! malformed entry) degrades to omission; the strict entry points
//! collect those omissions as [`warning::RelationWarning`]s instead of
//! discarding them.
//!
//! ## Example Usage
//!
//! ```rust
//! use orgnet::network::{NetworkGraphBuilder, RoleKind};
//! use orgnet::relation::{Collaborator, NetworkInput, PersonRef};
//!
//! let input = NetworkInput {
//!     employee: Some(PersonRef::new(1, "Alice")),
//!     management_levels: vec![
//!         vec![PersonRef::new(1, "Alice")],
//!         vec![PersonRef::new(2, "Bob")],
//!     ],
//!     colleagues: vec![PersonRef::new(3, "Cara")],
//!     collaborators: vec![Collaborator::new(4, "Dan", "Atlas")],
//! };
//!
//! let graph = NetworkGraphBuilder::new().build(&input);
//! assert_eq!(graph.nodes.len(), 4);
//! assert!(graph
//!     .nodes
//!     .iter()
//!     .any(|n| n.role == RoleKind::Superior { level: 1 }));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod chain;
pub mod network;
pub mod relation;
pub mod warning;

// Re-export main types for convenience
pub use chain::{build_chain, resolve_chain, ChainEntry, ChainLevel, ChainResolution};

pub use network::{
    BuildReport, EdgeKind, GraphEdge, GraphNode, LayoutConfig, NetworkGraph,
    NetworkGraphBuilder, Point, RoleKind,
};

pub use relation::{Collaborator, EmployeeId, NetworkInput, PersonRef, RelationRecord};

pub use warning::RelationWarning;
