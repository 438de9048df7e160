//! Network graph builder and layout primitives

pub mod builder;
pub mod edge;
pub mod layout;
pub mod node;

// Re-export main types
pub use builder::{BuildReport, NetworkGraph, NetworkGraphBuilder};
pub use edge::{EdgeKind, GraphEdge};
pub use layout::{LayoutConfig, Point};
pub use node::{GraphNode, RoleKind};
