//! Graph node output type

use super::layout::Point;
use serde::{Deserialize, Serialize};

/// Role of a node relative to the employee at the center of the graph.
///
/// The rendering surface treats this as the sole source of visual
/// categorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RoleKind {
    /// The employee the graph is built around.
    Current,
    /// A superior at vertical management distance `level` (>= 1).
    Superior { level: u32 },
    Colleague,
    Collaborator,
}

/// A positioned node of the relationship graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    /// Unique within one build. Derived from the node's role and slot,
    /// never from the employee id alone, so the same person appearing
    /// as both colleague and collaborator yields two distinct nodes.
    pub id: String,
    /// Display name.
    pub label: String,
    #[serde(flatten)]
    pub role: RoleKind,
    /// Only set for `RoleKind::Collaborator`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    pub position: Point,
}

impl GraphNode {
    pub(crate) fn new(
        id: String,
        label: impl Into<String>,
        role: RoleKind,
        position: Point,
    ) -> Self {
        GraphNode {
            id,
            label: label.into(),
            role,
            project_name: None,
            position,
        }
    }

    pub(crate) fn with_project(mut self, project_name: Option<String>) -> Self {
        self.project_name = project_name;
        self
    }

    /// Node id for the center node.
    pub(crate) fn current_id() -> String {
        "current".to_string()
    }

    /// Node id for the k-th superior at management level i.
    pub(crate) fn superior_id(level: usize, slot: usize) -> String {
        format!("mgr-{}-{}", level, slot)
    }

    /// Node id for the j-th colleague.
    pub(crate) fn colleague_id(slot: usize) -> String {
        format!("peer-{}", slot)
    }

    /// Node id for the j-th collaborator.
    pub(crate) fn collaborator_id(slot: usize) -> String {
        format!("collab-{}", slot)
    }
}
