//! Graph edge output type
//!
//! Edge ids are derived deterministically from `(kind, source, target)`
//! so that repeated builds on identical input yield an identical
//! edge-id set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relationship type of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeKind {
    /// Superior at level i to its representative parent at level i-1.
    Management,
    /// Center to a colleague.
    Colleague,
    /// Center to a project collaborator.
    Collaboration,
    /// Consecutive colleagues along the ring, a path not a clique.
    ColleagueChain,
    /// Consecutive same-project collaborators, a path not a clique.
    ProjectChain,
}

impl EdgeKind {
    /// Stable slug used in derived edge ids.
    pub fn slug(&self) -> &'static str {
        match self {
            EdgeKind::Management => "mgmt",
            EdgeKind::Colleague => "peer",
            EdgeKind::Collaboration => "collab",
            EdgeKind::ColleagueChain => "peer-chain",
            EdgeKind::ProjectChain => "proj-chain",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// A directed edge of the relationship graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
}

impl GraphEdge {
    pub(crate) fn new(kind: EdgeKind, source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        GraphEdge {
            id: Self::derive_id(kind, &source, &target),
            source,
            target,
            kind,
        }
    }

    /// Deterministic id for the `(kind, source, target)` triple.
    pub fn derive_id(kind: EdgeKind, source: &str, target: &str) -> String {
        format!("{}:{}->{}", kind.slug(), source, target)
    }
}
