//! Network graph construction
//!
//! Turns one employee's pre-grouped relation bundle into a complete
//! renderable graph: positioned nodes for the employee, their
//! management levels, colleagues and project collaborators, plus the
//! typed, deduplicated edge set connecting them.

use super::edge::{EdgeKind, GraphEdge};
use super::layout::LayoutConfig;
use super::node::{GraphNode, RoleKind};
use crate::relation::NetworkInput;
use crate::warning::RelationWarning;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The renderable output graph. Ephemeral: fully recomputed on every
/// build, never diffed against a previous result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl NetworkGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Output of the strict builder: the graph plus every omission the
/// lenient builder would have discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    pub graph: NetworkGraph,
    pub warnings: Vec<RelationWarning>,
}

/// Accumulates nodes and edges while enforcing the output invariants:
/// node ids are unique per build, edge ids are unique per build, and
/// an edge is only accepted when both endpoints already exist.
#[derive(Default)]
struct GraphAccumulator {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    node_ids: FxHashSet<String>,
    edge_ids: FxHashSet<String>,
}

impl GraphAccumulator {
    fn push_node(&mut self, node: GraphNode) {
        if self.node_ids.insert(node.id.clone()) {
            self.nodes.push(node);
        } else {
            trace!(id = %node.id, "duplicate node id dropped");
        }
    }

    fn push_edge(&mut self, kind: EdgeKind, source: &str, target: &str) {
        if !self.node_ids.contains(source) || !self.node_ids.contains(target) {
            trace!(%kind, source, target, "edge with missing endpoint dropped");
            return;
        }
        let edge = GraphEdge::new(kind, source, target);
        if self.edge_ids.insert(edge.id.clone()) {
            self.edges.push(edge);
        } else {
            trace!(id = %edge.id, "duplicate edge id dropped");
        }
    }

    fn finish(self) -> NetworkGraph {
        NetworkGraph {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}

/// Builds the relationship network graph for one employee.
///
/// A pure function of its input: identical input yields identical
/// node positions and an identical edge-id set.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraphBuilder {
    layout: LayoutConfig,
}

impl NetworkGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with explicit geometry instead of the documented
    /// defaults.
    pub fn with_layout(layout: LayoutConfig) -> Self {
        NetworkGraphBuilder { layout }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Build the graph, discarding warnings about skipped entries.
    pub fn build(&self, input: &NetworkInput) -> NetworkGraph {
        self.build_with_report(input).graph
    }

    /// Build the graph and collect one warning per omitted node/edge
    /// source. The graph is identical to [`build`](Self::build)'s.
    pub fn build_with_report(&self, input: &NetworkInput) -> BuildReport {
        let mut acc = GraphAccumulator::default();
        let mut warnings = Vec::new();

        // No partial graph: without a valid center there is nothing to
        // anchor management rows or rings to.
        let Some((employee_id, employee_name)) =
            input.employee.as_ref().and_then(|e| e.parts())
        else {
            warnings.push(RelationWarning::MalformedEntry {
                context: "employee",
                index: 0,
            });
            return BuildReport {
                graph: NetworkGraph::default(),
                warnings,
            };
        };

        let center_id = GraphNode::current_id();
        acc.push_node(GraphNode::new(
            center_id.clone(),
            employee_name,
            RoleKind::Current,
            self.layout.origin,
        ));

        self.place_management_levels(input, &center_id, &mut acc, &mut warnings);
        self.place_colleagues(input, &center_id, &mut acc, &mut warnings);
        self.place_collaborators(input, &center_id, &mut acc, &mut warnings);

        debug!(
            %employee_id,
            nodes = acc.nodes.len(),
            edges = acc.edges.len(),
            skipped = warnings.len(),
            "network graph built"
        );

        BuildReport {
            graph: acc.finish(),
            warnings,
        }
    }

    /// Management levels 1..N as centered rows above the origin.
    ///
    /// Fan-in convention: every node at level i connects to a single
    /// representative at level i-1 (the center for i = 1, otherwise
    /// the first node emitted at the level below), not to an
    /// individually matched parent. Level indices are positional: a
    /// level that emits nothing still counts toward the vertical
    /// distance of the levels above it, and those levels get no
    /// management edges because there is no representative below them.
    fn place_management_levels(
        &self,
        input: &NetworkInput,
        center_id: &str,
        acc: &mut GraphAccumulator,
        warnings: &mut Vec<RelationWarning>,
    ) {
        // Level 0 is the employee, already emitted as the center node.
        let mut below_first: Option<String> = Some(center_id.to_string());

        for (level, entries) in input.management_levels.iter().enumerate().skip(1) {
            let count = entries.len();
            let mut level_first: Option<String> = None;

            for (slot, entry) in entries.iter().enumerate() {
                let Some((_, name)) = entry.parts() else {
                    warnings.push(RelationWarning::MalformedEntry {
                        context: "management",
                        index: slot,
                    });
                    continue;
                };

                let node_id = GraphNode::superior_id(level, slot);
                // Malformed siblings keep their slot, leaving a gap in
                // the row rather than re-packing it.
                let position = self.layout.level_slot(level, count, slot);
                acc.push_node(GraphNode::new(
                    node_id.clone(),
                    name,
                    RoleKind::Superior {
                        level: level as u32,
                    },
                    position,
                ));

                if let Some(parent) = &below_first {
                    acc.push_edge(EdgeKind::Management, &node_id, parent);
                }
                level_first.get_or_insert(node_id);
            }

            below_first = level_first;
        }
    }

    /// Colleagues on the quarter-circle arc starting at -PI/4, each
    /// with a spoke edge from the center, plus a chain path linking
    /// consecutive colleagues in list order.
    fn place_colleagues(
        &self,
        input: &NetworkInput,
        center_id: &str,
        acc: &mut GraphAccumulator,
        warnings: &mut Vec<RelationWarning>,
    ) {
        let count = input.colleagues.len();
        let mut emitted: Vec<String> = Vec::new();

        for (slot, entry) in input.colleagues.iter().enumerate() {
            let Some((_, name)) = entry.parts() else {
                warnings.push(RelationWarning::MalformedEntry {
                    context: "colleague",
                    index: slot,
                });
                continue;
            };

            let node_id = GraphNode::colleague_id(slot);
            acc.push_node(GraphNode::new(
                node_id.clone(),
                name,
                RoleKind::Colleague,
                self.layout.colleague_slot(count, slot),
            ));
            acc.push_edge(EdgeKind::Colleague, center_id, &node_id);
            emitted.push(node_id);
        }

        for pair in emitted.windows(2) {
            acc.push_edge(EdgeKind::ColleagueChain, &pair[0], &pair[1]);
        }
    }

    /// Collaborators on the mirrored arc starting at PI/2, each with a
    /// spoke edge from the center, plus per-project chain paths.
    /// Cross-project collaborators are never directly linked.
    fn place_collaborators(
        &self,
        input: &NetworkInput,
        center_id: &str,
        acc: &mut GraphAccumulator,
        warnings: &mut Vec<RelationWarning>,
    ) {
        let count = input.collaborators.len();
        // Insertion-ordered grouping keeps project chains in input
        // order.
        let mut by_project: IndexMap<Option<String>, Vec<String>> = IndexMap::new();

        for (slot, entry) in input.collaborators.iter().enumerate() {
            let Some((_, name)) = entry.parts() else {
                warnings.push(RelationWarning::MalformedEntry {
                    context: "collaborator",
                    index: slot,
                });
                continue;
            };

            let node_id = GraphNode::collaborator_id(slot);
            acc.push_node(
                GraphNode::new(
                    node_id.clone(),
                    name,
                    RoleKind::Collaborator,
                    self.layout.collaborator_slot(count, slot),
                )
                .with_project(entry.project_name.clone()),
            );
            acc.push_edge(EdgeKind::Collaboration, center_id, &node_id);

            by_project
                .entry(entry.project_name.clone())
                .or_default()
                .push(node_id);
        }

        for members in by_project.values() {
            for pair in members.windows(2) {
                acc.push_edge(EdgeKind::ProjectChain, &pair[0], &pair[1]);
            }
        }
    }
}
