//! Layout primitives
//!
//! Deterministic placement math shared by the network graph builder:
//! centered horizontal rows for management levels, and quarter-circle
//! arcs around the origin for colleague and collaborator rings.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// A 2D coordinate in the rendering surface's coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Geometry configuration for the network graph builder.
///
/// All placement is relative to `origin`, the position of the center
/// node. Tests can vary the geometry without touching the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Position of the center (current employee) node.
    pub origin: Point,
    /// Horizontal gap between sibling nodes at the same management level.
    pub node_spacing: f64,
    /// Vertical gap between consecutive management levels.
    pub level_spacing: f64,
    /// Distance of the colleague and collaborator rings from the origin.
    pub radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            origin: Point::new(400.0, 300.0),
            node_spacing: 160.0,
            level_spacing: 120.0,
            radius: 220.0,
        }
    }
}

impl LayoutConfig {
    /// Position of the `slot`-th entry (0-based) in a management level
    /// of `count` entries, at vertical distance `level` above the
    /// origin. The row is centered on the origin's x coordinate.
    pub fn level_slot(&self, level: usize, count: usize, slot: usize) -> Point {
        let span = count as f64 * self.node_spacing;
        let start_x = self.origin.x - span / 2.0 + self.node_spacing / 2.0;
        Point::new(
            start_x + slot as f64 * self.node_spacing,
            self.origin.y - level as f64 * self.level_spacing,
        )
    }

    /// Angular step for a ring of `count` nodes. Capped at a quarter
    /// circle so the total spread never exceeds PI/2 regardless of
    /// `count`.
    pub fn ring_step(count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        (FRAC_PI_2 / count as f64).min(FRAC_PI_2)
    }

    /// Position of the `slot`-th colleague on the right-hand arc,
    /// starting at -PI/4.
    pub fn colleague_slot(&self, count: usize, slot: usize) -> Point {
        let angle = -FRAC_PI_4 + slot as f64 * Self::ring_step(count);
        self.on_ring(angle)
    }

    /// Position of the `slot`-th collaborator on the arc mirrored to
    /// the opposite side, starting at PI/2.
    pub fn collaborator_slot(&self, count: usize, slot: usize) -> Point {
        let angle = FRAC_PI_2 + slot as f64 * Self::ring_step(count);
        self.on_ring(angle)
    }

    fn on_ring(&self, angle: f64) -> Point {
        Point::new(
            self.origin.x + self.radius * angle.cos(),
            self.origin.y + self.radius * angle.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_row_is_centered() {
        let cfg = LayoutConfig::default();

        // Single entry sits exactly on the origin's x.
        let p = cfg.level_slot(1, 1, 0);
        assert_eq!(p.x, cfg.origin.x);
        assert_eq!(p.y, cfg.origin.y - cfg.level_spacing);

        // Two entries straddle the origin symmetrically.
        let left = cfg.level_slot(1, 2, 0);
        let right = cfg.level_slot(1, 2, 1);
        assert_eq!((left.x + right.x) / 2.0, cfg.origin.x);
        assert_eq!(right.x - left.x, cfg.node_spacing);
    }

    #[test]
    fn test_level_distance_scales_with_index() {
        let cfg = LayoutConfig::default();
        let p1 = cfg.level_slot(1, 1, 0);
        let p2 = cfg.level_slot(2, 1, 0);
        assert_eq!(p1.y - p2.y, cfg.level_spacing);
    }

    #[test]
    fn test_ring_step_guard() {
        // A single node would naively get a PI/2 step; the guard caps
        // it there, and larger rings shrink the step.
        assert_eq!(LayoutConfig::ring_step(1), FRAC_PI_2);
        assert_eq!(LayoutConfig::ring_step(2), FRAC_PI_2 / 2.0);
        assert_eq!(LayoutConfig::ring_step(50), FRAC_PI_2 / 50.0);
        assert_eq!(LayoutConfig::ring_step(0), 0.0);
    }

    #[test]
    fn test_ring_spread_never_exceeds_quarter_circle() {
        for count in [1usize, 2, 5, 50] {
            let spread = (count - 1) as f64 * LayoutConfig::ring_step(count);
            assert!(spread <= FRAC_PI_2, "spread {} for count {}", spread, count);
        }
    }

    #[test]
    fn test_nodes_sit_on_the_ring() {
        let cfg = LayoutConfig::default();
        for slot in 0..5 {
            let p = cfg.colleague_slot(5, slot);
            let dx = p.x - cfg.origin.x;
            let dy = p.y - cfg.origin.y;
            let dist = (dx * dx + dy * dy).sqrt();
            assert!((dist - cfg.radius).abs() < 1e-9);
        }
    }

    #[test]
    fn test_collaborators_mirror_colleagues() {
        let cfg = LayoutConfig::default();
        // First colleague sits at -PI/4 (right side, above the axis);
        // first collaborator at PI/2 (straight below the origin).
        let peer = cfg.colleague_slot(1, 0);
        assert!(peer.x > cfg.origin.x);
        let collab = cfg.collaborator_slot(1, 0);
        assert!((collab.x - cfg.origin.x).abs() < 1e-9);
        assert!((collab.y - (cfg.origin.y + cfg.radius)).abs() < 1e-9);
    }
}
