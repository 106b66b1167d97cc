//! Geometry primitives and layout configuration.
//!
//! Coordinates live in the host's space: origin top-left, y increasing downward. Positions
//! are full bounding boxes (not centers) because that is what the write-back adapter sets
//! on the model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default gap, in pixels, between adjacent layers and between stacked nodes. Matches the
/// host tool's default `Spacing` argument.
pub const DEFAULT_SPACING: f64 = 50.0;

/// Default clearance used when a feedback wire detours around its endpoints.
pub const DEFAULT_EDGE_MARGIN: f64 = 20.0;

/// Default bound on barycenter sweep iterations.
pub const DEFAULT_SWEEPS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Knobs for one layout run. `with_spacing` is the single-knob form the host exposes; the
/// individual gaps can be overridden afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Horizontal gap between adjacent layers, edge to edge.
    pub layer_sep: f64,
    /// Vertical gap between stacked nodes within a layer, edge to edge.
    pub node_sep: f64,
    /// Clearance for feedback-wire detours.
    pub edge_margin: f64,
    /// Upper bound on barycenter sweep iterations. The minimizer may stop earlier when it
    /// reaches zero crossings.
    pub sweeps: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            layer_sep: DEFAULT_SPACING,
            node_sep: DEFAULT_SPACING,
            edge_margin: DEFAULT_EDGE_MARGIN,
            sweeps: DEFAULT_SWEEPS,
        }
    }
}

impl LayoutOptions {
    /// One spacing value driving both the horizontal and vertical gaps.
    pub fn with_spacing(spacing: f64) -> Self {
        Self {
            layer_sep: spacing,
            node_sep: spacing,
            ..Self::default()
        }
    }
}

/// Computed wire path for one edge: ≥2 waypoints, consecutive waypoints differing in
/// exactly one axis, first/last waypoint on the source/destination port anchors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub edge: steller_graph::Edge,
    pub points: Vec<Point>,
}

/// Result of the pure layout pipeline. Owned by one run; positions iterate in id order so
/// write-back is deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    pub positions: BTreeMap<String, Rect>,
    pub routes: Vec<Route>,
}

impl Layout {
    /// Bounding box of the whole diagram: every placed node and every wire waypoint.
    /// `None` when nothing was placed.
    pub fn bounds(&self) -> Option<Rect> {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for rect in self.positions.values() {
            min_x = min_x.min(rect.x);
            min_y = min_y.min(rect.y);
            max_x = max_x.max(rect.right());
            max_y = max_y.max(rect.bottom());
        }
        for route in &self.routes {
            for p in &route.points {
                min_x = min_x.min(p.x);
                min_y = min_y.min(p.y);
                max_x = max_x.max(p.x);
                max_y = max_y.max(p.y);
            }
        }

        if min_x > max_x {
            return None;
        }
        Some(Rect {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        })
    }
}
