//! Coordinate assignment.
//!
//! Maps (layer, order-within-layer) to bounding boxes: layers become columns marching
//! left to right, nodes stack top to bottom within their column. Gaps are edge-to-edge,
//! so the configured spacing holds between box borders regardless of node sizes. Each
//! column advances past the widest node of the previous layer, which keeps every node in
//! layer L+1 strictly to the right of every node in layer L for any positive spacing.

use crate::model::{LayoutOptions, Rect};
use std::collections::BTreeMap;
use steller_graph::Graph;

pub fn assign_coordinates(
    g: &Graph,
    layering: &[Vec<String>],
    options: &LayoutOptions,
) -> BTreeMap<String, Rect> {
    let mut out: BTreeMap<String, Rect> = BTreeMap::new();

    let mut x_cursor: f64 = 0.0;
    for layer in layering {
        let mut column_width: f64 = 0.0;
        let mut y_cursor: f64 = 0.0;

        for id in layer {
            let Some(node) = g.node(id) else {
                continue;
            };
            out.insert(
                id.clone(),
                Rect {
                    x: x_cursor,
                    y: y_cursor,
                    width: node.width,
                    height: node.height,
                },
            );
            y_cursor += node.height + options.node_sep;
            column_width = column_width.max(node.width);
        }

        x_cursor += column_width + options.layer_sep;
    }

    out
}
