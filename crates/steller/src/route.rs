//! Orthogonal (Manhattan) wire routing.
//!
//! Each edge gets a polyline from its source output-port anchor to its destination
//! input-port anchor, built only from horizontal and vertical segments. Forward wires
//! (destination to the right) reduce to a straight line or a 3-segment Z; feedback wires
//! detour right of the source, drop below both blocks, and approach the destination from
//! the left. Keeping detours clear of unrelated blocks is best-effort, not guaranteed.

use crate::model::{LayoutOptions, Point, Rect, Route};
use std::collections::BTreeMap;
use steller_graph::{Graph, Node};

/// Anchor of a 1-based output port: on the right edge of the block, ports spread evenly
/// down the edge.
pub fn output_anchor(rect: &Rect, port: usize, out_ports: usize) -> Point {
    Point {
        x: rect.right(),
        y: port_y(rect, port, out_ports),
    }
}

/// Anchor of a 1-based input port: on the left edge of the block.
pub fn input_anchor(rect: &Rect, port: usize, in_ports: usize) -> Point {
    Point {
        x: rect.x,
        y: port_y(rect, port, in_ports),
    }
}

fn port_y(rect: &Rect, port: usize, ports: usize) -> f64 {
    let slots = ports.max(1) as f64;
    rect.y + rect.height * port as f64 / (slots + 1.0)
}

/// Routes every edge of the graph. Edges whose endpoints are missing from `positions` are
/// skipped (the pipeline always supplies a complete map; partial maps can occur when a
/// caller routes against host-provided geometry).
pub fn route_wires(
    g: &Graph,
    positions: &BTreeMap<String, Rect>,
    options: &LayoutOptions,
) -> Vec<Route> {
    g.edges()
        .filter_map(|edge| {
            let src_rect = positions.get(&edge.src)?;
            let dst_rect = positions.get(&edge.dst)?;
            let src_node = g.node(&edge.src)?;
            let dst_node = g.node(&edge.dst)?;
            Some(Route {
                edge: edge.clone(),
                points: route_points(src_rect, src_node, dst_rect, dst_node, edge, options),
            })
        })
        .collect()
}

fn route_points(
    src_rect: &Rect,
    src_node: &Node,
    dst_rect: &Rect,
    dst_node: &Node,
    edge: &steller_graph::Edge,
    options: &LayoutOptions,
) -> Vec<Point> {
    let start = output_anchor(src_rect, edge.src_port, src_node.out_ports);
    let end = input_anchor(dst_rect, edge.dst_port, dst_node.in_ports);

    let mut points = vec![start];
    let push = |points: &mut Vec<Point>, p: Point| {
        if points.last() != Some(&p) {
            points.push(p);
        }
    };

    if end.x > start.x {
        // Normal left-to-right flow: straight wire when the anchors line up, otherwise a
        // Z through the midpoint between the facing block edges.
        if start.y != end.y {
            let mid_x = (start.x + end.x) / 2.0;
            push(&mut points, Point { x: mid_x, y: start.y });
            push(&mut points, Point { x: mid_x, y: end.y });
        }
        push(&mut points, end);
    } else {
        // Feedback: out past the source, down to a lane below both blocks, back past the
        // destination's left edge, then in from the left.
        let margin = options.edge_margin.max(1.0);
        let out_x = start.x + margin;
        let lane_y = src_rect.bottom().max(dst_rect.bottom()) + margin;
        let in_x = dst_rect.x - margin;

        push(&mut points, Point { x: out_x, y: start.y });
        push(&mut points, Point { x: out_x, y: lane_y });
        push(&mut points, Point { x: in_x, y: lane_y });
        push(&mut points, Point { x: in_x, y: end.y });
        push(&mut points, end);
    }

    points
}
