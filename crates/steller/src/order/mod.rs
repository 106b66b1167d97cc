//! Node ordering / crossing minimization.
//!
//! Barycenter sweeps over the layer matrix: alternating forward and backward passes
//! reorder each layer by the mean index of its neighbors in the adjacent layer, and the
//! best layering seen (by crossing count) is what survives. The minimizer never returns
//! something worse than its input ordering.

mod barycenter;
mod cross_count;

pub use barycenter::{Relationship, reorder_layer};
pub use cross_count::count_crossings;

use steller_graph::Graph;

/// Crossing totals around one `minimize_crossings` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossingStats {
    pub before: usize,
    pub after: usize,
}

/// Reorders nodes within each layer to reduce edge crossings, holding the layer
/// assignment fixed. Runs at most `max_sweeps` full sweeps (one forward plus one backward
/// pass each), keeps a snapshot of the best layering seen, and restores it at the end, so
/// the result never has more crossings than the input. Stops early at zero crossings.
pub fn minimize_crossings(
    g: &Graph,
    layering: &mut Vec<Vec<String>>,
    max_sweeps: usize,
) -> CrossingStats {
    let before = count_crossings(g, layering);
    if before == 0 || layering.len() < 2 {
        return CrossingStats {
            before,
            after: before,
        };
    }

    let mut best = layering.clone();
    let mut best_cc = before;

    for _ in 0..max_sweeps {
        for l in 1..layering.len() {
            reorder_layer(g, layering, l, Relationship::Predecessors);
        }
        for l in (0..layering.len() - 1).rev() {
            reorder_layer(g, layering, l, Relationship::Successors);
        }

        let cc = count_crossings(g, layering);
        if cc < best_cc {
            best_cc = cc;
            best.clone_from(layering);
        }
        if best_cc == 0 {
            break;
        }
    }

    *layering = best;
    CrossingStats {
        before,
        after: best_cc,
    }
}
