//! Crossing counter.
//!
//! Counts, for every pair of adjacent layers, the edge pairs whose endpoint orders are
//! inverted between the two layers. Edges spanning more than one layer are not counted:
//! the scope is deliberately adjacent-only, matching the layered left-to-right drawing
//! this engine produces. The per-pair count is the classic accumulator-tree inversion
//! count, O(e log n) per layer pair.

use rustc_hash::FxHashMap;
use steller_graph::Graph;

pub fn count_crossings(g: &Graph, layering: &[Vec<String>]) -> usize {
    (1..layering.len())
        .map(|i| two_layer_cross_count(g, &layering[i - 1], &layering[i]))
        .sum()
}

fn two_layer_cross_count(g: &Graph, north: &[String], south: &[String]) -> usize {
    if north.is_empty() || south.is_empty() {
        return 0;
    }

    let mut south_pos: FxHashMap<&str, usize> = FxHashMap::default();
    for (i, v) in south.iter().enumerate() {
        south_pos.insert(v.as_str(), i);
    }

    // South endpoint positions, northern node by northern node; each node's endpoints
    // sorted so only inter-node inversions count.
    let mut positions: Vec<usize> = Vec::new();
    for v in north {
        let mut endpoints: Vec<usize> = g
            .out_edges(v)
            .filter_map(|e| south_pos.get(e.dst.as_str()).copied())
            .collect();
        endpoints.sort_unstable();
        positions.extend(endpoints);
    }

    let mut first_index: usize = 1;
    while first_index < south.len() {
        first_index <<= 1;
    }
    let tree_size = 2 * first_index - 1;
    first_index -= 1;
    let mut tree: Vec<usize> = vec![0; tree_size];

    let mut cc: usize = 0;
    for pos in positions {
        let mut index = pos + first_index;
        tree[index] += 1;
        let mut sum: usize = 0;
        while index > 0 {
            if index % 2 == 1 {
                sum += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += 1;
        }
        cc += sum;
    }

    cc
}
