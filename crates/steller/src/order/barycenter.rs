//! Barycenter computation for one layer.

use rustc_hash::FxHashMap;
use steller_graph::Graph;

/// Which adjacent layer feeds the barycenters during a sweep pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    /// Use the layer above (forward pass, layer 0 → max).
    Predecessors,
    /// Use the layer below (backward pass, max → 0).
    Successors,
}

#[derive(Debug, Clone, PartialEq)]
struct BarycenterEntry {
    v: String,
    barycenter: Option<f64>,
}

/// Reorders `layering[layer]` by the mean index of each node's neighbors in the adjacent
/// layer. The sort is stable and nodes with no adjacent-layer neighbors keep their current
/// index, so ties and untethered nodes preserve the previous relative order.
pub fn reorder_layer(
    g: &Graph,
    layering: &mut [Vec<String>],
    layer: usize,
    relationship: Relationship,
) {
    if layering[layer].len() <= 1 {
        return;
    }

    let adjacent = match relationship {
        Relationship::Predecessors if layer > 0 => layer - 1,
        Relationship::Successors if layer + 1 < layering.len() => layer + 1,
        _ => return,
    };

    let mut adjacent_pos: FxHashMap<String, usize> = FxHashMap::default();
    for (i, v) in layering[adjacent].iter().enumerate() {
        adjacent_pos.insert(v.clone(), i);
    }

    let mut entries: Vec<BarycenterEntry> = layering[layer]
        .iter()
        .map(|v| {
            let mut sum: f64 = 0.0;
            let mut count: usize = 0;
            match relationship {
                Relationship::Predecessors => {
                    for e in g.in_edges(v) {
                        if let Some(&pos) = adjacent_pos.get(&e.src) {
                            sum += pos as f64;
                            count += 1;
                        }
                    }
                }
                Relationship::Successors => {
                    for e in g.out_edges(v) {
                        if let Some(&pos) = adjacent_pos.get(&e.dst) {
                            sum += pos as f64;
                            count += 1;
                        }
                    }
                }
            }
            BarycenterEntry {
                v: v.clone(),
                barycenter: (count > 0).then(|| sum / count as f64),
            }
        })
        .collect();

    let keyed: Vec<f64> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| e.barycenter.unwrap_or(i as f64))
        .collect();
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| keyed[a].partial_cmp(&keyed[b]).unwrap_or(std::cmp::Ordering::Equal));

    layering[layer] = order
        .into_iter()
        .map(|i| std::mem::take(&mut entries[i].v))
        .collect();
}
