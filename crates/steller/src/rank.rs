//! Layer assignment (longest-path layering).
//!
//! Kahn's algorithm over the signal graph: in-degree-0 nodes land in layer 0, every other
//! node in 1 + the maximum layer of its predecessors. If a cycle keeps the queue from
//! draining, the remaining nodes are each dropped into layer 0 and treated as independent
//! roots; feedback loops are valid models, so this is approximate handling rather than
//! cycle-breaking. Self-edges never constrain layering.

use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use steller_graph::Graph;

/// Assigns every node to a layer and returns the layer matrix: `result[l]` holds the ids
/// of layer `l`, each layer in node insertion order. Layer 0 is leftmost.
pub fn assign_layers(g: &Graph) -> Vec<Vec<String>> {
    if g.node_count() == 0 {
        return Vec::new();
    }

    let mut remaining: FxHashMap<&str, usize> = g.node_ids().map(|id| (id, 0)).collect();
    for e in g.edges() {
        if e.src == e.dst {
            continue;
        }
        if let Some(count) = remaining.get_mut(e.dst.as_str()) {
            *count += 1;
        }
    }

    let mut layer: FxHashMap<&str, usize> = FxHashMap::default();
    // Highest 1 + predecessor-layer seen so far for nodes not yet assigned.
    let mut tentative: FxHashMap<&str, usize> = FxHashMap::default();

    // Seed in insertion order so ties are deterministic.
    let mut queue: VecDeque<&str> = g
        .node_ids()
        .filter(|id| remaining.get(id) == Some(&0))
        .collect();
    for id in &queue {
        layer.insert(*id, 0);
    }

    while let Some(v) = queue.pop_front() {
        let v_layer = layer.get(v).copied().unwrap_or(0);
        for e in g.out_edges(v) {
            if e.src == e.dst {
                continue;
            }
            let w = e.dst.as_str();
            if layer.contains_key(w) {
                continue;
            }
            let candidate = v_layer + 1;
            let best = tentative.entry(w).or_insert(candidate);
            *best = (*best).max(candidate);

            let Some(count) = remaining.get_mut(w) else {
                continue;
            };
            *count -= 1;
            if *count == 0 {
                layer.insert(w, tentative.get(w).copied().unwrap_or(candidate));
                queue.push_back(w);
            }
        }
    }

    // Cycle fallback: whatever the queue never reached becomes an independent root.
    for id in g.node_ids() {
        layer.entry(id).or_insert(0);
    }

    let max_layer = layer.values().copied().max().unwrap_or(0);
    let mut layers: Vec<Vec<String>> = vec![Vec::new(); max_layer + 1];
    for id in g.node_ids() {
        let l = layer.get(id).copied().unwrap_or(0);
        layers[l].push(id.to_string());
    }
    layers
}
