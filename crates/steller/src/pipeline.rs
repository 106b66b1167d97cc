//! Layout orchestration and host collaborator contracts.
//!
//! The engine never talks to a model document directly. A [`GraphExtractor`] reads the
//! host model into block/connection lists (called exactly once per run) and an
//! [`ApplySink`] writes computed positions and wire paths back. Host refusals on either
//! side ("No current model", write-back rejected) are normal, user-facing outcomes and
//! come back inside the [`LayoutReport`]; only structural contract violations in the
//! extracted data (duplicate ids, edges to unknown blocks) abort with an error.
//!
//! Each call rebuilds the graph from scratch, so the engine holds no state between runs:
//! rerunning on an unchanged model reproduces the same positions and routes exactly.

use crate::error::{HostError, Result};
use crate::model::{Layout, LayoutOptions};
use crate::{order, position, rank, route};
use serde::{Deserialize, Serialize};
use steller_graph::{Edge, Graph, Node};
use tracing::debug;

/// What one extraction pass yields: blocks and connections in host report order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedModel {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Reads the host model. Called exactly once per [`optimize`] run, before layering.
pub trait GraphExtractor {
    fn extract(&mut self) -> std::result::Result<ExtractedModel, HostError>;
}

/// Writes positions and wire geometry back to the host model. Must not panic: a block
/// that disappeared since extraction is skipped and the rest of the apply continues.
pub trait ApplySink {
    fn apply(&mut self, layout: &Layout) -> ApplyOutcome;
}

/// Structured write-back result. `message` carries the user-facing explanation when
/// `success` is false.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplyOutcome {
    pub success: bool,
    pub blocks_processed: usize,
    pub edges_processed: usize,
    pub message: String,
}

impl ApplyOutcome {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            blocks_processed: 0,
            edges_processed: 0,
            message: message.into(),
        }
    }
}

/// Final result of one `optimize` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutReport {
    pub success: bool,
    pub blocks_processed: usize,
    pub edges_processed: usize,
    pub message: String,
}

/// The pure pipeline: layering, crossing minimization, coordinates, routing. No host
/// involvement; deterministic and idempotent for a given graph and options.
pub fn layout(g: &Graph, options: &LayoutOptions) -> Layout {
    let mut layering = rank::assign_layers(g);
    debug!(
        nodes = g.node_count(),
        edges = g.edge_count(),
        layers = layering.len(),
        "assigned layers"
    );

    let stats = order::minimize_crossings(g, &mut layering, options.sweeps);
    debug!(before = stats.before, after = stats.after, "minimized crossings");

    let positions = position::assign_coordinates(g, &layering, options);
    let routes = route::route_wires(g, &positions, options);

    Layout { positions, routes }
}

/// Full run against a host: extract, lay out, write back. Host refusals surface in the
/// report with `success: false`; extraction contract violations return `Err`.
pub fn optimize<H>(host: &mut H, options: &LayoutOptions) -> Result<LayoutReport>
where
    H: GraphExtractor + ApplySink,
{
    let model = match host.extract() {
        Ok(model) => model,
        Err(err) => {
            debug!(error = %err, "extraction refused");
            return Ok(LayoutReport {
                success: false,
                blocks_processed: 0,
                edges_processed: 0,
                message: err.to_string(),
            });
        }
    };

    let mut g = Graph::new();
    for node in model.nodes {
        g.add_node(node)?;
    }
    for edge in model.edges {
        g.add_edge(edge)?;
    }

    let computed = layout(&g, options);
    let outcome = host.apply(&computed);
    debug!(
        success = outcome.success,
        blocks = outcome.blocks_processed,
        edges = outcome.edges_processed,
        "applied layout"
    );

    Ok(LayoutReport {
        success: outcome.success,
        blocks_processed: outcome.blocks_processed,
        edges_processed: outcome.edges_processed,
        message: outcome.message,
    })
}
