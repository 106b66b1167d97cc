//! Layered auto-layout for block diagrams.
//!
//! Given a directed graph of blocks and port-addressed signal connections, `steller`
//! computes a left-to-right layered (Sugiyama-style) layout: longest-path layer
//! assignment, barycenter crossing minimization, column/stack coordinate assignment, and
//! orthogonal wire routing. Host model access goes through the narrow
//! [`pipeline::GraphExtractor`] / [`pipeline::ApplySink`] contracts; the algorithmic core
//! has no host dependencies.

pub use steller_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod model;
pub mod order;
pub mod pipeline;
pub mod position;
pub mod rank;
pub mod route;

pub use error::{Error, HostError, Result};
pub use model::{Layout, LayoutOptions, Point, Rect, Route};
pub use pipeline::{
    ApplyOutcome, ApplySink, ExtractedModel, GraphExtractor, LayoutReport, layout, optimize,
};
