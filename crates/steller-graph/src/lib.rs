//! Graph container APIs used by `steller`.
//!
//! Models a block diagram as extracted from a host model: blocks with numbered input/output
//! ports and directed signal connections between specific ports. Node iteration is in
//! insertion order; that order is the deterministic tie-break for everything downstream
//! (layer assignment and initial intra-layer order), so extractors should insert blocks in
//! the order the host reports them.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Fallback block size when the host does not report one.
pub const DEFAULT_NODE_WIDTH: f64 = 60.0;
pub const DEFAULT_NODE_HEIGHT: f64 = 30.0;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Structural contract violations. These indicate extractor bugs (inconsistent host data),
/// not user-recoverable situations, and abort the layout run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("duplicate node id: {id}")]
    DuplicateNode { id: String },

    #[error("edge references unknown node: {id}")]
    UnknownNode { id: String },
}

/// One block. `width`/`height` come from the host when known, otherwise the defaults above.
/// `handle` is an opaque host payload carried through untouched; the layout passes never
/// read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub in_ports: usize,
    pub out_ports: usize,
    pub width: f64,
    pub height: f64,
    pub handle: Option<serde_json::Value>,
}

impl Node {
    pub fn new(id: impl Into<String>, in_ports: usize, out_ports: usize) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            in_ports,
            out_ports,
            width: DEFAULT_NODE_WIDTH,
            height: DEFAULT_NODE_HEIGHT,
            handle: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_handle(mut self, handle: serde_json::Value) -> Self {
        self.handle = Some(handle);
        self
    }
}

/// One signal connection. Port indices are 1-based, matching the host convention. Parallel
/// edges between the same pair of nodes are allowed and kept distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub src: String,
    pub src_port: usize,
    pub dst: String,
    pub dst_port: usize,
}

impl Edge {
    pub fn new(
        src: impl Into<String>,
        src_port: usize,
        dst: impl Into<String>,
        dst_port: usize,
    ) -> Self {
        Self {
            src: src.into(),
            src_port,
            dst: dst.into(),
            dst_port,
        }
    }
}

/// Directed block/signal graph. Nodes and edges are stored in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    node_index: FxHashMap<String, usize>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Inserts a node. Ids must be unique within one graph instance.
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if self.node_index.contains_key(&node.id) {
            return Err(GraphError::DuplicateNode {
                id: node.id.clone(),
            });
        }
        let idx = self.nodes.len();
        self.node_index.insert(node.id.clone(), idx);
        self.nodes.push(node);
        Ok(())
    }

    /// Inserts an edge. Both endpoints must already be present; port bounds are trusted
    /// (the host supplies them alongside the port counts).
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        if !self.node_index.contains_key(&edge.src) {
            return Err(GraphError::UnknownNode {
                id: edge.src.clone(),
            });
        }
        if !self.node_index.contains_key(&edge.dst) {
            return Err(GraphError::UnknownNode {
                id: edge.dst.clone(),
            });
        }
        self.edges.push(edge);
        Ok(())
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn out_edges<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> {
        self.edges.iter().filter(move |e| e.src == id)
    }

    pub fn in_edges<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> {
        self.edges.iter().filter(move |e| e.dst == id)
    }

    pub fn successors<'a>(&'a self, id: &'a str) -> Vec<&'a str> {
        self.out_edges(id).map(|e| e.dst.as_str()).collect()
    }

    pub fn predecessors<'a>(&'a self, id: &'a str) -> Vec<&'a str> {
        self.in_edges(id).map(|e| e.src.as_str()).collect()
    }

    pub fn in_degree(&self, id: &str) -> usize {
        self.in_edges(id).count()
    }

    /// Nodes with no incoming edges, in insertion order.
    pub fn sources(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| self.in_degree(&n.id) == 0)
            .map(|n| n.id.as_str())
            .collect()
    }
}
