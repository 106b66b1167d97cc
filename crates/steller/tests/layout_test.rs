use std::collections::HashSet;
use steller::{
    ApplyOutcome, ApplySink, Error, ExtractedModel, GraphExtractor, HostError, Layout,
    LayoutOptions, layout, optimize,
};
use steller_graph::{Edge, Graph, GraphError, Node};

#[derive(Default)]
struct MockHost {
    model: Option<ExtractedModel>,
    /// Blocks that vanished between extraction and apply.
    missing: HashSet<String>,
    applied_blocks: Vec<String>,
}

impl GraphExtractor for MockHost {
    fn extract(&mut self) -> Result<ExtractedModel, HostError> {
        self.model.clone().ok_or(HostError::NoCurrentModel)
    }
}

impl ApplySink for MockHost {
    fn apply(&mut self, layout: &Layout) -> ApplyOutcome {
        if self.model.is_none() {
            return ApplyOutcome::rejected(HostError::NoCurrentModel.to_string());
        }
        let mut blocks = 0;
        for id in layout.positions.keys() {
            if self.missing.contains(id) {
                continue;
            }
            self.applied_blocks.push(id.clone());
            blocks += 1;
        }
        ApplyOutcome {
            success: true,
            blocks_processed: blocks,
            edges_processed: layout.routes.len(),
            message: "layout applied".to_string(),
        }
    }
}

fn diamond_model() -> ExtractedModel {
    ExtractedModel {
        nodes: vec![
            Node::new("source", 0, 1),
            Node::new("gain1", 1, 1),
            Node::new("gain2", 1, 1),
            Node::new("sum", 2, 1),
            Node::new("scope", 1, 0),
        ],
        edges: vec![
            Edge::new("source", 1, "gain1", 1),
            Edge::new("source", 1, "gain2", 1),
            Edge::new("gain1", 1, "sum", 1),
            Edge::new("gain2", 1, "sum", 2),
            Edge::new("sum", 1, "scope", 1),
        ],
    }
}

fn diamond_graph() -> Graph {
    let model = diamond_model();
    let mut g = Graph::new();
    for node in model.nodes {
        g.add_node(node).unwrap();
    }
    for edge in model.edges {
        g.add_edge(edge).unwrap();
    }
    g
}

#[test]
fn optimize_lays_out_and_applies_a_model() {
    let mut host = MockHost {
        model: Some(diamond_model()),
        ..Default::default()
    };

    let report = optimize(&mut host, &LayoutOptions::default()).unwrap();
    assert!(report.success);
    assert_eq!(report.blocks_processed, 5);
    assert_eq!(report.edges_processed, 5);
    assert_eq!(host.applied_blocks.len(), 5);
}

#[test]
fn optimize_without_a_model_reports_failure_instead_of_erroring() {
    let mut host = MockHost::default();

    let report = optimize(&mut host, &LayoutOptions::default()).unwrap();
    assert!(!report.success);
    assert!(report.message.contains("No current model"));
    assert_eq!(report.blocks_processed, 0);
    assert!(host.applied_blocks.is_empty());
}

#[test]
fn apply_without_a_model_returns_a_rejection_outcome() {
    let mut host = MockHost::default();

    let outcome = host.apply(&Layout::default());
    assert!(!outcome.success);
    assert!(outcome.message.contains("No current model"));
}

#[test]
fn apply_skips_blocks_that_disappeared_and_continues() {
    let mut host = MockHost {
        model: Some(diamond_model()),
        missing: HashSet::from(["gain2".to_string()]),
        ..Default::default()
    };

    let report = optimize(&mut host, &LayoutOptions::default()).unwrap();
    assert!(report.success);
    assert_eq!(report.blocks_processed, 4);
    assert!(!host.applied_blocks.contains(&"gain2".to_string()));
}

#[test]
fn a_duplicate_block_id_aborts_the_run() {
    let mut model = diamond_model();
    model.nodes.push(Node::new("sum", 2, 1));
    let mut host = MockHost {
        model: Some(model),
        ..Default::default()
    };

    let err = optimize(&mut host, &LayoutOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Graph(GraphError::DuplicateNode { ref id }) if id == "sum"
    ));
}

#[test]
fn a_connection_to_an_unknown_block_aborts_the_run() {
    let mut model = diamond_model();
    model.edges.push(Edge::new("scope", 1, "phantom", 1));
    let mut host = MockHost {
        model: Some(model),
        ..Default::default()
    };

    let err = optimize(&mut host, &LayoutOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Graph(GraphError::UnknownNode { ref id }) if id == "phantom"
    ));
}

#[test]
fn layout_is_idempotent_for_an_unchanged_graph() {
    let g = diamond_graph();
    let options = LayoutOptions::with_spacing(80.0);

    let first = layout(&g, &options);
    let second = layout(&g, &options);
    assert_eq!(first, second);
}

#[test]
fn layout_covers_every_block_and_connection() {
    let g = diamond_graph();
    let computed = layout(&g, &LayoutOptions::default());

    assert_eq!(computed.positions.len(), g.node_count());
    assert_eq!(computed.routes.len(), g.edge_count());
}

#[test]
fn bounds_cover_all_placed_geometry() {
    let g = diamond_graph();
    let computed = layout(&g, &LayoutOptions::default());

    let bounds = computed.bounds().unwrap();
    for rect in computed.positions.values() {
        assert!(rect.x >= bounds.x && rect.right() <= bounds.x + bounds.width);
        assert!(rect.y >= bounds.y && rect.bottom() <= bounds.y + bounds.height);
    }
    for route in &computed.routes {
        for p in &route.points {
            assert!(p.x >= bounds.x && p.x <= bounds.x + bounds.width);
            assert!(p.y >= bounds.y && p.y <= bounds.y + bounds.height);
        }
    }
}

#[test]
fn bounds_are_empty_for_an_empty_graph() {
    let computed = layout(&Graph::new(), &LayoutOptions::default());
    assert!(computed.bounds().is_none());
    assert!(computed.positions.is_empty());
    assert!(computed.routes.is_empty());
}
