pub type Result<T> = std::result::Result<T, Error>;

/// Failures that abort a layout run. Only structural contract violations land here;
/// host-side refusals (no model selected, write-back rejected) are reported in-band via
/// [`crate::pipeline::LayoutReport`] and never become an `Err`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] steller_graph::GraphError),
}

/// Host-side refusal during extraction or write-back. Expected, user-facing outcomes; the
/// `Display` text is surfaced verbatim in the layout report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("No current model")]
    NoCurrentModel,

    #[error("{message}")]
    Rejected { message: String },
}
