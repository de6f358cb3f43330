//! Error types for building and running a linear pipeline.

use rl_protocol::NodeKind;
use thiserror::Error;

/// Errors that can occur while building or running a [`LinearPipeline`].
///
/// [`LinearPipeline`]: crate::engine::LinearPipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The configuration is not a JSON array of nodes.
    #[error("Pipeline configuration must be an array of nodes, found {found}")]
    NotANodeList { found: &'static str },

    /// A node could not be decoded.
    #[error("Invalid node at index {index}: {source}")]
    InvalidNode {
        index: usize,
        source: serde_json::Error,
    },

    /// A node that prepares its successor is not followed by it.
    #[error("Node {kind} at index {index} must be followed by {expected}, found {}", .found.map_or("end of pipeline", NodeKind::as_str))]
    DanglingNode {
        index: usize,
        kind: NodeKind,
        expected: NodeKind,
        found: Option<NodeKind>,
    },

    /// The executor failed on a node.
    #[error("Node {kind} at index {index} failed")]
    NodeFailed {
        index: usize,
        kind: NodeKind,
        source: anyhow::Error,
    },
}
