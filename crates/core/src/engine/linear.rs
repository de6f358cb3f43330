//! Linear node pipeline.
//!
//! Nodes run strictly in the order they appear in `data.json`, one at a time,
//! each through the same [`NodeExecutor`]. The first failing node stops the
//! run.

use crate::engine::error::PipelineError;
use crate::engine::executor::DryRunExecutor;
use crate::engine::executor::NodeExecutor;
use crate::engine::migration::migrate_nodes;
use crate::engine::Pipeline;
use rl_protocol::PipelineNode;
use serde_json::Value;
use tracing::info;
use tracing::warn;

/// An ordered list of nodes bound to an executor.
#[derive(Debug)]
pub struct LinearPipeline<E: NodeExecutor = DryRunExecutor> {
    nodes: Vec<PipelineNode>,
    executor: E,
}

impl<E: NodeExecutor> LinearPipeline<E> {
    /// Build a pipeline from a configuration value with a given executor.
    ///
    /// The value is migrated, decoded into nodes and checked for nodes that
    /// need a specific successor.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError` if the value is not an array, a node fails to
    /// decode, or a node is missing its required successor.
    pub fn with_executor(config: Value, executor: E) -> Result<Self, PipelineError> {
        let nodes = parse_nodes(config)?;
        Self::from_nodes(nodes, executor)
    }

    /// Build a pipeline from already decoded nodes.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::DanglingNode` if a node is missing its
    /// required successor.
    pub fn from_nodes(nodes: Vec<PipelineNode>, executor: E) -> Result<Self, PipelineError> {
        validate_sequence(&nodes)?;
        Ok(Self { nodes, executor })
    }

    pub fn nodes(&self) -> &[PipelineNode] {
        &self.nodes
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Run every node in order.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::NodeFailed` for the first node the executor
    /// rejects.
    pub fn run(&mut self) -> Result<(), PipelineError> {
        let total = self.nodes.len();
        if total == 0 {
            warn!("Pipeline has no nodes, nothing to do");
            return Ok(());
        }

        info!(nodes = total, "Starting pipeline");
        for (index, node) in self.nodes.iter().enumerate() {
            let kind = node.kind();
            info!(step = index + 1, total, node = %kind, "Running node");

            self.executor
                .execute(index, node)
                .map_err(|source| PipelineError::NodeFailed {
                    index,
                    kind,
                    source,
                })?;
        }
        info!(nodes = total, "Pipeline completed");

        Ok(())
    }
}

impl<E: NodeExecutor + Default> Pipeline for LinearPipeline<E> {
    fn from_json(config: Value) -> anyhow::Result<Self> {
        Ok(Self::with_executor(config, E::default())?)
    }

    fn process_linear(&mut self) -> anyhow::Result<()> {
        Ok(self.run()?)
    }
}

/// Decode a configuration value into nodes, repairing stale options first.
///
/// # Errors
///
/// Returns `PipelineError::NotANodeList` or `PipelineError::InvalidNode`.
pub fn parse_nodes(mut config: Value) -> Result<Vec<PipelineNode>, PipelineError> {
    let repaired = migrate_nodes(&mut config);
    if repaired > 0 {
        info!(repaired, "Migrated node options from an older editor");
    }

    let items = match config {
        Value::Array(items) => items,
        other => {
            return Err(PipelineError::NotANodeList {
                found: json_type_name(&other),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| PipelineError::InvalidNode { index, source })
        })
        .collect()
}

fn validate_sequence(nodes: &[PipelineNode]) -> Result<(), PipelineError> {
    for (index, node) in nodes.iter().enumerate() {
        let kind = node.kind();
        let Some(expected) = kind.required_successor() else {
            continue;
        };

        let found = nodes.get(index + 1).map(PipelineNode::kind);
        if found != Some(expected) {
            return Err(PipelineError::DanglingNode {
                index,
                kind,
                expected,
                found,
            });
        }
    }
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
