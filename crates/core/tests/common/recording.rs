//! Recording pipeline and executor used to observe what the launcher hands
//! over.

use rl_core::engine::NodeExecutor;
use rl_core::engine::Pipeline;
use rl_protocol::PipelineNode;
use serde_json::Value;
use std::cell::RefCell;

thread_local! {
    static BUILT: RefCell<Vec<Value>> = const { RefCell::new(Vec::new()) };
    static RUNS: RefCell<usize> = const { RefCell::new(0) };
}

/// Pipeline that records every configuration it is built from.
///
/// Records are kept per test thread; call [`reset_recording`] first.
pub struct RecordingPipeline;

impl Pipeline for RecordingPipeline {
    fn from_json(config: Value) -> anyhow::Result<Self> {
        BUILT.with(|built| built.borrow_mut().push(config));
        Ok(RecordingPipeline)
    }

    fn process_linear(&mut self) -> anyhow::Result<()> {
        RUNS.with(|runs| *runs.borrow_mut() += 1);
        Ok(())
    }
}

#[allow(dead_code)]
pub fn reset_recording() {
    BUILT.with(|built| built.borrow_mut().clear());
    RUNS.with(|runs| *runs.borrow_mut() = 0);
}

/// Configurations passed to `RecordingPipeline::from_json` on this thread.
#[allow(dead_code)]
pub fn built_configs() -> Vec<Value> {
    BUILT.with(|built| built.borrow().clone())
}

/// Number of `process_linear` calls on this thread.
#[allow(dead_code)]
pub fn run_count() -> usize {
    RUNS.with(|runs| *runs.borrow())
}

/// Executor that keeps a copy of every node it is asked to run.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub nodes: Vec<PipelineNode>,
}

impl NodeExecutor for RecordingExecutor {
    fn execute(&mut self, _index: usize, node: &PipelineNode) -> anyhow::Result<()> {
        self.nodes.push(node.clone());
        Ok(())
    }
}
