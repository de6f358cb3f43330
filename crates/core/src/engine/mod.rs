//! Pipeline construction and execution.
//!
//! The launcher only depends on the [`Pipeline`] contract: build from a
//! configuration value, then run once, synchronously, end to end.
//! [`LinearPipeline`] is the implementation for the node lists written by the
//! editor.

pub mod error;
pub mod executor;
pub mod linear;
pub mod migration;

pub use error::PipelineError;
pub use executor::{DryRunExecutor, NodeExecutor};
pub use linear::LinearPipeline;

use serde_json::Value;

/// A pipeline that can be built from a configuration value and run once.
pub trait Pipeline: Sized {
    /// Build a pipeline from the (possibly normalized) configuration value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not describe a valid pipeline.
    fn from_json(config: Value) -> anyhow::Result<Self>;

    /// Run every step in order.
    ///
    /// # Errors
    ///
    /// Returns the first failure; nothing after it runs.
    fn process_linear(&mut self) -> anyhow::Result<()>;
}
