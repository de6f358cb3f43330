//! Launch sequence: load, normalize, build, run.
//!
//! Every stage runs once, synchronously, on the calling thread. A failing
//! stage is logged once and returned; nothing is retried.

use crate::config::error::ConfigError;
use crate::config::loader::load_config;
use crate::config::normalize::normalize_with_report;
use crate::engine::Pipeline;
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;
use tracing::error;
use tracing::info;

/// Errors that end a launch.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The pipeline could not be built or failed while running.
    #[error("Pipeline failed: {0:#}")]
    Pipeline(anyhow::Error),
}

/// What to launch and how.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Path of the JSON configuration.
    pub config_path: PathBuf,

    /// Rewrite strings naming existing paths into canonical absolute paths.
    pub normalize: bool,

    /// Run the pipeline after building it. When false, only construction is
    /// checked.
    pub run: bool,
}

impl LaunchOptions {
    /// Create options for `config_path` with normalization and execution
    /// enabled.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            normalize: true,
            run: true,
        }
    }

    /// Enable or disable path normalization.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Enable or disable running the pipeline after it is built.
    pub fn with_run(mut self, run: bool) -> Self {
        self.run = run;
        self
    }
}

/// Load the configuration and normalize it when requested.
///
/// # Errors
///
/// Returns `LaunchError::Config` if the file cannot be read, decoded or
/// parsed.
pub fn prepare(options: &LaunchOptions) -> Result<Value, LaunchError> {
    let config = load_config(&options.config_path)?;
    if !options.normalize {
        return Ok(config);
    }

    let normalized = normalize_with_report(&config);
    info!(
        rewritten = normalized.report.rewritten.len(),
        skipped = normalized.report.skipped.len(),
        "Normalized paths in configuration"
    );
    Ok(normalized.value)
}

/// Build a pipeline from `config`.
///
/// # Errors
///
/// Returns `LaunchError::Pipeline` if construction fails.
pub fn build<P: Pipeline>(config: Value) -> Result<P, LaunchError> {
    P::from_json(config).map_err(pipeline_failed)
}

/// Build a pipeline from `config` and run it to completion.
///
/// # Errors
///
/// Returns `LaunchError::Pipeline` if construction or execution fails.
pub fn invoke<P: Pipeline>(config: Value) -> Result<(), LaunchError> {
    let mut pipeline = build::<P>(config)?;
    pipeline.process_linear().map_err(pipeline_failed)
}

/// Run the whole launch sequence described by `options`.
///
/// No pipeline is constructed when loading fails.
///
/// # Errors
///
/// Returns `LaunchError::Config` for load failures and
/// `LaunchError::Pipeline` for construction or execution failures.
///
/// # Example
///
/// ```rust,no_run
/// use rl_core::engine::LinearPipeline;
/// use rl_core::launcher::{launch, LaunchOptions};
///
/// # fn example() -> Result<(), rl_core::launcher::LaunchError> {
/// launch::<LinearPipeline>(&LaunchOptions::new("data.json"))?;
/// # Ok(())
/// # }
/// ```
pub fn launch<P: Pipeline>(options: &LaunchOptions) -> Result<(), LaunchError> {
    let config = prepare(options)?;

    if options.run {
        invoke::<P>(config)
    } else {
        build::<P>(config)?;
        info!(path = %options.config_path.display(), "Pipeline is valid");
        Ok(())
    }
}

fn pipeline_failed(err: anyhow::Error) -> LaunchError {
    let message = format!("{err:#}");
    error!(error = %message, "Pipeline failed");
    LaunchError::Pipeline(err)
}
