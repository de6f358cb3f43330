//! Common test utilities for launcher integration tests.
//!
//! This module provides shared functionality across the integration tests:
//! - Test fixtures (editor-style `data.json` projects)
//! - Recording pipelines and executors

pub mod fixtures;
pub mod recording;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use recording::*;
