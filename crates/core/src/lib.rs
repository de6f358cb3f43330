//! # rl-core
//!
//! Launcher core for reline.
//!
//! This crate provides:
//! - Loading of the `data.json` pipeline configuration
//! - Path normalization over the parsed JSON value
//! - The `Pipeline` construction/run contract and a linear node pipeline
//! - The launch sequence tying the three together
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading and path normalization
//! - [`engine`]: Pipeline trait, node migration and linear execution
//! - [`launcher`]: Load, normalize, build and run in one call

pub mod config;
pub mod engine;
pub mod launcher;
