//! # rl-protocol
//!
//! Data models for the node list that the reline editor writes to
//! `data.json` and the launcher turns into a linear pipeline.
//!
//! ## Modules
//!
//! - [`node_models`]: The tagged node enum and its kind discriminant
//! - [`option_models`]: Per-node option structures and their enums
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde and ts-rs
//! - TypeScript generation: All types derive `TS` so the editor can share them
//! - Independent compilation: No dependencies on other reline crates

pub mod node_models;
pub mod option_models;

// Re-export all public types for convenience
pub use node_models::*;
pub use option_models::*;
