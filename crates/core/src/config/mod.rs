//! Configuration loading and normalization.
//!
//! This module reads the `data.json` file handed over by the editor and
//! rewrites string values that name existing filesystem entries into their
//! canonical absolute form.

pub mod error;
pub mod loader;
pub mod normalize;
