//! Core build logic
//!
//! # Submodules
//!
//! - [`pipeline`] - End-to-end fetch, build, and extract orchestration
//! - [`build`] - The fixed-order module build loop
//! - [`version`] - Version string extraction from build files

pub mod build;
pub mod pipeline;
pub mod version;
