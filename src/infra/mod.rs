//! Infrastructure layer
//!
//! External process invocation: git for fetching sources and the Gradle
//! wrapper for building modules. This module is the only place where
//! subprocesses are spawned.

pub mod git;
pub mod gradle;
