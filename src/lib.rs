//! verup - version ordering and update selection library
//!
//! This library provides the core functionality for deciding which version
//! an artifact should move to:
//! - Parsing and totally ordering free-form version strings
//! - Classifying the coarsest segment that changes between two versions
//! - Parsing, matching and intersecting version ranges
//! - Selecting the best candidate under an update policy

pub mod cli;
pub mod domain;
pub mod error;
pub mod input;
pub mod orchestrator;
pub mod output;
pub mod update;
pub mod version;
