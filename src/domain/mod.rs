//! Core domain models for verup
//!
//! This module contains the fundamental types used throughout the application:
//! - Segment granularities of a version
//! - Update constraint policy bundle
//! - Update decision results
//! - Summary and result structures

mod constraint;
mod segment;
mod summary;
mod update_result;

pub use constraint::UpdateConstraint;
pub use segment::Segment;
pub use summary::{ArtifactReport, SegmentTotals, UpdateSummary};
pub use update_result::{SkipReason, UpdateResult};
