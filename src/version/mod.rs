//! Version ordering engine
//!
//! This module provides:
//! - Parsing raw version strings into typed tokens
//! - A total, transitive ordering over parsed versions
//! - Segment classification (major/minor/incremental/...) of differences
//! - Version range parsing, matching and intersection

pub mod classifier;
pub mod comparator;
mod parser;
pub mod range;

pub use classifier::{changed_segment, is_newer_at_or_below, segment_of};
pub use comparator::{compare, QualifierRank};
pub use parser::{Token, Version};
pub use range::{Restriction, VersionRange};
