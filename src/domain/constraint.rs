//! Update constraint configuration
//!
//! This module provides the UpdateConstraint struct that encapsulates
//! all policy options for update selection.

use super::Segment;
use crate::version::VersionRange;

/// Policy bundle for update selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateConstraint {
    /// Consider `-SNAPSHOT` candidates
    pub allow_snapshots: bool,
    /// Allow selecting a version older than the current one
    pub allow_downgrade: bool,
    /// Coarsest segment that must not change (`None` means anything may change)
    pub unchanged_segment: Option<Segment>,
    /// Candidates must satisfy this range
    pub explicit_range: Option<VersionRange>,
    /// Treat a candidate equal to the current version as eligible
    pub include_current: bool,
}

impl UpdateConstraint {
    /// Create a new UpdateConstraint with default settings (newest release wins)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether snapshots are eligible
    pub fn with_allow_snapshots(mut self, allow: bool) -> Self {
        self.allow_snapshots = allow;
        self
    }

    /// Set whether downgrades are permitted
    pub fn with_allow_downgrade(mut self, allow: bool) -> Self {
        self.allow_downgrade = allow;
        self
    }

    /// Set the coarsest segment that must stay unchanged
    pub fn with_unchanged_segment(mut self, segment: Option<Segment>) -> Self {
        self.unchanged_segment = segment;
        self
    }

    /// Set the range candidates must satisfy
    pub fn with_explicit_range(mut self, range: VersionRange) -> Self {
        self.explicit_range = Some(range);
        self
    }

    /// Set whether the current version itself is eligible
    pub fn with_include_current(mut self, include: bool) -> Self {
        self.include_current = include;
        self
    }

    /// Check if a change at `segment` is permitted
    pub fn permits_change_at(&self, segment: Segment) -> bool {
        match self.unchanged_segment {
            Some(frozen) => segment.is_finer_than(frozen),
            None => true,
        }
    }
}
