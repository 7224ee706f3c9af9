//! Update result summary types
//!
//! Provides structures for tracking update results per artifact and
//! the segment bucket totals across a batch.

use super::{Segment, UpdateResult};
use serde::{Deserialize, Serialize};

/// Result for a single artifact plus what else is available
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactReport {
    /// The update decision
    pub result: UpdateResult,
    /// Finest segment at which any newer version exists, ignoring constraints
    pub finest_update: Option<Segment>,
}

impl ArtifactReport {
    /// Creates a new ArtifactReport
    pub fn new(result: UpdateResult, finest_update: Option<Segment>) -> Self {
        Self {
            result,
            finest_update,
        }
    }
}

/// Number of artifacts per availability bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentTotals {
    pub up_to_date: usize,
    /// Subincremental or qualifier-only updates
    pub subincremental: usize,
    pub incremental: usize,
    pub minor: usize,
    pub major: usize,
}

impl SegmentTotals {
    /// Count one artifact
    pub fn record(&mut self, finest_update: Option<Segment>) {
        match finest_update {
            None => self.up_to_date += 1,
            Some(Segment::Qualifier | Segment::SubIncremental) => self.subincremental += 1,
            Some(Segment::Incremental) => self.incremental += 1,
            Some(Segment::Minor) => self.minor += 1,
            Some(Segment::Major) => self.major += 1,
        }
    }
}

/// Overall summary of a batch of update decisions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSummary {
    /// One report per artifact, in input order
    pub artifacts: Vec<ArtifactReport>,
}

impl UpdateSummary {
    /// Creates a new UpdateSummary
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an artifact report
    pub fn add_artifact(&mut self, report: ArtifactReport) {
        self.artifacts.push(report);
    }

    /// Returns the total number of artifacts processed
    pub fn total_artifacts(&self) -> usize {
        self.artifacts.len()
    }

    /// Returns the total number of updates
    pub fn total_updates(&self) -> usize {
        self.updates().count()
    }

    /// Returns the total number of skips
    pub fn total_skips(&self) -> usize {
        self.skips().count()
    }

    /// Returns all updates
    pub fn updates(&self) -> impl Iterator<Item = &UpdateResult> {
        self.artifacts
            .iter()
            .map(|a| &a.result)
            .filter(|r| r.is_update())
    }

    /// Returns all skips
    pub fn skips(&self) -> impl Iterator<Item = &UpdateResult> {
        self.artifacts
            .iter()
            .map(|a| &a.result)
            .filter(|r| r.is_skip())
    }

    /// Bucket totals by finest available update
    pub fn totals(&self) -> SegmentTotals {
        let mut totals = SegmentTotals::default();
        for artifact in &self.artifacts {
            totals.record(artifact.finest_update);
        }
        totals
    }
}
