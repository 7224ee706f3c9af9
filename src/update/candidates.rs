//! Known versions of an artifact
//!
//! This module provides the CandidateSet struct that holds the versions
//! a metadata source reported, plus the per-segment queries used for
//! reporting what is available.

use crate::domain::Segment;
use crate::version::{changed_segment, Version};

/// Unordered collection of known versions for one artifact
///
/// Duplicates and snapshot versions are kept as supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    versions: Vec<Version>,
}

impl CandidateSet {
    /// Create a CandidateSet from raw version strings
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            versions: raw.into_iter().map(|r| Version::parse(r.as_ref())).collect(),
        }
    }

    /// Number of versions, duplicates included
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Iterate over the parsed versions in input order
    pub fn iter(&self) -> impl Iterator<Item = &Version> {
        self.versions.iter()
    }

    /// The smallest newer version whose coarsest change is exactly `segment`
    pub fn oldest_update(
        &self,
        current: &Version,
        segment: Segment,
        allow_snapshots: bool,
    ) -> Option<&Version> {
        self.updates_at(current, segment, allow_snapshots).min()
    }

    /// The largest newer version whose coarsest change is exactly `segment`
    pub fn newest_update(
        &self,
        current: &Version,
        segment: Segment,
        allow_snapshots: bool,
    ) -> Option<&Version> {
        self.updates_at(current, segment, allow_snapshots).max()
    }

    /// The finest segment at which any newer version exists
    pub fn finest_update(&self, current: &Version, allow_snapshots: bool) -> Option<Segment> {
        Segment::ALL
            .iter()
            .rev()
            .copied()
            .find(|&segment| {
                self.oldest_update(current, segment, allow_snapshots)
                    .is_some()
            })
    }

    fn updates_at<'a, 'b>(
        &'a self,
        current: &'b Version,
        segment: Segment,
        allow_snapshots: bool,
    ) -> impl Iterator<Item = &'a Version> + 'b
    where
        'a: 'b,
    {
        self.versions
            .iter()
            .filter(move |v| allow_snapshots || !v.is_snapshot())
            .filter(move |v| *v > current && changed_segment(current, v) == Some(segment))
    }
}

impl<S: AsRef<str>> FromIterator<S> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        CandidateSet::new(iter)
    }
}
