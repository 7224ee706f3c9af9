//! Update selection for a single artifact
//!
//! This module provides:
//! - Candidate sets and per-segment availability queries
//! - Segment policy derived from allow-flags
//! - The update selector that filters candidates and picks the best one
//! - Target resolution that turns a requested version into an update decision

mod candidates;
mod policy;
mod resolver;

pub use candidates::CandidateSet;
pub use policy::determine_unchanged_segment;
pub use resolver::{ResolveRequest, TargetResolver};

use crate::domain::UpdateConstraint;
use crate::version::{changed_segment, Version};
use std::cmp::Ordering;
use tracing::debug;

/// Selection engine that picks the best candidate under an UpdateConstraint
#[derive(Debug, Clone, Default)]
pub struct UpdateSelector {
    /// Policy configuration
    constraint: UpdateConstraint,
}

impl UpdateSelector {
    /// Create a new UpdateSelector with the given constraint
    pub fn new(constraint: UpdateConstraint) -> Self {
        Self { constraint }
    }

    /// Every eligible candidate in ascending order
    ///
    /// Structurally equal candidates are ordered by the longest common prefix
    /// with `current`'s raw string, then by reverse raw string, so the last
    /// element is the preferred spelling of the newest version.
    pub fn eligible_candidates<'a>(
        &self,
        current: &Version,
        candidates: &'a CandidateSet,
    ) -> Vec<&'a Version> {
        let mut eligible: Vec<&Version> = candidates
            .iter()
            .filter(|candidate| self.is_eligible(current, candidate))
            .collect();
        eligible.sort_by(|a, b| a.cmp(b).then_with(|| prefer_closer_spelling(current, a, b)));
        eligible
    }

    /// Pick the best eligible candidate, or `None` when nothing qualifies
    pub fn select_update(&self, current: &Version, candidates: &CandidateSet) -> Option<Version> {
        let selected = self.eligible_candidates(current, candidates).pop();

        match selected {
            Some(version) => debug!(current = %current, selected = %version, "selected candidate"),
            None => debug!(current = %current, "no eligible candidate"),
        }
        selected.cloned()
    }

    /// Check whether a candidate survives every filter
    pub fn is_eligible(&self, current: &Version, candidate: &Version) -> bool {
        let constraint = &self.constraint;

        if candidate.is_snapshot() && !constraint.allow_snapshots {
            debug!(candidate = %candidate, "dropped: snapshot");
            return false;
        }

        let ordering = candidate.cmp(current);
        if constraint.allow_downgrade {
            if ordering == Ordering::Equal && !constraint.include_current {
                debug!(candidate = %candidate, "dropped: same as current");
                return false;
            }
            if let Some(range) = &constraint.explicit_range {
                if !range.matches_target(candidate) {
                    debug!(candidate = %candidate, range = %range, "dropped: not the requested target");
                    return false;
                }
            }
        } else {
            match ordering {
                Ordering::Less => {
                    debug!(candidate = %candidate, "dropped: older than current");
                    return false;
                }
                Ordering::Equal if !constraint.include_current => {
                    debug!(candidate = %candidate, "dropped: same as current");
                    return false;
                }
                _ => {}
            }
            if let Some(range) = &constraint.explicit_range {
                if !range.matches(candidate) {
                    debug!(candidate = %candidate, range = %range, "dropped: outside range");
                    return false;
                }
            }
        }

        if let Some(changed) = changed_segment(current, candidate) {
            if !constraint.permits_change_at(changed) {
                debug!(candidate = %candidate, segment = %changed, "dropped: segment frozen");
                return false;
            }
        }

        true
    }
}

/// Orders two equal versions so that the preferred spelling is greater
fn prefer_closer_spelling(current: &Version, a: &Version, b: &Version) -> Ordering {
    let shared = |v: &Version| {
        v.raw()
            .chars()
            .zip(current.raw().chars())
            .take_while(|(x, y)| x == y)
            .count()
    };
    shared(a)
        .cmp(&shared(b))
        .then_with(|| b.raw().cmp(a.raw()))
}
