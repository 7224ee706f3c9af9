//! Update decision result types

use super::Segment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason why no update was applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The selected version is the declared one
    AlreadyLatest,
    /// No candidate survived the constraints
    NoSuitableVersion,
    /// The candidate set was empty
    NoCandidates,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::AlreadyLatest => write!(f, "already at latest"),
            SkipReason::NoSuitableVersion => write!(f, "no suitable version"),
            SkipReason::NoCandidates => write!(f, "no versions available"),
        }
    }
}

/// Result of an update decision for a single artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UpdateResult {
    /// The artifact should move to `new_version`
    Update {
        /// Artifact name (empty when resolving a single anonymous version)
        artifact: String,
        /// The declared version
        current: String,
        /// The version to adopt
        new_version: String,
        /// Coarsest segment that changes, `None` for a forced same-version update
        segment: Option<Segment>,
    },
    /// The artifact stays where it is
    Skip {
        /// Artifact name
        artifact: String,
        /// The declared version
        current: String,
        /// The reason for skipping
        reason: SkipReason,
    },
}

impl UpdateResult {
    /// Creates an Update result
    pub fn update(
        artifact: impl Into<String>,
        current: impl Into<String>,
        new_version: impl Into<String>,
        segment: Option<Segment>,
    ) -> Self {
        UpdateResult::Update {
            artifact: artifact.into(),
            current: current.into(),
            new_version: new_version.into(),
            segment,
        }
    }

    /// Creates a Skip result
    pub fn skip(artifact: impl Into<String>, current: impl Into<String>, reason: SkipReason) -> Self {
        UpdateResult::Skip {
            artifact: artifact.into(),
            current: current.into(),
            reason,
        }
    }

    /// Returns true if this is an update result
    pub fn is_update(&self) -> bool {
        matches!(self, UpdateResult::Update { .. })
    }

    /// Returns true if this is a skip result
    pub fn is_skip(&self) -> bool {
        matches!(self, UpdateResult::Skip { .. })
    }

    /// Returns the artifact name
    pub fn artifact(&self) -> &str {
        match self {
            UpdateResult::Update { artifact, .. } => artifact,
            UpdateResult::Skip { artifact, .. } => artifact,
        }
    }

    /// Returns the declared version
    pub fn current(&self) -> &str {
        match self {
            UpdateResult::Update { current, .. } => current,
            UpdateResult::Skip { current, .. } => current,
        }
    }

    /// Returns the new version for updates
    pub fn new_version(&self) -> Option<&str> {
        match self {
            UpdateResult::Update { new_version, .. } => Some(new_version),
            UpdateResult::Skip { .. } => None,
        }
    }
}

impl fmt::Display for UpdateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.artifact().is_empty() {
            "version"
        } else {
            self.artifact()
        };
        match self {
            UpdateResult::Update {
                current,
                new_version,
                ..
            } => write!(f, "{}: {} → {}", name, current, new_version),
            UpdateResult::Skip { reason, .. } => write!(f, "{}: skipped ({})", name, reason),
        }
    }
}
