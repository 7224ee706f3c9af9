//! Target-version resolution
//!
//! Turns a declared version, a set of known versions and a requested target
//! (a bottom version or a range) into an update decision.

use super::{determine_unchanged_segment, CandidateSet, UpdateSelector};
use crate::domain::{SkipReason, UpdateConstraint, UpdateResult};
use crate::error::{AppError, ConfigError};
use crate::version::{changed_segment, Version, VersionRange};
use tracing::{debug, info};

/// Options for a single resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    /// Bottom version or range to resolve against; defaults to the declared version
    pub target: Option<String>,
    /// Adopt `target` as-is without consulting the candidates
    pub skip_resolution: bool,
    /// Report an update even when the selection equals the declared version
    pub force_update: bool,
    pub allow_major: bool,
    pub allow_minor: bool,
    pub allow_incremental: bool,
    pub allow_snapshots: bool,
    pub allow_downgrade: bool,
}

impl Default for ResolveRequest {
    fn default() -> Self {
        Self {
            target: None,
            skip_resolution: false,
            force_update: false,
            allow_major: true,
            allow_minor: true,
            allow_incremental: true,
            allow_snapshots: false,
            allow_downgrade: false,
        }
    }
}

impl ResolveRequest {
    /// Create a request that accepts any newer release
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested target
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set which segments may change
    pub fn with_allowed_segments(mut self, major: bool, minor: bool, incremental: bool) -> Self {
        self.allow_major = major;
        self.allow_minor = minor;
        self.allow_incremental = incremental;
        self
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

    /// Set whether resolution is skipped
    pub fn with_skip_resolution(mut self, skip: bool) -> Self {
        self.skip_resolution = skip;
        self
    }

    /// Set whether a same-version selection still counts as an update
    pub fn with_force_update(mut self, force: bool) -> Self {
        self.force_update = force;
        self
    }
}

/// Resolves declared versions against candidates under one request
#[derive(Debug, Clone, Default)]
pub struct TargetResolver {
    request: ResolveRequest,
}

impl TargetResolver {
    /// Create a new TargetResolver
    pub fn new(request: ResolveRequest) -> Self {
        Self { request }
    }

    /// Decide whether `artifact` should move away from `declared`
    pub fn resolve(
        &self,
        artifact: &str,
        declared: &str,
        candidates: &CandidateSet,
    ) -> Result<UpdateResult, AppError> {
        let request = &self.request;
        let declared_version = Version::parse(declared);

        let selected = if request.skip_resolution {
            let target = request
                .target
                .as_deref()
                .filter(|t| !t.trim().is_empty())
                .ok_or(ConfigError::MissingTargetVersion)?;
            Some(Version::parse(target.trim()))
        } else {
            if candidates.is_empty() {
                info!(artifact, "no versions available");
                return Ok(UpdateResult::skip(artifact, declared, SkipReason::NoCandidates));
            }
            let constraint = self.constraint_for(&declared_version)?;
            let base = constraint
                .explicit_range
                .as_ref()
                .and_then(VersionRange::recommended_version)
                .cloned()
                .unwrap_or_else(|| declared_version.clone());
            debug!(artifact, base = %base, "resolving");
            UpdateSelector::new(constraint).select_update(&base, candidates)
        };

        let Some(selected) = selected else {
            info!(artifact, "no versions found");
            return Ok(UpdateResult::skip(
                artifact,
                declared,
                SkipReason::NoSuitableVersion,
            ));
        };

        if selected.raw() == declared && !request.force_update {
            debug!(artifact, version = %selected, "already at selected version");
            return Ok(UpdateResult::skip(artifact, declared, SkipReason::AlreadyLatest));
        }

        info!(artifact, from = declared, to = %selected, "updating");
        Ok(UpdateResult::update(
            artifact,
            declared,
            selected.raw(),
            changed_segment(&declared_version, &selected),
        ))
    }

    /// Build the selection constraint for one declared version
    fn constraint_for(&self, declared: &Version) -> Result<UpdateConstraint, AppError> {
        let request = &self.request;
        let target = request.target.as_deref().unwrap_or(declared.raw());
        let mut range = VersionRange::parse(target)?;
        if let Some(recommended) = range.recommended_version().cloned() {
            range = range.restrict(&VersionRange::at_least(recommended))?;
        }
        // The base is itself eligible only for an explicit target or a downgrade
        let include_current = request.target.is_some() || request.allow_downgrade;

        let unchanged_segment = determine_unchanged_segment(
            request.allow_major,
            request.allow_minor,
            request.allow_incremental,
        )?;

        Ok(UpdateConstraint::new()
            .with_allow_snapshots(request.allow_snapshots)
            .with_allow_downgrade(request.allow_downgrade)
            .with_unchanged_segment(unchanged_segment)
            .with_explicit_range(range)
            .with_include_current(include_current))
    }
}
