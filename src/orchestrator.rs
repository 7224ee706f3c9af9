//! Resolution orchestrator for coordinating a whole run
//!
//! This module provides:
//! - Workflow coordination: load inputs → resolve each artifact → summarize
//! - Single-artifact mode (`--current` plus candidates) and batch mode
//! - Per-artifact target overrides in batch files

use crate::cli::CliArgs;
use crate::domain::{ArtifactReport, UpdateSummary};
use crate::error::{AppError, ConfigError};
use crate::input::{read_batch, read_candidates, BatchEntry};
use crate::update::{CandidateSet, TargetResolver};
use crate::version::Version;
use tracing::debug;

/// One artifact to resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactJob {
    /// Artifact name
    pub name: String,
    /// Declared version
    pub current: String,
    /// Known versions
    pub candidates: CandidateSet,
    /// Target overriding `--target`
    pub target: Option<String>,
}

impl From<BatchEntry> for ArtifactJob {
    fn from(entry: BatchEntry) -> Self {
        Self {
            candidates: CandidateSet::new(&entry.versions),
            name: entry.name,
            current: entry.current,
            target: entry.target,
        }
    }
}

/// Orchestrator for coordinating a run
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
}

impl Orchestrator {
    /// Create a new orchestrator, rejecting invalid option combinations
    pub fn new(args: CliArgs) -> Result<Self, AppError> {
        args.validate()?;
        Ok(Self { args })
    }

    /// Load inputs and resolve every artifact
    pub fn run(&self) -> Result<UpdateSummary, AppError> {
        let jobs = self.load_jobs()?;
        self.resolve_all(&jobs)
    }

    /// Resolve the given artifacts in order
    pub fn resolve_all(&self, jobs: &[ArtifactJob]) -> Result<UpdateSummary, AppError> {
        let mut summary = UpdateSummary::new();
        for job in jobs {
            summary.add_artifact(self.resolve_one(job)?);
        }
        Ok(summary)
    }

    fn resolve_one(&self, job: &ArtifactJob) -> Result<ArtifactReport, AppError> {
        debug!(
            artifact = %job.name,
            current = %job.current,
            candidates = job.candidates.len(),
            "resolving artifact"
        );
        let resolver = TargetResolver::new(self.args.to_request(job.target.as_deref()));
        let result = resolver.resolve(&job.name, &job.current, &job.candidates)?;
        let finest_update = job
            .candidates
            .finest_update(&Version::parse(&job.current), self.args.allow_snapshots);
        Ok(ArtifactReport::new(result, finest_update))
    }

    fn load_jobs(&self) -> Result<Vec<ArtifactJob>, AppError> {
        if let Some(path) = &self.args.batch {
            let entries = read_batch(path)?;
            return Ok(entries.into_iter().map(ArtifactJob::from).collect());
        }

        let current = self
            .args
            .current
            .clone()
            .ok_or_else(|| ConfigError::MissingOption {
                option: "--current".to_string(),
            })?;

        let mut versions = self.args.candidates.clone();
        if let Some(path) = &self.args.candidates_file {
            versions.extend(read_candidates(path)?);
        }
        if versions.is_empty() && !self.args.skip_resolution {
            return Err(ConfigError::NoCandidates {
                artifact: self.display_name().to_string(),
            }
            .into());
        }

        Ok(vec![ArtifactJob {
            name: self.args.name.clone(),
            current,
            candidates: CandidateSet::new(&versions),
            target: None,
        }])
    }

    fn display_name(&self) -> &str {
        if self.args.name.is_empty() {
            "version"
        } else {
            &self.args.name
        }
    }
}
