//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of resolution results
//! - Summary counts and availability buckets

use crate::domain::{ArtifactReport, Segment, SkipReason, UpdateResult, UpdateSummary};
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput {
    /// Summary statistics
    summary: JsonSummary,
    /// Per-artifact results
    artifacts: Vec<JsonArtifact>,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    /// Total number of updates
    updates: usize,
    /// Total number of skips
    skips: usize,
    /// Availability buckets (only in verbose mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    available: Option<JsonAvailability>,
}

/// JSON representation of the availability buckets
#[derive(Serialize)]
struct JsonAvailability {
    up_to_date: usize,
    subincremental: usize,
    incremental: usize,
    minor: usize,
    major: usize,
}

/// JSON representation of one artifact
#[derive(Serialize)]
struct JsonArtifact {
    /// Artifact name
    name: String,
    /// Declared version
    current: String,
    /// "update" or "skip"
    status: &'static str,
    /// Selected version for updates
    #[serde(skip_serializing_if = "Option::is_none")]
    new_version: Option<String>,
    /// Changed segment for updates
    #[serde(skip_serializing_if = "Option::is_none")]
    segment: Option<Segment>,
    /// Skip reason
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
    /// Finest segment with any newer version (only in verbose mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    finest_update: Option<Segment>,
}

impl JsonFormatter {
    /// Convert skip reason to string
    fn skip_reason_to_string(reason: &SkipReason) -> &'static str {
        match reason {
            SkipReason::AlreadyLatest => "already_latest",
            SkipReason::NoSuitableVersion => "no_suitable_version",
            SkipReason::NoCandidates => "no_candidates",
        }
    }

    /// Convert an artifact report to JSON representation
    fn artifact_to_json(&self, artifact: &ArtifactReport) -> JsonArtifact {
        let finest_update = if self.verbosity == Verbosity::Verbose {
            artifact.finest_update
        } else {
            None
        };

        match &artifact.result {
            UpdateResult::Update {
                artifact: name,
                current,
                new_version,
                segment,
            } => JsonArtifact {
                name: name.clone(),
                current: current.clone(),
                status: "update",
                new_version: Some(new_version.clone()),
                segment: *segment,
                reason: None,
                finest_update,
            },
            UpdateResult::Skip {
                artifact: name,
                current,
                reason,
            } => JsonArtifact {
                name: name.clone(),
                current: current.clone(),
                status: "skip",
                new_version: None,
                segment: None,
                reason: Some(Self::skip_reason_to_string(reason)),
                finest_update,
            },
        }
    }

    fn summary_to_json(&self, summary: &UpdateSummary) -> JsonSummary {
        let available = (self.verbosity == Verbosity::Verbose).then(|| {
            let totals = summary.totals();
            JsonAvailability {
                up_to_date: totals.up_to_date,
                subincremental: totals.subincremental,
                incremental: totals.incremental,
                minor: totals.minor,
                major: totals.major,
            }
        });

        JsonSummary {
            updates: summary.total_updates(),
            skips: summary.total_skips(),
            available,
        }
    }
}

fn write_json<T: Serialize>(value: &T, writer: &mut dyn Write) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
    writeln!(writer, "{}", json)
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &UpdateSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let artifacts = if self.verbosity == Verbosity::Quiet {
            Vec::new()
        } else {
            summary
                .artifacts
                .iter()
                .map(|a| self.artifact_to_json(a))
                .collect()
        };

        let output = JsonOutput {
            summary: self.summary_to_json(summary),
            artifacts,
        };
        write_json(&output, writer)
    }
}
