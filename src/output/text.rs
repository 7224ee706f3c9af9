//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Human-readable update result display with colors
//! - Changed-segment indication (major/minor/incremental/...)
//! - Skipped artifact display with reasons
//! - Summary with update breakdown and availability buckets

use crate::domain::{ArtifactReport, Segment, SkipReason, UpdateResult, UpdateSummary};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Name shown for artifacts resolved without a name
const ANONYMOUS: &str = "version";

/// Get the display label with color
fn colored_label(segment: Option<Segment>) -> String {
    match segment {
        Some(Segment::Major) => "major".red().bold().to_string(),
        Some(Segment::Minor) => "minor".yellow().to_string(),
        Some(Segment::Incremental) => "incremental".green().to_string(),
        Some(Segment::SubIncremental) => "subincremental".cyan().to_string(),
        Some(Segment::Qualifier) => "qualifier".blue().to_string(),
        None => "same".dimmed().to_string(),
    }
}

/// Get the plain label
fn plain_label(segment: Option<Segment>) -> &'static str {
    segment.map(Segment::label).unwrap_or("same")
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        ANONYMOUS
    } else {
        name
    }
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Format a skip reason for display
    fn format_skip_reason(&self, reason: &SkipReason) -> &'static str {
        match reason {
            SkipReason::AlreadyLatest => "latest",
            SkipReason::NoSuitableVersion => "no suitable version",
            SkipReason::NoCandidates => "no versions",
        }
    }

    /// Calculate the maximum artifact name length for alignment
    fn max_name_length(&self, artifacts: &[ArtifactReport]) -> usize {
        artifacts
            .iter()
            .map(|a| display_name(a.result.artifact()).len())
            .max()
            .unwrap_or(0)
    }

    /// Format a single update line
    fn format_update_line(
        &self,
        name: &str,
        old_version: &str,
        new_version: &str,
        segment: Option<Segment>,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.color {
            let name_display = format!("{:width$}", name, width = max_name_len);
            writeln!(
                writer,
                "  {} {} {} {} [{}]",
                name_display,
                old_version.dimmed(),
                "→".dimmed(),
                new_version.bright_white().bold(),
                colored_label(segment)
            )
        } else {
            writeln!(
                writer,
                "  {:width$} {} -> {} [{}]",
                name,
                old_version,
                new_version,
                plain_label(segment),
                width = max_name_len
            )
        }
    }

    /// Format a single skip line
    fn format_skip_line(
        &self,
        name: &str,
        current: &str,
        reason: &SkipReason,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let reason_str = self.format_skip_reason(reason);

        if self.color {
            let name_display = format!("{:width$}", name, width = max_name_len);
            writeln!(
                writer,
                "  {} {} {}",
                name_display.dimmed(),
                current.dimmed(),
                format!("({})", reason_str).dimmed()
            )
        } else {
            writeln!(
                writer,
                "  {:width$} {} ({})",
                name,
                current,
                reason_str,
                width = max_name_len
            )
        }
    }

    fn format_result(
        &self,
        result: &UpdateResult,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let name = display_name(result.artifact());
        match result {
            UpdateResult::Update {
                current,
                new_version,
                segment,
                ..
            } => self.format_update_line(name, current, new_version, *segment, max_name_len, writer),
            UpdateResult::Skip {
                current, reason, ..
            } => self.format_skip_line(name, current, reason, max_name_len, writer),
        }
    }

    /// Count updates by changed segment, coarsest first
    fn count_by_segment(&self, summary: &UpdateSummary) -> Vec<(Option<Segment>, usize)> {
        let segments = Segment::ALL.iter().copied().map(Some).chain([None]);
        segments
            .map(|segment| {
                let count = summary
                    .updates()
                    .filter(|r| matches!(r, UpdateResult::Update { segment: s, .. } if *s == segment))
                    .count();
                (segment, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Count skips by reason
    fn count_by_skip_reason(&self, summary: &UpdateSummary) -> Vec<(&'static str, usize)> {
        let mut counts: Vec<(&'static str, usize)> = Vec::new();
        for result in summary.skips() {
            if let UpdateResult::Skip { reason, .. } = result {
                let key = self.format_skip_reason(reason);
                match counts.iter_mut().find(|(k, _)| *k == key) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((key, 1)),
                }
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    fn format_availability(
        &self,
        summary: &UpdateSummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let totals = summary.totals();
        let rows = [
            ("up to date", totals.up_to_date),
            ("subincremental", totals.subincremental),
            ("incremental", totals.incremental),
            ("minor", totals.minor),
            ("major", totals.major),
        ];

        writeln!(writer)?;
        if self.color {
            writeln!(writer, "{}:", "Available updates".dimmed())?;
        } else {
            writeln!(writer, "Available updates:")?;
        }
        for (label, count) in rows {
            writeln!(writer, "  {:14} {}", format!("{}:", label), count)?;
        }
        Ok(())
    }

    /// Quiet mode gets a one-line count, otherwise the full summary block
    fn write_summary(&self, summary: &UpdateSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let updates = summary.total_updates();
        let skips = summary.total_skips();

        if self.verbosity == Verbosity::Quiet {
            if updates > 0 {
                if self.color {
                    writeln!(writer, "{} updated", updates.to_string().green())?;
                } else {
                    writeln!(writer, "{} updated", updates)?;
                }
            } else if self.color {
                writeln!(writer, "{}", "No updates".dimmed())?;
            } else {
                writeln!(writer, "No updates")?;
            }
            return Ok(());
        }

        let by_segment = self.count_by_segment(summary);
        let breakdown = |color: bool| -> String {
            by_segment
                .iter()
                .map(|(segment, count)| {
                    if color {
                        format!("{} {}", count, colored_label(*segment))
                    } else {
                        format!("{} {}", count, plain_label(*segment))
                    }
                })
                .collect::<Vec<_>>()
                .join(", ")
        };

        if self.color {
            writeln!(writer, "{}:", "Summary".bold())?;
            if updates > 0 {
                writeln!(
                    writer,
                    "  {} artifact(s) updated ({})",
                    updates.to_string().green(),
                    breakdown(true)
                )?;
            } else {
                writeln!(writer, "  {}", "No artifacts updated".dimmed())?;
            }
        } else {
            writeln!(writer, "Summary:")?;
            if updates > 0 {
                writeln!(
                    writer,
                    "  {} artifact(s) updated ({})",
                    updates,
                    breakdown(false)
                )?;
            } else {
                writeln!(writer, "  No artifacts updated")?;
            }
        }

        if skips > 0 {
            write!(writer, "  {} artifact(s) skipped", skips)?;
            if self.verbosity == Verbosity::Verbose {
                let parts: Vec<String> = self
                    .count_by_skip_reason(summary)
                    .iter()
                    .map(|(reason, count)| format!("{} {}", count, reason))
                    .collect();
                write!(writer, " ({})", parts.join(", "))?;
            }
            writeln!(writer)?;
        }

        if self.verbosity == Verbosity::Verbose {
            self.format_availability(summary, writer)?;
        }

        Ok(())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &UpdateSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        // In quiet mode, only show summary
        if self.verbosity == Verbosity::Quiet {
            return self.write_summary(summary, writer);
        }

        let max_name_len = self.max_name_length(&summary.artifacts);
        for artifact in &summary.artifacts {
            self.format_result(&artifact.result, max_name_len, writer)?;
        }

        if summary.total_artifacts() > 1 || self.verbosity == Verbosity::Verbose {
            writeln!(writer)?;
            self.write_summary(summary, writer)?;
        }

        Ok(())
    }
}
