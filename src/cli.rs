//! CLI argument parsing module for verup

use crate::error::ConfigError;
use crate::update::ResolveRequest;
use clap::Parser;
use std::path::PathBuf;

/// Pick the version an artifact should move to
#[derive(Parser, Debug, Clone)]
#[command(
    name = "verup",
    version,
    about = "Pick the version an artifact should move to"
)]
pub struct CliArgs {
    /// Known versions of the artifact
    pub candidates: Vec<String>,

    /// Currently declared version
    #[arg(long)]
    pub current: Option<String>,

    /// Artifact name used in output
    #[arg(long, default_value = "")]
    pub name: String,

    /// Read known versions from a file, one per line ("-" for stdin)
    #[arg(long, value_name = "PATH")]
    pub candidates_file: Option<PathBuf>,

    /// Resolve every artifact of a JSON batch file ("-" for stdin)
    #[arg(long, value_name = "PATH")]
    pub batch: Option<PathBuf>,

    // Selection policy
    /// Consider -SNAPSHOT versions
    #[arg(long)]
    pub allow_snapshots: bool,

    /// Allow moving to an older version
    #[arg(long)]
    pub allow_downgrade: bool,

    /// Keep the major version unchanged
    #[arg(long)]
    pub no_major_updates: bool,

    /// Keep the minor version unchanged
    #[arg(long)]
    pub no_minor_updates: bool,

    /// Keep the incremental version unchanged
    #[arg(long)]
    pub no_incremental_updates: bool,

    // Target resolution
    /// Bottom version or range to resolve against (e.g. 1.5, [1.0,2.0))
    #[arg(long, value_name = "SPEC")]
    pub target: Option<String>,

    /// Adopt --target as-is without looking at the known versions
    #[arg(long)]
    pub skip_resolution: bool,

    /// Report an update even when the selection equals the current version
    #[arg(long)]
    pub force_update: bool,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Reject option combinations that cannot be honoured
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quiet && self.verbose {
            return Err(conflict("--quiet and --verbose cannot be used together"));
        }
        if self.batch.is_some() {
            if self.current.is_some() {
                return Err(conflict("--batch and --current cannot be used together"));
            }
            if !self.candidates.is_empty() || self.candidates_file.is_some() {
                return Err(conflict(
                    "--batch carries its own versions; drop the positional versions and --candidates-file",
                ));
            }
        } else if self.current.is_none() {
            return Err(ConfigError::MissingOption {
                option: "--current".to_string(),
            });
        }
        if self.skip_resolution && self.target.is_none() && self.batch.is_none() {
            return Err(ConfigError::MissingTargetVersion);
        }
        Ok(())
    }

    /// Whether the major segment may change
    ///
    /// Freezing a segment also freezes every coarser one.
    pub fn allow_major_updates(&self) -> bool {
        !self.no_major_updates && self.allow_minor_updates()
    }

    /// Whether the minor segment may change
    pub fn allow_minor_updates(&self) -> bool {
        !self.no_minor_updates && self.allow_incremental_updates()
    }

    /// Whether the incremental segment may change
    pub fn allow_incremental_updates(&self) -> bool {
        !self.no_incremental_updates
    }

    /// Build the resolution request, with `target` overriding `--target`
    pub fn to_request(&self, target: Option<&str>) -> ResolveRequest {
        ResolveRequest {
            target: target.or(self.target.as_deref()).map(str::to_string),
            skip_resolution: self.skip_resolution,
            force_update: self.force_update,
            allow_major: self.allow_major_updates(),
            allow_minor: self.allow_minor_updates(),
            allow_incremental: self.allow_incremental_updates(),
            allow_snapshots: self.allow_snapshots,
            allow_downgrade: self.allow_downgrade,
        }
    }
}

fn conflict(message: &str) -> ConfigError {
    ConfigError::ConflictingOptions {
        message: message.to_string(),
    }
}
