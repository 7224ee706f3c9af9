//! Version segment granularities
//!
//! Segments are ordered from finest to coarsest so that the derived `Ord`
//! reads naturally: `Segment::Major > Segment::Minor > ... > Segment::Qualifier`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named position in a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    /// Anything past the fourth numeric position, qualifiers, and snapshot markers
    Qualifier,
    /// Fourth numeric position (e.g. `4` in `1.2.3.4`)
    SubIncremental,
    /// Third numeric position
    Incremental,
    /// Second numeric position
    Minor,
    /// First numeric position
    Major,
}

impl Segment {
    /// All segments from coarsest to finest
    pub const ALL: [Segment; 5] = [
        Segment::Major,
        Segment::Minor,
        Segment::Incremental,
        Segment::SubIncremental,
        Segment::Qualifier,
    ];

    /// Returns true if `self` is a strictly finer granularity than `other`
    pub fn is_finer_than(self, other: Segment) -> bool {
        self < other
    }

    /// Get the plain label
    pub fn label(self) -> &'static str {
        match self {
            Segment::Major => "major",
            Segment::Minor => "minor",
            Segment::Incremental => "incremental",
            Segment::SubIncremental => "subincremental",
            Segment::Qualifier => "qualifier",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
