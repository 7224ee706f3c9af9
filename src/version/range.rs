//! Version range specifications
//!
//! Accepted syntax:
//! - `1.0`: a recommended version, matches anything
//! - `[1.0]`: exactly 1.0
//! - `[1.0,2.0]`, `(1.0,2.0)`, `[1.0,2.0)`: bounded intervals
//! - `[1.0,)`, `(,2.0]`: an empty bound is unbounded on that side
//! - `(,1.0],[1.2,)`: several disjoint intervals in ascending order
//!
//! Parsed ranges print back to an equivalent specification.

use std::cmp::Ordering;
use std::fmt;

use super::parser::Version;
use crate::error::RangeError;

/// A single interval with optional, inclusive or exclusive bounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restriction {
    lower: Option<Version>,
    lower_inclusive: bool,
    upper: Option<Version>,
    upper_inclusive: bool,
}

impl Restriction {
    /// An interval matching every version
    fn unbounded() -> Self {
        Self {
            lower: None,
            lower_inclusive: false,
            upper: None,
            upper_inclusive: false,
        }
    }

    /// `[version,)`
    fn at_least(version: Version) -> Self {
        Self {
            lower: Some(version),
            lower_inclusive: true,
            upper: None,
            upper_inclusive: false,
        }
    }

    /// `[version]`
    fn exactly(version: Version) -> Self {
        Self {
            lower: Some(version.clone()),
            lower_inclusive: true,
            upper: Some(version),
            upper_inclusive: true,
        }
    }

    /// Returns true if neither side is bounded
    fn is_unbounded(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }

    fn is_exact(&self) -> bool {
        match (&self.lower, &self.upper) {
            (Some(lower), Some(upper)) => {
                self.lower_inclusive && self.upper_inclusive && lower == upper
            }
            _ => false,
        }
    }

    /// Check if a version lies inside this interval
    pub fn contains(&self, version: &Version) -> bool {
        if let Some(ref lower) = self.lower {
            match version.cmp(lower) {
                Ordering::Less => return false,
                Ordering::Equal if !self.lower_inclusive => return false,
                _ => {}
            }
        }
        if let Some(ref upper) = self.upper {
            match version.cmp(upper) {
                Ordering::Greater => return false,
                Ordering::Equal if !self.upper_inclusive => return false,
                _ => {}
            }
        }
        true
    }

    /// The overlap of two intervals, or `None` if they are disjoint
    fn intersect(&self, other: &Restriction) -> Option<Restriction> {
        let (lower, lower_inclusive) = match (&self.lower, &other.lower) {
            (None, None) => (None, self.lower_inclusive && other.lower_inclusive),
            (Some(v), None) => (Some(v.clone()), self.lower_inclusive),
            (None, Some(v)) => (Some(v.clone()), other.lower_inclusive),
            (Some(a), Some(b)) => match a.cmp(b) {
                Ordering::Greater => (Some(a.clone()), self.lower_inclusive),
                Ordering::Less => (Some(b.clone()), other.lower_inclusive),
                Ordering::Equal => (
                    Some(a.clone()),
                    self.lower_inclusive && other.lower_inclusive,
                ),
            },
        };

        let (upper, upper_inclusive) = match (&self.upper, &other.upper) {
            (None, None) => (None, self.upper_inclusive && other.upper_inclusive),
            (Some(v), None) => (Some(v.clone()), self.upper_inclusive),
            (None, Some(v)) => (Some(v.clone()), other.upper_inclusive),
            (Some(a), Some(b)) => match a.cmp(b) {
                Ordering::Less => (Some(a.clone()), self.upper_inclusive),
                Ordering::Greater => (Some(b.clone()), other.upper_inclusive),
                Ordering::Equal => (
                    Some(a.clone()),
                    self.upper_inclusive && other.upper_inclusive,
                ),
            },
        };

        if let (Some(l), Some(u)) = (&lower, &upper) {
            match l.cmp(u) {
                Ordering::Greater => return None,
                Ordering::Equal if !(lower_inclusive && upper_inclusive) => return None,
                _ => {}
            }
        }

        Some(Restriction {
            lower,
            lower_inclusive,
            upper,
            upper_inclusive,
        })
    }

    /// Returns true if `self` ends strictly before `next` begins
    fn precedes(&self, next: &Restriction) -> bool {
        match (&self.upper, &next.lower) {
            (Some(upper), Some(lower)) => match upper.cmp(lower) {
                Ordering::Less => true,
                Ordering::Equal => !(self.upper_inclusive && next.lower_inclusive),
                Ordering::Greater => false,
            },
            _ => false,
        }
    }

    /// Parse one bracketed interval such as `[1.0,2.0)` or `[1.5]`
    fn parse(spec: &str, whole: &str) -> Result<Self, RangeError> {
        let lower_inclusive = spec.starts_with('[');
        let upper_inclusive = spec.ends_with(']');
        let inner = spec[1..spec.len() - 1].trim();

        let Some((lo, hi)) = inner.split_once(',') else {
            if !(lower_inclusive && upper_inclusive) {
                return Err(RangeError::malformed(
                    whole,
                    format!("single version must be surrounded by []: {}", spec),
                ));
            }
            let version = parse_bound(inner, whole)?.ok_or_else(|| {
                RangeError::malformed(whole, format!("empty interval: {}", spec))
            })?;
            return Ok(Restriction::exactly(version));
        };

        if hi.contains(',') {
            return Err(RangeError::malformed(
                whole,
                format!("an interval has at most two bounds: {}", spec),
            ));
        }

        let lower = parse_bound(lo, whole)?;
        let upper = parse_bound(hi, whole)?;

        if let (Some(l), Some(u)) = (&lower, &upper) {
            match l.cmp(u) {
                Ordering::Greater => {
                    return Err(RangeError::malformed(
                        whole,
                        format!("lower bound {} is greater than upper bound {}", l, u),
                    ));
                }
                Ordering::Equal if !(lower_inclusive && upper_inclusive) => {
                    return Err(RangeError::malformed(
                        whole,
                        format!("interval {} contains no version", spec),
                    ));
                }
                _ => {}
            }
        }

        Ok(Restriction {
            lower,
            lower_inclusive,
            upper,
            upper_inclusive,
        })
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_exact() {
            if let Some(ref v) = self.lower {
                return write!(f, "[{}]", v);
            }
        }

        f.write_str(if self.lower_inclusive { "[" } else { "(" })?;
        if let Some(ref lower) = self.lower {
            write!(f, "{}", lower)?;
        }
        f.write_str(",")?;
        if let Some(ref upper) = self.upper {
            write!(f, "{}", upper)?;
        }
        f.write_str(if self.upper_inclusive { "]" } else { ")" })
    }
}

/// A recommended version and/or a set of disjoint intervals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    recommended: Option<Version>,
    restrictions: Vec<Restriction>,
}

impl VersionRange {
    /// Parse a range specification
    pub fn parse(spec: &str) -> Result<Self, RangeError> {
        let trimmed = spec.trim();
        if trimmed.is_empty() {
            return Err(RangeError::malformed(spec, "empty specification"));
        }

        if !trimmed.starts_with(['[', '(']) {
            if trimmed.contains(['[', ']', '(', ')', ',']) {
                return Err(RangeError::malformed(
                    spec,
                    "unbalanced brackets or stray comma outside an interval",
                ));
            }
            return Ok(Self::recommended(Version::parse(trimmed)));
        }

        let mut restrictions: Vec<Restriction> = Vec::new();
        let mut rest = trimmed;

        while !rest.is_empty() {
            if !rest.starts_with(['[', '(']) {
                return Err(RangeError::malformed(
                    spec,
                    format!("expected '[' or '(' at '{}'", rest),
                ));
            }

            let close = rest
                .find([']', ')'])
                .ok_or_else(|| RangeError::malformed(spec, "missing closing bracket"))?;
            if rest[1..close].contains(['[', '(']) {
                return Err(RangeError::malformed(spec, "unbalanced brackets"));
            }

            let restriction = Restriction::parse(&rest[..=close], spec)?;
            if let Some(previous) = restrictions.last() {
                if !previous.precedes(&restriction) {
                    return Err(RangeError::malformed(
                        spec,
                        format!("intervals overlap or are out of order: {} and {}", previous, restriction),
                    ));
                }
            }
            restrictions.push(restriction);

            rest = rest[close + 1..].trim_start();
            if let Some(after_comma) = rest.strip_prefix(',') {
                rest = after_comma.trim_start();
                if rest.is_empty() {
                    return Err(RangeError::malformed(spec, "trailing comma"));
                }
            } else if !rest.is_empty() {
                return Err(RangeError::malformed(
                    spec,
                    format!("unexpected text after interval: '{}'", rest),
                ));
            }
        }

        Ok(Self {
            recommended: None,
            restrictions,
        })
    }

    /// A range that only recommends `version` and matches everything
    fn recommended(version: Version) -> Self {
        Self {
            recommended: Some(version),
            restrictions: vec![Restriction::unbounded()],
        }
    }

    /// `[version,)`
    pub fn at_least(version: Version) -> Self {
        Self {
            recommended: None,
            restrictions: vec![Restriction::at_least(version)],
        }
    }

    pub fn recommended_version(&self) -> Option<&Version> {
        self.recommended.as_ref()
    }

    /// Check if a version satisfies the range
    pub fn matches(&self, version: &Version) -> bool {
        self.restrictions.iter().any(|r| r.contains(version))
    }

    /// Check if a version is the exact target of this range: the
    /// recommended version when there is one, otherwise any matching version
    pub fn matches_target(&self, version: &Version) -> bool {
        match self.recommended {
            Some(ref recommended) => recommended == version,
            None => self.matches(version),
        }
    }

    /// Intersect two ranges
    ///
    /// The recommended version of `self` is kept if it survives the
    /// intersection, otherwise the one of `other`.
    pub fn restrict(&self, other: &VersionRange) -> Result<VersionRange, RangeError> {
        let restrictions: Vec<Restriction> = self
            .restrictions
            .iter()
            .flat_map(|a| other.restrictions.iter().filter_map(move |b| a.intersect(b)))
            .collect();

        if restrictions.is_empty() {
            return Err(RangeError::empty(self.to_string(), other.to_string()));
        }

        let contained = |v: &&Version| restrictions.iter().any(|r| r.contains(v));
        let recommended = self
            .recommended
            .as_ref()
            .filter(contained)
            .or_else(|| other.recommended.as_ref().filter(contained))
            .cloned();

        Ok(VersionRange {
            recommended,
            restrictions,
        })
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref recommended) = self.recommended {
            if self.restrictions.iter().all(Restriction::is_unbounded) {
                return write!(f, "{}", recommended);
            }
        }

        for (i, restriction) in self.restrictions.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", restriction)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for VersionRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionRange::parse(s)
    }
}

fn parse_bound(bound: &str, whole: &str) -> Result<Option<Version>, RangeError> {
    let bound = bound.trim();
    if bound.is_empty() {
        return Ok(None);
    }
    if bound.contains(char::is_whitespace) {
        return Err(RangeError::malformed(
            whole,
            format!("bound '{}' is not a version", bound),
        ));
    }
    Ok(Some(Version::parse(bound)))
}
