//! Segment classification of version differences
//!
//! The first four positions of a version's leading numeric run are
//! MAJOR, MINOR, INCREMENTAL and SUBINCREMENTAL. Missing positions count as
//! zero. Any other difference (a fifth number, a qualifier, a snapshot
//! marker) is a QUALIFIER change.

use num_bigint::BigUint;
use num_traits::Zero;

use super::parser::Version;
use crate::domain::Segment;

/// Number of positions that map to a named numeric segment
const NUMERIC_SEGMENTS: usize = 4;

/// Map a token position to its segment
pub fn segment_of(position: usize) -> Segment {
    match position {
        0 => Segment::Major,
        1 => Segment::Minor,
        2 => Segment::Incremental,
        3 => Segment::SubIncremental,
        _ => Segment::Qualifier,
    }
}

/// The coarsest segment at which two versions differ, or `None` if they are equal
pub fn changed_segment(a: &Version, b: &Version) -> Option<Segment> {
    if a == b {
        return None;
    }

    let zero = BigUint::zero();
    let left: Vec<&BigUint> = a.numeric_prefix().take(NUMERIC_SEGMENTS).collect();
    let right: Vec<&BigUint> = b.numeric_prefix().take(NUMERIC_SEGMENTS).collect();

    (0..NUMERIC_SEGMENTS)
        .find(|&i| {
            let x = left.get(i).copied().unwrap_or(&zero);
            let y = right.get(i).copied().unwrap_or(&zero);
            x != y
        })
        .map(segment_of)
        .or(Some(Segment::Qualifier))
}

/// True iff `candidate` is newer than `current` and no segment coarser than
/// `floor` changed
pub fn is_newer_at_or_below(current: &Version, candidate: &Version, floor: Segment) -> bool {
    candidate > current
        && changed_segment(current, candidate).is_some_and(|segment| segment <= floor)
}
