//! Segment policy from allow-flags

use crate::domain::Segment;
use crate::error::InvalidSegmentError;

/// Translate allow-major/minor/incremental flags into the coarsest segment
/// that must stay unchanged
///
/// Returns `Ok(None)` when every segment may change. A coarser segment
/// allowed while a finer one is forbidden cannot be expressed and is
/// rejected.
pub fn determine_unchanged_segment(
    allow_major: bool,
    allow_minor: bool,
    allow_incremental: bool,
) -> Result<Option<Segment>, InvalidSegmentError> {
    match (allow_major, allow_minor, allow_incremental) {
        (true, true, true) => Ok(None),
        (false, true, true) => Ok(Some(Segment::Major)),
        (false, false, true) => Ok(Some(Segment::Minor)),
        (false, false, false) => Ok(Some(Segment::Incremental)),
        _ => Err(InvalidSegmentError {
            allow_major,
            allow_minor,
            allow_incremental,
        }),
    }
}
