//! Coordinate conventions and unmapped sentinels.
//!
//! The normalized model uses 0-based half-open coordinates and optional fields for
//! unaligned reads. SAM uses 1-based inclusive coordinates and reserves sentinel
//! values (`-1` reference index, `*` reference name, position `0`) for "no alignment".

use noodles::sam::alignment::record_buf::Cigar;

use crate::cigar::reference_span;
use crate::errors::FailureKind;

/// Reference index of a record with no alignment
pub const NO_ALIGNMENT_REFERENCE_INDEX: i32 = -1;

/// Reference name of a record with no alignment
pub const NO_ALIGNMENT_REFERENCE_NAME: &str = "*";

/// 1-based alignment start of a record with no alignment
pub const NO_ALIGNMENT_START: i32 = 0;

/// Mapping quality meaning "not available"
pub const UNKNOWN_MAPPING_QUALITY: u8 = 255;

/// Converts a 0-based start to a 1-based SAM position.
///
/// # Errors
///
/// Returns [`FailureKind::InvalidCoordinate`] if `start` is negative or the 1-based
/// position does not fit a signed 32-bit SAM position.
pub fn to_one_based(start: i64) -> Result<i32, FailureKind> {
    if start < 0 {
        return Err(FailureKind::InvalidCoordinate {
            field: "start",
            value: start,
            expected: "zero or greater",
        });
    }
    start
        .checked_add(1)
        .and_then(|position| i32::try_from(position).ok())
        .ok_or(FailureKind::InvalidCoordinate {
            field: "start",
            value: start,
            expected: "within the 32-bit SAM position range",
        })
}

/// Converts a 1-based SAM position to a 0-based start.
///
/// # Errors
///
/// Returns [`FailureKind::InvalidCoordinate`] if `position` is less than 1.
pub fn to_zero_based(position: i32) -> Result<i64, FailureKind> {
    if position < 1 {
        return Err(FailureKind::InvalidCoordinate {
            field: "alignmentStart",
            value: i64::from(position),
            expected: "greater than zero",
        });
    }
    Ok(i64::from(position) - 1)
}

/// Returns true if the reference index is the "no reference" sentinel.
#[must_use]
pub fn is_unmapped(reference_index: i32) -> bool {
    reference_index == NO_ALIGNMENT_REFERENCE_INDEX
}

/// Returns the 0-based exclusive end of an alignment starting at `start`.
///
/// # Errors
///
/// Returns [`FailureKind::InvalidCoordinate`] if the reference span or the end does not
/// fit a signed 64-bit position.
pub fn end_position(start: i64, cigar: &Cigar) -> Result<i64, FailureKind> {
    reference_span(cigar)
        .and_then(|span| i64::try_from(span).ok())
        .and_then(|span| start.checked_add(span))
        .ok_or(FailureKind::InvalidCoordinate {
            field: "end",
            value: start,
            expected: "a start plus reference span within the 64-bit position range",
        })
}
