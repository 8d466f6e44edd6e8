//! CIGAR text parsing and formatting.
//!
//! CIGAR text is `(<digits><operator>)+` with operators drawn from `MIDNSHP=X`, or the
//! literal `*` for "no CIGAR". Parsed CIGARs are noodles [`Cigar`] values; the empty
//! CIGAR stands for `*`. Operation order is preserved, since a leading clip and a
//! trailing clip mean different things.

use std::fmt::Write;

use noodles::sam::alignment::record::cigar::Op;
use noodles::sam::alignment::record::cigar::op::Kind;
use noodles::sam::alignment::record_buf::Cigar;

use crate::errors::FailureKind;

/// CIGAR text for "no alignment"
pub const NO_CIGAR: &str = "*";

fn malformed(text: &str, reason: impl Into<String>) -> FailureKind {
    FailureKind::MalformedCigar { cigar: text.to_string(), reason: reason.into() }
}

fn char_to_kind(ch: char) -> Option<Kind> {
    let kind = match ch {
        'M' => Kind::Match,
        'I' => Kind::Insertion,
        'D' => Kind::Deletion,
        'N' => Kind::Skip,
        'S' => Kind::SoftClip,
        'H' => Kind::HardClip,
        'P' => Kind::Pad,
        '=' => Kind::SequenceMatch,
        'X' => Kind::SequenceMismatch,
        _ => return None,
    };
    Some(kind)
}

/// Returns the SAM operator character for a CIGAR operation kind.
#[must_use]
pub fn kind_to_char(kind: Kind) -> char {
    match kind {
        Kind::Match => 'M',
        Kind::Insertion => 'I',
        Kind::Deletion => 'D',
        Kind::Skip => 'N',
        Kind::SoftClip => 'S',
        Kind::HardClip => 'H',
        Kind::Pad => 'P',
        Kind::SequenceMatch => '=',
        Kind::SequenceMismatch => 'X',
    }
}

/// Parses CIGAR text into operations.
///
/// `*` parses to the empty CIGAR. Zero-length operations are kept as written.
///
/// # Errors
///
/// Returns [`FailureKind::MalformedCigar`] if any token is not `<digits><operator>`,
/// if the text is empty, or if the text ends in a dangling length.
///
/// # Examples
///
/// ```
/// use samconv::cigar;
///
/// let parsed = cigar::parse("5H10M3H").unwrap();
/// assert_eq!(parsed.as_ref().len(), 3);
/// assert_eq!(cigar::format(&parsed), "5H10M3H");
/// ```
pub fn parse(text: &str) -> Result<Cigar, FailureKind> {
    if text == NO_CIGAR {
        return Ok(Cigar::default());
    }
    if text.is_empty() {
        return Err(malformed(text, "empty CIGAR"));
    }

    let mut ops = Vec::new();
    let mut len: Option<usize> = None;

    for ch in text.chars() {
        if let Some(digit) = ch.to_digit(10) {
            let next = len
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|n| n.checked_add(digit as usize))
                .ok_or_else(|| malformed(text, "operation length overflows"))?;
            len = Some(next);
        } else {
            let kind = char_to_kind(ch)
                .ok_or_else(|| malformed(text, format!("invalid operator '{ch}'")))?;
            let n = len.take().ok_or_else(|| malformed(text, format!("operator '{ch}' has no length")))?;
            ops.push(Op::new(kind, n));
        }
    }

    if len.is_some() {
        return Err(malformed(text, "length without operator at end"));
    }

    Ok(Cigar::from(ops))
}

/// Formats operations as CIGAR text, `*` if there are none.
#[must_use]
pub fn format(cigar: &Cigar) -> String {
    let ops = cigar.as_ref();
    if ops.is_empty() {
        return String::from(NO_CIGAR);
    }

    let mut result = String::with_capacity(ops.len() * 4);
    for op in ops {
        let _ = write!(result, "{}{}", op.len(), kind_to_char(op.kind()));
    }
    result
}

/// Length of the leading hard clip, or 0 if the first operation is not `H`.
#[must_use]
pub fn hard_clip_start(cigar: &Cigar) -> usize {
    match cigar.as_ref().first() {
        Some(op) if op.kind() == Kind::HardClip => op.len(),
        _ => 0,
    }
}

/// Length of the trailing hard clip, or 0 if the last operation is not `H`.
#[must_use]
pub fn hard_clip_end(cigar: &Cigar) -> usize {
    match cigar.as_ref().last() {
        Some(op) if op.kind() == Kind::HardClip => op.len(),
        _ => 0,
    }
}

/// Number of bases hard clipped from the start of the read described by `text`.
///
/// # Errors
///
/// Returns [`FailureKind::MalformedCigar`] if `text` does not parse.
pub fn start_trim(text: &str) -> Result<usize, FailureKind> {
    parse(text).map(|cigar| hard_clip_start(&cigar))
}

/// Number of bases hard clipped from the end of the read described by `text`.
///
/// # Errors
///
/// Returns [`FailureKind::MalformedCigar`] if `text` does not parse.
pub fn end_trim(text: &str) -> Result<usize, FailureKind> {
    parse(text).map(|cigar| hard_clip_end(&cigar))
}

/// Number of reference bases covered by the alignment (`M`, `D`, `N`, `=`, `X`).
///
/// Returns `None` if the total overflows `usize`.
#[must_use]
pub fn reference_span(cigar: &Cigar) -> Option<usize> {
    cigar.as_ref().iter().try_fold(0_usize, |span, op| match op.kind() {
        Kind::Match
        | Kind::Deletion
        | Kind::Skip
        | Kind::SequenceMatch
        | Kind::SequenceMismatch => span.checked_add(op.len()),
        _ => Some(span),
    })
}
