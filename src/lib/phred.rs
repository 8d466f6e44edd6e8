//! Phred+33 quality string encoding.
//!
//! Quality strings on the normalized side are Phred+33 ASCII; the SAM record stores
//! raw Phred scores, with an empty score list standing for the unknown quality `*`.

use crate::errors::FailureKind;

/// Offset between a Phred score and its ASCII character
pub const PHRED_OFFSET: u8 = 33;

/// Maximum Phred score representable in SAM text (`~`)
pub const MAX_PHRED: u8 = 93;

/// Quality string meaning "quality not available"
pub const UNKNOWN_QUALITY: &str = "*";

/// Phred score type
pub type PhredScore = u8;

/// Decodes a Phred+33 string into raw Phred scores.
///
/// # Errors
///
/// Returns [`FailureKind::InvalidQualityScores`] if any character lies outside
/// `!`..=`~`.
///
/// # Examples
///
/// ```
/// use samconv::phred::fastq_to_phred;
///
/// assert_eq!(fastq_to_phred("!+5I").unwrap(), vec![0, 10, 20, 40]);
/// assert!(fastq_to_phred("AB C").is_err());
/// ```
pub fn fastq_to_phred(quality: &str) -> Result<Vec<PhredScore>, FailureKind> {
    quality
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            if (PHRED_OFFSET..=PHRED_OFFSET + MAX_PHRED).contains(&b) {
                Ok(b - PHRED_OFFSET)
            } else {
                Err(FailureKind::InvalidQualityScores {
                    reason: format!("byte {b:#04x} at offset {i} is not Phred+33"),
                })
            }
        })
        .collect()
}

/// Encodes raw Phred scores as a Phred+33 string.
///
/// Scores above [`MAX_PHRED`] are clamped since they have no SAM text representation.
#[must_use]
pub fn phred_to_fastq(scores: &[PhredScore]) -> String {
    scores.iter().map(|&q| char::from(q.min(MAX_PHRED) + PHRED_OFFSET)).collect()
}
