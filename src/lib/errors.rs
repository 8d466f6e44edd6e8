//! Custom error types for record conversion.
//!
//! Leaf codecs ([`crate::cigar`], [`crate::tags`], [`crate::coords`], [`crate::phred`])
//! report what went wrong as a [`FailureKind`]. The converters hand every failure to
//! [`crate::convert::Conversion::warn_or_fail`], which either swallows it, logs it, or
//! wraps it in a [`ConversionError`] depending on the configured stringency.

use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConversionError>;

/// The reason a single conversion step failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FailureKind {
    /// The record to convert was absent
    #[error("must not be null")]
    NullSource,

    /// A field required for every record was absent
    #[error("{field} must not be null")]
    MissingField {
        /// The schema name of the missing field
        field: &'static str,
    },

    /// The record claims to be aligned but carries no reference name
    #[error("referenceName must not be null if read aligned")]
    MissingReferenceName,

    /// The reference name is not part of the header's sequence dictionary
    #[error("reference sequence '{name}' not found in header")]
    UnknownReferenceName {
        /// The reference sequence name
        name: String,
    },

    /// CIGAR text does not match `(<digits><operator>)+` or `*`
    #[error("malformed CIGAR '{cigar}': {reason}")]
    MalformedCigar {
        /// The offending CIGAR text
        cigar: String,
        /// Explanation of the problem
        reason: String,
    },

    /// A coordinate is outside the range allowed for its convention
    #[error("{field} must be {expected}, got {value}")]
    InvalidCoordinate {
        /// The field the coordinate came from
        field: &'static str,
        /// The invalid value
        value: i64,
        /// Description of the valid range
        expected: &'static str,
    },

    /// An optional-field token does not match `TAG:TYPE:VALUE`
    #[error("malformed attribute '{token}': {reason}")]
    MalformedTag {
        /// The offending token
        token: String,
        /// Explanation of the problem
        reason: String,
    },

    /// An optional-field token uses a type code outside `A,i,f,Z,H,B`
    #[error("invalid attribute type {tag_type} in '{token}'")]
    UnrecognizedTagType {
        /// The offending token
        token: String,
        /// The type code as written
        tag_type: String,
    },

    /// A quality string contains characters outside Phred+33
    #[error("invalid quality scores: {reason}")]
    InvalidQualityScores {
        /// Explanation of the problem
        reason: String,
    },

    /// A numeric field does not fit the target representation
    #[error("{field} value {value} is out of range")]
    ValueOutOfRange {
        /// The field the value came from
        field: &'static str,
        /// The out-of-range value
        value: i64,
    },
}

impl FailureKind {
    /// Renames the field a coordinate or range failure refers to.
    ///
    /// Other kinds are returned unchanged.
    #[must_use]
    pub fn for_field(self, field: &'static str) -> Self {
        match self {
            Self::InvalidCoordinate { value, expected, .. } => {
                Self::InvalidCoordinate { field, value, expected }
            }
            Self::ValueOutOfRange { value, .. } => Self::ValueOutOfRange { field, value },
            other => other,
        }
    }
}

/// A conversion failure raised under strict stringency.
///
/// Carries the rendered source value along with the names of the source and target
/// types so that batch callers can report which record failed and why.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not convert {source_type} to {target_type}, {kind}")]
pub struct ConversionError {
    /// What went wrong
    pub kind: FailureKind,
    /// Name of the type being converted from
    pub source_type: &'static str,
    /// Name of the type being converted to
    pub target_type: &'static str,
    /// Debug rendering of the value being converted
    pub source_value: String,
}

impl ConversionError {
    /// Returns the failure kind.
    #[must_use]
    pub fn kind(&self) -> &FailureKind {
        &self.kind
    }
}
