//! Record conversion and the stringency policy.
//!
//! Every fallible step of a conversion goes through [`Conversion::warn_or_fail`], which
//! consults the configured [`ConversionStringency`]:
//!
//! - `Silent`: the failing field is dropped and conversion continues
//! - `Lenient`: as `Silent`, and a warning is logged
//! - `Strict`: conversion stops with a [`ConversionError`]
//!
//! # Example
//!
//! ```
//! use samconv::alignment::Alignment;
//! use samconv::convert::{AlignmentToSamRecord, ConversionStringency, Converter};
//! use noodles::sam::Header;
//!
//! let header = Header::default();
//! let converter = AlignmentToSamRecord::new(&header);
//! let alignment = Alignment {
//!     read_name: Some("read1".to_string()),
//!     sequence: Some("ACGT".to_string()),
//!     ..Alignment::default()
//! };
//! let record = converter.convert(Some(&alignment), ConversionStringency::Strict).unwrap().unwrap();
//! assert_eq!(record.read_name(), "read1");
//! assert!(!record.is_mapped());
//! ```

mod to_alignment;
mod to_sam;

pub use to_alignment::SamRecordToAlignment;
pub use to_sam::AlignmentToSamRecord;

use std::fmt::{self, Debug};
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::{ConversionError, FailureKind, Result};

/// How a converter reacts to a field it cannot convert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConversionStringency {
    /// Drop the field without reporting it
    Silent,
    /// Drop the field and log a warning
    Lenient,
    /// Fail the conversion
    #[default]
    Strict,
}

impl ConversionStringency {
    #[must_use]
    pub fn is_silent(self) -> bool {
        self == Self::Silent
    }

    #[must_use]
    pub fn is_lenient(self) -> bool {
        self == Self::Lenient
    }

    #[must_use]
    pub fn is_strict(self) -> bool {
        self == Self::Strict
    }
}

impl fmt::Display for ConversionStringency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Silent => write!(f, "SILENT"),
            Self::Lenient => write!(f, "LENIENT"),
            Self::Strict => write!(f, "STRICT"),
        }
    }
}

/// Error returned when parsing an unknown stringency name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid conversion stringency '{0}' (valid values: silent, lenient, strict)")]
pub struct ParseStringencyError(String);

impl FromStr for ConversionStringency {
    type Err = ParseStringencyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            _ => Err(ParseStringencyError(s.to_string())),
        }
    }
}

/// Converts a record of type `S` into a record of type `T`.
///
/// An absent source is itself a failure: under `Strict` it is an error, otherwise the
/// result is `Ok(None)`.
pub trait Converter<S: ?Sized, T> {
    /// Converts `source`, applying `stringency` to every step that fails.
    ///
    /// # Errors
    ///
    /// Returns a [`ConversionError`] for the first failing step under `Strict`.
    fn convert(&self, source: Option<&S>, stringency: ConversionStringency) -> Result<Option<T>>;
}

/// Failure reporting context for one conversion call.
#[derive(Debug, Clone, Copy)]
pub struct Conversion {
    pub source_type: &'static str,
    pub target_type: &'static str,
    pub stringency: ConversionStringency,
}

impl Conversion {
    #[must_use]
    pub fn new(
        source_type: &'static str,
        target_type: &'static str,
        stringency: ConversionStringency,
    ) -> Self {
        Self { source_type, target_type, stringency }
    }

    /// Applies the stringency policy to a failed step.
    ///
    /// Returns `Ok(())` when the caller should drop the field and carry on.
    ///
    /// # Errors
    ///
    /// Returns a [`ConversionError`] carrying `kind` under `Strict`.
    pub fn warn_or_fail(&self, source: &dyn Debug, kind: FailureKind) -> Result<()> {
        match self.stringency {
            ConversionStringency::Silent => Ok(()),
            ConversionStringency::Lenient => {
                warn!(
                    target: "samconv::convert",
                    "could not convert {} to {}, {}",
                    self.source_type,
                    self.target_type,
                    kind
                );
                Ok(())
            }
            ConversionStringency::Strict => Err(ConversionError {
                kind,
                source_type: self.source_type,
                target_type: self.target_type,
                source_value: format!("{source:?}"),
            }),
        }
    }

    /// Unwraps a step result, routing a failure through [`Self::warn_or_fail`].
    ///
    /// Returns `Ok(None)` for a failure that was tolerated.
    ///
    /// # Errors
    ///
    /// Returns a [`ConversionError`] for a failure under `Strict`.
    pub fn check<V>(
        &self,
        source: &dyn Debug,
        step: std::result::Result<V, FailureKind>,
    ) -> Result<Option<V>> {
        match step {
            Ok(value) => Ok(Some(value)),
            Err(kind) => self.warn_or_fail(source, kind).map(|()| None),
        }
    }
}
