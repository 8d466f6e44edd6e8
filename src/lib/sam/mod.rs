//! The SAM side of the conversion.
//!
//! [`SamRecord`] is an owned, immutable alignment record built through
//! [`SamRecordBuilder`]. It keeps SAM conventions: 1-based positions, sentinel values
//! for unaligned fields, a packed flag field, and an ordered list of typed tags.

pub mod record;

pub use record::{MISSING_TEXT, SamRecord, SamRecordBuilder};
