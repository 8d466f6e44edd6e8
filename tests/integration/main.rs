//! Integration tests for the samconv library.
//!
//! These tests drive both converters end to end through the public API, checking
//! that the codecs, header lookups and stringency policy work together.

mod helpers;
mod test_codecs;
mod test_legacy_schema;
mod test_round_trip;
mod test_stringency;
