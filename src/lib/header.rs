//! Read-only lookups against a SAM header.
//!
//! The converters consult the header to map reference sequence names to and from
//! their index in the sequence dictionary, and to enrich a read group id with the
//! library, platform unit and sample recorded in its `@RG` line.

use bstr::BString;
use noodles::sam::Header;
use noodles::sam::header::record::value::Map;
use noodles::sam::header::record::value::map::ReadGroup;
use noodles::sam::header::record::value::map::read_group::tag as rg_tag;

/// Returns the index of `name` in the header's sequence dictionary.
#[must_use]
pub fn reference_index(header: &Header, name: &str) -> Option<usize> {
    header.reference_sequences().get_index_of(name.as_bytes())
}

/// Returns the name of the reference sequence at `index`.
#[must_use]
pub fn reference_name(header: &Header, index: usize) -> Option<String> {
    header.reference_sequences().get_index(index).map(|(name, _)| name.to_string())
}

/// Fields of an `@RG` header record that the converters copy onto records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadGroupDetails {
    pub library: Option<String>,
    pub platform_unit: Option<String>,
    pub sample: Option<String>,
}

impl ReadGroupDetails {
    fn from_map(rg: &Map<ReadGroup>) -> Self {
        let fields = rg.other_fields();
        let text = |value: Option<&BString>| value.map(ToString::to_string);
        Self {
            library: text(fields.get(&rg_tag::LIBRARY)),
            platform_unit: text(fields.get(&rg_tag::PLATFORM_UNIT)),
            sample: text(fields.get(&rg_tag::SAMPLE)),
        }
    }
}

/// Looks up the `@RG` record with the given id.
///
/// Returns `None` if the header has no such read group.
#[must_use]
pub fn read_group_details(header: &Header, id: &str) -> Option<ReadGroupDetails> {
    header.read_groups().get(id.as_bytes()).map(ReadGroupDetails::from_map)
}
