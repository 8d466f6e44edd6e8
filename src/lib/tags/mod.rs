//! SAM optional fields ("tags").
//!
//! - [`value`] holds the typed names and values
//! - [`codec`] parses and formats the `TAG:TYPE:VALUE` text grammar
//! - [`TagList`] is the ordered per-record collection
//!
//! A handful of tags are promoted to first-class fields on the normalized record and
//! never travel through the generic attribute string; see [`is_reserved`].

pub mod codec;
pub mod value;

pub use codec::{decode, decode_all, encode, format_tag, parse_tag, validate_tag};
pub use value::{ArrayType, TagArray, TagName, TagType, TagValue};

/// Mismatching positions (`MD:Z`)
pub const MISMATCHED_POSITIONS: &str = "MD";
/// Original CIGAR before realignment (`OC:Z`)
pub const ORIGINAL_CIGAR: &str = "OC";
/// Original 1-based position before realignment (`OP:i`)
pub const ORIGINAL_POSITION: &str = "OP";
/// Original base qualities (`OQ:Z`)
pub const ORIGINAL_QUALITY_SCORES: &str = "OQ";
/// Read group identifier (`RG:Z`)
pub const READ_GROUP: &str = "RG";
/// Library, copied from the read group header record (`LB:Z`)
pub const LIBRARY: &str = "LB";
/// Platform unit, copied from the read group header record (`PU:Z`)
pub const PLATFORM_UNIT: &str = "PU";

/// Tags held as dedicated fields on the normalized record.
pub const RESERVED_TAGS: [&str; 5] =
    [MISMATCHED_POSITIONS, ORIGINAL_CIGAR, ORIGINAL_POSITION, ORIGINAL_QUALITY_SCORES, READ_GROUP];

/// Returns true if `name` is promoted to a dedicated field and must be kept out of
/// the generic attribute string.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED_TAGS.contains(&name)
}

/// A single optional field.
///
/// A tag parsed from text keeps the value as written when it differs from the
/// canonical formatting (`XF:f:1.0`, `XI:i:+5`), so that encoding reproduces the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    name: TagName,
    value: TagValue,
    text: Option<String>,
}

impl Tag {
    #[must_use]
    pub fn new(name: TagName, value: TagValue) -> Self {
        Self { name, value, text: None }
    }

    #[must_use]
    pub fn name(&self) -> &TagName {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &TagValue {
        &self.value
    }

    /// The value text the tag was parsed from, if it is not the canonical formatting.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub fn into_parts(self) -> (TagName, TagValue) {
        (self.name, self.value)
    }
}

/// An ordered collection of optional fields with at most one entry per name.
///
/// Inserting a name that is already present replaces its value without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagList {
    tags: Vec<Tag>,
}

impl TagList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the value it replaced if the name was already present.
    pub fn insert(&mut self, name: TagName, value: TagValue) -> Option<TagValue> {
        self.insert_tag(Tag::new(name, value)).map(|old| old.value)
    }

    /// Inserts a tag as is, keeping the text it was parsed from.
    pub fn insert_tag(&mut self, tag: Tag) -> Option<Tag> {
        if let Some(existing) = self.tags.iter_mut().find(|t| t.name == tag.name) {
            Some(std::mem::replace(existing, tag))
        } else {
            self.tags.push(tag);
            None
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.tags.iter().find(|t| t.name == name).map(|t| &t.value)
    }

    /// Removes a tag, preserving the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<TagValue> {
        let i = self.tags.iter().position(|t| t.name == name)?;
        Some(self.tags.remove(i).value)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Extend<Tag> for TagList {
    fn extend<I: IntoIterator<Item = Tag>>(&mut self, iter: I) {
        for tag in iter {
            self.insert_tag(tag);
        }
    }
}

impl FromIterator<Tag> for TagList {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl IntoIterator for TagList {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}
