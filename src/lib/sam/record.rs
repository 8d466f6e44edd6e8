//! SAM alignment record value type.

use std::fmt;

use noodles::sam::alignment::record::Flags;
use noodles::sam::alignment::record_buf::Cigar;

use crate::cigar;
use crate::coords::{
    NO_ALIGNMENT_REFERENCE_INDEX, NO_ALIGNMENT_REFERENCE_NAME, NO_ALIGNMENT_START, is_unmapped,
};
use crate::phred::{UNKNOWN_QUALITY, phred_to_fastq};
use crate::tags::{
    self, MISMATCHED_POSITIONS, ORIGINAL_CIGAR, ORIGINAL_POSITION, ORIGINAL_QUALITY_SCORES,
    READ_GROUP, TagList, TagName, TagValue,
};

/// Read name or sequence of a record that has none
pub const MISSING_TEXT: &str = "*";

/// An immutable SAM alignment record.
///
/// Unaligned fields carry the SAM sentinels rather than being optional: reference
/// index `-1`, reference name `*`, position `0`, CIGAR `*`. Quality scores are raw
/// Phred values; an empty list is written as `*`.
#[derive(Debug, Clone, PartialEq)]
pub struct SamRecord {
    read_name: String,
    flags: Flags,
    reference_name: String,
    reference_index: i32,
    alignment_start: i32,
    mapping_quality: u8,
    cigar: Cigar,
    mate_reference_name: String,
    mate_reference_index: i32,
    mate_alignment_start: i32,
    template_length: i32,
    sequence: String,
    quality_scores: Vec<u8>,
    tags: TagList,
}

impl Default for SamRecord {
    fn default() -> Self {
        Self {
            read_name: MISSING_TEXT.to_string(),
            flags: Flags::empty(),
            reference_name: NO_ALIGNMENT_REFERENCE_NAME.to_string(),
            reference_index: NO_ALIGNMENT_REFERENCE_INDEX,
            alignment_start: NO_ALIGNMENT_START,
            mapping_quality: 0,
            cigar: Cigar::default(),
            mate_reference_name: NO_ALIGNMENT_REFERENCE_NAME.to_string(),
            mate_reference_index: NO_ALIGNMENT_REFERENCE_INDEX,
            mate_alignment_start: NO_ALIGNMENT_START,
            template_length: 0,
            sequence: MISSING_TEXT.to_string(),
            quality_scores: Vec::new(),
            tags: TagList::new(),
        }
    }
}

impl SamRecord {
    #[must_use]
    pub fn builder() -> SamRecordBuilder {
        SamRecordBuilder::default()
    }

    #[must_use]
    pub fn read_name(&self) -> &str {
        &self.read_name
    }

    #[must_use]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    #[must_use]
    pub fn reference_name(&self) -> &str {
        &self.reference_name
    }

    #[must_use]
    pub fn reference_index(&self) -> i32 {
        self.reference_index
    }

    /// 1-based alignment start, `0` if unaligned.
    #[must_use]
    pub fn alignment_start(&self) -> i32 {
        self.alignment_start
    }

    #[must_use]
    pub fn mapping_quality(&self) -> u8 {
        self.mapping_quality
    }

    #[must_use]
    pub fn cigar(&self) -> &Cigar {
        &self.cigar
    }

    /// CIGAR text, `*` if there are no operations.
    #[must_use]
    pub fn cigar_string(&self) -> String {
        cigar::format(&self.cigar)
    }

    #[must_use]
    pub fn mate_reference_name(&self) -> &str {
        &self.mate_reference_name
    }

    #[must_use]
    pub fn mate_reference_index(&self) -> i32 {
        self.mate_reference_index
    }

    #[must_use]
    pub fn mate_alignment_start(&self) -> i32 {
        self.mate_alignment_start
    }

    #[must_use]
    pub fn template_length(&self) -> i32 {
        self.template_length
    }

    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    #[must_use]
    pub fn quality_scores(&self) -> &[u8] {
        &self.quality_scores
    }

    /// Phred+33 quality text, `*` if unknown.
    #[must_use]
    pub fn base_quality_string(&self) -> String {
        if self.quality_scores.is_empty() {
            UNKNOWN_QUALITY.to_string()
        } else {
            phred_to_fastq(&self.quality_scores)
        }
    }

    #[must_use]
    pub fn tags(&self) -> &TagList {
        &self.tags
    }

    /// True if the record carries a reference index other than the sentinel.
    #[must_use]
    pub fn is_mapped(&self) -> bool {
        !is_unmapped(self.reference_index)
    }

    #[must_use]
    pub fn is_paired(&self) -> bool {
        self.flags.is_segmented()
    }

    fn string_tag(&self, name: &str) -> Option<&str> {
        self.tags.get(name).and_then(TagValue::as_str)
    }

    #[must_use]
    pub fn read_group_id(&self) -> Option<&str> {
        self.string_tag(READ_GROUP)
    }

    #[must_use]
    pub fn mismatching_positions(&self) -> Option<&str> {
        self.string_tag(MISMATCHED_POSITIONS)
    }

    #[must_use]
    pub fn original_cigar(&self) -> Option<&str> {
        self.string_tag(ORIGINAL_CIGAR)
    }

    /// 1-based position before realignment (`OP`).
    #[must_use]
    pub fn original_position(&self) -> Option<i64> {
        self.tags.get(ORIGINAL_POSITION).and_then(TagValue::as_integer)
    }

    /// Phred+33 quality text before recalibration (`OQ`).
    #[must_use]
    pub fn original_base_qualities(&self) -> Option<&str> {
        self.string_tag(ORIGINAL_QUALITY_SCORES)
    }
}

/// Writes the record as a SAM text line without a trailing newline.
impl fmt::Display for SamRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.read_name,
            u16::from(self.flags),
            self.reference_name,
            self.alignment_start,
            self.mapping_quality,
            self.cigar_string(),
            self.mate_reference_name,
            self.mate_alignment_start,
            self.template_length,
            self.sequence,
            self.base_quality_string(),
        )?;
        if !self.tags.is_empty() {
            write!(f, "\t{}", tags::encode(&self.tags))?;
        }
        Ok(())
    }
}

/// Builds a [`SamRecord`], starting from an unaligned record with no name.
#[derive(Debug, Clone, Default)]
pub struct SamRecordBuilder {
    record: SamRecord,
}

impl SamRecordBuilder {
    #[must_use]
    pub fn read_name(mut self, name: &str) -> Self {
        self.record.read_name = name.to_string();
        self
    }

    #[must_use]
    pub fn flags(mut self, flags: Flags) -> Self {
        self.record.flags = flags;
        self
    }

    /// Sets the reference name and its index in the sequence dictionary.
    #[must_use]
    pub fn reference(mut self, name: &str, index: i32) -> Self {
        self.record.reference_name = name.to_string();
        self.record.reference_index = index;
        self
    }

    #[must_use]
    pub fn alignment_start(mut self, position: i32) -> Self {
        self.record.alignment_start = position;
        self
    }

    #[must_use]
    pub fn mapping_quality(mut self, mapq: u8) -> Self {
        self.record.mapping_quality = mapq;
        self
    }

    #[must_use]
    pub fn cigar(mut self, cigar: Cigar) -> Self {
        self.record.cigar = cigar;
        self
    }

    /// Sets the mate reference name and its index in the sequence dictionary.
    #[must_use]
    pub fn mate_reference(mut self, name: &str, index: i32) -> Self {
        self.record.mate_reference_name = name.to_string();
        self.record.mate_reference_index = index;
        self
    }

    #[must_use]
    pub fn mate_alignment_start(mut self, position: i32) -> Self {
        self.record.mate_alignment_start = position;
        self
    }

    #[must_use]
    pub fn template_length(mut self, length: i32) -> Self {
        self.record.template_length = length;
        self
    }

    #[must_use]
    pub fn sequence(mut self, sequence: &str) -> Self {
        self.record.sequence = sequence.to_string();
        self
    }

    /// Sets raw Phred scores; an empty list means unknown.
    #[must_use]
    pub fn quality_scores(mut self, scores: Vec<u8>) -> Self {
        self.record.quality_scores = scores;
        self
    }

    /// Adds a tag, replacing any existing value with the same name.
    #[must_use]
    pub fn tag(mut self, name: TagName, value: impl Into<TagValue>) -> Self {
        self.record.tags.insert(name, value.into());
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: TagList) -> Self {
        self.record.tags = tags;
        self
    }

    #[must_use]
    pub fn build(self) -> SamRecord {
        self.record
    }
}
