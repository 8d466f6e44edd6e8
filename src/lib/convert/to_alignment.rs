//! SAM record to normalized alignment.

use noodles::sam::Header;

use super::{Conversion, ConversionStringency, Converter};
use crate::alignment::Alignment;
use crate::cigar::{hard_clip_end, hard_clip_start};
use crate::coords::{UNKNOWN_MAPPING_QUALITY, end_position, is_unmapped, to_zero_based};
use crate::errors::{FailureKind, Result};
use crate::flags::decompose;
use crate::header::{read_group_details, reference_name};
use crate::sam::SamRecord;
use crate::tags::{
    self, MISMATCHED_POSITIONS, ORIGINAL_CIGAR, ORIGINAL_POSITION, ORIGINAL_QUALITY_SCORES,
    READ_GROUP, Tag, TagList, validate_tag,
};

const SOURCE_TYPE: &str = "SamRecord";
const TARGET_TYPE: &str = "Alignment";

/// Converts a [`SamRecord`] into the current normalized schema.
///
/// With a header, the sample of the record's read group is copied onto the alignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SamRecordToAlignment<'h> {
    header: Option<&'h Header>,
}

impl<'h> SamRecordToAlignment<'h> {
    #[must_use]
    pub fn new() -> Self {
        Self { header: None }
    }

    #[must_use]
    pub fn with_header(header: &'h Header) -> Self {
        Self { header: Some(header) }
    }

    /// Names the reference at `index`. With a header the index must be in its sequence
    /// dictionary; `None` means that failure was tolerated.
    fn reference(
        &self,
        conversion: &Conversion,
        record: &SamRecord,
        index: i32,
        name: &str,
    ) -> Result<Option<String>> {
        let Some(header) = self.header else {
            return Ok(Some(name.to_string()));
        };
        match usize::try_from(index).ok().and_then(|i| reference_name(header, i)) {
            Some(resolved) => Ok(Some(resolved)),
            None => {
                let kind = FailureKind::UnknownReferenceName { name: name.to_string() };
                conversion.warn_or_fail(record, kind).map(|()| None)
            }
        }
    }
}

fn expect_string(conversion: &Conversion, record: &SamRecord, tag: &Tag) -> Result<Option<String>> {
    let step = tag.value().as_str().map(String::from).ok_or_else(|| FailureKind::MalformedTag {
        token: tags::format_tag(tag),
        reason: "expected a Z value".to_string(),
    });
    conversion.check(record, step)
}

fn original_start(tag: &Tag) -> std::result::Result<i64, FailureKind> {
    let position = tag.value().as_integer().ok_or_else(|| FailureKind::MalformedTag {
        token: tags::format_tag(tag),
        reason: "expected an i value".to_string(),
    })?;
    let position = i32::try_from(position)
        .map_err(|_| FailureKind::ValueOutOfRange { field: "originalStart", value: position })?;
    to_zero_based(position).map_err(|kind| kind.for_field("originalStart"))
}

impl Converter<SamRecord, Alignment> for SamRecordToAlignment<'_> {
    fn convert(
        &self,
        source: Option<&SamRecord>,
        stringency: ConversionStringency,
    ) -> Result<Option<Alignment>> {
        let conversion = Conversion::new(SOURCE_TYPE, TARGET_TYPE, stringency);
        let Some(record) = source else {
            conversion.warn_or_fail(&source, FailureKind::NullSource)?;
            return Ok(None);
        };

        let mut alignment = Alignment {
            read_name: Some(record.read_name().to_string()),
            sequence: Some(record.sequence().to_string()),
            ..Alignment::default()
        };

        let cigar = record.cigar();
        if !cigar.as_ref().is_empty() {
            alignment.cigar = Some(record.cigar_string());
            alignment.bases_trimmed_from_start = i32::try_from(hard_clip_start(cigar)).ok();
            alignment.bases_trimmed_from_end = i32::try_from(hard_clip_end(cigar)).ok();
        }

        if !record.quality_scores().is_empty() {
            alignment.quality_scores = Some(record.base_quality_string());
        }

        let placed = if record.is_mapped() {
            self.reference(&conversion, record, record.reference_index(), record.reference_name())?
        } else {
            None
        };
        if let Some(name) = placed {
            alignment.reference_name = Some(name);
            if let Some(start) = conversion.check(record, to_zero_based(record.alignment_start()))? {
                alignment.start = Some(start);
                alignment.end = conversion.check(record, end_position(start, cigar))?;
            }
            if record.mapping_quality() != UNKNOWN_MAPPING_QUALITY {
                alignment.mapping_quality = Some(i32::from(record.mapping_quality()));
            }
        }

        let conditions = decompose(Some(record.flags()));
        alignment.set_flag_conditions(conditions);

        let mate = if conditions.is_paired() && !is_unmapped(record.mate_reference_index()) {
            let index = record.mate_reference_index();
            self.reference(&conversion, record, index, record.mate_reference_name())?
        } else {
            None
        };
        if let Some(name) = mate {
            alignment.mate_reference_name = Some(name);
            let step = to_zero_based(record.mate_alignment_start())
                .map_err(|kind| kind.for_field("mateAlignmentStart"));
            alignment.mate_alignment_start = conversion.check(record, step)?;
        }

        if record.template_length() != 0 {
            alignment.insert_size = Some(i64::from(record.template_length()));
        }

        let mut attributes = TagList::new();
        for tag in record.tags() {
            if conversion.check(record, validate_tag(tag))?.is_none() {
                continue;
            }
            match tag.name().as_str() {
                READ_GROUP => alignment.read_group_id = expect_string(&conversion, record, tag)?,
                MISMATCHED_POSITIONS => {
                    alignment.mismatching_positions = expect_string(&conversion, record, tag)?;
                }
                ORIGINAL_CIGAR => alignment.original_cigar = expect_string(&conversion, record, tag)?,
                ORIGINAL_QUALITY_SCORES => {
                    alignment.original_quality_scores = expect_string(&conversion, record, tag)?;
                }
                ORIGINAL_POSITION => {
                    alignment.original_start = conversion.check(record, original_start(tag))?;
                }
                _ => {
                    attributes.insert_tag(tag.clone());
                }
            }
        }

        if let (Some(header), Some(id)) = (self.header, alignment.read_group_id.as_deref()) {
            alignment.read_group_sample_id = read_group_details(header, id).and_then(|rg| rg.sample);
        }

        if !attributes.is_empty() {
            alignment.attributes = Some(tags::encode(&attributes));
        }

        Ok(Some(alignment))
    }
}
