//! Normalized alignment to SAM record.

use log::debug;
use noodles::sam::Header;
use noodles::sam::alignment::record::Flags;

use super::{Conversion, ConversionStringency, Converter};
use crate::alignment::AlignmentSource;
use crate::cigar;
use crate::coords::to_one_based;
use crate::errors::{FailureKind, Result};
use crate::flags::recompose;
use crate::header::{read_group_details, reference_index};
use crate::phred::{UNKNOWN_QUALITY, fastq_to_phred};
use crate::sam::{SamRecord, SamRecordBuilder};
use crate::tags::{
    self, LIBRARY, MISMATCHED_POSITIONS, ORIGINAL_CIGAR, ORIGINAL_POSITION,
    ORIGINAL_QUALITY_SCORES, PLATFORM_UNIT, READ_GROUP, TagList, TagName, TagValue,
};

const TARGET_TYPE: &str = "SamRecord";

/// Converts either normalized schema version into a [`SamRecord`].
///
/// Reference names are resolved against the header's sequence dictionary and read
/// groups are enriched with the library and platform unit from their `@RG` line.
#[derive(Debug, Clone, Copy)]
pub struct AlignmentToSamRecord<'h> {
    header: &'h Header,
}

impl<'h> AlignmentToSamRecord<'h> {
    #[must_use]
    pub fn new(header: &'h Header) -> Self {
        Self { header }
    }

    /// Resolves a reference name to `(name, index)`, or `None` if the failure was
    /// tolerated.
    fn resolve<A: AlignmentSource>(
        &self,
        conversion: &Conversion,
        source: &A,
        name: &str,
    ) -> Result<Option<(String, i32)>> {
        let index = reference_index(self.header, name).and_then(|i| i32::try_from(i).ok());
        match index {
            Some(index) => Ok(Some((name.to_string(), index))),
            None => {
                let kind = FailureKind::UnknownReferenceName { name: name.to_string() };
                conversion.warn_or_fail(source, kind).map(|()| None)
            }
        }
    }

    /// Places a mapped read. Returns false if the read has no usable reference or start
    /// and must be written unaligned.
    fn place<A: AlignmentSource>(
        &self,
        conversion: &Conversion,
        source: &A,
        mut builder: SamRecordBuilder,
    ) -> Result<(SamRecordBuilder, bool)> {
        let Some(name) = source.reference_name() else {
            conversion.warn_or_fail(source, FailureKind::MissingReferenceName)?;
            return Ok((builder, false));
        };
        let Some((name, index)) = self.resolve(conversion, source, name)? else {
            return Ok((builder, false));
        };
        let Some(start) = source.start() else {
            conversion.warn_or_fail(source, FailureKind::MissingField { field: "start" })?;
            return Ok((builder, false));
        };
        let Some(position) = conversion.check(source, to_one_based(start))? else {
            return Ok((builder, false));
        };
        builder = builder.reference(&name, index).alignment_start(position);

        if let Some(text) = source.cigar() {
            if let Some(parsed) = conversion.check(source, cigar::parse(text))? {
                builder = builder.cigar(parsed);
            }
        }

        let mapq = source.mapping_quality().unwrap_or(0);
        match u8::try_from(mapq) {
            Ok(mapq) => builder = builder.mapping_quality(mapq),
            Err(_) => {
                let kind = FailureKind::ValueOutOfRange {
                    field: "mappingQuality",
                    value: i64::from(mapq),
                };
                conversion.warn_or_fail(source, kind)?;
            }
        }

        Ok((builder, true))
    }

    /// Builds the tag list: promoted fields, then generic attributes, then read group.
    fn tags<A: AlignmentSource>(&self, conversion: &Conversion, source: &A) -> Result<TagList> {
        let mut tags = TagList::new();

        if let Some(md) = source.mismatching_positions() {
            tags.insert(TagName::known(MISMATCHED_POSITIONS), TagValue::from(md));
        }
        if let Some(oc) = source.original_cigar() {
            tags.insert(TagName::known(ORIGINAL_CIGAR), TagValue::from(oc));
        }
        if let Some(op) = source.original_start() {
            let step = to_one_based(op).map_err(|kind| kind.for_field("originalStart"));
            if let Some(position) = conversion.check(source, step)? {
                tags.insert(TagName::known(ORIGINAL_POSITION), TagValue::from(position));
            }
        }
        if let Some(oq) = source.original_quality_scores() {
            if conversion.check(source, fastq_to_phred(oq))?.is_some() {
                tags.insert(TagName::known(ORIGINAL_QUALITY_SCORES), TagValue::from(oq));
            }
        }

        if let Some(text) = source.attributes() {
            for parsed in tags::decode(text) {
                let Some(tag) = conversion.check(source, parsed)? else {
                    continue;
                };
                if tags::is_reserved(tag.name().as_str()) {
                    debug!(target: "samconv::convert", "skipping reserved attribute {}", tag.name());
                    continue;
                }
                tags.insert_tag(tag);
            }
        }

        if let Some(id) = source.read_group_id() {
            tags.insert(TagName::known(READ_GROUP), TagValue::from(id));
            if let Some(details) = read_group_details(self.header, id) {
                if let Some(library) = details.library {
                    tags.insert(TagName::known(LIBRARY), TagValue::from(library));
                }
                if let Some(platform_unit) = details.platform_unit {
                    tags.insert(TagName::known(PLATFORM_UNIT), TagValue::from(platform_unit));
                }
            }
        }

        Ok(tags)
    }
}

impl<A: AlignmentSource> Converter<A, SamRecord> for AlignmentToSamRecord<'_> {
    fn convert(&self, source: Option<&A>, stringency: ConversionStringency) -> Result<Option<SamRecord>> {
        let conversion = Conversion::new(A::SCHEMA_NAME, TARGET_TYPE, stringency);
        let Some(source) = source else {
            conversion.warn_or_fail(&source, FailureKind::NullSource)?;
            return Ok(None);
        };

        let mut builder = SamRecord::builder();

        match source.read_name() {
            Some(name) => builder = builder.read_name(name),
            None => conversion.warn_or_fail(source, FailureKind::MissingField { field: "readName" })?,
        }
        match source.sequence() {
            Some(sequence) => builder = builder.sequence(sequence),
            None => conversion.warn_or_fail(source, FailureKind::MissingField { field: "sequence" })?,
        }

        if let Some(quality) = source.quality_scores().filter(|q| *q != UNKNOWN_QUALITY) {
            if let Some(scores) = conversion.check(source, fastq_to_phred(quality))? {
                builder = builder.quality_scores(scores);
            }
        }

        let conditions = source.flag_conditions();
        let mut flags = recompose(&conditions);

        if conditions.is_mapped() {
            let (placed_builder, placed) = self.place(&conversion, source, builder)?;
            builder = placed_builder;
            if !placed {
                flags.insert(Flags::UNMAPPED);
            }
        }

        if conditions.is_paired() {
            if let Some(name) = source.mate_reference_name() {
                if let Some((name, index)) = self.resolve(&conversion, source, name)? {
                    builder = builder.mate_reference(&name, index);
                }
            }
            if let Some(start) = source.mate_alignment_start() {
                let step = to_one_based(start).map_err(|kind| kind.for_field("mateAlignmentStart"));
                if let Some(position) = conversion.check(source, step)? {
                    builder = builder.mate_alignment_start(position);
                }
            }
        }

        if let Some(size) = source.insert_size() {
            let step = i32::try_from(size)
                .map_err(|_| FailureKind::ValueOutOfRange { field: "insertSize", value: size });
            if let Some(length) = conversion.check(source, step)? {
                builder = builder.template_length(length);
            }
        }

        let tags = self.tags(&conversion, source)?;
        Ok(Some(builder.flags(flags).tags(tags).build()))
    }
}
