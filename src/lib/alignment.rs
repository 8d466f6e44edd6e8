//! Normalized alignment records.
//!
//! Two schema versions describe the same read: [`Alignment`] (current) and
//! [`AlignmentRecord`] (legacy). They differ only in the names of a handful of fields.
//! Both implement [`AlignmentSource`], which is what the SAM converter reads from, so a
//! single converter serves either version.
//!
//! Coordinates are 0-based half-open. Every field is optional; an absent field means
//! "unknown", which is distinct from `false` or zero.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::flags::FlagConditions;

/// Read access to the fields the SAM converter needs.
pub trait AlignmentSource: Debug {
    /// Schema name used in conversion failure messages.
    const SCHEMA_NAME: &'static str;

    fn read_name(&self) -> Option<&str>;
    fn sequence(&self) -> Option<&str>;
    /// Phred+33 quality string
    fn quality_scores(&self) -> Option<&str>;
    fn cigar(&self) -> Option<&str>;
    fn reference_name(&self) -> Option<&str>;
    /// 0-based start
    fn start(&self) -> Option<i64>;
    fn mapping_quality(&self) -> Option<i32>;
    fn flag_conditions(&self) -> FlagConditions;
    fn mate_reference_name(&self) -> Option<&str>;
    /// 0-based mate start
    fn mate_alignment_start(&self) -> Option<i64>;
    fn insert_size(&self) -> Option<i64>;
    fn read_group_id(&self) -> Option<&str>;
    fn mismatching_positions(&self) -> Option<&str>;
    fn original_quality_scores(&self) -> Option<&str>;
    fn original_cigar(&self) -> Option<&str>;
    /// 0-based start before realignment
    fn original_start(&self) -> Option<i64>;
    /// Tab-separated `TAG:TYPE:VALUE` text
    fn attributes(&self) -> Option<&str>;
}

/// A read alignment in the current schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Alignment {
    pub read_name: Option<String>,
    pub sequence: Option<String>,
    pub quality_scores: Option<String>,
    pub cigar: Option<String>,
    pub reference_name: Option<String>,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub mapping_quality: Option<i32>,
    pub read_mapped: Option<bool>,
    pub read_negative_strand: Option<bool>,
    pub read_paired: Option<bool>,
    pub proper_pair: Option<bool>,
    pub mate_mapped: Option<bool>,
    pub mate_negative_strand: Option<bool>,
    pub read_in_fragment: Option<i32>,
    pub primary_alignment: Option<bool>,
    pub supplementary_alignment: Option<bool>,
    pub duplicate_read: Option<bool>,
    pub failed_vendor_quality_checks: Option<bool>,
    pub mate_reference_name: Option<String>,
    pub mate_alignment_start: Option<i64>,
    pub insert_size: Option<i64>,
    pub read_group_id: Option<String>,
    pub read_group_sample_id: Option<String>,
    pub mismatching_positions: Option<String>,
    pub original_quality_scores: Option<String>,
    pub original_cigar: Option<String>,
    pub original_start: Option<i64>,
    pub attributes: Option<String>,
    pub bases_trimmed_from_start: Option<i32>,
    pub bases_trimmed_from_end: Option<i32>,
}

impl Alignment {
    /// Copies flag-derived conditions onto this record.
    pub fn set_flag_conditions(&mut self, conditions: FlagConditions) {
        self.read_paired = conditions.read_paired;
        self.proper_pair = conditions.proper_pair;
        self.read_mapped = conditions.read_mapped;
        self.mate_mapped = conditions.mate_mapped;
        self.read_negative_strand = conditions.read_negative_strand;
        self.mate_negative_strand = conditions.mate_negative_strand;
        self.read_in_fragment = conditions.read_in_fragment;
        self.primary_alignment = conditions.primary_alignment;
        self.supplementary_alignment = conditions.supplementary_alignment;
        self.duplicate_read = conditions.duplicate_read;
        self.failed_vendor_quality_checks = conditions.failed_vendor_quality_checks;
    }
}

impl AlignmentSource for Alignment {
    const SCHEMA_NAME: &'static str = "Alignment";

    fn read_name(&self) -> Option<&str> {
        self.read_name.as_deref()
    }

    fn sequence(&self) -> Option<&str> {
        self.sequence.as_deref()
    }

    fn quality_scores(&self) -> Option<&str> {
        self.quality_scores.as_deref()
    }

    fn cigar(&self) -> Option<&str> {
        self.cigar.as_deref()
    }

    fn reference_name(&self) -> Option<&str> {
        self.reference_name.as_deref()
    }

    fn start(&self) -> Option<i64> {
        self.start
    }

    fn mapping_quality(&self) -> Option<i32> {
        self.mapping_quality
    }

    fn flag_conditions(&self) -> FlagConditions {
        FlagConditions {
            read_paired: self.read_paired,
            proper_pair: self.proper_pair,
            read_mapped: self.read_mapped,
            mate_mapped: self.mate_mapped,
            read_negative_strand: self.read_negative_strand,
            mate_negative_strand: self.mate_negative_strand,
            read_in_fragment: self.read_in_fragment,
            primary_alignment: self.primary_alignment,
            supplementary_alignment: self.supplementary_alignment,
            duplicate_read: self.duplicate_read,
            failed_vendor_quality_checks: self.failed_vendor_quality_checks,
        }
    }

    fn mate_reference_name(&self) -> Option<&str> {
        self.mate_reference_name.as_deref()
    }

    fn mate_alignment_start(&self) -> Option<i64> {
        self.mate_alignment_start
    }

    fn insert_size(&self) -> Option<i64> {
        self.insert_size
    }

    fn read_group_id(&self) -> Option<&str> {
        self.read_group_id.as_deref()
    }

    fn mismatching_positions(&self) -> Option<&str> {
        self.mismatching_positions.as_deref()
    }

    fn original_quality_scores(&self) -> Option<&str> {
        self.original_quality_scores.as_deref()
    }

    fn original_cigar(&self) -> Option<&str> {
        self.original_cigar.as_deref()
    }

    fn original_start(&self) -> Option<i64> {
        self.original_start
    }

    fn attributes(&self) -> Option<&str> {
        self.attributes.as_deref()
    }
}

/// A read alignment in the legacy schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlignmentRecord {
    pub read_name: Option<String>,
    pub sequence: Option<String>,
    pub qual: Option<String>,
    pub cigar: Option<String>,
    pub contig_name: Option<String>,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub mapq: Option<i32>,
    pub read_mapped: Option<bool>,
    pub read_negative_strand: Option<bool>,
    pub read_paired: Option<bool>,
    pub proper_pair: Option<bool>,
    pub mate_mapped: Option<bool>,
    pub mate_negative_strand: Option<bool>,
    pub read_num: Option<i32>,
    pub primary_alignment: Option<bool>,
    pub supplementary_alignment: Option<bool>,
    pub duplicate_read: Option<bool>,
    pub failed_vendor_quality_checks: Option<bool>,
    pub mate_contig_name: Option<String>,
    pub mate_alignment_start: Option<i64>,
    pub inferred_insert_size: Option<i64>,
    pub record_group_name: Option<String>,
    pub record_group_sample: Option<String>,
    pub mismatching_positions: Option<String>,
    pub orig_qual: Option<String>,
    pub old_cigar: Option<String>,
    pub old_position: Option<i64>,
    pub attributes: Option<String>,
    pub bases_trimmed_from_start: Option<i32>,
    pub bases_trimmed_from_end: Option<i32>,
}

impl AlignmentSource for AlignmentRecord {
    const SCHEMA_NAME: &'static str = "AlignmentRecord";

    fn read_name(&self) -> Option<&str> {
        self.read_name.as_deref()
    }

    fn sequence(&self) -> Option<&str> {
        self.sequence.as_deref()
    }

    fn quality_scores(&self) -> Option<&str> {
        self.qual.as_deref()
    }

    fn cigar(&self) -> Option<&str> {
        self.cigar.as_deref()
    }

    fn reference_name(&self) -> Option<&str> {
        self.contig_name.as_deref()
    }

    fn start(&self) -> Option<i64> {
        self.start
    }

    fn mapping_quality(&self) -> Option<i32> {
        self.mapq
    }

    fn flag_conditions(&self) -> FlagConditions {
        FlagConditions {
            read_paired: self.read_paired,
            proper_pair: self.proper_pair,
            read_mapped: self.read_mapped,
            mate_mapped: self.mate_mapped,
            read_negative_strand: self.read_negative_strand,
            mate_negative_strand: self.mate_negative_strand,
            read_in_fragment: self.read_num,
            primary_alignment: self.primary_alignment,
            supplementary_alignment: self.supplementary_alignment,
            duplicate_read: self.duplicate_read,
            failed_vendor_quality_checks: self.failed_vendor_quality_checks,
        }
    }

    fn mate_reference_name(&self) -> Option<&str> {
        self.mate_contig_name.as_deref()
    }

    fn mate_alignment_start(&self) -> Option<i64> {
        self.mate_alignment_start
    }

    fn insert_size(&self) -> Option<i64> {
        self.inferred_insert_size
    }

    fn read_group_id(&self) -> Option<&str> {
        self.record_group_name.as_deref()
    }

    fn mismatching_positions(&self) -> Option<&str> {
        self.mismatching_positions.as_deref()
    }

    fn original_quality_scores(&self) -> Option<&str> {
        self.orig_qual.as_deref()
    }

    fn original_cigar(&self) -> Option<&str> {
        self.old_cigar.as_deref()
    }

    fn original_start(&self) -> Option<i64> {
        self.old_position
    }

    fn attributes(&self) -> Option<&str> {
        self.attributes.as_deref()
    }
}

impl From<AlignmentRecord> for Alignment {
    fn from(record: AlignmentRecord) -> Self {
        Self {
            read_name: record.read_name,
            sequence: record.sequence,
            quality_scores: record.qual,
            cigar: record.cigar,
            reference_name: record.contig_name,
            start: record.start,
            end: record.end,
            mapping_quality: record.mapq,
            read_mapped: record.read_mapped,
            read_negative_strand: record.read_negative_strand,
            read_paired: record.read_paired,
            proper_pair: record.proper_pair,
            mate_mapped: record.mate_mapped,
            mate_negative_strand: record.mate_negative_strand,
            read_in_fragment: record.read_num,
            primary_alignment: record.primary_alignment,
            supplementary_alignment: record.supplementary_alignment,
            duplicate_read: record.duplicate_read,
            failed_vendor_quality_checks: record.failed_vendor_quality_checks,
            mate_reference_name: record.mate_contig_name,
            mate_alignment_start: record.mate_alignment_start,
            insert_size: record.inferred_insert_size,
            read_group_id: record.record_group_name,
            read_group_sample_id: record.record_group_sample,
            mismatching_positions: record.mismatching_positions,
            original_quality_scores: record.orig_qual,
            original_cigar: record.old_cigar,
            original_start: record.old_position,
            attributes: record.attributes,
            bases_trimmed_from_start: record.bases_trimmed_from_start,
            bases_trimmed_from_end: record.bases_trimmed_from_end,
        }
    }
}
