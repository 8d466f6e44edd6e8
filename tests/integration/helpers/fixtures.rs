//! Shared headers and records for integration tests.

#![allow(dead_code)]

use std::num::NonZeroUsize;

use noodles::sam::Header;
use noodles::sam::header::record::value::Map;
use noodles::sam::header::record::value::map::read_group::tag as rg_tag;
use noodles::sam::header::record::value::map::{ReadGroup, ReferenceSequence};
use samconv::{Alignment, AlignmentRecord};

pub const REFERENCE_LENGTH: usize = 3_000_000;

/// A header with references `1` and `2` and read groups `rg1` (LB, PU, SM) and `rg2`
/// (no fields).
#[must_use]
pub fn test_header() -> Header {
    let reference = || Map::<ReferenceSequence>::new(NonZeroUsize::new(REFERENCE_LENGTH).unwrap());
    let rg1 = Map::<ReadGroup>::builder()
        .insert(rg_tag::LIBRARY, String::from("lib1"))
        .insert(rg_tag::PLATFORM_UNIT, String::from("flowcell.1"))
        .insert(rg_tag::SAMPLE, String::from("sample1"))
        .build()
        .unwrap();

    Header::builder()
        .add_reference_sequence("1", reference())
        .add_reference_sequence("2", reference())
        .add_read_group("rg1", rg1)
        .add_read_group("rg2", Map::<ReadGroup>::builder().build().unwrap())
        .build()
}

/// A mapped, unpaired read on reference `1` at 0-based start 9.
#[must_use]
pub fn mapped_alignment() -> Alignment {
    Alignment {
        read_name: Some("read1".to_string()),
        sequence: Some("ACGTACGTACGTACG".to_string()),
        quality_scores: Some("IIIIIHHHHH?????".to_string()),
        cigar: Some("5H10M5S".to_string()),
        reference_name: Some("1".to_string()),
        start: Some(9),
        mapping_quality: Some(42),
        read_mapped: Some(true),
        read_negative_strand: Some(true),
        primary_alignment: Some(true),
        ..Alignment::default()
    }
}

/// The first read of a properly paired template whose mate maps to reference `2`.
#[must_use]
pub fn paired_alignment() -> Alignment {
    Alignment {
        read_paired: Some(true),
        proper_pair: Some(true),
        mate_mapped: Some(true),
        mate_negative_strand: Some(false),
        read_in_fragment: Some(0),
        mate_reference_name: Some("2".to_string()),
        mate_alignment_start: Some(199),
        insert_size: Some(-310),
        ..mapped_alignment()
    }
}

/// `paired_alignment` expressed in the legacy schema.
#[must_use]
pub fn paired_alignment_record() -> AlignmentRecord {
    AlignmentRecord {
        read_name: Some("read1".to_string()),
        sequence: Some("ACGTACGTACGTACG".to_string()),
        qual: Some("IIIIIHHHHH?????".to_string()),
        cigar: Some("5H10M5S".to_string()),
        contig_name: Some("1".to_string()),
        start: Some(9),
        mapq: Some(42),
        read_mapped: Some(true),
        read_negative_strand: Some(true),
        primary_alignment: Some(true),
        read_paired: Some(true),
        proper_pair: Some(true),
        mate_mapped: Some(true),
        mate_negative_strand: Some(false),
        read_num: Some(0),
        mate_contig_name: Some("2".to_string()),
        mate_alignment_start: Some(199),
        inferred_insert_size: Some(-310),
        ..AlignmentRecord::default()
    }
}
