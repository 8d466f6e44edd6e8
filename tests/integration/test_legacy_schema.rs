//! The legacy schema converts exactly like the current one.

use samconv::{
    Alignment, AlignmentRecord, AlignmentToSamRecord, ConversionStringency, Converter, SamRecord,
};

use crate::helpers::{paired_alignment, paired_alignment_record, test_header};

fn to_sam<A>(source: &A) -> SamRecord
where
    A: samconv::AlignmentSource,
{
    let header = test_header();
    AlignmentToSamRecord::new(&header)
        .convert(Some(source), ConversionStringency::Strict)
        .unwrap()
        .unwrap()
}

#[test]
fn test_legacy_record_matches_current_record() {
    assert_eq!(to_sam(&paired_alignment_record()), to_sam(&paired_alignment()));
}

#[test]
fn test_legacy_upgrade_is_field_for_field() {
    assert_eq!(Alignment::from(paired_alignment_record()), paired_alignment());
}

#[test]
fn test_legacy_record_with_tags_and_read_group() {
    let legacy = AlignmentRecord {
        record_group_name: Some("rg1".to_string()),
        orig_qual: Some("###############".to_string()),
        old_cigar: Some("15M".to_string()),
        old_position: Some(3),
        attributes: Some("XA:i:5\tOC:Z:dropped".to_string()),
        ..paired_alignment_record()
    };
    let record = to_sam(&legacy);
    assert_eq!(record.read_group_id(), Some("rg1"));
    assert_eq!(record.original_base_qualities(), Some("###############"));
    assert_eq!(record.original_cigar(), Some("15M"));
    assert_eq!(record.original_position(), Some(4));
    assert_eq!(record.tags().get("XA").and_then(|v| v.as_integer()), Some(5));
    assert_eq!(record, to_sam(&Alignment::from(legacy)));
}

#[test]
fn test_legacy_json() {
    let json = r#"{"readName":"r","sequence":"AC","contigName":"2","start":4,"cigar":"2M","readMapped":true,"mapq":17}"#;
    let legacy: AlignmentRecord = serde_json::from_str(json).unwrap();
    let record = to_sam(&legacy);
    assert_eq!(record.reference_index(), 1);
    assert_eq!(record.alignment_start(), 5);
    assert_eq!(record.mapping_quality(), 17);
}
