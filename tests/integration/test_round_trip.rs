//! Alignment to SAM record and back.

use samconv::{
    Alignment, AlignmentToSamRecord, ConversionStringency, Converter, SamRecord,
    SamRecordToAlignment, tags,
};

use crate::helpers::{mapped_alignment, paired_alignment, test_header};

fn to_sam(alignment: &Alignment) -> SamRecord {
    let header = test_header();
    AlignmentToSamRecord::new(&header)
        .convert(Some(alignment), ConversionStringency::Strict)
        .unwrap()
        .unwrap()
}

fn to_alignment(record: &SamRecord) -> Alignment {
    let header = test_header();
    SamRecordToAlignment::with_header(&header)
        .convert(Some(record), ConversionStringency::Strict)
        .unwrap()
        .unwrap()
}

#[test]
fn test_mapped_read_round_trip() {
    let original = mapped_alignment();
    let back = to_alignment(&to_sam(&original));

    assert_eq!(back.read_name, original.read_name);
    assert_eq!(back.sequence, original.sequence);
    assert_eq!(back.quality_scores, original.quality_scores);
    assert_eq!(back.reference_name, original.reference_name);
    assert_eq!(back.start, original.start);
    assert_eq!(back.read_negative_strand, original.read_negative_strand);
    assert_eq!(back.mapping_quality, original.mapping_quality);
    assert_eq!(back.cigar, original.cigar);
    assert_eq!(back.end, Some(19));
    assert_eq!(back.bases_trimmed_from_start, Some(5));
    assert_eq!(back.bases_trimmed_from_end, Some(0));
}

#[test]
fn test_start_is_one_based_in_sam() {
    let record = to_sam(&mapped_alignment());
    assert_eq!(record.alignment_start(), 10);

    let back = to_alignment(&record);
    assert_eq!(back.start, Some(9));
}

#[test]
fn test_unmapped_read() {
    let alignment = Alignment {
        read_name: Some("unaligned".to_string()),
        sequence: Some("NNNN".to_string()),
        mapping_quality: Some(60),
        read_mapped: Some(false),
        ..Alignment::default()
    };
    let record = to_sam(&alignment);
    assert_eq!(record.reference_index(), -1);
    assert_eq!(record.reference_name(), "*");
    assert_eq!(record.cigar_string(), "*");
    assert_eq!(record.mapping_quality(), 0);
    assert_eq!(record.alignment_start(), 0);
    assert_eq!(record.base_quality_string(), "*");

    let back = to_alignment(&record);
    assert_eq!(back.read_mapped, Some(false));
    assert_eq!(back.reference_name, None);
    assert_eq!(back.cigar, None);
    assert_eq!(back.quality_scores, None);
}

#[test]
fn test_paired_read_round_trip() {
    let original = paired_alignment();
    let record = to_sam(&original);
    assert_eq!(u16::from(record.flags()), 0x1 | 0x2 | 0x10 | 0x40);
    assert_eq!(record.mate_reference_name(), "2");
    assert_eq!(record.mate_reference_index(), 1);
    assert_eq!(record.mate_alignment_start(), 200);
    assert_eq!(record.template_length(), -310);

    let back = to_alignment(&record);
    assert_eq!(back.read_paired, Some(true));
    assert_eq!(back.proper_pair, Some(true));
    assert_eq!(back.mate_mapped, Some(true));
    assert_eq!(back.mate_negative_strand, Some(false));
    assert_eq!(back.read_in_fragment, Some(0));
    assert_eq!(back.mate_reference_name.as_deref(), Some("2"));
    assert_eq!(back.mate_alignment_start, Some(199));
    assert_eq!(back.insert_size, Some(-310));
}

#[test]
fn test_attributes_round_trip_without_reserved_tags() {
    let alignment = Alignment {
        attributes: Some("RG:Z:rg1\tMD:Z:10\tXA:i:5".to_string()),
        ..mapped_alignment()
    };
    let record = to_sam(&alignment);
    assert_eq!(tags::encode(record.tags()), "XA:i:5");

    let back = to_alignment(&record);
    assert_eq!(back.attributes.as_deref(), Some("XA:i:5"));
    assert_eq!(back.read_group_id, None);
    assert_eq!(back.mismatching_positions, None);
}

#[test]
fn test_promoted_fields_round_trip() {
    let alignment = Alignment {
        mismatching_positions: Some("3C6".to_string()),
        original_cigar: Some("12M".to_string()),
        original_start: Some(7),
        original_quality_scores: Some("###############".to_string()),
        attributes: Some("NM:i:1\tXS:Z:alt hit\tZB:B:C,1,2,3\tXF:f:1.0\tXG:B:f,0.50,1e3".to_string()),
        ..mapped_alignment()
    };
    let back = to_alignment(&to_sam(&alignment));
    assert_eq!(back.mismatching_positions, alignment.mismatching_positions);
    assert_eq!(back.original_cigar, alignment.original_cigar);
    assert_eq!(back.original_start, alignment.original_start);
    assert_eq!(back.original_quality_scores, alignment.original_quality_scores);
    assert_eq!(back.attributes, alignment.attributes);
}

#[test]
fn test_read_group_enrichment_and_sample() {
    let alignment = Alignment { read_group_id: Some("rg1".to_string()), ..mapped_alignment() };
    let record = to_sam(&alignment);
    assert_eq!(record.read_group_id(), Some("rg1"));
    assert_eq!(record.tags().get("LB").and_then(|v| v.as_str()), Some("lib1"));
    assert_eq!(record.tags().get("PU").and_then(|v| v.as_str()), Some("flowcell.1"));

    let back = to_alignment(&record);
    assert_eq!(back.read_group_id.as_deref(), Some("rg1"));
    assert_eq!(back.read_group_sample_id.as_deref(), Some("sample1"));
    assert_eq!(back.attributes.as_deref(), Some("LB:Z:lib1\tPU:Z:flowcell.1"));
}

#[test]
fn test_read_group_without_details() {
    let alignment = Alignment { read_group_id: Some("rg2".to_string()), ..mapped_alignment() };
    let record = to_sam(&alignment);
    assert_eq!(tags::encode(record.tags()), "RG:Z:rg2");
    assert_eq!(to_alignment(&record).read_group_sample_id, None);
}

#[test]
fn test_json_alignment_converts() {
    let json = r#"{
        "readName": "json1",
        "sequence": "ACGT",
        "qualityScores": "!!!!",
        "cigar": "4M",
        "referenceName": "2",
        "start": 0,
        "readMapped": true,
        "attributes": "XA:i:1"
    }"#;
    let alignment: Alignment = serde_json::from_str(json).unwrap();
    let record = to_sam(&alignment);
    assert_eq!(record.to_string(), "json1\t0\t2\t1\t0\t4M\t*\t0\t0\tACGT\t!!!!\tXA:i:1");
}
