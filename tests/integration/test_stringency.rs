//! Stringency policy: strict errors, lenient warnings, silent drops.

use log::Level;
use rstest::rstest;
use samconv::{
    Alignment, AlignmentToSamRecord, ConversionStringency, Converter, FailureKind, SamRecord,
    SamRecordToAlignment, tags,
};

use crate::helpers::{capture_logs, mapped_alignment, test_header, warnings};

fn no_reference() -> Alignment {
    Alignment { reference_name: None, ..mapped_alignment() }
}

fn convert(alignment: &Alignment, stringency: ConversionStringency) -> samconv::Result<Option<SamRecord>> {
    let header = test_header();
    AlignmentToSamRecord::new(&header).convert(Some(alignment), stringency)
}

#[test]
fn test_missing_reference_name_strict() {
    let (result, logs) = capture_logs(|| convert(&no_reference(), ConversionStringency::Strict));
    let err = result.unwrap_err();
    assert_eq!(err.kind(), &FailureKind::MissingReferenceName);
    assert_eq!(err.source_type, "Alignment");
    assert_eq!(err.target_type, "SamRecord");
    assert!(err.source_value.contains("read1"));
    assert!(warnings(&logs).is_empty());
}

#[test]
fn test_missing_reference_name_lenient_warns() {
    let (result, logs) = capture_logs(|| convert(&no_reference(), ConversionStringency::Lenient));
    let record = result.unwrap().unwrap();
    assert_eq!(record.reference_index(), -1);
    assert_eq!(record.reference_name(), "*");
    assert!(record.flags().is_unmapped());

    let warnings = warnings(&logs);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].target, "samconv::convert");
    assert_eq!(
        warnings[0].message,
        "could not convert Alignment to SamRecord, referenceName must not be null if read aligned"
    );
}

#[test]
fn test_missing_reference_name_silent_is_quiet() {
    let (silent, logs) = capture_logs(|| convert(&no_reference(), ConversionStringency::Silent));
    assert!(logs.is_empty());

    let (lenient, _) = capture_logs(|| convert(&no_reference(), ConversionStringency::Lenient));
    assert_eq!(silent.unwrap(), lenient.unwrap());
}

#[rstest]
#[case("XA:i:1\tXB\tXC:Z:c", "XB")]
#[case("XA:i:1\tXB:Q:9\tXC:Z:c", "XB:Q:9")]
#[case("XA:i:1\tXB:i:nine\tXC:Z:c", "XB:i:nine")]
fn test_malformed_attribute(#[case] attributes: &str, #[case] bad_token: &str) {
    let alignment = Alignment { attributes: Some(attributes.to_string()), ..mapped_alignment() };

    let err = convert(&alignment, ConversionStringency::Strict).unwrap_err();
    match err.kind() {
        FailureKind::MalformedTag { token, .. } | FailureKind::UnrecognizedTagType { token, .. } => {
            assert_eq!(token, bad_token);
        }
        other => panic!("unexpected failure {other:?}"),
    }

    let (result, logs) = capture_logs(|| convert(&alignment, ConversionStringency::Lenient));
    assert_eq!(tags::encode(result.unwrap().unwrap().tags()), "XA:i:1\tXC:Z:c");
    let warnings = warnings(&logs);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains(bad_token));

    let (result, logs) = capture_logs(|| convert(&alignment, ConversionStringency::Silent));
    assert_eq!(tags::encode(result.unwrap().unwrap().tags()), "XA:i:1\tXC:Z:c");
    assert!(logs.iter().all(|log| log.level != Level::Warn));
}

#[test]
fn test_lenient_collects_one_warning_per_failure() {
    let alignment = Alignment {
        cigar: Some("10M?".to_string()),
        quality_scores: Some("I I".to_string()),
        attributes: Some("bad".to_string()),
        ..mapped_alignment()
    };
    let (result, logs) = capture_logs(|| convert(&alignment, ConversionStringency::Lenient));
    let record = result.unwrap().unwrap();
    assert_eq!(record.cigar_string(), "*");
    assert_eq!(record.base_quality_string(), "*");
    assert!(record.tags().is_empty());
    assert_eq!(warnings(&logs).len(), 3);
}

#[test]
fn test_null_source() {
    let header = test_header();
    let converter = AlignmentToSamRecord::new(&header);
    let strict = Converter::<Alignment, SamRecord>::convert(&converter, None, ConversionStringency::Strict);
    assert_eq!(strict.unwrap_err().kind(), &FailureKind::NullSource);

    let (lenient, logs) = capture_logs(|| {
        Converter::<Alignment, SamRecord>::convert(&converter, None, ConversionStringency::Lenient)
    });
    assert_eq!(lenient.unwrap(), None);
    assert_eq!(warnings(&logs)[0].message, "could not convert Alignment to SamRecord, must not be null");

    let reverse = SamRecordToAlignment::new();
    assert_eq!(reverse.convert(None, ConversionStringency::Silent).unwrap(), None);
}

#[test]
fn test_zero_start_on_mapped_sam_record() {
    let record = SamRecord::builder()
        .read_name("r")
        .reference("1", 0)
        .alignment_start(0)
        .cigar(samconv::cigar::parse("4M").unwrap())
        .sequence("ACGT")
        .build();
    let converter = SamRecordToAlignment::new();

    let err = converter.convert(Some(&record), ConversionStringency::Strict).unwrap_err();
    assert!(matches!(err.kind(), FailureKind::InvalidCoordinate { .. }));

    let (result, logs) = capture_logs(|| converter.convert(Some(&record), ConversionStringency::Lenient));
    let alignment = result.unwrap().unwrap();
    assert_eq!(alignment.start, None);
    assert_eq!(alignment.end, None);
    assert_eq!(alignment.cigar.as_deref(), Some("4M"));
    assert_eq!(
        warnings(&logs)[0].message,
        "could not convert SamRecord to Alignment, alignmentStart must be greater than zero, got 0"
    );
}
