//! Codec behavior observed through the public API.

use noodles::sam::alignment::record::Flags;
use rstest::rstest;
use samconv::cigar::{end_trim, start_trim};
use samconv::flags::{FlagConditions, decompose, recompose};
use samconv::tags::{self, TagArray, TagType, TagValue};

#[rstest]
#[case("10M", 0, 0)]
#[case("5H10M3H", 5, 3)]
#[case("10M5H", 0, 5)]
#[case("3H2S10M", 3, 0)]
fn test_hard_clip_trims(#[case] cigar: &str, #[case] start: usize, #[case] end: usize) {
    assert_eq!(start_trim(cigar).unwrap(), start);
    assert_eq!(end_trim(cigar).unwrap(), end);
}

#[test]
fn test_paired_reverse_flags() {
    let conditions = decompose(Some(Flags::from(0x1 | 0x10)));
    assert_eq!(conditions.read_paired, Some(true));
    assert_eq!(conditions.read_negative_strand, Some(true));
    assert_eq!(conditions.proper_pair, Some(false));
    assert_eq!(conditions.mate_mapped, Some(true));
    assert_eq!(conditions.duplicate_read, Some(false));
    assert_eq!(conditions.primary_alignment, Some(true));
}

#[test]
fn test_absent_flags_differ_from_zero_flags() {
    assert_eq!(decompose(None), FlagConditions::default());
    assert_ne!(decompose(Some(Flags::empty())), FlagConditions::default());
}

#[test]
fn test_every_flag_bit_survives_recompose() {
    for bits in [0x0_u16, 0x4, 0x1 | 0x2 | 0x20 | 0x80, 0x1 | 0x8 | 0x40 | 0x400, 0x100 | 0x200 | 0x800]
    {
        let flags = Flags::from(bits);
        assert_eq!(recompose(&decompose(Some(flags))), flags, "{bits:#x}");
    }
}

#[test]
fn test_each_tag_type_produces_one_variant() {
    let text = "XA:A:c\tXI:i:-7\tXF:f:2.5\tXZ:Z:two words\tXH:H:BEEF\tXB:B:s,-1,300";
    let parsed = tags::decode_all(text).unwrap();
    let types: Vec<TagType> = parsed.iter().map(|tag| tag.value().tag_type()).collect();
    assert_eq!(
        types,
        vec![
            TagType::Character,
            TagType::Integer,
            TagType::Float,
            TagType::String,
            TagType::Hex,
            TagType::Array,
        ]
    );
    assert_eq!(parsed.get("XB"), Some(&TagValue::Array(TagArray::Int16(vec![-1, 300]))));
    assert_eq!(tags::encode(&parsed), text);
}

#[test]
fn test_reserved_tags_are_filtered() {
    let generic: samconv::TagList = tags::decode("RG:Z:rg1\tMD:Z:10\tXA:i:5")
        .map(Result::unwrap)
        .filter(|tag| !tags::is_reserved(tag.name().as_str()))
        .collect();
    assert_eq!(tags::encode(&generic), "XA:i:5");
}
