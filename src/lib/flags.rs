//! Mapping between the packed SAM flag field and named alignment conditions.
//!
//! The normalized model keeps every condition as an optional value so that "not
//! known" stays distinct from "false". Conditions that only describe a mate are left
//! absent for unpaired reads.

use noodles::sam::alignment::record::Flags;

/// Named conditions packed into the SAM flag field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagConditions {
    pub read_paired: Option<bool>,
    pub proper_pair: Option<bool>,
    pub read_mapped: Option<bool>,
    pub mate_mapped: Option<bool>,
    pub read_negative_strand: Option<bool>,
    pub mate_negative_strand: Option<bool>,
    /// 0 for the first segment of a template, 1 for the second
    pub read_in_fragment: Option<i32>,
    pub primary_alignment: Option<bool>,
    pub supplementary_alignment: Option<bool>,
    pub duplicate_read: Option<bool>,
    pub failed_vendor_quality_checks: Option<bool>,
}

impl FlagConditions {
    /// Returns true only if the read is known to be paired.
    #[must_use]
    pub fn is_paired(&self) -> bool {
        self.read_paired == Some(true)
    }

    /// Returns true only if the read is known to be mapped.
    #[must_use]
    pub fn is_mapped(&self) -> bool {
        self.read_mapped == Some(true)
    }
}

/// Splits a flag field into named conditions.
///
/// An absent flag field leaves every condition absent. A present field always yields
/// the read-level conditions; mate-level conditions are only filled in when the
/// paired bit is set. If both segment bits are set the read is reported as the
/// second segment.
///
/// # Examples
///
/// ```
/// use noodles::sam::alignment::record::Flags;
/// use samconv::flags::decompose;
///
/// let conditions = decompose(Some(Flags::SEGMENTED | Flags::REVERSE_COMPLEMENTED));
/// assert_eq!(conditions.read_paired, Some(true));
/// assert_eq!(conditions.read_negative_strand, Some(true));
/// assert_eq!(conditions.proper_pair, Some(false));
/// ```
#[must_use]
pub fn decompose(flags: Option<Flags>) -> FlagConditions {
    let Some(flags) = flags else {
        return FlagConditions::default();
    };

    let paired = flags.is_segmented();
    let read_in_fragment = if !paired {
        None
    } else if flags.is_last_segment() {
        Some(1)
    } else if flags.is_first_segment() {
        Some(0)
    } else {
        None
    };

    FlagConditions {
        read_paired: Some(paired),
        proper_pair: paired.then(|| flags.is_properly_segmented()),
        read_mapped: Some(!flags.is_unmapped()),
        mate_mapped: paired.then(|| !flags.is_mate_unmapped()),
        read_negative_strand: Some(flags.is_reverse_complemented()),
        mate_negative_strand: paired.then(|| flags.is_mate_reverse_complemented()),
        read_in_fragment,
        primary_alignment: Some(!flags.is_secondary()),
        supplementary_alignment: Some(flags.is_supplementary()),
        duplicate_read: Some(flags.is_duplicate()),
        failed_vendor_quality_checks: Some(flags.is_qc_fail()),
    }
}

/// Packs named conditions into a flag field.
///
/// Mate bits and segment bits are only set for paired reads. The unmapped bit is set
/// unless the read is known to be mapped; the secondary bit is set only when the
/// alignment is explicitly not primary.
#[must_use]
pub fn recompose(conditions: &FlagConditions) -> Flags {
    let mut flags = Flags::empty();

    if conditions.is_paired() {
        flags.insert(Flags::SEGMENTED);
        flags.set(Flags::PROPERLY_SEGMENTED, conditions.proper_pair == Some(true));
        flags.set(Flags::MATE_UNMAPPED, conditions.mate_mapped == Some(false));
        flags.set(Flags::MATE_REVERSE_COMPLEMENTED, conditions.mate_negative_strand == Some(true));
        flags.set(Flags::FIRST_SEGMENT, conditions.read_in_fragment == Some(0));
        flags.set(Flags::LAST_SEGMENT, conditions.read_in_fragment == Some(1));
    }

    flags.set(Flags::UNMAPPED, !conditions.is_mapped());
    flags.set(Flags::REVERSE_COMPLEMENTED, conditions.read_negative_strand == Some(true));
    flags.set(Flags::SECONDARY, conditions.primary_alignment == Some(false));
    flags.set(Flags::SUPPLEMENTARY, conditions.supplementary_alignment == Some(true));
    flags.set(Flags::DUPLICATE, conditions.duplicate_read == Some(true));
    flags.set(Flags::QC_FAIL, conditions.failed_vendor_quality_checks == Some(true));

    flags
}
