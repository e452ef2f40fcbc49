//! # Field Type Tests
//!
//! Checks the range limits, sign handling and serde validation of every
//! instruction field type.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use toothless_isa::common::{
    BranchOffset, CodecError, Funct3, Imm12, JumpOffset, Reg, UImm20, low_bits, sign_extend,
};

#[test]
fn register_bounds() {
    assert_eq!(Reg::new(0).unwrap(), Reg::ZERO);
    assert_eq!(Reg::new(31).unwrap().get(), 31);
    assert_eq!(
        Reg::new(32),
        Err(CodecError::FieldOutOfRange {
            field: "register",
            value: 32,
            min: 0,
            max: 31,
        })
    );
    assert_eq!(Reg::new(17).unwrap().to_string(), "x17");
}

#[test]
fn funct3_bounds() {
    assert!(Funct3::new(7).is_ok());
    assert!(Funct3::new(8).unwrap_err().is_range_error());
}

#[rstest]
#[case(Imm12::MIN, 0x800)]
#[case(-1, 0xFFF)]
#[case(0, 0)]
#[case(Imm12::MAX, 0x7FF)]
fn imm12_bits(#[case] value: i32, #[case] bits: u32) {
    let imm = Imm12::new(value).unwrap();
    assert_eq!(imm.bits(), bits);
    assert_eq!(Imm12::from_bits(bits), imm);
}

#[rstest]
#[case(2048)]
#[case(-2049)]
#[case(i32::MAX)]
fn imm12_rejects(#[case] value: i32) {
    assert!(Imm12::new(value).unwrap_err().is_range_error());
}

#[test]
fn branch_offset_limits() {
    assert_eq!(BranchOffset::new(-4096).unwrap().bits(), 0x1000);
    assert_eq!(BranchOffset::new(4094).unwrap().bits(), 0x0FFE);
    assert!(BranchOffset::new(4096).is_err());
    assert_eq!(
        BranchOffset::new(3),
        Err(CodecError::MisalignedOffset {
            field: "offset13",
            value: 3,
        })
    );
}

#[test]
fn jump_offset_limits() {
    assert_eq!(JumpOffset::new(JumpOffset::MIN).unwrap().bits(), 0x10_0000);
    assert!(JumpOffset::new(JumpOffset::MAX + 2).is_err());
    assert!(JumpOffset::new(7).unwrap_err().is_range_error());
}

#[test]
fn upper_immediate_value_is_shifted() {
    let imm = UImm20::new(1).unwrap();
    assert_eq!(imm.get(), 1);
    assert_eq!(imm.value(), 0x1000);
    assert_eq!(UImm20::new(UImm20::MAX).unwrap().value(), 0xFFFF_F000);
    assert!(UImm20::new(0x10_0000).is_err());
}

#[test]
fn sign_helpers_are_inverse() {
    for (value, bits) in [(-2, 12), (2047, 12), (-4096, 13), (-1_048_576, 21), (-1, 32)] {
        assert_eq!(sign_extend(low_bits(value, bits), bits), value);
    }
}

#[test]
fn sign_extend_degenerate_widths() {
    assert_eq!(sign_extend(5, 0), 0);
    assert_eq!(sign_extend(0xFFFF_FFFE, 32), -2);
    assert_eq!(sign_extend(0x8000_0000, 40), i32::MIN);
}

/// A width in `1..=32` and a signed value that fits it.
fn width_and_value() -> impl Strategy<Value = (u32, i32)> {
    (1u32..=32).prop_flat_map(|bits| {
        let min = i32::MIN >> (32 - bits);
        let max = i32::MAX >> (32 - bits);
        (Just(bits), min..=max)
    })
}

proptest! {
    #[test]
    fn sign_extend_inverts_low_bits((bits, value) in width_and_value()) {
        prop_assert_eq!(sign_extend(low_bits(value, bits), bits), value);
    }

    #[test]
    fn low_bits_fit_the_width((bits, value) in width_and_value()) {
        let raw = low_bits(value, bits);
        prop_assert!(bits == 32 || raw >> bits == 0);
    }
}

#[test]
fn serde_rejects_out_of_range_fields() {
    assert_eq!(serde_json::from_str::<Reg>("5").unwrap().get(), 5);
    assert!(serde_json::from_str::<Reg>("32").is_err());
    assert!(serde_json::from_str::<Imm12>("-2049").is_err());
    assert!(serde_json::from_str::<BranchOffset>("5").is_err());
    assert_eq!(serde_json::to_string(&Imm12::new(-2).unwrap()).unwrap(), "-2");
}
