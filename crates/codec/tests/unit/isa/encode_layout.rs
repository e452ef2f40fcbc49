//! Encoder Layout Tests.
//!
//! Verifies that `encode()` places every field exactly where the RV32I base
//! encoding puts it, by comparing against reference packers and against
//! words produced by a standard assembler.

use pretty_assertions::assert_eq;
use rstest::rstest;
use toothless_isa::isa::rv32i::{funct3, funct7, opcodes};
use toothless_isa::{CodecError, Instruction, Mnemonic, Operands, encode};

use crate::common::reference::{b_type, i_type, j_type, r_type, s_type, u_type};

// ──────────────────────────────────────────────────────────
// 1. Reference words
// ──────────────────────────────────────────────────────────

#[rstest]
#[case::addi_one(Instruction::addi(3, 1, 1), 0x0010_8193)]
#[case::addi_minus_two(Instruction::addi(3, 1, -2), 0xFFE0_8193)]
#[case::add(Instruction::add(3, 1, 2), 0x0020_81B3)]
#[case::sub(Instruction::sub(3, 1, 2), 0x4020_81B3)]
#[case::srai(Instruction::srai(3, 1, 4), 0x4040_D193)]
#[case::lw(Instruction::lw(5, 2, 8), 0x0081_2283)]
#[case::sw(Instruction::sw(5, 2, 8), 0x0051_2423)]
#[case::bne(Instruction::bne(1, 2, 8), 0x0020_9463)]
#[case::beq_min(Instruction::beq(1, 2, -4096), 0x8020_8063)]
#[case::lui(Instruction::lui(3, 1), 0x0000_11B7)]
#[case::auipc(Instruction::auipc(5, 0x12345), 0x1234_5297)]
#[case::jal(Instruction::jal(1, 2048), 0x0010_00EF)]
#[case::jal_back(Instruction::jal(0, -2), 0xFFFF_F06F)]
#[case::jalr(Instruction::jalr(1, 2, 0), 0x0001_00E7)]
fn encodes_reference_word(#[case] instr: Result<Instruction, CodecError>, #[case] word: u32) {
    let instr = instr.unwrap();
    assert_eq!(
        encode(&instr),
        word,
        "{instr} encoded {:#010x}",
        encode(&instr)
    );
}

// ──────────────────────────────────────────────────────────
// 2. Agreement with reference packers
// ──────────────────────────────────────────────────────────

#[test]
fn r_type_matches_reference_for_every_operation() {
    for op in toothless_isa::RegOp::ALL {
        let instr = Instruction::r(op, 31, 17, 5).unwrap();
        let expected = r_type(opcodes::OP_REG, 31, op.funct3(), 17, 5, op.funct7());
        assert_eq!(encode(&instr), expected, "{op:?}");
    }
}

#[test]
fn sub_and_sra_carry_alternate_funct7() {
    let sub = Instruction::sub(3, 1, 2).unwrap();
    let sra = Instruction::sra(3, 1, 2).unwrap();
    assert_eq!(encode(&sub) >> 25, funct7::SUB);
    assert_eq!(encode(&sra) >> 25, funct7::SRA);

    let add = Instruction::add(3, 1, 2).unwrap();
    assert_eq!(encode(&add) >> 25, funct7::DEFAULT);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(-1)]
#[case(2047)]
#[case(-2048)]
#[case(0x555)]
fn i_and_s_immediates_match_reference(#[case] imm: i32) {
    let addi = Instruction::addi(7, 9, imm).unwrap();
    assert_eq!(
        encode(&addi),
        i_type(opcodes::OP_IMM, 7, funct3::ADD_SUB, 9, imm)
    );

    let sh = Instruction::sh(9, 7, imm).unwrap();
    assert_eq!(encode(&sh), s_type(opcodes::OP_STORE, funct3::SH, 7, 9, imm));
}

#[rstest]
#[case(0)]
#[case(2)]
#[case(-2)]
#[case(4094)]
#[case(-4096)]
#[case(0x7FE)]
#[case(0x800)]
fn branch_offsets_match_reference(#[case] offset: i32) {
    let bgeu = Instruction::bgeu(4, 6, offset).unwrap();
    assert_eq!(
        encode(&bgeu),
        b_type(opcodes::OP_BRANCH, funct3::BGEU, 4, 6, offset)
    );
}

#[rstest]
#[case(0)]
#[case(2)]
#[case(-2)]
#[case(1_048_574)]
#[case(-1_048_576)]
#[case(0x800)]
#[case(0x1000)]
fn jump_offsets_match_reference(#[case] offset: i32) {
    let jal = Instruction::jal(1, offset).unwrap();
    assert_eq!(encode(&jal), j_type(opcodes::OP_JAL, 1, offset));
}

#[test]
fn upper_immediate_is_placed_unshifted() {
    for imm20 in [0, 1, 0x8_0000, 0xF_FFFF] {
        let lui = Instruction::lui(3, imm20).unwrap();
        assert_eq!(encode(&lui), u_type(opcodes::OP_LUI, 3, imm20));
        assert_eq!(encode(&lui) >> 12, imm20);
    }
}

// ──────────────────────────────────────────────────────────
// 3. Range errors at construction
// ──────────────────────────────────────────────────────────

#[rstest]
#[case::rd_too_large(Instruction::addi(32, 1, 0), "register")]
#[case::imm12_high(Instruction::addi(1, 1, 2048), "imm12")]
#[case::imm12_low(Instruction::sw(1, 1, -2049), "imm12")]
#[case::branch_low(Instruction::beq(1, 2, -4098), "offset13")]
#[case::branch_high(Instruction::beq(1, 2, 4096), "offset13")]
#[case::jump_high(Instruction::jal(1, 1_048_576), "offset21")]
#[case::imm20(Instruction::lui(1, 0x10_0000), "imm20")]
fn out_of_range_values_are_rejected(
    #[case] result: Result<Instruction, CodecError>,
    #[case] field: &str,
) {
    match result {
        Err(CodecError::FieldOutOfRange { field: f, .. }) => assert_eq!(f, field),
        other => panic!("expected range error on {field}, got {other:?}"),
    }
}

#[test]
fn odd_branch_offset_is_a_range_error() {
    let err = Instruction::beq(1, 2, 3).unwrap_err();
    assert!(err.is_range_error(), "{err}");
    assert!(matches!(err, CodecError::MisalignedOffset { value: 3, .. }));

    let err = Instruction::jal(1, -1).unwrap_err();
    assert!(err.is_range_error(), "{err}");
}

#[test]
fn shift_amount_is_limited_to_five_bits() {
    assert!(Instruction::slli(1, 1, 31).is_ok());
    let err = Instruction::slli(1, 1, 32).unwrap_err();
    assert!(err.is_range_error());
}

// ──────────────────────────────────────────────────────────
// 4. Generic construction
// ──────────────────────────────────────────────────────────

#[test]
fn from_mnemonic_agrees_with_named_constructors() {
    let ops = Operands {
        rd: 3,
        rs1: 1,
        rs2: 2,
        imm: -2,
    };
    assert_eq!(
        Instruction::from_mnemonic(Mnemonic::Addi, ops).unwrap(),
        Instruction::addi(3, 1, -2).unwrap()
    );
    assert_eq!(
        Instruction::from_mnemonic(Mnemonic::Sb, ops).unwrap(),
        Instruction::sb(2, 1, -2).unwrap()
    );
    assert_eq!(
        Instruction::from_mnemonic(Mnemonic::Blt, ops).unwrap(),
        Instruction::blt(1, 2, -2).unwrap()
    );
    assert_eq!(
        Instruction::from_mnemonic(Mnemonic::Sra, ops).unwrap(),
        Instruction::sra(3, 1, 2).unwrap()
    );
}

#[test]
fn from_mnemonic_places_srai_discriminator() {
    let ops = Operands {
        rd: 3,
        rs1: 1,
        imm: 4,
        ..Operands::default()
    };
    let srai = Instruction::from_mnemonic(Mnemonic::Srai, ops).unwrap();
    assert_eq!(encode(&srai), 0x4040_D193);
    assert_eq!(srai.mnemonic(), Some(Mnemonic::Srai));
}

#[test]
fn from_mnemonic_rejects_negative_upper_immediate() {
    let ops = Operands {
        rd: 3,
        imm: -1,
        ..Operands::default()
    };
    let err = Instruction::from_mnemonic(Mnemonic::Lui, ops).unwrap_err();
    assert!(err.is_range_error());
}
