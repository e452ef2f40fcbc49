//! Instruction Decode Properties.
//!
//! Verifies that `decode()` recovers register fields, selectors and
//! sign-extended immediates for every RV32I format, and that it rejects
//! words the core does not implement.
//!
//! # Coverage Matrix
//!
//! - R-type: OP_REG (all ten funct7/funct3 pairs, plus illegal pairs)
//! - I-type: OP_IMM, OP_LOAD, OP_JALR
//! - S-type: OP_STORE
//! - B-type: OP_BRANCH
//! - U-type: OP_LUI, OP_AUIPC
//! - J-type: OP_JAL

use pretty_assertions::assert_eq;
use rstest::rstest;
use toothless_isa::isa::decode::{
    decode_b_imm, decode_i_imm, decode_j_imm, decode_s_imm, decode_u_imm,
};
use toothless_isa::isa::instruction::{InstructionBits, UOpcode};
use toothless_isa::isa::rv32i::{funct3, opcodes};
use toothless_isa::{CodecError, Format, Instruction, Mnemonic, OpcodeClass, RegOp, decode};

use crate::common::init_tracing;
use crate::common::reference::{b_type, i_type, j_type, r_type, s_type, u_type};

// ──────────────────────────────────────────────────────────
// 1. Field extraction
// ──────────────────────────────────────────────────────────

#[test]
fn raw_field_accessors() {
    let word = r_type(opcodes::OP_REG, 11, 0b101, 22, 7, 0x20);
    assert_eq!(word.opcode(), opcodes::OP_REG);
    assert_eq!(word.rd(), 11);
    assert_eq!(word.funct3(), 0b101);
    assert_eq!(word.rs1(), 22);
    assert_eq!(word.rs2(), 7);
    assert_eq!(word.funct7(), 0x20);
}

#[test]
fn addi_negative_immediate_is_sign_extended() {
    let instr = decode(0xFFE0_8193).unwrap();
    assert_eq!(instr.imm(), Some(-2));
    assert_eq!(instr.rd().map(|r| r.get()), Some(3));
    assert_eq!(instr.rs1().map(|r| r.get()), Some(1));
    assert_eq!(instr.mnemonic(), Some(Mnemonic::Addi));
}

#[rstest]
#[case(RegOp::Add)]
#[case(RegOp::Sub)]
#[case(RegOp::Sll)]
#[case(RegOp::Slt)]
#[case(RegOp::Sltu)]
#[case(RegOp::Xor)]
#[case(RegOp::Srl)]
#[case(RegOp::Sra)]
#[case(RegOp::Or)]
#[case(RegOp::And)]
fn every_register_operation_decodes(#[case] op: RegOp) {
    let word = r_type(opcodes::OP_REG, 3, op.funct3(), 1, 2, op.funct7());
    assert_eq!(decode(word).unwrap(), Instruction::r(op, 3, 1, 2).unwrap());
}

#[rstest]
#[case(opcodes::OP_IMM, OpcodeClass::Imm)]
#[case(opcodes::OP_LOAD, OpcodeClass::Load)]
#[case(opcodes::OP_JALR, OpcodeClass::Jalr)]
fn i_type_opcodes_share_one_layout(#[case] opcode: u32, #[case] class: OpcodeClass) {
    let word = i_type(opcode, 5, 0, 6, -100);
    let instr = decode(word).unwrap();
    assert_eq!(instr.class(), class);
    assert_eq!(instr.format(), Format::I);
    assert_eq!(instr.imm(), Some(-100));
}

#[test]
fn store_immediate_is_reassembled() {
    for imm in [-2048, -1, 0, 31, 32, 2047] {
        let word = s_type(opcodes::OP_STORE, funct3::SW, 2, 5, imm);
        assert_eq!(decode_s_imm(word), imm);
        assert_eq!(decode(word).unwrap(), Instruction::sw(5, 2, imm).unwrap());
    }
}

#[test]
fn branch_offset_bits_are_unpermuted() {
    for offset in [-4096, -2, 2, 0x7FE, 0x800, 4094] {
        let word = b_type(opcodes::OP_BRANCH, funct3::BLT, 8, 9, offset);
        assert_eq!(decode_b_imm(word), offset);
        assert_eq!(decode(word).unwrap(), Instruction::blt(8, 9, offset).unwrap());
    }
}

#[test]
fn jump_offset_bits_are_unpermuted() {
    for offset in [-1_048_576, -2, 2, 0x800, 0x1000, 0xF_F000, 1_048_574] {
        let word = j_type(opcodes::OP_JAL, 1, offset);
        assert_eq!(decode_j_imm(word), offset);
        assert_eq!(decode(word).unwrap(), Instruction::jal(1, offset).unwrap());
    }
}

#[test]
fn upper_immediate_stays_raw() {
    let word = u_type(opcodes::OP_LUI, 3, 1);
    assert_eq!(decode_u_imm(word), 1);

    let Instruction::U(u) = decode(word).unwrap() else {
        panic!("LUI did not decode as U-type");
    };
    assert_eq!(u.opcode, UOpcode::Lui);
    assert_eq!(u.imm.get(), 1);
    assert_eq!(u.imm.value(), 0x1000);
}

#[test]
fn i_immediate_helper_sign_extends() {
    assert_eq!(decode_i_imm(0x8000_0013), -2048);
    assert_eq!(decode_i_imm(0x7FF0_0013), 2047);
}

// ──────────────────────────────────────────────────────────
// 2. Rejection
// ──────────────────────────────────────────────────────────

#[rstest]
#[case::zero(0x0000_0000)]
#[case::all_ones(0xFFFF_FFFF)]
#[case::ecall(0x0000_0073)]
#[case::fence(0x0000_000F)]
#[case::compressed(0x0000_4501)]
fn unsupported_opcodes_are_rejected(#[case] word: u32) {
    init_tracing();
    match decode(word) {
        Err(CodecError::UnsupportedOpcode { word: w, opcode }) => {
            assert_eq!(w, word);
            assert_eq!(opcode, word & 0x7F);
        }
        other => panic!("{word:#010x}: expected unsupported opcode, got {other:?}"),
    }
}

#[rstest]
#[case::mul(r_type(opcodes::OP_REG, 3, 0, 1, 2, 0x01))]
#[case::alt_xor(r_type(opcodes::OP_REG, 3, 0b100, 1, 2, 0x20))]
#[case::funct7_all_ones(r_type(opcodes::OP_REG, 3, 0, 1, 2, 0x7F))]
fn illegal_register_encodings_are_rejected(#[case] word: u32) {
    init_tracing();
    let err = decode(word).unwrap_err();
    assert!(err.is_decode_error(), "{err}");
    assert!(matches!(err, CodecError::IllegalEncoding { .. }), "{err}");
}

#[test]
fn unassigned_load_width_decodes_without_mnemonic() {
    let word = i_type(opcodes::OP_LOAD, 1, 0b011, 2, 0);
    let instr = decode(word).unwrap();
    assert_eq!(instr.mnemonic(), None);
    assert_eq!(instr.encode(), word);
}
