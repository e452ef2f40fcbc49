//! RISC-V Instruction Encoder.
//!
//! Packs a typed [`Instruction`] into its 32-bit word. Every field type is
//! already range-checked, so encoding is a total, pure function: it only
//! shifts, masks and permutes. The B and J immediates are scattered across
//! the word exactly as the RV32I base encoding lays them out.

use crate::isa::instruction::{
    BType, FUNCT3_SHIFT, FUNCT7_SHIFT, IType, Instruction, JType, RD_SHIFT, RS1_SHIFT, RS2_SHIFT,
    RType, SType, UType,
};
use crate::isa::layout::{
    B_IMM_4_1_MASK, B_IMM_4_1_POS, B_IMM_4_1_SHIFT, B_IMM_10_5_MASK, B_IMM_10_5_POS,
    B_IMM_10_5_SHIFT, B_IMM_11_MASK, B_IMM_11_POS, B_IMM_11_SHIFT, B_IMM_12_MASK, B_IMM_12_POS,
    B_IMM_12_SHIFT, I_IMM_SHIFT, J_IMM_10_1_MASK, J_IMM_10_1_POS, J_IMM_10_1_SHIFT, J_IMM_11_MASK,
    J_IMM_11_POS, J_IMM_11_SHIFT, J_IMM_19_12_MASK, J_IMM_19_12_POS, J_IMM_19_12_SHIFT,
    J_IMM_20_MASK, J_IMM_20_POS, J_IMM_20_SHIFT, S_IMM_COMBINED_SHIFT, S_IMM_HIGH_MASK,
    S_IMM_HIGH_SHIFT, S_IMM_LOW_MASK, S_IMM_LOW_SHIFT, U_IMM_SHIFT,
};
use crate::isa::rv32i::opcodes;

/// Encodes an instruction into its 32-bit machine word.
///
/// # Arguments
///
/// * `instr` - The instruction to encode.
///
/// # Returns
///
/// The machine word, bit 31 most significant.
pub fn encode(instr: &Instruction) -> u32 {
    let word = match instr {
        Instruction::R(r) => encode_r(r),
        Instruction::I(i) => encode_i(i),
        Instruction::S(s) => encode_s(s),
        Instruction::B(b) => encode_b(b),
        Instruction::U(u) => encode_u(u),
        Instruction::J(j) => encode_j(j),
    };
    tracing::trace!(format = %instr.format(), "encoded {word:#010x}");
    word
}

/// Places the register, funct3 and opcode fields shared by R/I/S/B words.
#[inline]
const fn base(opcode: u32, funct3: u32, rs1: u32) -> u32 {
    (rs1 << RS1_SHIFT) | (funct3 << FUNCT3_SHIFT) | opcode
}

/// Encodes an R-Type word.
///
/// R-Type format: `funct7 | rs2 | rs1 | funct3 | rd | opcode`
pub fn encode_r(r: &RType) -> u32 {
    (r.funct7() << FUNCT7_SHIFT)
        | (r.rs2.get() << RS2_SHIFT)
        | base(opcodes::OP_REG, r.funct3().get(), r.rs1.get())
        | (r.rd.get() << RD_SHIFT)
}

/// Encodes an I-Type word.
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
pub fn encode_i(i: &IType) -> u32 {
    (i.imm.bits() << I_IMM_SHIFT)
        | base(i.opcode.class().opcode(), i.funct3.get(), i.rs1.get())
        | (i.rd.get() << RD_SHIFT)
}

/// Encodes an S-Type word.
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
pub fn encode_s(s: &SType) -> u32 {
    let imm = s.imm.bits();
    let high = (imm >> S_IMM_COMBINED_SHIFT) & S_IMM_HIGH_MASK;
    let low = imm & S_IMM_LOW_MASK;

    (high << S_IMM_HIGH_SHIFT)
        | (s.rs2.get() << RS2_SHIFT)
        | base(opcodes::OP_STORE, s.funct3.get(), s.rs1.get())
        | (low << S_IMM_LOW_SHIFT)
}

/// Encodes a B-Type word.
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
/// Bit 0 of the offset is implicitly zero and is not stored.
pub fn encode_b(b: &BType) -> u32 {
    let imm = b.offset.bits();
    let bit_12 = (imm >> B_IMM_12_POS) & B_IMM_12_MASK;
    let bit_11 = (imm >> B_IMM_11_POS) & B_IMM_11_MASK;
    let bits_10_5 = (imm >> B_IMM_10_5_POS) & B_IMM_10_5_MASK;
    let bits_4_1 = (imm >> B_IMM_4_1_POS) & B_IMM_4_1_MASK;

    (bit_12 << B_IMM_12_SHIFT)
        | (bits_10_5 << B_IMM_10_5_SHIFT)
        | (b.rs2.get() << RS2_SHIFT)
        | base(opcodes::OP_BRANCH, b.funct3.get(), b.rs1.get())
        | (bits_4_1 << B_IMM_4_1_SHIFT)
        | (bit_11 << B_IMM_11_SHIFT)
}

/// Encodes a U-Type word.
///
/// U-Type format: `imm[31:12] | rd | opcode`
/// The raw 20-bit field is placed as-is.
pub fn encode_u(u: &UType) -> u32 {
    (u.imm.get() << U_IMM_SHIFT) | (u.rd.get() << RD_SHIFT) | u.opcode.class().opcode()
}

/// Encodes a J-Type word.
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
/// Bit 0 of the offset is implicitly zero and is not stored.
pub fn encode_j(j: &JType) -> u32 {
    let imm = j.offset.bits();
    let bit_20 = (imm >> J_IMM_20_POS) & J_IMM_20_MASK;
    let bits_19_12 = (imm >> J_IMM_19_12_POS) & J_IMM_19_12_MASK;
    let bit_11 = (imm >> J_IMM_11_POS) & J_IMM_11_MASK;
    let bits_10_1 = (imm >> J_IMM_10_1_POS) & J_IMM_10_1_MASK;

    (bit_20 << J_IMM_20_SHIFT)
        | (bits_10_1 << J_IMM_10_1_SHIFT)
        | (bit_11 << J_IMM_11_SHIFT)
        | (bits_19_12 << J_IMM_19_12_SHIFT)
        | (j.rd.get() << RD_SHIFT)
        | opcodes::OP_JAL
}
