//! RISC-V Instruction Decoder.
//!
//! This module handles the decoding of 32-bit RISC-V instruction encodings into
//! a typed [`Instruction`]. It looks up the format from the opcode, extracts
//! register indices and function codes, inverts the B/J bit permutations, and
//! sign-extends I/S/B/J immediates. U-type immediates come back as the raw
//! 20-bit field; shifting them by 12 is the caller's job.

use crate::common::error::CodecError;
use crate::common::fields::{BranchOffset, Funct3, Imm12, JumpOffset, Reg, UImm20, sign_extend};
use crate::isa::instruction::{
    BType, IOpcode, IType, Instruction, InstructionBits, JType, OpcodeClass, RType, RegOp, SType,
    UOpcode, UType,
};
use crate::isa::layout::{
    B_IMM_4_1_MASK, B_IMM_4_1_POS, B_IMM_4_1_SHIFT, B_IMM_10_5_MASK, B_IMM_10_5_POS,
    B_IMM_10_5_SHIFT, B_IMM_11_MASK, B_IMM_11_POS, B_IMM_11_SHIFT, B_IMM_12_MASK, B_IMM_12_POS,
    B_IMM_12_SHIFT, I_IMM_MASK, I_IMM_SHIFT, J_IMM_10_1_MASK, J_IMM_10_1_POS, J_IMM_10_1_SHIFT,
    J_IMM_11_MASK, J_IMM_11_POS, J_IMM_11_SHIFT, J_IMM_19_12_MASK, J_IMM_19_12_POS,
    J_IMM_19_12_SHIFT, J_IMM_20_MASK, J_IMM_20_POS, J_IMM_20_SHIFT, S_IMM_COMBINED_SHIFT,
    S_IMM_HIGH_MASK, S_IMM_HIGH_SHIFT, S_IMM_LOW_MASK, S_IMM_LOW_SHIFT, U_IMM_MASK, U_IMM_SHIFT,
};

/// Total number of bits in I-Type and S-Type immediates.
const IMM12_BITS: u32 = 12;

/// Total number of bits in the B-Type immediate (13 bits, sign-extended).
const B_IMM_BITS: u32 = 13;

/// Total number of bits in the J-Type immediate (21 bits, sign-extended).
const J_IMM_BITS: u32 = 21;

/// Decodes a RISC-V instruction word into its typed fields.
///
/// # Arguments
///
/// * `word` - The 32-bit instruction encoding to decode
///
/// # Errors
///
/// * [`CodecError::UnsupportedOpcode`] if the low seven bits select no format.
/// * [`CodecError::IllegalEncoding`] for an `OP_REG` word whose funct7/funct3
///   pair names no operation.
pub fn decode(word: u32) -> Result<Instruction, CodecError> {
    let opcode = word.opcode();
    let Some(class) = OpcodeClass::from_opcode(opcode) else {
        tracing::debug!(opcode, "unsupported opcode in {word:#010x}");
        return Err(CodecError::UnsupportedOpcode { word, opcode });
    };

    let rd = Reg::from_bits(word.rd());
    let rs1 = Reg::from_bits(word.rs1());
    let rs2 = Reg::from_bits(word.rs2());
    let funct3 = Funct3::from_bits(word.funct3());

    let instr = match class {
        OpcodeClass::Reg => {
            let Some(op) = RegOp::from_fields(word.funct3(), word.funct7()) else {
                tracing::debug!(
                    funct3 = word.funct3(),
                    funct7 = word.funct7(),
                    "no register operation for {word:#010x}"
                );
                return Err(CodecError::IllegalEncoding {
                    word,
                    reason: "funct7/funct3 pair names no register-register operation",
                });
            };
            Instruction::R(RType { op, rs2, rs1, rd })
        }
        OpcodeClass::Imm | OpcodeClass::Load | OpcodeClass::Jalr => {
            let opcode = match class {
                OpcodeClass::Load => IOpcode::Load,
                OpcodeClass::Jalr => IOpcode::Jalr,
                _ => IOpcode::OpImm,
            };
            Instruction::I(IType {
                opcode,
                imm: Imm12::from_bits((word >> I_IMM_SHIFT) & I_IMM_MASK),
                rs1,
                funct3,
                rd,
            })
        }
        OpcodeClass::Store => Instruction::S(SType {
            imm: Imm12::from_bits(s_imm_bits(word)),
            rs2,
            rs1,
            funct3,
        }),
        OpcodeClass::Branch => Instruction::B(BType {
            offset: BranchOffset::from_bits(b_imm_bits(word)),
            rs2,
            rs1,
            funct3,
        }),
        OpcodeClass::Lui | OpcodeClass::Auipc => Instruction::U(UType {
            opcode: if class == OpcodeClass::Lui {
                UOpcode::Lui
            } else {
                UOpcode::Auipc
            },
            imm: UImm20::from_bits(decode_u_imm(word)),
            rd,
        }),
        OpcodeClass::Jal => Instruction::J(JType {
            offset: JumpOffset::from_bits(j_imm_bits(word)),
            rd,
        }),
    };

    tracing::trace!(format = %instr.format(), "decoded {word:#010x}");
    Ok(instr)
}

/// Decodes the immediate value for I-Type instructions.
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
/// Used for Load, JALR, and Immediate Arithmetic instructions.
pub const fn decode_i_imm(word: u32) -> i32 {
    (word as i32) >> I_IMM_SHIFT
}

/// Reassembles the 12 raw S-Type immediate bits.
const fn s_imm_bits(word: u32) -> u32 {
    let low = (word >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (word >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    (high << S_IMM_COMBINED_SHIFT) | low
}

/// Decodes the immediate value for S-Type instructions.
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
/// Used for Store instructions.
pub const fn decode_s_imm(word: u32) -> i32 {
    sign_extend(s_imm_bits(word), IMM12_BITS)
}

/// Reassembles the 13 raw B-Type immediate bits (bit 0 always clear).
const fn b_imm_bits(word: u32) -> u32 {
    let bit_11 = (word >> B_IMM_11_SHIFT) & B_IMM_11_MASK;
    let bits_4_1 = (word >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bits_10_5 = (word >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bit_12 = (word >> B_IMM_12_SHIFT) & B_IMM_12_MASK;

    (bit_12 << B_IMM_12_POS)
        | (bit_11 << B_IMM_11_POS)
        | (bits_10_5 << B_IMM_10_5_POS)
        | (bits_4_1 << B_IMM_4_1_POS)
}

/// Decodes the immediate value for B-Type instructions.
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
/// Used for Conditional Branch instructions. The immediate represents an even offset.
pub const fn decode_b_imm(word: u32) -> i32 {
    sign_extend(b_imm_bits(word), B_IMM_BITS)
}

/// Decodes the raw immediate field for U-Type instructions.
///
/// U-Type format: `imm[31:12] | rd | opcode`
/// Used for LUI and AUIPC. Returns the unshifted 20-bit field.
pub const fn decode_u_imm(word: u32) -> u32 {
    (word >> U_IMM_SHIFT) & U_IMM_MASK
}

/// Reassembles the 21 raw J-Type immediate bits (bit 0 always clear).
const fn j_imm_bits(word: u32) -> u32 {
    let bits_19_12 = (word >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
    let bit_11 = (word >> J_IMM_11_SHIFT) & J_IMM_11_MASK;
    let bits_10_1 = (word >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
    let bit_20 = (word >> J_IMM_20_SHIFT) & J_IMM_20_MASK;

    (bit_20 << J_IMM_20_POS)
        | (bits_19_12 << J_IMM_19_12_POS)
        | (bit_11 << J_IMM_11_POS)
        | (bits_10_1 << J_IMM_10_1_POS)
}

/// Decodes the immediate value for J-Type instructions.
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
/// Used for JAL (Unconditional Jump).
pub const fn decode_j_imm(word: u32) -> i32 {
    sign_extend(j_imm_bits(word), J_IMM_BITS)
}
