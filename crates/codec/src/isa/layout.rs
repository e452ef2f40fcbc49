//! Canonical bit layouts of the six instruction formats.
//!
//! Every shift and mask the encoder and decoder use lives here, so the two
//! directions cannot drift apart. [`fields`] describes the same layouts as
//! ordered field lists for the diagnostic renderers.

use crate::isa::instruction::Format;

/// Bit shift of the I-Type immediate field (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
pub const I_IMM_SHIFT: u32 = 20;

/// Bit mask of the I-Type immediate field (12 bits).
pub const I_IMM_MASK: u32 = 0xFFF;

/// Bit shift of the S-Type immediate low field (bits 7-11).
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
pub const S_IMM_LOW_SHIFT: u32 = 7;

/// Bit mask of the S-Type immediate low field (5 bits: imm[4:0]).
pub const S_IMM_LOW_MASK: u32 = 0x1F;

/// Bit shift of the S-Type immediate high field (bits 25-31).
pub const S_IMM_HIGH_SHIFT: u32 = 25;

/// Bit mask of the S-Type immediate high field (7 bits: imm[11:5]).
pub const S_IMM_HIGH_MASK: u32 = 0x7F;

/// Position of imm[5] inside the reassembled S-Type immediate.
pub const S_IMM_COMBINED_SHIFT: u32 = 5;

/// Instruction bit holding B-Type imm[11] (bit 7).
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
pub const B_IMM_11_SHIFT: u32 = 7;

/// Bit mask of B-Type imm[11].
pub const B_IMM_11_MASK: u32 = 1;

/// Instruction bit holding B-Type imm[4:1] (bits 8-11).
pub const B_IMM_4_1_SHIFT: u32 = 8;

/// Bit mask of B-Type imm[4:1] (4 bits).
pub const B_IMM_4_1_MASK: u32 = 0xF;

/// Instruction bit holding B-Type imm[10:5] (bits 25-30).
pub const B_IMM_10_5_SHIFT: u32 = 25;

/// Bit mask of B-Type imm[10:5] (6 bits).
pub const B_IMM_10_5_MASK: u32 = 0x3F;

/// Instruction bit holding B-Type imm[12] (bit 31).
pub const B_IMM_12_SHIFT: u32 = 31;

/// Bit mask of B-Type imm[12] (sign bit).
pub const B_IMM_12_MASK: u32 = 1;

/// Position of bit 12 in the reconstructed B-Type immediate.
pub const B_IMM_12_POS: u32 = 12;

/// Position of bit 11 in the reconstructed B-Type immediate.
pub const B_IMM_11_POS: u32 = 11;

/// Position of bits 10-5 in the reconstructed B-Type immediate.
pub const B_IMM_10_5_POS: u32 = 5;

/// Position of bits 4-1 in the reconstructed B-Type immediate.
pub const B_IMM_4_1_POS: u32 = 1;

/// Bit shift of the U-Type immediate field (bits 12-31).
///
/// U-Type format: `imm[31:12] | rd | opcode`
pub const U_IMM_SHIFT: u32 = 12;

/// Bit mask of the U-Type immediate field (20 bits).
pub const U_IMM_MASK: u32 = 0xF_FFFF;

/// Instruction bit holding J-Type imm[19:12] (bits 12-19).
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
pub const J_IMM_19_12_SHIFT: u32 = 12;

/// Bit mask of J-Type imm[19:12] (8 bits).
pub const J_IMM_19_12_MASK: u32 = 0xFF;

/// Instruction bit holding J-Type imm[11] (bit 20).
pub const J_IMM_11_SHIFT: u32 = 20;

/// Bit mask of J-Type imm[11].
pub const J_IMM_11_MASK: u32 = 1;

/// Instruction bit holding J-Type imm[10:1] (bits 21-30).
pub const J_IMM_10_1_SHIFT: u32 = 21;

/// Bit mask of J-Type imm[10:1] (10 bits).
pub const J_IMM_10_1_MASK: u32 = 0x3FF;

/// Instruction bit holding J-Type imm[20] (bit 31).
pub const J_IMM_20_SHIFT: u32 = 31;

/// Bit mask of J-Type imm[20] (sign bit).
pub const J_IMM_20_MASK: u32 = 1;

/// Position of bit 20 in the reconstructed J-Type immediate.
pub const J_IMM_20_POS: u32 = 20;

/// Position of bits 19-12 in the reconstructed J-Type immediate.
pub const J_IMM_19_12_POS: u32 = 12;

/// Position of bit 11 in the reconstructed J-Type immediate.
pub const J_IMM_11_POS: u32 = 11;

/// Position of bits 10-1 in the reconstructed J-Type immediate.
pub const J_IMM_10_1_POS: u32 = 1;

/// One contiguous field of an instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field label as printed in tables (`"imm[4:1]"`, `"rs1"`, ...).
    pub name: &'static str,
    /// Lowest instruction bit covered by the field.
    pub lsb: u32,
    /// Width in bits.
    pub width: u32,
}

impl FieldSpec {
    const fn new(name: &'static str, lsb: u32, width: u32) -> Self {
        Self { name, lsb, width }
    }

    /// Extracts this field's bits from a word, right-aligned.
    pub const fn extract(&self, word: u32) -> u32 {
        (word >> self.lsb) & ((1 << self.width) - 1)
    }
}

const R_FIELDS: [FieldSpec; 6] = [
    FieldSpec::new("funct7", 25, 7),
    FieldSpec::new("rs2", 20, 5),
    FieldSpec::new("rs1", 15, 5),
    FieldSpec::new("funct3", 12, 3),
    FieldSpec::new("rd", 7, 5),
    FieldSpec::new("opcode", 0, 7),
];

const I_FIELDS: [FieldSpec; 5] = [
    FieldSpec::new("imm[11:0]", 20, 12),
    FieldSpec::new("rs1", 15, 5),
    FieldSpec::new("funct3", 12, 3),
    FieldSpec::new("rd", 7, 5),
    FieldSpec::new("opcode", 0, 7),
];

const S_FIELDS: [FieldSpec; 6] = [
    FieldSpec::new("imm[11:5]", 25, 7),
    FieldSpec::new("rs2", 20, 5),
    FieldSpec::new("rs1", 15, 5),
    FieldSpec::new("funct3", 12, 3),
    FieldSpec::new("imm[4:0]", 7, 5),
    FieldSpec::new("opcode", 0, 7),
];

const B_FIELDS: [FieldSpec; 8] = [
    FieldSpec::new("imm[12]", 31, 1),
    FieldSpec::new("imm[10:5]", 25, 6),
    FieldSpec::new("rs2", 20, 5),
    FieldSpec::new("rs1", 15, 5),
    FieldSpec::new("funct3", 12, 3),
    FieldSpec::new("imm[4:1]", 8, 4),
    FieldSpec::new("imm[11]", 7, 1),
    FieldSpec::new("opcode", 0, 7),
];

const U_FIELDS: [FieldSpec; 3] = [
    FieldSpec::new("imm[31:12]", 12, 20),
    FieldSpec::new("rd", 7, 5),
    FieldSpec::new("opcode", 0, 7),
];

const J_FIELDS: [FieldSpec; 6] = [
    FieldSpec::new("imm[20]", 31, 1),
    FieldSpec::new("imm[10:1]", 21, 10),
    FieldSpec::new("imm[11]", 20, 1),
    FieldSpec::new("imm[19:12]", 12, 8),
    FieldSpec::new("rd", 7, 5),
    FieldSpec::new("opcode", 0, 7),
];

/// Returns the fields of a format, most-significant first.
///
/// The widths of each list sum to 32 and the fields tile the word without gaps.
pub const fn fields(format: Format) -> &'static [FieldSpec] {
    match format {
        Format::R => &R_FIELDS,
        Format::I => &I_FIELDS,
        Format::S => &S_FIELDS,
        Format::B => &B_FIELDS,
        Format::U => &U_FIELDS,
        Format::J => &J_FIELDS,
    }
}
