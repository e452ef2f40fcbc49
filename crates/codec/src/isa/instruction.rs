//! Instruction model and raw field extraction.
//!
//! Provides the closed [`Instruction`] type (one variant per encoding format,
//! each carrying exactly its fields), the [`OpcodeClass`] and [`Format`] tags,
//! and the [`InstructionBits`] trait for pulling raw fields out of a `u32`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::error::CodecError;
use crate::common::fields::{BranchOffset, Funct3, Imm12, JumpOffset, Reg, UImm20};
use crate::isa::mnemonic::Mnemonic;
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Bit offset of the destination register field.
pub const RD_SHIFT: u32 = 7;
/// Bit offset of the funct3 field.
pub const FUNCT3_SHIFT: u32 = 12;
/// Bit offset of the first source register field.
pub const RS1_SHIFT: u32 = 15;
/// Bit offset of the second source register field.
pub const RS2_SHIFT: u32 = 20;
/// Bit offset of the funct7 field.
pub const FUNCT7_SHIFT: u32 = 25;

/// Trait for extracting raw instruction fields from encoded instructions.
///
/// Extraction is purely positional: it does not check that the field is
/// meaningful for the word's format.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> u32;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> u32;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> u32;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> u32 {
        (self >> RD_SHIFT) & RD_MASK
    }

    #[inline(always)]
    fn rs1(&self) -> u32 {
        (self >> RS1_SHIFT) & RS1_MASK
    }

    #[inline(always)]
    fn rs2(&self) -> u32 {
        (self >> RS2_SHIFT) & RS2_MASK
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}

/// The six base instruction layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    /// Register-register: `funct7 | rs2 | rs1 | funct3 | rd | opcode`.
    R,
    /// Immediate: `imm[11:0] | rs1 | funct3 | rd | opcode`.
    I,
    /// Store: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`.
    S,
    /// Branch: `imm[12|10:5] | rs2 | rs1 | funct3 | imm[4:1|11] | opcode`.
    B,
    /// Upper immediate: `imm[31:12] | rd | opcode`.
    U,
    /// Jump: `imm[20|10:1|11|19:12] | rd | opcode`.
    J,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::R => "R",
            Self::I => "I",
            Self::S => "S",
            Self::B => "B",
            Self::U => "U",
            Self::J => "J",
        };
        write!(f, "{name}-type")
    }
}

/// Opcode class: one tag per major opcode the core decodes.
///
/// Each class owns exactly one 7-bit opcode and determines the field layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpcodeClass {
    /// `R_TYPE` register-register arithmetic.
    Reg,
    /// `I_TYPE` immediate arithmetic.
    Imm,
    /// `S_TYPE` stores.
    Store,
    /// `B_TYPE` conditional branches.
    Branch,
    /// U-type `LUI`.
    Lui,
    /// U-type `AUIPC`.
    Auipc,
    /// J-type `JAL`.
    Jal,
    /// I-type `JALR`.
    Jalr,
    /// I-type loads.
    Load,
}

impl OpcodeClass {
    /// Every class, in opcode table order.
    pub const ALL: [Self; 9] = [
        Self::Reg,
        Self::Imm,
        Self::Store,
        Self::Branch,
        Self::Lui,
        Self::Auipc,
        Self::Jal,
        Self::Jalr,
        Self::Load,
    ];

    /// Returns the 7-bit opcode for this class.
    pub const fn opcode(self) -> u32 {
        match self {
            Self::Reg => opcodes::OP_REG,
            Self::Imm => opcodes::OP_IMM,
            Self::Store => opcodes::OP_STORE,
            Self::Branch => opcodes::OP_BRANCH,
            Self::Lui => opcodes::OP_LUI,
            Self::Auipc => opcodes::OP_AUIPC,
            Self::Jal => opcodes::OP_JAL,
            Self::Jalr => opcodes::OP_JALR,
            Self::Load => opcodes::OP_LOAD,
        }
    }

    /// Looks up the class owning a 7-bit opcode.
    pub const fn from_opcode(opcode: u32) -> Option<Self> {
        match opcode {
            opcodes::OP_REG => Some(Self::Reg),
            opcodes::OP_IMM => Some(Self::Imm),
            opcodes::OP_STORE => Some(Self::Store),
            opcodes::OP_BRANCH => Some(Self::Branch),
            opcodes::OP_LUI => Some(Self::Lui),
            opcodes::OP_AUIPC => Some(Self::Auipc),
            opcodes::OP_JAL => Some(Self::Jal),
            opcodes::OP_JALR => Some(Self::Jalr),
            opcodes::OP_LOAD => Some(Self::Load),
            _ => None,
        }
    }

    /// Returns the field layout used by this class.
    pub const fn format(self) -> Format {
        match self {
            Self::Reg => Format::R,
            Self::Imm | Self::Jalr | Self::Load => Format::I,
            Self::Store => Format::S,
            Self::Branch => Format::B,
            Self::Lui | Self::Auipc => Format::U,
            Self::Jal => Format::J,
        }
    }
}

/// Register-register operations (`OP_REG`).
///
/// `funct3` and `funct7` are derived from the operation, so an R-type value
/// can never carry an invalid funct7/funct3 pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Shift left logical.
    Sll,
    /// Set less than (signed).
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Bitwise XOR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
}

impl RegOp {
    /// Every register-register operation.
    pub const ALL: [Self; 10] = [
        Self::Add,
        Self::Sub,
        Self::Sll,
        Self::Slt,
        Self::Sltu,
        Self::Xor,
        Self::Srl,
        Self::Sra,
        Self::Or,
        Self::And,
    ];

    /// Returns the funct3 selector for this operation.
    pub const fn funct3(self) -> u32 {
        match self {
            Self::Add | Self::Sub => funct3::ADD_SUB,
            Self::Sll => funct3::SLL,
            Self::Slt => funct3::SLT,
            Self::Sltu => funct3::SLTU,
            Self::Xor => funct3::XOR,
            Self::Srl | Self::Sra => funct3::SRL_SRA,
            Self::Or => funct3::OR,
            Self::And => funct3::AND,
        }
    }

    /// Returns the funct7 selector: `0x20` for SUB and SRA, `0` otherwise.
    pub const fn funct7(self) -> u32 {
        match self {
            Self::Sub | Self::Sra => funct7::ALT,
            _ => funct7::DEFAULT,
        }
    }

    /// Recovers the operation from its selector fields.
    ///
    /// Returns `None` for any pair no RV32I operation uses.
    pub const fn from_fields(f3: u32, f7: u32) -> Option<Self> {
        match (f3, f7) {
            (funct3::ADD_SUB, funct7::DEFAULT) => Some(Self::Add),
            (funct3::ADD_SUB, funct7::ALT) => Some(Self::Sub),
            (funct3::SLL, funct7::DEFAULT) => Some(Self::Sll),
            (funct3::SLT, funct7::DEFAULT) => Some(Self::Slt),
            (funct3::SLTU, funct7::DEFAULT) => Some(Self::Sltu),
            (funct3::XOR, funct7::DEFAULT) => Some(Self::Xor),
            (funct3::SRL_SRA, funct7::DEFAULT) => Some(Self::Srl),
            (funct3::SRL_SRA, funct7::ALT) => Some(Self::Sra),
            (funct3::OR, funct7::DEFAULT) => Some(Self::Or),
            (funct3::AND, funct7::DEFAULT) => Some(Self::And),
            _ => None,
        }
    }

    /// Returns the mnemonic for this operation.
    pub const fn mnemonic(self) -> Mnemonic {
        match self {
            Self::Add => Mnemonic::Add,
            Self::Sub => Mnemonic::Sub,
            Self::Sll => Mnemonic::Sll,
            Self::Slt => Mnemonic::Slt,
            Self::Sltu => Mnemonic::Sltu,
            Self::Xor => Mnemonic::Xor,
            Self::Srl => Mnemonic::Srl,
            Self::Sra => Mnemonic::Sra,
            Self::Or => Mnemonic::Or,
            Self::And => Mnemonic::And,
        }
    }
}

/// Opcode classes that use the I layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IOpcode {
    /// Immediate arithmetic (`OP_IMM`).
    OpImm,
    /// Loads (`OP_LOAD`).
    Load,
    /// Jump and link register (`OP_JALR`).
    Jalr,
}

impl IOpcode {
    /// Returns the opcode class.
    pub const fn class(self) -> OpcodeClass {
        match self {
            Self::OpImm => OpcodeClass::Imm,
            Self::Load => OpcodeClass::Load,
            Self::Jalr => OpcodeClass::Jalr,
        }
    }
}

/// Opcode classes that use the U layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UOpcode {
    /// Load upper immediate.
    Lui,
    /// Add upper immediate to PC.
    Auipc,
}

impl UOpcode {
    /// Returns the opcode class.
    pub const fn class(self) -> OpcodeClass {
        match self {
            Self::Lui => OpcodeClass::Lui,
            Self::Auipc => OpcodeClass::Auipc,
        }
    }
}

/// R-type fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RType {
    /// Operation; determines funct3 and funct7.
    pub op: RegOp,
    /// Second source register.
    pub rs2: Reg,
    /// First source register.
    pub rs1: Reg,
    /// Destination register.
    pub rd: Reg,
}

impl RType {
    /// Derived funct3 selector.
    pub const fn funct3(&self) -> Funct3 {
        Funct3::from_bits(self.op.funct3())
    }

    /// Derived funct7 selector.
    pub const fn funct7(&self) -> u32 {
        self.op.funct7()
    }
}

/// I-type fields (immediate arithmetic, loads, JALR).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IType {
    /// Which I-layout opcode class.
    pub opcode: IOpcode,
    /// Sign-extended 12-bit immediate.
    pub imm: Imm12,
    /// Source register.
    pub rs1: Reg,
    /// Function selector.
    pub funct3: Funct3,
    /// Destination register.
    pub rd: Reg,
}

/// S-type fields (stores).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SType {
    /// Sign-extended 12-bit store offset.
    pub imm: Imm12,
    /// Data register.
    pub rs2: Reg,
    /// Base address register.
    pub rs1: Reg,
    /// Transfer width selector.
    pub funct3: Funct3,
}

/// B-type fields (conditional branches).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BType {
    /// Even PC-relative byte offset.
    pub offset: BranchOffset,
    /// Second compared register.
    pub rs2: Reg,
    /// First compared register.
    pub rs1: Reg,
    /// Comparison selector.
    pub funct3: Funct3,
}

/// U-type fields (LUI, AUIPC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UType {
    /// Which U-layout opcode class.
    pub opcode: UOpcode,
    /// Raw upper 20 bits.
    pub imm: UImm20,
    /// Destination register.
    pub rd: Reg,
}

/// J-type fields (JAL).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JType {
    /// Even PC-relative byte offset.
    pub offset: JumpOffset,
    /// Link register.
    pub rd: Reg,
}

/// A single RV32I instruction, tagged by encoding format.
///
/// Values are immutable and cheap to copy; every field already fits its
/// architectural width, so [`Instruction::encode`] cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Register-register instruction.
    R(RType),
    /// Immediate, load or JALR instruction.
    I(IType),
    /// Store instruction.
    S(SType),
    /// Conditional branch.
    B(BType),
    /// LUI or AUIPC.
    U(UType),
    /// JAL.
    J(JType),
}

/// Plain integer operands for [`Instruction::from_mnemonic`].
///
/// Fields a mnemonic does not use are ignored. `imm` holds the immediate,
/// the branch/jump offset, the shift amount, or the raw 20-bit upper
/// immediate depending on the mnemonic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    /// Destination register index.
    pub rd: u32,
    /// First source register index.
    pub rs1: u32,
    /// Second source register index.
    pub rs2: u32,
    /// Immediate operand.
    pub imm: i64,
}

/// Narrows an operand to `i32`, reporting `min..=max` when it does not fit.
fn imm_i32(field: &'static str, value: i64, min: i32, max: i32) -> Result<i32, CodecError> {
    i32::try_from(value).map_err(|_| CodecError::FieldOutOfRange {
        field,
        value,
        min: i64::from(min),
        max: i64::from(max),
    })
}

fn shamt(value: i64) -> Result<i32, CodecError> {
    if (0..=31).contains(&value) {
        Ok(value as i32)
    } else {
        Err(CodecError::FieldOutOfRange {
            field: "shamt",
            value,
            min: 0,
            max: 31,
        })
    }
}

fn upper_imm(value: i64) -> Result<UImm20, CodecError> {
    let raw = u32::try_from(value).map_err(|_| CodecError::FieldOutOfRange {
        field: "imm20",
        value,
        min: 0,
        max: i64::from(UImm20::MAX),
    })?;
    UImm20::new(raw)
}

macro_rules! reg_reg {
    ($($name:ident => $m:ident),* $(,)?) => {
        $(
            #[doc = concat!("Builds `", stringify!($m), " rd, rs1, rs2`.")]
            pub fn $name(rd: u32, rs1: u32, rs2: u32) -> Result<Self, CodecError> {
                Self::from_mnemonic(Mnemonic::$m, Operands { rd, rs1, rs2, imm: 0 })
            }
        )*
    };
}

macro_rules! reg_imm {
    ($($name:ident => $m:ident),* $(,)?) => {
        $(
            #[doc = concat!("Builds `", stringify!($m), " rd, rs1, imm`.")]
            pub fn $name(rd: u32, rs1: u32, imm: i32) -> Result<Self, CodecError> {
                Self::from_mnemonic(
                    Mnemonic::$m,
                    Operands { rd, rs1, rs2: 0, imm: i64::from(imm) },
                )
            }
        )*
    };
}

macro_rules! store {
    ($($name:ident => $m:ident),* $(,)?) => {
        $(
            #[doc = concat!(
                "Builds `", stringify!($m), " rs2, rs1, imm` (store `rs2` at `rs1 + imm`)."
            )]
            pub fn $name(rs2: u32, rs1: u32, imm: i32) -> Result<Self, CodecError> {
                Self::from_mnemonic(
                    Mnemonic::$m,
                    Operands { rd: 0, rs1, rs2, imm: i64::from(imm) },
                )
            }
        )*
    };
}

macro_rules! branch {
    ($($name:ident => $m:ident),* $(,)?) => {
        $(
            #[doc = concat!("Builds `", stringify!($m), " rs1, rs2, offset`.")]
            pub fn $name(rs1: u32, rs2: u32, offset: i32) -> Result<Self, CodecError> {
                Self::from_mnemonic(
                    Mnemonic::$m,
                    Operands { rd: 0, rs1, rs2, imm: i64::from(offset) },
                )
            }
        )*
    };
}

impl Instruction {
    /// Builds an R-type instruction.
    pub fn r(op: RegOp, rd: u32, rs1: u32, rs2: u32) -> Result<Self, CodecError> {
        Ok(Self::R(RType {
            op,
            rs2: Reg::new(rs2)?,
            rs1: Reg::new(rs1)?,
            rd: Reg::new(rd)?,
        }))
    }

    /// Builds an I-type instruction.
    pub fn i(
        opcode: IOpcode,
        funct3: u32,
        rd: u32,
        rs1: u32,
        imm: i32,
    ) -> Result<Self, CodecError> {
        Ok(Self::I(IType {
            opcode,
            imm: Imm12::new(imm)?,
            rs1: Reg::new(rs1)?,
            funct3: Funct3::new(funct3)?,
            rd: Reg::new(rd)?,
        }))
    }

    /// Builds an S-type instruction.
    pub fn s(funct3: u32, rs1: u32, rs2: u32, imm: i32) -> Result<Self, CodecError> {
        Ok(Self::S(SType {
            imm: Imm12::new(imm)?,
            rs2: Reg::new(rs2)?,
            rs1: Reg::new(rs1)?,
            funct3: Funct3::new(funct3)?,
        }))
    }

    /// Builds a B-type instruction.
    pub fn b(funct3: u32, rs1: u32, rs2: u32, offset: i32) -> Result<Self, CodecError> {
        Ok(Self::B(BType {
            offset: BranchOffset::new(offset)?,
            rs2: Reg::new(rs2)?,
            rs1: Reg::new(rs1)?,
            funct3: Funct3::new(funct3)?,
        }))
    }

    /// Builds a U-type instruction from the raw 20-bit upper immediate.
    pub fn u(opcode: UOpcode, rd: u32, imm20: u32) -> Result<Self, CodecError> {
        Ok(Self::U(UType {
            opcode,
            imm: UImm20::new(imm20)?,
            rd: Reg::new(rd)?,
        }))
    }

    /// Builds a J-type (JAL) instruction.
    pub fn j(rd: u32, offset: i32) -> Result<Self, CodecError> {
        Ok(Self::J(JType {
            offset: JumpOffset::new(offset)?,
            rd: Reg::new(rd)?,
        }))
    }

    /// Builds the instruction named by `mnemonic` from plain integer operands.
    ///
    /// Shift-immediates take a shift amount in `imm` (0-31) and place the
    /// SRAI discriminator themselves. Every value is range-checked.
    pub fn from_mnemonic(mnemonic: Mnemonic, ops: Operands) -> Result<Self, CodecError> {
        let f3 = mnemonic.funct3().unwrap_or(0);
        match mnemonic.class() {
            OpcodeClass::Reg => match RegOp::from_fields(f3, mnemonic.funct7().unwrap_or(0)) {
                Some(op) => Self::r(op, ops.rd, ops.rs1, ops.rs2),
                None => Err(CodecError::UnknownMnemonic(mnemonic.name().to_owned())),
            },
            OpcodeClass::Imm => {
                let imm = match mnemonic {
                    Mnemonic::Slli | Mnemonic::Srli => shamt(ops.imm)?,
                    Mnemonic::Srai => shamt(ops.imm)? | funct7::SRAI_IMM_BIT,
                    _ => imm_i32("imm12", ops.imm, Imm12::MIN, Imm12::MAX)?,
                };
                Self::i(IOpcode::OpImm, f3, ops.rd, ops.rs1, imm)
            }
            OpcodeClass::Load => {
                let imm = imm_i32("imm12", ops.imm, Imm12::MIN, Imm12::MAX)?;
                Self::i(IOpcode::Load, f3, ops.rd, ops.rs1, imm)
            }
            OpcodeClass::Jalr => {
                let imm = imm_i32("imm12", ops.imm, Imm12::MIN, Imm12::MAX)?;
                Self::i(IOpcode::Jalr, f3, ops.rd, ops.rs1, imm)
            }
            OpcodeClass::Store => {
                let imm = imm_i32("imm12", ops.imm, Imm12::MIN, Imm12::MAX)?;
                Self::s(f3, ops.rs1, ops.rs2, imm)
            }
            OpcodeClass::Branch => {
                let offset = imm_i32("offset13", ops.imm, BranchOffset::MIN, BranchOffset::MAX)?;
                Self::b(f3, ops.rs1, ops.rs2, offset)
            }
            OpcodeClass::Lui => Self::u(UOpcode::Lui, ops.rd, upper_imm(ops.imm)?.get()),
            OpcodeClass::Auipc => Self::u(UOpcode::Auipc, ops.rd, upper_imm(ops.imm)?.get()),
            OpcodeClass::Jal => {
                let offset = imm_i32("offset21", ops.imm, JumpOffset::MIN, JumpOffset::MAX)?;
                Self::j(ops.rd, offset)
            }
        }
    }

    reg_reg! {
        add => Add, sub => Sub, sll => Sll, slt => Slt, sltu => Sltu,
        xor => Xor, srl => Srl, sra => Sra, or => Or, and => And,
    }

    reg_imm! {
        addi => Addi, slti => Slti, sltiu => Sltiu, xori => Xori, ori => Ori, andi => Andi,
        slli => Slli, srli => Srli, srai => Srai,
        lb => Lb, lh => Lh, lw => Lw, lbu => Lbu, lhu => Lhu,
        jalr => Jalr,
    }

    store! { sb => Sb, sh => Sh, sw => Sw }

    branch! {
        beq => Beq, bne => Bne, blt => Blt, bge => Bge, bltu => Bltu, bgeu => Bgeu,
    }

    /// Builds `JAL rd, offset`.
    pub fn jal(rd: u32, offset: i32) -> Result<Self, CodecError> {
        Self::j(rd, offset)
    }

    /// Builds `LUI rd, imm20`.
    pub fn lui(rd: u32, imm20: u32) -> Result<Self, CodecError> {
        Self::u(UOpcode::Lui, rd, imm20)
    }

    /// Builds `AUIPC rd, imm20`.
    pub fn auipc(rd: u32, imm20: u32) -> Result<Self, CodecError> {
        Self::u(UOpcode::Auipc, rd, imm20)
    }

    /// Encodes the instruction into its 32-bit machine word.
    pub fn encode(&self) -> u32 {
        crate::isa::encode::encode(self)
    }

    /// Decodes a 32-bit machine word. See [`crate::isa::decode::decode`].
    pub fn decode(word: u32) -> Result<Self, CodecError> {
        crate::isa::decode::decode(word)
    }

    /// Returns the opcode class.
    pub const fn class(&self) -> OpcodeClass {
        match self {
            Self::R(_) => OpcodeClass::Reg,
            Self::I(i) => i.opcode.class(),
            Self::S(_) => OpcodeClass::Store,
            Self::B(_) => OpcodeClass::Branch,
            Self::U(u) => u.opcode.class(),
            Self::J(_) => OpcodeClass::Jal,
        }
    }

    /// Returns the 7-bit opcode.
    pub const fn opcode(&self) -> u32 {
        self.class().opcode()
    }

    /// Returns the encoding format.
    pub const fn format(&self) -> Format {
        match self {
            Self::R(_) => Format::R,
            Self::I(_) => Format::I,
            Self::S(_) => Format::S,
            Self::B(_) => Format::B,
            Self::U(_) => Format::U,
            Self::J(_) => Format::J,
        }
    }

    /// Returns the mnemonic these fields spell, or `None` if no table entry matches.
    pub fn mnemonic(&self) -> Option<Mnemonic> {
        Mnemonic::of(self)
    }

    /// Destination register, for formats that have one.
    pub const fn rd(&self) -> Option<Reg> {
        match self {
            Self::R(r) => Some(r.rd),
            Self::I(i) => Some(i.rd),
            Self::U(u) => Some(u.rd),
            Self::J(j) => Some(j.rd),
            Self::S(_) | Self::B(_) => None,
        }
    }

    /// First source register, for formats that have one.
    pub const fn rs1(&self) -> Option<Reg> {
        match self {
            Self::R(r) => Some(r.rs1),
            Self::I(i) => Some(i.rs1),
            Self::S(s) => Some(s.rs1),
            Self::B(b) => Some(b.rs1),
            Self::U(_) | Self::J(_) => None,
        }
    }

    /// Second source register, for formats that have one.
    pub const fn rs2(&self) -> Option<Reg> {
        match self {
            Self::R(r) => Some(r.rs2),
            Self::S(s) => Some(s.rs2),
            Self::B(b) => Some(b.rs2),
            Self::I(_) | Self::U(_) | Self::J(_) => None,
        }
    }

    /// funct3 selector, for formats that have one (derived for R-type).
    pub const fn funct3(&self) -> Option<Funct3> {
        match self {
            Self::R(r) => Some(r.funct3()),
            Self::I(i) => Some(i.funct3),
            Self::S(s) => Some(s.funct3),
            Self::B(b) => Some(b.funct3),
            Self::U(_) | Self::J(_) => None,
        }
    }

    /// The immediate as the datapath sees it.
    ///
    /// Sign-extended for I/S/B/J; for U the raw field shifted left by 12.
    /// `None` for R-type.
    pub const fn imm(&self) -> Option<i32> {
        match self {
            Self::R(_) => None,
            Self::I(i) => Some(i.imm.get()),
            Self::S(s) => Some(s.imm.get()),
            Self::B(b) => Some(b.offset.get()),
            Self::U(u) => Some(u.imm.value() as i32),
            Self::J(j) => Some(j.offset.get()),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::isa::disasm::Disassembler::default().asm(self))
    }
}
