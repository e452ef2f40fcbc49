//! Mnemonic table.
//!
//! Single source of truth tying each RV32I mnemonic to its opcode class,
//! funct3 selector, funct7 discriminator and ALU operator. Lookup by name is
//! case-insensitive; an unknown name is an error, never a default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::CodecError;
use crate::isa::control::alu;
use crate::isa::instruction::{Format, IOpcode, Instruction, OpcodeClass, UOpcode};
use crate::isa::rv32i::{funct3, funct7};

/// RV32I base mnemonics understood by the codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mnemonic {
    /// Load upper immediate.
    Lui,
    /// Add upper immediate to PC.
    Auipc,
    /// Jump and link.
    Jal,
    /// Jump and link register.
    Jalr,
    /// Branch if equal.
    Beq,
    /// Branch if not equal.
    Bne,
    /// Branch if less than (signed).
    Blt,
    /// Branch if greater or equal (signed).
    Bge,
    /// Branch if less than (unsigned).
    Bltu,
    /// Branch if greater or equal (unsigned).
    Bgeu,
    /// Load byte (sign-extended).
    Lb,
    /// Load halfword (sign-extended).
    Lh,
    /// Load word.
    Lw,
    /// Load byte (zero-extended).
    Lbu,
    /// Load halfword (zero-extended).
    Lhu,
    /// Store byte.
    Sb,
    /// Store halfword.
    Sh,
    /// Store word.
    Sw,
    /// Add immediate.
    Addi,
    /// Set less than immediate.
    Slti,
    /// Set less than immediate unsigned.
    Sltiu,
    /// XOR immediate.
    Xori,
    /// OR immediate.
    Ori,
    /// AND immediate.
    Andi,
    /// Shift left logical immediate.
    Slli,
    /// Shift right logical immediate.
    Srli,
    /// Shift right arithmetic immediate.
    Srai,
    /// Add.
    Add,
    /// Subtract.
    Sub,
    /// Shift left logical.
    Sll,
    /// Set less than.
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Exclusive OR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// OR.
    Or,
    /// AND.
    And,
}

impl Mnemonic {
    /// Every table entry.
    pub const ALL: [Self; 37] = [
        Self::Lui,
        Self::Auipc,
        Self::Jal,
        Self::Jalr,
        Self::Beq,
        Self::Bne,
        Self::Blt,
        Self::Bge,
        Self::Bltu,
        Self::Bgeu,
        Self::Lb,
        Self::Lh,
        Self::Lw,
        Self::Lbu,
        Self::Lhu,
        Self::Sb,
        Self::Sh,
        Self::Sw,
        Self::Addi,
        Self::Slti,
        Self::Sltiu,
        Self::Xori,
        Self::Ori,
        Self::Andi,
        Self::Slli,
        Self::Srli,
        Self::Srai,
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

    /// Upper-case assembler name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lui => "LUI",
            Self::Auipc => "AUIPC",
            Self::Jal => "JAL",
            Self::Jalr => "JALR",
            Self::Beq => "BEQ",
            Self::Bne => "BNE",
            Self::Blt => "BLT",
            Self::Bge => "BGE",
            Self::Bltu => "BLTU",
            Self::Bgeu => "BGEU",
            Self::Lb => "LB",
            Self::Lh => "LH",
            Self::Lw => "LW",
            Self::Lbu => "LBU",
            Self::Lhu => "LHU",
            Self::Sb => "SB",
            Self::Sh => "SH",
            Self::Sw => "SW",
            Self::Addi => "ADDI",
            Self::Slti => "SLTI",
            Self::Sltiu => "SLTIU",
            Self::Xori => "XORI",
            Self::Ori => "ORI",
            Self::Andi => "ANDI",
            Self::Slli => "SLLI",
            Self::Srli => "SRLI",
            Self::Srai => "SRAI",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Sll => "SLL",
            Self::Slt => "SLT",
            Self::Sltu => "SLTU",
            Self::Xor => "XOR",
            Self::Srl => "SRL",
            Self::Sra => "SRA",
            Self::Or => "OR",
            Self::And => "AND",
        }
    }

    /// Opcode class the mnemonic belongs to.
    pub const fn class(self) -> OpcodeClass {
        match self {
            Self::Lui => OpcodeClass::Lui,
            Self::Auipc => OpcodeClass::Auipc,
            Self::Jal => OpcodeClass::Jal,
            Self::Jalr => OpcodeClass::Jalr,
            Self::Beq | Self::Bne | Self::Blt | Self::Bge | Self::Bltu | Self::Bgeu => {
                OpcodeClass::Branch
            }
            Self::Lb | Self::Lh | Self::Lw | Self::Lbu | Self::Lhu => OpcodeClass::Load,
            Self::Sb | Self::Sh | Self::Sw => OpcodeClass::Store,
            Self::Addi
            | Self::Slti
            | Self::Sltiu
            | Self::Xori
            | Self::Ori
            | Self::Andi
            | Self::Slli
            | Self::Srli
            | Self::Srai => OpcodeClass::Imm,
            Self::Add
            | Self::Sub
            | Self::Sll
            | Self::Slt
            | Self::Sltu
            | Self::Xor
            | Self::Srl
            | Self::Sra
            | Self::Or
            | Self::And => OpcodeClass::Reg,
        }
    }

    /// Encoding format of the mnemonic.
    pub const fn format(self) -> Format {
        self.class().format()
    }

    /// 7-bit opcode of the mnemonic.
    pub const fn opcode(self) -> u32 {
        self.class().opcode()
    }

    /// funct3 selector; `None` for formats without one (U, J).
    pub const fn funct3(self) -> Option<u32> {
        let f3 = match self {
            Self::Lui | Self::Auipc | Self::Jal => return None,
            Self::Jalr => funct3::JALR,
            Self::Beq => funct3::BEQ,
            Self::Bne => funct3::BNE,
            Self::Blt => funct3::BLT,
            Self::Bge => funct3::BGE,
            Self::Bltu => funct3::BLTU,
            Self::Bgeu => funct3::BGEU,
            Self::Lb => funct3::LB,
            Self::Lh => funct3::LH,
            Self::Lw => funct3::LW,
            Self::Lbu => funct3::LBU,
            Self::Lhu => funct3::LHU,
            Self::Sb => funct3::SB,
            Self::Sh => funct3::SH,
            Self::Sw => funct3::SW,
            Self::Addi | Self::Add | Self::Sub => funct3::ADD_SUB,
            Self::Slti | Self::Slt => funct3::SLT,
            Self::Sltiu | Self::Sltu => funct3::SLTU,
            Self::Xori | Self::Xor => funct3::XOR,
            Self::Ori | Self::Or => funct3::OR,
            Self::Andi | Self::And => funct3::AND,
            Self::Slli | Self::Sll => funct3::SLL,
            Self::Srli | Self::Srai | Self::Srl | Self::Sra => funct3::SRL_SRA,
        };
        Some(f3)
    }

    /// funct7 discriminator for R-type and shift-immediate mnemonics.
    ///
    /// For shift-immediates this is the value of immediate bits 11:5.
    pub const fn funct7(self) -> Option<u32> {
        match self {
            Self::Sub | Self::Sra | Self::Srai => Some(funct7::ALT),
            Self::Add
            | Self::Sll
            | Self::Slt
            | Self::Sltu
            | Self::Xor
            | Self::Srl
            | Self::Or
            | Self::And
            | Self::Slli
            | Self::Srli => Some(funct7::DEFAULT),
            _ => None,
        }
    }

    /// ALU operator the decoder is expected to select.
    pub const fn alu_op(self) -> u32 {
        match self {
            Self::Sub => alu::SUB,
            Self::Sll | Self::Slli => alu::SLL,
            Self::Slt | Self::Slti | Self::Blt => alu::SLT,
            Self::Sltu | Self::Sltiu | Self::Bltu => alu::SLTU,
            Self::Xor | Self::Xori => alu::XOR,
            Self::Srl | Self::Srli => alu::SRL,
            Self::Sra | Self::Srai => alu::SRA,
            Self::Or | Self::Ori => alu::OR,
            Self::And | Self::Andi => alu::AND,
            Self::Beq => alu::EQ,
            Self::Bne => alu::NE,
            Self::Bge => alu::GES,
            Self::Bgeu => alu::GEU,
            Self::Add
            | Self::Addi
            | Self::Lui
            | Self::Auipc
            | Self::Jal
            | Self::Jalr
            | Self::Lb
            | Self::Lh
            | Self::Lw
            | Self::Lbu
            | Self::Lhu
            | Self::Sb
            | Self::Sh
            | Self::Sw => alu::ADD,
        }
    }

    /// Finds the mnemonic an instruction's fields spell.
    ///
    /// Returns `None` when the opcode class is known but funct3 (or the
    /// shift-immediate upper bits) match no entry, e.g. a load with funct3 `011`.
    pub fn of(instr: &Instruction) -> Option<Self> {
        match instr {
            Instruction::R(r) => Some(r.op.mnemonic()),
            Instruction::I(i) => {
                let f3 = i.funct3.get();
                let upper = i.imm.bits() >> 5;
                match i.opcode {
                    IOpcode::OpImm => Self::ALL.into_iter().find(|m| {
                        m.class() == OpcodeClass::Imm
                            && m.funct3() == Some(f3)
                            && m.funct7().is_none_or(|f7| f7 == upper)
                    }),
                    IOpcode::Load => Self::find(OpcodeClass::Load, f3),
                    IOpcode::Jalr => Self::find(OpcodeClass::Jalr, f3),
                }
            }
            Instruction::S(s) => Self::find(OpcodeClass::Store, s.funct3.get()),
            Instruction::B(b) => Self::find(OpcodeClass::Branch, b.funct3.get()),
            Instruction::U(u) => Some(match u.opcode {
                UOpcode::Lui => Self::Lui,
                UOpcode::Auipc => Self::Auipc,
            }),
            Instruction::J(_) => Some(Self::Jal),
        }
    }

    fn find(class: OpcodeClass, f3: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.class() == class && m.funct3() == Some(f3))
    }
}

impl FromStr for Mnemonic {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CodecError::UnknownMnemonic(s.to_owned()))
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
