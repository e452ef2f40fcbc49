//! Expected decoder control signals.
//!
//! Derives, from an [`Instruction`], the outputs a correct RV32I decode stage
//! drives for it. It covers:
//! 1. **Operand usage:** Which of `rs1`/`rs2`/`rd` the instruction reads or writes.
//! 2. **Operand selection:** ALU input muxes and the write-back source.
//! 3. **Memory control:** Transfer size, direction and sign extension.
//!
//! Signal values use the codes in [`crate::isa::control`], so a testbench can
//! compare them directly against the hardware ports.

use serde::Serialize;

use crate::isa::control::{alu, lsu, mux};
use crate::isa::decode::decode;
use crate::isa::instruction::{Format, Instruction, OpcodeClass};
use crate::isa::mnemonic::Mnemonic;

/// Memory access requested by a load or store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MemAccess {
    /// `true` for stores.
    pub write: bool,
    /// Transfer size, one of [`lsu::BYTE`], [`lsu::HALF`], [`lsu::WORD`].
    pub transfer: u32,
    /// Loaded value is sign-extended to 32 bits.
    pub sign_extend: bool,
}

/// Decoder outputs for a single instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ControlSignals {
    /// The word decodes to no supported instruction.
    pub instr_invalid: bool,
    /// ALU operation code.
    pub alu_operator: u32,
    /// `rs1` is read.
    pub rs1_used: bool,
    /// `rs2` is read.
    pub rs2_used: bool,
    /// `rd` is written.
    pub rd_used: bool,
    /// Source register 1 index (zero when unused).
    pub rs1: u32,
    /// Source register 2 index (zero when unused).
    pub rs2: u32,
    /// Destination register index (zero when unused).
    pub rd: u32,
    /// `imm` carries a meaningful value.
    pub imm_valid: bool,
    /// Sign-extended immediate; U-type values are already shifted left by 12.
    pub imm: i32,
    /// ALU operand A source.
    pub op_a_sel: u32,
    /// ALU operand B source.
    pub op_b_sel: u32,
    /// Register write-back source.
    pub wb_src: u32,
    /// Memory access, for loads and stores.
    pub mem_access: Option<MemAccess>,
}

impl ControlSignals {
    /// Signals for a word that does not decode: every usage flag low.
    pub const fn invalid() -> Self {
        Self {
            instr_invalid: true,
            alu_operator: alu::ADD,
            rs1_used: false,
            rs2_used: false,
            rd_used: false,
            rs1: 0,
            rs2: 0,
            rd: 0,
            imm_valid: false,
            imm: 0,
            op_a_sel: mux::OP_A_REG,
            op_b_sel: mux::OP_B_REG,
            wb_src: mux::WB_ALU,
            mem_access: None,
        }
    }

    /// Derives the expected signals for an instruction.
    ///
    /// Field combinations that name no mnemonic yield [`Self::invalid`].
    pub fn derive(instr: &Instruction) -> Self {
        let Some(mnemonic) = instr.mnemonic() else {
            return Self::invalid();
        };
        let class = instr.class();
        let format = instr.format();

        let op_a_sel = match class {
            OpcodeClass::Auipc | OpcodeClass::Jal => mux::OP_A_CURPC,
            _ => mux::OP_A_REG,
        };
        let op_b_sel = match format {
            Format::R | Format::B => mux::OP_B_REG,
            Format::I | Format::S | Format::U | Format::J => mux::OP_B_IMM,
        };
        let wb_src = match class {
            OpcodeClass::Load => mux::WB_LSU,
            OpcodeClass::Jal | OpcodeClass::Jalr => mux::WB_PC_NEXT,
            _ => mux::WB_ALU,
        };

        Self {
            instr_invalid: false,
            alu_operator: mnemonic.alu_op(),
            rs1_used: instr.rs1().is_some(),
            rs2_used: instr.rs2().is_some(),
            rd_used: instr.rd().is_some(),
            rs1: instr.rs1().map_or(0, |r| r.get()),
            rs2: instr.rs2().map_or(0, |r| r.get()),
            rd: instr.rd().map_or(0, |r| r.get()),
            imm_valid: format != Format::R,
            imm: instr.imm().unwrap_or(0),
            op_a_sel,
            op_b_sel,
            wb_src,
            mem_access: mem_access(mnemonic),
        }
    }

    /// Decodes a raw word and derives its signals.
    pub fn from_word(word: u32) -> Self {
        decode(word).map_or_else(|_| Self::invalid(), |instr| Self::derive(&instr))
    }
}

/// Memory access for load and store mnemonics.
const fn mem_access(mnemonic: Mnemonic) -> Option<MemAccess> {
    let (write, transfer, sign_extend) = match mnemonic {
        Mnemonic::Lb => (false, lsu::BYTE, true),
        Mnemonic::Lh => (false, lsu::HALF, true),
        Mnemonic::Lw => (false, lsu::WORD, true),
        Mnemonic::Lbu => (false, lsu::BYTE, false),
        Mnemonic::Lhu => (false, lsu::HALF, false),
        Mnemonic::Sb => (true, lsu::BYTE, false),
        Mnemonic::Sh => (true, lsu::HALF, false),
        Mnemonic::Sw => (true, lsu::WORD, false),
        _ => return None,
    };
    Some(MemAccess {
        write,
        transfer,
        sign_extend,
    })
}
