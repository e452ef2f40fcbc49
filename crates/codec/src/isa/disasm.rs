//! Instruction Disassembler and field renderer.
//!
//! Converts instructions into human-readable text for testbench failure
//! messages:
//!
//! - [`Disassembler::asm`]: assembly-like string, `"ADDI x3 x1 -2"`.
//! - [`Disassembler::field_table`]: one row per field in binary, decimal and hex.
//! - [`Disassembler::machine_code`]: the word in binary, grouped by field.
//!
//! Rendering never feeds back into encoding or decoding. Field combinations that
//! match no mnemonic render as [`UNKNOWN_INSTR`] instead of failing.
//!
//! # Usage
//!
//! ```
//! use toothless_isa::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x00108193), "ADDI x3 x1 1");
//! assert_eq!(disassemble(0x0000_0000), "UNKNOWN_INSTR");
//! ```

use std::fmt::Write as _;

use crate::common::fields::Reg;
use crate::config::{DisasmConfig, RegisterNaming};
use crate::isa::abi;
use crate::isa::decode::decode;
use crate::isa::instruction::{Format, Instruction};
use crate::isa::layout;

/// Sentinel printed for instructions that match no mnemonic.
pub const UNKNOWN_INSTR: &str = "UNKNOWN_INSTR";

/// Binary column width; fits every field and the I/S/B/J immediate rows.
const BINARY_COLUMN: usize = 21;

/// Renders instructions according to a [`DisasmConfig`].
#[derive(Debug, Clone, Default)]
pub struct Disassembler {
    config: DisasmConfig,
}

impl Disassembler {
    /// Creates a disassembler with the given settings.
    pub fn new(config: &DisasmConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn reg(&self, reg: Reg) -> String {
        match self.config.register_names {
            RegisterNaming::Numeric => reg.to_string(),
            RegisterNaming::Abi => abi::name(reg).to_owned(),
        }
    }

    /// Renders an assembly-like string.
    ///
    /// Operand order per format: R `rd rs1 rs2`, I `rd rs1 imm`,
    /// S `rs2 rs1 imm`, B `rs1 rs2 offset`, U `rd imm20`, J `rd offset`.
    /// Shift-immediates print the shift amount.
    pub fn asm(&self, instr: &Instruction) -> String {
        let Some(mnemonic) = instr.mnemonic() else {
            return UNKNOWN_INSTR.to_owned();
        };
        let mn = if self.config.uppercase {
            mnemonic.name().to_owned()
        } else {
            mnemonic.name().to_ascii_lowercase()
        };

        match instr {
            Instruction::R(r) => {
                format!("{mn} {} {} {}", self.reg(r.rd), self.reg(r.rs1), self.reg(r.rs2))
            }
            Instruction::I(i) => {
                let imm = if mnemonic.funct7().is_some() {
                    // Shift amount only; the upper bits are the funct7 discriminator.
                    (i.imm.bits() & 0x1F) as i32
                } else {
                    i.imm.get()
                };
                format!("{mn} {} {} {imm}", self.reg(i.rd), self.reg(i.rs1))
            }
            Instruction::S(s) => {
                format!("{mn} {} {} {}", self.reg(s.rs2), self.reg(s.rs1), s.imm.get())
            }
            Instruction::B(b) => {
                format!("{mn} {} {} {}", self.reg(b.rs1), self.reg(b.rs2), b.offset.get())
            }
            Instruction::U(u) => format!("{mn} {} {:#x}", self.reg(u.rd), u.imm.get()),
            Instruction::J(j) => format!("{mn} {} {}", self.reg(j.rd), j.offset.get()),
        }
    }

    /// Renders a fixed-width table of the instruction's fields.
    ///
    /// The first line names the format, the assembly string and the word.
    /// Then one row per field, most-significant first, with the raw field
    /// bits in binary, unsigned decimal and hex. Formats with an immediate
    /// end with an `imm` row holding the reassembled, sign-extended value.
    pub fn field_table(&self, instr: &Instruction) -> String {
        let word = instr.encode();
        let w = self.config.column_width;
        let mut out = String::new();

        let _ = writeln!(
            out,
            "{} {} ({word:#010x})",
            instr.format(),
            self.asm(instr)
        );
        let _ = writeln!(
            out,
            "{:<w$}{:>5}  {:<BINARY_COLUMN$}  {:>11}  {:>10}",
            "field", "bits", "binary", "dec", "hex"
        );
        for field in layout::fields(instr.format()) {
            let value = field.extract(word);
            let _ = writeln!(
                out,
                "{:<w$}{:>5}  {:<BINARY_COLUMN$}  {:>11}  {:>10}",
                field.name,
                field.width,
                format!("{value:0width$b}", width = field.width as usize),
                value,
                format!("{value:#x}"),
            );
        }
        if let Some(imm) = instr.imm() {
            let bits = imm_width(instr.format());
            let pattern = crate::common::fields::low_bits(imm, bits);
            let _ = writeln!(
                out,
                "{:<w$}{:>5}  {:<BINARY_COLUMN$}  {:>11}  {:>10}",
                "imm",
                bits,
                format!("{pattern:0width$b}", width = bits as usize),
                imm,
                format!("{:#x}", imm as u32),
            );
        }
        out
    }

    /// Renders the machine word in binary with `_` between fields.
    ///
    /// R-type `ADD x3 x1 x2` renders as `0000000_00010_00001_000_00011_0110011`.
    pub fn machine_code(&self, instr: &Instruction) -> String {
        let word = instr.encode();
        layout::fields(instr.format())
            .iter()
            .map(|f| format!("{:0width$b}", f.extract(word), width = f.width as usize))
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Decodes and renders a raw word; undecodable words render as [`UNKNOWN_INSTR`].
    pub fn disassemble(&self, word: u32) -> String {
        decode(word).map_or_else(|_| UNKNOWN_INSTR.to_owned(), |i| self.asm(&i))
    }
}

/// Width of the reassembled immediate for a format (U: the 32-bit constant).
const fn imm_width(format: Format) -> u32 {
    match format {
        Format::B => 13,
        Format::J => 21,
        Format::U => 32,
        Format::R | Format::I | Format::S => 12,
    }
}

/// Disassembles a raw word with default settings.
///
/// # Arguments
///
/// * `word` - The raw 32-bit instruction encoding.
pub fn disassemble(word: u32) -> String {
    Disassembler::default().disassemble(word)
}
