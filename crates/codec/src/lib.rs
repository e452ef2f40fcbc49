//! RV32I instruction codec for the Toothless core's verification flow.
//!
//! This crate turns typed RISC-V base-integer instructions into bit-exact 32-bit
//! words and back, and provides what a testbench needs around that:
//! 1. **Model:** Range-checked field types and one [`Instruction`] variant per
//!    encoding format (R/I/S/B/U/J).
//! 2. **Codec:** Pure [`encode`] and [`decode`] functions, including the B/J
//!    immediate bit permutations.
//! 3. **Tables:** Opcode, funct3/funct7, ALU operation, operand-mux and
//!    load/store transfer codes shared with the hardware.
//! 4. **Diagnostics:** Assembly strings, field tables, expected decoder signals
//!    and mismatch reports for failing checks.
//!
//! # Examples
//!
//! ```
//! use toothless_isa::{Instruction, decode, encode};
//!
//! let addi = Instruction::addi(3, 1, -2).unwrap();
//! let word = encode(&addi);
//! assert_eq!(word, 0xFFE0_8193);
//! assert_eq!(decode(word).unwrap(), addi);
//! assert_eq!(addi.to_string(), "ADDI x3 x1 -2");
//! ```

/// Field types and the error taxonomy.
pub mod common;
/// Diagnostic rendering configuration.
pub mod config;
/// Current-instruction slot and signal mismatch reports.
pub mod diag;
/// Instruction set (model, tables, encode, decode, disassembly, signals).
pub mod isa;

/// Error type for every fallible codec operation.
pub use crate::common::error::CodecError;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Packs an instruction into its machine word.
pub use crate::isa::encode::encode;
/// Unpacks a machine word into an instruction.
pub use crate::isa::decode::decode;
/// Typed instruction and its per-format building blocks.
pub use crate::isa::instruction::{Format, Instruction, OpcodeClass, Operands, RegOp};
/// Mnemonic names of the 37 supported instructions.
pub use crate::isa::mnemonic::Mnemonic;
