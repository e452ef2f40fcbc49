//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the RV32I instruction model, its bit-exact encoder and decoder, the
//! control-code tables the core's decode stage drives, and the text renderers
//! used in testbench diagnostics.
//!
//! # Layout
//!
//! * `rv32i`: Opcode and function-code constants of the base integer set.
//! * `control`: ALU operation, operand-mux and load/store transfer codes.
//! * `instruction`, `mnemonic`, `layout`: The typed instruction model.
//! * `encode`, `decode`: Word packing and unpacking.
//! * `disasm`, `asm`: Text out and text in.
//! * `signals`: Expected decoder outputs per instruction.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Single-line assembly parser.
pub mod asm;

/// Hardware control-code tables (ALU, operand muxes, load/store unit).
pub mod control;

/// Instruction decoding logic for all RV32I instruction formats.
pub mod decode;

/// Instruction disassembler and field renderer for diagnostics.
pub mod disasm;

/// Instruction encoding for all RV32I instruction formats.
pub mod encode;

/// Instruction model and bit extraction utilities.
pub mod instruction;

/// Bit positions of every field in every format.
pub mod layout;

/// Mnemonic enumeration and field lookups.
pub mod mnemonic;

/// Base integer instruction set constants (32-bit RISC-V core instructions).
pub mod rv32i;

/// Expected decoder control signals.
pub mod signals;
