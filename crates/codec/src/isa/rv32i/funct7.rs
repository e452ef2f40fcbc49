//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) is used in R-type instructions to
//! distinguish between operations that share the same `funct3` (e.g., ADD vs SUB).

/// Default operation (ADD, SRL, etc.).
pub const DEFAULT: u32 = 0b000_0000;

/// Alternate operation (SUB, SRA).
pub const ALT: u32 = 0b010_0000;
/// Alias for ALT (Subtract).
pub const SUB: u32 = ALT;
/// Alias for ALT (Shift Right Arithmetic).
pub const SRA: u32 = ALT;

/// Bit of the I-type immediate that carries funct7 bit 5 for shift-immediates.
///
/// SRLI and SRAI share funct3 `101`; SRAI sets immediate bit 10.
pub const SRAI_IMM_BIT: i32 = 1 << 10;
