//! Control-signal encodings consumed by the Toothless decoder and datapath.
//!
//! These are the numeric codes the decoder drives onto its control outputs;
//! testbenches compare observed signals against them.
//!
//! - `alu`: 5-bit ALU operator codes.
//! - `mux`: Operand A/B source and write-back source selectors.
//! - `lsu`: Load/store transfer-type selectors.

/// ALU operator codes.
pub mod alu;

/// Load/store unit transfer-type selectors.
pub mod lsu;

/// Operand and write-back multiplexer selectors.
pub mod mux;
