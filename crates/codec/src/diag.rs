//! Testbench failure reporting.
//!
//! Holds the "current instruction under test" slot and turns signal
//! mismatches into reports that name the offending instruction.
//!
//! The slot is process-wide and only read here. Encoding, decoding and
//! rendering never consult it.
//!
//! # Examples
//!
//! ```
//! use toothless_isa::config::Config;
//! use toothless_isa::diag;
//! use toothless_isa::Instruction;
//!
//! diag::set_current_instr(Instruction::addi(3, 1, -2).unwrap());
//!
//! let config = Config::default();
//! assert!(diag::check_response("imm_o", 0xFFFF_FFFE, 32, -2, &config).is_ok());
//!
//! let err = diag::check_response("rd_o", 4, 5, 3, &config).unwrap_err();
//! assert!(err.to_string().starts_with("Expected rd_o=3, got rd_o=4"));
//! assert!(err.to_string().contains("ADDI x3 x1 -2"));
//! ```

use std::sync::{PoisonError, RwLock};

use thiserror::Error;

use crate::config::Config;
use crate::isa::disasm::Disassembler;
use crate::isa::instruction::Instruction;

/// Context line used when no instruction has been registered.
pub const NO_INSTRUCTION: &str = "No instruction set";

static CURRENT: RwLock<Option<Instruction>> = RwLock::new(None);

/// Records the instruction currently driven into the design under test.
pub fn set_current_instr(instr: Instruction) {
    tracing::debug!(word = instr.encode(), "current instruction: {instr}");
    *CURRENT.write().unwrap_or_else(PoisonError::into_inner) = Some(instr);
}

/// Empties the current-instruction slot.
pub fn clear_current_instr() {
    tracing::debug!("current instruction cleared");
    *CURRENT.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// Returns the instruction last passed to [`set_current_instr`], if any.
pub fn current_instr() -> Option<Instruction> {
    *CURRENT.read().unwrap_or_else(PoisonError::into_inner)
}

/// A signal that did not carry its expected value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Expected {signal}={expected}, got {signal}={actual}\nOffending instruction: {context}")]
pub struct Mismatch {
    /// Name of the checked signal.
    pub signal: String,
    /// The expected value.
    pub expected: i64,
    /// The observed value, read as signed when `expected` is negative.
    pub actual: i128,
    /// Rendering of the current instruction, or [`NO_INSTRUCTION`].
    pub context: String,
}

/// Compares an observed signal value against its expectation.
///
/// `actual` holds the raw bits of a `width`-bit signal. A negative `expected`
/// is compared against those bits read as a two's-complement `width`-bit
/// value; otherwise against the bits read as unsigned.
///
/// # Errors
///
/// Returns a [`Mismatch`] describing the signal and the current instruction
/// when the values differ.
pub fn check_response(
    signal: &str,
    actual: u64,
    width: u32,
    expected: i64,
    config: &Config,
) -> Result<(), Mismatch> {
    let observed = if expected < 0 {
        i128::from(as_signed(actual, width))
    } else {
        i128::from(masked(actual, width))
    };
    if observed == i128::from(expected) {
        return Ok(());
    }

    let mismatch = Mismatch {
        signal: signal.to_owned(),
        expected,
        actual: observed,
        context: describe_current(config),
    };
    tracing::warn!(signal, expected, actual = %observed, "signal mismatch");
    Err(mismatch)
}

/// Renders the current instruction the way a [`Mismatch`] reports it.
pub fn describe_current(config: &Config) -> String {
    let Some(instr) = current_instr() else {
        return NO_INSTRUCTION.to_owned();
    };
    let disasm = Disassembler::new(&config.disasm);
    let mut out = disasm.asm(&instr);
    if config.report.show_machine_code {
        out.push_str(" [");
        out.push_str(&disasm.machine_code(&instr));
        out.push(']');
    }
    if config.report.show_field_table {
        out.push('\n');
        out.push_str(disasm.field_table(&instr).trim_end());
    }
    out
}

/// Keeps the low `width` bits.
const fn masked(value: u64, width: u32) -> u64 {
    if width >= u64::BITS {
        value
    } else {
        value & ((1u64 << width) - 1)
    }
}

/// Reads the low `width` bits as a two's-complement value.
const fn as_signed(value: u64, width: u32) -> i64 {
    if width == 0 {
        0
    } else if width >= u64::BITS {
        value as i64
    } else {
        let shift = u64::BITS - width;
        ((value << shift) as i64) >> shift
    }
}
