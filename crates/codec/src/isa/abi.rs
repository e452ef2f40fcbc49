//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Maps integer register indices to their calling-convention names and back.

use crate::common::fields::Reg;

/// ABI names for x0–x31.
pub const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name of a register.
#[inline]
pub const fn name(reg: Reg) -> &'static str {
    REG_NAMES[reg.index()]
}

/// Parses a register written as `xN` (0-31, digits only), `fp`, or an ABI name.
///
/// Matching is case-insensitive. Returns `None` for anything else.
pub fn lookup(text: &str) -> Option<Reg> {
    let lower = text.to_ascii_lowercase();
    if let Some(num) = lower.strip_prefix('x') {
        if num.is_empty() || !num.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        return num.parse::<u32>().ok().and_then(|n| Reg::new(n).ok());
    }
    if lower == "fp" {
        return Some(Reg::from_bits(8));
    }
    REG_NAMES
        .iter()
        .position(|&n| n == lower)
        .map(|i| Reg::from_bits(i as u32))
}
