//! Single-line assembler.
//!
//! Parses one line of RV32I assembly into an [`Instruction`]. Accepted syntax
//! is the operand order printed by [`crate::isa::disasm`] plus the usual
//! assembler conveniences:
//!
//! - registers as `xN` or ABI names (`zero`, `ra`, `sp`, `a0`, `fp`, ...);
//! - operands separated by whitespace and/or commas;
//! - immediates in decimal, `0x` hex or `0b` binary, optionally negative;
//! - `offset(base)` memory operands for loads, stores and `JALR`;
//! - a trailing `#` comment.
//!
//! ```
//! use toothless_isa::isa::asm::parse;
//! use toothless_isa::Instruction;
//!
//! let parsed = parse("addi sp, sp, -16").unwrap();
//! assert_eq!(parsed, Instruction::addi(2, 2, -16).unwrap());
//! assert_eq!(parse("LW a0 8(sp)").unwrap(), Instruction::lw(10, 2, 8).unwrap());
//! ```

use crate::common::error::CodecError;
use crate::isa::abi;
use crate::isa::instruction::{Format, Instruction, OpcodeClass, Operands};
use crate::isa::mnemonic::Mnemonic;

/// Parses one line of assembly.
///
/// # Errors
///
/// * [`CodecError::UnknownMnemonic`] for an unrecognised mnemonic.
/// * [`CodecError::Syntax`] for a wrong operand count, a bad register name or
///   an unparsable immediate.
/// * Range errors from the instruction constructors for out-of-range values.
pub fn parse(line: &str) -> Result<Instruction, CodecError> {
    let code = line.split_once('#').map_or(line, |(code, _)| code).trim();
    let mut tokens = code
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());

    let Some(head) = tokens.next() else {
        return Err(CodecError::syntax(line, "empty line"));
    };
    let mnemonic: Mnemonic = head.parse()?;

    let memory_form = matches!(
        mnemonic.class(),
        OpcodeClass::Load | OpcodeClass::Store | OpcodeClass::Jalr
    );
    let mut operands = Vec::with_capacity(3);
    for token in tokens {
        match split_memory_operand(token).filter(|_| memory_form) {
            Some((offset, base)) => {
                operands.push(base);
                operands.push(offset);
            }
            None => operands.push(token),
        }
    }

    let format = mnemonic.format();
    let expected = arity(format);
    if operands.len() != expected {
        return Err(CodecError::syntax(
            line,
            format!(
                "{} takes {expected} operands, found {}",
                mnemonic.name(),
                operands.len()
            ),
        ));
    }

    let reg = |text: &str| {
        abi::lookup(text)
            .map(|r| r.get())
            .ok_or_else(|| CodecError::syntax(line, format!("bad register `{text}`")))
    };
    let imm = |text: &str| {
        parse_immediate(text)
            .ok_or_else(|| CodecError::syntax(line, format!("bad immediate `{text}`")))
    };

    let ops = match format {
        Format::R => Operands {
            rd: reg(operands[0])?,
            rs1: reg(operands[1])?,
            rs2: reg(operands[2])?,
            imm: 0,
        },
        Format::I => Operands {
            rd: reg(operands[0])?,
            rs1: reg(operands[1])?,
            imm: imm(operands[2])?,
            ..Operands::default()
        },
        Format::S => Operands {
            rs2: reg(operands[0])?,
            rs1: reg(operands[1])?,
            imm: imm(operands[2])?,
            ..Operands::default()
        },
        Format::B => Operands {
            rs1: reg(operands[0])?,
            rs2: reg(operands[1])?,
            imm: imm(operands[2])?,
            ..Operands::default()
        },
        Format::U | Format::J => Operands {
            rd: reg(operands[0])?,
            imm: imm(operands[1])?,
            ..Operands::default()
        },
    };

    let instr = Instruction::from_mnemonic(mnemonic, ops)?;
    tracing::trace!(%mnemonic, "assembled `{code}`");
    Ok(instr)
}

/// Operand count for each format.
const fn arity(format: Format) -> usize {
    match format {
        Format::R | Format::I | Format::S | Format::B => 3,
        Format::U | Format::J => 2,
    }
}

/// Splits `offset(base)` into `(offset, base)`. An empty offset means zero.
fn split_memory_operand(token: &str) -> Option<(&str, &str)> {
    let (offset, rest) = token.split_once('(')?;
    let base = rest.strip_suffix(')')?;
    Some((if offset.is_empty() { "0" } else { offset }, base))
}

/// Parses a decimal, `0x` hex or `0b` binary integer with an optional sign.
fn parse_immediate(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.starts_with(['-', '+']) {
        return None;
    }
    let lower = digits.to_ascii_lowercase();
    let magnitude = if let Some(hex) = lower.strip_prefix("0x") {
        i64::from_str_radix(&hex.replace('_', ""), 16).ok()?
    } else if let Some(bin) = lower.strip_prefix("0b") {
        i64::from_str_radix(&bin.replace('_', ""), 2).ok()?
    } else {
        lower.parse::<i64>().ok()?
    };
    Some(if negative { -magnitude } else { magnitude })
}
