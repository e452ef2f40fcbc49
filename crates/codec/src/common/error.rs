//! Codec error definitions.
//!
//! Every failure the codec can report is a variant of [`CodecError`]. It provides:
//! 1. **Range errors:** A field value does not fit its architectural width, or a
//!    branch/jump offset is odd.
//! 2. **Lookup errors:** A mnemonic name is not in the constant tables.
//! 3. **Decode errors:** A word's opcode selects no known format, or its field
//!    combination names no instruction.
//! 4. **Parse errors:** An assembly line could not be read.

use thiserror::Error;

/// Errors reported by field construction, table lookup, encoding and decoding.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A field value lies outside its architectural range.
    ///
    /// Raised at construction of the bit-width-checked field types; the value is
    /// never truncated or wrapped.
    #[error("{field} value {value} out of range [{min}, {max}]")]
    FieldOutOfRange {
        /// Name of the offending field (`rd`, `imm12`, `offset13`, ...).
        field: &'static str,
        /// The rejected value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// A branch or jump offset has bit 0 set.
    ///
    /// B and J offsets are multiples of two; bit 0 is implicit and never encoded.
    #[error("{field} value {value} is odd; bit 0 of the offset is implicitly zero")]
    MisalignedOffset {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A mnemonic name that is not present in the constant tables.
    #[error("unknown mnemonic `{0}`")]
    UnknownMnemonic(String),

    /// The low seven bits of a word select no supported instruction format.
    #[error("unsupported opcode {opcode:#09b} in word {word:#010x}")]
    UnsupportedOpcode {
        /// The full instruction word.
        word: u32,
        /// The extracted 7-bit opcode.
        opcode: u32,
    },

    /// The opcode is known but the remaining fields name no instruction.
    #[error("illegal encoding {word:#010x}: {reason}")]
    IllegalEncoding {
        /// The full instruction word.
        word: u32,
        /// Which field combination was rejected.
        reason: &'static str,
    },

    /// An assembly line could not be parsed.
    #[error("cannot parse `{line}`: {reason}")]
    Syntax {
        /// The input line.
        line: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl CodecError {
    /// Returns `true` for errors caused by a field value exceeding its width.
    ///
    /// Odd branch/jump offsets count as range errors.
    pub const fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::FieldOutOfRange { .. } | Self::MisalignedOffset { .. }
        )
    }

    /// Returns `true` for errors raised while decoding a word.
    pub const fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedOpcode { .. } | Self::IllegalEncoding { .. }
        )
    }

    pub(crate) fn syntax(line: &str, reason: impl Into<String>) -> Self {
        Self::Syntax {
            line: line.to_owned(),
            reason: reason.into(),
        }
    }
}
