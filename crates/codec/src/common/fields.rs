//! Bit-width-checked instruction field types.
//!
//! Each type wraps one instruction field and can only hold values that fit the
//! field's architectural width. Construction from a caller-supplied integer
//! validates the range and returns a [`CodecError`] instead of truncating, so
//! an encoder that only accepts these types never has to re-check anything.
//!
//! | type             | range                       |
//! |------------------|-----------------------------|
//! | [`Reg`]          | `0..=31`                    |
//! | [`Funct3`]       | `0..=7`                     |
//! | [`Imm12`]        | `-2048..=2047`              |
//! | [`BranchOffset`] | `-4096..=4094`, even        |
//! | [`UImm20`]       | `0..=0xFFFFF`               |
//! | [`JumpOffset`]   | `-1048576..=1048574`, even  |

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::CodecError;

/// Width of an instruction word in bits.
const WORD_BITS: u32 = 32;

/// Sign-extends the low `bits` bits of `value` to a 32-bit signed integer.
///
/// If bit `bits - 1` is set, every higher bit of the result is set as well.
/// Bits of `value` above `bits` are ignored.
///
/// # Arguments
///
/// * `value` - Raw field bits, right-aligned.
/// * `bits` - Field width. A width of 0 yields 0 and widths of 32 or more
///   reinterpret the whole word.
#[inline]
pub const fn sign_extend(value: u32, bits: u32) -> i32 {
    if bits == 0 {
        0
    } else if bits >= WORD_BITS {
        value as i32
    } else {
        let shift = WORD_BITS - bits;
        ((value << shift) as i32) >> shift
    }
}

/// Returns the two's-complement bit pattern of `value` truncated to `bits` bits.
///
/// Inverse of [`sign_extend`] for every `value` that fits a `bits`-wide
/// signed field.
#[inline]
pub const fn low_bits(value: i32, bits: u32) -> u32 {
    if bits >= WORD_BITS {
        value as u32
    } else {
        (value as u32) & ((1 << bits) - 1)
    }
}

fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), CodecError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CodecError::FieldOutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn check_even(field: &'static str, value: i64) -> Result<(), CodecError> {
    if value & 1 == 0 {
        Ok(())
    } else {
        Err(CodecError::MisalignedOffset { field, value })
    }
}

/// A 5-bit integer register index (`x0`-`x31`).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Reg(u8);

impl Reg {
    /// Number of bits in the field.
    pub const BITS: u32 = 5;
    /// The hardwired zero register.
    pub const ZERO: Self = Self(0);

    /// Creates a register index, rejecting anything above 31.
    pub fn new(index: u32) -> Result<Self, CodecError> {
        check_range("register", i64::from(index), 0, 31)?;
        Ok(Self(index as u8))
    }

    /// Builds a register index from raw field bits, ignoring bits above bit 4.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self((bits & 0x1F) as u8)
    }

    /// Returns the register number.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0 as u32
    }

    /// Returns the register number as a table index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u32> for Reg {
    type Error = CodecError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Reg> for u32 {
    fn from(reg: Reg) -> Self {
        reg.get()
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// A 3-bit `funct3` selector.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Funct3(u8);

impl Funct3 {
    /// Number of bits in the field.
    pub const BITS: u32 = 3;

    /// Creates a funct3 value, rejecting anything above 7.
    pub fn new(value: u32) -> Result<Self, CodecError> {
        check_range("funct3", i64::from(value), 0, 7)?;
        Ok(Self(value as u8))
    }

    /// Builds a funct3 value from raw field bits, ignoring bits above bit 2.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self((bits & 0x7) as u8)
    }

    /// Returns the selector value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0 as u32
    }
}

impl TryFrom<u32> for Funct3 {
    type Error = CodecError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Funct3> for u32 {
    fn from(f: Funct3) -> Self {
        f.get()
    }
}

/// A 12-bit signed immediate (I and S formats).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct Imm12(i16);

impl Imm12 {
    /// Number of bits in the field.
    pub const BITS: u32 = 12;
    /// Smallest representable value.
    pub const MIN: i32 = -2048;
    /// Largest representable value.
    pub const MAX: i32 = 2047;

    /// Creates an immediate, rejecting values outside `[-2048, 2047]`.
    pub fn new(value: i32) -> Result<Self, CodecError> {
        check_range(
            "imm12",
            i64::from(value),
            i64::from(Self::MIN),
            i64::from(Self::MAX),
        )?;
        Ok(Self(value as i16))
    }

    /// Builds an immediate from its 12 raw bits, sign-extending bit 11.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(sign_extend(bits, Self::BITS) as i16)
    }

    /// Returns the signed value.
    #[inline]
    pub const fn get(self) -> i32 {
        self.0 as i32
    }

    /// Returns the 12-bit two's-complement pattern.
    #[inline]
    pub const fn bits(self) -> u32 {
        low_bits(self.0 as i32, Self::BITS)
    }
}

impl TryFrom<i32> for Imm12 {
    type Error = CodecError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Imm12> for i32 {
    fn from(imm: Imm12) -> Self {
        imm.get()
    }
}

/// A signed, even branch offset in `[-4096, 4094]` (B format).
///
/// The offset is 13 bits wide; bit 0 is always zero and is not encoded.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct BranchOffset(i16);

impl BranchOffset {
    /// Width of the offset including the implicit bit 0.
    pub const BITS: u32 = 13;
    /// Smallest representable offset.
    pub const MIN: i32 = -4096;
    /// Largest representable offset.
    pub const MAX: i32 = 4094;

    /// Creates a branch offset, rejecting odd or out-of-range values.
    pub fn new(value: i32) -> Result<Self, CodecError> {
        check_range(
            "offset13",
            i64::from(value),
            i64::from(Self::MIN),
            i64::from(Self::MAX),
        )?;
        check_even("offset13", i64::from(value))?;
        Ok(Self(value as i16))
    }

    /// Builds an offset from its 13 raw bits; bit 0 is forced to zero.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(sign_extend(bits & !1, Self::BITS) as i16)
    }

    /// Returns the signed byte offset.
    #[inline]
    pub const fn get(self) -> i32 {
        self.0 as i32
    }

    /// Returns the 13-bit two's-complement pattern (bit 0 clear).
    #[inline]
    pub const fn bits(self) -> u32 {
        low_bits(self.0 as i32, Self::BITS)
    }
}

impl TryFrom<i32> for BranchOffset {
    type Error = CodecError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BranchOffset> for i32 {
    fn from(offset: BranchOffset) -> Self {
        offset.get()
    }
}

/// A raw 20-bit upper immediate (U format).
///
/// Holds the upper 20 bits of a 32-bit constant, unshifted and not
/// sign-extended. [`UImm20::value`] performs the `<< 12`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct UImm20(u32);

impl UImm20 {
    /// Number of bits in the field.
    pub const BITS: u32 = 20;
    /// Largest representable value.
    pub const MAX: u32 = 0xF_FFFF;

    /// Creates an upper immediate, rejecting values above `0xFFFFF`.
    pub fn new(value: u32) -> Result<Self, CodecError> {
        check_range("imm20", i64::from(value), 0, i64::from(Self::MAX))?;
        Ok(Self(value))
    }

    /// Builds an upper immediate from raw field bits, ignoring bits above bit 19.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & Self::MAX)
    }

    /// Returns the raw 20-bit field.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the 32-bit constant the field stands for (`imm20 << 12`).
    #[inline]
    pub const fn value(self) -> u32 {
        self.0 << 12
    }
}

impl TryFrom<u32> for UImm20 {
    type Error = CodecError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UImm20> for u32 {
    fn from(imm: UImm20) -> Self {
        imm.get()
    }
}

/// A signed, even jump offset in `[-1048576, 1048574]` (J format).
///
/// The offset is 21 bits wide; bit 0 is always zero and is not encoded.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct JumpOffset(i32);

impl JumpOffset {
    /// Width of the offset including the implicit bit 0.
    pub const BITS: u32 = 21;
    /// Smallest representable offset.
    pub const MIN: i32 = -1_048_576;
    /// Largest representable offset.
    pub const MAX: i32 = 1_048_574;

    /// Creates a jump offset, rejecting odd or out-of-range values.
    pub fn new(value: i32) -> Result<Self, CodecError> {
        check_range(
            "offset21",
            i64::from(value),
            i64::from(Self::MIN),
            i64::from(Self::MAX),
        )?;
        check_even("offset21", i64::from(value))?;
        Ok(Self(value))
    }

    /// Builds an offset from its 21 raw bits; bit 0 is forced to zero.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(sign_extend(bits & !1, Self::BITS))
    }

    /// Returns the signed byte offset.
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Returns the 21-bit two's-complement pattern (bit 0 clear).
    #[inline]
    pub const fn bits(self) -> u32 {
        low_bits(self.0, Self::BITS)
    }
}

impl TryFrom<i32> for JumpOffset {
    type Error = CodecError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JumpOffset> for i32 {
    fn from(offset: JumpOffset) -> Self {
        offset.get()
    }
}
