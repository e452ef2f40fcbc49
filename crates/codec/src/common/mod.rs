//! Common types shared by every layer of the codec.
//!
//! This module provides:
//! 1. **Field Types:** Bit-width-checked wrappers for registers, selectors and immediates.
//! 2. **Error Handling:** The [`CodecError`] taxonomy (range, lookup, decode, parse).

/// Error type for field construction, lookup, encoding and decoding.
pub mod error;

/// Bit-width-checked instruction field types and sign-extension helpers.
pub mod fields;

pub use error::CodecError;
pub use fields::{BranchOffset, Funct3, Imm12, JumpOffset, Reg, UImm20, low_bits, sign_extend};
