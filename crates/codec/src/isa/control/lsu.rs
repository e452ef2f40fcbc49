//! Load/store transfer-type selectors (`data_type_i`).

/// 8-bit transfer.
pub const BYTE: u32 = 0;
/// 16-bit transfer.
pub const HALF: u32 = 1;
/// 32-bit transfer.
pub const WORD: u32 = 2;
