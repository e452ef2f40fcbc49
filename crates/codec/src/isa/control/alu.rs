//! ALU operator codes (`alu_operator_o`).
//!
//! The top bit separates arithmetic/logic/shift operations (`0_xxxx`) from
//! comparisons (`1_xxxx`).

// Arithmetic
/// Signed addition.
pub const ADD: u32 = 0b0_0000;
/// Signed subtraction.
pub const SUB: u32 = 0b0_0001;
/// Unsigned addition.
pub const ADDU: u32 = 0b0_0010;
/// Unsigned subtraction.
pub const SUBU: u32 = 0b0_0011;

// Logical
/// Bitwise AND.
pub const AND: u32 = 0b0_0100;
/// Bitwise OR.
pub const OR: u32 = 0b0_0101;
/// Bitwise XOR.
pub const XOR: u32 = 0b0_0110;

// Shifts
/// Shift right logical.
pub const SRL: u32 = 0b0_1000;
/// Shift right arithmetic.
pub const SRA: u32 = 0b0_1001;
/// Shift left logical.
pub const SLL: u32 = 0b0_1010;

// Comparisons
/// Set less than (signed).
pub const SLT: u32 = 0b1_0000;
/// Set less than (unsigned).
pub const SLTU: u32 = 0b1_0001;
/// Less than or equal (signed).
pub const LES: u32 = 0b1_0010;
/// Less than or equal (unsigned).
pub const LEU: u32 = 0b1_0011;
/// Greater than (signed).
pub const GTS: u32 = 0b1_0100;
/// Greater than (unsigned).
pub const GTU: u32 = 0b1_0101;
/// Greater than or equal (signed).
pub const GES: u32 = 0b1_0110;
/// Greater than or equal (unsigned).
pub const GEU: u32 = 0b1_0111;
/// Equal.
pub const EQ: u32 = 0b1_1001;
/// Not equal.
pub const NE: u32 = 0b1_1010;

/// Every operator code with its name, in table order.
pub const ALL: [(&str, u32); 20] = [
    ("ADD", ADD),
    ("SUB", SUB),
    ("ADDU", ADDU),
    ("SUBU", SUBU),
    ("AND", AND),
    ("OR", OR),
    ("XOR", XOR),
    ("SRL", SRL),
    ("SRA", SRA),
    ("SLL", SLL),
    ("SLT", SLT),
    ("SLTU", SLTU),
    ("LES", LES),
    ("LEU", LEU),
    ("GTS", GTS),
    ("GTU", GTU),
    ("GES", GES),
    ("GEU", GEU),
    ("EQ", EQ),
    ("NE", NE),
];
