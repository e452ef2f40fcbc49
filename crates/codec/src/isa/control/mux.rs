//! Multiplexer selector codes.
//!
//! Operand A/B selectors drive `alu_op_a_mux_sel_o` / `alu_op_b_mux_sel_o`;
//! write-back selectors choose what is written to `rd`.

/// Operand A from `rs1`.
pub const OP_A_REG: u32 = 0b00;
/// Operand A from the current PC.
pub const OP_A_CURPC: u32 = 0b01;
/// Operand A from the immediate.
pub const OP_A_IMM: u32 = 0b10;

/// Operand B from `rs2`.
pub const OP_B_REG: u32 = 0b00;
/// Operand B from the immediate.
pub const OP_B_IMM: u32 = 0b10;

/// Write back the ALU result.
pub const WB_ALU: u32 = 0b00;
/// Write back the load-store unit read data.
pub const WB_LSU: u32 = 0b01;
/// Write back the address of the next instruction (PC + 4).
pub const WB_PC_NEXT: u32 = 0b10;
