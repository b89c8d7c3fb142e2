//! RV64I `funct3` values (bits 14-12).
//!
//! The meaning of a value depends on the major opcode, so the constants are
//! grouped by the opcode they apply to.

// Loads (OP_LOAD).

/// Load byte, sign-extended.
pub const LB: u32 = 0b000;
/// Load halfword, sign-extended.
pub const LH: u32 = 0b001;
/// Load word, sign-extended.
pub const LW: u32 = 0b010;
/// Load doubleword.
pub const LD: u32 = 0b011;
/// Load byte, zero-extended.
pub const LBU: u32 = 0b100;
/// Load halfword, zero-extended.
pub const LHU: u32 = 0b101;
/// Load word, zero-extended.
pub const LWU: u32 = 0b110;

// Stores (OP_STORE).

/// Store byte.
pub const SB: u32 = 0b000;
/// Store halfword.
pub const SH: u32 = 0b001;
/// Store word.
pub const SW: u32 = 0b010;
/// Store doubleword.
pub const SD: u32 = 0b011;

// Branches (OP_BRANCH).

/// Branch if equal.
pub const BEQ: u32 = 0b000;
/// Branch if not equal.
pub const BNE: u32 = 0b001;
/// Branch if less than, signed.
pub const BLT: u32 = 0b100;
/// Branch if greater or equal, signed.
pub const BGE: u32 = 0b101;
/// Branch if less than, unsigned.
pub const BLTU: u32 = 0b110;
/// Branch if greater or equal, unsigned.
pub const BGEU: u32 = 0b111;

// Arithmetic (OP_IMM, OP_REG, OP_IMM_32, OP_REG_32).

/// Add, or subtract when funct7 selects the alternate operation.
pub const ADD_SUB: u32 = 0b000;
/// Shift left logical.
pub const SLL: u32 = 0b001;
/// Set less than, signed.
pub const SLT: u32 = 0b010;
/// Set less than, unsigned.
pub const SLTU: u32 = 0b011;
/// Bitwise XOR.
pub const XOR: u32 = 0b100;
/// Shift right, logical or arithmetic.
pub const SRL_SRA: u32 = 0b101;
/// Bitwise OR.
pub const OR: u32 = 0b110;
/// Bitwise AND.
pub const AND: u32 = 0b111;

// Memory ordering (OP_MISC_MEM).

/// FENCE.
pub const FENCE: u32 = 0b000;
/// FENCE.I.
pub const FENCE_I: u32 = 0b001;
