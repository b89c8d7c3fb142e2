//! ALU logical and comparison operations.
//!
//! Bitwise OR, AND, XOR and set-less-than (signed and unsigned). Comparisons
//! produce 0 or 1. RV64I has no word forms of these, so they always operate on
//! the full 64-bit operands.

use crate::isa::instruction::AluOp;

/// Executes a bitwise or set-less-than operation; any other operation yields `0`.
pub fn execute(op: AluOp, a: u64, b: u64) -> u64 {
    match op {
        AluOp::Or => a | b,
        AluOp::And => a & b,
        AluOp::Xor => a ^ b,
        AluOp::Slt => u64::from((a as i64) < (b as i64)),
        AluOp::Sltu => u64::from(a < b),
        _ => 0,
    }
}
