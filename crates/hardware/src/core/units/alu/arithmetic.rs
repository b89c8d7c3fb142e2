//! ALU arithmetic operations.
//!
//! Addition and subtraction wrap on overflow. The low 32 bits of a 64-bit sum
//! equal the 32-bit sum, so the word forms compute at full width and
//! sign-extend bit 31 of the result.

use crate::isa::decode::sign_extend;
use crate::isa::instruction::AluOp;

/// Executes `Add` or `Sub`; any other operation yields `0`.
pub fn execute(op: AluOp, a: u64, b: u64, is32: bool) -> u64 {
    let wide = match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => return 0,
    };
    if is32 { sign_extend(wide, 32) } else { wide }
}
