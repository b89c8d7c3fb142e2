//! ALU shift operations.
//!
//! SLL, SRL and SRA. A 64-bit shift takes its amount from the low six bits of
//! `b`; a word shift from the low five, operates on the low half of `a` only,
//! and sign-extends bit 31 of the result.

use crate::isa::instruction::AluOp;

const SHAMT_MASK_RV64: u64 = 0x3f;
const SHAMT_MASK_W: u64 = 0x1f;

/// Executes `Sll`, `Srl` or `Sra`; any other operation yields `0`.
pub fn execute(op: AluOp, a: u64, b: u64, is32: bool) -> u64 {
    if is32 {
        let word = a as u32;
        let sh = (b & SHAMT_MASK_W) as u32;
        let out = match op {
            AluOp::Sll => word << sh,
            AluOp::Srl => word >> sh,
            AluOp::Sra => ((word as i32) >> sh) as u32,
            _ => return 0,
        };
        return i64::from(out as i32) as u64;
    }

    let sh = (b & SHAMT_MASK_RV64) as u32;
    match op {
        AluOp::Sll => a << sh,
        AluOp::Srl => a >> sh,
        AluOp::Sra => ((a as i64) >> sh) as u64,
        _ => 0,
    }
}
