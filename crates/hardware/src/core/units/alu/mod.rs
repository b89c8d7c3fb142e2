//! Integer ALU.
//!
//! One entry point, [`Alu::execute`], fans out by operation family:
//! [`arithmetic`] (Add, Sub), [`logic`] (bitwise ops and set-less-than) and
//! [`shifts`]. With `is32` set, arithmetic and shifts compute the word form and
//! sign-extend bit 31 of the result. Logic operations have no word form and
//! ignore the flag.

pub mod arithmetic;
pub mod logic;
pub mod shifts;

use crate::isa::instruction::AluOp;

/// Stateless integer ALU.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Computes `op` over `a` and `b`. For shifts `b` is the shift amount.
    ///
    /// ```
    /// use rv64i_core::core::units::alu::Alu;
    /// use rv64i_core::isa::instruction::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8, false), 50);
    /// assert_eq!(Alu::execute(AluOp::Add, 0x7FFF_FFFF, 1, true), 0xFFFF_FFFF_8000_0000);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i64 as u64, 10, false), 1);
    /// ```
    pub fn execute(op: AluOp, a: u64, b: u64, is32: bool) -> u64 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b, is32),
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b, is32),
            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b)
            }
        }
    }
}
