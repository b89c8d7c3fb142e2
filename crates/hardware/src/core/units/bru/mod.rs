//! Branch Resolution Unit (BRU).
//!
//! Evaluates conditional branch comparisons. There is no prediction: every
//! branch is resolved in the same step that executes it.

use crate::isa::instruction::BranchCond;

/// Branch Resolution Unit for conditional branches.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Returns whether a branch with condition `cond` is taken.
    ///
    /// `Lt`/`Ge` compare the operands as signed 64-bit integers, `Ltu`/`Geu`
    /// as unsigned.
    ///
    /// # Arguments
    ///
    /// * `cond` - The comparison selected by funct3.
    /// * `a`    - Value of `rs1`.
    /// * `b`    - Value of `rs2`.
    pub fn taken(cond: BranchCond, a: u64, b: u64) -> bool {
        match cond {
            BranchCond::Eq => a == b,
            BranchCond::Ne => a != b,
            BranchCond::Lt => (a as i64) < (b as i64),
            BranchCond::Ge => (a as i64) >= (b as i64),
            BranchCond::Ltu => a < b,
            BranchCond::Geu => a >= b,
        }
    }
}
