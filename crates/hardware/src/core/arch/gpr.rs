//! Integer register file.
//!
//! Thirty-two 64-bit registers held as raw bit patterns. `x0` reads as zero no
//! matter what was written to it.

use std::fmt;

use crate::common::constants::GPR_COUNT;
use crate::isa::abi::REG_NAMES;

/// The `x0`..`x31` register file. Signed views are taken by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u64; GPR_COUNT],
}

impl Gpr {
    /// Returns a register file with every register cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of register `idx`; `0` for `x0` and for indices past `x31`.
    #[inline]
    pub fn read(&self, idx: usize) -> u64 {
        match idx {
            0 => 0,
            _ => self.regs.get(idx).copied().unwrap_or(0),
        }
    }

    /// Sets register `idx` to `val`. Writes to `x0` or past `x31` are dropped.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u64) {
        if let Some(slot) = self.regs.get_mut(idx).filter(|_| idx != 0) {
            *slot = val;
        }
    }

    /// Returns a copy of all 32 registers, with `x0` reported as zero.
    pub fn snapshot(&self) -> [u64; GPR_COUNT] {
        let mut regs = self.regs;
        regs[0] = 0;
        regs
    }
}

/// Printable view of the program counter and all 32 registers.
///
/// Registers are listed two per line with their ABI names, e.g.
/// `x1  (ra)   = 0x0000000000000000`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterDump {
    /// Program counter.
    pub pc: u64,
    /// Register values; `regs[0]` is always zero.
    pub regs: [u64; GPR_COUNT],
}

impl fmt::Display for RegisterDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "pc = {:#018x}", self.pc)?;
        for (row, pair) in self.regs.chunks(2).enumerate() {
            for (col, val) in pair.iter().enumerate() {
                let idx = row * 2 + col;
                let label = format!("x{idx}");
                let name = format!("({})", REG_NAMES[idx]);
                write!(f, "{label:<4}{name:<7}= {val:#018x}")?;
                if col == 0 {
                    f.write_str("   ")?;
                }
            }
            if row + 1 < GPR_COUNT / 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
