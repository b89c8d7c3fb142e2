//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Index constants for the registers the simulator touches directly, and the
//! ABI name table used by the disassembler and register dumps.

/// Register x2 (stack pointer, sp). Initialized to the top of RAM at reset.
pub const REG_SP: usize = 2;

/// ABI register names for x0-x31.
pub const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name for an integer register index.
#[inline]
pub fn xreg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}
