//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Instruction Constants:** Instruction size.
//! 2. **Register Constants:** Size of the integer register file.
//! 3. **Access Widths:** The bit widths accepted by memory regions.

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE_32: u64 = 4;

/// Number of general-purpose integer registers.
pub const GPR_COUNT: usize = 32;

/// Byte access width in bits.
pub const WIDTH_BYTE: u32 = 8;

/// Halfword access width in bits.
pub const WIDTH_HALF: u32 = 16;

/// Word access width in bits.
pub const WIDTH_WORD: u32 = 32;

/// Doubleword access width in bits.
pub const WIDTH_DOUBLE: u32 = 64;
