//! RV64I `funct7` values (bits 31-25).
//!
//! Only two values are legal for the base ISA register-register and word-shift
//! encodings. Bit 30 of the instruction is the only bit that differs.

/// Standard operation (ADD, SRL, SLLW, ...).
pub const DEFAULT: u32 = 0b000_0000;

/// Alternate operation selecting SUB over ADD.
pub const SUB: u32 = 0b010_0000;

/// Alternate operation selecting an arithmetic right shift.
pub const SRA: u32 = 0b010_0000;
