//! Load/Store Unit (LSU).
//!
//! Computes effective addresses and applies the sign- or zero-extension a load
//! requires. The access itself goes through the system bus, which accepts
//! unaligned addresses, so no alignment checking happens here.

use crate::isa::decode::sign_extend;
use crate::isa::instruction::MemWidth;

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Computes the effective address `base + offset` with wrap-around.
    #[inline]
    pub fn effective_address(base: u64, offset: i64) -> u64 {
        base.wrapping_add(offset as u64)
    }

    /// Extends a zero-extended value read from memory to register width.
    ///
    /// # Arguments
    ///
    /// * `raw`    - The value returned by the bus, zero-extended to 64 bits.
    /// * `width`  - The access width.
    /// * `signed` - Sign-extend from the top bit of `width` instead of zero-extending.
    pub fn extend_load(raw: u64, width: MemWidth, signed: bool) -> u64 {
        if signed {
            sign_extend(raw, width.bits())
        } else {
            raw
        }
    }
}
