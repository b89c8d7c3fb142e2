//! Device trait for memory-mapped regions.
//!
//! This module defines the `Device` trait implemented by every bus-attached region. It provides:
//! 1. **Identification:** `name` and `address_range` for bus routing.
//! 2. **Access:** Width-parameterized load and store at device-relative offsets.
//! 3. **Bulk loading:** Contiguous byte writes used by the image loader.
//!
//! Devices know nothing about logical addresses; the bus subtracts the base
//! before calling them, so a region can be mapped anywhere.

use std::fmt;

use crate::common::MemoryError;

/// Trait for regions attached to the system bus.
pub trait Device: fmt::Debug + Send + Sync {
    /// Returns a short name for this device (e.g., `"DRAM"`).
    fn name(&self) -> &str;

    /// Returns (base_address, size_in_bytes) for this device's region.
    fn address_range(&self) -> (u64, u64);

    /// Reads `width / 8` bytes little-endian at `offset`, zero-extended to 64 bits.
    ///
    /// # Errors
    ///
    /// [`MemoryError::InvalidWidth`] unless `width` is 8, 16, 32 or 64, and
    /// [`MemoryError::OutOfBounds`] if any byte lies outside the region.
    fn load(&mut self, offset: u64, width: u32) -> Result<u64, MemoryError>;

    /// Writes the low `width` bits of `val` little-endian at `offset`.
    ///
    /// Nothing is written when the access fails.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Device::load`].
    fn store(&mut self, offset: u64, width: u32, val: u64) -> Result<(), MemoryError>;

    /// Writes a contiguous byte slice at the given offset (default: byte-by-byte).
    ///
    /// # Errors
    ///
    /// [`MemoryError::OutOfBounds`] if the slice does not fit; nothing is
    /// written in that case.
    fn write_bytes(&mut self, offset: u64, data: &[u8]) -> Result<(), MemoryError> {
        let (_, size) = self.address_range();
        let fits = offset
            .checked_add(data.len() as u64)
            .is_some_and(|end| end <= size);
        if !fits {
            return Err(MemoryError::OutOfBounds { offset, width: 8 });
        }
        for (i, byte) in data.iter().enumerate() {
            self.store(offset + i as u64, 8, u64::from(*byte))?;
        }
        Ok(())
    }
}
