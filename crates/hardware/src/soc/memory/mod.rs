//! Physical System Memory (DRAM).
//!
//! This module implements the main system memory device. It provides:
//! 1. **Buffer:** Backing storage ([`DramBuffer`]) for RAM contents.
//! 2. **Memory:** Device implementation that maps the buffer at a physical base address.
//!
//! Accesses of 8, 16, 32 and 64 bits are little-endian and may be unaligned.

/// DRAM buffer implementation for raw byte storage.
pub mod buffer;

use self::buffer::DramBuffer;
use crate::common::MemoryError;
use crate::common::constants::{WIDTH_BYTE, WIDTH_DOUBLE, WIDTH_HALF, WIDTH_WORD};
use crate::soc::traits::Device;

/// Returns the number of bytes covered by an access of `width` bits.
fn access_bytes(width: u32) -> Result<usize, MemoryError> {
    match width {
        WIDTH_BYTE | WIDTH_HALF | WIDTH_WORD | WIDTH_DOUBLE => Ok((width / 8) as usize),
        _ => Err(MemoryError::InvalidWidth(width)),
    }
}

/// System Memory structure.
#[derive(Debug)]
pub struct Memory {
    /// The underlying memory buffer.
    buffer: DramBuffer,
    /// The base physical address where this memory is mapped.
    base_addr: u64,
}

impl Memory {
    /// Creates a new zero-filled Memory of `size` bytes mapped at `base_addr`.
    pub fn new(size: usize, base_addr: u64) -> Self {
        Self {
            buffer: DramBuffer::new(size),
            base_addr,
        }
    }

    /// Returns the base address of the region.
    pub fn base(&self) -> u64 {
        self.base_addr
    }

    /// Returns the capacity of the region in bytes.
    pub fn size(&self) -> u64 {
        self.buffer.len() as u64
    }

    /// Converts an access at `offset` into a buffer index, checking that all
    /// `len` bytes lie inside the region.
    fn checked_index(&self, offset: u64, len: usize, width: u32) -> Result<usize, MemoryError> {
        let out_of_bounds = MemoryError::OutOfBounds { offset, width };
        let start = usize::try_from(offset).map_err(|_| out_of_bounds.clone())?;
        match start.checked_add(len) {
            Some(end) if end <= self.buffer.len() => Ok(start),
            _ => Err(out_of_bounds),
        }
    }
}

impl Device for Memory {
    fn name(&self) -> &str {
        "DRAM"
    }

    fn address_range(&self) -> (u64, u64) {
        (self.base_addr, self.size())
    }

    fn load(&mut self, offset: u64, width: u32) -> Result<u64, MemoryError> {
        let len = access_bytes(width)?;
        let start = self.checked_index(offset, len, width)?;
        let slice = self
            .buffer
            .read_slice(start, len)
            .ok_or(MemoryError::OutOfBounds { offset, width })?;

        let mut bytes = [0u8; 8];
        bytes[..len].copy_from_slice(slice);
        Ok(u64::from_le_bytes(bytes))
    }

    fn store(&mut self, offset: u64, width: u32, val: u64) -> Result<(), MemoryError> {
        let len = access_bytes(width)?;
        let start = self.checked_index(offset, len, width)?;
        let bytes = val.to_le_bytes();
        self.buffer
            .write_slice(start, &bytes[..len])
            .ok_or(MemoryError::OutOfBounds { offset, width })
    }

    fn write_bytes(&mut self, offset: u64, data: &[u8]) -> Result<(), MemoryError> {
        let start = self.checked_index(offset, data.len(), WIDTH_BYTE)?;
        self.buffer
            .write_slice(start, data)
            .ok_or(MemoryError::OutOfBounds {
                offset,
                width: WIDTH_BYTE,
            })
    }
}
