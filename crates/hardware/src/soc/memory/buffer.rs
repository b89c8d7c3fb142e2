//! DRAM Buffer Implementation.
//!
//! Zero-initialized backing storage for system RAM. All accessors are
//! bounds-checked and return `None` rather than panicking, so that the memory
//! device can turn a bad offset into a fault.

use std::fmt;

/// Fixed-size byte buffer backing a RAM region.
///
/// The allocation is zeroed through the allocator, so large buffers stay
/// lazily committed by the host until they are touched.
pub struct DramBuffer {
    data: Vec<u8>,
}

impl DramBuffer {
    /// Creates a new zero-filled DRAM buffer of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size],
        }
    }

    /// Returns the size of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer has zero capacity.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the `len` bytes starting at `offset`, or `None` if any is out of range.
    pub fn read_slice(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let end = offset.checked_add(len)?;
        self.data.get(offset..end)
    }

    /// Copies `data` to `offset`.
    ///
    /// Returns `None`, leaving the buffer untouched, if the slice does not fit.
    pub fn write_slice(&mut self, offset: usize, data: &[u8]) -> Option<()> {
        let end = offset.checked_add(data.len())?;
        self.data.get_mut(offset..end)?.copy_from_slice(data);
        Some(())
    }
}

impl fmt::Debug for DramBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DramBuffer").field("size", &self.len()).finish()
    }
}
