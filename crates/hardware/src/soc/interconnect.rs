//! System interconnect (bus) for memory access.
//!
//! This module implements the address router between the CPU and memory regions. It provides:
//! 1. **Device registration:** Regions are added by address range and kept sorted by base.
//! 2. **Access routing:** Load/store by logical address, translated to a device-relative offset.
//! 3. **Binary loading:** Bulk copies of program images into a region.
//!
//! An address is routed to the region with the greatest base not above it. The
//! region then bounds-checks the offset, so an address past the end of RAM is
//! reported by the region as out of bounds, and an address below every region
//! is an [`Trap::AddressFault`].

use tracing::debug;

use crate::common::{Result, SimError, Trap};
use crate::soc::traits::Device;

/// System bus connecting the CPU and memory regions; routes accesses by address.
#[derive(Debug, Default)]
pub struct Bus {
    /// Registered regions, sorted by base address.
    devices: Vec<Box<dyn Device>>,
}

impl Bus {
    /// Creates an empty bus; add regions with [`Bus::add_device`].
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
        }
    }

    /// Registers a device on the bus; devices are sorted by base address for lookup.
    ///
    /// # Arguments
    ///
    /// * `dev` - The device to add.
    pub fn add_device(&mut self, dev: Box<dyn Device>) {
        let (base, size) = dev.address_range();
        debug!(
            device = dev.name(),
            base = format_args!("{base:#x}"),
            size,
            "bus: device added"
        );
        self.devices.push(dev);
        self.devices.sort_by_key(|d| d.address_range().0);
    }

    /// Returns the number of registered devices.
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Finds the device responsible for `addr` and the device-relative offset.
    fn route(&mut self, addr: u64) -> std::result::Result<(&mut Box<dyn Device>, u64), Trap> {
        let idx = self
            .devices
            .partition_point(|d| d.address_range().0 <= addr)
            .checked_sub(1)
            .ok_or(Trap::AddressFault { addr })?;
        let dev = &mut self.devices[idx];
        let (base, _) = dev.address_range();
        Ok((dev, addr - base))
    }

    /// Reads `width` bits at the logical address `addr`.
    ///
    /// # Errors
    ///
    /// [`Trap::AddressFault`] if no region starts at or below `addr`, or
    /// [`Trap::Memory`] if the region rejects the access.
    pub fn read(&mut self, addr: u64, width: u32) -> std::result::Result<u64, Trap> {
        let (dev, offset) = self.route(addr)?;
        Ok(dev.load(offset, width)?)
    }

    /// Writes the low `width` bits of `val` at the logical address `addr`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Bus::read`]; memory is unchanged on failure.
    pub fn write(&mut self, addr: u64, width: u32, val: u64) -> std::result::Result<(), Trap> {
        let (dev, offset) = self.route(addr)?;
        Ok(dev.store(offset, width, val)?)
    }

    /// Writes a binary blob into memory at the given address.
    ///
    /// # Arguments
    ///
    /// * `data` - Bytes to write.
    /// * `addr` - Logical base address.
    ///
    /// # Errors
    ///
    /// [`SimError::ImageTooLarge`] if the blob runs past the end of the
    /// region that owns `addr`, or a wrapped [`Trap::AddressFault`] if no
    /// region owns it.
    pub fn load_binary_at(&mut self, data: &[u8], addr: u64) -> Result<()> {
        let (dev, offset) = self.route(addr)?;
        let (_, size) = dev.address_range();
        let len = data.len() as u64;
        if offset.checked_add(len).is_none_or(|end| end > size) {
            return Err(SimError::ImageTooLarge {
                len,
                capacity: size.saturating_sub(offset),
            });
        }
        dev.write_bytes(offset, data).map_err(Trap::from)?;
        debug!(addr = format_args!("{addr:#x}"), len, "bus: binary loaded");
        Ok(())
    }
}
