//! System construction and top-level `System` type.
//!
//! This module builds the machine's memory map from configuration. It performs:
//! 1. **Validation:** Rejects configurations whose RAM cannot be mapped.
//! 2. **Bus setup:** Creates the interconnect.
//! 3. **Device registration:** Instantiates RAM at the configured base.

use tracing::debug;

use crate::common::Result;
use crate::config::Config;
use crate::soc::interconnect::Bus;
use crate::soc::memory::Memory;

/// Top-level system instance: the bus and the regions attached to it.
#[derive(Debug)]
pub struct System {
    /// System interconnect; routes accesses to RAM.
    pub bus: Bus,
    ram_base: u64,
    ram_size: u64,
}

impl System {
    /// Builds a new system from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::SimError::Config`] if the configuration is invalid.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let ram_base = config.memory.ram_base;
        let ram_size = config.memory.ram_size;

        let mut bus = Bus::new();
        bus.add_device(Box::new(Memory::new(ram_size, ram_base)));
        debug!(
            ram_base = format_args!("{ram_base:#x}"),
            ram_size, "system: built"
        );

        Ok(Self {
            bus,
            ram_base,
            ram_size: ram_size as u64,
        })
    }

    /// Returns the base address of RAM.
    pub fn ram_base(&self) -> u64 {
        self.ram_base
    }

    /// Returns the highest valid RAM address (`base + size - 1`).
    pub fn ram_end(&self) -> u64 {
        self.ram_base + self.ram_size - 1
    }

    /// Loads a binary into memory at the given address.
    ///
    /// # Errors
    ///
    /// See [`Bus::load_binary_at`].
    pub fn load_binary_at(&mut self, data: &[u8], addr: u64) -> Result<()> {
        self.bus.load_binary_at(data, addr)
    }
}
