//! Configuration system for the RV64I simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline memory map constants.
//! 2. **Structures:** Nested sections; today only `memory`.
//! 3. **Validation:** Rejection of memory maps that cannot be built.
//!
//! Configuration is supplied as JSON via [`Config::from_json`], or use
//! `Config::default()` as the CLI does.

use serde::Deserialize;

use crate::common::{Result, SimError};

/// Memory map used when a field is left out.
mod defaults {
    /// RAM base (2 GiB mark).
    ///
    /// Program images are loaded here and execution starts here.
    pub const RAM_BASE: u64 = 0x8000_0000;

    /// RAM size, 128 MiB.
    ///
    /// Accesses at or beyond `RAM_BASE + RAM_SIZE` fault.
    pub const RAM_SIZE: usize = 128 * 1024 * 1024;
}

/// Root configuration structure for the simulator.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// RAM placement and size.
    #[serde(default)]
    pub memory: MemoryConfig,
}


/// Main memory configuration.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Base physical address of RAM
    #[serde(default = "MemoryConfig::default_ram_base")]
    pub ram_base: u64,

    /// RAM size in bytes
    #[serde(default = "MemoryConfig::default_ram_size")]
    pub ram_size: usize,
}

impl MemoryConfig {
    fn default_ram_base() -> u64 {
        defaults::RAM_BASE
    }

    fn default_ram_size() -> usize {
        defaults::RAM_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_base: defaults::RAM_BASE,
            ram_size: defaults::RAM_SIZE,
        }
    }
}

impl Config {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the JSON is malformed or the resulting
    /// configuration fails [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SimError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the memory map can be built.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if RAM is empty or does not fit in the
    /// 64-bit address space.
    pub fn validate(&self) -> Result<()> {
        let MemoryConfig { ram_base, ram_size } = self.memory;
        if ram_size == 0 {
            return Err(SimError::Config("ram_size must be non-zero".into()));
        }
        if ram_base.checked_add(ram_size as u64 - 1).is_none() {
            return Err(SimError::Config(format!(
                "RAM of {ram_size} bytes at {ram_base:#x} overflows the address space"
            )));
        }
        Ok(())
    }
}
