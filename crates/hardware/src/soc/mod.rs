//! System-on-Chip (SoC) Components.
//!
//! This module organizes the components that make up the simulated system:
//! the bus, the RAM device, the device trait, and the builder that assembles
//! them.

/// System builder for assembling SoC components.
pub mod builder;

/// System bus interconnect and routing.
pub mod interconnect;

/// Main memory (DRAM) device.
pub mod memory;

/// Device trait definitions for bus-attached regions.
pub mod traits;

pub use builder::System;
