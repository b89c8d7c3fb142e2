//! RISC-V RV64I instruction-set simulator library.
//!
//! This crate implements a functional simulator for the 64-bit RISC-V base
//! integer ISA with the following:
//! 1. **Core:** General-purpose registers, PC, and single-instruction execution.
//! 2. **ISA:** Decoding into tagged instructions, plus a disassembler.
//! 3. **SoC:** Interconnect and RAM.
//! 4. **Simulation:** Loader, configuration, and the fetch-execute driver.
//!
//! # Example
//!
//! ```
//! use rv64i_core::{Config, Simulator};
//!
//! let mut config = Config::default();
//! config.memory.ram_size = 4096;
//! let mut sim = Simulator::new(&config).unwrap();
//!
//! // addi a0, zero, 10
//! sim.load_image(&0x00A0_0513_u32.to_le_bytes()).unwrap();
//! let record = sim.step().unwrap();
//! assert_eq!(record.regs[10], 10);
//! ```

/// Common types and constants (errors, traps, widths).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (register file, execution, execution units).
pub mod core;
/// Instruction set (decode, instruction, ABI, disassembly, RV64I encodings).
pub mod isa;
/// Binary loader and fetch-execute driver.
pub mod sim;
/// System-on-chip (builder, bus, memory, traits).
pub mod soc;

/// Root configuration type; use `Config::default()` or [`Config::from_json`].
pub use crate::config::Config;
/// Main CPU type; holds registers, PC and the system bus.
pub use crate::core::Cpu;
/// Fetch-execute driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;
/// Top-level system (bus and RAM); construct with `System::new`.
pub use crate::soc::System;
