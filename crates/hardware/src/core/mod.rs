//! Core processor implementation.
//!
//! This module contains the CPU state container, the architectural register
//! file and the execution units used by the execute step.

/// Architecture-specific components (general-purpose register file).
pub mod arch;

/// CPU core implementation and execution.
pub mod cpu;

/// Execution units (ALU, BRU, LSU).
pub mod units;

pub use self::cpu::Cpu;
