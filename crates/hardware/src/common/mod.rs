//! Common utilities and types used throughout the RISC-V simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Instruction sizes, register counts and access widths.
//! 2. **Error Handling:** Memory errors, traps and top-level simulation errors.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types and trap definitions.
pub mod error;

pub use error::{MemoryError, Result, SimError, Trap};
