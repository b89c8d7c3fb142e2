//! Execution units and functional components.
//!
//! This module contains the execution units used by the execute step: the
//! integer ALU, the branch resolution unit and the load/store unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit for conditional branches.
pub mod bru;

/// Load/Store Unit for effective addresses and load extension.
pub mod lsu;
