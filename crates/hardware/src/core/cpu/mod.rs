//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire architectural state. It coordinates the following:
//! 1. **State Management:** Maintains the register file and program counter.
//! 2. **System Integration:** Owns the system bus through which RAM is reached.
//! 3. **Reset:** Places the PC at the start of RAM and the stack pointer at its top.

/// Single-instruction execution against registers and memory.
pub mod execution;

/// Fetch, load and store access through the system bus.
pub mod memory;

use tracing::debug;

use crate::core::arch::gpr::{Gpr, RegisterDump};
use crate::isa::abi::REG_SP;
use crate::soc::System;

/// Main CPU structure containing all architectural state.
///
/// The CPU is an owned value: every simulator holds its own, and nothing in
/// it is shared between instances.
#[derive(Debug)]
pub struct Cpu {
    /// General Purpose Registers.
    pub regs: Gpr,
    /// Program Counter.
    pub pc: u64,
    /// System Bus and RAM.
    pub bus: System,
}

impl Cpu {
    /// Creates a CPU in its reset state attached to `system`.
    ///
    /// Every register is zero except `sp`, which holds the highest valid RAM
    /// address. The PC holds the RAM base.
    pub fn new(system: System) -> Self {
        let mut regs = Gpr::new();
        regs.write(REG_SP, system.ram_end());
        let pc = system.ram_base();
        debug!(pc = format_args!("{pc:#x}"), "cpu: reset");

        Self {
            regs,
            pc,
            bus: system,
        }
    }

    /// Returns a printable view of the PC and all registers.
    pub fn dump_state(&self) -> RegisterDump {
        RegisterDump {
            pc: self.pc,
            regs: self.regs.snapshot(),
        }
    }
}
