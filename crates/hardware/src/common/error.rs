//! Fault and Error definitions.
//!
//! This module defines the failure types raised by the simulator. It provides:
//! 1. **Memory Errors:** Width and bounds violations reported by a memory region.
//! 2. **Traps:** Synchronous faults raised while fetching or executing an instruction.
//! 3. **Simulation Errors:** Startup and configuration failures plus wrapped traps.
//!
//! None of these are recovered locally. A trap stops the fetch-execute loop; the
//! driver reports it together with the machine state.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by a memory region for a device-relative access.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MemoryError {
    /// The requested access width is not one of 8, 16, 32 or 64 bits.
    ///
    /// Correctly decoded instructions never request another width, so this
    /// indicates a defect in the caller.
    #[error("invalid access width of {0} bits")]
    InvalidWidth(u32),

    /// The access would touch at least one byte outside the region.
    #[error("{width}-bit access at offset {offset:#x} is out of bounds")]
    OutOfBounds {
        /// Device-relative offset of the first byte.
        offset: u64,
        /// Access width in bits.
        width: u32,
    },
}

/// Synchronous fault raised during fetch or execute.
///
/// Trap delivery is not modelled: every trap is fatal to the run and carries
/// enough context to report where the machine stopped.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Trap {
    /// A load, store or fetch address is not claimed by any memory region.
    #[error("address fault at {addr:#018x}")]
    AddressFault {
        /// The faulting logical address.
        addr: u64,
    },

    /// The owning memory region rejected the access.
    #[error("memory fault: {0}")]
    Memory(#[from] MemoryError),

    /// The instruction word does not match any recognized RV64I encoding.
    #[error("illegal instruction {raw:#010x} at pc {pc:#018x}")]
    IllegalInstruction {
        /// The raw 32-bit instruction word.
        raw: u32,
        /// Address the word was fetched from.
        pc: u64,
    },
}

/// Top-level simulator error.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program image could not be read.
    #[error("could not read image '{}': {source}", path.display())]
    ImageNotFound {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The program image does not fit in RAM.
    #[error("image of {len} bytes exceeds memory capacity of {capacity} bytes")]
    ImageTooLarge {
        /// Image length in bytes.
        len: u64,
        /// Capacity of the target region in bytes.
        capacity: u64,
    },

    /// The configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A trap stopped execution.
    #[error(transparent)]
    Trap(#[from] Trap),
}

/// Result alias for simulator setup and run operations.
pub type Result<T, E = SimError> = std::result::Result<T, E>;
