//! Simulator: the fetch-execute driver.
//!
//! Each step fetches the word at the PC, executes it and applies the
//! resulting [`NextPc`]. A step that traps leaves the machine exactly as it
//! was before the step.

use std::fmt;
use std::path::Path;

use tracing::{info, trace, warn};

use crate::common::constants::GPR_COUNT;
use crate::common::{Result, Trap};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::gpr::RegisterDump;
use crate::core::cpu::execution::NextPc;
use crate::isa::disasm::disassemble;
use crate::sim::loader;
use crate::soc::System;

/// Observable outcome of one executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepRecord {
    /// Raw instruction word.
    pub raw: u32,
    /// Address the word was fetched from.
    pub pc: u64,
    /// Program counter after the step.
    pub next_pc: u64,
    /// Register file after the step.
    pub regs: [u64; GPR_COUNT],
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:#018x}: {:#010x}  {}",
            self.pc,
            self.raw,
            disassemble(self.raw)
        )?;
        let dump = RegisterDump {
            pc: self.next_pc,
            regs: self.regs,
        };
        write!(f, "{dump}")
    }
}

/// Why [`Simulator::run`] returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// A fetch or execute trapped; the machine is in its pre-step state.
    Trap(Trap),
    /// The requested number of steps executed without a trap.
    LimitReached,
}

/// Summary of a [`Simulator::run`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of instructions that completed.
    pub steps: u64,
    /// Reason the run stopped.
    pub stop: StopReason,
}

/// Top-level simulator: owns the CPU, which owns the bus and RAM.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, PC, bus).
    pub cpu: Cpu,
}

impl Simulator {
    /// Creates a new simulator in its reset state.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::SimError::Config`] if `config` is invalid.
    pub fn new(config: &Config) -> Result<Self> {
        let system = System::new(config)?;
        Ok(Self {
            cpu: Cpu::new(system),
        })
    }

    /// Reads the image at `path`, then builds a machine and loads the image
    /// at the base of RAM.
    ///
    /// The file is read first, so a missing image never constructs RAM.
    ///
    /// # Errors
    ///
    /// [`crate::common::SimError::ImageNotFound`] if the file cannot be read,
    /// otherwise the errors of [`Simulator::new`] and [`Simulator::load_image`].
    pub fn from_image_file(config: &Config, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = loader::load_binary(path)?;
        let mut sim = Self::new(config)?;
        info!(
            image = %path.display(),
            len = image.len(),
            ram_size = config.memory.ram_size,
            "loading image"
        );
        sim.load_image(&image)?;
        Ok(sim)
    }

    /// Copies a program image to the base of RAM.
    ///
    /// # Errors
    ///
    /// See [`loader::load_image`].
    pub fn load_image(&mut self, image: &[u8]) -> Result<()> {
        loader::load_image(&mut self.cpu, image)
    }

    /// Fetches, executes and retires one instruction.
    ///
    /// # Errors
    ///
    /// Returns the trap raised by the fetch or the execute. The PC, the
    /// registers and memory are unchanged in that case.
    pub fn step(&mut self) -> std::result::Result<StepRecord, Trap> {
        let pc = self.cpu.pc;
        let raw = self.cpu.fetch()?;
        trace!(
            pc = format_args!("{pc:#018x}"),
            raw = format_args!("{raw:#010x}"),
            inst = %disassemble(raw),
            "step"
        );

        let next = self.cpu.execute(raw)?;
        let next_pc = next.resolve(pc);
        if let NextPc::Jump(target) = next {
            trace!(target = format_args!("{target:#x}"), "control transfer");
        }
        self.cpu.pc = next_pc;

        Ok(StepRecord {
            raw,
            pc,
            next_pc,
            regs: self.cpu.regs.snapshot(),
        })
    }

    /// Steps until a trap, or until `limit` steps have completed if given.
    ///
    /// `on_step` sees every completed [`StepRecord`] in order.
    pub fn run_with<F>(&mut self, limit: Option<u64>, mut on_step: F) -> RunSummary
    where
        F: FnMut(&StepRecord),
    {
        let mut steps = 0;
        loop {
            if limit.is_some_and(|max| steps >= max) {
                return RunSummary {
                    steps,
                    stop: StopReason::LimitReached,
                };
            }
            match self.step() {
                Ok(record) => {
                    steps += 1;
                    on_step(&record);
                }
                Err(trap) => {
                    warn!(%trap, steps, "simulator: stopped on trap");
                    return RunSummary {
                        steps,
                        stop: StopReason::Trap(trap),
                    };
                }
            }
        }
    }

    /// Steps until a trap, or until `limit` steps have completed if given.
    pub fn run(&mut self, limit: Option<u64>) -> RunSummary {
        self.run_with(limit, |_| {})
    }

    /// Returns a printable view of the current PC and registers.
    pub fn dump_state(&self) -> RegisterDump {
        self.cpu.dump_state()
    }
}
