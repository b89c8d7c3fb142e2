//! Simulation driver and program loading.
//!
//! Provides the loader that places a program image in RAM and the
//! fetch-execute driver that runs it.

/// Image file reading and placement in RAM.
pub mod loader;

/// Fetch-execute driver and per-step records.
pub mod simulator;

pub use simulator::{RunSummary, Simulator, StepRecord, StopReason};
