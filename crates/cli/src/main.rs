//! RV64I instruction-set simulator CLI.
//!
//! This binary loads a flat bare-metal image at the base of RAM and runs it
//! until the first trap. It performs:
//! 1. **Argument parsing:** Exactly one positional image path.
//! 2. **Logging setup:** `tracing` output filtered by `RUST_LOG` (default `info`).
//! 3. **Run:** Steps the simulator, then reports the trap and the final register state.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use rv64i_core::config::Config;
use rv64i_core::sim::{Simulator, StopReason};

#[derive(Parser, Debug)]
#[command(
    name = "rv64i-sim",
    author,
    version,
    about = "RISC-V RV64I instruction-set simulator",
    long_about = "Load a flat binary at the base of RAM and execute it until it traps.\n\nSet RUST_LOG=debug for a register dump after every instruction, or RUST_LOG=trace for per-instruction disassembly.\n\nExample:\n  rv64i-sim program.bin"
)]
struct Cli {
    /// Flat binary image, copied verbatim to the base of RAM.
    image: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default();
    let mut sim = match Simulator::from_image_file(&config, &cli.image) {
        Ok(sim) => sim,
        Err(e) => {
            error!("{e}");
            eprintln!("\n[!] FATAL: {e}");
            process::exit(1);
        }
    };

    let summary = sim.run_with(None, |record| debug!("\n{record}"));

    info!(steps = summary.steps, "run finished");
    match summary.stop {
        StopReason::Trap(trap) => {
            eprintln!("\n[!] FATAL TRAP: {trap}");
            eprintln!("{}", sim.dump_state());
            process::exit(1);
        }
        StopReason::LimitReached => {
            println!("{}", sim.dump_state());
        }
    }
}
