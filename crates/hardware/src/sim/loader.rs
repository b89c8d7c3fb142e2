//! Binary Loader.
//!
//! This module provides utilities for loading program images. It performs:
//! 1. **Binary loading:** Reads a flat bare-metal binary from disk into a byte buffer.
//! 2. **Placement:** Copies the image verbatim to the base of RAM, where the PC starts.
//!
//! Both steps fail fast: a missing file or an image larger than RAM is
//! reported before any instruction executes.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::{Result, SimError};
use crate::core::Cpu;

/// Loads a binary file from disk into a byte vector.
///
/// # Arguments
///
/// * `path` - Path to the binary file.
///
/// # Errors
///
/// Returns [`SimError::ImageNotFound`] if the file cannot be read.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| SimError::ImageNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), len = data.len(), "loader: image read");
    Ok(data)
}

/// Copies `image` to offset 0 of RAM.
///
/// # Errors
///
/// Returns [`SimError::ImageTooLarge`] if the image does not fit in RAM;
/// memory is untouched in that case.
pub fn load_image(cpu: &mut Cpu, image: &[u8]) -> Result<()> {
    let base = cpu.bus.ram_base();
    cpu.bus.load_binary_at(image, base)
}
