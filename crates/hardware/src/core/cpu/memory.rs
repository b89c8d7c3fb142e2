//! Memory Access Handling.
//!
//! Fetches, loads and stores issued by the CPU. Every access goes through the
//! system bus by logical address; there is no translation and no cache.

use super::Cpu;
use crate::common::Trap;
use crate::common::constants::WIDTH_WORD;
use crate::core::units::lsu::Lsu;
use crate::isa::instruction::MemWidth;

impl Cpu {
    /// Fetches the 32-bit instruction word at the current PC.
    ///
    /// # Errors
    ///
    /// Propagates the bus fault if the PC is outside RAM.
    pub fn fetch(&mut self) -> Result<u32, Trap> {
        let word = self.bus.bus.read(self.pc, WIDTH_WORD)?;
        Ok(word as u32)
    }

    /// Loads `width` from `addr`, sign- or zero-extended to 64 bits.
    ///
    /// # Errors
    ///
    /// Propagates the bus fault; no register is touched here.
    pub fn load(&mut self, addr: u64, width: MemWidth, signed: bool) -> Result<u64, Trap> {
        let raw = self.bus.bus.read(addr, width.bits())?;
        Ok(Lsu::extend_load(raw, width, signed))
    }

    /// Stores the low bits of `val` selected by `width` to `addr`.
    ///
    /// # Errors
    ///
    /// Propagates the bus fault; memory is unchanged on failure.
    pub fn store(&mut self, addr: u64, width: MemWidth, val: u64) -> Result<(), Trap> {
        self.bus.bus.write(addr, width.bits(), val)
    }
}
