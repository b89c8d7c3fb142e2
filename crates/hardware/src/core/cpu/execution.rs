//! Single-Instruction Execution.
//!
//! This module applies one decoded instruction to the architectural state.
//! It performs the following:
//! 1. **Decode:** Classifies the raw word, rejecting unrecognized encodings.
//! 2. **Dispatch:** A single `match` over [`Op`] selects the ALU, BRU or LSU.
//! 3. **Commit:** Writes `rd` only after every fallible access has succeeded.
//!
//! Execution never touches the PC. It reports the control-flow outcome as a
//! [`NextPc`] and the driver applies it.

use super::Cpu;
use crate::common::Trap;
use crate::common::constants::INSTRUCTION_SIZE_32;
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;
use crate::core::units::lsu::Lsu;
use crate::isa::decode::decode;
use crate::isa::instruction::Op;

/// Control-flow outcome of executing one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextPc {
    /// Continue with the instruction after this one (`pc + 4`).
    Sequential,
    /// Continue at the given absolute address.
    Jump(u64),
}

impl NextPc {
    /// Resolves the outcome to the address of the next instruction.
    pub fn resolve(self, pc: u64) -> u64 {
        match self {
            Self::Sequential => pc.wrapping_add(INSTRUCTION_SIZE_32),
            Self::Jump(target) => target,
        }
    }
}

impl Cpu {
    /// Executes the instruction word `raw` as if fetched from the current PC.
    ///
    /// Registers and memory are updated in place. On error nothing has been
    /// modified.
    ///
    /// # Errors
    ///
    /// [`Trap::IllegalInstruction`] for unrecognized encodings, or the bus
    /// fault raised by a load or store.
    pub fn execute(&mut self, raw: u32) -> Result<NextPc, Trap> {
        let pc = self.pc;
        let inst = decode(raw).map_err(|e| Trap::IllegalInstruction { raw: e.raw, pc })?;
        let rs1 = self.regs.read(inst.rs1);
        let rs2 = self.regs.read(inst.rs2);
        let imm = inst.imm as u64;
        let link = pc.wrapping_add(INSTRUCTION_SIZE_32);

        match inst.op {
            Op::Lui => self.regs.write(inst.rd, imm),
            Op::Auipc => self.regs.write(inst.rd, pc.wrapping_add(imm)),
            Op::Jal => {
                self.regs.write(inst.rd, link);
                return Ok(NextPc::Jump(pc.wrapping_add(imm)));
            }
            Op::Jalr => {
                // Target is taken from rs1 before rd is overwritten.
                let target = rs1.wrapping_add(imm) & !1;
                self.regs.write(inst.rd, link);
                return Ok(NextPc::Jump(target));
            }
            Op::Branch(cond) => {
                if Bru::taken(cond, rs1, rs2) {
                    return Ok(NextPc::Jump(pc.wrapping_add(imm)));
                }
            }
            Op::Load { width, signed } => {
                let addr = Lsu::effective_address(rs1, inst.imm);
                let val = self.load(addr, width, signed)?;
                self.regs.write(inst.rd, val);
            }
            Op::Store(width) => {
                let addr = Lsu::effective_address(rs1, inst.imm);
                self.store(addr, width, rs2)?;
            }
            Op::AluImm(op) => self.regs.write(inst.rd, Alu::execute(op, rs1, imm, false)),
            Op::AluReg(op) => self.regs.write(inst.rd, Alu::execute(op, rs1, rs2, false)),
            Op::AluImm32(op) => self.regs.write(inst.rd, Alu::execute(op, rs1, imm, true)),
            Op::AluReg32(op) => self.regs.write(inst.rd, Alu::execute(op, rs1, rs2, true)),
            Op::Fence => {}
        }

        Ok(NextPc::Sequential)
    }
}
