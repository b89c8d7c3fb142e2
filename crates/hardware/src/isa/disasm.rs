//! Instruction Disassembler for RISC-V RV64I.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics. Formatting works
//! on the decoded [`Instruction`], so the disassembler and the executor always
//! agree on field and immediate values.
//!
//! # Usage
//!
//! ```
//! use rv64i_core::isa::disasm::disassemble;
//! let text = disassemble(0x00A00513); // ADDI x10, x0, 10
//! assert_eq!(text, "addi a0, zero, 10");
//! ```

use std::fmt;

use crate::isa::abi::xreg;
use crate::isa::decode::decode;
use crate::isa::instruction::{AluOp, BranchCond, Instruction, MemWidth, Op};

/// Disassembles a 32-bit RISC-V instruction into a human-readable string.
///
/// Returns a mnemonic like `"add a0, a1, a2"` or `"unknown (0x...)"` for
/// unrecognised encodings.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    decode(inst).map_or_else(|_| format!("unknown ({inst:#010x})"), |d| d.to_string())
}

fn alu_mnemonic(op: AluOp) -> &'static str {
    match op {
        AluOp::Add => "add",
        AluOp::Sub => "sub",
        AluOp::Sll => "sll",
        AluOp::Slt => "slt",
        AluOp::Sltu => "sltu",
        AluOp::Xor => "xor",
        AluOp::Srl => "srl",
        AluOp::Sra => "sra",
        AluOp::Or => "or",
        AluOp::And => "and",
    }
}

fn branch_mnemonic(cond: BranchCond) -> &'static str {
    match cond {
        BranchCond::Eq => "beq",
        BranchCond::Ne => "bne",
        BranchCond::Lt => "blt",
        BranchCond::Ge => "bge",
        BranchCond::Ltu => "bltu",
        BranchCond::Geu => "bgeu",
    }
}

fn width_suffix(width: MemWidth) -> &'static str {
    match width {
        MemWidth::Byte => "b",
        MemWidth::Half => "h",
        MemWidth::Word => "w",
        MemWidth::Double => "d",
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rd, rs1, rs2, imm) = (xreg(self.rd), xreg(self.rs1), xreg(self.rs2), self.imm);

        match self.op {
            Op::Lui => write!(f, "lui {rd}, {:#x}", (imm >> 12) & 0xF_FFFF),
            Op::Auipc => write!(f, "auipc {rd}, {:#x}", (imm >> 12) & 0xF_FFFF),
            Op::Jal => write!(f, "jal {rd}, {imm}"),
            Op::Jalr => write!(f, "jalr {rd}, {imm}({rs1})"),
            Op::Branch(cond) => write!(f, "{} {rs1}, {rs2}, {imm}", branch_mnemonic(cond)),
            Op::Load { width, signed } => {
                let unsigned = if signed { "" } else { "u" };
                write!(f, "l{}{unsigned} {rd}, {imm}({rs1})", width_suffix(width))
            }
            Op::Store(width) => write!(f, "s{} {rs2}, {imm}({rs1})", width_suffix(width)),
            Op::AluImm(op) | Op::AluImm32(op) => {
                let w = if matches!(self.op, Op::AluImm32(_)) { "w" } else { "" };
                let mn = match op {
                    AluOp::Sltu => "sltiu".to_string(),
                    other => format!("{}i", alu_mnemonic(other)),
                };
                match op {
                    AluOp::Sll | AluOp::Srl | AluOp::Sra => {
                        write!(f, "{mn}{w} {rd}, {rs1}, {}", imm & 0x3F)
                    }
                    _ => write!(f, "{mn}{w} {rd}, {rs1}, {imm}"),
                }
            }
            Op::AluReg(op) => write!(f, "{} {rd}, {rs1}, {rs2}", alu_mnemonic(op)),
            Op::AluReg32(op) => write!(f, "{}w {rd}, {rs1}, {rs2}", alu_mnemonic(op)),
            Op::Fence => {
                if (self.raw >> 12) & 0x7 == 1 {
                    f.write_str("fence.i")
                } else {
                    f.write_str("fence")
                }
            }
        }
    }
}
