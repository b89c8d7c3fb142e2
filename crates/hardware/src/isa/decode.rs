//! RISC-V Instruction Decoder.
//!
//! Turns a 32-bit RV64I word into a tagged [`Instruction`]. Classification
//! looks at opcode, funct3 and funct7 (or `imm[11:6]` for 64-bit shift
//! immediates) and rejects every combination outside the base ISA. Immediates
//! are assembled per format and sign-extended once, here.

use crate::isa::instruction::{AluOp, BranchCond, Instruction, InstructionBits, MemWidth, Op};
use crate::isa::rv64i::{funct3, funct7, opcodes};

/// A slice of the instruction word: `(shift, mask)` applied as `(inst >> shift) & mask`.
type Field = (u32, u32);

/// Extracts `field` from `inst`.
#[inline(always)]
const fn field(inst: u32, f: Field) -> u32 {
    (inst >> f.0) & f.1
}

// I: imm[11:0] | rs1 | funct3 | rd | opcode
const I_IMM: Field = (20, 0xFFF);

// S: imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode
const S_IMM_4_0: Field = (7, 0x1F);
const S_IMM_11_5: Field = (25, 0x7F);

// B: imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode
const B_IMM_11: Field = (7, 0x1);
const B_IMM_4_1: Field = (8, 0xF);
const B_IMM_10_5: Field = (25, 0x3F);
const B_IMM_12: Field = (31, 0x1);

// U: imm[31:12] | rd | opcode
const U_IMM_31_12: u32 = 0xFFFF_F000;

// J: imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode
const J_IMM_19_12: Field = (12, 0xFF);
const J_IMM_11: Field = (20, 0x1);
const J_IMM_10_1: Field = (21, 0x3FF);
const J_IMM_20: Field = (31, 0x1);

/// Upper six immediate bits (`imm[11:6]`) of a shift-immediate.
const SHAMT6_FUNCT_SHIFT: u32 = 26;

/// `imm[11:6]` value selecting SRAI.
const SHIFT_ARITHMETIC_FUNCT6: u32 = 0b010000;

/// Error returned when an instruction word matches no recognized encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeError {
    /// The rejected instruction word.
    pub raw: u32,
}

/// Sign-extends the low `bits` bits of `value` to 64 bits.
///
/// Bit `bits - 1` is the sign bit; every higher bit of the result is a copy of
/// it. `bits` must be in `1..=64`.
///
/// # Arguments
///
/// * `value` - The value to extend; bits at and above `bits` are ignored.
/// * `bits` - The number of valid bits in `value`.
#[inline]
pub const fn sign_extend(value: u64, bits: u32) -> u64 {
    let shift = 64 - bits;
    (((value << shift) as i64) >> shift) as u64
}

/// Classifies `inst` and extracts its register fields and immediate.
///
/// # Errors
///
/// [`DecodeError`] when the opcode, funct3 and funct7 combination is not
/// part of RV64I.
pub fn decode(inst: u32) -> Result<Instruction, DecodeError> {
    let f3 = inst.funct3();
    let f7 = inst.funct7();
    let illegal = DecodeError { raw: inst };

    let (op, imm) = match inst.opcode() {
        opcodes::OP_LUI => (Op::Lui, decode_u_type_imm(inst)),
        opcodes::OP_AUIPC => (Op::Auipc, decode_u_type_imm(inst)),
        opcodes::OP_JAL => (Op::Jal, decode_j_type_imm(inst)),
        opcodes::OP_JALR if f3 == 0 => (Op::Jalr, decode_i_type_imm(inst)),
        opcodes::OP_BRANCH => {
            let cond = match f3 {
                funct3::BEQ => BranchCond::Eq,
                funct3::BNE => BranchCond::Ne,
                funct3::BLT => BranchCond::Lt,
                funct3::BGE => BranchCond::Ge,
                funct3::BLTU => BranchCond::Ltu,
                funct3::BGEU => BranchCond::Geu,
                _ => return Err(illegal),
            };
            (Op::Branch(cond), decode_b_type_imm(inst))
        }
        opcodes::OP_LOAD => {
            let (width, signed) = match f3 {
                funct3::LB => (MemWidth::Byte, true),
                funct3::LH => (MemWidth::Half, true),
                funct3::LW => (MemWidth::Word, true),
                funct3::LD => (MemWidth::Double, true),
                funct3::LBU => (MemWidth::Byte, false),
                funct3::LHU => (MemWidth::Half, false),
                funct3::LWU => (MemWidth::Word, false),
                _ => return Err(illegal),
            };
            (Op::Load { width, signed }, decode_i_type_imm(inst))
        }
        opcodes::OP_STORE => {
            let width = match f3 {
                funct3::SB => MemWidth::Byte,
                funct3::SH => MemWidth::Half,
                funct3::SW => MemWidth::Word,
                funct3::SD => MemWidth::Double,
                _ => return Err(illegal),
            };
            (Op::Store(width), decode_s_type_imm(inst))
        }
        opcodes::OP_IMM => {
            let funct6 = inst >> SHAMT6_FUNCT_SHIFT;
            let alu = match f3 {
                funct3::ADD_SUB => AluOp::Add,
                funct3::SLT => AluOp::Slt,
                funct3::SLTU => AluOp::Sltu,
                funct3::XOR => AluOp::Xor,
                funct3::OR => AluOp::Or,
                funct3::AND => AluOp::And,
                funct3::SLL if funct6 == 0 => AluOp::Sll,
                funct3::SRL_SRA if funct6 == 0 => AluOp::Srl,
                funct3::SRL_SRA if funct6 == SHIFT_ARITHMETIC_FUNCT6 => AluOp::Sra,
                _ => return Err(illegal),
            };
            (Op::AluImm(alu), decode_i_type_imm(inst))
        }
        opcodes::OP_IMM_32 => {
            let alu = match (f3, f7) {
                (funct3::ADD_SUB, _) => AluOp::Add,
                (funct3::SLL, funct7::DEFAULT) => AluOp::Sll,
                (funct3::SRL_SRA, funct7::DEFAULT) => AluOp::Srl,
                (funct3::SRL_SRA, funct7::SRA) => AluOp::Sra,
                _ => return Err(illegal),
            };
            (Op::AluImm32(alu), decode_i_type_imm(inst))
        }
        opcodes::OP_REG => {
            let alu = match (f3, f7) {
                (funct3::ADD_SUB, funct7::DEFAULT) => AluOp::Add,
                (funct3::ADD_SUB, funct7::SUB) => AluOp::Sub,
                (funct3::SLL, funct7::DEFAULT) => AluOp::Sll,
                (funct3::SLT, funct7::DEFAULT) => AluOp::Slt,
                (funct3::SLTU, funct7::DEFAULT) => AluOp::Sltu,
                (funct3::XOR, funct7::DEFAULT) => AluOp::Xor,
                (funct3::SRL_SRA, funct7::DEFAULT) => AluOp::Srl,
                (funct3::SRL_SRA, funct7::SRA) => AluOp::Sra,
                (funct3::OR, funct7::DEFAULT) => AluOp::Or,
                (funct3::AND, funct7::DEFAULT) => AluOp::And,
                _ => return Err(illegal),
            };
            (Op::AluReg(alu), 0)
        }
        opcodes::OP_REG_32 => {
            let alu = match (f3, f7) {
                (funct3::ADD_SUB, funct7::DEFAULT) => AluOp::Add,
                (funct3::ADD_SUB, funct7::SUB) => AluOp::Sub,
                (funct3::SLL, funct7::DEFAULT) => AluOp::Sll,
                (funct3::SRL_SRA, funct7::DEFAULT) => AluOp::Srl,
                (funct3::SRL_SRA, funct7::SRA) => AluOp::Sra,
                _ => return Err(illegal),
            };
            (Op::AluReg32(alu), 0)
        }
        opcodes::OP_MISC_MEM if f3 == funct3::FENCE || f3 == funct3::FENCE_I => {
            (Op::Fence, decode_i_type_imm(inst))
        }
        _ => return Err(illegal),
    };

    Ok(Instruction {
        raw: inst,
        op,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        imm,
    })
}

/// I-format immediate: loads, JALR, register-immediate ALU ops and FENCE.
fn decode_i_type_imm(inst: u32) -> i64 {
    sign_extend(u64::from(field(inst, I_IMM)), 12) as i64
}

/// S-format immediate: the offset of every store.
fn decode_s_type_imm(inst: u32) -> i64 {
    let imm = (field(inst, S_IMM_11_5) << 5) | field(inst, S_IMM_4_0);
    sign_extend(u64::from(imm), 12) as i64
}

/// B-format immediate: an even, signed branch offset of up to 13 bits.
fn decode_b_type_imm(inst: u32) -> i64 {
    let imm = (field(inst, B_IMM_12) << 12)
        | (field(inst, B_IMM_11) << 11)
        | (field(inst, B_IMM_10_5) << 5)
        | (field(inst, B_IMM_4_1) << 1);
    sign_extend(u64::from(imm), 13) as i64
}

/// U-format immediate: bits 31:12 in place, sign-extended from bit 31.
fn decode_u_type_imm(inst: u32) -> i64 {
    sign_extend(u64::from(inst & U_IMM_31_12), 32) as i64
}

/// J-format immediate: an even, signed jump offset of up to 21 bits.
fn decode_j_type_imm(inst: u32) -> i64 {
    let imm = (field(inst, J_IMM_20) << 20)
        | (field(inst, J_IMM_19_12) << 12)
        | (field(inst, J_IMM_11) << 11)
        | (field(inst, J_IMM_10_1) << 1);
    sign_extend(u64::from(imm), 21) as i64
}
