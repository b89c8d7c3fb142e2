//! Raw instruction encoders.
//!
//! Format-level helpers (`r_type`, `i_type`, ...) build any 32-bit word; the
//! named helpers below them cover the instructions the tests use most.

use rv64i_core::isa::rv64i::opcodes::*;
use rv64i_core::isa::rv64i::{funct3, funct7};

// ──────────────────────────────────────────────────────────
// Format encoders
// ──────────────────────────────────────────────────────────

/// Encode an R-type instruction.
pub fn r_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, rs2: u32, funct7: u32) -> u32 {
    (funct7 & 0x7F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

/// Encode an I-type instruction.
pub fn i_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, imm: i32) -> u32 {
    let imm_bits = (imm as u32) & 0xFFF;
    imm_bits << 20 | (rs1 & 0x1F) << 15 | (funct3 & 0x7) << 12 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

/// Encode an S-type instruction.
pub fn s_type(opcode: u32, funct3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let hi = (v >> 5) & 0x7F;
    let lo = v & 0x1F;
    hi << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | lo << 7
        | (opcode & 0x7F)
}

/// Encode a B-type instruction. `imm` is a byte offset; bit 0 is dropped.
pub fn b_type(opcode: u32, funct3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let bit12 = (v >> 12) & 1;
    let bits10_5 = (v >> 5) & 0x3F;
    let bits4_1 = (v >> 1) & 0xF;
    let bit11 = (v >> 11) & 1;
    bit12 << 31
        | bits10_5 << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | bits4_1 << 8
        | bit11 << 7
        | (opcode & 0x7F)
}

/// Encode a U-type instruction from the 20-bit upper immediate.
pub fn u_type(opcode: u32, rd: u32, imm20: u32) -> u32 {
    (imm20 & 0xFFFFF) << 12 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

/// Encode a J-type instruction. `imm` is a byte offset; bit 0 is dropped.
pub fn j_type(opcode: u32, rd: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let bit20 = (v >> 20) & 1;
    let bits10_1 = (v >> 1) & 0x3FF;
    let bit11 = (v >> 11) & 1;
    let bits19_12 = (v >> 12) & 0xFF;
    bit20 << 31
        | bits10_1 << 21
        | bit11 << 20
        | bits19_12 << 12
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

// ──────────────────────────────────────────────────────────
// Common instructions
// ──────────────────────────────────────────────────────────

pub fn lui(rd: u32, imm20: u32) -> u32 {
    u_type(OP_LUI, rd, imm20)
}

pub fn auipc(rd: u32, imm20: u32) -> u32 {
    u_type(OP_AUIPC, rd, imm20)
}

pub fn jal(rd: u32, imm: i32) -> u32 {
    j_type(OP_JAL, rd, imm)
}

pub fn jalr(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_JALR, rd, 0, rs1, imm)
}

pub fn branch(f3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(OP_BRANCH, f3, rs1, rs2, imm)
}

pub fn beq(rs1: u32, rs2: u32, imm: i32) -> u32 {
    branch(funct3::BEQ, rs1, rs2, imm)
}

pub fn load(f3: u32, rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_LOAD, rd, f3, rs1, imm)
}

pub fn store(f3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    s_type(OP_STORE, f3, rs1, rs2, imm)
}

pub fn lw(rd: u32, rs1: u32, imm: i32) -> u32 {
    load(funct3::LW, rd, rs1, imm)
}

pub fn lwu(rd: u32, rs1: u32, imm: i32) -> u32 {
    load(funct3::LWU, rd, rs1, imm)
}

pub fn sw(rs1: u32, rs2: u32, imm: i32) -> u32 {
    store(funct3::SW, rs1, rs2, imm)
}

pub fn addi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_IMM, rd, funct3::ADD_SUB, rs1, imm)
}

pub fn addiw(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_IMM_32, rd, funct3::ADD_SUB, rs1, imm)
}

pub fn add(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG, rd, funct3::ADD_SUB, rs1, rs2, funct7::DEFAULT)
}

pub fn sub(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG, rd, funct3::ADD_SUB, rs1, rs2, funct7::SUB)
}

pub fn addw(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG_32, rd, funct3::ADD_SUB, rs1, rs2, funct7::DEFAULT)
}

/// Shift-immediate with a 6-bit shamt and the given funct6 in bits 31:26.
pub fn shift_imm(f3: u32, rd: u32, rs1: u32, shamt: u32, funct6: u32) -> u32 {
    i_type(OP_IMM, rd, f3, rs1, ((funct6 << 6) | (shamt & 0x3F)) as i32)
}

/// Word shift-immediate with a 5-bit shamt and the given funct7.
pub fn shift_imm32(f3: u32, rd: u32, rs1: u32, shamt: u32, f7: u32) -> u32 {
    r_type(OP_IMM_32, rd, f3, rs1, shamt & 0x1F, f7)
}

pub fn fence() -> u32 {
    i_type(OP_MISC_MEM, 0, funct3::FENCE, 0, 0x0FF)
}
