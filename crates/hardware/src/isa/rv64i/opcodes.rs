//! RV64I major opcodes (instruction bits 6-0).
//!
//! Every opcode listed here is accepted by the decoder; any other value in the
//! low seven bits is an illegal instruction.

/// LB, LH, LW, LD, LBU, LHU, LWU.
pub const OP_LOAD: u32 = 0x03;

/// FENCE, FENCE.I.
pub const OP_MISC_MEM: u32 = 0x0F;

/// ADDI, SLTI, SLTIU, XORI, ORI, ANDI, SLLI, SRLI, SRAI.
pub const OP_IMM: u32 = 0x13;

/// AUIPC.
pub const OP_AUIPC: u32 = 0x17;

/// ADDIW, SLLIW, SRLIW, SRAIW.
pub const OP_IMM_32: u32 = 0x1B;

/// SB, SH, SW, SD.
pub const OP_STORE: u32 = 0x23;

/// ADD, SUB, SLL, SLT, SLTU, XOR, SRL, SRA, OR, AND.
pub const OP_REG: u32 = 0x33;

/// LUI.
pub const OP_LUI: u32 = 0x37;

/// ADDW, SUBW, SLLW, SRLW, SRAW.
pub const OP_REG_32: u32 = 0x3B;

/// BEQ, BNE, BLT, BGE, BLTU, BGEU.
pub const OP_BRANCH: u32 = 0x63;

/// JALR.
pub const OP_JALR: u32 = 0x67;

/// JAL.
pub const OP_JAL: u32 = 0x6F;
