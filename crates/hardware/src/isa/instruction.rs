//! Decoded instruction representation.
//!
//! [`InstructionBits`] pulls the fixed-position fields out of a raw word. The
//! decoder turns those into an [`Instruction`] whose [`Op`] tag carries every
//! distinction execution needs, so the executor is a single `match`.

const OPCODE_MASK: u32 = 0x7F;
const REG_MASK: u32 = 0x1F;
const FUNCT3_MASK: u32 = 0x7;
const FUNCT7_MASK: u32 = 0x7F;

/// Fixed-position fields shared by every 32-bit RISC-V format.
///
/// Fields are returned raw. Whether a field is meaningful depends on the
/// format, which the decoder works out from the opcode.
pub trait InstructionBits {
    /// Bits 6:0.
    fn opcode(&self) -> u32;
    /// Bits 11:7, the destination register.
    fn rd(&self) -> usize;
    /// Bits 19:15, the first source register.
    fn rs1(&self) -> usize;
    /// Bits 24:20, the second source register (or a word shift amount).
    fn rs2(&self) -> usize;
    /// Bits 14:12.
    fn funct3(&self) -> u32;
    /// Bits 31:25.
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }
}

/// Integer ALU operation, shared by the 64-bit and word forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Integer addition.
    Add,
    /// Integer subtraction.
    Sub,
    /// Shift left logical.
    Sll,
    /// Set less than (signed).
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Bitwise XOR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
}

/// Conditional branch comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCond {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Less than (signed).
    Lt,
    /// Greater or equal (signed).
    Ge,
    /// Less than unsigned.
    Ltu,
    /// Greater or equal unsigned.
    Geu,
}

/// Memory access width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemWidth {
    /// 8-bit byte access.
    Byte,
    /// 16-bit half-word access.
    Half,
    /// 32-bit word access.
    Word,
    /// 64-bit double-word access.
    Double,
}

impl MemWidth {
    /// Returns the access width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Byte => 8,
            Self::Half => 16,
            Self::Word => 32,
            Self::Double => 64,
        }
    }
}

/// Operation tag assigned by the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Load Upper Immediate.
    Lui,
    /// Add Upper Immediate to PC.
    Auipc,
    /// Jump and Link.
    Jal,
    /// Jump and Link Register.
    Jalr,
    /// Conditional branch.
    Branch(BranchCond),
    /// Load of the given width; `signed` selects sign- over zero-extension.
    Load {
        /// Access width.
        width: MemWidth,
        /// Sign-extend the loaded value.
        signed: bool,
    },
    /// Store of the given width.
    Store(MemWidth),
    /// Register-immediate operation on full 64-bit values.
    AluImm(AluOp),
    /// Register-register operation on full 64-bit values.
    AluReg(AluOp),
    /// Register-immediate word operation (ADDIW, SLLIW, SRLIW, SRAIW).
    AluImm32(AluOp),
    /// Register-register word operation (ADDW, SUBW, SLLW, SRLW, SRAW).
    AluReg32(AluOp),
    /// Memory ordering fence (FENCE, FENCE.I).
    Fence,
}

/// Fully decoded instruction.
///
/// Every field is extracted exactly once by [`crate::isa::decode::decode`].
/// `imm` is already sign-extended according to the instruction format and is
/// zero for register-register formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Operation tag.
    pub op: Op,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Sign-extended immediate value.
    pub imm: i64,
}
