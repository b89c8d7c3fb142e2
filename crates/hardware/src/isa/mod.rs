//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode and function-code tables, field extraction, decoding
//! into tagged instructions, and disassembly for the RV64I base integer ISA.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding logic for all RV64I instruction formats.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Base integer instruction set (64-bit RISC-V core instructions).
pub mod rv64i;
