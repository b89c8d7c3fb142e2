//! RISC-V architecture-specific components.
//!
//! Only the integer register file is architectural state beyond the program
//! counter: there are no CSRs, privilege modes or floating-point registers.

/// General-Purpose Register file implementation.
pub mod gpr;
