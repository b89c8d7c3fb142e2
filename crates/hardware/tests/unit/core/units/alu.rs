//! ALU Tests.
//!
//! Covers 64-bit and word variants, with emphasis on shift-amount masking and
//! sign extension of 32-bit results.

use proptest::prelude::*;
use rstest::rstest;

use rv64i_core::core::units::alu::Alu;
use rv64i_core::isa::instruction::AluOp;

// ──────────────────────────────────────────────────────────
// Arithmetic
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(AluOp::Add, u64::MAX, 1, false, 0)]
#[case(AluOp::Sub, 0, 1, false, u64::MAX)]
#[case(AluOp::Add, 0x7FFF_FFFF, 1, true, 0xFFFF_FFFF_8000_0000)]
#[case(AluOp::Add, 0xFFFF_FFFF_0000_0001, 0x0000_0001_0000_0001, true, 2)]
#[case(AluOp::Sub, 0x1234_5678_0000_0000, 1, true, u64::MAX)]
fn arithmetic(
    #[case] op: AluOp,
    #[case] a: u64,
    #[case] b: u64,
    #[case] w: bool,
    #[case] expected: u64,
) {
    assert_eq!(Alu::execute(op, a, b, w), expected);
}

// ──────────────────────────────────────────────────────────
// Logic and comparisons
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(AluOp::Xor, 0xF0F0, 0xFF00, 0x0FF0)]
#[case(AluOp::Or, 0xF0F0, 0xFF00, 0xFFF0)]
#[case(AluOp::And, 0xF0F0, 0xFF00, 0xF000)]
#[case(AluOp::Slt, (-1_i64) as u64, 0, 1)]
#[case(AluOp::Sltu, (-1_i64) as u64, 0, 0)]
#[case(AluOp::Sltu, 0, 1, 1)]
#[case(AluOp::Slt, 5, 5, 0)]
fn logic(#[case] op: AluOp, #[case] a: u64, #[case] b: u64, #[case] expected: u64) {
    assert_eq!(Alu::execute(op, a, b, false), expected);
}

#[test]
fn logic_ignores_word_flag() {
    let a = 0x8000_0001_0000_0000;
    let b = 0x0000_0001_FFFF_FFFF;
    assert_eq!(Alu::execute(AluOp::Or, a, b, true), a | b);
    assert_eq!(Alu::execute(AluOp::Xor, a, b, true), a ^ b);
    assert_eq!(Alu::execute(AluOp::Slt, a, b, true), 1);
    assert_eq!(Alu::execute(AluOp::Sltu, a, b, true), 0);
}

// ──────────────────────────────────────────────────────────
// Shifts
// ──────────────────────────────────────────────────────────

#[test]
fn shift_amount_uses_low_six_bits() {
    assert_eq!(Alu::execute(AluOp::Sll, 1, 64 + 3, false), 8);
    assert_eq!(Alu::execute(AluOp::Srl, 1 << 63, 63, false), 1);
    assert_eq!(Alu::execute(AluOp::Sra, 1 << 63, 63, false), u64::MAX);
}

#[test]
fn word_shift_amount_uses_low_five_bits() {
    assert_eq!(Alu::execute(AluOp::Sll, 1, 32 + 4, true), 16);
    assert_eq!(Alu::execute(AluOp::Sll, 1, 31, true), 0xFFFF_FFFF_8000_0000);
}

#[test]
fn word_shifts_ignore_upper_input_bits() {
    let a = 0xDEAD_BEEF_8000_0000;
    assert_eq!(Alu::execute(AluOp::Srl, a, 4, true), 0x0800_0000);
    assert_eq!(Alu::execute(AluOp::Sra, a, 4, true), 0xFFFF_FFFF_F800_0000);
    assert_eq!(Alu::execute(AluOp::Srl, a, 0, true), 0xFFFF_FFFF_8000_0000);
}

proptest! {
    #[test]
    fn word_results_are_sign_extended(op_idx in 0usize..5, a in any::<u64>(), b in any::<u64>()) {
        let op = [AluOp::Add, AluOp::Sub, AluOp::Sll, AluOp::Srl, AluOp::Sra][op_idx];
        let r = Alu::execute(op, a, b, true);
        prop_assert_eq!(r, i64::from(r as i32) as u64);
    }

    #[test]
    fn add_then_sub_is_identity(a in any::<u64>(), b in any::<u64>()) {
        let sum = Alu::execute(AluOp::Add, a, b, false);
        prop_assert_eq!(Alu::execute(AluOp::Sub, sum, b, false), a);
    }
}
