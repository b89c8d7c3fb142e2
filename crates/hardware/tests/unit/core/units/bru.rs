//! Branch Comparison Tests.

use rstest::rstest;

use rv64i_core::core::units::bru::Bru;
use rv64i_core::isa::instruction::BranchCond;

#[rstest]
#[case(BranchCond::Eq, 7, 7, true)]
#[case(BranchCond::Ne, 7, 7, false)]
#[case(BranchCond::Lt, u64::MAX, 0, true)]
#[case(BranchCond::Ltu, u64::MAX, 0, false)]
#[case(BranchCond::Ge, 5, 5, true)]
#[case(BranchCond::Geu, 5, 5, true)]
#[case(BranchCond::Ge, 0, u64::MAX, true)]
#[case(BranchCond::Geu, 0, u64::MAX, false)]
fn conditions(#[case] cond: BranchCond, #[case] a: u64, #[case] b: u64, #[case] taken: bool) {
    assert_eq!(Bru::taken(cond, a, b), taken);
}
