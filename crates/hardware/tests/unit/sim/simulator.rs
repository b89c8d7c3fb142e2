//! Fetch-Execute Driver Tests.

use pretty_assertions::assert_eq;

use rv64i_core::common::Trap;
use rv64i_core::sim::{RunSummary, StopReason};

use crate::common::builder::instruction::*;
use crate::common::harness::{RAM_BASE, TestContext};

#[test]
fn step_record_reports_fetch_address_and_result() {
    let mut ctx = TestContext::new().load_program(&[addi(10, 0, 10)]);
    let record = ctx.step().unwrap();
    assert_eq!(record.raw, 0x00A0_0513);
    assert_eq!(record.pc, RAM_BASE);
    assert_eq!(record.next_pc, RAM_BASE + 4);
    assert_eq!(record.regs[10], 10);
}

#[test]
fn step_record_display_includes_disassembly_and_registers() {
    let mut ctx = TestContext::new().load_program(&[addi(10, 0, 10)]);
    let text = ctx.step().unwrap().to_string();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("0x0000000080000000: 0x00a00513  addi a0, zero, 10")
    );
    assert_eq!(lines.next(), Some("pc = 0x0000000080000004"));
    assert!(text.contains("x10 (a0)   = 0x000000000000000a"));
}

#[test]
fn run_stops_on_first_trap() {
    // Running off the end of the program reaches zero-filled RAM.
    let mut ctx = TestContext::new().load_program(&[addi(1, 0, 1), addi(1, 1, 1)]);
    let summary = ctx.sim.run(None);
    assert_eq!(
        summary,
        RunSummary {
            steps: 2,
            stop: StopReason::Trap(Trap::IllegalInstruction {
                raw: 0,
                pc: RAM_BASE + 8
            }),
        }
    );
    assert_eq!(ctx.get_reg(1), 2);
    assert_eq!(ctx.pc(), RAM_BASE + 8);
}

#[test]
fn run_honors_step_limit() {
    // Tight loop: jal x0, 0
    let mut ctx = TestContext::new().load_program(&[jal(0, 0)]);
    let summary = ctx.sim.run(Some(100));
    assert_eq!(summary.steps, 100);
    assert_eq!(summary.stop, StopReason::LimitReached);
    assert_eq!(ctx.pc(), RAM_BASE);
}

#[test]
fn run_with_sees_every_record_in_order() {
    let mut ctx = TestContext::new().load_program(&[addi(1, 0, 1), addi(2, 0, 2), addi(3, 0, 3)]);
    let mut pcs = Vec::new();
    let summary = ctx.sim.run_with(Some(3), |r| pcs.push(r.pc));
    assert_eq!(summary.steps, 3);
    assert_eq!(pcs, vec![RAM_BASE, RAM_BASE + 4, RAM_BASE + 8]);
}

#[test]
fn countdown_loop_program() {
    // a0 = 5; loop: a0 -= 1; a1 += 2; bne a0, zero, loop
    let mut ctx = TestContext::new().load_program(&[
        addi(10, 0, 5),
        addi(10, 10, -1),
        addi(11, 11, 2),
        branch(0b001, 10, 0, -8),
    ]);
    let summary = ctx.sim.run(None);
    assert_eq!(summary.steps, 1 + 5 * 3);
    assert_eq!(ctx.get_reg(10), 0);
    assert_eq!(ctx.get_reg(11), 10);
    assert!(matches!(summary.stop, StopReason::Trap(Trap::IllegalInstruction { raw: 0, .. })));
}

#[test]
fn independent_simulators_do_not_share_state() {
    let mut a = TestContext::new().load_program(&[addi(1, 0, 7)]);
    let b = TestContext::new();
    a.run(1);
    assert_eq!(a.get_reg(1), 7);
    assert_eq!(b.get_reg(1), 0);
}

#[test]
fn dump_state_reflects_current_pc() {
    let mut ctx = TestContext::new().load_program(&[addi(0, 0, 0)]);
    ctx.run(1);
    assert!(ctx.sim.dump_state().to_string().starts_with("pc = 0x0000000080000004"));
}
