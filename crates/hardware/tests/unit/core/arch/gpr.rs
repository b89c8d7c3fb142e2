//! General-Purpose Register File Tests.

use rv64i_core::core::arch::gpr::{Gpr, RegisterDump};

#[test]
fn x0_reads_zero_after_write() {
    let mut gpr = Gpr::new();
    gpr.write(0, 0xDEAD_BEEF);
    assert_eq!(gpr.read(0), 0);
    assert_eq!(gpr.snapshot()[0], 0);
}

#[test]
fn registers_hold_full_64_bit_patterns() {
    let mut gpr = Gpr::new();
    for i in 1..32 {
        gpr.write(i, u64::MAX - i as u64);
    }
    for i in 1..32 {
        assert_eq!(gpr.read(i), u64::MAX - i as u64);
    }
}

#[test]
fn indices_past_x31_read_zero_and_drop_writes() {
    let mut gpr = Gpr::new();
    gpr.write(32, 0xDEAD_BEEF);
    assert_eq!(gpr.read(32), 0);
    assert_eq!(gpr.read(usize::MAX), 0);
    assert_eq!(gpr.snapshot(), [0; 32]);
}

#[test]
fn dump_lists_every_register_with_abi_names() {
    let mut gpr = Gpr::new();
    gpr.write(2, 0x8000_FFFF);
    let text = RegisterDump {
        pc: 0x8000_0004,
        regs: gpr.snapshot(),
    }
    .to_string();

    assert!(text.starts_with("pc = 0x0000000080000004\n"));
    assert!(text.contains("x2  (sp)   = 0x000000008000ffff"));
    assert!(text.contains("x31 (t6)   = 0x0000000000000000"));
    assert_eq!(text.lines().count(), 17);
}
