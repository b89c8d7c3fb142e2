//! System Builder Tests.

use rv64i_core::common::SimError;
use rv64i_core::config::Config;
use rv64i_core::soc::System;

#[test]
fn builds_single_ram_region_from_config() {
    let mut config = Config::default();
    config.memory.ram_base = 0x1000;
    config.memory.ram_size = 0x100;

    let mut system = System::new(&config).unwrap();
    assert_eq!(system.bus.device_count(), 1);
    assert_eq!(system.ram_base(), 0x1000);
    assert_eq!(system.ram_end(), 0x10FF);
    assert_eq!(system.bus.read(0x10FF, 8).unwrap(), 0);
    assert!(system.bus.read(0x1100, 8).is_err());
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = Config::default();
    config.memory.ram_size = 0;
    assert!(matches!(System::new(&config), Err(SimError::Config(_))));
}
