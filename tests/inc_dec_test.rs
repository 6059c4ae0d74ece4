//! Tests for INC, DEC, INX, INY, DEX and DEY.

use emu6502::{FlatMemory, Status, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.hard_reset(0x8000);
    cpu
}

// ========== Memory ==========

#[test]
fn test_inc_zero_page_wraps_to_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xE6, 0x10]);
    cpu.poke_byte(0x0010, 0xFF);

    assert_eq!(cpu.step().unwrap(), 5);

    assert_eq!(cpu.peek_byte(0x0010), 0x00);
    assert!(cpu.flag(Status::ZERO));
    assert!(!cpu.flag(Status::NEGATIVE));
}

#[test]
fn test_inc_absolute_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xFE, 0x00, 0x20]);
    cpu.set_x(0x05);
    cpu.poke_byte(0x2005, 0x7F);

    assert_eq!(cpu.step().unwrap(), 7);
    assert_eq!(cpu.peek_byte(0x2005), 0x80);
    assert!(cpu.flag(Status::NEGATIVE));
}

#[test]
fn test_dec_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xCE, 0x00, 0x20]);
    cpu.poke_byte(0x2000, 0x00);

    assert_eq!(cpu.step().unwrap(), 6);

    assert_eq!(cpu.peek_byte(0x2000), 0xFF);
    assert!(cpu.flag(Status::NEGATIVE));
}

// ========== Registers ==========

#[test]
fn test_inx_iny_wrap() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xE8, 0xC8]);
    cpu.set_x(0xFF);
    cpu.set_y(0x7F);

    assert_eq!(cpu.step().unwrap(), 2);
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag(Status::ZERO));

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag(Status::NEGATIVE));
    assert!(!cpu.flag(Status::ZERO));
}

#[test]
fn test_dex_dey() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xCA, 0x88]);
    cpu.set_x(0x01);
    cpu.set_y(0x00);

    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag(Status::ZERO));

    cpu.step().unwrap();
    assert_eq!(cpu.y(), 0xFF);
    assert!(cpu.flag(Status::NEGATIVE));
}
