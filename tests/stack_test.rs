//! Tests for PHA, PHP, PLA and PLP.

use emu6502::{FlatMemory, Status, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.hard_reset(0x8000);
    cpu
}

#[test]
fn test_pha_writes_then_decrements() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x48]);
    cpu.set_a(0x42);

    assert_eq!(cpu.step().unwrap(), 3);

    assert_eq!(cpu.peek_byte(0x01FF), 0x42);
    assert_eq!(cpu.sp(), 0xFE);
}

#[test]
fn test_pha_pla_round_trip() {
    let mut cpu = setup_cpu();
    // PHA; LDA #$00; PLA
    cpu.memory_mut().load(0x8000, &[0x48, 0xA9, 0x00, 0x68]);
    cpu.set_a(0x80);

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert!(cpu.flag(Status::ZERO));

    assert_eq!(cpu.step().unwrap(), 4);
    assert_eq!(cpu.a(), 0x80);
    assert_eq!(cpu.sp(), 0xFF);
    assert!(cpu.flag(Status::NEGATIVE));
    assert!(!cpu.flag(Status::ZERO));
}

#[test]
fn test_php_pushes_status_unmodified() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x08]);
    cpu.set_status(Status::CARRY | Status::NEGATIVE);

    assert_eq!(cpu.step().unwrap(), 3);

    assert_eq!(cpu.peek_byte(0x01FF), 0x81);
    assert_eq!(cpu.status(), Status::CARRY | Status::NEGATIVE);
}

#[test]
fn test_plp_forces_break_low() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x28]);
    cpu.poke_byte(0x01FF, 0xFF);
    cpu.set_sp(0xFE);

    assert_eq!(cpu.step().unwrap(), 4);

    assert_eq!(cpu.status().bits(), 0xEF);
    assert!(!cpu.flag(Status::BREAK));
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_stack_pointer_wraps() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x48, 0x68]);
    cpu.set_sp(0x00);
    cpu.set_a(0x5A);

    cpu.step().unwrap();
    assert_eq!(cpu.peek_byte(0x0100), 0x5A);
    assert_eq!(cpu.sp(), 0xFF);

    cpu.set_a(0x00);
    cpu.step().unwrap();
    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.a(), 0x5A);
}
