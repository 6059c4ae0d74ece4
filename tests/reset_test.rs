//! Tests for construction, hard reset, soft reset and decode errors.

use emu6502::{DecodeError, FlatMemory, MemoryBus, Status, CPU, RESET_VECTOR};

#[test]
fn test_new_loads_pc_from_reset_vector() {
    let mut memory = FlatMemory::new();
    memory.write_word(RESET_VECTOR, 0xC000);

    let cpu = CPU::new(memory);

    assert_eq!(cpu.pc(), 0xC000);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.status(), Status::empty());
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn test_hard_reset_is_deterministic() {
    let mut first = CPU::new(FlatMemory::new());
    first.poke_byte(0x1234, 0x56);
    first.set_a(0x99);
    first.set_status(Status::all());
    first.hard_reset(0x0400);

    let mut second = CPU::new(FlatMemory::new());
    second.hard_reset(0x0400);

    assert_eq!(first.pc(), 0x0400);
    assert_eq!(first.peek_word(RESET_VECTOR), 0x0400);
    assert_eq!(first.peek_byte(0x1234), 0x00);
    assert_eq!(first.memory().as_slice(), second.memory().as_slice());
    assert_eq!(
        (first.a(), first.x(), first.y(), first.sp(), first.status()),
        (second.a(), second.x(), second.y(), second.sp(), second.status())
    );
    assert_eq!(first.cycles(), 0);
}

#[test]
fn test_hard_reset_restarts_cycle_count() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.hard_reset(0x8000);
    cpu.poke_byte(0x8000, 0xEA);
    cpu.step().unwrap();
    assert_eq!(cpu.cycles(), 2);

    cpu.hard_reset(0x8000);
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn test_soft_reset_preserves_memory_and_registers() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.hard_reset(0x8000);
    cpu.poke_byte(0x0200, 0xAB);
    cpu.set_a(0x11);
    cpu.set_x(0x22);
    cpu.set_sp(0x80);
    cpu.set_pc(0x9000);
    cpu.set_flag(Status::CARRY, true);

    cpu.soft_reset();

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cpu.x(), 0x22);
    assert!(cpu.flag(Status::CARRY));
    assert_eq!(cpu.peek_byte(0x0200), 0xAB);
}

#[test]
fn test_decode_error_reports_opcode_and_address() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.hard_reset(0x8000);
    cpu.memory_mut().load(0x8000, &[0xEA, 0xFF]);

    cpu.step().unwrap();
    let err = cpu.step().unwrap_err();

    assert_eq!(
        err,
        DecodeError {
            opcode: 0xFF,
            address: 0x8001
        }
    );
    assert_eq!(err.to_string(), "invalid opcode $ff at $8001");
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_run_for_cycles_overshoots_by_partial_instruction() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.hard_reset(0x8000);
    // LDA $1234 (4 cycles) repeated
    for addr in (0x8000..0x8030).step_by(3) {
        cpu.memory_mut().load(addr, &[0xAD, 0x34, 0x12]);
    }

    assert_eq!(cpu.run_for_cycles(10), Ok(12));
    assert_eq!(cpu.pc(), 0x8009);
}
