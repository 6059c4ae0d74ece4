//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file and memory image, then executes a short
//! burst of instructions looking for panics and broken step invariants.

#![no_main]

use arbitrary::Arbitrary;
use emu6502::{lookup, FlatMemory, MemoryBus, Status, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Raw processor status byte
    status: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction stream)
    program: [u8; 16],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Region at 0x4000 for absolute addressing
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);
    memory.load(0x8000, &input.memory.program);
    memory.write_word(0xFFFC, 0x8000);
    memory.write_word(0xFFFE, 0x9000);

    let mut cpu = CPU::new(memory);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(Status::from_bits_retain(input.cpu_state.status));

    for _ in 0..input.steps % 32 {
        let pc = cpu.pc();
        let before = cpu.cycles();
        let opcode = cpu.peek_byte(pc);

        match cpu.step() {
            Ok(cycles) => {
                // Every instruction costs its base cycles plus at most two penalties
                let Some(metadata) = lookup(opcode) else {
                    panic!("opcode ${:02x} executed without a table entry", opcode);
                };
                assert!(cycles >= metadata.base_cycles as u32);
                assert!(cycles <= metadata.base_cycles as u32 + 2);
                assert_eq!(cpu.cycles(), before + cycles as u64);
            }
            Err(err) => {
                // A decode error leaves the machine untouched
                assert_eq!(err.opcode, opcode);
                assert_eq!(cpu.pc(), pc);
                assert_eq!(cpu.cycles(), before);
                break;
            }
        }
    }
});
