//! Fuzz target for the disassembler.
//!
//! Feeds arbitrary memory images to the disassembler and checks that listing
//! never panics and never writes.

#![no_main]

use arbitrary::Arbitrary;
use emu6502::{disassemble, disassemble_range, FlatMemory};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    start_address: u16,
    bytes: Vec<u8>,
    count: u8,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to the address space
    if input.bytes.len() > 0x10000 {
        return;
    }

    let mut memory = FlatMemory::new();
    memory.load(input.start_address, &input.bytes);
    let snapshot = memory.clone();

    let listing = disassemble_range(&memory, input.start_address, input.count as usize);

    let mut expected_address = input.start_address;
    for instr in &listing {
        assert_eq!(instr.address, expected_address);
        assert!((1..=3).contains(&instr.size_bytes));
        assert_eq!(instr.operand_bytes.len() + 1, instr.size_bytes as usize);

        let (_, length) = disassemble(&memory, instr.address);
        assert_eq!(length, instr.size_bytes);

        expected_address = expected_address.wrapping_add(instr.size_bytes as u16);
    }

    assert!(memory.as_slice() == snapshot.as_slice());
});
