//! Property-based tests tying the disassembler to the step engine.

use emu6502::{disassemble, FlatMemory, Status, CPU, OPCODE_TABLE};
use proptest::prelude::*;

proptest! {
    /// For any documented opcode that does not load PC, the disassembled length
    /// equals how far `step` moves PC.
    #[test]
    fn prop_disassembly_length_matches_step(opcode in any::<u8>(), operand in any::<u16>()) {
        let Some(metadata) = OPCODE_TABLE[opcode as usize] else {
            return Ok(());
        };
        prop_assume!(!metadata.mnemonic.sets_pc());

        let mut cpu = CPU::new(FlatMemory::new());
        cpu.hard_reset(0x0400);
        cpu.poke_byte(0x0400, opcode);
        cpu.poke_word(0x0401, operand);

        let (_, length) = cpu.disassemble(0x0400);
        cpu.step().unwrap();

        prop_assert_eq!(cpu.pc(), 0x0400 + length as u16);
    }

    /// An untaken branch leaves PC on the next instruction, which is where the
    /// disassembled length says it starts.
    #[test]
    fn prop_disassembly_length_matches_untaken_branch(
        index in 0usize..8,
        offset in any::<u8>(),
    ) {
        // (opcode, flag that must be clear or set to fall through)
        let branches = [
            (0x10, Status::NEGATIVE, true),  // BPL
            (0x30, Status::NEGATIVE, false), // BMI
            (0x50, Status::OVERFLOW, true),  // BVC
            (0x70, Status::OVERFLOW, false), // BVS
            (0x90, Status::CARRY, true),     // BCC
            (0xB0, Status::CARRY, false),    // BCS
            (0xD0, Status::ZERO, true),      // BNE
            (0xF0, Status::ZERO, false),     // BEQ
        ];
        let (opcode, flag, fall_through) = branches[index];

        let mut cpu = CPU::new(FlatMemory::new());
        cpu.hard_reset(0x0400);
        cpu.poke_byte(0x0400, opcode);
        cpu.poke_byte(0x0401, offset);
        cpu.set_flag(flag, fall_through);

        let (_, length) = cpu.disassemble(0x0400);
        cpu.step().unwrap();

        prop_assert_eq!(cpu.pc(), 0x0400 + length as u16);
    }

    /// Disassembly of arbitrary bytes never panics and always reports 1-3 bytes.
    #[test]
    fn prop_disassemble_any_bytes(bytes in any::<[u8; 3]>(), addr in any::<u16>()) {
        let mut memory = FlatMemory::new();
        memory.load(addr, &bytes);

        let (text, length) = disassemble(&memory, addr);

        prop_assert!(!text.is_empty());
        prop_assert!((1..=3).contains(&length));
        prop_assert_eq!(text.starts_with("db "), OPCODE_TABLE[bytes[0] as usize].is_none());
    }
}
