//! Instruction decoder for the 6502 disassembler

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;
use crate::{lookup, MemoryBus};

/// Decode a single instruction from memory
///
/// # Arguments
///
/// * `memory` - The memory to read from; never written
/// * `address` - The memory address of the opcode
///
/// # Returns
///
/// The decoded instruction. An opcode with no table entry decodes to a
/// one-byte instruction with no mnemonic and `AddressingMode::Invalid`.
pub fn decode<M: MemoryBus>(memory: &M, address: u16) -> Instruction {
    let opcode = memory.read(address);

    let Some(metadata) = lookup(opcode) else {
        return Instruction {
            address,
            opcode,
            mnemonic: None,
            addressing_mode: AddressingMode::Invalid,
            operand_bytes: Vec::new(),
            size_bytes: 1,
            base_cycles: 0,
        };
    };

    let operand_bytes = (1..metadata.size_bytes as u16)
        .map(|offset| memory.read(address.wrapping_add(offset)))
        .collect();

    Instruction {
        address,
        opcode,
        mnemonic: Some(metadata.mnemonic),
        addressing_mode: metadata.addressing_mode,
        operand_bytes,
        size_bytes: metadata.size_bytes,
        base_cycles: metadata.base_cycles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FlatMemory, Mnemonic};

    #[test]
    fn test_decode_lda_immediate() {
        let mut mem = FlatMemory::new();
        mem.load(0x8000, &[0xA9, 0x42]);

        let instr = decode(&mem, 0x8000);

        assert_eq!(instr.address, 0x8000);
        assert_eq!(instr.opcode, 0xA9);
        assert_eq!(instr.mnemonic, Some(Mnemonic::Lda));
        assert_eq!(instr.addressing_mode, AddressingMode::Immediate);
        assert_eq!(instr.operand_bytes, vec![0x42]);
        assert_eq!(instr.size_bytes, 2);
        assert_eq!(instr.base_cycles, 2);
    }

    #[test]
    fn test_decode_sta_absolute() {
        let mut mem = FlatMemory::new();
        mem.load(0x0000, &[0x8D, 0x00, 0x80]);

        let instr = decode(&mem, 0x0000);

        assert_eq!(instr.mnemonic, Some(Mnemonic::Sta));
        assert_eq!(instr.addressing_mode, AddressingMode::Absolute);
        assert_eq!(instr.operand_bytes, vec![0x00, 0x80]);
        assert_eq!(instr.size_bytes, 3);
    }

    #[test]
    fn test_decode_operands_wrap_at_top_of_memory() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFE, 0x4C); // JMP abs
        mem.write(0xFFFF, 0x34);
        mem.write(0x0000, 0x12);

        let instr = decode(&mem, 0xFFFE);
        assert_eq!(instr.operand_bytes, vec![0x34, 0x12]);
    }

    #[test]
    fn test_decode_invalid_opcode() {
        let mut mem = FlatMemory::new();
        mem.write(0x1000, 0x02);

        let instr = decode(&mem, 0x1000);

        assert!(!instr.is_valid());
        assert_eq!(instr.addressing_mode, AddressingMode::Invalid);
        assert_eq!(instr.size_bytes, 1);
        assert!(instr.operand_bytes.is_empty());
    }
}
