//! 6502 Disassembler Module
//!
//! Converts machine code held in a `MemoryBus` into human-readable assembly.
//! Decoding reads the same opcode table the step engine executes from and
//! never writes to memory.

pub mod decoder;
pub mod formatter;

use crate::addressing::AddressingMode;
use crate::{MemoryBus, Mnemonic};

pub use decoder::decode;

/// A single decoded instruction with full metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic, `None` for an opcode with no table entry
    pub mnemonic: Option<Mnemonic>,

    /// Addressing mode used by this instruction (`Invalid` when undocumented)
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Base cycle cost (excluding page-crossing penalties)
    pub base_cycles: u8,
}

impl Instruction {
    /// True when the opcode has a table entry.
    pub fn is_valid(&self) -> bool {
        self.mnemonic.is_some()
    }
}

/// Disassembles the instruction at `addr`.
///
/// Returns the formatted text and the instruction length. An opcode with no
/// table entry renders as a `db` placeholder of length 1.
///
/// # Examples
///
/// ```
/// use emu6502::{disassemble, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x0400, 0xBD); // LDA abs,X
/// mem.write_word(0x0401, 0x1234);
/// mem.write(0x0403, 0x02); // undocumented
///
/// assert_eq!(disassemble(&mem, 0x0400), ("LDA $1234, X".to_string(), 3));
/// assert_eq!(disassemble(&mem, 0x0403), ("db $02".to_string(), 1));
/// ```
pub fn disassemble<M: MemoryBus>(memory: &M, addr: u16) -> (String, u8) {
    let instr = decode(memory, addr);
    (formatter::format_instruction(&instr), instr.size_bytes)
}

/// Decodes `count` consecutive instructions starting at `addr`.
///
/// Addresses wrap from 0xFFFF to 0x0000.
pub fn disassemble_range<M: MemoryBus>(memory: &M, addr: u16, count: usize) -> Vec<Instruction> {
    let mut instructions = Vec::with_capacity(count);
    let mut address = addr;

    for _ in 0..count {
        let instr = decode(memory, address);
        address = address.wrapping_add(instr.size_bytes as u16);
        instructions.push(instr);
    }

    instructions
}
