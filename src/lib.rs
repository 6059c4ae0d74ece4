//! # 6502 Instruction-Set Emulator Core
//!
//! An NMOS 6502 emulator core built around a single table-driven decoder that
//! serves both execution and disassembly.
//!
//! This crate provides the machine state (registers, status flags and a flat 64KB
//! address space behind the `MemoryBus` trait), the addressing-mode resolvers, the
//! 256-entry opcode table, one executor per instruction family, a step engine that
//! reports per-instruction cycle costs, and a read-only disassembler.
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::{FlatMemory, CPU};
//!
//! let mut cpu = CPU::new(FlatMemory::new());
//! cpu.hard_reset(0x8000);
//!
//! // LDA #$42
//! cpu.poke_byte(0x8000, 0xA9);
//! cpu.poke_byte(0x8001, 0x42);
//!
//! let cycles = cpu.step().unwrap();
//! assert_eq!(cycles, 2);
//! assert_eq!(cpu.a(), 0x42);
//! assert_eq!(cpu.pc(), 0x8002);
//!
//! let (text, length) = cpu.disassemble(0x8000);
//! assert_eq!(text, "LDA #$42");
//! assert_eq!(length, 2);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - Machine state, reset lifecycle and the step engine
//! - `memory` - `MemoryBus` trait and the flat 64KB implementation
//! - `status` - Processor status flags
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing modes and operand resolution
//! - `disassembler` - Instruction decoding and text formatting
//! - `monitor` - Typed debugger commands and their parser

pub mod addressing;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod monitor;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{CPU, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR, STACK_BASE};
pub use disassembler::{
    decode, disassemble, disassemble_range, formatter::format_instruction, Instruction,
};
pub use instructions::alu::{add_with_carry, subtract_with_borrow, AluResult};
pub use memory::{FlatMemory, MemoryBus, MEMORY_SIZE};
pub use monitor::{Command, CommandError, Register};
pub use opcodes::{lookup, Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use status::Status;

/// Error returned when the byte at the program counter has no opcode table entry.
///
/// Fetching the opcode is the only thing that happens before this error is
/// detected, so the machine state is exactly as it was before the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid opcode ${opcode:02x} at ${address:04x}")]
pub struct DecodeError {
    /// The offending opcode byte.
    pub opcode: u8,

    /// Address the opcode was fetched from.
    pub address: u16,
}
