//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC / DEC: Read-modify-write on memory
//! - INX / INY / DEX / DEY: Register variants
//!
//! All results wrap modulo 256 and update the Zero and Negative flags.

use super::complete;
use crate::{MemoryBus, OpcodeMetadata, CPU};

/// Applies `op` to the memory operand and writes the result back.
fn modify_memory<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    op: impl FnOnce(u8) -> u8,
) -> u32 {
    // Read-modify-write instructions always take the full cycle count
    let (value, _) = cpu.read_operand(metadata.addressing_mode);
    let result = op(value);

    cpu.write_operand(metadata.addressing_mode, result);
    cpu.status.update_zn(result);

    complete(cpu, metadata, false)
}

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    modify_memory(cpu, metadata, |v| v.wrapping_add(1))
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    modify_memory(cpu, metadata, |v| v.wrapping_sub(1))
}

/// Executes the INX (Increment X) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.update_zn(cpu.x);

    complete(cpu, metadata, false)
}

/// Executes the INY (Increment Y) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.update_zn(cpu.y);

    complete(cpu, metadata, false)
}

/// Executes the DEX (Decrement X) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.update_zn(cpu.x);

    complete(cpu, metadata, false)
}

/// Executes the DEY (Decrement Y) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.update_zn(cpu.y);

    complete(cpu, metadata, false)
}
