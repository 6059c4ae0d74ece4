//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads pay the page-crossing penalty on indexed modes; stores never do.

use super::complete;
use crate::{MemoryBus, OpcodeMetadata, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte of memory into the accumulator, setting the zero and negative
/// flags as appropriate.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.a = value;
    cpu.status.update_zn(value);

    complete(cpu, metadata, page_crossed)
}

/// Executes the LDX (Load X Register) instruction.
///
/// Same flag behavior as LDA, targeting X.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.x = value;
    cpu.status.update_zn(value);

    complete(cpu, metadata, page_crossed)
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Same flag behavior as LDA, targeting Y.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.y = value;
    cpu.status.update_zn(value);

    complete(cpu, metadata, page_crossed)
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Stores the accumulator at the effective address. No flags affected.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    let value = cpu.a;
    cpu.write_operand(metadata.addressing_mode, value);

    complete(cpu, metadata, false)
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    let value = cpu.x;
    cpu.write_operand(metadata.addressing_mode, value);

    complete(cpu, metadata, false)
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    let value = cpu.y;
    cpu.write_operand(metadata.addressing_mode, value);

    complete(cpu, metadata, false)
}
