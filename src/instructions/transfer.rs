//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA and TSX copy one register into another and set Zero and
//! Negative from the copied value. TXS loads the stack pointer and leaves the
//! flags alone.

use super::complete;
use crate::{MemoryBus, OpcodeMetadata, CPU};

/// Executes the TAX (Transfer A to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    cpu.x = cpu.a;
    cpu.status.update_zn(cpu.x);

    complete(cpu, metadata, false)
}

/// Executes the TAY (Transfer A to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    cpu.y = cpu.a;
    cpu.status.update_zn(cpu.y);

    complete(cpu, metadata, false)
}

/// Executes the TXA (Transfer X to A) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    cpu.a = cpu.x;
    cpu.status.update_zn(cpu.a);

    complete(cpu, metadata, false)
}

/// Executes the TYA (Transfer Y to A) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    cpu.a = cpu.y;
    cpu.status.update_zn(cpu.a);

    complete(cpu, metadata, false)
}

/// Executes the TSX (Transfer SP to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    cpu.x = cpu.sp;
    cpu.status.update_zn(cpu.x);

    complete(cpu, metadata, false)
}

/// Executes the TXS (Transfer X to SP) instruction.
///
/// No flags affected.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    cpu.sp = cpu.x;

    complete(cpu, metadata, false)
}
