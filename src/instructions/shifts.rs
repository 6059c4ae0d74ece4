//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator or, read-modify-write, on memory. The evicted
//! bit lands in Carry; rotates feed the old Carry into the vacated bit. Zero and
//! Negative come from the result.

use super::complete;
use crate::{MemoryBus, OpcodeMetadata, Status, CPU};

/// Reads the operand, applies `op` (which returns the result and the carry
/// out) and writes the result back.
fn shift<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    op: impl FnOnce(u8, bool) -> (u8, bool),
) -> u32 {
    let (value, _) = cpu.read_operand(metadata.addressing_mode);
    let (result, carry) = op(value, cpu.status.contains(Status::CARRY));

    cpu.write_operand(metadata.addressing_mode, result);
    cpu.status.set(Status::CARRY, carry);
    cpu.status.update_zn(result);

    complete(cpu, metadata, false)
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    shift(cpu, metadata, |v, _| (v << 1, v & 0x80 != 0))
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    shift(cpu, metadata, |v, _| (v >> 1, v & 0x01 != 0))
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    shift(cpu, metadata, |v, c| ((v << 1) | c as u8, v & 0x80 != 0))
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    shift(cpu, metadata, |v, c| ((v >> 1) | ((c as u8) << 7), v & 0x01 != 0))
}
