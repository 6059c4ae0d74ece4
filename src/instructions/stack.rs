//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! A push writes to 0x0100 | SP and then decrements SP; a pull increments SP first
//! and then reads. SP wraps within the page.

use super::complete;
use crate::{MemoryBus, OpcodeMetadata, Status, CPU};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Flags affected: None
///
/// # Examples
///
/// ```
/// use emu6502::{CPU, FlatMemory};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.hard_reset(0x8000);
/// cpu.poke_byte(0x8000, 0x48); // PHA
/// cpu.set_a(0x42);
///
/// assert_eq!(cpu.step(), Ok(3));
/// assert_eq!(cpu.peek_byte(0x01FF), 0x42);
/// assert_eq!(cpu.sp(), 0xFE);
/// assert_eq!(cpu.pc(), 0x8001);
/// ```
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    let value = cpu.a;
    cpu.push(value);

    complete(cpu, metadata, false)
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The status byte is pushed exactly as it is held.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    let value = cpu.status.bits();
    cpu.push(value);

    complete(cpu, metadata, false)
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Sets Zero and Negative from the pulled value.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    let value = cpu.pull();
    cpu.a = value;
    cpu.status.update_zn(value);

    complete(cpu, metadata, false)
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Every flag comes from the pulled byte except Break, which is forced low.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    let value = cpu.pull();
    cpu.status = Status::from_bits_retain(value) - Status::BREAK;

    complete(cpu, metadata, false)
}
