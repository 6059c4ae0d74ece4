//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Force Interrupt
//! - JMP: Jump to address
//! - JSR / RTS: Subroutine call and return
//! - RTI: Return from interrupt
//! - NOP: No operation
//!
//! Everything here except NOP loads PC directly.

use super::complete;
use crate::addressing::Operand;
use crate::{MemoryBus, OpcodeMetadata, Status, CPU, IRQ_VECTOR};

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK forces a software interrupt by:
/// 1. Pushing PC+1 to the stack (high byte first, then low byte)
/// 2. Pushing the status register with the Break flag set in the pushed byte
/// 3. Setting the I (interrupt disable) flag
/// 4. Loading PC from the IRQ vector at $FFFE/$FFFF
///
/// Cycle timing: 7 cycles (fixed)
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    let return_address = cpu.pc.wrapping_add(1);
    cpu.push_word(return_address);

    let pushed = cpu.status | Status::BREAK;
    cpu.push(pushed.bits());

    cpu.status.insert(Status::INTERRUPT_DISABLE);
    cpu.pc = cpu.memory.read_word(IRQ_VECTOR);

    metadata.base_cycles as u32
}

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234 - Jump to address $1234
/// - Indirect (0x6C): JMP ($1234) - Jump to address stored at $1234/$1235
///
/// The indirect form inherits the NMOS pointer quirk documented on
/// `AddressingMode::Indirect`. No flags affected.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    match cpu.resolve_operand(metadata.addressing_mode) {
        Operand::Memory { address, .. } => {
            cpu.pc = address;
            metadata.base_cycles as u32
        }
        _ => complete(cpu, metadata, false),
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR (PC+2) and jumps to the
/// absolute operand.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    let target = cpu.memory.read_word(cpu.pc.wrapping_add(1));
    let return_address = cpu.pc.wrapping_add(2);

    cpu.push_word(return_address);
    cpu.pc = target;

    metadata.base_cycles as u32
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the address pushed by JSR and resumes at the byte after it.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    cpu.pc = cpu.pull_word().wrapping_add(1);

    metadata.base_cycles as u32
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register (Break forced low), then PC. Unlike RTS, the
/// pulled address is used as is.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    let status = cpu.pull();
    cpu.status = Status::from_bits_retain(status) - Status::BREAK;
    cpu.pc = cpu.pull_word();

    metadata.base_cycles as u32
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    complete(cpu, metadata, false)
}
