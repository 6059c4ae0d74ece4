//! # Branch Instructions
//!
//! This module implements the conditional branches (BPL, BMI, BVC, BVS, BCC,
//! BCS, BNE, BEQ). Each one tests a single flag against an expected value; the
//! dispatcher supplies both.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset
//! from the address of the next instruction.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page

use super::complete;
use crate::addressing::Operand;
use crate::{MemoryBus, OpcodeMetadata, Status, CPU};

/// Branches when `flag` equals `expected`. No flags are affected.
pub(crate) fn execute_branch<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    flag: Status,
    expected: bool,
) -> u32 {
    if cpu.status.contains(flag) != expected {
        return complete(cpu, metadata, false);
    }

    let Operand::Memory {
        address,
        page_crossed,
    } = cpu.resolve_operand(metadata.addressing_mode)
    else {
        return complete(cpu, metadata, false);
    };

    cpu.pc = address;
    metadata.base_cycles as u32 + 1 + page_crossed as u32
}
