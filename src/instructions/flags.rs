//! # Status Flag Instructions
//!
//! CLC, SEC, CLD, SED, CLI, SEI and CLV each set or clear exactly one flag.
//! The dispatcher passes the flag mask and the value to store.

use super::complete;
use crate::{MemoryBus, OpcodeMetadata, Status, CPU};

/// Sets `flag` to `value`; nothing else is touched.
pub(crate) fn execute_flag<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    flag: Status,
    value: bool,
) -> u32 {
    cpu.status.set(flag, value);

    complete(cpu, metadata, false)
}
