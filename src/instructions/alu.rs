//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry (borrow)
//! - AND, ORA, EOR: Logical operations on the accumulator
//! - CMP, CPX, CPY: Compare a register with memory
//! - BIT: Bit test
//!
//! The carry arithmetic lives in two pure functions, `add_with_carry` and
//! `subtract_with_borrow`, so it can be checked without a CPU. Arithmetic is
//! binary; the Decimal flag is stored but does not change ADC or SBC.

use super::complete;
use crate::{MemoryBus, OpcodeMetadata, Status, CPU};

/// Outcome of an 8-bit add or subtract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AluResult {
    /// Result truncated to 8 bits.
    pub value: u8,

    /// Carry out (for subtraction: set when no borrow occurred).
    pub carry: bool,

    /// Signed overflow.
    pub overflow: bool,
}

/// Adds `a`, `b` and the incoming carry.
///
/// Carry is set when the unsigned sum exceeds 8 bits. Overflow is set when both
/// operands have the same sign and the result's sign differs.
///
/// # Examples
///
/// ```
/// use emu6502::add_with_carry;
///
/// let r = add_with_carry(0xFF, 0x01, false);
/// assert_eq!((r.value, r.carry), (0x00, true));
///
/// let r = add_with_carry(0x7F, 0x01, false);
/// assert!(r.overflow);
/// assert!(!r.carry);
/// ```
pub fn add_with_carry(a: u8, b: u8, carry: bool) -> AluResult {
    let sum = a as u16 + b as u16 + carry as u16;
    let value = sum as u8;

    AluResult {
        value,
        carry: sum > 0xFF,
        overflow: (a ^ value) & (b ^ value) & 0x80 != 0,
    }
}

/// Subtracts `b` and the borrow (`!carry`) from `a`.
///
/// This is addition of the one's complement of `b`, so Carry set means no
/// borrow was needed.
///
/// # Examples
///
/// ```
/// use emu6502::subtract_with_borrow;
///
/// let r = subtract_with_borrow(0x10, 0x10, true);
/// assert_eq!((r.value, r.carry), (0x00, true));
///
/// let r = subtract_with_borrow(0x00, 0x01, true);
/// assert_eq!((r.value, r.carry), (0xFF, false));
///
/// // -128 - 1 overflows
/// assert!(subtract_with_borrow(0x80, 0x01, true).overflow);
/// ```
pub fn subtract_with_borrow(a: u8, b: u8, carry: bool) -> AluResult {
    add_with_carry(a, !b, carry)
}

fn apply_arithmetic<M: MemoryBus>(cpu: &mut CPU<M>, result: AluResult) {
    cpu.a = result.value;
    cpu.status.set(Status::CARRY, result.carry);
    cpu.status.set(Status::OVERFLOW, result.overflow);
    cpu.status.update_zn(result.value);
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Updates C, V, Z and N.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    let result = add_with_carry(cpu.a, value, cpu.status.contains(Status::CARRY));
    apply_arithmetic(cpu, result);

    complete(cpu, metadata, page_crossed)
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Updates C, V, Z and N.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    let result = subtract_with_borrow(cpu.a, value, cpu.status.contains(Status::CARRY));
    apply_arithmetic(cpu, result);

    complete(cpu, metadata, page_crossed)
}

fn logical<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    op: impl FnOnce(u8, u8) -> u8,
) -> u32 {
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.a = op(cpu.a, value);
    cpu.status.update_zn(cpu.a);

    complete(cpu, metadata, page_crossed)
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    logical(cpu, metadata, |a, m| a & m)
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    logical(cpu, metadata, |a, m| a | m)
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    logical(cpu, metadata, |a, m| a ^ m)
}

/// Executes CMP, CPX or CPY against `register`.
///
/// - Carry (C): Set if register >= operand
/// - Zero (Z): Set if register == operand
/// - Negative (N): Bit 7 of (register - operand)
pub(crate) fn execute_compare<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    register: u8,
) -> u32 {
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.status.set(Status::CARRY, register >= value);
    cpu.status.update_zn(register.wrapping_sub(value));

    complete(cpu, metadata, page_crossed)
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z reflects `A & M`; N and V are copied from bits 7 and 6 of the operand.
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    let (value, _) = cpu.read_operand(metadata.addressing_mode);

    cpu.status.set(Status::ZERO, cpu.a & value == 0);
    cpu.status.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.status.set(Status::OVERFLOW, value & 0x40 != 0);

    complete(cpu, metadata, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_with_carry_table() {
        // (a, b, carry in) -> (value, carry out)
        let cases = [
            (0x10, 0x10, false, 0x20, false),
            (0xFF, 0x00, false, 0xFF, false),
            (0xFE, 0x00, true, 0xFF, false),
            (0xFF, 0x00, true, 0x00, true),
            (0xFF, 0x01, false, 0x00, true),
            (0xFD, 0x01, true, 0xFF, false),
            (0xFE, 0x01, true, 0x00, true),
            (0xFF, 0x01, true, 0x01, true),
        ];

        for (i, &(a, b, c, value, carry)) in cases.iter().enumerate() {
            let r = add_with_carry(a, b, c);
            assert_eq!((r.value, r.carry), (value, carry), "case {}", i);
        }
    }

    #[test]
    fn test_add_overflow_cases() {
        assert!(add_with_carry(0x7F, 0x01, false).overflow);
        assert!(add_with_carry(0x80, 0xFF, false).overflow);
        assert!(!add_with_carry(0x7F, 0xFF, false).overflow);
        assert!(!add_with_carry(0x01, 0x01, false).overflow);
    }

    #[test]
    fn test_subtract_with_borrow() {
        let r = subtract_with_borrow(0x10, 0x10, true);
        assert_eq!((r.value, r.carry, r.overflow), (0x00, true, false));

        // Borrow in
        let r = subtract_with_borrow(0x10, 0x10, false);
        assert_eq!((r.value, r.carry), (0xFF, false));

        // 0x50 - 0xB0 = 80 - (-80) = 160 -> signed overflow
        let r = subtract_with_borrow(0x50, 0xB0, true);
        assert_eq!(r.value, 0xA0);
        assert!(r.overflow);
        assert!(!r.carry);
    }
}
