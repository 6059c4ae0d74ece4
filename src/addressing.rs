//! # Addressing Modes
//!
//! This module defines the addressing modes supported by the 6502 processor and
//! the resolvers that turn the operand bytes following an opcode into a value or
//! an effective address.
//!
//! Resolvers only ever read the operand bytes (at `PC+1` and `PC+2`), the index
//! registers and memory. They never look at the opcode byte itself, which lets
//! the same resolution logic serve both execution and disassembly.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator, Invalid
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80, X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80, Y
    ZeroPageY,

    /// Signed 8-bit displacement for branch instructions, relative to the
    /// address of the next instruction.
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// The NMOS part never carries into the pointer's high byte: `JMP ($10FF)`
    /// reads its target from $10FF and $1000.
    Indirect,

    /// Pre-indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40, X)
    IndirectX,

    /// Post-indexed indirect: ZP dereference then + Y.
    ///
    /// Example: LDA ($40), Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,

    /// Marks opcode slots with no documented instruction.
    Invalid,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator | AddressingMode::Invalid => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Total instruction length in bytes, opcode included.
    pub const fn instruction_length(self) -> u8 {
        1 + self.operand_bytes()
    }
}

/// What an addressing mode resolved to for the instruction at the current PC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The instruction takes no operand.
    Implied,

    /// The operand is the accumulator.
    Accumulator,

    /// The operand is the byte following the opcode.
    Immediate(u8),

    /// The operand lives in memory at `address`.
    ///
    /// `page_crossed` is set when indexing (or a branch displacement) moved the
    /// address onto a different 256-byte page than its base.
    Memory { address: u16, page_crossed: bool },
}

/// True when `a` and `b` lie in different 256-byte pages.
pub(crate) fn crosses_page(a: u16, b: u16) -> bool {
    a & 0xFF00 != b & 0xFF00
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves `mode` for the instruction at the current PC without mutating
    /// any state.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{addressing::Operand, AddressingMode, FlatMemory, CPU};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.hard_reset(0x8000);
    /// cpu.poke_word(0x8001, 0x20F0);
    /// cpu.set_x(0x20);
    ///
    /// assert_eq!(
    ///     cpu.resolve_operand(AddressingMode::AbsoluteX),
    ///     Operand::Memory { address: 0x2110, page_crossed: true }
    /// );
    /// ```
    pub fn resolve_operand(&self, mode: AddressingMode) -> Operand {
        let operand_addr = self.pc.wrapping_add(1);

        match mode {
            AddressingMode::Implicit | AddressingMode::Invalid => Operand::Implied,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(self.memory.read(operand_addr)),
            AddressingMode::ZeroPage => Operand::Memory {
                address: self.memory.read(operand_addr) as u16,
                page_crossed: false,
            },
            AddressingMode::ZeroPageX => Operand::Memory {
                address: self.memory.read(operand_addr).wrapping_add(self.x) as u16,
                page_crossed: false,
            },
            AddressingMode::ZeroPageY => Operand::Memory {
                address: self.memory.read(operand_addr).wrapping_add(self.y) as u16,
                page_crossed: false,
            },
            AddressingMode::Relative => {
                let displacement = self.memory.read(operand_addr) as i8;
                let next = self.pc.wrapping_add(mode.instruction_length() as u16);
                let address = next.wrapping_add_signed(displacement as i16);
                Operand::Memory {
                    address,
                    page_crossed: crosses_page(next, address),
                }
            }
            AddressingMode::Absolute => Operand::Memory {
                address: self.memory.read_word(operand_addr),
                page_crossed: false,
            },
            AddressingMode::AbsoluteX => self.indexed(self.memory.read_word(operand_addr), self.x),
            AddressingMode::AbsoluteY => self.indexed(self.memory.read_word(operand_addr), self.y),
            AddressingMode::Indirect => {
                let pointer = self.memory.read_word(operand_addr);
                // The high byte is fetched without carrying into the page
                let hi_addr = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
                Operand::Memory {
                    address: u16::from_le_bytes([
                        self.memory.read(pointer),
                        self.memory.read(hi_addr),
                    ]),
                    page_crossed: false,
                }
            }
            AddressingMode::IndirectX => {
                let zp = self.memory.read(operand_addr).wrapping_add(self.x);
                Operand::Memory {
                    address: self.zero_page_word(zp),
                    page_crossed: false,
                }
            }
            AddressingMode::IndirectY => {
                let zp = self.memory.read(operand_addr);
                self.indexed(self.zero_page_word(zp), self.y)
            }
        }
    }

    /// Reads the operand value for a read-mode instruction.
    ///
    /// Returns the value and whether a page boundary was crossed while
    /// computing its address. Modes without a value (Implicit, Invalid) read
    /// as zero.
    pub(crate) fn read_operand(&self, mode: AddressingMode) -> (u8, bool) {
        match self.resolve_operand(mode) {
            Operand::Implied => (0, false),
            Operand::Accumulator => (self.a, false),
            Operand::Immediate(value) => (value, false),
            Operand::Memory {
                address,
                page_crossed,
            } => (self.memory.read(address), page_crossed),
        }
    }

    /// Commits `value` to the location `mode` resolves to.
    ///
    /// Immediate and Implicit modes have no writable location; the value is
    /// dropped.
    pub(crate) fn write_operand(&mut self, mode: AddressingMode, value: u8) {
        match self.resolve_operand(mode) {
            Operand::Accumulator => self.a = value,
            Operand::Memory { address, .. } => self.memory.write(address, value),
            Operand::Implied | Operand::Immediate(_) => {}
        }
    }

    fn indexed(&self, base: u16, index: u8) -> Operand {
        let address = base.wrapping_add(index as u16);
        Operand::Memory {
            address,
            page_crossed: crosses_page(base, address),
        }
    }

    /// Reads a pointer from the zero page; the high byte wraps to $00.
    fn zero_page_word(&self, zp: u8) -> u16 {
        u16::from_le_bytes([
            self.memory.read(zp as u16),
            self.memory.read(zp.wrapping_add(1) as u16),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.hard_reset(0x8000);
        cpu
    }

    #[test]
    fn test_instruction_lengths() {
        assert_eq!(AddressingMode::Implicit.instruction_length(), 1);
        assert_eq!(AddressingMode::Accumulator.instruction_length(), 1);
        assert_eq!(AddressingMode::Immediate.instruction_length(), 2);
        assert_eq!(AddressingMode::Relative.instruction_length(), 2);
        assert_eq!(AddressingMode::IndirectY.instruction_length(), 2);
        assert_eq!(AddressingMode::Absolute.instruction_length(), 3);
        assert_eq!(AddressingMode::Indirect.instruction_length(), 3);
    }

    #[test]
    fn test_zero_page_x_wraps() {
        let mut cpu = setup_cpu();
        cpu.poke_byte(0x8001, 0xF0);
        cpu.set_x(0x20);

        assert_eq!(
            cpu.resolve_operand(AddressingMode::ZeroPageX),
            Operand::Memory {
                address: 0x0010,
                page_crossed: false
            }
        );
    }

    #[test]
    fn test_absolute_x_page_cross() {
        let mut cpu = setup_cpu();
        cpu.poke_word(0x8001, 0x2000);
        cpu.set_x(0x01);

        assert_eq!(
            cpu.resolve_operand(AddressingMode::AbsoluteX),
            Operand::Memory {
                address: 0x2001,
                page_crossed: false
            }
        );

        cpu.poke_word(0x8001, 0x20F0);
        cpu.set_x(0x20);
        assert_eq!(
            cpu.resolve_operand(AddressingMode::AbsoluteX),
            Operand::Memory {
                address: 0x2110,
                page_crossed: true
            }
        );
    }

    #[test]
    fn test_indirect_x_pointer_wraps_in_zero_page() {
        let mut cpu = setup_cpu();
        cpu.poke_byte(0x8001, 0xFE);
        cpu.set_x(0x01);
        cpu.poke_byte(0x00FF, 0x34);
        cpu.poke_byte(0x0000, 0x12);

        assert_eq!(
            cpu.resolve_operand(AddressingMode::IndirectX),
            Operand::Memory {
                address: 0x1234,
                page_crossed: false
            }
        );
    }

    #[test]
    fn test_indirect_y_page_cross() {
        let mut cpu = setup_cpu();
        cpu.poke_byte(0x8001, 0x40);
        cpu.poke_word(0x0040, 0x30FF);
        cpu.set_y(0x01);

        assert_eq!(
            cpu.resolve_operand(AddressingMode::IndirectY),
            Operand::Memory {
                address: 0x3100,
                page_crossed: true
            }
        );
    }

    #[test]
    fn test_indirect_does_not_carry_into_high_byte() {
        let mut cpu = setup_cpu();
        cpu.poke_word(0x8001, 0x10FF);
        cpu.poke_byte(0x10FF, 0x34);
        cpu.poke_byte(0x1000, 0x12);
        cpu.poke_byte(0x1100, 0x56);

        assert_eq!(
            cpu.resolve_operand(AddressingMode::Indirect),
            Operand::Memory {
                address: 0x1234,
                page_crossed: false
            }
        );
    }

    #[test]
    fn test_relative_backwards_across_page() {
        let mut cpu = setup_cpu();
        cpu.set_pc(0x8100);
        cpu.poke_byte(0x8101, 0xF0); // -16

        assert_eq!(
            cpu.resolve_operand(AddressingMode::Relative),
            Operand::Memory {
                address: 0x80F2,
                page_crossed: true
            }
        );
    }

    #[test]
    fn test_write_operand_to_accumulator_and_memory() {
        let mut cpu = setup_cpu();

        cpu.write_operand(AddressingMode::Accumulator, 0x55);
        assert_eq!(cpu.a(), 0x55);

        cpu.poke_byte(0x8001, 0x10);
        cpu.write_operand(AddressingMode::ZeroPage, 0x66);
        assert_eq!(cpu.peek_byte(0x0010), 0x66);

        // Immediate has nowhere to write
        cpu.write_operand(AddressingMode::Immediate, 0x77);
        assert_eq!(cpu.peek_byte(0x8001), 0x10);
    }
}
