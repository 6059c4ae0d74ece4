//! # Opcode Metadata Table
//!
//! This module contains the 256-entry opcode table that serves as the single
//! source of truth for instruction metadata. The step engine and the
//! disassembler both read it; nothing writes to it after it is built.
//!
//! The table is assembled at compile time from `INSTRUCTIONS`, a declarative
//! list of the 151 documented NMOS 6502 opcodes. Slots that no entry claims
//! stay `None`, which is how an undocumented opcode is told apart from a
//! valid one.
//!
//! Each entry includes:
//! - Opcode byte
//! - Mnemonic (which executor runs it)
//! - Addressing mode
//! - Base cycle cost (excluding page-crossing and branch penalties)
//! - Instruction size in bytes, derived from the addressing mode

use crate::addressing::AddressingMode;
use std::fmt;

/// Instruction mnemonics of the documented 6502 instruction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Mnemonic {
    /// Upper-case assembler name, e.g. `"LDA"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
        }
    }

    /// True for instructions that load PC themselves instead of falling
    /// through to the next instruction.
    pub const fn sets_pc(self) -> bool {
        matches!(
            self,
            Mnemonic::Bcc
                | Mnemonic::Bcs
                | Mnemonic::Beq
                | Mnemonic::Bmi
                | Mnemonic::Bne
                | Mnemonic::Bpl
                | Mnemonic::Bvc
                | Mnemonic::Bvs
                | Mnemonic::Brk
                | Mnemonic::Jmp
                | Mnemonic::Jsr
                | Mnemonic::Rti
                | Mnemonic::Rts
        )
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a single documented 6502 opcode.
///
/// # Examples
///
/// ```
/// use emu6502::{lookup, AddressingMode, Mnemonic};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = lookup(0xA9).unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
///
/// // 0x02 is not a documented opcode
/// assert!(lookup(0x02).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Opcode byte this entry describes.
    pub opcode: u8,

    /// Instruction mnemonic; selects the executor.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing and branch penalties).
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

const fn op(
    opcode: u8,
    mnemonic: Mnemonic,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        opcode,
        mnemonic,
        addressing_mode,
        base_cycles,
        size_bytes: addressing_mode.instruction_length(),
    }
}

use AddressingMode::{
    Absolute as Abs, AbsoluteX as AbsX, AbsoluteY as AbsY, Accumulator as Acc, Immediate as Imm,
    Implicit as Imp, Indirect as Ind, IndirectX as IndX, IndirectY as IndY, Relative as Rel,
    ZeroPage as Zp, ZeroPageX as ZpX, ZeroPageY as ZpY,
};
use Mnemonic::*;

/// Declarative list of every documented opcode.
pub const INSTRUCTIONS: [OpcodeMetadata; 151] = [
    // Load
    op(0xA9, Lda, Imm, 2),
    op(0xA5, Lda, Zp, 3),
    op(0xB5, Lda, ZpX, 4),
    op(0xAD, Lda, Abs, 4),
    op(0xBD, Lda, AbsX, 4),
    op(0xB9, Lda, AbsY, 4),
    op(0xA1, Lda, IndX, 6),
    op(0xB1, Lda, IndY, 5),
    op(0xA2, Ldx, Imm, 2),
    op(0xA6, Ldx, Zp, 3),
    op(0xB6, Ldx, ZpY, 4),
    op(0xAE, Ldx, Abs, 4),
    op(0xBE, Ldx, AbsY, 4),
    op(0xA0, Ldy, Imm, 2),
    op(0xA4, Ldy, Zp, 3),
    op(0xB4, Ldy, ZpX, 4),
    op(0xAC, Ldy, Abs, 4),
    op(0xBC, Ldy, AbsX, 4),
    // Store
    op(0x85, Sta, Zp, 3),
    op(0x95, Sta, ZpX, 4),
    op(0x8D, Sta, Abs, 4),
    op(0x9D, Sta, AbsX, 5),
    op(0x99, Sta, AbsY, 5),
    op(0x81, Sta, IndX, 6),
    op(0x91, Sta, IndY, 6),
    op(0x86, Stx, Zp, 3),
    op(0x96, Stx, ZpY, 4),
    op(0x8E, Stx, Abs, 4),
    op(0x84, Sty, Zp, 3),
    op(0x94, Sty, ZpX, 4),
    op(0x8C, Sty, Abs, 4),
    // Increment / decrement
    op(0xE6, Inc, Zp, 5),
    op(0xF6, Inc, ZpX, 6),
    op(0xEE, Inc, Abs, 6),
    op(0xFE, Inc, AbsX, 7),
    op(0xC6, Dec, Zp, 5),
    op(0xD6, Dec, ZpX, 6),
    op(0xCE, Dec, Abs, 6),
    op(0xDE, Dec, AbsX, 7),
    op(0xE8, Inx, Imp, 2),
    op(0xC8, Iny, Imp, 2),
    op(0xCA, Dex, Imp, 2),
    op(0x88, Dey, Imp, 2),
    // Transfer
    op(0xAA, Tax, Imp, 2),
    op(0xA8, Tay, Imp, 2),
    op(0x8A, Txa, Imp, 2),
    op(0x98, Tya, Imp, 2),
    op(0xBA, Tsx, Imp, 2),
    op(0x9A, Txs, Imp, 2),
    // Flags
    op(0x18, Clc, Imp, 2),
    op(0x38, Sec, Imp, 2),
    op(0xD8, Cld, Imp, 2),
    op(0xF8, Sed, Imp, 2),
    op(0x58, Cli, Imp, 2),
    op(0x78, Sei, Imp, 2),
    op(0xB8, Clv, Imp, 2),
    // Stack
    op(0x48, Pha, Imp, 3),
    op(0x08, Php, Imp, 3),
    op(0x68, Pla, Imp, 4),
    op(0x28, Plp, Imp, 4),
    // Branch
    op(0x10, Bpl, Rel, 2),
    op(0x30, Bmi, Rel, 2),
    op(0x50, Bvc, Rel, 2),
    op(0x70, Bvs, Rel, 2),
    op(0x90, Bcc, Rel, 2),
    op(0xB0, Bcs, Rel, 2),
    op(0xD0, Bne, Rel, 2),
    op(0xF0, Beq, Rel, 2),
    // Control
    op(0x00, Brk, Imp, 7),
    op(0x4C, Jmp, Abs, 3),
    op(0x6C, Jmp, Ind, 5),
    op(0x20, Jsr, Abs, 6),
    op(0x60, Rts, Imp, 6),
    op(0x40, Rti, Imp, 6),
    op(0xEA, Nop, Imp, 2),
    // Arithmetic
    op(0x69, Adc, Imm, 2),
    op(0x65, Adc, Zp, 3),
    op(0x75, Adc, ZpX, 4),
    op(0x6D, Adc, Abs, 4),
    op(0x7D, Adc, AbsX, 4),
    op(0x79, Adc, AbsY, 4),
    op(0x61, Adc, IndX, 6),
    op(0x71, Adc, IndY, 5),
    op(0xE9, Sbc, Imm, 2),
    op(0xE5, Sbc, Zp, 3),
    op(0xF5, Sbc, ZpX, 4),
    op(0xED, Sbc, Abs, 4),
    op(0xFD, Sbc, AbsX, 4),
    op(0xF9, Sbc, AbsY, 4),
    op(0xE1, Sbc, IndX, 6),
    op(0xF1, Sbc, IndY, 5),
    // Logical
    op(0x29, And, Imm, 2),
    op(0x25, And, Zp, 3),
    op(0x35, And, ZpX, 4),
    op(0x2D, And, Abs, 4),
    op(0x3D, And, AbsX, 4),
    op(0x39, And, AbsY, 4),
    op(0x21, And, IndX, 6),
    op(0x31, And, IndY, 5),
    op(0x09, Ora, Imm, 2),
    op(0x05, Ora, Zp, 3),
    op(0x15, Ora, ZpX, 4),
    op(0x0D, Ora, Abs, 4),
    op(0x1D, Ora, AbsX, 4),
    op(0x19, Ora, AbsY, 4),
    op(0x01, Ora, IndX, 6),
    op(0x11, Ora, IndY, 5),
    op(0x49, Eor, Imm, 2),
    op(0x45, Eor, Zp, 3),
    op(0x55, Eor, ZpX, 4),
    op(0x4D, Eor, Abs, 4),
    op(0x5D, Eor, AbsX, 4),
    op(0x59, Eor, AbsY, 4),
    op(0x41, Eor, IndX, 6),
    op(0x51, Eor, IndY, 5),
    op(0x24, Bit, Zp, 3),
    op(0x2C, Bit, Abs, 4),
    // Compare
    op(0xC9, Cmp, Imm, 2),
    op(0xC5, Cmp, Zp, 3),
    op(0xD5, Cmp, ZpX, 4),
    op(0xCD, Cmp, Abs, 4),
    op(0xDD, Cmp, AbsX, 4),
    op(0xD9, Cmp, AbsY, 4),
    op(0xC1, Cmp, IndX, 6),
    op(0xD1, Cmp, IndY, 5),
    op(0xE0, Cpx, Imm, 2),
    op(0xE4, Cpx, Zp, 3),
    op(0xEC, Cpx, Abs, 4),
    op(0xC0, Cpy, Imm, 2),
    op(0xC4, Cpy, Zp, 3),
    op(0xCC, Cpy, Abs, 4),
    // Shift / rotate
    op(0x0A, Asl, Acc, 2),
    op(0x06, Asl, Zp, 5),
    op(0x16, Asl, ZpX, 6),
    op(0x0E, Asl, Abs, 6),
    op(0x1E, Asl, AbsX, 7),
    op(0x4A, Lsr, Acc, 2),
    op(0x46, Lsr, Zp, 5),
    op(0x56, Lsr, ZpX, 6),
    op(0x4E, Lsr, Abs, 6),
    op(0x5E, Lsr, AbsX, 7),
    op(0x2A, Rol, Acc, 2),
    op(0x26, Rol, Zp, 5),
    op(0x36, Rol, ZpX, 6),
    op(0x2E, Rol, Abs, 6),
    op(0x3E, Rol, AbsX, 7),
    op(0x6A, Ror, Acc, 2),
    op(0x66, Ror, Zp, 5),
    op(0x76, Ror, ZpX, 6),
    op(0x6E, Ror, Abs, 6),
    op(0x7E, Ror, AbsX, 7),
];

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < INSTRUCTIONS.len() {
        let entry = INSTRUCTIONS[i];
        assert!(
            table[entry.opcode as usize].is_none(),
            "opcode listed twice"
        );
        table[entry.opcode as usize] = Some(entry);
        i += 1;
    }
    table
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// `None` marks an opcode with no documented instruction.
pub static OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

/// Looks up the table entry for `opcode`.
pub fn lookup(opcode: u8) -> Option<&'static OpcodeMetadata> {
    OPCODE_TABLE[opcode as usize].as_ref()
}
