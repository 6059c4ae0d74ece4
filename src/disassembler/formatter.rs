//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;

/// Format a single instruction as assembly text
///
/// Hex digits are lower case. Relative operands show the signed displacement
/// in decimal; an opcode with no table entry renders as `db $xx`.
pub fn format_instruction(instr: &Instruction) -> String {
    let Some(mnemonic) = instr.mnemonic else {
        return format!("db ${:02x}", instr.opcode);
    };

    let operand = format_operand(instr);
    if operand.is_empty() {
        mnemonic.to_string()
    } else {
        format!("{} {}", mnemonic, operand)
    }
}

/// Format the operand based on addressing mode
fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    let byte = instr.operand_bytes.first().copied().unwrap_or(0);
    let word = match instr.operand_bytes.as_slice() {
        [lo, hi, ..] => u16::from_le_bytes([*lo, *hi]),
        _ => byte as u16,
    };

    match instr.addressing_mode {
        Implicit | Invalid => String::new(),
        Accumulator => "A".to_string(),
        Immediate => format!("#${:02x}", byte),
        ZeroPage => format!("${:02x}", byte),
        ZeroPageX => format!("${:02x}, X", byte),
        ZeroPageY => format!("${:02x}, Y", byte),
        Relative => format!("{}", byte as i8),
        Absolute => format!("${:04x}", word),
        AbsoluteX => format!("${:04x}, X", word),
        AbsoluteY => format!("${:04x}, Y", word),
        Indirect => format!("(${:04x})", word),
        IndirectX => format!("(${:02x}, X)", byte),
        IndirectY => format!("(${:02x}), Y", byte),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mnemonic;

    fn instr(mnemonic: Mnemonic, mode: AddressingMode, operand_bytes: Vec<u8>) -> Instruction {
        Instruction {
            address: 0x8000,
            opcode: 0x00,
            mnemonic: Some(mnemonic),
            addressing_mode: mode,
            size_bytes: mode.instruction_length(),
            operand_bytes,
            base_cycles: 2,
        }
    }

    #[test]
    fn test_format_immediate() {
        let i = instr(Mnemonic::Lda, AddressingMode::Immediate, vec![0x4F]);
        assert_eq!(format_instruction(&i), "LDA #$4f");
    }

    #[test]
    fn test_format_absolute() {
        let i = instr(Mnemonic::Sta, AddressingMode::Absolute, vec![0x00, 0x80]);
        assert_eq!(format_instruction(&i), "STA $8000");
    }

    #[test]
    fn test_format_implied() {
        let i = instr(Mnemonic::Nop, AddressingMode::Implicit, vec![]);
        assert_eq!(format_instruction(&i), "NOP");
    }

    #[test]
    fn test_format_accumulator() {
        let i = instr(Mnemonic::Rol, AddressingMode::Accumulator, vec![]);
        assert_eq!(format_instruction(&i), "ROL A");
    }

    #[test]
    fn test_format_indexed_and_indirect() {
        let cases = [
            (AddressingMode::ZeroPageX, vec![0x10], "LDA $10, X"),
            (AddressingMode::ZeroPageY, vec![0x10], "LDA $10, Y"),
            (AddressingMode::AbsoluteX, vec![0xff, 0xee], "LDA $eeff, X"),
            (AddressingMode::AbsoluteY, vec![0xff, 0xee], "LDA $eeff, Y"),
            (AddressingMode::IndirectX, vec![0x40], "LDA ($40, X)"),
            (AddressingMode::IndirectY, vec![0x40], "LDA ($40), Y"),
        ];

        for (mode, bytes, expected) in cases {
            assert_eq!(format_instruction(&instr(Mnemonic::Lda, mode, bytes)), expected);
        }

        let jmp = instr(Mnemonic::Jmp, AddressingMode::Indirect, vec![0xfc, 0xff]);
        assert_eq!(format_instruction(&jmp), "JMP ($fffc)");
    }

    #[test]
    fn test_format_relative_is_signed_decimal() {
        let back = instr(Mnemonic::Bne, AddressingMode::Relative, vec![0xFE]);
        assert_eq!(format_instruction(&back), "BNE -2");

        let forward = instr(Mnemonic::Beq, AddressingMode::Relative, vec![0x10]);
        assert_eq!(format_instruction(&forward), "BEQ 16");
    }

    #[test]
    fn test_format_illegal_opcode() {
        let i = Instruction {
            address: 0x2000,
            opcode: 0xFF,
            mnemonic: None,
            addressing_mode: AddressingMode::Invalid,
            operand_bytes: vec![],
            size_bytes: 1,
            base_cycles: 0,
        };

        assert_eq!(format_instruction(&i), "db $ff");
    }
}
