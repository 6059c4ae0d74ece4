//! # 6502 Instruction Implementations
//!
//! This module contains the executors for every documented 6502 instruction,
//! organized by category. Each executor takes a mutable reference to the CPU and
//! the opcode table entry being executed, performs the instruction's effect, and
//! returns the total number of cycles consumed (base cycles plus any penalty).
//!
//! Executors advance PC by the instruction length once the effect is applied.
//! Taken branches, BRK, JMP, JSR, RTS and RTI load PC themselves and never add
//! the length on top.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{MemoryBus, Mnemonic, OpcodeMetadata, Status, CPU};

/// Runs the executor for `metadata.mnemonic` and returns the cycles consumed.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u32 {
    match metadata.mnemonic {
        Mnemonic::Lda => load_store::execute_lda(cpu, metadata),
        Mnemonic::Ldx => load_store::execute_ldx(cpu, metadata),
        Mnemonic::Ldy => load_store::execute_ldy(cpu, metadata),
        Mnemonic::Sta => load_store::execute_sta(cpu, metadata),
        Mnemonic::Stx => load_store::execute_stx(cpu, metadata),
        Mnemonic::Sty => load_store::execute_sty(cpu, metadata),

        Mnemonic::Inc => inc_dec::execute_inc(cpu, metadata),
        Mnemonic::Dec => inc_dec::execute_dec(cpu, metadata),
        Mnemonic::Inx => inc_dec::execute_inx(cpu, metadata),
        Mnemonic::Iny => inc_dec::execute_iny(cpu, metadata),
        Mnemonic::Dex => inc_dec::execute_dex(cpu, metadata),
        Mnemonic::Dey => inc_dec::execute_dey(cpu, metadata),

        Mnemonic::Tax => transfer::execute_tax(cpu, metadata),
        Mnemonic::Tay => transfer::execute_tay(cpu, metadata),
        Mnemonic::Txa => transfer::execute_txa(cpu, metadata),
        Mnemonic::Tya => transfer::execute_tya(cpu, metadata),
        Mnemonic::Tsx => transfer::execute_tsx(cpu, metadata),
        Mnemonic::Txs => transfer::execute_txs(cpu, metadata),

        Mnemonic::Clc => flags::execute_flag(cpu, metadata, Status::CARRY, false),
        Mnemonic::Sec => flags::execute_flag(cpu, metadata, Status::CARRY, true),
        Mnemonic::Cld => flags::execute_flag(cpu, metadata, Status::DECIMAL, false),
        Mnemonic::Sed => flags::execute_flag(cpu, metadata, Status::DECIMAL, true),
        Mnemonic::Cli => flags::execute_flag(cpu, metadata, Status::INTERRUPT_DISABLE, false),
        Mnemonic::Sei => flags::execute_flag(cpu, metadata, Status::INTERRUPT_DISABLE, true),
        Mnemonic::Clv => flags::execute_flag(cpu, metadata, Status::OVERFLOW, false),

        Mnemonic::Pha => stack::execute_pha(cpu, metadata),
        Mnemonic::Php => stack::execute_php(cpu, metadata),
        Mnemonic::Pla => stack::execute_pla(cpu, metadata),
        Mnemonic::Plp => stack::execute_plp(cpu, metadata),

        Mnemonic::Bpl => branches::execute_branch(cpu, metadata, Status::NEGATIVE, false),
        Mnemonic::Bmi => branches::execute_branch(cpu, metadata, Status::NEGATIVE, true),
        Mnemonic::Bvc => branches::execute_branch(cpu, metadata, Status::OVERFLOW, false),
        Mnemonic::Bvs => branches::execute_branch(cpu, metadata, Status::OVERFLOW, true),
        Mnemonic::Bcc => branches::execute_branch(cpu, metadata, Status::CARRY, false),
        Mnemonic::Bcs => branches::execute_branch(cpu, metadata, Status::CARRY, true),
        Mnemonic::Bne => branches::execute_branch(cpu, metadata, Status::ZERO, false),
        Mnemonic::Beq => branches::execute_branch(cpu, metadata, Status::ZERO, true),

        Mnemonic::Brk => control::execute_brk(cpu, metadata),
        Mnemonic::Jmp => control::execute_jmp(cpu, metadata),
        Mnemonic::Jsr => control::execute_jsr(cpu, metadata),
        Mnemonic::Rts => control::execute_rts(cpu, metadata),
        Mnemonic::Rti => control::execute_rti(cpu, metadata),
        Mnemonic::Nop => control::execute_nop(cpu, metadata),

        Mnemonic::Adc => alu::execute_adc(cpu, metadata),
        Mnemonic::Sbc => alu::execute_sbc(cpu, metadata),
        Mnemonic::And => alu::execute_and(cpu, metadata),
        Mnemonic::Ora => alu::execute_ora(cpu, metadata),
        Mnemonic::Eor => alu::execute_eor(cpu, metadata),
        Mnemonic::Cmp => {
            let register = cpu.a;
            alu::execute_compare(cpu, metadata, register)
        }
        Mnemonic::Cpx => {
            let register = cpu.x;
            alu::execute_compare(cpu, metadata, register)
        }
        Mnemonic::Cpy => {
            let register = cpu.y;
            alu::execute_compare(cpu, metadata, register)
        }
        Mnemonic::Bit => alu::execute_bit(cpu, metadata),

        Mnemonic::Asl => shifts::execute_asl(cpu, metadata),
        Mnemonic::Lsr => shifts::execute_lsr(cpu, metadata),
        Mnemonic::Rol => shifts::execute_rol(cpu, metadata),
        Mnemonic::Ror => shifts::execute_ror(cpu, metadata),
    }
}

/// Advances PC past the instruction and returns its cycle cost.
///
/// `page_crossed` adds the one-cycle indexing penalty; callers only pass it
/// through for read instructions.
pub(crate) fn complete<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    page_crossed: bool,
) -> u32 {
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles as u32 + page_crossed as u32
}
