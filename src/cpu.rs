//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 machine state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: an 8-bit `Status` set, addressed by mask
//! - **Cycle counter**: u64 monotonically increasing cycle count
//! - **Memory**: the `MemoryBus` that backs the 64KB address space
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction and report its cycle cost
//! - `run_for_cycles()`: Execute until cycle budget exhausted
//!
//! An opcode with no table entry stops execution with a `DecodeError` before
//! anything observable changes.

use crate::{disassembler, instructions, lookup, DecodeError, MemoryBus, Status};

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Non-maskable interrupt vector.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Interrupt request / BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// 6502 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags, program counter,
/// stack pointer, cycle counter and the memory it executes from. It is generic over the
/// memory implementation via the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use emu6502::{CPU, FlatMemory, Status};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.hard_reset(0x8000);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.status(), Status::empty());
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Processor status flags
    pub(crate) status: Status,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU over the given memory bus.
    ///
    /// Memory is left as supplied. The CPU starts in the soft-reset state:
    /// - Program counter (PC) is loaded from the reset vector at 0xFFFC/0xFFFD
    /// - Stack pointer (SP) is set to 0xFF
    /// - A, X, Y and all status flags are zero
    /// - Cycle counter is zero
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write_word(0xFFFC, 0x8000);
    ///
    /// let cpu = CPU::new(mem);
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn new(memory: M) -> Self {
        let pc = memory.read_word(RESET_VECTOR);

        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc,
            sp: 0xFF,
            status: Status::empty(),
            cycles: 0,
            memory,
        }
    }

    /// Zeroes all memory and registers, then starts execution at `reset_addr`.
    ///
    /// `reset_addr` is written into the reset vector, SP is set to 0xFF and PC
    /// is loaded from the vector. The cycle counter restarts at zero.
    pub fn hard_reset(&mut self, reset_addr: u16) {
        self.memory.clear();
        self.memory.write_word(RESET_VECTOR, reset_addr);

        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.status = Status::empty();
        self.cycles = 0;
        self.sp = 0xFF;
        self.pc = self.memory.read_word(RESET_VECTOR);

        log::debug!("hard reset, PC=${:04x}", self.pc);
    }

    /// Reloads SP and PC from the reset vector, leaving memory and the other
    /// registers untouched.
    pub fn soft_reset(&mut self) {
        self.sp = 0xFF;
        self.pc = self.memory.read_word(RESET_VECTOR);

        log::debug!("soft reset, PC=${:04x}", self.pc);
    }

    /// Executes one instruction and returns the number of cycles it consumed.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at current PC
    /// 2. Look up the entry in the opcode table
    /// 3. If there is none, return `DecodeError` with state unchanged
    /// 4. Run the executor, which applies the effect, updates flags and PC
    /// 5. Add the reported cycles to the cycle counter
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{CPU, DecodeError, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.hard_reset(0x8000);
    /// cpu.poke_byte(0x8000, 0xEA); // NOP
    /// cpu.poke_byte(0x8001, 0x02); // undocumented
    ///
    /// assert_eq!(cpu.step(), Ok(2));
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(DecodeError { opcode: 0x02, address: 0x8001 })
    /// );
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> Result<u32, DecodeError> {
        let address = self.pc;
        let opcode = self.memory.read(address);

        let Some(metadata) = lookup(opcode) else {
            log::warn!("invalid opcode ${:02x} at ${:04x}", opcode, address);
            return Err(DecodeError { opcode, address });
        };

        let cycles = instructions::execute(self, metadata);
        self.cycles += cycles as u64;

        log::trace!(
            "${:04x}: {:02x} {} -> {} cycles",
            address,
            opcode,
            metadata.mnemonic,
            cycles
        );

        Ok(cycles)
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until the cycle budget is exhausted or a decode error
    /// occurs. Returns the actual number of cycles consumed, which may overshoot
    /// the budget by part of one instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{CPU, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.hard_reset(0x8000);
    /// for addr in 0x8000..0x8010 {
    ///     cpu.poke_byte(addr, 0xEA); // NOP, 2 cycles
    /// }
    ///
    /// assert_eq!(cpu.run_for_cycles(10), Ok(10));
    /// assert_eq!(cpu.pc(), 0x8005);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, DecodeError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Disassembles the instruction at `addr` without changing any state.
    ///
    /// Returns the formatted text and the instruction length in bytes.
    pub fn disassemble(&self, addr: u16) -> (String, u8) {
        disassembler::disassemble(&self.memory, addr)
    }

    // ========== Memory Access ==========

    /// Reads the byte at `addr`.
    pub fn peek_byte(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Writes `value` to `addr`.
    pub fn poke_byte(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Reads the little-endian word at `addr`.
    pub fn peek_word(&self, addr: u16) -> u16 {
        self.memory.read_word(addr)
    }

    /// Writes `value` as a little-endian word at `addr`.
    pub fn poke_word(&mut self, addr: u16, value: u16) {
        self.memory.write_word(addr, value);
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Stack ==========

    /// Pushes a byte at `0x0100 + SP` and decrements SP.
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP and pulls the byte at `0x0100 + SP`.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes a word, high byte first.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(hi);
        self.push(lo);
    }

    /// Pulls a word pushed by `push_word`.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull();
        let hi = self.pull();
        u16::from_le_bytes([lo, hi])
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns true if every flag in `mask` is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{CPU, FlatMemory, Status};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.set_flag(Status::CARRY, true);
    ///
    /// assert!(cpu.flag(Status::CARRY));
    /// assert!(!cpu.flag(Status::CARRY | Status::ZERO));
    /// ```
    pub fn flag(&self, mask: Status) -> bool {
        self.status.contains(mask)
    }

    /// Returns the total number of CPU cycles executed since the last hard reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Register Setters ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces the whole status register.
    pub fn set_status(&mut self, value: Status) {
        self.status = value;
    }

    /// Sets or clears every flag in `mask`.
    pub fn set_flag(&mut self, mask: Status, value: bool) {
        self.status.set(mask, value);
    }
}
