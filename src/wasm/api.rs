//! WASM API for the 6502 emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection,
//! disassembly and the monitor command line.

use crate::{disassembler, Command, FlatMemory, Status, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl<E: std::error::Error> From<E> for JsError {
    fn from(err: E) -> Self {
        JsError {
            message: err.to_string(),
        }
    }
}

/// One disassembled instruction, ready for display
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassembledLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
    length: u8,
}

#[wasm_bindgen]
impl DisassembledLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> u8 {
        self.length
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator {
    cpu: CPU<FlatMemory>,
}

#[wasm_bindgen]
impl Emulator {
    /// Create an emulator with cleared memory and PC at `reset_addr`
    #[wasm_bindgen(constructor)]
    pub fn new(reset_addr: u16) -> Self {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.hard_reset(reset_addr);
        Emulator { cpu }
    }

    /// Execute a single instruction and return its cycle cost
    pub fn step(&mut self) -> Result<u32, JsError> {
        Ok(self.cpu.step()?)
    }

    /// Execute instructions until at least `cycles` have elapsed
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<u32, JsError> {
        let elapsed = self.cpu.run_for_cycles(cycles as u64)?;
        Ok(elapsed as u32)
    }

    pub fn hard_reset(&mut self, reset_addr: u16) {
        self.cpu.hard_reset(reset_addr);
    }

    pub fn soft_reset(&mut self) {
        self.cpu.soft_reset();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status().bits()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // u64 has no JS number equivalent
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag(Status::NEGATIVE)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag(Status::OVERFLOW)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.cpu.flag(Status::BREAK)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag(Status::DECIMAL)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag(Status::INTERRUPT_DISABLE)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag(Status::ZERO)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag(Status::CARRY)
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    pub fn peek(&self, addr: u16) -> u8 {
        self.cpu.peek_byte(addr)
    }

    pub fn poke(&mut self, addr: u16, value: u8) {
        self.cpu.poke_byte(addr, value);
    }

    pub fn peek_word(&self, addr: u16) -> u16 {
        self.cpu.peek_word(addr)
    }

    /// Copy a 256-byte page out of memory (for efficient display)
    pub fn memory_page(&self, page: u8) -> js_sys::Uint8Array {
        let start = (page as usize) << 8;
        let bytes = &self.cpu.memory().as_slice()[start..start + 0x100];
        js_sys::Uint8Array::from(bytes)
    }

    /// Load a program into memory and point PC at it
    pub fn load_program(&mut self, start_addr: u16, program: &[u8]) {
        self.cpu.memory_mut().load(start_addr, program);
        self.cpu.set_pc(start_addr);
    }

    /// Disassemble the instruction at `addr`
    pub fn disassemble(&self, addr: u16) -> DisassembledLine {
        let instr = disassembler::decode(self.cpu.memory(), addr);
        let mut bytes = vec![instr.opcode];
        bytes.extend_from_slice(&instr.operand_bytes);

        DisassembledLine {
            address: addr,
            text: disassembler::formatter::format_instruction(&instr),
            length: instr.size_bytes,
            bytes,
        }
    }

    /// Run one monitor command line. Returns `true` when the command is `q`.
    pub fn execute_command(&mut self, line: &str) -> Result<bool, JsError> {
        let command: Command = line.parse()?;
        Ok(command.apply(&mut self.cpu))
    }
}
