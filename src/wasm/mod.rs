//! WebAssembly bindings for the emu6502 core.
//!
//! Exposes a single [`Emulator`] to JavaScript: stepping, reset, memory
//! inspection, disassembly and monitor commands.

pub mod api;

pub use api::{DisassembledLine, Emulator, JsError};
