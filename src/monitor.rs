//! # Monitor Commands
//!
//! Text commands that poke at a running machine from a debugger console:
//!
//! ```text
//! sm <address> <value>           set one memory byte
//! sb <address> <count> <value>   fill a block of memory
//! sr <reg> <value>               set A, X or Y
//! ps <value>                     push a byte onto the stack
//! q                              quit
//! ```
//!
//! Numbers are hexadecimal with an optional `$` or `0x` prefix. Parsing yields
//! a typed [`Command`]; applying it goes through the CPU's public accessors
//! only.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{MemoryBus, CPU, STACK_BASE};

/// Registers the `sr` command may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    A,
    X,
    Y,
}

impl FromStr for Register {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" => Ok(Register::A),
            "x" => Ok(Register::X),
            "y" => Ok(Register::Y),
            _ => Err(CommandError::InvalidRegister(s.to_string())),
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Register::A => "A",
            Register::X => "X",
            Register::Y => "Y",
        };
        f.write_str(name)
    }
}

/// A parsed monitor command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetMemory { address: u16, value: u8 },
    SetBlock { address: u16, count: u16, value: u8 },
    SetRegister { register: Register, value: u8 },
    PushStack { value: u8 },
    Quit,
}

/// Errors produced while parsing a monitor command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("not enough arguments: {usage}")]
    MissingArgument { usage: &'static str },

    #[error("too many arguments: {usage}")]
    TooManyArguments { usage: &'static str },

    #[error("invalid {bits}-bit hex number: {text}")]
    InvalidNumber { text: String, bits: u32 },

    #[error("invalid register: {0}")]
    InvalidRegister(String),
}

const SET_MEMORY_USAGE: &str = "Set Memory:   sm <address> <value>";
const SET_BLOCK_USAGE: &str = "Set Block:    sb <address> <count> <value>";
const SET_REGISTER_USAGE: &str = "Set Register: sr <reg> <value>";
const PUSH_STACK_USAGE: &str = "Push Stack:   ps <value>";
const QUIT_USAGE: &str = "Quit:         q";

/// Help lines for every command, in display order.
pub const USAGE: [&str; 5] = [
    SET_MEMORY_USAGE,
    SET_BLOCK_USAGE,
    SET_REGISTER_USAGE,
    PUSH_STACK_USAGE,
    QUIT_USAGE,
];

impl Command {
    /// Help line for this command.
    pub fn usage(&self) -> &'static str {
        match self {
            Command::SetMemory { .. } => SET_MEMORY_USAGE,
            Command::SetBlock { .. } => SET_BLOCK_USAGE,
            Command::SetRegister { .. } => SET_REGISTER_USAGE,
            Command::PushStack { .. } => PUSH_STACK_USAGE,
            Command::Quit => QUIT_USAGE,
        }
    }

    /// Applies the command to `cpu`. Returns `true` when the command asks the
    /// console to quit.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{Command, FlatMemory, CPU};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.hard_reset(0x8000);
    ///
    /// let cmd: Command = "sm $0200 7f".parse().unwrap();
    /// assert!(!cmd.apply(&mut cpu));
    /// assert_eq!(cpu.peek_byte(0x0200), 0x7F);
    ///
    /// assert!("q".parse::<Command>().unwrap().apply(&mut cpu));
    /// ```
    pub fn apply<M: MemoryBus>(&self, cpu: &mut CPU<M>) -> bool {
        match *self {
            Command::SetMemory { address, value } => cpu.poke_byte(address, value),
            Command::SetBlock {
                address,
                count,
                value,
            } => {
                for offset in 0..count {
                    cpu.poke_byte(address.wrapping_add(offset), value);
                }
            }
            Command::SetRegister { register, value } => match register {
                Register::A => cpu.set_a(value),
                Register::X => cpu.set_x(value),
                Register::Y => cpu.set_y(value),
            },
            Command::PushStack { value } => {
                let sp = cpu.sp();
                cpu.poke_byte(STACK_BASE + sp as u16, value);
                cpu.set_sp(sp.wrapping_sub(1));
            }
            Command::Quit => return true,
        }

        false
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or(CommandError::Empty)?;
        let mut args = Args {
            parts,
            usage: QUIT_USAGE,
        };

        let command = match name {
            "q" => Command::Quit,
            "sm" => {
                args.usage = SET_MEMORY_USAGE;
                Command::SetMemory {
                    address: args.word()?,
                    value: args.byte()?,
                }
            }
            "sb" => {
                args.usage = SET_BLOCK_USAGE;
                Command::SetBlock {
                    address: args.word()?,
                    count: args.word()?,
                    value: args.byte()?,
                }
            }
            "sr" => {
                args.usage = SET_REGISTER_USAGE;
                Command::SetRegister {
                    register: args.next()?.parse()?,
                    value: args.byte()?,
                }
            }
            "ps" => {
                args.usage = PUSH_STACK_USAGE;
                Command::PushStack {
                    value: args.byte()?,
                }
            }
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        args.finish()?;
        Ok(command)
    }
}

/// Argument cursor for one command line.
struct Args<'a, I: Iterator<Item = &'a str>> {
    parts: I,
    usage: &'static str,
}

impl<'a, I: Iterator<Item = &'a str>> Args<'a, I> {
    fn next(&mut self) -> Result<&'a str, CommandError> {
        self.parts.next().ok_or(CommandError::MissingArgument { usage: self.usage })
    }

    fn byte(&mut self) -> Result<u8, CommandError> {
        let text = self.next()?;
        let value = parse_hex(text, 8)?;
        Ok(value as u8)
    }

    fn word(&mut self) -> Result<u16, CommandError> {
        let text = self.next()?;
        let value = parse_hex(text, 16)?;
        Ok(value as u16)
    }

    fn finish(mut self) -> Result<(), CommandError> {
        match self.parts.next() {
            Some(_) => Err(CommandError::TooManyArguments { usage: self.usage }),
            None => Ok(()),
        }
    }
}

/// Parses a hex number that must fit in `bits` bits.
fn parse_hex(text: &str, bits: u32) -> Result<u32, CommandError> {
    let invalid = || CommandError::InvalidNumber {
        text: text.to_string(),
        bits,
    };

    let digits = text
        .strip_prefix('$')
        .or_else(|| text.strip_prefix("0x"))
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    if value >> bits != 0 {
        return Err(invalid());
    }

    Ok(value)
}
