//! Prints the raw bytes and disassembly of every opcode byte 0x00-0xFF.
//!
//! Each opcode is written at the origin with the operand bytes `ff ee`
//! following it, so the listing shows how every addressing mode renders.

use anyhow::{Context, Result};
use clap::Parser;
use emu6502::{FlatMemory, CPU};
use log::{debug, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Address (hex) the opcode is written to
    #[arg(short, long, default_value = "0400", value_parser = parse_address)]
    origin: u16,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn parse_address(text: &str) -> Result<u16> {
    let digits = text.trim_start_matches('$').trim_start_matches("0x");
    u16::from_str_radix(digits, 16).with_context(|| format!("invalid hex address: {}", text))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let origin = args.origin;
    info!("Dumping opcode table at ${:04x}", origin);

    let mut cpu = CPU::new(FlatMemory::new());
    cpu.hard_reset(origin);
    cpu.poke_word(origin.wrapping_add(1), 0xeeff);

    for opcode in 0..=0xFFu8 {
        cpu.poke_byte(origin, opcode);

        let (text, length) = cpu.disassemble(origin);
        debug!("opcode ${:02x} decodes to {} byte(s)", opcode, length);

        let bytes: Vec<String> = (0..length as u16)
            .map(|offset| format!("${:02x}", cpu.peek_byte(origin.wrapping_add(offset))))
            .collect();

        println!("{:<18}{}", format!("{}:", bytes.join(" ")), text);
    }

    Ok(())
}
