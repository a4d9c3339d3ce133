use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ember_core::cpu::Ls8;

mod loader;

/// Run a byte-code program on the LS-8 machine.
#[derive(Parser)]
#[command(name = "ember", version, about)]
struct Args {
    /// Program listing: one byte per line, binary (`10000010`) or hex
    /// (`0x82`) literals, `#` starts a comment
    program: PathBuf,

    /// Print a machine-state line to stderr before each instruction
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let program = loader::load_file(&args.program)?;
    let mut cpu = Ls8::new();
    cpu.load(&program);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.trace {
        while !cpu.halted {
            eprintln!("{}", trace_line(&cpu));
            cpu.step(&mut out)?;
        }
    } else {
        cpu.run(&mut out)?;
    }
    out.flush()?;
    Ok(())
}

/// One line of machine state: PC, the three bytes at PC, registers, flags.
fn trace_line(cpu: &Ls8) -> String {
    let mut line = format!(
        "PC {:02X} | {:02X} {:02X} {:02X} |",
        cpu.pc,
        cpu.ram[cpu.pc as usize],
        cpu.ram[cpu.pc.wrapping_add(1) as usize],
        cpu.ram[cpu.pc.wrapping_add(2) as usize],
    );
    for v in cpu.r {
        line.push_str(&format!(" {v:02X}"));
    }
    line.push_str(&format!(" | FL {:02X}", cpu.fl));
    line
}
