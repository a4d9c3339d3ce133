use std::collections::BTreeSet;

use ember_core::cpu::Ls8;
use serde::{Deserialize, Serialize};

// --- JSON test vector types ---

/// A single-instruction test vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub initial: CpuState,
    #[serde(rename = "final")]
    pub final_state: CpuState,
    /// Bytes the instruction wrote to the output channel (PRN/PRA).
    #[serde(default)]
    pub output: Vec<u8>,
}

/// Machine state as stored in vector files; `ram` is sparse (addr, value)
/// pairs covering every cell the instruction could have touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuState {
    pub pc: u8,
    pub fl: u8,
    pub r: [u8; 8],
    pub ram: Vec<(u8, u8)>,
}

/// Build a machine in the given state; unlisted RAM cells are zero.
pub fn apply_state(s: &CpuState) -> Ls8 {
    let mut cpu = Ls8::new();
    cpu.pc = s.pc;
    cpu.fl = s.fl;
    cpu.r = s.r;
    for &(addr, val) in &s.ram {
        cpu.ram[addr as usize] = val;
    }
    cpu
}

/// Capture machine state over the given address set.
pub fn capture_state(cpu: &Ls8, addresses: &BTreeSet<u8>) -> CpuState {
    CpuState {
        pc: cpu.pc,
        fl: cpu.fl,
        r: cpu.r,
        ram: addresses
            .iter()
            .map(|&addr| (addr, cpu.ram[addr as usize]))
            .collect(),
    }
}

/// Every cell a single instruction at `pc` could read or write: the three
/// fetched bytes, any register-addressed cell, and the stack window around
/// SP (one push slot below, nine pop slots above for IRET).
pub fn touchable_addresses(cpu: &Ls8) -> BTreeSet<u8> {
    let mut addrs = BTreeSet::new();
    for i in 0..3 {
        addrs.insert(cpu.pc.wrapping_add(i));
    }
    for &v in &cpu.r {
        addrs.insert(v);
    }
    let below = cpu.sp().wrapping_sub(1);
    for off in 0..10 {
        addrs.insert(below.wrapping_add(off));
    }
    addrs
}
