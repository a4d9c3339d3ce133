use ember_core::cpu::Ls8;

/// Build a machine with `program` loaded at address 0.
pub fn machine(program: &[u8]) -> Ls8 {
    let mut cpu = Ls8::new();
    cpu.load(program);
    cpu
}

/// Step the CPU `n` times, returning anything written to the output channel.
pub fn step_n(cpu: &mut Ls8, n: usize) -> Vec<u8> {
    let mut out = Vec::new();
    for _ in 0..n {
        cpu.step(&mut out).expect("step failed");
    }
    out
}

/// Run to HLT, returning the captured output.
#[allow(dead_code)]
pub fn run_to_halt(cpu: &mut Ls8) -> Vec<u8> {
    let mut out = Vec::new();
    cpu.run(&mut out).expect("run failed");
    out
}
