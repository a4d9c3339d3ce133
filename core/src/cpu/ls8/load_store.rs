use std::io;

use super::{ExecError, Ls8};

impl Ls8 {
    /// LDI (0x82). Register <- immediate.
    pub(crate) fn op_ldi(&mut self) {
        self.set_register(self.op_a, self.op_b);
    }

    /// LD (0x83). Register A <- memory at the address held in register B.
    pub(crate) fn op_ld(&mut self) {
        self.mar = self.register(self.op_b);
        self.ram_read();
        self.set_register(self.op_a, self.mdr);
    }

    /// ST (0x84). Memory at the address held in register A <- register B.
    pub(crate) fn op_st(&mut self) {
        self.mar = self.register(self.op_a);
        self.mdr = self.register(self.op_b);
        self.ram_write();
    }

    /// PRN (0x47). Decimal value of the register, newline-terminated.
    pub(crate) fn op_prn<W: io::Write>(&mut self, out: &mut W) -> Result<(), ExecError> {
        writeln!(out, "{}", self.register(self.op_a))?;
        Ok(())
    }

    /// PRA (0x48). The register's value as a character code point, no
    /// terminator.
    pub(crate) fn op_pra<W: io::Write>(&mut self, out: &mut W) -> Result<(), ExecError> {
        write!(out, "{}", self.register(self.op_a) as char)?;
        Ok(())
    }
}
