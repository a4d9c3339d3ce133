use super::{ExecError, Flag, Ls8};

/// Arithmetic/logic operations. Binary ops store into the first register;
/// unary ops ignore the second index. The enum is closed and matched
/// exhaustively, so an unhandled tag cannot exist at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AluOp {
    Inc,
    Dec,
    Not,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Cmp,
    And,
    Or,
    Xor,
    Shl,
    Shr,
}

impl Ls8 {
    /// Perform an ALU operation on the registers indexed by `a` and `b`.
    /// All results stay 8-bit via wrapping u8 arithmetic.
    pub(crate) fn alu(&mut self, op: AluOp, a: u8, b: u8) -> Result<(), ExecError> {
        let rb = self.register(b);
        match op {
            AluOp::Inc => self.update_register(a, |v| v.wrapping_add(1)),
            AluOp::Dec => self.update_register(a, |v| v.wrapping_sub(1)),
            AluOp::Not => self.update_register(a, |v| !v),
            AluOp::Add => self.update_register(a, |v| v.wrapping_add(rb)),
            AluOp::Sub => self.update_register(a, |v| v.wrapping_sub(rb)),
            AluOp::Mul => self.update_register(a, |v| v.wrapping_mul(rb)),
            AluOp::Div => {
                if rb == 0 {
                    return Err(ExecError::DivisionByZero { pc: self.pc });
                }
                self.update_register(a, |v| v / rb);
            }
            AluOp::Mod => {
                if rb == 0 {
                    return Err(ExecError::DivisionByZero { pc: self.pc });
                }
                self.update_register(a, |v| v % rb);
            }
            AluOp::Cmp => {
                let ra = self.register(a);
                self.set_flag(Flag::L, ra < rb);
                self.set_flag(Flag::G, ra > rb);
                self.set_flag(Flag::E, ra == rb);
            }
            AluOp::And => self.update_register(a, |v| v & rb),
            AluOp::Or => self.update_register(a, |v| v | rb),
            AluOp::Xor => self.update_register(a, |v| v ^ rb),
            // Shift counts of 8 or more clear the register.
            AluOp::Shl => self.update_register(a, |v| v.checked_shl(rb as u32).unwrap_or(0)),
            AluOp::Shr => self.update_register(a, |v| v.checked_shr(rb as u32).unwrap_or(0)),
        }
        Ok(())
    }
}
