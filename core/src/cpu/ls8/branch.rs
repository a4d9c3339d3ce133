use super::{Flag, Ls8};

impl Ls8 {
    /// Jump to the register's value when the condition holds; otherwise the
    /// dispatcher's auto-advance applies.
    fn branch_if(&mut self, condition: bool) {
        if condition {
            let target = self.register(self.op_a);
            self.jump(target);
        }
    }

    /// JMP (0x54). Unconditional.
    pub(crate) fn op_jmp(&mut self) {
        self.branch_if(true);
    }

    /// JEQ (0x55). Taken when E is set.
    pub(crate) fn op_jeq(&mut self) {
        self.branch_if(self.flag(Flag::E));
    }

    /// JNE (0x56). Taken when E is clear.
    pub(crate) fn op_jne(&mut self) {
        self.branch_if(!self.flag(Flag::E));
    }

    /// JGT (0x57). Taken when G is set.
    pub(crate) fn op_jgt(&mut self) {
        self.branch_if(self.flag(Flag::G));
    }

    /// JLT (0x58). Taken when L is set.
    pub(crate) fn op_jlt(&mut self) {
        self.branch_if(self.flag(Flag::L));
    }

    /// JLE (0x59). Taken when L or E is set.
    pub(crate) fn op_jle(&mut self) {
        self.branch_if(self.flag(Flag::L) || self.flag(Flag::E));
    }

    /// JGE (0x5A). Taken when G or E is set.
    pub(crate) fn op_jge(&mut self) {
        self.branch_if(self.flag(Flag::G) || self.flag(Flag::E));
    }
}
