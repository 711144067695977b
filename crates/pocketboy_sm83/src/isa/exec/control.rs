use crate::bus::Bus;
use crate::cpu::Sm83;
use crate::regs::Cond;

impl Sm83 {
    /// `JP n16` / `JP cc, n16`. A taken conditional jump costs one extra
    /// M-cycle on top of the table entry.
    pub(crate) fn exec_jp<B: Bus>(&mut self, bus: &mut B, cond: Option<Cond>) {
        let addr = self.fetch16(bus);
        if cond.map_or(true, |c| self.regs.cond(c)) {
            self.regs.pc = addr;
            if cond.is_some() {
                self.add_mcycles(1);
            }
        }
    }

    pub(crate) fn exec_jp_hl(&mut self) {
        self.regs.pc = self.regs.hl();
    }

    /// `JR e8` / `JR cc, e8`. The displacement is signed and relative to
    /// the address after the operand byte.
    pub(crate) fn exec_jr<B: Bus>(&mut self, bus: &mut B, cond: Option<Cond>) {
        let offset = self.fetch8(bus) as i8;
        if cond.map_or(true, |c| self.regs.cond(c)) {
            self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
            if cond.is_some() {
                self.add_mcycles(1);
            }
        }
    }

    /// `CALL n16` / `CALL cc, n16`. A taken conditional call costs three
    /// extra M-cycles.
    pub(crate) fn exec_call<B: Bus>(&mut self, bus: &mut B, cond: Option<Cond>) {
        let addr = self.fetch16(bus);
        if cond.map_or(true, |c| self.regs.cond(c)) {
            let ret = self.regs.pc;
            self.push16(bus, ret);
            self.regs.pc = addr;
            if cond.is_some() {
                self.add_mcycles(3);
            }
        }
    }

    /// `RET` / `RET cc`. A taken conditional return costs three extra
    /// M-cycles.
    pub(crate) fn exec_ret<B: Bus>(&mut self, bus: &mut B, cond: Option<Cond>) {
        match cond {
            None => self.regs.pc = self.pop16(bus),
            Some(c) => {
                if self.regs.cond(c) {
                    self.regs.pc = self.pop16(bus);
                    self.add_mcycles(3);
                }
            }
        }
    }

    /// `RETI`: return and enable IME immediately (no EI-style delay).
    pub(crate) fn exec_reti<B: Bus>(&mut self, bus: &mut B) {
        self.regs.pc = self.pop16(bus);
        self.ime = true;
    }

    pub(crate) fn exec_rst<B: Bus>(&mut self, bus: &mut B, vec: u8) {
        let ret = self.regs.pc;
        self.push16(bus, ret);
        self.regs.pc = vec as u16;
    }
}
