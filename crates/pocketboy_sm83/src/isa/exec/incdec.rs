use crate::bus::Bus;
use crate::cpu::Sm83;
use crate::isa::Operand8;
use crate::regs::{Flag, Reg16};

impl Sm83 {
    /// 8-bit increment, `INC r` / `INC [HL]`. C is untouched.
    pub(crate) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, operand: Operand8) {
        let value = self.read_operand8(bus, operand);
        let result = value.wrapping_add(1);
        self.regs.assign(Flag::Z, result == 0);
        self.regs.clear(Flag::N);
        self.regs.assign(Flag::H, (value & 0x0F) + 1 > 0x0F);
        self.write_operand8(bus, operand, result);
    }

    /// 8-bit decrement, `DEC r` / `DEC [HL]`. C is untouched.
    pub(crate) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, operand: Operand8) {
        let value = self.read_operand8(bus, operand);
        let result = value.wrapping_sub(1);
        self.regs.assign(Flag::Z, result == 0);
        self.regs.set(Flag::N);
        self.regs.assign(Flag::H, (value & 0x0F) == 0);
        self.write_operand8(bus, operand, result);
    }

    /// 16-bit increment. No flags.
    pub(crate) fn exec_inc16(&mut self, reg: Reg16) {
        let value = self.regs.load16(reg).wrapping_add(1);
        self.regs.store16(reg, value);
    }

    /// 16-bit decrement. No flags.
    pub(crate) fn exec_dec16(&mut self, reg: Reg16) {
        let value = self.regs.load16(reg).wrapping_sub(1);
        self.regs.store16(reg, value);
    }
}
