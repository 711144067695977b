use crate::bus::Bus;
use crate::cpu::Sm83;
use crate::isa::{Operand8, RotOp, ShiftOp};
use crate::regs::Flag;

impl Sm83 {
    /// Rotates. `set_zero` distinguishes the CB-prefixed forms (Z from
    /// the result) from the one-byte A forms (Z forced to 0).
    pub(crate) fn exec_rotate<B: Bus>(
        &mut self,
        bus: &mut B,
        op: RotOp,
        operand: Operand8,
        set_zero: bool,
    ) {
        let value = self.read_operand8(bus, operand);
        let carry_in = self.regs.is_set(Flag::C);
        let (result, carry_out) = match op {
            RotOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            RotOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            RotOp::Rl => ((value << 1) | carry_in as u8, value & 0x80 != 0),
            RotOp::Rr => ((value >> 1) | ((carry_in as u8) << 7), value & 0x01 != 0),
        };
        self.write_operand8(bus, operand, result);

        self.regs.assign(Flag::Z, set_zero && result == 0);
        self.regs.clear(Flag::N);
        self.regs.clear(Flag::H);
        self.regs.assign(Flag::C, carry_out);
    }

    pub(crate) fn exec_shift<B: Bus>(&mut self, bus: &mut B, op: ShiftOp, operand: Operand8) {
        let value = self.read_operand8(bus, operand);
        let (result, carry_out) = match op {
            ShiftOp::Sla => (value << 1, value & 0x80 != 0),
            // Arithmetic right shift keeps the sign bit.
            ShiftOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            ShiftOp::Srl => (value >> 1, value & 0x01 != 0),
        };
        self.write_operand8(bus, operand, result);

        self.regs.assign(Flag::Z, result == 0);
        self.regs.clear(Flag::N);
        self.regs.clear(Flag::H);
        self.regs.assign(Flag::C, carry_out);
    }

    pub(crate) fn exec_swap<B: Bus>(&mut self, bus: &mut B, operand: Operand8) {
        let value = self.read_operand8(bus, operand);
        let result = (value << 4) | (value >> 4);
        self.write_operand8(bus, operand, result);

        self.regs.assign(Flag::Z, result == 0);
        self.regs.clear(Flag::N);
        self.regs.clear(Flag::H);
        self.regs.clear(Flag::C);
    }

    /// `BIT n, r`: Z mirrors the complement of the tested bit; C is
    /// untouched. Test-only, no write-back.
    pub(crate) fn exec_bit<B: Bus>(&mut self, bus: &mut B, bit: u8, operand: Operand8) {
        let value = self.read_operand8(bus, operand);
        self.regs.assign(Flag::Z, value & (1 << bit) == 0);
        self.regs.clear(Flag::N);
        self.regs.set(Flag::H);
    }

    pub(crate) fn exec_res<B: Bus>(&mut self, bus: &mut B, bit: u8, operand: Operand8) {
        let value = self.read_operand8(bus, operand);
        self.write_operand8(bus, operand, value & !(1 << bit));
    }

    pub(crate) fn exec_set<B: Bus>(&mut self, bus: &mut B, bit: u8, operand: Operand8) {
        let value = self.read_operand8(bus, operand);
        self.write_operand8(bus, operand, value | (1 << bit));
    }
}
