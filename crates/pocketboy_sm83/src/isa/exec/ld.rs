use crate::bus::Bus;
use crate::cpu::Sm83;
use crate::isa::Operand8;
use crate::regs::Reg16;

impl Sm83 {
    /// Generic 8-bit load. Covers every `LD`/`LDH` form with 8-bit
    /// operands, including the HL post-increment/decrement variants.
    pub(crate) fn exec_ld8<B: Bus>(&mut self, bus: &mut B, dst: Operand8, src: Operand8) {
        let value = self.read_operand8(bus, src);
        self.write_operand8(bus, dst, value);
    }

    pub(crate) fn exec_ld16_imm<B: Bus>(&mut self, bus: &mut B, dst: Reg16) {
        let value = self.fetch16(bus);
        self.regs.store16(dst, value);
    }

    pub(crate) fn exec_ld_sp_hl(&mut self) {
        self.regs.sp = self.regs.hl();
    }

    /// `LD HL, SP + e8`: HL receives the signed sum, flags come from the
    /// unsigned low-byte add.
    pub(crate) fn exec_ld_hl_sp_offset<B: Bus>(&mut self, bus: &mut B) {
        let imm = self.fetch8(bus);
        let result = self.add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
    }

    /// `LD [n16], SP`. SP is stored little-endian, low byte first; the
    /// externally visible write order is part of the contract.
    pub(crate) fn exec_ld_indir_imm16_sp<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        let sp = self.regs.sp;
        bus.write8(addr, sp as u8);
        bus.write8(addr.wrapping_add(1), (sp >> 8) as u8);
    }
}
