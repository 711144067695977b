use crate::bus::Bus;
use crate::cpu::Sm83;
use crate::isa::{AluOp, Operand8};
use crate::regs::{Flag, Reg16};

impl Sm83 {
    pub(crate) fn exec_alu8<B: Bus>(&mut self, bus: &mut B, op: AluOp, src: Operand8) {
        let rhs = self.read_operand8(bus, src);
        match op {
            AluOp::Add => self.alu_add(rhs, false),
            AluOp::Adc => self.alu_add(rhs, true),
            AluOp::Sub => self.alu_sub(rhs, false),
            AluOp::Sbc => self.alu_sub(rhs, true),
            AluOp::And => self.alu_and(rhs),
            AluOp::Xor => self.alu_xor(rhs),
            AluOp::Or => self.alu_or(rhs),
            AluOp::Cp => self.alu_cp(rhs),
        }
    }

    /// Shared body of ADD and ADC.
    ///
    /// The sum is widened to u16 before the flag checks; an ADC of 0xFF
    /// with carry-in set must still report H and C.
    fn alu_add(&mut self, rhs: u8, with_carry: bool) {
        let acc = self.regs.a;
        let cin = u8::from(with_carry && self.regs.is_set(Flag::C));

        let low_nibbles = (acc & 0x0F) + (rhs & 0x0F) + cin;
        let wide = u16::from(acc) + u16::from(rhs) + u16::from(cin);
        let out = wide as u8;

        self.regs.a = out;
        self.regs.assign(Flag::Z, out == 0);
        self.regs.clear(Flag::N);
        self.regs.assign(Flag::H, low_nibbles > 0x0F);
        self.regs.assign(Flag::C, wide > 0xFF);
    }

    /// Shared body of SUB and SBC. A borrow shows up as a negative
    /// signed intermediate, in the low nibble for H and in the full
    /// width for C.
    fn alu_sub(&mut self, rhs: u8, with_carry: bool) {
        let acc = self.regs.a;
        let cin = i16::from(with_carry && self.regs.is_set(Flag::C));

        let low_nibbles = i16::from(acc & 0x0F) - i16::from(rhs & 0x0F) - cin;
        let wide = i16::from(acc) - i16::from(rhs) - cin;
        let out = wide as u8;

        self.regs.a = out;
        self.regs.assign(Flag::Z, out == 0);
        self.regs.set(Flag::N);
        self.regs.assign(Flag::H, low_nibbles < 0);
        self.regs.assign(Flag::C, wide < 0);
    }

    fn alu_and(&mut self, rhs: u8) {
        let out = self.regs.a & rhs;
        self.regs.a = out;
        self.regs.assign(Flag::Z, out == 0);
        self.regs.clear(Flag::N);
        self.regs.set(Flag::H);
        self.regs.clear(Flag::C);
    }

    fn alu_xor(&mut self, rhs: u8) {
        let out = self.regs.a ^ rhs;
        self.regs.a = out;
        self.regs.assign(Flag::Z, out == 0);
        self.regs.clear(Flag::N);
        self.regs.clear(Flag::H);
        self.regs.clear(Flag::C);
    }

    fn alu_or(&mut self, rhs: u8) {
        let out = self.regs.a | rhs;
        self.regs.a = out;
        self.regs.assign(Flag::Z, out == 0);
        self.regs.clear(Flag::N);
        self.regs.clear(Flag::H);
        self.regs.clear(Flag::C);
    }

    /// Flags exactly as if `A - rhs` had run; A keeps its value.
    fn alu_cp(&mut self, rhs: u8) {
        let acc = self.regs.a;
        let low_nibbles = i16::from(acc & 0x0F) - i16::from(rhs & 0x0F);
        let wide = i16::from(acc) - i16::from(rhs);

        self.regs.assign(Flag::Z, wide as u8 == 0);
        self.regs.set(Flag::N);
        self.regs.assign(Flag::H, low_nibbles < 0);
        self.regs.assign(Flag::C, wide < 0);
    }

    /// `ADD HL, rr`: Z untouched, H from bit 11, C from bit 15.
    pub(crate) fn exec_add_hl(&mut self, reg: Reg16) {
        let hl = self.regs.hl();
        let rhs = self.regs.load16(reg);

        self.regs.clear(Flag::N);
        self.regs
            .assign(Flag::H, (hl & 0x0FFF) + (rhs & 0x0FFF) > 0x0FFF);
        self.regs
            .assign(Flag::C, u32::from(hl) + u32::from(rhs) > 0xFFFF);
        self.regs.set_hl(hl.wrapping_add(rhs));
    }

    pub(crate) fn exec_add_sp_offset<B: Bus>(&mut self, bus: &mut B) {
        let offset = self.fetch8(bus);
        self.regs.sp = self.add16_signed(self.regs.sp, offset);
    }

    /// 16-bit base plus signed 8-bit offset, shared by `ADD SP, e8` and
    /// `LD HL, SP + e8`. Z and N are cleared; H and C come from the low
    /// byte treated as an unsigned add.
    pub(crate) fn add16_signed(&mut self, base: u16, offset_byte: u8) -> u16 {
        let offset = offset_byte as i8 as i16 as u16;
        self.regs.clear(Flag::Z);
        self.regs.clear(Flag::N);
        self.regs
            .assign(Flag::H, (base & 0x000F) + (offset & 0x000F) > 0x000F);
        self.regs
            .assign(Flag::C, (base & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        base.wrapping_add(offset)
    }

    /// Fold A back into packed BCD after an 8-bit add or subtract.
    ///
    /// H and C pick the base correction; on the add path a digit
    /// overflow visible in A itself also counts. Subtraction only ever
    /// undoes what the flags recorded. N is not modified.
    pub(crate) fn exec_daa(&mut self) {
        let mut acc = self.regs.a;
        let mut correction: u8 = 0;
        if self.regs.is_set(Flag::H) {
            correction |= 0x06;
        }
        if self.regs.is_set(Flag::C) {
            correction |= 0x60;
        }

        if self.regs.is_set(Flag::N) {
            acc = acc.wrapping_sub(correction);
        } else {
            if acc & 0x0F > 0x09 {
                correction |= 0x06;
            }
            if acc > 0x99 {
                correction |= 0x60;
            }
            acc = acc.wrapping_add(correction);
        }

        self.regs.assign(Flag::C, correction & 0x60 != 0);
        self.regs.clear(Flag::H);
        self.regs.assign(Flag::Z, acc == 0);
        self.regs.a = acc;
    }

    pub(crate) fn exec_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.regs.set(Flag::N);
        self.regs.set(Flag::H);
    }

    pub(crate) fn exec_scf(&mut self) {
        self.regs.clear(Flag::N);
        self.regs.clear(Flag::H);
        self.regs.set(Flag::C);
    }

    pub(crate) fn exec_ccf(&mut self) {
        self.regs.clear(Flag::N);
        self.regs.clear(Flag::H);
        self.regs.toggle(Flag::C);
    }
}
