//! Executor dispatch: one function per logical operation, fed by the
//! addressing-mode data in [`Op`].

mod alu;
mod bits;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Op, Operand8};
use crate::bus::Bus;
use crate::cpu::Sm83;

impl Op {
    /// Run the operation against the CPU state.
    ///
    /// Executors are infallible: they read their immediates via PC,
    /// perform their side effects, update flags, and add any
    /// conditional-branch cycle surcharge before returning.
    pub(crate) fn execute<B: Bus>(self, cpu: &mut Sm83, bus: &mut B) {
        match self {
            Op::Nop => {}
            Op::Ld8 { dst, src } => cpu.exec_ld8(bus, dst, src),
            Op::Ld16Imm(reg) => cpu.exec_ld16_imm(bus, reg),
            Op::LdSpHl => cpu.exec_ld_sp_hl(),
            Op::LdHlSpOffset => cpu.exec_ld_hl_sp_offset(bus),
            Op::LdIndirImm16Sp => cpu.exec_ld_indir_imm16_sp(bus),
            Op::Push(reg) => cpu.exec_push(bus, reg),
            Op::Pop(reg) => cpu.exec_pop(bus, reg),
            Op::Alu8 { op, src } => cpu.exec_alu8(bus, op, src),
            Op::Inc8(operand) => cpu.exec_inc8(bus, operand),
            Op::Dec8(operand) => cpu.exec_dec8(bus, operand),
            Op::Inc16(reg) => cpu.exec_inc16(reg),
            Op::Dec16(reg) => cpu.exec_dec16(reg),
            Op::AddHl(reg) => cpu.exec_add_hl(reg),
            Op::AddSpOffset => cpu.exec_add_sp_offset(bus),
            Op::Daa => cpu.exec_daa(),
            Op::Cpl => cpu.exec_cpl(),
            Op::Scf => cpu.exec_scf(),
            Op::Ccf => cpu.exec_ccf(),
            Op::Rotate {
                op,
                operand,
                set_zero,
            } => cpu.exec_rotate(bus, op, operand, set_zero),
            Op::Shift { op, operand } => cpu.exec_shift(bus, op, operand),
            Op::Swap(operand) => cpu.exec_swap(bus, operand),
            Op::Bit(bit, operand) => cpu.exec_bit(bus, bit, operand),
            Op::Res(bit, operand) => cpu.exec_res(bus, bit, operand),
            Op::Set(bit, operand) => cpu.exec_set(bus, bit, operand),
            Op::Jp(cond) => cpu.exec_jp(bus, cond),
            Op::JpHl => cpu.exec_jp_hl(),
            Op::Jr(cond) => cpu.exec_jr(bus, cond),
            Op::Call(cond) => cpu.exec_call(bus, cond),
            Op::Ret(cond) => cpu.exec_ret(bus, cond),
            Op::Reti => cpu.exec_reti(bus),
            Op::Rst(vec) => cpu.exec_rst(bus, vec),
            Op::Halt => cpu.exec_halt(),
            Op::Stop => cpu.exec_stop(bus),
            Op::Di => cpu.exec_di(),
            Op::Ei => cpu.exec_ei(),
        }
    }
}

impl Sm83 {
    /// Resolve an 8-bit operand for reading. Immediate-bearing modes
    /// advance PC.
    pub(crate) fn read_operand8<B: Bus>(&mut self, bus: &mut B, operand: Operand8) -> u8 {
        match operand {
            Operand8::Reg(reg) => self.regs.load8(reg),
            Operand8::IndirHL => self.regs.load_indir_hl(bus),
            Operand8::IndirHramC => self.regs.load_hram_c(bus),
            Operand8::Imm8 => self.fetch8(bus),
            Operand8::HramImm8 => {
                let offset = self.fetch8(bus);
                bus.read8(0xFF00 | offset as u16)
            }
            Operand8::IndirImm16 => {
                let addr = self.fetch16(bus);
                bus.read8(addr)
            }
            Operand8::Indir(reg) => self.regs.load_indir(bus, reg),
        }
    }

    /// Resolve an 8-bit operand for writing. Immediate-bearing address
    /// modes advance PC.
    pub(crate) fn write_operand8<B: Bus>(&mut self, bus: &mut B, operand: Operand8, value: u8) {
        match operand {
            Operand8::Reg(reg) => self.regs.store8(reg, value),
            Operand8::IndirHL => self.regs.store_indir_hl(bus, value),
            Operand8::IndirHramC => self.regs.store_hram_c(bus, value),
            // The tables never wire an immediate up as a destination.
            Operand8::Imm8 => unreachable!("imm8 is not a store destination"),
            Operand8::HramImm8 => {
                let offset = self.fetch8(bus);
                bus.write8(0xFF00 | offset as u16, value)
            }
            Operand8::IndirImm16 => {
                let addr = self.fetch16(bus);
                bus.write8(addr, value)
            }
            Operand8::Indir(reg) => self.regs.store_indir(bus, reg, value),
        }
    }
}
