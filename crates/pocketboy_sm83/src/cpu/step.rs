use crate::bus::Bus;
use crate::isa::{CB_PREFIX, NO_PREFIX};

use super::interrupts::{pending_mask, Interrupt};
use super::{ExecutionMode, IllegalOpcode, Sm83};

impl Sm83 {
    /// Execute a single instruction (or interrupt entry, or low-power
    /// idle cycle) and return the number of T-states consumed. The
    /// internal M-cycle/T-state counters advance by the same amount.
    ///
    /// Order of business: wake-up handling for HALT/STOP, interrupt
    /// dispatch, then fetch-decode-execute. An opcode that resolves to an
    /// empty table slot aborts with [`IllegalOpcode`]; the CPU is dead at
    /// that point and the error is not retryable.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, IllegalOpcode> {
        let start = self.t_states;

        match self.mode {
            ExecutionMode::Stopped => {
                // STOP is only left via the joypad line, which the bus
                // owns; from in here the CPU just burns idle cycles.
                self.add_mcycles(1);
                return Ok((self.t_states - start) as u32);
            }
            ExecutionMode::Halted => {
                // Any pending interrupt releases HALT, IME or not. With
                // IME clear the interrupt is not serviced, execution just
                // resumes.
                if pending_mask(bus) != 0 {
                    self.mode = ExecutionMode::Running;
                } else {
                    self.add_mcycles(1);
                    return Ok((self.t_states - start) as u32);
                }
            }
            ExecutionMode::Running => {}
        }

        if self.ime {
            if let Some(line) = Interrupt::highest_pending(bus) {
                self.service_interrupt(bus, line);
                return Ok((self.t_states - start) as u32);
            }
        }

        // EI takes effect one instruction late: remember whether it was
        // armed before this instruction so the enable lands after it.
        let ei_armed = self.ime_pending;

        let fetch_pc = self.regs.pc;
        let opcode = self.fetch8(bus);
        let (instr, cb_prefixed, opcode) = if opcode == 0xCB {
            let cb_opcode = self.fetch8(bus);
            (&CB_PREFIX[cb_opcode as usize], true, cb_opcode)
        } else {
            (&NO_PREFIX[opcode as usize], false, opcode)
        };

        let Some(op) = instr.op else {
            return Err(IllegalOpcode {
                opcode,
                cb_prefixed,
                pc: fetch_pc,
            });
        };

        log::trace!("execute {} ({} bytes)", instr.mnemonic, instr.length);
        op.execute(self, bus);
        self.add_mcycles(instr.mcycles as u64);

        // DI in the instruction we just ran cancels a pending enable.
        if ei_armed && self.ime_pending {
            self.ime = true;
            self.ime_pending = false;
        }

        Ok((self.t_states - start) as u32)
    }
}
