use crate::bus::Bus;
use crate::cpu::{ExecutionMode, Sm83};

impl Sm83 {
    pub(crate) fn exec_halt(&mut self) {
        self.mode = ExecutionMode::Halted;
    }

    /// STOP is a 2-byte instruction; the second byte is padding and
    /// usually zero. It is fetched and discarded so PC matches hardware.
    pub(crate) fn exec_stop<B: Bus>(&mut self, bus: &mut B) {
        let _padding = self.fetch8(bus);
        self.mode = ExecutionMode::Stopped;
    }

    pub(crate) fn exec_di(&mut self) {
        self.ime = false;
        self.ime_pending = false;
    }

    /// IME becomes 1 only after the *next* instruction completes.
    pub(crate) fn exec_ei(&mut self) {
        self.ime_pending = true;
    }
}
