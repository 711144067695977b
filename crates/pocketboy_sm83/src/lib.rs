//! SM83 CPU core for the Game Boy DMG.
//!
//! The Game Boy's CPU is an 8-bit SHARP design usually called the SM83.
//! It borrows heavily from the Intel 8080 and Zilog Z80 but is its own
//! architecture: a CISC variable-length instruction set (1-3 bytes, with a
//! `0xCB` prefix byte selecting a second table of bit-manipulation
//! opcodes), an 8080-style register file, and memory-mapped IO.
//!
//! This crate implements the instruction-processing core only: the
//! register file, the two 256-entry instruction tables with per-opcode
//! M-cycle costs, the fetch-decode-execute step loop, and the interrupt
//! entry sequence. Everything else on the SoC (PPU, APU, timers, cartridge
//! mappers) lives behind the [`Bus`] trait and is the concern of the
//! machine crates built on top of this one.

pub mod bus;
pub mod cpu;
pub mod isa;
pub mod regs;

pub use bus::{Bus, IoReg};
pub use cpu::interrupts::{clear_interrupt, is_interrupt_pending, request_interrupt, Interrupt};
pub use cpu::{ExecutionMode, IllegalOpcode, Sm83};
pub use isa::{Instruction, CB_PREFIX, NO_PREFIX};
pub use regs::{Cond, Flag, Reg16, Reg16Indir, Reg16Stack, Reg8, Registers};
