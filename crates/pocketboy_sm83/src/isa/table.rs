//! Construction of the two 256-entry dispatch tables.
//!
//! Both tables are built once on first use and are immutable afterwards;
//! any number of CPU instances share them read-only. The regular opcode
//! blocks (the `LD r, r'` quadrant, the ALU quadrant, the whole CB table)
//! follow the hardware operand order `B C D E H L [HL] A` and are
//! generated by loops; the irregular opcodes get explicit entries.

use once_cell::sync::Lazy;

use super::{AluOp, Instruction, Op, Operand8, RotOp, ShiftOp};
use crate::regs::{Cond, Reg16, Reg16Indir, Reg16Stack, Reg8};

/// Operand order used by the regular opcode blocks.
const OPERANDS: [Operand8; 8] = [
    Operand8::Reg(Reg8::B),
    Operand8::Reg(Reg8::C),
    Operand8::Reg(Reg8::D),
    Operand8::Reg(Reg8::E),
    Operand8::Reg(Reg8::H),
    Operand8::Reg(Reg8::L),
    Operand8::IndirHL,
    Operand8::Reg(Reg8::A),
];

const OPERAND_NAMES: [&str; 8] = ["B", "C", "D", "E", "H", "L", "[HL]", "A"];

const CONDS: [(Cond, &str); 4] = [
    (Cond::NZ, "NZ"),
    (Cond::Z, "Z"),
    (Cond::NC, "NC"),
    (Cond::C, "C"),
];

/// Unprefixed instruction table, indexed by the opcode byte.
///
/// The slot for `0xCB` stays empty: the prefix byte is consumed by the
/// fetch loop before any table lookup. The remaining 11 empty slots are
/// the hardware's illegal opcodes.
pub static NO_PREFIX: Lazy<[Instruction; 256]> = Lazy::new(new_no_prefix_table);

/// CB-prefixed instruction table, indexed by the byte after the prefix.
/// All 256 slots are defined.
pub static CB_PREFIX: Lazy<[Instruction; 256]> = Lazy::new(new_cb_prefix_table);

fn new_no_prefix_table() -> [Instruction; 256] {
    let mut instr: [Instruction; 256] = std::array::from_fn(|_| Instruction::illegal());

    instr[0x00] = Instruction::new("NOP", 1, 1, Op::Nop);
    instr[0x10] = Instruction::new("STOP", 2, 1, Op::Stop);
    instr[0x76] = Instruction::new("HALT", 1, 1, Op::Halt);
    instr[0xF3] = Instruction::new("DI", 1, 1, Op::Di);
    instr[0xFB] = Instruction::new("EI", 1, 1, Op::Ei);

    // 16-bit loads, INC/DEC and ADD HL over the BC/DE/HL/SP row.
    let pairs: [(Reg16, &str); 4] = [
        (Reg16::BC, "BC"),
        (Reg16::DE, "DE"),
        (Reg16::HL, "HL"),
        (Reg16::SP, "SP"),
    ];
    for (i, (reg, name)) in pairs.into_iter().enumerate() {
        let base = (i as u8) << 4;
        instr[usize::from(base | 0x01)] =
            Instruction::new(format!("LD {name}, n16"), 3, 3, Op::Ld16Imm(reg));
        instr[usize::from(base | 0x03)] =
            Instruction::new(format!("INC {name}"), 1, 2, Op::Inc16(reg));
        instr[usize::from(base | 0x0B)] =
            Instruction::new(format!("DEC {name}"), 1, 2, Op::Dec16(reg));
        instr[usize::from(base | 0x09)] =
            Instruction::new(format!("ADD HL, {name}"), 1, 2, Op::AddHl(reg));
    }

    // A transfers through the BC/DE/HL+/HL- indirections.
    let indirs: [(Reg16Indir, &str); 4] = [
        (Reg16Indir::BC, "[BC]"),
        (Reg16Indir::DE, "[DE]"),
        (Reg16Indir::HLI, "[HL+]"),
        (Reg16Indir::HLD, "[HL-]"),
    ];
    for (i, (reg, name)) in indirs.into_iter().enumerate() {
        let base = (i as u8) << 4;
        instr[usize::from(base | 0x02)] = Instruction::new(
            format!("LD {name}, A"),
            1,
            2,
            Op::Ld8 {
                dst: Operand8::Indir(reg),
                src: Operand8::Reg(Reg8::A),
            },
        );
        instr[usize::from(base | 0x0A)] = Instruction::new(
            format!("LD A, {name}"),
            1,
            2,
            Op::Ld8 {
                dst: Operand8::Reg(Reg8::A),
                src: Operand8::Indir(reg),
            },
        );
    }

    // INC r / DEC r / LD r, n8 over the B..A column, (HL) included.
    for (i, (operand, name)) in OPERANDS.into_iter().zip(OPERAND_NAMES).enumerate() {
        let mem = i == 6;
        instr[0x04 + i * 8] = Instruction::new(
            format!("INC {name}"),
            1,
            if mem { 3 } else { 1 },
            Op::Inc8(operand),
        );
        instr[0x05 + i * 8] = Instruction::new(
            format!("DEC {name}"),
            1,
            if mem { 3 } else { 1 },
            Op::Dec8(operand),
        );
        instr[0x06 + i * 8] = Instruction::new(
            format!("LD {name}, n8"),
            2,
            if mem { 3 } else { 2 },
            Op::Ld8 {
                dst: operand,
                src: Operand8::Imm8,
            },
        );
    }

    // Short-form A rotates. Unlike their CB cousins these force Z to 0.
    let a = Operand8::Reg(Reg8::A);
    for (opcode, name, op) in [
        (0x07usize, "RLCA", RotOp::Rlc),
        (0x0F, "RRCA", RotOp::Rrc),
        (0x17, "RLA", RotOp::Rl),
        (0x1F, "RRA", RotOp::Rr),
    ] {
        instr[opcode] = Instruction::new(
            name,
            1,
            1,
            Op::Rotate {
                op,
                operand: a,
                set_zero: false,
            },
        );
    }

    instr[0x08] = Instruction::new("LD [n16], SP", 3, 5, Op::LdIndirImm16Sp);
    instr[0x27] = Instruction::new("DAA", 1, 1, Op::Daa);
    instr[0x2F] = Instruction::new("CPL", 1, 1, Op::Cpl);
    instr[0x37] = Instruction::new("SCF", 1, 1, Op::Scf);
    instr[0x3F] = Instruction::new("CCF", 1, 1, Op::Ccf);

    // LD r, r' quadrant. 0x76 would be LD [HL], [HL] and is HALT instead.
    for opcode in 0x40usize..=0x7F {
        if opcode == 0x76 {
            continue;
        }
        let dst = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        instr[opcode] = Instruction::new(
            format!("LD {}, {}", OPERAND_NAMES[dst], OPERAND_NAMES[src]),
            1,
            if dst == 6 || src == 6 { 2 } else { 1 },
            Op::Ld8 {
                dst: OPERANDS[dst],
                src: OPERANDS[src],
            },
        );
    }

    // ALU quadrant plus the matching immediate forms in the 0xC6..0xFE
    // column.
    let alu_ops: [(AluOp, &str); 8] = [
        (AluOp::Add, "ADD A"),
        (AluOp::Adc, "ADC A"),
        (AluOp::Sub, "SUB A"),
        (AluOp::Sbc, "SBC A"),
        (AluOp::And, "AND A"),
        (AluOp::Xor, "XOR A"),
        (AluOp::Or, "OR A"),
        (AluOp::Cp, "CP A"),
    ];
    for (i, (op, name)) in alu_ops.into_iter().enumerate() {
        for (z, (operand, operand_name)) in OPERANDS.into_iter().zip(OPERAND_NAMES).enumerate() {
            instr[0x80 + i * 8 + z] = Instruction::new(
                format!("{name}, {operand_name}"),
                1,
                if z == 6 { 2 } else { 1 },
                Op::Alu8 { op, src: operand },
            );
        }
        instr[0xC6 + i * 8] = Instruction::new(
            format!("{name}, n8"),
            2,
            2,
            Op::Alu8 {
                op,
                src: Operand8::Imm8,
            },
        );
    }

    // Unconditional control flow.
    instr[0x18] = Instruction::new("JR e8", 2, 3, Op::Jr(None));
    instr[0xC3] = Instruction::new("JP n16", 3, 4, Op::Jp(None));
    instr[0xC9] = Instruction::new("RET", 1, 4, Op::Ret(None));
    instr[0xCD] = Instruction::new("CALL n16", 3, 6, Op::Call(None));
    instr[0xD9] = Instruction::new("RETI", 1, 4, Op::Reti);
    instr[0xE9] = Instruction::new("JP HL", 1, 1, Op::JpHl);

    // Conditional control flow. Table costs are the not-taken costs; the
    // executors charge the taken surcharge.
    for (i, (cond, name)) in CONDS.into_iter().enumerate() {
        let i = i * 8;
        instr[0x20 + i] = Instruction::new(format!("JR {name}, e8"), 2, 2, Op::Jr(Some(cond)));
        instr[0xC0 + i] = Instruction::new(format!("RET {name}"), 1, 2, Op::Ret(Some(cond)));
        instr[0xC2 + i] = Instruction::new(format!("JP {name}, n16"), 3, 3, Op::Jp(Some(cond)));
        instr[0xC4 + i] = Instruction::new(format!("CALL {name}, n16"), 3, 3, Op::Call(Some(cond)));
    }

    // RST vectors 0x00..0x38.
    for i in 0..8usize {
        let opcode = 0xC7 + i * 8;
        let vec = (opcode & 0x38) as u8;
        instr[opcode] = Instruction::new(format!("RST ${vec:02X}"), 1, 4, Op::Rst(vec));
    }

    // PUSH/POP, the only place AF is addressable.
    let stack_pairs: [(Reg16Stack, &str); 4] = [
        (Reg16Stack::BC, "BC"),
        (Reg16Stack::DE, "DE"),
        (Reg16Stack::HL, "HL"),
        (Reg16Stack::AF, "AF"),
    ];
    for (i, (reg, name)) in stack_pairs.into_iter().enumerate() {
        let base = 0xC0 + (i << 4);
        instr[base | 0x05] = Instruction::new(format!("PUSH {name}"), 1, 4, Op::Push(reg));
        instr[base | 0x01] = Instruction::new(format!("POP {name}"), 1, 3, Op::Pop(reg));
    }

    // HRAM short forms and the absolute A transfers.
    instr[0xE0] = Instruction::new(
        "LDH [n8], A",
        2,
        3,
        Op::Ld8 {
            dst: Operand8::HramImm8,
            src: a,
        },
    );
    instr[0xF0] = Instruction::new(
        "LDH A, [n8]",
        2,
        3,
        Op::Ld8 {
            dst: a,
            src: Operand8::HramImm8,
        },
    );
    instr[0xE2] = Instruction::new(
        "LDH [C], A",
        1,
        2,
        Op::Ld8 {
            dst: Operand8::IndirHramC,
            src: a,
        },
    );
    instr[0xF2] = Instruction::new(
        "LDH A, [C]",
        1,
        2,
        Op::Ld8 {
            dst: a,
            src: Operand8::IndirHramC,
        },
    );
    instr[0xEA] = Instruction::new(
        "LD [n16], A",
        3,
        4,
        Op::Ld8 {
            dst: Operand8::IndirImm16,
            src: a,
        },
    );
    instr[0xFA] = Instruction::new(
        "LD A, [n16]",
        3,
        4,
        Op::Ld8 {
            dst: a,
            src: Operand8::IndirImm16,
        },
    );

    // SP arithmetic.
    instr[0xE8] = Instruction::new("ADD SP, e8", 2, 4, Op::AddSpOffset);
    instr[0xF8] = Instruction::new("LD HL, SP + e8", 2, 3, Op::LdHlSpOffset);
    instr[0xF9] = Instruction::new("LD SP, HL", 1, 2, Op::LdSpHl);

    instr
}

fn new_cb_prefix_table() -> [Instruction; 256] {
    let mut instr: [Instruction; 256] = std::array::from_fn(|_| Instruction::illegal());

    for opcode in 0..=0xFFusize {
        let y = ((opcode >> 3) & 0x07) as u8;
        let z = opcode & 0x07;
        let operand = OPERANDS[z];
        let name = OPERAND_NAMES[z];
        let mem = z == 6;

        instr[opcode] = match opcode >> 6 {
            0 => {
                let mcycles = if mem { 4 } else { 2 };
                let rotate = |mnemonic: &str, op: RotOp| {
                    Instruction::new(
                        format!("{mnemonic} {name}"),
                        2,
                        mcycles,
                        Op::Rotate {
                            op,
                            operand,
                            set_zero: true,
                        },
                    )
                };
                let shift = |mnemonic: &str, op: ShiftOp| {
                    Instruction::new(
                        format!("{mnemonic} {name}"),
                        2,
                        mcycles,
                        Op::Shift { op, operand },
                    )
                };
                match y {
                    0 => rotate("RLC", RotOp::Rlc),
                    1 => rotate("RRC", RotOp::Rrc),
                    2 => rotate("RL", RotOp::Rl),
                    3 => rotate("RR", RotOp::Rr),
                    4 => shift("SLA", ShiftOp::Sla),
                    5 => shift("SRA", ShiftOp::Sra),
                    6 => Instruction::new(format!("SWAP {name}"), 2, mcycles, Op::Swap(operand)),
                    7 => shift("SRL", ShiftOp::Srl),
                    _ => unreachable!(),
                }
            }
            // BIT only reads, so the (HL) form costs one M-cycle less
            // than the read-modify-write operations.
            1 => Instruction::new(
                format!("BIT {y}, {name}"),
                2,
                if mem { 3 } else { 2 },
                Op::Bit(y, operand),
            ),
            2 => Instruction::new(
                format!("RES {y}, {name}"),
                2,
                if mem { 4 } else { 2 },
                Op::Res(y, operand),
            ),
            3 => Instruction::new(
                format!("SET {y}, {name}"),
                2,
                if mem { 4 } else { 2 },
                Op::Set(y, operand),
            ),
            _ => unreachable!(),
        };
    }

    instr
}
