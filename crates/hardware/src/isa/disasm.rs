//! Instruction Disassembler for RV32I.
//!
//! Renders a decoded [`Instruction`] as assembler text for debug tracing,
//! logging, and test diagnostics. Registers use ABI names.
//!
//! # Usage
//!
//! ```
//! use rv32pipe_core::isa::decode;
//! let text = decode(0x00A0_0513).unwrap().to_string();
//! assert_eq!(text, "addi a0, zero, 10");
//! ```

use std::fmt;

use crate::core::pipeline::signals::AluOp;
use crate::isa::instruction::Instruction;

/// ABI register names for x0–x31.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name for an integer register index.
#[inline]
fn xreg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}

/// Mnemonic of the immediate form of an ALU operation.
const fn imm_mnemonic(op: AluOp) -> &'static str {
    match op {
        AluOp::Add | AluOp::Sub => "addi",
        AluOp::Sll => "slli",
        AluOp::Slt => "slti",
        AluOp::Sltu => "sltiu",
        AluOp::Xor => "xori",
        AluOp::Srl => "srli",
        AluOp::Sra => "srai",
        AluOp::Or => "ori",
        AluOp::And => "andi",
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Reg { op, rd, rs1, rs2 } => write!(
                f,
                "{} {}, {}, {}",
                op.mnemonic(),
                xreg(rd),
                xreg(rs1),
                xreg(rs2)
            ),
            Self::Imm { op, rd, rs1, imm } => write!(
                f,
                "{} {}, {}, {}",
                imm_mnemonic(op),
                xreg(rd),
                xreg(rs1),
                imm
            ),
            Self::Load { op, rd, rs1, imm } => {
                write!(f, "{} {}, {}({})", op.mnemonic(), xreg(rd), imm, xreg(rs1))
            }
            Self::Jalr { rd, rs1, imm } => {
                write!(f, "jalr {}, {}({})", xreg(rd), imm, xreg(rs1))
            }
            Self::Store { op, rs1, rs2, imm } => {
                write!(f, "{} {}, {}({})", op.mnemonic(), xreg(rs2), imm, xreg(rs1))
            }
            Self::Branch { cond, rs1, rs2, imm } => write!(
                f,
                "{} {}, {}, {}",
                cond.mnemonic(),
                xreg(rs1),
                xreg(rs2),
                imm
            ),
            Self::Lui { rd, imm } => write!(f, "lui {}, {:#x}", xreg(rd), (imm as u32) >> 12),
            Self::Auipc { rd, imm } => {
                write!(f, "auipc {}, {:#x}", xreg(rd), (imm as u32) >> 12)
            }
            Self::Jal { rd, imm } => write!(f, "jal {}, {}", xreg(rd), imm),
            Self::Nop => write!(f, "nop"),
            Self::Trap(trap) => write!(f, "trap ({trap})"),
        }
    }
}
