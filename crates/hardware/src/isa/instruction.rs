//! Instruction encoding and the decoded instruction model.
//!
//! Provides bit extraction functions for the fixed RISC-V field positions and
//! the [`Instruction`] sum type that flows through the pipeline latches. Each
//! variant owns exactly the operand fields its format needs.

use crate::common::error::Trap;
use crate::core::pipeline::signals::{AluOp, BranchCond, LoadOp, StoreOp};

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Provides methods to extract the standard RISC-V instruction fields
/// from a 32-bit instruction encoding.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    ///
    /// The opcode determines the instruction format and operation category.
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    ///
    /// For immediate shifts the same bits hold the shift amount.
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }
}

/// A decoded instruction as carried by the pipeline latches.
///
/// Instructions are created by [`decode`](crate::isa::decode::decode) in Fetch,
/// move from latch to latch once per cycle, and are dropped after Writeback.
/// `Nop` is the bubble used for reset, stalls, and flushes. `Trap` carries a
/// fetch or decode fault that is raised only if it reaches Execute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Instruction {
    /// R-type register-register ALU operation.
    Reg {
        /// ALU function.
        op: AluOp,
        /// Destination register.
        rd: usize,
        /// First source register.
        rs1: usize,
        /// Second source register.
        rs2: usize,
    },

    /// I-type register-immediate ALU operation.
    ///
    /// For shifts `imm` holds the 5-bit shift amount.
    Imm {
        /// ALU function.
        op: AluOp,
        /// Destination register.
        rd: usize,
        /// Source register.
        rs1: usize,
        /// Sign-extended 12-bit immediate or shift amount.
        imm: i32,
    },

    /// Load from memory into a register.
    Load {
        /// Width and extension of the load.
        op: LoadOp,
        /// Destination register.
        rd: usize,
        /// Base address register.
        rs1: usize,
        /// Sign-extended 12-bit offset.
        imm: i32,
    },

    /// Jump and link register (JALR).
    Jalr {
        /// Link register.
        rd: usize,
        /// Base target register.
        rs1: usize,
        /// Sign-extended 12-bit offset.
        imm: i32,
    },

    /// S-type store.
    Store {
        /// Width of the store.
        op: StoreOp,
        /// Base address register.
        rs1: usize,
        /// Data register.
        rs2: usize,
        /// Sign-extended 12-bit offset.
        imm: i32,
    },

    /// B-type conditional branch.
    Branch {
        /// Comparison predicate.
        cond: BranchCond,
        /// Left comparison operand.
        rs1: usize,
        /// Right comparison operand.
        rs2: usize,
        /// Sign-extended 13-bit PC-relative offset.
        imm: i32,
    },

    /// Load upper immediate (LUI).
    Lui {
        /// Destination register.
        rd: usize,
        /// Immediate with the low 12 bits clear.
        imm: i32,
    },

    /// Add upper immediate to PC (AUIPC).
    Auipc {
        /// Destination register.
        rd: usize,
        /// Immediate with the low 12 bits clear.
        imm: i32,
    },

    /// Jump and link (JAL).
    Jal {
        /// Link register.
        rd: usize,
        /// Sign-extended 21-bit PC-relative offset.
        imm: i32,
    },

    /// Pipeline bubble.
    #[default]
    Nop,

    /// A fetch that could not produce an instruction.
    Trap(Trap),
}

impl Instruction {
    /// Returns the register this instruction writes back, if any.
    ///
    /// Bubbles, traps, stores, and branches have no destination.
    pub fn destination(&self) -> Option<usize> {
        match *self {
            Self::Reg { rd, .. }
            | Self::Imm { rd, .. }
            | Self::Load { rd, .. }
            | Self::Jalr { rd, .. }
            | Self::Lui { rd, .. }
            | Self::Auipc { rd, .. }
            | Self::Jal { rd, .. } => Some(rd),
            Self::Store { .. } | Self::Branch { .. } | Self::Nop | Self::Trap(_) => None,
        }
    }

    /// Returns the source registers read in Decode as `(rs1, rs2)`.
    pub fn sources(&self) -> (Option<usize>, Option<usize>) {
        match *self {
            Self::Reg { rs1, rs2, .. }
            | Self::Store { rs1, rs2, .. }
            | Self::Branch { rs1, rs2, .. } => (Some(rs1), Some(rs2)),
            Self::Imm { rs1, .. } | Self::Load { rs1, .. } | Self::Jalr { rs1, .. } => {
                (Some(rs1), None)
            }
            Self::Lui { .. } | Self::Auipc { .. } | Self::Jal { .. } | Self::Nop | Self::Trap(_) => {
                (None, None)
            }
        }
    }

    /// Returns `true` for load instructions, whose result only exists after Memory.
    pub const fn is_load(&self) -> bool {
        matches!(self, Self::Load { .. })
    }

    /// Returns `true` for the pipeline bubble.
    pub const fn is_bubble(&self) -> bool {
        matches!(self, Self::Nop)
    }
}
