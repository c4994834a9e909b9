//! Static Next-PC Predictor.
//!
//! Implements the fetch-time prediction policy: direct jumps (JAL) are
//! followed immediately because their target is known from the encoding,
//! and everything else, including conditional branches and JALR, is
//! assumed to fall through.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::isa::Instruction;

/// Static predictor with no history state.
#[derive(Debug)]
pub struct StaticPredictor;

impl StaticPredictor {
    /// Returns the address Fetch should continue from after `inst` at `pc`.
    pub const fn next_pc(pc: u32, inst: &Instruction) -> u32 {
        match inst {
            Instruction::Jal { imm, .. } => pc.wrapping_add(*imm as u32),
            _ => Self::fall_through(pc),
        }
    }

    /// Returns the sequential successor of `pc`.
    ///
    /// This is the value latched as the prediction for every fetched
    /// instruction; Execute redirects when the resolved target differs.
    #[inline]
    pub const fn fall_through(pc: u32) -> u32 {
        pc.wrapping_add(INSTRUCTION_SIZE)
    }
}
