//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline.
//! It reads the word at the current Program Counter (PC), decodes it, and
//! uses the static predictor to choose the next PC.
//!
//! A word that cannot be fetched or decoded is not an error here: Fetch may
//! be on a wrong path, so the fault travels down the pipeline as
//! [`Instruction::Trap`] and is raised only if it reaches Execute.

use tracing::trace;

use crate::common::error::Trap;
use crate::core::Cpu;
use crate::core::pipeline::control::CycleContext;
use crate::core::pipeline::traits::PipelineStage;
use crate::core::units::bru::StaticPredictor;
use crate::isa::{Instruction, decode};
use crate::soc::memory::Memory;

/// The fetch stage.
#[derive(Debug)]
pub struct Fetch;

impl PipelineStage for Fetch {
    const NAME: &'static str = "IF";

    /// Fetches one instruction into IF/ID.
    ///
    /// # Behavior
    ///
    /// - Does nothing once the exit store has been seen
    /// - Advances the PC to the predicted next PC unless a redirect holds it
    /// - Records the fall-through address as the prediction
    /// - Discards the instruction when a stall is pending or IF/ID holds a bubble
    fn tick(cpu: &mut Cpu, ctx: &mut CycleContext) -> Result<(), Trap> {
        if cpu.halted || ctx.exit_requested {
            return Ok(());
        }

        let pc = cpu.pc.read();
        let _ = cpu.if_id.pc.write(pc);

        let inst = fetch_instruction(&cpu.memory, pc);
        let _ = cpu.pc.write(StaticPredictor::next_pc(pc, &inst));
        let _ = cpu.if_id.predict.write(StaticPredictor::fall_through(pc));

        if ctx.stall_requested || !cpu.if_id.inst.write(inst) {
            trace!(stage = Self::NAME, pc = %format_args!("{pc:#010x}"), %inst, "discarded");
        } else {
            trace!(stage = Self::NAME, pc = %format_args!("{pc:#010x}"), %inst);
        }
        Ok(())
    }
}

/// Reads and decodes the word at `pc`, folding any fault into a trap instruction.
fn fetch_instruction(memory: &Memory, pc: u32) -> Instruction {
    match memory.read_u32(pc) {
        Ok(word) => decode(word).unwrap_or_else(|err| Instruction::Trap(err.into())),
        Err(fault) => Instruction::Trap(fault.into()),
    }
}
