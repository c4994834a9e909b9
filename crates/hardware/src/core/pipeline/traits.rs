//! Pipeline Stage and Latch Interfaces.
//!
//! This module defines the common traits for pipeline components. It provides:
//! 1. **Pipeline Stage Interface:** Standardizes the per-cycle evaluation of every stage.
//! 2. **Pipeline Latch Interface:** Provides the clock edge and occupancy check for latches.

use crate::common::error::Trap;
use crate::core::Cpu;
use crate::core::pipeline::control::CycleContext;
use crate::isa::Instruction;

/// Represents a stage in the instruction pipeline.
///
/// A stage is responsible for processing a specific part of the instruction
/// lifecycle (Fetch, Decode, Execute, Memory, or Writeback).
pub trait PipelineStage {
    /// Stage name used in trace output.
    const NAME: &'static str;

    /// Evaluates the stage for one cycle.
    ///
    /// # Arguments
    ///
    /// * `cpu` - Mutable reference to the CPU state.
    /// * `ctx` - Stall, flush, and exit requests raised so far this cycle.
    ///
    /// # Errors
    ///
    /// Returns the [`Trap`] carried or raised by the instruction in this stage.
    fn tick(cpu: &mut Cpu, ctx: &mut CycleContext) -> Result<(), Trap>;
}

/// Represents a pipeline latch (inter-stage buffer).
///
/// Latches hold the state of one instruction as it moves between stages.
pub trait PipelineLatch {
    /// Applies the clock edge to every cell of the latch.
    ///
    /// Stall-sensitive cells keep their committed value while `stall` is set.
    fn commit(&mut self, stall: bool);

    /// Returns the committed instruction occupying the latch.
    fn instruction(&self) -> Instruction;

    /// Checks if the latch holds a bubble.
    ///
    /// # Returns
    ///
    /// `true` if the committed instruction is a `Nop`, `false` otherwise.
    fn is_empty(&self) -> bool {
        self.instruction().is_bubble()
    }
}
