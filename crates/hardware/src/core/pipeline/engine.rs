//! Cycle Driver.
//!
//! This module advances the pipeline by one clock cycle. Each cycle:
//! 1. **Clock Edge:** Commits the PC and every latch, freezing the stall-sensitive cells
//!    if the previous cycle requested a stall.
//! 2. **Evaluation:** Runs Execute, Memory, Decode, Fetch, then Writeback.
//! 3. **Hand-off:** Latches the new stall request and the exit flag for the next cycle.
//!
//! The evaluation order is load-bearing. Execute and Memory run before
//! Decode so their outputs for this cycle sit in the pending buffers Decode
//! forwards from, and Decode still sees a load in ID/EX while it is being
//! executed. Writeback runs last, after Decode has finished forwarding from
//! MEM/WB.

use tracing::trace;

use crate::common::error::Trap;
use crate::core::Cpu;
use crate::core::pipeline::control::CycleContext;
use crate::core::pipeline::stages::{Decode, Execute, Fetch, MemoryAccess, Writeback};
use crate::core::pipeline::traits::PipelineStage;

/// Runs one full clock cycle.
///
/// # Returns
///
/// The requests raised during the cycle.
///
/// # Errors
///
/// Returns the [`Trap`] raised by a stage. The CPU state is then
/// mid-cycle and must not be ticked again.
pub fn tick(cpu: &mut Cpu) -> Result<CycleContext, Trap> {
    let mut ctx = CycleContext::new();

    cpu.commit_latches();
    cpu.stats.cycles += 1;
    trace!(cycle = cpu.stats.cycles, "clock edge");

    Execute::tick(cpu, &mut ctx)?;
    MemoryAccess::tick(cpu, &mut ctx)?;
    Decode::tick(cpu, &mut ctx)?;
    Fetch::tick(cpu, &mut ctx)?;
    Writeback::tick(cpu, &mut ctx)?;

    cpu.stall = ctx.stall_requested;
    if ctx.exit_requested {
        cpu.halted = true;
    }
    Ok(ctx)
}
