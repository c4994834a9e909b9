//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline.
//! It commits results to the register file and counts retired instructions.
//! Register writes commit immediately, so Decode sees them next cycle
//! through the register file rather than through forwarding.

use tracing::trace;

use crate::common::error::Trap;
use crate::core::Cpu;
use crate::core::pipeline::control::CycleContext;
use crate::core::pipeline::traits::PipelineStage;
use crate::isa::Instruction;

/// The writeback stage.
#[derive(Debug)]
pub struct Writeback;

impl PipelineStage for Writeback {
    const NAME: &'static str = "WB";

    fn tick(cpu: &mut Cpu, _ctx: &mut CycleContext) -> Result<(), Trap> {
        let inst = cpu.mem_wb.inst.read();

        if let Some(rd) = inst.destination() {
            let value = match inst {
                Instruction::Lui { imm, .. } => imm as u32,
                _ => cpu.mem_wb.data.read(),
            };
            cpu.regs.write(rd, value);
            trace!(stage = Self::NAME, %inst, rd, value);
        }

        if !inst.is_bubble() {
            cpu.stats.instructions_retired += 1;
        }
        Ok(())
    }
}
