//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction pipeline.
//! Instructions arrive already decoded from Fetch; this stage reads their
//! source operands and moves them into ID/EX. It performs the following:
//! 1. **Operand Read:** Reads the register file for each source register.
//! 2. **Forwarding:** Overrides stale register values with in-flight results.
//! 3. **Hazard Detection:** Requests a load-use stall through the forwarding query.

use tracing::trace;

use crate::common::error::Trap;
use crate::core::Cpu;
use crate::core::pipeline::control::CycleContext;
use crate::core::pipeline::hazards::resolve_operand;
use crate::core::pipeline::traits::PipelineStage;

/// The decode stage.
#[derive(Debug)]
pub struct Decode;

impl PipelineStage for Decode {
    const NAME: &'static str = "ID";

    fn tick(cpu: &mut Cpu, ctx: &mut CycleContext) -> Result<(), Trap> {
        let inst = cpu.if_id.inst.read();
        let (rs1, rs2) = inst.sources();

        if let Some(src) = rs1 {
            let value = resolve_operand(cpu, ctx, src);
            let _ = cpu.id_ex.rv1.write(value);
        }
        if let Some(src) = rs2 {
            let value = resolve_operand(cpu, ctx, src);
            let _ = cpu.id_ex.rv2.write(value);
        }

        let pc = cpu.if_id.pc.read();
        if cpu.id_ex.inst.write(inst) {
            trace!(stage = Self::NAME, pc = %format_args!("{pc:#010x}"), %inst);
        } else {
            trace!(stage = Self::NAME, pc = %format_args!("{pc:#010x}"), %inst, "replaced by bubble");
        }
        let _ = cpu.id_ex.pc.write(pc);
        let _ = cpu.id_ex.predict.write(cpu.if_id.predict.read());
        Ok(())
    }
}
