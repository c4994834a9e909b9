//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline.
//! Loads read main memory with the width and extension fixed by the
//! instruction, stores write it, and every other result passes through.

use tracing::trace;

use crate::common::error::Trap;
use crate::core::Cpu;
use crate::core::pipeline::control::CycleContext;
use crate::core::pipeline::traits::PipelineStage;
use crate::isa::Instruction;

/// The memory access stage.
#[derive(Debug)]
pub struct MemoryAccess;

impl PipelineStage for MemoryAccess {
    const NAME: &'static str = "MEM";

    /// Performs the data access of the instruction in EX/MEM and moves it into MEM/WB.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AccessFault`] if the access does not fit in main memory.
    fn tick(cpu: &mut Cpu, _ctx: &mut CycleContext) -> Result<(), Trap> {
        let inst = cpu.ex_mem.inst.read();
        let addr = cpu.ex_mem.addr.read();
        let data = cpu.ex_mem.data.read();

        match inst {
            Instruction::Reg { .. }
            | Instruction::Imm { .. }
            | Instruction::Jalr { .. }
            | Instruction::Auipc { .. }
            | Instruction::Jal { .. } => {
                let _ = cpu.mem_wb.data.write(data);
            }
            Instruction::Load { op, .. } => {
                let value = cpu.memory.load(addr, op.width(), op.signed())?;
                trace!(stage = Self::NAME, addr = %format_args!("{addr:#010x}"), value, "load");
                let _ = cpu.mem_wb.data.write(value);
            }
            Instruction::Store { op, .. } => {
                cpu.memory.store(addr, op.width(), data)?;
                trace!(stage = Self::NAME, addr = %format_args!("{addr:#010x}"), value = data, "store");
            }
            Instruction::Lui { .. }
            | Instruction::Branch { .. }
            | Instruction::Nop
            | Instruction::Trap(_) => {}
        }

        let _ = cpu.mem_wb.inst.write(inst);
        Ok(())
    }
}
