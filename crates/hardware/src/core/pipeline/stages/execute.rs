//! Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. It performs the following:
//! 1. **Arithmetic Execution:** Performs ALU operations for register and immediate forms.
//! 2. **Address Generation:** Computes effective addresses for loads and stores.
//! 3. **Control Resolution:** Resolves branch and JALR targets and flushes on a misprediction.
//! 4. **Exit Detection:** Recognises a store to the exit address.
//! 5. **Trap Delivery:** Raises the fault carried by a trap instruction.

use tracing::trace;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::Trap;
use crate::core::Cpu;
use crate::core::pipeline::control::{self, CycleContext, FlushCause};
use crate::core::pipeline::traits::PipelineStage;
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;
use crate::isa::Instruction;

/// Bit mask to clear the low bit of `JALR` target addresses.
const JALR_ALIGNMENT_MASK: u32 = !1;

/// The execute stage.
#[derive(Debug)]
pub struct Execute;

impl PipelineStage for Execute {
    const NAME: &'static str = "EX";

    /// Executes the instruction in ID/EX and moves it into EX/MEM.
    ///
    /// # Errors
    ///
    /// Returns the carried [`Trap`] if the instruction is a trap.
    fn tick(cpu: &mut Cpu, ctx: &mut CycleContext) -> Result<(), Trap> {
        let inst = cpu.id_ex.inst.read();
        let pc = cpu.id_ex.pc.read();
        let predict = cpu.id_ex.predict.read();
        let rv1 = cpu.id_ex.rv1.read();
        let rv2 = cpu.id_ex.rv2.read();
        let link = pc.wrapping_add(INSTRUCTION_SIZE);

        trace!(stage = Self::NAME, pc = %format_args!("{pc:#010x}"), %inst);

        match inst {
            Instruction::Reg { op, .. } => {
                let _ = cpu.ex_mem.data.write(Alu::execute(op, rv1, rv2));
            }
            Instruction::Imm { op, imm, .. } => {
                let _ = cpu.ex_mem.data.write(Alu::execute(op, rv1, imm as u32));
            }
            Instruction::Load { imm, .. } => {
                let _ = cpu.ex_mem.addr.write(rv1.wrapping_add(imm as u32));
            }
            Instruction::Jalr { imm, .. } => {
                let target = rv1.wrapping_add(imm as u32) & JALR_ALIGNMENT_MASK;
                let _ = cpu.ex_mem.data.write(link);
                if target != predict {
                    control::flush(cpu, ctx, target, FlushCause::JumpRegister);
                }
            }
            Instruction::Store { imm, .. } => {
                let addr = rv1.wrapping_add(imm as u32);
                let _ = cpu.ex_mem.addr.write(addr);
                let _ = cpu.ex_mem.data.write(rv2);
                if addr == cpu.exit_address {
                    control::request_exit(cpu, ctx, addr);
                }
            }
            Instruction::Branch { cond, imm, .. } => {
                let target = if Bru::taken(cond, rv1, rv2) {
                    pc.wrapping_add(imm as u32)
                } else {
                    link
                };
                if target != predict {
                    control::flush(cpu, ctx, target, FlushCause::Branch);
                }
            }
            Instruction::Auipc { imm, .. } => {
                let _ = cpu.ex_mem.data.write(pc.wrapping_add(imm as u32));
            }
            Instruction::Jal { .. } => {
                let _ = cpu.ex_mem.data.write(link);
            }
            Instruction::Lui { .. } | Instruction::Nop => {}
            Instruction::Trap(trap) => return Err(trap),
        }

        let _ = cpu.ex_mem.inst.write(inst);
        Ok(())
    }
}
