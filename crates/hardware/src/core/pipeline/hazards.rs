//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for maintaining pipeline consistency when data
//! dependencies exist between instructions. It provides:
//! 1. **Forwarding Query:** A pure lookup of where an in-flight producer's result currently lives.
//! 2. **Operand Forwarding:** Resolves Read-After-Write (RAW) hazards by bypassing the register file.
//! 3. **Hazard Detection:** Identifies load-use hazards that require a pipeline stall.
//!
//! Decode queries producers in the order Execute, Memory, Writeback; the first
//! match wins. Because Execute and Memory have already run when Decode is
//! evaluated, their outputs for this cycle are available in the pending
//! buffers of EX/MEM and MEM/WB.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::control::{self, CycleContext};
use crate::isa::Instruction;

/// Pipeline position of a producer relative to the consumer in Decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProducerStage {
    /// The producer occupies ID/EX and was executed earlier this cycle.
    Execute,
    /// The producer occupies EX/MEM and went through Memory earlier this cycle.
    Memory,
    /// The producer occupies MEM/WB and has not been written back yet.
    Writeback,
}

/// Where a forwarded source value is taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Forward {
    /// The value is a constant of the producer (LUI).
    Immediate(u32),
    /// The result Execute produced this cycle.
    ExMemPending,
    /// The result Execute produced last cycle.
    ExMemCommitted,
    /// The result Memory produced this cycle.
    MemWbPending,
    /// The result waiting in MEM/WB.
    MemWbCommitted,
    /// The producer is a load still in Execute; its value does not exist yet.
    LoadUse,
}

/// Reports whether `producer`, sitting at `stage`, supplies register `src`.
///
/// Returns `None` when the producer does not write `src`. Bubbles, traps,
/// stores, and branches never match.
///
/// # Examples
///
/// ```
/// use rv32pipe_core::core::pipeline::hazards::{forward_source, Forward, ProducerStage};
/// use rv32pipe_core::core::pipeline::signals::LoadOp;
/// use rv32pipe_core::isa::Instruction;
///
/// let lw = Instruction::Load { op: LoadOp::Lw, rd: 5, rs1: 2, imm: 0 };
/// assert_eq!(forward_source(&lw, ProducerStage::Execute, 5), Some(Forward::LoadUse));
/// assert_eq!(forward_source(&lw, ProducerStage::Memory, 5), Some(Forward::MemWbPending));
/// assert_eq!(forward_source(&lw, ProducerStage::Memory, 6), None);
/// ```
pub fn forward_source(producer: &Instruction, stage: ProducerStage, src: usize) -> Option<Forward> {
    if producer.destination() != Some(src) {
        return None;
    }

    let source = match (*producer, stage) {
        (Instruction::Lui { imm, .. }, _) => Forward::Immediate(imm as u32),
        (Instruction::Load { .. }, ProducerStage::Execute) => Forward::LoadUse,
        (Instruction::Load { .. }, ProducerStage::Memory) => Forward::MemWbPending,
        (_, ProducerStage::Execute) => Forward::ExMemPending,
        (_, ProducerStage::Memory) => Forward::ExMemCommitted,
        (_, ProducerStage::Writeback) => Forward::MemWbCommitted,
    };
    Some(source)
}

/// Resolves the value of source register `src` for the instruction in Decode.
///
/// Starts from the register file and overrides it with the value of the
/// nearest in-flight producer. A load still in Execute triggers a load-use
/// stall instead; the returned value is then irrelevant because the consumer
/// is replaced by a bubble.
pub fn resolve_operand(cpu: &mut Cpu, ctx: &mut CycleContext, src: usize) -> u32 {
    if src == 0 {
        return 0;
    }

    let producers = [
        (ProducerStage::Execute, cpu.id_ex.inst.read()),
        (ProducerStage::Memory, cpu.ex_mem.inst.read()),
        (ProducerStage::Writeback, cpu.mem_wb.inst.read()),
    ];

    let regfile = cpu.regs.read(src);
    for (stage, producer) in producers {
        let Some(source) = forward_source(&producer, stage, src) else {
            continue;
        };

        let value = match source {
            Forward::Immediate(value) => value,
            Forward::ExMemPending => cpu.ex_mem.data.read_pending(),
            Forward::ExMemCommitted => cpu.ex_mem.data.read(),
            Forward::MemWbPending => cpu.mem_wb.data.read_pending(),
            Forward::MemWbCommitted => cpu.mem_wb.data.read(),
            Forward::LoadUse => {
                control::request_load_use_stall(cpu, ctx);
                regfile
            }
        };
        trace!(reg = src, ?stage, ?source, value, "forward");
        return value;
    }

    regfile
}
