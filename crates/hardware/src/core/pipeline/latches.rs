//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the clocked cells sitting between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** Every latch carries exactly one [`Instruction`], a `Nop` when idle.
//! 2. **Operand Flow:** Fetched PCs, prediction targets, source values, and results travel alongside.
//! 3. **Stall Behaviour:** The fetch→decode latch freezes with the PC on a load-use stall.

use crate::core::pipeline::register::ClockedRegister;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::Instruction;

/// IF/ID pipeline latch (Fetch to Decode stage).
///
/// All cells are stall-sensitive so a load-use stall re-presents the same
/// instruction to Decode on the next cycle.
#[derive(Clone, Debug)]
pub struct IfId {
    /// Fetched instruction.
    pub inst: ClockedRegister<Instruction>,
    /// Program counter of the instruction.
    pub pc: ClockedRegister<u32>,
    /// Next-PC assumed at fetch time.
    pub predict: ClockedRegister<u32>,
}

impl Default for IfId {
    fn default() -> Self {
        Self {
            inst: ClockedRegister::stall_sensitive(),
            pc: ClockedRegister::stall_sensitive(),
            predict: ClockedRegister::stall_sensitive(),
        }
    }
}

impl PipelineLatch for IfId {
    fn commit(&mut self, stall: bool) {
        self.inst.commit(stall);
        self.pc.commit(stall);
        self.predict.commit(stall);
    }

    fn instruction(&self) -> Instruction {
        self.inst.read()
    }
}

/// ID/EX pipeline latch (Decode to Execute stage).
///
/// Carries the source operand values resolved by the forwarding network.
#[derive(Clone, Debug, Default)]
pub struct IdEx {
    /// Decoded instruction.
    pub inst: ClockedRegister<Instruction>,
    /// Program counter of the instruction.
    pub pc: ClockedRegister<u32>,
    /// Next-PC assumed at fetch time.
    pub predict: ClockedRegister<u32>,
    /// Value of the first source operand.
    pub rv1: ClockedRegister<u32>,
    /// Value of the second source operand.
    pub rv2: ClockedRegister<u32>,
}

impl PipelineLatch for IdEx {
    fn commit(&mut self, stall: bool) {
        self.inst.commit(stall);
        self.pc.commit(stall);
        self.predict.commit(stall);
        self.rv1.commit(stall);
        self.rv2.commit(stall);
    }

    fn instruction(&self) -> Instruction {
        self.inst.read()
    }
}

/// EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Debug, Default)]
pub struct ExMem {
    /// Executed instruction.
    pub inst: ClockedRegister<Instruction>,
    /// ALU result, link address, or store data.
    pub data: ClockedRegister<u32>,
    /// Effective address of a load or store.
    pub addr: ClockedRegister<u32>,
}

impl PipelineLatch for ExMem {
    fn commit(&mut self, stall: bool) {
        self.inst.commit(stall);
        self.data.commit(stall);
        self.addr.commit(stall);
    }

    fn instruction(&self) -> Instruction {
        self.inst.read()
    }
}

/// MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Debug, Default)]
pub struct MemWb {
    /// Instruction awaiting writeback.
    pub inst: ClockedRegister<Instruction>,
    /// Final result to write to the destination register.
    pub data: ClockedRegister<u32>,
}

impl PipelineLatch for MemWb {
    fn commit(&mut self, stall: bool) {
        self.inst.commit(stall);
        self.data.commit(stall);
    }

    fn instruction(&self) -> Instruction {
        self.inst.read()
    }
}
