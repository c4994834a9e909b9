//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains the register file and the program counter.
//! 2. **Pipeline Control:** Owns the four inter-stage latches and the stall carried between cycles.
//! 3. **Memory:** Owns the flat main memory used for both fetch and data access.
//! 4. **Accounting:** Collects the statistics updated by the stages.

use crate::core::arch::gpr::Gpr;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::register::ClockedRegister;
use crate::core::pipeline::traits::PipelineLatch;
use crate::soc::memory::Memory;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
///
/// The CPU is driven one cycle at a time by
/// [`engine::tick`](crate::core::pipeline::engine::tick).
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General Purpose Registers.
    pub regs: Gpr,
    /// Program Counter (stall-sensitive).
    pub pc: ClockedRegister<u32>,

    /// IF/ID Latch.
    pub if_id: IfId,
    /// ID/EX Latch.
    pub id_ex: IdEx,
    /// EX/MEM Latch.
    pub ex_mem: ExMem,
    /// MEM/WB Latch.
    pub mem_wb: MemWb,

    /// Main memory.
    pub memory: Memory,
    /// Store address that ends the run.
    pub exit_address: u32,

    /// Stall requested during the previous cycle, applied at the next clock edge.
    pub stall: bool,
    /// Set once the exit store has been executed; Fetch is disabled from then on.
    pub halted: bool,
    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU in its reset state around `memory`.
    ///
    /// The PC is 0, every latch holds a bubble, all registers read 0, and the
    /// PC and IF/ID latch are stall-sensitive.
    ///
    /// # Arguments
    ///
    /// * `memory` - Main memory, usually already loaded with a program image.
    /// * `exit_address` - Store address that signals program termination.
    pub fn new(memory: Memory, exit_address: u32) -> Self {
        Self {
            regs: Gpr::new(),
            pc: ClockedRegister::stall_sensitive(),
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            memory,
            exit_address,
            stall: false,
            halted: false,
            stats: SimStats::default(),
        }
    }

    /// Applies the clock edge to the PC and every latch.
    ///
    /// The stall latched from the previous cycle freezes the stall-sensitive
    /// cells. The register file is not committed here; Writeback commits
    /// each write as it happens.
    pub fn commit_latches(&mut self) {
        let stall = self.stall;
        self.pc.commit(stall);
        self.if_id.commit(stall);
        self.id_ex.commit(stall);
        self.ex_mem.commit(stall);
        self.mem_wb.commit(stall);
    }

    /// Returns `true` if no real instruction occupies any latch.
    pub fn pipeline_empty(&self) -> bool {
        self.if_id.is_empty() && self.id_ex.is_empty() && self.ex_mem.is_empty() && self.mem_wb.is_empty()
    }

    /// Dumps the PC and register file to stderr.
    pub fn dump_state(&self) {
        eprintln!("pc  ={:#010x}", self.pc.read());
        self.regs.dump();
    }
}
