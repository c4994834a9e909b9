//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline simulator. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Hazards:** Load-use stall cycles.
//! 3. **Control:** Branch and register-indirect jump flushes.

use std::time::Instant;

/// Simulation statistics structure tracking all performance metrics.
///
/// Updated by the pipeline stages as they run; read back through
/// [`Simulator::stats`](crate::sim::simulator::Simulator::stats).
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of non-bubble instructions that reached Writeback.
    pub instructions_retired: u64,
    /// Cycles lost to load-use hazards.
    pub load_use_stalls: u64,
    /// Flushes caused by conditional branch mispredictions.
    pub branch_flushes: u64,
    /// Flushes caused by register-indirect jumps.
    pub jump_flushes: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            load_use_stalls: 0,
            branch_flushes: 0,
            jump_flushes: 0,
        }
    }
}

impl SimStats {
    /// Cycles per retired instruction, or 0 before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Retired instructions per cycle, or 0 before the first cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Total number of pipeline flushes.
    pub const fn flushes(&self) -> u64 {
        self.branch_flushes + self.jump_flushes
    }

    /// Prints all statistics to stderr.
    ///
    /// Stdout is reserved for the program result.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;
        let khz = if seconds > 0.0 {
            (self.cycles as f64 / seconds) / 1000.0
        } else {
            0.0
        };

        eprintln!("\n==========================================================");
        eprintln!("RV32I PIPELINE SIMULATION STATISTICS");
        eprintln!("==========================================================");
        eprintln!("host_seconds             {seconds:.4} s");
        eprintln!("sim_cycles               {}", self.cycles);
        eprintln!("sim_freq                 {khz:.2} kHz");
        eprintln!("sim_insts                {}", self.instructions_retired);
        eprintln!("sim_ipc                  {:.4}", self.ipc());
        eprintln!("sim_cpi                  {:.4}", self.cpi());
        eprintln!("----------------------------------------------------------");
        eprintln!("HAZARDS");
        eprintln!(
            "  stalls.load_use        {} ({:.2}%)",
            self.load_use_stalls,
            (self.load_use_stalls as f64 / cyc) * 100.0
        );
        eprintln!("  flush.branch           {}", self.branch_flushes);
        eprintln!("  flush.jalr             {}", self.jump_flushes);
        eprintln!(
            "  flush.squashed_slots   {} ({:.2}%)",
            self.flushes() * 2,
            (self.flushes() as f64 * 2.0 / cyc) * 100.0
        );
        eprintln!("==========================================================");
    }
}
