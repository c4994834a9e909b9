//! Simulator: owns the CPU and drives it to completion.
//!
//! The simulator wraps the cycle driver with the run-level policy. It performs:
//! 1. **Construction:** Sizes memory from the configuration and loads the image.
//! 2. **Run Loop:** Ticks until the exit store executes, then drains the pipeline.
//! 3. **Result:** Reports the low byte of the result register.

use serde::de::Error as _;
use tracing::info;

use crate::common::error::SimError;
use crate::config::SimConfig;
use crate::core::Cpu;
use crate::core::pipeline::engine;
use crate::isa::abi::NUM_REGS;
use crate::sim::loader::load_image;
use crate::soc::memory::Memory;
use crate::stats::SimStats;

/// Top-level simulator: CPU state plus run configuration.
#[derive(Debug)]
pub struct Simulator {
    /// CPU state (registers, latches, memory, stats).
    pub cpu: Cpu,
    config: SimConfig,
}

impl Simulator {
    /// Creates a simulator with zero-filled memory.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the result register is not a
    /// general-purpose register index.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        if config.pipeline.result_register >= NUM_REGS {
            return Err(SimError::Config(serde_json::Error::custom(format!(
                "result_register {} is not in 0..{NUM_REGS}",
                config.pipeline.result_register
            ))));
        }

        let memory = Memory::new(config.memory.size);
        let cpu = Cpu::new(memory, config.memory.exit_address);
        Ok(Self { cpu, config })
    }

    /// Creates a simulator and loads the hex memory image `text`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Image`] if the image is malformed or does not
    /// fit, or any error from [`Simulator::new`].
    pub fn from_image(config: SimConfig, text: &str) -> Result<Self, SimError> {
        let mut sim = Self::new(config)?;
        let _ = load_image(text, &mut sim.cpu.memory)?;
        Ok(sim)
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::CycleLimit`] once the configured cycle budget is
    /// used up, or [`SimError::Trap`] if an instruction faults.
    pub fn tick(&mut self) -> Result<(), SimError> {
        if let Some(limit) = self.config.general.max_cycles
            && self.cpu.stats.cycles >= limit
        {
            return Err(SimError::CycleLimit {
                cycles: self.cpu.stats.cycles,
            });
        }

        let _ = engine::tick(&mut self.cpu)?;
        Ok(())
    }

    /// Runs until the exit store, drains the pipeline, and returns the result byte.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Simulator::tick`].
    pub fn run(&mut self) -> Result<u8, SimError> {
        while !self.cpu.halted {
            self.tick()?;
        }
        for _ in 0..self.config.pipeline.drain_cycles {
            self.tick()?;
        }

        let result = self.result();
        info!(
            cycles = self.cpu.stats.cycles,
            retired = self.cpu.stats.instructions_retired,
            result,
            "run complete"
        );
        Ok(result)
    }

    /// Returns the low 8 bits of the result register.
    pub fn result(&self) -> u8 {
        (self.cpu.regs.read(self.config.pipeline.result_register) & 0xFF) as u8
    }

    /// Returns the statistics collected so far.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Returns the configuration the simulator was built with.
    pub const fn config(&self) -> &SimConfig {
        &self.config
    }
}
