//! Configuration system for the RV32I pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline machine constants (memory size, exit port, drain length).
//! 2. **Structures:** Hierarchical config for general, memory, and pipeline settings.
//!
//! Configuration is supplied as JSON (every field optional) or built with
//! `SimConfig::default()`.

use serde::Deserialize;

use crate::common::constants::{DRAIN_CYCLES, EXIT_ADDRESS, MEMORY_SIZE};
use crate::isa::abi::REG_A0;

/// Default configuration constants for the simulator.
///
/// These values define the baseline machine when not explicitly
/// overridden in a JSON configuration file.
mod defaults {
    /// Size of main memory in bytes (4 MiB).
    pub const MEMORY_SIZE: usize = super::MEMORY_SIZE;

    /// Store address that ends the run.
    pub const EXIT_ADDRESS: u32 = super::EXIT_ADDRESS;

    /// Full cycles simulated after the exit store is detected.
    pub const DRAIN_CYCLES: u64 = super::DRAIN_CYCLES;

    /// Register whose low byte is the program result (`a0`).
    pub const RESULT_REGISTER: usize = super::REG_A0;
}

/// Root configuration structure for the simulator.
///
/// # Examples
///
/// ```
/// use rv32pipe_core::config::SimConfig;
///
/// let json = r#"{
///     "general": { "trace": true, "max_cycles": 10000 },
///     "pipeline": { "result_register": 11 }
/// }"#;
///
/// let config: SimConfig = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace);
/// assert_eq!(config.general.max_cycles, Some(10000));
/// assert_eq!(config.memory.size, 4 * 1024 * 1024);
/// assert_eq!(config.memory.exit_address, 0x30004);
/// assert_eq!(config.pipeline.drain_cycles, 2);
/// assert_eq!(config.pipeline.result_register, 11);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimConfig {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Main memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Pipeline and termination configuration
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl SimConfig {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the text is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Enable per-stage tracing (raises the log filter to `trace` in the CLI)
    #[serde(default)]
    pub trace: bool,

    /// Abort the run with an error after this many cycles (unbounded when absent)
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

/// Main memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Size of main memory in bytes
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,

    /// Store address that signals program termination
    #[serde(default = "MemoryConfig::default_exit_address")]
    pub exit_address: u32,
}

impl MemoryConfig {
    /// Returns the default memory size in bytes.
    fn default_size() -> usize {
        defaults::MEMORY_SIZE
    }

    /// Returns the default exit port address.
    fn default_exit_address() -> u32 {
        defaults::EXIT_ADDRESS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::MEMORY_SIZE,
            exit_address: defaults::EXIT_ADDRESS,
        }
    }
}

/// Pipeline drain and result configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PipelineConfig {
    /// Full cycles run after the exit store is detected
    #[serde(default = "PipelineConfig::default_drain_cycles")]
    pub drain_cycles: u64,

    /// Register whose low byte is reported as the program result
    #[serde(default = "PipelineConfig::default_result_register")]
    pub result_register: usize,
}

impl PipelineConfig {
    /// Returns the default number of drain cycles.
    fn default_drain_cycles() -> u64 {
        defaults::DRAIN_CYCLES
    }

    /// Returns the default result register index.
    fn default_result_register() -> usize {
        defaults::RESULT_REGISTER
    }
}

impl Default for PipelineConfig {
    /// Drains for two cycles and reports `a0`.
    fn default() -> Self {
        Self {
            drain_cycles: defaults::DRAIN_CYCLES,
            result_register: defaults::RESULT_REGISTER,
        }
    }
}
