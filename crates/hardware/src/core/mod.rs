//! Core processor implementation.
//!
//! This module contains the CPU state aggregate, the instruction pipeline,
//! the execution units, and the architectural register file.

/// Architecture-specific components (register file).
pub mod arch;

/// CPU state: PC, registers, latches, memory, and statistics.
pub mod cpu;

/// Instruction pipeline implementation (register cells, latches, hazards, control, stages).
pub mod pipeline;

/// Execution units (ALU, branch resolution, static predictor).
pub mod units;

pub use self::cpu::Cpu;
