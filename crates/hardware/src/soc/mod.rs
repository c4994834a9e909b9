//! System-on-Chip (SoC) Components.
//!
//! This module organizes the components outside the CPU core. The only one
//! the simulated machine has is flat main memory; the exit port is a plain
//! memory address recognised by the Execute stage.

/// Main memory.
pub mod memory;
