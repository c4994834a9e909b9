//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Size of the flat main memory.
//! 2. **Instruction Constants:** Instruction width.
//! 3. **Simulation Constants:** The exit port and the post-exit drain length.

/// Size of main memory in bytes (4 MiB).
pub const MEMORY_SIZE: usize = 0x40_0000;

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Store address that signals program termination.
///
/// A store whose effective address equals this port ends the run; the
/// byte is still written to memory like any other store.
pub const EXIT_ADDRESS: u32 = 0x30004;

/// Full cycles run after the exit store is detected.
///
/// Two cycles carry the exit store and everything older than it through
/// Writeback.
pub const DRAIN_CYCLES: u64 = 2;
