//! RV32I pipeline simulator library.
//!
//! This crate implements a cycle-accurate, five-stage pipelined RV32I simulator with the following:
//! 1. **Core:** Clocked registers, pipeline latches, forwarding, load-use stalls, and misprediction flushes.
//! 2. **Memory:** Flat 4 MiB byte-addressable main memory with byte, halfword, and word access.
//! 3. **ISA:** Decoding and disassembly of the RV32I integer subset.
//! 4. **Simulation:** Image loader, run-to-completion driver, configuration, and statistics.
//!
//! # Examples
//!
//! ```
//! use rv32pipe_core::{SimConfig, Simulator};
//!
//! // addi a0, zero, 12 ; lui t0, 0x30 ; sb zero, 4(t0)
//! let image = "13 05 c0 00  b7 02 03 00  23 82 02 00";
//! let mut sim = Simulator::from_image(SimConfig::default(), image).unwrap();
//! assert_eq!(sim.run().unwrap(), 12);
//! ```

/// Common types and constants (errors, access widths, memory constants).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (pipeline, register file, execution units).
pub mod core;
/// Instruction set (decode, instruction model, disassembly, RV32I encodings).
pub mod isa;
/// Image loader and run-to-completion simulator.
pub mod sim;
/// Main memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `SimConfig::default()` or deserialize from JSON.
pub use crate::config::SimConfig;
/// Main CPU type; holds registers, latches, memory, and stats.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::from_image`.
pub use crate::sim::Simulator;
