//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Register:** The clocked two-buffer cell every latch is built from.
//! 2. **Latches:** Inter-stage buffers for communication between pipeline stages.
//! 3. **Hazards:** Forwarding and load-use detection.
//! 4. **Control:** Per-cycle stall, flush, and exit coordination.
//! 5. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.
//! 6. **Engine:** The cycle driver that commits latches and evaluates the stages.

/// Per-cycle control state, flush, and load-use stall.
pub mod control;

/// The per-cycle driver.
pub mod engine;

/// Forwarding query and load-use hazard detection.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Clocked storage cell with pending and committed buffers.
pub mod register;

/// Operation selectors carried by decoded instructions.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Traits for pipeline stages and latches.
pub mod traits;
