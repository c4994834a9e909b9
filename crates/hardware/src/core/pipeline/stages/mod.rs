//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the five stages of the
//! instruction pipeline. It includes:
//! 1. **Fetch:** Retrieves and decodes the instruction at the PC and predicts the next PC.
//! 2. **Decode:** Reads source operands, resolving data hazards through forwarding.
//! 3. **Execute:** Performs ALU operations and resolves branch and jump targets.
//! 4. **Memory:** Handles data load and store operations.
//! 5. **Writeback:** Commits results to the register file.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage (ID stage).
pub use decode::Decode;
/// Execute stage (EX stage).
pub use execute::Execute;
/// Fetch stage (IF stage).
pub use fetch::Fetch;
/// Memory stage (MEM stage).
pub use memory::MemoryAccess;
/// Writeback stage (WB stage).
pub use writeback::Writeback;
