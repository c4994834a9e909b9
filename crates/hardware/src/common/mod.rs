//! Common utilities and types used throughout the RV32I pipeline simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Memory size, the exit port address, and instruction sizes.
//! 2. **Memory Access:** Access widths and access classification (Fetch/Read/Write).
//! 3. **Error Handling:** Decode errors, memory faults, in-flight traps, and run errors.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types and trap definitions.
pub mod error;

pub use constants::{EXIT_ADDRESS, INSTRUCTION_SIZE, MEMORY_SIZE};
pub use data::{AccessType, AccessWidth};
pub use error::{DecodeError, ImageError, MemoryFault, SimError, Trap};
