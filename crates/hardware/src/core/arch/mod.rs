//! RISC-V architecture-specific components.
//!
//! This module contains the architectural state visible to software. The
//! only such state in RV32I besides the PC is the integer register file.

/// General-Purpose Register file implementation.
pub mod gpr;
