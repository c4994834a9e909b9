//! RISC-V Application Binary Interface (ABI) register name constants.
//!
//! Defines the register indices the simulator gives a fixed meaning to.

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register x10 (first argument/return value, a0).
///
/// The low byte of this register is the program result.
pub const REG_A0: usize = 10;
/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;
