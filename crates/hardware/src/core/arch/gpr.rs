//! RISC-V General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file for the RISC-V architecture.
//! It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`) as clocked cells.
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.

use crate::core::pipeline::register::ClockedRegister;
use crate::isa::abi::{NUM_REGS, REG_ZERO};

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers used for integer operations. Register `x0`
/// is a zero cell: writes to it are accepted and never observed.
#[derive(Clone, Debug)]
pub struct Gpr {
    regs: [ClockedRegister<u32>; NUM_REGS],
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub fn new() -> Self {
        let mut regs: [ClockedRegister<u32>; NUM_REGS] = Default::default();
        regs[REG_ZERO] = ClockedRegister::zero();
        Self { regs }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The committed value of the register. Register `x0` always returns 0.
    #[inline]
    pub fn read(&self, idx: usize) -> u32 {
        self.regs[idx].read()
    }

    /// Writes a value to a general-purpose register and commits it immediately.
    ///
    /// Writeback runs last in the cycle, so the value is visible to the
    /// register-file read in the next cycle's Decode.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        let reg = &mut self.regs[idx];
        let _ = reg.write(val);
        reg.commit(false);
    }

    /// Returns the committed values of all registers.
    pub fn snapshot(&self) -> [u32; NUM_REGS] {
        std::array::from_fn(|i| self.read(i))
    }

    /// Dumps the contents of all general-purpose registers to stderr.
    ///
    /// Displays registers in pairs with hexadecimal formatting for debugging purposes.
    pub fn dump(&self) {
        for i in (0..NUM_REGS).step_by(2) {
            eprintln!(
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.read(i),
                i + 1,
                self.read(i + 1)
            );
        }
    }
}
