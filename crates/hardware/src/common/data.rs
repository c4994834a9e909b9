//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used throughout the simulator.
//! These types are used for the following:
//! 1. **Access Width:** Byte, halfword, and word transfers for loads and stores.
//! 2. **Fault Reporting:** Recording which kind of access went out of range.

use std::fmt;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access from the Fetch stage.
    Fetch,

    /// Data read access from a load in the Memory stage.
    Read,

    /// Data write access from a store in the Memory stage, or from the image loader.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => write!(f, "fetch"),
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// Width of a single memory transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessWidth {
    /// 8-bit transfer.
    Byte,
    /// 16-bit transfer.
    Half,
    /// 32-bit transfer.
    Word,
}

impl AccessWidth {
    /// Number of bytes moved by an access of this width.
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }

    /// Number of bits moved by an access of this width.
    #[inline]
    pub const fn bits(self) -> u32 {
        (self.bytes() * 8) as u32
    }
}
