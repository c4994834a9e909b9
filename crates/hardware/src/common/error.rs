//! Error and Trap definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Decode Errors:** Instruction words outside the supported RV32I subset.
//! 2. **Memory Faults:** Accesses that do not fit inside main memory.
//! 3. **Traps:** Faults carried by an in-flight instruction until it reaches Execute.
//! 4. **Run Errors:** The top-level error returned by the simulator and loader.

use thiserror::Error;

use super::data::{AccessType, AccessWidth};

/// An instruction word that is not part of the supported instruction set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The major opcode (bits 6-0) is not recognised.
    #[error("unknown opcode {opcode:#04x} in instruction {word:#010x}")]
    UnknownOpcode {
        /// Raw instruction encoding.
        word: u32,
        /// Extracted opcode field.
        opcode: u32,
    },

    /// The opcode is known but its function-code fields select no instruction.
    #[error(
        "unsupported funct3={funct3:#x} funct7={funct7:#x} for opcode {opcode:#04x} in instruction {word:#010x}"
    )]
    UnknownFunction {
        /// Raw instruction encoding.
        word: u32,
        /// Extracted opcode field.
        opcode: u32,
        /// Extracted funct3 field.
        funct3: u32,
        /// Extracted funct7 field.
        funct7: u32,
    },
}

impl DecodeError {
    /// Returns the raw instruction word that failed to decode.
    pub const fn word(&self) -> u32 {
        match self {
            Self::UnknownOpcode { word, .. } | Self::UnknownFunction { word, .. } => *word,
        }
    }
}

/// A memory access that falls outside main memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{access} of {} byte(s) at {addr:#010x} is outside main memory", .width.bytes())]
pub struct MemoryFault {
    /// First byte address of the access.
    pub addr: u32,
    /// Width of the access.
    pub width: AccessWidth,
    /// Kind of access.
    pub access: AccessType,
}

/// A fault raised by an instruction in flight.
///
/// Fetch cannot tell whether it is on the correct path, so a bad fetch is
/// carried down the pipeline as a trap and only raised if it reaches
/// Execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// The fetched word could not be decoded.
    #[error("illegal instruction: {0}")]
    IllegalInstruction(#[from] DecodeError),

    /// A fetch, load, or store went outside main memory.
    #[error("access fault: {0}")]
    AccessFault(#[from] MemoryFault),
}

/// A malformed memory image.
#[derive(Debug, Error)]
pub enum ImageError {
    /// A token that is not a base-16 byte value.
    #[error("line {line}: invalid byte {token:?}")]
    InvalidByte {
        /// 1-based line number of the token.
        line: usize,
        /// Offending token.
        token: String,
    },

    /// An address marker whose address part is not base 16.
    #[error("line {line}: invalid address marker {token:?}")]
    InvalidAddress {
        /// 1-based line number of the marker.
        line: usize,
        /// Offending token.
        token: String,
    },

    /// The image writes past the end of main memory.
    #[error("line {line}: {fault}")]
    Overflow {
        /// 1-based line number of the byte that did not fit.
        line: usize,
        /// The rejected write.
        fault: MemoryFault,
    },
}

/// Top-level simulator error.
#[derive(Debug, Error)]
pub enum SimError {
    /// An in-flight instruction faulted.
    #[error(transparent)]
    Trap(#[from] Trap),

    /// The memory image could not be loaded.
    #[error("memory image: {0}")]
    Image(#[from] ImageError),

    /// Reading the image or configuration failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for [`crate::config::SimConfig`].
    #[error("configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The program did not reach the exit store within the configured cycle budget.
    #[error("no exit after {cycles} cycles")]
    CycleLimit {
        /// Cycles simulated before giving up.
        cycles: u64,
    },
}
