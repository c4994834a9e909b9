//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, field extraction, the
//! decoded instruction model, and decoding logic for the supported RV32I
//! integer subset (no multiply/divide, atomics, floating point, or system
//! instructions).

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding logic for all supported instruction formats.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction and the decoded instruction model.
pub mod instruction;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;

pub use decode::decode;
pub use instruction::{Instruction, InstructionBits};
