//! Execution units and functional components.
//!
//! This module contains the integer ALU and the branch resolution unit,
//! including the static next-PC predictor used by Fetch.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit and static next-PC predictor.
pub mod bru;
