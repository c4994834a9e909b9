//! Simulation driver and program loading.
//!
//! Provides the memory image loader and the run-to-completion
//! [`Simulator`](simulator::Simulator) built on the cycle driver.

/// Hex memory image loader.
pub mod loader;

/// Run-to-completion simulator: exit detection, drain, and result.
pub mod simulator;

pub use simulator::Simulator;
