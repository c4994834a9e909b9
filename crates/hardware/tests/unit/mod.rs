//! # Unit Components
//!
//! This module serves as the central hub for the unit tests, organized the
//! same way as the library: processor core, ISA definitions, main memory,
//! and the simulation driver.
