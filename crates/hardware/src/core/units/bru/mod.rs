//! Branch resolution unit (BRU).
//!
//! This module evaluates conditional branch predicates in Execute and holds
//! the static next-PC predictor used by Fetch.

pub use self::static_bp::StaticPredictor;

/// Static next-PC predictor (not taken, JAL followed).
pub mod static_bp;

use crate::core::pipeline::signals::BranchCond;

/// Branch comparator used by the Execute stage.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Returns `true` if a branch with predicate `cond` is taken for operands `a` and `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32pipe_core::core::units::bru::Bru;
    /// use rv32pipe_core::core::pipeline::signals::BranchCond;
    ///
    /// assert!(Bru::taken(BranchCond::Lt, -1_i32 as u32, 0));
    /// assert!(!Bru::taken(BranchCond::Ltu, -1_i32 as u32, 0));
    /// ```
    pub const fn taken(cond: BranchCond, a: u32, b: u32) -> bool {
        match cond {
            BranchCond::Eq => a == b,
            BranchCond::Ne => a != b,
            BranchCond::Lt => (a as i32) < (b as i32),
            BranchCond::Ge => (a as i32) >= (b as i32),
            BranchCond::Ltu => a < b,
            BranchCond::Geu => a >= b,
        }
    }
}
