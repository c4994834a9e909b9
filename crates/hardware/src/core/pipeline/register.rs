//! Clocked Storage Cell.
//!
//! This module implements the two-buffer register that gives every pipeline
//! latch and architectural register its synchronous update semantics. It provides:
//! 1. **Pending/Committed Buffers:** Writes land in the pending buffer; reads see the committed one.
//! 2. **Priority Writes:** A selected write holds the cell so later ordinary writes that cycle are dropped.
//! 3. **Stall Freezing:** Stall-sensitive cells keep their committed value across a stalled clock edge.
//! 4. **Hardwired Zero:** Zero cells read as the default value regardless of their contents.

/// A clocked storage cell with pending and committed buffers.
///
/// Readers observe [`read`](Self::read), the value committed at the last
/// clock edge. Stages that run later in the same cycle can observe a
/// downstream stage's output early through [`read_pending`](Self::read_pending).
#[derive(Clone, Debug, Default)]
pub struct ClockedRegister<T> {
    pending: T,
    committed: T,
    held: bool,
    stall_sensitive: bool,
    zero: bool,
}

impl<T: Copy + Default> ClockedRegister<T> {
    /// Creates an ordinary cell holding `T::default()` in both buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cell that freezes on clock edges where a stall is in effect.
    pub fn stall_sensitive() -> Self {
        Self {
            stall_sensitive: true,
            ..Self::default()
        }
    }

    /// Creates a cell that always reads as `T::default()`.
    pub fn zero() -> Self {
        Self {
            zero: true,
            ..Self::default()
        }
    }

    /// Returns the committed value, or `T::default()` for a zero cell.
    #[inline]
    pub fn read(&self) -> T {
        if self.zero {
            T::default()
        } else {
            self.committed
        }
    }

    /// Returns the value written this cycle that will be committed at the next edge.
    #[inline]
    pub fn read_pending(&self) -> T {
        self.pending
    }

    /// Writes the pending buffer.
    ///
    /// Returns `false`, leaving the cell unchanged, if a priority write
    /// already landed this cycle.
    #[inline]
    pub fn write(&mut self, value: T) -> bool {
        if self.held {
            return false;
        }
        self.pending = value;
        true
    }

    /// Writes the pending buffer and holds the cell for the rest of the cycle.
    ///
    /// Only the first priority write of a cycle succeeds; `false` is
    /// returned for any later one.
    #[inline]
    pub fn write_sel(&mut self, value: T) -> bool {
        if self.held {
            return false;
        }
        self.pending = value;
        self.held = true;
        true
    }

    /// Returns `true` if a priority write landed this cycle.
    #[inline]
    pub const fn is_held(&self) -> bool {
        self.held
    }

    /// Applies the clock edge.
    ///
    /// Copies pending into committed unless the cell is stall-sensitive and
    /// `stall` is set. The hold is released either way.
    #[inline]
    pub fn commit(&mut self, stall: bool) {
        if !(self.stall_sensitive && stall) {
            self.committed = self.pending;
        }
        self.held = false;
    }
}
