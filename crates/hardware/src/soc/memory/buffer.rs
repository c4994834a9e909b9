//! DRAM Buffer Implementation.
//!
//! This module provides the backing byte store for main memory. Every
//! access is range-checked against the buffer length; the caller turns a
//! failed check into a fault.

use std::ops::Range;

/// A zero-initialised, fixed-size byte buffer.
#[derive(Clone)]
pub struct DramBuffer {
    bytes: Vec<u8>,
}

impl DramBuffer {
    /// Creates a new DRAM buffer of the specified size, filled with zeros.
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the buffer in bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Returns the size of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer has no storage.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the byte range `[offset, offset + len)` if it lies inside the buffer.
    fn range(&self, offset: usize, len: usize) -> Option<Range<usize>> {
        let end = offset.checked_add(len)?;
        (end <= self.bytes.len()).then_some(offset..end)
    }

    /// Reads a slice of memory, or `None` if any byte lies outside the buffer.
    pub fn read_slice(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let range = self.range(offset, len)?;
        self.bytes.get(range)
    }

    /// Writes a slice of memory.
    ///
    /// Returns `false`, leaving the buffer unchanged, if any byte lies outside it.
    pub fn write_slice(&mut self, offset: usize, data: &[u8]) -> bool {
        let Some(range) = self.range(offset, data.len()) else {
            return false;
        };
        self.bytes[range].copy_from_slice(data);
        true
    }
}

impl std::fmt::Debug for DramBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DramBuffer")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
