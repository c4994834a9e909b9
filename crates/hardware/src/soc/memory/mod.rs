//! Main Memory.
//!
//! This module implements the flat, byte-addressable main memory. It provides:
//! 1. **Buffer:** Backing storage ([`DramBuffer`]) for RAM contents.
//! 2. **Data Access:** Little-endian byte, halfword, and word loads and stores, with
//!    sign or zero extension for narrow loads.
//! 3. **Fetch and Loading:** Word reads for the Fetch stage and bulk writes for the image loader.
//!
//! Accesses may be unaligned. An access with any byte outside the array is
//! reported as a [`MemoryFault`].

/// DRAM buffer implementation (`Vec`-backed) for raw byte storage.
pub mod buffer;

use self::buffer::DramBuffer;
use crate::common::constants::MEMORY_SIZE;
use crate::common::data::{AccessType, AccessWidth};
use crate::common::error::MemoryFault;

/// System Memory structure.
#[derive(Clone, Debug)]
pub struct Memory {
    buffer: DramBuffer,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(MEMORY_SIZE)
    }
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes mapped at address 0.
    pub fn new(size: usize) -> Self {
        Self {
            buffer: DramBuffer::new(size),
        }
    }

    /// Returns the size of memory in bytes.
    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    /// Reads `width` bytes at `addr` as a little-endian value.
    fn read(&self, addr: u32, width: AccessWidth, access: AccessType) -> Result<u32, MemoryFault> {
        let bytes = self
            .buffer
            .read_slice(addr as usize, width.bytes())
            .ok_or(MemoryFault {
                addr,
                width,
                access,
            })?;
        Ok(bytes
            .iter()
            .rev()
            .fold(0, |acc, &byte| (acc << 8) | u32::from(byte)))
    }

    /// Loads a value for a load instruction.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address of the first byte.
    /// * `width` - Number of bytes to read.
    /// * `signed` - Whether a narrow value is sign-extended rather than zero-extended.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryFault`] if any byte lies outside memory.
    pub fn load(&self, addr: u32, width: AccessWidth, signed: bool) -> Result<u32, MemoryFault> {
        let raw = self.read(addr, width, AccessType::Read)?;
        let value = match width {
            AccessWidth::Word => raw,
            _ if signed => {
                let shift = 32 - width.bits();
                (((raw << shift) as i32) >> shift) as u32
            }
            _ => raw,
        };
        Ok(value)
    }

    /// Stores the low `width` bytes of `value` at `addr`.
    ///
    /// Bytes outside the access width are left untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryFault`] if any byte lies outside memory; memory is then unchanged.
    pub fn store(&mut self, addr: u32, width: AccessWidth, value: u32) -> Result<(), MemoryFault> {
        let bytes = value.to_le_bytes();
        if self.buffer.write_slice(addr as usize, &bytes[..width.bytes()]) {
            Ok(())
        } else {
            Err(MemoryFault {
                addr,
                width,
                access: AccessType::Write,
            })
        }
    }

    /// Reads the instruction word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryFault`] with [`AccessType::Fetch`] if the word lies outside memory.
    pub fn read_u32(&self, addr: u32) -> Result<u32, MemoryFault> {
        self.read(addr, AccessWidth::Word, AccessType::Fetch)
    }

    /// Copies `data` into memory starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryFault`] for the first byte that does not fit;
    /// memory is then unchanged.
    pub fn write_bytes(&mut self, addr: u32, data: &[u8]) -> Result<(), MemoryFault> {
        if self.buffer.write_slice(addr as usize, data) {
            return Ok(());
        }
        let first_outside = (addr as usize).max(self.size());
        Err(MemoryFault {
            addr: u32::try_from(first_outside).unwrap_or(u32::MAX),
            width: AccessWidth::Byte,
            access: AccessType::Write,
        })
    }
}
