//! Memory Image Loader.
//!
//! This module places a textual hex memory image into main memory. It performs:
//! 1. **Byte loading:** Whitespace-separated base-16 byte values are stored at an advancing cursor.
//! 2. **Repositioning:** A token `@ADDR` moves the cursor to the base-16 address `ADDR`.
//! 3. **Validation:** Malformed tokens and writes past the end of memory are reported with their line.
//!
//! The cursor starts at address 0.
//!
//! ```text
//! @00000000
//! 13 05 c0 00 37 05 03 00
//! @00001000
//! ff 00
//! ```

use tracing::info;

use crate::common::error::ImageError;
use crate::soc::memory::Memory;

/// Prefix of an address marker token.
const ADDRESS_MARKER: char = '@';

/// Base of byte values and addresses in the image.
const IMAGE_RADIX: u32 = 16;

/// Loads a hex memory image into `memory`.
///
/// # Arguments
///
/// * `text` - The image text.
/// * `memory` - Destination memory.
///
/// # Returns
///
/// The number of bytes written.
///
/// # Errors
///
/// Returns an [`ImageError`] for the first malformed token or the first
/// byte that does not fit in memory. Bytes before it have been written.
///
/// # Examples
///
/// ```
/// use rv32pipe_core::sim::loader::load_image;
/// use rv32pipe_core::soc::memory::Memory;
/// use rv32pipe_core::common::AccessWidth;
///
/// let mut memory = Memory::new(0x100);
/// let written = load_image("01 02\n@10\nff", &mut memory).unwrap();
/// assert_eq!(written, 3);
/// assert_eq!(memory.load(0, AccessWidth::Half, false).unwrap(), 0x0201);
/// assert_eq!(memory.load(0x10, AccessWidth::Byte, false).unwrap(), 0xff);
/// ```
pub fn load_image(text: &str, memory: &mut Memory) -> Result<usize, ImageError> {
    let mut cursor: u32 = 0;
    let mut written = 0;

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        for token in line.split_whitespace() {
            if let Some(addr) = token.strip_prefix(ADDRESS_MARKER) {
                cursor = u32::from_str_radix(addr, IMAGE_RADIX).map_err(|_| {
                    ImageError::InvalidAddress {
                        line: line_no,
                        token: token.to_owned(),
                    }
                })?;
                continue;
            }

            let byte =
                u8::from_str_radix(token, IMAGE_RADIX).map_err(|_| ImageError::InvalidByte {
                    line: line_no,
                    token: token.to_owned(),
                })?;
            memory
                .write_bytes(cursor, &[byte])
                .map_err(|fault| ImageError::Overflow {
                    line: line_no,
                    fault,
                })?;
            cursor = cursor.wrapping_add(1);
            written += 1;
        }
    }

    info!(bytes = written, "memory image loaded");
    Ok(written)
}
