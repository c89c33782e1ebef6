//! Reusable file-copy buffer.
//!
//! Copy operations run once per file across the whole pipeline (extraction,
//! installation, packaging), so a single stack-allocated buffer is shared
//! instead of allocating per copy.

use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::io::{self};
use std::path::Path;

use crate::Result;

/// Buffer size for I/O operations (64 KB), matching typical filesystem block
/// sizes.
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Stack-allocated buffer reused across copy operations.
#[derive(Debug)]
pub struct CopyBuffer {
    #[allow(clippy::large_stack_arrays)]
    buf: [u8; COPY_BUFFER_SIZE],
}

impl CopyBuffer {
    /// Creates a new zero-initialized copy buffer.
    #[inline]
    #[must_use]
    #[allow(clippy::large_stack_arrays)]
    pub fn new() -> Self {
        Self {
            buf: [0u8; COPY_BUFFER_SIZE],
        }
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies all data from `reader` to `writer` through the shared buffer.
///
/// Returns the number of bytes copied.
pub fn copy_with_buffer<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
) -> Result<u64> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        writer.write_all(&buffer.buf[..bytes_read])?;
        total += bytes_read as u64;
    }

    Ok(total)
}

/// Copies a single file, overwriting `dest` if it exists.
///
/// Returns the number of bytes copied.
pub fn copy_file(src: &Path, dest: &Path, buffer: &mut CopyBuffer) -> Result<u64> {
    let mut input = File::open(src)?;
    let mut output = File::create(dest)?;
    copy_with_buffer(&mut input, &mut output, buffer)
}
