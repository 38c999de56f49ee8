//! Append-only byte buffer used for rendered output.
//!
//! Every node is rendered into a fresh [`Buffer`] holding its children's
//! output, and the node's rule then appends its own markup into the parent's
//! buffer. Buffers only ever grow.

use std::fmt;

use bstr::{ByteSlice, ByteVec};

/// A growable byte sink.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    bytes: Vec<u8>,
}

impl Buffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Current size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Append raw bytes.
    pub fn put(&mut self, data: &[u8]) {
        self.bytes.extend_from_slice(data);
    }

    /// Append a single byte.
    pub fn putc(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Append a string.
    pub fn puts(&mut self, s: &str) {
        self.bytes.extend_from_slice(s.as_bytes());
    }

    /// Append formatted text.
    ///
    /// Use with `format_args!`: `ob.put_fmt(format_args!("<h{}>", level))`.
    pub fn put_fmt(&mut self, args: fmt::Arguments<'_>) {
        // write_str below never fails
        let _ = fmt::Write::write_fmt(self, args);
    }

    /// Consume the buffer, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Consume the buffer as a string, replacing invalid UTF-8 sequences.
    pub fn into_string(self) -> String {
        self.bytes.into_string_lossy()
    }
}

impl fmt::Write for Buffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.puts(s);
        Ok(())
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Buffer").field(&self.bytes.as_bstr()).finish()
    }
}

impl From<&str> for Buffer {
    fn from(s: &str) -> Self {
        Self {
            bytes: s.as_bytes().to_vec(),
        }
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
