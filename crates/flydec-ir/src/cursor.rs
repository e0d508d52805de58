//! Bounds-checked reader over one IR record.

use crate::error::IrError;

/// Sequential reader positioned inside the IR buffer.
///
/// Every read is checked against the buffer end and fails with
/// [`IrError::TruncatedRecord`] reporting the start offset of the record
/// being decoded, so a cut-off trailer surfaces as a decode error rather
/// than a panic.
pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    start: usize,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Start reading a record at `offset`.
    pub fn new(bytes: &'a [u8], offset: usize) -> Self {
        Self {
            bytes,
            start: offset,
            pos: offset,
        }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], IrError> {
        // The start offset itself may already lie past the buffer end.
        let remaining = self.bytes.len().saturating_sub(self.pos);
        if self.pos > self.bytes.len() || n > remaining {
            return Err(IrError::TruncatedRecord {
                offset: self.start,
                needed: n,
                remaining,
            });
        }
        let slice = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn u8(&mut self) -> Result<u8, IrError> {
        Ok(self.take(1)?[0])
    }

    pub fn u16_le(&mut self) -> Result<u16, IrError> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn i32_le(&mut self) -> Result<i32, IrError> {
        let b = self.take(4)?;
        Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read a u16-length-prefixed field.
    pub fn var(&mut self) -> Result<&'a [u8], IrError> {
        let len = self.u16_le()? as usize;
        self.take(len)
    }

    /// Skip `n` bytes (fixed-block extension from a newer writer).
    pub fn skip(&mut self, n: usize) -> Result<(), IrError> {
        self.take(n).map(|_| ())
    }

    /// Bytes consumed since the record start.
    pub fn consumed(&self) -> usize {
        self.pos - self.start
    }
}
