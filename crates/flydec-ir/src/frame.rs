//! Frame header record: the fixed leading record of an IR stream.

use serde::Serialize;

use crate::Result;
use crate::cursor::Cursor;
use crate::error::IrError;
use crate::text::Text;

/// The one IR format version this decoder understands.
pub const IR_VERSION: i32 = 0;

/// Fixed-block length written by this version (three i32 fields).
pub const FRAME_BLOCK_LENGTH: u16 = 12;

/// Decoded frame header.
///
/// Carries the IR identity and the schema names used by downstream decoders.
/// `block_length` is the fixed-block length the record declared for itself;
/// a newer compiler may declare more than [`FRAME_BLOCK_LENGTH`] and the
/// extra bytes are skipped, so the frame can grow without breaking old
/// decoders.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameHeader {
    pub ir_id: i32,
    pub ir_version: i32,
    pub schema_version: i32,
    pub block_length: u16,
    pub package_name: Text,
    pub namespace_name: Text,
    pub semantic_version: Text,
}

impl FrameHeader {
    /// Decode the frame record at `offset`, returning it and its record size.
    ///
    /// Fails with [`IrError::UnsupportedVersion`] before reading any further
    /// record content when `ir_version` is not [`IR_VERSION`].
    pub fn decode(bytes: &[u8], offset: usize) -> Result<(Self, usize)> {
        let mut cur = Cursor::new(bytes, offset);

        let block_length = cur.u16_le()?;
        if block_length < FRAME_BLOCK_LENGTH {
            return Err(IrError::MalformedStructure("frame block too short"));
        }
        let ir_id = cur.i32_le()?;
        let ir_version = cur.i32_le()?;
        if ir_version != IR_VERSION {
            return Err(IrError::UnsupportedVersion(ir_version));
        }
        let schema_version = cur.i32_le()?;
        cur.skip(block_length as usize - FRAME_BLOCK_LENGTH as usize)?;

        let package_name = Text::from(cur.var()?);
        let namespace_name = Text::from(cur.var()?);
        let semantic_version = Text::from(cur.var()?);

        let frame = Self {
            ir_id,
            ir_version,
            schema_version,
            block_length,
            package_name,
            namespace_name,
            semantic_version,
        };
        Ok((frame, cur.consumed()))
    }

    /// Append this frame's wire bytes to `out` (current-version layout).
    ///
    /// Always writes [`FRAME_BLOCK_LENGTH`]; fixed-block extension bytes a
    /// newer writer appended are skipped on decode and not reproduced here.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&FRAME_BLOCK_LENGTH.to_le_bytes());
        out.extend_from_slice(&self.ir_id.to_le_bytes());
        out.extend_from_slice(&self.ir_version.to_le_bytes());
        out.extend_from_slice(&self.schema_version.to_le_bytes());
        encode_var(self.package_name.as_bytes(), out);
        encode_var(self.namespace_name.as_bytes(), out);
        encode_var(self.semantic_version.as_bytes(), out);
    }
}

/// Write a u16-length-prefixed field.
///
/// Payloads longer than the prefix can express are truncated to
/// `u16::MAX` bytes, keeping the length prefix and the written bytes in
/// agreement so the stream stays parseable.
pub(crate) fn encode_var(bytes: &[u8], out: &mut Vec<u8>) {
    let len = bytes.len().min(u16::MAX as usize);
    out.extend_from_slice(&(len as u16).to_le_bytes());
    out.extend_from_slice(&bytes[..len]);
}
