//! Token record codec.
//!
//! Each token record is self-describing: a length-prefixed fixed block
//! followed by ten var fields (four primitive value slots, then the six
//! string trailers). The caller advances by exactly the returned record
//! size; there is no padding or alignment between records.

use crate::Result;
use crate::cursor::Cursor;
use crate::encoding::Encoding;
use crate::error::IrError;
use crate::frame::encode_var;
use crate::text::Text;
use crate::token::{Presence, Signal, Token};
use crate::value::{ByteOrder, PrimitiveType, PrimitiveValue};

/// Fixed-block length written by this version (five i32 + four u8 fields).
pub const TOKEN_BLOCK_LENGTH: u16 = 24;

impl Token {
    /// Decode one token record at `offset`, returning it and its record size.
    ///
    /// Unknown signal, primitive-type, presence, or byte-order codes are not
    /// errors; they decode into the `Unknown` variants and value slots they
    /// govern stay opaque. The only failure here is a record whose declared
    /// content runs past the buffer end.
    pub fn decode(bytes: &[u8], offset: usize) -> Result<(Self, usize)> {
        let mut cur = Cursor::new(bytes, offset);

        let block_length = cur.u16_le()?;
        if block_length < TOKEN_BLOCK_LENGTH {
            return Err(IrError::MalformedStructure("token block too short"));
        }
        let token_offset = cur.i32_le()?;
        let field_id = cur.i32_le()?;
        let token_version = cur.i32_le()?;
        let token_size = cur.i32_le()?;
        let component_token_count = cur.i32_le()?;
        let signal = Signal::from_u8(cur.u8()?);
        let primitive_type = PrimitiveType::from_u8(cur.u8()?);
        let byte_order = ByteOrder::from_u8(cur.u8()?);
        let presence = Presence::from_u8(cur.u8()?);
        cur.skip(block_length as usize - TOKEN_BLOCK_LENGTH as usize)?;

        let const_value = PrimitiveValue::decode(primitive_type, byte_order, cur.var()?);
        let min_value = PrimitiveValue::decode(primitive_type, byte_order, cur.var()?);
        let max_value = PrimitiveValue::decode(primitive_type, byte_order, cur.var()?);
        let null_value = PrimitiveValue::decode(primitive_type, byte_order, cur.var()?);

        let name = Text::from(cur.var()?);
        let character_encoding = Text::from(cur.var()?);
        let epoch = Text::from(cur.var()?);
        let time_unit = Text::from(cur.var()?);
        let semantic_type = Text::from(cur.var()?);
        let description = Text::from(cur.var()?);

        let token = Self {
            token_offset,
            field_id,
            token_version,
            token_size,
            component_token_count,
            signal,
            name,
            description,
            encoding: Encoding {
                primitive_type,
                presence,
                byte_order,
                min_value,
                max_value,
                null_value,
                const_value,
                character_encoding,
                epoch,
                time_unit,
                semantic_type,
            },
        };
        Ok((token, cur.consumed()))
    }

    /// Append this token's wire bytes to `out` (current-version layout).
    ///
    /// Re-encoding a decoded token reproduces the original record bytes,
    /// provided the source record carried no fixed-block extension.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        let enc = &self.encoding;

        out.extend_from_slice(&TOKEN_BLOCK_LENGTH.to_le_bytes());
        out.extend_from_slice(&self.token_offset.to_le_bytes());
        out.extend_from_slice(&self.field_id.to_le_bytes());
        out.extend_from_slice(&self.token_version.to_le_bytes());
        out.extend_from_slice(&self.token_size.to_le_bytes());
        out.extend_from_slice(&self.component_token_count.to_le_bytes());
        out.push(self.signal.to_u8());
        out.push(enc.primitive_type.to_u8());
        out.push(enc.byte_order.to_u8());
        out.push(enc.presence.to_u8());

        for value in [
            &enc.const_value,
            &enc.min_value,
            &enc.max_value,
            &enc.null_value,
        ] {
            let mut raw = Vec::new();
            value.encode_into(enc.byte_order, &mut raw);
            encode_var(&raw, out);
        }

        encode_var(self.name.as_bytes(), out);
        encode_var(enc.character_encoding.as_bytes(), out);
        encode_var(enc.epoch.as_bytes(), out);
        encode_var(enc.time_unit.as_bytes(), out);
        encode_var(enc.semantic_type.as_bytes(), out);
        encode_var(self.description.as_bytes(), out);
    }
}
