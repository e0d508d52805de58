//! Primitive types and typed value holders.
//!
//! A token's const/min/max/null slots arrive as raw bytes whose width is
//! determined by the token's primitive type at runtime. [`PrimitiveValue`]
//! interprets those bytes; anything it cannot interpret (future type codes,
//! future byte-order codes, off-width slots) is preserved verbatim so the
//! stream survives a decode/re-encode round trip.

use serde::Serialize;

/// Primitive kind of a schema encoding.
///
/// Open code set: codes this crate does not know decode as `Unknown` and
/// re-encode unchanged, so IR from a newer schema compiler stays decodable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PrimitiveType {
    None,
    Char,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float,
    Double,
    Unknown(u8),
}

impl PrimitiveType {
    /// Decode from a wire code.
    pub fn from_u8(b: u8) -> Self {
        match b {
            0 => Self::None,
            1 => Self::Char,
            2 => Self::Int8,
            3 => Self::Int16,
            4 => Self::Int32,
            5 => Self::Int64,
            6 => Self::UInt8,
            7 => Self::UInt16,
            8 => Self::UInt32,
            9 => Self::UInt64,
            10 => Self::Float,
            11 => Self::Double,
            other => Self::Unknown(other),
        }
    }

    /// Encode to a wire code.
    pub fn to_u8(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Char => 1,
            Self::Int8 => 2,
            Self::Int16 => 3,
            Self::Int32 => 4,
            Self::Int64 => 5,
            Self::UInt8 => 6,
            Self::UInt16 => 7,
            Self::UInt32 => 8,
            Self::UInt64 => 9,
            Self::Float => 10,
            Self::Double => 11,
            Self::Unknown(other) => other,
        }
    }

    /// Natural encoded width in bytes, or `None` for `None`/`Unknown`.
    pub fn size(self) -> Option<usize> {
        match self {
            Self::Char | Self::Int8 | Self::UInt8 => Some(1),
            Self::Int16 | Self::UInt16 => Some(2),
            Self::Int32 | Self::UInt32 | Self::Float => Some(4),
            Self::Int64 | Self::UInt64 | Self::Double => Some(8),
            Self::None | Self::Unknown(_) => None,
        }
    }
}

/// Byte order governing multi-byte field interpretation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
    Unknown(u8),
}

impl ByteOrder {
    pub fn from_u8(b: u8) -> Self {
        match b {
            0 => Self::LittleEndian,
            1 => Self::BigEndian,
            other => Self::Unknown(other),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            Self::LittleEndian => 0,
            Self::BigEndian => 1,
            Self::Unknown(other) => other,
        }
    }
}

/// A typed const/min/max/null value slot.
///
/// `None` is the "unset" sentinel (a zero-length slot on the wire) and must
/// not be read as a typed value. `Opaque` carries slots this crate cannot
/// interpret: unknown primitive types, unknown byte orders, or a byte length
/// that does not match the type's natural width.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum PrimitiveValue {
    None,
    Char(u8),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float(f32),
    Double(f64),
    Opaque(Vec<u8>),
}

macro_rules! read_ordered {
    ($variant:ident, $ty:ty, $order:expr, $bytes:expr) => {{
        let arr: [u8; size_of::<$ty>()] = $bytes.try_into().unwrap();
        match $order {
            ByteOrder::LittleEndian => PrimitiveValue::$variant(<$ty>::from_le_bytes(arr)),
            ByteOrder::BigEndian => PrimitiveValue::$variant(<$ty>::from_be_bytes(arr)),
            ByteOrder::Unknown(_) => unreachable!("handled before dispatch"),
        }
    }};
}

impl PrimitiveValue {
    /// Interpret a raw value slot.
    ///
    /// Empty `bytes` is the unset sentinel. A slot that cannot be interpreted
    /// as `ty` in `order` is preserved as `Opaque`.
    pub fn decode(ty: PrimitiveType, order: ByteOrder, bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::None;
        }
        if matches!(order, ByteOrder::Unknown(_)) || ty.size() != Some(bytes.len()) {
            return Self::Opaque(bytes.to_vec());
        }

        match ty {
            PrimitiveType::Char => Self::Char(bytes[0]),
            PrimitiveType::Int8 => Self::Int8(bytes[0] as i8),
            PrimitiveType::UInt8 => Self::UInt8(bytes[0]),
            PrimitiveType::Int16 => read_ordered!(Int16, i16, order, bytes),
            PrimitiveType::UInt16 => read_ordered!(UInt16, u16, order, bytes),
            PrimitiveType::Int32 => read_ordered!(Int32, i32, order, bytes),
            PrimitiveType::UInt32 => read_ordered!(UInt32, u32, order, bytes),
            PrimitiveType::Int64 => read_ordered!(Int64, i64, order, bytes),
            PrimitiveType::UInt64 => read_ordered!(UInt64, u64, order, bytes),
            PrimitiveType::Float => read_ordered!(Float, f32, order, bytes),
            PrimitiveType::Double => read_ordered!(Double, f64, order, bytes),
            PrimitiveType::None | PrimitiveType::Unknown(_) => {
                unreachable!("size() is None, handled above")
            }
        }
    }

    /// Append the wire bytes of this slot to `out`.
    ///
    /// Reproduces the exact bytes [`decode`](Self::decode) consumed: `None`
    /// contributes nothing, typed values serialize in `order`, `Opaque`
    /// re-emits its raw bytes.
    pub fn encode_into(&self, order: ByteOrder, out: &mut Vec<u8>) {
        macro_rules! write_ordered {
            ($v:expr) => {
                match order {
                    ByteOrder::BigEndian => out.extend_from_slice(&$v.to_be_bytes()),
                    _ => out.extend_from_slice(&$v.to_le_bytes()),
                }
            };
        }

        match self {
            Self::None => {}
            Self::Char(v) | Self::UInt8(v) => out.push(*v),
            Self::Int8(v) => out.push(*v as u8),
            Self::Int16(v) => write_ordered!(v),
            Self::UInt16(v) => write_ordered!(v),
            Self::Int32(v) => write_ordered!(v),
            Self::UInt32(v) => write_ordered!(v),
            Self::Int64(v) => write_ordered!(v),
            Self::UInt64(v) => write_ordered!(v),
            Self::Float(v) => write_ordered!(v),
            Self::Double(v) => write_ordered!(v),
            Self::Opaque(bytes) => out.extend_from_slice(bytes),
        }
    }

    /// Whether this slot is the unset sentinel.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
