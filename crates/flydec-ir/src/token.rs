//! Schema tokens and their structural signals.

use serde::Serialize;

use crate::encoding::Encoding;
use crate::text::Text;

/// Structural/semantic role of a token.
///
/// The decoder only inspects the BEGIN/END message and composite markers;
/// every other role (fields, groups, enums, sets, var-data, encoding leaves)
/// is carried through for the downstream message decoder. Codes outside the
/// known set decode as `Unknown` and re-encode unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Signal {
    BeginMessage,
    EndMessage,
    BeginComposite,
    EndComposite,
    BeginField,
    EndField,
    BeginGroup,
    EndGroup,
    BeginEnum,
    ValidValue,
    EndEnum,
    BeginSet,
    Choice,
    EndSet,
    BeginVarData,
    EndVarData,
    Encoding,
    Unknown(u8),
}

impl Signal {
    /// Decode from a wire code.
    pub fn from_u8(b: u8) -> Self {
        match b {
            1 => Self::BeginMessage,
            2 => Self::EndMessage,
            3 => Self::BeginComposite,
            4 => Self::EndComposite,
            5 => Self::BeginField,
            6 => Self::EndField,
            7 => Self::BeginGroup,
            8 => Self::EndGroup,
            9 => Self::BeginEnum,
            10 => Self::ValidValue,
            11 => Self::EndEnum,
            12 => Self::BeginSet,
            13 => Self::Choice,
            14 => Self::EndSet,
            15 => Self::BeginVarData,
            16 => Self::EndVarData,
            17 => Self::Encoding,
            other => Self::Unknown(other),
        }
    }

    /// Encode to a wire code.
    pub fn to_u8(self) -> u8 {
        match self {
            Self::BeginMessage => 1,
            Self::EndMessage => 2,
            Self::BeginComposite => 3,
            Self::EndComposite => 4,
            Self::BeginField => 5,
            Self::EndField => 6,
            Self::BeginGroup => 7,
            Self::EndGroup => 8,
            Self::BeginEnum => 9,
            Self::ValidValue => 10,
            Self::EndEnum => 11,
            Self::BeginSet => 12,
            Self::Choice => 13,
            Self::EndSet => 14,
            Self::BeginVarData => 15,
            Self::EndVarData => 16,
            Self::Encoding => 17,
            Self::Unknown(other) => other,
        }
    }
}

/// Presence rule of an encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Presence {
    Required,
    Optional,
    Constant,
    Unknown(u8),
}

impl Presence {
    pub fn from_u8(b: u8) -> Self {
        match b {
            0 => Self::Required,
            1 => Self::Optional,
            2 => Self::Constant,
            other => Self::Unknown(other),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            Self::Required => 0,
            Self::Optional => 1,
            Self::Constant => 2,
            Self::Unknown(other) => other,
        }
    }
}

/// One decoded schema element.
///
/// `token_size` is the encoded byte size of the element inside a message
/// payload (not the size of the IR record it was decoded from), and
/// `component_token_count` spans this token's BEGIN/END pair inclusive.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token {
    pub token_offset: i32,
    pub field_id: i32,
    pub token_version: i32,
    pub token_size: i32,
    pub component_token_count: i32,
    pub signal: Signal,
    pub name: Text,
    pub description: Text,
    pub encoding: Encoding,
}
