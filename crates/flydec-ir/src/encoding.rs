//! Encoding metadata attached to each token.

use serde::Serialize;

use crate::text::Text;
use crate::token::Presence;
use crate::value::{ByteOrder, PrimitiveType, PrimitiveValue};

/// Primitive encoding of a schema element.
///
/// Immutable after decode. The four value slots, when set, share
/// `primitive_type`; unset slots are [`PrimitiveValue::None`]. The string
/// metadata fields are empty when the schema did not declare them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Encoding {
    pub primitive_type: PrimitiveType,
    pub presence: Presence,
    pub byte_order: ByteOrder,
    pub min_value: PrimitiveValue,
    pub max_value: PrimitiveValue,
    pub null_value: PrimitiveValue,
    pub const_value: PrimitiveValue,
    pub character_encoding: Text,
    pub epoch: Text,
    pub time_unit: Text,
    pub semantic_type: Text,
}

impl Default for Encoding {
    fn default() -> Self {
        Self {
            primitive_type: PrimitiveType::None,
            presence: Presence::Required,
            byte_order: ByteOrder::LittleEndian,
            min_value: PrimitiveValue::None,
            max_value: PrimitiveValue::None,
            null_value: PrimitiveValue::None,
            const_value: PrimitiveValue::None,
            character_encoding: Text::default(),
            epoch: Text::default(),
            time_unit: Text::default(),
            semantic_type: Text::default(),
        }
    }
}
