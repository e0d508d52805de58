use crate::record::TOKEN_BLOCK_LENGTH;
use crate::{
    ByteOrder, Encoding, IrError, Presence, PrimitiveType, PrimitiveValue, Signal, Text, Token,
};

/// A field token with a fully populated encoding.
fn test_token() -> Token {
    Token {
        token_offset: 8,
        field_id: 1001,
        token_version: 2,
        token_size: 4,
        component_token_count: 1,
        signal: Signal::Encoding,
        name: "price".into(),
        description: "limit price".into(),
        encoding: Encoding {
            primitive_type: PrimitiveType::Int32,
            presence: Presence::Optional,
            byte_order: ByteOrder::LittleEndian,
            min_value: PrimitiveValue::Int32(i32::MIN + 1),
            max_value: PrimitiveValue::Int32(i32::MAX),
            null_value: PrimitiveValue::Int32(i32::MIN),
            const_value: PrimitiveValue::None,
            character_encoding: Text::default(),
            epoch: "unix".into(),
            time_unit: "nanosecond".into(),
            semantic_type: "Price".into(),
        },
    }
}

#[test]
fn token_roundtrip() {
    let token = test_token();
    let mut bytes = Vec::new();
    token.encode_into(&mut bytes);

    let (decoded, size) = Token::decode(&bytes, 0).unwrap();
    assert_eq!(size, bytes.len());
    assert_eq!(decoded, token);
}

#[test]
fn token_reencode_is_byte_exact() {
    let token = test_token();
    let mut original = Vec::new();
    token.encode_into(&mut original);

    let (decoded, _) = Token::decode(&original, 0).unwrap();
    let mut reencoded = Vec::new();
    decoded.encode_into(&mut reencoded);
    assert_eq!(reencoded, original);
}

#[test]
fn token_decodes_mid_buffer() {
    let token = test_token();
    let mut bytes = vec![0xEE; 10]; // unrelated leading bytes
    let start = bytes.len();
    token.encode_into(&mut bytes);

    let (decoded, size) = Token::decode(&bytes, start).unwrap();
    assert_eq!(decoded, token);
    assert_eq!(start + size, bytes.len());
}

#[test]
fn token_big_endian_values() {
    let mut token = test_token();
    token.encoding.byte_order = ByteOrder::BigEndian;
    token.encoding.null_value = PrimitiveValue::Int32(-1);

    let mut bytes = Vec::new();
    token.encode_into(&mut bytes);
    let (decoded, _) = Token::decode(&bytes, 0).unwrap();

    assert_eq!(decoded.encoding.byte_order, ByteOrder::BigEndian);
    assert_eq!(decoded.encoding.null_value, PrimitiveValue::Int32(-1));

    let mut reencoded = Vec::new();
    decoded.encode_into(&mut reencoded);
    assert_eq!(reencoded, bytes);
}

#[test]
fn unknown_codes_pass_through() {
    let mut token = test_token();
    token.signal = Signal::Unknown(99);
    token.encoding.primitive_type = PrimitiveType::Unknown(200);
    token.encoding.presence = Presence::Unknown(9);
    token.encoding.min_value = PrimitiveValue::None;
    token.encoding.max_value = PrimitiveValue::None;
    token.encoding.null_value = PrimitiveValue::Opaque(vec![1, 2, 3]);

    let mut bytes = Vec::new();
    token.encode_into(&mut bytes);
    let (decoded, _) = Token::decode(&bytes, 0).unwrap();

    assert_eq!(decoded.signal, Signal::Unknown(99));
    assert_eq!(decoded.encoding.primitive_type, PrimitiveType::Unknown(200));
    assert_eq!(decoded.encoding.presence, Presence::Unknown(9));
    assert_eq!(decoded.encoding.null_value, PrimitiveValue::Opaque(vec![1, 2, 3]));

    let mut reencoded = Vec::new();
    decoded.encode_into(&mut reencoded);
    assert_eq!(reencoded, bytes);
}

#[test]
fn non_utf8_strings_copied_verbatim() {
    // String fields carry whatever bytes the schema compiler wrote; a lone
    // 0xFF must survive decode and re-encode untouched.
    let mut token = test_token();
    token.description = vec![0xFF].into();

    let mut bytes = Vec::new();
    token.encode_into(&mut bytes);
    let (decoded, _) = Token::decode(&bytes, 0).unwrap();

    assert_eq!(decoded.description.as_bytes(), &[0xFF]);
    let mut reencoded = Vec::new();
    decoded.encode_into(&mut reencoded);
    assert_eq!(reencoded, bytes);
}

#[test]
fn token_decode_offset_past_end() {
    let err = Token::decode(&[0; 4], 10).unwrap_err();
    assert!(matches!(err, IrError::TruncatedRecord { offset: 10, .. }));
}

#[test]
fn token_skips_fixed_block_extension() {
    let token = test_token();
    let mut bytes = Vec::new();
    token.encode_into(&mut bytes);

    let block = TOKEN_BLOCK_LENGTH as usize;
    let mut extended = Vec::new();
    extended.extend_from_slice(&(TOKEN_BLOCK_LENGTH + 4).to_le_bytes());
    extended.extend_from_slice(&bytes[2..2 + block]);
    extended.extend_from_slice(&[0xBB; 4]); // unknown trailing fixed fields
    extended.extend_from_slice(&bytes[2 + block..]);

    let (decoded, size) = Token::decode(&extended, 0).unwrap();
    assert_eq!(size, extended.len());
    assert_eq!(decoded, token);
}

#[test]
fn token_truncated_fixed_block() {
    let token = test_token();
    let mut bytes = Vec::new();
    token.encode_into(&mut bytes);
    bytes.truncate(10);

    let err = Token::decode(&bytes, 0).unwrap_err();
    assert!(matches!(err, IrError::TruncatedRecord { offset: 0, .. }));
}

#[test]
fn token_truncated_mid_trailer() {
    let token = test_token();
    let mut bytes = Vec::new();
    token.encode_into(&mut bytes);
    // Cut inside the description field's declared bytes.
    bytes.truncate(bytes.len() - 4);

    let err = Token::decode(&bytes, 0).unwrap_err();
    match err {
        IrError::TruncatedRecord { offset, needed, remaining } => {
            assert_eq!(offset, 0);
            assert!(remaining < needed);
        }
        other => panic!("expected TruncatedRecord, got {other:?}"),
    }
}

#[test]
fn token_undersized_block_rejected() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&8u16.to_le_bytes());
    bytes.extend_from_slice(&[0; 8]);

    let err = Token::decode(&bytes, 0).unwrap_err();
    assert!(matches!(err, IrError::MalformedStructure(_)));
}
