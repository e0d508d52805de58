//! Decoder for the binary schema IR produced by the flydec schema compiler.
//!
//! The IR is a flat stream of self-describing records: one frame header
//! followed by token records. Decoding reconstructs the schema structure
//! (header composite plus per-message token lists) so that messages can be
//! interpreted on the fly, without schema-specific generated code.
//!
//! # Example
//!
//! ```no_run
//! use flydec_ir::Ir;
//!
//! let ir = Ir::from_path("schema.ir")?;
//! for tokens in ir.messages() {
//!     let first = &tokens[0];
//!     println!("{} id={} version={}", first.name, first.field_id, first.token_version);
//! }
//! # Ok::<(), flydec_ir::IrError>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod cursor;
mod decoder;
mod encoding;
mod error;
mod frame;
mod record;
mod text;
mod token;
mod value;

#[cfg(test)]
mod record_tests;

pub use decoder::Ir;
pub use encoding::Encoding;
pub use error::IrError;
pub use frame::{FRAME_BLOCK_LENGTH, FrameHeader, IR_VERSION};
pub use record::TOKEN_BLOCK_LENGTH;
pub use text::Text;
pub use token::{Presence, Signal, Token};
pub use value::{ByteOrder, PrimitiveType, PrimitiveValue};

/// Result type for IR decoding.
pub type Result<T> = std::result::Result<T, IrError>;
