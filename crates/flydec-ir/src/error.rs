//! Decode errors.

use std::io;

use crate::frame::IR_VERSION;

/// IR decode error.
///
/// A failed decode yields no usable [`Ir`](crate::Ir); there is no
/// partial-result recovery. Unknown signal or primitive-type codes are not
/// errors (they decode opaquely), and a lookup miss is a plain `None`.
#[derive(Debug, thiserror::Error)]
pub enum IrError {
    #[error("unsupported IR version: {0} (expected {IR_VERSION})")]
    UnsupportedVersion(i32),
    #[error("truncated record at offset {offset}: need {needed} bytes, {remaining} left")]
    TruncatedRecord {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    #[error("empty IR source")]
    EmptySource,
    #[error("malformed IR structure: {0}")]
    MalformedStructure(&'static str),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
