//! IR decoder facade.
//!
//! One linear pass over the buffer: frame header, then the header composite
//! (through its `END_COMPOSITE`), then message token lists (each through its
//! `END_MESSAGE`) until the buffer is exhausted. The result is immutable;
//! re-decoding takes a fresh buffer and produces a fresh [`Ir`].

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::Result;
use crate::error::IrError;
use crate::frame::FrameHeader;
use crate::token::{Signal, Token};

/// A decoded IR: the message-header composite plus all message token lists.
///
/// Safe to share across threads once decoded; accessors hand out borrowed
/// views, so a message's tokens live exactly as long as the `Ir`.
#[derive(Clone, Debug, Serialize)]
pub struct Ir {
    frame: FrameHeader,
    header_tokens: Vec<Token>,
    messages: Vec<Vec<Token>>,
}

impl Ir {
    /// Decode an IR buffer.
    ///
    /// The buffer must hold the complete stream: the decode finishes exactly
    /// when the cumulative record sizes reach the buffer end, and anything
    /// short of that is an error.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(IrError::EmptySource);
        }

        let (frame, frame_size) = FrameHeader::decode(bytes, 0)?;
        let mut offset = frame_size;

        let header_tokens = read_list(
            bytes,
            &mut offset,
            Signal::EndComposite,
            "header composite never terminated",
        )?;
        if header_tokens[0].signal != Signal::BeginComposite {
            return Err(IrError::MalformedStructure(
                "header does not begin with a composite",
            ));
        }

        let mut messages = Vec::new();
        while offset < bytes.len() {
            messages.push(read_list(
                bytes,
                &mut offset,
                Signal::EndMessage,
                "message never terminated",
            )?);
        }

        Ok(Self {
            frame,
            header_tokens,
            messages,
        })
    }

    /// Read an IR file and decode it.
    ///
    /// A zero-length file is [`IrError::EmptySource`]; an unreadable one
    /// surfaces as [`IrError::Io`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// The decoded frame header.
    pub fn frame(&self) -> &FrameHeader {
        &self.frame
    }

    /// Tokens of the message-header composite, `BEGIN_COMPOSITE` through
    /// `END_COMPOSITE` inclusive.
    pub fn header(&self) -> &[Token] {
        &self.header_tokens
    }

    /// All message token lists, in stream order.
    pub fn messages(&self) -> &[Vec<Token>] {
        &self.messages
    }

    /// Look up a message by `(id, version)` of its `BEGIN_MESSAGE` token.
    ///
    /// Linear scan in stream order; if the compiler ever emitted duplicate
    /// pairs, the first occurrence wins. A miss is `None`, not an error.
    pub fn message(&self, id: i32, version: i32) -> Option<&[Token]> {
        self.messages
            .iter()
            .find(|tokens| {
                let first = &tokens[0];
                first.signal == Signal::BeginMessage
                    && first.field_id == id
                    && first.token_version == version
            })
            .map(Vec::as_slice)
    }
}

/// Decode tokens into a list until `end` is produced (inclusive).
///
/// The END signal is trusted to arrive before the buffer runs out; when it
/// does not, the stream is structurally unbalanced rather than truncated.
fn read_list(
    bytes: &[u8],
    offset: &mut usize,
    end: Signal,
    unterminated: &'static str,
) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();

    while *offset < bytes.len() {
        let (token, size) = Token::decode(bytes, *offset)?;
        *offset += size;
        let done = token.signal == end;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }

    Err(IrError::MalformedStructure(unterminated))
}
