//! Error types for frame construction and codec operations.
//!
//! Unknown frame identifiers and DLC mismatches during decode are not errors;
//! they surface as an absent result because traffic outside the attached
//! schema is the normal case on a live bus.

use thiserror::Error;

/// Errors produced when building frames, binding messages, or encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Payload is empty or longer than 64 bytes.
    #[error("invalid payload length {0}, expected 1..=64 bytes")]
    InvalidPayloadLength(usize),
    /// decode/encode called before a schema was attached.
    #[error("no schema attached")]
    SchemaNotAttached,
    /// Encode referenced a message identifier absent from the schema.
    #[error("message id {0:#x} not found in schema")]
    MessageNotFound(u32),
    /// Caller-supplied payload disagrees with the message byte length.
    #[error("payload length {got} does not match message byte length {expected}")]
    PayloadLengthMismatch { expected: usize, got: usize },
    /// A named signal does not exist on the message.
    #[error("signal {0:?} not found on message")]
    SignalNotFound(String),
}
