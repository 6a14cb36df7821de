//! Raw CAN frames and their validated construction.

use crate::errors::CodecError;

/// Marker bit set on the stored identifier of extended (29-bit) frames,
/// matching the socketcan EFF flag.
pub const CAN_EFF_FLAG: u32 = 0x8000_0000;

/// Largest payload the codec handles (CAN FD upper bound).
pub const MAX_PAYLOAD_LEN: usize = 64;

/// One bus transmission unit: identifier, extended flag, payload bytes.
/// Ephemeral; created per decode/encode call and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Identifier as stored: extended identifiers carry [`CAN_EFF_FLAG`].
    pub id: u32,
    pub is_extended: bool,
    pub payload: Vec<u8>,
}

impl Frame {
    /// Builds a validated frame. The payload must be 1..=64 bytes; extended
    /// identifiers get the marker bit folded into the stored id.
    pub fn new(id: u32, payload: Vec<u8>, is_extended: bool) -> Result<Self, CodecError> {
        if payload.is_empty() || payload.len() > MAX_PAYLOAD_LEN {
            return Err(CodecError::InvalidPayloadLength(payload.len()));
        }

        let id = if is_extended { id | CAN_EFF_FLAG } else { id };

        Ok(Frame {
            id,
            is_extended,
            payload,
        })
    }

    /// Declared payload byte length; equals the payload length by construction.
    pub fn dlc(&self) -> usize {
        self.payload.len()
    }

    /// Identifier with the extended marker bit stripped.
    pub fn id_without_flags(&self) -> u32 {
        self.id & !CAN_EFF_FLAG
    }
}
