//! Live decode/encode views pairing schema definitions with a concrete payload.
//!
//! The [`BoundMessage`] owns the payload buffer through its frame; each
//! [`BoundSignal`] borrows only its definition, and its mutation method takes
//! the payload as an explicit argument instead of closing over shared state.

use std::collections::BTreeMap;

use crate::bits;
use crate::errors::CodecError;
use crate::frame::{CAN_EFF_FLAG, Frame};
use crate::message::Message;
use crate::signal::Signal;

/// A decoded (or encode-ready) view of one signal instance.
#[derive(Debug, Clone)]
pub struct BoundSignal<'a> {
    pub def: &'a Signal,
    /// Raw field value as a two's-complement bit pattern: sign-extended for
    /// signed signals, wrapping for unsigned 64-bit values above `i64::MAX`.
    pub raw: i64,
    /// Scaled and clamped physical value.
    pub physical: f64,
    /// Value-table label, or the formatted number with unit.
    pub display: String,
}

impl<'a> BoundSignal<'a> {
    /// Extracts and transforms one signal from a payload.
    pub fn decode(def: &'a Signal, payload: &[u8]) -> Self {
        let bit_seq = bits::payload_to_bits(payload, def.byte_order);
        let field = bits::extract_range(&bit_seq, def.start_bit, def.bit_length, def.byte_order);

        // Widen to f64 before any cast to i64: an unsigned 64-bit field can
        // exceed i64::MAX, and casting first would flip it negative.
        let (raw, widened) = if def.signed {
            let value = bits::bits_to_signed(&field);
            (value, value as f64)
        } else {
            let value = bits::bits_to_unsigned(&field);
            (value as i64, value as f64)
        };
        let physical = def.scale_and_clamp(widened);
        let display = def.display(physical);

        BoundSignal {
            def,
            raw,
            physical,
            display,
        }
    }

    /// Writes the current raw value into the payload in place, leaving all
    /// bits outside the signal's field untouched.
    pub fn encode_into(&self, payload: &mut [u8]) {
        let mut bit_seq = bits::payload_to_bits(payload, self.def.byte_order);
        let value_bits = bits::signed_to_bits(self.raw, self.def.bit_length);

        bits::insert_range(
            &mut bit_seq,
            &value_bits,
            self.def.start_bit,
            self.def.bit_length,
            self.def.byte_order,
        );

        payload.copy_from_slice(&bits::bits_to_payload(&bit_seq, self.def.byte_order));
    }

    /// Recomputes raw, physical, and display values from a new physical
    /// value, then writes the raw bits through to the payload.
    pub fn set_physical(&mut self, value: f64, payload: &mut [u8]) {
        self.raw = self.def.to_raw(value);
        self.physical = self.def.to_physical(self.raw);
        self.display = self.def.display(self.physical);

        self.encode_into(payload);
    }
}

/// A message definition bound to a concrete frame instance.
#[derive(Debug, Clone)]
pub struct BoundMessage<'a> {
    pub def: &'a Message,
    /// The originating (or derived) frame; owns the payload buffer.
    pub frame: Frame,
    pub signals: BTreeMap<String, BoundSignal<'a>>,
}

impl<'a> BoundMessage<'a> {
    /// Binds `def` to a zero-filled payload of its declared byte length, or
    /// to a caller-supplied payload. Used to prepare a message for
    /// transmission from scratch.
    pub fn new(def: &'a Message, payload: Option<Vec<u8>>) -> Result<Self, CodecError> {
        let payload = match payload {
            Some(payload) => {
                if payload.len() != def.byte_length {
                    return Err(CodecError::PayloadLengthMismatch {
                        expected: def.byte_length,
                        got: payload.len(),
                    });
                }
                payload
            }
            None => vec![0; def.byte_length],
        };

        let frame = Frame::new(def.id, payload, (def.id & CAN_EFF_FLAG) != 0)?;

        Ok(Self::from_frame(def, frame))
    }

    /// Binds `def` to an existing frame, decoding every signal.
    pub(crate) fn from_frame(def: &'a Message, frame: Frame) -> Self {
        let signals = def
            .signals
            .iter()
            .map(|s| (s.name.clone(), BoundSignal::decode(s, &frame.payload)))
            .collect();

        BoundMessage {
            def,
            frame,
            signals,
        }
    }

    pub fn signal(&self, name: &str) -> Option<&BoundSignal<'a>> {
        self.signals.get(name)
    }

    /// Updates one named signal, writing through to the frame payload.
    /// An unknown name is an error rather than a silent no-op.
    pub fn set_value(&mut self, name: &str, value: f64) -> Result<(), CodecError> {
        let signal = self
            .signals
            .get_mut(name)
            .ok_or_else(|| CodecError::SignalNotFound(name.to_string()))?;

        signal.set_physical(value, &mut self.frame.payload);

        Ok(())
    }
}
