//! Orchestration: schema attachment, identifier lookup, frame decode/encode.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::bound::BoundMessage;
use crate::errors::CodecError;
use crate::frame::Frame;
use crate::message::{Message, Schema};

/// The codec engine: the attached schema plus its derived identifier index.
///
/// The index is rebuilt wholesale on every [`attach_schema`](CanCodec::attach_schema);
/// decode and encode take `&self` and are safe to call concurrently once the
/// schema is in place. Binding a message for construction is
/// [`BoundMessage::new`]; message definitions come from the lookup accessors.
#[derive(Debug, Default)]
pub struct CanCodec {
    schema: Option<Schema>,
    by_id: HashMap<u32, usize>,
}

impl CanCodec {
    pub fn new() -> Self {
        Default::default()
    }

    /// Attaches a schema, rebuilding the identifier index from scratch.
    pub fn attach_schema(&mut self, schema: Schema) {
        self.by_id = schema
            .messages()
            .iter()
            .enumerate()
            .map(|(i, m)| (m.id, i))
            .collect();

        debug!(messages = schema.messages().len(), "schema attached");
        self.schema = Some(schema);
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// Looks up a message by identifier. A miss is `None`, never an error.
    pub fn message_by_id(&self, id: u32) -> Option<&Message> {
        let schema = self.schema.as_ref()?;
        self.by_id.get(&id).map(|&i| &schema.messages()[i])
    }

    pub fn message_by_name(&self, name: &str) -> Option<&Message> {
        self.schema.as_ref()?.message_by_name(name)
    }

    /// Validated frame construction; see [`Frame::new`].
    pub fn create_frame(
        &self,
        id: u32,
        payload: Vec<u8>,
        is_extended: bool,
    ) -> Result<Frame, CodecError> {
        Frame::new(id, payload, is_extended)
    }

    /// Decodes a frame against the attached schema.
    ///
    /// `Ok(None)` when the identifier has no message or the payload length
    /// disagrees with the message's declared byte length: both are normal
    /// traffic on a live bus, not errors.
    pub fn decode(&self, frame: Frame) -> Result<Option<BoundMessage<'_>>, CodecError> {
        let schema = self.schema.as_ref().ok_or(CodecError::SchemaNotAttached)?;

        let Some(&index) = self.by_id.get(&frame.id) else {
            trace!(id = frame.id, "no message for frame id, skipping");
            return Ok(None);
        };
        let def = &schema.messages()[index];

        if def.byte_length != frame.dlc() {
            trace!(
                message = %def.name,
                expected = def.byte_length,
                got = frame.dlc(),
                "dlc mismatch, skipping frame"
            );
            return Ok(None);
        }

        Ok(Some(BoundMessage::from_frame(def, frame)))
    }

    /// Encodes a bound message into a fresh frame, preserving its
    /// extended-identifier flag. All failures happen before any mutation.
    pub fn encode(&self, bound: &BoundMessage<'_>) -> Result<Frame, CodecError> {
        self.schema.as_ref().ok_or(CodecError::SchemaNotAttached)?;

        if !self.by_id.contains_key(&bound.def.id) {
            return Err(CodecError::MessageNotFound(bound.def.id));
        }

        let mut payload = vec![0u8; bound.def.byte_length];
        for signal in bound.signals.values() {
            signal.encode_into(&mut payload);
        }

        Frame::new(bound.def.id, payload, bound.frame.is_extended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::ByteOrder;
    use crate::frame::CAN_EFF_FLAG;
    use crate::signal::Signal;

    fn test_schema() -> Schema {
        Schema::new(vec![Message::new(
            "CANMessage",
            1234,
            8,
            vec![Signal::new("Count", 0, 8, ByteOrder::LittleEndian)],
        )])
    }

    fn attached_codec() -> CanCodec {
        let mut codec = CanCodec::new();
        codec.attach_schema(test_schema());
        codec
    }

    #[test]
    fn test_decode_requires_schema() {
        let codec = CanCodec::new();
        let frame = Frame::new(1234, vec![0; 8], false).unwrap();

        assert_eq!(
            codec.decode(frame).unwrap_err(),
            CodecError::SchemaNotAttached
        );
    }

    #[test]
    fn test_decode_known_message() {
        let codec = attached_codec();
        let frame = Frame::new(1234, vec![5, 0, 0, 0, 0, 0, 0, 0], false).unwrap();

        let bound = codec.decode(frame).unwrap().unwrap();
        assert_eq!(bound.def.name, "CANMessage");

        let count = bound.signal("Count").unwrap();
        assert_eq!(count.raw, 5);
        assert_eq!(count.physical, 5.0);
        assert_eq!(count.display, "5");
    }

    #[test]
    fn test_decode_unknown_id_is_absent() {
        let codec = attached_codec();
        let frame = Frame::new(4321, vec![0; 8], false).unwrap();

        assert!(codec.decode(frame).unwrap().is_none());
    }

    #[test]
    fn test_decode_dlc_mismatch_is_absent() {
        let codec = attached_codec();
        let frame = Frame::new(1234, vec![0; 4], false).unwrap();

        assert!(codec.decode(frame).unwrap().is_none());
    }

    #[test]
    fn test_encode_bound_message() {
        let codec = attached_codec();
        let def = codec.message_by_id(1234).unwrap();

        let mut bound = BoundMessage::new(def, None).unwrap();
        bound.set_value("Count", 7.0).unwrap();

        let frame = codec.encode(&bound).unwrap();
        assert_eq!(frame.id, 1234);
        assert_eq!(frame.payload, vec![7, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_requires_schema() {
        let codec = CanCodec::new();
        let def = Message::new("Orphan", 99, 1, vec![]);
        let bound = BoundMessage::new(&def, None).unwrap();

        assert_eq!(
            codec.encode(&bound).unwrap_err(),
            CodecError::SchemaNotAttached
        );
    }

    #[test]
    fn test_encode_unknown_message_is_error() {
        let codec = attached_codec();
        let def = Message::new("Orphan", 99, 1, vec![]);
        let bound = BoundMessage::new(&def, None).unwrap();

        assert_eq!(
            codec.encode(&bound).unwrap_err(),
            CodecError::MessageNotFound(99)
        );
    }

    #[test]
    fn test_decode_encode_round_trip() {
        let codec = attached_codec();
        let payload = vec![42, 0, 0, 0, 0, 0, 0, 0];
        let frame = Frame::new(1234, payload.clone(), false).unwrap();

        let bound = codec.decode(frame).unwrap().unwrap();
        let encoded = codec.encode(&bound).unwrap();
        assert_eq!(encoded.payload, payload);
    }

    #[test]
    fn test_encode_preserves_extended_flag() {
        let mut codec = CanCodec::new();
        let id = 0x18FF_50E5 | CAN_EFF_FLAG;
        codec.attach_schema(Schema::new(vec![Message::new(
            "ExtMessage",
            id,
            8,
            vec![Signal::new("Count", 0, 8, ByteOrder::LittleEndian)],
        )]));

        let frame = Frame::new(0x18FF_50E5, vec![1, 0, 0, 0, 0, 0, 0, 0], true).unwrap();
        let bound = codec.decode(frame).unwrap().unwrap();

        let encoded = codec.encode(&bound).unwrap();
        assert!(encoded.is_extended);
        assert_eq!(encoded.id_without_flags(), 0x18FF_50E5);
    }

    #[test]
    fn test_attach_schema_rebuilds_index() {
        let mut codec = attached_codec();
        codec.attach_schema(Schema::new(vec![Message::new(
            "Replacement",
            0x200,
            8,
            vec![],
        )]));

        let old = Frame::new(1234, vec![0; 8], false).unwrap();
        assert!(codec.decode(old).unwrap().is_none());

        let new = Frame::new(0x200, vec![0; 8], false).unwrap();
        assert!(codec.decode(new).unwrap().is_some());
    }

    #[test]
    fn test_multi_signal_message_both_orders() {
        // Motorola 12-bit signed temperature at sawtooth start bit 0 next to
        // an Intel 8-bit counter; golden bytes computed by hand.
        let mut temperature = Signal::new("Temperature", 0, 12, ByteOrder::BigEndian);
        temperature.signed = true;
        temperature.factor = 0.01;
        temperature.offset = 250.0;
        let count = Signal::new("Count", 16, 8, ByteOrder::LittleEndian);

        let mut codec = CanCodec::new();
        codec.attach_schema(Schema::new(vec![Message::new(
            "SensorData",
            0x1F0,
            8,
            vec![temperature, count],
        )]));

        // 0xDB6 in the top 12 bits: bytes DB 60; count 0x2A in byte 2.
        let frame = Frame::new(0x1F0, vec![0xDB, 0x60, 0x2A, 0, 0, 0, 0, 0], false).unwrap();
        let bound = codec.decode(frame).unwrap().unwrap();

        let temperature = bound.signal("Temperature").unwrap();
        assert_eq!(temperature.raw, -586);
        assert!((temperature.physical - 244.14).abs() < 1e-9);
        assert_eq!(bound.signal("Count").unwrap().raw, 0x2A);

        let encoded = codec.encode(&bound).unwrap();
        assert_eq!(encoded.payload, vec![0xDB, 0x60, 0x2A, 0, 0, 0, 0, 0]);
    }
}
