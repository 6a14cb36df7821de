//! # cancraft
//!
//! Bit-level codec for Controller Area Network frames driven by a declarative
//! bus schema.
//!
//! Define messages as collections of signals (bit ranges with byte order,
//! signedness, scaling, clamping, units, and value tables), attach the schema
//! to a [`codec::CanCodec`], then decode raw frames into physical values or
//! encode bound messages back into frames. Both CAN bit numbering
//! conventions are supported: Intel (little-endian) and Motorola
//! (big-endian sawtooth).
//!
//! ## Example
//!
//! ```
//! use cancraft::bits::ByteOrder;
//! use cancraft::bound::BoundMessage;
//! use cancraft::codec::CanCodec;
//! use cancraft::frame::Frame;
//! use cancraft::message::{Message, Schema};
//! use cancraft::signal::Signal;
//!
//! let schema = Schema::new(vec![Message::new(
//!     "EngineData",
//!     0x100,
//!     8,
//!     vec![Signal::new("Rpm", 0, 16, ByteOrder::LittleEndian)],
//! )]);
//!
//! let mut codec = CanCodec::new();
//! codec.attach_schema(schema);
//!
//! // Decode: 10000 rpm in the first two bytes, Intel order.
//! let frame = Frame::new(0x100, vec![0x10, 0x27, 0, 0, 0, 0, 0, 0], false).unwrap();
//! let decoded = codec.decode(frame).unwrap().unwrap();
//! assert_eq!(decoded.signal("Rpm").unwrap().raw, 10000);
//!
//! // Encode: bind the message, set a value, produce a fresh frame.
//! let def = codec.message_by_name("EngineData").unwrap();
//! let mut bound = BoundMessage::new(def, None).unwrap();
//! bound.set_value("Rpm", 500.0).unwrap();
//! assert_eq!(codec.encode(&bound).unwrap().payload[0], 0xF4);
//! ```

pub mod bits;
pub mod bound;
pub mod codec;
pub mod errors;
pub mod frame;
pub mod message;
#[cfg(feature = "serde")]
pub mod serde;
pub mod signal;
pub mod transform;
