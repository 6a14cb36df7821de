//! Definition of signals: named bit fields within a message payload.

use std::collections::BTreeMap;

use crate::bits::ByteOrder;

/// A single named signal in a message: one contiguous bit range plus the
/// rules that map its raw integer to a physical value.
#[derive(Debug, Clone)]
pub struct Signal {
    /// Name used as the key in decoded results; unique within a message.
    pub name: String,
    /// Logical start bit under `byte_order` (LSB for Intel, MSB for Motorola).
    pub start_bit: usize,
    /// Width of the raw field in bits (1..=64).
    pub bit_length: usize,
    /// Bit numbering convention of the field.
    pub byte_order: ByteOrder,
    /// If true, the raw value is interpreted as two's-complement signed.
    pub signed: bool,
    /// Multiplicative scale: physical = raw * factor + offset. Never zero.
    pub factor: f64,
    /// Additive offset applied after scaling.
    pub offset: f64,
    /// Lower clamp bound for the physical value.
    pub min: f64,
    /// Upper clamp bound. `min == max == 0.0` disables clamping.
    pub max: f64,
    /// Unit label appended to numeric display values.
    pub unit: Option<String>,
    /// Value table: labels for specific (integral) physical values.
    /// Presentation only; raw bits round-trip independently of it.
    pub labels: Option<BTreeMap<i64, String>>,
}

impl Signal {
    /// Creates an unsigned signal with identity scaling and no clamping.
    pub fn new(name: &str, start_bit: usize, bit_length: usize, byte_order: ByteOrder) -> Self {
        Signal {
            name: name.to_string(),
            start_bit,
            bit_length,
            byte_order,
            ..Default::default()
        }
    }
}

impl Default for Signal {
    fn default() -> Self {
        Signal {
            name: String::new(),
            start_bit: 0,
            bit_length: 1,
            byte_order: Default::default(),
            signed: false,
            factor: 1.0,
            offset: 0.0,
            min: 0.0,
            max: 0.0,
            unit: None,
            labels: None,
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::SignalDef> for Signal {
    fn from(value: crate::serde::SignalDef) -> Self {
        Signal {
            name: value.name,
            start_bit: value.start_bit,
            bit_length: value.bit_length,
            byte_order: value.byte_order.into(),
            signed: value.signed,
            factor: value.factor,
            offset: value.offset,
            min: value.min,
            max: value.max,
            unit: value.unit,
            labels: value.labels,
        }
    }
}
