//! JSON-deserializable schema description.
//!
//! These types describe the *shape* of a bus database. They are intended to
//! be constructed from JSON (for example a schema file produced by a DBC
//! converter) and then turned into core `cancraft` types via `From`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bit numbering convention of a signal.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub enum ByteOrderDef {
    #[default]
    /// Intel: start bit addresses the LSB.
    LittleEndian,
    /// Motorola: start bit addresses the MSB, sawtooth numbering.
    BigEndian,
}

/// Top-level schema definition: every message on the bus.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SchemaDef {
    pub messages: Vec<MessageDef>,
}

/// Description of a single message layout.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MessageDef {
    /// Name unique within the schema.
    pub name: String,
    /// Numeric identifier used as the decode lookup key.
    pub id: u32,
    /// Declared payload size in bytes (1..=64).
    pub byte_length: usize,
    /// Signals with names unique within the message.
    pub signals: Vec<SignalDef>,
}

/// Description of a single signal.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SignalDef {
    /// Name used as the key in decoded results.
    pub name: String,
    /// Logical start bit under `byte_order`.
    pub start_bit: usize,
    /// Width of the raw field in bits (1..=64).
    pub bit_length: usize,
    /// Bit numbering convention; defaults to Intel.
    #[serde(default)]
    pub byte_order: ByteOrderDef,
    /// Whether the raw value is two's-complement signed.
    #[serde(default)]
    pub signed: bool,
    /// Multiplicative scale; defaults to 1 and must not be zero.
    #[serde(default = "default_factor")]
    pub factor: f64,
    /// Additive offset applied after scaling.
    #[serde(default)]
    pub offset: f64,
    /// Lower clamp bound for the physical value.
    #[serde(default)]
    pub min: f64,
    /// Upper clamp bound; min == max == 0 disables clamping.
    #[serde(default)]
    pub max: f64,
    /// Optional unit label appended to numeric display values.
    #[serde(default)]
    pub unit: Option<String>,
    /// Optional value table mapping integral physical values to labels.
    #[serde(default)]
    pub labels: Option<BTreeMap<i64, String>>,
}

fn default_factor() -> f64 {
    1.0
}
