//! Message definitions and the schema that collects them.

use std::collections::HashMap;

use crate::signal::Signal;

/// A message layout: identifier, payload size, and its signals in
/// definition order. Immutable once the schema is built.
#[derive(Debug, Clone)]
pub struct Message {
    /// Name unique within the schema.
    pub name: String,
    /// Numeric identifier used as the decode lookup key. Extended
    /// identifiers carry the marker bit, as stored in bus databases.
    pub id: u32,
    /// Declared payload size in bytes (1..=64).
    pub byte_length: usize,
    /// Signals with names unique within the message.
    pub signals: Vec<Signal>,
}

impl Message {
    pub fn new(name: &str, id: u32, byte_length: usize, signals: Vec<Signal>) -> Self {
        Message {
            name: name.to_string(),
            id,
            byte_length,
            signals,
        }
    }

    /// Looks up a signal by name.
    pub fn signal(&self, name: &str) -> Option<&Signal> {
        self.signals.iter().find(|s| s.name == name)
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::MessageDef> for Message {
    fn from(value: crate::serde::MessageDef) -> Self {
        Message {
            name: value.name,
            id: value.id,
            byte_length: value.byte_length,
            signals: value.signals.into_iter().map(Into::into).collect(),
        }
    }
}

/// A bus database: every message the codec knows about. Built once,
/// read-only for the lifetime of the codec it is attached to.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    messages: Vec<Message>,
    by_name: HashMap<String, usize>,
}

impl Schema {
    /// Builds a schema from validated message definitions.
    pub fn new(messages: Vec<Message>) -> Self {
        let by_name = messages
            .iter()
            .enumerate()
            .map(|(i, m)| (m.name.clone(), i))
            .collect();

        Schema { messages, by_name }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Looks up a message by name. A miss is `None`, never an error.
    pub fn message_by_name(&self, name: &str) -> Option<&Message> {
        self.by_name.get(name).map(|&i| &self.messages[i])
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::SchemaDef> for Schema {
    fn from(value: crate::serde::SchemaDef) -> Self {
        Schema::new(value.messages.into_iter().map(Into::into).collect())
    }
}
