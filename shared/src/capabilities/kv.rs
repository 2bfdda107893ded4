//! Durable slot access on top of `crux_kv`.
//!
//! Keys are validated before they reach the shell, and shell-side failures
//! are flattened into [`SlotError`] so events never carry `crux_kv` types.

use crux_kv::KeyValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

pub const MAX_KEY_LENGTH: usize = 512;
pub const MAX_VALUE_SIZE: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotKey(String);

impl SlotKey {
    pub fn new(key: impl Into<String>) -> Result<Self, SlotError> {
        let key = key.into();
        Self::validate(&key)?;
        Ok(Self(key))
    }

    pub fn raw(&self) -> String {
        self.0.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(key: &str) -> Result<(), SlotError> {
        let invalid = |reason: &str| SlotError::InvalidKey {
            key: key.chars().take(50).collect(),
            reason: reason.to_string(),
        };

        if key.trim().is_empty() {
            return Err(invalid("key cannot be empty"));
        }
        if key.len() > MAX_KEY_LENGTH {
            return Err(invalid("key exceeds maximum length"));
        }
        if key.contains("..") || key.starts_with('/') || key.starts_with('\\') {
            return Err(invalid("key cannot look like a path"));
        }
        if key.chars().any(char::is_control) {
            return Err(invalid("key contains control characters"));
        }
        Ok(())
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum SlotError {
    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("value too large: {size} bytes exceeds maximum of {max} bytes")]
    ValueTooLarge { size: usize, max: usize },

    #[error("storage error: {message}")]
    Storage { message: String },
}

/// Contents of a slot; `Ok(None)` means it was never written.
pub type SlotRead = Result<Option<Vec<u8>>, SlotError>;
pub type SlotWrite = Result<(), SlotError>;

fn into_read<E: fmt::Display>(result: Result<Option<Vec<u8>>, E>) -> SlotRead {
    result.map_err(|e| SlotError::Storage {
        message: e.to_string(),
    })
}

fn into_write<T, E: fmt::Display>(result: Result<T, E>) -> SlotWrite {
    result.map(|_| ()).map_err(|e| SlotError::Storage {
        message: e.to_string(),
    })
}

pub fn read_slot<Ev, F>(kv: &KeyValue<Ev>, key: &SlotKey, make_event: F)
where
    Ev: 'static,
    F: Fn(SlotRead) -> Ev + Send + Sync + 'static,
{
    debug!(key = %key, "reading slot");
    kv.get(key.raw(), move |result| make_event(into_read(result)));
}

/// Overwrites the slot. Oversized values are rejected before any effect is emitted.
pub fn write_slot<Ev, F>(
    kv: &KeyValue<Ev>,
    key: &SlotKey,
    value: Vec<u8>,
    make_event: F,
) -> Result<(), SlotError>
where
    Ev: 'static,
    F: Fn(SlotWrite) -> Ev + Send + Sync + 'static,
{
    if value.len() > MAX_VALUE_SIZE {
        return Err(SlotError::ValueTooLarge {
            size: value.len(),
            max: MAX_VALUE_SIZE,
        });
    }
    debug!(key = %key, bytes = value.len(), "writing slot");
    kv.set(key.raw(), value, move |result| make_event(into_write(result)));
    Ok(())
}
