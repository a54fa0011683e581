//! The trade config file as far as the launcher is concerned.
//!
//! The trading program owns the rest of the file (symbol, side, quantity and
//! so on); the launcher only reads the two credential fields and ignores
//! everything else.

use serde_json::{Map, Value};

use super::credential::{CredentialPair, CredentialSlot, Secret};
use crate::error::RecordError;

/// Credential fields extracted from a trade config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigRecord {
    pub credentials: CredentialPair,
}

impl ConfigRecord {
    /// Parse a trade config from JSON text.
    ///
    /// A missing or `null` credential field becomes the empty string. Numbers
    /// and booleans are kept in their JSON spelling. Nested values are rejected.
    pub fn parse_json(content: &str) -> Result<Self, RecordError> {
        let value: Value = serde_json::from_str(content)?;
        let object = value.as_object().ok_or(RecordError::NotAnObject)?;

        let mut credentials = CredentialPair::default();
        for slot in CredentialSlot::ALL {
            credentials.set(slot, field(object, slot.record_field())?);
        }

        Ok(Self { credentials })
    }
}

fn field(object: &Map<String, Value>, name: &'static str) -> Result<Secret, RecordError> {
    match object.get(name) {
        None | Some(Value::Null) => Ok(Secret::default()),
        Some(Value::String(s)) => Ok(Secret::new(s.as_str())),
        Some(Value::Number(n)) => Ok(Secret::new(n.to_string())),
        Some(Value::Bool(b)) => Ok(Secret::new(b.to_string())),
        Some(Value::Array(_) | Value::Object(_)) => Err(RecordError::InvalidField { field: name }),
    }
}
