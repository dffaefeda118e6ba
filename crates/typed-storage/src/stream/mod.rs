//! Token stream codec: one writer or reader session per encoded string.
//!
//! An encoded string is a JSON array of tokens. Each session is created for a
//! single call and consumed by `finish`.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, trace};

use crate::descriptor::TypeDescriptor;
use crate::error::SerializationError;
use crate::kind::ValueKind;
use crate::strategy::check_token;
use crate::value::Value;

mod de;
mod ser;

type Result<T> = core::result::Result<T, SerializationError>;

#[derive(Debug, Default)]
pub struct StreamWriter {
    tokens: Vec<Value>,
}

impl StreamWriter {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn write_string(&mut self, s: &str) {
        self.tokens.push(Value::String(s.to_owned()));
    }

    /// Appends `value` as one token, rejecting it if its shape does not
    /// belong to `kind`.
    pub fn write_value<T: Serialize + ?Sized>(&mut self, kind: ValueKind, value: &T) -> Result<()> {
        let token = ser::to_value(value).map_err(|e| SerializationError::Encode(e.to_string()))?;
        check_token(kind, &token)?;
        self.tokens.push(token);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn finish(self) -> Result<String> {
        let out = serde_json::to_string(&self.tokens)?;
        trace!(tokens = self.tokens.len(), bytes = out.len(), "writer session finished");
        Ok(out)
    }
}

#[derive(Debug)]
pub struct StreamReader {
    tokens: std::vec::IntoIter<Value>,
}

impl StreamReader {
    pub fn open(encoded: &str) -> Result<Self> {
        let tokens: Vec<Value> = serde_json::from_str(encoded).inspect_err(|e| {
            debug!(error = %e, "encoded string is not a token stream");
        })?;
        trace!(tokens = tokens.len(), "reader session opened");
        Ok(Self {
            tokens: tokens.into_iter(),
        })
    }

    fn next_token(&mut self) -> Result<Value> {
        self.tokens.next().ok_or(SerializationError::Truncated)
    }

    pub fn read_string(&mut self) -> Result<String> {
        match self.next_token()? {
            Value::String(s) => Ok(s),
            other => Err(SerializationError::Shape {
                expected: ValueKind::String,
                found: other.type_name(),
            }),
        }
    }

    /// Reads one token as `kind`. A null token is handed to `T` first, so
    /// unit structs and nested options come back present; for a type that
    /// has no null form it yields `None`.
    pub fn read_value<T: DeserializeOwned>(&mut self, kind: ValueKind) -> Result<Option<T>> {
        let token = self.next_token()?;
        check_token(kind, &token)?;
        if token.is_null() {
            return Ok(T::deserialize(de::ValueDeserializer::new(Value::Null)).ok());
        }
        let value = T::deserialize(de::ValueDeserializer::new(token))
            .map_err(|e| SerializationError::Decode(e.to_string()))?;
        Ok(Some(value))
    }

    /// Reads a value of the requested type, consuming the element signature
    /// that precedes generic arrays. With `verify` set, that signature must
    /// match the requested element type.
    pub fn read_framed<T: DeserializeOwned>(
        &mut self,
        kind: ValueKind,
        descriptor: &TypeDescriptor,
        verify: bool,
    ) -> Result<Option<T>> {
        if kind.needs_signature() {
            let found = self.read_string()?;
            let expected = element_signature(descriptor);
            if verify && found != expected {
                return Err(SerializationError::Signature {
                    expected: expected.to_owned(),
                    found,
                });
            }
        }
        self.read_value(kind)
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    /// Ends the session, failing if tokens were left unread.
    pub fn finish(self) -> Result<()> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(SerializationError::TrailingTokens(n)),
        }
    }
}

/// Signature recorded in front of a generic array: the one of its element
/// type, or of the type itself if it carries no element.
pub fn element_signature(descriptor: &TypeDescriptor) -> &'static str {
    descriptor
        .element()
        .map_or(descriptor.signature(), TypeDescriptor::signature)
}
