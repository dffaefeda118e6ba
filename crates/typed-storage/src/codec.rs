//! The caller-facing serializer.

use core::any::{Any, TypeId};

use tracing::trace;

use crate::classify::TypeClassificationTable;
use crate::descriptor::Storable;
use crate::error::{Error, Result, SerializationError};
use crate::options::Options;
use crate::stream::{StreamReader, StreamWriter, element_signature};

/// Turns one value into one string and back.
///
/// `None` stands for "no value" on both sides and never opens a codec
/// session. Values stored as `String` are kept verbatim.
#[derive(Debug, Clone, Default)]
pub struct StorageSerializer {
    options: Options,
}

impl StorageSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn serialize<T: Storable>(&self, value: Option<&T>) -> Result<Option<String>> {
        let Some(value) = value else {
            trace!("serialize: absent value");
            return Ok(None);
        };
        if let Some(s) = (value as &dyn Any).downcast_ref::<String>() {
            trace!("serialize: string stored verbatim");
            return Ok(Some(s.clone()));
        }

        let descriptor = T::descriptor();
        let kind = TypeClassificationTable::global().classify(&descriptor);
        trace!(%kind, signature = descriptor.signature(), "serialize");

        let mut session = StreamWriter::new();
        if kind.needs_signature() {
            session.write_string(element_signature(&descriptor));
        }
        session.write_value(kind, value)?;
        Ok(Some(session.finish()?))
    }

    pub fn deserialize<T: Storable>(&self, encoded: Option<&str>) -> Result<Option<T>> {
        let Some(encoded) = encoded else {
            trace!("deserialize: absent value");
            return Ok(None);
        };
        if TypeId::of::<T>() == TypeId::of::<String>() {
            let verbatim: Box<dyn Any> = Box::new(encoded.to_owned());
            if let Ok(s) = verbatim.downcast::<T>() {
                trace!("deserialize: string returned verbatim");
                return Ok(Some(*s));
            }
        }
        if let Some(limit) = self.options.max_input_size {
            if encoded.len() > limit {
                return Err(Error::Serialization(SerializationError::InputTooLarge {
                    size: encoded.len(),
                    limit,
                }));
            }
        }

        let descriptor = T::descriptor();
        let kind = TypeClassificationTable::global().classify(&descriptor);
        trace!(%kind, signature = descriptor.signature(), "deserialize");

        let mut session = StreamReader::open(encoded)?;
        let value = session.read_framed(kind, &descriptor, self.options.verify_signature)?;
        if self.options.strict {
            session.finish()?;
        }
        Ok(value)
    }
}
