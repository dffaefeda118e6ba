use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Reject encoded strings that carry tokens after the value.
    pub strict: bool,
    /// Compare the element signature recorded in front of a generic array
    /// with the one of the requested element type.
    pub verify_signature: bool,
    /// Upper bound on the byte length of an encoded string (None = unlimited)
    pub max_input_size: Option<usize>,
}

impl Options {
    pub fn validate(&self) -> Result<()> {
        if self.max_input_size == Some(0) {
            return Err(Error::InvalidArgument(
                "max_input_size must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strict: true,
            verify_signature: true,
            max_input_size: None,
        }
    }
}
