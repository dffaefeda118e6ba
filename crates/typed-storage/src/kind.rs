//! Encoding families a requested type can fall into.

use core::fmt;
use core::str::FromStr;

use crate::error::Error;

/// How a value is encoded: one tag per scalar, one per homogeneous array of
/// that scalar, and the two generic catch-alls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    String,
    BooleanArray,
    ByteArray,
    CharArray,
    DoubleArray,
    FloatArray,
    IntArray,
    LongArray,
    ShortArray,
    StringArray,
    Object,
    ObjectArray,
}

impl ValueKind {
    pub const ALL: [ValueKind; 20] = [
        ValueKind::Boolean,
        ValueKind::Byte,
        ValueKind::Char,
        ValueKind::Double,
        ValueKind::Float,
        ValueKind::Int,
        ValueKind::Long,
        ValueKind::Short,
        ValueKind::String,
        ValueKind::BooleanArray,
        ValueKind::ByteArray,
        ValueKind::CharArray,
        ValueKind::DoubleArray,
        ValueKind::FloatArray,
        ValueKind::IntArray,
        ValueKind::LongArray,
        ValueKind::ShortArray,
        ValueKind::StringArray,
        ValueKind::Object,
        ValueKind::ObjectArray,
    ];

    pub fn is_array(self) -> bool {
        self.element().is_some() || self == ValueKind::ObjectArray
    }

    pub fn is_scalar(self) -> bool {
        !self.is_array() && self != ValueKind::Object
    }

    /// Kind of the elements of a scalar array. `None` for everything else,
    /// including `ObjectArray` whose elements are not classified.
    pub fn element(self) -> Option<ValueKind> {
        match self {
            ValueKind::BooleanArray => Some(ValueKind::Boolean),
            ValueKind::ByteArray => Some(ValueKind::Byte),
            ValueKind::CharArray => Some(ValueKind::Char),
            ValueKind::DoubleArray => Some(ValueKind::Double),
            ValueKind::FloatArray => Some(ValueKind::Float),
            ValueKind::IntArray => Some(ValueKind::Int),
            ValueKind::LongArray => Some(ValueKind::Long),
            ValueKind::ShortArray => Some(ValueKind::Short),
            ValueKind::StringArray => Some(ValueKind::String),
            _ => None,
        }
    }

    /// True when the encoded string must start with an element signature.
    pub fn needs_signature(self) -> bool {
        self == ValueKind::ObjectArray
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Boolean => "boolean",
            ValueKind::Byte => "byte",
            ValueKind::Char => "char",
            ValueKind::Double => "double",
            ValueKind::Float => "float",
            ValueKind::Int => "int",
            ValueKind::Long => "long",
            ValueKind::Short => "short",
            ValueKind::String => "string",
            ValueKind::BooleanArray => "boolean[]",
            ValueKind::ByteArray => "byte[]",
            ValueKind::CharArray => "char[]",
            ValueKind::DoubleArray => "double[]",
            ValueKind::FloatArray => "float[]",
            ValueKind::IntArray => "int[]",
            ValueKind::LongArray => "long[]",
            ValueKind::ShortArray => "short[]",
            ValueKind::StringArray => "string[]",
            ValueKind::Object => "object",
            ValueKind::ObjectArray => "object[]",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown value kind `{s}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for kind in ValueKind::ALL {
            assert_eq!(kind.name().parse::<ValueKind>().ok(), Some(kind));
        }
        assert!(matches!(
            "int[][]".parse::<ValueKind>(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn array_flags() {
        assert!(ValueKind::IntArray.is_array());
        assert!(ValueKind::ObjectArray.is_array());
        assert!(!ValueKind::Object.is_array());
        assert!(ValueKind::String.is_scalar());
        assert!(!ValueKind::Object.is_scalar());
        assert_eq!(ValueKind::StringArray.element(), Some(ValueKind::String));
        assert_eq!(ValueKind::ObjectArray.element(), None);
        assert!(ValueKind::ObjectArray.needs_signature());
        assert!(!ValueKind::IntArray.needs_signature());
    }
}
