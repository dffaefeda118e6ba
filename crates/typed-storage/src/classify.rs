//! Type classification: requested type → [`ValueKind`].
//!
//! Only the nine scalar types and the nine `Vec`s of them are registered.
//! Every other descriptor takes the generic path, so an open-ended set of
//! user types needs no registration at all.

use core::any::TypeId;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::descriptor::{Storable, TypeDescriptor};
use crate::kind::ValueKind;

static TABLE: OnceLock<TypeClassificationTable> = OnceLock::new();

/// Immutable `TypeId → ValueKind` lookup shared by the whole process.
pub struct TypeClassificationTable {
    kinds: HashMap<TypeId, ValueKind>,
}

impl TypeClassificationTable {
    /// The process-wide table, built on first use.
    pub fn global() -> &'static Self {
        TABLE.get_or_init(Self::new)
    }

    fn new() -> Self {
        let mut table = Self {
            kinds: HashMap::with_capacity(18),
        };

        table.register::<Vec<bool>>(ValueKind::BooleanArray);
        table.register::<Vec<i8>>(ValueKind::ByteArray);
        table.register::<Vec<char>>(ValueKind::CharArray);
        table.register::<Vec<f64>>(ValueKind::DoubleArray);
        table.register::<Vec<f32>>(ValueKind::FloatArray);
        table.register::<Vec<i32>>(ValueKind::IntArray);
        table.register::<Vec<i64>>(ValueKind::LongArray);
        table.register::<Vec<i16>>(ValueKind::ShortArray);
        table.register::<Vec<String>>(ValueKind::StringArray);

        table.register::<bool>(ValueKind::Boolean);
        table.register::<i8>(ValueKind::Byte);
        table.register::<char>(ValueKind::Char);
        table.register::<f64>(ValueKind::Double);
        table.register::<f32>(ValueKind::Float);
        table.register::<i32>(ValueKind::Int);
        table.register::<i64>(ValueKind::Long);
        table.register::<i16>(ValueKind::Short);
        table.register::<String>(ValueKind::String);

        table
    }

    fn register<T: 'static>(&mut self, kind: ValueKind) {
        self.kinds.insert(TypeId::of::<T>(), kind);
    }

    pub fn get(&self, id: TypeId) -> Option<ValueKind> {
        self.kinds.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Total classification: table hit, else the generic array or object kind.
    pub fn classify(&self, descriptor: &TypeDescriptor) -> ValueKind {
        match self.get(descriptor.id()) {
            Some(kind) => kind,
            None if descriptor.is_array() => ValueKind::ObjectArray,
            None => ValueKind::Object,
        }
    }
}

pub fn classify_descriptor(descriptor: &TypeDescriptor) -> ValueKind {
    TypeClassificationTable::global().classify(descriptor)
}

pub fn classify<T: Storable>() -> ValueKind {
    classify_descriptor(&T::descriptor())
}
