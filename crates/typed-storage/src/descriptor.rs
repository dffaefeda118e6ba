//! Requested-type descriptors and the `Storable` trait that produces them.

use core::any::TypeId;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use serde::{Serialize, de::DeserializeOwned};

/// The declared type a value is stored or loaded as.
///
/// Two descriptors are equal when they name the same Rust type. For array
/// types the element descriptor is carried along so generic arrays can record
/// which element type they were encoded with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    id: TypeId,
    signature: &'static str,
    element: Option<Box<TypeDescriptor>>,
}

impl TypeDescriptor {
    pub fn of<T: Storable>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            signature: T::signature(),
            element: None,
        }
    }

    pub fn array_of<A: Storable, E: Storable>() -> Self {
        Self {
            id: TypeId::of::<A>(),
            signature: A::signature(),
            element: Some(Box::new(E::descriptor())),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn signature(&self) -> &'static str {
        self.signature
    }

    pub fn element(&self) -> Option<&TypeDescriptor> {
        self.element.as_deref()
    }

    pub fn is_array(&self) -> bool {
        self.element.is_some()
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

/// A type that can be put into a string store.
///
/// User types opt in with an empty impl:
///
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct Session { user: String, expires: i64 }
///
/// impl typed_storage::Storable for Session {}
/// ```
///
/// The signature defaults to [`core::any::type_name`], which is only stable
/// for a given build. Types stored inside generic arrays across releases
/// should override it with a fixed name.
pub trait Storable: Serialize + DeserializeOwned + 'static {
    fn signature() -> &'static str {
        core::any::type_name::<Self>()
    }

    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>()
    }
}

macro_rules! impl_storable {
    ($($ty:ty),* $(,)?) => {
        $(impl Storable for $ty {})*
    };
}

impl_storable!(
    bool, i8, char, f64, f32, i32, i64, i16, String, u8, u16, u32, u64, usize, isize,
);

impl<E: Storable> Storable for Vec<E> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::array_of::<Self, E>()
    }
}

impl<E: Storable> Storable for Option<E> {}

impl<K, V> Storable for HashMap<K, V>
where
    K: Storable + Eq + Hash,
    V: Storable,
{
}

impl<K, V> Storable for BTreeMap<K, V>
where
    K: Storable + Ord,
    V: Storable,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_descriptor_carries_element() {
        let d = Vec::<i32>::descriptor();
        assert!(d.is_array());
        assert!(d.is::<Vec<i32>>());
        assert_eq!(d.element().map(TypeDescriptor::id), Some(TypeId::of::<i32>()));
        assert_eq!(d.element().map(TypeDescriptor::signature), Some("i32"));
    }

    #[test]
    fn nested_vec_keeps_inner_array() {
        let d = Vec::<Vec<String>>::descriptor();
        let inner = d.element().and_then(TypeDescriptor::element);
        assert_eq!(inner.map(TypeDescriptor::id), Some(TypeId::of::<String>()));
    }

    #[test]
    fn option_is_not_an_array() {
        assert!(!Option::<Vec<i32>>::descriptor().is_array());
        assert!(!String::descriptor().is_array());
    }
}
