use serde::{Deserialize, Serialize};
use typed_storage::{Storable, TypeClassificationTable, ValueKind, classify};

#[derive(Serialize, Deserialize)]
struct Point {
    x: i32,
    y: i32,
}

impl Storable for Point {}

#[test]
fn scalars_have_dedicated_kinds() {
    assert_eq!(classify::<bool>(), ValueKind::Boolean);
    assert_eq!(classify::<i8>(), ValueKind::Byte);
    assert_eq!(classify::<char>(), ValueKind::Char);
    assert_eq!(classify::<f64>(), ValueKind::Double);
    assert_eq!(classify::<f32>(), ValueKind::Float);
    assert_eq!(classify::<i32>(), ValueKind::Int);
    assert_eq!(classify::<i64>(), ValueKind::Long);
    assert_eq!(classify::<i16>(), ValueKind::Short);
    assert_eq!(classify::<String>(), ValueKind::String);
}

#[test]
fn scalar_arrays_have_dedicated_kinds() {
    assert_eq!(classify::<Vec<bool>>(), ValueKind::BooleanArray);
    assert_eq!(classify::<Vec<i8>>(), ValueKind::ByteArray);
    assert_eq!(classify::<Vec<char>>(), ValueKind::CharArray);
    assert_eq!(classify::<Vec<f64>>(), ValueKind::DoubleArray);
    assert_eq!(classify::<Vec<f32>>(), ValueKind::FloatArray);
    assert_eq!(classify::<Vec<i32>>(), ValueKind::IntArray);
    assert_eq!(classify::<Vec<i64>>(), ValueKind::LongArray);
    assert_eq!(classify::<Vec<i16>>(), ValueKind::ShortArray);
    assert_eq!(classify::<Vec<String>>(), ValueKind::StringArray);
}

#[test]
fn unregistered_types_fall_back() {
    assert_eq!(classify::<Point>(), ValueKind::Object);
    assert_eq!(classify::<u64>(), ValueKind::Object);
    assert_eq!(classify::<Option<i32>>(), ValueKind::Object);
    assert_eq!(classify::<Vec<Point>>(), ValueKind::ObjectArray);
    assert_eq!(classify::<Vec<Vec<i32>>>(), ValueKind::ObjectArray);
}

#[test]
fn boxed_and_unregistered_scalar_arrays_are_generic() {
    assert_eq!(classify::<Vec<Option<i32>>>(), ValueKind::ObjectArray);
    assert_eq!(classify::<Vec<u8>>(), ValueKind::ObjectArray);
}

#[test]
fn table_is_shared_and_fixed() {
    let a = TypeClassificationTable::global();
    let b = TypeClassificationTable::global();
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.len(), 18);
    assert!(!a.is_empty());
    assert_eq!(a.get(std::any::TypeId::of::<u8>()), None);
}

#[test]
fn classification_ignores_instances() {
    let d = Vec::<Point>::descriptor();
    assert_eq!(typed_storage::classify_descriptor(&d), ValueKind::ObjectArray);
    assert_eq!(typed_storage::classify_descriptor(&d), ValueKind::ObjectArray);
}

#[test]
fn classification_is_thread_safe() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| (classify::<i32>(), classify::<Vec<Point>>())))
        .collect();
    for h in handles {
        let kinds = h.join().ok();
        assert_eq!(kinds, Some((ValueKind::Int, ValueKind::ObjectArray)));
    }
}
