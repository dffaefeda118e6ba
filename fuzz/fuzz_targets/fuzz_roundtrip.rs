#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serde::{Deserialize, Serialize};
use typed_storage::{Storable, StorageSerializer};

#[derive(Arbitrary, Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Shape {
    Empty,
    Circle(f64),
    Rect { w: i32, h: i32 },
    Path(Vec<(i16, i16)>),
}

#[derive(Arbitrary, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Record {
    id: i64,
    label: String,
    flags: Vec<bool>,
    glyph: char,
    shapes: Vec<Shape>,
    parent: Option<Box<Record>>,
}

impl Storable for Record {}

impl Record {
    // NaN never compares equal
    fn has_nan(&self) -> bool {
        self.shapes.iter().any(|s| matches!(s, Shape::Circle(r) if r.is_nan()))
            || self.parent.as_ref().is_some_and(|p| p.has_nan())
    }

    fn depth(&self) -> usize {
        1 + self.parent.as_ref().map_or(0, |p| p.depth())
    }
}

#[derive(Arbitrary, Debug)]
struct Input {
    record: Record,
    ints: Vec<i32>,
    text: String,
}

fn same_after_trip<T>(value: &T) -> bool
where
    T: Storable + PartialEq,
{
    let ser = StorageSerializer::new();
    let encoded = ser.serialize(Some(value)).expect("serialize");
    let decoded: Option<T> = ser.deserialize(encoded.as_deref()).expect("deserialize");
    decoded.as_ref() == Some(value)
}

fuzz_target!(|input: Input| {
    // serde_json caps parsing at 128 nesting levels
    if !input.record.has_nan() && input.record.depth() < 32 {
        assert!(same_after_trip(&input.record));
    }
    assert!(same_after_trip(&input.ints));
    assert!(same_after_trip(&input.text));
});
