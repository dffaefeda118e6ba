#![no_main]
use libfuzzer_sys::fuzz_target;
use typed_storage::StorageSerializer;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let ser = StorageSerializer::new();
        let _ = ser.deserialize::<i32>(Some(s));
        let _ = ser.deserialize::<f64>(Some(s));
        let _ = ser.deserialize::<char>(Some(s));
        let _ = ser.deserialize::<Vec<i8>>(Some(s));
        let _ = ser.deserialize::<Vec<String>>(Some(s));
        let _ = ser.deserialize::<Vec<Vec<i64>>>(Some(s));
        let _ = ser.deserialize::<std::collections::BTreeMap<String, Option<u64>>>(Some(s));
    }
});
