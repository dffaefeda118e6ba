use serde::{Deserialize, Serialize};
use typed_storage::StorageSerializer;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct MyPojo {
    a: i32,
}

impl typed_storage::Storable for MyPojo {}

#[test]
fn none_in_none_out() -> Result<(), Box<dyn std::error::Error>> {
    let ser = StorageSerializer::new();
    assert_eq!(ser.serialize::<MyPojo>(None)?, None);
    assert_eq!(ser.deserialize::<MyPojo>(None)?, None);
    assert_eq!(ser.serialize::<i32>(None)?, None);
    assert_eq!(ser.deserialize::<Vec<MyPojo>>(None)?, None);
    assert_eq!(ser.serialize::<String>(None)?, None);
    assert_eq!(ser.deserialize::<String>(None)?, None);
    Ok(())
}

#[test]
fn strings_are_verbatim() -> Result<(), Box<dyn std::error::Error>> {
    let ser = StorageSerializer::new();
    assert_eq!(ser.serialize(Some(&"abc".to_string()))?.as_deref(), Some("abc"));
    assert_eq!(ser.deserialize::<String>(Some("abc"))?.as_deref(), Some("abc"));
    // no framing is applied, so anything is a valid stored string
    assert_eq!(ser.deserialize::<String>(Some("[not json"))?.as_deref(), Some("[not json"));
    Ok(())
}

#[test]
fn empty_string_is_not_none() -> Result<(), Box<dyn std::error::Error>> {
    let ser = StorageSerializer::new();
    let encoded = ser.serialize(Some(&String::new()))?;
    assert_eq!(encoded.as_deref(), Some(""));
    assert_eq!(ser.deserialize::<String>(encoded.as_deref())?, Some(String::new()));
    Ok(())
}

#[test]
fn string_fast_path_ignores_size_limit() -> Result<(), Box<dyn std::error::Error>> {
    let ser = StorageSerializer::with_options(typed_storage::Options {
        max_input_size: Some(4),
        ..Default::default()
    })?;
    let long = "longer than four".to_string();
    assert_eq!(ser.deserialize::<String>(Some(&long))?, Some(long));
    Ok(())
}

#[test]
fn string_inside_objects_is_encoded() -> Result<(), Box<dyn std::error::Error>> {
    let ser = StorageSerializer::new();
    let encoded = ser.serialize(Some(&Some("abc".to_string())))?;
    assert_eq!(encoded.as_deref(), Some(r#"["abc"]"#));
    Ok(())
}

#[test]
fn null_token_for_type_without_null_form_is_absent() -> Result<(), Box<dyn std::error::Error>> {
    let ser = StorageSerializer::new();
    let encoded = ser.serialize(Some(&Option::<MyPojo>::None))?;
    assert_eq!(encoded.as_deref(), Some("[null]"));
    assert_eq!(ser.deserialize::<MyPojo>(encoded.as_deref())?, None);
    Ok(())
}

#[test]
fn null_token_for_nullable_type_is_present() -> Result<(), Box<dyn std::error::Error>> {
    let ser = StorageSerializer::new();
    let encoded = ser.serialize(Some(&Option::<i32>::None))?;
    assert_eq!(encoded.as_deref(), Some("[null]"));
    assert_eq!(ser.deserialize::<Option<i32>>(encoded.as_deref())?, Some(None));
    Ok(())
}
