use crate::collections::dedup;
use crate::module::{HostObject, Value};

#[test]
fn dedup_keeps_first_occurrence_in_order() {
    let a = Value::Object(HostObject::new("a"));
    let b = Value::Object(HostObject::new("a"));
    let items = vec![
        Value::from(1),
        a.clone(),
        Value::from("pie"),
        Value::from(1),
        b.clone(),
        Value::Null,
        a.clone(),
        Value::from("pie"),
        Value::Undefined,
        Value::Null,
    ];
    let expected = vec![
        Value::from(1),
        a,
        Value::from("pie"),
        b,
        Value::Null,
        Value::Undefined,
    ];
    assert_eq!(dedup(&items), expected);
}

#[test]
fn dedup_keeps_both_signed_zeros() {
    let out = dedup(&[0.0, -0.0, 0.0, -0.0]);
    assert_eq!(out.len(), 2);
    assert!(out[0].is_sign_positive());
    assert!(out[1].is_sign_negative());
}

#[test]
fn dedup_of_unique_input_is_a_copy() {
    let items: Vec<f64> = (0..50).map(f64::from).collect();
    assert_eq!(dedup(&items), items);
    assert!(dedup::<Value>(&[]).is_empty());
}
