use chrono::{TimeZone, Utc};
use maybe_core::{
    none, some, DriverKind, DriverValue, FromDriverValue, Maybe, ScanError, ToDriverValue,
};

#[test]
fn write_present_integer_and_absent_any_type() {
    assert_eq!(some(42_i64).driver_value(), DriverValue::Integer(42));
    assert_eq!(some(42_i32).driver_value(), DriverValue::Integer(42));
    assert_eq!(none::<i64>().driver_value(), DriverValue::Null);
    assert_eq!(none::<String>().driver_value(), DriverValue::Null);
    assert_eq!(none::<Vec<u8>>().driver_value(), DriverValue::Null);
}

#[test]
fn null_reads_absent_for_every_type() {
    assert!(Maybe::<i8>::from_driver_value(DriverValue::Null).unwrap().is_none());
    assert!(Maybe::<f32>::from_driver_value(DriverValue::Null).unwrap().is_none());
    assert!(Maybe::<String>::from_driver_value(DriverValue::Null).unwrap().is_none());
    assert!(Maybe::<bool>::from_driver_value(DriverValue::Null).unwrap().is_none());
    assert!(Maybe::<Unreadable>::from_driver_value(DriverValue::Null)
        .unwrap()
        .is_none());
}

#[test]
fn reads_each_supported_kind() {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();

    assert_eq!(
        Maybe::<i64>::from_driver_value(DriverValue::Integer(42)).unwrap(),
        some(42)
    );
    assert_eq!(
        Maybe::<i16>::from_driver_value(DriverValue::Integer(-42)).unwrap(),
        some(-42)
    );
    assert_eq!(
        Maybe::<f64>::from_driver_value(DriverValue::Real(2.5)).unwrap(),
        some(2.5)
    );
    assert_eq!(
        Maybe::<String>::from_driver_value(DriverValue::Text("t".into())).unwrap(),
        some("t".to_string())
    );
    assert_eq!(
        Maybe::<String>::from_driver_value(DriverValue::Blob(b"b".to_vec())).unwrap(),
        some("b".to_string())
    );
    assert_eq!(
        Maybe::<Vec<u8>>::from_driver_value(DriverValue::Blob(vec![0, 1])).unwrap(),
        some(vec![0, 1])
    );
    assert_eq!(
        Maybe::<bool>::from_driver_value(DriverValue::Bool(true)).unwrap(),
        some(true)
    );
    assert_eq!(
        Maybe::<chrono::DateTime<Utc>>::from_driver_value(DriverValue::Timestamp(at)).unwrap(),
        some(at)
    );
}

#[test]
fn text_into_numeric_is_type_mismatch() {
    let err = Maybe::<i64>::from_driver_value(DriverValue::Text("42".into())).unwrap_err();
    match err {
        ScanError::TypeMismatch {
            expected, found, ..
        } => {
            assert_eq!(expected, &[DriverKind::Integer]);
            assert_eq!(found, DriverKind::Text);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(matches!(
        Maybe::<f64>::from_driver_value(DriverValue::Integer(1)),
        Err(ScanError::TypeMismatch { .. })
    ));
    assert!(matches!(
        Maybe::<Vec<u8>>::from_driver_value(DriverValue::Text("x".into())),
        Err(ScanError::TypeMismatch { .. })
    ));
    assert!(matches!(
        Maybe::<bool>::from_driver_value(DriverValue::Integer(1)),
        Err(ScanError::TypeMismatch { .. })
    ));
}

#[test]
fn narrowing_out_of_range_fails_instead_of_truncating() {
    let mut target = some(1_i32);
    let err = target
        .scan(DriverValue::Integer(i64::from(i32::MAX) + 1))
        .unwrap_err();
    assert!(matches!(err, ScanError::OutOfRange { .. }));
    assert!(err.to_string().contains("2147483648"));
    assert_eq!(target, some(1));
}

#[test]
fn scan_replaces_state_in_place() {
    let mut target = none::<i64>();
    target.scan(DriverValue::Integer(42)).unwrap();
    assert_eq!(target, some(42));

    target.scan(DriverValue::Null).unwrap();
    assert!(target.is_none());
}

/// Writes through its own representation and has no read mapping.
#[derive(Debug, PartialEq)]
struct Unreadable(u16);

impl ToDriverValue for Unreadable {
    fn to_driver_value(&self) -> DriverValue {
        DriverValue::Text(format!("u{}", self.0))
    }
}

impl FromDriverValue for Unreadable {}

#[test]
fn custom_write_is_delegated_to() {
    assert_eq!(
        some(Unreadable(7)).driver_value(),
        DriverValue::Text("u7".to_string())
    );
    assert_eq!(none::<Unreadable>().driver_value(), DriverValue::Null);
}

#[test]
fn type_without_read_mapping_is_unsupported() {
    let err = Maybe::<Unreadable>::from_driver_value(DriverValue::Text("u7".into())).unwrap_err();
    match err {
        ScanError::Unsupported { target } => assert!(target.ends_with("Unreadable")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn driver_value_passes_through() {
    let value = DriverValue::Bool(false);
    assert_eq!(some(value.clone()).driver_value(), value);
    assert_eq!(some("borrowed").driver_value(), DriverValue::Text("borrowed".into()));
}
