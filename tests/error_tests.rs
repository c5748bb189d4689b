//! Error handling tests

use unit_converter::{ConvertError, Unit, UnsupportedConversion};

#[test]
fn test_unsupported_converts_into_convert_error() {
    let err: ConvertError = UnsupportedConversion {
        from: Unit::Gram,
        to: Unit::Meter,
    }
    .into();
    assert!(matches!(err, ConvertError::Unsupported(_)));
    assert_eq!(err.to_string(), "Conversion not supported: gram -> meter");
}

#[test]
fn test_unknown_unit_message_lists_choices() {
    let err = "yard".parse::<Unit>().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'yard'"));
    assert!(message.contains("meter, kilometer, gram, kilogram"));
}

#[test]
fn test_missing_unit_message() {
    let err = ConvertError::MissingUnit("to".to_string());
    assert_eq!(err.to_string(), "No unit selected for 'to'");
}

#[test]
fn test_io_error_from() {
    let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
    let err: ConvertError = io.into();
    assert!(err.to_string().starts_with("IO error"));
}

#[test]
fn test_json_error_from() {
    let json_err = serde_json::from_str::<Unit>("\"inch\"").unwrap_err();
    let err: ConvertError = json_err.into();
    assert!(matches!(err, ConvertError::Json(_)));
}
