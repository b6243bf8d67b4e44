use dataex_core::errors::{DataExError, ExError, ExErrorKind};

#[test]
fn test_unclosed_group_conversion() {
    let err = DataExError::UnclosedGroup { position: 4 };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::MalformedSpecification);
    assert_eq!(ex_err.code(), "ERR_MALFORMED_SPECIFICATION");
    assert_eq!(ex_err.position(), Some(4));
    assert!(ex_err.message().contains("Unclosed group"));
}

#[test]
fn test_depth_exceeded_is_extraction_failure() {
    let err = DataExError::DepthExceeded {
        depth: 9,
        limit: 8,
        position: 17,
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::ExtractionFailed);
    assert_eq!(ex_err.code(), "ERR_EXTRACTION_FAILED");
    assert_ne!(ex_err.kind(), ExErrorKind::MalformedSpecification);
    assert!(ex_err.message().contains("exceeds limit 8"));
}

#[test]
fn test_serde_json_error_conversion() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: DataExError = parse_err.into();
    assert!(matches!(err, DataExError::Serialization { .. }));

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.code(), "ERR_SERIALIZATION");
    assert_eq!(ex_err.position(), None);
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "input.json");
    let err: DataExError = io_err.into();

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::Io);
    assert!(ex_err.message().contains("input.json"));
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::MalformedSpecification, "ERR_MALFORMED_SPECIFICATION"),
        (ExErrorKind::ExtractionFailed, "ERR_EXTRACTION_FAILED"),
        (ExErrorKind::Config, "ERR_CONFIG"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_ex_error_builder_context() {
    let err = ExError::new(ExErrorKind::Config)
        .with_op("load_config")
        .with_message("bad mode");

    assert_eq!(err.op(), Some("load_config"));
    assert_eq!(err.to_string(), "[ERR_CONFIG] in operation 'load_config': bad mode");
}
