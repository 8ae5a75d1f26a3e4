//! Error type tests

use drone_openai_plugin::utils::error::helpers::*;
use drone_openai_plugin::AppError;
use std::error::Error as _;
use std::io;

#[test]
fn test_error_type_strings() {
    let not_found = || io::Error::new(io::ErrorKind::NotFound, "not found");
    let cases = [
        (config_error("API_KEY is required"), "config_error"),
        (file_error("/tmp/in.txt", not_found()), "file_error"),
        (conversion_error("bad content"), "serialization_error"),
        (AppError::Timeout(60), "timeout_error"),
        (
            AppError::Api {
                status: 429,
                body: "rate limited".to_string(),
            },
            "api_error",
        ),
        (AppError::NoResponse, "content_error"),
        (AppError::EmptyResponse, "content_error"),
        (output_error("out.txt", not_found()), "output_error"),
    ];

    for (err, expected) in cases {
        assert_eq!(err.error_type(), expected, "{}", err);
    }
}

#[test]
fn test_display_messages() {
    assert_eq!(
        config_error("PROMPT is required").to_string(),
        "Configuration error: PROMPT is required"
    );
    assert_eq!(AppError::Timeout(30).to_string(), "Request timed out after 30s");
    assert_eq!(AppError::NoResponse.to_string(), "no response from OpenAI");
    assert_eq!(AppError::EmptyResponse.to_string(), "empty response from OpenAI");
    assert_eq!(
        file_error(
            "/missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory")
        )
        .to_string(),
        "error reading file /missing.txt: No such file or directory"
    );
}

#[test]
fn test_io_source_is_preserved() {
    let err = output_error("out.txt", io::Error::new(io::ErrorKind::PermissionDenied, "denied"));

    let source = err.source().expect("output error should carry its io error");
    let io_err = source.downcast_ref::<io::Error>().unwrap();
    assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
}

#[test]
fn test_serialization_error_from_serde() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: AppError = parse_err.into();

    assert!(matches!(err, AppError::Serialization(_)));
    assert_eq!(err.error_type(), "serialization_error");
    assert!(err.status().is_none());
}

#[test]
fn test_status_only_for_api_errors() {
    let api = AppError::Api {
        status: 500,
        body: "boom".to_string(),
    };
    assert_eq!(api.status(), Some(500));
    assert_eq!(AppError::Timeout(5).status(), None);
    assert_eq!(config_error("x").status(), None);
}
