//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnknownToken {
            token: "@".to_string(),
        },
        Position::new(0, 10),
    );

    assert_eq!(error.get_error_name(), "UnknownToken");
    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnknownToken {
            token: "@".to_string()
        }
    );
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::MalformedOperator {
            token: ":".to_string(),
        },
        Position::new(4, 2),
    );

    assert_eq!(error.get_position(), &Position::new(4, 2));
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnknownToken {
            token: "$".to_string(),
        },
        Position::new(1, 3),
    );
    assert_eq!(error.to_string(), "unknown token: $ at 1:3");

    let error = Error::new(
        ErrorImpl::UnterminatedCharacterLiteral { found: 'b' },
        Position::new(0, 2),
    );
    assert_eq!(
        error.to_string(),
        "character literal must end with ', found 'b' at 0:2"
    );

    let error = Error::new(ErrorImpl::InvalidUtf8 { byte: 0xff }, Position::new(0, 0));
    assert_eq!(error.to_string(), "invalid UTF-8 byte 0xff at 0:0");
}

#[test]
fn test_error_names() {
    let cases = [
        (ErrorImpl::EmptyCharacterLiteral, "EmptyCharacterLiteral"),
        (ErrorImpl::UnterminatedStringLiteral, "UnterminatedStringLiteral"),
        (
            ErrorImpl::PrematureEndOfInput {
                context: "character literal".to_string(),
            },
            "PrematureEndOfInput",
        ),
        (ErrorImpl::InvalidUtf8 { byte: 0xc3 }, "InvalidUtf8"),
        (
            ErrorImpl::Io {
                message: "broken pipe".to_string(),
            },
            "Io",
        ),
    ];

    for (error_impl, name) in cases {
        let error = Error::new(error_impl, Position::default());
        assert_eq!(error.get_error_name(), name);
    }
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnknownToken {
            token: "@".to_string(),
        },
        Position::default(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::MalformedOperator {
            token: ":".to_string(),
        },
        Position::default(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains(":=")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_source_is_internal_error() {
    use std::error::Error as _;

    let error = Error::new(ErrorImpl::UnterminatedStringLiteral, Position::default());
    let source = error.source().map(|source| source.to_string());

    assert_eq!(source.as_deref(), Some("unterminated string literal"));
}
