use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownToken { .. } => "UnknownToken",
            ErrorImpl::MalformedOperator { .. } => "MalformedOperator",
            ErrorImpl::EmptyCharacterLiteral => "EmptyCharacterLiteral",
            ErrorImpl::UnterminatedCharacterLiteral { .. } => "UnterminatedCharacterLiteral",
            ErrorImpl::UnterminatedStringLiteral => "UnterminatedStringLiteral",
            ErrorImpl::PrematureEndOfInput { .. } => "PrematureEndOfInput",
            ErrorImpl::InvalidUtf8 { .. } => "InvalidUtf8",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnknownToken { .. } => ErrorTip::None,
            ErrorImpl::MalformedOperator { token } => ErrorTip::Suggestion(format!(
                "`{}` is not an operator, did you mean `:=` or `::`?",
                token
            )),
            ErrorImpl::EmptyCharacterLiteral => ErrorTip::Suggestion(String::from(
                "Character literals hold exactly one character, use `\"\"` for an empty string",
            )),
            ErrorImpl::UnterminatedCharacterLiteral { .. } => ErrorTip::Suggestion(String::from(
                "Character literals hold one character, use a string literal for more",
            )),
            ErrorImpl::UnterminatedStringLiteral => {
                ErrorTip::Suggestion(String::from("Add a closing `\"` before the end of input"))
            }
            ErrorImpl::PrematureEndOfInput { context } => {
                ErrorTip::Suggestion(format!("Input ended inside {}", context))
            }
            ErrorImpl::InvalidUtf8 { .. } => {
                ErrorTip::Suggestion(String::from("Source files must be encoded as UTF-8"))
            }
            ErrorImpl::Io { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unknown token: {token}")]
    UnknownToken { token: String },
    #[error("malformed operator: {token}")]
    MalformedOperator { token: String },
    #[error("empty character literal")]
    EmptyCharacterLiteral,
    #[error("character literal must end with ', found {found:?}")]
    UnterminatedCharacterLiteral { found: char },
    #[error("unterminated string literal")]
    UnterminatedStringLiteral,
    #[error("unexpected end of input in {context}")]
    PrematureEndOfInput { context: String },
    #[error("invalid UTF-8 byte 0x{byte:02x}")]
    InvalidUtf8 { byte: u8 },
    #[error("read error: {message}")]
    Io { message: String },
}
