//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's verbatim lexeme
/// * `$position` - Position of the lexeme's first code point
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), Position::new(0, 4));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $position:expr) => {
        Token {
            kind: $kind,
            text: $text,
            position: $position,
        }
    };
}
