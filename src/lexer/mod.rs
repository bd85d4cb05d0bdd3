//! Lexical analysis module.
//!
//! The scanner reads one code point at a time from a `CharSource` and
//! classifies tokens on the fly:
//!
//! - Keywords and identifiers (ASCII letters and digits)
//! - Decimal integers
//! - Character and string literals with unvalidated backslash escapes
//! - One- and two-character operators, resolved with one code point of pushback
//! - Line comments
//!
//! Every token records the line and column of its first code point.

pub mod lexer;
pub mod tokens;
