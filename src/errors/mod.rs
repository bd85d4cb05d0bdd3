//! Error types for the scanner.
//!
//! Every lexical fault carries the position where scanning stopped. Faults
//! are terminal: the scanner reports the first one and produces no more
//! tokens.

pub mod errors;

#[cfg(test)]
mod tests;
