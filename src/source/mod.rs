//! Code-point sources the scanner reads from.
//!
//! - `StrSource` walks an in-memory string
//! - `ReaderSource` decodes UTF-8 from any `BufRead` (stdin, files)

pub mod source;
