#![allow(clippy::module_inception)]

use std::{fmt::Display, fs, io::Write, path::Path};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod source;

pub use lexer::lexer::{tokenize, Scanner};
pub use lexer::tokens::{Token, TokenKind};
pub use source::source::{CharSource, ReaderSource, StrSource};

/// Zero-based line/column of a code point in the source stream.
///
/// The column counts code points consumed on the current line, so it is
/// also the index of the next code point within that line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Moves past `c`. A newline starts the next line at column 0.
    pub fn advance(&mut self, c: char) {
        self.column += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the zero-based `line` of `file`, without its newline.
pub fn get_line_at_position(file: &Path, line: u32) -> Option<String> {
    let content = fs::read_to_string(file).ok()?;
    content
        .split('\n')
        .nth(line as usize)
        .map(|text| text.trim_end_matches('\r').to_string())
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::{format_error, get_line_at_position, run, Position};
    use crate::{
        errors::errors::{Error, ErrorImpl},
        Scanner, StrSource,
    };

    fn run_str(source: &str, skip_comments: bool) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = run(StrSource::new(source), None, skip_comments, &mut out, &mut err);
        (
            status,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_get_line_at_position() {
        let file = PathBuf::from("tests/test_file.txt");

        assert_eq!(
            get_line_at_position(&file, 0).as_deref(),
            Some("package main")
        );
        assert_eq!(
            get_line_at_position(&file, 3).as_deref(),
            Some("    x := 'a'")
        );
        assert_eq!(get_line_at_position(&file, 100), None);
    }

    #[test]
    fn test_position_advance() {
        let mut position = Position::default();
        position.advance('a');
        position.advance('b');
        assert_eq!(position, Position::new(0, 2));

        position.advance('\n');
        assert_eq!(position, Position::new(1, 0));
        assert_eq!(position.to_string(), "1:0");
    }

    #[test]
    fn test_format_error_with_source_line() {
        let error = Error::new(
            ErrorImpl::UnknownToken {
                token: "@".to_string(),
            },
            Position::new(3, 4),
        );
        let rendered = format_error(&error, Some(Path::new("tests/test_file.txt")));

        assert!(rendered.starts_with("Error: UnknownToken: unknown token: @"));
        assert!(rendered.contains("-> tests/test_file.txt:3:4"));
        assert!(rendered.contains("3 | x := 'a'"));
        assert!(rendered.ends_with("  | ^"));
    }

    #[test]
    fn test_format_error_caret_follows_tabs() {
        let error = Error::new(
            ErrorImpl::UnknownToken {
                token: "@".to_string(),
            },
            Position::new(0, 6),
        );
        let rendered = format_error(&error, Some(Path::new("tests/test_tabs.txt")));

        assert!(rendered.contains("0 | x :=\t@"));
        assert!(rendered.ends_with("  |     \t^"));
    }

    #[test]
    fn test_format_error_without_file() {
        let error = Error::new(ErrorImpl::UnterminatedStringLiteral, Position::new(0, 7));
        let rendered = format_error(&error, None);

        assert_eq!(
            rendered,
            "Error: UnterminatedStringLiteral: unterminated string literal (Add a closing `\"` before the end of input)\n-> <stdin>:0:7"
        );
    }

    #[test]
    fn test_format_error_names_offending_code_point() {
        let mut scanner = Scanner::for_str("x := @");
        while scanner.advance() {}
        let rendered = format_error(scanner.error().unwrap(), None);

        assert_eq!(rendered, "Error: UnknownToken: unknown token: @\n-> <stdin>:0:5");
    }

    #[test]
    fn test_run_prints_tokens() {
        let (status, out, err) = run_str("x := 1 // one\n  y", false);

        assert_eq!(status, 0);
        assert_eq!(
            out,
            "0:0 Identifier x\n0:2 Init :=\n0:5 Number 1\n0:7 LineComment // one\n1:2 Identifier y\n"
        );
        assert_eq!(err, "");
    }

    #[test]
    fn test_run_skips_comments() {
        let (status, out, _) = run_str("// header\nx // trailing", true);

        assert_eq!(status, 0);
        assert_eq!(out, "1:0 Identifier x\n");
    }

    #[test]
    fn test_run_reports_fault() {
        let (status, out, err) = run_str("x := 1 // c\n  y|z", false);

        assert_eq!(status, 1);
        assert!(out.ends_with("1:2 Identifier y\n"));
        assert_eq!(err, "Error: UnknownToken: unknown token: |\n-> <stdin>:1:3\n");
    }
}

/// Renders a lexical fault for humans.
///
/// ```text
/// Error: UnknownToken: unknown token: @
/// -> main.bs:3:5
///   |
/// 3 | x := @
///   |      ^
/// ```
///
/// Positions are zero-based, as in the token listing. The source line is
/// only shown when `file` can be read again.
pub fn format_error(error: &Error, file: Option<&Path>) -> String {
    let position = error.get_position();
    let mut out = format!("Error: {}: {}", error.get_error_name(), error.get_error());

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        out.push_str(&format!(" ({})", tip));
    }

    let name = file
        .map(|file| file.as_os_str().to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("<stdin>"));
    out.push_str(&format!("\n-> {}:{}", name, position));

    let Some(line_text) = file.and_then(|file| get_line_at_position(file, position.line)) else {
        return out;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    // Tabs are echoed so the caret lines up with the printed source line.
    let caret_indent: String = line_text_removed
        .chars()
        .take((position.column as usize).saturating_sub(removed_whitespace))
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();

    out.push_str(&format!("\n{:>padding$}", "|"));
    out.push_str(&format!("\n{} | {}", line_string, line_text_removed.trim_end()));
    out.push_str(&format!("\n{:>padding$} {}^", "|", caret_indent));
    out
}

pub fn display_error(error: &Error, file: Option<&Path>) {
    eprintln!("{}", format_error(error, file));
}

/// Prints every token of `source` to `out` as `line:column Kind text` and
/// reports a fault to `err`.
///
/// Returns the exit status: 0 on a clean end of input, 1 on a lexical fault
/// or when `out` cannot be written.
pub fn run<S, W, E>(
    source: S,
    file: Option<&Path>,
    skip_comments: bool,
    out: &mut W,
    err: &mut E,
) -> i32
where
    S: CharSource,
    W: Write,
    E: Write,
{
    let mut scanner = Scanner::new(source);

    while scanner.advance() {
        let token = scanner.token();
        if skip_comments && token.kind == TokenKind::LineComment {
            continue;
        }
        if let Err(e) = writeln!(out, "{}", token) {
            let _ = writeln!(err, "Error: {}", e);
            return 1;
        }
    }

    if let Err(e) = out.flush() {
        let _ = writeln!(err, "Error: {}", e);
        return 1;
    }

    match scanner.error() {
        Some(error) => {
            let _ = writeln!(err, "{}", format_error(error, file));
            1
        }
        None => 0,
    }
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
