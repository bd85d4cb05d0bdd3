use std::io::BufRead;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    source::source::{CharSource, ReaderSource, StrSource},
    Position, MK_TOKEN,
};

use super::tokens::{lookup_keyword, Token, TokenKind};

fn is_next_line(c: char) -> bool {
    c == '\n'
}

fn is_space(c: char) -> bool {
    c.is_whitespace()
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Pull-based scanner producing one token per `advance` call.
///
/// ```
/// use bustc::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::for_str("x := 42");
/// let mut kinds = Vec::new();
/// while scanner.advance() {
///     kinds.push(scanner.token().kind);
/// }
/// assert!(scanner.error().is_none());
/// assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Init, TokenKind::Number]);
/// ```
pub struct Scanner<S> {
    source: S,
    // Code point handed back by `unread`, with the position it was read at.
    pushback: Option<(char, Position)>,
    position: Position,
    token: Token,
    error: Option<Error>,
    error_yielded: bool,
    finished: bool,
}

impl<'a> Scanner<StrSource<'a>> {
    pub fn for_str(source: &'a str) -> Self {
        Scanner::new(StrSource::new(source))
    }
}

impl<R: BufRead> Scanner<ReaderSource<R>> {
    pub fn from_reader(reader: R) -> Self {
        Scanner::new(ReaderSource::new(reader))
    }
}

impl<S: CharSource> Scanner<S> {
    pub fn new(source: S) -> Self {
        Scanner {
            source,
            pushback: None,
            position: Position::default(),
            token: Token::default(),
            error: None,
            error_yielded: false,
            finished: false,
        }
    }

    /// Scans the next token.
    ///
    /// Returns false at the end of input or on a lexical fault; `error`
    /// tells the two apart. A fault is final, later calls keep returning
    /// false. After a clean end the source is not read again.
    pub fn advance(&mut self) -> bool {
        if self.error.is_some() || self.finished {
            return false;
        }

        match self.scan_token() {
            Ok(Some(token)) => {
                trace!(
                    target: "bustc::lexer",
                    kind = %token.kind,
                    position = %token.position,
                    text = %token.text,
                    "token"
                );
                self.token = token;
                true
            }
            Ok(None) => {
                self.finished = true;
                debug!(target: "bustc::lexer", position = %self.position, "end of input");
                false
            }
            Err(error) => {
                debug!(target: "bustc::lexer", %error, "lexical fault");
                self.token = MK_TOKEN!(TokenKind::Invalid, String::new(), *error.get_position());
                self.error = Some(error);
                false
            }
        }
    }

    /// The token produced by the last successful `advance`.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The fault that stopped scanning, if any.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    fn read_char(&mut self) -> Result<Option<char>, Error> {
        let c = match self.pushback.take() {
            Some((c, before)) => {
                self.position = before;
                Some(c)
            }
            None => self
                .source
                .read_char()
                .map_err(|error| Error::new(error, self.position))?,
        };

        if let Some(c) = c {
            self.position.advance(c);
        }
        Ok(c)
    }

    /// Reads one code point, also returning the position to hand back to
    /// `unread` if the caller decides not to keep it.
    fn peek_one(&mut self) -> Result<Option<(char, Position)>, Error> {
        let before = self.position;
        Ok(self.read_char()?.map(|c| (c, before)))
    }

    fn unread(&mut self, c: char, before: Position) {
        debug_assert!(self.pushback.is_none(), "only one code point of pushback");
        self.pushback = Some((c, before));
        self.position = before;
    }

    /// Consumes the next code point if it is `expected`.
    fn accept(&mut self, expected: char) -> Result<bool, Error> {
        match self.peek_one()? {
            Some((c, _)) if c == expected => Ok(true),
            Some((c, before)) => {
                self.unread(c, before);
                Ok(false)
            }
            None => Ok(false),
        }
    }

    fn scan_token(&mut self) -> Result<Option<Token>, Error> {
        let (c, start) = loop {
            match self.peek_one()? {
                None => return Ok(None),
                Some((c, _)) if is_space(c) => continue,
                Some(found) => break found,
            }
        };

        let mut text = String::from(c);
        let kind = match c {
            '{' => TokenKind::OpenBrace,
            '}' => TokenKind::CloseBrace,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '[' => TokenKind::OpenBracket,
            ']' => TokenKind::CloseBracket,
            ',' => TokenKind::Comma,
            '+' => TokenKind::Add,
            '-' => TokenKind::Sub,
            '*' => TokenKind::Mul,
            '<' => TokenKind::Less,
            '>' => TokenKind::Greater,
            '/' => {
                if self.accept('/')? {
                    text.push('/');
                    return self.scan_line_comment(text, start).map(Some);
                }
                TokenKind::Div
            }
            ':' => match self.read_char()? {
                Some('=') => {
                    text.push('=');
                    TokenKind::Init
                }
                Some(':') => {
                    text.push(':');
                    TokenKind::Scope
                }
                Some(other) => {
                    text.push(other);
                    return Err(Error::new(ErrorImpl::MalformedOperator { token: text }, start));
                }
                None => {
                    return Err(Error::new(ErrorImpl::MalformedOperator { token: text }, start))
                }
            },
            '&' => {
                if self.accept('&')? {
                    text.push('&');
                    TokenKind::BoolAnd
                } else {
                    TokenKind::And
                }
            }
            '|' => {
                if !self.accept('|')? {
                    return Err(Error::new(ErrorImpl::UnknownToken { token: text }, start));
                }
                text.push('|');
                TokenKind::BoolOr
            }
            '=' => {
                if self.accept('=')? {
                    text.push('=');
                    TokenKind::Equal
                } else {
                    TokenKind::Assign
                }
            }
            '\'' => return self.scan_character_literal(text, start).map(Some),
            '"' => return self.scan_string_literal(text, start).map(Some),
            c if is_digit(c) => return self.scan_number(text, start).map(Some),
            c if is_letter(c) => return self.scan_identifier(text, start).map(Some),
            _ => return Err(Error::new(ErrorImpl::UnknownToken { token: text }, start)),
        };

        Ok(Some(MK_TOKEN!(kind, text, start)))
    }

    fn scan_identifier(&mut self, mut text: String, start: Position) -> Result<Token, Error> {
        while let Some((c, before)) = self.peek_one()? {
            if is_letter(c) || is_digit(c) {
                text.push(c);
            } else {
                self.unread(c, before);
                break;
            }
        }

        let kind = lookup_keyword(&text).unwrap_or(TokenKind::Identifier);
        Ok(MK_TOKEN!(kind, text, start))
    }

    fn scan_number(&mut self, mut text: String, start: Position) -> Result<Token, Error> {
        while let Some((c, before)) = self.peek_one()? {
            if is_digit(c) {
                text.push(c);
            } else {
                self.unread(c, before);
                break;
            }
        }

        Ok(MK_TOKEN!(TokenKind::Number, text, start))
    }

    /// Reads one code point of a quoted literal. A backslash is kept in
    /// `text` and the code point after it comes back flagged as escaped,
    /// whatever it is.
    fn read_escaped(&mut self, text: &mut String) -> Result<Option<(char, bool)>, Error> {
        let Some(c) = self.read_char()? else {
            return Ok(None);
        };
        if c != '\\' {
            return Ok(Some((c, false)));
        }

        text.push(c);
        Ok(self.read_char()?.map(|c| (c, true)))
    }

    fn scan_character_literal(&mut self, mut text: String, start: Position) -> Result<Token, Error> {
        let premature = |position| {
            Error::new(
                ErrorImpl::PrematureEndOfInput {
                    context: String::from("character literal"),
                },
                position,
            )
        };

        let body_at = self.position;
        match self.read_escaped(&mut text)? {
            None => return Err(premature(self.position)),
            Some(('\'', false)) => return Err(Error::new(ErrorImpl::EmptyCharacterLiteral, body_at)),
            Some((c, _)) => text.push(c),
        }

        match self.peek_one()? {
            Some(('\'', _)) => text.push('\''),
            Some((found, before)) => {
                return Err(Error::new(
                    ErrorImpl::UnterminatedCharacterLiteral { found },
                    before,
                ))
            }
            None => return Err(premature(self.position)),
        }

        Ok(MK_TOKEN!(TokenKind::CharacterLiteral, text, start))
    }

    fn scan_string_literal(&mut self, mut text: String, start: Position) -> Result<Token, Error> {
        loop {
            match self.read_escaped(&mut text)? {
                None => return Err(Error::new(ErrorImpl::UnterminatedStringLiteral, self.position)),
                Some(('"', false)) => {
                    text.push('"');
                    break;
                }
                Some((c, _)) => text.push(c),
            }
        }

        Ok(MK_TOKEN!(TokenKind::StringLiteral, text, start))
    }

    /// Runs to the end of the line. The newline stays in the stream and
    /// the end of input also ends the comment.
    fn scan_line_comment(&mut self, mut text: String, start: Position) -> Result<Token, Error> {
        while let Some((c, before)) = self.peek_one()? {
            if is_next_line(c) {
                self.unread(c, before);
                break;
            }
            text.push(c);
        }

        Ok(MK_TOKEN!(TokenKind::LineComment, text, start))
    }
}

/// Yields every token, then the fault (if any) once, then `None`.
impl<S: CharSource> Iterator for Scanner<S> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            return Some(Ok(self.token.clone()));
        }

        match &self.error {
            Some(error) if !self.error_yielded => {
                self.error_yielded = true;
                Some(Err(error.clone()))
            }
            _ => None,
        }
    }
}

/// Scans all of `source` into a token list, stopping at the first fault.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Scanner::for_str(source).collect()
}
