use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("type", TokenKind::Type);
        map.insert("func", TokenKind::Func);
        map.insert("package", TokenKind::Package);
        map.insert("struct", TokenKind::Struct);
        map.insert("enum", TokenKind::Enum);
        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map
    };
}

/// Returns the reserved kind for an exact keyword spelling.
pub fn lookup_keyword(text: &str) -> Option<TokenKind> {
    RESERVED_LOOKUP.get(text).copied()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum TokenKind {
    #[default]
    Invalid,
    Identifier,
    Number,
    CharacterLiteral,
    StringLiteral,

    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Comma,

    Init,   // :=
    Assign, // =
    Scope,  // ::
    Equal,  // ==

    Add,
    Sub,
    Mul,
    Div,

    And,     // &
    BoolAnd, // &&
    BoolOr,  // ||

    Less,
    Greater,

    LineComment,

    // Reserved
    Func,
    Package,
    Type,
    Struct,
    Enum,
    Return,
    If,
    Else,
    For,
    Break,
    Continue,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Func
                | TokenKind::Package
                | TokenKind::Type
                | TokenKind::Struct
                | TokenKind::Enum
                | TokenKind::Return
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::For
                | TokenKind::Break
                | TokenKind::Continue
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.position, self.kind, self.text)
    }
}

impl Token {
    pub fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }
}
