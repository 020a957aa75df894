use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("let", TokenKind::Let);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map
    };

    /// Tokens that are fully decided by a single byte, with no lookahead.
    pub static ref SINGLE_BYTE_LOOKUP: HashMap<u8, TokenKind> = {
        let mut map = HashMap::new();
        map.insert(b'+', TokenKind::Plus);
        map.insert(b',', TokenKind::Comma);
        map.insert(b';', TokenKind::Semicolon);
        map.insert(b'(', TokenKind::OpenParen);
        map.insert(b')', TokenKind::CloseParen);
        map.insert(b'{', TokenKind::OpenCurly);
        map.insert(b'}', TokenKind::CloseCurly);
        map.insert(b'-', TokenKind::Minus);
        map.insert(b'*', TokenKind::Asterisk);
        map.insert(b'/', TokenKind::Slash);
        map.insert(b'<', TokenKind::Less);
        map.insert(b'>', TokenKind::Greater);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EOF,

    Identifier,
    Int,

    Assign,    // =
    Plus,
    Minus,
    Bang,      // !
    Asterisk,
    Slash,
    Less,
    Greater,
    Equals,    // ==
    NotEquals, // !=

    Comma,
    Semicolon,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    // Reserved
    Fn,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Classifies an identifier-shaped literal as a keyword or a plain identifier.
pub fn lookup_identifier(literal: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(literal)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?})", self.kind, self.literal)
    }
}
