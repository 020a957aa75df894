use std::sync::Arc;

use tracing::trace;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind, SINGLE_BYTE_LOOKUP};

/// Byte cursor over the source text.
///
/// Tokens are produced on demand by [`Lexer::next_token`]. Once the source is
/// exhausted every further call yields an `EOF` token.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    /// Offset of `ch` in `source`
    position: usize,
    /// Offset of the byte after `ch`
    read_position: usize,
    /// Byte under the cursor, 0 past the end
    ch: u8,
    file: Arc<str>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name: Arc<str> = if let Some(file) = file {
            Arc::from(file)
        } else {
            Arc::from("shell")
        };

        let mut lexer = Lexer {
            source,
            position: 0,
            read_position: 0,
            ch: 0,
            file: file_name,
        };
        lexer.read_char();
        lexer
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.position;

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, String::from("\0"), MK_SPAN!(start, start, self.file));
        }

        if let Some(kind) = SINGLE_BYTE_LOOKUP.get(&self.ch).copied() {
            self.read_char();
            return self.token_from(kind, start);
        }

        match self.ch {
            b'=' => return self.one_or_two(TokenKind::Assign, TokenKind::Equals, start),
            b'!' => return self.one_or_two(TokenKind::Bang, TokenKind::NotEquals, start),
            _ => {}
        }

        if is_letter(self.ch) {
            self.read_while(is_letter);
            let kind = lookup_identifier(&self.source[start..self.position]);
            return self.token_from(kind, start);
        }

        if is_digit(self.ch) {
            self.read_while(is_digit);
            return self.token_from(TokenKind::Int, start);
        }

        // Skip the whole character so the literal stays valid UTF-8
        let width = self.source[start..].chars().next().map_or(1, char::len_utf8);
        for _ in 0..width {
            self.read_char();
        }

        let token = self.token_from(TokenKind::Illegal, start);
        trace!(literal = %token.literal, offset = start, "illegal token");
        token
    }

    /// Emits `double` if the next byte is `=`, otherwise `single`.
    fn one_or_two(&mut self, single: TokenKind, double: TokenKind, start: usize) -> Token {
        if self.peek_char() == b'=' {
            self.read_char();
            self.read_char();
            self.token_from(double, start)
        } else {
            self.read_char();
            self.token_from(single, start)
        }
    }

    fn token_from(&self, kind: TokenKind, start: usize) -> Token {
        MK_TOKEN!(
            kind,
            String::from(&self.source[start..self.position]),
            MK_SPAN!(start, self.position, self.file)
        )
    }

    fn read_while(&mut self, predicate: fn(u8) -> bool) {
        while !self.at_eof() && predicate(self.ch) {
            self.read_char();
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn peek_char(&self) -> u8 {
        self.source.as_bytes().get(self.read_position).copied().unwrap_or(0)
    }

    fn read_char(&mut self) {
        match self.source.as_bytes().get(self.read_position) {
            Some(byte) => {
                self.ch = *byte;
                self.position = self.read_position;
                self.read_position += 1;
            }
            None => {
                self.ch = 0;
                self.position = self.source.len();
            }
        }
    }

    pub fn at_eof(&self) -> bool {
        self.position >= self.source.len()
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Lexes the whole source, ending with a single `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
