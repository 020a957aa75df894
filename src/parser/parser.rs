//! Parser state and entry points.
//!
//! The parser pulls tokens from a [`Lexer`] one at a time and keeps exactly
//! two of them: the current token and one token of lookahead. Expression
//! parsing follows the Pratt approach with the NUD/LED rules and binding
//! powers defined in `lookups`.
//!
//! Malformed input never aborts a parse. Each statement that fails is
//! dropped, its error is recorded, and parsing resumes at the next token.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::{
    lookups::{binding_power, BindingPower},
    stmt::parse_stmt,
};

/// Deepest expression nesting accepted before the parser gives up on a
/// statement. Each level costs several stack frames.
pub const MAX_NESTING_DEPTH: usize = 64;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, pulled on demand
    lexer: Lexer,
    /// Token under the cursor
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Diagnostics recorded by the most recent parse, in order
    errors: Vec<Error>,
    /// Number of `parse_expr` calls currently on the stack
    nesting_depth: usize,
}

impl Parser {
    /// Creates a new Parser and primes the current and peek tokens.
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Parser {
            lexer,
            current_token,
            peek_token,
            errors: vec![],
            nesting_depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    /// Binding power of the lookahead token, `Default` if it is not an operator.
    pub fn peek_binding_power(&self) -> BindingPower {
        binding_power(self.peek_token.kind)
    }

    /// Shifts the peek token into the current slot and pulls a new peek token.
    /// Returns the previous current token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = std::mem::replace(&mut self.peek_token, next);
        std::mem::replace(&mut self.current_token, peek)
    }

    /// Advances only if the peek token is of `expected_kind`.
    ///
    /// # Returns
    ///
    /// The new current token, or an `UnexpectedToken` error pointing at the
    /// peek token. On error the cursor does not move.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek_token.kind != expected_kind {
            return Err(self.unexpected_token(expected_kind, &self.peek_token));
        }

        self.advance();
        Ok(self.current_token.clone())
    }

    /// Builds the error for finding `token` where `expected_kind` was required.
    pub fn unexpected_token(&self, expected_kind: TokenKind, token: &Token) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                found: token.kind,
                literal: token.literal.clone(),
            },
            token.span.start.clone(),
        )
    }

    /// Consumes a `;` if it is next.
    pub fn skip_optional_semicolon(&mut self) {
        if self.peek_token.kind == TokenKind::Semicolon {
            self.advance();
        }
    }

    /// Span from `start` to the end of the current token.
    pub fn span_from(&self, start: &Position) -> Span {
        Span {
            start: start.clone(),
            end: self.current_token.span.end.clone(),
        }
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start.clone()
    }

    /// Enters one more level of expression nesting, failing once the depth
    /// passes [`MAX_NESTING_DEPTH`]. Pair every `Ok` with [`Parser::leave_nesting`].
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.nesting_depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.nesting_depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        debug_assert!(self.nesting_depth > 0, "leave_nesting without enter_nesting");
        self.nesting_depth = self.nesting_depth.saturating_sub(1);
    }

    pub fn record_error(&mut self, error: Error) {
        debug!(
            name = error.get_error_name(),
            offset = error.get_position().0,
            "{}",
            error
        );
        self.errors.push(error);
    }

    /// Messages of the diagnostics recorded by the most recent parse.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// Parses statements until end of input.
    ///
    /// Always returns a program. Statements that fail to parse are left out
    /// and their errors are available from [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        self.errors.clear();
        self.nesting_depth = 0;

        let start = Position(0, Arc::clone(&self.current_token.span.start.1));
        let mut body = vec![];

        while self.current_token_kind() != TokenKind::EOF {
            match parse_stmt(self) {
                Ok(stmt) => body.push(stmt),
                Err(error) => self.record_error(error),
            }

            self.advance();
        }

        trace!(
            statements = body.len(),
            errors = self.errors.len(),
            "parsed program"
        );

        Program {
            body,
            span: self.span_from(&start),
        }
    }
}

/// Parses everything the lexer produces.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, holding the diagnostics of this parse
/// - The parsed Program, which may be incomplete if there were diagnostics
pub fn parse(lexer: Lexer) -> (Parser, Program) {
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    (parser, program)
}
