use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

// The lookups below match every TokenKind without a wildcard, so a new kind
// does not compile until its parse rules are decided here.

pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equals,
        TokenKind::Less | TokenKind::Greater => BindingPower::LessGreater,
        TokenKind::Plus | TokenKind::Minus => BindingPower::Sum,
        TokenKind::Asterisk | TokenKind::Slash => BindingPower::Product,
        TokenKind::OpenParen => BindingPower::Call,

        TokenKind::Illegal
        | TokenKind::EOF
        | TokenKind::Identifier
        | TokenKind::Int
        | TokenKind::Assign
        | TokenKind::Bang
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::CloseParen
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Fn
        | TokenKind::Let
        | TokenKind::True
        | TokenKind::False
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::Return => BindingPower::Default,
    }
}

/// Prefix (null denotation) rule for a token that starts an expression.
pub fn nud_handler(kind: TokenKind) -> Option<NUDHandler> {
    let handler: NUDHandler = match kind {
        TokenKind::Identifier => parse_identifier_expr,
        TokenKind::Int => parse_integer_expr,
        TokenKind::True | TokenKind::False => parse_boolean_expr,
        TokenKind::Minus | TokenKind::Bang => parse_prefix_expr,
        TokenKind::OpenParen => parse_grouping_expr,
        TokenKind::If => parse_if_expr,
        TokenKind::Fn => parse_function_expr,

        TokenKind::Illegal
        | TokenKind::EOF
        | TokenKind::Assign
        | TokenKind::Plus
        | TokenKind::Asterisk
        | TokenKind::Slash
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::CloseParen
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Let
        | TokenKind::Else
        | TokenKind::Return => return None,
    };

    Some(handler)
}

/// Infix (left denotation) rule for a token that continues an expression.
pub fn led_handler(kind: TokenKind) -> Option<LEDHandler> {
    let handler: LEDHandler = match kind {
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Asterisk
        | TokenKind::Slash
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Equals
        | TokenKind::NotEquals => parse_infix_expr,
        TokenKind::OpenParen => parse_call_expr,

        TokenKind::Illegal
        | TokenKind::EOF
        | TokenKind::Identifier
        | TokenKind::Int
        | TokenKind::Assign
        | TokenKind::Bang
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::CloseParen
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Fn
        | TokenKind::Let
        | TokenKind::True
        | TokenKind::False
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::Return => return None,
    };

    Some(handler)
}

/// Statement rule for a token that starts a statement. Everything else is
/// parsed as an expression statement.
pub fn stmt_handler(kind: TokenKind) -> Option<StmtHandler> {
    let handler: StmtHandler = match kind {
        TokenKind::Let => parse_let_stmt,
        TokenKind::Return => parse_return_stmt,
        _ => return None,
    };

    Some(handler)
}
