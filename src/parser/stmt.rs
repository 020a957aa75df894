use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{lookups::stmt_handler, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = stmt_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Default)?;

    parser.skip_optional_semicolon();

    Ok(Stmt::Expression(ExpressionStmt {
        span: parser.span_from(&token.span.start),
        token,
        expression,
    }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = IdentifierExpr {
        value: name_token.literal.clone(),
        span: name_token.span.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;

    parser.skip_optional_semicolon();

    Ok(Stmt::Let(LetStmt {
        span: parser.span_from(&token.span.start),
        token,
        name,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;

    parser.skip_optional_semicolon();

    Ok(Stmt::Return(ReturnStmt {
        span: parser.span_from(&token.span.start),
        token,
        value,
    }))
}

/// Parses `{ ... }` with the current token on the opening brace. Leaves the
/// closing brace as the current token.
///
/// A statement that fails inside the block is recorded and skipped like at
/// the top level. Running out of input before `}` is an error, returned once
/// for the outermost unterminated block.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let token = parser.advance();

    let mut body = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if parser.current_token_kind() == TokenKind::EOF {
            return Err(parser.unexpected_token(TokenKind::CloseCurly, parser.current_token()));
        }

        match parse_stmt(parser) {
            Ok(stmt) => body.push(stmt),
            // Input ran out inside this block too, report it once
            Err(error) if parser.current_token_kind() == TokenKind::EOF => return Err(error),
            Err(error) => parser.record_error(error),
        }

        parser.advance();
    }

    Ok(BlockStmt {
        span: parser.span_from(&token.span.start),
        token,
        body,
    })
}
