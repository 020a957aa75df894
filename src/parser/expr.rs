use crate::{
    ast::{
        ast::{Expr, Node},
        expressions::{
            BooleanExpr, CallExpr, FunctionExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr,
            PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{led_handler, nud_handler, BindingPower},
    parser::Parser,
    stmt::parse_block_stmt,
};

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// Recursion depth is capped at `MAX_NESTING_DEPTH`, and the stack is grown
/// on the heap when it runs low.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    stacker::maybe_grow(32 * 1024, 256 * 1024, || {
        parser.enter_nesting()?;
        let result = parse_nested_expr(parser, bp);
        parser.leave_nesting();
        result
    })
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = nud_handler(token_kind) else {
        return Err(Error::new(
            ErrorImpl::NoPrefixParseFn {
                kind: token_kind,
                literal: parser.current_token().literal.clone(),
            },
            parser.get_position(),
        ));
    };

    let mut left = nud_fn(parser)?;

    // While the next operator binds tighter than `bp`, fold it into the lhs.
    // Equal powers stop here, which makes operators left-associative.
    while bp < parser.peek_binding_power() {
        let Some(led_fn) = led_handler(parser.peek_token_kind()) else {
            break;
        };

        let operator_bp = parser.peek_binding_power();
        parser.advance();
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    Ok(Expr::Identifier(IdentifierExpr {
        value: token.literal.clone(),
        span: token.span.clone(),
        token,
    }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    let value = token.literal.parse::<i64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.literal.clone(),
            },
            parser.get_position(),
        )
    })?;

    Ok(Expr::Integer(IntegerExpr {
        value,
        span: token.span.clone(),
        token,
    }))
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    Ok(Expr::Boolean(BooleanExpr {
        value: token.kind == TokenKind::True,
        span: token.span.clone(),
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: parser.span_from(&operator_token.span.start),
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // if (<condition>) { ... } else { ... }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expr::If(Box::new(IfExpr {
        span: parser.span_from(&token.span.start),
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    })))
}

pub fn parse_function_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // fn(<parameters>) { ... }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expr::Function(Box::new(FunctionExpr {
        span: parser.span_from(&token.span.start),
        token,
        parameters,
        body,
    })))
}

/// Parses `a, b, c)` with the current token on the opening parenthesis.
fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<IdentifierExpr>, Error> {
    let mut parameters = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(parameters);
    }

    loop {
        let token = parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(IdentifierExpr {
            value: token.literal.clone(),
            span: token.span.clone(),
            token,
        });

        if parser.peek_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(parameters)
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        span: parser.span_from(&left.get_span().start),
        left: Box::new(left),
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let token = parser.current_token().clone();
    let arguments = parse_expr_list(parser, TokenKind::CloseParen)?;

    Ok(Expr::Call(Box::new(CallExpr {
        span: parser.span_from(&left.get_span().start),
        token,
        callee: Box::new(left),
        arguments,
    })))
}

/// Parses comma-separated expressions up to `end`, with the current token on
/// the opening delimiter. Leaves `end` as the current token.
fn parse_expr_list(parser: &mut Parser, end: TokenKind) -> Result<Vec<Expr>, Error> {
    let mut list = vec![];

    if parser.peek_token_kind() == end {
        parser.advance();
        return Ok(list);
    }

    parser.advance();
    list.push(parse_expr(parser, BindingPower::Default)?);

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        parser.advance();
        list.push(parse_expr(parser, BindingPower::Default)?);
    }

    parser.expect_peek(end)?;

    Ok(list)
}
