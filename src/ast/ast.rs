use std::fmt::{Debug, Display};

use crate::Span;

use super::{
    expressions::{
        BooleanExpr, CallExpr, FunctionExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr,
        PrefixExpr,
    },
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

/// Node Trait
///
/// Shared behaviour of every AST node. `Display` renders the node back to
/// deterministic source-like text, with infix and prefix expressions fully
/// parenthesized.
pub trait Node: Debug + Display {
    /// Returns the literal of the token that introduced the node.
    fn token_literal(&self) -> &str;
    /// Returns the span of the node.
    fn get_span(&self) -> &Span;
}

/// Statement
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Node for Stmt {
    fn token_literal(&self) -> &str {
        match self {
            Stmt::Let(stmt) => stmt.token_literal(),
            Stmt::Return(stmt) => stmt.token_literal(),
            Stmt::Expression(stmt) => stmt.token_literal(),
        }
    }

    fn get_span(&self) -> &Span {
        match self {
            Stmt::Let(stmt) => stmt.get_span(),
            Stmt::Return(stmt) => stmt.get_span(),
            Stmt::Expression(stmt) => stmt.get_span(),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Let(stmt) => write!(f, "{}", stmt),
            Stmt::Return(stmt) => write!(f, "{}", stmt),
            Stmt::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Integer(IntegerExpr),
    Boolean(BooleanExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(Box<IfExpr>),
    Function(Box<FunctionExpr>),
    Call(Box<CallExpr>),
}

impl Expr {
    fn as_node(&self) -> &dyn Node {
        match self {
            Expr::Identifier(expr) => expr,
            Expr::Integer(expr) => expr,
            Expr::Boolean(expr) => expr,
            Expr::Prefix(expr) => expr,
            Expr::Infix(expr) => expr,
            Expr::If(expr) => expr.as_ref(),
            Expr::Function(expr) => expr.as_ref(),
            Expr::Call(expr) => expr.as_ref(),
        }
    }
}

impl Node for Expr {
    fn token_literal(&self) -> &str {
        self.as_node().token_literal()
    }

    fn get_span(&self) -> &Span {
        self.as_node().get_span()
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_node())
    }
}

/// Root of every parse result.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.body.first().map_or("", |stmt| stmt.token_literal())
    }

    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.body {
            write!(f, "{}", stmt)?;
        }

        Ok(())
    }
}
