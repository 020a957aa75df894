//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into tokens for parsing. It handles:
//!
//! - Recognition of keywords, identifiers, integer literals and operators
//! - One byte of lookahead for `==` and `!=`
//! - Token position tracking for error reporting
//! - Illegal bytes, which become `Illegal` tokens instead of errors

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
