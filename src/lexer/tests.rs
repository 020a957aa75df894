//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators, including the two-byte `==` and `!=`
//! - Illegal bytes
//! - Token spans
//! - Behaviour at end of input

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

fn kinds_and_literals(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source.to_string(), Some("test.mk".to_string()))
        .into_iter()
        .map(|token| (token.kind, token.literal))
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "fn let true false if else return".to_string();
    let tokens = tokenize(source, Some("test.mk".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Fn);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 8);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo letx _underscore CamelCase iff".to_string();
    let tokens = tokenize(source, None);

    for (token, expected) in tokens
        .iter()
        .zip(["foo", "letx", "_underscore", "CamelCase", "iff"])
    {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.literal, expected);
    }
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_identifiers_stop_at_digits() {
    // Digits are not part of identifiers
    assert_eq!(
        kinds_and_literals("x1"),
        vec![
            (TokenKind::Identifier, "x".to_string()),
            (TokenKind::Int, "1".to_string()),
            (TokenKind::EOF, "\0".to_string()),
        ]
    );
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("42 0 007 9223372036854775808".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].literal, "42");
    assert_eq!(tokens[1].literal, "0");
    assert_eq!(tokens[2].literal, "007");
    // Range checking is left to the parser
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[3].literal, "9223372036854775808");
}

#[test]
fn test_negative_number_is_two_tokens() {
    assert_eq!(
        kinds_and_literals("-5"),
        vec![
            (TokenKind::Minus, "-".to_string()),
            (TokenKind::Int, "5".to_string()),
            (TokenKind::EOF, "\0".to_string()),
        ]
    );
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("= + - ! * / < > == != , ; ( ) { }".to_string(), None);
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Bang,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_two_byte_operators_need_adjacent_bytes() {
    let tokens = tokenize("= = ! = === !==".to_string(), None);
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Assign,
            TokenKind::Assign,
            TokenKind::Bang,
            TokenKind::Assign,
            TokenKind::Equals,
            TokenKind::Assign,
            TokenKind::NotEquals,
            TokenKind::Assign,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_program() {
    let source = r#"
        let five = 5;
        let ten = 10;

        let add = fn(x,y) {
            x + y
        };

        let result = add(five, ten);

        !-/*5;

        5 < 10 > 5;

        if (5 < 10) {
            return true;
        } else {
            return false;
        }

        10 == 10;

        10 != 9;
    "#;

    use TokenKind::*;
    let expected = [
        // let five = 5;
        (Let, "let"), (Identifier, "five"), (Assign, "="), (Int, "5"), (Semicolon, ";"),
        // let ten = 10;
        (Let, "let"), (Identifier, "ten"), (Assign, "="), (Int, "10"), (Semicolon, ";"),
        // let add = fn(x,y) {
        (Let, "let"), (Identifier, "add"), (Assign, "="), (Fn, "fn"), (OpenParen, "("),
        (Identifier, "x"), (Comma, ","), (Identifier, "y"), (CloseParen, ")"), (OpenCurly, "{"),
        //   x + y
        (Identifier, "x"), (Plus, "+"), (Identifier, "y"),
        // };
        (CloseCurly, "}"), (Semicolon, ";"),
        // let result = add(five, ten);
        (Let, "let"), (Identifier, "result"), (Assign, "="), (Identifier, "add"), (OpenParen, "("),
        (Identifier, "five"), (Comma, ","), (Identifier, "ten"), (CloseParen, ")"), (Semicolon, ";"),
        // !-/*5;
        (Bang, "!"), (Minus, "-"), (Slash, "/"), (Asterisk, "*"), (Int, "5"), (Semicolon, ";"),
        // 5 < 10 > 5;
        (Int, "5"), (Less, "<"), (Int, "10"), (Greater, ">"), (Int, "5"), (Semicolon, ";"),
        // if (5 < 10) {
        (If, "if"), (OpenParen, "("), (Int, "5"), (Less, "<"), (Int, "10"), (CloseParen, ")"),
        (OpenCurly, "{"),
        //   return true;
        (Return, "return"), (True, "true"), (Semicolon, ";"),
        // } else {
        (CloseCurly, "}"), (Else, "else"), (OpenCurly, "{"),
        //   return false;
        (Return, "return"), (False, "false"), (Semicolon, ";"),
        // }
        (CloseCurly, "}"),
        // 10 == 10;
        (Int, "10"), (Equals, "=="), (Int, "10"), (Semicolon, ";"),
        // 10 != 9;
        (Int, "10"), (NotEquals, "!="), (Int, "9"), (Semicolon, ";"),
        (EOF, "\0"),
    ];

    let mut lexer = Lexer::new(source.to_string(), None);

    for (kind, literal) in expected {
        let token = lexer.next_token();
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, literal);
    }
}

#[test]
fn test_eof_is_repeated() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.span.start.0, 1);
    }
    assert!(lexer.at_eof());
}

#[test]
fn test_empty_source() {
    let mut lexer = Lexer::new(String::new(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_illegal_bytes() {
    assert_eq!(
        kinds_and_literals("a @ b"),
        vec![
            (TokenKind::Identifier, "a".to_string()),
            (TokenKind::Illegal, "@".to_string()),
            (TokenKind::Identifier, "b".to_string()),
            (TokenKind::EOF, "\0".to_string()),
        ]
    );
}

#[test]
fn test_illegal_non_ascii_character() {
    assert_eq!(
        kinds_and_literals("π+1"),
        vec![
            (TokenKind::Illegal, "π".to_string()),
            (TokenKind::Plus, "+".to_string()),
            (TokenKind::Int, "1".to_string()),
            (TokenKind::EOF, "\0".to_string()),
        ]
    );
}

#[test]
fn test_embedded_nul_is_illegal() {
    assert_eq!(
        kinds_and_literals("a\0b"),
        vec![
            (TokenKind::Identifier, "a".to_string()),
            (TokenKind::Illegal, "\0".to_string()),
            (TokenKind::Identifier, "b".to_string()),
            (TokenKind::EOF, "\0".to_string()),
        ]
    );
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let x == 10;".to_string(), Some("main.mk".to_string()));
    let spans: Vec<(u32, u32)> = tokens
        .iter()
        .map(|token| (token.span.start.0, token.span.end.0))
        .collect();

    assert_eq!(spans, vec![(0, 3), (4, 5), (6, 8), (9, 11), (11, 12), (12, 12)]);
    assert_eq!(&*tokens[0].span.start.1, "main.mk");
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x".to_string(), None);
    assert_eq!(&*tokens[0].span.start.1, "shell");
}
