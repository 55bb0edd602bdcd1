//! Recognizes the one statement shape the language has:
//!
//! ```text
//! "int" Identifier "=" Number [ "+" Number ] ";"
//! ```
//!
//! The parser pulls tokens from its [`Lexer`] one at a time and never backs up.

use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

use crate::ast::{AstNode, NodeKind};
use crate::lexer::{Lexer, Token, TokenKind};

/// The input does not match the statement grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("Syntax error!")]
#[diagnostic(
    code(minic::syntax_error),
    help("expected {expected}, found {found}")
)]
pub struct SyntaxError {
    pub expected: &'static str,
    pub found: Token,
}

pub type ParseResult<T> = Result<T, SyntaxError>;

pub struct Parser<I: Iterator<Item = char>> {
    lexer: Lexer<I>,
}

impl<I: Iterator<Item = char>> Parser<I> {
    pub fn new(lexer: Lexer<I>) -> Self {
        Parser { lexer }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> ParseResult<Token> {
        let token = self.lexer.next_token();
        if token.kind == kind {
            Ok(token)
        } else {
            Err(fail(expected, token))
        }
    }

    /// Parse a single `int` declaration and return its `Assign` tree.
    pub fn parse_statement(&mut self) -> ParseResult<AstNode> {
        self.expect(TokenKind::Int, "`int`")?;
        let name = self.expect(TokenKind::Identifier, "an identifier")?;
        self.expect(TokenKind::Assign, "`=`")?;
        let first = self.expect(TokenKind::Number, "a number")?;

        let next = self.lexer.next_token();
        let value = match next.kind {
            TokenKind::Plus => {
                let second = self.expect(TokenKind::Number, "a number")?;
                self.expect(TokenKind::Semicolon, "`;`")?;
                AstNode::new(
                    NodeKind::Plus,
                    "+",
                    Some(AstNode::leaf(NodeKind::Number, first.text)),
                    Some(AstNode::leaf(NodeKind::Number, second.text)),
                )
            }
            TokenKind::Semicolon => AstNode::leaf(NodeKind::Number, first.text),
            _ => return Err(fail("`+` or `;`", next)),
        };

        Ok(AstNode::new(
            NodeKind::Assign,
            "=",
            Some(AstNode::leaf(NodeKind::Identifier, name.text)),
            Some(value),
        ))
    }

    /// Require that nothing but whitespace follows.
    pub fn finish(&mut self) -> ParseResult<()> {
        self.expect(TokenKind::EndOfInput, "end of input").map(drop)
    }
}

fn fail(expected: &'static str, found: Token) -> SyntaxError {
    debug!(expected, %found, "syntax error");
    SyntaxError { expected, found }
}

/// Parse a source holding exactly one statement.
pub fn parse(source: &str) -> ParseResult<AstNode> {
    let mut parser = Parser::new(Lexer::from_source(source));
    let ast = parser.parse_statement()?;
    parser.finish()?;
    Ok(ast)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assign(name: &str, value: AstNode) -> AstNode {
        AstNode::new(
            NodeKind::Assign,
            "=",
            Some(AstNode::leaf(NodeKind::Identifier, name)),
            Some(value),
        )
    }

    fn num(text: &str) -> AstNode {
        AstNode::leaf(NodeKind::Number, text)
    }

    #[test]
    fn test_addition() {
        let ast = parse("int x = 5 + 3;").unwrap();
        assert_eq!(
            ast,
            assign(
                "x",
                AstNode::new(NodeKind::Plus, "+", Some(num("5")), Some(num("3")))
            )
        );
    }

    #[test]
    fn test_plain_number() {
        assert_eq!(parse("int count = 42;").unwrap(), assign("count", num("42")));
    }

    #[test]
    fn test_layout_is_free() {
        assert_eq!(parse("int\n  y=7\t;\n").unwrap(), assign("y", num("7")));
    }

    #[test]
    fn test_missing_int() {
        let err = parse("x = 5;").unwrap_err();
        assert_eq!(err.expected, "`int`");
        assert_eq!(err.found, Token::new(TokenKind::Identifier, "x"));
        assert_eq!(err.to_string(), "Syntax error!");
    }

    #[test]
    fn test_subtraction_rejected() {
        let err = parse("int x = 5 - 3;").unwrap_err();
        assert_eq!(err.found.kind, TokenKind::Minus);
    }

    #[test]
    fn test_second_plus_rejected() {
        let err = parse("int x = 5 + 3 + 1;").unwrap_err();
        assert_eq!(err.expected, "`;`");
        assert_eq!(err.found.kind, TokenKind::Plus);
    }

    #[test]
    fn test_multiple_statements_rejected() {
        let err = parse("int x = 5; int y = 6;").unwrap_err();
        assert_eq!(err.expected, "end of input");
        assert_eq!(err.found.kind, TokenKind::Int);
    }

    #[test]
    fn test_parse_statement_stops_at_semicolon() {
        let mut parser = Parser::new(Lexer::from_source("int a = 1; int b = 2;"));
        assert_eq!(parser.parse_statement().unwrap(), assign("a", num("1")));
        assert_eq!(parser.parse_statement().unwrap(), assign("b", num("2")));
        assert!(parser.finish().is_ok());
    }

    #[test]
    fn test_truncated_input() {
        for source in ["", "int", "int x", "int x =", "int x = 5", "int x = 5 +", "int x = 5 + 3"] {
            let err = parse(source).unwrap_err();
            assert!(err.found.is_eof(), "{source:?} failed on {:?}", err.found);
        }
    }

    #[test]
    fn test_non_ascii_space_rejected() {
        let err = parse("int\u{a0}x = 5;").unwrap_err();
        assert_eq!(err.expected, "an identifier");
        assert_eq!(err.found, Token::new(TokenKind::Unknown, "\u{a0}"));
    }

    #[test]
    fn test_if_is_reserved() {
        let err = parse("int if = 1;").unwrap_err();
        assert_eq!(err.found.kind, TokenKind::If);
    }

    #[test]
    fn test_wrong_operands() {
        assert!(parse("int 5 = x;").is_err());
        assert!(parse("int x = y;").is_err());
        assert!(parse("int x = 5 + y;").is_err());
        assert!(parse("int x == 5;").is_err());
        assert!(parse("int x = 5 @").is_err());
    }

    #[test]
    fn test_help_names_expectation() {
        let err = parse("int x = 5 - 3;").unwrap_err();
        let help = err.help().map(|h| h.to_string());
        assert_eq!(help.as_deref(), Some("expected `+` or `;`, found `-`"));
    }
}
