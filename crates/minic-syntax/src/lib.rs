//! Front end of the minic pipeline: tokens, syntax tree and parser.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{AstNode, NodeKind};
pub use lexer::{Lexer, MAX_LEXEME_LEN, Token, TokenKind, lex};
pub use parser::{ParseResult, Parser, SyntaxError, parse};
