//! Lexical analysis.
//!
//! The lexer pulls characters from any `char` iterator and hands out one
//! [`Token`] per call. Once the input is exhausted every further call yields
//! [`TokenKind::EndOfInput`].

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use itertools::Itertools;
use tracing::{debug, trace};

/// Longest lexeme kept in a token's text. Extra characters are still consumed
/// from the source but do not end up in [`Token::text`].
pub const MAX_LEXEME_LEN: usize = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Int,
    Identifier,
    Number,
    Assign,
    Plus,
    Minus,
    Mult,
    Div,
    Greater,
    /// Reserved, but no statement uses it.
    If,
    LBrace,
    RBrace,
    Semicolon,
    Unknown,
    EndOfInput,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Int => "Int",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::Assign => "Assign",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Mult => "Mult",
            TokenKind::Div => "Div",
            TokenKind::Greater => "Greater",
            TokenKind::If => "If",
            TokenKind::LBrace => "LBrace",
            TokenKind::RBrace => "RBrace",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Unknown => "Unknown",
            TokenKind::EndOfInput => "EndOfInput",
        }
    }

    fn from_keyword(word: &str) -> Self {
        match word {
            "int" => TokenKind::Int,
            "if" => TokenKind::If,
            _ => TokenKind::Identifier,
        }
    }

    fn from_punct(c: char) -> Self {
        match c {
            '=' => TokenKind::Assign,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Mult,
            '/' => TokenKind::Div,
            '>' => TokenKind::Greater,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ';' => TokenKind::Semicolon,
            _ => TokenKind::Unknown,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn eof() -> Self {
        Token::new(TokenKind::EndOfInput, "EOF")
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => f.write_str("end of input"),
            _ => write!(f, "`{}`", self.text),
        }
    }
}

/// Pull-based tokenizer over a character source.
pub struct Lexer<I: Iterator<Item = char>> {
    chars: Peekable<I>,
}

impl<'a> Lexer<Chars<'a>> {
    pub fn from_source(source: &'a str) -> Self {
        Lexer::new(source.chars())
    }
}

impl<I: Iterator<Item = char>> Lexer<I> {
    pub fn new(chars: I) -> Self {
        Lexer {
            chars: chars.peekable(),
        }
    }

    /// Produce the next token, advancing past the characters it was built from.
    pub fn next_token(&mut self) -> Token {
        while self.chars.next_if(|&c| is_space(c)).is_some() {}

        let Some(first) = self.chars.next() else {
            trace!("end of input");
            return Token::eof();
        };

        let token = if first.is_ascii_alphabetic() {
            let word = self.consume_while(first, |c| c.is_ascii_alphanumeric());
            Token::new(TokenKind::from_keyword(&word), word)
        } else if first.is_ascii_digit() {
            let digits = self.consume_while(first, |c| c.is_ascii_digit());
            Token::new(TokenKind::Number, digits)
        } else {
            Token::new(TokenKind::from_punct(first), first)
        };

        trace!(kind = %token.kind, text = %token.text, "lexed token");
        token
    }

    /// Greedily take characters matching `accept`, keeping at most
    /// [`MAX_LEXEME_LEN`] of them.
    fn consume_while(&mut self, first: char, accept: impl Fn(char) -> bool) -> String {
        let mut text = String::from(first);
        let mut len = 1;
        let mut dropped = 0usize;

        while let Some(c) = self.chars.next_if(|&c| accept(c)) {
            if len < MAX_LEXEME_LEN {
                text.push(c);
                len += 1;
            } else {
                dropped += 1;
            }
        }

        if dropped > 0 {
            debug!(kept = %text, dropped, "lexeme truncated");
        }
        text
    }

    /// Every remaining token, ending with the first `EndOfInput`.
    pub fn tokens(mut self) -> impl Iterator<Item = Token> {
        std::iter::from_fn(move || Some(self.next_token())).take_while_inclusive(|t| !t.is_eof())
    }
}

/// ASCII whitespace including vertical tab.
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

pub fn lex(source: &str) -> Vec<Token> {
    Lexer::from_source(source).tokens().collect()
}
