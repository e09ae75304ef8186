use serde::{Deserialize, Serialize};
use std::fmt;

use super::source_range::SourceRange;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Plus,       // +
    Minus,      // -
    Star,       // *
    Slash,      // /
    LParen,     // (
    RParen,     // )
    Number,     // [0-9]+
    Equal,      // ==
    Whitespace, // recognized, never emitted
    NoMatch,    // classifier sentinel, never emitted
}

impl TokenKind {
    /// Whether a token of this kind ends up in the token sequence.
    pub fn is_emitted(&self) -> bool {
        !matches!(self, TokenKind::Whitespace | TokenKind::NoMatch)
    }

    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash | TokenKind::Equal
        )
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Number => "<number>",
            TokenKind::Equal => "==",
            TokenKind::Whitespace => "<whitespace>",
            TokenKind::NoMatch => "<no match>",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A classified lexical unit. `text` is only populated for [`TokenKind::Number`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub loc: SourceRange,
}

impl Token {
    pub fn new(kind: TokenKind, loc: SourceRange) -> Token {
        Token {
            kind,
            text: String::new(),
            loc,
        }
    }

    pub fn number(text: &str, loc: SourceRange) -> Token {
        Token {
            kind: TokenKind::Number,
            text: text.to_owned(),
            loc,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text<'a>(&'a self) -> &'a str {
        &self.text
    }

    pub fn loc(&self) -> SourceRange {
        self.loc
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Number => write!(f, "{}", self.text),
            other => write!(f, "{}", other),
        }
    }
}
