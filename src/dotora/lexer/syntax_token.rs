//! Significant tokens with attached trivia
//!
//! The grammar only cares about punctuation, words and quoted strings. Whitespace, newlines
//! and comments are folded into the `leading` text of the token that follows them, which keeps
//! the token stream lossless while letting the parser ignore layout entirely.

use std::fmt;
use std::ops::Range;

use crate::dotora::lexer::tokens::Token;

/// Kind of a significant token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    OpenParen,
    CloseParen,
    Equals,
    Comma,
    Word,
    Quoted,
    /// Input the lexer could not classify
    Unknown,
}

impl TokenKind {
    /// Convert a raw logos token; trivia has no significant kind
    pub fn from_token(token: Token) -> Option<Self> {
        match token {
            Token::OpenParen => Some(TokenKind::OpenParen),
            Token::CloseParen => Some(TokenKind::CloseParen),
            Token::Equals => Some(TokenKind::Equals),
            Token::Comma => Some(TokenKind::Comma),
            Token::Word => Some(TokenKind::Word),
            Token::Quoted => Some(TokenKind::Quoted),
            Token::Whitespace | Token::Newline | Token::Comment => None,
        }
    }

    /// Words and quoted strings can stand as values
    pub fn is_atom(&self) -> bool {
        matches!(self, TokenKind::Word | TokenKind::Quoted)
    }
}

/// A significant token, its leading trivia and where it came from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyntaxToken {
    pub kind: TokenKind,
    pub text: String,
    /// Whitespace, newlines and comments between the previous token and this one
    pub leading: String,
    /// 1-based source line of the first byte of `text`
    pub line: usize,
    /// Byte range of `text` (trivia excluded)
    pub span: Range<usize>,
}

impl SyntaxToken {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Leading trivia followed by the token text
    pub fn to_source_string(&self) -> String {
        format!("{}{}", self.leading, self.text)
    }
}

impl fmt::Display for SyntaxToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({}) @{}", self.kind, self.text, self.line)
    }
}
