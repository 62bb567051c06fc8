//! Token definitions for dot-ora files
//!
//! The tokens are defined using the logos derive macro. Every byte of the source ends up in
//! exactly one token, including whitespace and comments, so that the token stream can be
//! folded back into the original text.
use logos::Logos;
use std::fmt;

/// All raw tokens produced by the dot-ora lexer
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Token {
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("=")]
    Equals,
    #[token(",")]
    Comma,

    #[regex(r#""[^"\n]*""#)]
    #[regex(r"'[^'\n]*'")]
    Quoted,

    // Keys and bare values share one shape; the grammar tells them apart
    #[regex(r#"[^\s()=,#"']+"#)]
    Word,

    #[regex(r"[ \t\r\f]+")]
    Whitespace,
    #[token("\n")]
    Newline,
    #[regex(r"#[^\n]*")]
    Comment,
}

impl Token {
    /// Whitespace, newlines and comments carry no structure
    pub fn is_trivia(&self) -> bool {
        matches!(self, Token::Whitespace | Token::Newline | Token::Comment)
    }

    /// Punctuation that brackets or separates values
    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            Token::OpenParen | Token::CloseParen | Token::Equals | Token::Comma
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Token::OpenParen => "<open-paren>",
            Token::CloseParen => "<close-paren>",
            Token::Equals => "<equals>",
            Token::Comma => "<comma>",
            Token::Quoted => "<quoted>",
            Token::Word => "<word>",
            Token::Whitespace => "<whitespace>",
            Token::Newline => "<newline>",
            Token::Comment => "<comment>",
        };
        write!(f, "{}", name)
    }
}
