//! Implementation of the dot-ora lexer
//!
//! This module provides convenience functions for tokenizing dot-ora text.
//! The actual tokenization is handled entirely by logos.

use crate::dotora::lexer::tokens::Token;
use logos::Logos;

/// Tokenize a string and collect the recognised tokens, dropping anything logos rejects
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Tokenize a string keeping every span, including the ones logos could not match
///
/// Unrecognised input is reported as `Err(())` with its span so callers can stay lossless.
pub fn tokenize_with_spans(source: &str) -> Vec<(Result<Token, ()>, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push((result, lexer.span()));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokenization() {
        let tokens = tokenize("SQLNET.EXPIRE_TIME = 10");
        assert_eq!(
            tokens,
            vec![
                Token::Word,
                Token::Whitespace,
                Token::Equals,
                Token::Whitespace,
                Token::Word
            ]
        );
    }

    #[test]
    fn test_spans_cover_the_whole_source() {
        let source = "A = (B = 1) # done\n";
        let tokens = tokenize_with_spans(source);
        let mut cursor = 0;
        for (_, span) in &tokens {
            assert_eq!(span.start, cursor);
            cursor = span.end;
        }
        assert_eq!(cursor, source.len());
    }

    #[test]
    fn test_errors_keep_their_span() {
        let source = "X = \"oops";
        let tokens = tokenize_with_spans(source);
        let (result, span) = tokens
            .iter()
            .find(|(result, _)| result.is_err())
            .expect("an unterminated quote is not a token");
        assert!(result.is_err());
        assert_eq!(span.start, 4);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
        assert!(tokenize_with_spans("").is_empty());
    }
}
