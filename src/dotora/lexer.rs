//! Lexer module for dot-ora files
//!
//! Lexing happens in two passes:
//!
//! - The logos lexer splits the source into raw tokens, trivia included
//!   (see [tokens](tokens) and [lexer_impl](lexer_impl)).
//! - Trivia folding attaches whitespace, newlines and comments to the next significant token
//!   and stamps each significant token with its 1-based line number
//!   (see [syntax_token](syntax_token)).
//!
//! Concatenating every token's `leading` and `text`, followed by [Lexed::trailing], yields the
//! source unchanged.

pub mod lexer_impl;
pub mod syntax_token;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use syntax_token::{SyntaxToken, TokenKind};
pub use tokens::Token;

use tracing::debug;

/// Output of the lexing passes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Lexed {
    pub tokens: Vec<SyntaxToken>,
    /// Trivia after the last significant token
    pub trailing: String,
    /// Number of spans logos could not classify
    pub errors: usize,
}

impl Lexed {
    /// Rebuild the source text from the token stream
    pub fn to_source_string(&self) -> String {
        let mut result: String = self.tokens.iter().map(|t| t.to_source_string()).collect();
        result.push_str(&self.trailing);
        result
    }
}

/// Tokenize `source` and fold trivia into significant tokens
pub fn lex(source: &str) -> Lexed {
    let mut lexed = Lexed::default();
    let mut pending = String::new();
    let mut line = 1;

    for (result, span) in tokenize_with_spans(source) {
        let slice = &source[span.clone()];
        let kind = match result {
            Ok(token) => TokenKind::from_token(token),
            Err(()) => {
                lexed.errors += 1;
                Some(TokenKind::Unknown)
            }
        };

        match kind {
            Some(kind) => lexed.tokens.push(SyntaxToken {
                kind,
                text: slice.to_string(),
                leading: std::mem::take(&mut pending),
                line,
                span,
            }),
            None => pending.push_str(slice),
        }

        line += slice.matches('\n').count();
    }

    lexed.trailing = pending;
    debug!(
        tokens = lexed.tokens.len(),
        errors = lexed.errors,
        "lexed dot-ora source"
    );
    lexed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivia_is_folded_into_next_token() {
        let lexed = lex("# header\nA = 1\n");
        assert_eq!(lexed.tokens.len(), 3);
        assert_eq!(lexed.tokens[0].leading, "# header\n");
        assert_eq!(lexed.tokens[0].text, "A");
        assert_eq!(lexed.tokens[1].leading, " ");
        assert_eq!(lexed.tokens[1].kind, TokenKind::Equals);
        assert_eq!(lexed.trailing, "\n");
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let lexed = lex("A =\n  (B = 1)\n\nC = 2");
        let lines: Vec<usize> = lexed.tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 1, 2, 2, 2, 2, 2, 4, 4, 4]);
    }

    #[test]
    fn test_lexing_is_lossless() {
        let source = "ORCL =\n  (DESCRIPTION = # inline\n    (ADDRESS = (HOST = h)))\n\n";
        assert_eq!(lex(source).to_source_string(), source);
    }

    #[test]
    fn test_unknown_input_is_counted_and_kept() {
        let source = "X = \"open\n";
        let lexed = lex(source);
        assert!(lexed.errors >= 1);
        assert!(lexed.tokens.iter().any(|t| t.kind == TokenKind::Unknown));
        assert_eq!(lexed.to_source_string(), source);
    }
}
