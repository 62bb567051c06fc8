//! Parser module for dot-ora files
//!
//! This module turns the significant token stream into a raw parse tree. The parse tree is
//! a faithful, untyped picture of the source; [crate::dotora::ast] turns it into the mutable
//! parameter model.
//!
//! Parsing is best-effort. Top-level parameters are parsed one at a time, and a syntax error
//! only costs the parameter it occurs in: the error is recorded, tokens are skipped up to the
//! next plausible top-level entry, and parsing resumes.

pub mod grammar;
pub mod syntax;
#[cfg(test)]
mod tests;

pub use syntax::{SyntaxNode, SyntaxParameter};

use chumsky::{Parser, Stream};
use std::ops::Range;
use tracing::{debug, warn};

use crate::dotora::lexer::{lex, SyntaxToken, TokenKind};

/// Parse tree for a whole file plus the grammar noise met along the way
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseTree {
    pub nodes: Vec<SyntaxParameter>,
    /// Number of spans the lexer could not classify
    pub lexer_errors: usize,
    /// One human-readable message per syntax error
    pub parser_errors: Vec<String>,
}

impl ParseTree {
    pub fn has_errors(&self) -> bool {
        self.lexer_errors > 0 || !self.parser_errors.is_empty()
    }
}

/// Lex and parse a dot-ora source
pub fn parse_tree(source: &str) -> ParseTree {
    let lexed = lex(source);
    let mut tree = ParseTree {
        lexer_errors: lexed.errors,
        ..ParseTree::default()
    };

    let tokens = lexed.tokens;
    let parser = grammar::parameter().map_with_span(|node, span: Range<usize>| (node, span));
    let mut pos = 0;
    while pos < tokens.len() {
        // Spans are relative to `pos`; the stream only clones the tokens the parser pulls
        let rest = tokens.len() - pos;
        let stream = Stream::from_iter(
            rest..rest,
            tokens[pos..]
                .iter()
                .cloned()
                .enumerate()
                .map(|(i, token)| (token, i..i + 1)),
        );
        let attempt = parser.parse(stream);

        match attempt {
            Ok((node, span)) => {
                tree.nodes.push(node);
                // An empty match cannot happen, but never loop on one
                pos += span.end.max(1);
            }
            Err(errors) => {
                for error in &errors {
                    let message = describe_error(&tokens, pos, error);
                    warn!("{}", message);
                    tree.parser_errors.push(message);
                }
                pos = recovery_point(&tokens, pos);
            }
        }
    }

    debug!(
        parameters = tree.nodes.len(),
        lexer_errors = tree.lexer_errors,
        parser_errors = tree.parser_errors.len(),
        "parsed dot-ora source"
    );
    tree
}

fn describe_error(tokens: &[SyntaxToken], offset: usize, error: &grammar::ParserError) -> String {
    let index = offset + error.span().start;
    let line = tokens
        .get(index)
        .or_else(|| tokens.last())
        .map(|t| t.line)
        .unwrap_or(1);
    match error.found() {
        Some(found) => format!(
            "syntax error at line {}: unexpected '{}'",
            line, found.text
        ),
        None => format!("syntax error at line {}: unexpected end of input", line),
    }
}

/// Index of the next token that can start a top-level parameter after a failure at `failed`
///
/// A candidate is a word followed by `=` that is either outside any parentheses opened since
/// the failure or placed at the very start of a line.
fn recovery_point(tokens: &[SyntaxToken], failed: usize) -> usize {
    let mut depth: usize = 0;
    for i in failed..tokens.len() {
        if i > failed
            && tokens[i].is(TokenKind::Word)
            && tokens.get(i + 1).is_some_and(|t| t.is(TokenKind::Equals))
            && (depth == 0 || starts_line(&tokens[i]))
        {
            return i;
        }
        match tokens[i].kind {
            TokenKind::OpenParen => depth += 1,
            TokenKind::CloseParen => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    tokens.len()
}

/// Whether only trivia separates `token` from the start of its line
fn starts_line(token: &SyntaxToken) -> bool {
    let first_in_source = token.span.start == token.leading.len();
    first_in_source || token.leading.ends_with('\n')
}
