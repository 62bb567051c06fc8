//! Parser combinators for the dot-ora grammar
//!
//! Grammar:
//!
//!     parameter := WORD "=" value
//!     value     := group+ | list | atoms
//!     group     := "(" parameter ")"
//!     list      := "(" atoms ")"
//!     atoms     := atom ("," atom)*
//!     atom      := WORD | QUOTED
//!
//! Values are kept flat: a group contributes its parentheses and the nested parameter as
//! three siblings, so the model can reproduce the punctuation exactly where it was.

use chumsky::prelude::*;

use super::syntax::{SyntaxNode, SyntaxParameter};
use crate::dotora::lexer::{SyntaxToken, TokenKind};

/// Type alias for parser error
pub(crate) type ParserError = Simple<SyntaxToken>;

/// Helper: match a single token of the given kind
pub(crate) fn token(
    kind: TokenKind,
) -> impl Parser<SyntaxToken, SyntaxToken, Error = ParserError> + Clone {
    filter::<SyntaxToken, _, ParserError>(move |t: &SyntaxToken| t.kind == kind)
}

fn leaf(kind: TokenKind) -> impl Parser<SyntaxToken, SyntaxNode, Error = ParserError> + Clone {
    token(kind).map(SyntaxNode::Token)
}

/// Comma separated words or quoted strings
pub(crate) fn atoms() -> impl Parser<SyntaxToken, Vec<SyntaxNode>, Error = ParserError> + Clone
{
    let atom = filter::<SyntaxToken, _, ParserError>(|t: &SyntaxToken| t.kind.is_atom())
        .map(SyntaxNode::Token);

    atom.clone()
        .then(leaf(TokenKind::Comma).then(atom).repeated())
        .map(|(first, rest)| {
            let mut nodes = vec![first];
            for (comma, atom) in rest {
                nodes.push(comma);
                nodes.push(atom);
            }
            nodes
        })
}

/// A single `KEY = value` parameter, nested groups included
pub(crate) fn parameter(
) -> impl Parser<SyntaxToken, SyntaxParameter, Error = ParserError> + Clone {
    recursive(|parameter| {
        let group = leaf(TokenKind::OpenParen)
            .then(parameter.map(SyntaxNode::Parameter))
            .then(leaf(TokenKind::CloseParen))
            .map(|((open, inner), close)| vec![open, inner, close]);

        let groups = group
            .repeated()
            .at_least(1)
            .map(|groups: Vec<Vec<SyntaxNode>>| groups.into_iter().flatten().collect::<Vec<_>>());

        let list = leaf(TokenKind::OpenParen)
            .then(atoms())
            .then(leaf(TokenKind::CloseParen))
            .map(|((open, mut items), close)| {
                let mut nodes = Vec::with_capacity(items.len() + 2);
                nodes.push(open);
                nodes.append(&mut items);
                nodes.push(close);
                nodes
            });

        let value = choice((groups, list, atoms()));

        token(TokenKind::Word)
            .then(token(TokenKind::Equals))
            .then(value)
            .map(|((key, equals), children)| SyntaxParameter {
                key,
                equals,
                children,
            })
    })
}
