//! Raw parse tree produced by the grammar
//!
//! Each node exposes a token and an ordered list of children. A parameter's token is its
//! key; its children are the value sequence exactly as the grammar matched it, punctuation
//! included. Leaves are single tokens.

use crate::dotora::lexer::SyntaxToken;

/// `key = children...`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyntaxParameter {
    pub key: SyntaxToken,
    pub equals: SyntaxToken,
    pub children: Vec<SyntaxNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SyntaxNode {
    Parameter(SyntaxParameter),
    /// A literal: punctuation, bare word or quoted string
    Token(SyntaxToken),
}

impl SyntaxParameter {
    pub fn token(&self) -> &SyntaxToken {
        &self.key
    }

    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    /// Leftmost token of the subtree
    pub fn first_leaf(&self) -> &SyntaxToken {
        &self.key
    }

    /// Rightmost token of the subtree
    pub fn last_leaf(&self) -> &SyntaxToken {
        self.children
            .last()
            .map(|c| c.last_leaf())
            .unwrap_or(&self.equals)
    }

    /// Leading trivia, key, `=` and children, exactly as they appeared in the source
    pub fn to_source_string(&self) -> String {
        let mut result = self.key.to_source_string();
        result.push_str(&self.equals.to_source_string());
        for child in &self.children {
            result.push_str(&child.to_source_string());
        }
        result
    }
}

impl SyntaxNode {
    /// The key token for parameters, the token itself for leaves
    pub fn token(&self) -> &SyntaxToken {
        match self {
            SyntaxNode::Parameter(parameter) => parameter.token(),
            SyntaxNode::Token(token) => token,
        }
    }

    pub fn children(&self) -> &[SyntaxNode] {
        match self {
            SyntaxNode::Parameter(parameter) => parameter.children(),
            SyntaxNode::Token(_) => &[],
        }
    }

    pub fn is_parameter(&self) -> bool {
        matches!(self, SyntaxNode::Parameter(_))
    }

    pub fn last_leaf(&self) -> &SyntaxToken {
        match self {
            SyntaxNode::Parameter(parameter) => parameter.last_leaf(),
            SyntaxNode::Token(token) => token,
        }
    }

    pub fn to_source_string(&self) -> String {
        match self {
            SyntaxNode::Parameter(parameter) => parameter.to_source_string(),
            SyntaxNode::Token(token) => token.to_source_string(),
        }
    }
}
