//! Parameter nodes: the mutable model of a dot-ora file
//!
//! A [ParameterNode] is a `NAME = values...` entry. Its values interleave literal tokens
//! (parentheses, commas, words, quoted strings) with nested parameters, in source order.
//! Keeping the punctuation in the same sequence as the children is what lets a node render
//! back to the exact text it was parsed from.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

use super::error::{DotOraError, Result};
use crate::dotora::lexer::SyntaxToken;
use crate::dotora::parser::{SyntaxNode, SyntaxParameter};

/// Directive requiring file inclusion, which this engine does not implement
pub const IFILE: &str = "IFILE";

/// Where a node sits in the original source
///
/// `Appended` marks nodes created in memory. It orders after every source line and never
/// matches one, so such nodes are always written after the existing content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineNo {
    Source(usize),
    Appended,
}

impl LineNo {
    pub fn source(&self) -> Option<usize> {
        match self {
            LineNo::Source(line) => Some(*line),
            LineNo::Appended => None,
        }
    }
}

impl fmt::Display for LineNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineNo::Source(line) => write!(f, "{}", line),
            LineNo::Appended => write!(f, "+"),
        }
    }
}

/// A raw token kept verbatim, with the trivia that preceded it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Literal {
    #[serde(skip)]
    pub leading: String,
    pub text: String,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            leading: String::new(),
            text: text.into(),
        }
    }

    pub fn from_token(token: &SyntaxToken) -> Self {
        Self {
            leading: token.leading.clone(),
            text: token.text.clone(),
        }
    }

    pub fn is_open_paren(&self) -> bool {
        self.text == "("
    }

    pub fn is_close_paren(&self) -> bool {
        self.text == ")"
    }

    pub fn is_punctuation(&self) -> bool {
        matches!(self.text.as_str(), "(" | ")" | ",")
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.leading, self.text)
    }
}

/// One element of a node's value sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    Literal(Literal),
    Node(ParameterNode),
}

impl Value {
    pub fn as_node(&self) -> Option<&ParameterNode> {
        match self {
            Value::Node(node) => Some(node),
            Value::Literal(_) => None,
        }
    }

    pub fn as_node_mut(&mut self) -> Option<&mut ParameterNode> {
        match self {
            Value::Node(node) => Some(node),
            Value::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Value::Literal(literal) => Some(literal),
            Value::Node(_) => None,
        }
    }

    /// Trivia in front of this value
    pub fn leading(&self) -> &str {
        match self {
            Value::Literal(literal) => &literal.leading,
            Value::Node(node) => &node.leading,
        }
    }

    pub(crate) fn set_leading(&mut self, leading: String) {
        match self {
            Value::Literal(literal) => literal.leading = leading,
            Value::Node(node) => node.leading = leading,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Literal(literal) => write!(f, "{}", literal),
            Value::Node(node) => write!(f, "{}", node),
        }
    }
}

/// A named parameter and its ordered values
///
/// A node whose name has been cleared is blank: it renders as nothing and no longer matches
/// any lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterNode {
    pub(crate) name: Option<String>,
    /// Trivia before the name
    #[serde(skip)]
    pub(crate) leading: String,
    /// The `=` sign with its own leading trivia
    #[serde(skip)]
    pub(crate) equals: String,
    pub(crate) values: Vec<Value>,
    pub(crate) line_from: LineNo,
    pub(crate) line_to: LineNo,
    /// Byte range from the first byte of the name to the last byte of the last value
    #[serde(skip)]
    pub(crate) span: Option<Range<usize>>,
    #[serde(skip)]
    pub(crate) modified: bool,
}

impl ParameterNode {
    /// Fabricate a scalar `name=value` node that does not come from any source line
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            leading: String::new(),
            equals: "=".to_string(),
            values: vec![Value::Literal(Literal::new(value))],
            line_from: LineNo::Appended,
            line_to: LineNo::Appended,
            span: None,
            modified: true,
        }
    }

    /// Build a node, recursively, from a parsed parameter
    ///
    /// Fails on `IFILE`, at any depth: file inclusion is not supported and a document that
    /// uses it cannot be edited safely.
    pub fn build(parameter: &SyntaxParameter) -> Result<Self> {
        let key = parameter.first_leaf();
        if key.text.eq_ignore_ascii_case(IFILE) {
            return Err(DotOraError::UnsupportedDirective {
                directive: key.text.clone(),
                line: key.line,
            });
        }

        let values = parameter
            .children()
            .iter()
            .map(|child| match child {
                SyntaxNode::Parameter(nested) => ParameterNode::build(nested).map(Value::Node),
                SyntaxNode::Token(token) => Ok(Value::Literal(Literal::from_token(token))),
            })
            .collect::<Result<Vec<_>>>()?;

        let last = parameter.last_leaf();
        Ok(Self {
            name: Some(key.text.clone()),
            leading: key.leading.clone(),
            equals: parameter.equals.to_source_string(),
            values,
            line_from: LineNo::Source(key.line),
            line_to: LineNo::Source(last.line),
            span: Some(key.span.start..last.span.end),
            modified: false,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn line_from(&self) -> LineNo {
        self.line_from
    }

    pub fn line_to(&self) -> LineNo {
        self.line_to
    }

    pub fn span(&self) -> Option<&Range<usize>> {
        self.span.as_ref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn is_blank(&self) -> bool {
        self.name.as_deref().map_or(true, str::is_empty)
    }

    /// Case-insensitive name comparison; blank nodes match nothing
    pub fn matches(&self, name: &str) -> bool {
        !self.is_blank()
            && self
                .name
                .as_deref()
                .is_some_and(|own| own.eq_ignore_ascii_case(name))
    }

    /// Exactly one value, and that value is a literal
    pub fn is_scalar(&self) -> bool {
        matches!(self.values.as_slice(), [Value::Literal(_)])
    }

    /// The text of a scalar node's value
    pub fn value(&self) -> Option<&str> {
        match self.values.as_slice() {
            [Value::Literal(literal)] => Some(literal.text.as_str()),
            _ => None,
        }
    }

    pub(crate) fn scalar_literal_mut(&mut self) -> Option<&mut Literal> {
        match self.values.as_mut_slice() {
            [Value::Literal(literal)] => Some(literal),
            _ => None,
        }
    }

    /// Whether any value is a bare word or quoted string rather than punctuation
    pub fn has_atoms(&self) -> bool {
        self.values
            .iter()
            .filter_map(Value::as_literal)
            .any(|literal| !literal.is_punctuation())
    }

    /// Nested parameters, in order
    pub fn children(&self) -> impl Iterator<Item = &ParameterNode> {
        self.values.iter().filter_map(Value::as_node)
    }

    /// First direct child with the given name
    pub fn child(&self, name: &str) -> Option<&ParameterNode> {
        self.children().find(|child| child.matches(name))
    }

    pub(crate) fn child_mut(&mut self, name: &str) -> Option<&mut ParameterNode> {
        self.values
            .iter_mut()
            .filter_map(Value::as_node_mut)
            .find(|child| child.matches(name))
    }

    pub(crate) fn mark_modified(&mut self) {
        self.modified = true;
    }

    /// Clear name and values; the node stays in place so its source lines stay accounted for
    pub(crate) fn blank(&mut self) {
        self.name = None;
        self.values.clear();
        self.modified = true;
    }

    /// Rendered values only, trivia included
    pub fn values_string(&self) -> String {
        self.values.iter().map(|v| v.to_string()).collect()
    }

    /// `name`, `=` and values, without the trivia that precedes the name
    pub fn render_body(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => {
                format!("{}{}{}", name, self.equals, self.values_string())
            }
            _ => String::new(),
        }
    }
}

impl fmt::Display for ParameterNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            return Ok(());
        }
        write!(f, "{}{}", self.leading, self.render_body())
    }
}
