//! Fluent assertions over documents and parameter nodes

use super::testing_matchers::TextMatch;
use crate::dotora::ast::{LineNo, ParameterNode};
use crate::dotora::document::DotOraDocument;

pub fn assert_doc(doc: &DotOraDocument) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

pub struct DocumentAssertion<'a> {
    doc: &'a DotOraDocument,
}

impl<'a> DocumentAssertion<'a> {
    pub fn alias_count(self, expected: usize) -> Self {
        let aliases = self.doc.aliases();
        assert_eq!(
            aliases.len(),
            expected,
            "document: Expected {} aliases, found {}: {:?}",
            expected,
            aliases.len(),
            aliases
        );
        self
    }

    pub fn aliases(self, expected: &[&str]) -> Self {
        assert_eq!(self.doc.aliases(), expected, "document: alias names differ");
        self
    }

    pub fn changed(self, expected: bool) -> Self {
        assert_eq!(
            self.doc.changed(),
            expected,
            "document: Expected changed={}",
            expected
        );
        self
    }

    pub fn warning_count(self, expected: usize) -> Self {
        let warnings = self.doc.warnings();
        assert_eq!(
            warnings.len(),
            expected,
            "document: Expected {} warnings, found {}: {:?}",
            expected,
            warnings.len(),
            warnings
        );
        self
    }

    pub fn warning_contains(self, substring: &str) -> Self {
        let warnings = self.doc.warnings();
        assert!(
            warnings.iter().any(|w| w.contains(substring)),
            "document: Expected a warning containing '{}', got {:?}",
            substring,
            warnings
        );
        self
    }

    pub fn renders(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.doc.render(), "document");
        self
    }

    pub fn renders_containing(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.doc.render(), "document");
        self
    }

    pub fn no_alias(self, name: &str) -> Self {
        assert!(
            self.doc.alias(name).is_none(),
            "document: Expected no alias '{}'",
            name
        );
        self
    }

    pub fn alias<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(ParameterAssertion<'a>),
    {
        let node = self.doc.alias(name).unwrap_or_else(|| {
            panic!(
                "document: Alias '{}' not found, aliases are {:?}",
                name,
                self.doc.aliases()
            )
        });
        assertion(ParameterAssertion {
            node,
            context: name.to_string(),
        });
        self
    }
}

pub struct ParameterAssertion<'a> {
    node: &'a ParameterNode,
    context: String,
}

impl<'a> ParameterAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string())
            .assert(self.node.name().unwrap_or_default(), &self.context);
        self
    }

    pub fn value(self, expected: &str) -> Self {
        let actual = self.scalar();
        TextMatch::Exact(expected.to_string()).assert(actual, &self.context);
        self
    }

    pub fn value_starts_with(self, prefix: &str) -> Self {
        let actual = self.scalar();
        TextMatch::StartsWith(prefix.to_string()).assert(actual, &self.context);
        self
    }

    pub fn is_group(self) -> Self {
        assert!(
            !self.node.is_scalar(),
            "{}: Expected a group, found scalar '{}'",
            self.context,
            self.node.values_string().trim()
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let names: Vec<&str> = self.node.children().filter_map(ParameterNode::name).collect();
        assert_eq!(
            names.len(),
            expected,
            "{}: Expected {} children, found {}: {:?}",
            self.context,
            expected,
            names.len(),
            names
        );
        self
    }

    pub fn lines(self, from: usize, to: usize) -> Self {
        assert_eq!(
            (self.node.line_from(), self.node.line_to()),
            (LineNo::Source(from), LineNo::Source(to)),
            "{}: line range differs",
            self.context
        );
        self
    }

    pub fn appended(self) -> Self {
        assert_eq!(
            self.node.line_from(),
            LineNo::Appended,
            "{}: Expected an appended node",
            self.context
        );
        self
    }

    /// Compare the node's `name = values` text, ignoring the trivia before the name
    pub fn renders(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.node.render_body(), &self.context);
        self
    }

    pub fn no_child(self, name: &str) -> Self {
        assert!(
            self.node.child(name).is_none(),
            "{}: Expected no child '{}'",
            self.context,
            name
        );
        self
    }

    pub fn child<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(ParameterAssertion<'a>),
    {
        let node = self.node.child(name).unwrap_or_else(|| {
            let names: Vec<&str> = self.node.children().filter_map(ParameterNode::name).collect();
            panic!(
                "{}: Child '{}' not found, children are {:?}",
                self.context, name, names
            )
        });
        assertion(ParameterAssertion {
            node,
            context: format!("{}/{}", self.context, name),
        });
        self
    }

    fn scalar(&self) -> &'a str {
        self.node.value().unwrap_or_else(|| {
            panic!(
                "{}: Expected a scalar, found '{}'",
                self.context,
                self.node.values_string().trim()
            )
        })
    }
}
