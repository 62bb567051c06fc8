//! A parsed dot-ora file and its alias-scoped edits
//!
//! Every edit names an alias and is applied to each top-level node carrying that name, or to
//! every top-level node when the alias is [ALL_ALIASES]. An edit failing on one alias is
//! recorded as a warning and the remaining aliases are still processed. There is no rollback:
//! aliases already edited keep their changes.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::dotora::ast::{split_path, DotOraError, Literal, ParameterNode, Result, Value};
use crate::dotora::parser::parse_tree;
use crate::dotora::serializer;

/// Wildcard alias addressing every top-level node
///
/// A real alias named `@all` cannot be targeted on its own.
pub const ALL_ALIASES: &str = "@all";

#[derive(Debug, Clone, Serialize)]
pub struct DotOraDocument {
    #[serde(skip)]
    source: String,
    params: Vec<ParameterNode>,
    changed: bool,
    warnings: Vec<String>,
}

impl DotOraDocument {
    /// Parse a document
    ///
    /// Grammar errors become warnings and leave a best-effort tree. An `IFILE` directive
    /// anywhere fails the whole document.
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let tree = parse_tree(&source);

        let mut warnings = Vec::new();
        if tree.lexer_errors > 0 {
            let warning = format!("{} unrecognised character(s) in input", tree.lexer_errors);
            warn!("{}", warning);
            warnings.push(warning);
        }
        warnings.extend(tree.parser_errors.iter().cloned());

        let params = tree
            .nodes
            .iter()
            .map(ParameterNode::build)
            .collect::<Result<Vec<_>>>()?;
        debug!(aliases = params.len(), "built document");

        Ok(Self {
            source,
            params,
            changed: false,
            warnings,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading document");
        Self::parse(fs::read_to_string(path)?)
    }

    /// The text the document was parsed from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn params(&self) -> &[ParameterNode] {
        &self.params
    }

    /// Whether any edit so far changed the document
    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Names of the live top-level nodes, in document order
    pub fn aliases(&self) -> Vec<&str> {
        self.params.iter().filter_map(ParameterNode::name).collect()
    }

    /// First top-level node named `alias`
    pub fn alias(&self, alias: &str) -> Option<&ParameterNode> {
        self.params.iter().find(|node| node.matches(alias))
    }

    /// Set every scalar parameter named `param` under `alias`, at any depth
    pub fn set_param_value(
        &mut self,
        alias: &str,
        param: &str,
        value: &str,
        expected_old: Option<&str>,
    ) -> bool {
        self.for_each_alias(alias, |node| Ok(node.set_value(param, value, expected_old)))
    }

    /// Remove the first scalar `param` at each level under `alias`
    pub fn delete_param(&mut self, alias: &str, param: &str) -> bool {
        self.for_each_alias(alias, |node| node.delete_param(param))
    }

    /// Remove the child at `path` under `alias`
    pub fn delete_param_path(&mut self, alias: &str, path: &str) -> bool {
        self.for_each_alias(alias, |node| node.delete_param_path(path))
    }

    /// Set the scalar at `path` under `alias`, creating the leaf if it is missing
    pub fn upsert_alias_attribute(&mut self, alias: &str, path: &str, value: &str) -> bool {
        self.for_each_alias(alias, |node| node.upsert_param_path(path, value))
    }

    /// Upsert using a path whose first segment is the alias
    ///
    /// A path naming only an alias sets the alias value itself.
    pub fn upsert_param_path(&mut self, full_path: &str, value: &str) -> bool {
        match split_path(full_path) {
            Ok(segments) => match segments.split_first() {
                Some((alias, [])) => self.upsert_alias(alias, value),
                Some((alias, rest)) => self.upsert_alias_attribute(alias, &rest.join("/"), value),
                None => {
                    self.warn(full_path, &DotOraError::EmptyPath);
                    false
                }
            },
            Err(err) => {
                self.warn(full_path, &err);
                false
            }
        }
    }

    /// Give `alias` the single value `value`, appending a new alias if none exists
    ///
    /// All matching aliases are updated. The wildcard never creates a node.
    pub fn upsert_alias(&mut self, alias: &str, value: &str) -> bool {
        let wildcard = alias == ALL_ALIASES;
        let mut found = false;
        let mut changed = false;

        for node in self.params.iter_mut().filter(|n| targets(n, alias)) {
            found = true;
            if node.values_string().trim() == value.trim() {
                continue;
            }
            let leading = node
                .values
                .first()
                .map(|v| v.leading().to_string())
                .unwrap_or_else(|| " ".to_string());
            node.values = vec![Value::Literal(Literal {
                leading,
                text: value.to_string(),
            })];
            node.mark_modified();
            changed = true;
        }

        if !found && !wildcard {
            debug!(alias, "appending alias");
            self.params.push(ParameterNode::new(alias, value));
            changed = true;
        }

        self.changed |= changed;
        changed
    }

    /// Blank every alias named `alias`; its source lines render as nothing
    pub fn remove_alias(&mut self, alias: &str) -> bool {
        let mut changed = false;
        for node in self.params.iter_mut().filter(|n| targets(n, alias)) {
            node.blank();
            changed = true;
        }
        self.changed |= changed;
        changed
    }

    /// Look up `path` under `alias`; every segment must exist
    ///
    /// With several matching aliases the first one that resolves wins.
    pub fn get_alias_attribute(&self, alias: &str, path: &str) -> Result<&ParameterNode> {
        let mut last_err = None;
        for node in self.params.iter().filter(|n| targets(n, alias)) {
            match node.get(path) {
                Ok(found) => return Ok(found),
                Err(err) => last_err = Some(err),
            }
        }
        Err(last_err.unwrap_or_else(|| DotOraError::AliasNotFound(alias.to_string())))
    }

    /// Look up a path whose first segment is the alias
    pub fn get_param_path(&self, full_path: &str) -> Result<&ParameterNode> {
        let segments = split_path(full_path)?;
        match segments.split_first() {
            Some((alias, [])) => self
                .alias(alias)
                .ok_or_else(|| DotOraError::AliasNotFound(alias.to_string())),
            Some((alias, rest)) => self.get_alias_attribute(alias, &rest.join("/")),
            None => Err(DotOraError::EmptyPath),
        }
    }

    /// Full text of the document in its current state
    pub fn render(&self) -> String {
        serializer::render(&self.source, &self.params)
    }

    fn for_each_alias<F>(&mut self, alias: &str, mut edit: F) -> bool
    where
        F: FnMut(&mut ParameterNode) -> Result<bool>,
    {
        let mut changed = false;
        let mut matched = false;

        for node in self.params.iter_mut().filter(|n| targets(n, alias)) {
            matched = true;
            let snapshot = node.clone();
            match edit(node) {
                Ok(true) => {
                    node.mark_modified();
                    changed = true;
                }
                Ok(false) => {}
                Err(err) => {
                    if *node != snapshot {
                        node.mark_modified();
                        changed = true;
                    }
                    let warning = format!("{}: {}", node.name().unwrap_or(alias), err);
                    warn!("{}", warning);
                    self.warnings.push(warning);
                }
            }
        }

        if !matched {
            debug!(alias, "no alias to edit");
        }
        self.changed |= changed;
        changed
    }

    fn warn(&mut self, subject: &str, err: &DotOraError) {
        let warning = format!("{}: {}", subject.trim(), err);
        warn!("{}", warning);
        self.warnings.push(warning);
    }
}

fn targets(node: &ParameterNode, alias: &str) -> bool {
    if alias == ALL_ALIASES {
        !node.is_blank()
    } else {
        node.matches(alias)
    }
}
