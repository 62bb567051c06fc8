//! Structural edits on a parameter node
//!
//! Every edit reports whether the tree actually changed, so repeating an edit is a no-op.
//! Paths are relative to the node the edit is called on.

use super::error::{DotOraError, Result};
use super::node::{Literal, ParameterNode, Value};
use super::path::split_path;

impl ParameterNode {
    /// Replace the value of every scalar descendant named `param`
    ///
    /// With `expected_old`, only values currently equal to it are replaced. Every nested node
    /// is visited, so occurrences at any depth are updated.
    pub fn set_value(&mut self, param: &str, value: &str, expected_old: Option<&str>) -> bool {
        let mut changed = false;
        for child in self.values.iter_mut().filter_map(Value::as_node_mut) {
            if child.matches(param) {
                if let Some(literal) = child.scalar_literal_mut() {
                    let guard_holds = expected_old.map_or(true, |old| literal.text == old);
                    if guard_holds && literal.text != value {
                        literal.text = value.to_string();
                        changed = true;
                    }
                }
            }
            changed |= child.set_value(param, value, expected_old);
        }
        changed
    }

    /// Remove the first scalar child named `param` at this level and at every nested level
    ///
    /// Only the `(`, child, `)` window is removed. Deleting the last child of a group leaves
    /// that group empty (`B =`), which renders fine but no longer parses: a re-read of the
    /// output reports a syntax error for the enclosing alias.
    pub fn delete_param(&mut self, param: &str) -> Result<bool> {
        let mut changed = false;
        let found = self.values.iter().position(|v| {
            v.as_node()
                .is_some_and(|node| node.matches(param) && node.is_scalar())
        });
        if let Some(index) = found {
            self.remove_enclosed(index)?;
            changed = true;
        }

        for child in self.values.iter_mut().filter_map(Value::as_node_mut) {
            changed |= child.delete_param(param)?;
        }
        Ok(changed)
    }

    /// Remove the child addressed by `path`; a missing leaf is a no-op
    ///
    /// Like [ParameterNode::delete_param], this can leave the parent group empty.
    pub fn delete_param_path(&mut self, path: &str) -> Result<bool> {
        let segments = split_path(path)?;
        let (leaf, parents) = segments.split_last().ok_or(DotOraError::EmptyPath)?;
        let parent = self.resolve_mut(parents, path)?;

        let found = parent
            .values
            .iter()
            .position(|v| v.as_node().is_some_and(|node| node.matches(leaf)));
        match found {
            Some(index) => {
                parent.remove_enclosed(index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Set the scalar child addressed by `path`, creating the leaf if needed
    ///
    /// Only the leaf is ever created; every parent segment must already exist.
    pub fn upsert_param_path(&mut self, path: &str, value: &str) -> Result<bool> {
        let segments = split_path(path)?;
        let (leaf, parents) = segments.split_last().ok_or(DotOraError::EmptyPath)?;
        let parent = self.resolve_mut(parents, path)?;

        if let Some(child) = parent.child_mut(leaf) {
            let name = child.name().unwrap_or_default().to_string();
            let literal = child
                .scalar_literal_mut()
                .ok_or(DotOraError::NotScalar { name })?;
            if literal.text == value {
                return Ok(false);
            }
            literal.text = value.to_string();
            return Ok(true);
        }

        if parent.has_atoms() {
            return Err(DotOraError::NotAGroup {
                name: parent.name().unwrap_or_default().to_string(),
                child: leaf.to_string(),
            });
        }

        parent.values.push(Value::Literal(Literal::new("(")));
        parent
            .values
            .push(Value::Node(ParameterNode::new(*leaf, value)));
        parent.values.push(Value::Literal(Literal::new(")")));
        Ok(true)
    }

    /// Look up the descendant addressed by `path`; every segment must resolve
    pub fn get(&self, path: &str) -> Result<&ParameterNode> {
        let mut node = self;
        for segment in split_path(path)? {
            node = node
                .child(segment)
                .ok_or_else(|| child_not_found(segment, path))?;
        }
        Ok(node)
    }

    fn resolve_mut(&mut self, segments: &[&str], path: &str) -> Result<&mut ParameterNode> {
        let mut node = self;
        for segment in segments {
            node = node
                .child_mut(segment)
                .ok_or_else(|| child_not_found(segment, path))?;
        }
        Ok(node)
    }

    /// Remove the child at `index` together with the `(` before it and the `)` after it
    fn remove_enclosed(&mut self, index: usize) -> Result<()> {
        let is_literal = |i: usize, check: fn(&Literal) -> bool| {
            self.values
                .get(i)
                .and_then(Value::as_literal)
                .is_some_and(check)
        };
        let enclosed = index > 0
            && is_literal(index - 1, Literal::is_open_paren)
            && is_literal(index + 1, Literal::is_close_paren);

        if !enclosed {
            let name = self.values[index]
                .as_node()
                .and_then(ParameterNode::name)
                .unwrap_or_default()
                .to_string();
            return Err(DotOraError::MalformedBrackets { name });
        }

        let removed: Vec<Value> = self.values.drain(index - 1..=index + 1).collect();
        // Keep the spacing that separated the removed group from what preceded it
        let next = self.values.get_mut(index - 1);
        if let (Some(Value::Literal(open)), Some(next)) = (removed.first(), next) {
            let closes_parent = next.as_literal().is_some_and(Literal::is_close_paren);
            if !closes_parent && next.leading().is_empty() {
                next.set_leading(open.leading.clone());
            }
        }
        Ok(())
    }
}

fn child_not_found(segment: &str, path: &str) -> DotOraError {
    DotOraError::ChildNotFound {
        segment: segment.to_string(),
        path: path.trim().to_string(),
    }
}
