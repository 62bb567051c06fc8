//! Line-preserving serializer
//!
//! Rebuilds the text of a file by walking the original lines and the top-level nodes (sorted
//! by first line) side by side:
//!
//! - Lines before the next node are copied verbatim.
//! - When the walk reaches a node, the node and any other nodes sharing its lines form a
//!   cluster. An untouched cluster is copied verbatim. A modified cluster is rebuilt from its
//!   original lines with each modified node's bytes replaced by its rendering, so whatever
//!   precedes or follows the node on those lines survives. A cluster whose nodes were all
//!   removed produces no lines at all, and neither does a rebuilt cluster left with only
//!   whitespace.
//! - The walk then resumes after the cluster's last line, however many lines the new
//!   rendering takes.
//!
//! Nodes created in memory have no source lines and are appended at the end, one per line.

use std::ops::Range;

use crate::dotora::ast::{LineNo, ParameterNode};

/// Byte offsets of every line in a source, terminators included
#[derive(Debug, Clone)]
pub struct SourceLines<'a> {
    source: &'a str,
    starts: Vec<usize>,
}

impl<'a> SourceLines<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut starts = Vec::new();
        let mut offset = 0;
        for line in source.split_inclusive('\n') {
            starts.push(offset);
            offset += line.len();
        }
        Self { source, starts }
    }

    pub fn count(&self) -> usize {
        self.starts.len()
    }

    /// Byte offset where 1-based `line` starts
    pub fn start_of(&self, line: usize) -> usize {
        self.starts
            .get(line.saturating_sub(1))
            .copied()
            .unwrap_or(self.source.len())
    }

    /// Byte offset just past 1-based `line`, its terminator included
    pub fn end_of(&self, line: usize) -> usize {
        self.starts.get(line).copied().unwrap_or(self.source.len())
    }

    /// Text of 1-based `line`, terminator included
    pub fn line(&self, line: usize) -> &'a str {
        &self.source[self.start_of(line)..self.end_of(line)]
    }
}

/// A top-level node that came from the source
struct Placed<'a> {
    node: &'a ParameterNode,
    span: Range<usize>,
    from: usize,
    to: usize,
}

/// Render the full text of a document
pub fn render(source: &str, params: &[ParameterNode]) -> String {
    let lines = SourceLines::new(source);

    let mut placed: Vec<Placed> = params
        .iter()
        .filter_map(|node| match (node.line_from(), node.line_to(), node.span()) {
            (LineNo::Source(from), LineNo::Source(to), Some(span)) => Some(Placed {
                node,
                span: span.clone(),
                from,
                to,
            }),
            _ => None,
        })
        .collect();
    placed.sort_by_key(|p| p.from);

    let mut out = String::with_capacity(source.len());
    let mut line = 1;
    let mut next = 0;

    while line <= lines.count() {
        let pending = match placed.get(next) {
            Some(p) if p.from <= line => p,
            _ => {
                out.push_str(lines.line(line));
                line += 1;
                continue;
            }
        };

        let mut to = pending.to;
        let mut end = next + 1;
        while let Some(p) = placed.get(end) {
            if p.from > to {
                break;
            }
            to = to.max(p.to);
            end += 1;
        }

        let cluster = &placed[next..end];
        // Removed entries take their whole lines with them, trailing comments included
        let removed = cluster.iter().all(|p| p.node.is_blank());
        if !removed {
            if cluster.iter().any(|p| p.node.is_modified()) {
                out.push_str(&splice(source, &lines, line, to, cluster));
            } else {
                out.push_str(&source[lines.start_of(line)..lines.end_of(to)]);
            }
        }

        line = to + 1;
        next = end;
    }

    let appended: Vec<&ParameterNode> = params
        .iter()
        .filter(|node| node.span().is_none() && !node.is_blank())
        .collect();
    if !appended.is_empty() && !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    for node in appended {
        out.push_str(&node.render_body());
        out.push('\n');
    }

    out
}

/// Rebuild lines `from..=to` with every modified node replaced by its rendering
fn splice(source: &str, lines: &SourceLines, from: usize, to: usize, cluster: &[Placed]) -> String {
    let mut text = String::new();
    let mut cursor = lines.start_of(from);

    for p in cluster {
        text.push_str(&source[cursor..p.span.start]);
        if p.node.is_modified() {
            text.push_str(&p.node.render_body());
        } else {
            text.push_str(&source[p.span.clone()]);
        }
        cursor = p.span.end;
    }
    text.push_str(&source[cursor..lines.end_of(to)]);

    if text.trim().is_empty() {
        String::new()
    } else {
        text
    }
}
