//! Treeviz formatter for parameter trees

use crate::dotora::ast::ParameterNode;
use crate::dotora::document::DotOraDocument;

/// Cut `text` to `limit` characters, marking the cut with `...`
fn shorten(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

pub fn to_treeviz_str(doc: &DotOraDocument) -> String {
    let live: Vec<&ParameterNode> = doc.params().iter().filter(|p| !p.is_blank()).collect();
    let mut result = String::new();
    append_nodes(&mut result, &live, "");
    result
}

fn append_nodes(result: &mut String, nodes: &[&ParameterNode], prefix: &str) {
    for (i, node) in nodes.iter().enumerate() {
        let is_last = i == nodes.len() - 1;
        append_node(result, node, prefix, is_last);
    }
}

fn append_node(result: &mut String, node: &ParameterNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        label(node),
        line_range(node)
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let children: Vec<&ParameterNode> = node.children().collect();
    append_nodes(result, &children, &new_prefix);
}

fn label(node: &ParameterNode) -> String {
    let name = node.name().unwrap_or_default();
    let atoms: Vec<&str> = node
        .values()
        .iter()
        .filter_map(|v| v.as_literal())
        .filter(|literal| !literal.is_punctuation())
        .map(|literal| literal.text.as_str())
        .collect();
    if atoms.is_empty() {
        name.to_string()
    } else {
        format!("{} = {}", name, shorten(&atoms.join(", "), 40))
    }
}

fn line_range(node: &ParameterNode) -> String {
    match (node.line_from(), node.line_to()) {
        (from, to) if from == to => format!("[{}]", from),
        (from, to) => format!("[{}-{}]", from, to),
    }
}
