use super::*;

#[test]
fn test_parses_every_top_level_parameter() {
    let source = "# comment\nA = 1\nB =\n  (X = (Y = 2))\n\nC = (p, q)\n";
    let tree = parse_tree(source);

    assert!(!tree.has_errors(), "unexpected errors: {:?}", tree.parser_errors);
    let keys: Vec<&str> = tree.nodes.iter().map(|n| n.token().text.as_str()).collect();
    assert_eq!(keys, vec!["A", "B", "C"]);
}

#[test]
fn test_top_level_nodes_cover_their_source() {
    let source = "A = 1\nORCL =\n  (DESCRIPTION =\n    (SID = x))\n";
    let tree = parse_tree(source);

    let orcl = &tree.nodes[1];
    assert_eq!(orcl.first_leaf().line, 2);
    assert_eq!(orcl.last_leaf().line, 4);
    assert_eq!(
        orcl.to_source_string(),
        "\nORCL =\n  (DESCRIPTION =\n    (SID = x))"
    );
}

#[test]
fn test_recovers_after_a_broken_entry() {
    let source = "A = 1\nBROKEN = (X = \nC = 3\n";
    let tree = parse_tree(source);

    assert!(!tree.parser_errors.is_empty());
    let keys: Vec<&str> = tree.nodes.iter().map(|n| n.token().text.as_str()).collect();
    assert_eq!(keys, vec!["A", "C"]);
}

#[test]
fn test_stray_tokens_are_reported_with_their_line() {
    let tree = parse_tree("A = 1\n) )\nB = 2\n");

    assert_eq!(tree.nodes.len(), 2);
    assert!(tree.parser_errors[0].contains("line 2"), "{:?}", tree.parser_errors);
}

#[test]
fn test_lexer_errors_are_counted() {
    let tree = parse_tree("A = 1\nB = \"unterminated\nC = 3\n");

    assert!(tree.lexer_errors >= 1);
    assert!(tree.has_errors());
    assert!(tree.nodes.iter().any(|n| n.token().text == "C"));
}

#[test]
fn test_empty_and_comment_only_sources() {
    assert!(parse_tree("").nodes.is_empty());

    let tree = parse_tree("# nothing here\n\n   \n");
    assert!(tree.nodes.is_empty());
    assert!(!tree.has_errors());
}

#[test]
fn test_broken_first_line_does_not_promote_nested_keys() {
    let tree = parse_tree("A = (B = (C = 1)\nD = 2\n");

    assert!(!tree.parser_errors.is_empty());
    let keys: Vec<&str> = tree.nodes.iter().map(|n| n.token().text.as_str()).collect();
    assert_eq!(keys, vec!["D"]);
}

#[test]
fn test_comment_swallowing_a_bracket_on_the_first_line() {
    let tree = parse_tree("A = (PASSWORD = ab#c)\nB = 1\n");

    let keys: Vec<&str> = tree.nodes.iter().map(|n| n.token().text.as_str()).collect();
    assert_eq!(keys, vec!["B"]);
}

#[test]
fn test_thousands_of_aliases_parse_in_linear_time() {
    let alias = |i: usize| {
        format!(
            "DB{i} =\n  (DESCRIPTION =\n    (ADDRESS = (PROTOCOL = TCP)(HOST = host{i})(PORT = 1521))\n    (CONNECT_DATA = (SERVICE_NAME = db{i})))\n"
        )
    };
    let source: String = (0..2000).map(alias).collect();

    let started = std::time::Instant::now();
    let tree = parse_tree(&source);
    let elapsed = started.elapsed();

    assert!(!tree.has_errors());
    assert_eq!(tree.nodes.len(), 2000);
    assert_eq!(tree.nodes[1999].token().text, "DB1999");
    assert!(
        elapsed < std::time::Duration::from_secs(30),
        "parsing 2000 aliases took {:?}",
        elapsed
    );
}
