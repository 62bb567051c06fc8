//! Round-trip tests: parsing and rendering without edits reproduces the source exactly

use dotora::dotora::{DotOraDocument, ALL_ALIASES};
use proptest::prelude::*;
use rstest::rstest;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(path).unwrap()
}

#[rstest]
#[case("tnsnames.ora")]
#[case("sqlnet.ora")]
#[case("listener.ora")]
fn test_fixture_round_trips(#[case] name: &str) {
    let source = fixture(name);
    let doc = DotOraDocument::parse(source.as_str()).unwrap();
    assert!(doc.warnings().is_empty(), "{:?}", doc.warnings());
    assert!(!doc.changed());
    assert_eq!(doc.render(), source);
}

#[test]
fn test_edits_that_change_nothing_keep_the_bytes() {
    let source = fixture("tnsnames.ora");
    let mut doc = DotOraDocument::parse(source.as_str()).unwrap();
    assert!(!doc.set_param_value("ORCL", "PORT", "1521", None));
    assert!(!doc.delete_param("ORCL", "SID"));
    assert!(!doc.upsert_alias_attribute("ORCL", "DESCRIPTION/CONNECT_DATA/SERVER", "DEDICATED"));
    assert!(!doc.changed());
    assert_eq!(doc.render(), source);
}

#[test]
fn test_missing_final_newline_is_kept() {
    let source = fixture("sqlnet.ora");
    assert!(!source.ends_with('\n'));

    let mut doc = DotOraDocument::parse(source.as_str()).unwrap();
    assert!(doc.upsert_alias("SQLNET.ENCRYPTION_SERVER", "required"));
    let rendered = doc.render();
    assert!(rendered.ends_with("SQLNET.ENCRYPTION_SERVER = required"));
}

#[test]
fn test_unparseable_noise_is_kept_verbatim() {
    let source = "A = 1\n) stray (\nB = 2\n";
    let doc = DotOraDocument::parse(source).unwrap();
    assert!(!doc.warnings().is_empty());
    assert_eq!(doc.aliases(), vec!["A", "B"]);
    assert_eq!(doc.render(), source);
}

/// Parameter names, never containing `-`
fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_.]{0,8}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9][a-z0-9_./]{0,10}",
        "\"[a-z ]{0,10}\"",
    ]
}

/// Trivia allowed between tokens
fn gap_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(" ".to_string()),
        Just("\n  ".to_string()),
        Just("\t".to_string()),
        Just(" # note\n    ".to_string()),
    ]
}

fn parameter_strategy() -> impl Strategy<Value = String> {
    let leaf = (key_strategy(), gap_strategy(), gap_strategy(), value_strategy())
        .prop_map(|(k, a, b, v)| format!("{}{}={}{}", k, a, b, v));
    let list = (key_strategy(), prop::collection::vec(value_strategy(), 1..4))
        .prop_map(|(k, atoms)| format!("{} = ({})", k, atoms.join(", ")));

    prop_oneof![leaf, list].prop_recursive(3, 24, 3, |inner| {
        (
            key_strategy(),
            gap_strategy(),
            prop::collection::vec((gap_strategy(), inner, gap_strategy()), 1..4),
        )
            .prop_map(|(k, gap, groups)| {
                let body: String = groups
                    .into_iter()
                    .map(|(before, param, after)| format!("{}({}{})", before, param, after))
                    .collect();
                format!("{}{}={}", k, gap, body)
            })
    })
}

fn document_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(
            (
                prop_oneof![Just(""), Just("\n"), Just("# comment\n"), Just("  ")],
                parameter_strategy(),
            ),
            0..5,
        ),
        any::<bool>(),
    )
        .prop_map(|(params, trailing_newline)| {
            let mut source = params
                .into_iter()
                .map(|(prefix, param)| format!("{}{}", prefix, param))
                .collect::<Vec<_>>()
                .join("\n");
            if trailing_newline {
                source.push('\n');
            }
            source
        })
}

proptest! {
    #[test]
    fn test_any_document_round_trips(source in document_strategy()) {
        let doc = DotOraDocument::parse(source.as_str()).unwrap();
        prop_assert!(doc.warnings().is_empty(), "{:?} in {:?}", doc.warnings(), source);
        prop_assert_eq!(doc.render(), source);
    }

    #[test]
    fn test_appended_alias_survives_a_reparse(source in document_strategy()) {
        let mut doc = DotOraDocument::parse(source.as_str()).unwrap();
        let mut expected: Vec<String> = doc.aliases().iter().map(|a| a.to_string()).collect();
        expected.push("new-alias".to_string());

        prop_assert!(doc.upsert_alias("new-alias", "(x)"));
        let reparsed = DotOraDocument::parse(doc.render()).unwrap();
        prop_assert_eq!(reparsed.aliases(), expected);
        prop_assert!(reparsed.render().starts_with(source.as_str()));
    }

    #[test]
    fn test_removing_every_alias_leaves_only_trivia(source in document_strategy()) {
        let mut doc = DotOraDocument::parse(source.as_str()).unwrap();
        doc.remove_alias(ALL_ALIASES);
        let reparsed = DotOraDocument::parse(doc.render()).unwrap();
        prop_assert!(reparsed.aliases().is_empty());
    }
}
