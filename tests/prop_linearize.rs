/// Property-based tests for leaf-path comparison.
///
/// Strategies generate trees made of mappings, sequences, strings and
/// booleans, then check that a tree compares equal to itself and to any
/// reordering of its siblings. Reordering is done on the JSON text: mapping
/// keys are already sorted by the parser, so it is the sequence reordering
/// that the linearizer has to absorb.
use proptest::prelude::*;
use std::collections::BTreeMap;

use leafcmp::{compare_documents, compare_paths, leaf_paths, parse_json, LinearizeConfig};

#[derive(Debug, Clone)]
enum Tree {
    Text(String),
    Flag(bool),
    Map(BTreeMap<String, Tree>),
    List(Vec<Tree>),
}

fn arb_key() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_ ]{0,8}"
}

fn arb_leaf() -> impl Strategy<Value = Tree> {
    prop_oneof![
        "[a-zA-Z0-9 \"\\\\]{0,12}".prop_map(Tree::Text),
        any::<bool>().prop_map(Tree::Flag),
    ]
}

fn arb_tree() -> impl Strategy<Value = Tree> {
    arb_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::btree_map(arb_key(), inner.clone(), 0..4).prop_map(Tree::Map),
            prop::collection::vec(inner, 0..4).prop_map(Tree::List),
        ]
    })
}

fn arb_root() -> impl Strategy<Value = BTreeMap<String, Tree>> {
    prop::collection::btree_map(arb_key(), arb_tree(), 0..5)
}

/// Renders a tree as JSON text, emitting siblings forward or reversed.
fn render(tree: &Tree, reversed: bool) -> String {
    match tree {
        Tree::Text(s) => serde_json::to_string(s).unwrap(),
        Tree::Flag(b) => b.to_string(),
        Tree::Map(map) => render_map(map, reversed),
        Tree::List(items) => render_list(items, reversed),
    }
}

fn render_list(items: &[Tree], reversed: bool) -> String {
    let mut rendered: Vec<String> = items.iter().map(|item| render(item, reversed)).collect();
    if reversed {
        rendered.reverse();
    }
    format!("[{}]", rendered.join(", "))
}

/// A sequence next to a copy of itself in random order.
fn arb_shuffled_items() -> impl Strategy<Value = (Vec<Tree>, Vec<Tree>)> {
    prop::collection::vec(arb_tree(), 0..8)
        .prop_flat_map(|items| (Just(items.clone()), Just(items).prop_shuffle()))
}

fn render_map(map: &BTreeMap<String, Tree>, reversed: bool) -> String {
    let mut entries: Vec<String> = map
        .iter()
        .map(|(k, v)| format!("{}: {}", serde_json::to_string(k).unwrap(), render(v, reversed)))
        .collect();
    if reversed {
        entries.reverse();
    }
    format!("{{{}}}", entries.join(", "))
}

proptest! {
    #[test]
    fn linearization_is_reflexive(root in arb_root()) {
        let tree = parse_json(&render_map(&root, false)).unwrap();
        let paths = leaf_paths(&tree, &LinearizeConfig::default()).unwrap();
        prop_assert!(compare_paths(&paths, &paths).is_equal);
    }

    #[test]
    fn sibling_order_is_ignored(root in arb_root()) {
        let forward = render_map(&root, false);
        let backward = render_map(&root, true);
        let result = compare_documents(forward.as_bytes(), backward.as_bytes()).unwrap();
        prop_assert!(result.is_equal);
    }

    #[test]
    fn sequence_shuffle_is_ignored((items, shuffled) in arb_shuffled_items()) {
        let first = format!(r#"{{"items": {}}}"#, render_list(&items, false));
        let second = format!(r#"{{"items": {}}}"#, render_list(&shuffled, false));
        let result = compare_documents(first.as_bytes(), second.as_bytes()).unwrap();
        prop_assert!(result.is_equal);
    }

    #[test]
    fn changed_sequence_leaf_is_detected(
        items in prop::collection::vec("[a-z]{1,6}", 1..6),
        replacement in "[A-Z]{1,6}",
    ) {
        let mut changed = items.clone();
        changed[0] = replacement;
        let first = serde_json::json!({ "items": items }).to_string();
        let second = serde_json::json!({ "items": changed }).to_string();
        let result = compare_documents(first.as_bytes(), second.as_bytes()).unwrap();
        prop_assert!(!result.is_equal);
    }

    #[test]
    fn legacy_policy_is_reflexive(root in arb_root()) {
        let tree = parse_json(&render_map(&root, false)).unwrap();
        let paths = leaf_paths(&tree, &LinearizeConfig::legacy()).unwrap();
        prop_assert!(compare_paths(&paths, &paths).is_equal);
    }

    #[test]
    fn length_mismatch_is_unequal(
        first in prop::collection::vec("[a-z]{1,4}", 0..6),
        extra in "[a-z]{1,4}",
    ) {
        let mut second = first.clone();
        second.push(extra);
        prop_assert!(!compare_paths(&first, &second).is_equal);
    }
}
