//! Rendering and parse round-trip tests

use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;

use rstree::{Tree, TreeError, UniformSource};

#[test]
fn given_empty_tree_when_rendering_then_literal_is_stable() {
    let tree = Tree::new();
    assert_eq!(tree.to_string(), "Tree()");
    assert_eq!(tree.to_string(), tree.to_string());
}

#[test]
fn given_nested_tree_when_rendering_then_children_nest_under_parents() {
    let mut tree = Tree::leaf(1);
    tree.insert_child(2, 1);
    tree.insert_child(4, 2);
    tree.insert_child(3, 1);

    let expected = "1\n  2\n    4\n  3\n";
    assert_eq!(tree.to_string(), expected);
    // Idempotent on an unchanged tree.
    assert_eq!(tree.to_string(), expected);
}

#[test]
fn given_rendered_tree_when_parsing_then_structure_round_trips() {
    let mut tree = Tree::leaf(10);
    tree.insert_child(-3, 10);
    tree.insert_child(0, -3);
    tree.insert_child(7, 10);

    let reparsed: Tree = tree.to_string().parse().unwrap();
    assert_eq!(reparsed, tree);
}

#[test]
fn given_randomized_trees_when_round_tripping_then_equality_holds() {
    let mut rng = UniformSource(StdRng::seed_from_u64(99));
    let mut tree = Tree::new();

    for v in 0..200 {
        tree.insert(v % 17, &mut rng);
    }

    let reparsed: Tree = tree.to_string().parse().unwrap();
    assert_eq!(reparsed, tree);
    assert_eq!(reparsed.to_string(), tree.to_string());
}

#[test]
fn given_empty_literal_when_round_tripping_then_tree_is_empty() {
    let tree: Tree = Tree::new().to_string().parse().unwrap();
    assert!(tree.is_empty());
}

#[rstest]
#[case("1\n    2\n")] // skipped a level
#[case(" 1\n")] // odd indent
#[case("1\n2\n")] // second root
fn given_bad_indentation_when_parsing_then_errors(#[case] input: &str) {
    assert!(matches!(
        input.parse::<Tree>(),
        Err(TreeError::BadIndent { .. })
    ));
}

#[test]
fn given_non_numeric_line_when_parsing_then_reports_line_number() {
    let err = "1\n  two\n".parse::<Tree>().unwrap_err();
    match err {
        TreeError::InvalidValue { line, .. } => assert_eq!(line, 2),
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn given_tree_when_drawing_termtree_then_all_values_appear() {
    let mut tree = Tree::leaf(1);
    tree.insert_child(2, 1);
    tree.insert_child(3, 1);
    tree.insert_child(4, 3);

    let drawn = tree.to_termtree().unwrap().to_string();
    for value in ["1", "2", "3", "4"] {
        assert!(drawn.contains(value), "missing {value} in {drawn}");
    }
}
