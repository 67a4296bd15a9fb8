//! Whole reports for realistic values, through the public entry points.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use insta::assert_snapshot;
use shapediff::{
    DiffError, DiffOptions, Reflect, assert_no_diff, check_no_diff, diff_if_ne, diff_list,
    diff_list_with, diff_report, dump_diff_to, try_diff_list,
};

#[derive(Debug, Clone, PartialEq, Reflect)]
struct Person {
    name: String,
    age: u32,
}

#[derive(Debug, Clone, PartialEq, Reflect)]
struct Inventory {
    owner: Person,
    stock: BTreeMap<String, u32>,
    tags: BTreeSet<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Reflect)]
struct Tree {
    label: u32,
    children: Vec<Tree>,
}

fn chain(depth: u32, leaf: u32) -> Tree {
    (0..depth).fold(
        Tree {
            label: leaf,
            children: Vec::new(),
        },
        |child, label| Tree {
            label,
            children: vec![child],
        },
    )
}

/// Report text with tabs shown as single spaces, for readable snapshots.
fn render(entries: Vec<String>) -> String {
    entries.concat().replace('\t', " ")
}

fn inventory() -> Inventory {
    Inventory {
        owner: Person {
            name: "Alice".into(),
            age: 30,
        },
        stock: BTreeMap::from([("apples".into(), 3), ("pears".into(), 2)]),
        tags: BTreeSet::from(["fresh", "local"]),
    }
}

#[test]
fn nested_report_snapshot() {
    shapediff_testhelpers::setup();
    let expected = inventory();
    let mut received = inventory();
    received.owner.age = 31;
    received.stock.insert("pears".into(), 5);
    received.tags = BTreeSet::from(["fresh", "imported"]);

    let entries = diff_list(&expected, &received);
    assert_eq!(entries.len(), 3);
    assert_snapshot!(render(entries), @r"
Child owner:
| Child age:
| | Received: 31
| | Expected: 30

Child stock:
| Child key pears:
| | Received: 5
| | Expected: 2

Child tags:
| | SetElement missing: local
");
}

#[test]
fn emptied_container_snapshot() {
    shapediff_testhelpers::setup();
    let expected = inventory();
    let received = Inventory {
        stock: BTreeMap::new(),
        ..inventory()
    };
    assert_snapshot!(render(diff_list(&expected, &received)), @r#"
Child stock:
| Different count:
| | Received: (0) {}
| | Expected: (2) {"apples": 3, "pears": 2}
"#);
}

#[test]
fn keys_missing_from_received_are_reported_as_missing() {
    shapediff_testhelpers::setup();
    let expected = inventory();
    let mut received = inventory();
    received.stock.remove("apples");
    received.stock.insert("plums".into(), 3);
    assert_eq!(
        diff_list(&expected, &received),
        ["Child stock:\n|\tChild key apples:\n|\t|\tReceived: <missing>\n|\t|\tExpected: 3\n\n"]
    );
}

#[test]
fn hash_containers_report_in_a_stable_order() {
    shapediff_testhelpers::setup();
    let expected: HashMap<u32, &str> = (0..20).map(|n| (n, "old")).collect();
    let received: HashMap<u32, &str> = (0..20).map(|n| (n, "new")).collect();
    let first = diff_list(&expected, &received);
    assert_eq!(first.len(), 20);
    assert_eq!(first, diff_list(&expected, &received));
    assert!(first[0].starts_with("Child key 0:\n"));

    let expected: HashSet<&str> = ["x", "b", "a"].into_iter().collect();
    let received: HashSet<&str> = ["x", "y", "z"].into_iter().collect();
    assert_eq!(
        diff_list(&expected, &received),
        ["|\tSetElement missing: a\n|\tSetElement missing: b\n\n"]
    );
}

#[test]
fn deep_values_stop_at_the_depth_bound() {
    shapediff_testhelpers::setup();
    let (expected, received) = (chain(100, 1), chain(100, 2));
    let entries = diff_list(&expected, &received);
    assert_eq!(entries.len(), 1);

    // Trees sit on even levels, so the bound is first exceeded by the
    // children list of the tree labeled 67.
    let report = &entries[0];
    assert!(report.starts_with("Child children:\n|\tChild 0:\n"));
    assert!(report.contains("Received: [Tree { label: 66, "));
    assert!(report.ends_with("\n\n"));
}

#[test]
fn differences_below_the_render_depth_are_still_found() {
    shapediff_testhelpers::setup();
    // 200 trees nest about 400 printing levels deep, past the 256 levels the
    // description printer keeps.
    let (expected, received) = (chain(200, 1), chain(200, 2));
    assert_ne!(expected, received);

    let entries = diff_list(&expected, &received);
    assert_eq!(entries.len(), 1);
    assert!(entries[0].contains("Received: [Tree { label: 166, "));
    assert!(entries[0].contains('…'));
    assert!(check_no_diff(&expected, &received).is_err());
}

#[test]
#[should_panic(expected = "assertion `assert_no_diff!(expected, received)` failed")]
fn assert_no_diff_fails_on_deeply_nested_differences() {
    shapediff_testhelpers::setup();
    assert_no_diff!(chain(200, 1), chain(200, 2));
}

#[test]
fn a_tighter_depth_bound_reports_whole_subtrees() {
    shapediff_testhelpers::setup();
    let options = DiffOptions::new().max_depth(1);
    assert_eq!(
        diff_list_with(&chain(2, 1), &chain(2, 2), &options),
        [concat!(
            "Child children:\n",
            "|\tChild 0:\n",
            "|\t|\tReceived: Tree { label: 0, children: [Tree { label: 2, children: [] }] }\n",
            "|\t|\tExpected: Tree { label: 0, children: [Tree { label: 1, children: [] }] }\n",
            "\n",
        )]
    );
}

#[test]
fn type_mismatch_is_an_error_not_a_report() {
    shapediff_testhelpers::setup();
    let person = inventory().owner;
    let error = try_diff_list(&person, &inventory(), &DiffOptions::default()).unwrap_err();
    assert!(matches!(error, DiffError::TypeMismatch { .. }));
    assert!(error.to_string().contains("reports::Person"));
}

#[test]
fn convenience_entry_points_agree() {
    shapediff_testhelpers::setup();
    let expected = inventory();
    let mut received = inventory();
    received.owner.name = "Alicia".into();

    let entries = diff_list(&expected, &received);
    assert_eq!(diff_if_ne(&expected, &received), entries);
    assert!(diff_if_ne(&expected, &expected.clone()).is_empty());

    let report = diff_report(&expected, &received);
    assert_eq!(report.entries(), entries.as_slice());
    assert_eq!(report.to_string(), entries.concat());
    assert_eq!(check_no_diff(&expected, &received), Err(report));

    let mut out = Vec::new();
    dump_diff_to(&mut out, &expected, &received).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), entries.concat());
}

#[test]
fn assert_no_diff_accepts_equal_values() {
    shapediff_testhelpers::setup();
    assert_no_diff!(inventory(), inventory());
    assert_no_diff!(chain(10, 1), chain(10, 1), "chains of equal depth");
}

#[test]
#[should_panic(expected = "Child owner:\n|\tChild age:\n")]
fn assert_no_diff_panics_with_the_report() {
    shapediff_testhelpers::setup();
    let mut received = inventory();
    received.owner.age += 1;
    assert_no_diff!(inventory(), received);
}
