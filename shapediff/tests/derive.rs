//! `#[derive(Reflect)]` on user types, checked through the reports it produces.

use std::collections::BTreeMap;
use std::rc::Rc;

use shapediff::{Node, Reflect, Shape, StructKind, diff_list};

#[derive(Debug, Clone, PartialEq, Reflect)]
struct Person {
    name: String,
    age: u32,
}

fn alice() -> Person {
    Person {
        name: "Alice".into(),
        age: 30,
    }
}

#[derive(Debug, Clone, PartialEq, Reflect)]
struct Meters(f64);

#[derive(Debug, PartialEq, Reflect)]
struct Marker;

#[derive(Debug, Clone, PartialEq, Reflect)]
enum Command {
    Stop,
    Move(i32),
    Resize(u32, u32),
    Paint {
        color: String,
        #[reflect(rename = "opacity")]
        alpha: u8,
    },
    #[reflect(rename = "Wait")]
    Sleep { millis: u64 },
}

#[derive(Debug, Reflect)]
struct Session {
    user: String,
    #[reflect(rename = "login_count")]
    logins: u32,
    #[reflect(skip)]
    last_seen: u64,
}

#[derive(Debug, Reflect)]
struct Pair<T> {
    left: T,
    right: T,
}

#[derive(Debug, PartialEq, Reflect)]
#[reflect(opaque)]
struct Token(u64);

#[derive(Debug, Reflect)]
struct Shared {
    owner: Rc<Person>,
    backup: Box<Option<Person>>,
}

#[test]
fn named_struct_reflects_fields_in_declaration_order() {
    shapediff_testhelpers::setup();
    let person = alice();
    let node = person.reflect();
    assert_eq!(node.shape, Shape::Struct(StructKind::Named));
    assert_eq!(node.name, Some("Person"));
    let labels: Vec<_> = node.children.iter().filter_map(|c| c.label()).collect();
    assert_eq!(labels, ["name", "age"]);
}

#[test]
fn one_changed_field_is_one_entry() {
    shapediff_testhelpers::setup();
    let older = Person {
        age: 31,
        ..alice()
    };
    assert_eq!(
        diff_list(&alice(), &older),
        ["Child age:\n|\tReceived: 31\n|\tExpected: 30\n\n"]
    );
    assert!(diff_list(&alice(), &alice()).is_empty());
}

#[test]
fn tuple_struct_fields_are_labeled_by_position() {
    shapediff_testhelpers::setup();
    assert_eq!(
        diff_list(&Meters(1.5), &Meters(2.0)),
        ["Child 0:\n|\tReceived: 2\n|\tExpected: 1.5\n\n"]
    );
}

#[test]
fn unit_struct_is_always_equal_to_itself() {
    shapediff_testhelpers::setup();
    let node = Marker.reflect();
    assert_eq!(node.shape, Shape::Struct(StructKind::Tuple));
    assert!(node.is_empty());
    assert!(diff_list(&Marker, &Marker).is_empty());
}

#[test]
fn skipped_fields_are_ignored_and_renamed_fields_relabeled() {
    shapediff_testhelpers::setup();
    let before = Session {
        user: "ada".into(),
        logins: 3,
        last_seen: 100,
    };
    let after = Session {
        user: "ada".into(),
        logins: 4,
        last_seen: 200,
    };
    assert_eq!(
        diff_list(&before, &after),
        ["Child login_count:\n|\tReceived: 4\n|\tExpected: 3\n\n"]
    );
}

#[test]
fn enum_reflects_the_active_case_as_its_only_child() {
    shapediff_testhelpers::setup();
    let stop = Command::Stop;
    let node = stop.reflect();
    assert_eq!(node.shape, Shape::Enum);
    assert!(node.is_empty());

    let moved = Command::Move(3);
    let node = moved.reflect();
    assert_eq!(node.first_label(), Some("Move"));
    assert_eq!(node.len(), 1);
}

#[test]
fn same_case_compares_the_payload() {
    shapediff_testhelpers::setup();
    assert_eq!(
        diff_list(&Command::Move(1), &Command::Move(2)),
        ["Child Move:\n|\tReceived: 2\n|\tExpected: 1\n\n"]
    );
    assert_eq!(
        diff_list(&Command::Resize(1, 2), &Command::Resize(1, 3)),
        ["Child Resize:\n|\tChild 1:\n|\t|\tReceived: 3\n|\t|\tExpected: 2\n\n"]
    );
    assert_eq!(
        diff_list(
            &Command::Paint {
                color: "red".into(),
                alpha: 255,
            },
            &Command::Paint {
                color: "red".into(),
                alpha: 128,
            },
        ),
        ["Child Paint:\n|\tChild opacity:\n|\t|\tReceived: 128\n|\t|\tExpected: 255\n\n"]
    );
}

#[test]
fn different_cases_show_both_case_names() {
    shapediff_testhelpers::setup();
    assert_eq!(
        diff_list(&Command::Move(1), &Command::Resize(1, 1)),
        ["Received: Resize\nExpected: Move\n\n"]
    );
    assert_eq!(
        diff_list(&Command::Stop, &Command::Move(1)),
        ["Received: Move\nExpected: Stop\n\n"]
    );
    assert_eq!(
        diff_list(&Command::Sleep { millis: 5 }, &Command::Stop),
        ["Received: Stop\nExpected: Wait\n\n"]
    );
}

#[test]
fn generic_types_get_reflect_bounds() {
    shapediff_testhelpers::setup();
    let expected = Pair {
        left: vec![1, 2],
        right: vec![3],
    };
    let received = Pair {
        left: vec![1, 2],
        right: vec![4],
    };
    assert_eq!(
        diff_list(&expected, &received),
        ["Child right:\n|\tChild 0:\n|\t|\tReceived: 4\n|\t|\tExpected: 3\n\n"]
    );
}

#[test]
fn opaque_types_are_compared_whole_through_debug() {
    shapediff_testhelpers::setup();
    assert_eq!(Token(7).reflect().shape, Shape::Opaque);
    assert_eq!(
        diff_list(&Token(7), &Token(8)),
        ["Received: Token(8)\nExpected: Token(7)\n\n"]
    );
}

#[test]
fn smart_pointers_are_transparent() {
    shapediff_testhelpers::setup();
    let expected = Shared {
        owner: Rc::new(alice()),
        backup: Box::new(None),
    };
    let received = Shared {
        owner: Rc::new(Person {
            name: "Bob".into(),
            ..alice()
        }),
        backup: Box::new(Some(alice())),
    };
    assert_eq!(
        diff_list(&expected, &received),
        [
            "Child owner:\n|\tChild name:\n|\t|\tReceived: Bob\n|\t|\tExpected: Alice\n\n",
            "Enum backup:\n|\tReceived: Some\n|\tExpected: None\n\n",
        ]
    );
}

#[test]
fn derived_types_nest_inside_maps() {
    shapediff_testhelpers::setup();
    let expected = BTreeMap::from([("ada", alice()), ("bob", alice())]);
    let received = BTreeMap::from([
        ("ada", alice()),
        (
            "bob",
            Person {
                age: 40,
                ..alice()
            },
        ),
    ]);
    assert_eq!(
        diff_list(&expected, &received),
        ["Child key bob:\n|\tChild age:\n|\t|\tReceived: 40\n|\t|\tExpected: 30\n\n"]
    );
}

#[test]
fn hand_written_impls_mix_with_derived_ones() {
    struct Celsius(f32);

    impl Reflect for Celsius {
        fn reflect(&self) -> Node<'_> {
            Node::opaque()
        }

        fn fmt_leaf(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "{}°C", self.0)
        }
    }

    #[derive(Reflect)]
    struct Reading {
        sensor: &'static str,
        value: Celsius,
    }

    shapediff_testhelpers::setup();
    assert_eq!(
        diff_list(
            &Reading {
                sensor: "north",
                value: Celsius(21.5),
            },
            &Reading {
                sensor: "north",
                value: Celsius(23.0),
            },
        ),
        ["Child value:\n|\tReceived: 23°C\n|\tExpected: 21.5°C\n\n"]
    );
}
