//! The recursive comparison.
//!
//! Traversal is always driven by the expected value: its children, keys and
//! elements define what gets visited and in which order. Structure that only
//! exists on the received side is never reported on its own.

use std::collections::{HashMap, HashSet};

use shapediff_core::{Child, Missing, Node, Reflect, Shape};
use tracing::{trace, warn};

use crate::DiffOptions;
use crate::format::{self, UNKNOWN_LABEL};

/// Header word for a child that is itself an enum.
const ENUM_WORD: &str = "Enum";

/// Header word for every other child.
const CHILD_WORD: &str = "Child";

pub(crate) struct Engine<'o> {
    options: &'o DiffOptions,
}

impl<'o> Engine<'o> {
    pub(crate) const fn new(options: &'o DiffOptions) -> Self {
        Self { options }
    }

    /// Compares two values of the same type, calling `emit` once per
    /// difference found. Entries are fully rendered and indented for `level`.
    pub(crate) fn compare_values(
        &self,
        expected: &dyn Reflect,
        received: &dyn Reflect,
        level: usize,
        emit: &mut dyn FnMut(String),
    ) {
        let exp = expected.reflect();
        let rec = received.reflect();

        if exp.is_empty() || rec.is_empty() {
            self.compare_leaves(expected, &exp, received, &rec, level, emit);
            return;
        }

        if exp.shape.can_be_empty() && exp.shape == rec.shape && exp.len() != rec.len() {
            trace!(level, shape = %exp.shape, expected = exp.len(), received = rec.len(), "different count");
            emit(self.count_mismatch(expected, &exp, received, &rec, level));
            return;
        }

        if level > self.options.max_depth {
            warn!(
                level,
                max_depth = self.options.max_depth,
                shape = %exp.shape,
                "depth bound reached, comparing whole values"
            );
            if self.options.canonicalize(expected) != self.options.canonicalize(received) {
                emit(format::render_expected_received(
                    &self.options.describe(expected),
                    &self.options.describe(received),
                    level,
                ));
            }
            return;
        }

        match exp.shape {
            Shape::Map if rec.shape == Shape::Map => self.compare_maps(&exp, &rec, level, emit),
            Shape::Set if rec.shape == Shape::Set => self.compare_sets(&exp, &rec, level, emit),
            Shape::Enum if rec.shape == Shape::Enum => {
                self.compare_enums(expected, &exp, received, &rec, level, emit)
            }
            Shape::Struct(_)
            | Shape::Enum
            | Shape::List
            | Shape::Map
            | Shape::Set
            | Shape::Opaque => self.compare_children(&exp, &rec, level, emit),
        }
    }

    /// At least one side has no children: compare whole renderings.
    fn compare_leaves(
        &self,
        expected: &dyn Reflect,
        exp: &Node<'_>,
        received: &dyn Reflect,
        rec: &Node<'_>,
        level: usize,
        emit: &mut dyn FnMut(String),
    ) {
        let expected_text = self.options.canonicalize(expected);
        let received_text = self.options.canonicalize(received);
        if expected_text == received_text {
            return;
        }

        if exp.shape.can_be_empty() {
            trace!(level, shape = %exp.shape, "empty container");
            emit(format::render_count_mismatch(
                exp.len(),
                &expected_text,
                rec.len(),
                &received_text,
                level,
            ));
            return;
        }

        let (expected_text, received_text) = match (exp.is_empty(), rec.is_empty()) {
            (true, false) => (expected_text, self.summarize(received, rec)),
            (false, true) => (self.summarize(expected, exp), received_text),
            _ => (
                self.options.describe(expected),
                self.options.describe(received),
            ),
        };
        trace!(level, shape = %exp.shape, "leaf mismatch");
        emit(format::render_expected_received(
            &expected_text,
            &received_text,
            level,
        ));
    }

    /// Short text for the non-empty side of a leaf mismatch: the active case
    /// of an enum, the plain description of anything else.
    fn summarize(&self, value: &dyn Reflect, node: &Node<'_>) -> String {
        match node.shape {
            Shape::Enum => node.first_label().unwrap_or(UNKNOWN_LABEL).to_owned(),
            _ => self.options.describe(value),
        }
    }

    fn count_mismatch(
        &self,
        expected: &dyn Reflect,
        exp: &Node<'_>,
        received: &dyn Reflect,
        rec: &Node<'_>,
        level: usize,
    ) -> String {
        format::render_count_mismatch(
            exp.len(),
            &self.options.canonicalize(expected),
            rec.len(),
            &self.options.canonicalize(received),
            level,
        )
    }

    fn compare_maps(
        &self,
        exp: &Node<'_>,
        rec: &Node<'_>,
        level: usize,
        emit: &mut dyn FnMut(String),
    ) {
        trace!(level, entries = exp.len(), "comparing maps");
        let received: HashMap<String, &dyn Reflect> = rec
            .children
            .iter()
            .map(|child| (self.entry_key(child), &*child.value))
            .collect();

        let mut entries: Vec<(String, &Child<'_>)> = exp
            .children
            .iter()
            .map(|child| (self.entry_key(child), child))
            .collect();
        if exp.unordered {
            entries.sort_by(|a, b| a.0.cmp(&b.0));
        }

        for (key, child) in entries {
            let received_value = received.get(&key).copied().unwrap_or(&Missing);
            let nested = self.collect(&*child.value, received_value, level + 1);
            if nested.is_empty() {
                continue;
            }
            let title = format!("Child key {}:", self.key_label(child));
            emit(format::render_header(&title, level, &nested));
        }
    }

    /// Canonical text of an entry's key, used to pair entries across maps.
    fn entry_key(&self, child: &Child<'_>) -> String {
        match &child.key {
            Some(key) => self.options.canonicalize(&**key),
            None => child.label().unwrap_or(UNKNOWN_LABEL).to_owned(),
        }
    }

    /// Human text of an entry's key, used in headers.
    fn key_label(&self, child: &Child<'_>) -> String {
        match &child.key {
            Some(key) => self.options.describe(&**key),
            None => child.label().unwrap_or(UNKNOWN_LABEL).to_owned(),
        }
    }

    fn compare_sets(
        &self,
        exp: &Node<'_>,
        rec: &Node<'_>,
        level: usize,
        emit: &mut dyn FnMut(String),
    ) {
        trace!(level, elements = exp.len(), "comparing sets");
        let received: HashSet<String> = rec
            .children
            .iter()
            .map(|child| self.options.canonicalize(&*child.value))
            .collect();

        let mut missing: Vec<(String, &Child<'_>)> = exp
            .children
            .iter()
            .map(|child| (self.options.canonicalize(&*child.value), child))
            .filter(|(text, _)| !received.contains(text))
            .collect();
        if missing.is_empty() {
            return;
        }
        if exp.unordered {
            missing.sort_by(|a, b| a.0.cmp(&b.0));
        }

        let mut block: String = missing
            .iter()
            .map(|(_, child)| {
                format::render_missing_element(&self.options.describe(&*child.value), level + 1)
            })
            .collect();
        block.push('\n');
        emit(block);
    }

    fn compare_enums(
        &self,
        expected: &dyn Reflect,
        exp: &Node<'_>,
        received: &dyn Reflect,
        rec: &Node<'_>,
        level: usize,
        emit: &mut dyn FnMut(String),
    ) {
        if exp.len() != rec.len() {
            trace!(level, expected = exp.len(), received = rec.len(), "payload arity differs");
            emit(self.count_mismatch(expected, exp, received, rec, level));
            return;
        }

        let expected_case = exp.first_label();
        let received_case = rec.first_label();
        if expected_case != received_case {
            trace!(level, ?expected_case, ?received_case, "case mismatch");
            emit(format::render_expected_received(
                expected_case.unwrap_or(UNKNOWN_LABEL),
                received_case.unwrap_or(UNKNOWN_LABEL),
                level,
            ));
            return;
        }

        self.compare_children(exp, rec, level, emit);
    }

    /// Pairs children by position. Labels name the headers but are not used
    /// for matching. The header word follows the shape of the expected child.
    fn compare_children(
        &self,
        exp: &Node<'_>,
        rec: &Node<'_>,
        level: usize,
        emit: &mut dyn FnMut(String),
    ) {
        trace!(level, shape = %exp.shape, children = exp.len(), "comparing children");
        for (index, (expected, received)) in exp.children.iter().zip(&rec.children).enumerate() {
            let (expected_value, received_value) = (&*expected.value, &*received.value);
            if self.options.canonicalize(expected_value) == self.options.canonicalize(received_value)
            {
                continue;
            }

            let shape = expected_value.reflect().shape;
            let word = match shape {
                Shape::Enum => ENUM_WORD,
                _ => CHILD_WORD,
            };
            let title = match expected.label() {
                Some(label) => format!("{word} {label}:"),
                None => format!("{word} {index}:"),
            };

            if shape.is_composite() {
                let nested = self.collect(expected_value, received_value, level + 1);
                if !nested.is_empty() {
                    emit(format::render_header(&title, level, &nested));
                }
            } else {
                let block = format::render_expected_received(
                    &self.options.describe(expected_value),
                    &self.options.describe(received_value),
                    level + 1,
                );
                emit(format::render_header(&title, level, &[block]));
            }
        }
    }

    /// Runs a nested comparison and gathers its entries.
    fn collect(&self, expected: &dyn Reflect, received: &dyn Reflect, level: usize) -> Vec<String> {
        let mut nested = Vec::new();
        self.compare_values(expected, received, level, &mut |entry| nested.push(entry));
        nested
    }
}
