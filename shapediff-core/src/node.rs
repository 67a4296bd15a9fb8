use core::ops::Deref;
use std::borrow::Cow;

use crate::{Reflect, Shape, StructKind};

/// A child value, either borrowed from its parent or synthesized on the fly.
pub enum Value<'a> {
    /// A value living inside the reflected parent.
    Borrowed(&'a dyn Reflect),

    /// A value built during reflection, such as an enum payload.
    Owned(Box<dyn Reflect + 'a>),
}

impl<'a> Value<'a> {
    /// Wraps a synthesized value.
    pub fn owned(value: impl Reflect + 'a) -> Self {
        Value::Owned(Box::new(value))
    }
}

impl<'a> Deref for Value<'a> {
    type Target = dyn Reflect + 'a;

    fn deref(&self) -> &Self::Target {
        match self {
            Value::Borrowed(value) => *value,
            Value::Owned(value) => &**value,
        }
    }
}

impl<'a, T: Reflect + 'a> From<&'a T> for Value<'a> {
    fn from(value: &'a T) -> Self {
        Value::Borrowed(value)
    }
}

impl core::fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let kind = match self {
            Value::Borrowed(_) => "Borrowed",
            Value::Owned(_) => "Owned",
        };
        write!(f, "{kind}({})", self.type_name())
    }
}

/// One labeled child of a [`Node`].
#[derive(Debug)]
pub struct Child<'a> {
    /// Field name, tuple index or enum case name.
    pub label: Option<Cow<'static, str>>,

    /// The entry key, for children of a [`Shape::Map`].
    pub key: Option<Value<'a>>,

    /// The child value itself.
    pub value: Value<'a>,
}

impl<'a> Child<'a> {
    /// A child with a label: a field, a tuple position or an enum case.
    pub fn labeled(label: impl Into<Cow<'static, str>>, value: impl Into<Value<'a>>) -> Self {
        Self {
            label: Some(label.into()),
            key: None,
            value: value.into(),
        }
    }

    /// An unlabeled child: a list or set element.
    pub fn unlabeled(value: impl Into<Value<'a>>) -> Self {
        Self {
            label: None,
            key: None,
            value: value.into(),
        }
    }

    /// A map entry.
    pub fn entry(key: impl Into<Value<'a>>, value: impl Into<Value<'a>>) -> Self {
        Self {
            label: None,
            key: Some(key.into()),
            value: value.into(),
        }
    }

    /// The label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// The reflected structure of a value: its shape and ordered children.
///
/// Nodes are produced fresh by every [`Reflect::reflect`] call and borrow from
/// the reflected value.
#[derive(Debug)]
pub struct Node<'a> {
    /// The structural classification.
    pub shape: Shape,

    /// The type name of a named struct, or the active case of an enum.
    pub name: Option<&'static str>,

    /// Children in a stable order.
    pub children: Vec<Child<'a>>,

    /// Set by hash-based maps and sets, whose iteration order is arbitrary.
    pub unordered: bool,
}

impl<'a> Node<'a> {
    /// A node of the given shape with no children.
    pub const fn new(shape: Shape) -> Self {
        Self {
            shape,
            name: None,
            children: Vec::new(),
            unordered: false,
        }
    }

    /// A leaf.
    pub const fn opaque() -> Self {
        Self::new(Shape::Opaque)
    }

    /// A struct or tuple struct. `name` is `None` for anonymous tuples.
    pub fn structure(
        name: Option<&'static str>,
        kind: StructKind,
        children: impl IntoIterator<Item = Child<'a>>,
    ) -> Self {
        Self {
            shape: Shape::Struct(kind),
            name,
            children: children.into_iter().collect(),
            unordered: false,
        }
    }

    /// An enum with `case` active. The payload, if any, becomes the single
    /// child, labeled with the case name.
    pub fn enumeration(case: &'static str, payload: Option<Value<'a>>) -> Self {
        Self {
            shape: Shape::Enum,
            name: Some(case),
            children: payload
                .map(|payload| Child::labeled(case, payload))
                .into_iter()
                .collect(),
            unordered: false,
        }
    }

    /// An ordered collection.
    pub fn list<T: Reflect + 'a>(items: impl IntoIterator<Item = &'a T>) -> Self {
        Self {
            shape: Shape::List,
            name: None,
            children: items.into_iter().map(|item| Child::unlabeled(item)).collect(),
            unordered: false,
        }
    }

    /// A map, from its entries.
    pub fn map<K: Reflect + 'a, V: Reflect + 'a>(
        entries: impl IntoIterator<Item = (&'a K, &'a V)>,
    ) -> Self {
        Self {
            shape: Shape::Map,
            name: None,
            children: entries
                .into_iter()
                .map(|(key, value)| Child::entry(key, value))
                .collect(),
            unordered: false,
        }
    }

    /// A set, from its elements.
    pub fn set<T: Reflect + 'a>(items: impl IntoIterator<Item = &'a T>) -> Self {
        Self {
            shape: Shape::Set,
            name: None,
            children: items.into_iter().map(|item| Child::unlabeled(item)).collect(),
            unordered: false,
        }
    }

    /// Marks the children as having no meaningful order.
    pub fn unordered(mut self) -> Self {
        self.unordered = true;
        self
    }

    /// The label of the first child, which for an enum is the active case.
    pub fn first_label(&self) -> Option<&str> {
        self.children.first().and_then(Child::label)
    }

    /// Whether the node has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }
}
