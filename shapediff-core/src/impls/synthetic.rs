use core::fmt;

use crate::{Child, Node, Reflect, StructKind, Value};

/// Stands in for a map value whose key is absent on the received side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Missing;

impl Missing {
    /// The text used for a missing value.
    pub const TEXT: &'static str = "<missing>";
}

impl Reflect for Missing {
    fn reflect(&self) -> Node<'_> {
        Node::opaque()
    }

    fn fmt_leaf(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::TEXT)
    }

    fn describe(&self) -> Option<String> {
        Some(Self::TEXT.to_owned())
    }
}

/// The fields of an enum variant, gathered into an anonymous record.
///
/// Built by `#[derive(Reflect)]` for variants with named fields or with more
/// than one positional field. A variant with a single positional field
/// exposes that field directly instead.
pub struct Payload<'a> {
    kind: StructKind,
    fields: Vec<(&'static str, &'a dyn Reflect)>,
}

impl<'a> Payload<'a> {
    /// An empty payload of the given kind.
    pub fn new(kind: StructKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    pub fn with_field(mut self, label: &'static str, value: &'a dyn Reflect) -> Self {
        self.fields.push((label, value));
        self
    }

    /// Wraps the payload as an owned child value.
    pub fn into_value(self) -> Value<'a> {
        Value::owned(self)
    }
}

impl Reflect for Payload<'_> {
    fn reflect(&self) -> Node<'_> {
        Node::structure(
            None,
            self.kind,
            self.fields
                .iter()
                .map(|&(label, value)| Child::labeled(label, Value::Borrowed(value))),
        )
    }

    fn type_name(&self) -> &'static str {
        "payload"
    }
}
