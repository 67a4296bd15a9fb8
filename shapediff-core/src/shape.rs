/// The structural classification of a reflected value.
///
/// This is a closed set: the diff engine matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A record: a struct, tuple struct or tuple. Children are its fields.
    Struct(StructKind),

    /// A tagged union. At most one child, labeled with the active case name,
    /// whose value is the case payload.
    Enum,

    /// An ordered collection (`Vec`, slices, arrays). Children are unlabeled.
    List,

    /// A key-value map. Every child carries a key.
    Map,

    /// A set. Children are unlabeled elements.
    Set,

    /// A leaf value with no inspectable structure.
    Opaque,
}

/// How the fields of a [`Shape::Struct`] are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructKind {
    /// Fields have names: `Point { x: 1, y: 2 }`.
    Named,

    /// Fields are positional: `Point(1, 2)` or `(1, 2)`.
    Tuple,
}

impl Shape {
    /// Whether having zero children is a meaningful count rather than a leaf.
    pub const fn can_be_empty(self) -> bool {
        matches!(self, Shape::List | Shape::Map | Shape::Set)
    }

    /// Whether the shape has structure the engine can descend into.
    pub const fn is_composite(self) -> bool {
        !matches!(self, Shape::Opaque)
    }

    /// A short lowercase name, for logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Shape::Struct(StructKind::Named) => "struct",
            Shape::Struct(StructKind::Tuple) => "tuple",
            Shape::Enum => "enum",
            Shape::List => "list",
            Shape::Map => "map",
            Shape::Set => "set",
            Shape::Opaque => "opaque",
        }
    }
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
