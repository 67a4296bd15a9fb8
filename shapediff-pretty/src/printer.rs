//! The printer behind canonical and plain renderings.

use core::fmt::{self, Write};

use shapediff_core::{Child, Node, Reflect, Shape, StructKind};

/// Rendered in place of values nested deeper than the configured maximum.
pub const ELIDED: &str = "…";

/// A single-line, `Debug`-like renderer for [`Reflect`] values.
///
/// ```text
/// Point { x: 1, y: 2 }     named struct
/// Meters(3.5)              tuple struct
/// (1, "a")                 tuple
/// Some(4) / None           enums
/// Circle { r: 1.0 }        enum case with named fields
/// [1, 2, 3]                lists
/// {"a": 1}                 maps
/// {1, 2}                   sets
/// ```
#[derive(Debug, Clone)]
pub struct PrettyPrinter {
    max_depth: Option<usize>,
    sort_unordered: bool,
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        Self {
            max_depth: None,
            sort_unordered: true,
        }
    }
}

impl PrettyPrinter {
    /// A printer with no depth limit that sorts unordered containers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Composite values nested deeper than `depth` render as [`ELIDED`].
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Sort the entries of hash-based maps and sets by their rendering, so
    /// that equal containers always render identically. On by default.
    pub fn with_sort_unordered(mut self, sort: bool) -> Self {
        self.sort_unordered = sort;
        self
    }

    /// Renders `value` on a single line.
    pub fn format(&self, value: &dyn Reflect) -> String {
        let mut output = String::new();
        self.format_to(value, &mut output).expect("writing to a String cannot fail");
        output
    }

    /// Like [`format`](Self::format), writing into `f` instead of allocating.
    pub fn format_to(&self, value: &dyn Reflect, f: &mut dyn Write) -> fmt::Result {
        self.format_value(value, f, 0)
    }

    /// The plain description of a value: [`Reflect::describe`] when the value
    /// provides one, its rendering otherwise.
    pub fn describe(&self, value: &dyn Reflect) -> String {
        value.describe().unwrap_or_else(|| self.format(value))
    }

    fn format_value(&self, value: &dyn Reflect, f: &mut dyn Write, depth: usize) -> fmt::Result {
        let node = value.reflect();
        self.format_node(value, &node, f, depth)
    }

    fn format_node(
        &self,
        value: &dyn Reflect,
        node: &Node<'_>,
        f: &mut dyn Write,
        depth: usize,
    ) -> fmt::Result {
        if node.shape.is_composite() && self.max_depth.is_some_and(|max| depth > max) {
            return f.write_str(ELIDED);
        }

        match node.shape {
            Shape::Opaque => write!(f, "{}", value.leaf()),
            Shape::Struct(kind) => self.format_struct(node, kind, f, depth),
            Shape::Enum => self.format_enum(node, f, depth),
            Shape::List => {
                let items = self.render_children(node, depth, |printer, child, out, depth| {
                    printer.format_value(&*child.value, out, depth)
                })?;
                write!(f, "[{}]", items.join(", "))
            }
            Shape::Map => {
                let entries = self.render_children(node, depth, |printer, child, out, depth| {
                    match &child.key {
                        Some(key) => printer.format_value(&**key, out, depth)?,
                        None => out.write_str(child.label().unwrap_or("?"))?,
                    }
                    out.write_str(": ")?;
                    printer.format_value(&*child.value, out, depth)
                })?;
                write!(f, "{{{}}}", entries.join(", "))
            }
            Shape::Set => {
                let items = self.render_children(node, depth, |printer, child, out, depth| {
                    printer.format_value(&*child.value, out, depth)
                })?;
                write!(f, "{{{}}}", items.join(", "))
            }
        }
    }

    fn format_struct(
        &self,
        node: &Node<'_>,
        kind: StructKind,
        f: &mut dyn Write,
        depth: usize,
    ) -> fmt::Result {
        if let Some(name) = node.name {
            f.write_str(name)?;
        }

        match kind {
            StructKind::Named => {
                if node.is_empty() {
                    return match node.name {
                        Some(_) => Ok(()),
                        None => f.write_str("{}"),
                    };
                }
                if node.name.is_some() {
                    f.write_char(' ')?;
                }
                f.write_str("{ ")?;
                for (index, child) in node.children.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: ", child.label().unwrap_or("?"))?;
                    self.format_value(&*child.value, f, depth + 1)?;
                }
                f.write_str(" }")
            }
            StructKind::Tuple => {
                if node.is_empty() && node.name.is_some() {
                    return Ok(());
                }
                f.write_char('(')?;
                for (index, child) in node.children.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    self.format_value(&*child.value, f, depth + 1)?;
                }
                if node.len() == 1 && node.name.is_none() {
                    f.write_char(',')?;
                }
                f.write_char(')')
            }
        }
    }

    fn format_enum(&self, node: &Node<'_>, f: &mut dyn Write, depth: usize) -> fmt::Result {
        let case = node.name.or_else(|| node.first_label()).unwrap_or("?");
        f.write_str(case)?;

        match node.children.as_slice() {
            [] => Ok(()),
            [child] => {
                let payload = child.value.reflect();
                match (payload.shape, payload.name) {
                    (Shape::Struct(StructKind::Tuple), None) if payload.len() > 1 => {
                        self.format_node(&*child.value, &payload, f, depth + 1)
                    }
                    (Shape::Struct(StructKind::Named), None) => {
                        f.write_char(' ')?;
                        self.format_node(&*child.value, &payload, f, depth + 1)
                    }
                    _ => {
                        f.write_char('(')?;
                        self.format_node(&*child.value, &payload, f, depth + 1)?;
                        f.write_char(')')
                    }
                }
            }
            children => {
                f.write_char('(')?;
                for (index, child) in children.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    self.format_value(&*child.value, f, depth + 1)?;
                }
                f.write_char(')')
            }
        }
    }

    /// Renders each child on its own, sorting the results when the node's
    /// order is arbitrary.
    fn render_children<F>(
        &self,
        node: &Node<'_>,
        depth: usize,
        render: F,
    ) -> Result<Vec<String>, fmt::Error>
    where
        F: Fn(&Self, &Child<'_>, &mut dyn Write, usize) -> fmt::Result,
    {
        let mut rendered = Vec::with_capacity(node.len());
        for child in &node.children {
            let mut out = String::new();
            render(self, child, &mut out, depth + 1)?;
            rendered.push(out);
        }
        if node.unordered && self.sort_unordered {
            rendered.sort();
        }
        Ok(rendered)
    }
}
