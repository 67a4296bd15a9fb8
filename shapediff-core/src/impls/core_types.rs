use core::fmt;

use crate::{Node, Reflect, Value};

macro_rules! impl_reflect_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn reflect(&self) -> Node<'_> {
                    Node::opaque()
                }

                fn fmt_leaf(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Debug::fmt(self, f)
                }

                fn describe(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_reflect_scalar!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, str,
    String,
);

impl Reflect for () {
    fn reflect(&self) -> Node<'_> {
        Node::opaque()
    }

    fn fmt_leaf(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }

    fn describe(&self) -> Option<String> {
        Some("()".to_owned())
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn reflect(&self) -> Node<'_> {
        match self {
            None => Node::enumeration("None", None),
            Some(value) => Node::enumeration("Some", Some(Value::from(value))),
        }
    }
}

impl<T: Reflect, E: Reflect> Reflect for Result<T, E> {
    fn reflect(&self) -> Node<'_> {
        match self {
            Ok(value) => Node::enumeration("Ok", Some(Value::from(value))),
            Err(error) => Node::enumeration("Err", Some(Value::from(error))),
        }
    }
}
