use core::fmt;
use std::{borrow::Cow, rc::Rc, sync::Arc};

use crate::{Node, Reflect};

macro_rules! impl_reflect_deref {
    ($($(#[$meta:meta])* [$($generics:tt)*] $ty:ty;)*) => {
        $(
            $(#[$meta])*
            impl<$($generics)*> Reflect for $ty {
                fn reflect(&self) -> Node<'_> {
                    (**self).reflect()
                }

                fn type_name(&self) -> &'static str {
                    (**self).type_name()
                }

                fn fmt_leaf(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    (**self).fmt_leaf(f)
                }

                fn describe(&self) -> Option<String> {
                    (**self).describe()
                }
            }
        )*
    };
}

impl_reflect_deref! {
    [T: Reflect + ?Sized] &T;
    [T: Reflect + ?Sized] &mut T;
    [T: Reflect + ?Sized] Box<T>;
    [T: Reflect + ?Sized] Rc<T>;
    [T: Reflect + ?Sized] Arc<T>;
    [T: Reflect + ToOwned + ?Sized] Cow<'_, T>;
}
