//! Derive macro for [`shapediff`](https://docs.rs/shapediff)'s `Reflect` trait.
//!
//! Use it through the `shapediff` crate, which re-exports it:
//!
//! ```ignore
//! use shapediff::Reflect;
//!
//! #[derive(Reflect)]
//! struct Person {
//!     name: String,
//!     #[reflect(rename = "years")]
//!     age: u32,
//!     #[reflect(skip)]
//!     cache: Vec<u8>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod expand;

/// Derives `shapediff::Reflect` for a struct or an enum.
///
/// # Attributes
///
/// - `#[reflect(opaque)]` on the type: reflect as a leaf rendered with `Debug`.
/// - `#[reflect(skip)]` on a field: leave the field out of the reflected children.
/// - `#[reflect(rename = "...")]` on a field or a variant: the label shown in reports.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand::derive_reflect(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
