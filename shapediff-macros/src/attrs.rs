//! Parsing of `#[reflect(...)]` attributes.

use syn::{Attribute, LitStr};

/// Attributes accepted on the deriving type.
#[derive(Default)]
pub struct ContainerAttrs {
    pub opaque: bool,
}

/// Attributes accepted on a field.
#[derive(Default)]
pub struct FieldAttrs {
    pub skip: bool,
    pub rename: Option<LitStr>,
}

/// Attributes accepted on an enum variant.
#[derive(Default)]
pub struct VariantAttrs {
    pub rename: Option<LitStr>,
}

fn reflect_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("reflect"))
}

impl ContainerAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("opaque") {
                    out.opaque = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown container attribute, expected `opaque`"))
                }
            })?;
        }
        Ok(out)
    }
}

impl FieldAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    out.skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    out.rename = Some(parse_rename(&meta)?);
                    Ok(())
                } else {
                    Err(meta.error("unknown field attribute, expected `skip` or `rename`"))
                }
            })?;
        }
        if out.skip
            && let Some(rename) = &out.rename
        {
            return Err(syn::Error::new(
                rename.span(),
                "`rename` has no effect on a skipped field",
            ));
        }
        Ok(out)
    }
}

impl VariantAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    out.rename = Some(parse_rename(&meta)?);
                    Ok(())
                } else {
                    Err(meta.error("unknown variant attribute, expected `rename`"))
                }
            })?;
        }
        Ok(out)
    }
}

fn parse_rename(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<LitStr> {
    let name: LitStr = meta.value()?.parse()?;
    if name.value().is_empty() {
        return Err(syn::Error::new(name.span(), "`rename` needs a non-empty name"));
    }
    Ok(name)
}
