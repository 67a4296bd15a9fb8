use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{
    Data, DataEnum, DataStruct, DeriveInput, Fields, Generics, Ident, LitStr, Member,
    parse_quote,
};

use crate::attrs::{ContainerAttrs, FieldAttrs, VariantAttrs};

/// A field that survives `#[reflect(skip)]`.
struct ReflectedField {
    member: Member,
    label: LitStr,
}

pub fn derive_reflect(input: DeriveInput) -> syn::Result<TokenStream> {
    let container = ContainerAttrs::parse(&input.attrs)?;
    let name = &input.ident;

    let body = match &input.data {
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Reflect cannot be derived for unions",
            ));
        }
        _ if container.opaque => expand_opaque(),
        Data::Struct(data) => expand_struct(name, data)?,
        Data::Enum(data) => expand_enum(data)?,
    };

    let generics = add_reflect_bounds(input.generics.clone(), container.opaque);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::shapediff::Reflect for #name #ty_generics #where_clause {
            #body
        }
    })
}

fn add_reflect_bounds(mut generics: Generics, opaque: bool) -> Generics {
    for param in generics.type_params_mut() {
        if opaque {
            param.bounds.push(parse_quote!(::core::fmt::Debug));
        } else {
            param.bounds.push(parse_quote!(::shapediff::Reflect));
        }
    }
    generics
}

fn expand_opaque() -> TokenStream {
    quote! {
        fn reflect(&self) -> ::shapediff::Node<'_> {
            ::shapediff::Node::opaque()
        }

        fn fmt_leaf(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            ::core::fmt::Debug::fmt(self, f)
        }
    }
}

/// Collects the fields that are not skipped, with their report labels.
fn reflected_fields(fields: &Fields) -> syn::Result<Vec<ReflectedField>> {
    let mut out = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        let attrs = FieldAttrs::parse(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let (member, default_label) = match &field.ident {
            Some(ident) => (Member::Named(ident.clone()), ident.to_string()),
            None => (Member::Unnamed(index.into()), index.to_string()),
        };
        let label = attrs.rename.unwrap_or_else(|| {
            let default_label = default_label
                .strip_prefix("r#")
                .unwrap_or(&default_label)
                .to_owned();
            LitStr::new(&default_label, Span::call_site())
        });
        out.push(ReflectedField { member, label });
    }
    Ok(out)
}

fn struct_kind(fields: &Fields) -> TokenStream {
    match fields {
        Fields::Named(_) => quote!(::shapediff::StructKind::Named),
        Fields::Unnamed(_) | Fields::Unit => quote!(::shapediff::StructKind::Tuple),
    }
}

fn expand_struct(name: &Ident, data: &DataStruct) -> syn::Result<TokenStream> {
    let name = LitStr::new(&name.to_string(), name.span());
    let kind = struct_kind(&data.fields);
    let children = reflected_fields(&data.fields)?
        .into_iter()
        .map(|ReflectedField { member, label }| {
            quote!(::shapediff::Child::labeled(#label, &self.#member))
        });

    Ok(quote! {
        fn reflect(&self) -> ::shapediff::Node<'_> {
            ::shapediff::Node::structure(
                ::core::option::Option::Some(#name),
                #kind,
                ::std::vec![#(#children),*],
            )
        }
    })
}

fn expand_enum(data: &DataEnum) -> syn::Result<TokenStream> {
    let mut arms = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        let attrs = VariantAttrs::parse(&variant.attrs)?;
        let ident = &variant.ident;
        let case = attrs
            .rename
            .unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()));

        let fields = reflected_fields(&variant.fields)?;
        let bindings: Vec<Ident> = (0..fields.len())
            .map(|index| format_ident!("__field{}", index))
            .collect();
        let members = fields.iter().map(|field| &field.member);
        let pattern = quote!(Self::#ident { #(#members: #bindings,)* .. });

        let payload = match (&variant.fields, fields.as_slice()) {
            (_, []) => quote!(::core::option::Option::None),
            (Fields::Unnamed(_), [_]) => {
                let binding = &bindings[0];
                quote!(::core::option::Option::Some(::shapediff::Value::from(#binding)))
            }
            _ => {
                let kind = struct_kind(&variant.fields);
                let labels = fields.iter().map(|field| &field.label);
                quote! {
                    ::core::option::Option::Some(
                        ::shapediff::Payload::new(#kind)
                            #(.with_field(#labels, #bindings))*
                            .into_value(),
                    )
                }
            }
        };

        arms.push(quote! {
            #pattern => ::shapediff::Node::enumeration(#case, #payload),
        });
    }

    // An enum without variants can never be reflected.
    let scrutinee = if arms.is_empty() {
        quote!(*self)
    } else {
        quote!(self)
    };

    Ok(quote! {
        fn reflect(&self) -> ::shapediff::Node<'_> {
            match #scrutinee {
                #(#arms)*
            }
        }
    })
}
