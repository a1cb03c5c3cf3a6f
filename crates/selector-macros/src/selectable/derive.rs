//! Expansion of `#[derive(Selectable)]`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{parse_select_attrs, FieldKind};

/// Generates the `Selectable` impl and field name constants.
pub fn selectable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Selectable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Selectable can only be derived for structs",
            ))
        }
    };

    let mut constants = Vec::new();
    let mut arms = Vec::new();

    for field in fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;
        let attr = parse_select_attrs(&field.attrs)?;

        let kind = match attr.kind {
            Some(kind) if !attr.skip => kind,
            _ => continue,
        };

        let query_name = attr.rename.unwrap_or_else(|| ident.to_string());
        let const_name = format_ident!("{}", to_screaming_snake_case(&query_name));

        constants.push(quote! {
            /// Field name for queries.
            pub const #const_name: &'static str = #query_name;
        });

        let value = match kind {
            FieldKind::String => quote! {
                ::selector::Value::from(::selector::AsFieldStr::as_field_str(&self.#ident))
            },
            FieldKind::Number => quote! {
                ::selector::Value::Number(::selector::Number::from(self.#ident))
            },
            FieldKind::Bool => quote! {
                ::selector::Value::Bool(self.#ident)
            },
        };

        arms.push(quote! { #query_name => #value, });
    }

    Ok(quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#constants)*
        }

        impl #impl_generics ::selector::Selectable for #struct_name #ty_generics #where_clause {
            fn select_field(&self, field: &str) -> ::selector::Value<'_> {
                match field {
                    #(#arms)*
                    _ => ::selector::Value::None,
                }
            }
        }
    })
}

fn to_screaming_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;

    for c in name.chars() {
        if c == '_' || c == '-' {
            out.push('_');
            prev_lower = false;
        } else if c.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.push(c);
            prev_lower = false;
        } else {
            out.push(c.to_ascii_uppercase());
            prev_lower = true;
        }
    }

    out
}
