//! Implementation of the `#[derive(GridRow)]` macro.
//!
//! This macro generates an implementation of the `GridRow` trait and
//! field id constants for type-safe table definitions.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, GenericArgument, PathArguments, Result, Type};

use super::attrs::{parse_grid_attrs, FieldKind};

/// Main implementation of the GridRow derive macro.
pub fn grid_row_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "GridRow can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "GridRow can only be derived for structs",
            ))
        }
    };

    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut field_ids: Vec<String> = Vec::new();
    let mut identity: Option<String> = None;

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let grid_attrs = parse_grid_attrs(&field.attrs)?;

        if grid_attrs.skip {
            continue;
        }

        // Fields without a grid type are not part of the row
        let kind = match grid_attrs.kind {
            Some(k) => k,
            None => continue,
        };

        let field_id = grid_attrs.rename.unwrap_or_else(|| field_name.to_string());

        if field_ids.contains(&field_id) {
            return Err(Error::new(
                field.span(),
                format!("duplicate grid field id '{}'", field_id),
            ));
        }

        if grid_attrs.id {
            if identity.is_some() {
                return Err(Error::new(
                    grid_attrs.span,
                    "only one field can be marked #[grid(id)]",
                ));
            }
            identity = Some(field_id.clone());
        }

        let const_name = format_ident!("{}", to_screaming_snake_case(&field_id));
        field_constants.push(quote! {
            /// Field id constant for table definitions.
            pub const #const_name: &'static str = #field_id;
        });

        let value_expr = value_expr(kind, field_name, is_option(&field.ty));
        field_matches.push(quote! {
            #field_id => #value_expr,
        });

        field_ids.push(field_id);
    }

    let identity_fn = identity.map(|id| {
        quote! {
            fn row_identity(&self) -> ::std::option::Option<::std::string::String> {
                let text = ::gridwork_query::GridRow::field_value(self, #id)
                    .to_text()
                    .into_owned();
                if text.is_empty() {
                    ::std::option::Option::None
                } else {
                    ::std::option::Option::Some(text)
                }
            }
        }
    });

    let fingerprint_body = if field_ids.is_empty() {
        quote! { ::std::string::String::new() }
    } else {
        quote! {
            [
                #(::gridwork_query::GridRow::field_value(self, #field_ids).to_text().into_owned()),*
            ]
            .join("\u{1f}")
        }
    };

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*
        }

        impl #impl_generics ::gridwork_query::GridRow for #struct_name #ty_generics #where_clause {
            fn field_value(&self, field: &str) -> ::gridwork_query::Value<'_> {
                match field {
                    #(#field_matches)*
                    _ => ::gridwork_query::Value::None,
                }
            }

            #identity_fn

            fn row_fingerprint(&self) -> ::std::string::String {
                #fingerprint_body
            }
        }
    };

    Ok(expanded)
}

/// Builds the expression reading one field as a `Value`.
///
/// `Option<T>` fields map `None` to a missing value.
fn value_expr(kind: FieldKind, field_name: &syn::Ident, optional: bool) -> TokenStream {
    match (kind, optional) {
        (FieldKind::String, false) => quote! {
            ::gridwork_query::Value::from(&*self.#field_name)
        },
        (FieldKind::String, true) => quote! {
            ::gridwork_query::Value::from(self.#field_name.as_deref())
        },
        (FieldKind::Number, false) => quote! {
            ::gridwork_query::Value::Number(::gridwork_query::Number::from(self.#field_name))
        },
        (FieldKind::Number, true) => quote! {
            ::gridwork_query::Value::from(self.#field_name.map(::gridwork_query::Number::from))
        },
        (FieldKind::Timestamp, false) => quote! {
            ::gridwork_query::Value::Timestamp(
                ::gridwork_query::GridTimestamp::grid_timestamp(&self.#field_name)
            )
        },
        (FieldKind::Timestamp, true) => quote! {
            ::gridwork_query::Value::from(
                self.#field_name
                    .as_ref()
                    .map(::gridwork_query::GridTimestamp::grid_timestamp)
            )
        },
        (FieldKind::Bool, false) => quote! {
            ::gridwork_query::Value::Bool(self.#field_name)
        },
        (FieldKind::Bool, true) => quote! {
            ::gridwork_query::Value::from(self.#field_name)
        },
    }
}

/// Returns `true` if the type is spelled `Option<T>` (or a path ending in it).
fn is_option(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    let Some(last) = path.path.segments.last() else {
        return false;
    };
    if last.ident != "Option" {
        return false;
    }
    match &last.arguments {
        PathArguments::AngleBracketed(args) => {
            args.args.len() == 1 && matches!(args.args.first(), Some(GenericArgument::Type(_)))
        }
        _ => false,
    }
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' || c == '.' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = true;
        }
    }

    result
}
