//! Attribute parsing for the GridRow derive macro.
//!
//! This module provides parsers for the `#[grid(...)]` field attributes
//! used by the `GridRow` derive macro.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Ident, Lit, Meta, Result, Token,
};

/// The value kind a row field exposes to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Text field: `#[grid(String)]`
    String,
    /// Number field: `#[grid(Number)]`
    Number,
    /// Timestamp field: `#[grid(Timestamp)]`
    Timestamp,
    /// Boolean field: `#[grid(Bool)]`
    Bool,
}

impl FieldKind {
    fn parse_name(name: &str, span: Span) -> Result<Self> {
        match name {
            "String" | "string" | "text" => Ok(FieldKind::String),
            "Number" | "number" => Ok(FieldKind::Number),
            "Timestamp" | "timestamp" => Ok(FieldKind::Timestamp),
            "Bool" | "boolean" | "bool" => Ok(FieldKind::Bool),
            other => Err(Error::new(
                span,
                format!(
                    "unknown grid type: '{}'. Expected one of: String, Number, Timestamp, Bool",
                    other
                ),
            )),
        }
    }

    /// Parse a field kind from an identifier.
    pub fn from_ident(ident: &Ident) -> Result<Self> {
        Self::parse_name(&ident.to_string(), ident.span())
    }

    /// Parse a field kind from a string literal.
    pub fn from_str(s: &str, span: Span) -> Result<Self> {
        Self::parse_name(s, span)
    }
}

/// Field-level attributes from `#[grid(...)]`.
#[derive(Debug, Clone)]
pub struct GridAttr {
    /// The value kind of this field.
    pub kind: Option<FieldKind>,
    /// Leave this field out of the row.
    pub skip: bool,
    /// This field is the row identity.
    pub id: bool,
    /// Custom field id (default: field name).
    pub rename: Option<String>,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for GridAttr {
    fn default() -> Self {
        GridAttr {
            kind: None,
            skip: false,
            id: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

fn string_literal(value: &syn::Expr, what: &str) -> Result<syn::LitStr> {
    if let syn::Expr::Lit(syn::ExprLit {
        lit: Lit::Str(s), ..
    }) = value
    {
        Ok(s.clone())
    } else {
        Err(Error::new(
            value.span(),
            format!("{} must be a string literal", what),
        ))
    }
}

impl Parse for GridAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = GridAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) => {
                    if p.is_ident("skip") {
                        attr.skip = true;
                    } else if p.is_ident("id") {
                        attr.id = true;
                    } else if let Some(ident) = p.get_ident() {
                        attr.kind = Some(FieldKind::from_ident(ident)?);
                        attr.span = ident.span();
                    } else {
                        return Err(Error::new(
                            p.span(),
                            "expected grid type: String, Number, Timestamp, Bool, id, or skip",
                        ));
                    }
                }

                Meta::NameValue(nv) => {
                    if nv.path.is_ident("rename") {
                        attr.rename = Some(string_literal(&nv.value, "rename")?.value());
                    } else if nv.path.is_ident("ty") {
                        let s = string_literal(&nv.value, "ty")?;
                        attr.kind = Some(FieldKind::from_str(&s.value(), s.span())?);
                        attr.span = s.span();
                    } else {
                        return Err(Error::new(
                            nv.path.span(),
                            "unknown attribute. Expected: rename or ty",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown grid attribute. Expected: String, Number, Timestamp, Bool, id, skip, rename = \"...\", or ty = \"...\"",
                    ));
                }
            }
        }

        if attr.id && attr.kind.is_none() && !attr.skip {
            return Err(Error::new(
                attr.span,
                "an id field needs a grid type, e.g. #[grid(String, id)]",
            ));
        }

        Ok(attr)
    }
}

/// Extract `#[grid(...)]` attributes from a field's attributes.
pub fn parse_grid_attrs(attrs: &[Attribute]) -> Result<GridAttr> {
    for attr in attrs {
        if attr.path().is_ident("grid") {
            return attr.parse_args::<GridAttr>();
        }
    }
    Ok(GridAttr::default())
}
