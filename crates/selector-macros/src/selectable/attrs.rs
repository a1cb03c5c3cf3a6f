//! Parsing of `#[select(...)]` field attributes.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Expr, ExprLit, Ident, Lit, Meta, Result, Token,
};

/// Kind of value a field exposes to queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `#[select(String)]`: `String`, `&str` or `Option<String>`.
    String,
    /// `#[select(Number)]`: any primitive numeric type.
    Number,
    /// `#[select(Bool)]`
    Bool,
}

impl FieldKind {
    fn from_ident(ident: &Ident) -> Result<Self> {
        match ident.to_string().as_str() {
            "String" | "string" => Ok(FieldKind::String),
            "Number" | "number" => Ok(FieldKind::Number),
            "Bool" | "bool" | "boolean" => Ok(FieldKind::Bool),
            other => Err(Error::new(
                ident.span(),
                format!(
                    "unknown select kind: '{}'. Expected one of: String, Number, Bool",
                    other
                ),
            )),
        }
    }
}

/// Parsed `#[select(...)]` attribute.
#[derive(Debug, Clone, Default)]
pub struct SelectAttr {
    pub kind: Option<FieldKind>,
    pub skip: bool,
    /// Query name, defaults to the field name.
    pub rename: Option<String>,
}

impl Parse for SelectAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = SelectAttr::default();
        let metas: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in metas {
            match &meta {
                Meta::Path(path) if path.is_ident("skip") => attr.skip = true,
                Meta::Path(path) => {
                    let ident = path.get_ident().ok_or_else(|| {
                        Error::new(path.span(), "expected String, Number, Bool or skip")
                    })?;
                    if attr.kind.is_some() {
                        return Err(Error::new(ident.span(), "select kind given twice"));
                    }
                    attr.kind = Some(FieldKind::from_ident(ident)?);
                }
                Meta::NameValue(nv) if nv.path.is_ident("rename") => match &nv.value {
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(s), ..
                    }) => attr.rename = Some(s.value()),
                    other => {
                        return Err(Error::new(other.span(), "rename must be a string literal"))
                    }
                },
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown select attribute. Expected: String, Number, Bool, skip, or rename = \"...\"",
                    ))
                }
            }
        }

        Ok(attr)
    }
}

/// Reads the `#[select(...)]` attribute of a field, if any.
pub fn parse_select_attrs(attrs: &[Attribute]) -> Result<SelectAttr> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident("select"))
        .map_or_else(|| Ok(SelectAttr::default()), |attr| attr.parse_args())
}
