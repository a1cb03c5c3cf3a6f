//! Proc macros for Selector.
//!
//! - [`Selectable`] - derive named field access for the `selector` query form

mod selectable;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `selector::Selectable` for a struct with named fields.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `String` | `String`, `&str` or `Option<String>` field; `None` reads as a missing value |
/// | `Number` | Any primitive numeric field |
/// | `Bool` | Boolean field |
/// | `skip` | Exclude this field from queries |
/// | `rename = "..."` | Use a custom name for queries |
///
/// Fields without a `#[select(...)]` attribute are not queryable.
///
/// # Generated Code
///
/// 1. Field name constants (e.g. `Product::ID`, `Product::COLOR`)
/// 2. An implementation of `Selectable::select_field()`
///
/// # Example
///
/// ```ignore
/// use selector::{Query, Selectable};
/// use selector_macros::Selectable;
///
/// #[derive(Selectable)]
/// struct Product {
///     #[select(Number)]
///     id: i64,
///
///     #[select(String)]
///     color: Option<String>,
///
///     #[select(Number, rename = "price")]
///     list_price: f64,
/// }
///
/// let last_red = Query::new()
///     .and_eq(Product::COLOR, "Red")
///     .and_lt(Product::PRICE, 100.0)
///     .last(&products, Product::accessor)?;
/// ```
#[proc_macro_derive(Selectable, attributes(select))]
pub fn selectable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    selectable::selectable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
