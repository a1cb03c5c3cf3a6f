//! Field access for the query form.
//!
//! [`Selectable`] is what `#[derive(Selectable)]` from `selector-macros`
//! implements; it can also be written by hand.

use crate::value::Value;

/// Records whose fields can be read by name.
///
/// # Derive Usage
///
/// ```ignore
/// use selector::{Query, Selectable};
/// use selector_macros::Selectable;
///
/// #[derive(Selectable)]
/// struct Product {
///     #[select(Number)]
///     id: i64,
///     #[select(String)]
///     name: String,
///     #[select(String)]
///     color: Option<String>,
/// }
///
/// let product = Query::new()
///     .and_eq(Product::ID, 706)
///     .single(&products, Product::accessor)?;
/// ```
///
/// # Manual Implementation
///
/// ```
/// use selector::{Number, Selectable, Value};
///
/// struct Product {
///     id: i64,
///     name: String,
/// }
///
/// impl Selectable for Product {
///     fn select_field(&self, field: &str) -> Value<'_> {
///         match field {
///             "id" => Value::Number(Number::I64(self.id)),
///             "name" => Value::String(&self.name),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Selectable {
    /// Returns the value of `field`, or [`Value::None`] if the record has no
    /// such queryable field.
    fn select_field(&self, field: &str) -> Value<'_>;

    /// Accessor function for the [`Query`](crate::Query) execution methods.
    ///
    /// ```ignore
    /// let first_red = query.first(&products, Product::accessor)?;
    /// ```
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.select_field(field)
    }
}

/// Conversion of a field into a [`Value`].
///
/// Used by the derive macro so that `String`, `&str` and `Option<String>`
/// fields all map onto [`Value::String`] / [`Value::None`].
pub trait AsFieldStr {
    /// Borrows the field as a string, `None` when absent.
    fn as_field_str(&self) -> Option<&str>;
}

impl AsFieldStr for String {
    fn as_field_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl AsFieldStr for &str {
    fn as_field_str(&self) -> Option<&str> {
        Some(*self)
    }
}

impl AsFieldStr for Option<String> {
    fn as_field_str(&self) -> Option<&str> {
        self.as_deref()
    }
}
