//! Selector - pick exactly one element out of a collection.
//!
//! Six operations select a single element under different existence and
//! uniqueness contracts:
//!
//! | Operation | No match | Several matches |
//! |-----------|----------|-----------------|
//! | `first` | [`SelectError::NotFound`] | first one |
//! | `first_or_default` | fallback | first one |
//! | `last` | [`SelectError::NotFound`] | last one |
//! | `last_or_default` | fallback | last one |
//! | `single` | [`SelectError::NotFound`] | [`SelectError::MultipleMatches`] |
//! | `single_or_default` | fallback | [`SelectError::MultipleMatches`] |
//!
//! A fallback is an `Option<T>`: the or-default operations return the match,
//! else the fallback if one was given, else `None`.
//!
//! Each operation is available in three spellings that share one
//! implementation:
//!
//! - free functions in [`select`], taking any `IntoIterator` and a closure
//! - methods on any `IntoIterator` through [`SelectExt`]
//! - methods on a declarative [`Query`] over named record fields
//!
//! # Quick Start
//!
//! ```rust
//! use selector::{Number, Query, SelectError, SelectExt, Value};
//!
//! struct Product {
//!     id: i64,
//!     color: String,
//! }
//!
//! fn accessor<'a>(p: &'a Product, field: &str) -> Value<'a> {
//!     match field {
//!         "id" => Value::Number(Number::I64(p.id)),
//!         "color" => Value::String(&p.color),
//!         _ => Value::None,
//!     }
//! }
//!
//! let products = vec![
//!     Product { id: 1, color: "Red".into() },
//!     Product { id: 2, color: "Blue".into() },
//!     Product { id: 3, color: "Red".into() },
//! ];
//!
//! // Method form
//! let first_red = products.iter().select_first(|p| p.color == "Red").unwrap();
//! assert_eq!(first_red.id, 1);
//!
//! // Query form
//! let last_red = Query::new()
//!     .and_eq("color", "Red")
//!     .last(&products, accessor)
//!     .unwrap();
//! assert_eq!(last_red.id, 3);
//!
//! // Uniqueness is checked
//! let only_red = products.iter().select_single(|p| p.color == "Red");
//! assert_eq!(only_red.err(), Some(SelectError::MultipleMatches));
//! ```
//!
//! # Query Semantics
//!
//! ```text
//! match = (all AND clauses match)
//!       ∧ (at least one OR clause matches, OR no OR clauses exist)
//!       ∧ (no NOT clause matches)
//! ```
//!
//! | Field type | Operators |
//! |------------|-----------|
//! | String | `Eq`, `Ne`, `StartsWith`, `EndsWith`, `Contains`, `Regex` |
//! | Number | `Eq`, `Ne`, `Gt`, `Gte`, `Lt`, `Lte` |
//! | Bool | `Eq`, `Ne`, `Is` |
//!
//! A field the accessor reports as [`Value::None`] matches no clause.

mod clause;
mod error;
mod ext;
mod op;
mod query;
pub mod select;
mod traits;
mod value;

pub use clause::{Clause, ClauseValue};
pub use error::{QueryError, Result, SelectError};
pub use ext::SelectExt;
pub use op::Op;
pub use query::Query;
pub use select::{first, first_or_default, last, last_or_default, single, single_or_default};
pub use traits::{AsFieldStr, Selectable};
pub use value::{Number, Value};
