//! Declarative query form.
//!
//! A [`Query`] describes which records match in terms of named fields. Its
//! selection methods run the same operations as [`select`](crate::select),
//! with the query itself as the predicate.

use regex::Regex;

use crate::clause::{Clause, ClauseValue};
use crate::error::{QueryError, Result};
use crate::op::Op;
use crate::select;
use crate::value::Value;

/// A set of field clauses used as a selection predicate.
///
/// Clauses fall into three groups that combine with fixed logic:
///
/// ```text
/// match = (all AND clauses match)
///       ∧ (at least one OR clause matches, OR no OR clauses exist)
///       ∧ (no NOT clause matches)
/// ```
///
/// An empty query matches every record.
///
/// # Example
///
/// ```
/// use selector::{Number, Query, SelectError, Value};
///
/// struct Product {
///     id: i64,
///     color: &'static str,
/// }
///
/// fn accessor<'a>(p: &'a Product, field: &str) -> Value<'a> {
///     match field {
///         "id" => Value::Number(Number::I64(p.id)),
///         "color" => Value::String(p.color),
///         _ => Value::None,
///     }
/// }
///
/// let products = vec![
///     Product { id: 1, color: "Red" },
///     Product { id: 2, color: "Blue" },
///     Product { id: 3, color: "Red" },
/// ];
///
/// let red = Query::new().and_eq("color", "Red");
/// assert_eq!(red.first(&products, accessor).map(|p| p.id), Ok(1));
/// assert_eq!(red.last(&products, accessor).map(|p| p.id), Ok(3));
/// assert_eq!(
///     red.single(&products, accessor).map(|p| p.id),
///     Err(SelectError::MultipleMatches)
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    and_clauses: Vec<Clause>,
    or_clauses: Vec<Clause>,
    not_clauses: Vec<Clause>,
}

impl Query {
    /// Creates an empty query, which matches every record.
    pub fn new() -> Self {
        Query::default()
    }

    // ------------------------------------------------------------------
    // Clause builders
    // ------------------------------------------------------------------

    /// Adds a clause that every match must satisfy.
    pub fn and(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.and_clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds a clause to the OR group, of which at least one must hold.
    pub fn or(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.or_clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds a clause that no match may satisfy.
    pub fn not(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.not_clauses.push(Clause::new(field, op, value));
        self
    }

    /// Like [`Query::and`], but rejects an operator that cannot apply to
    /// `value`. See [`Clause::try_new`].
    pub fn try_and(
        mut self,
        field: &str,
        op: Op,
        value: impl Into<ClauseValue>,
    ) -> std::result::Result<Self, QueryError> {
        self.and_clauses.push(Clause::try_new(field, op, value)?);
        Ok(self)
    }

    /// Like [`Query::or`], but rejects an ill-typed clause.
    pub fn try_or(
        mut self,
        field: &str,
        op: Op,
        value: impl Into<ClauseValue>,
    ) -> std::result::Result<Self, QueryError> {
        self.or_clauses.push(Clause::try_new(field, op, value)?);
        Ok(self)
    }

    /// Like [`Query::not`], but rejects an ill-typed clause.
    pub fn try_not(
        mut self,
        field: &str,
        op: Op,
        value: impl Into<ClauseValue>,
    ) -> std::result::Result<Self, QueryError> {
        self.not_clauses.push(Clause::try_new(field, op, value)?);
        Ok(self)
    }

    pub fn and_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Eq, value)
    }

    pub fn and_ne(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Ne, value)
    }

    pub fn and_gt(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Gt, value)
    }

    pub fn and_gte(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Gte, value)
    }

    pub fn and_lt(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Lt, value)
    }

    pub fn and_lte(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Lte, value)
    }

    pub fn and_contains(self, field: &str, value: &str) -> Self {
        self.and(field, Op::Contains, value)
    }

    pub fn and_startswith(self, field: &str, value: &str) -> Self {
        self.and(field, Op::StartsWith, value)
    }

    pub fn and_endswith(self, field: &str, value: &str) -> Self {
        self.and(field, Op::EndsWith, value)
    }

    /// Adds an AND regex clause.
    ///
    /// The pattern is compiled here; an invalid pattern is an error.
    pub fn and_regex(self, field: &str, pattern: &str) -> std::result::Result<Self, QueryError> {
        self.try_and(field, Op::Regex, Regex::new(pattern)?)
    }

    pub fn or_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.or(field, Op::Eq, value)
    }

    pub fn or_contains(self, field: &str, value: &str) -> Self {
        self.or(field, Op::Contains, value)
    }

    pub fn or_regex(self, field: &str, pattern: &str) -> std::result::Result<Self, QueryError> {
        self.try_or(field, Op::Regex, Regex::new(pattern)?)
    }

    pub fn not_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.not(field, Op::Eq, value)
    }

    pub fn not_contains(self, field: &str, value: &str) -> Self {
        self.not(field, Op::Contains, value)
    }

    pub fn not_regex(self, field: &str, pattern: &str) -> std::result::Result<Self, QueryError> {
        self.try_not(field, Op::Regex, Regex::new(pattern)?)
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    pub fn and_clauses(&self) -> &[Clause] {
        &self.and_clauses
    }

    pub fn or_clauses(&self) -> &[Clause] {
        &self.or_clauses
    }

    pub fn not_clauses(&self) -> &[Clause] {
        &self.not_clauses
    }

    /// Returns `true` if the query has no clauses and so matches everything.
    pub fn is_empty(&self) -> bool {
        self.and_clauses.is_empty() && self.or_clauses.is_empty() && self.not_clauses.is_empty()
    }

    // ------------------------------------------------------------------
    // Execution
    // ------------------------------------------------------------------

    /// Tests a single record against the query.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let holds = |clause: &Clause| clause.matches(&accessor(item, &clause.field));

        self.and_clauses.iter().all(holds)
            && (self.or_clauses.is_empty() || self.or_clauses.iter().any(holds))
            && !self.not_clauses.iter().any(holds)
    }

    /// Counts the matching records.
    pub fn count<T, F>(&self, items: &[T], accessor: F) -> usize
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .count()
    }

    /// First matching record. See [`select::first`].
    pub fn first<'a, T, F>(&self, items: &'a [T], accessor: F) -> Result<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        select::first(items, |item| self.matches(*item, &accessor))
    }

    /// First matching record or `fallback`. See [`select::first_or_default`].
    pub fn first_or_default<'a, T, F>(
        &self,
        items: &'a [T],
        accessor: F,
        fallback: Option<&'a T>,
    ) -> Option<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        select::first_or_default(items, |item| self.matches(*item, &accessor), fallback)
    }

    /// Last matching record. See [`select::last`].
    pub fn last<'a, T, F>(&self, items: &'a [T], accessor: F) -> Result<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        select::last(items, |item| self.matches(*item, &accessor))
    }

    /// Last matching record or `fallback`. See [`select::last_or_default`].
    pub fn last_or_default<'a, T, F>(
        &self,
        items: &'a [T],
        accessor: F,
        fallback: Option<&'a T>,
    ) -> Option<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        select::last_or_default(items, |item| self.matches(*item, &accessor), fallback)
    }

    /// The only matching record. See [`select::single`].
    pub fn single<'a, T, F>(&self, items: &'a [T], accessor: F) -> Result<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        select::single(items, |item| self.matches(*item, &accessor))
    }

    /// The only matching record or `fallback`. See [`select::single_or_default`].
    pub fn single_or_default<'a, T, F>(
        &self,
        items: &'a [T],
        accessor: F,
        fallback: Option<&'a T>,
    ) -> Result<Option<&'a T>>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        select::single_or_default(items, |item| self.matches(*item, &accessor), fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SelectError;
    use crate::value::Number;

    #[derive(Debug, Clone, PartialEq)]
    struct Product {
        id: i64,
        name: &'static str,
        color: Option<&'static str>,
        list_price: f64,
    }

    fn accessor<'a>(p: &'a Product, field: &str) -> Value<'a> {
        match field {
            "id" => Value::Number(Number::I64(p.id)),
            "name" => Value::String(p.name),
            "color" => Value::from(p.color),
            "list_price" => Value::Number(Number::F64(p.list_price)),
            _ => Value::None,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                id: 680,
                name: "HL Road Frame - Black, 58",
                color: Some("Black"),
                list_price: 1431.50,
            },
            Product {
                id: 706,
                name: "HL Road Frame - Red, 58",
                color: Some("Red"),
                list_price: 1431.50,
            },
            Product {
                id: 707,
                name: "Sport-100 Helmet, Red",
                color: Some("Red"),
                list_price: 34.99,
            },
            Product {
                id: 709,
                name: "Mountain Bike Socks, M",
                color: Some("White"),
                list_price: 9.50,
            },
            Product {
                id: 712,
                name: "AWC Logo Cap",
                color: None,
                list_price: 8.99,
            },
        ]
    }

    #[test]
    fn empty_query_matches_everything() {
        let products = catalog();
        let query = Query::new();

        assert!(query.is_empty());
        assert_eq!(query.count(&products, accessor), products.len());
        assert_eq!(query.first(&products, accessor), Ok(&products[0]));
        assert_eq!(query.last(&products, accessor), Ok(&products[4]));
    }

    #[test]
    fn first_and_last_red() {
        let products = catalog();
        let red = Query::new().and_eq("color", "Red");

        assert_eq!(red.first(&products, accessor).map(|p| p.id), Ok(706));
        assert_eq!(red.last(&products, accessor).map(|p| p.id), Ok(707));
    }

    #[test]
    fn single_by_id() {
        let products = catalog();
        let query = Query::new().and_eq("id", 706i64);

        assert_eq!(query.single(&products, accessor).map(|p| p.id), Ok(706));
        assert_eq!(
            query.single_or_default(&products, accessor, None),
            Ok(Some(&products[1]))
        );
    }

    #[test]
    fn single_with_duplicates_fails_even_with_fallback() {
        let products = catalog();
        let fallback = products[0].clone();
        let red = Query::new().and_eq("color", "Red");

        assert_eq!(
            red.single(&products, accessor),
            Err(SelectError::MultipleMatches)
        );
        assert_eq!(
            red.single_or_default(&products, accessor, Some(&fallback)),
            Err(SelectError::MultipleMatches)
        );
    }

    #[test]
    fn or_default_without_match() {
        let products = catalog();
        let brown = Query::new().and_eq("color", "Brown");
        let not_found = Product {
            id: -1,
            name: "NOT FOUND",
            color: None,
            list_price: 0.0,
        };

        assert_eq!(brown.first(&products, accessor), Err(SelectError::NotFound));
        assert_eq!(
            brown.first_or_default(&products, accessor, Some(&not_found)),
            Some(&not_found)
        );
        assert_eq!(brown.last_or_default(&products, accessor, None), None);
        assert_eq!(brown.single_or_default(&products, accessor, None), Ok(None));
    }

    #[test]
    fn or_group_needs_one_match() {
        let products = catalog();
        let query = Query::new()
            .or_eq("color", "White")
            .or_contains("name", "Cap");

        assert_eq!(query.count(&products, accessor), 2);
        assert_eq!(query.first(&products, accessor).map(|p| p.id), Ok(709));
    }

    #[test]
    fn not_group_excludes() {
        let products = catalog();
        let query = Query::new()
            .and_contains("name", "HL Road Frame")
            .not_eq("color", "Black");

        assert_eq!(query.single(&products, accessor).map(|p| p.id), Ok(706));
    }

    #[test]
    fn missing_field_fails_positive_and_negative_clauses() {
        let products = catalog();

        // The cap has no color, so neither clause holds for it.
        let eq = Query::new().and_eq("color", "Red");
        let ne = Query::new().and_ne("color", "Red");
        assert!(!eq.matches(&products[4], accessor));
        assert!(!ne.matches(&products[4], accessor));
    }

    #[test]
    fn numeric_range() {
        let products = catalog();
        let cheap = Query::new()
            .and_gte("list_price", 9.0f64)
            .and_lt("list_price", 100i64);

        assert_eq!(cheap.count(&products, accessor), 2);
        assert_eq!(cheap.last(&products, accessor).map(|p| p.id), Ok(709));
    }

    #[test]
    fn regex_clauses() {
        let products = catalog();
        let query = Query::new()
            .and_regex("name", r", \d+$")
            .unwrap()
            .not_regex("name", "Black")
            .unwrap();

        assert_eq!(query.single(&products, accessor).map(|p| p.id), Ok(706));
    }

    #[test]
    fn shorthand_builders() {
        let products = catalog();
        let frames = Query::new()
            .and_startswith("name", "HL Road")
            .and_endswith("name", ", 58")
            .and_gt("id", 700i64)
            .and_lte("list_price", 1431.5f64);
        assert_eq!(frames.single(&products, accessor).map(|p| p.id), Ok(706));

        let socks_or_cap = Query::new()
            .or_regex("name", "^Mountain")
            .unwrap()
            .or_eq("id", 712i64);
        assert_eq!(socks_or_cap.count(&products, accessor), 2);
    }

    #[test]
    fn invalid_regex_is_an_error() {
        let result = Query::new().and_regex("name", "(unclosed");
        assert!(matches!(result, Err(QueryError::InvalidRegex(_))));
    }

    #[test]
    fn checked_builders_reject_ill_typed_clauses() {
        let result = Query::new().try_and("list_price", Op::Contains, 9.5f64);
        assert!(matches!(
            result,
            Err(QueryError::InvalidOperatorForType {
                op: Op::Contains,
                value_type: "number",
                ..
            })
        ));

        assert!(Query::new().try_or("color", Op::Lt, "Red").is_err());
        assert!(Query::new().try_not("discontinued", Op::Gte, true).is_err());
    }

    #[test]
    fn checked_builders_select_like_unchecked_ones() {
        let products = catalog();
        let checked = Query::new()
            .try_and("list_price", Op::Gt, 30i64)
            .unwrap()
            .try_or("color", Op::Eq, "Red")
            .unwrap()
            .try_not("name", Op::Contains, "Helmet")
            .unwrap();

        assert_eq!(checked.single(&products, accessor).map(|p| p.id), Ok(706));
        assert_eq!(checked.and_clauses()[0].op, Op::Gt);
    }

    #[test]
    fn introspection() {
        let query = Query::new()
            .and_eq("color", "Red")
            .or_eq("id", 706i64)
            .not_contains("name", "Helmet");

        assert_eq!(query.and_clauses().len(), 1);
        assert_eq!(query.or_clauses().len(), 1);
        assert_eq!(query.not_clauses().len(), 1);
        assert_eq!(query.and_clauses()[0].op, Op::Eq);
        assert!(!query.is_empty());
    }

    #[test]
    fn repeated_selection_is_stable() {
        let products = catalog();
        let red = Query::new().and_eq("color", "Red");

        assert_eq!(red.first(&products, accessor), red.first(&products, accessor));
        assert_eq!(red.single(&products, accessor), red.single(&products, accessor));
    }
}
