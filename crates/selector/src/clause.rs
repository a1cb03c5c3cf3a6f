//! Single field predicates.
//!
//! A [`Clause`] names a field, an operator and the value to compare against.

use regex::Regex;

use crate::error::QueryError;
use crate::op::Op;
use crate::value::{Number, Value};

/// A single field predicate.
///
/// ```
/// use selector::{Clause, Op, Value};
///
/// let clause = Clause::new("color", Op::Eq, "Red");
/// assert!(clause.matches(&Value::String("Red")));
/// assert!(!clause.matches(&Value::None));
/// ```
#[derive(Debug, Clone)]
pub struct Clause {
    /// The field name to compare.
    pub field: String,
    /// The comparison operator.
    pub op: Op,
    /// The value to compare against.
    pub value: ClauseValue,
}

impl Clause {
    /// Creates a new clause.
    pub fn new(field: impl Into<String>, op: Op, value: impl Into<ClauseValue>) -> Self {
        Clause {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Creates a clause, rejecting an operator that cannot apply to `value`.
    ///
    /// [`Clause::new`] accepts any combination; an ill-typed clause simply
    /// never matches.
    ///
    /// ```
    /// use selector::{Clause, Op, QueryError};
    ///
    /// assert!(Clause::try_new("id", Op::Gt, 700i64).is_ok());
    /// assert!(matches!(
    ///     Clause::try_new("name", Op::Gt, "HL"),
    ///     Err(QueryError::InvalidOperatorForType { .. })
    /// ));
    /// ```
    pub fn try_new(
        field: impl Into<String>,
        op: Op,
        value: impl Into<ClauseValue>,
    ) -> Result<Self, QueryError> {
        let clause = Clause::new(field, op, value);
        if clause.value.accepts(op) {
            Ok(clause)
        } else {
            Err(QueryError::InvalidOperatorForType {
                field: clause.field,
                op,
                value_type: clause.value.type_name(),
            })
        }
    }

    /// Evaluates this clause against a field value.
    ///
    /// A missing field or a value of the wrong kind never matches, whatever
    /// the operator.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        match (&self.value, field_value) {
            (ClauseValue::String(expected), Value::String(actual)) => {
                self.match_string(actual, expected)
            }
            (ClauseValue::Regex(regex), Value::String(actual)) => {
                self.op == Op::Regex && regex.is_match(actual)
            }
            (ClauseValue::Number(expected), Value::Number(actual)) => actual
                .compare(*expected)
                .is_some_and(|ordering| self.op.eval_ordering(ordering)),
            (ClauseValue::Bool(expected), Value::Bool(actual)) => match self.op.normalize() {
                Op::Eq => actual == expected,
                Op::Ne => actual != expected,
                _ => false,
            },
            _ => false,
        }
    }

    fn match_string(&self, actual: &str, expected: &str) -> bool {
        match self.op.normalize() {
            Op::Eq => actual == expected,
            Op::Ne => actual != expected,
            Op::StartsWith => actual.starts_with(expected),
            Op::EndsWith => actual.ends_with(expected),
            Op::Contains => actual.contains(expected),
            _ => false,
        }
    }
}

/// Owned comparison value stored in a [`Clause`].
#[derive(Debug, Clone)]
pub enum ClauseValue {
    /// String value.
    String(String),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// Compiled regular expression.
    Regex(Regex),
}

impl ClauseValue {
    /// Returns `true` if `op` can be evaluated against this value.
    pub fn accepts(&self, op: Op) -> bool {
        match self {
            ClauseValue::String(_) => op.is_string_op() && op != Op::Regex,
            ClauseValue::Number(_) => op.is_number_op(),
            ClauseValue::Bool(_) => op.is_bool_op(),
            ClauseValue::Regex(_) => op == Op::Regex,
        }
    }

    /// Name of the value kind, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ClauseValue::String(_) => "string",
            ClauseValue::Number(_) => "number",
            ClauseValue::Bool(_) => "bool",
            ClauseValue::Regex(_) => "regex",
        }
    }
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::String(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::String(s.to_owned())
    }
}

impl From<bool> for ClauseValue {
    fn from(b: bool) -> Self {
        ClauseValue::Bool(b)
    }
}

impl From<Regex> for ClauseValue {
    fn from(r: Regex) -> Self {
        ClauseValue::Regex(r)
    }
}

impl From<Number> for ClauseValue {
    fn from(n: Number) -> Self {
        ClauseValue::Number(n)
    }
}

macro_rules! clause_value_from_number {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for ClauseValue {
                fn from(n: $ty) -> Self {
                    ClauseValue::Number(Number::from(n))
                }
            }
        )+
    };
}

clause_value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
