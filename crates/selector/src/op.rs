//! Comparison operators for query clauses.

use std::cmp::Ordering;

/// Comparison operator for a query clause.
///
/// - **Universal**: `Eq`, `Ne`
/// - **String**: `StartsWith`, `EndsWith`, `Contains`, `Regex`
/// - **Numeric**: `Gt`, `Gte`, `Lt`, `Lte`
/// - **Bool alias**: `Is` (same as `Eq`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// String starts with prefix.
    StartsWith,
    /// String ends with suffix.
    EndsWith,
    /// String contains substring.
    Contains,
    /// String matches regular expression.
    Regex,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// Alias for `Eq`, reads naturally on flags.
    Is,
}

impl Op {
    /// Returns `true` if this operator applies to string fields.
    pub fn is_string_op(self) -> bool {
        matches!(
            self,
            Op::Eq | Op::Ne | Op::StartsWith | Op::EndsWith | Op::Contains | Op::Regex
        )
    }

    /// Returns `true` if this operator applies to numeric fields.
    pub fn is_number_op(self) -> bool {
        matches!(self, Op::Eq | Op::Ne | Op::Gt | Op::Gte | Op::Lt | Op::Lte)
    }

    /// Returns `true` if this operator applies to boolean fields.
    pub fn is_bool_op(self) -> bool {
        matches!(self, Op::Eq | Op::Ne | Op::Is)
    }

    /// Maps aliases to their canonical operator (`Is` -> `Eq`).
    pub fn normalize(self) -> Op {
        match self {
            Op::Is => Op::Eq,
            other => other,
        }
    }

    /// Evaluates an ordering-based operator against a comparison result.
    ///
    /// String-only operators always evaluate to `false`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self.normalize() {
            Op::Eq => ordering.is_eq(),
            Op::Ne => ordering.is_ne(),
            Op::Gt => ordering.is_gt(),
            Op::Gte => ordering.is_ge(),
            Op::Lt => ordering.is_lt(),
            Op::Lte => ordering.is_le(),
            _ => false,
        }
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::StartsWith => "startswith",
            Op::EndsWith => "endswith",
            Op::Contains => "contains",
            Op::Regex => "regex",
            Op::Gt => "gt",
            Op::Gte => "gte",
            Op::Lt => "lt",
            Op::Lte => "lte",
            Op::Is => "is",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
