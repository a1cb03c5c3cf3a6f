//! Field values seen by the query form.
//!
//! A [`Value`] is what an accessor hands back for a named field of a record.
//! It borrows from the record, so extracting it never allocates.

use std::cmp::Ordering;

/// Runtime value of a record field, borrowed from the record.
///
/// # Example
///
/// ```
/// use selector::{Number, Value};
///
/// struct Product {
///     id: i64,
///     name: String,
///     color: Option<String>,
/// }
///
/// fn accessor<'a>(product: &'a Product, field: &str) -> Value<'a> {
///     match field {
///         "id" => Value::Number(Number::I64(product.id)),
///         "name" => Value::String(&product.name),
///         "color" => product.color.as_deref().map_or(Value::None, Value::String),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// Field absent, null, or not queryable.
    None,
}

impl<'a> From<Option<&'a str>> for Value<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Value::None, Value::String)
    }
}

/// Numeric value.
///
/// Signed, unsigned and floating point values keep their own variant.
/// Comparison across variants is exact: integers are never rounded through
/// `f64`, and NaN is unordered and unequal to everything.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Compares two numbers. `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            (Number::I64(a), Number::U64(b)) => Some(compare_signed_unsigned(a, b)),
            (Number::U64(a), Number::I64(b)) => Some(compare_signed_unsigned(b, a).reverse()),
            (Number::I64(a), Number::F64(b)) => compare_signed_float(a, b),
            (Number::F64(a), Number::I64(b)) => compare_signed_float(b, a).map(Ordering::reverse),
            (Number::U64(a), Number::F64(b)) => compare_unsigned_float(a, b),
            (Number::F64(a), Number::U64(b)) => compare_unsigned_float(b, a).map(Ordering::reverse),
        }
    }
}

/// 2^63, the first float above `i64::MAX`.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
/// 2^64, the first float above `u64::MAX`.
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

fn compare_signed_unsigned(signed: i64, unsigned: u64) -> Ordering {
    match u64::try_from(signed) {
        Ok(signed) => signed.cmp(&unsigned),
        Err(_) => Ordering::Less,
    }
}

fn compare_signed_float(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= TWO_POW_63 {
        return Some(Ordering::Less);
    }
    if float < -TWO_POW_63 {
        return Some(Ordering::Greater);
    }
    // |trunc| <= 2^63 here, and -2^63 is representable, so the cast is exact.
    let whole = float.trunc() as i64;
    Some(int.cmp(&whole).then_with(|| fraction_ordering(float)))
}

fn compare_unsigned_float(int: u64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= TWO_POW_64 {
        return Some(Ordering::Less);
    }
    if float <= -1.0 {
        return Some(Ordering::Greater);
    }
    let whole = float.trunc() as u64;
    Some(int.cmp(&whole).then_with(|| fraction_ordering(float)))
}

/// Ordering of an integer against a float with the same whole part.
fn fraction_ordering(float: f64) -> Ordering {
    let fract = float.fract();
    if fract > 0.0 {
        Ordering::Less
    } else if fract < 0.0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(*other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

macro_rules! number_from {
    ($variant:ident as $wide:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n as $wide)
                }
            }
        )+
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_strings_map_to_none() {
        assert_eq!(Value::from(Some("Black")), Value::String("Black"));
        assert_eq!(Value::from(None::<&str>), Value::None);
    }

    #[test]
    fn same_kind_comparisons() {
        assert_eq!(Number::I64(5).compare(Number::I64(10)), Some(Ordering::Less));
        assert_eq!(Number::U64(10).compare(Number::U64(5)), Some(Ordering::Greater));
        assert_eq!(Number::F64(5.0).compare(Number::F64(5.0)), Some(Ordering::Equal));
    }

    #[test]
    fn mixed_kind_comparisons() {
        assert_eq!(Number::I64(5).compare(Number::U64(10)), Some(Ordering::Less));
        assert_eq!(Number::I64(-1).compare(Number::U64(0)), Some(Ordering::Less));
        assert_eq!(Number::U64(0).compare(Number::I64(-1)), Some(Ordering::Greater));
        assert_eq!(Number::I64(5).compare(Number::F64(5.0)), Some(Ordering::Equal));
        assert_eq!(Number::U64(10).compare(Number::F64(5.5)), Some(Ordering::Greater));
        assert_eq!(Number::I64(-5).compare(Number::F64(-5.5)), Some(Ordering::Greater));
        assert_eq!(Number::F64(-0.5).compare(Number::U64(0)), Some(Ordering::Less));
        assert_eq!(Number::U64(0).compare(Number::F64(-0.0)), Some(Ordering::Equal));
    }

    #[test]
    fn integers_beyond_f64_precision_compare_exactly() {
        let above = 9_007_199_254_740_993i64;
        let rounded = 9_007_199_254_740_992.0f64;

        assert_eq!(Number::I64(above).compare(Number::F64(rounded)), Some(Ordering::Greater));
        assert_eq!(Number::F64(rounded).compare(Number::I64(above)), Some(Ordering::Less));
        assert_eq!(
            Number::U64(above as u64).compare(Number::F64(rounded)),
            Some(Ordering::Greater)
        );
        assert_ne!(Number::I64(above), Number::F64(rounded));
    }

    #[test]
    fn floats_outside_integer_range() {
        assert_eq!(Number::I64(i64::MAX).compare(Number::F64(TWO_POW_63)), Some(Ordering::Less));
        assert_eq!(
            Number::I64(i64::MIN).compare(Number::F64(-TWO_POW_63)),
            Some(Ordering::Equal)
        );
        assert_eq!(Number::U64(u64::MAX).compare(Number::F64(TWO_POW_64)), Some(Ordering::Less));
        assert_eq!(
            Number::I64(0).compare(Number::F64(f64::NEG_INFINITY)),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn equality_agrees_with_ordering() {
        assert_eq!(Number::I64(5), Number::F64(5.0));
        assert_eq!(Number::U64(706), Number::I64(706));
        assert_ne!(Number::I64(5), Number::F64(5.5));
        assert_ne!(Number::F64(f64::NAN), Number::F64(f64::NAN));
        assert!(Number::I64(5) <= Number::F64(5.0));
    }

    #[test]
    fn large_integers_compare_exactly() {
        let big = i64::MAX as u64 + 1;
        assert_eq!(Number::I64(i64::MAX).compare(Number::U64(big)), Some(Ordering::Less));
    }

    #[test]
    fn nan_is_unordered() {
        assert_eq!(Number::F64(f64::NAN).compare(Number::F64(1.0)), None);
        assert_eq!(Number::I64(1).compare(Number::F64(f64::NAN)), None);
    }

    #[test]
    fn conversions() {
        assert_eq!(Number::from(-1i32), Number::I64(-1));
        assert_eq!(Number::from(706usize), Number::U64(706));
        assert_eq!(Number::from(1431.5f64), Number::F64(1431.5));
    }
}
