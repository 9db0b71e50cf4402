//! Collation for sorting cell values.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::model::Value;

/// Compares two strings in dictionary order rather than byte order.
///
/// Strings are compatibility-decomposed (NFKD) and compared in three passes:
/// base letters ignoring case and accents, then accents, then case with
/// lowercase before uppercase. Only strings identical in all three passes
/// fall back to code-point order.
pub fn compare_strings(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn secondary_key(s: &str) -> String {
    s.nfkd().flat_map(char::to_lowercase).collect()
}

fn tertiary_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}

/// Ascending comparator for cell values.
///
/// Nulls (and missing fields, which resolve to null) sort after every other
/// value. Numbers compare by value across integer, float and decimal widths;
/// strings use [`compare_strings`]. Values of unrelated types are ordered by
/// type: booleans, numbers, strings, GUIDs, then datetimes.
///
/// Descending order is this comparator with its arguments swapped, which
/// puts nulls first.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::String(x), Value::String(y)) => compare_strings(x, y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Guid(x), Value::Guid(y)) => x.cmp(y),
        (Value::DateTime(x), Value::DateTime(y)) => x.cmp(y),
        (x, y) if x.is_numeric() && y.is_numeric() => compare_numbers(x, y),
        (x, y) => type_rank(x).cmp(&type_rank(y)),
    }
}

fn compare_numbers(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Long(x), Value::Long(y)) => x.cmp(y),
        (Value::Int(x), Value::Long(y)) => i64::from(*x).cmp(y),
        (Value::Long(x), Value::Int(y)) => x.cmp(&i64::from(*y)),
        _ => match (a.as_decimal(), b.as_decimal()) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => {
                let x = a.as_f64().unwrap_or(f64::NAN);
                let y = b.as_f64().unwrap_or(f64::NAN);
                x.total_cmp(&y)
            }
        },
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Int(_) | Value::Long(_) | Value::Float(_) | Value::Decimal(_) => 1,
        Value::String(_) => 2,
        Value::Guid(_) => 3,
        Value::DateTime(_) => 4,
        Value::Null => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_does_not_dominate() {
        // Byte order would put every uppercase letter first.
        assert_eq!(compare_strings("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_strings("Zeta", "alpha"), Ordering::Greater);
    }

    #[test]
    fn test_accents_sort_with_base_letter() {
        assert_eq!(compare_strings("Éclair", "Ecole"), Ordering::Less);
        assert_eq!(compare_strings("cote", "côte"), Ordering::Less);
        assert_eq!(compare_strings("côte", "coter"), Ordering::Less);
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(compare_strings("regal", "Regal"), Ordering::Less);
        assert_eq!(compare_strings("Regal", "Regal"), Ordering::Equal);
    }

    #[test]
    fn test_numbers_compare_across_widths() {
        assert_eq!(
            compare_values(&Value::Int(9), &Value::Long(10)),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&Value::Float(2.5), &Value::Int(2)),
            Ordering::Greater
        );
        assert_eq!(
            compare_values(&Value::Long(3), &Value::Float(3.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_nulls_sort_last() {
        assert_eq!(
            compare_values(&Value::Null, &Value::from("a")),
            Ordering::Greater
        );
        assert_eq!(compare_values(&Value::Int(1), &Value::Null), Ordering::Less);
        assert_eq!(compare_values(&Value::Null, &Value::Null), Ordering::Equal);
    }

    #[test]
    fn test_mixed_types_use_type_rank() {
        assert_eq!(
            compare_values(&Value::Int(100), &Value::from("1")),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&Value::Bool(true), &Value::Int(0)),
            Ordering::Less
        );
    }
}
