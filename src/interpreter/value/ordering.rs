use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{interpreter::value::core::Value, util::num::i64_to_f64};

impl Value {
    /// Compares two values under the total term order.
    ///
    /// Values of different kinds order as
    /// `number < atom < tuple < list < string`. Within a kind:
    /// - numbers compare by numeric value, so `1` and `1.0` are equal here;
    /// - atoms compare by name, booleans being the atoms `true` and `false`;
    /// - tuples compare by size first, then element by element;
    /// - lists compare element by element, a prefix sorting first;
    /// - strings compare lexicographically.
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use erlite::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(2).compare(&Value::Float(1.5)), Ordering::Greater);
    /// assert_eq!(Value::Integer(9).compare(&Value::atom("a")), Ordering::Less);
    /// assert_eq!(Value::Bool(true).compare(&Value::atom("ok")), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (a, b) if a.is_number() && b.is_number() => numeric_key(a).cmp(&numeric_key(b)),
            (a, b) if a.is_atom() && b.is_atom() => a.atom_name().cmp(&b.atom_name()),
            (Self::Tuple(a), Self::Tuple(b)) => {
                a.len().cmp(&b.len()).then_with(|| compare_elements(a, b))
            },
            (Self::List(a), Self::List(b)) => compare_elements(a, b),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            (a, b) => kind_rank(a).cmp(&kind_rank(b)),
        }
    }
}

/// The position of a value's kind in the term order.
const fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Integer(_) | Value::Float(_) => 0,
        Value::Atom(_) | Value::Bool(_) => 1,
        Value::Tuple(_) => 2,
        Value::List(_) => 3,
        Value::String(_) => 4,
    }
}

/// A totally ordered float for a number. Integers beyond 2^53 may round, which
/// only matters when they are compared against a float.
fn numeric_key(value: &Value) -> OrderedFloat<f64> {
    match value {
        Value::Integer(n) => OrderedFloat(i64_to_f64(*n)),
        Value::Float(x) => OrderedFloat(*x),
        _ => OrderedFloat(f64::NAN),
    }
}

/// Lexicographic comparison of two element sequences.
fn compare_elements(a: &[Value], b: &[Value]) -> Ordering {
    a.iter()
     .zip(b)
     .map(|(x, y)| x.compare(y))
     .find(|ordering| ordering.is_ne())
     .unwrap_or_else(|| a.len().cmp(&b.len()))
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use crate::interpreter::value::core::Value;

    #[test]
    fn kinds_follow_term_order() {
        let ascending = [Value::Float(1e9),
                         Value::atom("zzz"),
                         Value::tuple(vec![]),
                         Value::list(vec![]),
                         Value::from("")];

        for pair in ascending.windows(2) {
            assert_eq!(pair[0].compare(&pair[1]), Ordering::Less, "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn mixed_numbers_compare_by_value() {
        assert_eq!(Value::Integer(1).compare(&Value::Float(1.0)), Ordering::Equal);
        assert_eq!(Value::Float(-0.5).compare(&Value::Integer(0)), Ordering::Less);
    }

    #[test]
    fn tuples_compare_by_size_first() {
        let small = Value::tuple(vec![Value::Integer(9)]);
        let large = Value::tuple(vec![Value::Integer(1), Value::Integer(1)]);

        assert_eq!(small.compare(&large), Ordering::Less);
    }

    #[test]
    fn lists_compare_lexicographically() {
        let short = Value::list(vec![Value::Integer(1)]);
        let long = Value::list(vec![Value::Integer(1), Value::Integer(0)]);
        let bigger = Value::list(vec![Value::Integer(2)]);

        assert_eq!(short.compare(&long), Ordering::Less);
        assert_eq!(long.compare(&bigger), Ordering::Less);
    }

    #[test]
    fn booleans_compare_as_atoms() {
        assert_eq!(Value::Bool(false).compare(&Value::atom("false")), Ordering::Equal);
        assert_eq!(Value::Bool(false).compare(&Value::Bool(true)), Ordering::Less);
    }
}
