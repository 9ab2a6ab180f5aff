use std::{fmt, rc::Rc};

use internment::Intern;

use crate::{
    ast::NumberLiteral,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::{num::i64_to_f64, position::Position},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every term an expression can produce: the results of
/// assignments, function bodies, builtin calls and comparisons.
///
/// Equality is structural, so `Integer(1)` and `Float(1.0)` are different
/// values; number patterns in function clauses rely on this.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit integer value.
    Integer(i64),
    /// A double precision floating-point value.
    Float(f64),
    /// An atom, such as `ok` or `error`. Interned, so equality is a pointer
    /// comparison.
    Atom(Intern<String>),
    /// A double-quoted string. Also stands in for Erlang binaries.
    String(Rc<str>),
    /// A proper list.
    List(Rc<Vec<Self>>),
    /// A fixed-size tuple.
    Tuple(Rc<Vec<Self>>),
    /// A boolean produced by a comparison operator.
    /// Prints, orders and type-tests as the atom `true` or `false`, but only
    /// the boolean satisfies a guard, and an atom pattern never matches it.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl From<NumberLiteral> for Value {
    fn from(lit: NumberLiteral) -> Self {
        match lit {
            NumberLiteral::Integer(n) => n.into(),
            NumberLiteral::Float(x) => x.into(),
        }
    }
}

impl Value {
    /// Creates an atom with the given name.
    ///
    /// # Example
    /// ```
    /// use erlite::interpreter::value::core::Value;
    ///
    /// let ok = Value::atom("ok");
    ///
    /// assert!(ok.is_atom());
    /// assert_eq!(ok.atom_name(), Some("ok"));
    /// assert_eq!(ok, Value::atom("ok"));
    /// ```
    #[must_use]
    pub fn atom(name: &str) -> Self {
        Self::Atom(Intern::new(name.to_string()))
    }

    /// Creates a tuple holding `elements`.
    #[must_use]
    pub fn tuple(elements: Vec<Self>) -> Self {
        Self::Tuple(Rc::new(elements))
    }

    /// Creates a list holding `elements`.
    #[must_use]
    pub fn list(elements: Vec<Self>) -> Self {
        Self::List(Rc::new(elements))
    }

    /// Returns `true` if the value is an atom. Booleans count as the atoms
    /// `true` and `false`.
    #[must_use]
    pub const fn is_atom(&self) -> bool {
        matches!(self, Self::Atom(_) | Self::Bool(_))
    }

    /// Returns `true` if the value is a tuple of any size.
    #[must_use]
    pub const fn is_tuple(&self) -> bool {
        matches!(self, Self::Tuple(_))
    }

    /// Returns `true` if the value is an integer or a float.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Returns `true` only for the boolean `true`.
    ///
    /// This is the condition a guard expression has to meet. The atom `true`
    /// written in source does not count.
    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self, Self::Bool(true))
    }

    /// Returns the name of an atom, or `None` for any other value.
    ///
    /// # Example
    /// ```
    /// use erlite::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Bool(false).atom_name(), Some("false"));
    /// assert_eq!(Value::Integer(3).atom_name(), None);
    /// ```
    #[must_use]
    pub fn atom_name(&self) -> Option<&str> {
        match self {
            Self::Atom(name) => Some(name.as_str()),
            Self::Bool(true) => Some("true"),
            Self::Bool(false) => Some("false"),
            _ => None,
        }
    }

    /// Returns the elements of a tuple, or `None` for any other value.
    #[must_use]
    pub fn tuple_elements(&self) -> Option<&[Self]> {
        match self {
            Self::Tuple(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the elements of a list, or `None` for any other value.
    #[must_use]
    pub fn list_elements(&self) -> Option<&[Self]> {
        match self {
            Self::List(elements) => Some(elements),
            _ => None,
        }
    }

    /// A short lowercase name of the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Atom(_) => "atom",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
            Self::Bool(_) => "boolean",
        }
    }

    /// Converts a number to an `f64`.
    ///
    /// # Parameters
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a float, or an integer rounded to the
    ///   nearest `f64`.
    /// - `Err(RuntimeError::TypeMismatch)`: If the value is not a number.
    ///
    /// # Example
    /// ```
    /// use erlite::{interpreter::value::core::Value, util::position::Position};
    ///
    /// let x = Value::Integer(10);
    ///
    /// assert_eq!(x.as_float(Position::default()).unwrap(), 10.0);
    /// assert!(Value::atom("ten").as_float(Position::default()).is_err());
    /// ```
    pub fn as_float(&self, position: Position) -> EvalResult<f64> {
        match self {
            Self::Float(x) => Ok(*x),
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            other => {
                Err(RuntimeError::TypeMismatch { details: format!("Expected a number, found {}",
                                                                  other.type_name()),
                                                 position })
            },
        }
    }

    /// Promotes an integer to a float when the other operand is a float, or
    /// returns both values unchanged.
    ///
    /// # Parameters
    /// - `other`: The value to promote with.
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// - `Ok((Self, Self))`: The promoted pair.
    /// - `Err(RuntimeError::TypeMismatch)`: If a promoted operand is not a
    ///   number.
    pub fn promote_to_float(self, other: &Self, position: Position) -> EvalResult<(Self, Self)> {
        match (&self, other) {
            (Self::Float(_), Self::Integer(_)) => Ok((self, Self::Float(other.as_float(position)?))),
            (Self::Integer(_), Self::Float(_)) => {
                Ok((Self::Float(self.as_float(position)?), other.clone()))
            },
            _ => Ok((self, other.clone())),
        }
    }
}

/// Writes `values` separated by `, `.
fn write_elements(f: &mut fmt::Formatter<'_>, values: &[Value]) -> fmt::Result {
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }

        write!(f, "{value}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) if *x == 0.0 => write!(f, "0"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Atom(name) => write!(f, "{name}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Bool(b) => write!(f, "{b}"),
            Self::List(elements) => {
                write!(f, "[")?;
                write_elements(f, elements)?;
                write!(f, "]")
            },
            Self::Tuple(elements) => {
                write!(f, "{{")?;
                write_elements(f, elements)?;
                write!(f, "}}")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_nests_lists_and_tuples() {
        let value = Value::tuple(vec![Value::atom("ok"),
                                      Value::list(vec![1.into(), 2.5.into(), "hi".into()]),
                                      Value::Bool(false)]);

        assert_eq!(value.to_string(), r#"{ok, [1, 2.5, "hi"], false}"#);
    }

    #[test]
    fn empty_collections() {
        assert_eq!(Value::list(vec![]).to_string(), "[]");
        assert_eq!(Value::tuple(vec![]).to_string(), "{}");
    }

    #[test]
    fn booleans_behave_as_atoms() {
        assert!(Value::Bool(true).is_atom());
        assert_eq!(Value::Bool(false).atom_name(), Some("false"));
    }

    #[test]
    fn only_boolean_true_is_true() {
        assert!(Value::Bool(true).is_true());
        assert!(!Value::atom("true").is_true());
        assert!(!Value::Integer(1).is_true());
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(Value::Float(-0.0).to_string(), "0");
        assert_eq!(Value::Float(-0.5).to_string(), "-0.5");
    }

    #[test]
    fn large_integers_promote_with_rounding() {
        let p = Position::default();
        let big = Value::Integer(9_007_199_254_740_993);

        let (a, _) = big.promote_to_float(&Value::Float(0.5), p).unwrap();
        assert_eq!(a, Value::Float(9_007_199_254_740_992.0));
    }

    #[test]
    fn integer_and_float_are_distinct() {
        assert_ne!(Value::Integer(1), Value::Float(1.0));
    }

    #[test]
    fn promotion_only_touches_mixed_pairs() {
        let p = Position::default();

        let (a, b) = Value::Integer(2).promote_to_float(&Value::Float(0.5), p).unwrap();
        assert_eq!((a, b), (Value::Float(2.0), Value::Float(0.5)));

        let (a, b) = Value::Integer(2).promote_to_float(&Value::Integer(3), p).unwrap();
        assert_eq!((a, b), (Value::Integer(2), Value::Integer(3)));
    }
}
