use std::collections::BTreeMap;

use crate::{
    ast::Clause,
    error::ExecutionError,
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::parse, value::core::Value},
};

/// A persistent interpreter session.
///
/// Variables and function definitions survive between calls to
/// [`Interpreter::execute`] until [`Interpreter::reset`] is called. Each call
/// runs the full pipeline: tokenize, parse, evaluate.
///
/// # Example
/// ```
/// use erlite::Interpreter;
///
/// let mut interpreter = Interpreter::new();
///
/// interpreter.execute("double(X) -> X * 2.").unwrap();
/// assert_eq!(interpreter.execute("double(5).").unwrap(), "10");
///
/// interpreter.execute("Pair = {ok, double(21)}.").unwrap();
/// assert_eq!(interpreter.execute("Pair.").unwrap(), "{ok, 42}");
/// ```
#[derive(Debug, Default)]
pub struct Interpreter {
    context: Context,
}

impl Interpreter {
    /// Creates a session with no variables and no user-defined functions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `source` and returns the formatted value of its last statement.
    ///
    /// # Parameters
    /// - `source`: One or more `.`-terminated statements.
    ///
    /// # Returns
    /// The result as [`format_result`] renders it, `undefined` for a source
    /// without statements.
    ///
    /// # Errors
    /// An [`ExecutionError`] wrapping the lexing, parsing or runtime failure.
    /// Statements evaluated before a runtime error keep their effects.
    pub fn execute(&mut self, source: &str) -> Result<String, ExecutionError> {
        let value = self.evaluate(source)?;
        Ok(format_result(value.as_ref()))
    }

    /// Runs `source` and returns the raw value of its last statement.
    ///
    /// # Example
    /// ```
    /// use erlite::{Interpreter, interpreter::value::core::Value};
    ///
    /// let mut interpreter = Interpreter::new();
    ///
    /// assert_eq!(interpreter.evaluate("7 / 2.").unwrap(), Some(Value::Float(3.5)));
    /// assert_eq!(interpreter.evaluate("   ").unwrap(), None);
    /// ```
    pub fn evaluate(&mut self, source: &str) -> Result<Option<Value>, ExecutionError> {
        let tokens = tokenize(source)?;
        let statements = parse(&tokens)?;

        Ok(self.context.eval_program(&statements)?)
    }

    /// Runs every snippet in order and returns the formatted result of the
    /// last one.
    ///
    /// Stops at the first failing snippet.
    ///
    /// # Example
    /// ```
    /// use erlite::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// let result = interpreter.execute_all(&["X = 4.", "Y = X * X.", "Y - 1."]).unwrap();
    ///
    /// assert_eq!(result, "15");
    /// assert_eq!(interpreter.execute_all(&[]).unwrap(), "undefined");
    /// ```
    pub fn execute_all(&mut self, sources: &[&str]) -> Result<String, ExecutionError> {
        let mut result = format_result(None);
        for source in sources {
            result = self.execute(source)?;
        }
        Ok(result)
    }

    /// Forgets every variable and user-defined function.
    pub fn reset(&mut self) {
        self.context.reset();
    }

    /// A sorted snapshot of the top-level variables.
    #[must_use]
    pub fn variables(&self) -> BTreeMap<String, Value> {
        self.context
            .variables
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// A sorted snapshot of the user-defined functions and their clauses.
    #[must_use]
    pub fn functions(&self) -> BTreeMap<String, Vec<Clause>> {
        self.context
            .functions
            .iter()
            .map(|(name, clauses)| (name.clone(), clauses.clone()))
            .collect()
    }
}

/// Renders an evaluation result the way the shell prints it.
///
/// Numbers print as themselves, atoms bare, strings double-quoted, lists and
/// tuples with their elements separated by `, `. No value prints as
/// `undefined`.
///
/// # Example
/// ```
/// use erlite::{format_result, interpreter::value::core::Value};
///
/// let value = Value::list(vec![1.into(), Value::atom("hello"), "world".into()]);
///
/// assert_eq!(format_result(Some(&value)), r#"[1, hello, "world"]"#);
/// assert_eq!(format_result(None), "undefined");
/// ```
#[must_use]
pub fn format_result(value: Option<&Value>) -> String {
    value.map_or_else(|| "undefined".to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, RuntimeError};

    #[test]
    fn state_persists_between_calls() {
        let mut interpreter = Interpreter::new();

        interpreter.execute("X = 10.").unwrap();
        interpreter.execute("add(A, B) -> A + B.").unwrap();

        assert_eq!(interpreter.execute("add(X, 5).").unwrap(), "15");
        assert_eq!(interpreter.variables()["X"], Value::Integer(10));
        assert_eq!(interpreter.functions()["add"].len(), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut interpreter = Interpreter::new();
        interpreter.execute("X = 1. f() -> 2.").unwrap();

        interpreter.reset();

        assert!(interpreter.variables().is_empty());
        assert!(interpreter.functions().is_empty());
        assert!(interpreter.execute("X.").is_err());
    }

    #[test]
    fn definition_yields_ok() {
        let mut interpreter = Interpreter::new();

        assert_eq!(interpreter.execute("id(X) -> X.").unwrap(), "ok");
    }

    #[test]
    fn effects_before_a_failure_are_kept() {
        let mut interpreter = Interpreter::new();

        let err = interpreter.execute("A = 1. B = A / 0. C = 3.").unwrap_err();

        assert!(matches!(err, ExecutionError::Runtime(RuntimeError::DivisionByZero { .. })));
        assert_eq!(interpreter.variables().len(), 1);
    }

    #[test]
    fn parse_errors_do_not_evaluate_anything() {
        let mut interpreter = Interpreter::new();

        let err = interpreter.execute("A = 1. B = .").unwrap_err();

        assert!(matches!(err, ExecutionError::Parse(ParseError::UnexpectedToken { .. })));
        assert!(interpreter.variables().is_empty());
    }

    #[test]
    fn snapshots_are_sorted() {
        let mut interpreter = Interpreter::new();
        interpreter.execute("Zed = 1. Alpha = 2. Mid = 3.").unwrap();

        let names: Vec<_> = interpreter.variables().into_keys().collect();

        assert_eq!(names, ["Alpha", "Mid", "Zed"]);
    }
}
