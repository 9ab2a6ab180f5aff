use std::collections::HashMap;

use crate::{
    ast::{Clause, Expr, Statement},
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Variable bindings of one function call, from parameter name to argument.
pub type Bindings = HashMap<String, Value>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the top-level variable
/// environment and every user-defined function. Both persist across programs
/// until [`Context::reset`] is called.
///
/// ## Usage
///
/// `Context` is created once and reused for evaluating statements. Expression
/// evaluation never mutates it; only assignments and function definitions do.
#[derive(Debug, Default)]
pub struct Context {
    /// Top-level variables. Re-assignment overwrites.
    pub variables: HashMap<String, Value>,
    /// A mapping from function names to their clauses in declaration order.
    /// A new definition replaces all clauses of that name.
    pub functions: HashMap<String, Vec<Clause>>,
}

impl Context {
    /// Creates a new evaluation context with no variables and no user-defined
    /// functions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: literals,
    /// variables, lists, tuples, unary and binary operations and function
    /// calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `bindings`: The current call frame, if evaluating inside a function
    ///   clause. Its names shadow the top-level variables.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Example
    /// ```
    /// use erlite::{
    ///     interpreter::{
    ///         evaluator::core::{Bindings, Context},
    ///         lexer::tokenize,
    ///         parser::parse,
    ///         value::core::Value,
    ///     },
    ///     ast::Statement,
    /// };
    ///
    /// let tokens = tokenize("N * 2.").unwrap();
    /// let Statement::Expression { expr, .. } = &parse(&tokens).unwrap()[0] else {
    ///     unreachable!()
    /// };
    ///
    /// let frame = Bindings::from([("N".to_string(), Value::Integer(21))]);
    /// let context = Context::new();
    ///
    /// assert_eq!(context.eval(expr, Some(&frame)).unwrap(), Value::Integer(42));
    /// ```
    pub fn eval(&self, expr: &Expr, bindings: Option<&Bindings>) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok((*value).into()),
            Expr::String { value, .. } => Ok(value.as_str().into()),
            Expr::Atom { name, .. } => Ok(Value::atom(name)),
            Expr::Variable { name, position } => self.eval_variable(name, *position, bindings),
            Expr::List { elements,
                         tail,
                         position, } => {
                self.eval_list_literal(elements, tail.as_deref(), *position, bindings)
            },
            Expr::Tuple { elements, .. } => self.eval_tuple_literal(elements, bindings),
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => self.eval_binary_op(left, *op, right, *position, bindings),
            Expr::UnaryOp { op, expr, position } => {
                self.eval_unary_op(*op, expr, *position, bindings)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 position, } => {
                self.eval_function_call(name, arguments, *position, bindings)
            },
        }
    }

    /// Evaluates a single top-level statement.
    ///
    /// Assignments bind the variable in the top-level environment and yield
    /// the assigned value. Function definitions replace every clause of that
    /// name and yield the atom `ok`. Expression statements yield their value.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// The value the statement produces.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value, None)?;
                self.variables.insert(name.clone(), value.clone());
                Ok(value)
            },
            Statement::Function(def) => {
                self.functions.insert(def.name.clone(), def.clauses.clone());
                Ok(Value::atom("ok"))
            },
            Statement::Expression { expr, .. } => self.eval(expr, None),
        }
    }

    /// Evaluates statements in order and returns the value of the last one.
    ///
    /// Evaluation stops at the first error. Statements before it keep their
    /// effects.
    ///
    /// # Returns
    /// `Some(value)` of the last statement, or `None` if there are none.
    pub fn eval_program(&mut self, statements: &[Statement]) -> EvalResult<Option<Value>> {
        let mut result = None;
        for statement in statements {
            result = Some(self.eval_statement(statement)?);
        }
        Ok(result)
    }

    /// Forgets every variable and user-defined function.
    pub fn reset(&mut self) {
        self.variables.clear();
        self.functions.clear();
    }
}
