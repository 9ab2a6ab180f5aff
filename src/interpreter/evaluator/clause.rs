use crate::{
    ast::{Clause, Expr, Pattern},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Bindings, Context, EvalResult},
        value::core::Value,
    },
    util::position::Position,
};

impl Context {
    /// Executes a user-defined function.
    ///
    /// Clauses are tried strictly in declaration order. A clause is skipped
    /// when its parameter count differs from the number of arguments, when a
    /// parameter pattern rejects its argument, or when a guard does not hold.
    /// The first remaining clause has its body evaluated in a fresh frame
    /// holding only its parameters; top-level variables stay visible beneath
    /// it, the caller's frame does not.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Evaluated arguments.
    /// - `position`: Source position of the call.
    ///
    /// # Errors
    /// - `UnknownFunction` if no function of that name is defined.
    /// - `NoClauseMatches` if every clause is rejected.
    /// - Any error raised by the selected body.
    pub(crate) fn call_user_function(&self,
                                     name: &str,
                                     args: &[Value],
                                     position: Position)
                                     -> EvalResult<Value> {
        let Some(clauses) = self.functions.get(name) else {
            return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                       arity: args.len(),
                                                       position });
        };

        for clause in clauses {
            if let Some(frame) = self.select_clause(clause, args) {
                return self.eval(&clause.body, Some(&frame));
            }
        }

        Err(RuntimeError::NoClauseMatches { name: name.to_string(),
                                            arity: args.len(),
                                            position })
    }

    /// Returns the call frame for `clause` if it accepts `args`.
    fn select_clause(&self, clause: &Clause, args: &[Value]) -> Option<Bindings> {
        if clause.arity() != args.len() {
            return None;
        }

        let frame = bind_parameters(&clause.params, args)?;
        let guards = clause.guards.as_deref().unwrap_or_default();

        self.guards_hold(guards, &frame).then_some(frame)
    }

    /// Evaluates guards as a conjunction.
    ///
    /// Each guard must evaluate to the boolean `true`; the atom `true` and any
    /// other value fail. An error while evaluating a guard counts as failure
    /// and is not reported.
    fn guards_hold(&self, guards: &[Expr], frame: &Bindings) -> bool {
        guards.iter()
              .all(|guard| self.eval(guard, Some(frame)).is_ok_and(|value| value.is_true()))
    }
}

/// Matches every parameter against its argument, collecting variable
/// bindings.
///
/// A variable repeated in the head binds to its last argument.
///
/// Number and atom patterns match exactly, so the atom pattern `true` does not
/// match the boolean a comparison produces.
///
/// # Returns
/// The new frame, or `None` if a number or atom pattern rejects its argument.
fn bind_parameters(params: &[Pattern], args: &[Value]) -> Option<Bindings> {
    let mut frame = Bindings::with_capacity(params.len());

    for (param, arg) in params.iter().zip(args) {
        match param {
            Pattern::Variable(name) => {
                frame.insert(name.clone(), arg.clone());
            },
            Pattern::Number(literal) => {
                if Value::from(*literal) != *arg {
                    return None;
                }
            },
            Pattern::Atom(name) => {
                if !matches!(arg, Value::Atom(atom) if atom.as_str() == name.as_str()) {
                    return None;
                }
            },
        }
    }

    Some(frame)
}

#[cfg(test)]
mod tests {
    use super::bind_parameters;
    use crate::{
        ast::{NumberLiteral, Pattern},
        interpreter::value::core::Value,
    };

    #[test]
    fn number_patterns_match_exactly() {
        let params = [Pattern::Number(NumberLiteral::Integer(1))];

        assert!(bind_parameters(&params, &[Value::Integer(1)]).is_some());
        assert!(bind_parameters(&params, &[Value::Float(1.0)]).is_none());
    }

    #[test]
    fn atom_patterns_match_only_atoms() {
        let params = [Pattern::Atom("true".into())];

        assert!(bind_parameters(&params, &[Value::atom("true")]).is_some());
        assert!(bind_parameters(&params, &[Value::Bool(true)]).is_none());
        assert!(bind_parameters(&params, &[Value::atom("false")]).is_none());
    }

    #[test]
    fn repeated_variable_keeps_last_argument() {
        let params = [Pattern::Variable("X".into()), Pattern::Variable("X".into())];

        let frame = bind_parameters(&params, &[Value::Integer(1), Value::Integer(2)]).unwrap();
        assert_eq!(frame["X"], Value::Integer(2));
    }
}
