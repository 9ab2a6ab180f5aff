use std::fmt;

use crate::util::position::Position;

/// A numeric literal as written in the source.
///
/// A literal is a float exactly when it contains a `.` followed by a digit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberLiteral {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
}

impl From<i64> for NumberLiteral {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for NumberLiteral {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for NumberLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each variant models a distinct syntactic construct and records the
/// position of the token it starts at, which runtime errors report.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The constant value.
        value:    NumberLiteral,
        /// Position in the source code.
        position: Position,
    },
    /// A string literal, escapes already resolved.
    String {
        /// The characters between the quotes.
        value:    String,
        /// Position in the source code.
        position: Position,
    },
    /// An atom such as `ok`.
    Atom {
        /// The atom's name.
        name:     String,
        /// Position in the source code.
        position: Position,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Position in the source code.
        position: Position,
    },
    /// List literal, optionally with a `| Tail` expression.
    List {
        /// The literal elements, in order.
        elements: Vec<Self>,
        /// The expression after `|`, whose elements are appended.
        tail:     Option<Box<Self>>,
        /// Position in the source code.
        position: Position,
    },
    /// Tuple literal expression.
    Tuple {
        /// Elements of the tuple.
        elements: Vec<Self>,
        /// Position in the source code.
        position: Position,
    },
    /// A binary operation (arithmetic or comparison).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator in the source code.
        position: Position,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Position in the source code.
        position: Position,
    },
    /// Function call expression (e.g. `max(1, 2)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Position in the source code.
        position:  Position,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use erlite::{ast::Expr, util::position::Position};
    ///
    /// let expr = Expr::Variable { name:     "X".to_string(),
    ///                             position: Position::new(3, 5), };
    ///
    /// assert_eq!(expr.position(), Position::new(3, 5));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Number { position, .. }
            | Self::String { position, .. }
            | Self::Atom { position, .. }
            | Self::Variable { position, .. }
            | Self::List { position, .. }
            | Self::Tuple { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }

    /// Binding strength used when printing; higher binds tighter.
    const fn precedence(&self) -> u8 {
        match self {
            Self::BinaryOp { op, .. } => op.precedence(),
            Self::UnaryOp { .. } => 4,
            _ => 5,
        }
    }
}

/// A parameter pattern in a function clause head.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// Binds the argument to a variable; always matches.
    Variable(String),
    /// Matches only an argument exactly equal to the number.
    Number(NumberLiteral),
    /// Matches only the atom with this name.
    Atom(String),
}

/// One alternative of a multi-clause function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// The parameter patterns, one per argument.
    pub params:   Vec<Pattern>,
    /// Guard expressions after `when`; all must hold for the clause to run.
    pub guards:   Option<Vec<Expr>>,
    /// The body expression evaluated when the clause is selected.
    pub body:     Expr,
    /// Position of the clause's function name in the source code.
    pub position: Position,
}

impl Clause {
    /// The number of arguments this clause accepts.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Represents a user-defined function definition.
///
/// Clauses are tried in the order they appear in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:     String,
    /// The clauses, never empty.
    pub clauses:  Vec<Clause>,
    /// Position in the source code.
    pub position: Position,
}

/// Represents a top-level statement.
///
/// Every statement is terminated by `.` in the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:     String,
        /// The value which is being assigned.
        value:    Expr,
        /// Position in the source code.
        position: Position,
    },
    /// A user-defined function definition.
    Function(FunctionDef),
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr:     Expr,
        /// Position in the source code.
        position: Position,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
}

impl BinaryOperator {
    /// Returns `true` for the comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self, Self::Greater | Self::GreaterEqual | Self::Less | Self::LessEqual)
    }

    const fn precedence(self) -> u8 {
        match self {
            Self::Greater | Self::GreaterEqual | Self::Less | Self::LessEqual => 1,
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div => 3,
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-X`).
    Negate,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}

/// Writes `items` separated by `, `.
fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Prints the expression back as source text, adding parentheses only where
/// the grammar's precedence requires them.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::String { value, .. } => write!(f, "\"{value}\""),
            Self::Atom { name, .. } | Self::Variable { name, .. } => write!(f, "{name}"),
            Self::List { elements, tail, .. } => {
                write!(f, "[")?;
                write_joined(f, elements)?;
                if let Some(tail) = tail {
                    write!(f, " | {tail}")?;
                }
                write!(f, "]")
            },
            Self::Tuple { elements, .. } => {
                write!(f, "{{")?;
                write_joined(f, elements)?;
                write!(f, "}}")
            },
            Self::BinaryOp { left, op, right, .. } => {
                let own = op.precedence();
                if left.precedence() < own {
                    write!(f, "({left})")?;
                } else {
                    write!(f, "{left}")?;
                }
                write!(f, " {op} ")?;
                // Operators are left associative, so an equal-precedence right
                // operand needs parentheses.
                if right.precedence() <= own {
                    write!(f, "({right})")
                } else {
                    write!(f, "{right}")
                }
            },
            Self::UnaryOp { op, expr, .. } => {
                if expr.precedence() < self.precedence() {
                    write!(f, "{op}({expr})")
                } else {
                    write!(f, "{op}{expr}")
                }
            },
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;
                write_joined(f, arguments)?;
                write!(f, ")")
            },
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(name) | Self::Atom(name) => write!(f, "{name}"),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

/// Prints the clause without its function name: `(X) when X > 0 -> pos`.
impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_joined(f, &self.params)?;
        write!(f, ")")?;
        if let Some(guards) = &self.guards {
            write!(f, " when ")?;
            write_joined(f, guards)?;
        }
        write!(f, " -> {}", self.body)
    }
}

/// Prints the whole definition as it would be written in the source.
///
/// ```
/// use erlite::{Interpreter, ast::FunctionDef};
///
/// let mut interpreter = Interpreter::new();
/// interpreter.execute("fact(0) -> 1; fact(N) when N > 0 -> N * fact(N - 1).").unwrap();
///
/// let functions = interpreter.functions();
/// let def = FunctionDef { name:     "fact".into(),
///                         clauses:  functions["fact"].clone(),
///                         position: Default::default(), };
///
/// assert_eq!(def.to_string(), "fact(0) -> 1; fact(N) when N > 0 -> N * fact(N - 1).");
/// ```
impl fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, clause) in self.clauses.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}{clause}", self.name)?;
        }
        write!(f, ".")
    }
}
