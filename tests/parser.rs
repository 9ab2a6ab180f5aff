use erlite::{
    ast::{BinaryOperator, Expr, NumberLiteral, Pattern, Statement},
    error::ParseError,
    interpreter::{lexer::tokenize, parser::parse},
    util::position::Position,
};

fn parse_source(source: &str) -> Result<Vec<Statement>, ParseError> {
    let tokens = tokenize(source).unwrap();
    parse(&tokens)
}

fn parse_expr(source: &str) -> Expr {
    match parse_source(source).unwrap().remove(0) {
        Statement::Expression { expr, .. } => expr,
        other => panic!("Expected an expression statement, got {other:?}"),
    }
}

#[test]
fn precedence_climbs_from_comparison_to_unary() {
    assert_eq!(parse_expr("1 + 2 * 3 > -4.").to_string(), "1 + 2 * 3 > -4");
    assert_eq!(parse_expr("(1 + 2) * 3.").to_string(), "(1 + 2) * 3");
    assert_eq!(parse_expr("1 - (2 - 3).").to_string(), "1 - (2 - 3)");
    assert_eq!(parse_expr("-(X + 1).").to_string(), "-(X + 1)");
}

#[test]
fn operators_associate_left() {
    let Expr::BinaryOp { left, op, .. } = parse_expr("10 - 4 - 3.") else {
        panic!("Expected a binary operation");
    };

    assert_eq!(op, BinaryOperator::Sub);
    assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Sub, .. }));
}

#[test]
fn lists_take_an_optional_tail() {
    let Expr::List { elements, tail, .. } = parse_expr("[1, 2 | Rest].") else {
        panic!("Expected a list");
    };

    assert_eq!(elements.len(), 2);
    assert!(matches!(tail.as_deref(), Some(Expr::Variable { name, .. }) if name == "Rest"));
}

#[test]
fn call_is_told_apart_from_definition() {
    let statements = parse_source("f(X) -> X. f(1).").unwrap();

    assert!(matches!(statements[0], Statement::Function(_)));
    assert!(matches!(&statements[1],
                     Statement::Expression { expr: Expr::FunctionCall { name, .. }, .. } if name == "f"));
}

#[test]
fn nested_parentheses_in_calls() {
    let statements = parse_source("f((1 + 2), g((3))).").unwrap();

    assert!(matches!(statements[0], Statement::Expression { .. }));
}

#[test]
fn clause_heads_keep_their_patterns_and_guards() {
    let statements = parse_source("f(0, zero, X) when X > 1, is_integer(X) -> X.").unwrap();
    let Statement::Function(def) = &statements[0] else {
        panic!("Expected a function definition");
    };
    let clause = &def.clauses[0];

    assert_eq!(clause.params,
               vec![Pattern::Number(NumberLiteral::Integer(0)),
                    Pattern::Atom("zero".into()),
                    Pattern::Variable("X".into())]);
    assert_eq!(clause.guards.as_ref().map(Vec::len), Some(2));
    assert_eq!(clause.arity(), 3);
}

#[test]
fn positions_point_at_the_first_token() {
    let statements = parse_source("A = 1.\n  B = 2.").unwrap();

    let Statement::Assignment { position, .. } = &statements[1] else {
        panic!("Expected an assignment");
    };
    assert_eq!(*position, Position::new(2, 3));
}

#[test]
fn definitions_print_back_as_source() {
    let source = "abs2(X) when X < 0 -> -X; abs2(X) -> X.";
    let Statement::Function(def) = parse_source(source).unwrap().remove(0) else {
        panic!("Expected a function definition");
    };

    assert_eq!(def.to_string(), source);
}

#[test]
fn clause_names_must_agree() {
    let err = parse_source("f(1) -> a; g(2) -> b.").unwrap_err();

    assert!(matches!(err, ParseError::ClauseNameMismatch { ref expected, ref found, .. }
                          if expected == "f" && found == "g"));
}

#[test]
fn parameters_must_be_simple() {
    let err = parse_source("f([X]) -> X.").unwrap_err();

    assert!(matches!(err, ParseError::InvalidParameter { .. }));
}

#[test]
fn statements_need_a_full_stop() {
    let err = parse_source("X = 1").unwrap_err();

    assert_eq!(err.to_string(), "Expected '.', found end of input at line 1, column 6");
}

#[test]
fn missing_arrow_is_reported() {
    let err = parse_source("f(X) when X > 0 X.").unwrap_err();

    assert!(matches!(err, ParseError::UnexpectedToken { ref expected, .. } if expected == "'->'"));
}
