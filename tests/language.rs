use std::fs::{self};

use erlite::{Interpreter, run};
use walkdir::WalkDir;

/// One statement typed at the shell and what the shell printed for it.
struct Exchange {
    input:    String,
    expected: String,
}

#[test]
fn lesson_transcripts_reproduce() {
    let mut count = 0;

    for entry in
        WalkDir::new("lessons").into_iter()
                               .filter_map(Result::ok)
                               .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, transcript) in extract_transcripts(&content).into_iter().enumerate() {
            let mut interpreter = Interpreter::new();

            for exchange in transcript {
                count += 1;
                let outcome = interpreter.execute(&exchange.input);

                if let Some(prefix) = exchange.expected.strip_prefix("** ") {
                    match outcome {
                        Ok(value) => panic!("Transcript {} in {:?}: `{}` gave {value}, expected an error",
                                            i + 1,
                                            path,
                                            exchange.input),
                        Err(e) => assert!(e.to_string().starts_with(prefix),
                                          "Transcript {} in {:?}: `{}` failed with `{e}`, expected `{prefix}`",
                                          i + 1,
                                          path,
                                          exchange.input),
                    }
                } else {
                    match outcome {
                        Ok(value) => assert_eq!(value,
                                                exchange.expected,
                                                "Transcript {} in {:?}: `{}`",
                                                i + 1,
                                                path,
                                                exchange.input),
                        Err(e) => panic!("Transcript {} in {:?}: `{}` failed: {e}",
                                         i + 1,
                                         path,
                                         exchange.input),
                    }
                }
            }
        }
    }

    assert!(count > 0, "No transcripts found in lessons");
}

/// Collects every ```erlang block as a list of prompt/output exchanges.
fn extract_transcripts(content: &str) -> Vec<Vec<Exchange>> {
    let mut transcripts = Vec::new();
    let mut inside = false;
    let mut current: Vec<Exchange> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```erlang") {
            inside = true;
            current.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            transcripts.push(std::mem::take(&mut current));
            continue;
        }
        if !inside {
            continue;
        }

        if let Some(input) = prompt_input(line) {
            current.push(Exchange { input:    input.to_string(),
                                    expected: String::new(), });
        } else if let Some(last) = current.last_mut() {
            if !last.expected.is_empty() {
                last.expected.push('\n');
            }
            last.expected.push_str(line);
        }
    }

    transcripts
}

/// Returns the statement after a `N> ` prompt, if `line` starts with one.
fn prompt_input(line: &str) -> Option<&str> {
    let (counter, input) = line.split_once("> ")?;
    (!counter.is_empty() && counter.bytes().all(|b| b.is_ascii_digit())).then_some(input)
}

fn assert_result(src: &str, expected: &str) {
    match run(src) {
        Ok(value) => assert_eq!(value, expected, "Script: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str, prefix: &str) {
    match run(src) {
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail"),
        Err(e) => assert!(e.to_string().starts_with(prefix),
                          "Expected `{prefix}`, got `{e}`"),
    }
}

#[test]
fn integer_arithmetic_is_exact() {
    assert_result("2 + 3.", "5");
    assert_result("7 * 6.", "42");
    assert_result("8 - 10.", "-2");
    assert_result("10 / 2.", "5");
    assert_result("2 + 3 * 4.", "14");
    assert_result("(2 + 3) * 4.", "20");
    assert_result("20 - 5 - 3.", "12");
}

#[test]
fn mixed_arithmetic_produces_floats() {
    assert_result("7 / 2.", "3.5");
    assert_result("1 + 0.5.", "1.5");
    assert_result("0.5 * 4.", "2");
    assert_result("is_float(0.5 * 4).", "true");
    assert_result("is_integer(10 / 2).", "true");
}

#[test]
fn assignment_round_trips() {
    let values = ["42",
                  "-7",
                  "2.5",
                  "hello",
                  "\"world\"",
                  r#""say \"hi\"""#,
                  "[]",
                  "[1, two, \"three\"]",
                  "{}",
                  "{ok, [1, 2]}",
                  "{nested, {1, 2.5}, [a]}"];

    for value in values {
        let mut interpreter = Interpreter::new();
        let literal = interpreter.evaluate(&format!("{value}.")).unwrap();

        interpreter.execute(&format!("X = {value}.")).unwrap();

        assert!(literal.is_some());
        assert_eq!(interpreter.evaluate("X.").unwrap(), literal, "Value: {value}");
    }

    assert_result("X = 2.5. X.", "2.5");
    assert_result("X = hello. X.", "hello");
    assert_result("X = \"world\". X.", "\"world\"");
    assert_result(r#"X = "say \"hi\"". byte_size(X)."#, "8");
}

#[test]
fn reassignment_overwrites() {
    let mut interpreter = Interpreter::new();

    assert_eq!(interpreter.execute("X = {ok, [1, 2]}.").unwrap(), "{ok, [1, 2]}");
    assert_eq!(interpreter.execute("X = 3.").unwrap(), "3");
    assert_eq!(interpreter.execute("X.").unwrap(), "3");
}

#[test]
fn clauses_are_tried_in_order() {
    assert_result("f(X) -> first; f(1) -> second. f(1).", "first");
    assert_result("f(1) -> first; f(X) -> second. f(1).", "first");
    assert_result("f(1) -> first; f(X) -> second. f(2).", "second");
}

#[test]
fn number_patterns_are_exact() {
    assert_result("f(1) -> int; f(X) -> other. f(1.0).", "other");
    assert_result("f(1.0) -> float; f(X) -> other. f(1.0).", "float");
}

#[test]
fn arity_selects_clauses() {
    assert_result("f(X) -> one; f(X, Y) -> two. f(a, b).", "two");
    assert_failure("f(X) -> one. f(a, b).", "Execution error: No function clause matches f/2");
}

#[test]
fn redefinition_replaces_all_clauses() {
    assert_failure("f(1) -> one; f(2) -> two. f(2) -> deux. f(1).",
                   "Execution error: No function clause matches");
    assert_result("f(1) -> one; f(2) -> two. f(2) -> deux. f(2).", "deux");
}

#[test]
fn guards_select_clauses() {
    let mut interpreter = Interpreter::new();
    interpreter.execute("classify(N) when N < 0 -> negative; \
                         classify(N) when N >= 0, N < 10 -> small; \
                         classify(N) -> large.")
               .unwrap();

    assert_eq!(interpreter.execute("classify(-1).").unwrap(), "negative");
    assert_eq!(interpreter.execute("classify(0).").unwrap(), "small");
    assert_eq!(interpreter.execute("classify(9.5).").unwrap(), "small");
    assert_eq!(interpreter.execute("classify(10).").unwrap(), "large");
}

#[test]
fn guard_errors_mean_the_guard_fails() {
    assert_result("f(X) when hd(X) > 0 -> pos; f(X) -> other. f(7).", "other");
    assert_result("f(X) when X / 0 > 1 -> boom; f(X) -> other. f(7).", "other");
}

#[test]
fn only_boolean_true_satisfies_a_guard() {
    assert_result("f(X) when true -> a; f(X) -> b. f(1).", "b");
    assert_result("f(X) when X -> a; f(X) -> b. f(1 < 2).", "a");
    assert_result("f(X) when X -> a; f(X) -> b. f(true).", "b");
    assert_result("f(X) when 1 -> a; f(X) -> b. f(1).", "b");
}

#[test]
fn atom_patterns_do_not_match_booleans() {
    assert_result("f(true) -> yes; f(X) -> no. f(1 < 2).", "no");
    assert_result("f(true) -> yes; f(X) -> no. f(true).", "yes");
}

#[test]
fn parameters_do_not_leak() {
    let mut interpreter = Interpreter::new();
    interpreter.execute("X = outer.").unwrap();
    interpreter.execute("f(X) -> X.").unwrap();

    assert_eq!(interpreter.execute("f(inner).").unwrap(), "inner");
    assert_eq!(interpreter.execute("X.").unwrap(), "outer");
}

#[test]
fn functions_see_top_level_variables() {
    assert_result("Rate = 3. scale(X) -> X * Rate. scale(5).", "15");
}

#[test]
fn callee_does_not_see_caller_frame() {
    assert_failure("g() -> Y. f(Y) -> g(). f(1).",
                   "Execution error: Undefined variable: Y");
}

#[test]
fn recursion_over_lists() {
    assert_result("sum(L) when L > [] -> hd(L) + sum(tl(L)); sum(L) -> 0. sum([1, 2, 3, 4]).",
                  "10");
}

#[test]
fn improper_lists_are_rejected() {
    assert_failure("[1 | 2].", "Execution error: Improper lists not supported");
    assert_failure("[1 | ok].", "Execution error: Improper lists not supported");
    assert_result("T = [2, 3]. [1 | T].", "[1, 2, 3]");
}

#[test]
fn unknown_variable_and_function_are_distinct() {
    assert_failure("Nope.", "Execution error: Undefined variable: Nope");
    assert_failure("nope().", "Execution error: Unknown function: nope/0");
    assert_failure("nope(1, 2).", "Execution error: Unknown function: nope/2");
}

#[test]
fn comparisons_follow_the_term_order() {
    assert_result("1 < 2.", "true");
    assert_result("2 > 2.5.", "false");
    assert_result("1 <= 2.", "true");
}

#[test]
fn comparisons_across_types() {
    assert_result("100 < atom.", "true");
    assert_result("atom < {}.", "true");
    assert_result("{1, 2} < {0, 0, 0}.", "true");
    assert_result("{9} < [].", "true");
    assert_result("[z] < \"a\".", "true");
    assert_result("\"abc\" < \"abd\".", "true");
    assert_result("false < true.", "true");
}

#[test]
fn arithmetic_type_errors() {
    assert_failure("ok + 1.", "Execution error: Addition requires numbers");
    assert_failure("[1] * 2.", "Execution error: Multiplication requires numbers");
    assert_failure("-ok.", "Execution error: Unary minus requires a number");
    assert_failure("1 / 0.0.", "Execution error: Division by zero");
}

#[test]
fn overflow_is_reported() {
    assert_failure("9223372036854775807 + 1.", "Execution error: Integer overflow");
    assert_failure("-9223372036854775807 - 2.", "Execution error: Integer overflow");
}

#[test]
fn large_integers_in_float_arithmetic_round() {
    assert_result("9007199254740993 / 2.", "4503599627370496");
    assert_result("is_float(9007199254740993 / 2).", "true");
    assert_result("9007199254740993 + 0.5.", "9007199254740992");
    assert_result("9223372036854775807 * 1.0 > 0.", "true");
}

#[test]
fn negative_zero_prints_as_zero() {
    assert_result("-0.0.", "0");
    assert_result("0.0 * -1.", "0");
    assert_result("-0.5.", "-0.5");
}

#[test]
fn builtin_argument_errors() {
    assert_failure("length(ok).", "Execution error: length/1 expects a list");
    assert_failure("abs(ok).", "Execution error: abs/1 expects a number");
    assert_failure("max(1).", "Execution error: max/2 expects 2 arguments, got 1");
    assert_failure("max(a, 1).", "Execution error: max/2 expects numbers");
    assert_failure("tuple_size([]).", "Execution error: tuple_size/1 expects a tuple");
    assert_failure("byte_size(1).", "Execution error: byte_size/1 expects a binary");
}

#[test]
fn natives_cannot_be_shadowed() {
    assert_result("hd(X) -> mine. hd([1]).", "1");
}

#[test]
fn syntax_errors() {
    assert_failure("1 +.", "Execution error: Expected an expression, found '.'");
    assert_failure("f(X) -> 1; g(X) -> 2.", "Execution error: Function clause name mismatch");
    assert_failure("f({X}) -> 1.", "Execution error: Unexpected parameter");
    assert_failure("1 + 2", "Execution error: Expected '.'");
    assert_failure("\"open", "Execution error: Unterminated string");
    assert_failure("1 # 2.", "Execution error: Unexpected character: #");
}

#[test]
fn empty_source_is_undefined() {
    assert_result("", "undefined");
    assert_result("  \n\t ", "undefined");
}

#[test]
fn multiple_statements_yield_the_last() {
    assert_result("1. 2. 3.", "3");
    assert_result("A = 1.\nB = A + 1.\n{A, B}.", "{1, 2}");
}
