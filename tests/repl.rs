use std::io::Cursor;

use erlite::repl;

fn session(input: &str) -> String {
    let mut output = Vec::new();
    repl::start(Cursor::new(input), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn prompts_count_statements() {
    let transcript = session("1 + 1.\n2 + 2.\n");

    assert_eq!(transcript, "1> 2\n2> 4\n3> \n");
}

#[test]
fn errors_are_printed_and_the_session_goes_on() {
    let transcript = session("Nope.\nok.\n");

    assert!(transcript.starts_with("1> ** Execution error: Undefined variable: Nope"));
    assert!(transcript.ends_with("2> ok\n3> \n"));
}

#[test]
fn blank_lines_are_ignored() {
    let transcript = session("\n   \n7.\n");

    assert_eq!(transcript, "1> 1> 1> 7\n2> \n");
}

#[test]
fn definitions_can_span_lines() {
    let transcript = session("fact(0) -> 1;\nfact(N) -> N * fact(N - 1).\nfact(4).\n");

    assert_eq!(transcript, "1> ..> ok\n2> 24\n3> \n");
}

#[test]
fn quit_stops_reading() {
    let transcript = session(":quit\n1 + 1.\n");

    assert_eq!(transcript, "1> ");
}

#[test]
fn vars_and_funcs_list_bindings() {
    let transcript = session("B = 2.\nA = [1].\ndouble(X) -> X * 2.\n:vars\n:funcs\n");

    assert!(transcript.contains("A = [1]\nB = 2\n"));
    assert!(transcript.contains("double(X) -> X * 2.\n"));
}

#[test]
fn reset_forgets_bindings() {
    let transcript = session("X = 1.\n:reset\nX.\n");

    assert!(transcript.contains("2> ok\n2> ** Execution error: Undefined variable: X"));
}

#[test]
fn builtins_are_listed() {
    let transcript = session(":builtins\n");

    assert!(transcript.contains("abs max min length hd tl\n"));
    assert!(transcript.contains("is_atom is_number"));
}

#[test]
fn unknown_commands_are_reported() {
    let transcript = session(":frobnicate\n");

    assert!(transcript.contains("** Unknown command: :frobnicate"));
}
