use std::io::{self, BufRead, Write};

use crate::{
    ast::FunctionDef,
    interpreter::{
        evaluator::function::core::{BUILTIN_FUNCTIONS, GUARD_FUNCTIONS},
        session::Interpreter,
    },
    util::position::Position,
};

/// Printed before a continuation line of an unfinished statement.
const CONTINUATION: &str = "..> ";

const HELP: &str = "\
Enter statements terminated by '.'.
Commands:
  :vars      list variable bindings
  :funcs     list user-defined functions
  :builtins  list native functions
  :reset     forget all bindings
  :help      show this message
  :quit      leave the shell";

/// Runs an interactive shell until `:quit` or the end of `input`.
///
/// Lines are collected until the buffered text ends with `.`, then executed
/// as one snippet. Results are printed on their own line and failures are
/// printed prefixed with `** `. The prompt counts the snippets entered so
/// far, as in `1> `.
///
/// # Errors
/// Only I/O failures on `input` or `output` are returned; interpreter errors
/// are printed and the session continues.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// let input = Cursor::new("X = 2.\nX *\n  21.\n");
/// let mut output = Vec::new();
///
/// erlite::repl::start(input, &mut output).unwrap();
///
/// let transcript = String::from_utf8(output).unwrap();
/// assert_eq!(transcript, "1> 2\n2> ..> 42\n3> \n");
/// ```
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let mut interpreter = Interpreter::new();
    let mut counter = 1;
    let mut buffer = String::new();

    loop {
        if buffer.is_empty() {
            write!(output, "{counter}> ")?;
        } else {
            write!(output, "{CONTINUATION}")?;
        }
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        if buffer.is_empty() && line.trim_start().starts_with(':') {
            if !run_command(line.trim(), &mut interpreter, &mut output)? {
                return Ok(());
            }
            continue;
        }

        buffer.push_str(&line);
        let snippet = buffer.trim();
        if snippet.is_empty() {
            buffer.clear();
            continue;
        }
        if !snippet.ends_with('.') {
            continue;
        }

        match interpreter.execute(snippet) {
            Ok(result) => writeln!(output, "{result}")?,
            Err(e) => writeln!(output, "** {e}")?,
        }
        buffer.clear();
        counter += 1;
    }
}

/// Executes a `:command` line. Returns `false` when the shell should stop.
fn run_command<W: Write>(command: &str,
                         interpreter: &mut Interpreter,
                         output: &mut W)
                         -> io::Result<bool> {
    match command {
        ":quit" | ":q" => return Ok(false),
        ":reset" => {
            interpreter.reset();
            writeln!(output, "ok")?;
        },
        ":vars" => {
            for (name, value) in interpreter.variables() {
                writeln!(output, "{name} = {value}")?;
            }
        },
        ":funcs" => {
            for (name, clauses) in interpreter.functions() {
                let def = FunctionDef { name,
                                        clauses,
                                        position: Position::default() };
                writeln!(output, "{def}")?;
            }
        },
        ":builtins" => {
            writeln!(output, "{}", BUILTIN_FUNCTIONS.join(" "))?;
            writeln!(output, "{}", GUARD_FUNCTIONS.join(" "))?;
        },
        ":help" => writeln!(output, "{HELP}")?,
        other => writeln!(output, "** Unknown command: {other}")?,
    }
    Ok(true)
}
