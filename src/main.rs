use std::{fs, io, process};

use clap::Parser;
use erlite::{
    Interpreter,
    ast::FunctionDef,
    interpreter::lexer::tokenize,
    repl,
    util::position::Position,
};

/// erlite runs programs written in a small subset of Erlang: numbers, atoms,
/// lists, tuples, variables and multi-clause functions with guards.
///
/// Without any contents, an interactive shell is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells erlite to treat the contents as a path to a source file.
    #[arg(short, long)]
    file: bool,

    /// Prints the variable and function bindings after running.
    #[arg(short, long)]
    bindings: bool,

    /// Prints the token stream before running.
    #[arg(short, long)]
    tokens: bool,

    /// Source text, or a file path with `--file`.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        if let Err(e) = repl::start(io::stdin().lock(), io::stdout()) {
            eprintln!("{e}");
            process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            process::exit(1);
        })
    } else {
        contents
    };

    if args.tokens {
        match tokenize(&script) {
            Ok(tokens) => {
                for (token, position) in tokens {
                    println!("{}:{}\t{token}", position.line, position.column);
                }
            },
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            },
        }
    }

    let mut interpreter = Interpreter::new();
    let outcome = interpreter.execute(&script);

    if args.bindings {
        for (name, value) in interpreter.variables() {
            println!("{name} = {value}");
        }
        for (name, clauses) in interpreter.functions() {
            let def = FunctionDef { name,
                                    clauses,
                                    position: Position::default() };
            println!("{def}");
        }
    }

    match outcome {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
