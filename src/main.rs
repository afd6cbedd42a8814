use std::fs;

use clap::Parser;
use quill::interpreter::evaluator::core::eval_program;
use quill::interpreter::macros::{define_macros, expand_macros};
use quill::interpreter::value::core::Value;
use quill::interpreter::value::env::Environment;

/// quill is a small, expression-oriented scripting language with
/// quotation-based macros.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quill to look at a file instead of an inline script.
    #[arg(short, long)]
    file: bool,

    /// Print the final value of the program once it has run, unless that
    /// value is null.
    #[arg(short, long)]
    print_result: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut program = match quill::parse(&script) {
        Ok(program) => program,
        Err(errors) => {
            for error in errors {
                eprintln!("{error}");
            }
            std::process::exit(1);
        },
    };

    let env = Environment::new();
    define_macros(&mut program, &env);

    let result =
        expand_macros(program, &env).and_then(|program| eval_program(&program, &env));

    match result {
        Ok(value) => {
            if args.print_result && !matches!(value, Value::Null) {
                println!("{value}");
            }
        },
        Err(error) => eprintln!("{error}"),
    }
}
