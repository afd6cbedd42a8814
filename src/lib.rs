//! # quill
//!
//! quill is a small, dynamically typed, expression-oriented scripting
//! language written in Rust. It supports integers, booleans, strings,
//! arrays, hashes, first-class functions with closures, and compile-time
//! macros built on quoted syntax.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::ast::Program;
use crate::error::ParseError;
use crate::interpreter::evaluator::core::eval_program;
use crate::interpreter::lexer::tokenize;
use crate::interpreter::macros::{define_macros, expand_macros};
use crate::interpreter::parser::core::Parser;
use crate::interpreter::value::core::Value;
use crate::interpreter::value::env::Environment;

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent
/// the syntactic structure of source code as a tree, plus a generic
/// bottom-up rewriter over that tree. The AST is built by the parser,
/// rewritten by the macro expander, and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression, statement, block and program types for all
///   language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Renders every node in a canonical textual form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing,
/// parsing, or evaluating code. It standardizes error reporting and
/// carries detailed information about failures, including source lines
/// for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, macro expansion, evaluation,
/// value representations and environments to provide a complete runtime
/// for source code. It exposes the building blocks the crate-level entry
/// points are made of.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, macro pass,
///   evaluator and value types.
/// - Provides entry points for tokenizing, parsing and evaluating code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Lexes and parses a source text into a program.
///
/// Parse errors do not abort the parser; everything it managed to record
/// is returned together, so a driver can report them all at once.
///
/// # Errors
/// Returns every accumulated [`ParseError`] when the source does not
/// parse cleanly.
///
/// # Examples
/// ```
/// let program = quill::parse("1 + 2 * 3").unwrap();
/// assert_eq!(program.to_string(), "(1 + (2 * 3))");
///
/// let errors = quill::parse("let = 5;").unwrap_err();
/// assert!(!errors.is_empty());
/// ```
pub fn parse(source: &str) -> Result<Program, Vec<ParseError>> {
    let tokens = tokenize(source).map_err(|error| vec![error])?;

    let mut parser = Parser::new(tokens);
    let program = parser.parse_program();

    if parser.errors().is_empty() {
        Ok(program)
    } else {
        Err(parser.into_errors())
    }
}

/// Runs a complete source text and returns the final result of execution.
///
/// This function parses the source, extracts and expands macros, and
/// evaluates the resulting program in a fresh environment. With
/// `print_result` set, the program's final value is printed to stdout
/// unless it is `null`.
///
/// # Errors
/// Returns an error if parsing fails (the first recorded parse error), or
/// if macro expansion or evaluation raises a runtime error.
///
/// # Examples
/// ```
/// use quill::run;
///
/// // Simple expression: evaluation succeeds and nothing is printed.
/// let res = run("let result = 2 + 2; assert(result == 4)", false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown binding).
/// let res = run("let y = x + 1", false); // 'x' is not defined
/// assert!(res.is_err());
/// ```
pub fn run(source: &str, print_result: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut program = match parse(source) {
        Ok(program) => program,
        Err(mut errors) => return Err(Box::new(errors.remove(0))),
    };

    let env = Environment::new();
    define_macros(&mut program, &env);
    let program = expand_macros(program, &env)?;

    let result = eval_program(&program, &env)?;

    if print_result && !matches!(result, Value::Null) {
        println!("{result}");
    }

    Ok(())
}
