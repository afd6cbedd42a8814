/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST depth-first, evaluates expressions and
/// statements against an environment, applies functions and builtins, and
/// produces runtime values. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, closures, conditionals and early returns.
/// - Reports runtime errors such as type mismatches or unresolved names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// integers, strings, identifiers, operators, delimiters, and keywords.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for unrecognized input.
pub mod lexer;
/// The macro expansion pass.
///
/// Runs between parsing and evaluation. Macro definitions are lifted out
/// of the program into the environment, and every call to a defined macro
/// is replaced by the syntax tree the macro body produces. Macro arguments
/// are passed as quoted, unevaluated syntax.
///
/// # Responsibilities
/// - Extracts `let <name> = macro(...) {...}` definitions.
/// - Rewrites macro call sites via the bottom-up AST modifier.
/// - Evaluates macro bodies and splices the returned syntax in place.
pub mod macros;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of statements
/// and expressions. Expressions are parsed with a Pratt-style precedence
/// climbing algorithm.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Resolves operator precedence and associativity.
/// - Accumulates syntax errors with location info instead of aborting.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during execution, such as
/// integers, booleans, strings, arrays, hashes, functions and quoted
/// syntax, together with the lexically scoped environment they live in and
/// the hash-key protocol used by hash values.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements display, equality and hash-key derivation.
/// - Provides the environment type with lexical enclosure.
pub mod value;
