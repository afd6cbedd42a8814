/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing source
/// code. Parse errors include unexpected tokens, missing parse rules for a
/// token, and invalid literals. The parser accumulates these instead of
/// aborting, so a single run can report several of them.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches, unknown operators, unresolved
/// identifiers, bad hash keys, and failed assertions. A runtime error
/// short-circuits the evaluation that produced it.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
