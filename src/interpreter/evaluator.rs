/// Native functions.
///
/// Declares the builtin functions that are available without any binding,
/// such as `len`, `push` and `puts`, together with their dispatch and
/// arity checking.
pub mod builtin;

/// Call evaluation.
///
/// Applies user-defined functions and builtins to evaluated arguments,
/// sets up call frames, and unwraps early returns.
pub mod call;

/// Array and hash evaluation.
///
/// Builds hash values from literals and implements the index operator for
/// arrays and hashes.
pub mod collection;

/// Core evaluation logic.
///
/// Contains the main dispatch over statements and expressions, block and
/// program sequencing, identifier resolution and truthiness.
pub mod core;

/// Infix operator evaluation.
///
/// Implements arithmetic and comparisons on integers, string
/// concatenation, and identity equality across other value kinds.
pub mod infix;

/// Prefix operator evaluation.
///
/// Implements logical negation and arithmetic negation.
pub mod prefix;

/// Quotation.
///
/// Implements `quote(...)`, which captures its argument as syntax instead
/// of evaluating it, and the `unquote(...)` holes inside quoted syntax.
pub mod quote;
