/// Core parser state.
///
/// Contains the `Parser` type, its two-token window over the token stream,
/// the precedence table, and the error accumulation machinery.
pub mod core;

/// Expression parsing.
///
/// Implements the Pratt-style precedence climbing loop together with the
/// prefix and infix parse rules for every expression form.
pub mod expression;

/// Statement parsing.
///
/// Implements `let`, `return` and expression statements, and brace-
/// delimited blocks.
pub mod statement;
