/// AST node definitions.
///
/// Declares the `Program`, `Statement`, `Block` and `Expr` types that
/// represent the syntactic structure of source code as a tree, together
/// with the operator enums and the canonical textual rendering of every
/// node. The AST is built by the parser and walked by the evaluator and
/// the macro expander.
pub mod core;
/// Bottom-up AST rewriting.
///
/// Provides a generic structural rewrite over every node variant. Children
/// are rewritten before their parent is handed to the callback, so the
/// callback always sees fully transformed subtrees. The macro expander is
/// built on top of this.
pub mod modify;

pub use self::core::{Block, Expr, InfixOperator, PrefixOperator, Program, Statement};
