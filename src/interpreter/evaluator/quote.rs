use std::rc::Rc;

use crate::ast::Expr;
use crate::ast::modify::modify_expr;
use crate::error::RuntimeError;
use crate::interpreter::evaluator::core::{EvalResult, eval_expression};
use crate::interpreter::value::core::Value;
use crate::interpreter::value::env::EnvRef;

/// Evaluates `quote(<expression>)`.
///
/// The argument is *not* evaluated; it is captured as syntax, after every
/// `unquote(e)` call inside it has been replaced by the syntax of `e`'s
/// value (see [`eval_unquote_calls`]).
///
/// # Parameters
/// - `arguments`: The call's argument expressions, still unevaluated.
/// - `line`: Source line of the call, for error reporting.
/// - `env`: The environment `unquote` holes are evaluated in.
///
/// # Returns
/// A `Value::Quote` wrapping the captured syntax.
pub fn quote(arguments: &[Expr], line: usize, env: &EnvRef) -> EvalResult<Value> {
    if arguments.len() != 1 {
        return Err(RuntimeError::WrongArgumentCount { got:  arguments.len(),
                                                      want: 1,
                                                      line });
    }

    let node = eval_unquote_calls(arguments[0].clone(), env)?;

    Ok(Value::Quote(Rc::new(node)))
}

/// Replaces every `unquote(e)` call in a quoted subtree, bottom-up.
///
/// Each hole's expression is evaluated in the surrounding environment and
/// the resulting value is converted back into syntax. Only calls that are
/// literally named `unquote` and take exactly one argument count as
/// holes; anything else passes through untouched. Outside of `quote`,
/// `unquote` has no meaning at all.
fn eval_unquote_calls(expr: Expr, env: &EnvRef) -> EvalResult<Expr> {
    let mut failure: Option<RuntimeError> = None;

    let node = modify_expr(expr, &mut |node| {
        if failure.is_some() {
            return node;
        }

        let Expr::Call { function,
                         arguments,
                         line, } = node
        else {
            return node;
        };

        let is_unquote =
            matches!(function.as_ref(), Expr::Identifier { name, .. } if name == "unquote");

        if !is_unquote || arguments.len() != 1 {
            return Expr::Call { function,
                                arguments,
                                line };
        }

        match eval_expression(&arguments[0], env).and_then(|value| value_to_expr(value, line)) {
            Ok(replacement) => replacement,
            Err(error) => {
                failure = Some(error);
                Expr::Call { function,
                             arguments,
                             line }
            },
        }
    });

    match failure {
        Some(error) => Err(error),
        None => Ok(node),
    }
}

/// Converts a runtime value back into the syntax that would produce it.
///
/// Integers, booleans and strings become the corresponding literals, with
/// the hole's source line attached; a quoted value splices its syntax in
/// directly. Values without a syntactic form (functions, arrays, ...)
/// cannot be spliced.
fn value_to_expr(value: Value, line: usize) -> EvalResult<Expr> {
    match value {
        Value::Integer(value) => Ok(Expr::IntegerLiteral { value, line }),
        Value::Bool(value) => Ok(Expr::BooleanLiteral { value, line }),
        Value::String(text) => Ok(Expr::StringLiteral { value: text.to_string(),
                                                        line }),
        Value::Quote(node) => Ok(Rc::unwrap_or_clone(node)),
        other => Err(RuntimeError::UnquotableValue { kind: other.type_name(),
                                                     line }),
    }
}
