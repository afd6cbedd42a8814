use crate::ast::Expr;
use crate::error::RuntimeError;
use crate::interpreter::evaluator::core::{EvalResult, eval_block, eval_expression,
                                          eval_expressions};
use crate::interpreter::value::core::Value;
use crate::interpreter::value::env::{EnvRef, Environment};

/// Evaluates a call expression.
///
/// The callee is evaluated first, then the arguments left to right; the
/// first error of either stops the call. `quote` never reaches this
/// function, since it is intercepted before the callee is evaluated.
pub fn eval_call(function: &Expr,
                 arguments: &[Expr],
                 line: usize,
                 env: &EnvRef)
                 -> EvalResult<Value> {
    let function = eval_expression(function, env)?;
    let arguments = eval_expressions(arguments, env)?;

    apply_function(&function, arguments, line)
}

/// Applies a callable value to evaluated arguments.
///
/// For a user-defined function this creates a fresh environment enclosed
/// by the function's captured one, binds the parameters positionally,
/// evaluates the body, and unwraps a top-level `return`. Builtins dispatch
/// to native code. Anything else is not callable.
///
/// # Parameters
/// - `function`: The value in call position.
/// - `arguments`: The evaluated arguments.
/// - `line`: Source line for error reporting.
///
/// # Returns
/// The call's result.
///
/// # Example
/// ```
/// use quill::interpreter::evaluator::call::apply_function;
/// use quill::interpreter::evaluator::core::eval_program;
/// use quill::interpreter::value::core::Value;
/// use quill::interpreter::value::env::Environment;
///
/// let env = Environment::new();
/// let program = quill::parse("fn(x, y) { x + y }").unwrap();
/// let function = eval_program(&program, &env).unwrap();
///
/// let result = apply_function(&function,
///                             vec![Value::Integer(2), Value::Integer(3)],
///                             1);
///
/// assert_eq!(result.unwrap(), Value::Integer(5));
/// ```
pub fn apply_function(function: &Value, arguments: Vec<Value>, line: usize) -> EvalResult<Value> {
    match function {
        Value::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return Err(RuntimeError::WrongArgumentCount { got:  arguments.len(),
                                                              want: function.parameters.len(),
                                                              line });
            }

            let env = Environment::new_enclosed(&function.env);
            for (parameter, argument) in function.parameters.iter().zip(arguments) {
                env.borrow_mut().set(parameter.clone(), argument);
            }

            let result = eval_block(&function.body, &env)?;
            Ok(unwrap_return(result))
        },
        Value::Builtin(builtin) => builtin.call(&arguments, line),
        _ => Err(RuntimeError::NotAFunction { kind: function.type_name(),
                                              line }),
    }
}

/// Strips the `Return` carrier off a function body's result.
///
/// Without this, a `return` inside a called function would keep
/// propagating and stop the *caller* as well.
fn unwrap_return(value: Value) -> Value {
    match value {
        Value::Return(inner) => *inner,
        other => other,
    }
}
