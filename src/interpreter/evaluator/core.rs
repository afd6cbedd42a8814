use std::rc::Rc;

use crate::ast::{Block, Expr, Program, Statement};
use crate::error::RuntimeError;
use crate::interpreter::evaluator::builtin::Builtin;
use crate::interpreter::evaluator::collection::{eval_hash_literal, eval_index};
use crate::interpreter::evaluator::infix::eval_infix;
use crate::interpreter::evaluator::prefix::eval_prefix;
use crate::interpreter::evaluator::{call, quote};
use crate::interpreter::value::core::{FunctionValue, MacroValue, Value};
use crate::interpreter::value::env::EnvRef;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. The `?` operator is what makes
/// an error short-circuit the enclosing expression, block and program.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a program.
///
/// Statements run in order. A `return` travelling up from a nested block
/// stops the program and yields its unwrapped value; otherwise the value
/// of the last statement is the value of the program.
///
/// # Parameters
/// - `program`: The program to run; macro expansion should already have
///   happened.
/// - `env`: The global environment.
///
/// # Returns
/// The program's final value.
///
/// # Example
/// ```
/// use quill::interpreter::evaluator::core::eval_program;
/// use quill::interpreter::value::core::Value;
/// use quill::interpreter::value::env::Environment;
///
/// let program = quill::parse("let double = fn(x) { x * 2 }; double(21)").unwrap();
/// let env = Environment::new();
///
/// assert_eq!(eval_program(&program, &env).unwrap(), Value::Integer(42));
/// ```
pub fn eval_program(program: &Program, env: &EnvRef) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &program.statements {
        match eval_statement(statement, env)? {
            Value::Return(value) => return Ok(*value),
            value => result = value,
        }
    }

    Ok(result)
}

/// Evaluates a block of statements.
///
/// Like [`eval_program`], but a `return` is passed upward still wrapped,
/// so that it keeps propagating through enclosing blocks until a function
/// boundary (or the program) unwraps it.
pub fn eval_block(block: &Block, env: &EnvRef) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;

        if matches!(result, Value::Return(_)) {
            return Ok(result);
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// `let` binds in the current environment and yields `null`; `return`
/// wraps its value in the `Return` carrier; an expression statement yields
/// the expression's value.
pub fn eval_statement(statement: &Statement, env: &EnvRef) -> EvalResult<Value> {
    match statement {
        Statement::Let { name, value, .. } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.clone(), value);
            Ok(Value::Null)
        },
        Statement::Return { value, .. } => {
            let value = eval_expression(value, env)?;
            Ok(Value::Return(Box::new(value)))
        },
        Statement::Expression { expr, .. } => eval_expression(expr, env),
    }
}

/// Evaluates an expression.
///
/// This is the main dispatch of the interpreter. Evaluation is strict,
/// left to right and depth first, with two exceptions: `if` evaluates only
/// the taken branch, and `quote` does not evaluate its argument at all.
///
/// The `quote` form is recognized by the *syntactic* name in call
/// position, before any environment lookup, so rebinding the name `quote`
/// cannot disable it.
pub fn eval_expression(expr: &Expr, env: &EnvRef) -> EvalResult<Value> {
    match expr {
        Expr::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
        Expr::StringLiteral { value, .. } => Ok(Value::String(value.as_str().into())),
        Expr::BooleanLiteral { value, .. } => Ok(Value::Bool(*value)),
        Expr::Identifier { name, line } => eval_identifier(name, *line, env),
        Expr::Prefix { operator, right, line } => {
            let right = eval_expression(right, env)?;
            eval_prefix(*operator, &right, *line)
        },
        Expr::Infix { left,
                      operator,
                      right,
                      line, } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            eval_infix(*operator, &left, &right, *line)
        },
        Expr::If { condition,
                   consequence,
                   alternative,
                   .. } => eval_if(condition, consequence, alternative.as_ref(), env),
        Expr::FunctionLiteral { parameters, body, .. } => {
            Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                       body:       body.clone(),
                                                       env:        Rc::clone(env), })))
        },
        Expr::MacroLiteral { parameters, body, .. } => {
            Ok(Value::Macro(Rc::new(MacroValue { parameters: parameters.clone(),
                                                 body:       body.clone(),
                                                 env:        Rc::clone(env), })))
        },
        Expr::Call { function,
                     arguments,
                     line, } => {
            if let Expr::Identifier { name, .. } = function.as_ref()
               && name == "quote"
            {
                return quote::quote(arguments, *line, env);
            }

            call::eval_call(function, arguments, *line, env)
        },
        Expr::ArrayLiteral { elements, .. } => {
            let elements = eval_expressions(elements, env)?;
            Ok(Value::Array(Rc::new(elements)))
        },
        Expr::Index { left, index, line } => {
            let left = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            eval_index(&left, &index, *line)
        },
        Expr::HashLiteral { pairs, .. } => eval_hash_literal(pairs, env),
    }
}

/// Resolves a name against the environment, then the builtins table.
///
/// # Returns
/// The bound value, or `RuntimeError::IdentifierNotFound`.
pub fn eval_identifier(name: &str, line: usize, env: &EnvRef) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }

    if let Some(builtin) = Builtin::lookup(name) {
        return Ok(Value::Builtin(builtin));
    }

    Err(RuntimeError::IdentifierNotFound { name: name.to_string(),
                                           line })
}

/// Evaluates a conditional expression.
///
/// Only the taken branch is evaluated. With a falsy condition and no
/// `else` block the whole expression is `null`.
fn eval_if(condition: &Expr,
           consequence: &Block,
           alternative: Option<&Block>,
           env: &EnvRef)
           -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    if is_truthy(&condition) {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Ok(Value::Null)
    }
}

/// The truthiness rule used by `if` and `assert`.
///
/// Only `false` and `null` are falsy; every other value is truthy,
/// including `0` and the empty string.
///
/// # Example
/// ```
/// use quill::interpreter::evaluator::core::is_truthy;
/// use quill::interpreter::value::core::Value;
///
/// assert!(is_truthy(&Value::Integer(0)));
/// assert!(is_truthy(&Value::String("".into())));
/// assert!(!is_truthy(&Value::Bool(false)));
/// assert!(!is_truthy(&Value::Null));
/// ```
#[must_use]
pub const fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Bool(false) | Value::Null)
}

/// Evaluates a list of expressions left to right.
///
/// The first error stops the evaluation and becomes the result. Used for
/// call arguments and array elements.
pub fn eval_expressions(exprs: &[Expr], env: &EnvRef) -> EvalResult<Vec<Value>> {
    let mut values = Vec::with_capacity(exprs.len());

    for expr in exprs {
        values.push(eval_expression(expr, env)?);
    }

    Ok(values)
}
