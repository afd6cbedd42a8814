use std::rc::Rc;

use crate::ast::InfixOperator;
use crate::error::RuntimeError;
use crate::interpreter::evaluator::core::EvalResult;
use crate::interpreter::value::core::Value;

/// Evaluates an infix operator applied to two already evaluated operands.
///
/// Dispatch order matters and matches the language rules:
/// 1. Two integers support the full operator set.
/// 2. Two strings support `+` only.
/// 3. `==` and `!=` across any other combination compare by identity.
/// 4. Operands of different types are a type mismatch.
/// 5. Anything left is an unknown operator for that type.
///
/// # Parameters
/// - `operator`: The operator.
/// - `left`: The evaluated left operand.
/// - `right`: The evaluated right operand.
/// - `line`: Source line for error reporting.
///
/// # Returns
/// The resulting value.
pub fn eval_infix(operator: InfixOperator,
                  left: &Value,
                  right: &Value,
                  line: usize)
                  -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r, line),
        (Value::String(l), Value::String(r)) => eval_string_infix(operator, l, r, line),
        _ => match operator {
            InfixOperator::Equal => Ok(Value::Bool(identity_eq(left, right))),
            InfixOperator::NotEqual => Ok(Value::Bool(!identity_eq(left, right))),
            _ if left.type_name() != right.type_name() => {
                Err(RuntimeError::TypeMismatch { left:     left.type_name(),
                                                 operator: operator.to_string(),
                                                 right:    right.type_name(),
                                                 line })
            },
            _ => Err(RuntimeError::UnknownOperator { left:     left.type_name(),
                                                     operator: operator.to_string(),
                                                     right:    right.type_name(),
                                                     line }),
        },
    }
}

/// Integer arithmetic and comparisons.
///
/// Arithmetic is checked: overflow and division by zero surface as
/// runtime errors rather than wrapping or trapping. Division truncates
/// toward zero.
fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64, line: usize) -> EvalResult<Value> {
    let value = match operator {
        InfixOperator::Add => overflow_checked(left.checked_add(right), line)?,
        InfixOperator::Sub => overflow_checked(left.checked_sub(right), line)?,
        InfixOperator::Mul => overflow_checked(left.checked_mul(right), line)?,
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }

            overflow_checked(left.checked_div(right), line)?
        },
        InfixOperator::Less => Value::Bool(left < right),
        InfixOperator::Greater => Value::Bool(left > right),
        InfixOperator::Equal => Value::Bool(left == right),
        InfixOperator::NotEqual => Value::Bool(left != right),
    };

    Ok(value)
}

const fn overflow_checked(result: Option<i64>, line: usize) -> EvalResult<Value> {
    match result {
        Some(value) => Ok(Value::Integer(value)),
        None => Err(RuntimeError::IntegerOverflow { line }),
    }
}

/// String operators; only concatenation is defined.
fn eval_string_infix(operator: InfixOperator, left: &str, right: &str, line: usize) -> EvalResult<Value> {
    if operator == InfixOperator::Add {
        return Ok(Value::String(format!("{left}{right}").into()));
    }

    Err(RuntimeError::UnknownOperator { left: "STRING",
                                        operator: operator.to_string(),
                                        right: "STRING",
                                        line })
}

/// Identity comparison for `==` and `!=` outside the integer and string
/// fast paths.
///
/// Booleans and `null` compare by tag, which gives the shared-singleton
/// semantics; reference-backed values compare by pointer, so two
/// separately constructed arrays are never equal. Values of different
/// kinds are never equal.
fn identity_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Bool(l), Value::Bool(r)) => l == r,
        (Value::Null, Value::Null) => true,
        (Value::Function(l), Value::Function(r)) => Rc::ptr_eq(l, r),
        (Value::Macro(l), Value::Macro(r)) => Rc::ptr_eq(l, r),
        (Value::Array(l), Value::Array(r)) => Rc::ptr_eq(l, r),
        (Value::Hash(l), Value::Hash(r)) => Rc::ptr_eq(l, r),
        (Value::Quote(l), Value::Quote(r)) => Rc::ptr_eq(l, r),
        (Value::Builtin(l), Value::Builtin(r)) => l == r,
        _ => false,
    }
}
