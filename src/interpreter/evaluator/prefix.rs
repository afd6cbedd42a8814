use crate::ast::PrefixOperator;
use crate::error::RuntimeError;
use crate::interpreter::evaluator::core::EvalResult;
use crate::interpreter::value::core::Value;

/// Evaluates a prefix operator applied to an already evaluated operand.
///
/// # Parameters
/// - `operator`: The operator.
/// - `right`: The evaluated operand.
/// - `line`: Source line for error reporting.
///
/// # Returns
/// The resulting value.
pub fn eval_prefix(operator: PrefixOperator, right: &Value, line: usize) -> EvalResult<Value> {
    match operator {
        PrefixOperator::Not => Ok(eval_not(right)),
        PrefixOperator::Negate => eval_negate(right, line),
    }
}

/// The `!` truth table.
///
/// Booleans invert, `null` stays `null`, and everything else is truthy
/// and so becomes `false`.
const fn eval_not(right: &Value) -> Value {
    match right {
        Value::Bool(value) => Value::Bool(!*value),
        Value::Null => Value::Null,
        _ => Value::Bool(false),
    }
}

/// Unary minus; integers only.
///
/// Negating `i64::MIN` has no representable result and reports an integer
/// overflow.
fn eval_negate(right: &Value, line: usize) -> EvalResult<Value> {
    match right {
        Value::Integer(value) => value.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::IntegerOverflow { line }),
        _ => Err(RuntimeError::UnknownPrefixOperator { operator: "-".to_string(),
                                                       right:    right.type_name(),
                                                       line }),
    }
}
