use std::collections::HashMap;
use std::rc::Rc;

use crate::ast::Expr;
use crate::error::RuntimeError;
use crate::interpreter::evaluator::core::{EvalResult, eval_expression};
use crate::interpreter::value::core::{HashKey, HashPair, Value};
use crate::interpreter::value::env::EnvRef;

/// Evaluates a hash literal.
///
/// Pairs are evaluated in source order: each key is evaluated and checked
/// for hashability before its value is evaluated. Inserting under an
/// already present key overwrites it, so with duplicate keys the last
/// write wins.
pub fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &EnvRef) -> EvalResult<Value> {
    let mut hash = HashMap::with_capacity(pairs.len());

    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env)?;
        let hash_key = key.hash_key(key_expr.line_number())?;

        let value = eval_expression(value_expr, env)?;
        hash.insert(hash_key, HashPair { key, value });
    }

    Ok(Value::Hash(Rc::new(hash)))
}

/// Evaluates the index operator.
///
/// Arrays are indexed by integer, hashes by any hashable value. Anything
/// else does not support indexing.
pub fn eval_index(left: &Value, index: &Value, line: usize) -> EvalResult<Value> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(position)) => {
            Ok(eval_array_index(elements, *position))
        },
        (Value::Hash(pairs), _) => eval_hash_index(pairs, index, line),
        _ => Err(RuntimeError::IndexNotSupported { kind: left.type_name(),
                                                   line }),
    }
}

/// Array indexing; out of range is `null`, not an error.
///
/// Negative positions are always out of range.
fn eval_array_index(elements: &[Value], position: i64) -> Value {
    usize::try_from(position).ok()
                             .and_then(|position| elements.get(position))
                             .cloned()
                             .unwrap_or(Value::Null)
}

/// Hash indexing; a missing key is `null`, a non-hashable key is an
/// error.
fn eval_hash_index(pairs: &HashMap<HashKey, HashPair>,
                   key: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    let hash_key = key.hash_key(line)?;

    Ok(pairs.get(&hash_key)
            .map_or(Value::Null, |pair| pair.value.clone()))
}
