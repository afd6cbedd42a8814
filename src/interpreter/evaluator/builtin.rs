use std::rc::Rc;

use crate::error::RuntimeError;
use crate::interpreter::evaluator::core::{EvalResult, is_truthy};
use crate::interpreter::value::core::Value;

/// The native functions of the interpreter.
///
/// Builtins resolve by name only after the environment misses, so a
/// binding can shadow any of them. They are values like any other: they
/// can be passed around, stored in arrays, and compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `assert(x)` fails the program when `x` is falsy.
    Assert,
    /// `first(array)` is the first element, or `null` when empty.
    First,
    /// `last(array)` is the last element, or `null` when empty.
    Last,
    /// `len(x)` is the length of a string or array.
    Len,
    /// `push(array, value)` is a new array with `value` appended.
    Push,
    /// `puts(...)` prints each argument on its own line.
    Puts,
    /// `rest(array)` is a new array of all but the first element, or
    /// `null` when empty.
    Rest,
}

impl Builtin {
    /// Resolves a name to a builtin.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::evaluator::builtin::Builtin;
    ///
    /// assert_eq!(Builtin::lookup("len"), Some(Builtin::Len));
    /// assert_eq!(Builtin::lookup("frobnicate"), None);
    /// ```
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "assert" => Some(Self::Assert),
            "first" => Some(Self::First),
            "last" => Some(Self::Last),
            "len" => Some(Self::Len),
            "push" => Some(Self::Push),
            "puts" => Some(Self::Puts),
            "rest" => Some(Self::Rest),
            _ => None,
        }
    }

    /// The name the builtin resolves under.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Assert => "assert",
            Self::First => "first",
            Self::Last => "last",
            Self::Len => "len",
            Self::Push => "push",
            Self::Puts => "puts",
            Self::Rest => "rest",
        }
    }

    /// Invokes the builtin on evaluated arguments.
    ///
    /// Every builtin except `puts` checks its arity; `puts` is variadic.
    ///
    /// # Parameters
    /// - `args`: The evaluated arguments.
    /// - `line`: Source line for error reporting.
    ///
    /// # Returns
    /// The builtin's result.
    pub fn call(self, args: &[Value], line: usize) -> EvalResult<Value> {
        match self {
            Self::Assert => {
                check_arity(args, 1, line)?;

                if is_truthy(&args[0]) {
                    Ok(Value::Null)
                } else {
                    Err(RuntimeError::AssertionFailed { line })
                }
            },
            Self::First => {
                check_arity(args, 1, line)?;

                match &args[0] {
                    Value::Array(elements) => {
                        Ok(elements.first().cloned().unwrap_or(Value::Null))
                    },
                    other => Err(self.unsupported(other, line)),
                }
            },
            Self::Last => {
                check_arity(args, 1, line)?;

                match &args[0] {
                    Value::Array(elements) => {
                        Ok(elements.last().cloned().unwrap_or(Value::Null))
                    },
                    other => Err(self.unsupported(other, line)),
                }
            },
            Self::Len => {
                check_arity(args, 1, line)?;

                match &args[0] {
                    Value::String(text) => length_value(text.len(), line),
                    Value::Array(elements) => length_value(elements.len(), line),
                    other => Err(self.unsupported(other, line)),
                }
            },
            Self::Push => {
                check_arity(args, 2, line)?;

                match &args[0] {
                    Value::Array(elements) => {
                        let mut pushed = elements.as_ref().clone();
                        pushed.push(args[1].clone());
                        Ok(Value::Array(Rc::new(pushed)))
                    },
                    other => Err(self.unsupported(other, line)),
                }
            },
            Self::Puts => {
                for arg in args {
                    println!("{arg}");
                }

                Ok(Value::Null)
            },
            Self::Rest => {
                check_arity(args, 1, line)?;

                match &args[0] {
                    Value::Array(elements) if elements.is_empty() => Ok(Value::Null),
                    Value::Array(elements) => Ok(Value::Array(Rc::new(elements[1..].to_vec()))),
                    other => Err(self.unsupported(other, line)),
                }
            },
        }
    }

    /// The error for an argument type the builtin does not accept.
    fn unsupported(self, value: &Value, line: usize) -> RuntimeError {
        RuntimeError::UnsupportedArgument { builtin: self.name(),
                                            kind:    value.type_name(),
                                            line }
    }
}

/// Converts a host-side length into an integer value.
fn length_value(len: usize, line: usize) -> EvalResult<Value> {
    i64::try_from(len).map(Value::Integer)
                      .map_err(|_| RuntimeError::IntegerOverflow { line })
}

/// Checks that the argument list has exactly the expected length.
///
/// ## Example
/// ```
/// use quill::interpreter::evaluator::builtin::check_arity;
/// use quill::interpreter::value::core::Value;
///
/// let args = vec![Value::Integer(2), Value::Integer(1)];
///
/// assert!(check_arity(&args, 2, 15).is_ok());
/// assert!(check_arity(&args, 1, 15).is_err());
/// ```
pub const fn check_arity(args: &[Value], want: usize, line: usize) -> EvalResult<()> {
    if args.len() == want {
        Ok(())
    } else {
        Err(RuntimeError::WrongArgumentCount { got: args.len(),
                                               want,
                                               line })
    }
}
