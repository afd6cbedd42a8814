use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::ast::{Block, Expr};
use crate::error::RuntimeError;
use crate::interpreter::evaluator::builtin::Builtin;
use crate::interpreter::evaluator::core::EvalResult;
use crate::interpreter::value::env::EnvRef;

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a program can produce: data values
/// (integers, booleans, strings, arrays, hashes), callable values
/// (functions, builtins, macros), quoted syntax, and the `Return` carrier
/// that implements early returns. `Return` never reaches user code; blocks
/// pass it upward and function application unwraps it.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value, `true` or `false`.
    Bool(bool),
    /// An immutable string.
    String(Rc<str>),
    /// The absence of a value; produced by `let`, by `if` without a taken
    /// branch, and by builtins that only have effects.
    Null,
    /// Carrier for a value travelling upward out of a `return` statement.
    Return(Box<Self>),
    /// A user-defined function together with its captured environment.
    Function(Rc<FunctionValue>),
    /// A native function provided by the interpreter.
    Builtin(Builtin),
    /// An ordered sequence of values.
    Array(Rc<Vec<Self>>),
    /// A mapping from hashable values to values.
    Hash(Rc<HashMap<HashKey, HashPair>>),
    /// A reified piece of syntax, produced by `quote`.
    Quote(Rc<Expr>),
    /// A macro together with its captured environment.
    Macro(Rc<MacroValue>),
}

/// A user-defined function: parameters, body, and the environment the
/// `fn` literal was evaluated in.
pub struct FunctionValue {
    /// Ordered parameter names.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Block,
    /// The captured defining environment.
    pub env:        EnvRef,
}

/// A macro: parameters, body, and the environment the definition was
/// extracted in. Parameters are bound to quoted argument syntax, never to
/// evaluated values.
pub struct MacroValue {
    /// Ordered parameter names.
    pub parameters: Vec<String>,
    /// The macro body.
    pub body:       Block,
    /// The captured defining environment.
    pub env:        EnvRef,
}

/// The key type used by hash values.
///
/// A `HashKey` pairs the kind of the source value with a deterministic
/// 64-bit digest of its content, so that logically equal values collide
/// deliberately: two equal strings always produce the same key, no matter
/// where they were created.
///
/// # Example
/// ```
/// use quill::interpreter::value::core::Value;
///
/// let one = Value::String("x".into());
/// let two = Value::String("x".into());
///
/// assert_eq!(one.hash_key(1).unwrap(), two.hash_key(1).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashKey {
    /// The kind of value the key was derived from.
    pub kind:   HashKind,
    /// Deterministic digest of the value's content.
    pub digest: u64,
}

/// The kinds of values that can act as hash keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashKind {
    /// Key derived from an integer.
    Integer,
    /// Key derived from a boolean.
    Boolean,
    /// Key derived from a string.
    String,
}

/// One entry of a hash value.
///
/// The original key value is stored next to the mapped value so that
/// entries can be displayed with the key the program wrote, not the
/// digest.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key, as written.
    pub key:   Value,
    /// The mapped value.
    pub value: Value,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl Value {
    /// Returns the type tag used in diagnostics, such as `INTEGER` or
    /// `FUNCTION`.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOLEAN",
            Self::String(_) => "STRING",
            Self::Null => "NULL",
            Self::Return(_) => "RETURN_VALUE",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Quote(_) => "QUOTE",
            Self::Macro(_) => "MACRO",
        }
    }

    /// Derives the hash key of this value.
    ///
    /// Only integers, booleans and strings are hashable. Integer digests
    /// are the value itself reinterpreted as unsigned; booleans digest to
    /// one and zero; strings are digested with the standard library's
    /// deterministic 64-bit hasher, so equal strings always agree.
    ///
    /// # Parameters
    /// - `line`: Source line for error reporting.
    ///
    /// # Returns
    /// The key, or `RuntimeError::UnusableAsHashKey` for any other kind of
    /// value.
    pub fn hash_key(&self, line: usize) -> EvalResult<HashKey> {
        match self {
            Self::Integer(value) => Ok(HashKey { kind:   HashKind::Integer,
                                                 digest: value.cast_unsigned(), }),
            Self::Bool(value) => Ok(HashKey { kind:   HashKind::Boolean,
                                              digest: u64::from(*value), }),
            Self::String(text) => {
                let mut hasher = DefaultHasher::new();
                text.as_bytes().hash(&mut hasher);
                Ok(HashKey { kind:   HashKind::String,
                             digest: hasher.finish(), })
            },
            _ => Err(RuntimeError::UnusableAsHashKey { kind: self.type_name(),
                                                       line }),
        }
    }

    /// Returns `true` if the value can be used as a hash key.
    #[must_use]
    pub const fn is_hashable(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Bool(_) | Self::String(_))
    }
}

impl PartialEq for Value {
    /// Structural equality for data values; identity for functions and
    /// macros.
    ///
    /// Comparing captured environments structurally could recurse through
    /// closure cycles, so callable values compare by pointer instead. The
    /// language-level `==` operator has its own rules and does not go
    /// through this implementation for collections.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => l == r,
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::String(l), Self::String(r)) => l == r,
            (Self::Null, Self::Null) => true,
            (Self::Return(l), Self::Return(r)) => l == r,
            (Self::Function(l), Self::Function(r)) => Rc::ptr_eq(l, r),
            (Self::Builtin(l), Self::Builtin(r)) => l == r,
            (Self::Array(l), Self::Array(r)) => l == r,
            (Self::Hash(l), Self::Hash(r)) => l == r,
            (Self::Quote(l), Self::Quote(r)) => l == r,
            (Self::Macro(l), Self::Macro(r)) => Rc::ptr_eq(l, r),
            _ => false,
        }
    }
}

impl std::fmt::Debug for FunctionValue {
    /// Omits the captured environment, which may reach back to this very
    /// function.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionValue")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for MacroValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MacroValue")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Value {
    /// Writes the display form used by `puts` and by the driver when it
    /// prints a program's final value.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::String(text) => write!(f, "{text}"),
            Self::Null => write!(f, "null"),
            Self::Return(inner) => write!(f, "{inner}"),
            Self::Function(function) => {
                write!(f,
                       "fn({}) {{\n{}\n}}",
                       function.parameters.join(", "),
                       function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Hash(pairs) => {
                let mut entries: Vec<(&HashKey, &HashPair)> = pairs.iter().collect();
                entries.sort_by_key(|(key, _)| **key);

                write!(f, "{{")?;
                for (index, (_, pair)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            },
            Self::Quote(node) => write!(f, "QUOTE({node})"),
            Self::Macro(definition) => {
                write!(f,
                       "macro({}) {{\n{}\n}}",
                       definition.parameters.join(", "),
                       definition.body)
            },
        }
    }
}
