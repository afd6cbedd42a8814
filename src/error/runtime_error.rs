#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// A runtime error aborts the evaluation of the enclosing expression,
/// statement list and program; the driver surfaces it to the user. Every
/// variant carries the source line of the node that produced it.
pub enum RuntimeError {
    /// Used a name that is neither bound nor a builtin.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Applied an infix operator to operands of different types.
    TypeMismatch {
        /// Type tag of the left operand.
        left:     &'static str,
        /// The operator, as written.
        operator: String,
        /// Type tag of the right operand.
        right:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Applied a prefix operator to an operand that does not support it.
    UnknownPrefixOperator {
        /// The operator, as written.
        operator: String,
        /// Type tag of the operand.
        right:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Applied an infix operator to same-typed operands that do not
    /// support it.
    UnknownOperator {
        /// Type tag of the left operand.
        left:     &'static str,
        /// The operator, as written.
        operator: String,
        /// Type tag of the right operand.
        right:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Called a value that is not callable.
    NotAFunction {
        /// Type tag of the value in call position.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function, macro or builtin with the wrong number of
    /// arguments.
    WrongArgumentCount {
        /// How many arguments the call supplied.
        got:  usize,
        /// How many arguments the callee expects.
        want: usize,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Passed a builtin an argument of a type it does not accept.
    UnsupportedArgument {
        /// Name of the builtin.
        builtin: &'static str,
        /// Type tag of the offending argument.
        kind:    &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Used a non-hashable value as a hash key.
    UnusableAsHashKey {
        /// Type tag of the offending key.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Indexed a value that does not support the index operator.
    IndexNotSupported {
        /// Type tag of the value being indexed.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to splice a value with no syntactic form into quoted code.
    UnquotableValue {
        /// Type tag of the offending value.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    IntegerOverflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `assert` call failed during execution.
    AssertionFailed {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name, line } => {
                write!(f, "Error on line {line}: Identifier not found: {name}.")
            },

            Self::TypeMismatch { left,
                                 operator,
                                 right,
                                 line, } => write!(f,
                                                   "Error on line {line}: Type mismatch: {left} {operator} {right}."),

            Self::UnknownPrefixOperator { operator, right, line } => write!(f,
                                                                            "Error on line {line}: Unknown operator: {operator}{right}."),

            Self::UnknownOperator { left,
                                    operator,
                                    right,
                                    line, } => write!(f,
                                                      "Error on line {line}: Unknown operator: {left} {operator} {right}."),

            Self::NotAFunction { kind, line } => {
                write!(f, "Error on line {line}: Not a function: {kind}.")
            },

            Self::WrongArgumentCount { got, want, line } => write!(f,
                                                                   "Error on line {line}: Wrong number of arguments: got {got}, want {want}."),

            Self::UnsupportedArgument { builtin, kind, line } => write!(f,
                                                                        "Error on line {line}: Argument to '{builtin}' is not supported, got {kind}."),

            Self::UnusableAsHashKey { kind, line } => {
                write!(f, "Error on line {line}: Unusable as hash key: {kind}.")
            },

            Self::IndexNotSupported { kind, line } => write!(f,
                                                             "Error on line {line}: Index operator not supported: {kind}."),

            Self::UnquotableValue { kind, line } => write!(f,
                                                           "Error on line {line}: Cannot splice a {kind} value into quoted code."),

            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),

            Self::IntegerOverflow { line } => write!(f,
                                                     "Error on line {line}: Integer overflow while trying to compute result."),

            Self::AssertionFailed { line } => write!(f, "Error on line {line}: Assertion failed."),
        }
    }
}

impl std::error::Error for RuntimeError {}
