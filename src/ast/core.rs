/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers all expression forms of the language, from literals and
/// identifiers to operator applications, conditionals, function and macro
/// literals, calls, arrays, hashes and indexing. Every variant carries the
/// source line it originated from so that runtime errors can point back at
/// the offending code.
///
/// The `Display` implementation renders the canonical, fully parenthesized
/// form of the expression, which is what tests and quoted values print.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal.
    StringLiteral {
        /// The literal text, without the surrounding quotes.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal, `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operator applied to an operand (e.g. `-x`, `!ok`).
    Prefix {
        /// The operator.
        operator: PrefixOperator,
        /// The operand expression.
        right:    Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// An infix operator applied to two operands (e.g. `a + b`).
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Conditional expression with an optional `else` block.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: Block,
        /// Block evaluated when the condition is falsy, if present.
        alternative: Option<Block>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A function literal (e.g. `fn(x, y) { x + y }`).
    FunctionLiteral {
        /// Ordered parameter names.
        parameters: Vec<String>,
        /// The function body.
        body:       Block,
        /// Line number in the source code.
        line:       usize,
    },
    /// A macro literal (e.g. `macro(x) { quote(unquote(x)) }`).
    MacroLiteral {
        /// Ordered parameter names.
        parameters: Vec<String>,
        /// The macro body.
        body:       Block,
        /// Line number in the source code.
        line:       usize,
    },
    /// A call expression (e.g. `add(1, 2)`).
    Call {
        /// The callee; an identifier or any expression producing a
        /// function.
        function:  Box<Self>,
        /// Argument expressions, in call order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Array literal expression.
    ArrayLiteral {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Indexing expression (e.g. `arr[2]`, `hash["key"]`).
    Index {
        /// The collection being indexed.
        left:  Box<Self>,
        /// The index to access.
        index: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Hash literal expression (e.g. `{"one": 1}`).
    ///
    /// Pairs are kept in source order. Duplicate keys are accepted by the
    /// parser; evaluation applies them in order, so the last write wins.
    HashLiteral {
        /// Key/value expression pairs.
        pairs: Vec<(Self, Self)>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use quill::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier { line, .. }
            | Self::IntegerLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::BooleanLiteral { line, .. }
            | Self::Prefix { line, .. }
            | Self::Infix { line, .. }
            | Self::If { line, .. }
            | Self::FunctionLiteral { line, .. }
            | Self::MacroLiteral { line, .. }
            | Self::Call { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::Index { line, .. }
            | Self::HashLiteral { line, .. } => *line,
        }
    }
}

/// A sequence of statements delimited by braces in the source.
///
/// Blocks form the bodies of `if` arms, functions and macros. A block is
/// not an expression on its own; it only ever appears inside one of those
/// constructs.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
    /// Line number of the opening brace.
    pub line:       usize,
}

/// A single statement.
///
/// Statements are the units a program is made of. Expression statements
/// make the language expression-oriented: the value of the last statement
/// is the value of the surrounding block or program.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding introduced with `let`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound value expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// An early return from a function body.
    Return {
        /// The returned expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its value.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// A parsed program: an ordered sequence of top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements, in source order.
    pub statements: Vec<Statement>,
}

/// Represents an infix (binary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a prefix (unary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl std::fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}

/// Renders a slice of displayable items separated by `", "`.
fn comma_separated<T: std::fmt::Display>(items: &[T]) -> String {
    items.iter()
         .map(ToString::to_string)
         .collect::<Vec<_>>()
         .join(", ")
}

impl std::fmt::Display for Expr {
    /// Writes the canonical textual form of the expression.
    ///
    /// Operator applications come out fully parenthesized, which makes
    /// precedence decisions visible in tests:
    ///
    /// ```
    /// use quill::ast::{Expr, InfixOperator};
    ///
    /// let one = Expr::IntegerLiteral { value: 1, line: 1 };
    /// let two = Expr::IntegerLiteral { value: 2, line: 1 };
    /// let sum = Expr::Infix { left:     Box::new(one),
    ///                         operator: InfixOperator::Add,
    ///                         right:    Box::new(two),
    ///                         line:     1, };
    ///
    /// assert_eq!(sum.to_string(), "(1 + 2)");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Self::StringLiteral { value, .. } => write!(f, "{value}"),
            Self::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Self::Prefix { operator, right, .. } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right,
                          .. } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body, .. } => {
                write!(f, "fn({}) {body}", comma_separated(parameters))
            },
            Self::MacroLiteral { parameters, body, .. } => {
                write!(f, "macro({}) {body}", comma_separated(parameters))
            },
            Self::Call { function, arguments, .. } => {
                write!(f, "{function}({})", comma_separated(arguments))
            },
            Self::ArrayLiteral { elements, .. } => {
                write!(f, "[{}]", comma_separated(elements))
            },
            Self::Index { left, index, .. } => write!(f, "({left}[{index}])"),
            Self::HashLiteral { pairs, .. } => {
                let entries = pairs.iter()
                                   .map(|(key, value)| format!("{key}:{value}"))
                                   .collect::<Vec<_>>()
                                   .join(", ");
                write!(f, "{{{entries}}}")
            },
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Self::Return { value, .. } => write!(f, "return {value};"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
        }
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
