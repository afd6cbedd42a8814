use crate::ast::{Block, Expr, Program, Statement};

/// Rewrites every expression in a program, bottom-up.
///
/// The modifier is called on each expression *after* its children have been
/// rewritten, so replacements compose: a callback that rewrites `1` into
/// `2` sees the already-rewritten operands of `1 + 1` before the sum node
/// itself is presented.
///
/// The traversal produces a fresh tree; the input is consumed rather than
/// mutated in place.
///
/// # Parameters
/// - `program`: The program to rewrite.
/// - `modifier`: Callback applied to every expression node.
///
/// # Returns
/// The rewritten program.
///
/// # Example
/// ```
/// use quill::ast::modify::modify_program;
/// use quill::ast::{Expr, Program, Statement};
///
/// let program = Program { statements: vec![Statement::Expression { expr: Expr::IntegerLiteral { value: 1,
///                                                                                               line:  1, },
///                                                                  line: 1, }], };
///
/// let doubled = modify_program(program, &mut |expr| match expr {
///                   Expr::IntegerLiteral { value, line } => Expr::IntegerLiteral { value: value * 2,
///                                                                                  line },
///                   other => other,
///               });
///
/// assert_eq!(doubled.to_string(), "2");
/// ```
pub fn modify_program<F>(program: Program, modifier: &mut F) -> Program
    where F: FnMut(Expr) -> Expr
{
    let statements = program.statements
                            .into_iter()
                            .map(|statement| modify_statement(statement, modifier))
                            .collect();

    Program { statements }
}

/// Rewrites the expressions inside a single statement.
///
/// The statement shell (its kind, name and line) is preserved; only the
/// contained expressions are run through the modifier.
pub fn modify_statement<F>(statement: Statement, modifier: &mut F) -> Statement
    where F: FnMut(Expr) -> Expr
{
    match statement {
        Statement::Let { name, value, line } => Statement::Let { name,
                                                                 value: modify_expr(value, modifier),
                                                                 line },
        Statement::Return { value, line } => Statement::Return { value: modify_expr(value, modifier),
                                                                 line },
        Statement::Expression { expr, line } => Statement::Expression { expr: modify_expr(expr, modifier),
                                                                        line },
    }
}

/// Rewrites every statement of a block.
pub fn modify_block<F>(block: Block, modifier: &mut F) -> Block
    where F: FnMut(Expr) -> Expr
{
    let statements = block.statements
                          .into_iter()
                          .map(|statement| modify_statement(statement, modifier))
                          .collect();

    Block { statements,
            line: block.line }
}

/// Rewrites an expression tree, bottom-up.
///
/// Composite nodes are reconstructed with rewritten children and then
/// passed to the modifier; leaf nodes (identifiers and literals) are passed
/// to the modifier directly. Parameter lists are treated as atoms: they are
/// plain names, not expression nodes.
pub fn modify_expr<F>(expr: Expr, modifier: &mut F) -> Expr
    where F: FnMut(Expr) -> Expr
{
    let rewritten = match expr {
        Expr::Prefix { operator, right, line } => Expr::Prefix { operator,
                                                                 right: Box::new(modify_expr(*right, modifier)),
                                                                 line },
        Expr::Infix { left,
                      operator,
                      right,
                      line, } => Expr::Infix { left: Box::new(modify_expr(*left, modifier)),
                                               operator,
                                               right: Box::new(modify_expr(*right, modifier)),
                                               line },
        Expr::If { condition,
                   consequence,
                   alternative,
                   line, } => Expr::If { condition: Box::new(modify_expr(*condition, modifier)),
                                         consequence: modify_block(consequence, modifier),
                                         alternative: alternative.map(|block| modify_block(block, modifier)),
                                         line },
        Expr::FunctionLiteral { parameters, body, line } => {
            Expr::FunctionLiteral { parameters,
                                    body: modify_block(body, modifier),
                                    line }
        },
        Expr::MacroLiteral { parameters, body, line } => {
            Expr::MacroLiteral { parameters,
                                 body: modify_block(body, modifier),
                                 line }
        },
        Expr::Call { function,
                     arguments,
                     line, } => {
            let arguments = arguments.into_iter()
                                     .map(|argument| modify_expr(argument, modifier))
                                     .collect();
            Expr::Call { function: Box::new(modify_expr(*function, modifier)),
                         arguments,
                         line }
        },
        Expr::ArrayLiteral { elements, line } => {
            let elements = elements.into_iter()
                                   .map(|element| modify_expr(element, modifier))
                                   .collect();
            Expr::ArrayLiteral { elements, line }
        },
        Expr::Index { left, index, line } => Expr::Index { left: Box::new(modify_expr(*left, modifier)),
                                                           index: Box::new(modify_expr(*index, modifier)),
                                                           line },
        Expr::HashLiteral { pairs, line } => {
            let pairs = pairs.into_iter()
                             .map(|(key, value)| {
                                 (modify_expr(key, modifier), modify_expr(value, modifier))
                             })
                             .collect();
            Expr::HashLiteral { pairs, line }
        },
        leaf => leaf,
    };

    modifier(rewritten)
}
