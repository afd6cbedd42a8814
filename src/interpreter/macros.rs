use std::rc::Rc;

use crate::ast::modify::modify_program;
use crate::ast::{Expr, Program, Statement};
use crate::error::RuntimeError;
use crate::interpreter::evaluator::core::{EvalResult, eval_block};
use crate::interpreter::value::core::{MacroValue, Value};
use crate::interpreter::value::env::{EnvRef, Environment};

/// Extracts macro definitions from the top level of a program.
///
/// A statement is a macro definition iff it has the exact shape
/// `let <name> = macro(...) { ... }`. Each definition is turned into a
/// `Macro` value capturing the given environment and bound under the
/// `let`'s name; afterwards the definition statements are removed from the
/// program (in reverse index order, so earlier indices stay valid), since
/// there is nothing left to evaluate in them.
///
/// Macro literals anywhere else are left alone.
///
/// # Example
/// ```
/// use quill::interpreter::macros::define_macros;
/// use quill::interpreter::value::env::Environment;
///
/// let mut program = quill::parse("let id = macro(x) { quote(unquote(x)) }; 1").unwrap();
/// let env = Environment::new();
///
/// define_macros(&mut program, &env);
///
/// assert_eq!(program.to_string(), "1");
/// assert!(env.borrow().get("id").is_some());
/// ```
pub fn define_macros(program: &mut Program, env: &EnvRef) {
    let mut definitions = Vec::new();

    for (index, statement) in program.statements.iter().enumerate() {
        let Statement::Let { name,
                             value: Expr::MacroLiteral { parameters, body, .. },
                             .. } = statement
        else {
            continue;
        };

        let definition = MacroValue { parameters: parameters.clone(),
                                      body:       body.clone(),
                                      env:        Rc::clone(env), };

        env.borrow_mut()
           .set(name.clone(), Value::Macro(Rc::new(definition)));
        definitions.push(index);
    }

    for index in definitions.into_iter().rev() {
        program.statements.remove(index);
    }
}

/// Expands every macro call site in a program.
///
/// The program is rewritten bottom-up. A call expression whose callee is
/// an identifier bound to a `Macro` in `env` is replaced by the syntax its
/// body produces: the arguments are wrapped as quoted syntax *without
/// being evaluated*, bound positionally in a fresh environment enclosing
/// the macro's captured one, and the body is evaluated there.
///
/// # Returns
/// The expanded program, or the first runtime error raised by a macro
/// body.
///
/// # Panics
/// When a macro body evaluates to anything other than quoted syntax.
/// That is a bug in the macro, not a recoverable runtime condition.
pub fn expand_macros(program: Program, env: &EnvRef) -> EvalResult<Program> {
    let mut failure: Option<RuntimeError> = None;

    let expanded = modify_program(program, &mut |node| {
        if failure.is_some() {
            return node;
        }

        let Expr::Call { function,
                         arguments,
                         line, } = node
        else {
            return node;
        };

        let Some(definition) = macro_for(&function, env) else {
            return Expr::Call { function,
                                arguments,
                                line };
        };

        if arguments.len() != definition.parameters.len() {
            failure = Some(RuntimeError::WrongArgumentCount { got:  arguments.len(),
                                                              want: definition.parameters.len(),
                                                              line });
            return Expr::Call { function,
                                arguments,
                                line };
        }

        let eval_env = Environment::new_enclosed(&definition.env);
        for (parameter, argument) in definition.parameters.iter().zip(arguments) {
            eval_env.borrow_mut()
                    .set(parameter.clone(), Value::Quote(Rc::new(argument)));
        }

        match eval_block(&definition.body, &eval_env) {
            Ok(Value::Quote(node)) => Rc::unwrap_or_clone(node),
            Ok(_) => panic!("macros may only return quoted syntax"),
            Err(error) => {
                failure = Some(error);
                Expr::Call { function,
                             arguments: Vec::new(),
                             line }
            },
        }
    });

    match failure {
        Some(error) => Err(error),
        None => Ok(expanded),
    }
}

/// Resolves a call's callee to a macro definition, if it is one.
///
/// Only plain identifier callees can denote macros, and only when the
/// name is currently bound to a `Macro` value.
fn macro_for(function: &Expr, env: &EnvRef) -> Option<Rc<MacroValue>> {
    let Expr::Identifier { name, .. } = function else {
        return None;
    };

    match env.borrow().get(name) {
        Some(Value::Macro(definition)) => Some(definition),
        _ => None,
    }
}
