use quill::interpreter::evaluator::core::eval_program;
use quill::interpreter::macros::{define_macros, expand_macros};
use quill::interpreter::value::core::Value;
use quill::interpreter::value::env::Environment;

fn parse(source: &str) -> quill::ast::Program {
    quill::parse(source).unwrap_or_else(|errors| panic!("parse failed for {source:?}: {errors:?}"))
}

/// Parses, defines and expands, and returns the expanded program's
/// canonical form.
fn expand(source: &str) -> String {
    let mut program = parse(source);
    let env = Environment::new();

    define_macros(&mut program, &env);
    expand_macros(program, &env).unwrap_or_else(|error| panic!("expansion of {source:?} failed: {error}"))
                                .to_string()
}

#[test]
fn macro_definitions_are_extracted() {
    let source = "let number = 1;
                  let function = fn(x, y) { x + y };
                  let mymacro = macro(x, y) { x + y; };";

    let mut program = parse(source);
    let env = Environment::new();
    define_macros(&mut program, &env);

    assert_eq!(program.statements.len(), 2);
    assert_eq!(program.to_string(),
               "let number = 1;let function = fn(x, y) (x + y);");

    // Only the macro is bound; ordinary statements wait for evaluation.
    assert!(matches!(env.borrow().get("mymacro"), Some(Value::Macro(_))));
    assert!(env.borrow().get("number").is_none());
    assert!(env.borrow().get("function").is_none());
}

#[test]
fn macro_arguments_are_spliced_unevaluated() {
    assert_eq!(expand("let infixExpression = macro() { quote(1 + 2); };
                       infixExpression();"),
               parse("(1 + 2)").to_string());

    assert_eq!(expand("let reverse = macro(a, b) { quote(unquote(b) - unquote(a)); };
                       reverse(2 + 2, 10 - 5);"),
               parse("(10 - 5) - (2 + 2)").to_string());
}

#[test]
fn unless_macro_expands_to_an_inverted_conditional() {
    let source = "let unless = macro(condition, consequence, alternative) {
                      quote(if (!(unquote(condition))) {
                          unquote(consequence);
                      } else {
                          unquote(alternative);
                      });
                  };

                  unless(10 > 5, puts(\"not greater\"), puts(\"greater\"));";

    let expected = "if (!(10 > 5)) { puts(\"not greater\") } else { puts(\"greater\") }";

    assert_eq!(expand(source), parse(expected).to_string());
}

#[test]
fn expanded_programs_evaluate() {
    let source = "let unless = macro(condition, consequence, alternative) {
                      quote(if (!(unquote(condition))) {
                          unquote(consequence);
                      } else {
                          unquote(alternative);
                      });
                  };

                  unless(10 > 5, 1, 2)";

    let mut program = parse(source);
    let env = Environment::new();
    define_macros(&mut program, &env);
    let program = expand_macros(program, &env).unwrap();

    assert_eq!(eval_program(&program, &env).unwrap(), Value::Integer(2));
}

#[test]
fn nested_calls_expand_bottom_up() {
    // The inner call is expanded first, so the outer macro receives the
    // already-expanded syntax as its argument.
    let source = "let double = macro(x) { quote(unquote(x) + unquote(x)); };
                  double(double(1));";

    assert_eq!(expand(source), parse("(1 + 1) + (1 + 1)").to_string());
}

#[test]
fn non_macro_calls_pass_through() {
    assert_eq!(expand("let add = fn(x, y) { x + y }; add(1, 2);"),
               parse("let add = fn(x, y) { x + y }; add(1, 2);").to_string());
}

#[test]
fn expansion_is_not_hygienic() {
    // The spliced syntax refers to whatever `x` means at the call site
    // when the program eventually runs.
    let source = "let addOne = macro() { quote(x + 1) };
                  let x = 41;
                  addOne();";

    let mut program = parse(source);
    let env = Environment::new();
    define_macros(&mut program, &env);
    let program = expand_macros(program, &env).unwrap();

    assert_eq!(eval_program(&program, &env).unwrap(), Value::Integer(42));
}

#[test]
fn macro_arity_is_checked_during_expansion() {
    let source = "let reverse = macro(a, b) { quote(unquote(b) - unquote(a)); };
                  reverse(1);";

    let mut program = parse(source);
    let env = Environment::new();
    define_macros(&mut program, &env);

    assert!(expand_macros(program, &env).is_err());
}

#[test]
#[should_panic(expected = "macros may only return quoted syntax")]
fn macros_must_return_quoted_syntax() {
    let source = "let bad = macro() { 1 + 2 };
                  bad();";

    let mut program = parse(source);
    let env = Environment::new();
    define_macros(&mut program, &env);

    let _ = expand_macros(program, &env);
}
