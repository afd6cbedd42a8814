use quill::error::RuntimeError;
use quill::interpreter::evaluator::core::eval_program;
use quill::interpreter::macros::{define_macros, expand_macros};
use quill::interpreter::value::core::Value;
use quill::interpreter::value::env::Environment;

fn eval(source: &str) -> Result<Value, RuntimeError> {
    let mut program =
        quill::parse(source).unwrap_or_else(|errors| panic!("parse failed for {source:?}: {errors:?}"));
    let env = Environment::new();

    define_macros(&mut program, &env);
    let program = expand_macros(program, &env)?;

    eval_program(&program, &env)
}

fn assert_value(source: &str, expected: &Value) {
    match eval(source) {
        Ok(value) => assert_eq!(&value, expected, "for source {source:?}"),
        Err(error) => panic!("evaluation of {source:?} failed: {error}"),
    }
}

fn assert_integer(source: &str, expected: i64) {
    assert_value(source, &Value::Integer(expected));
}

fn assert_error(source: &str, expected: &RuntimeError) {
    match eval(source) {
        Ok(value) => panic!("expected {source:?} to fail, got {value}"),
        Err(error) => assert_eq!(&error, expected, "for source {source:?}"),
    }
}

#[test]
fn integer_arithmetic() {
    assert_integer("5", 5);
    assert_integer("-5", -5);
    assert_integer("5 + 5 + 5 + 5 - 10", 10);
    assert_integer("2 * 2 * 2 * 2 * 2", 32);
    assert_integer("-50 + 100 + -50", 0);
    assert_integer("5 + 5 * 2", 15);
    assert_integer("(5 + 5) * 2", 20);
    assert_integer("20 + 2 * -10", 0);
    assert_integer("50 / 2 * 2 + 10", 60);
    assert_integer("3 * (3 * 3) + 10", 37);
    assert_integer("7 / 2", 3);
    assert_integer("-7 / 2", -3);
}

#[test]
fn boolean_operators() {
    assert_value("true", &Value::Bool(true));
    assert_value("1 < 2", &Value::Bool(true));
    assert_value("1 > 2", &Value::Bool(false));
    assert_value("1 == 1", &Value::Bool(true));
    assert_value("1 != 2", &Value::Bool(true));
    assert_value("true == true", &Value::Bool(true));
    assert_value("false != true", &Value::Bool(true));
    assert_value("(1 < 2) == true", &Value::Bool(true));
    assert_value("(1 > 2) == true", &Value::Bool(false));
}

#[test]
fn bang_operator() {
    assert_value("!true", &Value::Bool(false));
    assert_value("!false", &Value::Bool(true));
    assert_value("!5", &Value::Bool(false));
    assert_value("!!true", &Value::Bool(true));
    assert_value("!!5", &Value::Bool(true));

    // Negating the absence of a value yields the absence of a value.
    assert_value("let nothing = if (false) { 1 }; !nothing", &Value::Null);
}

#[test]
fn mixed_type_equality_is_identity() {
    assert_value("5 == true", &Value::Bool(false));
    assert_value("5 != true", &Value::Bool(true));
    assert_value("let a = [1]; a == a", &Value::Bool(true));
    assert_value("[1] == [1]", &Value::Bool(false));
}

#[test]
fn string_concatenation() {
    assert_value("\"Hello\" + \" \" + \"World\"", &Value::String("Hello World".into()));

    assert_error("\"a\" - \"b\"",
                 &RuntimeError::UnknownOperator { left:     "STRING",
                                                  operator: "-".to_string(),
                                                  right:    "STRING",
                                                  line:     1, });
    assert_error("\"a\" == \"a\"",
                 &RuntimeError::UnknownOperator { left:     "STRING",
                                                  operator: "==".to_string(),
                                                  right:    "STRING",
                                                  line:     1, });
}

#[test]
fn if_expressions() {
    assert_integer("if (true) { 10 }", 10);
    assert_value("if (false) { 10 }", &Value::Null);
    assert_integer("if (1) { 10 }", 10);
    assert_integer("if (0) { 1 } else { 2 }", 1);
    assert_integer("if (1 < 2) { 10 } else { 20 }", 10);
    assert_integer("if (1 > 2) { 10 } else { 20 }", 20);
    assert_integer("if (\"\") { 1 } else { 2 }", 1);
    assert_integer("let nothing = if (false) { 1 }; if (nothing) { 1 } else { 2 }",
                   2);
}

#[test]
fn return_statements_unwrap_at_program_level() {
    assert_integer("return 10;", 10);
    assert_integer("return 10; 9;", 10);
    assert_integer("return 2 * 5; 9;", 10);
    assert_integer("9; return 2 * 5; 9;", 10);
    assert_integer("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10);
}

#[test]
fn let_bindings() {
    assert_integer("let a = 5; a;", 5);
    assert_integer("let a = 5 * 5; a;", 25);
    assert_integer("let a = 5; let b = a; b;", 5);
    assert_integer("let a = 5; let b = a; let c = a + b + 5; c;", 15);
    assert_value("let a = 5;", &Value::Null);
}

#[test]
fn functions_and_closures() {
    assert_integer("let identity = fn(x) { x; }; identity(5);", 5);
    assert_integer("let identity = fn(x) { return x; }; identity(5);", 5);
    assert_integer("let double = fn(x) { x * 2; }; double(5);", 10);
    assert_integer("let add = fn(x, y) { x + y; }; add(5, 5);", 10);
    assert_integer("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20);
    assert_integer("fn(x) { x; }(5)", 5);

    assert_integer("let newAdder = fn(x) { fn(y) { x + y } };
                    let addTwo = newAdder(2);
                    addTwo(3);",
                   5);

    // The captured frame is shared, not copied.
    assert_integer("let counter = fn(x) { if (x > 2) { x } else { counter(x + 1) } };
                    counter(0);",
                   3);
}

#[test]
fn mutually_recursive_bindings() {
    assert_value("let isEven = fn(n) { if (n == 0) { true } else { isOdd(n - 1) } };
                  let isOdd = fn(n) { if (n == 0) { false } else { isEven(n - 1) } };
                  isEven(10)",
                 &Value::Bool(true));
}

#[test]
fn user_function_arity_is_checked() {
    assert_error("let add = fn(x, y) { x + y }; add(1)",
                 &RuntimeError::WrongArgumentCount { got:  1,
                                                     want: 2,
                                                     line: 1, });
}

#[test]
fn error_propagation() {
    assert_error("5 + true;",
                 &RuntimeError::TypeMismatch { left:     "INTEGER",
                                               operator: "+".to_string(),
                                               right:    "BOOLEAN",
                                               line:     1, });
    assert_error("5 + true; 5;",
                 &RuntimeError::TypeMismatch { left:     "INTEGER",
                                               operator: "+".to_string(),
                                               right:    "BOOLEAN",
                                               line:     1, });
    assert_error("-true",
                 &RuntimeError::UnknownPrefixOperator { operator: "-".to_string(),
                                                        right:    "BOOLEAN",
                                                        line:     1, });
    assert_error("true + false;",
                 &RuntimeError::UnknownOperator { left:     "BOOLEAN",
                                                  operator: "+".to_string(),
                                                  right:    "BOOLEAN",
                                                  line:     1, });
    assert_error("5; true + false; 5",
                 &RuntimeError::UnknownOperator { left:     "BOOLEAN",
                                                  operator: "+".to_string(),
                                                  right:    "BOOLEAN",
                                                  line:     1, });
    assert_error("if (10 > 1) { true + false; }",
                 &RuntimeError::UnknownOperator { left:     "BOOLEAN",
                                                  operator: "+".to_string(),
                                                  right:    "BOOLEAN",
                                                  line:     1, });
    assert_error("foobar",
                 &RuntimeError::IdentifierNotFound { name: "foobar".to_string(),
                                                     line: 1, });
    assert_error("5(1)",
                 &RuntimeError::NotAFunction { kind: "INTEGER",
                                               line: 1, });
}

#[test]
fn runtime_errors_carry_their_line() {
    assert_error("let a = 1;\nlet b = a + true;",
                 &RuntimeError::TypeMismatch { left:     "INTEGER",
                                               operator: "+".to_string(),
                                               right:    "BOOLEAN",
                                               line:     2, });
}

#[test]
fn checked_integer_arithmetic() {
    assert_error("5 / 0", &RuntimeError::DivisionByZero { line: 1 });
    assert_error("9223372036854775807 + 1",
                 &RuntimeError::IntegerOverflow { line: 1 });
    assert_error("-9223372036854775807 - 2",
                 &RuntimeError::IntegerOverflow { line: 1 });
}

#[test]
fn array_literals_and_indexing() {
    assert_value("[1, 2 * 2, 3 + 3]",
                 &Value::from(vec![Value::Integer(1), Value::Integer(4), Value::Integer(6)]));

    assert_integer("let a = [1, 2, 3]; a[1]", 2);
    assert_integer("[1, 2, 3][0]", 1);
    assert_integer("let myArray = [1, 2, 3]; myArray[2];", 3);
    assert_integer("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];",
                   6);

    // Out of range, including negative positions, is null rather than an
    // error.
    assert_value("[1, 2, 3][3]", &Value::Null);
    assert_value("[1, 2, 3][-1]", &Value::Null);

    assert_error("5[0]",
                 &RuntimeError::IndexNotSupported { kind: "INTEGER",
                                                    line: 1, });
}

#[test]
fn hash_literals_and_indexing() {
    assert_integer("{\"one\": 1, \"two\": 2}[\"one\"]", 1);
    assert_integer("let key = \"two\"; {\"one\": 1, \"two\": 2}[key]", 2);
    assert_integer("{1: 1, 2: 2}[2]", 2);
    assert_integer("{true: 1, false: 2}[true]", 1);
    assert_integer("{\"a\": 6 / 2, 4: 4}[\"a\"]", 3);

    assert_value("{\"foo\": 5}[\"bar\"]", &Value::Null);
    assert_value("{}[\"foo\"]", &Value::Null);

    // Later duplicates overwrite earlier ones.
    assert_integer("{\"a\": 1, \"a\": 2}[\"a\"]", 2);

    assert_error("{\"name\": 1}[fn(x) { x }];",
                 &RuntimeError::UnusableAsHashKey { kind: "FUNCTION",
                                                    line: 1, });
    assert_error("{fn(x) { x }: 1}",
                 &RuntimeError::UnusableAsHashKey { kind: "FUNCTION",
                                                    line: 1, });
}

#[test]
fn hash_keys_compare_by_content() {
    let one = Value::String("x".into());
    let two = Value::String("x".into());
    let other = Value::String("y".into());

    assert_eq!(one.hash_key(1).unwrap(), two.hash_key(1).unwrap());
    assert_ne!(one.hash_key(1).unwrap(), other.hash_key(1).unwrap());

    // The same digest under different kinds stays distinct.
    assert_ne!(Value::Integer(1).hash_key(1).unwrap(),
               Value::Bool(true).hash_key(1).unwrap());
}

#[test]
fn builtin_len() {
    assert_integer("len(\"\")", 0);
    assert_integer("len(\"four\")", 4);
    assert_integer("len(\"hello world\")", 11);
    assert_integer("len([1, 2, 3])", 3);
    assert_integer("len([])", 0);

    assert_error("len(1)",
                 &RuntimeError::UnsupportedArgument { builtin: "len",
                                                      kind:    "INTEGER",
                                                      line:    1, });
    assert_error("len(\"one\", \"two\")",
                 &RuntimeError::WrongArgumentCount { got:  2,
                                                     want: 1,
                                                     line: 1, });
}

#[test]
fn builtin_array_helpers() {
    assert_integer("first([1, 2, 3])", 1);
    assert_value("first([])", &Value::Null);
    assert_integer("last([1, 2, 3])", 3);
    assert_value("last([])", &Value::Null);

    assert_value("rest([1, 2, 3])",
                 &Value::from(vec![Value::Integer(2), Value::Integer(3)]));
    assert_value("rest([1])", &Value::from(Vec::new()));
    assert_value("rest([])", &Value::Null);

    assert_value("push([1], 2)",
                 &Value::from(vec![Value::Integer(1), Value::Integer(2)]));
    assert_value("let a = [1]; push(a, 2); a",
                 &Value::from(vec![Value::Integer(1)]));

    assert_error("push(1, 1)",
                 &RuntimeError::UnsupportedArgument { builtin: "push",
                                                      kind:    "INTEGER",
                                                      line:    1, });
}

#[test]
fn builtin_assert() {
    assert_value("assert(1 == 1)", &Value::Null);
    assert_error("assert(1 == 2)", &RuntimeError::AssertionFailed { line: 1 });
    assert_error("assert(true, true)",
                 &RuntimeError::WrongArgumentCount { got:  2,
                                                     want: 1,
                                                     line: 1, });
}

#[test]
fn builtins_can_be_shadowed() {
    assert_integer("let len = 5; len", 5);
}

#[test]
fn quote_captures_syntax_unevaluated() {
    for (source, expected) in [("quote(5)", "5"),
                               ("quote(5 + 8)", "(5 + 8)"),
                               ("quote(foobar)", "foobar"),
                               ("quote(foobar + barfoo)", "(foobar + barfoo)")]
    {
        match eval(source) {
            Ok(Value::Quote(node)) => assert_eq!(node.to_string(), expected),
            other => panic!("expected quote from {source:?}, got {other:?}"),
        }
    }
}

#[test]
fn unquote_splices_evaluated_values() {
    for (source, expected) in [("quote(unquote(4))", "4"),
                               ("quote(unquote(4 + 4))", "8"),
                               ("quote(8 + unquote(4 + 4))", "(8 + 8)"),
                               ("quote(unquote(4 + 4) + 8)", "(8 + 8)"),
                               ("let foobar = 8; quote(unquote(foobar))", "8"),
                               ("quote(unquote(true))", "true"),
                               ("quote(unquote(true == false))", "false"),
                               ("let x = 5; quote(unquote(x + 1))", "6"),
                               ("quote(unquote(quote(4 + 4)))", "(4 + 4)"),
                               ("let quotedInfixExpression = quote(4 + 4);
                                 quote(unquote(4 + 4) + unquote(quotedInfixExpression))",
                                "(8 + (4 + 4))")]
    {
        match eval(source) {
            Ok(Value::Quote(node)) => assert_eq!(node.to_string(), expected, "for {source:?}"),
            other => panic!("expected quote from {source:?}, got {other:?}"),
        }
    }
}

#[test]
fn quote_is_not_an_ordinary_identifier() {
    // Rebinding the name cannot disable quotation.
    match eval("let quote = 1; quote(4)") {
        Ok(Value::Quote(node)) => assert_eq!(node.to_string(), "4"),
        other => panic!("expected quote, got {other:?}"),
    }

    assert_error("quote(1, 2)",
                 &RuntimeError::WrongArgumentCount { got:  2,
                                                     want: 1,
                                                     line: 1, });
}

#[test]
fn unquote_outside_quote_is_unbound() {
    assert_error("unquote(4)",
                 &RuntimeError::IdentifierNotFound { name: "unquote".to_string(),
                                                     line: 1, });
}

#[test]
fn errors_inside_unquote_propagate() {
    assert_error("quote(unquote(missing))",
                 &RuntimeError::IdentifierNotFound { name: "missing".to_string(),
                                                     line: 1, });
    assert_error("quote(unquote(fn(x) { x }))",
                 &RuntimeError::UnquotableValue { kind: "FUNCTION",
                                                  line: 1, });
}

#[test]
fn value_display_forms() {
    match eval("fn(x) { x + 2 }") {
        Ok(value) => assert_eq!(value.to_string(), "fn(x) {\n(x + 2)\n}"),
        Err(error) => panic!("{error}"),
    }

    match eval("[1, \"two\", true]") {
        Ok(value) => assert_eq!(value.to_string(), "[1, two, true]"),
        Err(error) => panic!("{error}"),
    }

    match eval("quote(1 + 2)") {
        Ok(value) => assert_eq!(value.to_string(), "QUOTE((1 + 2))"),
        Err(error) => panic!("{error}"),
    }

    assert_eq!(Value::Null.to_string(), "null");
}

#[test]
fn runtime_error_messages_read_well() {
    let error = RuntimeError::TypeMismatch { left:     "INTEGER",
                                             operator: "+".to_string(),
                                             right:    "BOOLEAN",
                                             line:     1, };
    assert_eq!(error.to_string(),
               "Error on line 1: Type mismatch: INTEGER + BOOLEAN.");

    let error = RuntimeError::WrongArgumentCount { got:  2,
                                                   want: 1,
                                                   line: 4, };
    assert_eq!(error.to_string(),
               "Error on line 4: Wrong number of arguments: got 2, want 1.");

    let error = RuntimeError::UnusableAsHashKey { kind: "FUNCTION",
                                                  line: 2, };
    assert_eq!(error.to_string(),
               "Error on line 2: Unusable as hash key: FUNCTION.");
}
