use quill::ast::Statement;
use quill::error::ParseError;

fn parse(source: &str) -> quill::ast::Program {
    quill::parse(source).unwrap_or_else(|errors| panic!("parse failed for {source:?}: {errors:?}"))
}

fn assert_canonical(source: &str, expected: &str) {
    assert_eq!(parse(source).to_string(), expected, "for source {source:?}");
}

fn parse_errors(source: &str) -> Vec<ParseError> {
    match quill::parse(source) {
        Ok(program) => panic!("expected {source:?} to fail, parsed {program}"),
        Err(errors) => errors,
    }
}

#[test]
fn operator_precedence() {
    assert_canonical("-a * b", "((-a) * b)");
    assert_canonical("!-a", "(!(-a))");
    assert_canonical("a + b + c", "((a + b) + c)");
    assert_canonical("a + b - c", "((a + b) - c)");
    assert_canonical("a * b * c", "((a * b) * c)");
    assert_canonical("a * b / c", "((a * b) / c)");
    assert_canonical("a + b / c", "(a + (b / c))");
    assert_canonical("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)");
    assert_canonical("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))");
    assert_canonical("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))");
    assert_canonical("3 + 4 * 5 == 3 * 1 + 4 * 5",
                     "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))");
}

#[test]
fn grouped_expressions_override_precedence() {
    assert_canonical("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)");
    assert_canonical("(5 + 5) * 2", "((5 + 5) * 2)");
    assert_canonical("2 / (5 + 5)", "(2 / (5 + 5))");
    assert_canonical("-(5 + 5)", "(-(5 + 5))");
    assert_canonical("!(true == true)", "(!(true == true))");
}

#[test]
fn calls_and_indexing_bind_tightest() {
    assert_canonical("a + add(b * c) + d", "((a + add((b * c))) + d)");
    assert_canonical("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                     "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))");
    assert_canonical("a * [1, 2, 3, 4][b * c] * d",
                     "((a * ([1, 2, 3, 4][(b * c)])) * d)");
    assert_canonical("add(a * b[2], b[1], 2 * [1, 2][1])",
                     "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))");
}

#[test]
fn canonical_forms_round_trip() {
    let sources = ["let x = (1 + (2 * 3));",
                   "return (a + b);",
                   "((-a) * b)",
                   "(!(true == true))",
                   "add(1, (2 * 3))",
                   "[1, (2 * 2), 3]",
                   "(myArray[(1 + 1)])",
                   "{one:1, two:(8 / 4)}"];

    for source in sources {
        let first = parse(source).to_string();
        let second = parse(&first).to_string();
        assert_eq!(first, second, "round trip diverged for {source:?}");
    }
}

#[test]
fn let_statements() {
    let program = parse("let x = 5; let y = true; let foobar = y;");

    let names: Vec<_> = program.statements
                               .iter()
                               .map(|statement| match statement {
                                   Statement::Let { name, .. } => name.as_str(),
                                   other => panic!("expected let statement, got {other}"),
                               })
                               .collect();

    assert_eq!(names, ["x", "y", "foobar"]);
    assert_eq!(program.to_string(), "let x = 5;let y = true;let foobar = y;");
}

#[test]
fn return_statements() {
    assert_canonical("return 5;", "return 5;");
    assert_canonical("return 2 * 3;", "return (2 * 3);");
}

#[test]
fn if_expressions() {
    assert_canonical("if (x < y) { x }", "if(x < y) x");
    assert_canonical("if (x < y) { x } else { y }", "if(x < y) xelse y");
}

#[test]
fn function_literals() {
    assert_canonical("fn(x, y) { x + y; }", "fn(x, y) (x + y)");
    assert_canonical("fn() {};", "fn() ");
    assert_canonical("fn(x) { fn(y) { x + y } }", "fn(x) fn(y) (x + y)");
}

#[test]
fn macro_literals() {
    assert_canonical("macro(x, y) { x + y; }", "macro(x, y) (x + y)");
}

#[test]
fn string_and_boolean_literals() {
    assert_canonical("\"hello world\"", "hello world");
    assert_canonical("true;", "true");
    assert_canonical("false;", "false");
    assert_canonical("3 > 5 == false", "((3 > 5) == false)");
}

#[test]
fn hash_literals_keep_source_order_and_duplicates() {
    assert_canonical("{\"one\": 1, \"two\": 2, \"three\": 3}",
                     "{one:1, two:2, three:3}");
    assert_canonical("{}", "{}");

    // Duplicate keys are a parse-time non-event; evaluation resolves them.
    assert_canonical("{\"a\": 1, \"a\": 2}", "{a:1, a:2}");
}

#[test]
fn unexpected_token_errors_accumulate() {
    let errors = parse_errors("let x 5; let = 10; let 838383;");

    assert_eq!(errors[0],
               ParseError::UnexpectedToken { expected: "=".to_string(),
                                             found:    "INT".to_string(),
                                             line:     1, });
    assert_eq!(errors[1],
               ParseError::UnexpectedToken { expected: "IDENT".to_string(),
                                             found:    "=".to_string(),
                                             line:     1, });

    // Recovery re-enters at the `=` the second statement left behind, so a
    // no-prefix error is recorded before the third let's own error.
    assert_eq!(errors[2],
               ParseError::NoPrefixParseFunction { token: "=".to_string(),
                                                   line:  1, });
    assert_eq!(errors[3],
               ParseError::UnexpectedToken { expected: "IDENT".to_string(),
                                             found:    "INT".to_string(),
                                             line:     1, });
}

#[test]
fn missing_prefix_rule_is_reported() {
    let errors = parse_errors("5 + * 5;");

    assert!(errors.contains(&ParseError::NoPrefixParseFunction { token: "*".to_string(),
                                                                 line:  1, }),
            "got {errors:?}");
}

#[test]
fn unterminated_group_reports_eof() {
    let errors = parse_errors("(1 + 2");

    assert_eq!(errors[0],
               ParseError::UnexpectedToken { expected: ")".to_string(),
                                             found:    "EOF".to_string(),
                                             line:     1, });
}

#[test]
fn oversized_integer_literal_is_reported() {
    let errors = parse_errors("92233720368547758080");

    assert_eq!(errors[0],
               ParseError::InvalidIntegerLiteral { literal: "92233720368547758080".to_string(),
                                                   line:    1, });
}

#[test]
fn illegal_input_is_reported_with_its_line() {
    let errors = parse_errors("let x = 5;\nlet y = @;");

    assert_eq!(errors[0],
               ParseError::IllegalToken { token: "@".to_string(),
                                          line:  2, });
}

#[test]
fn errors_carry_the_offending_line() {
    let errors = parse_errors("let x = 1;\nlet y 2;");

    assert_eq!(errors[0],
               ParseError::UnexpectedToken { expected: "=".to_string(),
                                             found:    "INT".to_string(),
                                             line:     2, });
}

#[test]
fn error_messages_read_well() {
    let error = ParseError::UnexpectedToken { expected: ")".to_string(),
                                              found:    "EOF".to_string(),
                                              line:     3, };
    assert_eq!(error.to_string(),
               "Error on line 3: Expected next token to be ), got EOF instead.");

    let error = ParseError::NoPrefixParseFunction { token: "*".to_string(),
                                                    line:  1, };
    assert_eq!(error.to_string(),
               "Error on line 1: No prefix parse function found for *.");
}
