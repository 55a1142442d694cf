use tinycalc::{
    error::{Error, LexError, ParseError, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::core::eval,
        lexer::tokenize,
        parser::core::parse_expression,
    },
    run_source,
};

fn eval_expr_with(src: &str, env: &Environment) -> f64 {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("Lexing '{src}' failed: {e}"));
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter).unwrap_or_else(|e| panic!("Parsing '{src}' failed: {e}"));
    assert!(iter.next().is_none(), "Trailing tokens after '{src}'");
    eval(&expr, env).unwrap_or_else(|e| panic!("Evaluating '{src}' failed: {e}"))
}

fn eval_expr(src: &str) -> f64 {
    eval_expr_with(src, &Environment::new())
}

fn assert_failure(src: &str) -> Error {
    match run_source(src) {
        Ok(_) => panic!("Script '{src}' succeeded but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn operator_precedence() {
    assert_eq!(eval_expr("1 + 2 * 3"), 7.0);
    assert_eq!(eval_expr("2 * 3 + 1"), 7.0);
    assert_eq!(eval_expr("10 - 4 / 2"), 8.0);
}

#[test]
fn left_associativity() {
    assert_eq!(eval_expr("8 - 3 - 2"), 3.0);
    assert_eq!(eval_expr("16 / 4 / 2"), 2.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(eval_expr("(1 + 2) * 3"), 9.0);
    assert_eq!(eval_expr("2 * (8 - (1 + 2))"), 10.0);
}

#[test]
fn division_is_ieee_754() {
    assert_eq!(eval_expr("10 / 4"), 2.5);
    assert_eq!(eval_expr("1 / 0"), f64::INFINITY);
    assert!(eval_expr("0 / 0").is_nan());
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert!(run_source("print 1 / 0;").is_ok());
}

#[test]
fn assignment_then_read() {
    let env = run_source("x = 5; print x + 1;").expect("Script failed");

    assert_eq!(env.get("x"), Some(5.0));
    assert_eq!(eval_expr_with("x + 1", &env), 6.0);
}

#[test]
fn reassignment_overwrites_without_duplicates() {
    let env = run_source("x = 1; x = 2;").expect("Script failed");

    assert_eq!(env.get("x"), Some(2.0));
    assert_eq!(env.len(), 1);
}

#[test]
fn variable_names_are_case_sensitive() {
    let env = run_source("value = 1; Value = 2;").expect("Script failed");

    assert_eq!(env.get("value"), Some(1.0));
    assert_eq!(env.get("Value"), Some(2.0));
}

#[test]
fn undefined_variable_read_fails() {
    let err = assert_failure("print y;");

    match err {
        Error::Runtime(RuntimeError::UndefinedVariable { name, .. }) => assert_eq!(name, "y"),
        other => panic!("Expected an undefined-variable error, got: {other}"),
    }
}

#[test]
fn bare_identifier_is_an_expression_statement() {
    assert!(run_source("x = 1; x;").is_ok());
    assert!(matches!(assert_failure("x;"), Error::Runtime(_)));
}

#[test]
fn malformed_input_fails_fast() {
    assert!(matches!(assert_failure("x = ;"), Error::Parse(_)));
    assert!(matches!(assert_failure("1 @ 2;"), Error::Lex(_)));
}

#[test]
fn missing_semicolon_is_rejected() {
    assert!(matches!(assert_failure("print 1"),
                     Error::Parse(ParseError::ExpectedSemicolon { .. })));
    assert!(matches!(assert_failure("x = 1 print x;"),
                     Error::Parse(ParseError::ExpectedSemicolon { .. })));
}

#[test]
fn missing_closing_paren_is_rejected() {
    assert!(matches!(assert_failure("print (1 + 2;"),
                     Error::Parse(ParseError::ExpectedClosingParen { .. })));
}

#[test]
fn empty_input_is_an_empty_program() {
    let env = run_source("").expect("Empty input failed");
    assert!(env.is_empty());

    assert!(run_source("   \t  \n").is_ok());
}

#[test]
fn lexer_round_trip() {
    let src = "total = 5; print (total + 41) * 2;";

    for (token, span) in tokenize(src).expect("Lexing failed") {
        let text = &src[span];
        let relexed = tokenize(text).expect("Re-lexing a token's text failed");

        assert_eq!(relexed.len(), 1, "Token text '{text}' did not re-lex to one token");
        assert_eq!(relexed[0].0, token, "Token text '{text}' re-lexed differently");
    }
}

#[test]
fn print_is_a_keyword_not_a_prefix() {
    // 'printx' is a single identifier, so this is an ordinary assignment.
    let env = run_source("printx = 3;").expect("Script failed");
    assert_eq!(env.get("printx"), Some(3.0));
}

#[test]
fn decimal_point_has_no_token() {
    // Number literals are maximal digit runs; the '.' in '3.14' is an
    // unrecognized character.
    let err = tokenize("3.14").expect_err("'3.14' lexed without error");

    let LexError::UnexpectedCharacter { text, column } = err;
    assert_eq!(text, ".");
    assert_eq!(column, 1);
}

#[test]
fn runs_use_independent_environments() {
    run_source("x = 1;").expect("First run failed");
    let err = assert_failure("print x;");

    assert!(matches!(err, Error::Runtime(RuntimeError::UndefinedVariable { .. })));
}
