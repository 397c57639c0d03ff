use fplang::{
    ast::Position,
    config::{MAX_CALL_DEPTH, SessionConfig},
    error::{Error, LexError, ParseError, RuntimeError},
    evaluate_source,
    interpreter::{session::Session, value::core::Value},
};

fn assert_failure(src: &str) -> Error {
    match evaluate_source(src) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail: {src}"),
        Err(e) => e,
    }
}

fn assert_runtime_error(src: &str, expected: &RuntimeError) {
    let error = assert_failure(src);
    assert_eq!(error.runtime_cause(), Some(expected), "{src}: {error}");
}

fn assert_parse_error(src: &str) -> ParseError {
    match assert_failure(src) {
        Error::Parse(e) => e,
        other => panic!("Expected a parse error for {src}, got {other}"),
    }
}

#[test]
fn lex_errors_report_the_character_and_position() {
    assert_eq!(assert_failure("1 + $"),
               Error::Lex(LexError { character: '$',
                                     line:      1,
                                     column:    5, }));
    assert_eq!(assert_failure("1\n  @"),
               Error::Lex(LexError { character: '@',
                                     line:      2,
                                     column:    3, }));
    assert_eq!(assert_failure("1 + $").to_string(),
               "Error on line 1, column 5: Invalid character '$'.");
}

#[test]
fn unexpected_tokens() {
    let e = assert_parse_error("def f(x = x");
    assert_eq!(e,
               ParseError::UnexpectedToken { expected: "',' or ')'".to_string(),
                                             found:    "=".to_string(),
                                             line:     1,
                                             column:   9, });
    assert_eq!((e.line(), e.column()), (1, 9));

    assert!(matches!(assert_parse_error("[1, 2,]"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_parse_error("let () = 1 2"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_parse_error("let 5 = 1 2"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_parse_error("1 + then"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_parse_error("()"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn unexpected_end_of_input() {
    assert!(matches!(assert_parse_error("if 1 then 2"),
                     ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(assert_parse_error("{ 1 2"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(assert_parse_error("head([1, 2]"),
                     ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(assert_parse_error("1 +"), ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn malformed_constructs() {
    assert_eq!(assert_parse_error("{}"),
               ParseError::EmptyBlock { line:   1,
                                        column: 1, });
    assert_eq!(assert_parse_error("def f(a, a) = a"),
               ParseError::DuplicateParameter { name:   "a".to_string(),
                                                line:   1,
                                                column: 10, });
    assert!(matches!(assert_parse_error("99999999999999999999"),
                     ParseError::IntegerTooLarge { .. }));

    let e = assert_parse_error("1\ndef f(a, a) = a");
    assert_eq!((e.line(), e.column()), (2, 10));
}

#[test]
fn parse_errors_abort_the_whole_run() {
    let mut session = Session::new();
    assert!(session.run("def f() = 1\ndef g( = 2").starts_with("Error on line"));
    assert!(session.run("f()").starts_with("Error on line"));
}

#[test]
fn undefined_variables() {
    assert_runtime_error("x", &RuntimeError::UndefinedVariable { name: "x".to_string() });
    assert_runtime_error("undefined_fn(1)",
                         &RuntimeError::UndefinedVariable { name: "undefined_fn".to_string() });
    assert_runtime_error("let x = 1 y",
                         &RuntimeError::UndefinedVariable { name: "y".to_string() });
}

#[test]
fn let_value_cannot_see_its_own_name() {
    assert_runtime_error("let x = x 1",
                         &RuntimeError::UndefinedVariable { name: "x".to_string() });
}

#[test]
fn parameters_do_not_leak_out_of_calls() {
    assert_runtime_error("def f(secret) = secret\nf(1)\nsecret",
                         &RuntimeError::UndefinedVariable { name: "secret".to_string() });
}

#[test]
fn calling_a_non_function() {
    assert_runtime_error("let x = 5; x(1)",
                         &RuntimeError::NotCallable { name: "x".to_string() });
    assert_runtime_error("let xs = [1]; xs()",
                         &RuntimeError::NotCallable { name: "xs".to_string() });
}

#[test]
fn list_builtin_failures() {
    assert_runtime_error("head([])", &RuntimeError::EmptyList { function: "head" });
    assert_runtime_error("tail([])", &RuntimeError::EmptyList { function: "tail" });
    assert_runtime_error("head(5)", &RuntimeError::EmptyList { function: "head" });
    assert_runtime_error("tail(true)", &RuntimeError::EmptyList { function: "tail" });
    assert_runtime_error("length(1)", &RuntimeError::NotAList { function: "length" });
    assert_runtime_error("get_tuple_element(1, 0)",
                         &RuntimeError::NotAList { function: "get_tuple_element" });
    assert_runtime_error("get_tuple_element([1], true)",
                         &RuntimeError::NotANumber { function: "get_tuple_element" });
    assert_runtime_error("get_tuple_element([1], 1)",
                         &RuntimeError::IndexOutOfBounds { index:  1,
                                                           length: 1, });
    assert_runtime_error("get_tuple_element([1], 0 - 1)",
                         &RuntimeError::IndexOutOfBounds { index:  -1,
                                                           length: 1, });
    assert_runtime_error("let (a, b, c) = (1, 2) a",
                         &RuntimeError::IndexOutOfBounds { index:  2,
                                                           length: 2, });
}

#[test]
fn arity_mismatches() {
    assert_runtime_error("def f(a, b) = a\nf(1)",
                         &RuntimeError::ArityMismatch { name:     "f".to_string(),
                                                        expected: 2,
                                                        found:    1, });
    assert_runtime_error("head([1], [2])",
                         &RuntimeError::ArityMismatch { name:     "head".to_string(),
                                                        expected: 1,
                                                        found:    2, });
    assert_runtime_error("length()",
                         &RuntimeError::ArityMismatch { name:     "length".to_string(),
                                                        expected: 1,
                                                        found:    0, });
}

#[test]
fn arithmetic_failures() {
    assert_runtime_error("1 / 0", &RuntimeError::DivisionByZero);
    assert_runtime_error("1 / (2 - 2)", &RuntimeError::DivisionByZero);
    assert_runtime_error("9223372036854775807 + 1", &RuntimeError::Overflow);
    assert_runtime_error("0 - 9223372036854775807 - 2", &RuntimeError::Overflow);

    for src in ["true + 1", "[1] + 1", "1 + [1]", "[1] - [1]", "head - 1", "1 < [1]", "true > 0"] {
        let error = assert_failure(src);
        assert!(matches!(error.runtime_cause(), Some(RuntimeError::TypeError { .. })),
                "{src}: {error}");
    }
}

#[test]
fn errors_point_at_the_innermost_expression() {
    let Error::Evaluation(e) = assert_failure("let x = 1\nx + y") else {
        panic!("expected an evaluation error");
    };
    assert_eq!(e.position(), Position::new(2, 5));
    assert_eq!(e.node(), "y");
    assert_eq!(e.to_string(),
               "Error on line 2, column 5: Variable 'y' is not defined (while evaluating `y`).");

    let Error::Evaluation(e) = assert_failure("def f(xs) = head(xs)\n\nf([])") else {
        panic!("expected an evaluation error");
    };
    assert_eq!(e.position(), Position::new(1, 13));
    assert_eq!(e.node(), "head(xs)");
}

#[test]
fn run_renders_errors() {
    let mut session = Session::new();
    assert_eq!(session.run("1 / 0"),
               "Error on line 1, column 3: Division by zero (while evaluating `(1 / 0)`).");
}

#[test]
fn runaway_recursion_hits_the_call_depth_limit() {
    let config = SessionConfig::default().with_max_call_depth(50);
    let mut session = Session::with_config(config);

    session.run("def forever(n) = forever(n + 1)");
    let error = session.eval_source("forever(0)").unwrap_err();
    assert_eq!(error.runtime_cause(), Some(&RuntimeError::RecursionLimit { limit: 50 }));

    session.run("def count(n) = if n = 0 then 0 else 1 + count(n - 1)");
    assert_eq!(session.run("count(40)"), "40");
    assert!(session.run("count(60)").starts_with("Error on line"));
}

#[test]
fn default_call_depth_limit_is_reported_not_overflowed() {
    let mut session = Session::new();

    session.run("def forever(n) = forever(n + 1)");
    let error = session.eval_source("forever(0)").unwrap_err();
    assert_eq!(error.runtime_cause(),
               Some(&RuntimeError::RecursionLimit { limit: MAX_CALL_DEPTH }));

    session.run("def count(n) = if n = 0 then 0 else 1 + count(n - 1)");
    assert_eq!(session.run("count(200)"), "200");
    assert_eq!(session.run("count(450)"), "450");
}

#[test]
fn builtins_check_their_arity() {
    let session = Session::new();
    for (name, arity) in [("head", 1), ("tail", 1), ("length", 1), ("get_tuple_element", 2)] {
        let Ok(Value::Builtin(builtin)) = session.environment().get(name) else {
            panic!("{name} is not a builtin");
        };
        assert_eq!(builtin.arity(), arity, "{name}");
    }

    assert_runtime_error("head(1, 2)",
                         &RuntimeError::ArityMismatch { name:     "head".to_string(),
                                                        expected: 1,
                                                        found:    2, });
}
