use fplang::{
    evaluate_source, parse, tokenize,
    interpreter::{
        environment::Environment, evaluator::core::Evaluator, session::Session, value::core::Value,
    },
};

fn eval(src: &str) -> Value {
    match evaluate_source(src) {
        Ok(Some(value)) => value,
        Ok(None) => panic!("Script produced no value: {src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_value(src: &str, expected: Value) {
    assert_eq!(eval(src), expected, "{src}");
}

fn assert_output(src: &str, expected: &str) {
    assert_eq!(Session::new().run(src), expected, "{src}");
}

fn list(items: &[i64]) -> Value {
    Value::from(items.iter().copied().map(Value::Integer).collect::<Vec<_>>())
}

#[test]
fn precedence_and_associativity() {
    assert_value("2 + 3 * 4", Value::Integer(14));
    assert_value("(2 + 3) * 4", Value::Integer(20));
    assert_value("10 - 3 - 2", Value::Integer(5));
    assert_value("2 * 3 + 4 * 5", Value::Integer(26));
    assert_value("1 + 2 < 2 * 2", Value::Boolean(true));
    assert_value("8 / 2 / 2", Value::Float(2.0));
}

#[test]
fn division_always_yields_a_float() {
    assert_value("7 / 2", Value::Float(3.5));
    assert_value("4 / 2", Value::Float(2.0));
    assert_output("4 / 2", "2.0");
    assert_output("7 / 2", "3.5");
    assert_value("1 + 4 / 2", Value::Float(3.0));
    assert_value("(1 / 2) * 4", Value::Float(2.0));
}

#[test]
fn comparisons_yield_booleans() {
    assert_value("1 < 2", Value::Boolean(true));
    assert_value("3 > 4", Value::Boolean(false));
    assert_value("2 = 2", Value::Boolean(true));
    assert_value("4 / 2 = 2", Value::Boolean(true));
    assert_value("false < true", Value::Boolean(true));
    assert_value("true = true", Value::Boolean(true));
    assert_value("[1, [2]] = [1, [2]]", Value::Boolean(true));
    assert_value("[1, 2] = [2, 1]", Value::Boolean(false));
    assert_value("1 = true", Value::Boolean(false));
    assert_value("[] = 0", Value::Boolean(false));
}

#[test]
fn booleans_stay_distinct_from_integers() {
    assert_output("true", "true");
    assert_output("1 < 2", "true");
    assert_output("[true, 0, false]", "[true, 0, false]");
    assert_value("true", Value::Boolean(true));
    assert_ne!(eval("true"), Value::Integer(1));
}

#[test]
fn if_takes_exactly_one_branch() {
    assert_value("if true then 1 else 2", Value::Integer(1));
    assert_value("if 0 then 1 else 2", Value::Integer(2));
    assert_value("if 5 then 1 else 2", Value::Integer(1));
    assert_value("if [] then 1 else 2", Value::Integer(2));
    assert_value("if [0] then 1 else 2", Value::Integer(1));
    assert_value("if true then 1 else undefined_name", Value::Integer(1));
    assert_value("if false then head([]) else 7", Value::Integer(7));
    assert_value("if 1 > 2 then 1 else if 2 > 1 then 2 else 3", Value::Integer(2));
}

#[test]
fn let_bindings_and_shadowing() {
    assert_value("let x = 1; let x = 2; x", Value::Integer(2));
    assert_value("let x = 1 let x = 2 x", Value::Integer(2));
    assert_value("let x = 5 let x = x + 1 x", Value::Integer(6));
    assert_value("let x = 1 [let x = 2 x, x]", list(&[2, 1]));
}

#[test]
fn functions_capture_their_defining_scope() {
    let src = "def make(x) = def inner() = x
               let g = make(1)
               let x = 99
               g()";
    assert_value(src, Value::Integer(1));

    let src = "def adder(n) = def add(m) = n + m
               let add5 = adder(5)
               let add10 = adder(10)
               [add5(1), add10(1)]";
    assert_value(src, list(&[6, 11]));
}

#[test]
fn definitions_are_expressions() {
    assert_output("def f(x) = x", "Function 'f' defined");
    assert_output("[def f() = 1]", "[<function f>]");
    assert_output("head", "Built-in function 'head'");
    assert_value("def f(x) = x + 1\nf(f(1))", Value::Integer(3));
}

#[test]
fn recursion() {
    assert_value("def fact(n) = if n < 2 then 1 else n * fact(n - 1)\nfact(20)",
                 Value::Integer(2_432_902_008_176_640_000_i64));
    assert_value("def fib(n) = if n < 2 then n else fib(n - 1) + fib(n - 2)\nfib(15)",
                 Value::Integer(610));
}

#[test]
fn higher_order_functions() {
    let src = "def twice(f, x) = f(f(x))
               def inc(n) = n + 1
               twice(inc, 5)";
    assert_value(src, Value::Integer(7));

    let src = "def map(f, xs) = if length(xs) = 0 then [] else [f(head(xs))] + map(f, tail(xs))
               def square(x) = x * x
               map(square, [1, 2, 3])";
    assert_value(src, list(&[1, 4, 9]));

    assert_value("def apply(f, xs) = f(xs)\napply(length, [1, 2])", Value::Integer(2));
}

#[test]
fn extra_arguments_are_evaluated_then_ignored() {
    assert_value("def one(x) = x\none(1, 2)", Value::Integer(1));
    assert!(evaluate_source("def one(x) = x\none(1, head([]))").is_err());
}

#[test]
fn list_builtins() {
    assert_value("head([1, 2, 3])", Value::Integer(1));
    assert_value("tail([1, 2, 3])", list(&[2, 3]));
    assert_value("tail([1])", list(&[]));
    assert_value("length([1, 2, 3])", Value::Integer(3));
    assert_value("length([])", Value::Integer(0));
    assert_value("[1] + [2, 3]", list(&[1, 2, 3]));
    assert_value("[] + []", list(&[]));
    assert_output("[[1], [], [2, [3]]]", "[[1], [], [2, [3]]]");
}

#[test]
fn tuples_and_destructuring() {
    assert_value("let (a, b) = (1, 2); a + b", Value::Integer(3));
    assert_value("let (a, b, c) = (1, 2, 3) a * 100 + b * 10 + c", Value::Integer(123));
    assert_value("let (x) = [7] x", Value::Integer(7));
    assert_value("get_tuple_element((4, 5, 6), 2)", Value::Integer(6));
    assert_value("def swap(p) = let (a, b) = p; (b, a)\nswap((1, 2))", list(&[2, 1]));
    assert_value("let (a, b) = ((1, 2), 3) head(a) + b", Value::Integer(4));
    assert_value("(1)", Value::Integer(1));
}

#[test]
fn blocks_sequence_without_a_scope() {
    assert_value("{ 1 2 3 }", Value::Integer(3));
    assert_value("{ 1; 2; 3 }", Value::Integer(3));
    assert_value("{ 42 }", Value::Integer(42));
    assert_value("{ def f(x) = x + 1 f(2) }", Value::Integer(3));

    let mut session = Session::new();
    assert_eq!(session.run("{ def f(x) = x * 2; 0 }"), "0");
    assert_eq!(session.run("f(21)"), "42");
}

#[test]
fn desugars_ignore_a_rebound_tuple_accessor() {
    assert_value("def get_tuple_element(a, b) = 0\n{ 1 2 }", Value::Integer(2));
    assert_value("def f(get_tuple_element) = { 1 2 }\nf(5)", Value::Integer(2));
    assert_value("let get_tuple_element = 7 { 1 get_tuple_element }", Value::Integer(7));
    assert_value("def get_tuple_element(a, b) = 0\nlet (x, y) = (3, 4) x * y", Value::Integer(12));
}

#[test]
fn integer_literals_evaluate_to_themselves() {
    for n in [0, 1, 7, 42, 1000, 65_536, i64::MAX] {
        let src = n.to_string();
        let tokens = tokenize(&src).unwrap();
        let program = parse(&tokens).unwrap();
        assert_eq!(program.len(), 1, "{src}");

        let value = Evaluator::default().evaluate(&program[0], &Environment::root()).unwrap();
        assert_eq!(value, Value::Integer(n), "{src}");
        assert_output(&src, &src);
    }
}

#[test]
fn comments_and_whitespace() {
    assert_value("1 + // one\n 2 // two", Value::Integer(3));
    assert_value("// leading\n\n\t5", Value::Integer(5));
    assert_output("// only a comment", "");
    assert_output("", "");
}

#[test]
fn identifiers_may_start_with_keywords() {
    assert_value("let define = 1 let iffy = 2 define + iffy", Value::Integer(3));
}

#[test]
fn session_keeps_state_between_runs() {
    let mut session = Session::new();
    assert_eq!(session.run("def square(x) = x * x"), "Function 'square' defined");
    assert_eq!(session.run("square(12)"), "144");

    assert!(session.run("def a() = 1\nundefined_thing\ndef b() = 2").starts_with("Error on line"));
    assert_eq!(session.run("a()"), "1");
    assert!(session.run("b()").starts_with("Error on line"));
}

#[test]
fn sessions_are_independent() {
    let mut first = Session::new();
    let mut second = Session::new();

    first.run("def f(x) = x");
    assert_eq!(first.run("f(1)"), "1");
    assert!(second.run("f(1)").starts_with("Error on line"));
}

#[test]
fn bubble_sort() {
    let src = "
        def bubble(xs) = if length(xs) < 2 then xs else {
            let a = head(xs)
            let b = head(tail(xs))
            let rest = tail(tail(xs))
            if a > b then [b] + bubble([a] + rest) else [a] + bubble([b] + rest)
        }
        def pass_count(xs, n) = if n = 0 then xs else pass_count(bubble(xs), n - 1)
        def sort(xs) = pass_count(xs, length(xs))
        sort([64, 34, 25, 12, 22, 11, 90])
    ";
    assert_value(src, list(&[11, 12, 22, 25, 34, 64, 90]));
    assert_output(src, "[11, 12, 22, 25, 34, 64, 90]");
}
