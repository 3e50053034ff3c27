// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use plug_interpreter::Value;
use rstest::rstest;
use tests::{evaluate_error, evaluate_value};

#[rstest]
#[case("let identity = func(x) { x; }; identity(5);", 5)]
#[case("let identity = func(x) { return x; }; identity(5);", 5)]
#[case("let double = func(x) { x * 2; }; double(5);", 10)]
#[case("let add = func(x, y) { x + y; }; add(5, 5);", 10)]
#[case("let add = func(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20)]
#[case("func(x) { x; }(5)", 5)]
fn function_application(#[case] input: &str, #[case] expected: i64) {
    assert_eq!(evaluate_value(input), Value::Integer(expected));
}

#[test]
fn closures_capture_their_defining_scope() {
    let input = "
        let newAdder = func(x) { func(y) { x + y }; };
        let addTwo = newAdder(2);
        addTwo(3);
    ";

    assert_eq!(evaluate_value(input), Value::Integer(5));
}

#[test]
fn closures_observe_later_mutations_of_the_captured_scope() {
    let input = "
        let x = 1;
        let read = func() { x };
        x = 2;
        read();
    ";

    assert_eq!(evaluate_value(input), Value::Integer(2));
}

#[test]
fn parameters_shadow_outer_bindings_without_mutating_them() {
    let input = "
        let x = 10;
        let shadow = func(x) { x = x * 2; x };
        let inner = shadow(3);
        [inner, x]
    ";

    assert_eq!(evaluate_value(input).to_string(), "[6, 10]");
}

#[test]
fn recursion_resolves_through_the_scope_chain() {
    let input = "
        let fib = func(n) {
            if (n < 2) { return n; }
            return fib(n - 1) + fib(n - 2);
        };
        fib(10);
    ";

    assert_eq!(evaluate_value(input), Value::Integer(55));
}

#[test]
fn extra_arguments_are_ignored() {
    let input = "let add = func(x, y) { x + y; }; add(1, 2, 3);";
    assert_eq!(evaluate_value(input), Value::Integer(3));
}

#[test]
fn missing_arguments_leave_the_parameter_unbound() {
    let input = "let add = func(x, y) { x + y; }; add(1);";
    assert_eq!(evaluate_error(input).to_string(), "Identifier not found: y");
}

#[test]
fn a_function_without_a_result_is_observed_as_null() {
    let input = "let noop = func() { let a = 1; }; let r = noop(); r;";
    assert_eq!(evaluate_value(input), Value::Null);
}

#[test]
fn a_binding_shadows_the_builtin_of_the_same_name() {
    let input = "let len = func(x) { 99 }; len([1]);";
    assert_eq!(evaluate_value(input), Value::Integer(99));
}

#[test]
fn functions_are_first_class_values() {
    let input = "
        let apply = func(f, x) { f(x) };
        apply(func(n) { n + 1 }, 41);
    ";

    assert_eq!(evaluate_value(input), Value::Integer(42));
}
