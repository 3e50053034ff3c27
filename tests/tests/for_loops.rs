// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use plug_interpreter::Value;
use rstest::rstest;
use tests::{evaluate_error, evaluate_value};

#[rstest]
#[case("let count = 0; for i = range(0) { count = count + 1; } count;", 0)]
#[case("let count = 0; for i = range(3) { count = count + 1; } count;", 3)]
#[case("let sum = 0; for i = range(3) { sum = sum + i; } sum;", 3)]
#[case("let n = 4; let total = 0; for i = range(n) { total = total + 1; } total;", 4)]
fn iteration_counts(#[case] input: &str, #[case] expected: i64) {
    assert_eq!(evaluate_value(input), Value::Integer(expected));
}

#[test]
fn the_loop_variable_lives_in_the_surrounding_scope() {
    let input = "for i = range(3) { i; } i;";
    assert_eq!(evaluate_value(input), Value::Integer(2));
}

#[test]
fn a_return_in_the_body_stops_the_loop() {
    let input = "
        let firstAbove = func(limit) {
            for i = range(10) {
                if (i > limit) { return i; }
            }
        };
        firstAbove(4);
    ";

    assert_eq!(evaluate_value(input), Value::Integer(5));
}

#[test]
fn an_error_in_the_body_stops_the_loop() {
    let input = "for i = range(2) { missing; }";
    assert_eq!(evaluate_error(input).to_string(), "Identifier not found: missing");
}

#[rstest]
#[case("for i = range(true) { i; }")]
#[case("for i = range(\"ten\") { i; }")]
#[case("let b = \"ten\"; for i = range(b) { i; }")]
#[case("for i = range(1 + 2) { i; }")]
#[case("for i = range() { i; }")]
fn the_bound_must_be_a_literal_or_an_integer_binding(#[case] input: &str) {
    assert_eq!(evaluate_error(input).to_string(), "For loop bound must be an integer");
}

#[test]
fn an_unbound_identifier_bound_is_reported_as_such() {
    let input = "for i = range(n) { i; }";
    assert_eq!(evaluate_error(input).to_string(), "Identifier not found: n");
}

#[test]
fn a_negative_bound_runs_zero_times() {
    let input = "let count = 0; let n = 0 - 5; for i = range(n) { count = count + 1; } count;";
    assert_eq!(evaluate_value(input), Value::Integer(0));
}
