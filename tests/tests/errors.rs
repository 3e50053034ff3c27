// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use rstest::rstest;
use tests::evaluate_error;

#[rstest]
#[case("5 + true;", "Type mismatch: INTEGER + BOOLEAN")]
#[case("5 + true; 5;", "Type mismatch: INTEGER + BOOLEAN")]
#[case("\"Hello\" + 5", "Type mismatch: STRING + INTEGER")]
#[case("-true", "Unknown operation: -BOOLEAN")]
#[case("-\"str\"", "Unknown operation: -STRING")]
#[case("true + false;", "Unknown operation: BOOLEAN + BOOLEAN")]
#[case("5; true + false; 5", "Unknown operation: BOOLEAN + BOOLEAN")]
#[case("if (10 > 1) { true + false; }", "Unknown operation: BOOLEAN + BOOLEAN")]
#[case("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }", "Unknown operation: BOOLEAN + BOOLEAN")]
#[case("true < false", "Unknown operation: BOOLEAN < BOOLEAN")]
#[case("foobar", "Identifier not found: foobar")]
#[case("let x = 5; x(1);", "Not a function: INTEGER")]
#[case("\"str\"(1)", "Not a function: STRING")]
#[case("5 / 0", "Division by zero")]
#[case("\"str\"[0]", "Index operator not supported: STRING[INTEGER]")]
#[case("[1, 2][\"0\"]", "Index operator not supported: ARRAY[STRING]")]
fn runtime_errors(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(evaluate_error(input).to_string(), expected);
}

#[rstest]
#[case("len(1)", "Argument to 'len' not supported, got INTEGER")]
#[case("len(true)", "Argument to 'len' not supported, got BOOLEAN")]
#[case("len(\"one\", \"train\")", "Invalid number of arguments to 'len', expected 1, got 2")]
#[case("len()", "Invalid number of arguments to 'len', expected 1, got 0")]
#[case("first(1)", "Argument to 'first' must be an array, got INTEGER")]
#[case("last(\"abc\")", "Argument to 'last' must be an array, got STRING")]
#[case("rest(5)", "Argument to 'rest' must be an array, got INTEGER")]
#[case("push(1, 1)", "First argument to 'push' not supported, expected ARRAY, got INTEGER")]
#[case("push([1])", "Invalid number of arguments to 'push', expected 2, got 1")]
fn builtin_argument_errors(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(evaluate_error(input).to_string(), expected);
}

#[rstest]
#[case("let a = true + false; a;", "Unknown operation: BOOLEAN + BOOLEAN")]
#[case("let add = func(x, y) { x + y }; add(5, true);", "Type mismatch: INTEGER + BOOLEAN")]
#[case("[1, true + false, 3]", "Unknown operation: BOOLEAN + BOOLEAN")]
#[case("len(true + false)", "Unknown operation: BOOLEAN + BOOLEAN")]
fn errors_propagate_out_of_nested_evaluation(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(evaluate_error(input).to_string(), expected);
}
