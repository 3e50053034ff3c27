// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use plug_interpreter::Value;
use rstest::rstest;
use tests::evaluate_value;

#[rstest]
#[case("5", 5)]
#[case("-7", -7)]
#[case("5 + 5 + 5 + 5 - 10", 10)]
#[case("2 * 2 * 2 * 2 * 2", 32)]
#[case("-50 + 100 + -50", 0)]
#[case("5 * 2 + 10", 20)]
#[case("5 + 2 * 10", 25)]
#[case("20 + 2 * -10", 0)]
#[case("50 / 2 * 2 + 10", 60)]
#[case("2 * (5 + 10)", 30)]
#[case("3 * 3 * 3 + 10", 37)]
#[case("3 * (3 * 3) + 10", 37)]
#[case("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50)]
#[case("7 / 2", 3)]
fn integer_expressions(#[case] input: &str, #[case] expected: i64) {
    assert_eq!(evaluate_value(input), Value::Integer(expected));
}

#[rstest]
#[case("true", true)]
#[case("false", false)]
#[case("1 < 2", true)]
#[case("1 > 2", false)]
#[case("1 < 1", false)]
#[case("1 > 1", false)]
#[case("1 == 1", true)]
#[case("1 != 1", false)]
#[case("1 == 2", false)]
#[case("1 != 2", true)]
#[case("true == true", true)]
#[case("false == false", true)]
#[case("true == false", false)]
#[case("true != false", true)]
#[case("(1 < 2) == true", true)]
#[case("(1 > 2) == true", false)]
#[case("1 == true", false)]
#[case("1 != true", true)]
fn boolean_expressions(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(evaluate_value(input), Value::Bool(expected));
}

#[rstest]
#[case("!true", false)]
#[case("!false", true)]
#[case("!5", false)]
#[case("!0", false)]
#[case("!!true", true)]
#[case("!!5", true)]
fn bang_operator(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(evaluate_value(input), Value::Bool(expected));
}

#[rstest]
#[case("if (true) { 10 }", Value::Integer(10))]
#[case("if (false) { 10 }", Value::Null)]
#[case("if (1) { 10 }", Value::Integer(10))]
#[case("if (0) { 10 }", Value::Integer(10))]
#[case("if (1 < 2) { 10 }", Value::Integer(10))]
#[case("if (1 > 2) { 10 }", Value::Null)]
#[case("if (1 < 2) { 10 } else { 20 }", Value::Integer(10))]
#[case("if (1 > 2) { 10 } else { 20 }", Value::Integer(20))]
fn if_expressions(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(evaluate_value(input), expected);
}

#[rstest]
#[case("return 10;", 10)]
#[case("return 10; 9;", 10)]
#[case("return 2 * 5; 9;", 10)]
#[case("9; return 10; 9;", 10)]
#[case("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10)]
fn return_statements(#[case] input: &str, #[case] expected: i64) {
    assert_eq!(evaluate_value(input), Value::Integer(expected));
}

#[rstest]
#[case("let a = 5; a;", 5)]
#[case("let a = 5 * 5; a;", 25)]
#[case("let a = 5; let b = a; b;", 5)]
#[case("let a = 5; let b = a; let c = a + b + 5; c;", 15)]
#[case("let a = 5; a = 6; a;", 6)]
fn let_statements(#[case] input: &str, #[case] expected: i64) {
    assert_eq!(evaluate_value(input), Value::Integer(expected));
}
