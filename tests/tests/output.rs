// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use rstest::rstest;
use tests::interpret_and_return_output;

#[rstest]
#[case(
    r#"
        print("Hello!");
    "#,
    &[
        "Hello!",
    ],
)]
#[case(
    r#"
        print("a", 1, true, [1, 2], "done");
    "#,
    &[
        "a",
        "1",
        "true",
        "[1, 2]",
        "done",
    ],
)]
#[case(
    r#"
        for i = range(3) {
            print(i);
        }
    "#,
    &[
        "0",
        "1",
        "2",
    ],
)]
#[case(
    r#"
        let greet = func(name) { print("Hello, " + name); };
        greet("Plug");
    "#,
    &[
        "Hello, Plug",
    ],
)]
#[case(
    r#"
        print(print("x"));
    "#,
    &[
        "x",
        "null",
    ],
)]
fn print_writes_to_the_sink(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_output(input), expected);
}

#[test]
fn the_final_value_is_not_written_automatically() {
    assert_eq!(interpret_and_return_output("1 + 2"), Vec::<String>::new());
}

#[test]
fn parser_errors_suppress_evaluation() {
    let output = interpret_and_return_output("let x 5 print(\"unreachable\")");

    assert_eq!(output[0], "Parser Errors:");
    assert!(output.contains(&"Expected next token to be =, got INT".to_string()));
    assert!(!output.contains(&"unreachable".to_string()));
}

#[test]
fn a_surfacing_runtime_error_is_reported() {
    let output = interpret_and_return_output("5 + true;");
    assert_eq!(output, vec!["Error: Type mismatch: INTEGER + BOOLEAN".to_string()]);
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let output = interpret_and_return_output("print(\"one\"); missing;");

    assert_eq!(output, vec![
        "one".to_string(),
        "Error: Identifier not found: missing".to_string(),
    ]);
}
