// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::sync::{Arc, Mutex};

use plug::{Lexer, Parser, Program};
use plug_interpreter::{Evaluation, Interpreter, RuntimeError, Sink, Value};

pub fn parse(input: &str) -> Program {
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse_program();

    assert!(
        parser.diagnostics().is_empty(),
        "Diagnostics for {input:?}: {:#?}",
        parser.diagnostics()
    );

    program
}

pub fn evaluate(input: &str) -> Evaluation {
    let program = parse(input);
    Interpreter::new(()).execute_program(&program)
}

pub fn evaluate_value(input: &str) -> Value {
    match evaluate(input) {
        Evaluation::Value(value) => value,
        other => panic!("Expected a value for {input:?}, got {other:?}"),
    }
}

pub fn evaluate_error(input: &str) -> RuntimeError {
    match evaluate(input) {
        Evaluation::Error(error) => error,
        other => panic!("Expected an error for {input:?}, got {other:?}"),
    }
}

/// Runs the whole pipeline against a buffering sink and returns every line it
/// received: `print` output, parser errors, reported runtime errors.
pub fn interpret_and_return_output(input: &str) -> Vec<String> {
    let buffer = Arc::new(Mutex::new(Vec::new()));

    plug_interpreter::interpret(input, BufferSink {
        buffer: Arc::clone(&buffer),
    });

    Arc::try_unwrap(buffer).unwrap().into_inner().unwrap()
}

pub struct BufferSink {
    buffer: Arc<Mutex<Vec<String>>>,
}

impl Sink for BufferSink {
    fn write(&mut self, text: &str) {
        self.buffer.lock().unwrap().push(text.to_string());
    }
}
