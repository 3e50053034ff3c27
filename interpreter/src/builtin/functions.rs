// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{cell::RefCell, fmt::{Debug, Display}, rc::Rc};

use crate::{RuntimeError, Sink, Value};

pub type BuiltinFunctionSignature = fn(&mut dyn Sink, Vec<Value>) -> Result<Value, RuntimeError>;

pub struct BuiltinFunction {
    pub name: &'static str,
    pub documentation: &'static str,
    pub function: BuiltinFunctionSignature,
}

impl Display for BuiltinFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}()", self.name))
    }
}

impl Debug for BuiltinFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinFunction")
            .field("name", &self.name)
            .field("documentation", &self.documentation)
            .field("function", &"(native)")
            .finish()
    }
}

impl PartialEq for BuiltinFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

pub fn len(_: &mut dyn Sink, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
    match single_argument("len", arguments)? {
        Value::Array(elements) => Ok(Value::Integer(elements.borrow().len() as i64)),
        Value::String(string) => Ok(Value::Integer(string.chars().count() as i64)),
        other => Err(RuntimeError::LenUnsupportedArgument { got: other.value_type() }),
    }
}

pub fn first(_: &mut dyn Sink, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
    let elements = array_argument("first", arguments)?;
    let elements = elements.borrow();

    Ok(elements.first().cloned().unwrap_or(Value::Null))
}

pub fn last(_: &mut dyn Sink, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
    let elements = array_argument("last", arguments)?;
    let elements = elements.borrow();

    Ok(elements.last().cloned().unwrap_or(Value::Null))
}

/// A new array holding everything but the first element, `null` for an empty
/// array. The receiver is left untouched.
pub fn rest(_: &mut dyn Sink, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
    let elements = array_argument("rest", arguments)?;
    let elements = elements.borrow();

    if elements.is_empty() {
        return Ok(Value::Null);
    }

    Ok(Value::array(elements[1..].to_vec()))
}

/// Appends in place and returns the same array, so aliased bindings observe
/// the append and calls can be chained.
pub fn push(_: &mut dyn Sink, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
    let got = arguments.len();
    let mut arguments = arguments.into_iter();

    let (Some(array), Some(value), None) = (arguments.next(), arguments.next(), arguments.next()) else {
        return Err(RuntimeError::InvalidArgumentCount { name: "push", expected: 2, got });
    };

    let Value::Array(elements) = array else {
        return Err(RuntimeError::PushUnsupportedArgument { got: array.value_type() });
    };

    elements.borrow_mut().push(value);

    Ok(Value::Array(elements))
}

pub fn print(sink: &mut dyn Sink, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
    for argument in arguments {
        sink.write(&argument.to_string());
    }

    Ok(Value::Null)
}

fn single_argument(name: &'static str, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
    let got = arguments.len();
    let mut arguments = arguments.into_iter();

    match (arguments.next(), arguments.next()) {
        (Some(argument), None) => Ok(argument),
        _ => Err(RuntimeError::InvalidArgumentCount { name, expected: 1, got }),
    }
}

fn array_argument(name: &'static str, arguments: Vec<Value>) -> Result<Rc<RefCell<Vec<Value>>>, RuntimeError> {
    match single_argument(name, arguments)? {
        Value::Array(elements) => Ok(elements),
        other => Err(RuntimeError::ArgumentMustBeArray { name, got: other.value_type() }),
    }
}
