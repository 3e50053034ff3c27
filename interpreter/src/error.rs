// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use plug::{InfixOperator, PrefixOperator};
use strum::AsRefStr;

use crate::ValueType;

/// The language's only error representation. A `RuntimeError` propagates like
/// a return signal, short-circuiting the enclosing block, loop and program;
/// there is no catch construct.
#[derive(Clone, Debug, PartialEq, thiserror::Error, AsRefStr)]
pub enum RuntimeError {
    #[error("Type mismatch: {left} {operator} {right}")]
    TypeMismatch { left: ValueType, operator: InfixOperator, right: ValueType },

    #[error("Unknown operation: {left} {operator} {right}")]
    UnknownInfixOperation { left: ValueType, operator: InfixOperator, right: ValueType },

    #[error("Unknown operation: {operator}{operand}")]
    UnknownPrefixOperation { operator: PrefixOperator, operand: ValueType },

    #[error("Identifier not found: {name}")]
    IdentifierNotFound { name: String },

    #[error("Not a function: {callee}")]
    NotAFunction { callee: ValueType },

    #[error("Array index out of bounds")]
    ArrayIndexOutOfBounds,

    #[error("Index operator not supported: {collection}[{index}]")]
    IndexOperatorNotSupported { collection: ValueType, index: ValueType },

    #[error("Array has not been declared")]
    ArrayNotDeclared,

    #[error("Invalid assignment target")]
    InvalidAssignmentTarget,

    #[error("For loop bound must be an integer")]
    ForBoundNotAnInteger,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid number of arguments to '{name}', expected {expected}, got {got}")]
    InvalidArgumentCount { name: &'static str, expected: usize, got: usize },

    #[error("Argument to 'len' not supported, got {got}")]
    LenUnsupportedArgument { got: ValueType },

    #[error("Argument to '{name}' must be an array, got {got}")]
    ArgumentMustBeArray { name: &'static str, got: ValueType },

    #[error("First argument to 'push' not supported, expected ARRAY, got {got}")]
    PushUnsupportedArgument { got: ValueType },
}

impl RuntimeError {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
