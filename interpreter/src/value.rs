// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{cell::RefCell, fmt::{Debug, Display}, rc::Rc};

use plug::BlockStatement;
use strum::AsRefStr;

use crate::{BuiltinFunction, ScopeRef};

/// A runtime value. Arrays share their element list (two bindings to the
/// "same" array observe each other's mutations), functions share the scope
/// they were defined in.
#[derive(Clone, Debug)]
pub enum Value {
    /// hehe 5 billion dollar problem
    Null,

    Bool(bool),
    Integer(i64),
    String(String),
    Array(Rc<RefCell<Vec<Value>>>),
    Function(Rc<FunctionValue>),
    Builtin(&'static BuiltinFunction),
}

impl Value {
    #[must_use]
    pub fn array(elements: Vec<Value>) -> Self {
        Self::Array(Rc::new(RefCell::new(elements)))
    }

    /// `null` and `false` are falsy, everything else (zero included) is
    /// truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }

    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::Bool(..) => ValueType::Boolean,
            Self::Integer(..) => ValueType::Integer,
            Self::String(..) => ValueType::String,
            Self::Array(..) => ValueType::Array,
            Self::Function(..) => ValueType::Function,
            Self::Builtin(..) => ValueType::Builtin,
        }
    }
}

/// Booleans and null compare by value; arrays and functions by reference
/// identity; builtins by name. Values of different types never compare equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(this), Self::Bool(that)) => this == that,
            (Self::Integer(this), Self::Integer(that)) => this == that,
            (Self::String(this), Self::String(that)) => this == that,
            (Self::Array(this), Self::Array(that)) => Rc::ptr_eq(this, that),
            (Self::Function(this), Self::Function(that)) => Rc::ptr_eq(this, that),
            (Self::Builtin(this), Self::Builtin(that)) => this.name == that.name,
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(false) => f.write_str("false"),
            Self::Bool(true) => f.write_str("true"),
            Self::Integer(i) => Display::fmt(i, f),
            Self::String(str) => f.write_str(str),

            Self::Array(elements) => {
                f.write_str("[")?;

                for (idx, element) in elements.borrow().iter().enumerate() {
                    if idx != 0 {
                        f.write_str(", ")?;
                    }

                    Display::fmt(element, f)?;
                }

                f.write_str("]")
            }

            Self::Function(function) => {
                f.write_str("func(")?;

                for (idx, parameter) in function.parameters.iter().enumerate() {
                    if idx != 0 {
                        f.write_str(", ")?;
                    }

                    f.write_str(parameter)?;
                }

                f.write_str(") { .. }")
            }

            Self::Builtin(builtin) => Display::fmt(builtin, f),
        }
    }
}

/// A `func` literal together with the scope that was active at its
/// definition site.
pub struct FunctionValue {
    pub parameters: Vec<String>,
    pub body: BlockStatement,
    pub scope: ScopeRef,
}

impl Debug for FunctionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The captured scope may contain this very function; printing it
        // would recurse forever.
        f.debug_struct("FunctionValue")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .field("scope", &"(captured)")
            .finish()
    }
}

/// The type tag as it appears in runtime error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum ValueType {
    Null,
    Boolean,
    Integer,
    String,
    Array,
    Function,
    Builtin,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}
