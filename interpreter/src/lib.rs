// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod builtin;
mod error;
mod evaluation;
mod interpreter;
mod logger;
mod scope;
mod sink;
mod value;

pub use self::{
    builtin::{Builtin, BuiltinFunction, BuiltinFunctionSignature},
    error::RuntimeError,
    evaluation::Evaluation,
    interpreter::{interpret, Interpreter},
    logger::Logger,
    scope::{Scope, ScopeRef},
    sink::Sink,
    value::{FunctionValue, Value, ValueType},
};
