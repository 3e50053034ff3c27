// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod functions;

pub use self::functions::{BuiltinFunction, BuiltinFunctionSignature};

pub struct Builtin;

impl Builtin {
    /// Builtins live in the global identifier namespace but are shadowed by
    /// ordinary bindings: the scope chain is consulted first.
    #[must_use]
    pub fn function_by_name(name: &str) -> Option<&'static BuiltinFunction> {
        Self::FUNCTIONS.iter().find(|x| x.name == name)
    }

    pub const FUNCTIONS: &'static [BuiltinFunction] = &[
        BuiltinFunction {
            name: "len",
            documentation: "The number of elements of an array, or the number of characters of a string.",
            function: functions::len,
        },
        BuiltinFunction {
            name: "first",
            documentation: "The first element of an array, or null when it is empty.",
            function: functions::first,
        },
        BuiltinFunction {
            name: "last",
            documentation: "The last element of an array, or null when it is empty.",
            function: functions::last,
        },
        BuiltinFunction {
            name: "rest",
            documentation: "A new array without the first element, or null when the array is empty.",
            function: functions::rest,
        },
        BuiltinFunction {
            name: "push",
            documentation: "Appends a value to an array in place and returns the array.",
            function: functions::push,
        },
        BuiltinFunction {
            name: "print",
            documentation: "Writes every argument to the output, one line each.",
            function: functions::print,
        },
    ];
}
