// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use super::Expression;

#[derive(Debug, Clone)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    For(ForStatement),
    Expression(Expression),
}

impl Statement {
    /// The literal text of the token this statement starts with.
    #[must_use]
    pub fn token_literal(&self) -> String {
        match self {
            Self::Let(..) => "let".to_string(),
            Self::Return(..) => "return".to_string(),
            Self::For(..) => "for".to_string(),
            Self::Expression(expression) => expression.token_literal(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let(statement) => statement.fmt(f),
            Self::Return(statement) => statement.fmt(f),
            Self::For(statement) => statement.fmt(f),
            Self::Expression(expression) => expression.fmt(f),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LetStatement {
    pub name: String,
    pub value: Expression,
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("let {} = {};", self.name, self.value))
    }
}

#[derive(Debug, Clone)]
pub struct ReturnStatement {
    pub value: Expression,
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("return {};", self.value))
    }
}

/// `for i = range(bound) { … }` — the range is kept as the call-shaped
/// expression it was written as; the evaluator reads the bound out of its
/// first argument.
#[derive(Debug, Clone)]
pub struct ForStatement {
    pub iterator_name: String,
    pub range: Expression,
    pub body: BlockStatement,
}

impl Display for ForStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("for {} = {} {{{}}}", self.iterator_name, self.range, self.body))
    }
}

/// Bodies of `if`, `func` and `for`. Blocks never occur free-standing.
#[derive(Debug, Clone, Default)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            statement.fmt(f)?;
        }

        Ok(())
    }
}
