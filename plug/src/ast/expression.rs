// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter, Write};

use super::BlockStatement;

#[derive(Debug, Clone)]
pub enum Expression {
    Identifier(String),
    IntegerLiteral(i64),
    StringLiteral(String),
    BooleanLiteral(bool),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionExpression),
    Call(CallExpression),
    Array(ArrayLiteral),
    Index(IndexExpression),
}

impl Expression {
    /// The literal text of the token this expression starts with.
    #[must_use]
    pub fn token_literal(&self) -> String {
        match self {
            Self::Identifier(name) => name.clone(),
            Self::IntegerLiteral(value) => value.to_string(),
            Self::StringLiteral(value) => value.clone(),
            Self::BooleanLiteral(value) => value.to_string(),
            Self::Prefix(expression) => expression.operator.as_str().to_string(),
            Self::Infix(expression) => expression.operator.as_str().to_string(),
            Self::If(..) => "if".to_string(),
            Self::Function(..) => "func".to_string(),
            Self::Call(..) => "(".to_string(),
            Self::Array(..) => "[".to_string(),
            Self::Index(..) => "[".to_string(),
        }
    }

    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

/// The canonical, fully-parenthesized rendering. Doubles as the parser
/// regression oracle: re-parsing a rendered expression renders identically.
impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(name) => f.write_str(name),
            Self::IntegerLiteral(value) => value.fmt(f),
            Self::StringLiteral(value) => f.write_fmt(format_args!("\"{value}\"")),
            Self::BooleanLiteral(value) => value.fmt(f),
            Self::Prefix(expression) => expression.fmt(f),
            Self::Infix(expression) => expression.fmt(f),
            Self::If(expression) => expression.fmt(f),
            Self::Function(expression) => expression.fmt(f),
            Self::Call(expression) => expression.fmt(f),
            Self::Array(expression) => expression.fmt(f),
            Self::Index(expression) => expression.fmt(f),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PrefixExpression {
    pub operator: PrefixOperator,
    pub right: Box<Expression>,
}

impl Display for PrefixExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({}{})", self.operator, self.right))
    }
}

#[derive(Debug, Clone)]
pub struct InfixExpression {
    pub left: Box<Expression>,
    pub operator: InfixOperator,
    pub right: Box<Expression>,
}

impl Display for InfixExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({} {} {})", self.left, self.operator, self.right))
    }
}

#[derive(Debug, Clone)]
pub struct IfExpression {
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

impl Display for IfExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("if {} {{{}}}", self.condition, self.consequence))?;

        if let Some(alternative) = &self.alternative {
            f.write_fmt(format_args!(" else {{{alternative}}}"))?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct FunctionExpression {
    pub parameters: Vec<String>,
    pub body: BlockStatement,
}

impl Display for FunctionExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("func(")?;

        for (idx, parameter) in self.parameters.iter().enumerate() {
            if idx != 0 {
                f.write_str(", ")?;
            }

            f.write_str(parameter)?;
        }

        f.write_fmt(format_args!(") {{{}}}", self.body))
    }
}

#[derive(Debug, Clone)]
pub struct CallExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl Display for CallExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.callee, f)?;
        f.write_char('(')?;

        for (idx, argument) in self.arguments.iter().enumerate() {
            if idx != 0 {
                f.write_str(", ")?;
            }

            Display::fmt(argument, f)?;
        }

        f.write_char(')')
    }
}

#[derive(Debug, Clone)]
pub struct ArrayLiteral {
    pub elements: Vec<Expression>,
}

impl Display for ArrayLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_char('[')?;

        for (idx, element) in self.elements.iter().enumerate() {
            if idx != 0 {
                f.write_str(", ")?;
            }

            Display::fmt(element, f)?;
        }

        f.write_char(']')
    }
}

#[derive(Debug, Clone)]
pub struct IndexExpression {
    pub collection: Box<Expression>,
    pub index: Box<Expression>,
}

impl Display for IndexExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({}[{}])", self.collection, self.index))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    Not,
    Negate,
}

impl PrefixOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Negate => "-",
        }
    }
}

impl Display for PrefixOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    Assign,
    Equals,
    NotEquals,
    LessThan,
    GreaterThan,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl InfixOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl Display for InfixOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
