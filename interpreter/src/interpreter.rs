// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::rc::Rc;

use log::debug;
use plug::{
    ArrayLiteral, BlockStatement, CallExpression, Expression, ForStatement, FunctionExpression, IfExpression, IndexExpression, InfixExpression, InfixOperator, LetStatement, Lexer, Parser, PrefixExpression, PrefixOperator, Program, ReturnStatement, Statement
};

use crate::{
    Builtin, Evaluation, FunctionValue, RuntimeError, Scope, ScopeRef, Sink, Value, ValueType,
};

/// Runs a source text against a fresh top-level scope. Syntax errors suppress
/// evaluation entirely: the sink receives a `Parser Errors:` header and one
/// line per message. A runtime error surfacing as the overall result is
/// reported as `Error: <message>`.
pub fn interpret<S: Sink>(source_code: &str, mut sink: S) {
    let lexer = Lexer::new(source_code);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.diagnostics().is_empty() {
        debug!("Refusing to evaluate: {} parse diagnostic(s)", parser.diagnostics().len());

        sink.write("Parser Errors:");
        for diagnostic in parser.diagnostics() {
            sink.write(&diagnostic.to_string());
        }

        return;
    }

    let mut interpreter = Interpreter::new(sink);
    if let Evaluation::Error(error) = interpreter.execute_program(&program) {
        interpreter.sink.write(&format!("Error: {error}"));
    }
}

/// The tree-walking evaluator: a plain recursive descent over the AST, with
/// the scope threaded through every call.
pub struct Interpreter<S: Sink> {
    scope: ScopeRef,
    sink: S,
}

impl<S: Sink> Interpreter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            scope: Scope::new_top_level(),
            sink,
        }
    }

    /// The program root unwraps both signals: a `Return` becomes the final
    /// value, an `Error` stops the remaining statements and is the result.
    pub fn execute_program(&mut self, program: &Program) -> Evaluation {
        let scope = Rc::clone(&self.scope);
        let mut result = Evaluation::Empty;

        for statement in &program.statements {
            match self.execute_statement(statement, &scope) {
                Evaluation::Return(value) => return Evaluation::Value(value),
                Evaluation::Error(error) => return Evaluation::Error(error),
                evaluation => result = evaluation,
            }
        }

        result
    }

    fn execute_statement(&mut self, statement: &Statement, scope: &ScopeRef) -> Evaluation {
        match statement {
            Statement::Let(statement) => self.execute_let_statement(statement, scope),
            Statement::Return(statement) => self.execute_return_statement(statement, scope),
            Statement::For(statement) => self.execute_for_statement(statement, scope),
            Statement::Expression(expression) => self.execute_expression(expression, scope),
        }
    }

    /// Unlike the program root, a block hands signals up unchanged so that
    /// nested blocks keep short-circuiting.
    fn execute_block(&mut self, block: &BlockStatement, scope: &ScopeRef) -> Evaluation {
        let mut result = Evaluation::Empty;

        for statement in &block.statements {
            let evaluation = self.execute_statement(statement, scope);
            if evaluation.is_signal() {
                return evaluation;
            }

            result = evaluation;
        }

        result
    }

    fn execute_let_statement(&mut self, statement: &LetStatement, scope: &ScopeRef) -> Evaluation {
        let value = match self.expression_value(&statement.value, scope) {
            Ok(value) => value,
            Err(signal) => return signal,
        };

        scope.borrow_mut().set(statement.name.clone(), value);
        Evaluation::Empty
    }

    fn execute_return_statement(&mut self, statement: &ReturnStatement, scope: &ScopeRef) -> Evaluation {
        match self.expression_value(&statement.value, scope) {
            Ok(value) => Evaluation::Return(value),
            Err(signal) => signal,
        }
    }

    /// The bound is read from the first argument of the call-shaped range
    /// expression and must be an integer literal or an identifier bound to an
    /// integer. The loop variable is bound in the surrounding scope, not a
    /// fresh one per iteration.
    fn execute_for_statement(&mut self, statement: &ForStatement, scope: &ScopeRef) -> Evaluation {
        let bound = match self.resolve_for_bound(&statement.range, scope) {
            Ok(bound) => bound,
            Err(error) => return Evaluation::Error(error),
        };

        let mut result = Evaluation::Empty;

        for index in 0..bound {
            scope.borrow_mut().set(statement.iterator_name.clone(), Value::Integer(index));

            let evaluation = self.execute_block(&statement.body, scope);
            if evaluation.is_signal() {
                return evaluation;
            }

            result = evaluation;
        }

        result
    }

    fn resolve_for_bound(&mut self, range: &Expression, scope: &ScopeRef) -> Result<i64, RuntimeError> {
        let Expression::Call(call) = range else {
            return Err(RuntimeError::ForBoundNotAnInteger);
        };

        let Some(bound) = call.arguments.first() else {
            return Err(RuntimeError::ForBoundNotAnInteger);
        };

        match bound {
            Expression::IntegerLiteral(value) => Ok(*value),

            Expression::Identifier(name) => {
                let Some(value) = scope.borrow().find(name) else {
                    return Err(RuntimeError::IdentifierNotFound { name: name.clone() });
                };

                match value {
                    Value::Integer(value) => Ok(value),
                    _ => Err(RuntimeError::ForBoundNotAnInteger),
                }
            }

            _ => Err(RuntimeError::ForBoundNotAnInteger),
        }
    }

    pub fn execute_expression(&mut self, expression: &Expression, scope: &ScopeRef) -> Evaluation {
        match expression {
            Expression::Identifier(name) => self.resolve_identifier(name, scope),
            Expression::IntegerLiteral(value) => Evaluation::Value(Value::Integer(*value)),
            Expression::StringLiteral(value) => Evaluation::Value(Value::String(value.clone())),
            Expression::BooleanLiteral(value) => Evaluation::Value(Value::Bool(*value)),
            Expression::Prefix(expression) => self.execute_prefix_expression(expression, scope),
            Expression::Infix(expression) => self.execute_infix_expression(expression, scope),
            Expression::If(expression) => self.execute_if_expression(expression, scope),
            Expression::Function(expression) => self.execute_function_expression(expression, scope),
            Expression::Call(expression) => self.execute_call_expression(expression, scope),
            Expression::Array(expression) => self.execute_array_literal(expression, scope),
            Expression::Index(expression) => self.execute_index_expression(expression, scope),
        }
    }

    fn resolve_identifier(&mut self, name: &str, scope: &ScopeRef) -> Evaluation {
        if let Some(value) = scope.borrow().find(name) {
            return Evaluation::Value(value);
        }

        if let Some(builtin) = Builtin::function_by_name(name) {
            return Evaluation::Value(Value::Builtin(builtin));
        }

        Evaluation::Error(RuntimeError::IdentifierNotFound { name: name.to_string() })
    }

    fn execute_prefix_expression(&mut self, expression: &PrefixExpression, scope: &ScopeRef) -> Evaluation {
        let operand = match self.expression_value(&expression.right, scope) {
            Ok(value) => value,
            Err(signal) => return signal,
        };

        match expression.operator {
            PrefixOperator::Not => Evaluation::Value(Value::Bool(!operand.is_truthy())),

            PrefixOperator::Negate => match operand {
                Value::Integer(value) => Evaluation::Value(Value::Integer(-value)),
                other => Evaluation::Error(RuntimeError::UnknownPrefixOperation {
                    operator: PrefixOperator::Negate,
                    operand: other.value_type(),
                }),
            },
        }
    }

    fn execute_infix_expression(&mut self, expression: &InfixExpression, scope: &ScopeRef) -> Evaluation {
        if expression.operator == InfixOperator::Assign {
            return self.execute_assignment(expression, scope);
        }

        let left = match self.expression_value(&expression.left, scope) {
            Ok(value) => value,
            Err(signal) => return signal,
        };

        let right = match self.expression_value(&expression.right, scope) {
            Ok(value) => value,
            Err(signal) => return signal,
        };

        match apply_infix_operator(expression.operator, left, right) {
            Ok(value) => Evaluation::Value(value),
            Err(error) => Evaluation::Error(error),
        }
    }

    /// `=` is assignment, not an ordinary infix operator. The target is an
    /// identifier (rebound in the current frame) or an index over an
    /// identifier-named array (written in place, padding with nulls when the
    /// index is past the end).
    fn execute_assignment(&mut self, expression: &InfixExpression, scope: &ScopeRef) -> Evaluation {
        let value = match self.expression_value(&expression.right, scope) {
            Ok(value) => value,
            Err(signal) => return signal,
        };

        match expression.left.as_ref() {
            Expression::Identifier(name) => {
                scope.borrow_mut().set(name.clone(), value);
                Evaluation::Empty
            }

            Expression::Index(target) => self.execute_index_assignment(target, value, scope),

            _ => Evaluation::Error(RuntimeError::InvalidAssignmentTarget),
        }
    }

    fn execute_index_assignment(&mut self, target: &IndexExpression, value: Value, scope: &ScopeRef) -> Evaluation {
        let Some(name) = target.collection.as_identifier() else {
            return Evaluation::Error(RuntimeError::InvalidAssignmentTarget);
        };

        let Some(array_value) = scope.borrow().find(name) else {
            return Evaluation::Error(RuntimeError::ArrayNotDeclared);
        };

        let index_value = match self.expression_value(&target.index, scope) {
            Ok(value) => value,
            Err(signal) => return signal,
        };

        let (Value::Array(elements), Value::Integer(index)) = (&array_value, &index_value) else {
            return Evaluation::Error(RuntimeError::IndexOperatorNotSupported {
                collection: array_value.value_type(),
                index: index_value.value_type(),
            });
        };

        let Ok(index) = usize::try_from(*index) else {
            return Evaluation::Error(RuntimeError::ArrayIndexOutOfBounds);
        };

        let mut elements = elements.borrow_mut();
        while elements.len() < index + 1 {
            elements.push(Value::Null);
        }

        elements[index] = value;
        Evaluation::Empty
    }

    fn execute_if_expression(&mut self, expression: &IfExpression, scope: &ScopeRef) -> Evaluation {
        let condition = match self.expression_value(&expression.condition, scope) {
            Ok(value) => value,
            Err(signal) => return signal,
        };

        if condition.is_truthy() {
            self.execute_block(&expression.consequence, scope)
        } else if let Some(alternative) = &expression.alternative {
            self.execute_block(alternative, scope)
        } else {
            Evaluation::Value(Value::Null)
        }
    }

    fn execute_function_expression(&mut self, expression: &FunctionExpression, scope: &ScopeRef) -> Evaluation {
        Evaluation::Value(Value::Function(Rc::new(FunctionValue {
            parameters: expression.parameters.clone(),
            body: expression.body.clone(),
            scope: Rc::clone(scope),
        })))
    }

    fn execute_call_expression(&mut self, expression: &CallExpression, scope: &ScopeRef) -> Evaluation {
        let callee = match self.expression_value(&expression.callee, scope) {
            Ok(value) => value,
            Err(signal) => return signal,
        };

        let mut arguments = Vec::with_capacity(expression.arguments.len());
        for argument in &expression.arguments {
            match self.expression_value(argument, scope) {
                Ok(value) => arguments.push(value),
                Err(signal) => return signal,
            }
        }

        self.apply_function(callee, arguments)
    }

    /// A user function runs in a fresh child of its *captured* scope (this is
    /// what makes closures lexical rather than dynamic), with parameters
    /// bound positionally. Extra arguments are dropped; missing ones leave
    /// the parameter unbound.
    fn apply_function(&mut self, callee: Value, arguments: Vec<Value>) -> Evaluation {
        match callee {
            Value::Function(function) => {
                let scope = Scope::new_enclosed(&function.scope);

                for (parameter, argument) in function.parameters.iter().zip(arguments) {
                    scope.borrow_mut().set(parameter.clone(), argument);
                }

                self.execute_block(&function.body, &scope).unwrap_return()
            }

            Value::Builtin(builtin) => match (builtin.function)(&mut self.sink, arguments) {
                Ok(value) => Evaluation::Value(value),
                Err(error) => Evaluation::Error(error),
            },

            other => Evaluation::Error(RuntimeError::NotAFunction { callee: other.value_type() }),
        }
    }

    fn execute_array_literal(&mut self, expression: &ArrayLiteral, scope: &ScopeRef) -> Evaluation {
        let mut elements = Vec::with_capacity(expression.elements.len());

        for element in &expression.elements {
            match self.expression_value(element, scope) {
                Ok(value) => elements.push(value),
                Err(signal) => return signal,
            }
        }

        Evaluation::Value(Value::array(elements))
    }

    fn execute_index_expression(&mut self, expression: &IndexExpression, scope: &ScopeRef) -> Evaluation {
        let collection = match self.expression_value(&expression.collection, scope) {
            Ok(value) => value,
            Err(signal) => return signal,
        };

        let index = match self.expression_value(&expression.index, scope) {
            Ok(value) => value,
            Err(signal) => return signal,
        };

        let (Value::Array(elements), Value::Integer(index)) = (&collection, &index) else {
            return Evaluation::Error(RuntimeError::IndexOperatorNotSupported {
                collection: collection.value_type(),
                index: index.value_type(),
            });
        };

        let elements = elements.borrow();
        let Ok(index) = usize::try_from(*index) else {
            return Evaluation::Error(RuntimeError::ArrayIndexOutOfBounds);
        };

        match elements.get(index) {
            Some(element) => Evaluation::Value(element.clone()),
            None => Evaluation::Error(RuntimeError::ArrayIndexOutOfBounds),
        }
    }

    /// The value of a sub-expression as seen by a consuming site. Signals are
    /// handed back for the caller to return; an empty result (a call that
    /// never returned a value) is observed as `null`.
    fn expression_value(&mut self, expression: &Expression, scope: &ScopeRef) -> Result<Value, Evaluation> {
        match self.execute_expression(expression, scope) {
            Evaluation::Value(value) => Ok(value),
            Evaluation::Empty => Ok(Value::Null),
            signal => Err(signal),
        }
    }
}

fn apply_infix_operator(operator: InfixOperator, left: Value, right: Value) -> Result<Value, RuntimeError> {
    match (&left, &right) {
        (Value::Integer(lhs), Value::Integer(rhs)) => {
            apply_integer_operator(operator, *lhs, *rhs)
        }

        (Value::String(lhs), Value::String(rhs)) => {
            if operator == InfixOperator::Add {
                Ok(Value::String(format!("{lhs}{rhs}")))
            } else {
                Err(RuntimeError::UnknownInfixOperation {
                    left: ValueType::String,
                    operator,
                    right: ValueType::String,
                })
            }
        }

        _ => match operator {
            InfixOperator::Equals => Ok(Value::Bool(left == right)),
            InfixOperator::NotEquals => Ok(Value::Bool(left != right)),

            _ if left.value_type() != right.value_type() => Err(RuntimeError::TypeMismatch {
                left: left.value_type(),
                operator,
                right: right.value_type(),
            }),

            _ => Err(RuntimeError::UnknownInfixOperation {
                left: left.value_type(),
                operator,
                right: right.value_type(),
            }),
        },
    }
}

fn apply_integer_operator(operator: InfixOperator, lhs: i64, rhs: i64) -> Result<Value, RuntimeError> {
    Ok(match operator {
        InfixOperator::Add => Value::Integer(lhs + rhs),
        InfixOperator::Subtract => Value::Integer(lhs - rhs),
        InfixOperator::Multiply => Value::Integer(lhs * rhs),

        InfixOperator::Divide => {
            if rhs == 0 {
                return Err(RuntimeError::DivisionByZero);
            }

            Value::Integer(lhs / rhs)
        }

        InfixOperator::LessThan => Value::Bool(lhs < rhs),
        InfixOperator::GreaterThan => Value::Bool(lhs > rhs),
        InfixOperator::Equals => Value::Bool(lhs == rhs),
        InfixOperator::NotEquals => Value::Bool(lhs != rhs),

        InfixOperator::Assign => {
            return Err(RuntimeError::UnknownInfixOperation {
                left: ValueType::Integer,
                operator,
                right: ValueType::Integer,
            })
        }
    })
}
