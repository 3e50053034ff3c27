// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::AsRefStr;

use crate::{
    ArrayLiteral, BlockStatement, CallExpression, Expression, ForStatement, FunctionExpression, IfExpression, IndexExpression, InfixExpression, InfixOperator, Keyword, LetStatement, Lexer, PrefixExpression, PrefixOperator, Program, Punctuator, ReturnStatement, Statement, Token
};

/// Operator binding power, weakest first. The discriminant order is the
/// precedence table: comparing two variants compares binding power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Assign,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

impl Precedence {
    fn of(token: &Token) -> Self {
        let Token::Punctuator(punctuator) = token else {
            return Self::Lowest;
        };

        match punctuator {
            Punctuator::Assignment => Self::Assign,
            Punctuator::Equals | Punctuator::NotEquals => Self::Equals,
            Punctuator::LessThan | Punctuator::GreaterThan => Self::LessGreater,
            Punctuator::PlusSign | Punctuator::HyphenMinus => Self::Sum,
            Punctuator::Asterisk | Punctuator::Solidus => Self::Product,
            Punctuator::LeftParenthesis => Self::Call,
            Punctuator::LeftSquareBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

/// Recursive-descent statement parser with precedence-climbing expression
/// parsing. Syntax errors are accumulated as diagnostics instead of aborting;
/// a statement whose leading token has no prefix handler is abandoned and
/// parsing resumes at the next token.
pub struct Parser<'source_code> {
    lexer: Lexer<'source_code>,
    current_token: Token,
    peek_token: Token,
    diagnostics: Vec<ParseDiagnostic>,
}

impl<'source_code> Parser<'source_code> {
    pub fn new(lexer: Lexer<'source_code>) -> Self {
        let mut parser = Self {
            lexer,
            current_token: Token::EndOfFile,
            peek_token: Token::EndOfFile,
            diagnostics: Vec::new(),
        };

        // set current and peek
        parser.next_token();
        parser.next_token();

        parser
    }

    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while self.current_token != Token::EndOfFile {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }

            self.next_token();
        }

        program
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Vec<ParseDiagnostic> {
        self.diagnostics
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match &self.current_token {
            Token::Keyword(Keyword::Let) => self.parse_let_statement(),
            Token::Keyword(Keyword::Return) => self.parse_return_statement(),
            Token::Keyword(Keyword::For) => self.parse_for_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Statement> {
        let name = self.expect_peek_identifier()?;

        if !self.expect_peek(Punctuator::Assignment) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        self.skip_trailing_semicolon();

        Some(Statement::Let(LetStatement { name, value }))
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        self.skip_trailing_semicolon();

        Some(Statement::Return(ReturnStatement { value }))
    }

    fn parse_for_statement(&mut self) -> Option<Statement> {
        let iterator_name = self.expect_peek_identifier()?;

        if !self.expect_peek(Punctuator::Assignment) {
            return None;
        }

        self.next_token();
        let range = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(Punctuator::LeftCurlyBracket) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Statement::For(ForStatement { iterator_name, range, body }))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expression = self.parse_expression(Precedence::Lowest)?;

        self.skip_trailing_semicolon();

        Some(Statement::Expression(expression))
    }

    /// Current token must be the opening curly bracket. Leaves the closing
    /// bracket as the current token.
    fn parse_block_statement(&mut self) -> BlockStatement {
        let mut statements = Vec::new();

        self.next_token();

        while !self.current_token.is_punctuator(Punctuator::RightCurlyBracket)
            && self.current_token != Token::EndOfFile
        {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }

            self.next_token();
        }

        BlockStatement { statements }
    }

    /// The climbing loop: consume infix operators binding tighter than
    /// `precedence`. Recursing with the consumed operator's own precedence
    /// makes same-precedence chains left-associative.
    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_token.is_punctuator(Punctuator::Semicolon)
            && precedence < Precedence::of(&self.peek_token)
        {
            left = match &self.peek_token {
                Token::Punctuator(Punctuator::LeftParenthesis) => {
                    self.next_token();
                    self.parse_call_expression(left)?
                }

                Token::Punctuator(Punctuator::LeftSquareBracket) => {
                    self.next_token();
                    self.parse_index_expression(left)?
                }

                token => {
                    // No infix handler: the expression ends here.
                    let Some(operator) = infix_operator(token) else {
                        return Some(left);
                    };

                    self.next_token();
                    self.parse_infix_expression(operator, left)?
                }
            };
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current_token.clone() {
            Token::Identifier(name) => Some(Expression::Identifier(name)),
            Token::Integer(literal) => self.parse_integer_literal(&literal),
            Token::StringLiteral(literal) => Some(Expression::StringLiteral(literal)),
            Token::Keyword(Keyword::True) => Some(Expression::BooleanLiteral(true)),
            Token::Keyword(Keyword::False) => Some(Expression::BooleanLiteral(false)),
            Token::Keyword(Keyword::If) => self.parse_if_expression(),
            Token::Keyword(Keyword::Func) => self.parse_function_expression(),
            Token::Punctuator(Punctuator::LeftParenthesis) => self.parse_grouped_expression(),
            Token::Punctuator(Punctuator::LeftSquareBracket) => self.parse_array_literal(),
            Token::Punctuator(Punctuator::Not) => self.parse_prefix_expression(PrefixOperator::Not),
            Token::Punctuator(Punctuator::HyphenMinus) => self.parse_prefix_expression(PrefixOperator::Negate),

            token => {
                self.emit_diagnostic(ParseDiagnostic::NoPrefixParseFunction { token });
                None
            }
        }
    }

    fn parse_integer_literal(&mut self, literal: &str) -> Option<Expression> {
        match literal.parse() {
            Ok(value) => Some(Expression::IntegerLiteral(value)),
            Err(_) => {
                self.emit_diagnostic(ParseDiagnostic::NotAnInteger {
                    token: self.current_token.clone(),
                });
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self, operator: PrefixOperator) -> Option<Expression> {
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix(PrefixExpression {
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_infix_expression(&mut self, operator: InfixOperator, left: Expression) -> Option<Expression> {
        let precedence = Precedence::of(&self.current_token);
        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix(InfixExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(Punctuator::RightParenthesis) {
            return None;
        }

        Some(expression)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        if !self.expect_peek(Punctuator::LeftParenthesis) {
            return None;
        }

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(Punctuator::RightParenthesis) {
            return None;
        }

        if !self.expect_peek(Punctuator::LeftCurlyBracket) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token == Token::Keyword(Keyword::Else) {
            self.next_token();

            if !self.expect_peek(Punctuator::LeftCurlyBracket) {
                return None;
            }

            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If(IfExpression {
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    fn parse_function_expression(&mut self) -> Option<Expression> {
        if !self.expect_peek(Punctuator::LeftParenthesis) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(Punctuator::LeftCurlyBracket) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expression::Function(FunctionExpression { parameters, body }))
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_token.is_punctuator(Punctuator::RightParenthesis) {
            self.next_token();
            return Some(parameters);
        }

        self.next_token();
        parameters.push(self.current_identifier()?);

        while self.peek_token.is_punctuator(Punctuator::Comma) {
            self.next_token();
            self.next_token();
            parameters.push(self.current_identifier()?);
        }

        if !self.expect_peek(Punctuator::RightParenthesis) {
            return None;
        }

        Some(parameters)
    }

    fn parse_call_expression(&mut self, callee: Expression) -> Option<Expression> {
        let arguments = self.parse_expression_list(Punctuator::RightParenthesis)?;

        Some(Expression::Call(CallExpression {
            callee: Box::new(callee),
            arguments,
        }))
    }

    fn parse_array_literal(&mut self) -> Option<Expression> {
        let elements = self.parse_expression_list(Punctuator::RightSquareBracket)?;

        Some(Expression::Array(ArrayLiteral { elements }))
    }

    /// Comma-separated expressions up to `terminator`. Shared by call
    /// arguments and array literals.
    fn parse_expression_list(&mut self, terminator: Punctuator) -> Option<Vec<Expression>> {
        let mut list = Vec::new();

        if self.peek_token.is_punctuator(terminator) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token.is_punctuator(Punctuator::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(terminator) {
            return None;
        }

        Some(list)
    }

    fn parse_index_expression(&mut self, collection: Expression) -> Option<Expression> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(Punctuator::RightSquareBracket) {
            return None;
        }

        Some(Expression::Index(IndexExpression {
            collection: Box::new(collection),
            index: Box::new(index),
        }))
    }

    fn next_token(&mut self) {
        self.current_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    fn expect_peek(&mut self, expected: Punctuator) -> bool {
        if self.peek_token.is_punctuator(expected) {
            self.next_token();
            true
        } else {
            self.emit_diagnostic(ParseDiagnostic::UnexpectedToken {
                expected: expected.as_str(),
                actual: self.peek_token.clone(),
            });
            false
        }
    }

    fn expect_peek_identifier(&mut self) -> Option<String> {
        if let Token::Identifier(name) = &self.peek_token {
            let name = name.clone();
            self.next_token();
            Some(name)
        } else {
            self.emit_diagnostic(ParseDiagnostic::UnexpectedToken {
                expected: "IDENTIFIER",
                actual: self.peek_token.clone(),
            });
            None
        }
    }

    fn current_identifier(&mut self) -> Option<String> {
        if let Token::Identifier(name) = &self.current_token {
            Some(name.clone())
        } else {
            self.emit_diagnostic(ParseDiagnostic::UnexpectedToken {
                expected: "IDENTIFIER",
                actual: self.current_token.clone(),
            });
            None
        }
    }

    fn skip_trailing_semicolon(&mut self) {
        if self.peek_token.is_punctuator(Punctuator::Semicolon) {
            self.next_token();
        }
    }

    fn emit_diagnostic(&mut self, error: ParseDiagnostic) {
        log::trace!("Parse diagnostic: {error}");
        self.diagnostics.push(error);
    }
}

fn infix_operator(token: &Token) -> Option<InfixOperator> {
    let Token::Punctuator(punctuator) = token else {
        return None;
    };

    match punctuator {
        Punctuator::Assignment => Some(InfixOperator::Assign),
        Punctuator::Equals => Some(InfixOperator::Equals),
        Punctuator::NotEquals => Some(InfixOperator::NotEquals),
        Punctuator::LessThan => Some(InfixOperator::LessThan),
        Punctuator::GreaterThan => Some(InfixOperator::GreaterThan),
        Punctuator::PlusSign => Some(InfixOperator::Add),
        Punctuator::HyphenMinus => Some(InfixOperator::Subtract),
        Punctuator::Asterisk => Some(InfixOperator::Multiply),
        Punctuator::Solidus => Some(InfixOperator::Divide),
        _ => None,
    }
}

#[derive(Clone, Debug, thiserror::Error, AsRefStr)]
pub enum ParseDiagnostic {
    #[error("Expected next token to be {expected}, got {}", actual.name())]
    UnexpectedToken { expected: &'static str, actual: Token },

    #[error("No prefix parse function for {} found", token.name())]
    NoPrefixParseFunction { token: Token },

    #[error("Not an integer: {}", token.name())]
    NotAnInteger { token: Token },
}

impl ParseDiagnostic {
    pub fn token(&self) -> &Token {
        match self {
            Self::UnexpectedToken { actual, .. } => actual,
            Self::NoPrefixParseFunction { token } => token,
            Self::NotAnInteger { token } => token,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
