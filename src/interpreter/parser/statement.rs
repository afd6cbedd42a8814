use crate::ast::{Block, Statement};
use crate::interpreter::lexer::Token;
use crate::interpreter::parser::core::{Parser, Precedence};

impl Parser {
    /// Parses a single statement, dispatching on the current token.
    ///
    /// `let` and `return` start their dedicated forms; anything else is an
    /// expression statement. A statement that fails to parse yields `None`
    /// after recording the reason.
    pub fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token() {
            Some(Token::Let) => self.parse_let_statement(),
            Some(Token::Return) => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <name> = <expression>` with any number of trailing
    /// semicolons.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let line = self.cur_line();

        let name = if let Some(Token::Identifier(name)) = self.peek_token() {
            name.clone()
        } else {
            self.peek_error("IDENT");
            return None;
        };
        self.next_token();

        if !self.expect_peek(&Token::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        while self.peek_token_is(&Token::Semicolon) {
            self.next_token();
        }

        Some(Statement::Let { name, value, line })
    }

    /// Parses `return <expression>` with an optional trailing semicolon.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let line = self.cur_line();

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(&Token::Semicolon) {
            self.next_token();
        }

        Some(Statement::Return { value, line })
    }

    /// Parses a bare expression in statement position, with an optional
    /// trailing semicolon.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let line = self.cur_line();

        let expr = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(&Token::Semicolon) {
            self.next_token();
        }

        Some(Statement::Expression { expr, line })
    }

    /// Parses a brace-delimited block.
    ///
    /// The window must be on the opening brace. Statements are collected
    /// until the closing brace or the end of input; malformed statements
    /// are dropped after recording their errors, and the block itself is
    /// still produced.
    pub(crate) fn parse_block(&mut self) -> Block {
        let line = self.cur_line();
        let mut statements = Vec::new();

        self.next_token();

        while !(self.cur_token_is(&Token::RBrace) || self.cur_token().is_none()) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        Block { statements, line }
    }
}
