use crate::ast::{Expr, InfixOperator, PrefixOperator};
use crate::error::ParseError;
use crate::interpreter::lexer::Token;
use crate::interpreter::parser::core::{Parser, Precedence, describe};

/// Maps a token to its corresponding infix operator.
///
/// Returns `None` for tokens that are not one of the eight binary
/// operators; the call and index forms are handled separately.
///
/// # Example
/// ```
/// use quill::ast::InfixOperator;
/// use quill::interpreter::lexer::Token;
/// use quill::interpreter::parser::expression::infix_operator;
///
/// assert_eq!(infix_operator(&Token::Plus), Some(InfixOperator::Add));
/// assert_eq!(infix_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn infix_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Add),
        Token::Minus => Some(InfixOperator::Sub),
        Token::Asterisk => Some(InfixOperator::Mul),
        Token::Slash => Some(InfixOperator::Div),
        Token::Less => Some(InfixOperator::Less),
        Token::Greater => Some(InfixOperator::Greater),
        Token::Equal => Some(InfixOperator::Equal),
        Token::NotEqual => Some(InfixOperator::NotEqual),
        _ => None,
    }
}

impl Parser {
    /// Parses an expression at the given precedence level.
    ///
    /// This is the precedence climbing loop: the current token must start
    /// an expression (have a prefix rule); afterwards, as long as the
    /// lookahead token is not a semicolon and binds more strongly than
    /// `precedence`, its infix rule extends the expression to the left.
    /// All binary operators are left-associative, since each right-hand
    /// side is parsed at the operator's own level.
    pub fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_token_is(&Token::Semicolon) && precedence < self.peek_precedence() {
            left = match self.peek_token() {
                Some(Token::LParen) => {
                    self.next_token();
                    self.parse_call_expression(left)?
                },
                Some(Token::LBracket) => {
                    self.next_token();
                    self.parse_index_expression(left)?
                },
                Some(token) if infix_operator(token).is_some() => {
                    self.next_token();
                    self.parse_infix_expression(left)?
                },
                _ => return Some(left),
            };
        }

        Some(left)
    }

    /// Dispatches on the current token's prefix rule.
    ///
    /// A token without a prefix rule cannot start an expression; that is
    /// recorded as an error and the expression is abandoned.
    fn parse_prefix(&mut self) -> Option<Expr> {
        let line = self.cur_line();

        match self.cur_token().cloned() {
            Some(Token::Identifier(name)) => Some(Expr::Identifier { name, line }),
            Some(Token::Int(literal)) => self.parse_integer_literal(&literal, line),
            Some(Token::Str(value)) => Some(Expr::StringLiteral { value, line }),
            Some(Token::True) => Some(Expr::BooleanLiteral { value: true, line }),
            Some(Token::False) => Some(Expr::BooleanLiteral { value: false, line }),
            Some(Token::Bang) => self.parse_prefix_expression(PrefixOperator::Not, line),
            Some(Token::Minus) => self.parse_prefix_expression(PrefixOperator::Negate, line),
            Some(Token::LParen) => self.parse_grouped_expression(),
            Some(Token::If) => self.parse_if_expression(line),
            Some(Token::Function) => self.parse_function_literal(line),
            Some(Token::Macro) => self.parse_macro_literal(line),
            Some(Token::LBracket) => self.parse_array_literal(line),
            Some(Token::LBrace) => self.parse_hash_literal(line),
            token => {
                self.record(ParseError::NoPrefixParseFunction { token: describe(token.as_ref()),
                                                                line });
                None
            },
        }
    }

    /// Parses an integer literal, reporting values that do not fit `i64`.
    fn parse_integer_literal(&mut self, literal: &str, line: usize) -> Option<Expr> {
        match literal.parse::<i64>() {
            Ok(value) => Some(Expr::IntegerLiteral { value, line }),
            Err(_) => {
                self.record(ParseError::InvalidIntegerLiteral { literal: literal.to_string(),
                                                                line });
                None
            },
        }
    }

    /// Parses the operand of a prefix operator at `Prefix` strength.
    fn parse_prefix_expression(&mut self, operator: PrefixOperator, line: usize) -> Option<Expr> {
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expr::Prefix { operator,
                            right: Box::new(right),
                            line })
    }

    /// Parses the right-hand side of a binary operator.
    ///
    /// The window is on the operator; the right operand is parsed at the
    /// operator's own precedence, which yields left associativity.
    fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let line = self.cur_line();
        let operator = infix_operator(self.cur_token()?)?;
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expr::Infix { left: Box::new(left),
                           operator,
                           right: Box::new(right),
                           line })
    }

    /// Parses `( <expression> )`; the parentheses only group.
    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }

        Some(expr)
    }

    /// Parses `if (<condition>) { ... }` with an optional `else { ... }`.
    fn parse_if_expression(&mut self, line: usize) -> Option<Expr> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        if !self.expect_peek(&Token::LBrace) {
            return None;
        }

        let consequence = self.parse_block();

        let alternative = if self.peek_token_is(&Token::Else) {
            self.next_token();

            if !self.expect_peek(&Token::LBrace) {
                return None;
            }

            Some(self.parse_block())
        } else {
            None
        };

        Some(Expr::If { condition: Box::new(condition),
                        consequence,
                        alternative,
                        line })
    }

    /// Parses `fn(<parameters>) { ... }`.
    fn parse_function_literal(&mut self, line: usize) -> Option<Expr> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }

        let parameters = self.parse_parameters()?;

        if !self.expect_peek(&Token::LBrace) {
            return None;
        }

        Some(Expr::FunctionLiteral { parameters,
                                     body: self.parse_block(),
                                     line })
    }

    /// Parses `macro(<parameters>) { ... }`.
    ///
    /// Macro literals share the function literal's shape; only the keyword
    /// differs.
    fn parse_macro_literal(&mut self, line: usize) -> Option<Expr> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }

        let parameters = self.parse_parameters()?;

        if !self.expect_peek(&Token::LBrace) {
            return None;
        }

        Some(Expr::MacroLiteral { parameters,
                                  body: self.parse_block(),
                                  line })
    }

    /// Parses a comma-separated parameter list up to the closing paren.
    fn parse_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_token_is(&Token::RParen) {
            self.next_token();
            return Some(parameters);
        }

        self.next_token();
        parameters.push(self.parse_parameter_name()?);

        while self.peek_token_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            parameters.push(self.parse_parameter_name()?);
        }

        if !self.expect_peek(&Token::RParen) {
            return None;
        }

        Some(parameters)
    }

    /// Requires the current token to be an identifier and yields its name.
    fn parse_parameter_name(&mut self) -> Option<String> {
        if let Some(Token::Identifier(name)) = self.cur_token() {
            return Some(name.clone());
        }

        let found = describe(self.cur_token());
        let line = self.cur_line();
        self.record(ParseError::UnexpectedToken { expected: "IDENT".to_string(),
                                                  found,
                                                  line });
        None
    }

    /// Parses `<callee>(<arguments>)`; the window is on the `(`.
    fn parse_call_expression(&mut self, function: Expr) -> Option<Expr> {
        let line = self.cur_line();
        let arguments = self.parse_expression_list(&Token::RParen)?;

        Some(Expr::Call { function: Box::new(function),
                          arguments,
                          line })
    }

    /// Parses `[<elements>]` as an array literal.
    fn parse_array_literal(&mut self, line: usize) -> Option<Expr> {
        let elements = self.parse_expression_list(&Token::RBracket)?;

        Some(Expr::ArrayLiteral { elements, line })
    }

    /// Parses a comma-separated expression list terminated by `end`.
    ///
    /// Shared by call arguments and array literals.
    fn parse_expression_list(&mut self, end: &Token) -> Option<Vec<Expr>> {
        let mut list = Vec::new();

        if self.peek_token_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }

    /// Parses `<collection>[<index>]`; the window is on the `[`.
    fn parse_index_expression(&mut self, left: Expr) -> Option<Expr> {
        let line = self.cur_line();

        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RBracket) {
            return None;
        }

        Some(Expr::Index { left: Box::new(left),
                           index: Box::new(index),
                           line })
    }

    /// Parses `{ <key>: <value>, ... }` as a hash literal.
    ///
    /// Duplicate keys are not rejected here; evaluation applies pairs in
    /// source order, so the last occurrence of a key wins.
    fn parse_hash_literal(&mut self, line: usize) -> Option<Expr> {
        let mut pairs = Vec::new();

        while !self.peek_token_is(&Token::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(&Token::Colon) {
                return None;
            }

            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_token_is(&Token::RBrace) && !self.expect_peek(&Token::Comma) {
                return None;
            }
        }

        if !self.expect_peek(&Token::RBrace) {
            return None;
        }

        Some(Expr::HashLiteral { pairs, line })
    }
}
