use std::str::FromStr;

use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

/// Recursive-descent reader for the fully parenthesized form produced by `Display`
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn unexpected(&self) -> ExpressionError {
        match self.peek() {
            Some(found) => ExpressionError::UnexpectedChar {
                position: self.pos,
                found,
            },
            None => ExpressionError::UnexpectedEnd,
        }
    }

    fn expect(&mut self, want: char) -> Result<(), ExpressionError> {
        if self.peek() == Some(want) {
            self.bump();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn parse_expression(&mut self) -> Result<Expression, ExpressionError> {
        self.skip_whitespace();
        match self.peek() {
            Some('(') => self.parse_binary(),
            Some(_) => self.parse_number(),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }

    fn parse_binary(&mut self) -> Result<Expression, ExpressionError> {
        self.expect('(')?;
        let left = Box::new(self.parse_expression()?);

        self.skip_whitespace();
        let make: fn(Box<Expression>, Box<Expression>) -> Expression = match self.peek() {
            Some('+') => Expression::Add,
            Some('-') => Expression::Sub,
            Some('*') => Expression::Mul,
            Some('/') => Expression::Div,
            _ => return Err(self.unexpected()),
        };
        self.bump();

        let right = Box::new(self.parse_expression()?);
        self.skip_whitespace();
        self.expect(')')?;
        Ok(make(left, right))
    }

    fn parse_number(&mut self) -> Result<Expression, ExpressionError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.bump();
        }

        let mut previous = None;
        while let Some(c) = self.peek() {
            let exponent_sign =
                matches!(c, '+' | '-') && matches!(previous, Some('e') | Some('E'));
            if !(c.is_ascii_alphanumeric() || c == '.' || exponent_sign) {
                break;
            }
            previous = Some(c);
            self.bump();
        }

        let literal = self.input.get(start..self.pos).unwrap_or_default();
        if literal.is_empty() {
            return Err(self.unexpected());
        }

        literal
            .parse::<f64>()
            .map(Expression::Number)
            .map_err(|_| ExpressionError::InvalidNumber(literal.to_string()))
    }
}

impl Expression {
    /// Parse a fully parenthesized expression such as `(6 / (1 - (3 / 4)))`.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is truncated, contains an unexpected character,
    /// holds a malformed numeral, or has anything left over after the expression.
    pub fn parse(input: &str) -> Result<Self, ExpressionError> {
        let mut parser = Parser::new(input);
        let expr = parser.parse_expression()?;
        parser.skip_whitespace();

        if parser.pos < input.len() {
            debug!("Trailing input after expression in '{}'", input);
            return Err(ExpressionError::TrailingInput {
                position: parser.pos,
            });
        }
        Ok(expr)
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}
