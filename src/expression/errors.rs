use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedChar { position: usize, found: char },
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Trailing input at position {position}")]
    TrailingInput { position: usize },
}
