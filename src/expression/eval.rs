use log::trace;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

impl Expression {
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] when a divisor evaluates to exactly zero.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => Ok(l.evaluate()? + r.evaluate()?),
            Expression::Sub(l, r) => Ok(l.evaluate()? - r.evaluate()?),
            Expression::Mul(l, r) => Ok(l.evaluate()? * r.evaluate()?),
            Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if right == 0.0 {
                    trace!("Division by zero in {}", self);
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        };

        if let Ok(value) = &result {
            trace!("{} = {}", self, value);
        }
        result
    }
}
