//! Expression trees built by the solver, plus display, evaluation and parsing

mod ast;
mod display;
mod errors;
mod eval;
mod parse;

pub use ast::Expression;
pub use errors::ExpressionError;
