pub mod constants;
mod config;
mod core;
mod generator;
mod iter;
mod state;

pub use config::SolverConfig;
pub use self::core::{ExpressionSolver, SearchStats};
pub use iter::Solutions;
pub use state::{SearchState, Term};
