use log::debug;

use crate::expression::Expression;
use crate::solver::config::SolverConfig;
use crate::solver::state::SearchState;

/// Lazy depth-first traversal of the search tree using an explicit stack.
///
/// Successors are pushed in reverse so that popping visits them in the same
/// order as the recursive search, which keeps the output sequence identical.
#[derive(Debug, Clone)]
pub struct Solutions {
    stack: Vec<SearchState>,
    target: f64,
    config: SolverConfig,
}

impl Solutions {
    pub(crate) fn new(root: SearchState, target: f64, config: SolverConfig) -> Self {
        Self {
            stack: vec![root],
            target,
            config,
        }
    }
}

impl Iterator for Solutions {
    type Item = Expression;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(state) = self.stack.pop() {
            if let Some(term) = state.reduced() {
                if self.config.matches(term.value, self.target) {
                    debug!("Solution: {} = {}", term.expr, term.value);
                    return Some(term.expr.clone());
                }
                continue;
            }

            self.stack.extend(state.successors().into_iter().rev());
        }
        None
    }
}
