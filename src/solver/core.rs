use log::{debug, info, warn};

use crate::expression::Expression;
use crate::solver::config::SolverConfig;
use crate::solver::constants::LARGE_INPUT_THRESHOLD;
use crate::solver::iter::Solutions;
use crate::solver::state::SearchState;

/// Counters gathered while exploring the search tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States with two or more terms that were reduced further
    pub states_expanded: usize,
    /// Fully reduced states compared against the target
    pub terminals_checked: usize,
    pub solutions: usize,
}

/// Exhaustive depth-first search for expressions that reach a target value
#[derive(Debug, Clone, Default)]
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Every expression over `values` that evaluates to `target`, in discovery order
    pub fn solve(&self, values: &[f64], target: f64) -> Vec<Expression> {
        self.solve_with_stats(values, target).0
    }

    /// Same as [`solve`](Self::solve), also reporting how much of the tree was visited
    pub fn solve_with_stats(&self, values: &[f64], target: f64) -> (Vec<Expression>, SearchStats) {
        self.announce(values, target);

        let mut found = Vec::new();
        let mut stats = SearchStats::default();
        self.search(SearchState::from_values(values), target, &mut found, &mut stats);
        stats.solutions = found.len();

        info!(
            "Found {} solutions ({} states expanded, {} terminals checked)",
            stats.solutions, stats.states_expanded, stats.terminals_checked
        );
        (found, stats)
    }

    /// Lazily walk the same search tree, yielding solutions in discovery order
    pub fn solutions(&self, values: &[f64], target: f64) -> Solutions {
        self.announce(values, target);
        Solutions::new(SearchState::from_values(values), target, self.config)
    }

    fn announce(&self, values: &[f64], target: f64) {
        if values.len() > LARGE_INPUT_THRESHOLD {
            warn!(
                "Searching {} values; the number of expressions grows factorially",
                values.len()
            );
        }
        info!("Searching for expressions over {:?} that equal {}", values, target);
    }

    fn search(
        &self,
        state: SearchState,
        target: f64,
        found: &mut Vec<Expression>,
        stats: &mut SearchStats,
    ) {
        if let Some(term) = state.reduced() {
            stats.terminals_checked += 1;
            if self.config.matches(term.value, target) {
                debug!("Solution: {} = {}", term.expr, term.value);
                found.push(term.expr.clone());
            }
            return;
        }

        if state.is_empty() {
            return;
        }

        stats.states_expanded += 1;
        for next in state.successors() {
            self.search(next, target, found, stats);
        }
    }
}
