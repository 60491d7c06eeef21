// Configuration constants for the solver module
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 0.0;
/// Inputs longer than this trigger a warning; the search grows factorially.
pub const LARGE_INPUT_THRESHOLD: usize = 6;
/// Upper bound on candidates produced by combining one pair of terms
pub const MAX_CANDIDATES_PER_PAIR: usize = 6;
