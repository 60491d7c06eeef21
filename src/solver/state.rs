use crate::expression::Expression;
use crate::solver::generator::ExpressionGenerator;

/// A value paired with the expression that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub value: f64,
    pub expr: Expression,
}

impl Term {
    pub fn new(value: f64, expr: Expression) -> Self {
        Self { value, expr }
    }

    pub fn leaf(value: f64) -> Self {
        Self::new(value, Expression::Number(value))
    }
}

/// Terms not yet combined at one point of the search
///
/// States are never modified after construction; each reduction step builds a
/// fresh state holding one term fewer.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    terms: Vec<Term>,
}

impl SearchState {
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            terms: values.iter().copied().map(Term::leaf).collect(),
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The lone remaining term once the state is fully reduced
    pub fn reduced(&self) -> Option<&Term> {
        match self.terms.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// All states reachable by one pairwise reduction, in search order.
    ///
    /// Pairs `(i, j)` with `i < j` are visited row by row; for each pair the
    /// candidates follow [`ExpressionGenerator::combine`]. The combined term is
    /// appended after the untouched terms, which keep their relative order.
    pub fn successors(&self) -> Vec<SearchState> {
        let mut next = Vec::new();

        for (i, a) in self.terms.iter().enumerate() {
            for (j, b) in self.terms.iter().enumerate().skip(i + 1) {
                let remaining: Vec<Term> = self
                    .terms
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != i && k != j)
                    .map(|(_, t)| t.clone())
                    .collect();

                for combined in ExpressionGenerator::combine(a, b) {
                    let mut terms = Vec::with_capacity(remaining.len() + 1);
                    terms.extend(remaining.iter().cloned());
                    terms.push(combined);
                    next.push(SearchState { terms });
                }
            }
        }

        next
    }
}
