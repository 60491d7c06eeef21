use crate::expression::Expression;
use crate::solver::constants::MAX_CANDIDATES_PER_PAIR;
use crate::solver::state::Term;

pub struct ExpressionGenerator;

impl ExpressionGenerator {
    /// Every term obtainable by combining `a` and `b`, in search order:
    /// `a + b`, `a - b`, `b - a`, `a * b`, `a / b`, `b / a`.
    ///
    /// Addition and multiplication are produced once per pair. A division whose
    /// divisor is exactly zero is left out.
    pub fn combine(a: &Term, b: &Term) -> Vec<Term> {
        let mut out = Vec::with_capacity(MAX_CANDIDATES_PER_PAIR);
        let (ea, eb) = (&a.expr, &b.expr);

        out.push(Term::new(
            a.value + b.value,
            Expression::Add(Box::new(ea.clone()), Box::new(eb.clone())),
        ));
        out.push(Term::new(
            a.value - b.value,
            Expression::Sub(Box::new(ea.clone()), Box::new(eb.clone())),
        ));
        out.push(Term::new(
            b.value - a.value,
            Expression::Sub(Box::new(eb.clone()), Box::new(ea.clone())),
        ));
        out.push(Term::new(
            a.value * b.value,
            Expression::Mul(Box::new(ea.clone()), Box::new(eb.clone())),
        ));

        if b.value != 0.0 {
            out.push(Term::new(
                a.value / b.value,
                Expression::Div(Box::new(ea.clone()), Box::new(eb.clone())),
            ));
        }
        if a.value != 0.0 {
            out.push(Term::new(
                b.value / a.value,
                Expression::Div(Box::new(eb.clone()), Box::new(ea.clone())),
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(terms: &[Term]) -> Vec<String> {
        terms.iter().map(|t| t.expr.to_string()).collect()
    }

    #[test]
    fn test_combine_order() {
        let terms = ExpressionGenerator::combine(&Term::leaf(6.0), &Term::leaf(4.0));
        assert_eq!(
            rendered(&terms),
            vec!["(6 + 4)", "(6 - 4)", "(4 - 6)", "(6 * 4)", "(6 / 4)", "(4 / 6)"]
        );
        let values: Vec<f64> = terms.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![10.0, 2.0, -2.0, 24.0, 1.5, 4.0 / 6.0]);
    }

    #[test]
    fn test_combine_skips_division_by_zero() {
        let terms = ExpressionGenerator::combine(&Term::leaf(5.0), &Term::leaf(0.0));
        assert_eq!(
            rendered(&terms),
            vec!["(5 + 0)", "(5 - 0)", "(0 - 5)", "(5 * 0)", "(0 / 5)"]
        );

        let terms = ExpressionGenerator::combine(&Term::leaf(0.0), &Term::leaf(5.0));
        assert_eq!(
            rendered(&terms),
            vec!["(0 + 5)", "(0 - 5)", "(5 - 0)", "(0 * 5)", "(0 / 5)"]
        );
    }

    #[test]
    fn test_combine_both_zero_has_no_division() {
        let terms = ExpressionGenerator::combine(&Term::leaf(0.0), &Term::leaf(0.0));
        assert_eq!(terms.len(), 4);
        assert!(!terms.iter().any(|t| matches!(t.expr, Expression::Div(_, _))));
    }
}
