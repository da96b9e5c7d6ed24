//! Two-level boolean expressions and their assembly from implicants.

use std::collections::HashSet;
use std::fmt;

use log::debug;

use crate::qmc::{prime_implicants, Implicant};
use crate::render::{render, RenderConfig};
use crate::table::TruthTable;
use crate::types::Lit;

/// A constant, a sum of products, or a product of sums.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expression {
    Const(bool),
    /// Disjunction of conjunctions.
    Sum(Vec<Vec<Lit>>),
    /// Conjunction of disjunctions.
    Product(Vec<Vec<Lit>>),
}

impl Expression {
    /// Number of top-level terms (0 for constants).
    pub fn num_terms(&self) -> usize {
        match self {
            Expression::Const(_) => 0,
            Expression::Sum(terms) | Expression::Product(terms) => terms.len(),
        }
    }

    /// Total number of literal occurrences.
    pub fn num_literals(&self) -> usize {
        match self {
            Expression::Const(_) => 0,
            Expression::Sum(terms) | Expression::Product(terms) => terms.iter().map(Vec::len).sum(),
        }
    }

    /// Renders with a custom configuration.
    pub fn render_with_config(&self, config: &RenderConfig) -> String {
        render(self, config)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, &RenderConfig::default()))
    }
}

/// Joins implicants into a sum of products.
///
/// Each implicant contributes the conjunction of its fixed positions; identical
/// conjunctions are kept once, in order of first appearance. An empty
/// collection yields the constant `0`.
pub fn assemble(implicants: &[Implicant]) -> Expression {
    let mut seen: HashSet<Vec<Lit>> = HashSet::new();
    let terms: Vec<Vec<Lit>> = implicants
        .iter()
        .map(|p| p.cube.literals())
        .filter(|lits| seen.insert(lits.clone()))
        .collect();

    if terms.is_empty() {
        Expression::Const(false)
    } else {
        Expression::Sum(terms)
    }
}

/// Sum of all prime implicants of the table.
///
/// Constant functions are answered directly, without running the engine.
pub fn minimize(table: &TruthTable) -> Expression {
    debug!("minimize(n = {}, minterms = {})", table.num_vars(), table.ones().len());
    if table.is_zero() {
        return Expression::Const(false);
    }
    if table.is_one() {
        return Expression::Const(true);
    }
    assemble(&prime_implicants(table))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::bitset::BitSet;
    use crate::qmc::Cube;

    fn implicant(pattern: &str) -> Implicant {
        let cube = Cube::from_pattern(pattern).unwrap();
        let minterms = (0..1 << cube.width()).filter(|&i| cube.covers(i)).collect::<BitSet>();
        Implicant { cube, minterms }
    }

    #[test]
    fn test_assemble_empty() {
        assert_eq!(assemble(&[]), Expression::Const(false));
        assert_eq!(assemble(&[]).to_string(), "0");
    }

    #[test]
    fn test_assemble_dedup_keeps_first_order() {
        let primes = vec![implicant("1-0"), implicant("-00"), implicant("1-0")];
        let e = assemble(&primes);
        assert_eq!(e.num_terms(), 2);
        assert_eq!(e.to_string(), "(X2 & !X0) v (!X1 & !X0)");
    }

    #[test]
    fn test_assemble_all_free() {
        let e = assemble(&[implicant("--")]);
        assert_eq!(e, Expression::Sum(vec![vec![]]));
        assert_eq!(e.to_string(), "()");
    }

    #[test]
    fn test_minimize_constants() {
        assert_eq!(minimize(&TruthTable::parse("0000").unwrap()), Expression::Const(false));
        assert_eq!(minimize(&TruthTable::parse("1111").unwrap()), Expression::Const(true));
        assert_eq!(minimize(&TruthTable::parse("1").unwrap()), Expression::Const(true));
        assert_eq!(minimize(&TruthTable::parse("0").unwrap()), Expression::Const(false));
    }

    #[test]
    fn test_minimize_example() {
        let e = minimize(&TruthTable::parse("10001110").unwrap());
        assert_eq!(e.to_string(), "(!X1 & !X0) v (X2 & !X1) v (X2 & !X0)");
        assert_eq!(e.num_literals(), 6);
    }
}
