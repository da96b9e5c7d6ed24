//! Evaluation of literals, cubes and expressions on truth-table rows.
//!
//! A row index doubles as an assignment: variable `X{k}` takes bit `k` of it.

use crate::expr::Expression;
use crate::qmc::Cube;
use crate::table::TruthTable;
use crate::types::Lit;

pub trait Eval {
    /// Value on the assignment given by row `index`.
    fn eval(&self, index: usize) -> bool;
}

impl Eval for Lit {
    fn eval(&self, index: usize) -> bool {
        let value = (index >> self.var().index()) & 1 == 1;
        value != self.is_negated()
    }
}

impl Eval for [Lit] {
    /// Conjunction of the literals.
    fn eval(&self, index: usize) -> bool {
        self.iter().all(|lit| lit.eval(index))
    }
}

impl Eval for Cube {
    fn eval(&self, index: usize) -> bool {
        self.covers(index)
    }
}

impl Eval for Expression {
    fn eval(&self, index: usize) -> bool {
        match self {
            Expression::Const(value) => *value,
            Expression::Sum(terms) => terms.iter().any(|t| t.as_slice().eval(index)),
            Expression::Product(clauses) => clauses
                .iter()
                .all(|c| c.iter().any(|lit| lit.eval(index))),
        }
    }
}

impl Eval for TruthTable {
    fn eval(&self, index: usize) -> bool {
        self.output(index)
    }
}

/// Tabulates `f` over all rows of an `n`-input table.
pub fn tabulate<F: Eval + ?Sized>(f: &F, n: usize) -> TruthTable {
    TruthTable::from_minterms(n, (0..1usize << n).filter(|&i| f.eval(i)))
}
