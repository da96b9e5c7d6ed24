//! Canonical disjunctive and conjunctive forms.

use log::debug;

use crate::expr::Expression;
use crate::table::{rows, TruthTable};
use crate::types::{variables, Lit};

/// Canonical sum of minterms, in ascending row order.
///
/// ```
/// use qmc_rs::canonical::disjunctive;
/// use qmc_rs::table::TruthTable;
///
/// let table = TruthTable::parse("0110").unwrap();
/// assert_eq!(disjunctive(&table).to_string(), "(!X1 & X0) v (X1 & !X0)");
/// ```
pub fn disjunctive(table: &TruthTable) -> Expression {
    debug!("disjunctive(n = {})", table.num_vars());
    if table.num_vars() == 0 {
        return Expression::Const(table.output(0));
    }
    let vars = variables(table.num_vars());
    let terms: Vec<Vec<Lit>> = rows(table.num_vars())
        .filter(|row| table.output(row.index))
        .map(|row| {
            vars.iter()
                .zip(row.bits)
                .map(|(&v, bit)| Lit::from_value(v, bit))
                .collect()
        })
        .collect();

    if terms.is_empty() {
        Expression::Const(false)
    } else {
        Expression::Sum(terms)
    }
}

/// Canonical product of maxterms, in ascending row order.
///
/// A row with output 0 contributes the clause that is false exactly on it.
pub fn conjunctive(table: &TruthTable) -> Expression {
    debug!("conjunctive(n = {})", table.num_vars());
    if table.num_vars() == 0 {
        return Expression::Const(table.output(0));
    }
    let vars = variables(table.num_vars());
    let clauses: Vec<Vec<Lit>> = rows(table.num_vars())
        .filter(|row| !table.output(row.index))
        .map(|row| {
            vars.iter()
                .zip(row.bits)
                .map(|(&v, bit)| Lit::from_value(v, !bit))
                .collect()
        })
        .collect();

    if clauses.is_empty() {
        Expression::Const(true)
    } else {
        Expression::Product(clauses)
    }
}
