//! Minimum cover selection over prime implicants.
//!
//! [`minimized_form`][crate::minimized_form] reports every prime implicant.
//! This module picks a smallest subset that still covers the ON-set:
//! essential primes first, then a branch-and-bound search over the minterms
//! they leave uncovered.
//!
//! The search starts from a greedy cover and visits at most
//! [`SEARCH_BUDGET`] nodes. Within the budget the result is a minimum cover;
//! once the budget runs out the best cover found so far is returned, which is
//! always a valid cover but may use more implicants than necessary.

use std::cmp::Reverse;
use std::collections::HashSet;

use log::{debug, trace};

use crate::bitset::BitSet;
use crate::expr::{assemble, Expression};
use crate::qmc::{prime_implicants, Implicant};
use crate::table::TruthTable;

/// Default number of search nodes visited by [`minimum_cover`].
pub const SEARCH_BUDGET: usize = 20_000;

/// Drops implicants whose cube already appeared earlier.
fn distinct(primes: &[Implicant]) -> Vec<&Implicant> {
    let mut seen = HashSet::new();
    primes.iter().filter(|p| seen.insert(p.cube)).collect()
}

/// Indices (into `primes`) of the implicants covering each minterm.
fn coverage(table: &TruthTable, primes: &[&Implicant]) -> Vec<(usize, Vec<usize>)> {
    table
        .minterms()
        .map(|m| {
            let covering = primes
                .iter()
                .enumerate()
                .filter(|(_, p)| p.cube.covers(m))
                .map(|(i, _)| i)
                .collect();
            (m, covering)
        })
        .collect()
}

/// Primes that are the only cover of some minterm, in input order.
pub fn essential_implicants(table: &TruthTable, primes: &[Implicant]) -> Vec<Implicant> {
    let primes = distinct(primes);
    let essential: BitSet = coverage(table, &primes)
        .into_iter()
        .filter_map(|(_, covering)| match covering.as_slice() {
            [only] => Some(*only),
            _ => None,
        })
        .collect();
    essential.iter().map(|i| primes[i].clone()).collect()
}

/// Number of implicants, then number of literals.
type Cost = (usize, usize);

/// Branch-and-bound over the rows left open by the essential primes.
struct CoverSearch {
    /// Candidate primes of each open row.
    rows: Vec<Vec<usize>>,
    /// Open rows covered by each prime.
    covers: Vec<BitSet>,
    /// Literal count of each prime.
    literals: Vec<usize>,
    best: Vec<usize>,
    best_cost: Cost,
    nodes: usize,
    budget: usize,
}

impl CoverSearch {
    fn new(rows: Vec<Vec<usize>>, literals: Vec<usize>, budget: usize) -> Self {
        let mut covers = vec![BitSet::empty(); literals.len()];
        for (r, candidates) in rows.iter().enumerate() {
            for &c in candidates {
                covers[c].insert(r);
            }
        }
        Self {
            rows,
            covers,
            literals,
            best: Vec::new(),
            best_cost: (usize::MAX, usize::MAX),
            nodes: 0,
            budget,
        }
    }

    fn cost(&self, picks: &[usize]) -> Cost {
        (picks.len(), picks.iter().map(|&c| self.literals[c]).sum())
    }

    /// Orders candidates by open rows covered, then literals, then index.
    fn rank(&self, c: usize, uncovered: &BitSet) -> (Reverse<usize>, usize, usize) {
        (
            Reverse(self.covers[c].intersection(uncovered).len()),
            self.literals[c],
            c,
        )
    }

    /// Repeatedly takes the best-ranked prime until every row is covered.
    fn greedy(&self) -> Vec<usize> {
        let mut uncovered: BitSet = (0..self.rows.len()).collect();
        let mut picks = Vec::new();
        while !uncovered.is_empty() {
            let Some(pick) = (0..self.covers.len())
                .filter(|&c| self.covers[c].intersects(&uncovered))
                .min_by_key(|&c| self.rank(c, &uncovered))
            else {
                break;
            };
            uncovered = uncovered.difference(&self.covers[pick]);
            picks.push(pick);
        }
        picks
    }

    fn run(&mut self) {
        let initial = self.greedy();
        self.best_cost = self.cost(&initial);
        trace!("cover search: greedy cost {:?}", self.best_cost);
        self.best = initial;

        let uncovered: BitSet = (0..self.rows.len()).collect();
        self.branch(&uncovered, &BitSet::empty(), &mut Vec::new(), 0);
    }

    fn exhausted(&self) -> bool {
        self.nodes >= self.budget
    }

    /// Candidates of `row` that have not been ruled out.
    fn open<'s>(&'s self, row: usize, banned: &'s BitSet) -> impl Iterator<Item = usize> + 's {
        self.rows[row]
            .iter()
            .copied()
            .filter(move |&c| !banned.contains(c))
    }

    /// Number of open rows with pairwise disjoint candidate sets.
    ///
    /// Each such row needs its own prime, so this bounds the picks still needed.
    fn lower_bound(&self, uncovered: &BitSet, banned: &BitSet) -> usize {
        let mut taken = BitSet::empty();
        let mut bound = 0;
        for r in uncovered.iter() {
            let candidates: Vec<usize> = self.open(r, banned).collect();
            if candidates.iter().all(|&c| !taken.contains(c)) {
                taken.extend(candidates);
                bound += 1;
            }
        }
        bound
    }

    fn branch(&mut self, uncovered: &BitSet, banned: &BitSet, picks: &mut Vec<usize>, literals: usize) {
        if self.exhausted() {
            return;
        }
        self.nodes += 1;

        if uncovered.is_empty() {
            let cost = (picks.len(), literals);
            if cost < self.best_cost {
                trace!("cover search: cost {:?} after {} nodes", cost, self.nodes);
                self.best_cost = cost;
                self.best = picks.clone();
            }
            return;
        }

        // Every prime has at least one literal here, so `bound` also bounds the literals.
        let bound = self.lower_bound(uncovered, banned);
        if (picks.len() + bound, literals + bound) >= self.best_cost {
            return;
        }

        let Some(row) = uncovered
            .iter()
            .min_by_key(|&r| self.open(r, banned).count())
        else {
            return;
        };
        let mut candidates: Vec<usize> = self.open(row, banned).collect();
        candidates.sort_by_key(|&c| self.rank(c, uncovered));

        // Covers containing an earlier candidate were already explored in its branch.
        let mut banned = banned.clone();
        for c in candidates {
            let rest = uncovered.difference(&self.covers[c]);
            let added = self.literals[c];
            picks.push(c);
            self.branch(&rest, &banned, picks, literals + added);
            picks.pop();
            banned.insert(c);
        }
    }
}

/// Selects a minimum subset of `primes` covering every minterm of `table`.
///
/// Ties on the number of implicants are broken by the number of literals,
/// then by search order. The result keeps input order.
///
/// The search visits at most [`SEARCH_BUDGET`] nodes; see
/// [`minimum_cover_with_budget`].
pub fn minimum_cover(table: &TruthTable, primes: &[Implicant]) -> Vec<Implicant> {
    minimum_cover_with_budget(table, primes, SEARCH_BUDGET)
}

/// Like [`minimum_cover`], with an explicit node budget.
///
/// With a budget of `0` only the greedy cover is computed. When the budget
/// runs out the best cover found so far is returned.
pub fn minimum_cover_with_budget(
    table: &TruthTable,
    primes: &[Implicant],
    budget: usize,
) -> Vec<Implicant> {
    let primes = distinct(primes);
    let coverage = coverage(table, &primes);

    let mut chosen: BitSet = coverage
        .iter()
        .filter_map(|(_, covering)| match covering.as_slice() {
            [only] => Some(*only),
            _ => None,
        })
        .collect();
    debug!("minimum_cover: {} essential of {} primes", chosen.len(), primes.len());

    let rows: Vec<Vec<usize>> = coverage
        .into_iter()
        .map(|(_, covering)| covering)
        .filter(|covering| !covering.iter().any(|&i| chosen.contains(i)))
        .collect();

    if !rows.is_empty() {
        let literals = primes.iter().map(|p| p.cube.num_literals()).collect();
        let mut search = CoverSearch::new(rows, literals, budget);
        search.run();
        if search.exhausted() {
            debug!(
                "minimum_cover: budget of {} nodes exhausted, keeping cost {:?}",
                budget, search.best_cost
            );
        } else {
            debug!(
                "minimum_cover: search done in {} nodes, cost {:?}",
                search.nodes, search.best_cost
            );
        }
        chosen.extend(search.best);
    }

    chosen.iter().map(|i| primes[i].clone()).collect()
}

/// Sum of a minimum set of prime implicants.
pub fn minimum(table: &TruthTable) -> Expression {
    if table.is_zero() {
        return Expression::Const(false);
    }
    if table.is_one() {
        return Expression::Const(true);
    }
    let primes = prime_implicants(table);
    assemble(&minimum_cover(table, &primes))
}
