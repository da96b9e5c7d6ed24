//! Prime-implicant generation (Quine-McCluskey).
//!
//! Minterms are bucketed by popcount and repeatedly merged pairwise between
//! adjacent buckets. Every pass takes ownership of the previous pass's terms,
//! marks the ones that took part in a merge as absorbed, and hands the
//! survivors over to the result. The merged terms form the next pass.
//!
//! The result contains *every* prime implicant, which may be more than a
//! minimum cover needs. See [`cover`][crate::cover] for cover selection.

use std::collections::HashSet;
use std::fmt;

use log::{debug, trace};

use crate::bitset::BitSet;
use crate::table::TruthTable;
use crate::types::{Lit, Var};

/// A product term over `width` variables, some of which are free (`-`).
///
/// Bit `k` of `value` and `free` refers to variable `X{k}`, so the leftmost
/// character of the pattern is bit `width - 1`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Cube {
    value: u64,
    free: u64,
    width: u32,
}

impl Cube {
    /// The full cube of row `index` in an `width`-input table.
    pub fn minterm(index: usize, width: usize) -> Self {
        assert!(width <= 64, "At most 64 variables are supported");
        Self {
            value: index as u64,
            free: 0,
            width: width as u32,
        }
    }

    /// Parses a pattern such as `"1-0"` (MSB first).
    pub fn from_pattern(pattern: &str) -> Option<Self> {
        let width = pattern.chars().count();
        if width > 64 {
            return None;
        }
        let mut value = 0;
        let mut free = 0;
        for ch in pattern.chars() {
            value <<= 1;
            free <<= 1;
            match ch {
                '0' => {}
                '1' => value |= 1,
                '-' => free |= 1,
                _ => return None,
            }
        }
        Some(Self {
            value,
            free,
            width: width as u32,
        })
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Number of `1` positions.
    pub fn ones(&self) -> usize {
        (self.value & !self.free).count_ones() as usize
    }

    /// Number of fixed (non-`-`) positions.
    pub fn num_literals(&self) -> usize {
        self.width() - self.free.count_ones() as usize
    }

    /// Value at row-bit position `pos` (0 = MSB), or `None` for a free position.
    pub fn get(&self, pos: usize) -> Option<bool> {
        assert!(pos < self.width(), "Position {} out of range", pos);
        let bit = self.width() - 1 - pos;
        if (self.free >> bit) & 1 == 1 {
            None
        } else {
            Some((self.value >> bit) & 1 == 1)
        }
    }

    /// Merges two cubes that differ in exactly one fixed position.
    ///
    /// Free positions must coincide; the differing position becomes free.
    pub fn try_join(self, other: Cube) -> Option<Cube> {
        if self.width != other.width || self.free != other.free {
            return None;
        }
        let difference = (self.value ^ other.value) & !self.free;
        if difference.count_ones() != 1 {
            return None;
        }
        Some(Cube {
            value: self.value & !difference,
            free: self.free | difference,
            width: self.width,
        })
    }

    /// Whether row `index` lies inside this cube.
    pub fn covers(&self, index: usize) -> bool {
        ((index as u64) ^ self.value) & !self.free & self.mask() == 0
    }

    /// Literals of the fixed positions, most significant variable first.
    pub fn literals(&self) -> Vec<Lit> {
        let n = self.width();
        (0..n)
            .filter_map(|pos| {
                self.get(pos)
                    .map(|value| Lit::from_value(Var::at_position(pos, n), value))
            })
            .collect()
    }

    fn mask(&self) -> u64 {
        if self.width == 64 {
            u64::MAX
        } else {
            (1u64 << self.width) - 1
        }
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in 0..self.width() {
            let ch = match self.get(pos) {
                Some(true) => '1',
                Some(false) => '0',
                None => '-',
            };
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cube({})", self)
    }
}

/// A cube together with the minterms it was built from.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Implicant {
    pub cube: Cube,
    pub minterms: BitSet,
}

impl Implicant {
    fn minterm(index: usize, width: usize) -> Self {
        Self {
            cube: Cube::minterm(index, width),
            minterms: BitSet::singleton(index),
        }
    }

    fn try_join(&self, other: &Implicant) -> Option<Implicant> {
        self.cube.try_join(other.cube).map(|cube| Implicant {
            cube,
            minterms: self.minterms.union(&other.minterms),
        })
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.cube, self.minterms.iter().collect::<Vec<_>>())
    }
}

/// Terms of one pass, bucketed by popcount.
type Groups = Vec<Vec<Implicant>>;

/// Result of a single combination pass.
struct Pass {
    /// Merged terms, bucketed for the next pass.
    next: Groups,
    /// Terms of this pass that were never absorbed.
    survivors: Vec<Implicant>,
}

/// Runs one combination pass over `groups`, consuming them.
fn combine_pass(groups: Groups) -> Pass {
    // Flat arena index of the first term of each group.
    let offsets: Vec<usize> = groups
        .iter()
        .scan(0, |acc, g| {
            let start = *acc;
            *acc += g.len();
            Some(start)
        })
        .collect();

    let mut absorbed = BitSet::empty();
    let mut seen: HashSet<Implicant> = HashSet::new();
    let mut next: Groups = vec![Vec::new(); groups.len().saturating_sub(1)];

    for k in 0..groups.len().saturating_sub(1) {
        for (i, a) in groups[k].iter().enumerate() {
            for (j, b) in groups[k + 1].iter().enumerate() {
                if let Some(joined) = a.try_join(b) {
                    absorbed.insert(offsets[k] + i);
                    absorbed.insert(offsets[k + 1] + j);
                    if seen.insert(joined.clone()) {
                        // The freed position held a 1 in `b`, so the popcount is `k`.
                        next[k].push(joined);
                    }
                }
            }
        }
    }

    let survivors = groups
        .into_iter()
        .flatten()
        .enumerate()
        .filter(|(idx, _)| !absorbed.contains(*idx))
        .map(|(_, term)| term)
        .collect();

    Pass { next, survivors }
}

/// Computes all prime implicants of the table's ON-set.
///
/// Terms are reported pass by pass, and within a pass by ascending popcount
/// group and then creation order. Distinct entries may share a cube.
///
/// ```
/// use qmc_rs::qmc::prime_implicants;
/// use qmc_rs::table::TruthTable;
///
/// let table = TruthTable::parse("10001110").unwrap();
/// let primes: Vec<String> = prime_implicants(&table)
///     .iter()
///     .map(|p| p.cube.to_string())
///     .collect();
/// assert_eq!(primes, ["-00", "10-", "1-0"]);
/// ```
pub fn prime_implicants(table: &TruthTable) -> Vec<Implicant> {
    let n = table.num_vars();
    debug!(
        "prime_implicants(n = {}, minterms = {})",
        n,
        table.ones().len()
    );

    let mut groups: Groups = vec![Vec::new(); n + 1];
    for m in table.minterms() {
        let term = Implicant::minterm(m, n);
        groups[term.cube.ones()].push(term);
    }

    let mut primes = Vec::new();
    let mut pass_number = 0;
    loop {
        let Pass { next, survivors } = combine_pass(groups);
        let merged: usize = next.iter().map(Vec::len).sum();
        trace!(
            "pass {}: {} merged, {} prime",
            pass_number,
            merged,
            survivors.len()
        );
        primes.extend(survivors);
        if merged == 0 {
            break;
        }
        groups = next;
        pass_number += 1;
    }

    debug!("prime_implicants -> {} terms", primes.len());
    primes
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn cubes(primes: &[Implicant]) -> Vec<String> {
        primes.iter().map(|p| p.cube.to_string()).collect()
    }

    #[test]
    fn test_cube_pattern() {
        let c = Cube::from_pattern("1-0").unwrap();
        assert_eq!(c.to_string(), "1-0");
        assert_eq!(c.get(0), Some(true));
        assert_eq!(c.get(1), None);
        assert_eq!(c.get(2), Some(false));
        assert_eq!(c.ones(), 1);
        assert_eq!(c.num_literals(), 2);
        assert!(Cube::from_pattern("1x0").is_none());
    }

    #[test]
    fn test_cube_join() {
        let a = Cube::minterm(0b100, 3);
        let b = Cube::minterm(0b101, 3);
        assert_eq!(a.try_join(b), Cube::from_pattern("10-"));
        // Two differences
        assert_eq!(a.try_join(Cube::minterm(0b111, 3)), None);
        // Identical cubes do not merge
        assert_eq!(a.try_join(a), None);
    }

    #[test]
    fn test_cube_join_free_positions_must_match() {
        let a = Cube::from_pattern("-0").unwrap();
        let b = Cube::from_pattern("00").unwrap();
        assert_eq!(a.try_join(b), None);
        let c = Cube::from_pattern("-1").unwrap();
        assert_eq!(a.try_join(c), Cube::from_pattern("--"));
    }

    #[test]
    fn test_cube_covers() {
        let c = Cube::from_pattern("1-0").unwrap();
        let covered: Vec<usize> = (0..8).filter(|&i| c.covers(i)).collect();
        assert_eq!(covered, vec![4, 6]);
    }

    #[test]
    fn test_cube_literals() {
        let c = Cube::from_pattern("0-1").unwrap();
        let lits: Vec<String> = c.literals().iter().map(|l| l.to_string()).collect();
        assert_eq!(lits, ["!X2", "X0"]);
        assert!(Cube::from_pattern("--").unwrap().literals().is_empty());
    }

    #[test]
    fn test_primes_example() {
        let table = TruthTable::parse("10001110").unwrap();
        let primes = prime_implicants(&table);
        assert_eq!(cubes(&primes), ["-00", "10-", "1-0"]);
        assert_eq!(primes[0].minterms.iter().collect::<Vec<_>>(), vec![0, 4]);
    }

    #[test]
    fn test_primes_reported_per_pass() {
        // f = X1 v (X2 & X0): minterms 2, 3, 5, 6, 7
        let table = TruthTable::from_minterms(3, [2, 3, 5, 6, 7]);
        let primes = prime_implicants(&table);
        assert_eq!(cubes(&primes), ["1-1", "-1-"]);
    }

    #[test]
    fn test_primes_same_cube_deduplicated_within_pass() {
        // All four rows: "--" is reachable through two merge orders.
        let table = TruthTable::parse("1111").unwrap();
        let primes = prime_implicants(&table);
        assert_eq!(cubes(&primes), ["--"]);
        assert_eq!(primes[0].minterms.len(), 4);
    }

    #[test]
    fn test_primes_isolated_minterms() {
        let table = TruthTable::parse("1001").unwrap();
        let primes = prime_implicants(&table);
        assert_eq!(cubes(&primes), ["00", "11"]);
    }

    #[test]
    fn test_primes_empty() {
        let table = TruthTable::parse("0000").unwrap();
        assert!(prime_implicants(&table).is_empty());
    }

    #[test]
    fn test_primes_are_implicants() {
        let table = TruthTable::parse("1101011100101111").unwrap();
        let primes = prime_implicants(&table);
        for p in &primes {
            for row in 0..table.num_rows() {
                if p.cube.covers(row) {
                    assert!(table.output(row), "{} covers 0-row {}", p, row);
                }
            }
        }
        for m in table.minterms() {
            assert!(primes.iter().any(|p| p.cube.covers(m)), "minterm {} uncovered", m);
        }
    }
}
