//! Truth tables and their rows.
//!
//! A truth table for an `n`-input function is a string of `2^n` characters,
//! where character `i` is the output of row `i`. The inputs of row `i` are the
//! `n`-bit binary expansion of `i`, most significant bit first.

use std::fmt;
use std::str::FromStr;

use log::debug;
use num_bigint::BigUint;

use crate::bitset::BitSet;
use crate::error::{Error, Result};

/// A single row of a truth table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    /// Row index in `[0, 2^n)`.
    pub index: usize,
    /// Input bits, most significant first.
    pub bits: Vec<bool>,
}

/// Returns the `n`-bit binary expansion of `index`, most significant bit first.
pub fn row_bits(index: usize, n: usize) -> Vec<bool> {
    (0..n).rev().map(|k| (index >> k) & 1 == 1).collect()
}

/// Inverse of [`row_bits`]: the row index of an MSB-first bit vector.
pub fn row_index(bits: &[bool]) -> usize {
    bits.iter().fold(0, |acc, &b| (acc << 1) | b as usize)
}

/// Enumerates all `2^n` rows of an `n`-input table in ascending index order.
pub fn rows(n: usize) -> impl Iterator<Item = Row> {
    (0..1usize << n).map(move |index| Row {
        index,
        bits: row_bits(index, n),
    })
}

/// A validated single-output truth table.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TruthTable {
    num_vars: usize,
    /// Rows whose output is 1.
    ones: BitSet,
}

impl TruthTable {
    /// Parses a bit string of length `2^n`.
    ///
    /// ```
    /// use qmc_rs::table::TruthTable;
    ///
    /// let table = TruthTable::parse("10001110").unwrap();
    /// assert_eq!(table.num_vars(), 3);
    /// assert_eq!(table.minterms().collect::<Vec<_>>(), vec![0, 4, 5, 6]);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let len = s.chars().count();
        if !len.is_power_of_two() {
            return Err(Error::InvalidLength { len });
        }
        let num_vars = len.trailing_zeros() as usize;

        let mut ones = BitSet::new(len);
        for (position, ch) in s.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => {
                    ones.insert(position);
                }
                _ => return Err(Error::InvalidChar { ch, position }),
            }
        }

        debug!("parse(len = {}) -> n = {}, ones = {}", len, num_vars, ones.len());
        Ok(Self { num_vars, ones })
    }

    /// Builds a table from its ON-set.
    ///
    /// # Panics
    ///
    /// Panics if any minterm is out of range for `num_vars` inputs.
    pub fn from_minterms(num_vars: usize, minterms: impl IntoIterator<Item = usize>) -> Self {
        let len = 1usize << num_vars;
        let mut ones = BitSet::new(len);
        for m in minterms {
            assert!(m < len, "Minterm {} out of range for {} variables", m, num_vars);
            ones.insert(m);
        }
        Self { num_vars, ones }
    }

    /// Builds a table from its function number: bit `i` of `number` is the output of row `i`.
    ///
    /// Bits at or above `2^num_vars` are ignored.
    pub fn from_biguint(num_vars: usize, number: &BigUint) -> Self {
        let len = 1usize << num_vars;
        let ones = (0..len).filter(|&i| number.bit(i as u64)).collect();
        Self { num_vars, ones }
    }

    /// Function number of this table (see [`TruthTable::from_biguint`]).
    pub fn to_biguint(&self) -> BigUint {
        let mut number = BigUint::ZERO;
        for i in self.ones.iter() {
            number.set_bit(i as u64, true);
        }
        number
    }

    /// Number of input variables.
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Number of rows (`2^n`).
    pub fn num_rows(&self) -> usize {
        1 << self.num_vars
    }

    /// Output of row `index`.
    pub fn output(&self, index: usize) -> bool {
        self.ones.contains(index)
    }

    /// Rows with output 1, ascending.
    pub fn minterms(&self) -> impl Iterator<Item = usize> + '_ {
        self.ones.iter()
    }

    /// Rows with output 0, ascending.
    pub fn maxterms(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.num_rows()).filter(move |&i| !self.ones.contains(i))
    }

    /// The ON-set as a bit set.
    pub fn ones(&self) -> &BitSet {
        &self.ones
    }

    /// Constant-zero function.
    pub fn is_zero(&self) -> bool {
        self.ones.is_empty()
    }

    /// Constant-one function.
    pub fn is_one(&self) -> bool {
        self.ones.len() == self.num_rows()
    }
}

impl FromStr for TruthTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TruthTable::parse(s)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.num_rows() {
            f.write_str(if self.output(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_bits() {
        assert_eq!(row_bits(5, 3), vec![true, false, true]);
        assert_eq!(row_bits(1, 4), vec![false, false, false, true]);
        assert!(row_bits(0, 0).is_empty());
    }

    #[test]
    fn test_row_index_inverse() {
        for i in 0..16 {
            assert_eq!(row_index(&row_bits(i, 4)), i);
        }
    }

    #[test]
    fn test_rows_order() {
        let all: Vec<Row> = rows(2).collect();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].bits, vec![false, false]);
        assert_eq!(all[1].bits, vec![false, true]);
        assert_eq!(all[2].bits, vec![true, false]);
        assert_eq!(all[3].bits, vec![true, true]);
        assert!(all.iter().enumerate().all(|(i, r)| r.index == i));
    }

    #[test]
    fn test_rows_zero_vars() {
        let all: Vec<Row> = rows(0).collect();
        assert_eq!(all, vec![Row { index: 0, bits: vec![] }]);
    }

    #[test]
    fn test_parse() {
        let t = TruthTable::parse("10001110").unwrap();
        assert_eq!(t.num_vars(), 3);
        assert_eq!(t.num_rows(), 8);
        assert_eq!(t.minterms().collect::<Vec<_>>(), vec![0, 4, 5, 6]);
        assert_eq!(t.maxterms().collect::<Vec<_>>(), vec![1, 2, 3, 7]);
        assert_eq!(t.to_string(), "10001110");
    }

    #[test]
    fn test_parse_invalid_length() {
        assert_eq!(TruthTable::parse("101"), Err(Error::InvalidLength { len: 3 }));
        assert_eq!(TruthTable::parse(""), Err(Error::InvalidLength { len: 0 }));
    }

    #[test]
    fn test_parse_invalid_char() {
        assert_eq!(
            TruthTable::parse("10x1"),
            Err(Error::InvalidChar { ch: 'x', position: 2 })
        );
    }

    #[test]
    fn test_constants() {
        assert!(TruthTable::parse("0000").unwrap().is_zero());
        assert!(TruthTable::parse("1111").unwrap().is_one());
        let single = TruthTable::parse("1").unwrap();
        assert_eq!(single.num_vars(), 0);
        assert!(single.is_one());
    }

    #[test]
    fn test_biguint_roundtrip() {
        let t: TruthTable = "01101001".parse().unwrap();
        let number = t.to_biguint();
        // Rows 1, 2, 4, 7 -> 0b10010110
        assert_eq!(number, BigUint::from(0b1001_0110u32));
        assert_eq!(TruthTable::from_biguint(3, &number), t);
    }

    #[test]
    fn test_from_minterms() {
        let t = TruthTable::from_minterms(2, [0, 3]);
        assert_eq!(t.to_string(), "1001");
    }

    #[test]
    fn test_num_rows() {
        assert_eq!(TruthTable::parse("1").unwrap().num_rows(), 1);
        assert_eq!(TruthTable::parse("0110").unwrap().num_rows(), 4);
        assert_eq!(TruthTable::from_minterms(5, []).num_rows(), 32);
    }
}
