//! Variables and literals of a truth table.
//!
//! Variables are 0-indexed by their *significance* in a row index: `X0` is the
//! least significant bit. Rows are read MSB-first, so the variable at bit
//! position `k` of an `n`-bit row is `X{n-1-k}`.
use std::fmt;
use std::ops::Neg;

use crate::render::{render_lit, render_var, RenderConfig};

/// A variable identifier (0-indexed, by bit significance).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a new variable with the given index.
    pub const fn new(index: u32) -> Self {
        Var(index)
    }

    /// Returns the variable labelling bit position `pos` (0 = MSB) of an `n`-bit row.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= n`.
    pub fn at_position(pos: usize, n: usize) -> Self {
        assert!(pos < n, "Position {} out of range for {} variables", pos, n);
        Var((n - 1 - pos) as u32)
    }

    /// Returns the raw variable index.
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Positive literal of this variable.
    pub const fn pos(self) -> Lit {
        Lit::new(self, false)
    }

    /// Negative literal of this variable.
    pub const fn neg(self) -> Lit {
        Lit::new(self, true)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_var(*self, &RenderConfig::default()))
    }
}

impl From<Var> for u32 {
    fn from(var: Var) -> Self {
        var.0
    }
}

/// A literal: a variable or its negation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Lit {
    var: Var,
    negated: bool,
}

impl Lit {
    pub const fn new(var: Var, negated: bool) -> Self {
        Lit { var, negated }
    }

    /// Literal that is true exactly when the variable equals `value`.
    pub const fn from_value(var: Var, value: bool) -> Self {
        Lit::new(var, !value)
    }

    pub const fn var(self) -> Var {
        self.var
    }

    pub const fn is_negated(self) -> bool {
        self.negated
    }

    pub const fn is_positive(self) -> bool {
        !self.negated
    }
}

impl Neg for Lit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Lit::new(self.var, !self.negated)
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_lit(*self, &RenderConfig::default()))
    }
}

/// Variables of an `n`-input function in row order (most significant first).
///
/// ```
/// use qmc_rs::types::variables;
///
/// let names: Vec<String> = variables(3).iter().map(|v| v.to_string()).collect();
/// assert_eq!(names, ["X2", "X1", "X0"]);
/// ```
pub fn variables(n: usize) -> Vec<Var> {
    (0..n).map(|pos| Var::at_position(pos, n)).collect()
}

/// Display names of [`variables`].
pub fn variable_names(n: usize) -> Vec<String> {
    variables(n).into_iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_at_position() {
        assert_eq!(Var::at_position(0, 3), Var::new(2));
        assert_eq!(Var::at_position(2, 3), Var::new(0));
        assert_eq!(Var::at_position(0, 1), Var::new(0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_var_at_position_out_of_range() {
        Var::at_position(3, 3);
    }

    #[test]
    fn test_variables_order() {
        assert_eq!(variable_names(4), ["X3", "X2", "X1", "X0"]);
        assert_eq!(variable_names(1), ["X0"]);
        assert!(variables(0).is_empty());
    }

    #[test]
    fn test_lit_display() {
        let x = Var::new(2);
        assert_eq!(x.pos().to_string(), "X2");
        assert_eq!(x.neg().to_string(), "!X2");
        assert_eq!((-x.pos()).to_string(), "!X2");
        assert_eq!(-(-x.neg()), x.neg());
    }

    #[test]
    fn test_lit_from_value() {
        let x = Var::new(0);
        assert!(Lit::from_value(x, true).is_positive());
        assert!(Lit::from_value(x, false).is_negated());
        assert_eq!(Lit::from_value(x, false).var(), x);
    }
}
