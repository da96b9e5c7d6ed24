//! # qmc-rs: canonical forms and Quine-McCluskey minimization
//!
//! **`qmc-rs`** turns a single-output truth table, given as a bit string, into
//! boolean formulas:
//!
//! - the canonical **disjunctive** form (sum of minterms),
//! - the canonical **conjunctive** form (product of maxterms),
//! - a **minimized** disjunctive form: the sum of *all* prime implicants found
//!   by the Quine-McCluskey combination procedure,
//! - a **minimum** disjunctive form: a smallest subset of those primes that
//!   still covers the function (essential primes + bounded branch-and-bound).
//!
//! ## Input
//!
//! A bit string of length `2^n`. Character `i` is the output of row `i`, and the
//! inputs of row `i` are the bits of `i`, most significant first. Variables are
//! named `X{n-1}` down to `X0` in that order.
//!
//! ## Basic Usage
//!
//! ```rust
//! use qmc_rs::{conjunctive_form, disjunctive_form, minimized_form};
//!
//! let dnf = disjunctive_form("0110").unwrap();
//! assert_eq!(dnf, "(!X1 & X0) v (X1 & !X0)");
//!
//! let cnf = conjunctive_form("0111").unwrap();
//! assert_eq!(cnf, "(X1 v X0)");
//!
//! let min = minimized_form("10001110").unwrap();
//! assert_eq!(min, "(!X1 & !X0) v (X2 & !X1) v (X2 & !X0)");
//!
//! // Lengths other than 2^n are rejected.
//! let err = minimized_form("101").unwrap_err();
//! assert_eq!(err.to_string(), "Invalid string length (not 2^n)");
//! ```
//!
//! ## Core Components
//!
//! - **[`table`]**: parsing and row enumeration ([`TruthTable`][crate::table::TruthTable]).
//! - **[`canonical`]**: canonical forms.
//! - **[`qmc`]**: prime-implicant generation.
//! - **[`expr`]**: expressions and assembly from implicants.
//! - **[`cover`]**: minimum cover selection.
//! - **[`render`]**: text output and its configuration.
//! - **[`projection`]**: the fixed-width positional mode.
//!
//! All operations are pure: every call builds and drops its own working state.

pub mod bitset;
pub mod canonical;
pub mod cover;
pub mod error;
pub mod eval;
pub mod expr;
pub mod projection;
pub mod qmc;
pub mod render;
pub mod table;
pub mod types;

pub use error::{Error, Result};
pub use projection::{simple_projection, simple_projection_checked};

use table::TruthTable;

/// Canonical disjunctive form of `bool_str`, or `0` for the constant-zero function.
pub fn disjunctive_form(bool_str: &str) -> Result<String> {
    let table = TruthTable::parse(bool_str)?;
    Ok(canonical::disjunctive(&table).to_string())
}

/// Canonical conjunctive form of `bool_str`, or `1` for the constant-one function.
pub fn conjunctive_form(bool_str: &str) -> Result<String> {
    let table = TruthTable::parse(bool_str)?;
    Ok(canonical::conjunctive(&table).to_string())
}

/// Sum of all prime implicants of `bool_str`.
///
/// This is not necessarily a minimum cover; see [`minimum_form`].
pub fn minimized_form(bool_str: &str) -> Result<String> {
    let table = TruthTable::parse(bool_str)?;
    Ok(expr::minimize(&table).to_string())
}

/// Sum of a minimum set of prime implicants of `bool_str`.
pub fn minimum_form(bool_str: &str) -> Result<String> {
    let table = TruthTable::parse(bool_str)?;
    Ok(cover::minimum(&table).to_string())
}

/// Flattens a result into display text: the expression, or the error message.
pub fn render_result(result: Result<String>) -> String {
    result.unwrap_or_else(|e| e.to_string())
}
