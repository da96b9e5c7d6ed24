//! Text rendering of expressions.
//!
//! The default configuration produces the `!X2 & X1` / ` v ` notation:
//!
//! ```
//! use qmc_rs::expr::Expression;
//! use qmc_rs::render::{render, RenderConfig};
//! use qmc_rs::types::Var;
//!
//! let e = Expression::Sum(vec![vec![Var::new(1).neg(), Var::new(0).pos()]]);
//! assert_eq!(render(&e, &RenderConfig::default()), "(!X1 & X0)");
//!
//! let config = RenderConfig {
//!     var_prefix: "x",
//!     not: "~",
//!     and: "*",
//!     or: " + ",
//!     ..RenderConfig::default()
//! };
//! assert_eq!(render(&e, &config), "(~x1*x0)");
//! ```

use crate::expr::Expression;
use crate::types::{Lit, Var};

/// Configuration options for expression rendering.
///
/// Use `RenderConfig::default()` for the standard notation.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Prefix of variable names (default: "X")
    pub var_prefix: &'static str,
    /// Negation marker (default: "!")
    pub not: &'static str,
    /// Conjunction separator (default: " & ")
    pub and: &'static str,
    /// Disjunction separator (default: " v ")
    pub or: &'static str,
    /// Constant false (default: "0")
    pub zero: &'static str,
    /// Constant true (default: "1")
    pub one: &'static str,
    /// Whether to wrap every inner term in parentheses (default: true)
    pub parenthesize: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            var_prefix: "X",
            not: "!",
            and: " & ",
            or: " v ",
            zero: "0",
            one: "1",
            parenthesize: true,
        }
    }
}

/// Renders a variable name.
pub fn render_var(var: Var, config: &RenderConfig) -> String {
    format!("{}{}", config.var_prefix, var.index())
}

/// Renders a single literal.
pub fn render_lit(lit: Lit, config: &RenderConfig) -> String {
    let var = render_var(lit.var(), config);
    if lit.is_negated() {
        format!("{}{}", config.not, var)
    } else {
        var
    }
}

fn render_terms(terms: &[Vec<Lit>], inner: &str, outer: &str, config: &RenderConfig) -> String {
    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            out.push_str(outer);
        }
        if config.parenthesize {
            out.push('(');
        }
        for (j, &lit) in term.iter().enumerate() {
            if j > 0 {
                out.push_str(inner);
            }
            out.push_str(&render_lit(lit, config));
        }
        if config.parenthesize {
            out.push(')');
        }
    }
    out
}

/// Renders an expression.
pub fn render(expr: &Expression, config: &RenderConfig) -> String {
    match expr {
        Expression::Const(false) => config.zero.to_string(),
        Expression::Const(true) => config.one.to_string(),
        Expression::Sum(terms) => render_terms(terms, config.and, config.or, config),
        Expression::Product(terms) => render_terms(terms, config.or, config.and, config),
    }
}
