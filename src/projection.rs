//! Fixed-width positional mode.
//!
//! Unlike the truth-table operations, the input is read position by position:
//! character `i` stands for variable `X{i}` itself, and the result is the
//! disjunction of the variables whose character is `1`.

use crate::error::{Error, Result};
use crate::render::{render_var, RenderConfig};
use crate::types::Var;

/// Input width of the positional mode.
pub const PROJECTION_WIDTH: usize = 10;

/// Disjunction of the variables at positions holding `1`, or `0` if there are none.
///
/// Only the first [`PROJECTION_WIDTH`] positions are read. Any other
/// character is ignored, and the length is not checked.
///
/// ```
/// use qmc_rs::projection::simple_projection;
///
/// assert_eq!(simple_projection("1001000001"), "X0 v X3 v X9");
/// assert_eq!(simple_projection("0000000000"), "0");
/// ```
pub fn simple_projection(bool_str: &str) -> String {
    simple_projection_with_config(bool_str, &RenderConfig::default())
}

pub fn simple_projection_with_config(bool_str: &str, config: &RenderConfig) -> String {
    let vars: Vec<String> = bool_str
        .chars()
        .enumerate()
        .take(PROJECTION_WIDTH)
        .filter(|&(_, ch)| ch == '1')
        .map(|(i, _)| render_var(Var::new(i as u32), config))
        .collect();
    if vars.is_empty() {
        config.zero.to_string()
    } else {
        vars.join(config.or)
    }
}

/// Like [`simple_projection`], but requires exactly [`PROJECTION_WIDTH`] binary characters.
pub fn simple_projection_checked(bool_str: &str) -> Result<String> {
    let len = bool_str.chars().count();
    if len != PROJECTION_WIDTH {
        return Err(Error::ProjectionLength {
            len,
            expected: PROJECTION_WIDTH,
        });
    }
    if let Some((position, ch)) = bool_str
        .chars()
        .enumerate()
        .find(|&(_, ch)| ch != '0' && ch != '1')
    {
        return Err(Error::InvalidChar { ch, position });
    }
    Ok(simple_projection(bool_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection() {
        assert_eq!(simple_projection("1001000001"), "X0 v X3 v X9");
        assert_eq!(simple_projection("0100000000"), "X1");
        assert_eq!(simple_projection("0000000000"), "0");
    }

    #[test]
    fn test_projection_lenient() {
        assert_eq!(simple_projection(""), "0");
        assert_eq!(simple_projection("1x1"), "X0 v X2");
    }

    #[test]
    fn test_projection_ignores_positions_past_width() {
        assert_eq!(simple_projection("00000000001"), "0");
        assert_eq!(simple_projection("100000000111"), "X0 v X9");
    }

    #[test]
    fn test_projection_checked() {
        assert_eq!(
            simple_projection_checked("1111111111").unwrap(),
            "X0 v X1 v X2 v X3 v X4 v X5 v X6 v X7 v X8 v X9"
        );
        assert_eq!(
            simple_projection_checked("101"),
            Err(Error::ProjectionLength { len: 3, expected: 10 })
        );
        assert_eq!(
            simple_projection_checked("10010000a1"),
            Err(Error::InvalidChar { ch: 'a', position: 8 })
        );
    }

    #[test]
    fn test_projection_config() {
        let config = RenderConfig {
            var_prefix: "a",
            or: " | ",
            ..RenderConfig::default()
        };
        assert_eq!(simple_projection_with_config("0110000000", &config), "a1 | a2");
    }
}
