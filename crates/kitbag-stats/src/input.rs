//! Free-form numeric input as typed at the prompt.

/// Numbers recovered from one line of input, plus the tokens that were
/// skipped, both in the order they appeared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedInput {
    pub numbers: Vec<f64>,
    pub rejected: Vec<String>,
}

/// Split `line` on whitespace and commas and parse each token as `f64`.
///
/// A bad token never aborts the line; it is recorded in `rejected` and
/// parsing carries on with the next one. `NaN` has no place in an ordering
/// and is rejected as well.
pub fn parse_numbers(line: &str) -> ParsedInput {
    let mut parsed = ParsedInput::default();

    for token in line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        match token.parse::<f64>() {
            Ok(value) if !value.is_nan() => parsed.numbers.push(value),
            _ => {
                tracing::debug!(token, "skipping non-numeric token");
                parsed.rejected.push(token.to_string());
            }
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_spaces() {
        let parsed = parse_numbers("3 1 4 1 5");
        assert_eq!(parsed.numbers, vec![3.0, 1.0, 4.0, 1.0, 5.0]);
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_commas_and_mixed_separators() {
        let parsed = parse_numbers("1, 2,3\t4  ,,5");
        assert_eq!(parsed.numbers, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_invalid_tokens_are_skipped_and_reported() {
        let parsed = parse_numbers("1 two 3 4x -2.5");
        assert_eq!(parsed.numbers, vec![1.0, 3.0, -2.5]);
        assert_eq!(parsed.rejected, vec!["two".to_string(), "4x".to_string()]);
    }

    #[test]
    fn test_nan_is_rejected() {
        let parsed = parse_numbers("nan 1 NaN");
        assert_eq!(parsed.numbers, vec![1.0]);
        assert_eq!(parsed.rejected.len(), 2);
    }

    #[test]
    fn test_exponents_and_signs() {
        let parsed = parse_numbers("1e3 +2 -0.5");
        assert_eq!(parsed.numbers, vec![1000.0, 2.0, -0.5]);
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_numbers("   ,  "), ParsedInput::default());
    }
}
