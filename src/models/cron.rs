//! Syntactic validation of five-field cron expressions.
//!
//! Parsing is delegated to `croner`. Schedules are never evaluated.

use croner::Cron;

const FIELD_COUNT: usize = 5;

/// Validate a cron expression such as `*/30 * * * *`.
///
/// Exactly five fields (no seconds), each made of digits, `*`, `/`, `,`
/// and `-`.
pub fn validate(expr: &str) -> Result<(), String> {
    let fields = expr.split_whitespace().count();
    if fields != FIELD_COUNT {
        return Err(format!("expected 5 fields, got {} in {:?}", fields, expr));
    }

    if let Some(c) = expr
        .chars()
        .find(|c| !(c.is_ascii_digit() || c.is_whitespace() || matches!(c, '*' | '/' | ',' | '-')))
    {
        return Err(format!("unexpected {:?} in {:?}", c, expr));
    }

    Cron::new(expr)
        .parse()
        .map(|_| ())
        .map_err(|e| format!("{:?}: {}", expr, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_schedules() {
        for expr in [
            "0 8 * * *",
            "0 23 * * *",
            "*/30 * * * *",
            "15,45 9-17 * * 1-5",
            "0 0 1 1 0",
            "0 0 * * 7",
            "0-59/5 * * * *",
        ] {
            assert!(validate(expr).is_ok(), "{}", expr);
        }
    }

    #[test]
    fn test_rejects_wrong_field_count() {
        assert!(validate("0 8 * *").is_err());
        assert!(validate("0 8 * * * *").is_err());
        assert!(validate("").is_err());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(validate("60 * * * *").is_err());
        assert!(validate("* 24 * * *").is_err());
        assert!(validate("* * 0 * *").is_err());
        assert!(validate("* * * 13 *").is_err());
        assert!(validate("* * * * 8").is_err());
    }

    #[test]
    fn test_rejects_bad_tokens() {
        assert!(validate("*/0 * * * *").is_err());
        assert!(validate("@daily").is_err());
        assert!(validate("@daily * * * *").is_err());
        assert!(validate("5-1 * * * *").is_err());
        assert!(validate("a * * * *").is_err());
        assert!(validate("0 8 * * MON").is_err());
    }

    #[test]
    fn test_error_names_the_expression() {
        let err = validate("0 25 * * *").unwrap_err();
        assert!(err.contains("0 25 * * *"), "{}", err);
    }
}
