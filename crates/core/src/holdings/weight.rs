/// Converts a reported weight such as `"3.25%"` to a number of percent.
///
/// Only a single trailing `%` is stripped before conversion. Text that does not
/// convert to a finite number yields `0.0`, so one bad cell never aborts an
/// aggregation.
pub fn normalize_weight(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let numeric = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    match numeric.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_strings() {
        assert_eq!(normalize_weight("3.25%"), 3.25);
        assert_eq!(normalize_weight("10%"), 10.0);
        assert_eq!(normalize_weight("0.01%"), 0.01);
        assert_eq!(normalize_weight(" 7.5% "), 7.5);
    }

    #[test]
    fn test_plain_numbers_are_accepted() {
        assert_eq!(normalize_weight("4.2"), 4.2);
        assert_eq!(normalize_weight("0"), 0.0);
    }

    #[test]
    fn test_unparseable_defaults_to_zero() {
        assert_eq!(normalize_weight("N/A"), 0.0);
        assert_eq!(normalize_weight(""), 0.0);
        assert_eq!(normalize_weight("%"), 0.0);
        assert_eq!(normalize_weight("--"), 0.0);
        assert_eq!(normalize_weight("NaN"), 0.0);
        assert_eq!(normalize_weight("inf%"), 0.0);
    }

    #[test]
    fn test_only_one_trailing_percent_is_stripped() {
        assert_eq!(normalize_weight("5%%"), 0.0);
        assert_eq!(normalize_weight("%5"), 0.0);
    }
}
