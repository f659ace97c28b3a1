//! Range checks for the three numeric dataset fields.

use crate::models::{FieldCheck, MAX_KEY, MIN_KEY, ROWS_KEY, SampleConfig, ValidationReport};

/// Validate the numeric fields of a dataset configuration.
///
/// Rules:
/// - `sample_data_rows` must be an integer greater than 0
/// - `sample_data_min` must be an integer greater than or equal to 1
/// - `sample_data_max` must be an integer greater than `sample_data_min`, and
///   `sample_data_min` must itself be valid
///
/// Never fails. Absent fields are reported as [`FieldCheck::Missing`].
pub fn validate_config(config: &SampleConfig) -> ValidationReport {
    let rows = check_field(config, ROWS_KEY, |rows| rows > 0);
    let min = check_field(config, MIN_KEY, |min| min >= 1);

    let min_value = match min {
        FieldCheck::Valid => config.get(MIN_KEY).and_then(parse_int),
        _ => None,
    };
    let max = check_field(config, MAX_KEY, |max| {
        min_value.is_some_and(|min| max > min)
    });

    let report = ValidationReport { rows, min, max };
    tracing::debug!("Validation report: {:?}", report);
    report
}

fn check_field(config: &SampleConfig, key: &str, rule: impl FnOnce(i64) -> bool) -> FieldCheck {
    let Some(raw) = config.get(key) else {
        return FieldCheck::Missing;
    };

    match parse_int(raw) {
        Some(value) if rule(value) => FieldCheck::Valid,
        _ => FieldCheck::Invalid,
    }
}

pub(crate) fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rows: &str, min: &str, max: &str) -> SampleConfig {
        [(ROWS_KEY, rows), (MIN_KEY, min), (MAX_KEY, max)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_all_valid() {
        let report = validate_config(&config("100", "18", "75"));
        assert!(report.all_valid());
    }

    #[test]
    fn test_zero_rows_and_inverted_range() {
        let report = validate_config(&config("0", "5", "3"));
        assert_eq!(report.rows, FieldCheck::Invalid);
        assert_eq!(report.min, FieldCheck::Valid);
        assert_eq!(report.max, FieldCheck::Invalid);
    }

    #[test]
    fn test_max_equal_to_min_is_invalid() {
        let report = validate_config(&config("10", "5", "5"));
        assert_eq!(report.max, FieldCheck::Invalid);
    }

    #[test]
    fn test_max_depends_on_min_validity() {
        // min below 1 invalidates max even though max > min numerically
        let report = validate_config(&config("10", "0", "50"));
        assert_eq!(report.min, FieldCheck::Invalid);
        assert_eq!(report.max, FieldCheck::Invalid);

        let report = validate_config(&config("10", "abc", "50"));
        assert_eq!(report.max, FieldCheck::Invalid);
    }

    #[test]
    fn test_non_integer_values() {
        let report = validate_config(&config("ten", "1.5", ""));
        assert_eq!(report.rows, FieldCheck::Invalid);
        assert_eq!(report.min, FieldCheck::Invalid);
        assert_eq!(report.max, FieldCheck::Invalid);
    }

    #[test]
    fn test_missing_fields() {
        let report = validate_config(&SampleConfig::new());
        assert_eq!(report.rows, FieldCheck::Missing);
        assert_eq!(report.min, FieldCheck::Missing);
        assert_eq!(report.max, FieldCheck::Missing);
        assert_eq!(report.failing_fields().len(), 3);
    }

    #[test]
    fn test_signed_integers() {
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("99999999999999999999"), None);

        let report = validate_config(&config("-1", "-5", "10"));
        assert_eq!(report.rows, FieldCheck::Invalid);
        assert_eq!(report.min, FieldCheck::Invalid);
    }
}
