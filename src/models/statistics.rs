use serde::Serialize;
use std::fmt;

/// Aggregate summary of a numeric dataset.
///
/// `mean` and `median` are `None` for an empty dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub sum: f64,
    pub count: usize,
}

impl Statistics {
    /// Statistics of an empty dataset.
    pub fn empty() -> Self {
        Self {
            mean: None,
            median: None,
            sum: 0.0,
            count: 0,
        }
    }

    /// Report lines in their fixed order: mean, median, sum, count.
    pub fn report_lines(&self) -> [String; 4] {
        [
            format!("Mean: {}", format_optional(self.mean)),
            format!("Median: {}", format_optional(self.median)),
            format!("Sum: {:.1}", self.sum),
            format!("Count: {:.1}", self.count as f64),
        ]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{mean: {}, median: {}, sum: {}, count: {}}}",
            format_optional(self.mean),
            format_optional(self.median),
            self.sum,
            self.count
        )
    }
}

fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines_order() {
        let stats = Statistics {
            mean: Some(30.0),
            median: Some(30.0),
            sum: 150.0,
            count: 5,
        };

        assert_eq!(
            stats.report_lines(),
            [
                "Mean: 30.0".to_string(),
                "Median: 30.0".to_string(),
                "Sum: 150.0".to_string(),
                "Count: 5.0".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_report_lines() {
        let lines = Statistics::empty().report_lines();
        assert_eq!(lines[0], "Mean: N/A");
        assert_eq!(lines[1], "Median: N/A");
        assert_eq!(lines[2], "Sum: 0.0");
        assert_eq!(lines[3], "Count: 0.0");
    }

    #[test]
    fn test_display() {
        let stats = Statistics {
            mean: Some(2.5),
            median: None,
            sum: 5.0,
            count: 2,
        };
        assert_eq!(stats.to_string(), "{mean: 2.5, median: N/A, sum: 5, count: 2}");
    }
}
