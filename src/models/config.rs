use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Number of rows to generate.
pub const ROWS_KEY: &str = "sample_data_rows";

/// Inclusive lower bound of generated values.
pub const MIN_KEY: &str = "sample_data_min";

/// Inclusive upper bound of generated values.
pub const MAX_KEY: &str = "sample_data_max";

/// Raw configuration parsed from a `key=value` file.
///
/// Values are kept as strings; each consumer decides how strictly to interpret them.
/// Later insertions of the same key overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SampleConfig {
    entries: IndexMap<String, String>,
}

impl SampleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for SampleConfig
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (key, value) in iter {
            config.insert(key, value);
        }
        config
    }
}

/// Outcome of checking a single configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldCheck {
    Valid,
    /// Present but not an integer, or out of range.
    Invalid,
    /// Not present in the configuration at all.
    Missing,
}

impl FieldCheck {
    /// Collapse to the boolean pass/fail used by the validation mapping.
    ///
    /// Both `Invalid` and `Missing` map to `false`.
    pub fn is_valid(self) -> bool {
        matches!(self, FieldCheck::Valid)
    }
}

/// Per-field validation outcome for the three numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub rows: FieldCheck,
    pub min: FieldCheck,
    pub max: FieldCheck,
}

impl ValidationReport {
    /// Field names paired with their outcome, in a fixed order.
    pub fn fields(&self) -> [(&'static str, FieldCheck); 3] {
        [(ROWS_KEY, self.rows), (MIN_KEY, self.min), (MAX_KEY, self.max)]
    }

    /// The boolean validation mapping keyed by field name.
    pub fn to_map(&self) -> IndexMap<String, bool> {
        self.fields()
            .into_iter()
            .map(|(key, check)| (key.to_string(), check.is_valid()))
            .collect()
    }

    /// Names of the fields that did not pass.
    pub fn failing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, check)| !check.is_valid())
            .map(|(key, _)| key)
            .collect()
    }

    pub fn all_valid(&self) -> bool {
        self.failing_fields().is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields()
            .iter()
            .map(|(key, check)| format!("{}: {}", key, check.is_valid()))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_insert_overwrites() {
        let mut config = SampleConfig::new();
        config.insert(ROWS_KEY, "10");
        config.insert(MIN_KEY, "1");
        config.insert(ROWS_KEY, "20");

        assert_eq!(config.len(), 2);
        assert_eq!(config.get(ROWS_KEY), Some("20"));
        // Key keeps its original position
        assert_eq!(config.iter().next(), Some((ROWS_KEY, "20")));
    }

    #[test]
    fn test_from_iter() {
        let config: SampleConfig = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(config.get("a"), Some("1"));
        assert_eq!(config.get("missing"), None);
        assert!(!config.is_empty());
    }

    #[test]
    fn test_field_check_collapse() {
        assert!(FieldCheck::Valid.is_valid());
        assert!(!FieldCheck::Invalid.is_valid());
        assert!(!FieldCheck::Missing.is_valid());
    }

    #[test]
    fn test_report_map_and_failures() {
        let report = ValidationReport {
            rows: FieldCheck::Invalid,
            min: FieldCheck::Valid,
            max: FieldCheck::Missing,
        };

        let map = report.to_map();
        assert_eq!(map.len(), 3);
        assert_eq!(map[ROWS_KEY], false);
        assert_eq!(map[MIN_KEY], true);
        assert_eq!(map[MAX_KEY], false);
        assert_eq!(report.failing_fields(), vec![ROWS_KEY, MAX_KEY]);
        assert!(!report.all_valid());
    }

    #[test]
    fn test_report_display() {
        let report = ValidationReport {
            rows: FieldCheck::Valid,
            min: FieldCheck::Valid,
            max: FieldCheck::Valid,
        };
        assert_eq!(
            report.to_string(),
            "{sample_data_rows: true, sample_data_min: true, sample_data_max: true}"
        );
    }
}
