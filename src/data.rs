//! Option model and filtering for the typeahead field.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::matching::IgnoreCase;

/// A selectable entry in the suggestion list.
///
/// `value` identifies the option; `label` is the human-readable text the
/// filter searches over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeaheadOption {
    pub value: String,
    pub label: String,
}

impl TypeaheadOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Filter `data` down to the options whose label contains `query` as a
/// case-insensitive substring.
///
/// Returns indices into `data` in their original order, so callers can
/// hand back the exact source option on selection. An empty query matches
/// every option.
pub fn filter_options(data: &[TypeaheadOption], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..data.len()).collect();
    }

    data.iter()
        .enumerate()
        .filter(|(_, option)| option.label.contains_ignore_case(query))
        .map(|(idx, _)| idx)
        .collect()
}

/// Load an option list from a JSON file containing an array of
/// `{"value": ..., "label": ...}` objects.
pub fn load_options(path: &Path) -> Result<Vec<TypeaheadOption>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file: {}", path.display()))?;
    let options: Vec<TypeaheadOption> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse options file: {}", path.display()))?;
    Ok(options)
}

/// Built-in option list used by the demo when no file is given.
pub fn sample_options() -> Vec<TypeaheadOption> {
    [
        "Amsterdam",
        "Berlin",
        "Copenhagen",
        "Dublin",
        "Helsinki",
        "Lisbon",
        "Madrid",
        "Oslo",
        "Paris",
        "Stockholm",
        "Vienna",
        "Warsaw",
    ]
    .iter()
    .map(|city| TypeaheadOption::new(city.to_lowercase(), *city))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fake_options(count: usize) -> Vec<TypeaheadOption> {
        (0..count)
            .map(|i| TypeaheadOption::new(format!("value-{i}"), format!("label-{i}")))
            .collect()
    }

    #[test]
    fn test_empty_query_matches_all() {
        let data = fake_options(10);
        assert_eq!(filter_options(&data, ""), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_narrows_to_single_match() {
        let data = fake_options(10);
        assert_eq!(filter_options(&data, "label-3"), vec![3]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let data = fake_options(10);
        assert_eq!(filter_options(&data, "LABEL-3"), vec![3]);
        assert_eq!(filter_options(&data, "Label").len(), 10);
    }

    #[test]
    fn test_filter_preserves_data_order() {
        let data = vec![
            TypeaheadOption::new("b", "beta"),
            TypeaheadOption::new("a", "alpha"),
            TypeaheadOption::new("ab", "alphabet"),
        ];
        assert_eq!(filter_options(&data, "alpha"), vec![1, 2]);
        assert_eq!(filter_options(&data, "a"), vec![0, 1, 2]);
    }

    #[test]
    fn test_filter_no_match_returns_empty() {
        let data = fake_options(10);
        assert!(filter_options(&data, "No Result").is_empty());
    }

    #[test]
    fn test_filter_empty_data() {
        assert!(filter_options(&[], "anything").is_empty());
        assert!(filter_options(&[], "").is_empty());
    }

    #[test]
    fn test_filter_unicode_labels() {
        let data = vec![
            TypeaheadOption::new("1", "Café"),
            TypeaheadOption::new("2", "Tea house"),
        ];
        assert_eq!(filter_options(&data, "CAFÉ"), vec![0]);
    }

    #[test]
    fn test_load_options_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"[{{"value": "value-0", "label": "label-0"}}, {{"value": "value-1", "label": "label-1"}}]"#
        )
        .unwrap();

        let options = load_options(file.path()).unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0], TypeaheadOption::new("value-0", "label-0"));
        assert_eq!(options[1], TypeaheadOption::new("value-1", "label-1"));
    }

    #[test]
    fn test_load_options_missing_file() {
        let err = load_options(Path::new("/nonexistent/options.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read options file"));
    }

    #[test]
    fn test_load_options_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();

        let err = load_options(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse options file"));
    }

    #[test]
    fn test_sample_options_unique_values() {
        let options = sample_options();
        assert!(!options.is_empty());

        let mut values: Vec<_> = options.iter().map(|o| o.value.clone()).collect();
        values.sort();
        values.dedup();
        assert_eq!(values.len(), options.len());
    }
}
