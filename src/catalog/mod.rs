//! Catalog files
//!
//! Loads the option catalog for the `pillbox` binary. Three formats are
//! recognised by extension:
//!
//! - `.toml`: an `entries` array; entries with an `options` array are groups
//! - `.json`: a top-level array with the same entry shape
//! - `.txt`: one label per line, blank lines and `#` comments skipped
//!
//! ```toml
//! [[entries]]
//! label = "Red"
//!
//! [[entries]]
//! label = "Fruit"
//! options = [{ label = "Apple" }, { label = "Banana", value = "banana" }]
//! ```
//!
//! An option's `value` defaults to its label.

mod error;

pub use error::{CatalogError, Result};

use crate::combo::{CatalogEntry, ComboOption, OptionGroup, flatten_catalog, fold_eq};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    entries: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Group {
        label: String,
        options: Vec<RawOption>,
    },
    Option(RawOption),
}

#[derive(Debug, Deserialize)]
struct RawOption {
    label: String,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    group: Option<String>,
}

impl RawOption {
    fn into_option(self) -> ComboOption {
        let value = self.value.unwrap_or_else(|| self.label.clone());
        ComboOption {
            label: self.label,
            value,
            group_label: self.group,
        }
    }
}

fn convert(raw: Vec<RawEntry>) -> Result<Vec<CatalogEntry>> {
    let mut entries = Vec::with_capacity(raw.len());
    for (index, entry) in raw.into_iter().enumerate() {
        let entry = match entry {
            RawEntry::Group { label, options } => {
                if label.trim().is_empty() || options.iter().any(|o| o.label.trim().is_empty()) {
                    return Err(CatalogError::EmptyLabel(index));
                }
                CatalogEntry::Group(OptionGroup::new(
                    label,
                    options.into_iter().map(RawOption::into_option).collect(),
                ))
            }
            RawEntry::Option(option) => {
                if option.label.trim().is_empty() {
                    return Err(CatalogError::EmptyLabel(index));
                }
                CatalogEntry::Option(option.into_option())
            }
        };
        entries.push(entry);
    }
    Ok(entries)
}

/// Parse a TOML catalog
///
/// # Errors
///
/// Returns `CatalogError` if the document is malformed or a label is blank.
pub fn parse_toml(text: &str) -> Result<Vec<CatalogEntry>> {
    let file: CatalogFile = toml::from_str(text)?;
    convert(file.entries)
}

/// Parse a JSON catalog
///
/// # Errors
///
/// Returns `CatalogError` if the document is malformed or a label is blank.
pub fn parse_json(text: &str) -> Result<Vec<CatalogEntry>> {
    let raw: Vec<RawEntry> = serde_json::from_str(text)?;
    convert(raw)
}

/// Parse a plain list of labels
#[must_use]
pub fn parse_lines(text: &str) -> Vec<CatalogEntry> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| CatalogEntry::Option(ComboOption::labelled(line)))
        .collect()
}

/// Load a catalog file, picking the format from its extension
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read, has an unknown
/// extension, or fails to parse.
pub fn load(path: &Path) -> Result<Vec<CatalogEntry>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let entries = match extension.as_deref() {
        Some("toml") => parse_toml(&fs::read_to_string(path)?)?,
        Some("json") => parse_json(&fs::read_to_string(path)?)?,
        Some("txt") => parse_lines(&fs::read_to_string(path)?),
        _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
    };

    let duplicates = duplicate_labels(&entries);
    if !duplicates.is_empty() {
        tracing::warn!(path = %path.display(), ?duplicates, "catalog has duplicate labels");
    }

    Ok(entries)
}

/// Labels that occur more than once across the flattened catalog
///
/// Labels identify options, so duplicates make selection ambiguous. The
/// combo box does not reject them; this is for reporting.
#[must_use]
pub fn duplicate_labels<V: Clone>(catalog: &[CatalogEntry<V>]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for option in flatten_catalog(catalog) {
        if !seen.insert(option.label.clone()) && !duplicates.contains(&option.label) {
            duplicates.push(option.label);
        }
    }
    duplicates
}

/// Find the option whose label matches `label`, ignoring ASCII case
#[must_use]
pub fn find_option<V: Clone>(catalog: &[CatalogEntry<V>], label: &str) -> Option<ComboOption<V>> {
    flatten_catalog(catalog)
        .into_iter()
        .find(|option| fold_eq(&option.label, label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    const TOML_CATALOG: &str = r#"
[[entries]]
label = "Red"

[[entries]]
label = "Fruit"
options = [{ label = "Apple" }, { label = "Banana", value = "banana" }]

[[entries]]
label = "Lime"
group = "Citrus"
"#;

    #[test]
    fn test_parse_toml_groups_and_defaults() {
        let entries = parse_toml(TOML_CATALOG).unwrap();
        assert_eq!(entries.len(), 3);

        let flat = flatten_catalog(&entries);
        let labels: Vec<&str> = flat.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Red", "Apple", "Banana", "Lime"]);
        assert_eq!(flat[0].value, "Red");
        assert_eq!(flat[2].value, "banana");
        assert_eq!(flat[1].group_label.as_deref(), Some("Fruit"));
        assert_eq!(flat[3].group_label.as_deref(), Some("Citrus"));
    }

    #[test]
    fn test_parse_json() {
        let json = r#"[{"label": "Red"}, {"label": "Shapes", "options": [{"label": "Circle"}]}]"#;
        let flat = flatten_catalog(&parse_json(json).unwrap());
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[1].group_label.as_deref(), Some("Shapes"));
    }

    #[test]
    fn test_empty_label_rejected() {
        let err = parse_json(r#"[{"label": "Red"}, {"label": "  "}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyLabel(1)));
    }

    #[test]
    fn test_parse_lines_skips_comments() {
        let entries = parse_lines("# colours\nRed\n\n  Green  \n");
        let flat = flatten_catalog(&entries);
        let labels: Vec<&str> = flat.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Red", "Green"]);
    }

    #[test]
    fn test_duplicate_labels() {
        let entries = parse_lines("Red\nGreen\nRed\nRed\n");
        assert_eq!(duplicate_labels(&entries), vec!["Red".to_string()]);
    }

    #[test]
    fn test_find_option_keeps_group() {
        let entries = parse_toml(TOML_CATALOG).unwrap();
        let apple = find_option(&entries, "apple").unwrap();
        assert_eq!(apple.label, "Apple");
        assert_eq!(apple.group_label.as_deref(), Some("Fruit"));
        assert!(find_option(&entries, "Pear").is_none());
    }

    #[test]
    fn test_load_by_extension() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(TOML_CATALOG.as_bytes()).unwrap();
        let entries = load(file.path()).unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_load_unknown_extension() {
        let file = Builder::new().suffix(".yaml").tempfile().unwrap();
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedFormat(_)));
    }
}
