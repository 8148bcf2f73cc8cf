//! Option and catalog types
//!
//! A catalog is an ordered list of entries, each either a single option or
//! a named group of options. Options are identified by their label: no two
//! options in one catalog may share a label. That is a caller contract and
//! is not checked at runtime.

use serde::{Deserialize, Serialize};

/// A single selectable option
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComboOption<V = String> {
    /// Text shown to the user and matched against the search value
    pub label: String,
    /// Caller payload, never inspected by the combo box
    pub value: V,
    /// Group this option belongs to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_label: Option<String>,
}

impl<V> ComboOption<V> {
    /// Create an ungrouped option
    #[must_use]
    pub fn new(label: impl Into<String>, value: V) -> Self {
        Self {
            label: label.into(),
            value,
            group_label: None,
        }
    }

    /// Attach the option to a group
    #[must_use]
    pub fn with_group(mut self, group_label: impl Into<String>) -> Self {
        self.group_label = Some(group_label.into());
        self
    }

    /// Whether `other` is the same option (label identity)
    #[must_use]
    pub fn same_option(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl ComboOption<String> {
    /// Create an option whose value is its own label
    #[must_use]
    pub fn labelled(label: impl Into<String>) -> Self {
        let label = label.into();
        Self::new(label.clone(), label)
    }
}

/// A named group of options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup<V = String> {
    /// Group heading; never matched against the search value
    pub label: String,
    /// Member options in declaration order
    pub options: Vec<ComboOption<V>>,
}

impl<V> OptionGroup<V> {
    /// Create a group from its members
    #[must_use]
    pub fn new(label: impl Into<String>, options: Vec<ComboOption<V>>) -> Self {
        Self {
            label: label.into(),
            options,
        }
    }
}

/// One entry of a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogEntry<V = String> {
    /// A group of options
    Group(OptionGroup<V>),
    /// A standalone option
    Option(ComboOption<V>),
}

impl<V> From<ComboOption<V>> for CatalogEntry<V> {
    fn from(option: ComboOption<V>) -> Self {
        Self::Option(option)
    }
}

impl<V> From<OptionGroup<V>> for CatalogEntry<V> {
    fn from(group: OptionGroup<V>) -> Self {
        Self::Group(group)
    }
}

/// Build a flat, ungrouped catalog of label-valued options
#[must_use]
pub fn labels_catalog<I, S>(labels: I) -> Vec<CatalogEntry>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    labels
        .into_iter()
        .map(|label| CatalogEntry::Option(ComboOption::labelled(label)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labelled_uses_label_as_value() {
        let option = ComboOption::labelled("Red");
        assert_eq!(option.label, "Red");
        assert_eq!(option.value, "Red");
        assert!(option.group_label.is_none());
    }

    #[test]
    fn test_same_option_ignores_value() {
        let a = ComboOption::new("Red", 1);
        let b = ComboOption::new("Red", 2);
        let c = ComboOption::new("Green", 1);
        assert!(a.same_option(&b));
        assert!(!a.same_option(&c));
    }

    #[test]
    fn test_untagged_entry_deserializes_groups_and_options() {
        let json = r#"[
            {"label": "Red", "value": "red"},
            {"label": "Fruit", "options": [{"label": "Apple", "value": "apple"}]}
        ]"#;
        let entries: Vec<CatalogEntry> = serde_json::from_str(json).unwrap();

        assert!(matches!(&entries[0], CatalogEntry::Option(o) if o.label == "Red"));
        match &entries[1] {
            CatalogEntry::Group(group) => {
                assert_eq!(group.label, "Fruit");
                assert_eq!(group.options.len(), 1);
            }
            CatalogEntry::Option(_) => panic!("expected a group"),
        }
    }
}
